use crate::actions;
use crate::api::{Library, MediaType, NewLibrary};
use crate::components::{spawn_action, Icon, Route, StoreDispatch};
use crate::db::ClientSettings;
use crate::store::Store;
use dioxus::prelude::*;

#[component]
pub fn Dashboard() -> Element {
    let store = use_context::<Signal<Store>>();

    let state = store.read().library.clone();
    let libraries = state.libraries.items.clone();

    rsx! {
        div { class: "page",
            header { class: "page-header",
                h1 { class: "page-title", "Libraries" }
                p { class: "page-subtitle", "Folders the server scans for movies and shows" }
            }

            section { class: "panel",
                if state.libraries.fetching {
                    div { class: "status",
                        Icon { name: "loader".to_string(), class: "icon spin".to_string() }
                        span { "Loading libraries..." }
                    }
                } else if let Some(error) = state.libraries.error.clone() {
                    p { class: "error", "Could not load libraries: {error}" }
                } else if libraries.is_empty() {
                    p { class: "empty", "No libraries yet." }
                } else {
                    ul { class: "library-list",
                        for library in libraries {
                            LibraryRow { key: "{library.id}", library: library.clone() }
                        }
                    }
                }

                if let Some(error) = state.del_library.error.clone() {
                    p { class: "error", "Delete failed: {error}" }
                }
            }

            NewLibraryForm {}
        }
    }
}

#[component]
fn LibraryRow(library: Library) -> Element {
    let settings = use_context::<Signal<ClientSettings>>();
    let dispatch = use_context::<StoreDispatch>();
    let store = use_context::<Signal<Store>>();
    let deleting = store.read().library.del_library.pending;
    let id = library.id;

    let on_delete = move |_| {
        spawn_action(settings, dispatch, move |api, token, mut dispatch| async move {
            actions::del_library(&api, &token, id, &mut dispatch).await;
            if store.peek().library.del_library.error.is_none() {
                actions::fetch_libraries(&api, &token, &mut dispatch).await;
            }
        });
    };

    rsx! {
        li { class: "library-row",
            Link { class: "library-link", to: Route::LibraryPage { id },
                Icon { name: "folder".to_string(), class: "icon".to_string() }
                div {
                    p { class: "library-name", "{library.name}" }
                    p { class: "library-meta", "{library.media_type.label()} · {library.location}" }
                }
            }
            button {
                class: "btn btn-icon",
                aria_label: "Delete library",
                disabled: deleting,
                onclick: on_delete,
                Icon { name: "trash".to_string(), class: "icon".to_string() }
            }
        }
    }
}

#[component]
fn NewLibraryForm() -> Element {
    let settings = use_context::<Signal<ClientSettings>>();
    let dispatch = use_context::<StoreDispatch>();
    let store = use_context::<Signal<Store>>();

    let mut name = use_signal(String::new);
    let mut location = use_signal(String::new);
    let mut media_type = use_signal(MediaType::default);

    let status = store.read().library.new_library.clone();
    let can_submit = !name().trim().is_empty() && !location().trim().is_empty() && !status.pending;

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let data = NewLibrary {
            name: name().trim().to_string(),
            location: location().trim().to_string(),
            media_type: media_type(),
        };
        if data.name.is_empty() || data.location.is_empty() {
            return;
        }

        spawn_action(settings, dispatch, move |api, token, mut dispatch| async move {
            actions::new_library(&api, &token, &data, &mut dispatch).await;
            if store.peek().library.new_library.error.is_none() {
                name.set(String::new());
                location.set(String::new());
                actions::fetch_libraries(&api, &token, &mut dispatch).await;
            }
        });
    };

    rsx! {
        section { class: "panel",
            h2 { class: "panel-title", "Add library" }
            form { class: "form", onsubmit: on_submit,
                label { class: "field",
                    span { "Name" }
                    input {
                        r#type: "text",
                        placeholder: "Movies",
                        value: name(),
                        oninput: move |e| name.set(e.value()),
                    }
                }
                label { class: "field",
                    span { "Location" }
                    input {
                        r#type: "text",
                        placeholder: "/media/movies",
                        value: location(),
                        oninput: move |e| location.set(e.value()),
                    }
                }
                label { class: "field",
                    span { "Type" }
                    select {
                        value: if media_type() == MediaType::Tv { "tv" } else { "movie" },
                        onchange: move |e| {
                            media_type.set(if e.value() == "tv" { MediaType::Tv } else { MediaType::Movie });
                        },
                        option { value: "movie", "{MediaType::Movie.label()}" }
                        option { value: "tv", "{MediaType::Tv.label()}" }
                    }
                }
                button { class: "btn btn-primary", r#type: "submit", disabled: !can_submit,
                    Icon { name: "plus".to_string(), class: "icon".to_string() }
                    span { "Add" }
                }
            }
            if let Some(error) = status.error {
                p { class: "error", "Could not create library: {error}" }
            }
        }
    }
}
