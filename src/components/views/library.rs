use crate::actions;
use crate::api::LibraryId;
use crate::components::views::MediaCard;
use crate::components::{spawn_action, Icon, StoreDispatch};
use crate::db::ClientSettings;
use crate::store::Store;
use dioxus::prelude::*;

#[component]
pub fn LibraryPage(id: LibraryId) -> Element {
    let store = use_context::<Signal<Store>>();
    let settings = use_context::<Signal<ClientSettings>>();
    let dispatch = use_context::<StoreDispatch>();

    use_effect(use_reactive((&id,), move |(id,)| {
        let mut markers = dispatch;
        actions::fetch_library_info(&mut markers);
        actions::fetch_library_media_marker(&mut markers);

        spawn_action(settings, dispatch, move |api, token, mut dispatch| async move {
            actions::fetch_library_media(&api, &token, id, &mut dispatch).await;
        });
        spawn_action(settings, dispatch, move |api, token, mut dispatch| async move {
            actions::fetch_library_unmatched(&api, &token, id, &mut dispatch).await;
        });
    }));

    let state = store.read();
    let library = state.library.get(id).cloned();
    let media = state.library.media.get(&id).cloned().unwrap_or_default();
    let unmatched = state.library.unmatched.get(&id).cloned().unwrap_or_default();
    drop(state);

    let title = library
        .as_ref()
        .map(|library| library.name.clone())
        .unwrap_or_else(|| format!("Library {id}"));

    rsx! {
        div { class: "page",
            header { class: "page-header",
                h1 { class: "page-title", "{title}" }
                if let Some(library) = library {
                    p { class: "page-subtitle", "{library.media_type.label()} · {library.location}" }
                }
            }

            section { class: "panel",
                h2 { class: "panel-title", "Media" }
                if media.fetching {
                    div { class: "status",
                        Icon { name: "loader".to_string(), class: "icon spin".to_string() }
                        span { "Loading media..." }
                    }
                } else if let Some(error) = media.error {
                    p { class: "error", "Could not load media: {error}" }
                } else if media.items.is_empty() {
                    p { class: "empty", "Nothing matched in this library yet." }
                } else {
                    div { class: "media-grid",
                        for entry in media.items {
                            MediaCard { key: "{entry.id}", media: entry.clone() }
                        }
                    }
                }
            }

            section { class: "panel",
                h2 { class: "panel-title", "Unmatched" }
                if unmatched.fetching {
                    div { class: "status",
                        Icon { name: "loader".to_string(), class: "icon spin".to_string() }
                        span { "Loading unmatched files..." }
                    }
                } else if let Some(error) = unmatched.error {
                    p { class: "error", "Could not load unmatched files: {error}" }
                } else if unmatched.items.is_empty() {
                    p { class: "empty", "Every file has been matched." }
                } else {
                    ul { class: "unmatched-list",
                        for file in unmatched.items {
                            li { key: "{file.id}", class: "unmatched-file",
                                Icon { name: "file-video".to_string(), class: "icon".to_string() }
                                span { title: "{file.target_file}", "{file.file_name()}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
