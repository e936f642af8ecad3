use crate::components::{Icon, Route};
use crate::db::ClientSettings;
use crate::store::Store;
use dioxus::prelude::*;

#[component]
pub fn Sidebar() -> Element {
    let store = use_context::<Signal<Store>>();
    let settings = use_context::<Signal<ClientSettings>>();
    let route = use_route::<Route>();

    let libraries = store.read().library.libraries.items.clone();
    let server_url = settings.read().server_url.clone();

    rsx! {
        aside { class: "sidebar",
            // Logo
            div { class: "sidebar-brand",
                div { class: "sidebar-logo", "D" }
                div {
                    h1 { "Dim" }
                    p { class: "sidebar-server", "{server_url}" }
                }
            }

            nav { class: "sidebar-nav",
                NavItem {
                    icon: "home",
                    label: "Dashboard",
                    to: Route::Dashboard {},
                    active: matches!(route, Route::Dashboard {}),
                }

                div { class: "sidebar-section",
                    p { class: "sidebar-heading", "Libraries" }
                    for library in libraries {
                        NavItem {
                            key: "{library.id}",
                            icon: "folder",
                            label: library.name.clone(),
                            to: Route::LibraryPage { id: library.id },
                            active: route == Route::LibraryPage { id: library.id },
                        }
                    }
                }
            }

            div { class: "sidebar-footer",
                NavItem {
                    icon: "settings",
                    label: "Settings",
                    to: Route::Settings {},
                    active: matches!(route, Route::Settings {}),
                }
            }
        }
    }
}

#[component]
fn NavItem(icon: String, label: String, to: Route, active: bool) -> Element {
    let active_class = if active { "nav-item active" } else { "nav-item" };

    rsx! {
        Link { class: "{active_class}", to: to.clone(),
            Icon { name: icon.clone(), class: "icon".to_string() }
            span { "{label}" }
        }
    }
}
