use crate::api::MediaSummary;
use crate::components::{Icon, SelectFileController, SelectMediaFile};
use crate::db::ClientSettings;
use crate::store::Store;
use dioxus::prelude::*;

/// Poster card for one media entry. Clicking it plays the entry, asking
/// which file to use when the entry has several.
#[component]
pub fn MediaCard(media: MediaSummary) -> Element {
    rsx! {
        SelectMediaFile { media_id: media.id, title: media.name.clone(),
            MediaCardButton { media: media.clone() }
        }
    }
}

#[component]
fn MediaCardButton(media: MediaSummary) -> Element {
    let mut controller = use_context::<SelectFileController>();
    let store = use_context::<Signal<Store>>();
    let settings = use_context::<Signal<ClientSettings>>();

    let poster = media.poster_url(&settings.read().server_url);
    let loading = controller.current_id() == Some(media.id)
        && store
            .read()
            .media
            .get(&media.id)
            .is_some_and(|entry| entry.files.fetching);

    rsx! {
        div { class: "media-card",
            button {
                class: "media-card-poster",
                onclick: move |_| controller.set_clicked(true),
                if let Some(poster) = poster {
                    img { src: "{poster}", alt: "{media.name}" }
                } else {
                    div { class: "media-card-placeholder",
                        Icon { name: "file-video".to_string(), class: "icon".to_string() }
                    }
                }
                if loading {
                    div { class: "media-card-busy",
                        Icon { name: "loader".to_string(), class: "icon spin".to_string() }
                    }
                }
            }
            div { class: "media-card-footer",
                p { class: "media-card-title", "{media.name}" }
                button {
                    class: "btn btn-icon",
                    title: "Choose a file",
                    onclick: move |_| controller.open(),
                    Icon { name: "server".to_string(), class: "icon".to_string() }
                }
            }
        }
    }
}
