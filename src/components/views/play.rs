use crate::api::MediaFileId;
use crate::components::{Icon, Route};
use dioxus::prelude::*;

#[component]
pub fn Play(file_id: MediaFileId) -> Element {
    rsx! {
        div { class: "page",
            header { class: "page-header",
                h1 { class: "page-title", "Now playing" }
                p { class: "page-subtitle", "File #{file_id}" }
            }
            section { class: "panel player-placeholder",
                Icon { name: "file-video".to_string(), class: "icon icon-large".to_string() }
                p { "Playback is handled by the server's stream endpoints." }
                Link { class: "btn", to: Route::Dashboard {}, "Back to libraries" }
            }
        }
    }
}
