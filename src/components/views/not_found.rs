use crate::components::Route;
use dioxus::prelude::*;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        div { class: "page not-found",
            h1 { class: "page-title", "Nothing here" }
            p { class: "page-subtitle", "/{path} does not exist." }
            Link { class: "btn", to: Route::Dashboard {}, "Back to libraries" }
        }
    }
}
