use dioxus::prelude::*;

mod actions;
mod api;
mod components;
mod db;
mod diagnostics;
mod store;

use components::Route;

const APP_CSS: Asset = asset!("/assets/styling/app.css");

fn main() {
    if let Err(e) = dioxus::logger::init(dioxus::logger::tracing::Level::INFO) {
        eprintln!("logger already initialized: {e}");
    }
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Title { "Dim" }
        document::Meta { name: "theme-color", content: "#1b1b1f" }
        document::Stylesheet { href: APP_CSS }

        Router::<Route> {}
    }
}
