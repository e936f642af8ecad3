use crate::actions;
use crate::components::{run_event_socket, view_label, Route, Sidebar, StoreDispatch};
use crate::db::{initialize_database, load_settings, ClientSettings};
use crate::store::Store;
use dioxus::prelude::*;
use dioxus::core::Task;

#[component]
pub fn AppShell() -> Element {
    let mut settings = use_signal(ClientSettings::default);
    let store = use_signal(Store::default);
    let mut settings_loaded = use_signal(|| false);
    let mut socket_task = use_signal(|| None::<Task>);
    let dispatch = StoreDispatch::new(store);

    // Provide state via context
    use_context_provider(|| settings);
    use_context_provider(|| store);
    use_context_provider(|| dispatch);

    // Initialize database and load saved settings on mount
    use_effect(move || {
        spawn(async move {
            if let Err(e) = initialize_database().await {
                tracing::error!("failed to initialize settings storage: {e}");
            }
            match load_settings().await {
                Ok(saved) => settings.set(saved),
                Err(e) => tracing::warn!("using default settings: {e}"),
            }
            settings_loaded.set(true);
        });
    });

    // (Re)connect whenever the server or token changes
    use_effect(move || {
        if !settings_loaded() {
            return;
        }
        let current = settings();

        if let Some(task) = *socket_task.peek() {
            task.cancel();
        }

        let api = current.client();
        let token = current.token.clone();
        let mut libraries_dispatch = dispatch;
        spawn(async move {
            actions::fetch_libraries(&api, &token, &mut libraries_dispatch).await;
        });

        if current.has_token() {
            socket_task.set(Some(spawn(run_event_socket(current, dispatch))));
        } else {
            tracing::info!("no token configured, event socket not started");
            socket_task.set(None);
        }
    });

    let route = use_route::<Route>();

    rsx! {
        div { class: "app",
            Sidebar {}
            div { class: "app-main",
                header { class: "app-header",
                    span { class: "app-title", "{view_label(&route)}" }
                    if !settings.read().has_token() {
                        Link { class: "token-notice", to: Route::Settings {}, "Set an access token" }
                    }
                }
                main { class: "page-shell",
                    if settings_loaded() {
                        Outlet::<Route> {}
                    } else {
                        div { class: "page-loading", "Loading..." }
                    }
                }
            }
        }
    }
}
