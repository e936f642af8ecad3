use crate::components::Icon;
use crate::db::{save_settings, ClientSettings};
use dioxus::prelude::*;

fn normalize_server_url(url: &str) -> String {
    let trimmed = url.trim().trim_end_matches('/');
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("http://{trimmed}")
    }
}

#[component]
pub fn Settings() -> Element {
    let mut settings = use_context::<Signal<ClientSettings>>();

    let current = settings();
    let mut server_url = use_signal(|| current.server_url.clone());
    let mut token = use_signal(|| current.token.clone());
    let mut save_status = use_signal(|| None::<Result<(), String>>);
    let mut is_saving = use_signal(|| false);

    let can_save = use_memo(move || !server_url().trim().is_empty() && !is_saving());

    let on_save = move |evt: FormEvent| {
        evt.prevent_default();
        if is_saving() {
            return;
        }
        let next = ClientSettings {
            server_url: normalize_server_url(&server_url()),
            token: token().trim().to_string(),
        };
        if next.server_url == "http://" {
            return;
        }

        is_saving.set(true);
        save_status.set(None);
        spawn(async move {
            match save_settings(next.clone()).await {
                Ok(()) => {
                    tracing::info!("saved settings for {}", next.server_url);
                    server_url.set(next.server_url.clone());
                    settings.set(next);
                    save_status.set(Some(Ok(())));
                }
                Err(e) => {
                    tracing::error!("failed to save settings: {e}");
                    save_status.set(Some(Err(e.to_string())));
                }
            }
            is_saving.set(false);
        });
    };

    let on_reset = move |_| {
        let defaults = ClientSettings::default();
        server_url.set(defaults.server_url);
        save_status.set(None);
    };

    rsx! {
        div { class: "page",
            header { class: "page-header",
                h1 { class: "page-title", "Settings" }
                p { class: "page-subtitle", "Where the Dim server lives and how to sign in" }
            }

            section { class: "panel",
                h2 { class: "panel-title",
                    Icon { name: "server".to_string(), class: "icon".to_string() }
                    span { "Server" }
                }
                form { class: "form", onsubmit: on_save,
                    label { class: "field",
                        span { "Server URL" }
                        input {
                            r#type: "url",
                            placeholder: "http://localhost:8000",
                            value: server_url(),
                            oninput: move |e| server_url.set(e.value()),
                        }
                    }
                    label { class: "field",
                        span { "Access token" }
                        input {
                            r#type: "password",
                            autocomplete: "off",
                            value: token(),
                            oninput: move |e| token.set(e.value()),
                        }
                    }
                    div { class: "form-actions",
                        button { class: "btn", r#type: "button", onclick: on_reset, "Use default" }
                        button {
                            class: "btn btn-primary",
                            r#type: "submit",
                            disabled: !can_save(),
                            if is_saving() {
                                Icon { name: "loader".to_string(), class: "icon spin".to_string() }
                            }
                            span { "Save" }
                        }
                    }
                }

                {
                    match save_status() {
                        Some(Ok(())) => rsx! {
                            p { class: "success", "Settings saved. Reconnecting..." }
                        },
                        Some(Err(message)) => rsx! {
                            p { class: "error", "Could not save settings: {message}" }
                        },
                        None => rsx! {},
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_url_gets_scheme_and_loses_trailing_slash() {
        assert_eq!(normalize_server_url(" nas.local:8000/ "), "http://nas.local:8000");
        assert_eq!(normalize_server_url("https://dim.example"), "https://dim.example");
    }
}
