//! File chooser for media entries that resolve to more than one video file.

mod state;

pub use state::*;

use crate::actions;
use crate::api::{MediaFile, MediaFileId, MediaId};
use crate::components::{spawn_action, Icon, Route, StoreDispatch};
use crate::db::ClientSettings;
use crate::store::Store;
use dioxus::prelude::*;

/// Handle given to everything rendered inside a [`SelectMediaFile`].
#[derive(Clone, Copy, PartialEq)]
pub struct SelectFileController {
    state: Signal<SelectFileState>,
}

impl SelectFileController {
    pub fn new(state: Signal<SelectFileState>) -> Self {
        Self { state }
    }

    pub fn open(&mut self) {
        self.state.with_mut(SelectFileState::open);
    }

    pub fn close(&mut self) {
        self.state.with_mut(SelectFileState::close);
    }

    pub fn set_clicked(&mut self, clicked: bool) {
        self.state.with_mut(|state| state.set_clicked(clicked));
    }

    pub fn current_id(&self) -> Option<MediaId> {
        self.state.read().current_id
    }
}

#[component]
pub fn SelectMediaFile(media_id: MediaId, title: String, children: Element) -> Element {
    let store = use_context::<Signal<Store>>();
    let settings = use_context::<Signal<ClientSettings>>();
    let dispatch = use_context::<StoreDispatch>();
    let nav = navigator();

    let mut state = use_signal(SelectFileState::default);
    let mut controller = use_context_provider(|| SelectFileController::new(state));

    // Follow the card we are attached to unless the chooser is on screen.
    use_effect(use_reactive((&media_id, &title), move |(media_id, title)| {
        let mut next = state.read().clone();
        if next.sync_props(Some(media_id), Some(title)) {
            state.set(next);
        }
    }));

    use_effect(move || {
        let snapshot = state.read().clone();
        let Some(current_id) = snapshot.current_id else {
            return;
        };

        let mut next = snapshot.clone();
        let (plan, resolution) = {
            let store = store.read();
            let status = FilesStatus::of(store.media.get(&current_id));
            let plan = next.plan_files(&status);
            (plan, next.resolve(status.files))
        };

        // Signal writes notify even when nothing changed.
        if next != snapshot {
            state.set(next);
        }

        match plan {
            FilePlan::Fetch => spawn_action(settings, dispatch, move |api, token, mut dispatch| async move {
                actions::fetch_media_files(&api, &token, current_id, &mut dispatch).await;
            }),
            FilePlan::Abandon => {
                tracing::warn!(media_id = current_id, "no file list, dropping selection");
            }
            FilePlan::Nothing => {}
        }

        if let Some(Resolution::Navigate(file_id)) = resolution {
            nav.push(Route::Play { file_id });
        }
    });

    // Keep the page behind the chooser from scrolling.
    use_effect(move || {
        let overflow = if state.read().scroll_locked() { "hidden" } else { "unset" };
        let _ = document::eval(&format!("document.body.style.overflow = '{overflow}';"));
    });

    let snapshot = state();
    let view = {
        let store = store.read();
        let files = snapshot
            .current_id
            .and_then(|id| store.media_files(id))
            .unwrap_or_default();
        chooser_view(snapshot.title.as_deref().unwrap_or_default(), files)
    };

    rsx! {
        div { class: "modalSelectMediaFileHost",
            {children}
            if snapshot.visible {
                div {
                    class: "popupOverlay",
                    tabindex: "0",
                    onmounted: move |evt| async move {
                        let _ = evt.set_focus(true).await;
                    },
                    onclick: move |_| controller.close(),
                    onkeydown: move |evt: KeyboardEvent| {
                        if evt.key() == Key::Escape {
                            controller.close();
                        }
                    },
                    div {
                        id: "modalSelectMediaFile",
                        class: "modalBox",
                        onclick: move |evt| evt.stop_propagation(),
                        div { class: "modalSelectMediaFile",
                            div { class: "header",
                                h3 { "{view.heading}" }
                                p { class: "desc", "{view.description}" }
                            }
                            div { class: "separator" }
                            if view.links.is_empty() {
                                div { class: "err",
                                    p { "Empty" }
                                }
                            } else {
                                div { class: "fileVersionsWrapper",
                                    div { class: "fileVersions",
                                        for link in view.links.iter() {
                                            Link {
                                                key: "{link.file_id}",
                                                class: "fileVersion",
                                                to: link.to.clone(),
                                                Icon {
                                                    name: "file-video".to_string(),
                                                    class: "icon".to_string(),
                                                }
                                                p { "{link.label}" }
                                            }
                                        }
                                    }
                                }
                            }
                            div { class: "options",
                                button { class: "btn", onclick: move |_| controller.close(), "Nevermind" }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// One selectable file in the chooser.
#[derive(Debug, Clone, PartialEq)]
pub struct FileLink {
    pub file_id: MediaFileId,
    pub to: Route,
    pub label: String,
}

/// Text and links shown by the chooser. No links means the empty state.
#[derive(Debug, Clone, PartialEq)]
pub struct ChooserView {
    pub heading: &'static str,
    pub description: String,
    pub links: Vec<FileLink>,
}

pub fn chooser_view(title: &str, files: &[MediaFile]) -> ChooserView {
    if files.is_empty() {
        return ChooserView {
            heading: "File selector",
            description: format!("No files found for '{title}'"),
            links: Vec::new(),
        };
    }

    ChooserView {
        heading: "Multiple files found",
        description: format!("Choose a file to play for '{title}'"),
        links: files
            .iter()
            .map(|file| FileLink {
                file_id: file.id,
                to: Route::Play { file_id: file.id },
                label: file.file_name().to_string(),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(id: MediaFileId, target: &str) -> MediaFile {
        MediaFile {
            id,
            target_file: target.to_string(),
            media_id: Some(3),
            library_id: Some(1),
        }
    }

    #[test]
    fn every_file_links_to_its_own_play_route() {
        let files = vec![
            file(10, "/media/films/Heat (1995)/Heat.1080p.mkv"),
            file(11, "D:\\films\\Heat.720p.mp4"),
            file(12, "Heat.extended.avi"),
        ];
        let view = chooser_view("Heat", &files);

        assert_eq!(view.heading, "Multiple files found");
        assert_eq!(view.description, "Choose a file to play for 'Heat'");
        let rendered: Vec<(String, &str)> = view
            .links
            .iter()
            .map(|link| (link.to.to_string(), link.label.as_str()))
            .collect();
        assert_eq!(
            rendered,
            vec![
                ("/play/10".to_string(), "Heat.1080p.mkv"),
                ("/play/11".to_string(), "Heat.720p.mp4"),
                ("/play/12".to_string(), "Heat.extended.avi"),
            ]
        );
    }

    #[test]
    fn no_files_renders_empty_state() {
        let view = chooser_view("Ronin", &[]);
        assert_eq!(view.heading, "File selector");
        assert_eq!(view.description, "No files found for 'Ronin'");
        assert!(view.links.is_empty());
    }
}
