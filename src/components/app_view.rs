//! Routes of the web client.

use crate::api::{LibraryId, MediaFileId};
use crate::components::views::{Dashboard, LibraryPage, NotFound, Play, Settings};
use crate::components::AppShell;
use dioxus::prelude::*;

#[derive(Routable, Clone, PartialEq, Debug)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AppShell)]
        #[route("/")]
        Dashboard {},
        #[route("/library/:id")]
        LibraryPage { id: LibraryId },
        #[route("/play/:file_id")]
        Play { file_id: MediaFileId },
        #[route("/settings")]
        Settings {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

pub fn view_label(route: &Route) -> &'static str {
    match route {
        Route::Dashboard {} => "Dashboard",
        Route::LibraryPage { .. } => "Library",
        Route::Play { .. } => "Now Playing",
        Route::Settings {} => "Settings",
        Route::NotFound { .. } => "Not Found",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn play_route_carries_file_id() {
        assert_eq!(Route::Play { file_id: 5 }.to_string(), "/play/5");
        assert_eq!(Route::LibraryPage { id: 2 }.to_string(), "/library/2");
    }

    #[test]
    fn parses_known_paths() {
        assert_eq!(Route::from_str("/play/41").ok(), Some(Route::Play { file_id: 41 }));
        assert_eq!(Route::from_str("/settings").ok(), Some(Route::Settings {}));
        assert_eq!(view_label(&Route::Dashboard {}), "Dashboard");
    }
}
