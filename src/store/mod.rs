//! Global client store: every server interaction ends as an [`Action`] applied
//! by [`Store::reduce`].

use crate::api::{ActionError, Library, LibraryId, MediaFile, MediaId, MediaSummary};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    FetchLibrariesStart,
    FetchLibrariesOk(Vec<Library>),
    FetchLibrariesErr(ActionError),

    FetchLibraryUnmatchedStart { library_id: LibraryId },
    FetchLibraryUnmatchedOk { library_id: LibraryId, files: Vec<MediaFile> },
    FetchLibraryUnmatchedErr { library_id: LibraryId, error: ActionError },

    NewLibraryStart,
    NewLibraryOk,
    NewLibraryErr(ActionError),

    DelLibraryStart,
    DelLibraryOk,
    DelLibraryErr(ActionError),

    FetchLibraryInfo,
    FetchLibraryMedia,

    FetchLibraryMediaStart { library_id: LibraryId },
    FetchLibraryMediaOk { library_id: LibraryId, media: Vec<MediaSummary> },
    FetchLibraryMediaErr { library_id: LibraryId, error: ActionError },

    FetchMediaFilesStart { media_id: MediaId },
    FetchMediaFilesOk { media_id: MediaId, files: Vec<MediaFile> },
    FetchMediaFilesErr { media_id: MediaId, error: ActionError },

    AddLibrary(Library),
    RmLibrary { id: LibraryId },
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Self::FetchLibrariesStart => "FETCH_LIBRARIES_START",
            Self::FetchLibrariesOk(_) => "FETCH_LIBRARIES_OK",
            Self::FetchLibrariesErr(_) => "FETCH_LIBRARIES_ERR",
            Self::FetchLibraryUnmatchedStart { .. } => "FETCH_LIBRARY_UNMATCHED_START",
            Self::FetchLibraryUnmatchedOk { .. } => "FETCH_LIBRARY_UNMATCHED_OK",
            Self::FetchLibraryUnmatchedErr { .. } => "FETCH_LIBRARY_UNMATCHED_ERR",
            Self::NewLibraryStart => "NEW_LIBRARY_START",
            Self::NewLibraryOk => "NEW_LIBRARY_OK",
            Self::NewLibraryErr(_) => "NEW_LIBRARY_ERR",
            Self::DelLibraryStart => "DEL_LIBRARY_START",
            Self::DelLibraryOk => "DEL_LIBRARY_OK",
            Self::DelLibraryErr(_) => "DEL_LIBRARY_ERR",
            Self::FetchLibraryInfo => "FETCH_LIBRARY_INFO",
            Self::FetchLibraryMedia => "FETCH_LIBRARY_MEDIA",
            Self::FetchLibraryMediaStart { .. } => "FETCH_LIBRARY_MEDIA_START",
            Self::FetchLibraryMediaOk { .. } => "FETCH_LIBRARY_MEDIA_OK",
            Self::FetchLibraryMediaErr { .. } => "FETCH_LIBRARY_MEDIA_ERR",
            Self::FetchMediaFilesStart { .. } => "FETCH_MEDIA_FILES_START",
            Self::FetchMediaFilesOk { .. } => "FETCH_MEDIA_FILES_OK",
            Self::FetchMediaFilesErr { .. } => "FETCH_MEDIA_FILES_ERR",
            Self::AddLibrary(_) => "ADD_LIBRARY",
            Self::RmLibrary { .. } => "RM_LIBRARY",
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(
            self,
            Self::FetchLibrariesErr(_)
                | Self::FetchLibraryUnmatchedErr { .. }
                | Self::NewLibraryErr(_)
                | Self::DelLibraryErr(_)
                | Self::FetchLibraryMediaErr { .. }
                | Self::FetchMediaFilesErr { .. }
        )
    }
}

/// Sink for actions produced by the action creators.
pub trait Dispatch {
    fn dispatch(&mut self, action: Action);
}

impl<F> Dispatch for F
where
    F: FnMut(Action),
{
    fn dispatch(&mut self, action: Action) {
        self(action)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FetchState<T> {
    pub fetching: bool,
    pub fetched: bool,
    pub error: Option<ActionError>,
    pub items: T,
}

impl<T: Default> Default for FetchState<T> {
    fn default() -> Self {
        Self {
            fetching: false,
            fetched: false,
            error: None,
            items: T::default(),
        }
    }
}

impl<T> FetchState<T> {
    fn start(&mut self) {
        self.fetching = true;
        self.fetched = false;
        self.error = None;
    }

    fn finish(&mut self, items: T) {
        self.fetching = false;
        self.fetched = true;
        self.error = None;
        self.items = items;
    }

    fn fail(&mut self, error: ActionError) {
        self.fetching = false;
        self.fetched = true;
        self.error = Some(error);
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RequestStatus {
    pub pending: bool,
    pub done: bool,
    pub error: Option<ActionError>,
}

impl RequestStatus {
    fn start(&mut self) {
        *self = Self {
            pending: true,
            done: false,
            error: None,
        };
    }

    fn finish(&mut self, error: Option<ActionError>) {
        self.pending = false;
        self.done = true;
        self.error = error;
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct LibraryState {
    pub libraries: FetchState<Vec<Library>>,
    pub unmatched: HashMap<LibraryId, FetchState<Vec<MediaFile>>>,
    pub new_library: RequestStatus,
    pub del_library: RequestStatus,
    pub media: HashMap<LibraryId, FetchState<Vec<MediaSummary>>>,
}

impl LibraryState {
    pub fn get(&self, id: LibraryId) -> Option<&Library> {
        self.libraries.items.iter().find(|library| library.id == id)
    }
}

/// A media entry as seen by the file selector.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MediaEntry {
    pub files: FetchState<Vec<MediaFile>>,
    /// Number of file-list requests started for this entry.
    pub attempts: u32,
}

impl MediaEntry {
    /// The file list, once a fetch for it has succeeded.
    pub fn loaded_files(&self) -> Option<&[MediaFile]> {
        (self.files.fetched && self.files.error.is_none()).then_some(self.files.items.as_slice())
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Store {
    pub library: LibraryState,
    pub media: HashMap<MediaId, MediaEntry>,
}

impl Store {
    pub fn media_files(&self, media_id: MediaId) -> Option<&[MediaFile]> {
        self.media.get(&media_id).and_then(MediaEntry::loaded_files)
    }

    pub fn reduce(&mut self, action: Action) {
        match action {
            Action::FetchLibrariesStart => self.library.libraries.start(),
            Action::FetchLibrariesOk(libraries) => self.library.libraries.finish(libraries),
            Action::FetchLibrariesErr(error) => self.library.libraries.fail(error),

            Action::FetchLibraryUnmatchedStart { library_id } => {
                self.library.unmatched.entry(library_id).or_default().start()
            }
            Action::FetchLibraryUnmatchedOk { library_id, files } => {
                self.library.unmatched.entry(library_id).or_default().finish(files)
            }
            Action::FetchLibraryUnmatchedErr { library_id, error } => {
                self.library.unmatched.entry(library_id).or_default().fail(error)
            }

            Action::NewLibraryStart => self.library.new_library.start(),
            Action::NewLibraryOk => self.library.new_library.finish(None),
            Action::NewLibraryErr(error) => self.library.new_library.finish(Some(error)),

            Action::DelLibraryStart => self.library.del_library.start(),
            Action::DelLibraryOk => self.library.del_library.finish(None),
            Action::DelLibraryErr(error) => self.library.del_library.finish(Some(error)),

            Action::FetchLibraryInfo | Action::FetchLibraryMedia => {}

            Action::FetchLibraryMediaStart { library_id } => {
                self.library.media.entry(library_id).or_default().start()
            }
            Action::FetchLibraryMediaOk { library_id, media } => {
                self.library.media.entry(library_id).or_default().finish(media)
            }
            Action::FetchLibraryMediaErr { library_id, error } => {
                self.library.media.entry(library_id).or_default().fail(error)
            }

            Action::FetchMediaFilesStart { media_id } => {
                let entry = self.media.entry(media_id).or_default();
                entry.attempts += 1;
                entry.files.start();
            }
            Action::FetchMediaFilesOk { media_id, files } => {
                self.media.entry(media_id).or_default().files.finish(files)
            }
            Action::FetchMediaFilesErr { media_id, error } => {
                self.media.entry(media_id).or_default().files.fail(error)
            }

            Action::AddLibrary(library) => {
                let libraries = &mut self.library.libraries.items;
                match libraries.iter_mut().find(|existing| existing.id == library.id) {
                    Some(existing) => *existing = library,
                    None => libraries.push(library),
                }
            }
            Action::RmLibrary { id } => {
                self.library.libraries.items.retain(|library| library.id != id);
                self.library.media.remove(&id);
                self.library.unmatched.remove(&id);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MediaType;

    fn library(id: LibraryId, name: &str) -> Library {
        Library {
            id,
            name: name.to_string(),
            location: format!("/media/{name}"),
            media_type: MediaType::Movie,
        }
    }

    #[test]
    fn fetch_libraries_cycle() {
        let mut store = Store::default();
        store.reduce(Action::FetchLibrariesStart);
        assert!(store.library.libraries.fetching);

        store.reduce(Action::FetchLibrariesOk(vec![library(1, "films")]));
        assert!(!store.library.libraries.fetching);
        assert!(store.library.libraries.fetched);
        assert_eq!(store.library.libraries.items.len(), 1);

        store.reduce(Action::FetchLibrariesStart);
        store.reduce(Action::FetchLibrariesErr(ActionError::status(500, "Internal Server Error")));
        assert_eq!(
            store.library.libraries.error,
            Some(ActionError::status(500, "Internal Server Error"))
        );
        // a failed refresh keeps what was already listed
        assert_eq!(store.library.libraries.items.len(), 1);
    }

    #[test]
    fn add_library_replaces_same_id() {
        let mut store = Store::default();
        store.reduce(Action::AddLibrary(library(1, "films")));
        store.reduce(Action::AddLibrary(library(2, "shows")));
        store.reduce(Action::AddLibrary(library(1, "movies")));

        let names: Vec<_> = store
            .library
            .libraries
            .items
            .iter()
            .map(|l| l.name.as_str())
            .collect();
        assert_eq!(names, vec!["movies", "shows"]);
    }

    #[test]
    fn rm_library_drops_library_and_its_media() {
        let mut store = Store::default();
        store.reduce(Action::FetchLibrariesOk(vec![library(1, "films"), library(2, "shows")]));
        store.reduce(Action::FetchLibraryMediaOk {
            library_id: 1,
            media: Vec::new(),
        });
        for library_id in [1, 2] {
            store.reduce(Action::FetchLibraryUnmatchedOk {
                library_id,
                files: Vec::new(),
            });
        }

        store.reduce(Action::RmLibrary { id: 1 });
        assert!(store.library.get(1).is_none());
        assert!(store.library.get(2).is_some());
        assert!(!store.library.media.contains_key(&1));
        assert!(!store.library.unmatched.contains_key(&1));
        assert!(store.library.unmatched.contains_key(&2));
    }

    #[test]
    fn media_files_only_visible_after_successful_fetch() {
        let mut store = Store::default();
        store.reduce(Action::FetchMediaFilesStart { media_id: 5 });
        assert!(store.media_files(5).is_none());

        store.reduce(Action::FetchMediaFilesErr {
            media_id: 5,
            error: ActionError::Transport("offline".into()),
        });
        assert!(store.media_files(5).is_none());

        store.reduce(Action::FetchMediaFilesOk {
            media_id: 5,
            files: Vec::new(),
        });
        assert_eq!(store.media_files(5).map(<[MediaFile]>::len), Some(0));
    }

    #[test]
    fn delete_status_tracks_outcome() {
        let mut store = Store::default();
        store.reduce(Action::DelLibraryStart);
        assert!(store.library.del_library.pending);
        store.reduce(Action::DelLibraryOk);
        assert!(!store.library.del_library.pending);
        assert!(store.library.del_library.done);
        assert!(store.library.del_library.error.is_none());
    }

    #[test]
    fn each_file_request_counts_as_an_attempt() {
        let mut store = Store::default();
        store.reduce(Action::FetchMediaFilesStart { media_id: 5 });
        store.reduce(Action::FetchMediaFilesErr {
            media_id: 5,
            error: ActionError::Transport("offline".into()),
        });
        store.reduce(Action::FetchMediaFilesStart { media_id: 5 });

        let entry = &store.media[&5];
        assert_eq!(entry.attempts, 2);
        assert!(entry.files.fetching);
        assert!(entry.files.error.is_none());
    }
}
