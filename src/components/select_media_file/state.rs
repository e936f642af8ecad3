// Selection state behind the file chooser modal.

use crate::api::{MediaFile, MediaFileId, MediaId};
use crate::store::MediaEntry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectPhase {
    Idle,
    /// Selection requested, file list not yet known.
    Pending,
    /// Selection requested and the file list is available.
    Resolving,
    Visible,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Exactly one file: go straight to its playback route.
    Navigate(MediaFileId),
    /// Zero or several files: the chooser is now visible.
    Show,
}

/// What the store currently knows about one entry's file list.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FilesStatus<'a> {
    pub files: Option<&'a [MediaFile]>,
    pub fetching: bool,
    pub failed: bool,
    pub attempts: u32,
}

impl<'a> FilesStatus<'a> {
    pub fn of(entry: Option<&'a MediaEntry>) -> Self {
        match entry {
            Some(entry) => Self {
                files: entry.loaded_files(),
                fetching: entry.files.fetching,
                failed: entry.files.error.is_some(),
                attempts: entry.attempts,
            },
            None => Self::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilePlan {
    Nothing,
    /// Request the file list for the held identifier.
    Fetch,
    /// The request made for this selection failed; the click was dropped.
    Abandon,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SelectFileState {
    pub title: Option<String>,
    pub current_id: Option<MediaId>,
    pub clicked: bool,
    pub visible: bool,
    /// Attempt count seen when this selection asked for the file list.
    pub requested: Option<u32>,
}

impl SelectFileState {
    /// Follows the externally supplied media while nothing is on screen. A
    /// visible chooser keeps the identifier it was opened for.
    pub fn sync_props(&mut self, media_id: Option<MediaId>, title: Option<String>) -> bool {
        if self.current_id.is_some() && self.visible {
            return false;
        }
        if self.current_id == media_id && self.title == title {
            return false;
        }
        self.current_id = media_id;
        self.title = title;
        true
    }

    pub fn set_clicked(&mut self, clicked: bool) {
        if clicked {
            self.requested = None;
        }
        self.clicked = clicked;
    }

    pub fn open(&mut self) {
        if !self.visible {
            self.visible = true;
            self.requested = None;
        }
    }

    pub fn close(&mut self) {
        self.visible = false;
        self.current_id = None;
        self.title = None;
        self.requested = None;
    }

    pub fn scroll_locked(&self) -> bool {
        self.visible
    }

    pub fn phase(&self, files: Option<&[MediaFile]>) -> SelectPhase {
        if self.visible {
            SelectPhase::Visible
        } else if !self.clicked || self.current_id.is_none() {
            SelectPhase::Idle
        } else if files.is_some() {
            SelectPhase::Resolving
        } else {
            SelectPhase::Pending
        }
    }

    /// Decides whether the file list has to be requested. Each click or
    /// direct open asks at most once; a failure of that request drops a
    /// pending click and leaves a visible chooser on its empty state.
    pub fn plan_files(&mut self, status: &FilesStatus) -> FilePlan {
        let wanted = matches!(
            self.phase(status.files),
            SelectPhase::Pending | SelectPhase::Visible
        ) && status.files.is_none();
        if !wanted || status.fetching {
            return FilePlan::Nothing;
        }

        match self.requested {
            None => {
                self.requested = Some(status.attempts);
                FilePlan::Fetch
            }
            Some(seen) if status.failed && status.attempts > seen && !self.visible => {
                self.clicked = false;
                FilePlan::Abandon
            }
            Some(_) => FilePlan::Nothing,
        }
    }

    /// Settles a pending click once the file list for the held identifier is
    /// known. Returns `None` while there is nothing to settle.
    pub fn resolve(&mut self, files: Option<&[MediaFile]>) -> Option<Resolution> {
        if !self.clicked || self.current_id.is_none() {
            return None;
        }
        let files = files?;

        self.clicked = false;
        if let [only] = files {
            Some(Resolution::Navigate(only.id))
        } else {
            self.open();
            Some(Resolution::Show)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ActionError;

    fn files(ids: &[MediaFileId]) -> Vec<MediaFile> {
        ids.iter()
            .map(|id| MediaFile {
                id: *id,
                target_file: format!("/media/films/cut-{id}.mkv"),
                media_id: Some(1),
                library_id: Some(1),
            })
            .collect()
    }

    fn clicked_on(media_id: MediaId) -> SelectFileState {
        let mut state = SelectFileState::default();
        state.sync_props(Some(media_id), Some("Heat".into()));
        state.set_clicked(true);
        state
    }

    #[test]
    fn single_file_navigates_without_showing() {
        for file_id in [1, 42, 9001] {
            let mut state = clicked_on(3);
            let list = files(&[file_id]);

            assert_eq!(state.phase(Some(&list)), SelectPhase::Resolving);
            assert_eq!(
                state.resolve(Some(&list)),
                Some(Resolution::Navigate(file_id))
            );
            assert!(!state.visible);
            assert_eq!(state.phase(Some(&list)), SelectPhase::Idle);
        }
    }

    #[test]
    fn zero_files_shows_empty_chooser() {
        let mut state = clicked_on(3);
        assert_eq!(state.resolve(Some(&[])), Some(Resolution::Show));
        assert!(state.visible);
        assert!(!state.clicked);
        assert_eq!(state.phase(Some(&[])), SelectPhase::Visible);
    }

    #[test]
    fn several_files_show_chooser() {
        let mut state = clicked_on(3);
        let list = files(&[10, 11, 12]);
        assert_eq!(state.resolve(Some(&list)), Some(Resolution::Show));
        assert!(state.scroll_locked());
    }

    #[test]
    fn waits_for_file_list() {
        let mut state = clicked_on(3);
        assert_eq!(state.phase(None), SelectPhase::Pending);
        assert_eq!(state.resolve(None), None);
        assert!(state.clicked);
    }

    #[test]
    fn nothing_happens_without_click() {
        let mut state = SelectFileState::default();
        state.sync_props(Some(3), Some("Heat".into()));
        assert_eq!(state.resolve(Some(&files(&[1]))), None);
        assert_eq!(state.phase(Some(&files(&[1]))), SelectPhase::Idle);
    }

    #[test]
    fn identifier_is_pinned_while_visible() {
        let mut state = clicked_on(3);
        state.resolve(Some(&files(&[1, 2])));

        assert!(!state.sync_props(Some(8), Some("Ronin".into())));
        assert_eq!(state.current_id, Some(3));
        assert_eq!(state.title.as_deref(), Some("Heat"));
    }

    #[test]
    fn close_resets_before_reopen() {
        let mut state = clicked_on(3);
        state.resolve(Some(&files(&[1, 2])));
        state.close();

        assert_eq!(state.current_id, None);
        assert_eq!(state.title, None);
        assert!(!state.visible);
        assert!(!state.scroll_locked());

        assert!(state.sync_props(Some(8), Some("Ronin".into())));
        assert_eq!(state.current_id, Some(8));
        assert_eq!(state.title.as_deref(), Some("Ronin"));
    }

    #[test]
    fn identifier_follows_props_while_hidden() {
        let mut state = SelectFileState::default();
        assert!(state.sync_props(Some(1), Some("A".into())));
        assert!(!state.sync_props(Some(1), Some("A".into())));
        assert!(state.sync_props(Some(2), Some("B".into())));
        assert_eq!(state.current_id, Some(2));
    }

    fn failed_entry(attempts: u32) -> MediaEntry {
        let mut entry = MediaEntry::default();
        entry.attempts = attempts;
        entry.files.fetched = true;
        entry.files.error = Some(ActionError::Transport("offline".into()));
        entry
    }

    /// Applies one plan step and reports whether the state changed.
    fn step(state: &mut SelectFileState, status: &FilesStatus) -> (FilePlan, bool) {
        let before = state.clone();
        let plan = state.plan_files(status);
        (plan, *state != before)
    }

    #[test]
    fn click_requests_files_once_until_the_attempt_settles() {
        let mut state = clicked_on(3);
        let (plan, changed) = step(&mut state, &FilesStatus::of(None));
        assert_eq!(plan, FilePlan::Fetch);
        assert!(changed);

        // The request has not started yet: nothing to do, nothing written.
        assert_eq!(step(&mut state, &FilesStatus::of(None)), (FilePlan::Nothing, false));

        let mut entry = MediaEntry::default();
        entry.attempts = 1;
        entry.files.fetching = true;
        assert_eq!(step(&mut state, &FilesStatus::of(Some(&entry))), (FilePlan::Nothing, false));
    }

    #[test]
    fn failed_request_drops_the_click() {
        let mut state = clicked_on(3);
        state.plan_files(&FilesStatus::of(None));

        let entry = failed_entry(1);
        let (plan, changed) = step(&mut state, &FilesStatus::of(Some(&entry)));
        assert_eq!(plan, FilePlan::Abandon);
        assert!(changed);
        assert!(!state.clicked);
        assert_eq!(state.phase(None), SelectPhase::Idle);
        assert_eq!(step(&mut state, &FilesStatus::of(Some(&entry))), (FilePlan::Nothing, false));
    }

    #[test]
    fn new_click_retries_after_an_earlier_failure() {
        let mut state = clicked_on(3);
        state.plan_files(&FilesStatus::of(None));
        let entry = failed_entry(1);
        state.plan_files(&FilesStatus::of(Some(&entry)));
        assert!(!state.clicked);

        state.set_clicked(true);
        assert_eq!(state.plan_files(&FilesStatus::of(Some(&entry))), FilePlan::Fetch);
        assert_eq!(state.requested, Some(1));

        // Until the retry itself fails the stale error does not drop the click.
        assert_eq!(step(&mut state, &FilesStatus::of(Some(&entry))), (FilePlan::Nothing, false));
        assert!(state.clicked);
    }

    #[test]
    fn opened_chooser_with_failed_fetch_settles() {
        let mut state = SelectFileState::default();
        state.sync_props(Some(3), Some("Heat".into()));
        state.open();

        let entry = failed_entry(4);
        assert_eq!(state.plan_files(&FilesStatus::of(Some(&entry))), FilePlan::Fetch);

        let entry = failed_entry(5);
        for _ in 0..3 {
            assert_eq!(step(&mut state, &FilesStatus::of(Some(&entry))), (FilePlan::Nothing, false));
        }
        assert!(state.visible);
        assert_eq!(state.phase(None), SelectPhase::Visible);
    }

    #[test]
    fn loaded_files_need_no_request() {
        let mut state = clicked_on(3);
        let mut entry = MediaEntry::default();
        entry.attempts = 1;
        entry.files.fetched = true;
        entry.files.items = files(&[1, 2]);

        assert_eq!(step(&mut state, &FilesStatus::of(Some(&entry))), (FilePlan::Nothing, false));
        assert_eq!(
            state.resolve(FilesStatus::of(Some(&entry)).files),
            Some(Resolution::Show)
        );
    }
}
