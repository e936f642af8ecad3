use super::fetch_json;
use crate::api::{ApiRequest, LibraryId, MediaFile, MediaId, MediaSummary, Transport, API_PREFIX};
use crate::store::{Action, Dispatch};

pub async fn fetch_library_media<T, D>(api: &T, token: &str, library_id: LibraryId, dispatch: &mut D)
where
    T: Transport + ?Sized,
    D: Dispatch + ?Sized,
{
    dispatch.dispatch(Action::FetchLibraryMediaStart { library_id });

    let request = ApiRequest::get(format!("{API_PREFIX}/library/{library_id}/media"), token);
    match fetch_json::<_, Vec<MediaSummary>>(api, request).await {
        Ok(media) => dispatch.dispatch(Action::FetchLibraryMediaOk { library_id, media }),
        Err(error) => {
            tracing::warn!(library_id, "fetching library media failed: {error}");
            dispatch.dispatch(Action::FetchLibraryMediaErr { library_id, error });
        }
    }
}

pub async fn fetch_media_files<T, D>(api: &T, token: &str, media_id: MediaId, dispatch: &mut D)
where
    T: Transport + ?Sized,
    D: Dispatch + ?Sized,
{
    dispatch.dispatch(Action::FetchMediaFilesStart { media_id });

    let request = ApiRequest::get(format!("{API_PREFIX}/media/{media_id}/files"), token);
    match fetch_json::<_, Vec<MediaFile>>(api, request).await {
        Ok(files) => {
            tracing::debug!(media_id, count = files.len(), "media files loaded");
            dispatch.dispatch(Action::FetchMediaFilesOk { media_id, files });
        }
        Err(error) => {
            tracing::warn!(media_id, "fetching media files failed: {error}");
            dispatch.dispatch(Action::FetchMediaFilesErr { media_id, error });
        }
    }
}
