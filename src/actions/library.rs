use super::{fetch_json, send_expecting};
use crate::api::{
    ActionError, ApiRequest, Library, LibraryId, MediaFile, NewLibrary, Transport, API_PREFIX,
};
use crate::store::{Action, Dispatch};

fn library_path() -> String {
    format!("{API_PREFIX}/library")
}

fn library_item_path(id: LibraryId) -> String {
    format!("{API_PREFIX}/library/{id}")
}

pub async fn fetch_libraries<T, D>(api: &T, token: &str, dispatch: &mut D)
where
    T: Transport + ?Sized,
    D: Dispatch + ?Sized,
{
    dispatch.dispatch(Action::FetchLibrariesStart);

    match fetch_json::<_, Vec<Library>>(api, ApiRequest::get(library_path(), token)).await {
        Ok(payload) => dispatch.dispatch(Action::FetchLibrariesOk(payload)),
        Err(err) => {
            tracing::warn!("fetching libraries failed: {err}");
            dispatch.dispatch(Action::FetchLibrariesErr(err));
        }
    }
}

pub async fn fetch_library_unmatched<T, D>(api: &T, token: &str, id: LibraryId, dispatch: &mut D)
where
    T: Transport + ?Sized,
    D: Dispatch + ?Sized,
{
    dispatch.dispatch(Action::FetchLibraryUnmatchedStart { library_id: id });

    let request = ApiRequest::get(format!("{}/unmatched", library_item_path(id)), token);
    match fetch_json::<_, Vec<MediaFile>>(api, request).await {
        Ok(files) => dispatch.dispatch(Action::FetchLibraryUnmatchedOk {
            library_id: id,
            files,
        }),
        Err(err) => {
            tracing::warn!(library_id = id, "fetching unmatched media failed: {err}");
            dispatch.dispatch(Action::FetchLibraryUnmatchedErr {
                library_id: id,
                error: err,
            });
        }
    }
}

pub async fn new_library<T, D>(api: &T, token: &str, data: &NewLibrary, dispatch: &mut D)
where
    T: Transport + ?Sized,
    D: Dispatch + ?Sized,
{
    dispatch.dispatch(Action::NewLibraryStart);

    let body = match serde_json::to_value(data) {
        Ok(body) => body,
        Err(e) => {
            dispatch.dispatch(Action::NewLibraryErr(ActionError::Decode(e.to_string())));
            return;
        }
    };

    match send_expecting(api, ApiRequest::post_json(library_path(), token, body), 201).await {
        Ok(_) => {
            tracing::info!("created library {}", data.name);
            dispatch.dispatch(Action::NewLibraryOk);
        }
        Err(err) => {
            tracing::warn!("creating library {} failed: {err}", data.name);
            dispatch.dispatch(Action::NewLibraryErr(err));
        }
    }
}

pub async fn del_library<T, D>(api: &T, token: &str, id: LibraryId, dispatch: &mut D)
where
    T: Transport + ?Sized,
    D: Dispatch + ?Sized,
{
    dispatch.dispatch(Action::DelLibraryStart);

    match send_expecting(api, ApiRequest::delete(library_item_path(id), token), 204).await {
        Ok(_) => {
            tracing::info!(library_id = id, "deleted library");
            dispatch.dispatch(Action::DelLibraryOk);
        }
        Err(err) => {
            tracing::warn!(library_id = id, "deleting library failed: {err}");
            dispatch.dispatch(Action::DelLibraryErr(err));
        }
    }
}

pub fn fetch_library_info<D: Dispatch + ?Sized>(dispatch: &mut D) {
    dispatch.dispatch(Action::FetchLibraryInfo);
}

pub fn fetch_library_media_marker<D: Dispatch + ?Sized>(dispatch: &mut D) {
    dispatch.dispatch(Action::FetchLibraryMedia);
}

pub fn handle_ws_del_library<D: Dispatch + ?Sized>(id: LibraryId, dispatch: &mut D) {
    dispatch.dispatch(Action::RmLibrary { id });
}

/// Pulls a library announced over the event socket into the store. Any
/// failure leaves the store untouched.
pub async fn handle_ws_new_library<T, D>(api: &T, token: &str, id: LibraryId, dispatch: &mut D)
where
    T: Transport + ?Sized,
    D: Dispatch + ?Sized,
{
    match fetch_json::<_, Library>(api, ApiRequest::get(library_item_path(id), token)).await {
        Ok(info) => dispatch.dispatch(Action::AddLibrary(info)),
        Err(err) => tracing::debug!(library_id = id, "ignoring pushed library: {err}"),
    }
}
