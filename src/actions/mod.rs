//! Action creators. Each one performs at most one request and reports its
//! progress to a [`Dispatch`](crate::store::Dispatch) sink.

pub mod events;
pub mod library;
pub mod media;

#[cfg(test)]
pub(crate) mod testing;

pub use events::*;
pub use library::*;
pub use media::*;

use crate::api::{ActionError, ApiRequest, ApiResponse, Transport};
use serde::de::DeserializeOwned;

async fn send_expecting<T>(
    api: &T,
    request: ApiRequest,
    expected: u16,
) -> Result<ApiResponse, ActionError>
where
    T: Transport + ?Sized,
{
    api.execute(request).await?.expect_status(expected)
}

async fn fetch_json<T, R>(api: &T, request: ApiRequest) -> Result<R, ActionError>
where
    T: Transport + ?Sized,
    R: DeserializeOwned,
{
    send_expecting(api, request, 200).await?.json()
}
