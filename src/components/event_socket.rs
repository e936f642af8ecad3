//! Long-lived connection to the server's push event socket.

use crate::actions;
use crate::api::events::ClientMessage;
use crate::components::StoreDispatch;
use crate::db::ClientSettings;
use futures_util::{SinkExt, StreamExt};

/// Connects, authenticates and feeds every text frame to the push handler
/// until the server goes away. The caller owns reconnect policy.
#[cfg(not(target_arch = "wasm32"))]
pub async fn run_event_socket(settings: ClientSettings, mut dispatch: StoreDispatch) {
    use tokio_tungstenite::tungstenite::Message;

    let api = settings.client();
    let url = api.events_url();
    let (ws_stream, _) = match tokio_tungstenite::connect_async(url.as_str()).await {
        Ok(connection) => connection,
        Err(e) => {
            tracing::warn!("event socket {url} unavailable: {e}");
            return;
        }
    };
    tracing::info!("event socket connected: {url}");

    let (mut sender, mut receiver) = ws_stream.split();
    let hello = ClientMessage::Authenticate {
        token: settings.token.clone(),
    };
    if let Err(e) = sender.send(Message::Text(hello.to_json())).await {
        tracing::warn!("event socket authentication failed to send: {e}");
        return;
    }

    while let Some(msg) = receiver.next().await {
        match msg {
            Ok(Message::Text(text)) => {
                actions::handle_push_message(&api, &settings.token, &text, &mut dispatch).await;
            }
            Ok(Message::Ping(data)) => {
                let _ = sender.send(Message::Pong(data)).await;
            }
            Ok(Message::Close(_)) => break,
            Ok(_) => {}
            Err(e) => {
                tracing::warn!("event socket error: {e}");
                break;
            }
        }
    }

    tracing::info!("event socket closed");
}

#[cfg(target_arch = "wasm32")]
pub async fn run_event_socket(settings: ClientSettings, mut dispatch: StoreDispatch) {
    use gloo_net::websocket::{futures::WebSocket, Message};

    let api = settings.client();
    let url = api.events_url();
    let socket = match WebSocket::open(&url) {
        Ok(socket) => socket,
        Err(e) => {
            tracing::warn!("event socket {url} unavailable: {e}");
            return;
        }
    };
    tracing::info!("event socket connected: {url}");

    let (mut sender, mut receiver) = socket.split();
    let hello = ClientMessage::Authenticate {
        token: settings.token.clone(),
    };
    if let Err(e) = sender.send(Message::Text(hello.to_json())).await {
        tracing::warn!("event socket authentication failed to send: {e}");
        return;
    }

    while let Some(msg) = receiver.next().await {
        match msg {
            Ok(Message::Text(text)) => {
                actions::handle_push_message(&api, &settings.token, &text, &mut dispatch).await;
            }
            Ok(Message::Bytes(_)) => {}
            Err(e) => {
                tracing::warn!("event socket error: {e}");
                break;
            }
        }
    }

    tracing::info!("event socket closed");
}
