use super::library::{handle_ws_del_library, handle_ws_new_library};
use crate::api::events::{PushEvent, PushEventType};
use crate::api::Transport;
use crate::store::Dispatch;

/// Routes one text frame from the event socket. Returns the decoded event
/// type, or `None` when the frame was not a push event.
pub async fn handle_push_message<T, D>(
    api: &T,
    token: &str,
    text: &str,
    dispatch: &mut D,
) -> Option<PushEventType>
where
    T: Transport + ?Sized,
    D: Dispatch + ?Sized,
{
    let event = match PushEvent::parse(text) {
        Ok(event) => event,
        Err(e) => {
            tracing::debug!("skipping undecodable push frame: {e}");
            return None;
        }
    };

    match event.event_type {
        PushEventType::EventNewLibrary => handle_ws_new_library(api, token, event.id, dispatch).await,
        PushEventType::EventRemoveLibrary => handle_ws_del_library(event.id, dispatch),
        PushEventType::EventAuthOk => tracing::info!("event socket authenticated"),
        PushEventType::EventAuthErr => tracing::warn!("event socket rejected the token"),
        PushEventType::Other => {}
    }

    Some(event.event_type)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::testing::StubTransport;
    use crate::store::Action;

    #[tokio::test]
    async fn remove_event_dispatches_rm_library() {
        let api = StubTransport::default();
        let mut actions = Vec::new();
        let kind = handle_push_message(
            &api,
            "tok",
            r#"{"id": 6, "type": "EventRemoveLibrary"}"#,
            &mut |a: Action| actions.push(a),
        )
        .await;

        assert_eq!(kind, Some(PushEventType::EventRemoveLibrary));
        assert_eq!(actions, vec![Action::RmLibrary { id: 6 }]);
        assert!(api.requests().is_empty());
    }

    #[tokio::test]
    async fn new_library_event_refetches_that_library() {
        let api = StubTransport::replying(200, "OK", r#"{"id": 6, "name": "Anime"}"#);
        let mut actions = Vec::new();
        handle_push_message(
            &api,
            "tok",
            r#"{"id": 6, "type": "EventNewLibrary"}"#,
            &mut |a: Action| actions.push(a),
        )
        .await;

        assert_eq!(api.requests()[0].path, "/api/v1/library/6");
        match &actions[..] {
            [Action::AddLibrary(library)] => assert_eq!(library.name, "Anime"),
            other => panic!("unexpected actions {other:?}"),
        }
    }

    #[tokio::test]
    async fn garbage_and_foreign_events_are_ignored() {
        let api = StubTransport::default();
        let mut actions = Vec::new();

        let kind = handle_push_message(&api, "tok", "not json", &mut |a: Action| actions.push(a)).await;
        assert_eq!(kind, None);

        let kind = handle_push_message(
            &api,
            "tok",
            r#"{"id": 1, "type": "EventNewCard"}"#,
            &mut |a: Action| actions.push(a),
        )
        .await;
        assert_eq!(kind, Some(PushEventType::Other));
        assert!(actions.is_empty());
    }
}
