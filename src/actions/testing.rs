use crate::api::{ActionError, ApiRequest, ApiResponse, Transport};
use crate::store::Action;
use async_trait::async_trait;
use std::cell::RefCell;
use std::collections::VecDeque;

/// Transport stub that records every request and replays canned replies.
#[derive(Default)]
pub struct StubTransport {
    requests: RefCell<Vec<ApiRequest>>,
    replies: RefCell<VecDeque<Result<ApiResponse, ActionError>>>,
}

impl StubTransport {
    pub fn replying(status: u16, status_text: &str, body: &str) -> Self {
        let stub = Self::default();
        stub.push_reply(Ok(ApiResponse {
            status,
            status_text: status_text.to_string(),
            body: body.to_string(),
        }));
        stub
    }

    pub fn failing(message: &str) -> Self {
        let stub = Self::default();
        stub.push_reply(Err(ActionError::Transport(message.to_string())));
        stub
    }

    pub fn push_reply(&self, reply: Result<ApiResponse, ActionError>) {
        self.replies.borrow_mut().push_back(reply);
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }
}

#[async_trait(?Send)]
impl Transport for StubTransport {
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, ActionError> {
        self.requests.borrow_mut().push(request);
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ActionError::Transport("no reply queued".to_string())))
    }
}

pub fn action_names(actions: &[Action]) -> Vec<&'static str> {
    actions.iter().map(Action::name).collect()
}
