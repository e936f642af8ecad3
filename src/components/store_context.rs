//! Glue between the reducer and the component tree.

use crate::api::DimClient;
use crate::db::ClientSettings;
use crate::store::{Action, Dispatch, Store};
use dioxus::prelude::*;
use std::future::Future;

/// Dispatch sink handed out through context. Every action passes through
/// [`Store::reduce`] on the shared store signal.
#[derive(Clone, Copy, PartialEq)]
pub struct StoreDispatch {
    store: Signal<Store>,
}

impl StoreDispatch {
    pub fn new(store: Signal<Store>) -> Self {
        Self { store }
    }
}

impl Dispatch for StoreDispatch {
    fn dispatch(&mut self, action: Action) {
        if action.is_error() {
            tracing::warn!(action = action.name(), "action failed");
        } else {
            tracing::debug!(action = action.name(), "dispatch");
        }
        self.store.with_mut(|store| store.reduce(action));
    }
}

/// Runs an action creator against the configured server without tying the
/// caller to the settings signal.
pub fn spawn_action<F, Fut>(settings: Signal<ClientSettings>, dispatch: StoreDispatch, run: F)
where
    F: FnOnce(DimClient, String, StoreDispatch) -> Fut,
    Fut: Future<Output = ()> + 'static,
{
    let settings = settings.peek().clone();
    spawn(run(settings.client(), settings.token, dispatch));
}
