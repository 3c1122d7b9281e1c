//! # Stub Data Source
//!
//! A [`UserSource`] whose result is scripted by the test. It can optionally be
//! gated so the test decides when the fetch resolves.

use super::{SourceError, UserSource};
use crate::model::User;
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::Notify;

/// Scripted user source.
///
/// # Example
/// ```ignore
/// let source = StubUserSource::resolving(vec![user]);
/// let outcome = load_users(&store, &source).await;
/// ```
pub struct StubUserSource {
    result: Result<Vec<User>, String>,
    gate: Option<Arc<Notify>>,
    calls: AtomicUsize,
}

impl StubUserSource {
    /// A source that resolves with `users`.
    pub fn resolving(users: Vec<User>) -> Self {
        Self {
            result: Ok(users),
            gate: None,
            calls: AtomicUsize::new(0),
        }
    }

    /// A source that rejects with `message`.
    pub fn rejecting(message: impl Into<String>) -> Self {
        Self {
            result: Err(message.into()),
            gate: None,
            calls: AtomicUsize::new(0),
        }
    }

    /// Holds every fetch until the returned handle is notified.
    pub fn gated(mut self) -> (Self, Arc<Notify>) {
        let gate = Arc::new(Notify::new());
        self.gate = Some(gate.clone());
        (self, gate)
    }

    /// How many times `fetch_users` was called.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UserSource for StubUserSource {
    async fn fetch_users(&self) -> Result<Vec<User>, SourceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        self.result.clone().map_err(SourceError::Other)
    }
}
