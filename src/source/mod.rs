//! # User Data Source
//!
//! Retrieves the initial user collection. The store only depends on the
//! [`UserSource`] trait; [`HttpUserSource`] talks to the REST endpoint and
//! [`mock::StubUserSource`] scripts results for tests.

pub mod error;
pub mod http;
pub mod mock;

pub use error::*;
pub use http::*;

use crate::model::User;
use async_trait::async_trait;

/// Anything that can produce the initial list of users.
#[async_trait]
pub trait UserSource: Send + Sync {
    /// Fetch all users, already mapped to [`User`] records.
    async fn fetch_users(&self) -> Result<Vec<User>, SourceError>;
}
