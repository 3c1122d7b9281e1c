//! Type-safe wrappers around [`StoreClient`](crate::store::StoreClient).

pub mod error;
pub mod user_client;

pub use error::*;
pub use user_client::*;
