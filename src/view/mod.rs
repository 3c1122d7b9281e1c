//! # View Layer
//!
//! Plain-text renderings of the collection: a paginated list with per-row
//! affordances and a detail card for one user. Views only read state; every
//! change goes through [`UserClient`](crate::clients::UserClient).

pub mod detail;
pub mod list;

pub use detail::*;
pub use list::*;
