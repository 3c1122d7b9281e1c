//! Pure data structures managed by the user collection store.

pub mod user;

pub use user::*;
