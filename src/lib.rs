//! # Profile Manager
//!
//! > **A user-profile list with an actor-backed collection store.**
//!
//! The crate fetches a user list from a REST endpoint, keeps it in an
//! in-memory store, renders it as a paginated table and applies local
//! create/edit/delete operations. Nothing is persisted.
//!
//! ## Core Concepts
//!
//! ### One store, one writer
//! [`store::StoreActor`] owns the `{users, loading, error}` state. Every change
//! is a [`store::Command`] applied by the pure [`store::UserReducer`], one
//! command at a time, so readers only ever see whole states.
//!
//! ### Load once
//! When the store is created, [`store::loader`] runs the fetch exactly once:
//! `SetLoading(true)`, then `SetUsers` or `SetError`, then `SetLoading(false)`.
//!
//! ### Explicit wiring
//! [`lifecycle::ProfileManager`] builds the store at the root and passes a
//! [`clients::UserClient`] to whoever needs it. A client whose store is gone
//! fails with a fixed message instead of returning an empty list.
//!
//! ## Module Tour
//!
//! - [`model`] - the `User` record and the form's `UserDraft`
//! - [`store`] - commands, reducer, actor, client, load lifecycle
//! - [`source`] - where users come from (HTTP or stub)
//! - [`form`] - validation rules and messages
//! - [`clients`] - the view layer's API over the store
//! - [`view`] - list and detail renderings
//! - [`config`] - TOML configuration
//! - [`lifecycle`] - startup, shutdown, tracing
//!
//! ## Running
//!
//! ```bash
//! RUST_LOG=info cargo run -- --page 2 --sort-by-name
//! ```

pub mod clients;
pub mod config;
pub mod form;
pub mod lifecycle;
pub mod model;
pub mod source;
pub mod store;
pub mod view;
