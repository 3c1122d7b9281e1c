//! # User Collection Store
//!
//! Single source of truth for the user list. The store is an actor: one task
//! owns [`CollectionState`] and applies [`Command`]s one after another through
//! the pure [`UserReducer`]. Consumers hold a [`StoreClient`], handed to them
//! explicitly by whoever built the store.
//!
//! # Main Components
//!
//! - [`Command`] - the closed set of mutations
//! - [`UserReducer`] - `(state, command) -> state`
//! - [`StoreActor`] - owns the state, serialises commands, publishes each new state
//! - [`StoreClient`] - cheap cloneable handle for dispatching and reading
//! - [`loader`] - the one-shot load lifecycle
//!
//! # Access Contract
//!
//! A client with no running actor behind it never hands out a default state:
//! every accessor fails with [`StoreError::Unavailable`], whose message is
//! [`NO_STORE_MESSAGE`].
//!
//! # Testing
//!
//! See [`mock`] for a client whose requests the test answers by hand.

pub mod actor;
pub mod client;
pub mod command;
pub mod error;
pub mod loader;
pub mod message;
pub mod mock;
pub mod reducer;
pub mod state;

pub use actor::StoreActor;
pub use client::StoreClient;
pub use command::Command;
pub use error::{StoreError, NO_STORE_MESSAGE};
pub use loader::{load_users, spawn_loader, LoadOutcome};
pub use message::{Response, StoreRequest};
pub use reducer::{Reducer, UserReducer};
pub use state::CollectionState;
