//! # Application Lifecycle
//!
//! Wires the store, the data source and the clients together at the
//! application root, and sets up logging.
//!
//! - [`ProfileManager`] - starts the store, runs the initial load, shuts down
//! - [`setup_tracing`] - initializes the tracing subscriber
//!
//! ## Dependency Injection
//!
//! There is no ambient lookup of the store. [`ProfileManager`] constructs it
//! once and consumers receive a [`UserClient`](crate::clients::UserClient)
//! clone as a constructor argument, so a consumer without a store cannot be
//! built in the first place.
//!
//! ## Graceful Shutdown
//!
//! 1. **Abandon the load** - a pending fetch is aborted and never written
//! 2. **Close the store** - the actor leaves its loop
//! 3. **Await completion** - the store task is joined
//!
//! Any client clone still held elsewhere fails afterwards with
//! [`StoreError::Unavailable`](crate::store::StoreError::Unavailable).

pub mod profile_manager;
pub mod tracing;

pub use profile_manager::*;
pub use self::tracing::*;
