//! # Observability & Tracing
//!
//! Structured logging for the store, the loader and the HTTP source.
//!
//! ## What Gets Traced
//!
//! - **Store lifecycle**: startup, close, shutdown with the final collection size
//! - **Commands**: every applied command with the resulting size and loading flag
//! - **Load lifecycle**: fetch result, failure message, dropped late results
//! - **Client calls**: spans around add/update/delete
//!
//! ## Usage Examples
//!
//! ```bash
//! # Applied commands and load results
//! RUST_LOG=info cargo run
//!
//! # Full command payloads and HTTP request details
//! RUST_LOG=debug cargo run
//!
//! # Only the store
//! RUST_LOG=profile_manager::store=debug cargo run
//! ```
//!
//! With `RUST_LOG=info` a normal start looks like:
//!
//! ```text
//! INFO Store started
//! INFO Applied command="SetLoading" size=0 loading=true
//! INFO load_users:fetch_users: Fetched users count=10
//! INFO Applied command="SetUsers" size=10 loading=true
//! INFO load_users: Users loaded count=10
//! INFO Applied command="SetLoading" size=10 loading=false
//! ```

/// Initializes the tracing subscriber, filtered by `RUST_LOG`.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
