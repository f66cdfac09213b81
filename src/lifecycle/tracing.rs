//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter filtered by `RUST_LOG`.
//!
//! ```bash
//! RUST_LOG=info cargo run                       # one line per request outcome
//! RUST_LOG=debug cargo run                      # plus request payloads and store batches
//! RUST_LOG=codecamp::api=debug cargo run        # payloads for the resource layer only
//! ```
//!
//! Resource operations are `#[instrument]`ed, so store and repository events nest under
//! the operation that caused them:
//!
//! ```text
//! DEBUG create: create called shape=CampShape { name: Some("Code Camp"), moniker: Some("C1"), .. }
//! DEBUG create:commit: Committing mutations=1
//! INFO  create: Camp created moniker="C1" location=/api/camps/C1
//! ```
//!
//! Payloads are logged once at `debug`, when an operation starts. Everything after that
//! carries only identifiers.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
