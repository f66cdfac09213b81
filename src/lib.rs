//! # Code Camp
//!
//! A REST service for code camps, the talks given at them, and the speakers giving the talks.
//!
//! ## Layers
//!
//! Requests flow top to bottom; each layer only knows the one beneath it.
//!
//! 1. [`http`] - axum routes and extractor error handling.
//! 2. [`api`] - [`CampsApi`](api::CampsApi) and [`TalksApi`](api::TalksApi): preconditions,
//!    status codes, `Location` URIs.
//! 3. [`projector`] - converts between stored entities ([`model`]) and the shapes
//!    clients see ([`shapes`]).
//! 4. [`repository`] - the [`CampRepository`](repository::CampRepository) contract: typed
//!    reads plus a stage-then-commit unit of work.
//! 5. [`store`] - the in-memory camp schema, hosted by an `entity_store` actor that applies
//!    each commit atomically.
//!
//! [`lifecycle`] wires these together into a [`CampSystem`](lifecycle::CampSystem).
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use codecamp::lifecycle::{AppConfig, CampSystem};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = AppConfig::default();
//!     let system = CampSystem::new(&config)?;
//!     let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
//!     axum::serve(listener, system.router()).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Testing
//!
//! Everything below [`api`] talks to the store through a `StoreClient`, so tests can swap the
//! running store for `entity_store::mock::MockStore` and script failures:
//!
//! ```rust,ignore
//! let mut mock = MockStore::<CampDb>::new();
//! mock.expect_query().return_err(StoreError::StoreClosed);
//! let api = CampsApi::new(StoreRepository::new(mock.client()), Projector::new(), ResourceLinks::default());
//! assert_eq!(api.list(false).await.unwrap_err().status(), StatusCode::INTERNAL_SERVER_ERROR);
//! ```

pub mod api;
pub mod http;
pub mod lifecycle;
pub mod model;
pub mod projector;
pub mod repository;
pub mod shapes;
pub mod store;
