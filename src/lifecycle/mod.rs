//! Runtime wiring: configuration, tracing, and the [`CampSystem`] that owns the store.

pub mod camp_system;
pub mod config;
pub mod tracing;

pub use camp_system::*;
pub use config::*;
pub use tracing::*;
