//! Internal entities as the store keeps them.
//!
//! These types carry store-assigned identifiers and associations. They never leave the
//! process as-is: the [`Projector`](crate::projector::Projector) turns them into the
//! external [`shapes`](crate::shapes).

pub mod camp;
pub mod location;
pub mod speaker;
pub mod talk;

pub use camp::*;
pub use location::*;
pub use speaker::*;
pub use talk::*;
