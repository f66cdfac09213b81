//! # Resource API
//!
//! HTTP-shaped orchestration for camps and talks. Every operation:
//!
//! 1. checks its preconditions (shape constraints, existence, references),
//! 2. works against a fresh repository unit of work,
//! 3. projects entities to external shapes for the response.
//!
//! Operations return [`ApiResult`]: a [`Reply`] (status, optional `Location`, body) or an
//! [`ApiError`]. Neither panics nor lets a store failure escape as anything but
//! [`ApiError::Store`] (500). A commit that changes nothing is [`ApiError::CommitFailed`]
//! (400).
//!
//! The types here know nothing about routing; [`crate::http`] mounts them on axum.

pub mod camps;
pub mod error;
pub mod links;
pub mod reply;
pub mod talks;

pub use camps::CampsApi;
pub use error::*;
pub use links::ResourceLinks;
pub use reply::*;
pub use talks::TalksApi;
