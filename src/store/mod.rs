//! # Camp Store
//!
//! The camp schema ([`CampDb`]) and the factory that puts it behind an
//! [`entity_store::StoreActor`].
//!
//! ## Structure
//!
//! - [`schema`] - tables, [`CampQuery`], [`CampMutation`] and the `Schema` implementation
//! - [`error`] - [`CampDbError`], the constraint failures that roll a commit back
//! - [`seed`] - sample data
//!
//! ## Usage
//!
//! ```rust
//! use codecamp::store::{self, CampDb, CampOutput, CampQuery};
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = store::new(32, CampDb::seeded().unwrap());
//!     tokio::spawn(actor.run());
//!
//!     let output = client
//!         .query(CampQuery::Camp { moniker: "ATL2018".into(), include_talks: true })
//!         .await
//!         .unwrap();
//!     assert!(matches!(output, CampOutput::Camp(Some(_))));
//! }
//! ```

pub mod error;
pub mod schema;
pub mod seed;

pub use error::*;
pub use schema::*;

use entity_store::{StoreActor, StoreClient};

/// Creates a store actor hosting `db` and its client.
pub fn new(buffer_size: usize, db: CampDb) -> (StoreActor<CampDb>, StoreClient<CampDb>) {
    StoreActor::new(buffer_size, db)
}
