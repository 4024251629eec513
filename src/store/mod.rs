//! Flat-file persistence for the two marketplace collections.
//!
//! Each collection lives in a single JSON array file that is read and
//! rewritten whole on every operation. The store traits are the seam for
//! swapping in a real embedded database later without touching the listing
//! or auth services.

mod json_file;

pub use json_file::{JsonListingStore, JsonUserStore};

use thiserror::Error;

use crate::models::{Listing, User};

/// Persistence error type
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Repository of property listings
///
/// `load` returns an empty collection when the backing store does not exist
/// yet. `save` overwrites the whole store with a snapshot of the given
/// collection, preserving its order. There is no locking and no atomic swap;
/// a single logical writer is assumed.
pub trait ListingStore: Send + Sync {
    fn load(&self) -> Result<Vec<Listing>, StoreError>;
    fn save(&self, listings: &[Listing]) -> Result<(), StoreError>;
}

/// Repository of user accounts, with the same contract as [`ListingStore`]
pub trait UserStore: Send + Sync {
    fn load(&self) -> Result<Vec<User>, StoreError>;
    fn save(&self, users: &[User]) -> Result<(), StoreError>;
}
