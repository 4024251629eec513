//! Listing service: querying, filtering, sorting, and creation.

use std::sync::Arc;

use crate::models::Listing;
use crate::store::{ListingStore, StoreError};

/// Placeholder image used when a new listing omits one
pub const DEFAULT_IMAGE: &str = "/static/images/default.svg";

/// Requested ordering for the listing index
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortMode {
    /// File order, unchanged
    #[default]
    None,
    /// Cheapest first
    PriceAsc,
    /// Most expensive first
    PriceDesc,
}

impl SortMode {
    /// Parse the `sort` query parameter; anything unrecognized means no sort
    pub fn from_param(param: Option<&str>) -> Self {
        match param {
            Some("asc") => SortMode::PriceAsc,
            Some("desc") => SortMode::PriceDesc,
            _ => SortMode::None,
        }
    }
}

/// Coerce raw form input into a non-negative price
///
/// Empty, absent, unparsable, and negative values all coerce to 0. This
/// mirrors the lenient input handling of the original marketplace rather
/// than rejecting bad input.
pub fn coerce_price(raw: Option<&str>) -> u64 {
    raw.map(str::trim)
        .and_then(|s| s.parse().ok())
        .unwrap_or(0)
}

/// Fields accepted for a new listing, before coercion defaults apply
#[derive(Debug, Clone)]
pub struct NewListing {
    pub title: String,
    pub price: u64,
    pub description: String,
    pub image: Option<String>,
}

/// Service over the listing repository
#[derive(Clone)]
pub struct ListingService {
    store: Arc<dyn ListingStore>,
}

impl ListingService {
    pub fn new(store: Arc<dyn ListingStore>) -> Self {
        Self { store }
    }

    /// All listings, optionally filtered by a case-insensitive title
    /// substring and sorted by price
    ///
    /// The sort is stable: listings with equal prices keep their stored
    /// relative order.
    pub fn list_all(
        &self,
        query: Option<&str>,
        sort: SortMode,
    ) -> Result<Vec<Listing>, StoreError> {
        let mut listings = self.store.load()?;

        if let Some(query) = query.map(str::to_lowercase).filter(|q| !q.is_empty()) {
            listings.retain(|l| l.title.to_lowercase().contains(&query));
        }

        match sort {
            SortMode::None => {}
            SortMode::PriceAsc => listings.sort_by_key(|l| l.price),
            SortMode::PriceDesc => listings.sort_by_key(|l| std::cmp::Reverse(l.price)),
        }

        Ok(listings)
    }

    /// Look up a single listing by id
    pub fn get_by_id(&self, id: u64) -> Result<Option<Listing>, StoreError> {
        Ok(self.store.load()?.into_iter().find(|l| l.id == id))
    }

    /// Listings posted by the given user, in stored order
    pub fn list_by_owner(&self, owner: &str) -> Result<Vec<Listing>, StoreError> {
        let mut listings = self.store.load()?;
        listings.retain(|l| l.owner == owner);
        Ok(listings)
    }

    /// Create a listing owned by `owner` and persist the collection
    ///
    /// Title and description are trimmed; an absent or empty image falls
    /// back to [`DEFAULT_IMAGE`]. The new id is one past the current
    /// maximum.
    pub fn create(&self, new: NewListing, owner: &str) -> Result<Listing, StoreError> {
        let mut listings = self.store.load()?;

        let listing = Listing {
            id: Listing::next_id(&listings),
            title: new.title.trim().to_string(),
            price: new.price,
            description: new.description.trim().to_string(),
            image: new
                .image
                .filter(|i| !i.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_IMAGE.to_string()),
            owner: owner.to_string(),
        };

        listings.push(listing.clone());
        self.store.save(&listings)?;

        tracing::info!("Listing {} created by {}", listing.id, owner);
        Ok(listing)
    }
}
