//! First-run sample data.
//!
//! Mirrors the bootstrap behavior of the original marketplace: when a data
//! file does not exist yet, write a small set of sample records so a fresh
//! checkout serves something browsable.

use crate::models::{Listing, User};
use crate::security;
use crate::store::{JsonListingStore, JsonUserStore, ListingStore, StoreError, UserStore};

/// Default password of the seeded `admin` account
const ADMIN_PASSWORD: &str = "admin";

fn sample_listings() -> Vec<Listing> {
    vec![
        Listing {
            id: 1,
            title: "City-centre flat".to_string(),
            price: 7_500_000,
            description: "Two rooms, five minutes to the metro".to_string(),
            image: "/static/images/flat.svg".to_string(),
            owner: "admin".to_string(),
        },
        Listing {
            id: 2,
            title: "Lakeside house".to_string(),
            price: 12_500_000,
            description: "Plot, garden, garage".to_string(),
            image: "/static/images/house.svg".to_string(),
            owner: "admin".to_string(),
        },
        Listing {
            id: 3,
            title: "Seaside apartments".to_string(),
            price: 9_800_000,
            description: "Balcony with a sunset view".to_string(),
            image: "/static/images/seaside.svg".to_string(),
            owner: "admin".to_string(),
        },
    ]
}

/// Seed sample data for any backing file that does not exist yet
pub fn ensure_seed_data(
    listings: &JsonListingStore,
    users: &JsonUserStore,
) -> Result<(), StoreError> {
    if !listings.path().exists() {
        tracing::info!("Seeding sample listings at {:?}", listings.path());
        listings.save(&sample_listings())?;
    }

    if !users.path().exists() {
        tracing::info!("Seeding admin user at {:?}", users.path());
        users.save(&[User {
            id: 1,
            username: "admin".to_string(),
            password_hash: security::hash_password(ADMIN_PASSWORD),
        }])?;
    }

    Ok(())
}
