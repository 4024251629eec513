use serde::{Deserialize, Serialize};

/// A property lot offered on the marketplace
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Listing {
    /// Unique id, assigned monotonically starting at 1
    pub id: u64,
    pub title: String,
    /// Asking price; defaults to 0 when the submitted value is unusable
    #[serde(default)]
    pub price: u64,
    pub description: String,
    /// Image URL or path shown on the listing page
    pub image: String,
    /// Username of the user who posted the listing
    pub owner: String,
}

impl Listing {
    /// Next id for a new listing: one past the current maximum, or 1 for an
    /// empty collection
    pub fn next_id(listings: &[Listing]) -> u64 {
        listings.iter().map(|l| l.id).max().unwrap_or(0) + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(id: u64) -> Listing {
        Listing {
            id,
            title: format!("Lot {}", id),
            price: 100,
            description: String::new(),
            image: String::new(),
            owner: "admin".to_string(),
        }
    }

    #[test]
    fn test_next_id_empty() {
        assert_eq!(Listing::next_id(&[]), 1);
    }

    #[test]
    fn test_next_id_sequential() {
        let listings = vec![listing(1), listing(2), listing(3)];
        assert_eq!(Listing::next_id(&listings), 4);
    }

    #[test]
    fn test_next_id_with_gaps() {
        // Ids are assigned from the maximum, not the count
        let listings = vec![listing(1), listing(7)];
        assert_eq!(Listing::next_id(&listings), 8);
    }

    #[test]
    fn test_price_defaults_when_missing() {
        let json = r#"{"id":1,"title":"Lot","description":"","image":"","owner":"admin"}"#;
        let parsed: Listing = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.price, 0);
    }
}
