//! View-rendering seam.
//!
//! Template design is outside this crate's scope: handlers build typed page
//! contexts and hand them to a [`Renderer`]. The built-in [`PlainRenderer`]
//! produces minimal plain-text markup so the HTTP surface works end to end;
//! a real template engine can be dropped in behind the same trait.

use crate::listings::SortMode;
use crate::models::Listing;

/// State shared by every page: who is signed in, and the pending one-shot
/// message (the flash is already consumed from the session by the time it
/// reaches the renderer)
#[derive(Debug, Clone, Default)]
pub struct PageContext {
    pub current_user: Option<String>,
    pub flash: Option<String>,
}

/// Typed render context for each page of the site
#[derive(Debug, Clone)]
pub enum Page {
    Index {
        listings: Vec<Listing>,
        query: String,
        sort: SortMode,
    },
    Property {
        listing: Listing,
    },
    AddForm,
    Login {
        next: Option<String>,
    },
    Register,
    Profile {
        username: String,
        listings: Vec<Listing>,
    },
}

/// External view-rendering collaborator
pub trait Renderer: Send + Sync {
    fn render(&self, page: &Page, ctx: &PageContext) -> String;
}

/// Minimal built-in renderer: one line per piece of context
pub struct PlainRenderer;

impl PlainRenderer {
    fn listing_line(listing: &Listing) -> String {
        format!(
            "#{} {} | {} | owner: {}",
            listing.id, listing.title, listing.price, listing.owner
        )
    }
}

impl Renderer for PlainRenderer {
    fn render(&self, page: &Page, ctx: &PageContext) -> String {
        let mut out = String::new();

        if let Some(flash) = &ctx.flash {
            out.push_str(&format!("* {}\n", flash));
        }
        if let Some(user) = &ctx.current_user {
            out.push_str(&format!("signed in as {}\n", user));
        }

        match page {
            Page::Index {
                listings,
                query,
                sort,
            } => {
                out.push_str("Lots\n");
                if !query.is_empty() {
                    out.push_str(&format!("filter: {}\n", query));
                }
                if *sort != SortMode::None {
                    out.push_str(&format!("sort: {:?}\n", sort));
                }
                for listing in listings {
                    out.push_str(&Self::listing_line(listing));
                    out.push('\n');
                }
            }
            Page::Property { listing } => {
                out.push_str(&format!("Lot #{}\n", listing.id));
                out.push_str(&format!("{}\n", listing.title));
                out.push_str(&format!("price: {}\n", listing.price));
                out.push_str(&format!("{}\n", listing.description));
                out.push_str(&format!("image: {}\n", listing.image));
                out.push_str(&format!("owner: {}\n", listing.owner));
            }
            Page::AddForm => {
                out.push_str("Add a lot\nfields: title, price, description, image\n");
            }
            Page::Login { next } => {
                out.push_str("Sign in\nfields: username, password\n");
                if let Some(next) = next {
                    out.push_str(&format!("next: {}\n", next));
                }
            }
            Page::Register => {
                out.push_str("Register\nfields: username, password\n");
            }
            Page::Profile { username, listings } => {
                out.push_str(&format!("Profile: {}\n", username));
                for listing in listings {
                    out.push_str(&Self::listing_line(listing));
                    out.push('\n');
                }
            }
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_listing() -> Listing {
        Listing {
            id: 1,
            title: "Lakeside house".to_string(),
            price: 12_500_000,
            description: "Garden and garage".to_string(),
            image: "/static/images/house.svg".to_string(),
            owner: "admin".to_string(),
        }
    }

    #[test]
    fn test_index_includes_titles_and_flash() {
        let page = Page::Index {
            listings: vec![sample_listing()],
            query: String::new(),
            sort: SortMode::None,
        };
        let ctx = PageContext {
            current_user: Some("alice".to_string()),
            flash: Some("Lot added".to_string()),
        };

        let body = PlainRenderer.render(&page, &ctx);
        assert!(body.contains("Lakeside house"));
        assert!(body.contains("Lot added"));
        assert!(body.contains("signed in as alice"));
    }

    #[test]
    fn test_property_page_has_details() {
        let page = Page::Property {
            listing: sample_listing(),
        };
        let body = PlainRenderer.render(&page, &PageContext::default());

        assert!(body.contains("Lot #1"));
        assert!(body.contains("price: 12500000"));
        assert!(body.contains("owner: admin"));
    }

    #[test]
    fn test_login_page_carries_next_target() {
        let page = Page::Login {
            next: Some("/property/1".to_string()),
        };
        let body = PlainRenderer.render(&page, &PageContext::default());
        assert!(body.contains("next: /property/1"));
    }
}
