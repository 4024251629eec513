pub mod listing;
pub mod user;

pub use listing::Listing;
pub use user::User;
