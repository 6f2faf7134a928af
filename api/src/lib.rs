//! This crate contains the client side of the MWDB REST API used by the UI.

pub mod client;
pub mod error;
pub mod favorites;
pub mod object;
pub mod prefs;

pub use client::MwdbClient;
pub use error::ApiError;
pub use favorites::FavoriteApi;
pub use object::ObjectId;
pub use object::ObjectSummary;
pub use object::ObjectType;
