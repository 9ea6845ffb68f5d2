//! Domain rules for the movie catalog.
//!
//! Everything here is storage- and transport-agnostic: the db crate maps
//! rows onto these rules and the api crate maps their outcomes onto HTTP.

pub mod error;
pub mod lookup;
pub mod messages;
pub mod patch;
pub mod serde_helpers;
pub mod types;
