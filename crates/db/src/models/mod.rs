//! Row structs and request DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - `Deserialize` DTOs for the request bodies that touch that table

pub mod director;
pub mod genre;
pub mod movie;
