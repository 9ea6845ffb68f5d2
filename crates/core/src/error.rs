use crate::lookup::LookupError;
use crate::messages;
use crate::patch::MovieField;
use crate::types::DbId;

/// Domain-level failures the HTTP layer maps onto client errors.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{}", messages::MOVIE_NOT_FOUND)]
    MovieNotFound { id: DbId },

    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error("Missing required fields: {}", join_keys(.fields))]
    MissingFields { fields: Vec<MovieField> },
}

fn join_keys(fields: &[MovieField]) -> String {
    fields
        .iter()
        .map(|f| f.key())
        .collect::<Vec<_>>()
        .join(", ")
}
