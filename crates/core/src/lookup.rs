//! Exactly-one record lookup.
//!
//! Single-record endpoints for directors and genres require that an id
//! matches exactly one row. [`Lookup`] makes the three possible outcomes
//! explicit so callers decide how each maps onto a response.

/// Outcome of an exactly-one lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup<T> {
    Found(T),
    NotFound,
    Ambiguous,
}

impl<T> Lookup<T> {
    /// Classify a result set. Callers only need to fetch two rows to tell
    /// a unique match from an ambiguous one.
    pub fn from_rows(rows: Vec<T>) -> Self {
        let mut rows = rows.into_iter();
        match (rows.next(), rows.next()) {
            (None, _) => Lookup::NotFound,
            (Some(row), None) => Lookup::Found(row),
            (Some(_), Some(_)) => Lookup::Ambiguous,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Lookup<U> {
        match self {
            Lookup::Found(value) => Lookup::Found(f(value)),
            Lookup::NotFound => Lookup::NotFound,
            Lookup::Ambiguous => Lookup::Ambiguous,
        }
    }

    pub fn into_result(self) -> Result<T, LookupError> {
        match self {
            Lookup::Found(value) => Ok(value),
            Lookup::NotFound => Err(LookupError::NoResult),
            Lookup::Ambiguous => Err(LookupError::MultipleResults),
        }
    }
}

/// Why an exactly-one lookup did not produce a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    #[error("No row was found when one was required")]
    NoResult,

    #[error("Multiple rows were found when exactly one was required")]
    MultipleResults,
}
