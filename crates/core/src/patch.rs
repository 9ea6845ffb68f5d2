//! Field-level update rules for movies.
//!
//! A movie has seven editable fields. Partial updates inspect them in a
//! fixed priority order; full updates require every one of them.

use std::fmt;
use std::str::FromStr;

/// An editable movie column, named by its JSON key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MovieField {
    Title,
    Description,
    Trailer,
    Year,
    Rating,
    GenreId,
    DirectorId,
}

impl MovieField {
    /// Priority order used when choosing which fields a partial update touches.
    pub const PRIORITY: [MovieField; 7] = [
        MovieField::Title,
        MovieField::Description,
        MovieField::Trailer,
        MovieField::Year,
        MovieField::Rating,
        MovieField::GenreId,
        MovieField::DirectorId,
    ];

    pub const fn key(self) -> &'static str {
        match self {
            MovieField::Title => "title",
            MovieField::Description => "description",
            MovieField::Trailer => "trailer",
            MovieField::Year => "year",
            MovieField::Rating => "rating",
            MovieField::GenreId => "genre_id",
            MovieField::DirectorId => "director_id",
        }
    }
}

impl fmt::Display for MovieField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// How a PATCH body is applied.
///
/// `FirstMatch` applies only the highest-priority field present in the
/// body and ignores the rest. This is the long-standing public contract
/// and stays the default. `Merge` applies every present field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PatchMode {
    #[default]
    FirstMatch,
    Merge,
}

impl PatchMode {
    /// Pick the fields to write, in priority order.
    pub fn select(self, is_present: impl Fn(MovieField) -> bool) -> Vec<MovieField> {
        let present = MovieField::PRIORITY.into_iter().filter(|f| is_present(*f));
        match self {
            PatchMode::FirstMatch => present.take(1).collect(),
            PatchMode::Merge => present.collect(),
        }
    }
}

impl fmt::Display for PatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatchMode::FirstMatch => f.write_str("first-match"),
            PatchMode::Merge => f.write_str("merge"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown patch mode '{0}' (expected 'first-match' or 'merge')")]
pub struct ParsePatchModeError(pub String);

impl FromStr for PatchMode {
    type Err = ParsePatchModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "first-match" | "first_match" => Ok(PatchMode::FirstMatch),
            "merge" => Ok(PatchMode::Merge),
            other => Err(ParsePatchModeError(other.to_string())),
        }
    }
}

/// Fields a full update is missing, in priority order.
pub fn missing_fields(is_present: impl Fn(MovieField) -> bool) -> Vec<MovieField> {
    MovieField::PRIORITY
        .into_iter()
        .filter(|f| !is_present(*f))
        .collect()
}
