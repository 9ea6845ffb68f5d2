//! Pretty-printed JSON responses.
//!
//! Catalog responses are indented JSON with non-ASCII text left unescaped,
//! so clients and humans read Cyrillic titles and messages as-is.
//! Use [`Pretty`] instead of `axum::Json` for every response body.

use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

/// Indentation used when no configured value is at hand.
pub const DEFAULT_INDENT: usize = 3;

/// A JSON body rendered with a fixed indentation width.
#[derive(Debug, Clone)]
pub struct Pretty<T> {
    value: T,
    indent: usize,
}

impl<T: Serialize> Pretty<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            indent: DEFAULT_INDENT,
        }
    }

    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }
}

/// Serialize `value` with `indent` spaces per level.
///
/// `serde_json` never escapes non-ASCII characters, only control
/// characters, quotes and backslashes.
pub fn to_pretty_vec<T: Serialize + ?Sized>(
    value: &T,
    indent: usize,
) -> Result<Vec<u8>, serde_json::Error> {
    let indent = " ".repeat(indent);
    let mut buf = Vec::with_capacity(128);
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(indent.as_bytes()));
    value.serialize(&mut serializer)?;
    Ok(buf)
}

impl<T: Serialize> IntoResponse for Pretty<T> {
    fn into_response(self) -> Response {
        match to_pretty_vec(&self.value, self.indent) {
            Ok(bytes) => (
                [(CONTENT_TYPE, HeaderValue::from_static("application/json"))],
                bytes,
            )
                .into_response(),
            Err(err) => {
                tracing::error!(error = %err, "Failed to serialize response body");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    [(CONTENT_TYPE, HeaderValue::from_static("text/plain; charset=utf-8"))],
                    err.to_string(),
                )
                    .into_response()
            }
        }
    }
}
