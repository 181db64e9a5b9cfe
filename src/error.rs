//! Error type shared by the fetch, parse and route layers.

use thiserror::Error;

/// Everything that can go wrong between sending a request and holding parsed
/// records. Nothing is recovered locally; callers propagate with `?`.
#[derive(Debug, Error)]
pub enum Error {
    /// Connection, DNS or transport failure.
    #[error("network error: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("network error: {url} returned {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("invalid url `{url}`: {message}")]
    InvalidUrl { url: String, message: String },

    /// A local response file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The body is not valid JSON.
    #[error("malformed data: {0}")]
    MalformedData(#[source] serde_json::Error),

    #[error("malformed data: expected an array of stops, found {found}")]
    NotAnArray { found: &'static str },

    #[error("malformed data: stop #{index} is {found}, not an object")]
    NotAnObject { index: usize, found: &'static str },

    #[error("missing field `{field}` in stop #{index}")]
    MissingField { index: usize, field: &'static str },

    #[error("invalid field in stop #{index}: {source}")]
    InvalidField {
        index: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("not implemented: {0}")]
    NotImplemented(&'static str),
}

impl Error {
    /// True for failures that happened before a body was obtained.
    pub fn is_network(&self) -> bool {
        matches!(
            self,
            Error::Request(_) | Error::Status { .. } | Error::InvalidUrl { .. } | Error::Io { .. }
        )
    }

    /// True when a body was obtained but is not the JSON shape we expect.
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            Error::MalformedData(_) | Error::NotAnArray { .. } | Error::NotAnObject { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// Names a JSON value's kind for error messages.
pub(crate) fn kind_of(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
