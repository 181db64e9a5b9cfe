//! HTTP retrieval of raw response bodies.

mod basic;
mod client;

pub use basic::BasicClient;
pub use client::HttpClient;

use tracing::debug;

use crate::error::{Error, Result};

/// Issues a single GET against `url` and returns the body.
///
/// # Errors
///
/// [`Error::InvalidUrl`] if `url` does not parse, [`Error::Request`] on
/// transport failure and [`Error::Status`] on a non-success response.
#[tracing::instrument(skip(client))]
pub async fn fetch_bytes<C: HttpClient>(client: &C, url: &str) -> Result<Vec<u8>> {
    let parsed = reqwest::Url::parse(url).map_err(|e| Error::InvalidUrl {
        url: url.to_string(),
        message: e.to_string(),
    })?;
    let req = reqwest::Request::new(reqwest::Method::GET, parsed);

    let resp = client.execute(req).await?;
    let status = resp.status();
    if !status.is_success() {
        return Err(Error::Status {
            url: url.to_string(),
            status,
        });
    }

    let bytes = resp.bytes().await?.to_vec();
    debug!(status = status.as_u16(), bytes = bytes.len(), "Response received");
    Ok(bytes)
}

/// True when `source` names an `http://` or `https://` URL rather than a file.
pub fn is_url(source: &str) -> bool {
    let lower = source.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Loads a body from an `http(s)://` URL or, for anything else, from a local
/// file holding a saved response.
pub async fn load<C: HttpClient>(client: &C, source: &str) -> Result<Vec<u8>> {
    if is_url(source) {
        fetch_bytes(client, source).await
    } else {
        debug!(path = source, "Reading response from file");
        std::fs::read(source).map_err(|e| Error::Io {
            path: source.to_string(),
            source: e,
        })
    }
}
