//! Shuttle routes. The payload is kept as raw JSON; there is no route model yet.

use serde_json::Value;
use std::convert::Infallible;
use tracing::info;

use crate::error::{Error, Result, kind_of};
use crate::fetch::{HttpClient, fetch_bytes, load};
use crate::parser::parse_json;

/// GETs the routes endpoint and returns the raw body.
pub async fn fetch_routes_json<C: HttpClient>(client: &C, url: &str) -> Result<Vec<u8>> {
    fetch_bytes(client, url).await
}

/// Typed route records. The server's route schema has not been pinned down,
/// so this never succeeds.
pub fn get_routes() -> Result<Infallible> {
    Err(Error::NotImplemented("route modeling"))
}

/// Loads the routes payload from `source` (a URL or a saved response file).
#[tracing::instrument(skip(client))]
pub async fn run<C: HttpClient>(client: &C, source: &str) -> Result<Value> {
    let bytes = load(client, source).await?;
    let data = parse_json(&bytes)?;
    info!(kind = kind_of(&data), "Routes parsed");
    Ok(data)
}
