//! Shuttle stops: the [`Stop`] record, its text rendering, and the fetch
//! pipeline for the stops endpoint.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::info;

use crate::error::Result;
use crate::fetch::{HttpClient, fetch_bytes, load};
use crate::parser::parse_stops;

/// Opaque stop identifier. The API has served both numeric and string ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StopId {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopId::Number(n) => write!(f, "{n}"),
            StopId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for StopId {
    fn from(id: i64) -> Self {
        StopId::Number(id.into())
    }
}

impl From<&str> for StopId {
    fn from(id: &str) -> Self {
        StopId::Text(id.to_string())
    }
}

/// One coordinate in decimal degrees, kept as the JSON number it arrived as so
/// an integer prints without a fractional part.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Coordinate {
    Int(i64),
    Float(f64),
}

impl Coordinate {
    pub fn degrees(self) -> f64 {
        match self {
            Coordinate::Int(v) => v as f64,
            Coordinate::Float(v) => v,
        }
    }
}

impl From<i64> for Coordinate {
    fn from(v: i64) -> Self {
        Coordinate::Int(v)
    }
}

impl From<f64> for Coordinate {
    fn from(v: f64) -> Self {
        Coordinate::Float(v)
    }
}

/// Integers print as-is. Floats print in shortest round-trip form with a
/// trailing `.0` on whole values, switching to `1e-05` / `1e+16` style when
/// the decimal exponent is below -4 or at least 16.
impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Coordinate::Int(v) => write!(f, "{v}"),
            Coordinate::Float(v) => write_float(f, v),
        }
    }
}

fn write_float(f: &mut fmt::Formatter<'_>, v: f64) -> fmt::Result {
    if !v.is_finite() {
        return write!(f, "{v}");
    }
    let sign = if v.is_sign_negative() { "-" } else { "" };
    if v == 0.0 {
        return write!(f, "{sign}0.0");
    }

    // `{:e}` yields the shortest round-trip digits, e.g. `4.273e1`.
    let sci = format!("{:e}", v.abs());
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return write!(f, "{v}");
    };
    let Ok(exp) = exp.parse::<i32>() else {
        return write!(f, "{v}");
    };
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let point = exp + 1;

    if point <= -4 || point > 16 {
        let (head, tail) = digits.split_at(1);
        let exp_sign = if exp < 0 { '-' } else { '+' };
        if tail.is_empty() {
            write!(f, "{sign}{head}e{exp_sign}{:02}", exp.abs())
        } else {
            write!(f, "{sign}{head}.{tail}e{exp_sign}{:02}", exp.abs())
        }
    } else if point <= 0 {
        let zeros = "0".repeat(point.unsigned_abs() as usize);
        write!(f, "{sign}0.{zeros}{digits}")
    } else {
        let point = point as usize;
        if digits.len() <= point {
            let zeros = "0".repeat(point - digits.len());
            write!(f, "{sign}{digits}{zeros}.0")
        } else {
            let (whole, frac) = digits.split_at(point);
            write!(f, "{sign}{whole}.{frac}")
        }
    }
}

/// A shuttle pickup/drop-off location. Coordinates are decimal degrees and are
/// not range-checked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stop {
    id: StopId,
    latitude: Coordinate,
    longitude: Coordinate,
    name: String,
}

impl Stop {
    pub fn new(
        id: impl Into<StopId>,
        latitude: impl Into<Coordinate>,
        longitude: impl Into<Coordinate>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            latitude: latitude.into(),
            longitude: longitude.into(),
            name: name.into(),
        }
    }

    pub fn id(&self) -> &StopId {
        &self.id
    }

    /// `(latitude, longitude)`
    pub fn coords(&self) -> (f64, f64) {
        (self.latitude.degrees(), self.longitude.degrees())
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Renders as
/// `Stop ID: 1, Stop Name: Commons, Stop latitude: 42.73, Stop langitude: -73.68`.
///
/// The "langitude" label is kept as the tracker has always printed it, so
/// anything scraping this output keeps working.
impl fmt::Display for Stop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stop ID: {}, Stop Name: {}, Stop latitude: {}, Stop langitude: {}",
            self.id,
            self.name, self.latitude, self.longitude
        )
    }
}

/// One stop on one line.
pub fn render_stop(stop: &Stop) -> String {
    stop.to_string()
}

/// The whole list in one line: `[<stop>, <stop>]`, or `[]` when empty.
pub fn render_stops(stops: &[Stop]) -> String {
    let inner: Vec<String> = stops.iter().map(render_stop).collect();
    format!("[{}]", inner.join(", "))
}

/// GETs the stops endpoint and returns the raw body.
pub async fn fetch_stops_json<C: HttpClient>(client: &C, url: &str) -> Result<Vec<u8>> {
    fetch_bytes(client, url).await
}

/// Loads stops from `source` (a URL or a saved response file) and parses them.
#[tracing::instrument(skip(client))]
pub async fn run<C: HttpClient>(client: &C, source: &str) -> Result<Vec<Stop>> {
    let bytes = load(client, source).await?;
    let stops = parse_stops(&bytes)?;
    info!(count = stops.len(), "Stops parsed");
    Ok(stops)
}
