pub mod config;
pub mod error;
pub mod fetch;
pub mod output;
pub mod parser;
pub mod routes;
pub mod stops;

pub use error::{Error, Result};
pub use stops::{Coordinate, Stop, StopId};
