//! Computations over event data.
//!
//! - `range`: time bounds of a dataset and their memoization
//! - `validation`: checks on events, windows and numeric parameters
//! - `geojson`: GeoJSON export of visible events (feature `geojson`)

#[cfg(feature = "geojson")]
pub mod geojson;
pub mod range;
pub mod validation;
