//! Value types shared by the `detectproj` crates.
//!
//! The projection layer only needs a way to store the cartographic pole of a projection, so this
//! crate is intentionally small: the [`GeoPoint`] trait, its constructor companion [`NewGeoPoint`]
//! and the concrete [`GeoPoint3d`] value.

mod point;
pub use point::{GeoPoint, GeoPoint3d, NewGeoPoint};

#[cfg(feature = "geo-types")]
mod geo_types;
