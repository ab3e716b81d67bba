use approx::{AbsDiffEq, RelativeEq};
use num_traits::Float;
use serde::{Deserialize, Serialize};

/// Point on the surface of a celestial body given by latitude and longitude in degrees.
pub trait GeoPoint {
    /// Numeric type used to represent coordinates.
    type Num: Float;

    /// Latitude in degrees.
    fn lat(&self) -> Self::Num;
    /// Longitude in degrees.
    fn lon(&self) -> Self::Num;

    /// Latitude in radians.
    fn lat_rad(&self) -> Self::Num {
        self.lat().to_radians()
    }

    /// Longitude in radians.
    fn lon_rad(&self) -> Self::Num {
        self.lon().to_radians()
    }
}

/// Geographic point that can be constructed from latitude and longitude.
pub trait NewGeoPoint<N = f64>: GeoPoint<Num = N> + Sized {
    /// Creates a point from latitude and longitude in degrees.
    fn latlon(lat: N, lon: N) -> Self;

    /// Same as [`NewGeoPoint::latlon`] with the arguments swapped.
    fn lonlat(lon: N, lat: N) -> Self {
        Self::latlon(lat, lon)
    }
}

/// Geographic point with an elevation above the reference surface.
///
/// Projections use it to store their cartographic pole (meta-pole), for which elevation is always
/// zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Deserialize, Serialize)]
pub struct GeoPoint3d {
    lat: f64,
    lon: f64,
    #[serde(default)]
    elevation: f64,
}

impl GeoPoint3d {
    /// Creates a new point.
    pub fn new(lat: f64, lon: f64, elevation: f64) -> Self {
        Self {
            lat,
            lon,
            elevation,
        }
    }

    /// Creates a new point from another one, placing it on the reference surface.
    pub fn from(other: &impl GeoPoint<Num = f64>) -> Self {
        Self::latlon(other.lat(), other.lon())
    }

    /// Elevation above the reference surface.
    pub fn elevation(&self) -> f64 {
        self.elevation
    }

    /// Returns a copy of the point with the given elevation.
    pub fn with_elevation(self, elevation: f64) -> Self {
        Self { elevation, ..self }
    }
}

impl GeoPoint for GeoPoint3d {
    type Num = f64;

    fn lat(&self) -> f64 {
        self.lat
    }

    fn lon(&self) -> f64 {
        self.lon
    }
}

impl NewGeoPoint<f64> for GeoPoint3d {
    fn latlon(lat: f64, lon: f64) -> Self {
        Self {
            lat,
            lon,
            elevation: 0.0,
        }
    }
}

impl AbsDiffEq for GeoPoint3d {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.lat.abs_diff_eq(&other.lat, epsilon)
            && self.lon.abs_diff_eq(&other.lon, epsilon)
            && self.elevation.abs_diff_eq(&other.elevation, epsilon)
    }
}

impl RelativeEq for GeoPoint3d {
    fn default_max_relative() -> Self::Epsilon {
        f64::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.lat.relative_eq(&other.lat, epsilon, max_relative)
            && self.lon.relative_eq(&other.lon, epsilon, max_relative)
            && self
                .elevation
                .relative_eq(&other.elevation, epsilon, max_relative)
    }
}

/// Creates a new [`GeoPoint3d`] on the reference surface from latitude and longitude values (in
/// degrees).
///
/// ```
/// use detectproj_types::{latlon, GeoPoint};
///
/// let point = latlon!(38.0, 52.0);
/// assert_eq!(point.lat(), 38.0);
/// ```
#[macro_export]
macro_rules! latlon {
    ($lat:expr, $lon:expr) => {
        <$crate::GeoPoint3d as $crate::NewGeoPoint<f64>>::latlon($lat, $lon)
    };
}
