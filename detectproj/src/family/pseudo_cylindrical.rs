use super::{north_pole, FamilyKind, LonDirection, ProjectionFamily};
use crate::interval::Interval;
use detectproj_types::GeoPoint3d;
use serde::{Deserialize, Serialize};

/// Pseudo-cylindrical projections.
///
/// Spherical, with an optional oblique aspect and a single true parallel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PseudoCylindrical {
    cart_pole: GeoPoint3d,
    lat0: f64,
    lon_dir: LonDirection,
}

impl PseudoCylindrical {
    /// Creates a new instance.
    pub fn new(cart_pole: GeoPoint3d, lat0: f64, lon_dir: LonDirection) -> Self {
        Self {
            cart_pole,
            lat0,
            lon_dir,
        }
    }
}

impl Default for PseudoCylindrical {
    fn default() -> Self {
        Self::new(north_pole(), 0.0, LonDirection::Normal)
    }
}

impl ProjectionFamily for PseudoCylindrical {
    fn kind(&self) -> FamilyKind {
        FamilyKind::PseudoCylindrical
    }

    fn cart_pole(&self) -> GeoPoint3d {
        self.cart_pole
    }

    fn set_cart_pole(&mut self, pole: GeoPoint3d) {
        self.cart_pole = pole;
    }

    fn lat1(&self) -> f64 {
        self.lat0
    }

    fn set_lat1(&mut self, lat1: f64) {
        self.lat0 = lat1;
    }

    fn lat2(&self) -> f64 {
        self.lat0
    }

    fn set_lat2(&mut self, lat2: f64) {
        self.lat0 = lat2;
    }

    fn a(&self, r: f64) -> f64 {
        r
    }

    fn set_a(&mut self, _a: f64) {}

    fn b(&self, r: f64) -> f64 {
        r
    }

    fn set_b(&mut self, _b: f64) {}

    fn lon_dir(&self) -> LonDirection {
        self.lon_dir
    }

    fn set_lon_dir(&mut self, lon_dir: LonDirection) {
        self.lon_dir = lon_dir;
    }

    fn lat_p_interval(&self) -> Interval {
        Interval::LATITUDE
    }

    fn lon_p_interval(&self) -> Interval {
        Interval::LONGITUDE
    }

    fn lat1_interval(&self) -> Interval {
        Interval::POSITIVE_PARALLEL
    }
}
