use super::{north_pole, FamilyKind, LonDirection, ProjectionFamily};
use crate::interval::{Interval, MAX_LAT};
use detectproj_types::GeoPoint3d;
use serde::{Deserialize, Serialize};

/// WGS84 semi-major axis, meters.
const WGS84_A: f64 = 6_378_137.0;
/// WGS84 semi-minor axis, meters.
const WGS84_B: f64 = 6_356_752.314245;

/// Projections defined on an ellipsoid of revolution.
///
/// Only the normal aspect is supported, so the cartographic pole is always the north pole and
/// there is no longitude direction. Uses a single true parallel and independent semi-axes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Ellipsoidal {
    lat0: f64,
    a: f64,
    b: f64,
}

impl Ellipsoidal {
    /// Creates a new instance.
    pub fn new(lat0: f64, a: f64, b: f64) -> Self {
        Self { lat0, a, b }
    }
}

impl Default for Ellipsoidal {
    fn default() -> Self {
        Self::new(0.0, WGS84_A, WGS84_B)
    }
}

impl ProjectionFamily for Ellipsoidal {
    fn kind(&self) -> FamilyKind {
        FamilyKind::Ellipsoidal
    }

    fn cart_pole(&self) -> GeoPoint3d {
        north_pole()
    }

    fn set_cart_pole(&mut self, _pole: GeoPoint3d) {}

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

    fn a(&self, _r: f64) -> f64 {
        self.a
    }

    fn set_a(&mut self, a: f64) {
        self.a = a;
    }

    fn b(&self, _r: f64) -> f64 {
        self.b
    }

    fn set_b(&mut self, b: f64) {
        self.b = b;
    }

    fn lon_dir(&self) -> LonDirection {
        LonDirection::NoDirection
    }

    fn set_lon_dir(&mut self, _lon_dir: LonDirection) {}

    fn lat_p_interval(&self) -> Interval {
        Interval::point(MAX_LAT)
    }

    fn lon_p_interval(&self) -> Interval {
        Interval::ZERO
    }

    fn lat1_interval(&self) -> Interval {
        Interval::POSITIVE_PARALLEL
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use detectproj_types::latlon;

    #[test]
    fn fixed_pole() {
        let mut family = Ellipsoidal::new(45.0, 6_378_137.0, 6_356_752.3);
        family.set_cart_pole(latlon!(10.0, 20.0));
        assert_eq!(family.cart_pole(), latlon!(90.0, 0.0));
        assert!(family.lat_p_interval().is_degenerate());
        assert_eq!(family.lat_p_interval().min(), MAX_LAT);
        assert_eq!(family.lon_p_interval(), Interval::ZERO);
    }

    #[test]
    fn single_parallel() {
        let mut family = Ellipsoidal::new(45.0, 6_378_137.0, 6_356_752.3);
        assert_eq!(family.lat2(), 45.0);
        family.set_lat1(30.0);
        assert_eq!(family.lat2(), 30.0);
        assert_eq!(family.lat1_interval().min(), 0.0);
    }

    #[test]
    fn independent_axes() {
        let mut family = Ellipsoidal::new(45.0, 6_378_137.0, 6_356_752.3);
        assert_eq!(family.a(1.0), 6_378_137.0);
        assert_eq!(family.b(1.0), 6_356_752.3);

        family.set_a(6_378_388.0);
        family.set_b(6_356_911.9);
        assert_eq!(family.a(1.0), 6_378_388.0);
        assert_eq!(family.b(1.0), 6_356_911.9);
    }

    #[test]
    fn no_lon_direction() {
        let mut family = Ellipsoidal::default();
        family.set_lon_dir(LonDirection::Reversed);
        assert_eq!(family.lon_dir(), LonDirection::NoDirection);
    }
}
