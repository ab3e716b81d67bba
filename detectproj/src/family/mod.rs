//! Projection families and the capability contract they share.
//!
//! Families differ in which geometric parameters they use. Every family implements the whole
//! [`ProjectionFamily`] contract anyway: a getter of an unused parameter returns a fixed value and
//! its setter does nothing. This lets a search procedure perturb any projection without checking
//! which family it belongs to.

mod azimuthal;
mod conic;
mod ellipsoidal;
mod pseudo_cylindrical;

pub use azimuthal::Azimuthal;
pub use conic::Conic;
pub use ellipsoidal::Ellipsoidal;
pub use pseudo_cylindrical::PseudoCylindrical;

use crate::error::DefinitionError;
use crate::interval::{Interval, MAX_LAT};
use detectproj_types::{GeoPoint3d, NewGeoPoint};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Sign convention for measuring longitude in the transformed (oblique) frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LonDirection {
    /// Longitude grows eastwards.
    #[default]
    Normal,
    /// Alternative normal convention used by some transverse aspects.
    NormalAlt,
    /// Longitude grows westwards.
    Reversed,
    /// The family doesn't measure longitude in a transformed frame.
    NoDirection,
}

impl Display for LonDirection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            LonDirection::Normal => "normal",
            LonDirection::NormalAlt => "normal2",
            LonDirection::Reversed => "reversed",
            LonDirection::NoDirection => "none",
        };
        f.write_str(s)
    }
}

/// Tag of a projection family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FamilyKind {
    /// See [`Azimuthal`].
    Azimuthal,
    /// See [`Conic`].
    Conic,
    /// See [`Ellipsoidal`].
    #[serde(rename = "Elips")]
    Ellipsoidal,
    /// See [`PseudoCylindrical`].
    #[serde(rename = "Pseudocylindrical")]
    PseudoCylindrical,
}

impl FamilyKind {
    /// All families.
    pub const ALL: [FamilyKind; 4] = [
        FamilyKind::Azimuthal,
        FamilyKind::Conic,
        FamilyKind::Ellipsoidal,
        FamilyKind::PseudoCylindrical,
    ];

    /// Family name as used in projection definitions.
    pub fn as_str(&self) -> &'static str {
        match self {
            FamilyKind::Azimuthal => "Azimuthal",
            FamilyKind::Conic => "Conic",
            FamilyKind::Ellipsoidal => "Elips",
            FamilyKind::PseudoCylindrical => "Pseudocylindrical",
        }
    }
}

impl Display for FamilyKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FamilyKind {
    type Err = DefinitionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| DefinitionError::UnknownFamily(s.to_string()))
    }
}

/// Capabilities that vary between projection families.
///
/// All angles are in degrees.
pub trait ProjectionFamily {
    /// Tag of the family. Constant for a given type.
    fn kind(&self) -> FamilyKind;

    /// Family name: one of `Azimuthal`, `Conic`, `Elips`, `Pseudocylindrical`.
    fn family(&self) -> &'static str {
        self.kind().as_str()
    }

    /// Cartographic pole (meta-pole) of the oblique aspect.
    fn cart_pole(&self) -> GeoPoint3d;
    /// Sets the cartographic pole. No-op for families without oblique aspects.
    fn set_cart_pole(&mut self, pole: GeoPoint3d);

    /// First true parallel.
    fn lat1(&self) -> f64;
    /// Sets the first true parallel.
    fn set_lat1(&mut self, lat1: f64);
    /// Second true parallel. Same as [`ProjectionFamily::lat1`] for families with one parallel.
    fn lat2(&self) -> f64;
    /// Sets the second true parallel.
    fn set_lat2(&mut self, lat2: f64);

    /// Semi-major axis. Spherical families return the sphere radius `r`.
    fn a(&self, r: f64) -> f64;
    /// Sets the semi-major axis. No-op for spherical families.
    fn set_a(&mut self, a: f64);
    /// Semi-minor axis. Spherical families return the sphere radius `r`.
    fn b(&self, r: f64) -> f64;
    /// Sets the semi-minor axis. No-op for spherical families.
    fn set_b(&mut self, b: f64);

    /// Longitude direction in the transformed frame.
    fn lon_dir(&self) -> LonDirection;
    /// Sets the longitude direction.
    fn set_lon_dir(&mut self, lon_dir: LonDirection);

    /// Legal latitudes of the cartographic pole.
    fn lat_p_interval(&self) -> Interval;
    /// Legal longitudes of the cartographic pole.
    fn lon_p_interval(&self) -> Interval;
    /// Legal true parallels.
    fn lat1_interval(&self) -> Interval;
}

/// Cartographic pole of the normal aspect: the geographic north pole.
pub(crate) fn north_pole() -> GeoPoint3d {
    GeoPoint3d::latlon(MAX_LAT, 0.0)
}

/// Any of the supported projection families.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "family")]
pub enum Family {
    /// Azimuthal family.
    Azimuthal(Azimuthal),
    /// Conic family.
    Conic(Conic),
    /// Family of projections using an ellipsoid.
    #[serde(rename = "Elips")]
    Ellipsoidal(Ellipsoidal),
    /// Pseudo-cylindrical family.
    #[serde(rename = "Pseudocylindrical")]
    PseudoCylindrical(PseudoCylindrical),
}

impl Family {
    /// Creates a family of the given kind with default parameters.
    pub fn new(kind: FamilyKind) -> Self {
        match kind {
            FamilyKind::Azimuthal => Azimuthal::default().into(),
            FamilyKind::Conic => Conic::default().into(),
            FamilyKind::Ellipsoidal => Ellipsoidal::default().into(),
            FamilyKind::PseudoCylindrical => PseudoCylindrical::default().into(),
        }
    }
}

impl Default for Family {
    fn default() -> Self {
        Self::Azimuthal(Azimuthal::default())
    }
}

impl From<Azimuthal> for Family {
    fn from(value: Azimuthal) -> Self {
        Self::Azimuthal(value)
    }
}

impl From<Conic> for Family {
    fn from(value: Conic) -> Self {
        Self::Conic(value)
    }
}

impl From<Ellipsoidal> for Family {
    fn from(value: Ellipsoidal) -> Self {
        Self::Ellipsoidal(value)
    }
}

impl From<PseudoCylindrical> for Family {
    fn from(value: PseudoCylindrical) -> Self {
        Self::PseudoCylindrical(value)
    }
}

macro_rules! dispatch {
    ($self:ident, $family:ident => $call:expr) => {
        match $self {
            Family::Azimuthal($family) => $call,
            Family::Conic($family) => $call,
            Family::Ellipsoidal($family) => $call,
            Family::PseudoCylindrical($family) => $call,
        }
    };
}

impl ProjectionFamily for Family {
    fn kind(&self) -> FamilyKind {
        dispatch!(self, f => f.kind())
    }

    fn cart_pole(&self) -> GeoPoint3d {
        dispatch!(self, f => f.cart_pole())
    }

    fn set_cart_pole(&mut self, pole: GeoPoint3d) {
        dispatch!(self, f => f.set_cart_pole(pole))
    }

    fn lat1(&self) -> f64 {
        dispatch!(self, f => f.lat1())
    }

    fn set_lat1(&mut self, lat1: f64) {
        dispatch!(self, f => f.set_lat1(lat1))
    }

    fn lat2(&self) -> f64 {
        dispatch!(self, f => f.lat2())
    }

    fn set_lat2(&mut self, lat2: f64) {
        dispatch!(self, f => f.set_lat2(lat2))
    }

    fn a(&self, r: f64) -> f64 {
        dispatch!(self, f => f.a(r))
    }

    fn set_a(&mut self, a: f64) {
        dispatch!(self, f => f.set_a(a))
    }

    fn b(&self, r: f64) -> f64 {
        dispatch!(self, f => f.b(r))
    }

    fn set_b(&mut self, b: f64) {
        dispatch!(self, f => f.set_b(b))
    }

    fn lon_dir(&self) -> LonDirection {
        dispatch!(self, f => f.lon_dir())
    }

    fn set_lon_dir(&mut self, lon_dir: LonDirection) {
        dispatch!(self, f => f.set_lon_dir(lon_dir))
    }

    fn lat_p_interval(&self) -> Interval {
        dispatch!(self, f => f.lat_p_interval())
    }

    fn lon_p_interval(&self) -> Interval {
        dispatch!(self, f => f.lon_p_interval())
    }

    fn lat1_interval(&self) -> Interval {
        dispatch!(self, f => f.lat1_interval())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use detectproj_types::{latlon, GeoPoint};

    const R: f64 = 6_371_000.0;

    fn all_families() -> Vec<Family> {
        FamilyKind::ALL.into_iter().map(Family::new).collect()
    }

    #[test]
    fn kind_matches_constructor() {
        for kind in FamilyKind::ALL {
            assert_eq!(Family::new(kind).kind(), kind);
            assert_eq!(Family::new(kind).family(), kind.as_str());
            assert_eq!(kind.as_str().parse::<FamilyKind>(), Ok(kind));
        }
        assert_eq!(
            "Cylindrical".parse::<FamilyKind>(),
            Err(DefinitionError::UnknownFamily("Cylindrical".to_string()))
        );
    }

    #[test]
    fn unsupported_setters_keep_previous_value() {
        for mut family in all_families() {
            let kind = family.kind();
            let pole = family.cart_pole();
            let lon_dir = family.lon_dir();
            let lat1 = family.lat1();
            let a = family.a(R);
            let b = family.b(R);

            family.set_cart_pole(latlon!(12.0, 34.0));
            family.set_lon_dir(LonDirection::Reversed);
            family.set_a(1.0);
            family.set_b(2.0);

            match kind {
                FamilyKind::Ellipsoidal => {
                    assert_eq!(family.cart_pole(), pole);
                    assert_eq!(family.lon_dir(), lon_dir);
                    assert_eq!(family.a(R), 1.0);
                    assert_eq!(family.b(R), 2.0);
                }
                _ => {
                    assert_eq!(family.cart_pole(), latlon!(12.0, 34.0));
                    assert_eq!(family.lon_dir(), LonDirection::Reversed);
                    assert_eq!(family.a(R), a);
                    assert_eq!(family.b(R), b);
                }
            }

            family.set_lat1(15.0);
            match kind {
                FamilyKind::Azimuthal => assert_eq!(family.lat1(), lat1),
                _ => assert_eq!(family.lat1(), 15.0),
            }
        }
    }

    #[test]
    fn supported_parameters_round_trip_at_interval_bounds() {
        for mut family in all_families() {
            let kind = family.kind();
            let lat1 = family.lat1_interval();
            for value in [lat1.min(), lat1.max(), lat1.clamp(45.0)] {
                family.set_lat1(value);
                assert_eq!(family.lat1(), value, "lat1 of {kind}");
                family.set_lat2(value);
                assert_eq!(family.lat2(), value, "lat2 of {kind}");
            }

            // Degenerate pole intervals hold exactly the fixed pole, so every family round-trips.
            let lat_p = family.lat_p_interval();
            let lon_p = family.lon_p_interval();
            for (lat, lon) in [
                (lat_p.min(), lon_p.min()),
                (lat_p.max(), lon_p.max()),
                (lat_p.min(), lon_p.max()),
                (lat_p.max(), lon_p.min()),
            ] {
                family.set_cart_pole(latlon!(lat, lon));
                assert_eq!(family.cart_pole(), latlon!(lat, lon), "pole of {kind}");
            }
        }
    }

    #[test]
    fn only_conic_has_independent_parallels() {
        for mut family in all_families() {
            family.set_lat1(20.0);
            family.set_lat2(40.0);
            match family.kind() {
                FamilyKind::Conic => {
                    assert_eq!(family.lat1(), 20.0);
                    assert_eq!(family.lat2(), 40.0);
                }
                FamilyKind::Azimuthal => {
                    assert_eq!(family.lat1(), 0.0);
                    assert_eq!(family.lat2(), 0.0);
                }
                _ => {
                    assert_eq!(family.lat1(), 40.0);
                    assert_eq!(family.lat2(), 40.0);
                    family.set_lat1(25.0);
                    assert_eq!(family.lat2(), 25.0);
                }
            }
        }
    }

    #[test]
    fn intervals_contain_defaults() {
        for family in all_families() {
            assert!(family.lat_p_interval().contains(family.cart_pole().lat()));
            assert!(family.lon_p_interval().contains(family.cart_pole().lon()));
            assert!(family.lat1_interval().contains(family.lat1()));
        }
    }

    #[test]
    fn default_aspect_is_normal() {
        for family in all_families() {
            assert_abs_diff_eq!(family.cart_pole(), latlon!(90.0, 0.0));
        }
        assert_eq!(LonDirection::default(), LonDirection::Normal);
    }

    #[test]
    fn family_serialization() {
        let family = Family::from(Conic::new(
            north_pole(),
            30.0,
            60.0,
            LonDirection::Normal,
        ));
        let json = serde_json::to_value(&family).unwrap();
        assert_eq!(json["family"], "Conic");
        let restored: Family = serde_json::from_value(json).unwrap();
        assert_eq!(restored, family);

        let json = serde_json::to_value(Family::new(FamilyKind::Ellipsoidal)).unwrap();
        assert_eq!(json["family"], "Elips");
    }
}
