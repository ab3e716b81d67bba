use crate::equations::{EquationLibrary, DEFAULT_ID};
use crate::error::DefinitionError;
use crate::family::{Family, FamilyKind, LonDirection, ProjectionFamily};
use crate::projection::Projection;
use detectproj_types::GeoPoint3d;
use serde::{Deserialize, Serialize};

/// Serializable description of a projection candidate.
///
/// Missing fields keep the defaults of the projection created from the equation library. Values
/// for parameters the chosen family doesn't use go through the regular setters and are therefore
/// silently ignored.
///
/// ```json
/// { "id": "eqdc", "r": 6371000.0, "lon0": 10.0, "lat1": 30.0, "lat2": 60.0 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionDefinition {
    /// Id of the equations in the library.
    pub id: String,
    /// Display name. Defaults to the library entry's name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Family to use instead of the one the equations are registered with.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family: Option<FamilyKind>,
    /// Radius of the reference sphere.
    pub r: f64,
    /// Central meridian.
    pub lon0: f64,
    /// False easting.
    pub dx: f64,
    /// False northing.
    pub dy: f64,
    /// Auxiliary constant.
    pub c: f64,
    /// First true parallel.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lat1: Option<f64>,
    /// Second true parallel.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lat2: Option<f64>,
    /// Cartographic pole.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cart_pole: Option<GeoPoint3d>,
    /// Longitude direction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lon_dir: Option<LonDirection>,
    /// Semi-major axis.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub a: Option<f64>,
    /// Semi-minor axis.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub b: Option<f64>,
}

impl Default for ProjectionDefinition {
    fn default() -> Self {
        Self {
            id: DEFAULT_ID.to_string(),
            name: None,
            family: None,
            r: 1.0,
            lon0: 0.0,
            dx: 0.0,
            dy: 0.0,
            c: 0.0,
            lat1: None,
            lat2: None,
            cart_pole: None,
            lon_dir: None,
            a: None,
            b: None,
        }
    }
}

impl ProjectionDefinition {
    /// Creates a projection using equations from the `library`.
    pub fn build(&self, library: &EquationLibrary) -> Result<Projection, DefinitionError> {
        let entry = library
            .get(&self.id)
            .ok_or_else(|| DefinitionError::UnknownEquation(self.id.clone()))?;
        let mut projection = entry.projection();

        if let Some(kind) = self.family {
            if kind != entry.kind() {
                log::debug!(
                    "Using {kind} family for equations {} registered as {}",
                    self.id,
                    entry.kind()
                );
                let (core, _) = projection.into_parts();
                projection = Projection::new(core, Family::new(kind));
            }
        }

        if let Some(name) = &self.name {
            projection.set_name(name.clone());
        }

        projection.set_r(self.r);
        projection.set_lon0(self.lon0);
        projection.set_dx(self.dx);
        projection.set_dy(self.dy);
        projection.set_c(self.c);

        if let Some(lat2) = self.lat2 {
            projection.set_lat2(lat2);
        }
        if let Some(lat1) = self.lat1 {
            projection.set_lat1(lat1);
        }
        if let Some(pole) = self.cart_pole {
            projection.set_cart_pole(pole);
        }
        if let Some(lon_dir) = self.lon_dir {
            projection.set_lon_dir(lon_dir);
        }
        if let Some(a) = self.a {
            projection.set_a(a);
        }
        if let Some(b) = self.b {
            projection.set_b(b);
        }

        log::debug!("Built projection {projection}");

        Ok(projection)
    }
}

impl<F: ProjectionFamily> From<&Projection<F>> for ProjectionDefinition {
    fn from(projection: &Projection<F>) -> Self {
        Self {
            id: projection.id().to_string(),
            name: Some(projection.name().to_string()),
            family: Some(projection.kind()),
            r: projection.r(),
            lon0: projection.lon0(),
            dx: projection.dx(),
            dy: projection.dy(),
            c: projection.c(),
            lat1: Some(projection.lat1()),
            lat2: Some(projection.lat2()),
            cart_pole: Some(projection.cart_pole()),
            lon_dir: Some(projection.lon_dir()),
            a: Some(projection.a()),
            b: Some(projection.b()),
        }
    }
}
