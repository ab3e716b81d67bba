use crate::equations::DEFAULT_ID;
use crate::function::{EquationResult, EquationSet, ParameterBundle};

/// Parameters shared by all projection families together with the projection's equations.
///
/// The accessors do no validation. True parallels are not stored here: they belong to the
/// projection family, which is why building a [`ParameterBundle`] from the core requires them
/// to be supplied.
#[derive(Debug, Clone)]
pub struct ProjectionCore {
    r: f64,
    lon0: f64,
    dx: f64,
    dy: f64,
    c: f64,
    name: String,
    id: String,
    equations: EquationSet,
}

impl ProjectionCore {
    /// Creates a core with the given equations and default parameters.
    pub fn new(name: impl Into<String>, id: impl Into<String>, equations: EquationSet) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
            equations,
            ..Default::default()
        }
    }

    /// Radius of the reference sphere.
    pub fn r(&self) -> f64 {
        self.r
    }

    /// Sets the radius of the reference sphere.
    pub fn set_r(&mut self, r: f64) {
        self.r = r;
    }

    /// Central meridian, degrees.
    pub fn lon0(&self) -> f64 {
        self.lon0
    }

    /// Sets the central meridian.
    pub fn set_lon0(&mut self, lon0: f64) {
        self.lon0 = lon0;
    }

    /// False easting.
    pub fn dx(&self) -> f64 {
        self.dx
    }

    /// Sets the false easting.
    pub fn set_dx(&mut self, dx: f64) {
        self.dx = dx;
    }

    /// False northing.
    pub fn dy(&self) -> f64 {
        self.dy
    }

    /// Sets the false northing.
    pub fn set_dy(&mut self, dy: f64) {
        self.dy = dy;
    }

    /// Auxiliary constant. Its meaning is defined by the equations.
    pub fn c(&self) -> f64 {
        self.c
    }

    /// Sets the auxiliary constant.
    pub fn set_c(&mut self, c: f64) {
        self.c = c;
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sets the display name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Short machine identifier, e.g. `eqdc`.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Sets the identifier.
    pub fn set_id(&mut self, id: impl Into<String>) {
        self.id = id.into();
    }

    /// Equations the projection is evaluated with.
    pub fn equations(&self) -> &EquationSet {
        &self.equations
    }

    /// Replaces the equations.
    pub fn set_equations(&mut self, equations: EquationSet) {
        self.equations = equations;
    }

    /// Current parameters combined with the family's true parallels.
    pub fn bundle(&self, lat1: f64, lat2: f64) -> ParameterBundle {
        ParameterBundle {
            r: self.r,
            lat1,
            lat2,
            lon0: self.lon0,
            dx: self.dx,
            dy: self.dy,
            c: self.c,
        }
    }

    /// Evaluates the forward X equation with an explicit parameter bundle.
    pub fn forward_x_with(&self, lat: f64, lon: f64, bundle: &ParameterBundle) -> EquationResult {
        self.equations.forward_x.call(lat, lon, bundle)
    }

    /// Evaluates the forward Y equation with an explicit parameter bundle.
    pub fn forward_y_with(&self, lat: f64, lon: f64, bundle: &ParameterBundle) -> EquationResult {
        self.equations.forward_y.call(lat, lon, bundle)
    }

    /// Evaluates the inverse latitude equation with an explicit parameter bundle.
    pub fn inverse_lat_with(&self, x: f64, y: f64, bundle: &ParameterBundle) -> EquationResult {
        self.equations.inverse_lat.call(x, y, bundle)
    }

    /// Evaluates the inverse longitude equation with an explicit parameter bundle.
    pub fn inverse_lon_with(&self, x: f64, y: f64, bundle: &ParameterBundle) -> EquationResult {
        self.equations.inverse_lon.call(x, y, bundle)
    }
}

impl Default for ProjectionCore {
    fn default() -> Self {
        Self {
            r: 1.0,
            lon0: 0.0,
            dx: 0.0,
            dy: 0.0,
            c: 0.0,
            name: "Azimuthal equal area".to_string(),
            id: DEFAULT_ID.to_string(),
            equations: EquationSet::default(),
        }
    }
}
