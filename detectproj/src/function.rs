//! Coordinate function values and the parameter record they are evaluated with.

use crate::equations;
use crate::error::EquationError;
use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Formatter};
use std::sync::Arc;

/// Result of a single equation evaluation.
pub type EquationResult = Result<f64, EquationError>;

/// Full set of numeric parameters an equation is evaluated with.
///
/// Together with the two input coordinates this is the complete argument list of a
/// [`CoordinateFunction`]. A search procedure can assemble bundles freely and evaluate them
/// against a shared projection without touching its state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParameterBundle {
    /// Radius of the reference sphere.
    pub r: f64,
    /// First true parallel, degrees.
    pub lat1: f64,
    /// Second true parallel, degrees.
    pub lat2: f64,
    /// Central meridian, degrees.
    pub lon0: f64,
    /// False easting.
    pub dx: f64,
    /// False northing.
    pub dy: f64,
    /// Auxiliary constant with equation specific meaning.
    pub c: f64,
}

impl Default for ParameterBundle {
    fn default() -> Self {
        Self {
            r: 1.0,
            lat1: 0.0,
            lat2: 0.0,
            lon0: 0.0,
            dx: 0.0,
            dy: 0.0,
            c: 0.0,
        }
    }
}

type CoordinateFn = dyn Fn(f64, f64, &ParameterBundle) -> EquationResult + Send + Sync;

/// One direction of one projection's equations: two coordinates and a parameter bundle in, one
/// number out.
///
/// The value is immutable. Cloning only bumps a reference count, so any number of projections and
/// threads can share the same function.
#[derive(Clone)]
pub struct CoordinateFunction(Arc<CoordinateFn>);

impl CoordinateFunction {
    /// Wraps a function or closure.
    pub fn new(
        f: impl Fn(f64, f64, &ParameterBundle) -> EquationResult + Send + Sync + 'static,
    ) -> Self {
        Self(Arc::new(f))
    }

    /// Evaluates the function.
    pub fn call(&self, u: f64, v: f64, parameters: &ParameterBundle) -> EquationResult {
        (self.0)(u, v, parameters)
    }

    /// Returns true if both values wrap the same function instance.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Debug for CoordinateFunction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("CoordinateFunction")
    }
}

/// The four equations of a projection.
#[derive(Debug, Clone)]
pub struct EquationSet {
    /// `x = F(lat, lon)`
    pub forward_x: CoordinateFunction,
    /// `y = G(lat, lon)`
    pub forward_y: CoordinateFunction,
    /// `lat = FI(x, y)`
    pub inverse_lat: CoordinateFunction,
    /// `lon = GI(x, y)`
    pub inverse_lon: CoordinateFunction,
}

impl EquationSet {
    /// Creates a set from its four functions.
    pub fn new(
        forward_x: CoordinateFunction,
        forward_y: CoordinateFunction,
        inverse_lat: CoordinateFunction,
        inverse_lon: CoordinateFunction,
    ) -> Self {
        Self {
            forward_x,
            forward_y,
            inverse_lat,
            inverse_lon,
        }
    }
}

impl Default for EquationSet {
    /// Azimuthal equal-area equations.
    fn default() -> Self {
        equations::aeqa()
    }
}
