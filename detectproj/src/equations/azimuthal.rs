//! Azimuthal equal-area projection, polar aspect.
//!
//! forward: ρ = 2R·sin((90° - φ)/2), x = ρ·sin(λ - λ₀) + dx, y = -ρ·cos(λ - λ₀) + dy
//! inverse: φ = 90° - 2·asin(ρ/2R), λ = λ₀ + atan2(x - dx, -(y - dy))

use super::{check_radius, normalize_lon, EPS};
use crate::error::EquationError;
use crate::function::{EquationResult, ParameterBundle};

fn rho(lat: f64, p: &ParameterBundle) -> f64 {
    2.0 * p.r * ((90.0 - lat).to_radians() / 2.0).sin()
}

pub(crate) fn aeqa_x(lat: f64, lon: f64, p: &ParameterBundle) -> EquationResult {
    Ok(rho(lat, p) * (lon - p.lon0).to_radians().sin() + p.dx)
}

pub(crate) fn aeqa_y(lat: f64, lon: f64, p: &ParameterBundle) -> EquationResult {
    Ok(-rho(lat, p) * (lon - p.lon0).to_radians().cos() + p.dy)
}

pub(crate) fn aeqa_lat(x: f64, y: f64, p: &ParameterBundle) -> EquationResult {
    check_radius(p)?;
    let s = (x - p.dx).hypot(y - p.dy) / (2.0 * p.r);
    if s > 1.0 + EPS {
        return Err(EquationError::OutOfDomain(
            "point is farther from the center than the antipode",
        ));
    }

    Ok(90.0 - 2.0 * s.min(1.0).asin().to_degrees())
}

pub(crate) fn aeqa_lon(x: f64, y: f64, p: &ParameterBundle) -> EquationResult {
    let (xs, ys) = (x - p.dx, y - p.dy);
    if xs.hypot(ys) < EPS {
        // Longitude of the pole is arbitrary.
        return Ok(normalize_lon(p.lon0));
    }

    Ok(normalize_lon(p.lon0 + xs.atan2(-ys).to_degrees()))
}
