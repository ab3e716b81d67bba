//! Equidistant conic projection on two standard parallels, with the origin at the apex of the
//! cone.
//!
//! n = (cos φ₁ - cos φ₂)/(φ₂ - φ₁) (n = sin φ₁ for a tangent cone), G = cos φ₁/n + φ₁
//! forward: ρ = R·(G - φ), x = ρ·sin(n·(λ - λ₀)) + dx, y = -ρ·cos(n·(λ - λ₀)) + dy

use super::{check_radius, normalize_lon, EPS};
use crate::error::EquationError;
use crate::function::{EquationResult, ParameterBundle};

struct Cone {
    n: f64,
    g: f64,
}

impl Cone {
    fn new(p: &ParameterBundle) -> Result<Self, EquationError> {
        let phi1 = p.lat1.to_radians();
        let phi2 = p.lat2.to_radians();
        let n = if (phi2 - phi1).abs() < EPS {
            phi1.sin()
        } else {
            (phi1.cos() - phi2.cos()) / (phi2 - phi1)
        };

        if n.abs() < EPS {
            return Err(EquationError::Undefined(
                "standard parallels give a zero cone constant",
            ));
        }

        Ok(Self {
            n,
            g: phi1.cos() / n + phi1,
        })
    }

    fn rho(&self, lat: f64, r: f64) -> f64 {
        r * (self.g - lat.to_radians())
    }

    fn theta(&self, lon: f64, lon0: f64) -> f64 {
        self.n * (lon - lon0).to_radians()
    }
}

pub(crate) fn eqdc_x(lat: f64, lon: f64, p: &ParameterBundle) -> EquationResult {
    let cone = Cone::new(p)?;
    Ok(cone.rho(lat, p.r) * cone.theta(lon, p.lon0).sin() + p.dx)
}

pub(crate) fn eqdc_y(lat: f64, lon: f64, p: &ParameterBundle) -> EquationResult {
    let cone = Cone::new(p)?;
    Ok(-cone.rho(lat, p.r) * cone.theta(lon, p.lon0).cos() + p.dy)
}

pub(crate) fn eqdc_lat(x: f64, y: f64, p: &ParameterBundle) -> EquationResult {
    check_radius(p)?;
    let cone = Cone::new(p)?;
    let rho = cone.n.signum() * (x - p.dx).hypot(y - p.dy);
    Ok((cone.g - rho / p.r).to_degrees())
}

pub(crate) fn eqdc_lon(x: f64, y: f64, p: &ParameterBundle) -> EquationResult {
    let cone = Cone::new(p)?;
    let sign = cone.n.signum();
    let theta = (sign * (x - p.dx)).atan2(-sign * (y - p.dy));
    Ok(normalize_lon(p.lon0 + (theta / cone.n).to_degrees()))
}
