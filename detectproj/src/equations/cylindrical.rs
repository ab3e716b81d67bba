//! Sinusoidal and Mercator projections.
//!
//! sinusoidal: x = R·(λ - λ₀)·cos φ + dx, y = R·φ + dy
//! Mercator:   x = R·cos φ₁·(λ - λ₀) + dx, y = R·cos φ₁·ln tan(45° + φ/2) + dy

use super::{check_radius, normalize_lon, EPS};
use crate::error::EquationError;
use crate::function::{EquationResult, ParameterBundle};
use crate::interval::MAX_LAT;
use std::f64::consts::FRAC_PI_4;

pub(crate) fn sinu_x(lat: f64, lon: f64, p: &ParameterBundle) -> EquationResult {
    Ok(p.r * (lon - p.lon0).to_radians() * lat.to_radians().cos() + p.dx)
}

pub(crate) fn sinu_y(lat: f64, _lon: f64, p: &ParameterBundle) -> EquationResult {
    Ok(p.r * lat.to_radians() + p.dy)
}

pub(crate) fn sinu_lat(_x: f64, y: f64, p: &ParameterBundle) -> EquationResult {
    check_radius(p)?;
    let lat = ((y - p.dy) / p.r).to_degrees();
    if lat.abs() > MAX_LAT + EPS {
        return Err(EquationError::OutOfDomain("latitude beyond the pole"));
    }

    Ok(lat.clamp(-MAX_LAT, MAX_LAT))
}

pub(crate) fn sinu_lon(x: f64, y: f64, p: &ParameterBundle) -> EquationResult {
    let lat = sinu_lat(x, y, p)?;
    let cos_lat = lat.to_radians().cos();
    if cos_lat.abs() < EPS {
        return Err(EquationError::Singularity(
            "longitude is undefined at the poles",
        ));
    }

    Ok(p.lon0 + ((x - p.dx) / (p.r * cos_lat)).to_degrees())
}

fn merc_scale(p: &ParameterBundle) -> Result<f64, EquationError> {
    check_radius(p)?;
    let cos_lat1 = p.lat1.to_radians().cos();
    if cos_lat1.abs() < EPS {
        return Err(EquationError::Undefined("true parallel is at the pole"));
    }

    Ok(p.r * cos_lat1)
}

pub(crate) fn merc_x(_lat: f64, lon: f64, p: &ParameterBundle) -> EquationResult {
    Ok(merc_scale(p)? * (lon - p.lon0).to_radians() + p.dx)
}

pub(crate) fn merc_y(lat: f64, _lon: f64, p: &ParameterBundle) -> EquationResult {
    let k = merc_scale(p)?;
    if lat.abs() >= MAX_LAT {
        return Err(EquationError::Singularity(
            "poles are at infinity in Mercator projection",
        ));
    }

    Ok(k * (FRAC_PI_4 + lat.to_radians() / 2.0).tan().ln() + p.dy)
}

pub(crate) fn merc_lat(_x: f64, y: f64, p: &ParameterBundle) -> EquationResult {
    let k = merc_scale(p)?;
    Ok((2.0 * ((y - p.dy) / k).exp().atan() - 2.0 * FRAC_PI_4).to_degrees())
}

pub(crate) fn merc_lon(x: f64, _y: f64, p: &ParameterBundle) -> EquationResult {
    let k = merc_scale(p)?;
    Ok(normalize_lon(p.lon0 + ((x - p.dx) / k).to_degrees()))
}
