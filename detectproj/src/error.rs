//! Error types used by the crate.

use thiserror::Error;

/// Failure of a coordinate equation.
///
/// Equations raise these errors themselves. The projection layer never creates or handles them,
/// it returns them to the caller exactly as the equation produced them.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EquationError {
    /// The equation has a pole or a zero denominator at the given input.
    #[error("equation is singular: {0}")]
    Singularity(&'static str),
    /// The input lies outside the area covered by the projection.
    #[error("coordinates are outside of the projection domain: {0}")]
    OutOfDomain(&'static str),
    /// The parameter set does not define a valid projection.
    #[error("projection is undefined for the given parameters: {0}")]
    Undefined(&'static str),
}

/// Error building a projection from a [`ProjectionDefinition`](crate::ProjectionDefinition) or
/// parsing one of its fields.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DefinitionError {
    /// No equation with the given id is registered in the library.
    #[error("unknown equation id: {0}")]
    UnknownEquation(String),
    /// The name is not one of the projection family names.
    #[error("unknown projection family: {0}")]
    UnknownFamily(String),
}
