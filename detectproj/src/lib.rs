//! Map projection model used for projection identification and fitting.
//!
//! A [`Projection`] combines three things:
//! * a [`ProjectionCore`] with the parameters every projection has (sphere radius, central meridian,
//!   false easting and northing, an auxiliary constant) and the projection's [`EquationSet`];
//! * a projection family ([`Azimuthal`], [`Conic`], [`Ellipsoidal`] or [`PseudoCylindrical`]) that
//!   knows which of the remaining parameters are meaningful and which values they may take;
//! * the four [`CoordinateFunction`]s evaluating the projection in both directions.
//!
//! A search procedure can read and write any parameter of any projection through the same
//! methods, evaluate candidate parameter sets with a [`ParameterBundle`] without mutating the
//! projection, and bound its search by the family's legal [`Interval`]s.
//!
//! ```
//! use detectproj::{EquationLibrary, ParameterBundle};
//!
//! let library = EquationLibrary::default();
//! let mut projection = library.projection("eqdc").unwrap();
//! projection.set_r(6_371_000.0);
//! projection.set_lat1(30.0);
//! projection.set_lat2(60.0);
//!
//! let (x, y) = projection.forward(45.0, 10.0).unwrap();
//! let candidate = ParameterBundle { lon0: 5.0, ..projection.parameters() };
//! let shifted = projection.evaluate_forward_x_with(45.0, 10.0, &candidate).unwrap();
//! assert_ne!(x, shifted);
//! ```

mod definition;
pub mod equations;
pub mod error;
pub mod family;
mod function;
mod interval;
mod projection;
mod projection_core;

pub use definition::ProjectionDefinition;
pub use equations::{EquationEntry, EquationLibrary};
pub use error::{DefinitionError, EquationError};
pub use family::{
    Azimuthal, Conic, Ellipsoidal, Family, FamilyKind, LonDirection, ProjectionFamily,
    PseudoCylindrical,
};
pub use function::{CoordinateFunction, EquationResult, EquationSet, ParameterBundle};
pub use interval::{Interval, MAX_LAT, MAX_LAT0, MAX_LON, MIN_LAT, MIN_LON};
pub use projection::Projection;
pub use projection_core::ProjectionCore;

pub use detectproj_types::{GeoPoint, GeoPoint3d, NewGeoPoint};
