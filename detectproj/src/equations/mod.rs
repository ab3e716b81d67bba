//! Built-in projection equations and a registry of named equation sets.
//!
//! All equations work on a sphere, take and return angles in degrees and follow the
//! [`CoordinateFunction`] contract. Equations report singular inputs with [`EquationError`].

mod azimuthal;
mod conic;
mod cylindrical;

use crate::error::EquationError;
use crate::family::{Family, FamilyKind};
use crate::function::{CoordinateFunction, EquationSet, ParameterBundle};
use crate::interval::MAX_LON;
use crate::projection::Projection;
use crate::projection_core::ProjectionCore;
use ahash::{HashMap, HashMapExt};

/// Tolerance used to detect singular configurations.
pub(crate) const EPS: f64 = 1e-10;

/// Id of the equations used by default-constructed projections.
pub const DEFAULT_ID: &str = "aeqa";

pub(crate) fn check_radius(p: &ParameterBundle) -> Result<(), EquationError> {
    if p.r > 0.0 {
        Ok(())
    } else {
        Err(EquationError::Undefined("sphere radius must be positive"))
    }
}

/// Wraps a longitude into `[-180, 180)`.
pub(crate) fn normalize_lon(lon: f64) -> f64 {
    (lon + MAX_LON).rem_euclid(2.0 * MAX_LON) - MAX_LON
}

/// Azimuthal equal-area projection, polar aspect.
pub fn aeqa() -> EquationSet {
    EquationSet::new(
        CoordinateFunction::new(azimuthal::aeqa_x),
        CoordinateFunction::new(azimuthal::aeqa_y),
        CoordinateFunction::new(azimuthal::aeqa_lat),
        CoordinateFunction::new(azimuthal::aeqa_lon),
    )
}

/// Equidistant conic projection on two standard parallels `lat1` and `lat2`.
pub fn eqdc() -> EquationSet {
    EquationSet::new(
        CoordinateFunction::new(conic::eqdc_x),
        CoordinateFunction::new(conic::eqdc_y),
        CoordinateFunction::new(conic::eqdc_lat),
        CoordinateFunction::new(conic::eqdc_lon),
    )
}

/// Sinusoidal projection.
pub fn sinu() -> EquationSet {
    EquationSet::new(
        CoordinateFunction::new(cylindrical::sinu_x),
        CoordinateFunction::new(cylindrical::sinu_y),
        CoordinateFunction::new(cylindrical::sinu_lat),
        CoordinateFunction::new(cylindrical::sinu_lon),
    )
}

/// Mercator projection with the true parallel `lat1`.
///
/// The equations are spherical. The library registers them with the [`FamilyKind::Ellipsoidal`]
/// family for its normal-aspect, single-parallel parameter set, but the family's semi-axes are not
/// part of a [`ParameterBundle`] and do not affect the result.
pub fn merc() -> EquationSet {
    EquationSet::new(
        CoordinateFunction::new(cylindrical::merc_x),
        CoordinateFunction::new(cylindrical::merc_y),
        CoordinateFunction::new(cylindrical::merc_lat),
        CoordinateFunction::new(cylindrical::merc_lon),
    )
}

/// Named equation set together with the family it belongs to.
#[derive(Debug, Clone)]
pub struct EquationEntry {
    id: String,
    name: String,
    kind: FamilyKind,
    equations: EquationSet,
}

impl EquationEntry {
    /// Creates a new entry.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        kind: FamilyKind,
        equations: EquationSet,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            equations,
        }
    }

    /// Short identifier of the projection.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display name of the projection.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Family of projections these equations belong to.
    pub fn kind(&self) -> FamilyKind {
        self.kind
    }

    /// Equations of the projection.
    pub fn equations(&self) -> &EquationSet {
        &self.equations
    }

    /// Creates a projection of the entry's family, evaluated with the entry's equations.
    ///
    /// The equation functions are shared with the entry, not copied.
    pub fn projection(&self) -> Projection {
        Projection::new(
            ProjectionCore::new(&self.name, &self.id, self.equations.clone()),
            Family::new(self.kind),
        )
    }
}

/// Registry of equation sets keyed by projection id.
///
/// The library always contains the [`DEFAULT_ID`] entry.
#[derive(Debug, Clone)]
pub struct EquationLibrary {
    entries: HashMap<String, EquationEntry>,
}

impl EquationLibrary {
    /// Creates a library with all built-in equations.
    pub fn new() -> Self {
        let mut library = Self::with_default_entry();
        library.register(EquationEntry::new(
            "eqdc",
            "Equidistant conic",
            FamilyKind::Conic,
            eqdc(),
        ));
        library.register(EquationEntry::new(
            "sinu",
            "Sinusoidal",
            FamilyKind::PseudoCylindrical,
            sinu(),
        ));
        // Spherical equations: the ellipsoid axes are ignored.
        library.register(EquationEntry::new(
            "merc",
            "Mercator",
            FamilyKind::Ellipsoidal,
            merc(),
        ));

        library
    }

    /// Creates a library holding only the default azimuthal equal-area equations.
    pub fn with_default_entry() -> Self {
        let mut entries = HashMap::new();
        entries.insert(
            DEFAULT_ID.to_string(),
            EquationEntry::new(
                DEFAULT_ID,
                "Azimuthal equal area",
                FamilyKind::Azimuthal,
                aeqa(),
            ),
        );

        Self { entries }
    }

    /// Adds an entry, returning the one it replaced.
    pub fn register(&mut self, entry: EquationEntry) -> Option<EquationEntry> {
        log::debug!(
            "Registering equations {} ({}) of {} family",
            entry.id,
            entry.name,
            entry.kind
        );
        self.entries.insert(entry.id.clone(), entry)
    }

    /// Entry with the given id.
    pub fn get(&self, id: &str) -> Option<&EquationEntry> {
        let entry = self.entries.get(id);
        if entry.is_none() {
            log::debug!("Equations {id} are not in the library");
        }

        entry
    }

    /// The entry used by default-constructed projections.
    pub fn default_entry(&self) -> Option<&EquationEntry> {
        self.entries.get(DEFAULT_ID)
    }

    /// Returns true if an entry with the given id is registered.
    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// Ids of all registered entries in alphabetical order.
    pub fn ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    /// Number of registered entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false: the default entry cannot be removed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Creates a projection from the entry with the given id.
    pub fn projection(&self, id: &str) -> Option<Projection> {
        self.get(id).map(EquationEntry::projection)
    }
}

impl Default for EquationLibrary {
    fn default() -> Self {
        Self::new()
    }
}
