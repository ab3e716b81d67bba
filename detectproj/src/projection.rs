use crate::family::{Family, FamilyKind, LonDirection, ProjectionFamily};
use crate::function::{EquationResult, EquationSet, ParameterBundle};
use crate::interval::Interval;
use crate::projection_core::ProjectionCore;
use detectproj_types::GeoPoint3d;
use std::fmt::{Display, Formatter};

/// Map projection: shared parameters, equations and family specific behaviour.
///
/// All parameters of all families can be read and written through the same methods. Parameters
/// the family does not use are fixed: their setters are ignored (see [`ProjectionFamily`]).
///
/// The type parameter selects the family. The default, [`Family`], picks it at runtime; a concrete
/// family type like [`Conic`](crate::Conic) fixes it at compile time.
///
/// A projection is not meant to be mutated from several threads. Give every search worker its own
/// clone: clones share the equation functions, so cloning only copies the parameters.
#[derive(Debug, Clone, Default)]
pub struct Projection<F = Family> {
    core: ProjectionCore,
    family: F,
}

impl<F: ProjectionFamily> Projection<F> {
    /// Creates a projection from its parts.
    pub fn new(core: ProjectionCore, family: F) -> Self {
        Self { core, family }
    }

    /// Shared parameters and equations.
    pub fn core(&self) -> &ProjectionCore {
        &self.core
    }

    /// Mutable access to the shared parameters and equations.
    pub fn core_mut(&mut self) -> &mut ProjectionCore {
        &mut self.core
    }

    /// Family specific parameters.
    pub fn family_params(&self) -> &F {
        &self.family
    }

    /// Mutable access to the family specific parameters.
    pub fn family_params_mut(&mut self) -> &mut F {
        &mut self.family
    }

    /// Splits the projection into its parts.
    pub fn into_parts(self) -> (ProjectionCore, F) {
        (self.core, self.family)
    }

    /// Radius of the reference sphere.
    pub fn r(&self) -> f64 {
        self.core.r()
    }

    /// Sets the radius of the reference sphere.
    pub fn set_r(&mut self, r: f64) {
        self.core.set_r(r);
    }

    /// Central meridian, degrees.
    pub fn lon0(&self) -> f64 {
        self.core.lon0()
    }

    /// Sets the central meridian.
    pub fn set_lon0(&mut self, lon0: f64) {
        self.core.set_lon0(lon0);
    }

    /// False easting.
    pub fn dx(&self) -> f64 {
        self.core.dx()
    }

    /// Sets the false easting.
    pub fn set_dx(&mut self, dx: f64) {
        self.core.set_dx(dx);
    }

    /// False northing.
    pub fn dy(&self) -> f64 {
        self.core.dy()
    }

    /// Sets the false northing.
    pub fn set_dy(&mut self, dy: f64) {
        self.core.set_dy(dy);
    }

    /// Auxiliary constant.
    pub fn c(&self) -> f64 {
        self.core.c()
    }

    /// Sets the auxiliary constant.
    pub fn set_c(&mut self, c: f64) {
        self.core.set_c(c);
    }

    /// Display name.
    pub fn name(&self) -> &str {
        self.core.name()
    }

    /// Sets the display name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.core.set_name(name);
    }

    /// Short machine identifier.
    pub fn id(&self) -> &str {
        self.core.id()
    }

    /// Sets the identifier.
    pub fn set_id(&mut self, id: impl Into<String>) {
        self.core.set_id(id);
    }

    /// Replaces the equations.
    pub fn set_equations(&mut self, equations: EquationSet) {
        self.core.set_equations(equations);
    }

    /// Cartographic pole.
    pub fn cart_pole(&self) -> GeoPoint3d {
        self.family.cart_pole()
    }

    /// Sets the cartographic pole.
    pub fn set_cart_pole(&mut self, pole: GeoPoint3d) {
        self.family.set_cart_pole(pole);
    }

    /// First true parallel.
    pub fn lat1(&self) -> f64 {
        self.family.lat1()
    }

    /// Sets the first true parallel.
    pub fn set_lat1(&mut self, lat1: f64) {
        self.family.set_lat1(lat1);
    }

    /// Second true parallel.
    pub fn lat2(&self) -> f64 {
        self.family.lat2()
    }

    /// Sets the second true parallel.
    pub fn set_lat2(&mut self, lat2: f64) {
        self.family.set_lat2(lat2);
    }

    /// Semi-major axis. Equal to [`Projection::r`] for spherical families.
    pub fn a(&self) -> f64 {
        self.family.a(self.core.r())
    }

    /// Sets the semi-major axis.
    pub fn set_a(&mut self, a: f64) {
        self.family.set_a(a);
    }

    /// Semi-minor axis. Equal to [`Projection::r`] for spherical families.
    pub fn b(&self) -> f64 {
        self.family.b(self.core.r())
    }

    /// Sets the semi-minor axis.
    pub fn set_b(&mut self, b: f64) {
        self.family.set_b(b);
    }

    /// Longitude direction.
    pub fn lon_dir(&self) -> LonDirection {
        self.family.lon_dir()
    }

    /// Sets the longitude direction.
    pub fn set_lon_dir(&mut self, lon_dir: LonDirection) {
        self.family.set_lon_dir(lon_dir);
    }

    /// Family tag.
    pub fn kind(&self) -> FamilyKind {
        self.family.kind()
    }

    /// Family name.
    pub fn family(&self) -> &'static str {
        self.family.family()
    }

    /// Legal latitudes of the cartographic pole.
    pub fn lat_p_interval(&self) -> Interval {
        self.family.lat_p_interval()
    }

    /// Legal longitudes of the cartographic pole.
    pub fn lon_p_interval(&self) -> Interval {
        self.family.lon_p_interval()
    }

    /// Legal true parallels.
    pub fn lat1_interval(&self) -> Interval {
        self.family.lat1_interval()
    }

    /// Current parameters as a bundle.
    pub fn parameters(&self) -> ParameterBundle {
        self.core.bundle(self.family.lat1(), self.family.lat2())
    }

    /// Writes all parameters of the bundle through the regular setters.
    ///
    /// True parallels the family does not use are ignored, like with [`Projection::set_lat1`].
    /// For families with a single true parallel `lat1` wins.
    pub fn apply_parameters(&mut self, bundle: &ParameterBundle) {
        self.core.set_r(bundle.r);
        self.core.set_lon0(bundle.lon0);
        self.core.set_dx(bundle.dx);
        self.core.set_dy(bundle.dy);
        self.core.set_c(bundle.c);
        self.family.set_lat2(bundle.lat2);
        self.family.set_lat1(bundle.lat1);
    }

    /// Projected X coordinate of a geographic point.
    pub fn evaluate_forward_x(&self, lat: f64, lon: f64) -> EquationResult {
        self.core.forward_x_with(lat, lon, &self.parameters())
    }

    /// Projected Y coordinate of a geographic point.
    pub fn evaluate_forward_y(&self, lat: f64, lon: f64) -> EquationResult {
        self.core.forward_y_with(lat, lon, &self.parameters())
    }

    /// Latitude of a projected point.
    pub fn evaluate_inverse_lat(&self, x: f64, y: f64) -> EquationResult {
        self.core.inverse_lat_with(x, y, &self.parameters())
    }

    /// Longitude of a projected point.
    pub fn evaluate_inverse_lon(&self, x: f64, y: f64) -> EquationResult {
        self.core.inverse_lon_with(x, y, &self.parameters())
    }

    /// Projected X coordinate evaluated with the given parameters instead of the projection's own.
    pub fn evaluate_forward_x_with(
        &self,
        lat: f64,
        lon: f64,
        bundle: &ParameterBundle,
    ) -> EquationResult {
        self.core.forward_x_with(lat, lon, bundle)
    }

    /// Projected Y coordinate evaluated with the given parameters instead of the projection's own.
    pub fn evaluate_forward_y_with(
        &self,
        lat: f64,
        lon: f64,
        bundle: &ParameterBundle,
    ) -> EquationResult {
        self.core.forward_y_with(lat, lon, bundle)
    }

    /// Latitude evaluated with the given parameters instead of the projection's own.
    pub fn evaluate_inverse_lat_with(
        &self,
        x: f64,
        y: f64,
        bundle: &ParameterBundle,
    ) -> EquationResult {
        self.core.inverse_lat_with(x, y, bundle)
    }

    /// Longitude evaluated with the given parameters instead of the projection's own.
    pub fn evaluate_inverse_lon_with(
        &self,
        x: f64,
        y: f64,
        bundle: &ParameterBundle,
    ) -> EquationResult {
        self.core.inverse_lon_with(x, y, bundle)
    }

    /// Projects a geographic point, returning `(x, y)`.
    pub fn forward(&self, lat: f64, lon: f64) -> Result<(f64, f64), crate::EquationError> {
        let bundle = self.parameters();
        Ok((
            self.core.forward_x_with(lat, lon, &bundle)?,
            self.core.forward_y_with(lat, lon, &bundle)?,
        ))
    }

    /// Unprojects a planar point, returning `(lat, lon)`.
    pub fn inverse(&self, x: f64, y: f64) -> Result<(f64, f64), crate::EquationError> {
        let bundle = self.parameters();
        Ok((
            self.core.inverse_lat_with(x, y, &bundle)?,
            self.core.inverse_lon_with(x, y, &bundle)?,
        ))
    }
}

impl<F: ProjectionFamily + Into<Family>> Projection<F> {
    /// Converts a projection with a statically known family into a runtime-dispatched one.
    pub fn into_dynamic(self) -> Projection<Family> {
        Projection::new(self.core, self.family.into())
    }
}

impl<F: ProjectionFamily> Display for Projection<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let p = self.parameters();
        write!(
            f,
            "{} ({}, {}): R = {}, lat1 = {}, lat2 = {}, lon0 = {}, dx = {}, dy = {}, c = {}",
            self.name(),
            self.id(),
            self.family(),
            p.r,
            p.lat1,
            p.lat2,
            p.lon0,
            p.dx,
            p.dy,
            p.c
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equations;
    use crate::family::{Conic, Ellipsoidal, PseudoCylindrical};
    use crate::EquationError;
    use approx::assert_abs_diff_eq;
    use assert_matches::assert_matches;
    use detectproj_types::{latlon, GeoPoint};

    fn conic() -> Projection<Conic> {
        let mut projection = Projection::new(
            ProjectionCore::new("Equidistant conic", "eqdc", equations::eqdc()),
            Conic::new(latlon!(90.0, 0.0), 30.0, 60.0, LonDirection::Normal),
        );
        projection.set_lon0(10.0);
        projection.set_r(6_371_000.0);
        projection
    }

    #[test]
    fn default_projection_is_azimuthal_equal_area() {
        let projection = Projection::<Family>::default();
        assert_eq!(projection.kind(), FamilyKind::Azimuthal);
        assert_eq!(projection.family(), "Azimuthal");
        assert_eq!(projection.id(), "aeqa");

        for lat in (-90..=90).step_by(15) {
            for lon in (-180..=180).step_by(30) {
                let x = projection.evaluate_forward_x(lat as f64, lon as f64);
                let y = projection.evaluate_forward_y(lat as f64, lon as f64);
                assert!(x.is_ok_and(f64::is_finite));
                assert!(y.is_ok_and(f64::is_finite));
            }
        }
    }

    #[test]
    fn conic_scenario() {
        let projection = conic();
        assert_eq!(projection.lat1(), 30.0);
        assert_eq!(projection.lat2(), 60.0);
        assert_eq!(projection.lon0(), 10.0);

        let interval = projection.lat1_interval();
        assert!(interval.contains_strictly(30.0));
        assert!(interval.contains_strictly(60.0));
    }

    #[test]
    fn ellipsoidal_scenario() {
        let mut projection = Projection::new(
            ProjectionCore::new("Mercator", "merc", equations::merc()),
            Ellipsoidal::new(45.0, 6_378_137.0, 6_356_752.3),
        );
        assert_eq!(projection.lat2(), 45.0);

        let pole = projection.cart_pole();
        projection.set_cart_pole(latlon!(10.0, 20.0));
        assert_eq!(projection.cart_pole(), pole);
        assert_eq!(pole.lat(), 90.0);
        assert_eq!(pole.lon(), 0.0);

        projection.set_r(1.0);
        assert_eq!(projection.a(), 6_378_137.0);
        assert_eq!(projection.b(), 6_356_752.3);
    }

    #[test]
    fn spherical_alias_follows_radius() {
        let mut projections: Vec<Projection> = vec![
            Projection::default(),
            conic().into_dynamic(),
            Projection::new(ProjectionCore::default(), PseudoCylindrical::default()).into_dynamic(),
        ];

        for projection in &mut projections {
            projection.set_a(1.0);
            projection.set_r(6_371_000.0);
            assert_eq!(projection.a(), 6_371_000.0);
            assert_eq!(projection.b(), 6_371_000.0);
            projection.set_r(2.0);
            assert_eq!(projection.a(), 2.0);
            assert_eq!(projection.b(), 2.0);
        }
    }

    #[test]
    fn roundtrip_with_explicit_bundle() {
        let projection = conic();
        let bundle = ParameterBundle {
            r: 6_378_000.0,
            lat1: 20.0,
            lat2: 50.0,
            lon0: -5.0,
            dx: 100.0,
            dy: 200.0,
            c: 0.0,
        };

        for (lat, lon) in [(45.0, 0.0), (10.0, -40.0), (-20.0, 30.0)] {
            let x = projection.evaluate_forward_x_with(lat, lon, &bundle).unwrap();
            let y = projection.evaluate_forward_y_with(lat, lon, &bundle).unwrap();
            let lat2 = projection.evaluate_inverse_lat_with(x, y, &bundle).unwrap();
            let lon2 = projection.evaluate_inverse_lon_with(x, y, &bundle).unwrap();
            assert_abs_diff_eq!(lat2, lat, epsilon = 1e-6);
            assert_abs_diff_eq!(lon2, lon, epsilon = 1e-6);
        }

        // Probing candidate parameters leaves the projection intact.
        assert_eq!(projection.r(), 6_371_000.0);
        assert_eq!(projection.lat1(), 30.0);
        assert_eq!(projection.lon0(), 10.0);
    }

    #[test]
    fn roundtrip_with_own_state() {
        let projection = conic();
        let (x, y) = projection.forward(50.0, 25.0).unwrap();
        let (lat, lon) = projection.inverse(x, y).unwrap();
        assert_abs_diff_eq!(lat, 50.0, epsilon = 1e-6);
        assert_abs_diff_eq!(lon, 25.0, epsilon = 1e-6);
    }

    #[test]
    fn equation_errors_pass_through() {
        let mut projection = conic();
        projection.set_lat1(-45.0);
        projection.set_lat2(45.0);
        assert_matches!(
            projection.evaluate_forward_x(0.0, 0.0),
            Err(EquationError::Undefined(_))
        );
        assert_matches!(projection.forward(0.0, 0.0), Err(EquationError::Undefined(_)));
    }

    #[test]
    fn parameters_roundtrip_through_setters() {
        let mut projection = Projection::<Family>::default();
        let bundle = ParameterBundle {
            r: 3.0,
            lat1: 30.0,
            lat2: 60.0,
            lon0: 15.0,
            dx: 1.0,
            dy: 2.0,
            c: 0.5,
        };
        projection.apply_parameters(&bundle);

        let applied = projection.parameters();
        assert_eq!(applied.r, 3.0);
        assert_eq!(applied.lon0, 15.0);
        assert_eq!(applied.c, 0.5);
        assert_eq!(applied.lat1, 0.0);
        assert_eq!(applied.lat2, 0.0);

        let mut projection = conic().into_dynamic();
        projection.apply_parameters(&bundle);
        assert_eq!(projection.parameters(), bundle);

        let mut projection =
            Projection::new(ProjectionCore::default(), PseudoCylindrical::default());
        projection.apply_parameters(&bundle);
        assert_eq!(projection.lat1(), 30.0);
        assert_eq!(projection.lat2(), 30.0);
    }

    #[test]
    fn clones_are_independent() {
        let original = conic();
        let mut copy = original.clone();
        copy.set_lat1(10.0);
        copy.set_r(1.0);
        assert_eq!(original.lat1(), 30.0);
        assert_eq!(original.r(), 6_371_000.0);
        assert!(original
            .core()
            .equations()
            .forward_x
            .ptr_eq(&copy.core().equations().forward_x));
    }

    #[test]
    fn display() {
        let projection = conic();
        let s = projection.to_string();
        assert!(s.starts_with("Equidistant conic (eqdc, Conic)"));
        assert!(s.contains("lat2 = 60"));
    }
}
