use crate::{GeoPoint, NewGeoPoint};
use geo_types::{point, CoordFloat};

impl<T: CoordFloat> GeoPoint for geo_types::Point<T> {
    type Num = T;

    fn lat(&self) -> Self::Num {
        self.y()
    }

    fn lon(&self) -> Self::Num {
        self.x()
    }
}

impl<T: CoordFloat> NewGeoPoint<T> for geo_types::Point<T> {
    fn latlon(lat: T, lon: T) -> Self {
        point!(x: lon, y: lat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GeoPoint3d;

    #[test]
    fn axis_order() {
        let point: geo_types::Point<f64> = NewGeoPoint::latlon(50.0, 10.0);
        assert_eq!(point.x(), 10.0);
        assert_eq!(point.y(), 50.0);
        assert_eq!(GeoPoint3d::from(&point), GeoPoint3d::latlon(50.0, 10.0));
    }
}
