use geozero::{error::Result as GeozeroResult, GeomProcessor};

use crate::geojson::Position;

/// A single coordinate. Values are stored as given, no range checks are applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    longitude: f64,
    latitude: f64,
    elevation: Option<f64>,
}

impl Point {
    #[must_use]
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
            elevation: None,
        }
    }

    #[must_use]
    pub fn with_elevation(longitude: f64, latitude: f64, elevation: f64) -> Self {
        Self {
            longitude,
            latitude,
            elevation: Some(elevation),
        }
    }

    #[must_use]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    #[must_use]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    #[must_use]
    pub fn elevation(&self) -> Option<f64> {
        self.elevation
    }

    /// `[longitude, latitude]`, or `[longitude, latitude, elevation]` if an elevation is set.
    #[must_use]
    pub fn to_array(&self) -> Position {
        match self.elevation {
            Some(elevation) => vec![self.longitude, self.latitude, elevation],
            None => vec![self.longitude, self.latitude],
        }
    }

    pub(crate) fn process_coordinate<P: GeomProcessor>(
        &self,
        processor: &mut P,
        idx: usize,
    ) -> GeozeroResult<()> {
        match self.elevation {
            Some(z) if processor.multi_dim() => processor.coordinate(
                self.longitude,
                self.latitude,
                Some(z),
                None,
                None,
                None,
                idx,
            ),
            _ => processor.xy(self.longitude, self.latitude, idx),
        }
    }
}

impl From<&Point> for geo::Coord {
    fn from(point: &Point) -> Self {
        geo::coord! { x: point.longitude, y: point.latitude }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_to_array_without_elevation() {
        let array = Point::new(-122.0, 45.0).to_array();

        assert_eq!(array.len(), 2);
        assert_relative_eq!(array[0], -122.0);
        assert_relative_eq!(array[1], 45.0);
    }

    #[test]
    fn test_to_array_with_elevation() {
        let array = Point::with_elevation(-121.5, 45.5, 30.0).to_array();

        assert_eq!(array.len(), 3);
        assert_relative_eq!(array[2], 30.0);
    }

    #[test]
    fn test_out_of_range_passes_through() {
        let point = Point::new(540.0, -123.0);

        assert_relative_eq!(point.to_array()[0], 540.0);
        assert_relative_eq!(point.to_array()[1], -123.0);
        assert_eq!(point.elevation(), None);
    }

    #[test]
    fn test_to_coord_drops_elevation() {
        let coord = geo::Coord::from(&Point::with_elevation(13.4, 52.5, 34.0));

        assert_relative_eq!(coord.x, 13.4);
        assert_relative_eq!(coord.y, 52.5);
    }
}
