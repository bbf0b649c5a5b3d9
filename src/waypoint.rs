use geozero::{error::Result as GeozeroResult, CoordDimensions, GeomProcessor, GeozeroGeometry};

use crate::{
    geojson::{Feature, Geometry, Properties, ToGeoJson},
    point::Point,
};

/// A single point of interest with an optional name and kind.
///
/// The kind is written as the `icon` property. When neither a name nor a kind is set the
/// serialized feature carries no `properties` key at all.
#[derive(Debug, Clone, PartialEq)]
pub struct Waypoint {
    position: Point,
    name: Option<String>,
    kind: Option<String>,
}

impl Waypoint {
    #[must_use]
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            position: Point::new(longitude, latitude),
            name: None,
            kind: None,
        }
    }

    #[must_use]
    pub fn with_elevation(self, elevation: f64) -> Self {
        Self {
            position: Point::with_elevation(
                self.position.longitude(),
                self.position.latitude(),
                elevation,
            ),
            ..self
        }
    }

    #[must_use]
    pub fn with_name(self, name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..self
        }
    }

    #[must_use]
    pub fn with_kind(self, kind: impl Into<String>) -> Self {
        Self {
            kind: Some(kind.into()),
            ..self
        }
    }

    #[must_use]
    pub fn position(&self) -> &Point {
        &self.position
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    #[must_use]
    pub fn kind(&self) -> Option<&str> {
        self.kind.as_deref()
    }
}

impl ToGeoJson for Waypoint {
    fn to_feature(&self) -> Feature {
        let properties = Properties {
            title: self.name.clone(),
            icon: self.kind.clone(),
        };

        Feature {
            properties: (!properties.is_empty()).then_some(properties),
            geometry: Geometry::Point {
                coordinates: self.position.to_array(),
            },
        }
    }
}

impl GeozeroGeometry for Waypoint {
    fn process_geom<P: GeomProcessor>(&self, processor: &mut P) -> GeozeroResult<()> {
        processor.point_begin(0)?;
        self.position.process_coordinate(processor, 0)?;
        processor.point_end(0)
    }

    fn dims(&self) -> CoordDimensions {
        if self.position.elevation().is_some() {
            CoordDimensions::xyz()
        } else {
            CoordDimensions::xy()
        }
    }
}

impl From<&Waypoint> for geo::Point {
    fn from(waypoint: &Waypoint) -> Self {
        geo::Point::from(geo::Coord::from(&waypoint.position))
    }
}
