//! A named collection of tracks and waypoints.
//!
//! A [`World`] serializes to a `GeoJSON` `FeatureCollection` and is also a
//! [`GeozeroDatasource`], so it can be fed to any geozero writer.
//!
//! ```rust
//! use geoworld::{Point, Track, Waypoint, World};
//!
//! let mut world = World::new("My Data", vec![]);
//! world.add_feature(Waypoint::new(-121.5, 45.6).with_name("store").with_kind("dot"));
//! world.add_feature(Track::named(
//!     vec![vec![Point::new(-121.0, 45.5), Point::new(-122.0, 45.5)]],
//!     "track 2",
//! ));
//!
//! let value = world.to_geojson().unwrap();
//! assert_eq!(value["features"].as_array().unwrap().len(), 2);
//! assert!(value.get("name").is_none());
//! ```
use geozero::{
    error::Result as GeozeroResult, ColumnValue, FeatureProcessor, GeomProcessor,
    GeozeroDatasource, GeozeroGeometry, PropertyProcessor,
};
use log::debug;
use serde_json::Value;

use crate::{
    error::Result,
    geojson::{Feature, FeatureCollection, ToGeoJson},
    ser,
    track::Track,
    waypoint::Waypoint,
};

#[derive(Debug, Clone, PartialEq)]
pub enum WorldFeature {
    Track(Track),
    Waypoint(Waypoint),
}

impl WorldFeature {
    fn kind(&self) -> &'static str {
        match self {
            WorldFeature::Track(_) => "track",
            WorldFeature::Waypoint(_) => "waypoint",
        }
    }

    fn process_properties<P: PropertyProcessor>(&self, processor: &mut P) -> GeozeroResult<()> {
        let (title, icon) = match self {
            WorldFeature::Track(track) => (track.name(), None),
            WorldFeature::Waypoint(waypoint) => (waypoint.name(), waypoint.kind()),
        };

        let mut idx = 0;
        for (name, value) in [("title", title), ("icon", icon)] {
            if let Some(value) = value {
                processor.property(idx, name, &ColumnValue::String(value))?;
                idx += 1;
            }
        }
        Ok(())
    }
}

impl From<Track> for WorldFeature {
    fn from(track: Track) -> Self {
        WorldFeature::Track(track)
    }
}

impl From<Waypoint> for WorldFeature {
    fn from(waypoint: Waypoint) -> Self {
        WorldFeature::Waypoint(waypoint)
    }
}

impl ToGeoJson for WorldFeature {
    fn to_feature(&self) -> Feature {
        match self {
            WorldFeature::Track(track) => track.to_feature(),
            WorldFeature::Waypoint(waypoint) => waypoint.to_feature(),
        }
    }
}

impl GeozeroGeometry for WorldFeature {
    fn process_geom<P: GeomProcessor>(&self, processor: &mut P) -> GeozeroResult<()> {
        match self {
            WorldFeature::Track(track) => track.process_geom(processor),
            WorldFeature::Waypoint(waypoint) => waypoint.process_geom(processor),
        }
    }
}

/// The name of a world is kept in memory only, it is not part of the `GeoJSON` output.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct World {
    name: String,
    features: Vec<WorldFeature>,
}

impl World {
    #[must_use]
    pub fn new(name: impl Into<String>, features: Vec<WorldFeature>) -> Self {
        Self {
            name: name.into(),
            features,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn features(&self) -> &[WorldFeature] {
        &self.features
    }

    /// Appends a track or waypoint after the existing features.
    pub fn add_feature(&mut self, feature: impl Into<WorldFeature>) {
        let feature = feature.into();
        debug!(
            "Adding {} as feature {} of world '{}'",
            feature.kind(),
            self.features.len(),
            self.name
        );
        self.features.push(feature);
    }

    #[must_use]
    pub fn to_feature_collection(&self) -> FeatureCollection {
        FeatureCollection {
            features: self.features.iter().map(ToGeoJson::to_feature).collect(),
        }
    }

    /// # Errors
    ///
    /// Returns an error if the collection cannot be represented as JSON.
    pub fn to_geojson(&self) -> Result<Value> {
        ser::to_value(&self.to_feature_collection())
    }

    /// # Errors
    ///
    /// Returns an error if the collection cannot be represented as JSON.
    pub fn to_geojson_string(&self) -> Result<String> {
        ser::to_string(&self.to_feature_collection())
    }

    /// # Errors
    ///
    /// Returns an error if the collection cannot be represented as JSON.
    pub fn to_geojson_string_pretty(&self) -> Result<String> {
        ser::to_string_pretty(&self.to_feature_collection())
    }
}

impl GeozeroDatasource for World {
    fn process<P: FeatureProcessor>(&mut self, processor: &mut P) -> GeozeroResult<()> {
        debug!(
            "Processing world '{}' with {} features",
            self.name,
            self.features.len()
        );

        processor.dataset_begin(Some(self.name.as_str()))?;
        for (idx, feature) in (0_u64..).zip(&self.features) {
            processor.feature_begin(idx)?;
            processor.properties_begin()?;
            feature.process_properties(processor)?;
            processor.properties_end()?;
            processor.geometry_begin()?;
            feature.process_geom(processor)?;
            processor.geometry_end()?;
            processor.feature_end(idx)?;
        }
        processor.dataset_end()
    }
}
