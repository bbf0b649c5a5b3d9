//! Collects geozero features into [`geo`] geometries.
//!
//! [`FeatureCollector`] implements the geozero processor traits and turns every feature it
//! sees into a [`GeoFeature`]. Only the geometry kinds a [`World`](crate::world::World) emits
//! are understood: points, line strings and multi line strings. Any [`GeozeroDatasource`]
//! limited to those kinds can be collected, for example `GeoJSON` text written by a world and
//! read back through geozero. Features with other geometries are rejected with an error.
//!
//! # Example
//!
//! ```rust
//! use geo::Geometry;
//! use geoworld::{collector::collect_features, Waypoint, World};
//!
//! let mut world = World::new("My Data", vec![]);
//! world.add_feature(Waypoint::new(-121.5, 45.5).with_name("home"));
//!
//! let features = collect_features(&mut world).unwrap();
//! assert!(matches!(features[0].geometry, Geometry::Point(_)));
//! assert_eq!(features[0].properties["title"], "home");
//! ```
use geo::Geometry;
use geozero::{
    error::GeozeroError, geo_types::GeoWriter, ColumnValue, CoordDimensions, FeatureProcessor,
    GeomProcessor, GeozeroDatasource, PropertyProcessor,
};
use hashbrown::HashMap;
use log::trace;
use serde::Serialize;
use serde_json::Value;

use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeoFeature {
    pub geometry: Geometry,
    pub properties: HashMap<String, Value>,
}

pub struct FeatureCollector {
    pub features: Vec<GeoFeature>,

    current_geometry: GeoWriter,
    current_properties: HashMap<String, Value>,
}

impl FeatureCollector {
    #[must_use]
    pub fn new() -> Self {
        Self {
            features: Vec::new(),
            current_geometry: GeoWriter::new(),
            current_properties: HashMap::new(),
        }
    }
}

impl Default for FeatureCollector {
    fn default() -> Self {
        Self::new()
    }
}

/// Runs `source` through a [`FeatureCollector`] and returns the collected features.
///
/// # Errors
///
/// Returns an error if the datasource fails, a property has an unsupported value type or a
/// feature ends without a geometry.
pub fn collect_features<S: GeozeroDatasource>(source: &mut S) -> Result<Vec<GeoFeature>> {
    let mut collector = FeatureCollector::new();
    source.process(&mut collector)?;
    Ok(collector.features)
}

fn column_value_to_json(value: &ColumnValue) -> geozero::error::Result<Value> {
    Ok(match value {
        ColumnValue::String(val) | ColumnValue::Json(val) => Value::from(*val),
        ColumnValue::Bool(val) => Value::from(*val),
        ColumnValue::Int(val) => Value::from(*val),
        ColumnValue::Long(val) => Value::from(*val),
        ColumnValue::ULong(val) => Value::from(*val),
        ColumnValue::Double(val) => Value::from(*val),
        other => {
            return Err(GeozeroError::Property(format!(
                "unsupported property value {other:?}"
            )))
        }
    })
}

impl PropertyProcessor for FeatureCollector {
    fn property(
        &mut self,
        _idx: usize,
        name: &str,
        value: &ColumnValue,
    ) -> geozero::error::Result<bool> {
        self.current_properties
            .insert(name.to_string(), column_value_to_json(value)?);
        Ok(false)
    }
}

impl GeomProcessor for FeatureCollector {
    fn dimensions(&self) -> CoordDimensions {
        self.current_geometry.dimensions()
    }

    fn multi_dim(&self) -> bool {
        self.current_geometry.multi_dim()
    }

    fn xy(&mut self, x: f64, y: f64, idx: usize) -> geozero::error::Result<()> {
        self.current_geometry.xy(x, y, idx)
    }

    fn coordinate(
        &mut self,
        x: f64,
        y: f64,
        z: Option<f64>,
        m: Option<f64>,
        t: Option<f64>,
        tm: Option<u64>,
        idx: usize,
    ) -> geozero::error::Result<()> {
        self.current_geometry.coordinate(x, y, z, m, t, tm, idx)
    }

    fn point_begin(&mut self, idx: usize) -> geozero::error::Result<()> {
        self.current_geometry.point_begin(idx)
    }

    fn point_end(&mut self, idx: usize) -> geozero::error::Result<()> {
        self.current_geometry.point_end(idx)
    }

    fn linestring_begin(
        &mut self,
        tagged: bool,
        size: usize,
        idx: usize,
    ) -> geozero::error::Result<()> {
        self.current_geometry.linestring_begin(tagged, size, idx)
    }

    fn linestring_end(&mut self, tagged: bool, idx: usize) -> geozero::error::Result<()> {
        self.current_geometry.linestring_end(tagged, idx)
    }

    fn multilinestring_begin(&mut self, size: usize, idx: usize) -> geozero::error::Result<()> {
        self.current_geometry.multilinestring_begin(size, idx)
    }

    fn multilinestring_end(&mut self, idx: usize) -> geozero::error::Result<()> {
        self.current_geometry.multilinestring_end(idx)
    }
}

impl FeatureProcessor for FeatureCollector {
    fn properties_begin(&mut self) -> geozero::error::Result<()> {
        self.current_properties = HashMap::new();
        Ok(())
    }

    fn geometry_begin(&mut self) -> geozero::error::Result<()> {
        self.current_geometry = GeoWriter::new();
        Ok(())
    }

    fn feature_end(&mut self, idx: u64) -> geozero::error::Result<()> {
        let geometry = self
            .current_geometry
            .take_geometry()
            .ok_or_else(|| GeozeroError::Geometry(format!("feature {idx} has no geometry")))?;
        trace!("Collected feature {idx}");

        self.features.push(GeoFeature {
            geometry,
            properties: std::mem::take(&mut self.current_properties),
        });
        Ok(())
    }
}
