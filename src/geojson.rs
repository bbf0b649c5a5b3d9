//! The `GeoJSON` shapes produced by the model.
//!
//! These types are the object form every model type converts into before it is turned into
//! text. Embedding a [`Feature`] into a [`FeatureCollection`] happens on these structures, so
//! nothing is ever encoded twice. Field order follows the order in which the keys are written.
//!
//! Whole-number ordinates are written as JSON integers, so `-122.0` becomes `-122` while
//! `45.5` stays as it is.
use serde::{ser::SerializeStruct, Deserialize, Serialize, Serializer};
use serde_json::Value;

use crate::{error::Result, ser};

/// A `GeoJSON` position, `[longitude, latitude]` or `[longitude, latitude, elevation]`.
pub type Position = Vec<f64>;

/// Largest magnitude below which every whole `f64` is exactly representable as an integer.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

struct Ordinate(f64);

impl Serialize for Ordinate {
    #[allow(clippy::cast_possible_truncation)]
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let value = self.0;
        let whole = value.is_finite()
            && value.fract() == 0.0
            && value.abs() < MAX_EXACT_INTEGER
            && !(value == 0.0 && value.is_sign_negative());

        if whole {
            serializer.serialize_i64(value as i64)
        } else {
            serializer.serialize_f64(value)
        }
    }
}

struct PositionRef<'a>(&'a [f64]);

impl Serialize for PositionRef<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.0.iter().copied().map(Ordinate))
    }
}

struct LineRef<'a>(&'a [Position]);

impl Serialize for LineRef<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.0.iter().map(|position| PositionRef(position)))
    }
}

#[allow(clippy::ptr_arg)]
fn serialize_position<S: Serializer>(
    position: &Position,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    PositionRef(position).serialize(serializer)
}

#[allow(clippy::ptr_arg)]
fn serialize_lines<S: Serializer>(
    lines: &Vec<Vec<Position>>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.collect_seq(lines.iter().map(|line| LineRef(line)))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    Point {
        #[serde(serialize_with = "serialize_position")]
        coordinates: Position,
    },
    MultiLineString {
        #[serde(serialize_with = "serialize_lines")]
        coordinates: Vec<Vec<Position>>,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Properties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl Properties {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.icon.is_none()
    }
}

/// A `GeoJSON` `Feature`. A `None` in `properties` drops the key from the output entirely,
/// which is different from an empty object.
///
/// Point features write `geometry` before `properties`, line features write `properties`
/// first.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename = "Feature")]
pub struct Feature {
    #[serde(default)]
    pub properties: Option<Properties>,
    pub geometry: Geometry,
}

impl Serialize for Feature {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let geometry_first = matches!(self.geometry, Geometry::Point { .. });
        let len = 2 + usize::from(self.properties.is_some());

        let mut state = serializer.serialize_struct("Feature", len)?;
        state.serialize_field("type", "Feature")?;
        if geometry_first {
            state.serialize_field("geometry", &self.geometry)?;
        }
        if let Some(properties) = &self.properties {
            state.serialize_field("properties", properties)?;
        }
        if !geometry_first {
            state.serialize_field("geometry", &self.geometry)?;
        }
        state.end()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "FeatureCollection")]
pub struct FeatureCollection {
    pub features: Vec<Feature>,
}

/// Conversion of a model type into a `GeoJSON` [`Feature`].
///
/// Only [`ToGeoJson::to_feature`] has to be provided, the `Value` and text forms are derived
/// from it.
pub trait ToGeoJson {
    fn to_feature(&self) -> Feature;

    /// The feature as a parsed JSON object, ready to be embedded in a larger document.
    ///
    /// # Errors
    ///
    /// Returns an error if the feature cannot be represented as JSON.
    fn to_geojson(&self) -> Result<Value> {
        ser::to_value(&self.to_feature())
    }

    /// The feature as compact `GeoJSON` text.
    ///
    /// # Errors
    ///
    /// Returns an error if the feature cannot be represented as JSON.
    fn to_geojson_string(&self) -> Result<String> {
        ser::to_string(&self.to_feature())
    }
}
