//! # geoworld
//!
//! A library for modelling tracks and waypoints and serializing them into `GeoJSON`.
//!
//! Points are grouped into track segments, segments into tracks, and tracks and waypoints are
//! gathered in a [`World`]. Every model type converts into the structures in [`geojson`], which
//! serde turns into text. A [`World`] is also a geozero datasource, so the same data can be sent
//! through any geozero processor.
//!
//! ## Serialization rules
//!
//! - A point becomes `[longitude, latitude]`, or `[longitude, latitude, elevation]`.
//! - A track becomes a `Feature` with a `MultiLineString` geometry and always carries a
//!   `properties` object, `{"title": name}` or `{}`.
//! - A waypoint becomes a `Feature` with a `Point` geometry. Its `properties` key is only
//!   written when a name (`title`) or a kind (`icon`) is set.
//! - A world becomes a `FeatureCollection`. Its name is not written.
//!
//! ## Example
//!
//! ```rust
//! use geoworld::{Point, ToGeoJson, Track, Waypoint, World};
//!
//! let track = Track::named(
//!     vec![vec![
//!         Point::new(-122.0, 45.0),
//!         Point::new(-122.0, 46.0),
//!         Point::new(-121.0, 46.0),
//!     ]],
//!     "track 1",
//! );
//!
//! assert_eq!(
//!     track.to_geojson_string()?,
//!     r#"{"type":"Feature","properties":{"title":"track 1"},"geometry":{"type":"MultiLineString","coordinates":[[[-122,45],[-122,46],[-121,46]]]}}"#
//! );
//!
//! let mut world = World::new("My Data", vec![track.into()]);
//! world.add_feature(Waypoint::new(-121.5, 45.5).with_elevation(30.0));
//!
//! assert_eq!(
//!     world.to_geojson()?["features"][1],
//!     serde_json::json!({
//!         "type": "Feature",
//!         "geometry": {"type": "Point", "coordinates": [-121.5, 45.5, 30]}
//!     })
//! );
//! # Ok::<(), geoworld::error::Error>(())
//! ```
//!
//! ## Modules
//!
//! - [`point`], [`track`], [`waypoint`], [`world`] - The model
//! - [`geojson`] - The `GeoJSON` structures the model serializes into
//! - [`collector`] - Collects geozero features into `geo` geometries
//! - [`error`] - Error types and handling
//! - [`ser`] - Serialization helpers

#![allow(clippy::module_name_repetitions)]

pub mod collector;
pub mod error;
pub mod geojson;
pub mod point;
pub mod ser;
pub mod track;
pub mod waypoint;
pub mod world;

pub use geojson::{Feature, FeatureCollection, Geometry, Position, Properties, ToGeoJson};
pub use point::Point;
pub use track::{Track, TrackSegment};
pub use waypoint::Waypoint;
pub use world::{World, WorldFeature};
