use geozero::{error::Result as GeozeroResult, CoordDimensions, GeomProcessor, GeozeroGeometry};

use crate::{
    geojson::{Feature, Geometry, Position, Properties, ToGeoJson},
    point::Point,
};

/// An ordered run of points. The order defines the line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrackSegment {
    points: Vec<Point>,
}

impl TrackSegment {
    #[must_use]
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[must_use]
    pub fn to_coordinates(&self) -> Vec<Position> {
        self.points.iter().map(Point::to_array).collect()
    }
}

impl From<&TrackSegment> for geo::LineString {
    fn from(segment: &TrackSegment) -> Self {
        segment.points.iter().map(geo::Coord::from).collect()
    }
}

/// A named or anonymous collection of track segments.
///
/// Serializes to a `Feature` with a `MultiLineString` geometry. Unlike a
/// [`Waypoint`](crate::waypoint::Waypoint), a track always writes a `properties` object,
/// which is empty when the track has no name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Track {
    name: Option<String>,
    segments: Vec<TrackSegment>,
}

impl Track {
    #[must_use]
    pub fn new<I>(segments: I) -> Self
    where
        I: IntoIterator<Item = Vec<Point>>,
    {
        Self {
            name: None,
            segments: segments.into_iter().map(TrackSegment::new).collect(),
        }
    }

    #[must_use]
    pub fn named<I, S>(segments: I, name: S) -> Self
    where
        I: IntoIterator<Item = Vec<Point>>,
        S: Into<String>,
    {
        Self {
            name: Some(name.into()),
            ..Self::new(segments)
        }
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    #[must_use]
    pub fn segments(&self) -> &[TrackSegment] {
        &self.segments
    }

    fn has_elevation(&self) -> bool {
        self.segments
            .iter()
            .flat_map(TrackSegment::points)
            .any(|point| point.elevation().is_some())
    }
}

impl ToGeoJson for Track {
    fn to_feature(&self) -> Feature {
        Feature {
            properties: Some(Properties {
                title: self.name.clone(),
                icon: None,
            }),
            geometry: Geometry::MultiLineString {
                coordinates: self
                    .segments
                    .iter()
                    .map(TrackSegment::to_coordinates)
                    .collect(),
            },
        }
    }
}

impl GeozeroGeometry for Track {
    fn process_geom<P: GeomProcessor>(&self, processor: &mut P) -> GeozeroResult<()> {
        processor.multilinestring_begin(self.segments.len(), 0)?;
        for (idx, segment) in self.segments.iter().enumerate() {
            processor.linestring_begin(false, segment.len(), idx)?;
            for (point_idx, point) in segment.points.iter().enumerate() {
                point.process_coordinate(processor, point_idx)?;
            }
            processor.linestring_end(false, idx)?;
        }
        processor.multilinestring_end(0)
    }

    fn dims(&self) -> CoordDimensions {
        if self.has_elevation() {
            CoordDimensions::xyz()
        } else {
            CoordDimensions::xy()
        }
    }
}

impl From<&Track> for geo::MultiLineString {
    fn from(track: &Track) -> Self {
        geo::MultiLineString::new(track.segments.iter().map(geo::LineString::from).collect())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::Result;
    use serde_json::json;

    fn track_one() -> Track {
        Track::named(
            vec![vec![
                Point::new(-122.0, 45.0),
                Point::new(-122.0, 46.0),
                Point::new(-121.0, 46.0),
            ]],
            "track 1",
        )
    }

    #[test]
    fn test_segment_keeps_order() {
        let segment = TrackSegment::new(vec![
            Point::new(3.0, 0.0),
            Point::with_elevation(1.0, 0.0, 5.0),
            Point::new(2.0, 0.0),
        ]);

        let coordinates = segment.to_coordinates();
        assert_eq!(coordinates.len(), segment.len());
        assert_eq!(
            coordinates,
            vec![vec![3.0, 0.0], vec![1.0, 0.0, 5.0], vec![2.0, 0.0]]
        );
    }

    #[test]
    fn test_empty_segment() {
        let segment = TrackSegment::default();

        assert!(segment.is_empty());
        assert!(segment.to_coordinates().is_empty());
    }

    #[test]
    fn test_named_track() -> Result<()> {
        assert_eq!(
            track_one().to_geojson()?,
            json!({
                "type": "Feature",
                "properties": {"title": "track 1"},
                "geometry": {
                    "type": "MultiLineString",
                    "coordinates": [[[-122, 45], [-122, 46], [-121, 46]]]
                }
            })
        );
        Ok(())
    }

    #[test]
    fn test_named_track_text() -> Result<()> {
        assert_eq!(
            track_one().to_geojson_string()?,
            r#"{"type":"Feature","properties":{"title":"track 1"},"geometry":{"type":"MultiLineString","coordinates":[[[-122,45],[-122,46],[-121,46]]]}}"#
        );
        Ok(())
    }

    #[test]
    fn test_named_track_parsed_text() -> Result<()> {
        let expected: serde_json::Value = serde_json::from_str(
            r#"{"type":"Feature","properties":{"title":"track 1"},"geometry":{"type":"MultiLineString","coordinates":[[[-122,45],[-122,46],[-121,46]]]}}"#,
        )?;

        assert_eq!(track_one().to_geojson()?, expected);
        Ok(())
    }

    #[test]
    fn test_unnamed_track_has_empty_properties() -> Result<()> {
        let track = Track::new(vec![vec![Point::new(-121.0, 45.5), Point::new(-122.0, 45.5)]]);
        let value = track.to_geojson()?;

        assert_eq!(track.name(), None);
        assert_eq!(value["properties"], json!({}));
        Ok(())
    }

    #[test]
    fn test_segments_in_order() -> Result<()> {
        let track = Track::new(vec![
            vec![Point::new(-122.0, 45.0)],
            vec![],
            vec![Point::new(-121.0, 45.0), Point::new(-121.0, 46.0)],
        ]);

        assert_eq!(track.segments().len(), 3);
        assert_eq!(
            track.to_geojson()?["geometry"]["coordinates"],
            json!([[[-122, 45]], [], [[-121, 45], [-121, 46]]])
        );
        Ok(())
    }

    #[test]
    fn test_dims() {
        assert!(!track_one().dims().z);

        let track = Track::new(vec![vec![
            Point::new(0.0, 0.0),
            Point::with_elevation(1.0, 1.0, 3.0),
        ]]);
        assert!(track.dims().z);
    }

    #[test]
    fn test_to_multilinestring() {
        let lines = geo::MultiLineString::from(&track_one());

        assert_eq!(
            lines,
            geo::MultiLineString::new(vec![geo::LineString::from(vec![
                (-122.0, 45.0),
                (-122.0, 46.0),
                (-121.0, 46.0),
            ])])
        );
    }
}
