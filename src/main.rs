use std::io::{self, Write};

use geoworld::{ser, Point, Track, Waypoint, World};
use log::info;

fn sample_world() -> World {
    let home = Waypoint::new(-121.5, 45.5)
        .with_elevation(30.0)
        .with_name("home")
        .with_kind("flag");
    let store = Waypoint::new(-121.5, 45.6)
        .with_name("store")
        .with_kind("dot");

    let ts1 = vec![
        Point::new(-122.0, 45.0),
        Point::new(-122.0, 46.0),
        Point::new(-121.0, 46.0),
    ];
    let ts2 = vec![Point::new(-121.0, 45.0), Point::new(-121.0, 46.0)];
    let ts3 = vec![Point::new(-121.0, 45.5), Point::new(-122.0, 45.5)];

    let t1 = Track::named(vec![ts1, ts2], "track 1");
    let t2 = Track::named(vec![ts3], "track 2");

    World::new(
        "My Data",
        vec![home.into(), store.into(), t1.into(), t2.into()],
    )
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let world = sample_world();
    info!(
        "Writing world '{}' with {} features",
        world.name(),
        world.features().len()
    );

    let mut out = io::stdout().lock();
    ser::to_writer(&mut out, &world.to_feature_collection())?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_sample_output() -> geoworld::error::Result<()> {
        let text = ser::to_string(&sample_world().to_feature_collection())?;
        let value: serde_json::Value = serde_json::from_str(&text)?;

        assert_eq!(
            value,
            json!({
                "type": "FeatureCollection",
                "features": [
                    {
                        "type": "Feature",
                        "geometry": {"type": "Point", "coordinates": [-121.5, 45.5, 30]},
                        "properties": {"title": "home", "icon": "flag"}
                    },
                    {
                        "type": "Feature",
                        "geometry": {"type": "Point", "coordinates": [-121.5, 45.6]},
                        "properties": {"title": "store", "icon": "dot"}
                    },
                    {
                        "type": "Feature",
                        "properties": {"title": "track 1"},
                        "geometry": {
                            "type": "MultiLineString",
                            "coordinates": [
                                [[-122, 45], [-122, 46], [-121, 46]],
                                [[-121, 45], [-121, 46]]
                            ]
                        }
                    },
                    {
                        "type": "Feature",
                        "properties": {"title": "track 2"},
                        "geometry": {
                            "type": "MultiLineString",
                            "coordinates": [[[-121, 45.5], [-122, 45.5]]]
                        }
                    }
                ]
            })
        );
        Ok(())
    }
}
