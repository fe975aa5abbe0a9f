// Copyright (c) 2026 Ken Barker

// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"),
// to deal in the Software without restriction, including without limitation the
// rights to use, copy, modify, merge, publish, distribute, sublicense, and/or
// sell copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:

// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN
// THE SOFTWARE.

// extern crate we're testing, same as any other code would do.
extern crate geospatial;

use angle_sc::is_within_tolerance;
use csv::ReaderBuilder;
use geospatial::{
    projections, to_grid_coordinate, to_position, Angle, CircularSurface, Distance,
    EarthEllipsoid, GridCoordinate, NVector, PolygonalSurface, Position, Stretch, Surface,
    Tolerant, Vector,
};
use std::path::Path;

/// Read the reference stretches: their ends, distances and bearings.
fn read_stretches() -> Vec<(String, Stretch, Distance, Angle, Angle, Angle)> {
    let file_path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/data/stretches.csv");
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .from_path(file_path)
        .expect("Could not read file: stretches.csv");

    let mut stretches = Vec::new();
    for result in csv_reader.records() {
        let record = result.unwrap();
        let value = |i: usize| record[i].parse::<f64>().unwrap();

        let from = Position::from_degrees(value(2), value(3)).unwrap();
        let to = Position::from_degrees(value(4), value(5)).unwrap();
        stretches.push((
            format!("{} to {}", &record[0], &record[1]),
            Stretch::between(from, to),
            Distance::from_meters(value(6)).unwrap(),
            Angle::from_degrees(value(7)).unwrap(),
            Angle::from_degrees(value(8)).unwrap(),
            Angle::from_degrees(value(9)).unwrap(),
        ));
    }
    stretches
}

#[test]
fn test_reference_stretches() {
    let stretches = read_stretches();
    assert_eq!(10, stretches.len());

    for (name, stretch, distance, direction, initial_bearing, final_bearing) in stretches {
        assert!(
            stretch.distance().eq_within(&distance, 2e-3),
            "{name}: distance {}",
            stretch.distance()
        );
        assert_eq!(direction, stretch.direction(), "{name}: direction");
        assert_eq!(initial_bearing, stretch.initial_bearing(), "{name}: initial");
        assert_eq!(final_bearing, stretch.final_bearing(), "{name}: final");

        let inverse = stretch.inverse();
        assert_eq!(stretch.distance(), inverse.distance(), "{name}: inverse");
        assert_eq!(
            stretch.final_bearing().reverse(),
            inverse.initial_bearing(),
            "{name}: inverse initial"
        );
        assert_eq!(stretch.direction().reverse(), inverse.direction());
    }
}

#[test]
fn test_reference_destinations() {
    for (name, stretch, distance, _, initial_bearing, _) in read_stretches() {
        let destination = stretch.from().destination(initial_bearing, distance);
        assert_eq!(stretch.to(), destination, "{name}: destination");

        let along = Stretch::along(stretch.from(), &Vector::new(initial_bearing, distance));
        assert_eq!(stretch, along, "{name}: along");

        assert!(stretch.cross_track_distance(&stretch.to()).is_zero());
        assert!(stretch.is_on_track(&stretch.from(), Distance::ZERO));
    }
}

#[test]
fn test_cross_track_and_on_track() {
    let hovik = Position::from_degrees(58.033785, 11.744987).unwrap();
    let hoviksnas = Position::from_degrees(58.033157, 11.754460).unwrap();
    let stretch = Stretch::between(hovik, hoviksnas);

    let at = Position::from_degrees(58.033668, 11.743887).unwrap();
    assert!(is_within_tolerance(
        20.9499,
        stretch.cross_track_distance(&at).meters(),
        1e-3
    ));
    assert!(is_within_tolerance(
        62.639,
        stretch.on_track_distance(&at).meters(),
        1e-2
    ));
    assert!(!stretch.is_on_track(&at, Distance::from_meters(20.0).unwrap()));
    assert!(!stretch.is_between_ends(&at));

    let between = Position::from_degrees(58.033296, 11.750197).unwrap();
    assert!(between.is_between(&hovik, &hoviksnas));
    assert!(is_within_tolerance(
        173.471108,
        stretch.min_angle(&between).degrees().unwrap(),
        1e-5
    ));
}

#[test]
fn test_degenerate_stretch() {
    let hovik = Position::from_degrees(58.033785, 11.744987).unwrap();
    let stretch = Stretch::between(hovik, hovik);
    assert!(stretch.is_zero());
    assert_eq!(Distance::ZERO, stretch.distance());
    assert!(stretch.direction().is_undefined());
    assert!(stretch.initial_bearing().is_undefined());
    assert!(stretch.final_bearing().is_undefined());
    assert_eq!(stretch, stretch.inverse());
    assert_eq!(
        Distance::ZERO,
        stretch.cross_track_distance(&Position::ORIGO)
    );
}

#[test]
fn test_surfaces() {
    let centre = Position::from_degrees(58.071740, 11.823197).unwrap();
    let circle = CircularSurface::new(centre, Distance::from_meters(100.0).unwrap());
    let polygon = PolygonalSurface::new(
        [
            Position::from_degrees(58.072363, 11.823334).unwrap(),
            Position::from_degrees(58.072232, 11.823686).unwrap(),
            Position::from_degrees(58.071205, 11.822731).unwrap(),
            Position::from_degrees(58.071406, 11.822586).unwrap(),
            Position::from_degrees(58.072166, 11.823358).unwrap(),
            Position::from_degrees(58.072265, 11.823224).unwrap(),
        ],
        centre,
    );

    let surfaces: Vec<Box<dyn Surface>> = vec![Box::new(circle), Box::new(polygon)];
    let inside = Position::from_degrees(58.071851, 11.823159).unwrap();
    let outside = Position::from_degrees(58.073851, 11.823159).unwrap();
    for surface in &surfaces {
        assert_eq!(centre, surface.reference_position());
        assert!(inside.is_within(surface.as_ref()));
        assert!(!outside.is_within(surface.as_ref()));
    }
}

#[test]
fn test_grid_round_trips() {
    let rt90 = GridCoordinate::new(6_728_429.0, 1_572_570.0);
    let position = to_position(&rt90, &projections::RT90).unwrap();
    assert!(is_within_tolerance(
        60.666_450_715_376,
        position.latitude().degrees(),
        1e-9
    ));
    assert!(is_within_tolerance(
        17.132_487_391_944_2,
        position.longitude().degrees(),
        1e-9
    ));
    assert_eq!(rt90, to_grid_coordinate(&position, &projections::RT90));

    // the same Position on SWEREF 99 TM and back
    let sweref = to_grid_coordinate(&position, &projections::SWEREF99TM);
    let result = to_position(&sweref, &projections::SWEREF99TM).unwrap();
    assert_eq!(position, result);
}

#[test]
fn test_nvector_displacement() {
    let wgs84 = EarthEllipsoid::WGS84;
    let hovik = NVector::from(Position::from_degrees(58.033785, 11.744987).unwrap());
    let hoviksnas = NVector::from(Position::from_degrees(58.033157, 11.754460).unwrap());

    let displacement = hovik.to(&hoviksnas, &wgs84);
    let stretch = Stretch::between(
        hovik.to_position().unwrap(),
        hoviksnas.to_position().unwrap(),
    );

    // the chord on the ellipsoid is within 0.5% of the arc on the sphere
    assert!(is_within_tolerance(
        stretch.distance().meters(),
        displacement.norm(),
        3.0
    ));
}
