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

//! geospatial
//!
//! A library of geodesy value types and the calculations that combine them
//! to answer navigation and coordinate transformation questions on a
//! spherical or ellipsoidal model of the Earth.
//!
//! ## Values
//!
//! The scalar types: `Angle`, `Distance`, `Latitude`, `Longitude` and
//! `Speed` can only be constructed with valid values, their `from_*`
//! factories return a `RangeError` otherwise.
//! They are compared within a tolerance, see the [`Tolerant`] trait, since
//! positions calculated by different routes are seldom exactly equal.
//!
//! An `Angle` may be *undefined*, e.g. the bearing between a `Position`
//! and itself. An undefined `Angle` propagates through arithmetic and is
//! never represented by a `NaN`.
//!
//! ## Stretches
//!
//! A `Stretch` is the great circle arc between a pair of positions on a
//! sphere with the Earth's mean radius. It calculates:
//!
//! - the length of the stretch and its initial, final and rhumb line bearings;
//! - the cross track and on track distances of a `Position` from the stretch;
//! - whether a `Position` is on track and between the ends of the stretch.
//!
//! The length is measured by a `DistanceCalculator`, the haversine formula
//! by default.
//!
//! ## Surfaces
//!
//! The `Surface` trait represents an area of the Earth's surface that a
//! `Position` may be within: a `CircularSurface` or a `PolygonalSurface`.
//!
//! ## Ellipsoidal transformations
//!
//! An `NVector` converts a `Position` on an `EarthEllipsoid` to and from
//! earth centred cartesian coordinates, see the [`nvector`] module.
//!
//! A Gauss-Krüger `MapProjection` converts a `Position` to and from a
//! `GridCoordinate`, see the [`transformation`] module.
//! The national Swedish grids and the UTM zones that cover Sweden are
//! defined in [`projections`].
//!
//! The library depends upon the following crates:
//!
//! - [angle-sc](https://crates.io/crates/angle-sc) - for `Degrees` and
//!   `Radians` and accurate trigonometric calculations;
//! - [unit-sphere](https://crates.io/crates/unit-sphere) - to convert
//!   positions to and from `LatLong`;
//! - [icao_units](https://crates.io/crates/icao-units) - to define `Metres` and
//!   `NauticalMiles` and perform conversions between them.
//!
//! The library is declared [no_std](https://docs.rust-embedded.org/book/intro/no-std.html)
//! so it can be used in embedded applications.

#![cfg_attr(not(test), no_std)]

extern crate alloc;
extern crate angle_sc;
extern crate icao_units;
extern crate unit_sphere;

pub mod angle;
pub mod calculator;
pub mod distance;
pub mod ellipsoid;
pub mod error;
pub mod latitude;
pub mod longitude;
pub mod nvector;
pub mod position;
pub mod speed;
pub mod stretch;
pub mod surfaces;
pub mod tolerance;
pub mod transformation;
pub mod vector;

pub use angle::Angle;
pub use angle_sc::{Degrees, Radians, Validate};
pub use calculator::{haversine_distance, DistanceCalculator, HaversineCalculator};
pub use distance::Distance;
pub use ellipsoid::EarthEllipsoid;
pub use error::RangeError;
pub use icao_units::non_si::NauticalMiles;
pub use icao_units::si::Metres;
pub use latitude::Latitude;
pub use longitude::Longitude;
pub use nvector::NVector;
pub use position::Position;
pub use speed::Speed;
pub use stretch::Stretch;
pub use surfaces::{CircularSurface, PolygonalSurface, Surface};
pub use tolerance::Tolerant;
pub use transformation::gauss_krueger::{to_grid_coordinate, to_position};
pub use transformation::{projections, GridCoordinate, MapProjection};
pub use unit_sphere::LatLong;
pub use vector::Vector;

/// The mean radius of the Earth, the radius of the sphere used by
/// `Position` and `Stretch` calculations.
pub const EARTH_MEAN_RADIUS: Metres = Metres(6_371_009.0);
