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

//! The nvector module contains the `NVector` type: a vector normal to the
//! surface of an `EarthEllipsoid`, with a depth below the surface.
//!
//! N-vectors avoid the singularities of latitude and longitude at the poles,
//! see Kenneth Gade: [A Non-singular Horizontal Position Representation](https://www.navlab.net/Publications/A_Nonsingular_Horizontal_Position_Representation.pdf).
//!
//! The conversion from cartesian coordinates uses the exact closed form
//! solution from Hugues Vermeille: "Direct transformation from geocentric
//! coordinates to geodetic coordinates", Journal of Geodesy, 2002.

#![allow(clippy::suboptimal_flops)]

pub mod matrix;

use crate::angle::DEGREES_PER_RADIAN;
use crate::ellipsoid::EarthEllipsoid;
use crate::error::RangeError;
use crate::position::Position;
use matrix::EARTH_AXIS;
use serde::{Deserialize, Serialize};

/// A three dimensional vector with a depth.
///
/// When it represents a `Position` it is a unit vector in the frame with
/// the z axis through the North pole and the x axis through the
/// intersection of the Equator and the prime meridian.
/// When it represents cartesian coordinates its components are in metres.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NVector {
    x: f64,
    y: f64,
    z: f64,
    depth: f64,
}

impl NVector {
    /// Construct an `NVector` on the surface from its components.
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self::with_depth(x, y, z, 0.0)
    }

    /// Construct an `NVector`.
    /// * `x`, `y`, `z` - the components.
    /// * `depth` - the depth below the surface of the ellipsoid in metres,
    ///   negative values are above it.
    #[must_use]
    pub const fn with_depth(x: f64, y: f64, z: f64, depth: f64) -> Self {
        Self { x, y, z, depth }
    }

    const fn from_values(values: [f64; 3], depth: f64) -> Self {
        Self::with_depth(values[0], values[1], values[2], depth)
    }

    /// The x component.
    #[must_use]
    pub const fn x(&self) -> f64 {
        self.x
    }

    /// The y component.
    #[must_use]
    pub const fn y(&self) -> f64 {
        self.y
    }

    /// The z component.
    #[must_use]
    pub const fn z(&self) -> f64 {
        self.z
    }

    /// The depth below the surface, in metres.
    #[must_use]
    pub const fn depth(&self) -> f64 {
        self.depth
    }

    /// The components as an array.
    #[must_use]
    pub const fn values(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// The Euclidean length of the vector.
    #[must_use]
    pub fn norm(&self) -> f64 {
        libm::sqrt(self.x * self.x + self.y * self.y + self.z * self.z)
    }

    /// The vector scaled to unit length, with the same depth.
    /// A zero vector is returned unchanged.
    #[must_use]
    pub fn unit(&self) -> Self {
        let norm = self.norm();
        if norm > 0.0 {
            Self::from_values(self.values().map(|v| v / norm), self.depth)
        } else {
            *self
        }
    }

    /// Convert a normal vector to a `Position`.
    /// # Errors
    /// `RangeError::Latitude` or `RangeError::Longitude` if the vector's
    /// components are not finite.
    /// # Examples
    /// ```
    /// use geospatial::{NVector, Position};
    ///
    /// let hovik = Position::from_degrees(58.033785, 11.744987).unwrap();
    /// let position = NVector::from(hovik).to_position().unwrap();
    /// assert!((position.latitude().degrees() - 58.033785).abs() < 1e-9);
    /// assert!((position.longitude().degrees() - 11.744987).abs() < 1e-9);
    /// ```
    pub fn to_position(&self) -> Result<Position, RangeError> {
        let [cx, cy, cz] = EARTH_AXIS.multiply(&self.values());
        let longitude = libm::atan2(cy, -cz) * DEGREES_PER_RADIAN;
        let equatorial = libm::sqrt(cy * cy + cz * cz);
        let latitude = libm::atan2(cx, equatorial) * DEGREES_PER_RADIAN;
        Position::from_degrees(latitude.clamp(-90.0, 90.0), longitude.clamp(-180.0, 180.0))
    }

    /// Convert a normal vector and its depth to cartesian coordinates.
    /// * `ellipsoid` - the `EarthEllipsoid`.
    ///
    /// returns the earth centred coordinates in metres, with zero depth.
    #[must_use]
    pub fn to_cartesian_vector(&self, ellipsoid: &EarthEllipsoid) -> Self {
        let b = ellipsoid.semi_minor_axis().0;
        let f = ellipsoid.flattening();

        let body = Self::from_values(EARTH_AXIS.multiply(&self.values()), 0.0).unit();
        let one_minus_f_sq = (1.0 - f) * (1.0 - f);
        let denominator = libm::sqrt(
            body.x * body.x + body.y * body.y / one_minus_f_sq + body.z * body.z / one_minus_f_sq,
        );
        let scale = b / denominator;
        let origin = [
            scale * body.x,
            scale * body.y / one_minus_f_sq,
            scale * body.z / one_minus_f_sq,
        ];

        let surface = [
            origin[0] - body.x * self.depth,
            origin[1] - body.y * self.depth,
            origin[2] - body.z * self.depth,
        ];
        Self::from_values(EARTH_AXIS.transposed().multiply(&surface), 0.0)
    }

    /// Convert cartesian coordinates to a normal vector and depth.
    /// * `ellipsoid` - the `EarthEllipsoid`.
    ///
    /// returns the unit normal vector with the depth below the ellipsoid.
    #[allow(clippy::many_single_char_names, clippy::similar_names)]
    #[must_use]
    pub fn from_cartesian_vector(&self, ellipsoid: &EarthEllipsoid) -> Self {
        let a = ellipsoid.semi_major_axis().0;
        let f = ellipsoid.flattening();
        let [cx, cy, cz] = EARTH_AXIS.multiply(&self.values());

        let e2 = 2.0 * f - f * f;
        let e4 = e2 * e2;
        let r2 = cy * cy + cz * cz;
        let r = libm::sqrt(r2);
        let p = r2 / (a * a);
        let q = (1.0 - e2) / (a * a) * cx * cx;
        let r_ = (p + q - e4) / 6.0;
        let s = e4 * p * q / (4.0 * r_ * r_ * r_);
        let t = libm::cbrt(1.0 + s + libm::sqrt(s * (2.0 + s)));
        let u = r_ * (1.0 + t + 1.0 / t);
        let v = libm::sqrt(u * u + e4 * q);
        let w = e2 * (u + v - q) / (2.0 * v);
        let k = libm::sqrt(u + v + w * w) - w;
        let d = k * r / (k + e2);

        let hypotenuse = libm::sqrt(d * d + cx * cx);
        let height = (k + e2 - 1.0) / k * hypotenuse;
        let temp = 1.0 / hypotenuse;
        let ratio = k / (k + e2);
        let normal = [temp * cx, temp * ratio * cy, temp * ratio * cz];

        Self::from_values(EARTH_AXIS.transposed().multiply(&normal), -height)
    }

    /// The cartesian displacement from this normal vector to another.
    /// * `end` - the normal vector at the end.
    /// * `ellipsoid` - the `EarthEllipsoid`.
    ///
    /// returns the difference between the cartesian vectors in metres.
    #[must_use]
    pub fn to(&self, end: &Self, ellipsoid: &EarthEllipsoid) -> Self {
        let start = self.to_cartesian_vector(ellipsoid);
        let end = end.to_cartesian_vector(ellipsoid);
        Self::new(end.x - start.x, end.y - start.y, end.z - start.z)
    }
}

impl From<Position> for NVector {
    /// The unit normal vector of a `Position`, at zero depth.
    fn from(position: Position) -> Self {
        let (phi, lambda) = position.radians();
        let (sin_phi, cos_phi) = (libm::sin(phi), libm::cos(phi));
        let values = [
            sin_phi,
            libm::sin(lambda) * cos_phi,
            -libm::cos(lambda) * cos_phi,
        ];
        Self::from_values(EARTH_AXIS.transposed().multiply(&values), 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use angle_sc::is_within_tolerance;

    fn hovik() -> Position {
        Position::from_degrees(58.033785, 11.744987).unwrap()
    }

    #[test]
    fn test_from_position() {
        let target = NVector::from(Position::ORIGO);
        assert!(is_within_tolerance(1.0, target.x(), f64::EPSILON));
        assert!(is_within_tolerance(0.0, target.y(), f64::EPSILON));
        assert!(is_within_tolerance(0.0, target.z(), f64::EPSILON));
        assert_eq!(0.0, target.depth());

        let north_pole = NVector::from(Position::from_degrees(90.0, 0.0).unwrap());
        assert!(is_within_tolerance(0.0, north_pole.x(), 1e-15));
        assert!(is_within_tolerance(1.0, north_pole.z(), f64::EPSILON));

        let target = NVector::from(hovik());
        assert!(is_within_tolerance(1.0, target.norm(), 1e-15));
    }

    #[test]
    fn test_to_position() {
        let positions = [
            hovik(),
            Position::from_degrees(-33.5, -70.0).unwrap(),
            Position::from_degrees(45.0, -45.0).unwrap(),
            Position::from_degrees(-90.0, 0.0).unwrap(),
            Position::from_degrees(0.0, 180.0).unwrap(),
        ];
        for position in positions {
            let result = NVector::from(position).to_position().unwrap();
            assert!(is_within_tolerance(
                position.latitude().degrees(),
                result.latitude().degrees(),
                1e-9
            ));
            assert!(is_within_tolerance(
                position.longitude().degrees(),
                result.longitude().degrees(),
                1e-9
            ));
        }

        assert!(NVector::new(f64::NAN, 0.0, 1.0).to_position().is_err());
    }

    #[test]
    fn test_norm_and_unit() {
        let target = NVector::with_depth(3.0, 0.0, 4.0, 10.0);
        assert_eq!(5.0, target.norm());

        let unit = target.unit();
        assert_eq!(NVector::with_depth(0.6, 0.0, 0.8, 10.0), unit);
        assert!(is_within_tolerance(1.0, unit.norm(), f64::EPSILON));

        assert_eq!(NVector::default(), NVector::default().unit());
    }

    #[test]
    fn test_to_cartesian_vector() {
        let wgs84 = EarthEllipsoid::WGS84;

        let origo = NVector::from(Position::ORIGO).to_cartesian_vector(&wgs84);
        assert!(is_within_tolerance(6_378_137.0, origo.x(), 1e-6));
        assert!(is_within_tolerance(0.0, origo.y(), 1e-6));
        assert!(is_within_tolerance(0.0, origo.z(), 1e-6));

        let north_pole =
            NVector::from(Position::from_degrees(90.0, 0.0).unwrap()).to_cartesian_vector(&wgs84);
        assert!(is_within_tolerance(0.0, north_pole.x(), 1e-6));
        assert!(is_within_tolerance(6_356_752.314_2, north_pole.z(), 1e-6));

        let target = NVector::from(hovik()).to_cartesian_vector(&wgs84);
        assert!(is_within_tolerance(3_314_003.622_8, target.x(), 1e-3));
        assert!(is_within_tolerance(689_011.252_5, target.y(), 1e-3));
        assert!(is_within_tolerance(5_387_730.817_8, target.z(), 1e-3));
        assert_eq!(0.0, target.depth());
    }

    #[test]
    fn test_from_cartesian_vector() {
        let wgs84 = EarthEllipsoid::WGS84;
        let expected = NVector::from(hovik());

        let cartesian = expected.to_cartesian_vector(&wgs84);
        let result = cartesian.from_cartesian_vector(&wgs84);
        assert!(is_within_tolerance(expected.x(), result.x(), 1e-12));
        assert!(is_within_tolerance(expected.y(), result.y(), 1e-12));
        assert!(is_within_tolerance(expected.z(), result.z(), 1e-12));
        assert!(is_within_tolerance(0.0, result.depth(), 1e-6));

        let position = result.to_position().unwrap();
        assert!(is_within_tolerance(58.033785, position.latitude().degrees(), 1e-9));
        assert!(is_within_tolerance(11.744987, position.longitude().degrees(), 1e-9));
    }

    #[test]
    fn test_cartesian_vector_with_depth() {
        let wgs84 = EarthEllipsoid::WGS84;
        let above = NVector::from(hovik());
        let above = NVector::with_depth(above.x(), above.y(), above.z(), -100.0);

        let cartesian = above.to_cartesian_vector(&wgs84);
        assert!(is_within_tolerance(3_314_055.456_2, cartesian.x(), 1e-3));
        assert!(is_within_tolerance(689_022.029_1, cartesian.y(), 1e-3));
        assert!(is_within_tolerance(5_387_815.653_8, cartesian.z(), 1e-3));

        let result = cartesian.from_cartesian_vector(&wgs84);
        assert!(is_within_tolerance(-100.0, result.depth(), 1e-6));

        let below = Position::from_degrees(-33.5, -70.0).unwrap();
        let below = NVector::from(below);
        let below = NVector::with_depth(below.x(), below.y(), below.z(), 250.0);
        let result = below.to_cartesian_vector(&wgs84).from_cartesian_vector(&wgs84);
        assert!(is_within_tolerance(250.0, result.depth(), 1e-6));
        let position = result.to_position().unwrap();
        assert!(is_within_tolerance(-33.5, position.latitude().degrees(), 1e-9));
        assert!(is_within_tolerance(-70.0, position.longitude().degrees(), 1e-9));
    }

    #[test]
    fn test_to() {
        let wgs84 = EarthEllipsoid::WGS84;
        let start = NVector::from(Position::ORIGO);
        let end = NVector::from(Position::from_degrees(0.0, 1.0).unwrap());

        let displacement = start.to(&end, &wgs84);
        assert!(is_within_tolerance(-971.421_2, displacement.x(), 1e-3));
        assert!(is_within_tolerance(111_313.839_2, displacement.y(), 1e-3));
        assert!(is_within_tolerance(0.0, displacement.z(), 1e-6));
        assert!(is_within_tolerance(111_318.077_9, displacement.norm(), 1e-3));

        assert_eq!(NVector::default(), start.to(&start, &wgs84));
    }

    #[test]
    fn test_serialization() {
        let target = NVector::with_depth(1.0, 0.0, 0.5, -2.0);
        let serialized = serde_json::to_string(&target).unwrap();
        assert_eq!(r#"{"x":1.0,"y":0.0,"z":0.5,"depth":-2.0}"#, serialized);
        let deserialized: NVector = serde_json::from_str(&serialized).unwrap();
        assert_eq!(target, deserialized);
    }
}
