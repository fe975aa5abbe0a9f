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

//! The stretch module contains the `Stretch` type: the relationship between
//! a pair of positions.
//!
//! A `Stretch` calculates its distance, rhumb line direction and great
//! circle initial and final bearings when it is constructed.
//! A degenerate `Stretch`, i.e. one whose ends are equal, has a zero
//! distance and `UNDEFINED` directions.
//!
//! The spherical formulae are from Chris Veness' "Latitude/longitude
//! spherical geodesy tools" (MIT licence), using the Earth's mean radius,
//! see: <https://www.movable-type.co.uk/scripts/latlong.html>

#![allow(clippy::suboptimal_flops)]

use crate::angle::{Angle, DEGREES_PER_RADIAN};
use crate::calculator::{DistanceCalculator, HaversineCalculator};
use crate::distance::Distance;
use crate::position::Position;
use crate::vector::Vector;
use crate::EARTH_MEAN_RADIUS;
use angle_sc::Radians;
use core::f64::consts::FRAC_PI_4;
use core::fmt;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The great circle initial bearing from one position to another.
fn initial_bearing(from: &Position, to: &Position) -> Angle {
    let (phi1, lambda1) = from.radians();
    let (phi2, lambda2) = to.radians();
    let delta_lambda = lambda2 - lambda1;
    let y = libm::sin(delta_lambda) * libm::cos(phi2);
    let x = libm::cos(phi1) * libm::sin(phi2)
        - libm::sin(phi1) * libm::cos(phi2) * libm::cos(delta_lambda);
    let bearing = Radians::from(angle_sc::Angle::from_y_x(y, x));
    Angle::normalised(bearing.0 * DEGREES_PER_RADIAN)
}

/// The constant rhumb line direction from one position to another.
fn rhumb_bearing(from: &Position, to: &Position) -> Angle {
    let (phi1, lambda1) = from.radians();
    let (phi2, lambda2) = to.radians();
    let delta_psi =
        libm::log(libm::tan(phi2 / 2.0 + FRAC_PI_4) / libm::tan(phi1 / 2.0 + FRAC_PI_4));
    Angle::normalised(libm::atan2(lambda2 - lambda1, delta_psi) * DEGREES_PER_RADIAN)
}

/// The stretch between a pair of positions.
///
/// The distance is measured by a `DistanceCalculator`, by default the
/// `HaversineCalculator`.
#[derive(Clone, Copy, Debug)]
pub struct Stretch<C = HaversineCalculator> {
    from: Position,
    to: Position,
    calculator: C,
    distance: Distance,
    direction: Angle,
    initial_bearing: Angle,
    final_bearing: Angle,
}

impl Stretch<HaversineCalculator> {
    /// Construct a `Stretch` between a pair of positions.
    /// * `from` - the start `Position`.
    /// * `to` - the end `Position`.
    /// # Examples
    /// ```
    /// use geospatial::{Position, Stretch};
    ///
    /// let stockholm = Position::from_degrees(59.326242, 17.841972).unwrap();
    /// let wellington = Position::from_degrees(-41.2442198, 174.6918153).unwrap();
    /// let stretch = Stretch::between(stockholm, wellington);
    ///
    /// assert!((stretch.distance().kilometers() - 17444.96).abs() < 0.01);
    /// assert!((stretch.initial_bearing().degrees().unwrap() - 48.853).abs() < 0.001);
    /// ```
    #[must_use]
    pub fn between(from: Position, to: Position) -> Self {
        Self::with_calculator(from, to, HaversineCalculator)
    }

    /// Construct a `Stretch` from a `Position` along a `Vector`.
    #[must_use]
    pub fn along(from: Position, vector: &Vector) -> Self {
        Self::between(from, from.destination_along(vector))
    }
}

impl<C: DistanceCalculator> Stretch<C> {
    /// Construct a `Stretch` between a pair of positions, measuring its
    /// distance with the given calculator.
    /// * `from` - the start `Position`.
    /// * `to` - the end `Position`.
    /// * `calculator` - the distance calculator.
    #[must_use]
    pub fn with_calculator(from: Position, to: Position, calculator: C) -> Self {
        if from == to {
            log::trace!("degenerate stretch at {from}");
            Self {
                from,
                to,
                calculator,
                distance: Distance::ZERO,
                direction: Angle::UNDEFINED,
                initial_bearing: Angle::UNDEFINED,
                final_bearing: Angle::UNDEFINED,
            }
        } else {
            let distance = calculator.distance(&from, &to);
            Self {
                from,
                to,
                calculator,
                distance,
                direction: rhumb_bearing(&from, &to),
                initial_bearing: initial_bearing(&from, &to),
                final_bearing: initial_bearing(&to, &from).reverse(),
            }
        }
    }

    /// The start `Position`.
    #[must_use]
    pub const fn from(&self) -> Position {
        self.from
    }

    /// The end `Position`.
    #[must_use]
    pub const fn to(&self) -> Position {
        self.to
    }

    /// The `DistanceCalculator` used by the `Stretch`.
    #[must_use]
    pub const fn calculator(&self) -> &C {
        &self.calculator
    }

    /// Whether the ends of the `Stretch` are equal.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.from == self.to
    }

    /// The distance between the ends, measured by the `Stretch`'s calculator.
    #[must_use]
    pub const fn distance(&self) -> Distance {
        self.distance
    }

    /// The rhumb line direction.
    #[must_use]
    pub const fn direction(&self) -> Angle {
        self.direction
    }

    /// The great circle bearing at the start.
    #[must_use]
    pub const fn initial_bearing(&self) -> Angle {
        self.initial_bearing
    }

    /// The great circle bearing at the end.
    #[must_use]
    pub const fn final_bearing(&self) -> Angle {
        self.final_bearing
    }

    /// The `Stretch` in the opposite direction.
    #[must_use]
    pub fn inverse(&self) -> Self
    where
        C: Clone,
    {
        if self.is_zero() {
            self.clone()
        } else {
            Self::with_calculator(self.to, self.from, self.calculator.clone())
        }
    }

    /// Whether the ends of the `Stretch` are at the same latitude.
    #[must_use]
    pub fn is_east_west_line(&self) -> bool {
        !self.is_zero() && self.from.latitude() == self.to.latitude()
    }

    /// Measure the distance between the ends with another calculator.
    #[must_use]
    pub fn distance_using<D: DistanceCalculator + ?Sized>(&self, calculator: &D) -> Distance {
        calculator.distance(&self.from, &self.to)
    }

    /// Whether a `Position` is within a cross track distance of the great
    /// circle through the ends of the `Stretch`.
    /// * `at` - the `Position`.
    /// * `max_off_track` - the maximum cross track distance.
    #[must_use]
    pub fn is_on_track(&self, at: &Position, max_off_track: Distance) -> bool {
        self.cross_track_distance(at) <= max_off_track
    }

    /// Whether a `Position` is between the ends of the `Stretch`, regardless
    /// of its cross track distance.
    #[must_use]
    pub fn is_between_ends(&self, at: &Position) -> bool {
        at.is_between(&self.from, &self.to)
    }

    /// The smaller angle between the rhumb line directions from a `Position`
    /// to the ends of the `Stretch`.
    /// * `at` - the `Position`.
    ///
    /// returns `UNDEFINED` if `at` is at either end.
    #[must_use]
    pub fn min_angle(&self, at: &Position) -> Angle {
        let theta1 = Stretch::between(*at, self.from).direction();
        let theta2 = Stretch::between(*at, self.to).direction();
        theta1.min(theta2)
    }

    /// The distance of a `Position` from the great circle through the ends of
    /// the `Stretch`, sometimes called the cross track error.
    /// * `at` - the `Position`.
    ///
    /// returns zero for a degenerate `Stretch`.
    #[must_use]
    pub fn cross_track_distance(&self, at: &Position) -> Distance {
        let s = Stretch::between(self.from, *at);
        match (s.initial_bearing.radians(), self.initial_bearing.radians()) {
            (Some(theta13), Some(theta12)) => {
                let delta13 = s.distance.meters() / EARTH_MEAN_RADIUS.0;
                let sin_dxt = (libm::sin(delta13) * libm::sin(theta13 - theta12)).clamp(-1.0, 1.0);
                Distance::from_meters_unchecked(libm::fabs(
                    libm::asin(sin_dxt) * EARTH_MEAN_RADIUS.0,
                ))
            }
            _ => Distance::ZERO,
        }
    }

    /// The along track distance from the start of the `Stretch` to the
    /// closest point on its great circle to a `Position`.
    /// * `at` - the `Position`.
    ///
    /// returns zero for a degenerate `Stretch`.
    #[must_use]
    pub fn on_track_distance(&self, at: &Position) -> Distance {
        if self.is_zero() {
            return Distance::ZERO;
        }

        let r = EARTH_MEAN_RADIUS.0 / 1000.0;
        let delta13 = Stretch::between(self.from, *at).distance().kilometers();
        let delta_xt = self.cross_track_distance(at).kilometers();
        let ratio = (libm::cos(delta13 / r) / libm::cos(delta_xt / r)).clamp(-1.0, 1.0);
        Distance::from_meters_unchecked(libm::fabs(libm::acos(ratio) * r) * 1000.0)
    }
}

impl<C> PartialEq for Stretch<C> {
    /// Stretches are equal if their ends are equal.
    fn eq(&self, other: &Self) -> bool {
        self.from == other.from && self.to == other.to
    }
}

#[derive(Serialize, Deserialize)]
struct StretchEnds {
    from: Position,
    to: Position,
}

impl<C> Serialize for Stretch<C> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        StretchEnds {
            from: self.from,
            to: self.to,
        }
        .serialize(serializer)
    }
}

impl<'de, C: DistanceCalculator + Default> Deserialize<'de> for Stretch<C> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let ends = StretchEnds::deserialize(deserializer)?;
        Ok(Self::with_calculator(ends.from, ends.to, C::default()))
    }
}

impl<C> fmt::Display for Stretch<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "From {} to {}", self.from, self.to)
    }
}
