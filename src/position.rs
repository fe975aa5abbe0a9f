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

//! The position module contains the `Position` type: a point on the surface
//! of the Earth given by its `Latitude` and `Longitude`.
//!
//! The spherical formulae are from Chris Veness' "Latitude/longitude
//! spherical geodesy tools" (MIT licence), using the Earth's mean radius,
//! see: <https://www.movable-type.co.uk/scripts/latlong.html>

#![allow(clippy::suboptimal_flops)]

use crate::angle::{Angle, DEGREES_PER_RADIAN};
use crate::distance::Distance;
use crate::error::RangeError;
use crate::latitude::Latitude;
use crate::longitude::Longitude;
use crate::stretch::Stretch;
use crate::surfaces::Surface;
use crate::vector::Vector;
use crate::EARTH_MEAN_RADIUS;
use angle_sc::Degrees;
use core::fmt;
use serde::{Deserialize, Serialize};
use unit_sphere::LatLong;

/// A geodetic position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    latitude: Latitude,
    longitude: Longitude,
}

impl Position {
    /// The intersection of the Equator and the prime meridian.
    pub const ORIGO: Self = Self {
        latitude: Latitude::ZERO,
        longitude: Longitude::ZERO,
    };

    /// Construct a `Position` from a `Latitude` and a `Longitude`.
    #[must_use]
    pub const fn new(latitude: Latitude, longitude: Longitude) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Construct a `Position` from a latitude and longitude in degrees.
    /// # Errors
    /// `RangeError::Latitude` or `RangeError::Longitude` if either value is
    /// out of range.
    /// # Examples
    /// ```
    /// use geospatial::Position;
    ///
    /// let hovik = Position::from_degrees(58.033785, 11.744987).unwrap();
    /// assert_eq!("58.033785,11.744987", hovik.to_string());
    /// assert!(Position::from_degrees(91.0, 0.0).is_err());
    /// ```
    pub fn from_degrees(latitude: f64, longitude: f64) -> Result<Self, RangeError> {
        Ok(Self::new(
            Latitude::from_degrees(latitude)?,
            Longitude::from_degrees(longitude)?,
        ))
    }

    /// Construct a `Position` from a latitude and longitude in radians.
    /// # Errors
    /// `RangeError::Latitude` or `RangeError::Longitude` if either value is
    /// out of range.
    pub fn from_radians(latitude: f64, longitude: f64) -> Result<Self, RangeError> {
        Ok(Self::new(
            Latitude::from_radians(latitude)?,
            Longitude::from_radians(longitude)?,
        ))
    }

    /// The `Latitude` of the `Position`.
    #[must_use]
    pub const fn latitude(&self) -> Latitude {
        self.latitude
    }

    /// The `Longitude` of the `Position`.
    #[must_use]
    pub const fn longitude(&self) -> Longitude {
        self.longitude
    }

    /// The latitude and longitude in radians.
    #[must_use]
    pub fn radians(&self) -> (f64, f64) {
        (self.latitude.radians(), self.longitude.radians())
    }

    /// Whether the `Position` is at latitude and longitude zero, within tolerance.
    #[must_use]
    pub fn is_origo(&self) -> bool {
        self.latitude.is_zero() && self.longitude.is_zero()
    }

    /// Calculate the destination travelling along a great circle from this
    /// `Position`.
    /// * `bearing` - the initial bearing.
    /// * `distance` - the distance to travel.
    ///
    /// returns the destination `Position`, with its longitude in the range
    /// -180° <= longitude < 180°, or this `Position` if the bearing is
    /// undefined.
    #[must_use]
    pub fn destination(&self, bearing: Angle, distance: Distance) -> Self {
        let Some(theta) = bearing.radians() else {
            log::trace!("destination from {self} with an undefined bearing");
            return *self;
        };

        let (phi1, lambda1) = self.radians();
        let delta = distance.meters() / EARTH_MEAN_RADIUS.0;
        let (sin_phi1, cos_phi1) = (libm::sin(phi1), libm::cos(phi1));
        let (sin_delta, cos_delta) = (libm::sin(delta), libm::cos(delta));

        let sin_phi2 = (sin_phi1 * cos_delta + cos_phi1 * sin_delta * libm::cos(theta))
            .clamp(-1.0, 1.0);
        let phi2 = libm::asin(sin_phi2);
        let lambda2 = lambda1
            + libm::atan2(
                libm::sin(theta) * sin_delta * cos_phi1,
                cos_delta - sin_phi1 * sin_phi2,
            );

        let latitude = (phi2 * DEGREES_PER_RADIAN).clamp(-90.0, 90.0);
        let longitude = (lambda2 * DEGREES_PER_RADIAN + 540.0) % 360.0 - 180.0;
        Self::new(
            Latitude::from_degrees_unchecked(latitude),
            Longitude::from_degrees_unchecked(longitude),
        )
    }

    /// Calculate the destination travelling along a `Vector` from this
    /// `Position`.
    #[must_use]
    pub fn destination_along(&self, vector: &Vector) -> Self {
        self.destination(vector.direction(), vector.distance())
    }

    /// Whether this `Position` lies strictly between two positions.
    ///
    /// The rhumb directions from `before` and from `after` to this position
    /// must both deviate from the direction of the stretch between them by an
    /// acute angle. A `Position` at either end is not between them.
    /// * `before`, `after` - the ends of the stretch.
    #[must_use]
    pub fn is_between(&self, before: &Self, after: &Self) -> bool {
        let stretch = Stretch::between(*before, *after);
        let s1 = Stretch::between(*before, *self);
        let s2 = Stretch::between(*after, *self);
        let a1 = stretch.direction().to(&s1.direction());
        let a2 = stretch.direction().reverse().to(&s2.direction());
        a1.is_acute()
            && !a1.is_right()
            && a2.is_acute()
            && !a2.is_right()
            && !s1.distance().is_zero()
            && !s2.distance().is_zero()
    }

    /// Whether this `Position` is within a `Surface`.
    #[must_use]
    pub fn is_within<S: Surface + ?Sized>(&self, surface: &S) -> bool {
        surface.includes(self)
    }

    /// The component-wise difference in degrees between this `Position` and
    /// another.
    /// # Errors
    /// `RangeError::Latitude` or `RangeError::Longitude` if a difference is
    /// out of range.
    pub fn minus(&self, other: &Self) -> Result<Self, RangeError> {
        Self::from_degrees(
            self.latitude.degrees() - other.latitude.degrees(),
            self.longitude.degrees() - other.longitude.degrees(),
        )
    }
}

impl From<Position> for LatLong {
    fn from(position: Position) -> Self {
        Self::new(
            Degrees::from(position.latitude),
            Degrees::from(position.longitude),
        )
    }
}

impl TryFrom<LatLong> for Position {
    type Error = RangeError;

    fn try_from(lat_long: LatLong) -> Result<Self, Self::Error> {
        Ok(Self::new(
            Latitude::try_from(lat_long.lat())?,
            Longitude::try_from(lat_long.lon())?,
        ))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{}",
            self.latitude.degrees(),
            self.longitude.degrees()
        )
    }
}
