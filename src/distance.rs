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

//! The distance module contains the `Distance` type: a non-negative length
//! in metres.

use crate::error::RangeError;
use crate::tolerance::{compare_values, impl_tolerant_comparison, Tolerant};
use angle_sc::Validate;
use core::cmp::Ordering;
use core::fmt;
use core::ops::{Add, Sub};
use icao_units::non_si::NauticalMiles;
use icao_units::si::Metres;
use serde::{Deserialize, Serialize};

/// A non-negative, finite length in metres.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(try_from = "DistanceRecord", into = "DistanceRecord")]
pub struct Distance {
    meters: f64,
}

#[derive(Clone, Copy, Serialize, Deserialize)]
struct DistanceRecord {
    meters: f64,
}

impl Distance {
    /// The zero `Distance`.
    pub const ZERO: Self = Self { meters: 0.0 };

    /// Construct a `Distance` from a length in metres.
    /// * `meters` - a finite length, not less than zero.
    /// # Errors
    /// `RangeError::Distance` if `meters` is negative or not finite.
    /// # Examples
    /// ```
    /// use geospatial::Distance;
    ///
    /// assert_eq!(Distance::from_kilometers(1.5).unwrap(), Distance::from_meters(1500.0).unwrap());
    /// assert!(Distance::from_meters(-1.0).is_err());
    /// ```
    pub fn from_meters(meters: f64) -> Result<Self, RangeError> {
        if meters.is_finite() && 0.0 <= meters {
            Ok(Self { meters })
        } else {
            Err(RangeError::Distance(meters))
        }
    }

    /// Construct a `Distance` from a length in kilometres.
    /// # Errors
    /// `RangeError::Distance` if `kilometers` is negative or not finite.
    pub fn from_kilometers(kilometers: f64) -> Result<Self, RangeError> {
        Self::from_meters(kilometers * 1000.0)
    }

    /// Construct a `Distance` from a length calculated by this crate, which
    /// is known to be finite and non-negative.
    #[must_use]
    pub(crate) const fn from_meters_unchecked(meters: f64) -> Self {
        Self { meters }
    }

    /// The `Distance` in metres.
    #[must_use]
    pub const fn meters(&self) -> f64 {
        self.meters
    }

    /// The `Distance` in kilometres.
    #[must_use]
    pub fn kilometers(&self) -> f64 {
        self.meters / 1000.0
    }

    /// The `Distance` in International Nautical Miles.
    #[must_use]
    pub fn nautical_miles(&self) -> NauticalMiles {
        NauticalMiles::from(Metres(self.meters))
    }

    /// Whether the `Distance` is shorter than its `DEFAULT_TOLERANCE`.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.meters < Self::DEFAULT_TOLERANCE
    }
}

impl Default for Distance {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Validate for Distance {
    fn is_valid(&self) -> bool {
        self.meters.is_finite() && 0.0 <= self.meters
    }
}

impl Tolerant for Distance {
    /// One millimetre.
    const DEFAULT_TOLERANCE: f64 = 1e-3;

    fn compare_within(&self, other: &Self, tolerance: f64) -> Ordering {
        compare_values(self.meters, other.meters, tolerance)
    }
}

impl_tolerant_comparison!(Distance);

impl Add for Distance {
    type Output = Self;

    /// The sum of the distances, saturating at `f64::MAX` metres.
    fn add(self, other: Self) -> Self {
        Self {
            meters: libm::fmin(self.meters + other.meters, f64::MAX),
        }
    }
}

impl Sub for Distance {
    type Output = Self;

    /// The difference between the distances, zero if `other` is longer.
    fn sub(self, other: Self) -> Self {
        Self {
            meters: libm::fmax(self.meters - other.meters, 0.0),
        }
    }
}

impl From<Distance> for Metres {
    fn from(distance: Distance) -> Self {
        Self(distance.meters)
    }
}

impl TryFrom<Metres> for Distance {
    type Error = RangeError;

    fn try_from(metres: Metres) -> Result<Self, Self::Error> {
        Self::from_meters(metres.0)
    }
}

impl TryFrom<DistanceRecord> for Distance {
    type Error = RangeError;

    fn try_from(record: DistanceRecord) -> Result<Self, Self::Error> {
        Self::from_meters(record.meters)
    }
}

impl From<Distance> for DistanceRecord {
    fn from(distance: Distance) -> Self {
        Self {
            meters: distance.meters,
        }
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}m", self.meters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use angle_sc::is_within_tolerance;

    fn distance(meters: f64) -> Distance {
        Distance::from_meters(meters).unwrap()
    }

    #[test]
    fn test_distance_range() {
        assert_eq!(0.0, distance(0.0).meters());
        assert_eq!(
            Err(RangeError::Distance(-0.001)),
            Distance::from_meters(-0.001)
        );
        assert!(Distance::from_meters(f64::NAN).is_err());
        assert!(Distance::from_meters(f64::INFINITY).is_err());
        assert!(Distance::from_kilometers(-1.0).is_err());
    }

    #[test]
    fn test_distance_units() {
        let d = Distance::from_kilometers(1.852).unwrap();
        assert_eq!(1852.0, d.meters());
        assert!(is_within_tolerance(1.852, d.kilometers(), f64::EPSILON));
        assert!(is_within_tolerance(1.0, d.nautical_miles().0, 1e-12));

        let metres = Metres::from(d);
        assert_eq!(1852.0, metres.0);
        assert_eq!(d, Distance::try_from(metres).unwrap());
        assert!(Distance::try_from(Metres(-1.0)).is_err());
    }

    #[test]
    fn test_distance_is_zero() {
        assert!(Distance::ZERO.is_zero());
        assert!(distance(0.0009).is_zero());
        assert!(!distance(0.001).is_zero());
    }

    #[test]
    fn test_distance_operators() {
        assert_eq!(distance(1.0), distance(1.0));
        assert_eq!(distance(1.0), distance(1.001));
        assert_ne!(distance(1.0), distance(1.0011));
        assert!(distance(1.0) < distance(2.0));
        assert!(distance(2.0) > distance(1.0));
        assert!(distance(2.0).eq_within(&distance(2.4), 0.5));

        assert_eq!(distance(3.0), distance(1.0) + distance(2.0));
        assert_eq!(distance(1.0), distance(3.0) - distance(2.0));
        assert_eq!(Distance::ZERO, distance(2.0) - distance(3.0));
    }

    #[test]
    fn test_distance_add_saturates() {
        let sum = distance(f64::MAX) + distance(f64::MAX);
        assert_eq!(f64::MAX, sum.meters());
        assert!(sum.is_valid());
    }

    #[test]
    fn test_distance_traits() {
        assert_eq!("1m", distance(1.0).to_string());
        assert_eq!("1.5m", distance(1.5).to_string());
        assert_eq!(Distance::ZERO, Distance::default());
        assert!(distance(1.0).is_valid());

        let serialized = serde_json::to_string(&distance(1.5)).unwrap();
        assert_eq!(r#"{"meters":1.5}"#, serialized);
        let deserialized: Distance = serde_json::from_str(&serialized).unwrap();
        assert_eq!(distance(1.5), deserialized);
        assert!(serde_json::from_str::<Distance>(r#"{"meters":-1.5}"#).is_err());
    }
}
