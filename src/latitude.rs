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

//! The latitude module contains the `Latitude` type.

use crate::angle::{DEGREES_PER_RADIAN, RADIANS_PER_DEGREE};
use crate::error::RangeError;
use crate::tolerance::{compare_values, impl_tolerant_comparison, Tolerant};
use angle_sc::{Degrees, Validate};
use core::cmp::Ordering;
use core::fmt;
use serde::{Deserialize, Serialize};

/// A latitude in degrees, in the range -90° <= latitude <= 90°.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(try_from = "LatitudeRecord", into = "LatitudeRecord")]
pub struct Latitude {
    degrees: f64,
}

#[derive(Clone, Copy, Serialize, Deserialize)]
struct LatitudeRecord {
    degrees: f64,
}

impl Latitude {
    /// The Equator.
    pub const ZERO: Self = Self { degrees: 0.0 };

    /// Construct a `Latitude` from a value in degrees.
    /// * `degrees` - a value in the range -90.0 <= degrees <= 90.0
    /// # Errors
    /// `RangeError::Latitude` if `degrees` is outside of the range.
    pub fn from_degrees(degrees: f64) -> Result<Self, RangeError> {
        if (-90.0..=90.0).contains(&degrees) {
            Ok(Self { degrees })
        } else {
            Err(RangeError::Latitude(degrees))
        }
    }

    /// Construct a `Latitude` from a value in radians.
    /// # Errors
    /// `RangeError::Latitude` if `radians` is outside of the range ±π/2.
    pub fn from_radians(radians: f64) -> Result<Self, RangeError> {
        Self::from_degrees(radians * DEGREES_PER_RADIAN)
    }

    /// Construct a `Latitude` from a calculated value known to be in the
    /// range -90° <= degrees <= 90°.
    #[must_use]
    pub(crate) const fn from_degrees_unchecked(degrees: f64) -> Self {
        Self { degrees }
    }

    /// The `Latitude` in degrees.
    #[must_use]
    pub const fn degrees(&self) -> f64 {
        self.degrees
    }

    /// The `Latitude` in radians.
    #[must_use]
    pub fn radians(&self) -> f64 {
        self.degrees * RADIANS_PER_DEGREE
    }

    /// Whether the `Latitude` is on the Equator, within tolerance.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        libm::fabs(self.degrees) < Self::DEFAULT_TOLERANCE
    }
}

impl Default for Latitude {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Validate for Latitude {
    fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.degrees)
    }
}

impl Tolerant for Latitude {
    const DEFAULT_TOLERANCE: f64 = 1e-5;

    fn compare_within(&self, other: &Self, tolerance: f64) -> Ordering {
        compare_values(self.degrees, other.degrees, tolerance)
    }
}

impl_tolerant_comparison!(Latitude);

impl From<Latitude> for Degrees {
    fn from(latitude: Latitude) -> Self {
        Self(latitude.degrees)
    }
}

impl TryFrom<Degrees> for Latitude {
    type Error = RangeError;

    fn try_from(value: Degrees) -> Result<Self, Self::Error> {
        Self::from_degrees(value.0)
    }
}

impl TryFrom<LatitudeRecord> for Latitude {
    type Error = RangeError;

    fn try_from(record: LatitudeRecord) -> Result<Self, Self::Error> {
        Self::from_degrees(record.degrees)
    }
}

impl From<Latitude> for LatitudeRecord {
    fn from(latitude: Latitude) -> Self {
        Self {
            degrees: latitude.degrees,
        }
    }
}

impl fmt::Display for Latitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if 0.0 <= self.degrees {
            write!(f, "{:.1}ºN", self.degrees)
        } else {
            write!(f, "{:.1}ºS", -self.degrees)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use angle_sc::is_within_tolerance;

    #[test]
    fn test_latitude_range() {
        assert_eq!(90.0, Latitude::from_degrees(90.0).unwrap().degrees());
        assert_eq!(-90.0, Latitude::from_degrees(-90.0).unwrap().degrees());
        assert_eq!(
            Err(RangeError::Latitude(90.1)),
            Latitude::from_degrees(90.1)
        );
        assert!(Latitude::from_degrees(-90.1).is_err());
        assert!(Latitude::from_degrees(f64::NAN).is_err());
        assert!(Latitude::from_radians(1.5).is_ok());
        assert!(Latitude::from_radians(1.6).is_err());
    }

    #[test]
    fn test_latitude_radians() {
        let latitude = Latitude::from_radians(core::f64::consts::FRAC_PI_4).unwrap();
        assert!(is_within_tolerance(45.0, latitude.degrees(), 1e-12));
        assert!(is_within_tolerance(
            core::f64::consts::FRAC_PI_4,
            latitude.radians(),
            1e-15
        ));
    }

    #[test]
    fn test_latitude_comparison() {
        let a = Latitude::from_degrees(58.0).unwrap();
        let b = Latitude::from_degrees(58.011).unwrap();
        assert_ne!(a, b);
        assert!(a < b);
        assert!(a.eq_within(&b, 0.1));
        assert_eq!(a, Latitude::from_degrees(58.000_009).unwrap());
        assert!(Latitude::from_degrees(0.000_001).unwrap().is_zero());
        assert!(!a.is_zero());
    }

    #[test]
    fn test_latitude_traits() {
        assert_eq!("45.0ºN", Latitude::from_degrees(45.0).unwrap().to_string());
        assert_eq!("12.3ºS", Latitude::from_degrees(-12.34).unwrap().to_string());
        assert_eq!("0.0ºN", Latitude::ZERO.to_string());
        assert_eq!(Latitude::ZERO, Latitude::default());

        let degrees = Degrees::from(Latitude::from_degrees(-33.5).unwrap());
        assert_eq!(-33.5, degrees.0);
        assert!(Latitude::try_from(Degrees(91.0)).is_err());

        let serialized = serde_json::to_string(&Latitude::from_degrees(45.5).unwrap()).unwrap();
        assert_eq!(r#"{"degrees":45.5}"#, serialized);
        assert!(serde_json::from_str::<Latitude>(r#"{"degrees":95.0}"#).is_err());
    }
}
