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

//! The speed module contains the `Speed` type.

use crate::distance::Distance;
use crate::error::RangeError;
use crate::tolerance::{compare_values, impl_tolerant_comparison, Tolerant};
use angle_sc::Validate;
use core::cmp::Ordering;
use core::fmt;
use core::ops::Add;
use core::time::Duration;
use serde::{Deserialize, Serialize};

/// A non-negative, finite speed in metres per second.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(try_from = "SpeedRecord", into = "SpeedRecord")]
pub struct Speed {
    meters_per_second: f64,
}

#[derive(Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SpeedRecord {
    meters_per_second: f64,
}

impl Speed {
    pub const ZERO: Self = Self {
        meters_per_second: 0.0,
    };

    /// Construct a `Speed` from a value in metres per second.
    /// # Errors
    /// `RangeError::Speed` if the value is negative or not finite.
    pub fn from_meters_per_second(meters_per_second: f64) -> Result<Self, RangeError> {
        if meters_per_second.is_finite() && 0.0 <= meters_per_second {
            Ok(Self { meters_per_second })
        } else {
            Err(RangeError::Speed(meters_per_second))
        }
    }

    /// Construct a `Speed` from a value in kilometres per hour.
    /// # Errors
    /// `RangeError::Speed` if the value is negative or not finite.
    /// # Examples
    /// ```
    /// use geospatial::Speed;
    ///
    /// let speed = Speed::from_kilometers_per_hour(72.0).unwrap();
    /// assert_eq!(20.0, speed.meters_per_second());
    /// ```
    pub fn from_kilometers_per_hour(kilometers_per_hour: f64) -> Result<Self, RangeError> {
        Self::from_meters_per_second(kilometers_per_hour / 3.6)
    }

    /// Construct the average `Speed` needed to cover a `Distance` in a
    /// `Duration`.
    /// # Errors
    /// `RangeError::Speed` if the duration is zero.
    pub fn from_distance_and_duration(
        distance: Distance,
        duration: Duration,
    ) -> Result<Self, RangeError> {
        let seconds = duration.as_secs_f64();
        if seconds > 0.0 {
            Self::from_meters_per_second(distance.meters() / seconds)
        } else {
            Err(RangeError::Speed(f64::INFINITY))
        }
    }

    /// The `Speed` in metres per second.
    #[must_use]
    pub const fn meters_per_second(&self) -> f64 {
        self.meters_per_second
    }

    /// The `Speed` in kilometres per hour.
    #[must_use]
    pub fn kilometers_per_hour(&self) -> f64 {
        self.meters_per_second * 3.6
    }

    /// Whether the `Speed` is slower than its `DEFAULT_TOLERANCE`.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.meters_per_second < Self::DEFAULT_TOLERANCE
    }

    /// Whether the `Speed` is below another `Speed`, beyond tolerance.
    #[must_use]
    pub fn is_below(&self, other: &Self) -> bool {
        self < other
    }
}

impl Default for Speed {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Validate for Speed {
    fn is_valid(&self) -> bool {
        self.meters_per_second.is_finite() && 0.0 <= self.meters_per_second
    }
}

impl Tolerant for Speed {
    /// One centimetre per second.
    const DEFAULT_TOLERANCE: f64 = 1e-2;

    fn compare_within(&self, other: &Self, tolerance: f64) -> Ordering {
        compare_values(self.meters_per_second, other.meters_per_second, tolerance)
    }
}

impl_tolerant_comparison!(Speed);

impl Add for Speed {
    type Output = Self;

    /// The sum of the speeds, saturating at `f64::MAX` metres per second.
    fn add(self, other: Self) -> Self {
        Self {
            meters_per_second: libm::fmin(
                self.meters_per_second + other.meters_per_second,
                f64::MAX,
            ),
        }
    }
}

impl TryFrom<SpeedRecord> for Speed {
    type Error = RangeError;

    fn try_from(record: SpeedRecord) -> Result<Self, Self::Error> {
        Self::from_meters_per_second(record.meters_per_second)
    }
}

impl From<Speed> for SpeedRecord {
    fn from(speed: Speed) -> Self {
        Self {
            meters_per_second: speed.meters_per_second,
        }
    }
}

impl fmt::Display for Speed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}m/s", self.meters_per_second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use angle_sc::is_within_tolerance;

    fn speed(meters_per_second: f64) -> Speed {
        Speed::from_meters_per_second(meters_per_second).unwrap()
    }

    #[test]
    fn test_speed_range() {
        assert_eq!(Err(RangeError::Speed(-1.0)), Speed::from_meters_per_second(-1.0));
        assert!(Speed::from_meters_per_second(f64::NAN).is_err());
        assert!(Speed::from_kilometers_per_hour(-3.6).is_err());
        assert_eq!(0.0, speed(0.0).meters_per_second());
    }

    #[test]
    fn test_speed_units() {
        let s = Speed::from_kilometers_per_hour(72.0).unwrap();
        assert_eq!(20.0, s.meters_per_second());
        assert!(is_within_tolerance(72.0, s.kilometers_per_hour(), 1e-12));
    }

    #[test]
    fn test_speed_from_distance_and_duration() {
        let distance = Distance::from_kilometers(36.0).unwrap();
        let s = Speed::from_distance_and_duration(distance, Duration::from_secs(3600)).unwrap();
        assert_eq!(speed(10.0), s);
        assert!(Speed::from_distance_and_duration(distance, Duration::ZERO).is_err());
    }

    #[test]
    fn test_speed_comparison() {
        assert_ne!(speed(10.0), speed(10.02));
        assert_eq!(speed(10.0), speed(10.01));
        assert!(!speed(0.01).is_zero());
        assert!(speed(0.009).is_zero());
        assert!(Speed::ZERO.is_zero());
        assert!(speed(10.0).is_below(&speed(10.02)));
        assert!(!speed(10.0).is_below(&speed(10.01)));
        assert_eq!(speed(30.0), speed(10.0) + speed(20.0));
    }

    #[test]
    fn test_speed_add_saturates() {
        let sum = speed(f64::MAX) + speed(f64::MAX);
        assert_eq!(f64::MAX, sum.meters_per_second());
        assert!(sum.is_valid());
    }

    #[test]
    fn test_speed_traits() {
        assert_eq!("10.5m/s", speed(10.5).to_string());
        assert_eq!(Speed::ZERO, Speed::default());
        assert!(speed(1.0).is_valid());

        let serialized = serde_json::to_string(&speed(10.5)).unwrap();
        assert_eq!(r#"{"metersPerSecond":10.5}"#, serialized);
        let deserialized: Speed = serde_json::from_str(&serialized).unwrap();
        assert_eq!(speed(10.5), deserialized);
    }
}
