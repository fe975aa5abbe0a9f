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

//! The angle module contains the `Angle` type: a direction in the range
//! 0° <= angle < 360°, or the `UNDEFINED` direction, e.g. the bearing between
//! two coincident positions.
//!
//! Angles wrap around 360° under addition and subtraction and `UNDEFINED`
//! propagates through every operation.

use crate::error::RangeError;
use crate::tolerance::{compare_values, impl_tolerant_comparison, Tolerant};
use angle_sc::{Degrees, Validate};
use core::cmp::Ordering;
use core::fmt;
use core::ops::{Add, Sub};
use serde::{Deserialize, Serialize};

/// The number of degrees in a radian.
pub(crate) const DEGREES_PER_RADIAN: f64 = 180.0 / core::f64::consts::PI;

/// The number of radians in a degree.
pub(crate) const RADIANS_PER_DEGREE: f64 = core::f64::consts::PI / 180.0;

/// A direction measured clockwise from North in degrees.
///
/// An `Angle` is either defined, in the range 0° <= angle < 360°, or
/// `UNDEFINED`. `UNDEFINED` compares equal to `UNDEFINED` and less than any
/// defined angle.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(try_from = "AngleRecord", into = "AngleRecord")]
pub struct Angle {
    degrees: Option<f64>,
}

/// The serialized form of an `Angle`: `null` degrees when undefined.
#[derive(Clone, Copy, Serialize, Deserialize)]
struct AngleRecord {
    degrees: Option<f64>,
}

impl Angle {
    /// The zero `Angle`, North.
    pub const ZERO: Self = Self { degrees: Some(0.0) };

    /// A right `Angle`, 90°.
    pub const RIGHT: Self = Self { degrees: Some(90.0) };

    /// A straight `Angle`, 180°.
    pub const STRAIGHT: Self = Self {
        degrees: Some(180.0),
    };

    /// The `Angle` without a direction.
    pub const UNDEFINED: Self = Self { degrees: None };

    /// Construct an `Angle` from a value in degrees.
    /// * `degrees` - a value in the range 0.0 <= degrees < 360.0
    /// # Errors
    /// `RangeError::Angle` if `degrees` is outside of the range.
    /// # Examples
    /// ```
    /// use geospatial::Angle;
    ///
    /// let angle = Angle::from_degrees(97.5).unwrap();
    /// assert_eq!(Some(97.5), angle.degrees());
    /// assert!(Angle::from_degrees(360.0).is_err());
    /// ```
    pub fn from_degrees(degrees: f64) -> Result<Self, RangeError> {
        if (0.0..360.0).contains(&degrees) {
            Ok(Self {
                degrees: Some(degrees),
            })
        } else {
            Err(RangeError::Angle(degrees))
        }
    }

    /// Construct an `Angle` from a value in radians.
    /// * `radians` - a value in the range 0.0 <= radians < 2π
    /// # Errors
    /// `RangeError::Angle` if `radians` is outside of the range.
    pub fn from_radians(radians: f64) -> Result<Self, RangeError> {
        Self::from_degrees(radians * DEGREES_PER_RADIAN)
    }

    /// Construct an `Angle` from any finite value in degrees by wrapping it
    /// into the range 0° <= angle < 360°.
    /// A non finite value is `UNDEFINED`.
    #[must_use]
    pub(crate) fn normalised(degrees: f64) -> Self {
        if degrees.is_finite() {
            let d = degrees % 360.0;
            let d = if d <= 0.0 { d + 360.0 } else { d };
            Self {
                degrees: Some(if d < 360.0 { d } else { 0.0 }),
            }
        } else {
            Self::UNDEFINED
        }
    }

    /// The `Angle` in degrees, `None` if it is undefined.
    #[must_use]
    pub const fn degrees(&self) -> Option<f64> {
        self.degrees
    }

    /// The `Angle` in radians, `None` if it is undefined.
    #[must_use]
    pub fn radians(&self) -> Option<f64> {
        self.degrees.map(|d| d * RADIANS_PER_DEGREE)
    }

    /// Whether the `Angle` is undefined.
    #[must_use]
    pub const fn is_undefined(&self) -> bool {
        self.degrees.is_none()
    }

    /// The complement of the `Angle`: 360° minus the angle, 0° for 0°.
    #[must_use]
    pub fn complement(&self) -> Self {
        self.degrees
            .map_or(Self::UNDEFINED, |d| Self::normalised(360.0 - d))
    }

    /// The reverse of the `Angle`: the opposite direction.
    #[must_use]
    pub fn reverse(&self) -> Self {
        self.degrees
            .map_or(Self::UNDEFINED, |d| Self::normalised(d + 180.0))
    }

    /// The absolute difference between this `Angle` and another.
    /// * `other` - the other `Angle`.
    #[must_use]
    pub fn to(&self, other: &Self) -> Self {
        match (self.degrees, other.degrees) {
            (Some(a), Some(b)) => Self::normalised(libm::fabs(a - b)),
            _ => Self::UNDEFINED,
        }
    }

    /// The smaller of the two directed differences between this `Angle` and
    /// another, i.e. `self - other` and `other - self`.
    /// * `other` - the other `Angle`.
    /// # Examples
    /// ```
    /// use geospatial::Angle;
    ///
    /// let a = Angle::from_degrees(200.0).unwrap();
    /// let b = Angle::from_degrees(20.0).unwrap();
    /// assert_eq!(Angle::STRAIGHT, a.min(b));
    /// ```
    #[must_use]
    pub fn min(self, other: Self) -> Self {
        let a1 = self - other;
        let a2 = other - self;
        if a1 < a2 {
            a1
        } else {
            a2
        }
    }

    /// Whether this `Angle` is between a pair of angles (inclusive).
    /// If `lower` is greater than `upper` the range wraps around North,
    /// e.g. 315° to 45° contains 350°, 0° and 30°.
    /// * `lower`, `upper` - the bounds of the range.
    ///
    /// returns false if any of the angles is undefined.
    #[must_use]
    pub fn is_between(&self, lower: &Self, upper: &Self) -> bool {
        if self.is_undefined() || lower.is_undefined() || upper.is_undefined() {
            false
        } else if lower <= upper {
            lower <= self && self <= upper
        } else {
            self >= lower || self <= upper
        }
    }

    /// Whether the `Angle` is less than a right angle.
    #[must_use]
    pub fn is_acute(&self) -> bool {
        !self.is_undefined() && *self < Self::RIGHT
    }

    /// Whether the `Angle`, modulo 180°, is greater than a right angle.
    #[must_use]
    pub fn is_obtuse(&self) -> bool {
        self.degrees.is_some_and(|d| {
            let a = if d < 180.0 { d } else { d - 180.0 };
            compare_values(a, 90.0, Self::DEFAULT_TOLERANCE) == Ordering::Greater
                && compare_values(a, 180.0, Self::DEFAULT_TOLERANCE) == Ordering::Less
        })
    }

    /// Whether the `Angle` is 90° or 270°.
    #[must_use]
    pub fn is_right(&self) -> bool {
        *self == Self::RIGHT || *self == Self::RIGHT.reverse()
    }

    /// Whether the `Angle` is 180°.
    #[must_use]
    pub fn is_straight(&self) -> bool {
        *self == Self::STRAIGHT
    }
}

impl Default for Angle {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Validate for Angle {
    /// Test whether an `Angle` is valid: undefined or in the range
    /// 0° <= angle < 360°.
    fn is_valid(&self) -> bool {
        match self.degrees {
            Some(d) => (0.0..360.0).contains(&d),
            None => true,
        }
    }
}

impl Tolerant for Angle {
    /// 0.00001°
    const DEFAULT_TOLERANCE: f64 = 1e-5;

    fn compare_within(&self, other: &Self, tolerance: f64) -> Ordering {
        match (self.degrees, other.degrees) {
            (Some(a), Some(b)) => compare_values(a, b, tolerance),
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
        }
    }
}

impl_tolerant_comparison!(Angle);

impl Add for Angle {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        match (self.degrees, other.degrees) {
            (Some(a), Some(b)) => Self::normalised(a + b),
            _ => Self::UNDEFINED,
        }
    }
}

impl Sub for Angle {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        match (self.degrees, other.degrees) {
            (Some(a), Some(b)) => Self::normalised(a - b),
            _ => Self::UNDEFINED,
        }
    }
}

impl TryFrom<Degrees> for Angle {
    type Error = RangeError;

    fn try_from(value: Degrees) -> Result<Self, Self::Error> {
        Self::from_degrees(value.0)
    }
}

impl TryFrom<AngleRecord> for Angle {
    type Error = RangeError;

    fn try_from(record: AngleRecord) -> Result<Self, Self::Error> {
        record.degrees.map_or(Ok(Self::UNDEFINED), Self::from_degrees)
    }
}

impl From<Angle> for AngleRecord {
    fn from(angle: Angle) -> Self {
        Self {
            degrees: angle.degrees,
        }
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.degrees {
            Some(d) => write!(f, "{d:.2}°"),
            None => write!(f, "Undefined"),
        }
    }
}
