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

//! The longitude module contains the `Longitude` type.

use crate::angle::{DEGREES_PER_RADIAN, RADIANS_PER_DEGREE};
use crate::error::RangeError;
use crate::tolerance::{compare_values, impl_tolerant_comparison, Tolerant};
use angle_sc::{Degrees, Validate};
use core::cmp::Ordering;
use core::fmt;
use serde::{Deserialize, Serialize};

/// A longitude in degrees, in the range -180° <= longitude <= 180°.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(try_from = "LongitudeRecord", into = "LongitudeRecord")]
pub struct Longitude {
    degrees: f64,
}

#[derive(Clone, Copy, Serialize, Deserialize)]
struct LongitudeRecord {
    degrees: f64,
}

impl Longitude {
    /// The prime meridian.
    pub const ZERO: Self = Self { degrees: 0.0 };

    /// Construct a `Longitude` from a value in degrees.
    /// * `degrees` - a value in the range -180.0 <= degrees <= 180.0
    /// # Errors
    /// `RangeError::Longitude` if `degrees` is outside of the range.
    pub fn from_degrees(degrees: f64) -> Result<Self, RangeError> {
        if (-180.0..=180.0).contains(&degrees) {
            Ok(Self { degrees })
        } else {
            Err(RangeError::Longitude(degrees))
        }
    }

    /// Construct a `Longitude` from a value in radians.
    /// # Errors
    /// `RangeError::Longitude` if `radians` is outside of the range ±π.
    pub fn from_radians(radians: f64) -> Result<Self, RangeError> {
        Self::from_degrees(radians * DEGREES_PER_RADIAN)
    }

    /// Construct a `Longitude` from a calculated value known to be in the
    /// range -180° <= degrees <= 180°.
    #[must_use]
    pub(crate) const fn from_degrees_unchecked(degrees: f64) -> Self {
        Self { degrees }
    }

    /// The `Longitude` in degrees.
    #[must_use]
    pub const fn degrees(&self) -> f64 {
        self.degrees
    }

    /// The `Longitude` in radians.
    #[must_use]
    pub fn radians(&self) -> f64 {
        self.degrees * RADIANS_PER_DEGREE
    }

    /// Whether the `Longitude` is on the Prime Meridian, within tolerance.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        libm::fabs(self.degrees) < Self::DEFAULT_TOLERANCE
    }
}

impl Default for Longitude {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Validate for Longitude {
    fn is_valid(&self) -> bool {
        (-180.0..=180.0).contains(&self.degrees)
    }
}

impl Tolerant for Longitude {
    const DEFAULT_TOLERANCE: f64 = 1e-5;

    fn compare_within(&self, other: &Self, tolerance: f64) -> Ordering {
        compare_values(self.degrees, other.degrees, tolerance)
    }
}

impl_tolerant_comparison!(Longitude);

impl From<Longitude> for Degrees {
    fn from(longitude: Longitude) -> Self {
        Self(longitude.degrees)
    }
}

impl TryFrom<Degrees> for Longitude {
    type Error = RangeError;

    fn try_from(value: Degrees) -> Result<Self, Self::Error> {
        Self::from_degrees(value.0)
    }
}

impl TryFrom<LongitudeRecord> for Longitude {
    type Error = RangeError;

    fn try_from(record: LongitudeRecord) -> Result<Self, Self::Error> {
        Self::from_degrees(record.degrees)
    }
}

impl From<Longitude> for LongitudeRecord {
    fn from(longitude: Longitude) -> Self {
        Self {
            degrees: longitude.degrees,
        }
    }
}

impl fmt::Display for Longitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if 0.0 <= self.degrees {
            write!(f, "{:.1}ºE", self.degrees)
        } else {
            write!(f, "{:.1}ºW", -self.degrees)
        }
    }
}
