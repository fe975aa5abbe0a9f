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

//! The vector module contains the `Vector` type: a direction and a distance.

use crate::angle::Angle;
use crate::distance::Distance;
use crate::error::RangeError;
use serde::{Deserialize, Serialize};

/// A direction and a distance to travel from a `Position`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector {
    direction: Angle,
    distance: Distance,
}

impl Vector {
    /// Construct a `Vector` from a direction and a distance.
    #[must_use]
    pub const fn new(direction: Angle, distance: Distance) -> Self {
        Self {
            direction,
            distance,
        }
    }

    /// Construct a `Vector` from a direction in degrees and a distance in
    /// metres.
    /// # Errors
    /// `RangeError::Angle` or `RangeError::Distance` if either value is out of
    /// range.
    pub fn from_degrees_and_meters(degrees: f64, meters: f64) -> Result<Self, RangeError> {
        Ok(Self::new(
            Angle::from_degrees(degrees)?,
            Distance::from_meters(meters)?,
        ))
    }

    /// The direction of the `Vector`.
    #[must_use]
    pub const fn direction(&self) -> Angle {
        self.direction
    }

    /// The length of the `Vector`.
    #[must_use]
    pub const fn distance(&self) -> Distance {
        self.distance
    }
}
