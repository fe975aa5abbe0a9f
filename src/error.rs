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

//! The error module contains the single error kind raised by the value type
//! factories: a raw value outside of its type's valid domain.

use thiserror::Error;

/// A raw numeric value outside of the valid range of the type being
/// constructed. It carries the rejected value.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum RangeError {
    #[error("angle {0}° is outside the range 0° <= angle < 360°")]
    Angle(f64),

    #[error("distance {0}m is negative or not finite")]
    Distance(f64),

    #[error("latitude {0}° is outside the range -90° <= latitude <= 90°")]
    Latitude(f64),

    #[error("longitude {0}° is outside the range -180° <= longitude <= 180°")]
    Longitude(f64),

    #[error("speed {0}m/s is negative or not finite")]
    Speed(f64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_error_display() {
        assert_eq!(
            "latitude 90.1° is outside the range -90° <= latitude <= 90°",
            RangeError::Latitude(90.1).to_string()
        );
        assert_eq!(
            "distance -1m is negative or not finite",
            RangeError::Distance(-1.0).to_string()
        );
        assert_eq!(
            "angle 360° is outside the range 0° <= angle < 360°",
            RangeError::Angle(360.0).to_string()
        );
    }
}
