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

//! The ellipsoid module contains the `EarthEllipsoid` type: a model of the
//! Earth's shape as an ellipsoid of revolution, and the GRS 80 and WGS 84
//! ellipsoids.
//!
//! It also contains functions for calculating the ellipsoid's derived
//! parameters, see:
//! [Earth ellipsoid](https://en.wikipedia.org/wiki/Earth_ellipsoid).

pub mod coefficients;
pub mod grs80;
pub mod wgs84;

use icao_units::si::Metres;
use serde::{Deserialize, Serialize};

/// Calculate the Semiminor axis of an ellipsoid.
/// * `a` - the Semimajor axis of an ellipsoid.
/// * `f` - the flattening ratio.
///
/// returns the Semiminor axis of the ellipsoid.
/// # Examples
/// ```
/// use geospatial::ellipsoid::{calculate_minor_axis, grs80};
///
/// let b = calculate_minor_axis(grs80::A, 0.003_352_810_681_238_05);
/// assert!((grs80::B.0 - b.0).abs() < 1e-6);
/// ```
#[must_use]
pub fn calculate_minor_axis(a: Metres, f: f64) -> Metres {
    Metres(a.0 * (1.0 - f))
}

/// Calculate the flattening ratio of an ellipsoid.
/// * `a` - the Semimajor axis of an ellipsoid.
/// * `b` - the Semiminor axis of an ellipsoid.
#[must_use]
pub fn calculate_flattening(a: Metres, b: Metres) -> f64 {
    (a.0 - b.0) / a.0
}

/// Calculate the square of the Eccentricity of an ellipsoid.
/// * `f` - the flattening ratio.
#[must_use]
pub fn calculate_sq_eccentricity(f: f64) -> f64 {
    f * (2.0 - f)
}

/// Calculate the third flattening of an ellipsoid.
/// * `f` - the flattening ratio.
#[must_use]
pub fn calculate_3rd_flattening(f: f64) -> f64 {
    f / (2.0 - f)
}

/// An ellipsoid of revolution defined by its semi axes.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EarthEllipsoid {
    semi_major_axis: f64,
    semi_minor_axis: f64,
}

impl EarthEllipsoid {
    /// The Geodetic Reference System 1980 ellipsoid.
    pub const GRS80: Self = Self::from_semi_axes(grs80::A, grs80::B);

    /// The World Geodetic System 1984 ellipsoid.
    pub const WGS84: Self = Self::from_semi_axes(wgs84::A, wgs84::B);

    /// Construct an `EarthEllipsoid` from its semi axes.
    /// * `semi_major_axis` - the equatorial radius.
    /// * `semi_minor_axis` - the polar radius.
    #[must_use]
    pub const fn from_semi_axes(semi_major_axis: Metres, semi_minor_axis: Metres) -> Self {
        Self {
            semi_major_axis: semi_major_axis.0,
            semi_minor_axis: semi_minor_axis.0,
        }
    }

    /// Construct an `EarthEllipsoid` from its Semimajor axis and flattening.
    /// * `semi_major_axis` - the equatorial radius.
    /// * `flattening` - the flattening ratio.
    #[must_use]
    pub fn from_semi_major_axis_and_flattening(semi_major_axis: Metres, flattening: f64) -> Self {
        Self::from_semi_axes(
            semi_major_axis,
            calculate_minor_axis(semi_major_axis, flattening),
        )
    }

    /// The semi-major axis, `a`.
    #[must_use]
    pub const fn semi_major_axis(&self) -> Metres {
        Metres(self.semi_major_axis)
    }

    /// The semi-minor axis, `b`.
    #[must_use]
    pub const fn semi_minor_axis(&self) -> Metres {
        Metres(self.semi_minor_axis)
    }

    /// The flattening, `f`.
    #[must_use]
    pub fn flattening(&self) -> f64 {
        calculate_flattening(self.semi_major_axis(), self.semi_minor_axis())
    }

    /// The square of the Eccentricity.
    #[must_use]
    pub fn sq_eccentricity(&self) -> f64 {
        calculate_sq_eccentricity(self.flattening())
    }

    /// The third flattening, `n` in the Krüger series.
    #[must_use]
    pub fn third_flattening(&self) -> f64 {
        calculate_3rd_flattening(self.flattening())
    }
}
