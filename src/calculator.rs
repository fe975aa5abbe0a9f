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

//! The calculator module contains the `DistanceCalculator` trait, the
//! strategy a `Stretch` uses to measure the distance between its ends,
//! and its default implementation: the haversine great circle distance.

#![allow(clippy::suboptimal_flops)]

use crate::distance::Distance;
use crate::position::Position;
use crate::EARTH_MEAN_RADIUS;

/// Calculates the distance between a pair of positions.
///
/// Any `Fn(&Position, &Position) -> Distance` is a `DistanceCalculator`.
pub trait DistanceCalculator {
    /// The distance from one `Position` to another.
    #[must_use]
    fn distance(&self, from: &Position, to: &Position) -> Distance;
}

impl<F> DistanceCalculator for F
where
    F: Fn(&Position, &Position) -> Distance,
{
    fn distance(&self, from: &Position, to: &Position) -> Distance {
        self(from, to)
    }
}

/// Calculates the great circle distance on a sphere with the Earth's mean
/// radius using the haversine formula, which is well conditioned for short
/// distances.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HaversineCalculator;

impl DistanceCalculator for HaversineCalculator {
    fn distance(&self, from: &Position, to: &Position) -> Distance {
        haversine_distance(from, to)
    }
}

/// Calculate the haversine great circle distance between a pair of positions.
/// * `from`, `to` - the positions.
///
/// returns the `Distance` along the surface of a sphere with the Earth's
/// mean radius.
/// # Examples
/// ```
/// use geospatial::{haversine_distance, Position};
///
/// let hovik = Position::from_degrees(58.033785, 11.744987).unwrap();
/// let hoviksnas = Position::from_degrees(58.033157, 11.754460).unwrap();
/// let distance = haversine_distance(&hovik, &hoviksnas);
/// assert!((distance.meters() - 562.024).abs() < 0.001);
/// ```
#[must_use]
pub fn haversine_distance(from: &Position, to: &Position) -> Distance {
    let (phi1, lambda1) = from.radians();
    let (phi2, lambda2) = to.radians();
    let sin_half_delta_phi = libm::sin((phi2 - phi1) / 2.0);
    let sin_half_delta_lambda = libm::sin((lambda2 - lambda1) / 2.0);
    let a = (sin_half_delta_phi * sin_half_delta_phi
        + libm::cos(phi1) * libm::cos(phi2) * sin_half_delta_lambda * sin_half_delta_lambda)
        .clamp(0.0, 1.0);
    let c = 2.0 * libm::atan2(libm::sqrt(a), libm::sqrt(1.0 - a));
    Distance::from_meters_unchecked(EARTH_MEAN_RADIUS.0 * c)
}
