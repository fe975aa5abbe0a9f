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

//! The surfaces module contains the `Surface` trait: an area of the Earth's
//! surface that a `Position` may be within, and its circular and polygonal
//! implementations.
//!
//! It also contains the planar intersection test between stretches.

use crate::calculator::DistanceCalculator;
use crate::distance::Distance;
use crate::latitude::Latitude;
use crate::longitude::Longitude;
use crate::position::Position;
use crate::stretch::Stretch;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

/// An area of the Earth's surface.
pub trait Surface {
    /// The single `Position` that represents the `Surface`, e.g. to display
    /// at small scales or to measure distances between surfaces.
    #[must_use]
    fn reference_position(&self) -> Position;

    /// Whether a `Position` is within, or on the border of, the `Surface`.
    #[must_use]
    fn includes(&self, position: &Position) -> bool;
}

/// The positions within a radius of a reference `Position`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CircularSurface {
    reference_position: Position,
    radius: Distance,
}

impl CircularSurface {
    /// Construct a `CircularSurface`.
    #[must_use]
    pub const fn new(reference_position: Position, radius: Distance) -> Self {
        Self {
            reference_position,
            radius,
        }
    }

    /// The radius of the circle.
    #[must_use]
    pub const fn radius(&self) -> Distance {
        self.radius
    }
}

impl Surface for CircularSurface {
    fn reference_position(&self) -> Position {
        self.reference_position
    }

    fn includes(&self, position: &Position) -> bool {
        Stretch::between(self.reference_position, *position).distance() <= self.radius
    }
}

/// The positions within a polygon.
///
/// The polygon's border is the closed sequence of `border_positions`.
/// Its edges are straight lines in longitude and latitude.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolygonalSurface {
    border_positions: Vec<Position>,
    reference_position: Position,
}

impl PolygonalSurface {
    /// Construct a `PolygonalSurface`.
    /// * `border_positions` - the vertices of the polygon, in order.
    /// * `reference_position` - the `Position` representing the polygon.
    #[must_use]
    pub fn new<I>(border_positions: I, reference_position: Position) -> Self
    where
        I: IntoIterator<Item = Position>,
    {
        Self {
            border_positions: border_positions.into_iter().collect(),
            reference_position,
        }
    }

    /// The vertices of the polygon, in order.
    #[must_use]
    pub fn border_positions(&self) -> &[Position] {
        &self.border_positions
    }

    /// Whether a `Position` is within the latitude and longitude bounds of
    /// the border positions.
    fn is_inside_enclosing_rectangle(&self, position: &Position) -> bool {
        let Some(first) = self.border_positions.first() else {
            return false;
        };

        let (mut south, mut north) = (first.latitude().degrees(), first.latitude().degrees());
        let (mut west, mut east) = (first.longitude().degrees(), first.longitude().degrees());
        for p in &self.border_positions[1..] {
            south = libm::fmin(south, p.latitude().degrees());
            north = libm::fmax(north, p.latitude().degrees());
            west = libm::fmin(west, p.longitude().degrees());
            east = libm::fmax(east, p.longitude().degrees());
        }

        let latitude = position.latitude();
        let longitude = position.longitude();
        Latitude::from_degrees_unchecked(south) <= latitude
            && latitude <= Latitude::from_degrees_unchecked(north)
            && Longitude::from_degrees_unchecked(west) <= longitude
            && longitude <= Longitude::from_degrees_unchecked(east)
    }

    /// Count the crossings of a ray from the `Position` towards the East with
    /// the polygon's edges: an odd count is inside.
    fn ray_casting_includes(&self, position: &Position) -> bool {
        let py = position.latitude().degrees();
        let px = position.longitude().degrees();

        let mut result = false;
        let mut j = self.border_positions.len() - 1;
        for (i, vertex) in self.border_positions.iter().enumerate() {
            let (yi, xi) = (vertex.latitude().degrees(), vertex.longitude().degrees());
            let previous = &self.border_positions[j];
            let (yj, xj) = (previous.latitude().degrees(), previous.longitude().degrees());
            if ((yi > py) != (yj > py)) && (px < (xj - xi) * (py - yi) / (yj - yi) + xi) {
                result = !result;
            }
            j = i;
        }
        result
    }
}

impl Surface for PolygonalSurface {
    fn reference_position(&self) -> Position {
        self.reference_position
    }

    fn includes(&self, position: &Position) -> bool {
        self.is_inside_enclosing_rectangle(position)
            && (self.ray_casting_includes(position) || self.border_positions.contains(position))
    }
}

impl<C: DistanceCalculator> Stretch<C> {
    /// Whether this `Stretch` crosses another, treating both as straight
    /// lines in latitude and longitude.
    /// * `other` - the other `Stretch`.
    ///
    /// returns false if the stretches are collinear.
    #[must_use]
    pub fn intersects<D: DistanceCalculator>(&self, other: &Stretch<D>) -> bool {
        let (x1, y1) = (self.from().latitude().degrees(), self.from().longitude().degrees());
        let (x2, y2) = (self.to().latitude().degrees(), self.to().longitude().degrees());
        let (x3, y3) = (other.from().latitude().degrees(), other.from().longitude().degrees());
        let (x4, y4) = (other.to().latitude().degrees(), other.to().longitude().degrees());

        // self as a line: a1 * x + b1 * y + c1 = 0
        let a1 = y2 - y1;
        let b1 = x1 - x2;
        let c1 = x2 * y1 - x1 * y2;
        let d3 = a1 * x3 + b1 * y3 + c1;
        let d4 = a1 * x4 + b1 * y4 + c1;
        if (d3 > 0.0 && d4 > 0.0) || (d3 < 0.0 && d4 < 0.0) {
            return false;
        }

        let a2 = y4 - y3;
        let b2 = x3 - x4;
        let c2 = x4 * y3 - x3 * y4;
        let d1 = a2 * x1 + b2 * y1 + c2;
        let d2 = a2 * x2 + b2 * y2 + c2;
        if (d1 > 0.0 && d2 > 0.0) || (d1 < 0.0 && d2 < 0.0) {
            return false;
        }

        libm::fabs(a1 * b2 - a2 * b1) >= f64::EPSILON
    }
}
