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

//! The transformation module contains the types for converting between
//! geodetic positions and planar grid coordinates: the `MapProjection` that
//! defines a grid and the `GridCoordinate` on it.
//!
//! The conversions themselves are in the [`gauss_krueger`] module and some
//! national and UTM grids are defined in the [`projections`] module.

pub mod gauss_krueger;
pub mod projections;

use crate::ellipsoid::EarthEllipsoid;
use crate::tolerance::compare_values;
use core::cmp::Ordering;
use core::fmt;
use serde::{Deserialize, Serialize};

/// A transverse Mercator projection of an `EarthEllipsoid` onto a grid.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapProjection {
    ellipsoid: EarthEllipsoid,
    central_meridian: f64,
    scale: f64,
    false_northing: f64,
    false_easting: f64,
}

impl MapProjection {
    /// The central meridian of a projection that has not been defined.
    pub const UNSET_CENTRAL_MERIDIAN: f64 = f64::MIN;

    /// Construct a `MapProjection`.
    /// * `ellipsoid` - the `EarthEllipsoid` to project.
    /// * `central_meridian` - the longitude of the projection's meridian in degrees.
    /// * `scale` - the scale factor along the central meridian.
    /// * `false_northing` - the northing of the Equator in metres.
    /// * `false_easting` - the easting of the central meridian in metres.
    #[must_use]
    pub const fn new(
        ellipsoid: EarthEllipsoid,
        central_meridian: f64,
        scale: f64,
        false_northing: f64,
        false_easting: f64,
    ) -> Self {
        Self {
            ellipsoid,
            central_meridian,
            scale,
            false_northing,
            false_easting,
        }
    }

    /// The `EarthEllipsoid` of the projection.
    #[must_use]
    pub const fn ellipsoid(&self) -> &EarthEllipsoid {
        &self.ellipsoid
    }

    /// The longitude of the central meridian in degrees.
    #[must_use]
    pub const fn central_meridian(&self) -> f64 {
        self.central_meridian
    }

    /// The scale factor on the central meridian.
    #[must_use]
    pub const fn scale(&self) -> f64 {
        self.scale
    }

    /// The false northing, in metres.
    #[must_use]
    pub const fn false_northing(&self) -> f64 {
        self.false_northing
    }

    /// The false easting, in metres.
    #[must_use]
    pub const fn false_easting(&self) -> f64 {
        self.false_easting
    }

    /// Whether the central meridian has not been defined.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_unset(&self) -> bool {
        self.central_meridian == Self::UNSET_CENTRAL_MERIDIAN
    }
}

impl Default for MapProjection {
    /// An unset projection of the GRS80 ellipsoid with unit scale and no
    /// false origin.
    fn default() -> Self {
        Self::new(
            EarthEllipsoid::GRS80,
            Self::UNSET_CENTRAL_MERIDIAN,
            1.0,
            0.0,
            0.0,
        )
    }
}

/// A northing and easting in metres on the grid of a `MapProjection`.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct GridCoordinate {
    northing: f64,
    easting: f64,
}

impl GridCoordinate {
    /// The tolerance of `GridCoordinate` equality in metres.
    pub const DEFAULT_TOLERANCE: f64 = 1e-3;

    /// Construct a `GridCoordinate`.
    #[must_use]
    pub const fn new(northing: f64, easting: f64) -> Self {
        Self { northing, easting }
    }

    /// The northing, in metres.
    #[must_use]
    pub const fn northing(&self) -> f64 {
        self.northing
    }

    /// The easting, in metres.
    #[must_use]
    pub const fn easting(&self) -> f64 {
        self.easting
    }

    /// Whether both the northing and the easting are equal within a tolerance.
    /// * `other` - the `GridCoordinate` to compare with.
    /// * `tolerance` - the maximum difference in metres.
    #[must_use]
    pub fn eq_within(&self, other: &Self, tolerance: f64) -> bool {
        compare_values(self.northing, other.northing, tolerance) == Ordering::Equal
            && compare_values(self.easting, other.easting, tolerance) == Ordering::Equal
    }
}

impl PartialEq for GridCoordinate {
    fn eq(&self, other: &Self) -> bool {
        self.eq_within(other, Self::DEFAULT_TOLERANCE)
    }
}

impl fmt::Display for GridCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "N {:.3} E {:.3}", self.northing, self.easting)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_projection() {
        let target = MapProjection::new(EarthEllipsoid::WGS84, 9.0, 0.9996, 0.0, 500_000.0);
        assert_eq!(&EarthEllipsoid::WGS84, target.ellipsoid());
        assert_eq!(9.0, target.central_meridian());
        assert_eq!(0.9996, target.scale());
        assert_eq!(0.0, target.false_northing());
        assert_eq!(500_000.0, target.false_easting());
        assert!(!target.is_unset());

        let unset = MapProjection::default();
        assert!(unset.is_unset());
        assert_eq!(&EarthEllipsoid::GRS80, unset.ellipsoid());
        assert_eq!(1.0, unset.scale());
    }

    #[test]
    fn test_map_projection_serialization() {
        let target = MapProjection::new(EarthEllipsoid::GRS80, 15.0, 0.9996, 0.0, 500_000.0);
        let serialized = serde_json::to_string(&target).unwrap();
        assert_eq!(
            r#"{"ellipsoid":{"semiMajorAxis":6378137.0,"semiMinorAxis":6356752.31414},"centralMeridian":15.0,"scale":0.9996,"falseNorthing":0.0,"falseEasting":500000.0}"#,
            serialized
        );
        let deserialized: MapProjection = serde_json::from_str(&serialized).unwrap();
        assert_eq!(target, deserialized);
    }

    #[test]
    fn test_grid_coordinate() {
        let target = GridCoordinate::new(6_728_429.0, 1_572_570.0);
        assert_eq!(6_728_429.0, target.northing());
        assert_eq!(1_572_570.0, target.easting());
        assert_eq!("N 6728429.000 E 1572570.000", target.to_string());

        assert_eq!(target, GridCoordinate::new(6_728_429.000_5, 1_572_569.999_5));
        assert_ne!(target, GridCoordinate::new(6_728_429.002, 1_572_570.0));
        assert_ne!(target, GridCoordinate::new(6_728_429.0, 1_572_570.002));
        assert!(target.eq_within(&GridCoordinate::new(6_728_429.5, 1_572_570.5), 1.0));

        let serialized = serde_json::to_string(&target).unwrap();
        assert_eq!(r#"{"northing":6728429.0,"easting":1572570.0}"#, serialized);
        let deserialized: GridCoordinate = serde_json::from_str(&serialized).unwrap();
        assert_eq!(target, deserialized);
    }
}
