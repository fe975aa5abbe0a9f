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

//! Gauss-Krüger projections of the GRS80 ellipsoid used by Swedish national
//! grids and the Universal Transverse Mercator (UTM) zones that cover Sweden.

use super::MapProjection;
use crate::ellipsoid::EarthEllipsoid;

/// The scale factor on the central meridian of SWEREF 99 TM and UTM zones.
const UTM_SCALE: f64 = 0.9996;

/// The false easting of SWEREF 99 TM and UTM zones in metres.
const UTM_FALSE_EASTING: f64 = 500_000.0;

/// A UTM zone projection on the GRS80 ellipsoid.
const fn utm_zone(central_meridian: f64) -> MapProjection {
    MapProjection::new(
        EarthEllipsoid::GRS80,
        central_meridian,
        UTM_SCALE,
        0.0,
        UTM_FALSE_EASTING,
    )
}

/// RT90 2.5 gon V 0:-15, the former Swedish national grid, as realised on
/// GRS80 by Lantmäteriet.
pub const RT90: MapProjection = MapProjection::new(
    EarthEllipsoid::GRS80,
    15.806_284_529_444_4,
    1.000_005_610_24,
    -667.711,
    1_500_064.274,
);

/// SWEREF 99 TM, the Swedish national grid.
pub const SWEREF99TM: MapProjection = utm_zone(15.0);

/// UTM zone 32, 6°E to 12°E.
pub const UTM32: MapProjection = utm_zone(9.0);

/// UTM zone 33, 12°E to 18°E.
pub const UTM33: MapProjection = utm_zone(15.0);

/// UTM zone 34, 18°E to 24°E.
pub const UTM34: MapProjection = utm_zone(21.0);

/// UTM zone 35, 24°E to 30°E.
pub const UTM35: MapProjection = utm_zone(27.0);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utm_zones() {
        let zones = [UTM32, UTM33, UTM34, UTM35];
        for (zone, central_meridian) in zones.iter().zip([9.0, 15.0, 21.0, 27.0]) {
            assert_eq!(central_meridian, zone.central_meridian());
            assert_eq!(0.9996, zone.scale());
            assert_eq!(0.0, zone.false_northing());
            assert_eq!(500_000.0, zone.false_easting());
            assert_eq!(&EarthEllipsoid::GRS80, zone.ellipsoid());
            assert!(!zone.is_unset());
        }
        assert_eq!(SWEREF99TM, UTM33);
    }

    #[test]
    fn test_rt90() {
        assert_eq!(15.806_284_529_444_4, RT90.central_meridian());
        assert_eq!(1.000_005_610_24, RT90.scale());
        assert_eq!(-667.711, RT90.false_northing());
        assert_eq!(1_500_064.274, RT90.false_easting());
        assert_eq!(&EarthEllipsoid::GRS80, RT90.ellipsoid());
    }
}
