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

//! The gauss_krueger module converts between geodetic positions and grid
//! coordinates of a Gauss-Krüger (transverse Mercator) `MapProjection`.
//!
//! The formulae are from the Swedish Land Survey (Lantmäteriet):
//! [Gauss Conformal Projection (Transverse Mercator)](https://www.lantmateriet.se/globalassets/geodata/gps-och-geodetisk-matning/gauss_conformal_projection.pdf),
//! using order 4 series, which are accurate to within a millimetre within
//! the width of a national grid zone.

#![allow(clippy::suboptimal_flops)]

use super::{GridCoordinate, MapProjection};
use crate::angle::RADIANS_PER_DEGREE;
use crate::ellipsoid::coefficients::{
    calculate_rectifying_radius, evaluate_coeffs_beta, evaluate_coeffs_conformal,
    evaluate_coeffs_delta, evaluate_coeffs_geodetic, evaluate_polynomial, sum_krueger_series,
};
use crate::error::RangeError;
use crate::position::Position;

/// Round a value in metres to the nearest millimetre.
fn round_to_millimetres(value: f64) -> f64 {
    libm::rint(value * 1000.0) / 1000.0
}

/// The projection's scale multiplied by its ellipsoid's rectifying radius.
fn scaled_rectifying_radius(projection: &MapProjection) -> f64 {
    let ellipsoid = projection.ellipsoid();
    projection.scale()
        * calculate_rectifying_radius(
            ellipsoid.semi_major_axis().0,
            ellipsoid.third_flattening(),
        )
}

/// Convert a `Position` to a `GridCoordinate`.
/// * `position` - the geodetic `Position` on the projection's ellipsoid.
/// * `projection` - the `MapProjection`.
///
/// returns the `GridCoordinate` rounded to the nearest millimetre.
/// # Examples
/// ```
/// use geospatial::{projections, to_grid_coordinate, GridCoordinate, Position};
///
/// let stockholm = Position::from_degrees(59.326242, 17.841972).unwrap();
/// let grid = to_grid_coordinate(&stockholm, &projections::SWEREF99TM);
/// assert_eq!(GridCoordinate::new(6_579_830.428, 661_698.866), grid);
/// ```
#[must_use]
pub fn to_grid_coordinate(position: &Position, projection: &MapProjection) -> GridCoordinate {
    let ellipsoid = projection.ellipsoid();
    let e2 = ellipsoid.sq_eccentricity();
    let n = ellipsoid.third_flattening();

    let (phi, lambda) = position.radians();
    let (sin_phi, cos_phi) = (libm::sin(phi), libm::cos(phi));
    let conformal = evaluate_coeffs_conformal(e2);
    let phi_star = phi - sin_phi * cos_phi * evaluate_polynomial(&conformal, sin_phi * sin_phi);

    let delta_lambda = lambda - projection.central_meridian() * RADIANS_PER_DEGREE;
    let xi_prime = libm::atan(libm::tan(phi_star) / libm::cos(delta_lambda));
    let eta_prime = libm::atanh(libm::cos(phi_star) * libm::sin(delta_lambda));

    let (xi_sum, eta_sum) = sum_krueger_series(&evaluate_coeffs_beta(n), xi_prime, eta_prime);
    let k_a_hat = scaled_rectifying_radius(projection);
    let northing = k_a_hat * (xi_prime + xi_sum) + projection.false_northing();
    let easting = k_a_hat * (eta_prime + eta_sum) + projection.false_easting();

    GridCoordinate::new(round_to_millimetres(northing), round_to_millimetres(easting))
}

/// Convert a `GridCoordinate` to a `Position`.
/// * `grid_coordinate` - the `GridCoordinate` on the projection's grid.
/// * `projection` - the `MapProjection`.
///
/// returns the geodetic `Position`, or `Position::ORIGO` if the projection
/// is unset.
/// # Errors
/// `RangeError::Latitude` or `RangeError::Longitude` if the grid coordinate
/// is not finite.
/// # Examples
/// ```
/// use geospatial::{projections, to_position, GridCoordinate};
///
/// let grid = GridCoordinate::new(6_728_429.0, 1_572_570.0);
/// let position = to_position(&grid, &projections::RT90).unwrap();
/// assert!((position.latitude().degrees() - 60.666450715376).abs() < 1e-9);
/// assert!((position.longitude().degrees() - 17.1324873919442).abs() < 1e-9);
/// ```
pub fn to_position(
    grid_coordinate: &GridCoordinate,
    projection: &MapProjection,
) -> Result<Position, RangeError> {
    if projection.is_unset() {
        log::debug!("to_position from {grid_coordinate} with an unset projection");
        return Ok(Position::ORIGO);
    }

    let ellipsoid = projection.ellipsoid();
    let e2 = ellipsoid.sq_eccentricity();
    let n = ellipsoid.third_flattening();

    let k_a_hat = scaled_rectifying_radius(projection);
    let xi = (grid_coordinate.northing() - projection.false_northing()) / k_a_hat;
    let eta = (grid_coordinate.easting() - projection.false_easting()) / k_a_hat;

    let (xi_sum, eta_sum) = sum_krueger_series(&evaluate_coeffs_delta(n), xi, eta);
    let xi_prime = xi - xi_sum;
    let eta_prime = eta - eta_sum;

    let phi_star = libm::asin(libm::sin(xi_prime) / libm::cosh(eta_prime));
    let delta_lambda = libm::atan(libm::sinh(eta_prime) / libm::cos(xi_prime));

    let (sin_phi_star, cos_phi_star) = (libm::sin(phi_star), libm::cos(phi_star));
    let geodetic = evaluate_coeffs_geodetic(e2);
    let phi = phi_star
        + sin_phi_star
            * cos_phi_star
            * evaluate_polynomial(&geodetic, sin_phi_star * sin_phi_star);
    let lambda = projection.central_meridian() * RADIANS_PER_DEGREE + delta_lambda;

    Position::from_radians(phi, lambda)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ellipsoid::EarthEllipsoid;
    use crate::transformation::projections::{RT90, SWEREF99TM, UTM32, UTM33, UTM34};
    use angle_sc::is_within_tolerance;

    #[test]
    fn test_round_to_millimetres() {
        assert_eq!(6_728_429.0, round_to_millimetres(6_728_429.000_003_5));
        assert_eq!(1_572_570.0, round_to_millimetres(1_572_569.999_999_9));
        assert_eq!(0.124, round_to_millimetres(0.1235));
        assert_eq!(-0.001, round_to_millimetres(-0.000_6));

        // half way values round to even
        assert_eq!(0.062, round_to_millimetres(0.0625));
        assert_eq!(0.188, round_to_millimetres(0.1875));
    }

    #[test]
    fn test_rt90_to_position() {
        let grid = GridCoordinate::new(6_728_429.0, 1_572_570.0);
        let position = to_position(&grid, &RT90).unwrap();
        assert!(is_within_tolerance(
            60.666_450_715_376,
            position.latitude().degrees(),
            1e-9
        ));
        assert!(is_within_tolerance(
            17.132_487_391_944_2,
            position.longitude().degrees(),
            1e-9
        ));

        let result = to_grid_coordinate(&position, &RT90);
        assert_eq!(6_728_429.0, result.northing());
        assert_eq!(1_572_570.0, result.easting());
    }

    #[test]
    fn test_sweref99tm() {
        let stockholm = Position::from_degrees(59.326242, 17.841972).unwrap();
        let grid = to_grid_coordinate(&stockholm, &SWEREF99TM);
        assert!(is_within_tolerance(6_579_830.428, grid.northing(), 1e-6));
        assert!(is_within_tolerance(661_698.866, grid.easting(), 1e-6));

        let position = to_position(&grid, &SWEREF99TM).unwrap();
        assert!(is_within_tolerance(59.326242, position.latitude().degrees(), 1e-7));
        assert!(is_within_tolerance(17.841972, position.longitude().degrees(), 1e-7));

        // UTM zone 33 shares the central meridian of SWEREF 99 TM
        assert_eq!(grid, to_grid_coordinate(&stockholm, &UTM33));
    }

    #[test]
    fn test_central_meridian() {
        let origin = Position::from_degrees(0.0, 15.0).unwrap();
        let grid = to_grid_coordinate(&origin, &SWEREF99TM);
        assert_eq!(0.0, grid.northing());
        assert_eq!(500_000.0, grid.easting());
        assert_eq!(origin, to_position(&grid, &SWEREF99TM).unwrap());

        let south = Position::from_degrees(-33.5, 21.0).unwrap();
        let grid = to_grid_coordinate(&south, &UTM34);
        assert!(is_within_tolerance(-3_706_719.22, grid.northing(), 1e-6));
        assert_eq!(500_000.0, grid.easting());
    }

    #[test]
    fn test_utm32() {
        let hovik = Position::from_degrees(58.033785, 11.744987).unwrap();
        let grid = to_grid_coordinate(&hovik, &UTM32);
        assert_eq!(GridCoordinate::new(6_435_766.222, 662_073.923), grid);

        let position = to_position(&grid, &UTM32).unwrap();
        assert!(is_within_tolerance(58.033785, position.latitude().degrees(), 1e-7));
        assert!(is_within_tolerance(11.744987, position.longitude().degrees(), 1e-7));
    }

    #[test]
    fn test_unset_projection() {
        let grid = GridCoordinate::new(6_728_429.0, 1_572_570.0);
        assert_eq!(
            Position::ORIGO,
            to_position(&grid, &MapProjection::default()).unwrap()
        );

        let unset = MapProjection::new(
            EarthEllipsoid::WGS84,
            MapProjection::UNSET_CENTRAL_MERIDIAN,
            0.9996,
            0.0,
            500_000.0,
        );
        assert!(to_position(&grid, &unset).unwrap().is_origo());
    }

    #[test]
    fn test_to_position_not_finite() {
        let grid = GridCoordinate::new(f64::NAN, 500_000.0);
        assert!(to_position(&grid, &SWEREF99TM).is_err());

        let grid = GridCoordinate::new(f64::INFINITY, 500_000.0);
        assert!(to_position(&grid, &SWEREF99TM).is_err());
    }
}
