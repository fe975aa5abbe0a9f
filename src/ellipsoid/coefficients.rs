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

//! This module contains coefficients and functions for performing Gauss-Krüger
//! transverse Mercator projections on the surface of an ellipsoid.
//!
//! It uses the order 4 Krüger series in the third flattening `n` and the
//! conformal latitude series in the square of the Eccentricity `e²`, as
//! given in the Swedish Land Survey (Lantmäteriet) formula collection:
//! [Gauss Conformal Projection (Transverse Mercator)](https://www.lantmateriet.se/globalassets/geodata/gps-och-geodetisk-matning/gauss_conformal_projection.pdf).

/// Evaluate a polynomial with two coefficients.
#[must_use]
fn evaluate_2_coeffs(coeffs: &[f64], x: f64) -> f64 {
    libm::fma(x, coeffs[1], coeffs[0])
}

/// Evaluate the polynomial in x using
/// [Horner's method](https://en.wikipedia.org/wiki/Horner%27s_method).
/// * `coeffs` - the polynomial coefficients, lowest order first.
/// * `x` - the variable.
/// # Examples
/// ```
/// use geospatial::ellipsoid::coefficients::evaluate_polynomial;
///
/// // 1 + 2x + 3x²
/// assert_eq!(17.0, evaluate_polynomial(&[1.0, 2.0, 3.0], 2.0));
/// ```
#[must_use]
pub fn evaluate_polynomial(coeffs: &[f64], x: f64) -> f64 {
    let mut result: f64 = 0.;

    match coeffs.len() {
        // Use Estrin's scheme for 2 coefficients, since same result as Horner's method
        2 => result = evaluate_2_coeffs(coeffs, x),
        _ => {
            if let Some((last, elements)) = coeffs.split_last() {
                result = *last;
                for element in elements.iter().rev() {
                    result = libm::fma(result, x, *element);
                }
            }
        }
    }

    result
}

/// The rectifying radius `â`: the radius of a sphere with the same meridian
/// length as the ellipsoid.
/// * `a` - the Semimajor axis of the ellipsoid in metres.
/// * `n` - the third flattening of the ellipsoid.
#[must_use]
pub fn calculate_rectifying_radius(a: f64, n: f64) -> f64 {
    let n2 = n * n;
    a / (1.0 + n) * evaluate_polynomial(&[1.0, 0.25, 1.0 / 64.0], n2)
}

/// The coefficients `β` of the Krüger series from the conformal sphere to
/// the projection plane.
/// * `n` - the third flattening of the ellipsoid.
#[must_use]
pub fn evaluate_coeffs_beta(n: f64) -> [f64; 4] {
    let n2 = n * n;
    let n3 = n2 * n;
    let n4 = n3 * n;
    [
        n * evaluate_polynomial(&[1.0 / 2.0, -2.0 / 3.0, 5.0 / 16.0, 41.0 / 180.0], n),
        n2 * evaluate_polynomial(&[13.0 / 48.0, -3.0 / 5.0, 557.0 / 1440.0], n),
        n3 * evaluate_polynomial(&[61.0 / 240.0, -103.0 / 140.0], n),
        n4 * 49561.0 / 161_280.0,
    ]
}

/// The coefficients `δ` of the Krüger series from the projection plane to
/// the conformal sphere.
/// * `n` - the third flattening of the ellipsoid.
#[must_use]
pub fn evaluate_coeffs_delta(n: f64) -> [f64; 4] {
    let n2 = n * n;
    let n3 = n2 * n;
    let n4 = n3 * n;
    [
        n * evaluate_polynomial(&[1.0 / 2.0, -2.0 / 3.0, 37.0 / 96.0, -1.0 / 360.0], n),
        n2 * evaluate_polynomial(&[1.0 / 48.0, 1.0 / 15.0, -437.0 / 1440.0], n),
        n3 * evaluate_polynomial(&[17.0 / 480.0, -37.0 / 840.0], n),
        n4 * 4397.0 / 161_280.0,
    ]
}

/// The coefficients `A`, `B`, `C` and `D` of the series from geodetic to
/// conformal latitude, in powers of `sin²φ`.
/// * `e2` - the square of the Eccentricity of the ellipsoid.
#[must_use]
pub fn evaluate_coeffs_conformal(e2: f64) -> [f64; 4] {
    let e4 = e2 * e2;
    let e6 = e4 * e2;
    let e8 = e6 * e2;
    [
        e2,
        (5.0 * e4 - e6) / 6.0,
        (104.0 * e6 - 45.0 * e8) / 120.0,
        1237.0 * e8 / 1260.0,
    ]
}

/// The coefficients `A*`, `B*`, `C*` and `D*` of the series from conformal
/// to geodetic latitude, in powers of `sin²φ*`.
/// * `e2` - the square of the Eccentricity of the ellipsoid.
#[must_use]
pub fn evaluate_coeffs_geodetic(e2: f64) -> [f64; 4] {
    let e4 = e2 * e2;
    let e6 = e4 * e2;
    let e8 = e6 * e2;
    [
        e2 + e4 + e6 + e8,
        -(7.0 * e4 + 17.0 * e6 + 30.0 * e8) / 6.0,
        (224.0 * e6 + 889.0 * e8) / 120.0,
        -4279.0 * e8 / 1260.0,
    ]
}

/// Evaluate the Krüger series:
///   `ξ_sum = sum(c[k] * sin(2k * ξ) * cosh(2k * η), k, 1, 4)`
///   `η_sum = sum(c[k] * cos(2k * ξ) * sinh(2k * η), k, 1, 4)`
/// * `coeffs` - the `β` or `δ` coefficients.
/// * `xi`, `eta` - the coordinates on the conformal sphere or plane.
///
/// returns the sums `(ξ_sum, η_sum)`.
#[must_use]
pub fn sum_krueger_series(coeffs: &[f64; 4], xi: f64, eta: f64) -> (f64, f64) {
    let mut xi_sum = 0.0;
    let mut eta_sum = 0.0;
    let mut k = 2.0;
    for c in coeffs {
        xi_sum += c * libm::sin(k * xi) * libm::cosh(k * eta);
        eta_sum += c * libm::cos(k * xi) * libm::sinh(k * eta);
        k += 2.0;
    }
    (xi_sum, eta_sum)
}
