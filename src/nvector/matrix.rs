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

//! A minimal 3x3 matrix for rotating N-vectors between Earth axis frames.

/// A 3x3 matrix of row vectors.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Matrix3([[f64; 3]; 3]);

impl Matrix3 {
    /// Construct a `Matrix3` from its rows.
    #[must_use]
    pub const fn new(rows: [[f64; 3]; 3]) -> Self {
        Self(rows)
    }

    /// The rows of the matrix.
    #[must_use]
    pub const fn rows(&self) -> &[[f64; 3]; 3] {
        &self.0
    }

    /// The transpose of the matrix.
    /// # Examples
    /// ```
    /// use geospatial::nvector::matrix::Matrix3;
    ///
    /// let m = Matrix3::new([[1.0, 2.0, 0.0], [3.0, 4.0, 0.0], [0.0, 0.0, 1.0]]);
    /// assert_eq!(&[[1.0, 3.0, 0.0], [2.0, 4.0, 0.0], [0.0, 0.0, 1.0]], m.transposed().rows());
    /// ```
    #[must_use]
    pub fn transposed(&self) -> Self {
        let mut rows = [[0.0; 3]; 3];
        for (i, row) in self.0.iter().enumerate() {
            for (j, value) in row.iter().enumerate() {
                rows[j][i] = *value;
            }
        }
        Self(rows)
    }

    /// Multiply a column vector by the matrix.
    #[must_use]
    pub fn multiply(&self, v: &[f64; 3]) -> [f64; 3] {
        self.0
            .map(|row| libm::fma(row[0], v[0], libm::fma(row[1], v[1], row[2] * v[2])))
    }
}

/// Rotates vectors from the frame with the z axis through the North pole
/// to the frame with the x axis through the North pole.
pub const EARTH_AXIS: Matrix3 = Matrix3([[0.0, 0.0, 1.0], [0.0, 1.0, 0.0], [-1.0, 0.0, 0.0]]);
