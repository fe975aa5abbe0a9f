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

//! The tolerance module contains the comparison contract shared by the
//! scalar value types.
//!
//! Two values are equal when their difference is not greater than a
//! tolerance and one is less than another only when it is smaller by more
//! than the tolerance. Each type has a compile-time `DEFAULT_TOLERANCE`, used
//! by `PartialEq` and `PartialOrd`; a different tolerance can be passed
//! explicitly to [`Tolerant::compare_within`] and [`Tolerant::eq_within`].
//!
//! Note: tolerant equality is not transitive, so none of the types implement
//! `Eq`, `Ord` or `Hash`.

use core::cmp::Ordering;

/// A value that is compared within a tolerance.
pub trait Tolerant {
    /// The tolerance used by the `PartialEq` and `PartialOrd` operators.
    const DEFAULT_TOLERANCE: f64;

    /// Compare with another value within the given tolerance.
    /// * `other` - the value to compare with.
    /// * `tolerance` - the maximum difference between equal values.
    #[must_use]
    fn compare_within(&self, other: &Self, tolerance: f64) -> Ordering;

    /// Test whether another value is equal within the given tolerance.
    /// * `other` - the value to compare with.
    /// * `tolerance` - the maximum difference between equal values.
    #[must_use]
    fn eq_within(&self, other: &Self, tolerance: f64) -> bool {
        self.compare_within(other, tolerance) == Ordering::Equal
    }
}

/// Compare a pair of values within a tolerance.
/// * `a`, `b` - the values to compare.
/// * `tolerance` - the maximum difference between equal values.
///
/// returns `Equal` if `|a - b| <= tolerance`, otherwise `Less` or `Greater`.
#[must_use]
pub fn compare_values(a: f64, b: f64, tolerance: f64) -> Ordering {
    if a - b > tolerance {
        Ordering::Greater
    } else if b - a > tolerance {
        Ordering::Less
    } else {
        Ordering::Equal
    }
}

/// Implement `PartialEq` and `PartialOrd` for a `Tolerant` type using its
/// `DEFAULT_TOLERANCE`.
macro_rules! impl_tolerant_comparison {
    ($type:ty) => {
        impl PartialEq for $type {
            fn eq(&self, other: &Self) -> bool {
                $crate::tolerance::Tolerant::eq_within(
                    self,
                    other,
                    <$type as $crate::tolerance::Tolerant>::DEFAULT_TOLERANCE,
                )
            }
        }

        impl PartialOrd for $type {
            fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
                Some($crate::tolerance::Tolerant::compare_within(
                    self,
                    other,
                    <$type as $crate::tolerance::Tolerant>::DEFAULT_TOLERANCE,
                ))
            }
        }
    };
}

pub(crate) use impl_tolerant_comparison;
