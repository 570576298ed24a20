// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Crossing Numeric Trait
//!
//! Unified numeric bounds for the model and solver crates. `CrossingFloat`
//! specifies the floating-point capabilities required by the crossing-time
//! computation, including intrinsic traits (`Float`), conversions from
//! primitives, string parsing for the instance loaders, and formatting for
//! diagnostics.
//!
//! ## Motivation
//!
//! Speeds and crossing times are reals, and the whole pipeline works in the
//! reciprocal-speed domain (time per unit length). Keeping the code generic
//! over the float type collects the necessary bounds into a single alias,
//! simplifying generic signatures across crates. In practice `f64` is used;
//! `f32` satisfies the alias as well.

use num_traits::{Float, FromPrimitive};
use std::fmt::{Debug, Display};
use std::str::FromStr;

/// A trait alias for floating-point types usable in the crossing-time solver.
///
/// # Examples
///
/// ```rust
/// use trestle_core::num::CrossingFloat;
///
/// fn per_unit_time<T: CrossingFloat>(speed: T) -> T {
///     T::one() / speed
/// }
///
/// assert_eq!(per_unit_time(100.0_f64), 0.01);
/// ```
pub trait CrossingFloat:
    Float + FromPrimitive + FromStr + Display + Debug + Send + Sync + 'static
{
}

impl<T> CrossingFloat for T where
    T: Float + FromPrimitive + FromStr + Display + Debug + Send + Sync + 'static
{
}

/// Checks two floating-point values for equality within an absolute tolerance.
///
/// Crossing times are sums of short chains of reciprocals, so a small absolute
/// tolerance is sufficient; no relative scaling is applied.
///
/// # Examples
///
/// ```rust
/// use trestle_core::num::approx_eq;
///
/// assert!(approx_eq(0.1 + 0.2, 0.3, 1e-9));
/// assert!(!approx_eq(1.0, 1.1, 1e-9));
/// ```
#[inline]
pub fn approx_eq<T: Float>(lhs: T, rhs: T, tolerance: T) -> bool {
    (lhs - rhs).abs() <= tolerance
}

/// The default absolute tolerance used when comparing computed crossing times.
pub const DEFAULT_TOLERANCE: f64 = 1e-9;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_approx_eq_within_tolerance() {
        assert!(approx_eq(1.0, 1.0 + 1e-12, 1e-9));
        assert!(approx_eq(245.0, 245.0, DEFAULT_TOLERANCE));
    }

    #[test]
    fn test_approx_eq_outside_tolerance() {
        assert!(!approx_eq(1.0, 1.0001, 1e-9));
        assert!(!approx_eq(-1.0, 1.0, 1e-9));
    }

    #[test]
    fn test_crossing_float_is_satisfied_by_std_floats() {
        fn assert_crossing_float<T: CrossingFloat>() {}
        assert_crossing_float::<f32>();
        assert_crossing_float::<f64>();
    }
}
