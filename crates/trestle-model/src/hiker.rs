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

use crate::error::ModelError;
use std::cmp::Ordering;
use trestle_core::num::CrossingFloat;

/// A member of the crossing party.
///
/// A hiker is immutable after construction. The reciprocal of the speed is
/// computed once and cached, because the whole solver works in the
/// per-unit-time domain (time to cover one unit of bridge length).
///
/// # Examples
///
/// ```rust
/// use trestle_model::hiker::Hiker;
///
/// let hiker = Hiker::new("A", 100.0).unwrap();
/// assert_eq!(hiker.name(), "A");
/// assert_eq!(hiker.speed(), 100.0);
/// assert_eq!(hiker.per_unit_time(), 0.01);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Hiker<T> {
    name: String,
    speed: T,
    per_unit_time: T,
}

impl<T> Hiker<T>
where
    T: CrossingFloat,
{
    /// Creates a new `Hiker` with the given name and speed.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::InvalidSpeed` if `speed` is not strictly positive
    /// and finite.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use trestle_model::hiker::Hiker;
    ///
    /// assert!(Hiker::new("A", 100.0).is_ok());
    /// assert!(Hiker::new("A", 0.0).is_err());
    /// assert!(Hiker::new("A", -2.5).is_err());
    /// ```
    pub fn new(name: impl Into<String>, speed: T) -> Result<Self, ModelError> {
        let name = name.into();
        if !(speed.is_finite() && speed > T::zero()) {
            return Err(ModelError::InvalidSpeed {
                name,
                value: speed.to_string(),
            });
        }

        Ok(Self {
            name,
            speed,
            per_unit_time: T::one() / speed,
        })
    }

    /// Returns the hiker's name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the hiker's speed (distance per unit time).
    #[inline]
    pub fn speed(&self) -> T {
        self.speed
    }

    /// Returns the cached reciprocal speed (time per unit length).
    #[inline]
    pub fn per_unit_time(&self) -> T {
        self.per_unit_time
    }
}

impl<T> std::fmt::Display for Hiker<T>
where
    T: CrossingFloat,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.name, self.speed)
    }
}

/// Compares two hikers for descending-speed order.
///
/// Speeds are validated finite at construction, so `partial_cmp` cannot fail;
/// equal speeds compare equal and keep whatever order the sort gives them.
#[inline]
pub fn cmp_speed_descending<T>(lhs: &Hiker<T>, rhs: &Hiker<T>) -> Ordering
where
    T: CrossingFloat,
{
    rhs.speed
        .partial_cmp(&lhs.speed)
        .unwrap_or(Ordering::Equal)
}

/// Sorts a roster descending by speed in place.
#[inline]
pub fn sort_descending_by_speed<T>(hikers: &mut [Hiker<T>])
where
    T: CrossingFloat,
{
    hikers.sort_unstable_by(cmp_speed_descending);
}
