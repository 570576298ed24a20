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

use crate::hiker::Hiker;
use trestle_core::num::CrossingFloat;

/// A single narrow bridge along the trail.
///
/// A bridge carries two hiker rosters:
///
/// - `arrivals`: the hikers newly introduced at this bridge, in input order.
///   Needed to serialize a case back to its textual form without duplicating
///   hikers that were already listed at an earlier bridge.
/// - `joining`: the accumulated joining roster — every hiker who has joined
///   the party at this or any earlier bridge — sorted descending by speed.
///   This is what the solver consumes.
///
/// Bridges are created by `ExpeditionBuilder`, which validates the length and
/// maintains both rosters; they are immutable afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Bridge<T> {
    length: T,
    arrivals: Vec<Hiker<T>>,
    joining: Vec<Hiker<T>>,
}

impl<T> Bridge<T>
where
    T: CrossingFloat,
{
    /// Invariant: `length` is validated positive by the builder and `joining`
    /// is sorted descending by speed.
    pub(crate) fn new(length: T, arrivals: Vec<Hiker<T>>, joining: Vec<Hiker<T>>) -> Self {
        debug_assert!(
            length.is_finite() && length > T::zero(),
            "called `Bridge::new` with unvalidated length {}",
            length
        );
        debug_assert!(
            joining.windows(2).all(|w| w[0].speed() >= w[1].speed()),
            "called `Bridge::new` with an unsorted joining roster"
        );

        Self {
            length,
            arrivals,
            joining,
        }
    }

    /// Returns the bridge length.
    #[inline]
    pub fn length(&self) -> T {
        self.length
    }

    /// Returns the hikers newly introduced at this bridge, in input order.
    #[inline]
    pub fn arrivals(&self) -> &[Hiker<T>] {
        &self.arrivals
    }

    /// Returns the accumulated joining roster, sorted descending by speed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use trestle_model::expedition::ExpeditionBuilder;
    /// use trestle_model::hiker::Hiker;
    ///
    /// let mut builder = ExpeditionBuilder::new();
    /// builder.add_hiker(Hiker::new("A", 100.0).unwrap());
    /// builder.add_bridge(250.0, vec![Hiker::new("E", 2.5).unwrap()]).unwrap();
    /// builder.add_bridge(150.0, vec![Hiker::new("F", 25.0).unwrap()]).unwrap();
    /// let expedition = builder.build();
    ///
    /// // The second bridge accumulates E from the first.
    /// let joined: Vec<&str> = expedition.bridges()[1]
    ///     .joining_hikers()
    ///     .iter()
    ///     .map(|h| h.name())
    ///     .collect();
    /// assert_eq!(joined, ["F", "E"]);
    /// ```
    #[inline]
    pub fn joining_hikers(&self) -> &[Hiker<T>] {
        &self.joining
    }

    /// Returns the number of hikers in the accumulated joining roster.
    #[inline]
    pub fn num_joining(&self) -> usize {
        self.joining.len()
    }
}

impl<T> std::fmt::Display for Bridge<T>
where
    T: CrossingFloat,
{
    /// Formats the bridge as a compact segment: the length, then the
    /// accumulated joining roster.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.length)?;
        for hiker in &self.joining {
            write!(f, ",{}", hiker)?;
        }
        Ok(())
    }
}
