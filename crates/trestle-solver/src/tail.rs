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

use trestle_core::num::CrossingFloat;
use trestle_model::hiker::Hiker;

/// Merge-style extraction of the globally slowest hikers from two rosters.
///
/// Both rosters are sorted descending by speed, so their slowest members sit
/// at the back. Like merging two sorted arrays from the tail end, each
/// extraction compares the two back elements and consumes the slower one —
/// but nothing is physically removed: two cursors track how much of each
/// roster is still unconsumed, keeping extraction O(1) without reallocation.
///
/// # Examples
///
/// ```rust
/// use trestle_model::hiker::Hiker;
/// use trestle_solver::tail::TailMerge;
///
/// let party = vec![
///     Hiker::new("A", 100.0_f64).unwrap(),
///     Hiker::new("D", 10.0).unwrap(),
/// ];
/// let joining = vec![Hiker::new("E", 2.5).unwrap()];
///
/// let mut tails = TailMerge::new(&party, &joining);
/// assert_eq!(tails.next_slowest().name(), "E");
/// assert_eq!(tails.next_slowest().name(), "D");
/// assert_eq!(tails.hikers_remaining(), 1);
/// assert_eq!(tails.joining_remaining(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct TailMerge<'a, T> {
    hikers: &'a [Hiker<T>],
    joining: &'a [Hiker<T>],
    /// Elements `hikers[..hikers_remaining]` are still unconsumed.
    hikers_remaining: usize,
    /// Elements `joining[..joining_remaining]` are still unconsumed.
    joining_remaining: usize,
}

impl<'a, T> TailMerge<'a, T>
where
    T: CrossingFloat,
{
    /// Creates a new `TailMerge` over two descending-sorted rosters.
    #[inline]
    pub fn new(hikers: &'a [Hiker<T>], joining: &'a [Hiker<T>]) -> Self {
        debug_assert!(
            hikers.windows(2).all(|w| w[0].speed() >= w[1].speed()),
            "called `TailMerge::new` with an unsorted original roster"
        );
        debug_assert!(
            joining.windows(2).all(|w| w[0].speed() >= w[1].speed()),
            "called `TailMerge::new` with an unsorted joining roster"
        );

        Self {
            hikers,
            joining,
            hikers_remaining: hikers.len(),
            joining_remaining: joining.len(),
        }
    }

    /// Extracts the slowest not-yet-consumed hiker across both rosters.
    ///
    /// # Panics
    ///
    /// Panics if both rosters are exhausted.
    pub fn next_slowest(&mut self) -> &'a Hiker<T> {
        match (self.hikers_remaining, self.joining_remaining) {
            (0, 0) => panic!("called `TailMerge::next_slowest` on an exhausted merge"),
            (_, 0) => self.take_hiker(),
            (0, _) => self.take_joining(),
            (h, j) => {
                if self.hikers[h - 1].speed() < self.joining[j - 1].speed() {
                    self.take_hiker()
                } else {
                    self.take_joining()
                }
            }
        }
    }

    /// Returns how many original hikers are still unconsumed.
    #[inline]
    pub fn hikers_remaining(&self) -> usize {
        self.hikers_remaining
    }

    /// Returns how many joining hikers are still unconsumed.
    #[inline]
    pub fn joining_remaining(&self) -> usize {
        self.joining_remaining
    }

    #[inline]
    fn take_hiker(&mut self) -> &'a Hiker<T> {
        self.hikers_remaining -= 1;
        &self.hikers[self.hikers_remaining]
    }

    #[inline]
    fn take_joining(&mut self) -> &'a Hiker<T> {
        self.joining_remaining -= 1;
        &self.joining[self.joining_remaining]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster(entries: &[(&str, f64)]) -> Vec<Hiker<f64>> {
        entries
            .iter()
            .map(|(name, speed)| Hiker::new(*name, *speed).expect("valid hiker"))
            .collect()
    }

    #[test]
    fn test_extracts_in_ascending_speed_order() {
        let hikers = roster(&[("A", 100.0), ("C", 20.0), ("D", 10.0)]);
        let joining = roster(&[("F", 25.0), ("G", 15.0), ("E", 2.5)]);
        let mut tails = TailMerge::new(&hikers, &joining);

        let order: Vec<&str> = (0..6).map(|_| tails.next_slowest().name()).collect();
        assert_eq!(order, ["E", "D", "G", "C", "F", "A"]);
        assert_eq!(tails.hikers_remaining(), 0);
        assert_eq!(tails.joining_remaining(), 0);
    }

    #[test]
    fn test_consumes_single_roster_when_other_is_empty() {
        let hikers = roster(&[("A", 100.0), ("B", 50.0)]);
        let mut tails = TailMerge::new(&hikers, &[]);

        assert_eq!(tails.next_slowest().name(), "B");
        assert_eq!(tails.next_slowest().name(), "A");
        assert_eq!(tails.hikers_remaining(), 0);
    }

    #[test]
    fn test_cursors_track_partial_consumption() {
        let hikers = roster(&[("A", 100.0), ("D", 10.0)]);
        let joining = roster(&[("E", 2.5)]);
        let mut tails = TailMerge::new(&hikers, &joining);

        tails.next_slowest(); // E
        assert_eq!(tails.hikers_remaining(), 2);
        assert_eq!(tails.joining_remaining(), 0);

        tails.next_slowest(); // D
        assert_eq!(tails.hikers_remaining(), 1);
    }

    #[test]
    #[should_panic(expected = "exhausted")]
    fn test_panics_when_exhausted() {
        let hikers = roster(&[("A", 100.0)]);
        let mut tails = TailMerge::new(&hikers, &[]);
        tails.next_slowest();
        tails.next_slowest();
    }
}
