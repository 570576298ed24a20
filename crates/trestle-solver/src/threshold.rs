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

//! The strategy threshold.
//!
//! Escorting a hiker of speed $v$ individually costs the lead's return trip
//! plus $1/v$. Routing the same hiker through a slowest-pair round costs the
//! fixed round overhead $1/v_1 + 2/v_2$ spread over two hikers. Equating the
//! two marginal costs and solving for $v$ gives the break-even speed
//!
//! $$v_t = \frac{1}{2/v_2 - 1/v_1}$$
//!
//! where $v_1$ is the fastest and $v_2$ the second-fastest speed. Hikers
//! strictly slower than $v_t$ are cheaper to move in pairs; everyone else is
//! cheaper to escort individually. Since $v_1 \ge v_2$ implies $v_t \le v_2$,
//! the lead and second hiker themselves are never counted as slow.

use trestle_core::num::CrossingFloat;
use trestle_model::hiker::Hiker;

/// Computes the speed below which the slowest-pair strategy beats the
/// individual escort.
///
/// # Examples
///
/// ```rust
/// use trestle_solver::threshold::threshold_speed;
///
/// // Lead at 100, second at 50: break-even at 1 / (2/50 - 1/100).
/// let threshold = threshold_speed(100.0_f64, 50.0);
/// assert!((threshold - 100.0 / 3.0).abs() < 1e-12);
/// ```
#[inline]
pub fn threshold_speed<T>(fastest: T, second: T) -> T
where
    T: CrossingFloat,
{
    let two = T::one() + T::one();
    T::one() / (two / second - T::one() / fastest)
}

/// Counts the hikers strictly slower than the threshold speed.
///
/// The roster is sorted descending by speed, so the slow hikers form a
/// suffix; a binary search finds where it starts.
///
/// # Examples
///
/// ```rust
/// use trestle_model::hiker::Hiker;
/// use trestle_solver::threshold::count_slower_than;
///
/// let hikers = vec![
///     Hiker::new("A", 100.0_f64).unwrap(),
///     Hiker::new("B", 50.0).unwrap(),
///     Hiker::new("C", 20.0).unwrap(),
///     Hiker::new("D", 10.0).unwrap(),
/// ];
/// assert_eq!(count_slower_than(&hikers, 100.0 / 3.0), 2);
/// ```
#[inline]
pub fn count_slower_than<T>(hikers: &[Hiker<T>], threshold: T) -> usize
where
    T: CrossingFloat,
{
    debug_assert!(
        hikers.windows(2).all(|w| w[0].speed() >= w[1].speed()),
        "called `count_slower_than` with an unsorted roster"
    );

    let first_slower = hikers.partition_point(|h| h.speed() >= threshold);
    hikers.len() - first_slower
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hiker(name: &str, speed: f64) -> Hiker<f64> {
        Hiker::new(name, speed).expect("valid hiker")
    }

    #[test]
    fn test_threshold_speed_value() {
        // 1 / (2/50 - 1/100) = 1 / 0.03
        let threshold: f64 = threshold_speed(100.0, 50.0);
        assert!((threshold - 1.0 / 0.03).abs() < 1e-9);
    }

    #[test]
    fn test_threshold_never_exceeds_second_speed() {
        for (fastest, second) in [(100.0, 50.0), (100.0, 100.0), (25.0, 10.0), (3.0, 2.5)] {
            assert!(threshold_speed(fastest, second) <= second + 1e-12);
        }
    }

    #[test]
    fn test_count_slower_than_counts_the_suffix() {
        let hikers = vec![
            hiker("A", 100.0),
            hiker("B", 50.0),
            hiker("C", 20.0),
            hiker("D", 10.0),
        ];
        assert_eq!(count_slower_than(&hikers, 100.0 / 3.0), 2);
        assert_eq!(count_slower_than(&hikers, 5.0), 0);
        assert_eq!(count_slower_than(&hikers, 500.0), 4);
    }

    #[test]
    fn test_count_slower_than_is_strict() {
        let hikers = vec![hiker("A", 100.0), hiker("B", 50.0)];
        // Equal speed is not "slower".
        assert_eq!(count_slower_than(&hikers, 50.0), 0);
    }

    #[test]
    fn test_count_slower_than_empty_roster() {
        assert_eq!(count_slower_than::<f64>(&[], 10.0), 0);
    }
}
