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

//! # Crossing-Time Solver
//!
//! Computes the minimum total time for a party to cross a sequence of
//! bridges with one shared torch that must be walked back after every
//! crossing except the final one.
//!
//! ## Per-bridge cost
//!
//! Every bridge is reduced to a dimensionless per-unit-time cost for the
//! party crossing it, then scaled by the bridge length. The cost for a given
//! party size is memoized in a `ResultCache` scoped to the run: the roster
//! only grows along the trail, so a repeated size means a repeated roster.
//!
//! ## Party cost
//!
//! With a single original hiker, the lead escorts every joining hiker across
//! one at a time (joining hikers never carry the torch back), returning after
//! each crossing except the last.
//!
//! With two or more original hikers, each hiker slower than the threshold
//! speed (see `threshold`) is cheaper to move via the slowest-pair shuttle:
//! lead and second cross, lead returns, the two slowest remaining cross
//! together, second returns. Slow hikers are paired off two per round, drawn
//! from the merged tails of both rosters; everyone left over — an odd slow
//! hiker included — is escorted individually by the lead. Finally lead and
//! second cross together with no return.

use crate::{
    cache::ResultCache,
    monitor::{crossing_monitor::CrossingMonitor, no_op::NoOperationMonitor},
    outcome::SolveOutcome,
    stats::SolveStatisticsBuilder,
    tail::TailMerge,
    threshold::{count_slower_than, threshold_speed},
};
use trestle_core::num::CrossingFloat;
use trestle_model::{expedition::Expedition, hiker::Hiker, index::BridgeIndex};

/// The crossing-time solver.
///
/// The solver itself is stateless; every call to `solve` scopes a fresh
/// `ResultCache` to that run, so independent expeditions can be solved from
/// different threads with separate solver values.
///
/// # Examples
///
/// ```rust
/// use trestle_model::compact;
/// use trestle_solver::solver::CrossingSolver;
///
/// let expedition = compact::parse::<f64>("A 100,B 50,C 20,D 10;100").unwrap();
/// let outcome = CrossingSolver::new().solve(&expedition);
/// assert!((outcome.total_time() - 17.0).abs() < 1e-9);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct CrossingSolver;

impl CrossingSolver {
    /// Creates a new `CrossingSolver`.
    #[inline]
    pub fn new() -> Self {
        Self
    }

    /// Solves an expedition, discarding the crossing-step trace.
    #[inline]
    pub fn solve<T>(&self, expedition: &Expedition<T>) -> SolveOutcome<T>
    where
        T: CrossingFloat,
    {
        let mut monitor = NoOperationMonitor::new();
        self.solve_with_monitor(expedition, &mut monitor)
    }

    /// Solves an expedition, reporting every crossing step to `monitor`.
    ///
    /// Returns a total time of `-1` if the expedition has no original hikers;
    /// joining hikers alone cannot cross because they never carry the torch
    /// back.
    pub fn solve_with_monitor<T, M>(
        &self,
        expedition: &Expedition<T>,
        monitor: &mut M,
    ) -> SolveOutcome<T>
    where
        T: CrossingFloat,
        M: CrossingMonitor<T> + ?Sized,
    {
        let start_time = std::time::Instant::now();

        if expedition.hikers().is_empty() {
            let statistics = SolveStatisticsBuilder::new()
                .solve_duration(start_time.elapsed())
                .build();
            return SolveOutcome::new(-T::one(), statistics);
        }

        let mut cache = ResultCache::new();
        let mut cache_hits = 0usize;
        let mut computed_groups = 0usize;
        let mut total_time = T::zero();

        for (i, bridge) in expedition.bridges().iter().enumerate() {
            let index = BridgeIndex::new(i);
            monitor.on_enter_bridge(index, bridge);

            let group_size = expedition.group_size(index);
            let per_unit_time = match cache.get(group_size) {
                Some(per_unit_time) => {
                    cache_hits += 1;
                    monitor.on_cache_hit(group_size, bridge);
                    per_unit_time
                }
                None => {
                    let per_unit_time = self.group_per_unit_time(
                        expedition.hikers(),
                        bridge.joining_hikers(),
                        monitor,
                    );
                    cache.insert(group_size, per_unit_time);
                    computed_groups += 1;
                    per_unit_time
                }
            };

            total_time = total_time + per_unit_time * bridge.length();
        }

        monitor.on_total(total_time);

        let statistics = SolveStatisticsBuilder::new()
            .bridges_crossed(expedition.num_bridges())
            .cache_hits(cache_hits)
            .computed_groups(computed_groups)
            .solve_duration(start_time.elapsed())
            .build();
        SolveOutcome::new(total_time, statistics)
    }

    /// Computes the per-unit-time cost for one party to cross one bridge.
    ///
    /// `hikers` is the original roster, `joining` the accumulated joining
    /// roster; both sorted descending by speed. Joining hikers never carry
    /// the torch back.
    ///
    /// # Panics
    ///
    /// Panics if `hikers` is empty. An empty original roster is rejected at
    /// the `solve` level; reaching this function without a lead hiker is a
    /// caller bug.
    pub fn group_per_unit_time<T, M>(
        &self,
        hikers: &[Hiker<T>],
        joining: &[Hiker<T>],
        monitor: &mut M,
    ) -> T
    where
        T: CrossingFloat,
        M: CrossingMonitor<T> + ?Sized,
    {
        assert!(
            !hikers.is_empty(),
            "called `CrossingSolver::group_per_unit_time` with an empty original roster"
        );

        let lead = &hikers[0];
        if hikers.len() == 1 {
            if !joining.is_empty() {
                return escort_cost(lead, joining, false, monitor);
            }
            monitor.on_cross(lead, None);
            return lead.per_unit_time();
        }

        let second = &hikers[1];
        let threshold = threshold_speed(lead.speed(), second.speed());
        let slow_count = count_slower_than(hikers, threshold) + count_slower_than(joining, threshold);
        let pair_rounds = slow_count / 2;

        let mut tails = TailMerge::new(hikers, joining);
        let mut per_unit_time = T::zero();

        // Lead and second cross, lead returns, second returns: the fixed
        // shuttle overhead of one slowest-pair round.
        let round_overhead = lead.per_unit_time() + second.per_unit_time() + second.per_unit_time();
        for _ in 0..pair_rounds {
            let slowest = tails.next_slowest();
            let next_slowest = tails.next_slowest();
            per_unit_time = per_unit_time + round_overhead + slowest.per_unit_time();

            monitor.on_cross(lead, Some(second));
            monitor.on_return(lead);
            monitor.on_cross(slowest, Some(next_slowest));
            monitor.on_return(second);
        }

        // Remaining joining hikers are escorted one by one, lead returning
        // after each; the final lead+second crossing below ends the plan.
        let joining_left = tails.joining_remaining();
        if joining_left > 0 {
            per_unit_time =
                per_unit_time + escort_cost(lead, &joining[..joining_left], true, monitor);
        }

        // Remaining original hikers beyond lead and second, same treatment.
        let hikers_left = tails.hikers_remaining();
        if hikers_left > 2 {
            per_unit_time =
                per_unit_time + escort_cost(lead, &hikers[2..hikers_left], true, monitor);
        }

        per_unit_time = per_unit_time + second.per_unit_time();
        monitor.on_cross(lead, Some(second));
        per_unit_time
    }
}

/// The lead walks each partner across one at a time, slowest first, and
/// carries the torch back after every crossing — except after the last one
/// when `return_after_last` is false.
fn escort_cost<T, M>(
    lead: &Hiker<T>,
    partners: &[Hiker<T>],
    return_after_last: bool,
    monitor: &mut M,
) -> T
where
    T: CrossingFloat,
    M: CrossingMonitor<T> + ?Sized,
{
    debug_assert!(
        !partners.is_empty(),
        "called `escort_cost` with no partners to escort"
    );

    let mut cost = T::zero();
    let mut partners = partners.iter().rev().peekable();
    while let Some(partner) = partners.next() {
        cost = cost + lead.per_unit_time().max(partner.per_unit_time());
        monitor.on_cross(lead, Some(partner));

        if partners.peek().is_some() || return_after_last {
            cost = cost + lead.per_unit_time();
            monitor.on_return(lead);
        }
    }
    cost
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monitor::{crossing_monitor::CrossingStep, recording::RecordingMonitor};
    use trestle_core::num::{approx_eq, DEFAULT_TOLERANCE};
    use trestle_model::{compact, expedition::ExpeditionBuilder};

    fn solve_case(case: &str) -> SolveOutcome<f64> {
        let expedition = compact::parse::<f64>(case).expect("case parses");
        CrossingSolver::new().solve(&expedition)
    }

    fn assert_case(expected: f64, case: &str) {
        let outcome = solve_case(case);
        assert!(
            approx_eq(outcome.total_time(), expected, DEFAULT_TOLERANCE),
            "case '{}': expected {}, was {}",
            case,
            expected,
            outcome.total_time()
        );
    }

    #[test]
    fn test_single_hiker_single_bridge() {
        assert_case(1.0, "A 100;100");
    }

    #[test]
    fn test_pair_crosses_once() {
        assert_case(2.0, "A 100,B 50;100");
    }

    #[test]
    fn test_slowest_pair_beats_individual_escort() {
        // C and D crossing together is the fastest plan.
        assert_case(17.0, "A 100,B 50,C 20,D 10;100");
    }

    #[test]
    fn test_individual_escort_beats_slowest_pair() {
        // A escorts C and D one at a time.
        assert_case(21.0, "A 100,B 25,C 20,D 10;100");
    }

    #[test]
    fn test_canonical_multi_bridge_case() {
        assert_case(245.0, "A 100,B 50,C 20,D 10;100;250,E 2.5;150,F 25,G 15");
    }

    #[test]
    fn test_repeated_group_size_scales_by_length() {
        assert_case(51.0, "A 100,B 50,C 20,D 10;100;200");
    }

    #[test]
    fn test_joining_hiker_faster_than_party() {
        assert_case(55.0, "A 100,B 50,C 20,D 10;100;200,E 200");
    }

    #[test]
    fn test_joining_hiker_above_threshold() {
        assert_case(55.5, "A 100,B 50,C 20,D 10;100;200,E 80");
    }

    #[test]
    fn test_joining_hiker_at_second_speed() {
        assert_case(57.0, "A 100,B 50,C 20,D 10;100;200,E 50");
    }

    #[test]
    fn test_lone_lead_escorts_accumulating_joiners() {
        assert_case(63.0, "A 100;100,B 50,C 20,D 10;200,E 50");
    }

    #[test]
    fn test_single_lead_with_single_joiner_crosses_once() {
        // One trip, no return: bounded by the slower of the two.
        assert_case(2.0, "A 100;100,B 50");
    }

    #[test]
    fn test_empty_roster_returns_sentinel() {
        let mut builder = ExpeditionBuilder::<f64>::new();
        builder.add_bridge(100.0, vec![]).unwrap();
        builder.add_bridge(250.0, vec![]).unwrap();
        let expedition = builder.build();

        let outcome = CrossingSolver::new().solve(&expedition);
        assert_eq!(outcome.total_time(), -1.0);
        assert!(outcome.is_empty_roster());
    }

    #[test]
    fn test_cache_reuse_for_repeated_group_size() {
        let expedition = compact::parse::<f64>("A 100,B 50,C 20,D 10;100;200").unwrap();
        let outcome = CrossingSolver::new().solve(&expedition);

        assert_eq!(outcome.statistics().bridges_crossed, 2);
        assert_eq!(outcome.statistics().computed_groups, 1);
        assert_eq!(outcome.statistics().cache_hits, 1);
    }

    #[test]
    fn test_growing_roster_misses_cache() {
        let expedition = compact::parse::<f64>("A 100,B 50,C 20,D 10;100;200,E 50").unwrap();
        let outcome = CrossingSolver::new().solve(&expedition);

        assert_eq!(outcome.statistics().computed_groups, 2);
        assert_eq!(outcome.statistics().cache_hits, 0);
    }

    #[test]
    fn test_equal_speed_order_does_not_change_time() {
        let solver = CrossingSolver::new();
        let mut monitor = NoOperationMonitor::new();

        let hiker = |name: &str, speed: f64| Hiker::new(name, speed).unwrap();
        let first = vec![
            hiker("A", 100.0),
            hiker("B", 50.0),
            hiker("C", 50.0),
            hiker("D", 10.0),
        ];
        let second = vec![
            hiker("A", 100.0),
            hiker("C", 50.0),
            hiker("B", 50.0),
            hiker("D", 10.0),
        ];
        let joining = vec![hiker("E", 2.5), hiker("F", 2.5)];
        let mut swapped = joining.clone();
        swapped.swap(0, 1);

        let lhs = solver.group_per_unit_time(&first, &joining, &mut monitor);
        let rhs = solver.group_per_unit_time(&second, &swapped, &mut monitor);
        assert!(approx_eq(lhs, rhs, DEFAULT_TOLERANCE));
    }

    #[test]
    fn test_crossing_plan_for_slowest_pair_case() {
        let expedition = compact::parse::<f64>("A 100,B 50,C 20,D 10;100").unwrap();
        let mut monitor = RecordingMonitor::new();
        CrossingSolver::new().solve_with_monitor(&expedition, &mut monitor);

        let cross = |first: &str, second: &str| CrossingStep::Cross {
            first: first.to_owned(),
            second: Some(second.to_owned()),
        };
        let back = |hiker: &str| CrossingStep::Return {
            hiker: hiker.to_owned(),
        };

        assert_eq!(
            monitor.steps(),
            [
                cross("A", "B"),
                back("A"),
                cross("D", "C"),
                back("B"),
                cross("A", "B"),
            ]
        );
    }

    #[test]
    fn test_crossing_plan_for_lone_lead() {
        let expedition = compact::parse::<f64>("A 100;100,B 50,C 20").unwrap();
        let mut monitor = RecordingMonitor::new();
        CrossingSolver::new().solve_with_monitor(&expedition, &mut monitor);

        let cross = |first: &str, second: &str| CrossingStep::Cross {
            first: first.to_owned(),
            second: Some(second.to_owned()),
        };
        let back = |hiker: &str| CrossingStep::Return {
            hiker: hiker.to_owned(),
        };

        // Slowest first, no return after the last partner.
        assert_eq!(
            monitor.steps(),
            [cross("A", "C"), back("A"), cross("A", "B")]
        );
    }

    #[test]
    #[should_panic(expected = "empty original roster")]
    fn test_group_per_unit_time_requires_a_lead() {
        let mut monitor = NoOperationMonitor::new();
        CrossingSolver::new().group_per_unit_time::<f64, _>(&[], &[], &mut monitor);
    }
}
