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

use crate::stats::SolveStatistics;
use trestle_core::num::CrossingFloat;

/// The result of a solve run: the total crossing time plus run statistics.
///
/// An empty original roster is signalled by a total time of `-1` rather than
/// an error; `is_empty_roster` makes that check explicit.
#[derive(Debug, Clone, PartialEq)]
pub struct SolveOutcome<T> {
    total_time: T,
    statistics: SolveStatistics,
}

impl<T> SolveOutcome<T>
where
    T: CrossingFloat,
{
    /// Constructs a new `SolveOutcome`.
    #[inline]
    pub fn new(total_time: T, statistics: SolveStatistics) -> Self {
        Self {
            total_time,
            statistics,
        }
    }

    /// Returns the total crossing time, or `-1` if the original roster was
    /// empty.
    #[inline]
    pub fn total_time(&self) -> T {
        self.total_time
    }

    /// Checks whether the run was rejected because the original roster was
    /// empty.
    #[inline]
    pub fn is_empty_roster(&self) -> bool {
        self.total_time < T::zero()
    }

    /// Returns the statistics collected during the run.
    #[inline]
    pub fn statistics(&self) -> &SolveStatistics {
        &self.statistics
    }
}

impl<T> std::fmt::Display for SolveOutcome<T>
where
    T: CrossingFloat,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty_roster() {
            write!(f, "No original hikers")
        } else {
            write!(f, "Total crossing time is {} minute(s)", self.total_time)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::SolveStatisticsBuilder;

    #[test]
    fn test_accessors() {
        let outcome = SolveOutcome::new(245.0_f64, SolveStatisticsBuilder::new().build());
        assert_eq!(outcome.total_time(), 245.0);
        assert!(!outcome.is_empty_roster());
        assert_eq!(
            format!("{}", outcome),
            "Total crossing time is 245 minute(s)"
        );
    }

    #[test]
    fn test_empty_roster_sentinel() {
        let outcome = SolveOutcome::new(-1.0_f64, SolveStatisticsBuilder::new().build());
        assert!(outcome.is_empty_roster());
        assert_eq!(format!("{}", outcome), "No original hikers");
    }
}
