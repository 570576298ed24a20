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

/// Statistics collected during a solve run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveStatistics {
    /// Number of bridges processed.
    pub bridges_crossed: usize,
    /// Number of bridges answered from the per-unit-time cache.
    pub cache_hits: usize,
    /// Number of party sizes computed fresh.
    pub computed_groups: usize,
    /// Total duration of the solve run.
    pub solve_duration: std::time::Duration,
}

impl std::fmt::Display for SolveStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Solve Statistics:")?;
        writeln!(f, "  Bridges Crossed: {}", self.bridges_crossed)?;
        writeln!(f, "  Cache Hits: {}", self.cache_hits)?;
        writeln!(f, "  Computed Groups: {}", self.computed_groups)?;
        writeln!(
            f,
            "  Solve Duration (secs): {:.6}",
            self.solve_duration.as_secs_f64()
        )
    }
}

/// Builder for `SolveStatistics`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveStatisticsBuilder {
    bridges_crossed: usize,
    cache_hits: usize,
    computed_groups: usize,
    solve_duration: std::time::Duration,
}

impl Default for SolveStatisticsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SolveStatisticsBuilder {
    /// Creates a new `SolveStatisticsBuilder` with default values.
    #[inline]
    pub fn new() -> Self {
        Self {
            bridges_crossed: 0,
            cache_hits: 0,
            computed_groups: 0,
            solve_duration: std::time::Duration::ZERO,
        }
    }

    /// Sets the number of bridges processed.
    #[inline]
    pub fn bridges_crossed(mut self, bridges_crossed: usize) -> Self {
        self.bridges_crossed = bridges_crossed;
        self
    }

    /// Sets the number of cache hits.
    #[inline]
    pub fn cache_hits(mut self, cache_hits: usize) -> Self {
        self.cache_hits = cache_hits;
        self
    }

    /// Sets the number of freshly computed party sizes.
    #[inline]
    pub fn computed_groups(mut self, computed_groups: usize) -> Self {
        self.computed_groups = computed_groups;
        self
    }

    /// Sets the total solve duration.
    #[inline]
    pub fn solve_duration(mut self, solve_duration: std::time::Duration) -> Self {
        self.solve_duration = solve_duration;
        self
    }

    /// Builds the `SolveStatistics` instance.
    #[inline]
    pub fn build(self) -> SolveStatistics {
        SolveStatistics {
            bridges_crossed: self.bridges_crossed,
            cache_hits: self.cache_hits,
            computed_groups: self.computed_groups,
            solve_duration: self.solve_duration,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn builder_constructs_expected_struct() {
        let stats = SolveStatisticsBuilder::new()
            .bridges_crossed(3)
            .cache_hits(1)
            .computed_groups(2)
            .solve_duration(Duration::from_millis(12))
            .build();

        assert_eq!(stats.bridges_crossed, 3);
        assert_eq!(stats.cache_hits, 1);
        assert_eq!(stats.computed_groups, 2);
        assert_eq!(stats.solve_duration, Duration::from_millis(12));
    }

    #[test]
    fn test_display_formats_all_fields() {
        let stats = SolveStatisticsBuilder::new()
            .bridges_crossed(2)
            .cache_hits(1)
            .computed_groups(1)
            .build();
        let formatted = format!("{}", stats);
        assert!(formatted.contains("Bridges Crossed: 2"));
        assert!(formatted.contains("Cache Hits: 1"));
        assert!(formatted.contains("Computed Groups: 1"));
    }
}
