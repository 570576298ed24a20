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

use crate::monitor::crossing_monitor::{CrossingMonitor, CrossingStep};
use trestle_core::num::CrossingFloat;
use trestle_model::{bridge::Bridge, hiker::Hiker, index::BridgeIndex};

/// A monitor that records every crossing step as an owned `CrossingStep`.
///
/// Useful for asserting on the produced plan in tests, or for capturing the
/// trace of a run without printing it.
///
/// # Examples
///
/// ```rust
/// use trestle_model::compact;
/// use trestle_solver::monitor::recording::RecordingMonitor;
/// use trestle_solver::solver::CrossingSolver;
///
/// let expedition = compact::parse::<f64>("A 100,B 50;100").unwrap();
/// let mut monitor = RecordingMonitor::new();
/// CrossingSolver::new().solve_with_monitor(&expedition, &mut monitor);
/// assert_eq!(monitor.steps().len(), 1); // A and B cross together, once.
/// ```
#[derive(Debug, Clone, Default)]
pub struct RecordingMonitor {
    steps: Vec<CrossingStep>,
}

impl RecordingMonitor {
    /// Creates a new empty `RecordingMonitor`.
    #[inline]
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Returns the recorded steps in plan order.
    #[inline]
    pub fn steps(&self) -> &[CrossingStep] {
        &self.steps
    }

    /// Consumes the monitor and returns the recorded steps.
    #[inline]
    pub fn into_steps(self) -> Vec<CrossingStep> {
        self.steps
    }

    /// Drops all recorded steps.
    #[inline]
    pub fn clear(&mut self) {
        self.steps.clear();
    }
}

impl<T> CrossingMonitor<T> for RecordingMonitor
where
    T: CrossingFloat,
{
    fn name(&self) -> &str {
        "RecordingMonitor"
    }

    fn on_enter_bridge(&mut self, _index: BridgeIndex, _bridge: &Bridge<T>) {}

    fn on_cache_hit(&mut self, _group_size: usize, _bridge: &Bridge<T>) {}

    fn on_cross(&mut self, first: &Hiker<T>, second: Option<&Hiker<T>>) {
        self.steps.push(CrossingStep::Cross {
            first: first.name().to_owned(),
            second: second.map(|h| h.name().to_owned()),
        });
    }

    fn on_return(&mut self, hiker: &Hiker<T>) {
        self.steps.push(CrossingStep::Return {
            hiker: hiker.name().to_owned(),
        });
    }

    fn on_total(&mut self, _total_time: T) {}
}
