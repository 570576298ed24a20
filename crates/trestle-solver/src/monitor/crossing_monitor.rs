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
use trestle_model::{bridge::Bridge, hiker::Hiker, index::BridgeIndex};

/// One recorded step of a crossing plan.
///
/// The owned form of the events reported through `CrossingMonitor`, suitable
/// for collecting and asserting on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CrossingStep {
    /// One or two hikers carry the torch to the far side.
    Cross {
        /// The first hiker crossing.
        first: String,
        /// The second hiker, if two cross together.
        second: Option<String>,
    },
    /// A hiker walks the torch back.
    Return {
        /// The returning hiker.
        hiker: String,
    },
}

impl std::fmt::Display for CrossingStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CrossingStep::Cross {
                first,
                second: Some(second),
            } => write!(f, "{},{} cross", first, second),
            CrossingStep::Cross {
                first,
                second: None,
            } => write!(f, "{} crosses", first),
            CrossingStep::Return { hiker } => write!(f, "{} returns", hiker),
        }
    }
}

/// Observer for the solver's per-bridge crossing plan.
///
/// All callbacks are invoked in plan order. Monitors must not influence the
/// computation; they only observe it.
pub trait CrossingMonitor<T>
where
    T: CrossingFloat,
{
    fn name(&self) -> &str;
    fn on_enter_bridge(&mut self, index: BridgeIndex, bridge: &Bridge<T>);
    fn on_cache_hit(&mut self, group_size: usize, bridge: &Bridge<T>);
    fn on_cross(&mut self, first: &Hiker<T>, second: Option<&Hiker<T>>);
    fn on_return(&mut self, hiker: &Hiker<T>);
    fn on_total(&mut self, total_time: T);
}

impl<T> std::fmt::Debug for dyn CrossingMonitor<T>
where
    T: CrossingFloat,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CrossingMonitor({})", self.name())
    }
}

impl<T> std::fmt::Display for dyn CrossingMonitor<T>
where
    T: CrossingFloat,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CrossingMonitor({})", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_display() {
        let pair = CrossingStep::Cross {
            first: "A".to_owned(),
            second: Some("B".to_owned()),
        };
        assert_eq!(format!("{}", pair), "A,B cross");

        let solo = CrossingStep::Cross {
            first: "A".to_owned(),
            second: None,
        };
        assert_eq!(format!("{}", solo), "A crosses");

        let back = CrossingStep::Return {
            hiker: "A".to_owned(),
        };
        assert_eq!(format!("{}", back), "A returns");
    }
}
