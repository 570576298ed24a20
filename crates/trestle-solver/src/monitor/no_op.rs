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

use crate::monitor::crossing_monitor::CrossingMonitor;
use trestle_core::num::CrossingFloat;
use trestle_model::{bridge::Bridge, hiker::Hiker, index::BridgeIndex};

/// A no-operation monitor that implements the `CrossingMonitor` trait but
/// does nothing on any of the events.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct NoOperationMonitor;

impl NoOperationMonitor {
    /// Creates a new `NoOperationMonitor`.
    #[inline(always)]
    pub fn new() -> Self {
        Self
    }
}

impl<T> CrossingMonitor<T> for NoOperationMonitor
where
    T: CrossingFloat,
{
    #[inline(always)]
    fn name(&self) -> &str {
        "NoOperationMonitor"
    }

    #[inline(always)]
    fn on_enter_bridge(&mut self, _index: BridgeIndex, _bridge: &Bridge<T>) {}

    #[inline(always)]
    fn on_cache_hit(&mut self, _group_size: usize, _bridge: &Bridge<T>) {}

    #[inline(always)]
    fn on_cross(&mut self, _first: &Hiker<T>, _second: Option<&Hiker<T>>) {}

    #[inline(always)]
    fn on_return(&mut self, _hiker: &Hiker<T>) {}

    #[inline(always)]
    fn on_total(&mut self, _total_time: T) {}
}
