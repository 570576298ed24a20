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

/// A monitor that prints every step to standard output, one line per event.
///
/// This is the verbose mode of the command-line tool: each bridge is
/// announced with its length, cache hits are reported, and every crossing and
/// torch return is narrated by hiker name.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct NarrationMonitor;

impl NarrationMonitor {
    /// Creates a new `NarrationMonitor`.
    #[inline]
    pub fn new() -> Self {
        Self
    }
}

impl<T> CrossingMonitor<T> for NarrationMonitor
where
    T: CrossingFloat,
{
    fn name(&self) -> &str {
        "NarrationMonitor"
    }

    fn on_enter_bridge(&mut self, _index: BridgeIndex, bridge: &Bridge<T>) {
        println!("Bridge ({})", bridge.length());
    }

    fn on_cache_hit(&mut self, group_size: usize, bridge: &Bridge<T>) {
        println!(
            "Hit cache for hiker count {} at bridge with length {}",
            group_size,
            bridge.length()
        );
    }

    fn on_cross(&mut self, first: &Hiker<T>, second: Option<&Hiker<T>>) {
        match second {
            Some(second) => println!("{},{} cross", first.name(), second.name()),
            None => println!("{} crosses", first.name()),
        }
    }

    fn on_return(&mut self, hiker: &Hiker<T>) {
        println!("{} returns", hiker.name());
    }

    fn on_total(&mut self, _total_time: T) {}
}
