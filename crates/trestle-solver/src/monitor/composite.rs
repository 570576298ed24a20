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

/// A composite monitor that aggregates multiple monitors and forwards events
/// to all of them.
pub struct CompositeMonitor<'a, T> {
    monitors: Vec<Box<dyn CrossingMonitor<T> + 'a>>,
}

impl<T> std::fmt::Debug for CompositeMonitor<'_, T>
where
    T: CrossingFloat,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let monitors_str = self
            .monitors
            .iter()
            .map(|m| m.name())
            .collect::<Vec<&str>>()
            .join(", ");

        f.debug_struct("CompositeMonitor")
            .field("monitors", &monitors_str)
            .finish()
    }
}

impl<T> std::fmt::Display for CompositeMonitor<'_, T>
where
    T: CrossingFloat,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let monitors_str = self
            .monitors
            .iter()
            .map(|m| m.name())
            .collect::<Vec<&str>>()
            .join(", ");

        write!(f, "CompositeMonitor([{}])", monitors_str)
    }
}

impl<T> Default for CompositeMonitor<'_, T>
where
    T: CrossingFloat,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> CompositeMonitor<'a, T>
where
    T: CrossingFloat,
{
    /// Creates a new empty `CompositeMonitor`.
    #[inline]
    pub fn new() -> CompositeMonitor<'a, T> {
        CompositeMonitor {
            monitors: Vec::new(),
        }
    }

    /// Creates a new `CompositeMonitor` with the specified capacity.
    #[inline]
    pub fn with_capacity(capacity: usize) -> CompositeMonitor<'a, T> {
        CompositeMonitor {
            monitors: Vec::with_capacity(capacity),
        }
    }

    /// Adds a new monitor to the composite monitor.
    #[inline]
    pub fn add_monitor<M>(&mut self, monitor: M)
    where
        M: CrossingMonitor<T> + 'a,
    {
        self.monitors.push(Box::new(monitor));
    }

    /// Adds a new boxed monitor to the composite monitor.
    #[inline]
    pub fn add_monitor_boxed(&mut self, monitor: Box<dyn CrossingMonitor<T> + 'a>) {
        self.monitors.push(monitor);
    }

    /// Returns the number of monitors in the composite monitor.
    #[inline]
    pub fn len(&self) -> usize {
        self.monitors.len()
    }

    /// Checks whether the composite monitor holds no monitors.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.monitors.is_empty()
    }
}

impl<T> CrossingMonitor<T> for CompositeMonitor<'_, T>
where
    T: CrossingFloat,
{
    fn name(&self) -> &str {
        "CompositeMonitor"
    }

    fn on_enter_bridge(&mut self, index: BridgeIndex, bridge: &Bridge<T>) {
        for monitor in &mut self.monitors {
            monitor.on_enter_bridge(index, bridge);
        }
    }

    fn on_cache_hit(&mut self, group_size: usize, bridge: &Bridge<T>) {
        for monitor in &mut self.monitors {
            monitor.on_cache_hit(group_size, bridge);
        }
    }

    fn on_cross(&mut self, first: &Hiker<T>, second: Option<&Hiker<T>>) {
        for monitor in &mut self.monitors {
            monitor.on_cross(first, second);
        }
    }

    fn on_return(&mut self, hiker: &Hiker<T>) {
        for monitor in &mut self.monitors {
            monitor.on_return(hiker);
        }
    }

    fn on_total(&mut self, total_time: T) {
        for monitor in &mut self.monitors {
            monitor.on_total(total_time);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monitor::no_op::NoOperationMonitor;
    use std::cell::RefCell;
    use std::rc::Rc;
    use trestle_model::hiker::Hiker;

    struct CountingMonitor {
        events: Rc<RefCell<usize>>,
    }

    impl CrossingMonitor<f64> for CountingMonitor {
        fn name(&self) -> &str {
            "CountingMonitor"
        }
        fn on_enter_bridge(&mut self, _index: BridgeIndex, _bridge: &Bridge<f64>) {
            *self.events.borrow_mut() += 1;
        }
        fn on_cache_hit(&mut self, _group_size: usize, _bridge: &Bridge<f64>) {
            *self.events.borrow_mut() += 1;
        }
        fn on_cross(&mut self, _first: &Hiker<f64>, _second: Option<&Hiker<f64>>) {
            *self.events.borrow_mut() += 1;
        }
        fn on_return(&mut self, _hiker: &Hiker<f64>) {
            *self.events.borrow_mut() += 1;
        }
        fn on_total(&mut self, _total_time: f64) {
            *self.events.borrow_mut() += 1;
        }
    }

    #[test]
    fn test_forwards_to_all_monitors() {
        let first_events = Rc::new(RefCell::new(0));
        let second_events = Rc::new(RefCell::new(0));

        let mut composite = CompositeMonitor::<f64>::new();
        composite.add_monitor(NoOperationMonitor::new());
        composite.add_monitor(CountingMonitor {
            events: Rc::clone(&first_events),
        });
        composite.add_monitor_boxed(Box::new(CountingMonitor {
            events: Rc::clone(&second_events),
        }));
        assert_eq!(composite.len(), 3);

        let hiker = Hiker::new("A", 100.0_f64).unwrap();
        composite.on_cross(&hiker, None);
        composite.on_return(&hiker);
        composite.on_total(1.0);

        assert_eq!(*first_events.borrow(), 3);
        assert_eq!(*second_events.borrow(), 3);
    }

    #[test]
    fn test_display_lists_member_names() {
        let mut composite = CompositeMonitor::<f64>::new();
        composite.add_monitor(NoOperationMonitor::new());
        assert_eq!(
            format!("{}", composite),
            "CompositeMonitor([NoOperationMonitor])"
        );
    }

    #[test]
    fn test_empty_composite() {
        let composite = CompositeMonitor::<f64>::new();
        assert!(composite.is_empty());
        assert_eq!(format!("{}", composite), "CompositeMonitor([])");
    }
}
