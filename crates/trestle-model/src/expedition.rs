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

//! The immutable problem instance and its builder.
//!
//! An `Expedition` holds the original party (sorted descending by speed) and
//! the ordered bridges to cross. `ExpeditionBuilder` is the only way to
//! construct one: it validates every length, keeps the running accumulated
//! joining roster, and re-sorts that roster whenever a bridge introduces new
//! hikers. Both instance loaders (`compact`, `document`) funnel through it so
//! the accumulation rules live in exactly one place.

use crate::{
    bridge::Bridge,
    error::ModelError,
    hiker::{sort_descending_by_speed, Hiker},
    index::BridgeIndex,
};
use trestle_core::num::CrossingFloat;

/// The immutable data model describing the original party and the bridges.
///
/// Construction:
/// - Use `ExpeditionBuilder` and call `ExpeditionBuilder::build` to obtain a
///   validated `Expedition`.
///
/// # Examples
///
/// ```rust
/// use trestle_model::expedition::ExpeditionBuilder;
/// use trestle_model::hiker::Hiker;
///
/// let mut builder = ExpeditionBuilder::new();
/// builder.add_hiker(Hiker::new("B", 50.0).unwrap());
/// builder.add_hiker(Hiker::new("A", 100.0).unwrap());
/// builder.add_bridge(100.0, vec![]).unwrap();
/// let expedition = builder.build();
///
/// assert_eq!(expedition.num_hikers(), 2);
/// assert_eq!(expedition.num_bridges(), 1);
/// // The original roster is sorted descending by speed.
/// assert_eq!(expedition.hikers()[0].name(), "A");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Expedition<T> {
    hikers: Vec<Hiker<T>>,
    bridges: Vec<Bridge<T>>,
}

impl<T> Expedition<T>
where
    T: CrossingFloat,
{
    /// Returns the original party, sorted descending by speed.
    #[inline]
    pub fn hikers(&self) -> &[Hiker<T>] {
        &self.hikers
    }

    /// Returns the number of hikers in the original party.
    #[inline]
    pub fn num_hikers(&self) -> usize {
        self.hikers.len()
    }

    /// Returns all bridges in crossing order.
    #[inline]
    pub fn bridges(&self) -> &[Bridge<T>] {
        &self.bridges
    }

    /// Returns the number of bridges.
    #[inline]
    pub fn num_bridges(&self) -> usize {
        self.bridges.len()
    }

    /// Returns the bridge at the given index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in `0..num_bridges()`.
    #[inline]
    pub fn bridge(&self, index: BridgeIndex) -> &Bridge<T> {
        let index = index.get();
        debug_assert!(
            index < self.num_bridges(),
            "called `Expedition::bridge` with bridge index out of bounds: the len is {} but the index is {}",
            self.num_bridges(),
            index
        );

        &self.bridges[index]
    }

    /// Returns the total party size at the given bridge: the original party
    /// plus everyone who has joined at this or any earlier bridge.
    #[inline]
    pub fn group_size(&self, index: BridgeIndex) -> usize {
        self.num_hikers() + self.bridge(index).num_joining()
    }
}

impl<T> std::fmt::Display for Expedition<T>
where
    T: CrossingFloat,
{
    /// Formats the expedition in the compact case form with ACCUMULATED
    /// joining rosters per bridge. Useful for echoing a loaded case; for a
    /// re-parseable string use `compact::serialize`, which writes only the
    /// newly introduced hikers per bridge.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for hiker in &self.hikers {
            if !first {
                write!(f, ",")?;
            }
            write!(f, "{}", hiker)?;
            first = false;
        }
        for bridge in &self.bridges {
            write!(f, ";{}", bridge)?;
        }
        Ok(())
    }
}

/// A mutable builder that assembles a validated `Expedition`.
///
/// The builder owns the cumulative joining-roster merge: each call to
/// `add_bridge` appends the newly introduced hikers to the running joining
/// roster, re-sorts it descending by speed, and snapshots it into the bridge.
#[derive(Debug, Clone)]
pub struct ExpeditionBuilder<T> {
    hikers: Vec<Hiker<T>>,
    bridges: Vec<Bridge<T>>,
    joining: Vec<Hiker<T>>,
}

impl<T> Default for ExpeditionBuilder<T>
where
    T: CrossingFloat,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ExpeditionBuilder<T>
where
    T: CrossingFloat,
{
    /// Creates a new empty `ExpeditionBuilder`.
    #[inline]
    pub fn new() -> Self {
        Self {
            hikers: Vec::new(),
            bridges: Vec::new(),
            joining: Vec::new(),
        }
    }

    /// Adds a hiker to the original party.
    #[inline]
    pub fn add_hiker(&mut self, hiker: Hiker<T>) {
        self.hikers.push(hiker);
    }

    /// Adds a bridge with the hikers newly introduced at it.
    ///
    /// The new hikers are merged into the accumulated joining roster, which
    /// is re-sorted and snapshotted into the bridge.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::InvalidLength` if `length` is not strictly
    /// positive and finite.
    pub fn add_bridge(&mut self, length: T, arrivals: Vec<Hiker<T>>) -> Result<(), ModelError> {
        if !(length.is_finite() && length > T::zero()) {
            return Err(ModelError::InvalidLength {
                value: length.to_string(),
            });
        }

        if !arrivals.is_empty() {
            self.joining.extend(arrivals.iter().cloned());
            sort_descending_by_speed(&mut self.joining);
        }
        self.bridges
            .push(Bridge::new(length, arrivals, self.joining.clone()));
        Ok(())
    }

    /// Consumes the builder and returns the validated `Expedition`.
    ///
    /// The original party is sorted descending by speed here, once.
    pub fn build(mut self) -> Expedition<T> {
        sort_descending_by_speed(&mut self.hikers);
        Expedition {
            hikers: self.hikers,
            bridges: self.bridges,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hiker(name: &str, speed: f64) -> Hiker<f64> {
        Hiker::new(name, speed).expect("valid hiker")
    }

    #[test]
    fn test_build_sorts_original_party() {
        let mut builder = ExpeditionBuilder::new();
        builder.add_hiker(hiker("D", 10.0));
        builder.add_hiker(hiker("A", 100.0));
        builder.add_hiker(hiker("C", 20.0));
        builder.add_hiker(hiker("B", 50.0));
        let expedition = builder.build();

        let names: Vec<&str> = expedition.hikers().iter().map(Hiker::name).collect();
        assert_eq!(names, ["A", "B", "C", "D"]);
    }

    #[test]
    fn test_joining_rosters_accumulate_across_bridges() {
        let mut builder = ExpeditionBuilder::new();
        builder.add_hiker(hiker("A", 100.0));
        builder.add_bridge(100.0, vec![]).unwrap();
        builder.add_bridge(250.0, vec![hiker("E", 2.5)]).unwrap();
        builder
            .add_bridge(150.0, vec![hiker("F", 25.0), hiker("G", 15.0)])
            .unwrap();
        let expedition = builder.build();

        assert_eq!(expedition.bridges()[0].num_joining(), 0);

        let second: Vec<&str> = expedition.bridges()[1]
            .joining_hikers()
            .iter()
            .map(Hiker::name)
            .collect();
        assert_eq!(second, ["E"]);

        // Accumulated and re-sorted descending by speed.
        let third: Vec<&str> = expedition.bridges()[2]
            .joining_hikers()
            .iter()
            .map(Hiker::name)
            .collect();
        assert_eq!(third, ["F", "G", "E"]);

        // Arrivals keep only the newly introduced hikers.
        let arrivals: Vec<&str> = expedition.bridges()[2]
            .arrivals()
            .iter()
            .map(Hiker::name)
            .collect();
        assert_eq!(arrivals, ["F", "G"]);
    }

    #[test]
    fn test_group_size_counts_accumulated_joiners() {
        let mut builder = ExpeditionBuilder::new();
        builder.add_hiker(hiker("A", 100.0));
        builder.add_hiker(hiker("B", 50.0));
        builder.add_bridge(100.0, vec![]).unwrap();
        builder.add_bridge(200.0, vec![hiker("E", 50.0)]).unwrap();
        let expedition = builder.build();

        assert_eq!(expedition.group_size(BridgeIndex::new(0)), 2);
        assert_eq!(expedition.group_size(BridgeIndex::new(1)), 3);
    }

    #[test]
    fn test_add_bridge_rejects_non_positive_length() {
        let mut builder = ExpeditionBuilder::<f64>::new();
        assert!(matches!(
            builder.add_bridge(0.0, vec![]),
            Err(ModelError::InvalidLength { .. })
        ));
        assert!(builder.add_bridge(-5.0, vec![]).is_err());
        assert!(builder.add_bridge(f64::NAN, vec![]).is_err());
    }

    #[test]
    fn test_display_uses_accumulated_rosters() {
        let mut builder = ExpeditionBuilder::new();
        builder.add_hiker(hiker("A", 100.0));
        builder.add_hiker(hiker("B", 50.0));
        builder.add_bridge(100.0, vec![]).unwrap();
        builder.add_bridge(250.0, vec![hiker("E", 2.5)]).unwrap();
        let expedition = builder.build();

        assert_eq!(format!("{}", expedition), "A 100,B 50;100;250,E 2.5");
    }
}
