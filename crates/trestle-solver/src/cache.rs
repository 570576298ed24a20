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

use rustc_hash::FxHashMap;

/// A per-run memo mapping party size to per-unit-time cost.
///
/// The key is the TOTAL party size at a bridge (original hikers plus everyone
/// who has joined so far), not the actual roster composition. Within one run
/// the roster only ever grows, so a repeated party size implies a repeated
/// composition and the cached cost is exact. Two bridges with equal party
/// size but different speed compositions would wrongly share an entry; that
/// approximation is inherited from the count-only keying and callers must
/// scope one cache per run.
///
/// # Examples
///
/// ```rust
/// use trestle_solver::cache::ResultCache;
///
/// let mut cache = ResultCache::new();
/// assert_eq!(cache.get(4), None);
/// cache.insert(4, 0.17_f64);
/// assert_eq!(cache.get(4), Some(0.17));
/// ```
#[derive(Debug, Clone)]
pub struct ResultCache<T> {
    per_unit_times: FxHashMap<usize, T>,
}

impl<T> Default for ResultCache<T>
where
    T: Copy,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ResultCache<T>
where
    T: Copy,
{
    /// Creates a new empty `ResultCache`.
    #[inline]
    pub fn new() -> Self {
        Self {
            per_unit_times: FxHashMap::default(),
        }
    }

    /// Returns the cached per-unit-time cost for the given party size.
    #[inline]
    pub fn get(&self, group_size: usize) -> Option<T> {
        self.per_unit_times.get(&group_size).copied()
    }

    /// Stores the per-unit-time cost for the given party size.
    #[inline]
    pub fn insert(&mut self, group_size: usize, per_unit_time: T) {
        self.per_unit_times.insert(group_size, per_unit_time);
    }

    /// Returns the number of cached entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.per_unit_times.len()
    }

    /// Checks whether the cache holds no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.per_unit_times.is_empty()
    }

    /// Drops all cached entries.
    #[inline]
    pub fn clear(&mut self) {
        self.per_unit_times.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_get() {
        let mut cache = ResultCache::new();
        assert!(cache.is_empty());
        cache.insert(4, 0.17_f64);
        cache.insert(5, 0.53);
        assert_eq!(cache.get(4), Some(0.17));
        assert_eq!(cache.get(5), Some(0.53));
        assert_eq!(cache.get(6), None);
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_insert_overwrites() {
        let mut cache = ResultCache::new();
        cache.insert(4, 0.17_f64);
        cache.insert(4, 0.21);
        assert_eq!(cache.get(4), Some(0.21));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_clear() {
        let mut cache = ResultCache::new();
        cache.insert(4, 0.17_f64);
        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.get(4), None);
    }
}
