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

/// A typed index identifying a bridge within an expedition.
///
/// A zero-cost wrapper around `usize` so that bridge positions cannot be
/// confused with plain counts in trace events and accessors.
///
/// # Examples
///
/// ```rust
/// use trestle_model::index::BridgeIndex;
///
/// let index = BridgeIndex::new(2);
/// assert_eq!(index.get(), 2);
/// assert_eq!(format!("{}", index), "BridgeIndex(2)");
/// ```
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BridgeIndex(usize);

impl BridgeIndex {
    /// Creates a new `BridgeIndex`.
    #[inline(always)]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the underlying `usize` index.
    #[inline(always)]
    pub const fn get(&self) -> usize {
        self.0
    }
}

impl std::fmt::Debug for BridgeIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "BridgeIndex({})", self.0)
    }
}

impl std::fmt::Display for BridgeIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "BridgeIndex({})", self.0)
    }
}

impl From<usize> for BridgeIndex {
    fn from(index: usize) -> Self {
        Self::new(index)
    }
}

impl From<BridgeIndex> for usize {
    fn from(index: BridgeIndex) -> Self {
        index.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_and_get() {
        let index = BridgeIndex::new(7);
        assert_eq!(index.get(), 7);
    }

    #[test]
    fn test_conversions() {
        let index: BridgeIndex = 3.into();
        assert_eq!(index.get(), 3);
        let raw: usize = index.into();
        assert_eq!(raw, 3);
    }

    #[test]
    fn test_debug_and_display() {
        let index = BridgeIndex::new(1);
        assert_eq!(format!("{}", index), "BridgeIndex(1)");
        assert_eq!(format!("{:?}", index), "BridgeIndex(1)");
    }
}
