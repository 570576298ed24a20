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

//! # Trestle Model
//!
//! **The Core Domain Model for the Trestle Crossing-Time Solver.**
//!
//! This crate defines the data structures used to represent a torch-and-bridge
//! crossing problem: a party of hikers, each with a fixed walking speed, must
//! cross a sequence of narrow bridges sharing a single torch that has to be
//! walked back after every crossing except the last. It serves as the data
//! interchange layer between the problem definition (user input) and the
//! solving engine (`trestle_solver`).
//!
//! ## Architecture
//!
//! The crate is designed around a strict separation of concerns between
//! **construction** and **solving**:
//!
//! * **`hiker` / `bridge`**: Validated, immutable entities. A `Hiker` caches
//!   its reciprocal speed at construction; a `Bridge` carries its length and
//!   the accumulated roster of hikers who have joined the party so far.
//! * **`expedition`**: The `Expedition` (immutable, pre-sorted, optimized for
//!   solving) and the `ExpeditionBuilder` (mutable, owns the cumulative
//!   joining-roster merge).
//! * **`compact`**: The compact single-line case format, parse and serialize.
//! * **`document`**: The YAML case document format.
//! * **`index`**: A typed bridge index for trace events and accessors.
//!
//! ## Design Philosophy
//!
//! 1.  **Fail-Fast**: Entities and loaders validate inputs eagerly (positive
//!     finite speeds and lengths) so the solver never sees an invalid state.
//! 2.  **Pre-Sorted Rosters**: All hiker rosters are sorted descending by
//!     speed exactly once, at build time; the solver relies on that order.
//! 3.  **Accumulating Joins**: Hikers who join at a bridge stay with the party
//!     for every later bridge; the builder performs that merge so both loaders
//!     share one implementation.

pub mod bridge;
pub mod compact;
pub mod document;
pub mod error;
pub mod expedition;
pub mod hiker;
pub mod index;
