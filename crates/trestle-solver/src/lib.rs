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

//! # Trestle Solver
//!
//! **The Optimal Crossing-Time Engine.**
//!
//! Given an `Expedition` — a party of hikers and a sequence of bridges, with
//! one shared torch that must be walked back after every crossing except the
//! last — this crate computes the minimum total crossing time. The engine
//! works in the reciprocal-speed domain: each distinct party size is reduced
//! to a per-unit-time cost once, cached, and scaled by each bridge's length.
//!
//! ## Strategy
//!
//! For parties of two or more, two escort strategies compete per hiker:
//!
//! * **Individual escort**: the fastest hiker walks a slow hiker across and
//!   brings the torch back.
//! * **Slowest pair**: the two fastest cross first, the fastest returns, the
//!   two slowest cross together, the second-fastest returns.
//!
//! A closed-form threshold speed decides which strategy dominates for each
//! hiker; hikers strictly slower than the threshold are paired off two per
//! round, drawn from the merged tails of the original and joining rosters.
//!
//! ## Modules
//!
//! * **`solver`**: The `CrossingSolver` entry points.
//! * **`cache`**: Per-run memoization of per-unit-time costs by party size.
//! * **`threshold`**: The strategy threshold and slow-hiker counting.
//! * **`tail`**: Dual-cursor slowest-hiker extraction over two sorted rosters.
//! * **`monitor`**: Structured crossing-step trace streams.
//! * **`stats` / `outcome`**: Run statistics and the solve result wrapper.

pub mod cache;
pub mod monitor;
pub mod outcome;
pub mod solver;
pub mod stats;
pub mod tail;
pub mod threshold;
