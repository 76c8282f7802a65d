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

//! # Tandem Model
//!
//! **The Core Domain Model for the Tandem Meeting-Matching Solver.**
//!
//! This crate defines the data structures used to describe a pairwise
//! meeting-assignment problem: a roster of participants, a symmetric matrix of
//! pairing scores, and a per-participant cap on how many meetings each person
//! may take. It serves as the data interchange layer between the problem
//! definition (user input) and the solving pipeline (`tandem_solver`).
//!
//! ## Architecture
//!
//! * **`index`**: Strongly-typed `ParticipantIndex` to prevent logical
//!   indexing errors.
//! * **`weights`**: The `WeightMatrix` (dense, row-major, symmetric by
//!   construction when built through its setter).
//! * **`capacity`**: The `CapacityVector` of per-participant meeting caps.
//! * **`validate`**: Eager, pure validation of weights and capacities with
//!   errors that point at the offending entries.
//! * **`matching`**: The output format: unordered `Pair`s, the `Matching`
//!   they form, and its objective value.
//! * **`coverage`**: Post-hoc coverage accounting: who ended up below their
//!   meeting cap.
//!
//! ## Design Philosophy
//!
//! 1.  **Type Safety**: Participant indices are a distinct type, not bare
//!     `usize`.
//! 2.  **Memory Layout**: The score matrix is a single flattened vector
//!     rather than nested `Vec`s.
//! 3.  **Fail-Fast**: Constructors assert structural invariants eagerly so
//!     the solver never sees an inconsistent instance.

pub mod capacity;
pub mod coverage;
pub mod index;
pub mod matching;
pub mod validate;
pub mod weights;
