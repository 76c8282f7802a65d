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

//! # Tandem Solver
//!
//! **Maximum-weight b-matching for pairwise meeting assignment.**
//!
//! Given a symmetric matrix of pairing scores and a per-participant cap on
//! meeting count, this crate formulates the assignment as a small integer
//! program, hands it to an optimization backend, and reads the chosen pairs
//! back out as a checked [`Matching`](tandem_model::matching::Matching).
//!
//! ## Architecture
//!
//! * **`program`**: The edge formulation: one binary variable per unordered
//!   pair, a weighted-sum objective, and per-participant degree bounds.
//! * **`backend`**: The capability surface an integer optimizer must offer
//!   (declare binary variable, declare bounded row, maximize with a time
//!   limit), with a HiGHS adapter and an exhaustive-search engine for tiny
//!   rosters.
//! * **`extract`**: Turns an optimizer assignment into a `Matching`,
//!   re-verifying every degree bound that was in the program.
//! * **`coverage`**: Decides from the caps alone whether everyone can be
//!   guaranteed at least one meeting, and only then asks for it.
//! * **`solve`**: The public entry points tying the pipeline together.
//!
//! ## Guarantees
//!
//! 1.  Either a provably optimal matching comes back, or a typed error does;
//!     a time limit never silently degrades the result.
//! 2.  Full coverage is requested only when the caps prove it satisfiable, so
//!     the optimizer is never sent a knowingly infeasible model.
//! 3.  Every matching returned has been re-checked against the degree bounds
//!     of the very program that produced it.

pub mod backend;
pub mod coverage;
pub mod error;
pub mod extract;
pub mod program;
pub mod solve;

pub use error::{InternalInvariantError, MatchingError, SolverError};
pub use solve::{
    inclusive_matching, inclusive_matching_with, maximize_weighted_b_matching,
    maximize_weighted_b_matching_with,
};
