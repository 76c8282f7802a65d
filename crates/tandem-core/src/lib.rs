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

//! # Tandem Core
//!
//! **Shared, dependency-free building blocks for the Tandem matching solver.**
//!
//! This crate holds the small utilities every other Tandem crate leans on:
//!
//! * **`utils::index`**: Phantom-tagged index types (`TypedIndex`) so that
//!   participant indices and decision-variable indices cannot be confused at
//!   compile time.
//! * **`num::tolerance`**: Floating-point tolerance constants and helpers for
//!   symmetry checks and for reading 0/1 values back out of a numerical
//!   optimizer.
//!
//! Nothing in here knows anything about matchings, weights, or solvers; it is
//! pure mechanism.

pub mod num;
pub mod utils;
