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

//! Floating-point tolerances shared across the matching pipeline.
//!
//! Two places in the pipeline compare floats against exact targets: the input
//! validator (symmetry of the score matrix) and the extractor (reading 0/1
//! decisions back out of the optimizer). Both use absolute tolerances defined
//! here so the thresholds live in one place.

/// Maximum absolute difference under which two mirrored score-matrix entries
/// are considered equal.
pub const SYMMETRY_TOLERANCE: f64 = 1e-9;

/// Maximum absolute distance from an integer at which an optimizer-reported
/// variable value is accepted as that integer. Matches the primal feasibility
/// tolerance of common MIP solvers.
pub const INTEGRALITY_TOLERANCE: f64 = 1e-6;

/// Returns `true` if `a` and `b` differ by no more than `tolerance`.
///
/// # Examples
///
/// ```rust
/// use tandem_core::num::tolerance::approx_eq;
///
/// assert!(approx_eq(1.0, 1.0 + 1e-12, 1e-9));
/// assert!(!approx_eq(1.0, 1.1, 1e-9));
/// ```
#[inline(always)]
pub fn approx_eq(a: f64, b: f64, tolerance: f64) -> bool {
    (a - b).abs() <= tolerance
}

/// Interprets an optimizer-reported value as a binary decision.
///
/// Returns `Some(false)` if the value is within `tolerance` of 0, `Some(true)`
/// if it is within `tolerance` of 1, and `None` otherwise (a fractional or
/// wildly out-of-range value that the caller must treat as a solver fault).
///
/// # Examples
///
/// ```rust
/// use tandem_core::num::tolerance::{as_binary, INTEGRALITY_TOLERANCE};
///
/// assert_eq!(as_binary(0.0000001, INTEGRALITY_TOLERANCE), Some(false));
/// assert_eq!(as_binary(0.9999999, INTEGRALITY_TOLERANCE), Some(true));
/// assert_eq!(as_binary(0.5, INTEGRALITY_TOLERANCE), None);
/// ```
#[inline]
pub fn as_binary(value: f64, tolerance: f64) -> Option<bool> {
    if approx_eq(value, 0.0, tolerance) {
        Some(false)
    } else if approx_eq(value, 1.0, tolerance) {
        Some(true)
    } else {
        None
    }
}
