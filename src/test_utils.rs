// SPDX-License-Identifier: MPL-2.0
//! Shared test helpers.
//!
//! Gesture and layout math is all `f32`; use these instead of `assert_eq!`
//! when a value passes through arithmetic.

pub use approx::assert_abs_diff_eq;

/// Tolerance for values that should be equal up to rounding.
pub const F32_EPSILON: f32 = 1e-6;
