// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Rail**: Looping and starting position
//! - **Gesture**: Wheel threshold, cooldown, noise floor, swipe confidence
//! - **Autoplay**: Tick interval bounds
//! - **Diagnostics**: Event buffer capacity

// ==========================================================================
// Rail Defaults
// ==========================================================================

/// Whether the rail wraps around from the last item to the first.
pub const DEFAULT_LOOP_ENABLED: bool = true;

/// Index the rail starts on.
pub const DEFAULT_INITIAL_INDEX: i64 = 0;

/// Number of cards shown on each side of the active card.
pub const VISIBLE_RADIUS: i64 = 2;

// ==========================================================================
// Gesture Defaults
// ==========================================================================

/// Accumulated wheel delta needed to commit one step.
pub const DEFAULT_STEP_THRESHOLD: f32 = 180.0;

/// Minimum allowed step threshold.
pub const MIN_STEP_THRESHOLD: f32 = 10.0;

/// Maximum allowed step threshold.
pub const MAX_STEP_THRESHOLD: f32 = 2000.0;

/// Minimum time between two committed wheel steps (in milliseconds).
pub const DEFAULT_STEP_COOLDOWN_MS: u64 = 420;

/// Minimum step cooldown (in milliseconds).
pub const MIN_STEP_COOLDOWN_MS: u64 = 0;

/// Maximum step cooldown (in milliseconds).
pub const MAX_STEP_COOLDOWN_MS: u64 = 5000;

/// Wheel deltas smaller than this are treated as noise.
pub const DEFAULT_NOISE_FLOOR: f32 = 2.0;

/// Minimum noise floor.
pub const MIN_NOISE_FLOOR: f32 = 0.0;

/// Maximum noise floor.
pub const MAX_NOISE_FLOOR: f32 = 100.0;

/// Swipe power (|offset| × |velocity|) a drag release must exceed to commit.
pub const DEFAULT_SWIPE_CONFIDENCE: f32 = 10_000.0;

/// Minimum swipe confidence.
pub const MIN_SWIPE_CONFIDENCE: f32 = 100.0;

/// Maximum swipe confidence.
pub const MAX_SWIPE_CONFIDENCE: f32 = 1_000_000.0;

// ==========================================================================
// Autoplay Defaults
// ==========================================================================

/// Whether autoplay is enabled by default.
pub const DEFAULT_AUTOPLAY_ENABLED: bool = false;

/// Default autoplay interval (in milliseconds).
pub const DEFAULT_AUTOPLAY_INTERVAL_MS: u64 = 4000;

/// Minimum autoplay interval (in milliseconds).
pub const MIN_AUTOPLAY_INTERVAL_MS: u64 = 500;

/// Maximum autoplay interval (in milliseconds).
pub const MAX_AUTOPLAY_INTERVAL_MS: u64 = 60_000;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default number of rail events kept in memory.
pub const DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY: usize = 200;

/// Minimum diagnostics buffer capacity.
pub const MIN_DIAGNOSTICS_BUFFER_CAPACITY: usize = 10;

/// Maximum diagnostics buffer capacity.
pub const MAX_DIAGNOSTICS_BUFFER_CAPACITY: usize = 10_000;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Gesture validation
    assert!(MIN_STEP_THRESHOLD > 0.0);
    assert!(DEFAULT_STEP_THRESHOLD >= MIN_STEP_THRESHOLD);
    assert!(DEFAULT_STEP_THRESHOLD <= MAX_STEP_THRESHOLD);
    assert!(DEFAULT_STEP_COOLDOWN_MS >= MIN_STEP_COOLDOWN_MS);
    assert!(DEFAULT_STEP_COOLDOWN_MS <= MAX_STEP_COOLDOWN_MS);
    assert!(DEFAULT_NOISE_FLOOR >= MIN_NOISE_FLOOR);
    assert!(DEFAULT_NOISE_FLOOR <= MAX_NOISE_FLOOR);
    assert!(DEFAULT_NOISE_FLOOR < DEFAULT_STEP_THRESHOLD);
    assert!(DEFAULT_SWIPE_CONFIDENCE >= MIN_SWIPE_CONFIDENCE);
    assert!(DEFAULT_SWIPE_CONFIDENCE <= MAX_SWIPE_CONFIDENCE);

    // Autoplay validation
    assert!(MIN_AUTOPLAY_INTERVAL_MS > 0);
    assert!(DEFAULT_AUTOPLAY_INTERVAL_MS >= MIN_AUTOPLAY_INTERVAL_MS);
    assert!(DEFAULT_AUTOPLAY_INTERVAL_MS <= MAX_AUTOPLAY_INTERVAL_MS);

    // Diagnostics validation
    assert!(MIN_DIAGNOSTICS_BUFFER_CAPACITY > 0);
    assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY >= MIN_DIAGNOSTICS_BUFFER_CAPACITY);
    assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY <= MAX_DIAGNOSTICS_BUFFER_CAPACITY);

    assert!(VISIBLE_RADIUS >= 0);
};
