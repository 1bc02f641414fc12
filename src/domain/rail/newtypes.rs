// SPDX-License-Identifier: MPL-2.0
//! Rail newtypes.
//!
//! Type-safe wrappers for the rail's tunables and inputs. Every constructor
//! clamps into the ranges defined in [`crate::config::defaults`], so the
//! gesture and scroll code never has to re-check them.

use crate::config::{
    DEFAULT_AUTOPLAY_INTERVAL_MS, DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY, DEFAULT_NOISE_FLOOR,
    DEFAULT_STEP_COOLDOWN_MS, DEFAULT_STEP_THRESHOLD, DEFAULT_SWIPE_CONFIDENCE,
    MAX_AUTOPLAY_INTERVAL_MS, MAX_DIAGNOSTICS_BUFFER_CAPACITY, MAX_NOISE_FLOOR,
    MAX_STEP_COOLDOWN_MS, MAX_STEP_THRESHOLD, MAX_SWIPE_CONFIDENCE, MIN_AUTOPLAY_INTERVAL_MS,
    MIN_DIAGNOSTICS_BUFFER_CAPACITY, MIN_NOISE_FLOOR, MIN_STEP_COOLDOWN_MS, MIN_STEP_THRESHOLD,
    MIN_SWIPE_CONFIDENCE,
};
use std::time::{Duration, Instant};

/// Clamps a float into range, mapping NaN to the lower bound.
fn clamp_f32(value: f32, min: f32, max: f32) -> f32 {
    if value.is_nan() {
        min
    } else {
        value.clamp(min, max)
    }
}

// =============================================================================
// StepThreshold
// =============================================================================

/// Accumulated wheel magnitude required to commit one step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepThreshold(f32);

impl StepThreshold {
    #[must_use]
    pub fn new(value: f32) -> Self {
        Self(clamp_f32(value, MIN_STEP_THRESHOLD, MAX_STEP_THRESHOLD))
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns true when `accumulated` has reached the threshold in either direction.
    #[must_use]
    pub fn is_reached_by(self, accumulated: f32) -> bool {
        accumulated.abs() >= self.0
    }
}

impl Default for StepThreshold {
    fn default() -> Self {
        Self(DEFAULT_STEP_THRESHOLD)
    }
}

// =============================================================================
// CooldownWindow
// =============================================================================

/// Minimum time between two committed wheel steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CooldownWindow(Duration);

impl CooldownWindow {
    /// Creates a cooldown window from milliseconds, clamping to valid range.
    #[must_use]
    pub fn from_millis(millis: u64) -> Self {
        Self(Duration::from_millis(
            millis.clamp(MIN_STEP_COOLDOWN_MS, MAX_STEP_COOLDOWN_MS),
        ))
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        self.0
    }

    /// Returns true if `now` still falls inside the window opened at `last_commit`.
    ///
    /// No previous commit means no cooldown is in force.
    #[must_use]
    pub fn is_active(self, last_commit: Option<Instant>, now: Instant) -> bool {
        match last_commit {
            Some(last) => now.saturating_duration_since(last) < self.0,
            None => false,
        }
    }
}

impl Default for CooldownWindow {
    fn default() -> Self {
        Self(Duration::from_millis(DEFAULT_STEP_COOLDOWN_MS))
    }
}

// =============================================================================
// NoiseFloor
// =============================================================================

/// Magnitude below which wheel deltas are discarded as noise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoiseFloor(f32);

impl NoiseFloor {
    #[must_use]
    pub fn new(value: f32) -> Self {
        Self(clamp_f32(value, MIN_NOISE_FLOOR, MAX_NOISE_FLOOR))
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Non-finite deltas count as noise.
    #[must_use]
    pub fn is_noise(self, delta: f32) -> bool {
        !delta.is_finite() || delta.abs() < self.0
    }
}

impl Default for NoiseFloor {
    fn default() -> Self {
        Self(DEFAULT_NOISE_FLOOR)
    }
}

// =============================================================================
// SwipeConfidence
// =============================================================================

/// Swipe power a drag release must exceed to count as a deliberate swipe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeConfidence(f32);

impl SwipeConfidence {
    #[must_use]
    pub fn new(value: f32) -> Self {
        Self(clamp_f32(value, MIN_SWIPE_CONFIDENCE, MAX_SWIPE_CONFIDENCE))
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for SwipeConfidence {
    fn default() -> Self {
        Self(DEFAULT_SWIPE_CONFIDENCE)
    }
}

// =============================================================================
// AutoplayInterval
// =============================================================================

/// Delay between two autoplay ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoplayInterval(Duration);

impl AutoplayInterval {
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self(interval.clamp(
            Duration::from_millis(MIN_AUTOPLAY_INTERVAL_MS),
            Duration::from_millis(MAX_AUTOPLAY_INTERVAL_MS),
        ))
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        self.0
    }
}

impl Default for AutoplayInterval {
    fn default() -> Self {
        Self(Duration::from_millis(DEFAULT_AUTOPLAY_INTERVAL_MS))
    }
}

// =============================================================================
// ScrollProgress
// =============================================================================

/// Scroll progress through the rail's container, always within `[0, 1]`.
///
/// Values outside the range are clamped to the nearest boundary and NaN
/// becomes `0.0`, so a misbehaving surface can never produce an invalid band.
///
/// # Example
///
/// ```
/// use focus_rail::domain::rail::ScrollProgress;
///
/// assert_eq!(ScrollProgress::new(1.7).value(), 1.0);
/// assert_eq!(ScrollProgress::new(f32::NAN).value(), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollProgress(f32);

impl ScrollProgress {
    #[must_use]
    pub fn new(value: f32) -> Self {
        Self(clamp_f32(value, 0.0, 1.0))
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

// =============================================================================
// BufferCapacity
// =============================================================================

/// Number of rail events the diagnostics buffer retains.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferCapacity(usize);

impl BufferCapacity {
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.clamp(
            MIN_DIAGNOSTICS_BUFFER_CAPACITY,
            MAX_DIAGNOSTICS_BUFFER_CAPACITY,
        ))
    }

    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }
}

impl Default for BufferCapacity {
    fn default() -> Self {
        Self(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY)
    }
}

// =============================================================================
// Tests
// =============================================================================
