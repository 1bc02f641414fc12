// SPDX-License-Identifier: MPL-2.0
//! Wheel, swipe and keyboard input aggregation.
//!
//! Wheel deltas accumulate along their dominant axis until the accumulator
//! reaches the step threshold, at which point exactly one step is committed
//! and a cooldown window opens. During the cooldown further wheel input is
//! dropped and the accumulator stays at zero, so a fast trackpad fling cannot
//! skip several cards at once.
//!
//! Drag releases are evaluated independently: the swipe power
//! `|offset| * |velocity|` must exceed the configured confidence.

use crate::domain::rail::{CooldownWindow, NoiseFloor, StepThreshold, SwipeConfidence};
use std::time::Instant;

/// Direction of a committed step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Next,
    Previous,
}

impl Step {
    /// Signed index delta of this step.
    #[must_use]
    pub fn delta(self) -> i64 {
        match self {
            Step::Next => 1,
            Step::Previous => -1,
        }
    }
}

/// Why an input did not produce a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// A step was committed less than one cooldown window ago.
    Cooldown,
    /// The delta was below the noise floor or not a finite number.
    Noise,
    /// A drag release did not have enough swipe power.
    WeakSwipe,
}

/// Result of feeding one input into the aggregator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureOutcome {
    Committed(Step),
    /// Input accepted; holds the accumulator after applying it.
    Accumulating(f32),
    Rejected(RejectReason),
}

impl GestureOutcome {
    #[must_use]
    pub fn step(self) -> Option<Step> {
        match self {
            GestureOutcome::Committed(step) => Some(step),
            _ => None,
        }
    }
}

/// Observable state of the aggregator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GesturePhase {
    Idle,
    Accumulating,
    CoolingDown,
}

/// Raw wheel delta in pixels. Positive values point towards the next item.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WheelDelta {
    pub x: f32,
    pub y: f32,
}

impl WheelDelta {
    #[must_use]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// The component along the axis with the larger magnitude. Ties go to `y`.
    #[must_use]
    pub fn dominant(self) -> f32 {
        if self.x.abs() > self.y.abs() {
            self.x
        } else {
            self.y
        }
    }
}

/// End of a horizontal drag: total offset in pixels and release velocity in
/// pixels per second.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DragRelease {
    pub offset: f32,
    pub velocity: f32,
}

impl DragRelease {
    #[must_use]
    pub fn power(self) -> f32 {
        self.offset.abs() * self.velocity.abs()
    }
}

/// Arrow keys understood by the rail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RailKey {
    ArrowLeft,
    ArrowRight,
}

impl RailKey {
    #[must_use]
    pub fn step(self) -> Step {
        match self {
            RailKey::ArrowLeft => Step::Previous,
            RailKey::ArrowRight => Step::Next,
        }
    }
}

/// Tunables of the gesture aggregator.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GestureSettings {
    pub step_threshold: StepThreshold,
    pub cooldown: CooldownWindow,
    pub noise_floor: NoiseFloor,
    pub swipe_confidence: SwipeConfidence,
}

/// Turns continuous input into discrete steps.
#[derive(Debug, Clone)]
pub struct GestureAggregator {
    settings: GestureSettings,
    accumulated: f32,
    last_commit: Option<Instant>,
}

impl GestureAggregator {
    #[must_use]
    pub fn new(settings: GestureSettings) -> Self {
        Self {
            settings,
            accumulated: 0.0,
            last_commit: None,
        }
    }

    #[must_use]
    pub fn settings(&self) -> GestureSettings {
        self.settings
    }

    #[must_use]
    pub fn accumulated(&self) -> f32 {
        self.accumulated
    }

    #[must_use]
    pub fn phase(&self, now: Instant) -> GesturePhase {
        if self.settings.cooldown.is_active(self.last_commit, now) {
            GesturePhase::CoolingDown
        } else if self.accumulated != 0.0 {
            GesturePhase::Accumulating
        } else {
            GesturePhase::Idle
        }
    }

    /// Clears the accumulator and any open cooldown.
    pub fn reset(&mut self) {
        self.accumulated = 0.0;
        self.last_commit = None;
    }

    /// Feeds one wheel event received at `now`.
    pub fn on_wheel(&mut self, delta: WheelDelta, now: Instant) -> GestureOutcome {
        if self.settings.cooldown.is_active(self.last_commit, now) {
            self.accumulated = 0.0;
            return GestureOutcome::Rejected(RejectReason::Cooldown);
        }

        let value = delta.dominant();
        if self.settings.noise_floor.is_noise(value) {
            return GestureOutcome::Rejected(RejectReason::Noise);
        }

        // A direction change starts over from zero.
        if self.accumulated != 0.0 && value.signum() != self.accumulated.signum() {
            self.accumulated = 0.0;
        }
        self.accumulated += value;

        if self.settings.step_threshold.is_reached_by(self.accumulated) {
            let step = if self.accumulated > 0.0 {
                Step::Next
            } else {
                Step::Previous
            };
            self.accumulated = 0.0;
            self.last_commit = Some(now);
            return GestureOutcome::Committed(step);
        }

        GestureOutcome::Accumulating(self.accumulated)
    }

    /// Evaluates a drag release. A leftward fling (negative velocity) moves to
    /// the next item.
    pub fn on_drag_release(&self, release: DragRelease) -> GestureOutcome {
        if release.power() <= self.settings.swipe_confidence.value() {
            return GestureOutcome::Rejected(RejectReason::WeakSwipe);
        }
        if release.velocity < 0.0 {
            GestureOutcome::Committed(Step::Next)
        } else if release.velocity > 0.0 {
            GestureOutcome::Committed(Step::Previous)
        } else {
            GestureOutcome::Rejected(RejectReason::WeakSwipe)
        }
    }
}
