// SPDX-License-Identifier: MPL-2.0
//! Horizontal drag tracking for the card strip.
//!
//! Records where and when a press started and, on release, turns the
//! horizontal travel into a [`DragRelease`] the rail can judge as a swipe.

use crate::rail::DragRelease;
use iced::Point;
use std::time::Instant;

/// Press/release tracker.
#[derive(Debug, Clone, Default)]
pub struct DragTracker {
    start: Option<(Point, Instant)>,
}

impl DragTracker {
    pub fn start(&mut self, position: Point, at: Instant) {
        self.start = Some((position, at));
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.start.is_some()
    }

    pub fn cancel(&mut self) {
        self.start = None;
    }

    /// Ends the drag at `position`.
    ///
    /// Velocity is the average over the whole drag in pixels per second.
    /// Returns `None` if no drag was in progress.
    pub fn finish(&mut self, position: Point, at: Instant) -> Option<DragRelease> {
        let (origin, started) = self.start.take()?;
        let offset = position.x - origin.x;
        let elapsed = at.saturating_duration_since(started).as_secs_f32();

        let velocity = if elapsed > f32::EPSILON {
            offset / elapsed
        } else {
            0.0
        };

        Some(DragRelease { offset, velocity })
    }
}
