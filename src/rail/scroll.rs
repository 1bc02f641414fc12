// SPDX-License-Identifier: MPL-2.0
//! Scroll-driven index selection.
//!
//! The container's scroll progress in `[0, 1]` is split into `count` equal
//! bands; the band the progress falls into is the active item.

use crate::domain::rail::ScrollProgress;
use crate::rail::controller::{IndexChange, IndexController};
use std::num::NonZeroUsize;

/// Returns the band `floor(progress * count)` for a progress value.
///
/// The progress is sanitized first, and a progress of exactly `1.0` maps to
/// the last band rather than one past it.
#[must_use]
pub fn band_index(progress: f32, count: NonZeroUsize) -> usize {
    let progress = f64::from(ScrollProgress::new(progress).value());
    let count = count.get();
    // Truncation is intended: progress is non-negative and bounded by count.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let band = (progress * count as f64).floor() as usize;
    band.min(count - 1)
}

/// Link between a scroll surface and the index controller.
///
/// While attached, progress updates move the active index. Detaching stops
/// forwarding without touching the current index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollLink {
    attached: bool,
}

impl ScrollLink {
    #[must_use]
    pub fn new(attached: bool) -> Self {
        Self { attached }
    }

    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub fn attach(&mut self) {
        self.attached = true;
    }

    pub fn detach(&mut self) {
        self.attached = false;
    }

    /// Forwards a progress sample. Only jumps when the band differs from the
    /// active index.
    pub fn on_progress(
        &self,
        controller: &mut IndexController,
        progress: f32,
    ) -> Option<IndexChange> {
        if !self.attached {
            return None;
        }
        let band = band_index(progress, controller.count());
        if band == controller.active() {
            return None;
        }
        controller.jump_to(i64::try_from(band).unwrap_or(0))
    }
}

impl Default for ScrollLink {
    fn default() -> Self {
        Self::new(true)
    }
}
