// SPDX-License-Identifier: MPL-2.0
//! Timed advancement.
//!
//! The host owns the timer and delivers ticks; this type only decides
//! whether a tick should advance the rail. Hovering pauses autoplay.

use crate::domain::rail::AutoplayInterval;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Autoplay {
    enabled: bool,
    interval: AutoplayInterval,
    hovering: bool,
}

impl Autoplay {
    #[must_use]
    pub fn new(enabled: bool, interval: AutoplayInterval) -> Self {
        Self {
            enabled,
            interval,
            hovering: false,
        }
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval.as_duration()
    }

    #[must_use]
    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    pub fn set_hovering(&mut self, hovering: bool) {
        self.hovering = hovering;
    }

    /// Whether a tick arriving now should advance the rail.
    #[must_use]
    pub fn should_advance(&self) -> bool {
        self.enabled && !self.hovering
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_autoplay_never_advances() {
        let autoplay = Autoplay::new(false, AutoplayInterval::default());
        assert!(!autoplay.should_advance());
    }

    #[test]
    fn hovering_pauses_and_leaving_resumes() {
        let mut autoplay = Autoplay::new(true, AutoplayInterval::default());
        assert!(autoplay.should_advance());

        autoplay.set_hovering(true);
        assert!(!autoplay.should_advance());

        autoplay.set_hovering(false);
        assert!(autoplay.should_advance());
    }

    #[test]
    fn interval_defaults_to_four_seconds() {
        let autoplay = Autoplay::new(true, AutoplayInterval::default());
        assert_eq!(autoplay.interval(), Duration::from_secs(4));
    }
}
