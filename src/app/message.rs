// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and launch flags of the demo.

use crate::rail::{RailKey, WheelDelta};
use crate::ui::rail_view;
use std::time::Instant;

/// Messages consumed by `App::update`.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    Rail(rail_view::Message),
    /// Wheel movement anywhere in the window, already in pixels.
    Wheel(WheelDelta),
    Key(RailKey),
    /// Relative vertical offset of the scroll-driven explainer.
    Scrolled(f32),
    AutoplayTick(Instant),
    ToggleMode,
    ToggleAutoplay,
}

/// Runtime flags parsed by `main.rs`.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Item file replacing the built-in set.
    pub items_path: Option<String>,
    /// Config directory override (`--config-dir`).
    pub config_dir: Option<String>,
    /// Start in scroll-driven mode.
    pub scroll: bool,
    /// Disable looping regardless of config.
    pub no_loop: bool,
    /// Enable autoplay regardless of config.
    pub autoplay: bool,
}
