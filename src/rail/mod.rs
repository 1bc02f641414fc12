// SPDX-License-Identifier: MPL-2.0
//! Focus rail interaction core.
//!
//! The rail presents an ordered, non-empty list of [`RailItem`]s with one
//! active card. Hosts feed raw input into [`FocusRail::handle`]; the rail
//! decides whether it becomes a step, and the [`IndexController`] normalizes
//! and publishes the new index.
//!
//! Two mutually exclusive input modes exist:
//!
//! - [`InputMode::Gesture`]: wheel, drag and arrow keys drive the rail
//!   through the [`GestureAggregator`].
//! - [`InputMode::ScrollDriven`]: the rail follows the scroll position of
//!   its container through a [`ScrollLink`]; gestures are ignored.
//!
//! Nothing in this module depends on a GUI toolkit. Time is always passed
//! in as an [`Instant`](std::time::Instant) so gesture timing is testable.

pub mod autoplay;
pub mod controller;
pub mod focus_rail;
pub mod gesture;
pub mod item;
pub mod layout;
pub mod scroll;

pub use autoplay::Autoplay;
pub use controller::{wrap, IndexChange, IndexController, ListenerId};
pub use focus_rail::{FocusRail, RailInput, RailSettings, StepCause};
pub use gesture::{
    DragRelease, GestureAggregator, GestureOutcome, GesturePhase, GestureSettings, RailKey,
    RejectReason, Step, WheelDelta,
};
pub use item::{FlowShape, ItemId, NavTarget, RailItem, RailItems, TokenFlow, TokenKind, Visual};
pub use layout::{counter_label, visible_cards, CardPose, VisibleCard};
pub use scroll::{band_index, ScrollLink};

use serde::{Deserialize, Serialize};

/// Which input source drives the active index.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum InputMode {
    /// Wheel, drag and keyboard gestures step through items.
    #[default]
    Gesture,
    /// Scroll position of the container selects the item.
    ScrollDriven,
}

impl InputMode {
    /// Returns the other mode.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            InputMode::Gesture => InputMode::ScrollDriven,
            InputMode::ScrollDriven => InputMode::Gesture,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            InputMode::Gesture => "gesture",
            InputMode::ScrollDriven => "scroll-driven",
        }
    }
}
