// SPDX-License-Identifier: MPL-2.0
//! Message handling.
//!
//! Time is passed in explicitly so drag velocity and wheel cooldowns can be
//! exercised deterministically in tests.

use super::{App, Message};
use crate::rail::RailInput;
use crate::ui::rail_view;
use std::time::Instant;

impl App {
    pub(super) fn update_at(&mut self, message: Message, now: Instant) {
        match message {
            Message::Rail(message) => self.handle_rail_message(message, now),
            Message::Wheel(delta) => {
                if self.hovering {
                    self.rail.handle(RailInput::Wheel(delta), now);
                }
            }
            Message::Key(key) => {
                if self.hovering {
                    self.rail.handle(RailInput::Key(key), now);
                }
            }
            Message::Scrolled(progress) => {
                self.rail.handle(RailInput::ScrollProgress(progress), now);
            }
            Message::AutoplayTick(at) => {
                self.rail.handle(RailInput::AutoplayTick, at);
            }
            Message::ToggleMode => {
                let mode = self.rail.mode().toggled();
                self.drag.cancel();
                self.rail.set_mode(mode, now);
            }
            Message::ToggleAutoplay => {
                let enabled = !self.rail.autoplay().is_enabled();
                tracing::info!(enabled, "autoplay toggled");
                self.rail.set_autoplay_enabled(enabled);
            }
        }
    }

    fn handle_rail_message(&mut self, message: rail_view::Message, now: Instant) {
        match message {
            rail_view::Message::SelectOffset(offset) => {
                self.rail.handle(RailInput::SelectOffset(offset), now);
            }
            rail_view::Message::Next => {
                self.rail.handle(RailInput::Next, now);
            }
            rail_view::Message::Previous => {
                self.rail.handle(RailInput::Previous, now);
            }
            rail_view::Message::Activate => {
                self.rail.activate(now);
            }
            rail_view::Message::HoverChanged(hovering) => {
                self.hovering = hovering;
                self.rail.set_hovering(hovering);
                if !hovering {
                    self.drag.cancel();
                }
            }
            rail_view::Message::PointerMoved(position) => {
                self.pointer = position;
            }
            rail_view::Message::DragStarted => {
                self.drag.start(self.pointer, now);
            }
            rail_view::Message::DragEnded => {
                if let Some(release) = self.drag.finish(self.pointer, now) {
                    self.rail.handle(RailInput::DragReleased(release), now);
                }
            }
        }
    }
}
