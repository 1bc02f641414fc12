// SPDX-License-Identifier: MPL-2.0
//! Native event routing and timers.

use super::Message;
use crate::rail::{RailKey, WheelDelta};
use iced::keyboard::{self, key::Named, Key};
use iced::mouse::{self, ScrollDelta};
use iced::{event, time, Event, Subscription};
use std::time::Duration;

/// Pixels per wheel line on devices that report lines.
pub const PIXELS_PER_LINE: f32 = 100.0;

/// Converts an iced wheel delta into rail pixels.
///
/// iced reports scrolling down as negative `y`; the rail treats movement
/// towards the next item as positive, so both axes are negated.
#[must_use]
pub fn wheel_delta(delta: ScrollDelta) -> WheelDelta {
    match delta {
        ScrollDelta::Lines { x, y } => WheelDelta::new(-x * PIXELS_PER_LINE, -y * PIXELS_PER_LINE),
        ScrollDelta::Pixels { x, y } => WheelDelta::new(-x, -y),
    }
}

fn rail_key(key: &Key) -> Option<RailKey> {
    match key {
        Key::Named(Named::ArrowLeft) => Some(RailKey::ArrowLeft),
        Key::Named(Named::ArrowRight) => Some(RailKey::ArrowRight),
        _ => None,
    }
}

/// Wheel and arrow key events.
///
/// Wheel events are forwarded even when a widget captured them; the app
/// drops both kinds unless the rail is hovered.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window| match event {
        Event::Mouse(mouse::Event::WheelScrolled { delta }) => {
            Some(Message::Wheel(wheel_delta(delta)))
        }
        Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => match status {
            event::Status::Ignored => rail_key(&key).map(Message::Key),
            event::Status::Captured => None,
        },
        _ => None,
    })
}

/// Recurring autoplay timer, present only while autoplay is enabled.
pub fn create_autoplay_subscription(enabled: bool, interval: Duration) -> Subscription<Message> {
    if enabled {
        time::every(interval).map(Message::AutoplayTick)
    } else {
        Subscription::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn line_deltas_are_scaled_and_inverted() {
        let delta = wheel_delta(ScrollDelta::Lines { x: 0.0, y: -1.0 });
        assert_abs_diff_eq!(delta.y, 100.0);
        assert_abs_diff_eq!(delta.x, 0.0);
    }

    #[test]
    fn pixel_deltas_are_inverted() {
        let delta = wheel_delta(ScrollDelta::Pixels { x: 12.0, y: 30.0 });
        assert_abs_diff_eq!(delta.x, -12.0);
        assert_abs_diff_eq!(delta.y, -30.0);
    }

    #[test]
    fn only_horizontal_arrows_map_to_rail_keys() {
        assert_eq!(
            rail_key(&Key::Named(Named::ArrowLeft)),
            Some(RailKey::ArrowLeft)
        );
        assert_eq!(
            rail_key(&Key::Named(Named::ArrowRight)),
            Some(RailKey::ArrowRight)
        );
        assert_eq!(rail_key(&Key::Named(Named::ArrowUp)), None);
    }
}
