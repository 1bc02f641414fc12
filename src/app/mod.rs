// SPDX-License-Identifier: MPL-2.0
//! Demo application hosting a [`FocusRail`].
//!
//! The app owns the rail and translates iced messages into [`RailInput`]s.
//! It also owns the pieces the rail leaves to its host: pointer tracking for
//! drags and the autoplay timer. Wheel and arrow keys only reach the rail
//! while the pointer is over it.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use subscription::{wheel_delta, PIXELS_PER_LINE};

use crate::config;
use crate::rail::{FocusRail, InputMode, RailItems};
use crate::ui::drag::DragTracker;
use iced::{window, Element, Point, Subscription, Task, Theme};
use std::fmt;
use std::path::Path;

pub const WINDOW_DEFAULT_WIDTH: f32 = 1280.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 900.0;
pub const MIN_WINDOW_WIDTH: f32 = 640.0;
pub const MIN_WINDOW_HEIGHT: f32 = 600.0;

/// Root iced application state.
pub struct App {
    rail: FocusRail,
    drag: DragTracker,
    /// Last pointer position over the stage, relative to it.
    pointer: Point,
    /// Whether the pointer is over the stage. Wheel input only counts then.
    hovering: bool,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("active_index", &self.rail.active_index())
            .field("mode", &self.rail.mode())
            .field("hovering", &self.hovering)
            .finish()
    }
}

pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced calls boot through `Fn`; the flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// Loads the item set named by `--items`, falling back to the built-in set.
fn load_items(path: Option<&str>) -> RailItems {
    let Some(path) = path else {
        return RailItems::how_it_works();
    };

    match RailItems::load_from_path(Path::new(path)) {
        Ok(items) => {
            tracing::info!(path, count = items.count().get(), "loaded rail items");
            items
        }
        Err(err) => {
            tracing::warn!(path, %err, "falling back to built-in items");
            RailItems::how_it_works()
        }
    }
}

impl App {
    /// Wraps an already configured rail.
    #[must_use]
    pub fn with_rail(rail: FocusRail) -> Self {
        Self {
            rail,
            drag: DragTracker::default(),
            pointer: Point::ORIGIN,
            hovering: false,
        }
    }

    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, warning) = config::load();
        if let Some(warning) = warning {
            tracing::warn!("{}", warning);
        }

        let mut settings = config.rail_settings();
        if flags.scroll {
            settings.mode = InputMode::ScrollDriven;
        }
        if flags.no_loop {
            settings.loop_enabled = false;
        }
        if flags.autoplay {
            settings.autoplay_enabled = true;
        }

        let items = load_items(flags.items_path.as_deref());
        tracing::info!(
            mode = settings.mode.label(),
            loop_enabled = settings.loop_enabled,
            autoplay = settings.autoplay_enabled,
            "starting focus rail"
        );

        (Self::with_rail(FocusRail::new(items, settings)), Task::none())
    }

    #[must_use]
    pub fn rail(&self) -> &FocusRail {
        &self.rail
    }

    fn title(&self) -> String {
        format!("Focus Rail · {}", self.rail.counter_label())
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        let autoplay = self.rail.autoplay();
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_autoplay_subscription(
                autoplay.is_enabled(),
                autoplay.interval(),
            ),
        ])
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        self.update_at(message, std::time::Instant::now());
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            rail: &self.rail,
            autoplay_enabled: self.rail.autoplay().is_enabled(),
        })
    }
}
