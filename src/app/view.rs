// SPDX-License-Identifier: MPL-2.0
//! Page layout of the demo.
//!
//! In gesture mode the page is the rail plus its toolbar. In scroll-driven
//! mode a tall explainer below the rail reports its scroll offset, and that
//! offset selects the active card.

use super::Message;
use crate::diagnostics::RailEventLog;
use crate::rail::{FocusRail, InputMode};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::{rail_view, styles};
use iced::alignment::Vertical;
use iced::widget::scrollable::Viewport;
use iced::widget::{button, Column, Container, Row, Scrollable, Space, Text};
use iced::{Alignment, Element, Length};

/// Number of diagnostics entries shown under the rail.
const RECENT_EVENTS: usize = 5;

pub struct ViewContext<'a> {
    pub rail: &'a FocusRail,
    pub autoplay_enabled: bool,
}

fn toolbar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mode = ctx.rail.mode();
    let mode_label = format!("Mode: {}", mode.label());
    let autoplay_label = if ctx.autoplay_enabled {
        "Autoplay: on"
    } else {
        "Autoplay: off"
    };

    Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(
            Text::new("How it works")
                .size(typography::TITLE_LG)
                .color(palette::AMBER_100),
        )
        .push(Space::new().width(Length::Fill))
        .push(
            button(Text::new(mode_label).size(typography::BODY))
                .padding([spacing::XS, spacing::MD])
                .style(styles::toggle(mode == InputMode::ScrollDriven))
                .on_press(Message::ToggleMode),
        )
        .push(
            button(Text::new(autoplay_label).size(typography::BODY))
                .padding([spacing::XS, spacing::MD])
                .style(styles::toggle(ctx.autoplay_enabled))
                .on_press(Message::ToggleAutoplay),
        )
        .into()
}

fn recent_events<'a>(log: &'a RailEventLog) -> Element<'a, Message> {
    log.newest_first(RECENT_EVENTS)
        .fold(Column::new().spacing(spacing::XXS), |column, event| {
            column.push(
                Text::new(event.to_string())
                    .size(typography::CAPTION)
                    .color(palette::NEUTRAL_400),
            )
        })
        .into()
}

/// Tall scrollable whose sections mirror the rail items.
fn scroll_track<'a>(rail: &'a FocusRail) -> Element<'a, Message> {
    let sections = rail.items().iter().fold(
        Column::new().spacing(spacing::XL).padding(spacing::LG),
        |column, item| {
            let mut section = Column::new().spacing(spacing::XS).push(
                Text::new(item.title())
                    .size(typography::TITLE_MD)
                    .color(palette::AMBER_300),
            );
            if let Some(description) = item.description() {
                section = section.push(Text::new(description).size(typography::BODY));
            }
            column.push(
                Container::new(section)
                    .padding(spacing::LG)
                    .width(Length::Fill)
                    .height(Length::Fixed(
                        sizing::STAGE_HEIGHT * sizing::SCROLL_TRACK_SCREENS / 2.0,
                    ))
                    .style(styles::panel),
            )
        },
    );

    Scrollable::new(sections)
        .height(Length::Fixed(sizing::STAGE_HEIGHT))
        .on_scroll(|viewport: Viewport| Message::Scrolled(viewport.relative_offset().y))
        .into()
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut page = Column::new()
        .spacing(spacing::XL)
        .padding(spacing::XL)
        .align_x(Alignment::Center)
        .push(toolbar(&ctx))
        .push(rail_view::view(ctx.rail).map(Message::Rail));

    if ctx.rail.mode() == InputMode::ScrollDriven {
        page = page.push(scroll_track(ctx.rail));
    }

    page = page.push(recent_events(ctx.rail.diagnostics()));

    Container::new(page)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::page)
        .into()
}
