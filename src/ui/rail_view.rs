// SPDX-License-Identifier: MPL-2.0
//! Rendering of the focus rail: the card stage, the active item's details
//! and the control pill.
//!
//! Cards are laid out on a [`Stack`] with the centre card on top. Horizontal
//! position and size follow each card's [`CardPose`], with depth applied as a
//! perspective scale since the renderer has no 3D transforms.

use crate::rail::{CardPose, FocusRail, RailItem, VisibleCard, Visual};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::{styles, token_flow};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::image::{self, Handle};
use iced::widget::{
    button, mouse_area, responsive, Column, Container, Row, Space, Stack, Text,
};
use iced::{mouse, Alignment, Element, Length, Padding, Point, Size};

/// Distance of the viewer from the stage plane, in pixels.
const PERSPECTIVE: f32 = 1200.0;
/// Stage width at which card offsets are used unscaled.
const REFERENCE_STAGE_WIDTH: f32 = 1300.0;

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Click on a side card.
    SelectOffset(i64),
    Next,
    Previous,
    Activate,
    HoverChanged(bool),
    PointerMoved(Point),
    DragStarted,
    DragEnded,
}

/// Size factor for a card pushed back to depth `z` (negative is further away).
fn perspective(z: f32) -> f32 {
    PERSPECTIVE / (PERSPECTIVE - z)
}

/// Left edge and size of a card on a stage of the given width, or `None`
/// when it would not fit.
fn placement(pose: &CardPose, stage_width: f32) -> Option<(f32, Size)> {
    let depth = perspective(pose.z);
    let spread = (stage_width / REFERENCE_STAGE_WIDTH).min(1.0);
    let scale = pose.scale * depth * spread.max(0.6);

    let size = Size::new(sizing::CARD_WIDTH * scale, sizing::CARD_HEIGHT * scale);
    let centre = stage_width / 2.0 + pose.x * depth * spread;
    let left = centre - size.width / 2.0;

    if left < 0.0 || left + size.width > stage_width {
        return None;
    }
    Some((left, size))
}

fn visual<'a>(item: &RailItem, pose: &CardPose) -> Element<'a, Message> {
    match item.visual() {
        Some(Visual::TokenFlow(flow)) => token_flow::view(flow, pose.opacity),
        Some(Visual::Image(path)) => image::Image::new(Handle::from_path(path))
            .width(Length::Fill)
            .opacity(pose.opacity)
            .into(),
        None => Space::new().height(Length::Fixed(sizing::TOKEN_SIZE)).into(),
    }
}

fn card<'a>(item: &'a RailItem, slot: VisibleCard) -> Element<'a, Message> {
    let pose = slot.pose;

    let mut content = Column::new()
        .spacing(spacing::SM)
        .align_x(Alignment::Center)
        .push(visual(item, &pose))
        .push(Text::new(item.title()).size(typography::TITLE_MD));
    if let Some(meta) = item.meta() {
        content = content.push(
            Text::new(meta)
                .size(typography::CAPTION)
                .color(styles::posed(palette::AMBER_300, &pose)),
        );
    }

    let surface = Container::new(content)
        .padding(spacing::LG)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .style(styles::card(pose));

    if pose.is_center() {
        surface.into()
    } else {
        mouse_area(surface)
            .on_press(Message::SelectOffset(slot.offset))
            .interaction(mouse::Interaction::Pointer)
            .into()
    }
}

fn stage<'a>(rail: &'a FocusRail) -> Element<'a, Message> {
    let cards = responsive(move |size| {
        let mut visible = rail.visible_cards();
        // Furthest cards first so the centre card ends up on top.
        visible.sort_by_key(|card| std::cmp::Reverse(card.offset.abs()));

        visible
            .into_iter()
            .filter_map(|visible| {
                let item = rail.items().get(visible.index)?;
                let (left, card_size) = placement(&visible.pose, size.width)?;
                let top = ((size.height - card_size.height) / 2.0).max(0.0);

                let slot = Container::new(card(item, visible))
                    .width(Length::Fixed(card_size.width))
                    .height(Length::Fixed(card_size.height));
                Some((slot, left, top))
            })
            .fold(Stack::new(), |stack, (slot, left, top)| {
                stack.push(
                    Container::new(slot).padding(Padding {
                        top,
                        right: 0.0,
                        bottom: 0.0,
                        left,
                    }),
                )
            })
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    });

    mouse_area(
        Container::new(cards)
            .width(Length::Fill)
            .height(Length::Fixed(sizing::STAGE_HEIGHT)),
    )
    .on_enter(Message::HoverChanged(true))
    .on_exit(Message::HoverChanged(false))
    .on_move(Message::PointerMoved)
    .on_press(Message::DragStarted)
    .on_release(Message::DragEnded)
    .interaction(mouse::Interaction::Grab)
    .into()
}

fn details<'a>(rail: &'a FocusRail) -> Element<'a, Message> {
    let Some(item) = rail.active_item() else {
        return Space::new().into();
    };

    let mut column = Column::new()
        .spacing(spacing::XS)
        .align_x(Alignment::Center)
        .max_width(640.0);
    if let Some(meta) = item.meta() {
        column = column.push(
            Text::new(meta)
                .size(typography::CAPTION)
                .color(palette::AMBER_400),
        );
    }
    column = column.push(
        Text::new(item.title())
            .size(typography::TITLE_LG)
            .color(palette::WHITE),
    );
    if let Some(description) = item.description() {
        column = column.push(
            Text::new(description)
                .size(typography::BODY)
                .color(palette::NEUTRAL_400)
                .align_x(Horizontal::Center),
        );
    }

    column.into()
}

fn controls<'a>(rail: &'a FocusRail) -> Element<'a, Message> {
    let previous = button(Text::new("‹").size(typography::TITLE_MD))
        .padding(spacing::SM)
        .style(styles::control)
        .on_press_maybe(rail.has_previous().then_some(Message::Previous));
    let next = button(Text::new("›").size(typography::TITLE_MD))
        .padding(spacing::SM)
        .style(styles::control)
        .on_press_maybe(rail.has_next().then_some(Message::Next));

    let counter = Text::new(rail.counter_label())
        .size(typography::CAPTION)
        .color(palette::NEUTRAL_400);

    let pill = Container::new(
        Row::new()
            .spacing(spacing::XXS)
            .align_y(Vertical::Center)
            .push(previous)
            .push(counter)
            .push(next),
    )
    .padding(spacing::XXS)
    .style(styles::pill);

    let mut row = Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .push(pill);

    if rail.active_item().and_then(RailItem::target).is_some() {
        row = row.push(
            button(Text::new("Explore →").size(typography::BODY))
                .padding([spacing::SM, spacing::LG])
                .style(styles::accent)
                .on_press(Message::Activate),
        );
    }

    row.into()
}

/// Full rail: stage, details and controls.
pub fn view<'a>(rail: &'a FocusRail) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::LG)
        .align_x(Alignment::Center)
        .width(Length::Fill)
        .push(stage(rail))
        .push(details(rail))
        .push(controls(rail))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn perspective_shrinks_distant_cards() {
        assert_abs_diff_eq!(perspective(0.0), 1.0);
        assert!(perspective(-160.0) < 1.0);
        assert!(perspective(-320.0) < perspective(-160.0));
    }

    #[test]
    fn centre_card_is_centred_on_wide_stage() {
        let (left, size) =
            placement(&CardPose::for_offset(0), REFERENCE_STAGE_WIDTH).expect("centre fits");
        assert_abs_diff_eq!(left + size.width / 2.0, REFERENCE_STAGE_WIDTH / 2.0);
        assert_abs_diff_eq!(size.width, sizing::CARD_WIDTH);
    }

    #[test]
    fn far_cards_are_dropped_on_narrow_stages() {
        assert!(placement(&CardPose::for_offset(2), 300.0).is_none());
        assert!(placement(&CardPose::for_offset(0), 300.0).is_some());
    }

    #[test]
    fn side_cards_mirror_each_other() {
        let (left_of, size) =
            placement(&CardPose::for_offset(-1), REFERENCE_STAGE_WIDTH).expect("fits");
        let (right_of, _) =
            placement(&CardPose::for_offset(1), REFERENCE_STAGE_WIDTH).expect("fits");
        let centre = REFERENCE_STAGE_WIDTH / 2.0;
        assert_abs_diff_eq!(
            centre - (left_of + size.width / 2.0),
            (right_of + size.width / 2.0) - centre,
            epsilon = 0.01
        );
    }
}
