// SPDX-License-Identifier: MPL-2.0
//! Reaction diagram: input tokens, an arrow, output tokens.
//!
//! A split stacks the two outputs to the right of a single input; a merge
//! stacks the two inputs to the left of a single output. Anything else is
//! drawn as a flat row.

use crate::rail::{FlowShape, TokenFlow, TokenKind};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::Vertical;
use iced::widget::{Column, Container, Row, Text};
use iced::{Alignment, Element, Length};

fn token<'a, Message: 'a>(kind: TokenKind, alpha: f32) -> Element<'a, Message> {
    let initial = &kind.label()[..1];
    Container::new(Text::new(initial).size(typography::TITLE_MD))
        .width(Length::Fixed(sizing::TOKEN_SIZE))
        .height(Length::Fixed(sizing::TOKEN_SIZE))
        .center_x(Length::Fixed(sizing::TOKEN_SIZE))
        .center_y(Length::Fixed(sizing::TOKEN_SIZE))
        .style(styles::token(kind, alpha))
        .into()
}

fn stack<'a, Message: 'a>(kinds: &[TokenKind], alpha: f32) -> Element<'a, Message> {
    kinds
        .iter()
        .fold(
            Column::new().spacing(spacing::XS).align_x(Alignment::Center),
            |column, kind| column.push(token(*kind, alpha)),
        )
        .into()
}

fn line<'a, Message: 'a>(kinds: &[TokenKind], alpha: f32) -> Element<'a, Message> {
    kinds
        .iter()
        .fold(
            Row::new().spacing(spacing::XS).align_y(Vertical::Center),
            |row, kind| row.push(token(*kind, alpha)),
        )
        .into()
}

/// Renders `flow` with every color multiplied by `alpha`.
pub fn view<'a, Message: 'a>(flow: &TokenFlow, alpha: f32) -> Element<'a, Message> {
    let (inputs, outputs) = match flow.shape() {
        FlowShape::Split => (line(&flow.inputs, alpha), stack(&flow.outputs, alpha)),
        FlowShape::Merge => (stack(&flow.inputs, alpha), line(&flow.outputs, alpha)),
        FlowShape::Direct => (line(&flow.inputs, alpha), line(&flow.outputs, alpha)),
    };

    Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .push(inputs)
        .push(Text::new("→").size(typography::TITLE_LG))
        .push(outputs)
        .into()
}
