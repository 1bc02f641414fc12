// SPDX-License-Identifier: MPL-2.0
//! Iced widgets for the rail demo.
//!
//! - [`rail_view`] - card stage, details and control pill
//! - [`token_flow`] - reaction diagrams drawn inside cards
//! - [`drag`] - press/release tracking that feeds swipe detection
//! - [`styles`] - widget styles
//! - [`design_tokens`] - colors, spacing and sizes

pub mod design_tokens;
pub mod drag;
pub mod rail_view;
pub mod styles;
pub mod token_flow;
