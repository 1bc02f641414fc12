// SPDX-License-Identifier: MPL-2.0
//! `focus_rail` is a focus-rail carousel: an ordered set of cards with one
//! active item, driven by wheel, swipe, keyboard, buttons, autoplay or the
//! scroll position of its container.
//!
//! The interaction core in [`rail`] is toolkit-independent. [`app`] and
//! [`ui`] host it in an iced demo window.

#![doc(html_root_url = "https://docs.rs/focus_rail/0.1.0")]

pub mod app;
pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod rail;
pub mod ui;

#[cfg(test)]
mod test_utils;
