// SPDX-License-Identifier: MPL-2.0
//! In-memory record of rail activity.
//!
//! The rail pushes a [`RailEvent`] for every commit, rejection, mode switch
//! and activation into a [`CircularBuffer`] sized by [`BufferCapacity`]. The
//! demo shows the newest entries; tests use it to assert what happened.

mod buffer;
mod events;

pub use crate::domain::rail::BufferCapacity;
pub use buffer::CircularBuffer;
pub use events::{RailEvent, RailEventKind};

/// Event log type kept by [`crate::rail::FocusRail`].
pub type RailEventLog = CircularBuffer<RailEvent>;
