// SPDX-License-Identifier: MPL-2.0
//! Rail domain types.
//!
//! Value objects for the rail's gesture tuning and scroll input, independent
//! of any presentation framework.

pub mod newtypes;

pub use newtypes::{
    AutoplayInterval, BufferCapacity, CooldownWindow, NoiseFloor, ScrollProgress, StepThreshold,
    SwipeConfidence,
};
