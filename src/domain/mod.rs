// SPDX-License-Identifier: MPL-2.0
//! Domain layer - validated value objects shared by the rail core and the demo shell.
//!
//! # Modules
//!
//! - [`rail`]: Rail value objects ([`StepThreshold`](rail::StepThreshold),
//!   [`CooldownWindow`](rail::CooldownWindow), [`ScrollProgress`](rail::ScrollProgress),
//!   [`BufferCapacity`](rail::BufferCapacity))

pub mod rail;
