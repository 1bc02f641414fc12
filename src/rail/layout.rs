// SPDX-License-Identifier: MPL-2.0
//! Card window and pose targets.
//!
//! The rail shows the active card plus up to two neighbours on each side.
//! Each neighbour gets a pose (translation, depth, scale, tilt and fade)
//! that the renderer interpolates towards.

use crate::config::VISIBLE_RADIUS;
use crate::rail::controller::wrap;

/// Horizontal distance between neighbouring cards, in pixels.
const CARD_SPACING: f32 = 300.0;
/// Depth pushed back per step away from the centre, in pixels.
const DEPTH_STEP: f32 = 160.0;
const SIDE_SCALE: f32 = 0.82;
/// Y-axis tilt per offset, in degrees.
const TILT_STEP: f32 = -18.0;
const OPACITY_FALLOFF: f32 = 0.5;
const MIN_OPACITY: f32 = 0.08;
const BLUR_STEP: f32 = 6.0;
const SIDE_BRIGHTNESS: f32 = 0.45;

/// Target visual state of a card at a given offset from the active one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardPose {
    pub x: f32,
    pub z: f32,
    pub scale: f32,
    pub rotate_y: f32,
    pub opacity: f32,
    pub blur: f32,
    pub brightness: f32,
}

impl CardPose {
    #[must_use]
    pub fn for_offset(offset: i64) -> Self {
        // Offsets never exceed the visible radius.
        #[allow(clippy::cast_precision_loss)]
        let signed = offset as f32;
        let dist = signed.abs();

        if offset == 0 {
            return Self {
                x: 0.0,
                z: 0.0,
                scale: 1.0,
                rotate_y: 0.0,
                opacity: 1.0,
                blur: 0.0,
                brightness: 1.0,
            };
        }

        Self {
            x: signed * CARD_SPACING,
            z: -dist * DEPTH_STEP,
            scale: SIDE_SCALE,
            rotate_y: signed * TILT_STEP,
            opacity: (1.0 - dist * OPACITY_FALLOFF).max(MIN_OPACITY),
            blur: dist * BLUR_STEP,
            brightness: SIDE_BRIGHTNESS,
        }
    }

    #[must_use]
    pub fn is_center(&self) -> bool {
        self.x == 0.0
    }
}

/// A card slot in the visible window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibleCard {
    /// Position relative to the active card.
    pub offset: i64,
    /// Index of the item shown in this slot.
    pub index: usize,
    pub pose: CardPose,
}

/// Cards to draw around `active`, from leftmost to rightmost.
///
/// Without looping, slots that would fall before the first or after the
/// last item are left out. With looping they wrap, so short rails may show
/// the same item in more than one slot.
#[must_use]
pub fn visible_cards(active: usize, count: usize, loop_enabled: bool) -> Vec<VisibleCard> {
    let Ok(count) = i64::try_from(count) else {
        return Vec::new();
    };
    if count == 0 {
        return Vec::new();
    }
    let active = i64::try_from(active).unwrap_or(0);

    (-VISIBLE_RADIUS..=VISIBLE_RADIUS)
        .filter_map(|offset| {
            let absolute = active + offset;
            if !loop_enabled && !(0..count).contains(&absolute) {
                return None;
            }
            let index = usize::try_from(wrap(0, count, absolute)).ok()?;
            Some(VisibleCard {
                offset,
                index,
                pose: CardPose::for_offset(offset),
            })
        })
        .collect()
}

/// Position counter shown under the rail, e.g. `"2 / 4"`.
#[must_use]
pub fn counter_label(active: usize, count: usize) -> String {
    format!("{} / {}", active + 1, count)
}
