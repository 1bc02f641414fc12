// SPDX-License-Identifier: MPL-2.0
//! Rail events recorded for diagnostics.

use crate::rail::{InputMode, RejectReason, StepCause};
use std::fmt;
use std::time::Instant;

/// What happened.
#[derive(Debug, Clone, PartialEq)]
pub enum RailEventKind {
    IndexCommitted {
        previous: usize,
        current: usize,
        cause: StepCause,
    },
    GestureRejected {
        reason: RejectReason,
    },
    ModeChanged {
        mode: InputMode,
    },
    ScrollDetached,
    ScrollAttached,
    /// The active item was activated; `href` is its navigation target, if any.
    Activated {
        index: usize,
        href: Option<String>,
    },
}

/// A timestamped rail event.
#[derive(Debug, Clone, PartialEq)]
pub struct RailEvent {
    pub at: Instant,
    pub kind: RailEventKind,
}

impl RailEvent {
    #[must_use]
    pub fn new(at: Instant, kind: RailEventKind) -> Self {
        Self { at, kind }
    }
}

impl fmt::Display for RailEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RailEventKind::IndexCommitted {
                previous,
                current,
                cause,
            } => write!(f, "{} {} → {}", cause.label(), previous, current),
            RailEventKind::GestureRejected { reason } => {
                let reason = match reason {
                    RejectReason::Cooldown => "cooldown",
                    RejectReason::Noise => "noise",
                    RejectReason::WeakSwipe => "weak swipe",
                };
                write!(f, "rejected ({})", reason)
            }
            RailEventKind::ModeChanged { mode } => write!(f, "mode {}", mode.label()),
            RailEventKind::ScrollDetached => write!(f, "scroll detached"),
            RailEventKind::ScrollAttached => write!(f, "scroll attached"),
            RailEventKind::Activated {
                index,
                href: Some(href),
            } => write!(f, "activate {} → {}", index, href),
            RailEventKind::Activated { index, href: None } => write!(f, "activate {}", index),
        }
    }
}

impl fmt::Display for RailEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.kind.fmt(f)
    }
}
