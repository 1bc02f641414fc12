// SPDX-License-Identifier: MPL-2.0
//! Active-index state and change notification.
//!
//! The controller is the single owner of the active index. Every navigation
//! source (gesture, scroll, autoplay, buttons) ends up here, and the
//! controller alone decides how a requested index is normalized:
//! wrapped modulo the item count when looping, clamped to the ends otherwise.

use std::fmt;
use std::num::NonZeroUsize;

/// Maps `value` into the half-open range `[min, max)` with modular wrap-around.
///
/// Negative inputs wrap from the end, so `wrap(0, 4, -1) == 3`. When the range
/// is empty `min` is returned.
///
/// # Example
///
/// ```
/// use focus_rail::rail::wrap;
///
/// assert_eq!(wrap(0, 4, 5), 1);
/// assert_eq!(wrap(0, 4, -6), 2);
/// ```
#[must_use]
pub fn wrap(min: i64, max: i64, value: i64) -> i64 {
    let range = max - min;
    if range <= 0 {
        return min;
    }
    min + (value - min).rem_euclid(range)
}

/// A committed change of the active index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexChange {
    pub previous: usize,
    pub current: usize,
}

/// Handle returned by [`IndexController::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Box<dyn FnMut(&IndexChange)>;

/// Owns the active index of a rail with `count` items.
pub struct IndexController {
    active: usize,
    count: NonZeroUsize,
    loop_enabled: bool,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener: u64,
}

impl fmt::Debug for IndexController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IndexController")
            .field("active", &self.active)
            .field("count", &self.count)
            .field("loop_enabled", &self.loop_enabled)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl IndexController {
    /// Creates a controller positioned at `initial`, normalized like any other jump.
    #[must_use]
    pub fn new(count: NonZeroUsize, initial: i64, loop_enabled: bool) -> Self {
        let mut controller = Self {
            active: 0,
            count,
            loop_enabled,
            listeners: Vec::new(),
            next_listener: 0,
        };
        controller.active = controller.resolve(initial);
        controller
    }

    #[must_use]
    pub fn active(&self) -> usize {
        self.active
    }

    #[must_use]
    pub fn count(&self) -> NonZeroUsize {
        self.count
    }

    #[must_use]
    pub fn loop_enabled(&self) -> bool {
        self.loop_enabled
    }

    /// Normalizes a requested index without applying it.
    #[must_use]
    pub fn resolve(&self, requested: i64) -> usize {
        let count = i64::try_from(self.count.get()).unwrap_or(i64::MAX);
        let resolved = if self.loop_enabled {
            wrap(0, count, requested)
        } else {
            requested.clamp(0, count - 1)
        };
        usize::try_from(resolved).unwrap_or(0)
    }

    /// Moves to `requested`, notifying listeners if the index actually changed.
    pub fn jump_to(&mut self, requested: i64) -> Option<IndexChange> {
        let target = self.resolve(requested);
        if target == self.active {
            return None;
        }

        let change = IndexChange {
            previous: self.active,
            current: target,
        };
        self.active = target;
        for (_, listener) in &mut self.listeners {
            listener(&change);
        }
        Some(change)
    }

    /// Moves by a signed number of items relative to the active index.
    pub fn step_by(&mut self, delta: i64) -> Option<IndexChange> {
        let current = i64::try_from(self.active).unwrap_or(0);
        self.jump_to(current.saturating_add(delta))
    }

    pub fn next(&mut self) -> Option<IndexChange> {
        self.step_by(1)
    }

    pub fn previous(&mut self) -> Option<IndexChange> {
        self.step_by(-1)
    }

    #[must_use]
    pub fn is_at_first(&self) -> bool {
        self.active == 0
    }

    #[must_use]
    pub fn is_at_last(&self) -> bool {
        self.active + 1 == self.count.get()
    }

    /// Whether [`next`](Self::next) can move. Always true when looping over
    /// more than one item.
    #[must_use]
    pub fn has_next(&self) -> bool {
        if self.loop_enabled {
            self.count.get() > 1
        } else {
            !self.is_at_last()
        }
    }

    #[must_use]
    pub fn has_previous(&self) -> bool {
        if self.loop_enabled {
            self.count.get() > 1
        } else {
            !self.is_at_first()
        }
    }

    /// Registers a callback invoked after every committed index change.
    pub fn subscribe(&mut self, listener: impl FnMut(&IndexChange) + 'static) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes a listener. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn count(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).expect("count must be non-zero")
    }

    #[test]
    fn wrap_handles_positive_and_negative_overflow() {
        assert_eq!(wrap(0, 4, 0), 0);
        assert_eq!(wrap(0, 4, 3), 3);
        assert_eq!(wrap(0, 4, 4), 0);
        assert_eq!(wrap(0, 4, 5), 1);
        assert_eq!(wrap(0, 4, -1), 3);
        assert_eq!(wrap(0, 4, -6), 2);
        assert_eq!(wrap(2, 5, 1), 4);
    }

    #[test]
    fn wrap_with_empty_range_returns_min() {
        assert_eq!(wrap(3, 3, 10), 3);
        assert_eq!(wrap(5, 2, 10), 5);
    }

    #[test]
    fn looping_controller_wraps_around() {
        let mut controller = IndexController::new(count(4), 3, true);
        assert_eq!(
            controller.next(),
            Some(IndexChange {
                previous: 3,
                current: 0
            })
        );
        assert_eq!(
            controller.previous(),
            Some(IndexChange {
                previous: 0,
                current: 3
            })
        );
    }

    #[test]
    fn non_looping_controller_clamps_at_ends() {
        let mut controller = IndexController::new(count(4), 3, false);
        assert_eq!(controller.next(), None);
        assert_eq!(controller.active(), 3);
        assert!(!controller.has_next());

        assert_eq!(controller.jump_to(-5).map(|c| c.current), Some(0));
        assert_eq!(controller.previous(), None);
        assert!(!controller.has_previous());
    }

    #[test]
    fn initial_index_is_normalized() {
        assert_eq!(IndexController::new(count(4), 6, true).active(), 2);
        assert_eq!(IndexController::new(count(4), 6, false).active(), 3);
        assert_eq!(IndexController::new(count(4), -1, true).active(), 3);
    }

    #[test]
    fn single_item_never_changes() {
        for loop_enabled in [true, false] {
            let mut controller = IndexController::new(count(1), 0, loop_enabled);
            assert_eq!(controller.next(), None);
            assert_eq!(controller.previous(), None);
            assert_eq!(controller.jump_to(17), None);
            assert_eq!(controller.active(), 0);
            assert!(!controller.has_next());
            assert!(!controller.has_previous());
        }
    }

    #[test]
    fn listeners_receive_changes_until_unsubscribed() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut controller = IndexController::new(count(4), 0, true);

        let sink = Rc::clone(&seen);
        let id = controller.subscribe(move |change| sink.borrow_mut().push(change.current));

        controller.next();
        controller.jump_to(1);
        controller.step_by(2);
        assert_eq!(*seen.borrow(), vec![1, 3]);

        assert!(controller.unsubscribe(id));
        assert!(!controller.unsubscribe(id));
        controller.next();
        assert_eq!(*seen.borrow(), vec![1, 3]);
        assert_eq!(controller.active(), 0);
    }

    #[test]
    fn step_by_moves_multiple_items() {
        let mut controller = IndexController::new(count(5), 2, true);
        assert_eq!(controller.step_by(-2).map(|c| c.current), Some(0));
        assert_eq!(controller.step_by(-2).map(|c| c.current), Some(3));
    }
}
