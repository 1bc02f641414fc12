// SPDX-License-Identifier: MPL-2.0
//! The rail facade.
//!
//! [`FocusRail`] wires the items, the index controller, the gesture
//! aggregator, the scroll link and autoplay together behind a single
//! [`handle`](FocusRail::handle) entry point. Input that does not belong to
//! the current [`InputMode`] is dropped here, before it reaches any state.

use crate::diagnostics::{RailEvent, RailEventKind, RailEventLog};
use crate::domain::rail::{AutoplayInterval, BufferCapacity};
use crate::rail::autoplay::Autoplay;
use crate::rail::controller::{IndexChange, IndexController, ListenerId};
use crate::rail::gesture::{
    DragRelease, GestureAggregator, GestureOutcome, GestureSettings, RailKey, RejectReason,
    WheelDelta,
};
use crate::rail::item::{NavTarget, RailItem, RailItems};
use crate::rail::layout::{counter_label, visible_cards, VisibleCard};
use crate::rail::scroll::ScrollLink;
use crate::rail::InputMode;
use std::time::Instant;

/// Everything a rail needs besides its items.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RailSettings {
    pub loop_enabled: bool,
    pub initial_index: i64,
    pub mode: InputMode,
    pub gesture: GestureSettings,
    pub autoplay_enabled: bool,
    pub autoplay_interval: AutoplayInterval,
    pub diagnostics_capacity: BufferCapacity,
}

impl Default for RailSettings {
    fn default() -> Self {
        Self {
            loop_enabled: crate::config::DEFAULT_LOOP_ENABLED,
            initial_index: crate::config::DEFAULT_INITIAL_INDEX,
            mode: InputMode::default(),
            gesture: GestureSettings::default(),
            autoplay_enabled: crate::config::DEFAULT_AUTOPLAY_ENABLED,
            autoplay_interval: AutoplayInterval::default(),
            diagnostics_capacity: BufferCapacity::default(),
        }
    }
}

/// One unit of host input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RailInput {
    Wheel(WheelDelta),
    DragReleased(DragRelease),
    Key(RailKey),
    /// Next button.
    Next,
    /// Previous button.
    Previous,
    /// Click on the card at this offset from the active one.
    SelectOffset(i64),
    /// Container scroll progress, nominally in `[0, 1]`.
    ScrollProgress(f32),
    AutoplayTick,
}

/// Source of a committed index change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepCause {
    Wheel,
    Swipe,
    Keyboard,
    Button,
    CardSelect,
    Scroll,
    Autoplay,
    Jump,
}

impl StepCause {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            StepCause::Wheel => "wheel",
            StepCause::Swipe => "swipe",
            StepCause::Keyboard => "keyboard",
            StepCause::Button => "button",
            StepCause::CardSelect => "card",
            StepCause::Scroll => "scroll",
            StepCause::Autoplay => "autoplay",
            StepCause::Jump => "jump",
        }
    }
}

/// A focus rail over a non-empty item list.
#[derive(Debug)]
pub struct FocusRail {
    items: RailItems,
    controller: IndexController,
    gesture: GestureAggregator,
    scroll: ScrollLink,
    autoplay: Autoplay,
    mode: InputMode,
    log: RailEventLog,
}

impl FocusRail {
    #[must_use]
    pub fn new(items: RailItems, settings: RailSettings) -> Self {
        let controller = IndexController::new(
            items.count(),
            settings.initial_index,
            settings.loop_enabled,
        );

        Self {
            items,
            controller,
            gesture: GestureAggregator::new(settings.gesture),
            scroll: ScrollLink::new(settings.mode == InputMode::ScrollDriven),
            autoplay: Autoplay::new(settings.autoplay_enabled, settings.autoplay_interval),
            mode: settings.mode,
            log: RailEventLog::new(settings.diagnostics_capacity),
        }
    }

    /// Processes one input received at `now`.
    ///
    /// Returns the index change if the input moved the rail.
    pub fn handle(&mut self, input: RailInput, now: Instant) -> Option<IndexChange> {
        match input {
            RailInput::Wheel(delta) => {
                if self.mode != InputMode::Gesture {
                    return None;
                }
                let outcome = self.gesture.on_wheel(delta, now);
                self.apply_outcome(outcome, StepCause::Wheel, now)
            }
            RailInput::DragReleased(release) => {
                if self.mode != InputMode::Gesture {
                    return None;
                }
                let outcome = self.gesture.on_drag_release(release);
                self.apply_outcome(outcome, StepCause::Swipe, now)
            }
            RailInput::Key(key) => {
                if self.mode != InputMode::Gesture {
                    return None;
                }
                let change = self.controller.step_by(key.step().delta());
                self.record_change(change, StepCause::Keyboard, now)
            }
            RailInput::Next => {
                let change = self.controller.next();
                self.record_change(change, StepCause::Button, now)
            }
            RailInput::Previous => {
                let change = self.controller.previous();
                self.record_change(change, StepCause::Button, now)
            }
            RailInput::SelectOffset(offset) => {
                let change = self.controller.step_by(offset);
                self.record_change(change, StepCause::CardSelect, now)
            }
            RailInput::ScrollProgress(progress) => {
                if self.mode != InputMode::ScrollDriven {
                    return None;
                }
                let change = self.scroll.on_progress(&mut self.controller, progress);
                self.record_change(change, StepCause::Scroll, now)
            }
            RailInput::AutoplayTick => {
                if !self.autoplay.should_advance() {
                    return None;
                }
                let change = self.controller.next();
                self.record_change(change, StepCause::Autoplay, now)
            }
        }
    }

    /// Moves directly to `index`, normalized like any other request.
    pub fn jump_to(&mut self, index: i64, now: Instant) -> Option<IndexChange> {
        let change = self.controller.jump_to(index);
        self.record_change(change, StepCause::Jump, now)
    }

    /// Switches the input mode. Gesture state is discarded and the scroll
    /// link follows the mode.
    pub fn set_mode(&mut self, mode: InputMode, now: Instant) {
        if mode == self.mode {
            return;
        }
        self.mode = mode;
        self.gesture.reset();
        match mode {
            InputMode::ScrollDriven => self.scroll.attach(),
            InputMode::Gesture => self.scroll.detach(),
        }
        tracing::info!(mode = mode.label(), "input mode changed");
        self.record(now, RailEventKind::ModeChanged { mode });
    }

    /// Stops following scroll progress. The active index is kept.
    pub fn detach_scroll(&mut self, now: Instant) {
        if !self.scroll.is_attached() {
            return;
        }
        self.scroll.detach();
        tracing::debug!("scroll link detached");
        self.record(now, RailEventKind::ScrollDetached);
    }

    /// Resumes following scroll progress. Has no effect in gesture mode.
    pub fn attach_scroll(&mut self, now: Instant) {
        if self.mode != InputMode::ScrollDriven || self.scroll.is_attached() {
            return;
        }
        self.scroll.attach();
        tracing::debug!("scroll link attached");
        self.record(now, RailEventKind::ScrollAttached);
    }

    pub fn set_hovering(&mut self, hovering: bool) {
        self.autoplay.set_hovering(hovering);
    }

    pub fn set_autoplay_enabled(&mut self, enabled: bool) {
        self.autoplay.set_enabled(enabled);
    }

    /// Hands the active item's navigation target to the caller.
    ///
    /// The rail performs no navigation itself; the activation is only logged.
    pub fn activate(&mut self, now: Instant) -> Option<&NavTarget> {
        let index = self.controller.active();
        let href = self
            .items
            .get(index)
            .and_then(RailItem::target)
            .map(|target| target.href().to_string());

        match &href {
            Some(href) => tracing::info!(index, href = %href, "item activated"),
            None => tracing::debug!(index, "item activated without target"),
        }
        self.record(now, RailEventKind::Activated { index, href });

        self.items.get(index).and_then(RailItem::target)
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&IndexChange) + 'static) -> ListenerId {
        self.controller.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.controller.unsubscribe(id)
    }

    #[must_use]
    pub fn active_index(&self) -> usize {
        self.controller.active()
    }

    #[must_use]
    pub fn active_item(&self) -> Option<&RailItem> {
        self.items.get(self.controller.active())
    }

    #[must_use]
    pub fn items(&self) -> &RailItems {
        &self.items
    }

    #[must_use]
    pub fn mode(&self) -> InputMode {
        self.mode
    }

    #[must_use]
    pub fn loop_enabled(&self) -> bool {
        self.controller.loop_enabled()
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.controller.has_next()
    }

    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.controller.has_previous()
    }

    #[must_use]
    pub fn autoplay(&self) -> &Autoplay {
        &self.autoplay
    }

    #[must_use]
    pub fn is_scroll_attached(&self) -> bool {
        self.scroll.is_attached()
    }

    #[must_use]
    pub fn counter_label(&self) -> String {
        counter_label(self.controller.active(), self.items.count().get())
    }

    #[must_use]
    pub fn visible_cards(&self) -> Vec<VisibleCard> {
        visible_cards(
            self.controller.active(),
            self.items.count().get(),
            self.controller.loop_enabled(),
        )
    }

    #[must_use]
    pub fn diagnostics(&self) -> &RailEventLog {
        &self.log
    }

    fn apply_outcome(
        &mut self,
        outcome: GestureOutcome,
        cause: StepCause,
        now: Instant,
    ) -> Option<IndexChange> {
        match outcome {
            GestureOutcome::Committed(step) => {
                let change = self.controller.step_by(step.delta());
                self.record_change(change, cause, now)
            }
            GestureOutcome::Accumulating(accumulated) => {
                tracing::trace!(accumulated, "wheel accumulating");
                None
            }
            GestureOutcome::Rejected(RejectReason::Noise) => {
                tracing::trace!("wheel noise ignored");
                None
            }
            GestureOutcome::Rejected(reason) => {
                tracing::debug!(?reason, cause = cause.label(), "gesture rejected");
                self.record(now, RailEventKind::GestureRejected { reason });
                None
            }
        }
    }

    fn record_change(
        &mut self,
        change: Option<IndexChange>,
        cause: StepCause,
        now: Instant,
    ) -> Option<IndexChange> {
        let change = change?;
        tracing::debug!(
            previous = change.previous,
            current = change.current,
            cause = cause.label(),
            "index committed"
        );
        self.record(
            now,
            RailEventKind::IndexCommitted {
                previous: change.previous,
                current: change.current,
                cause,
            },
        );
        Some(change)
    }

    fn record(&mut self, at: Instant, kind: RailEventKind) {
        self.log.push(RailEvent::new(at, kind));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rail::item::ItemId;
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;

    fn letters() -> RailItems {
        RailItems::new(
            ["A", "B", "C", "D"]
                .into_iter()
                .map(|title| RailItem::new(title, title))
                .collect(),
        )
        .expect("four items")
    }

    fn rail(loop_enabled: bool, mode: InputMode) -> FocusRail {
        FocusRail::new(
            letters(),
            RailSettings {
                loop_enabled,
                mode,
                ..RailSettings::default()
            },
        )
    }

    fn title(rail: &FocusRail) -> &str {
        rail.active_item().map(RailItem::title).unwrap_or_default()
    }

    #[test]
    fn non_looping_buttons_stop_at_ends() {
        let mut rail = rail(false, InputMode::Gesture);
        let now = Instant::now();

        assert_eq!(title(&rail), "A");
        rail.handle(RailInput::Next, now);
        assert_eq!(title(&rail), "B");
        rail.handle(RailInput::Next, now);
        rail.handle(RailInput::Next, now);
        assert_eq!(title(&rail), "D");
        assert_eq!(rail.handle(RailInput::Next, now), None);
        assert_eq!(title(&rail), "D");
        rail.handle(RailInput::Previous, now);
        assert_eq!(title(&rail), "C");
    }

    #[test]
    fn looping_buttons_wrap() {
        let mut rail = rail(true, InputMode::Gesture);
        let now = Instant::now();
        rail.handle(RailInput::Previous, now);
        assert_eq!(title(&rail), "D");
        rail.handle(RailInput::Next, now);
        assert_eq!(title(&rail), "A");
    }

    #[test]
    fn scroll_progress_selects_bands() {
        let mut rail = rail(true, InputMode::ScrollDriven);
        let now = Instant::now();

        let mut titles = Vec::new();
        for progress in [0.0, 0.3, 0.6, 0.95] {
            rail.handle(RailInput::ScrollProgress(progress), now);
            titles.push(title(&rail).to_string());
        }
        assert_eq!(titles, vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn scroll_mode_ignores_gestures() {
        let mut rail = rail(true, InputMode::ScrollDriven);
        let now = Instant::now();

        assert_eq!(
            rail.handle(RailInput::Wheel(WheelDelta::new(0.0, 500.0)), now),
            None
        );
        assert_eq!(rail.handle(RailInput::Key(RailKey::ArrowRight), now), None);
        assert_eq!(
            rail.handle(
                RailInput::DragReleased(DragRelease {
                    offset: -300.0,
                    velocity: -2000.0
                }),
                now
            ),
            None
        );
        assert_eq!(rail.active_index(), 0);
        assert!(rail.diagnostics().is_empty());
    }

    #[test]
    fn gesture_mode_ignores_scroll_progress() {
        let mut rail = rail(true, InputMode::Gesture);
        assert_eq!(
            rail.handle(RailInput::ScrollProgress(0.9), Instant::now()),
            None
        );
        assert_eq!(rail.active_index(), 0);
    }

    #[test]
    fn buttons_work_in_scroll_mode() {
        let mut rail = rail(true, InputMode::ScrollDriven);
        let change = rail.handle(RailInput::Next, Instant::now());
        assert_eq!(change.map(|c| c.current), Some(1));
    }

    #[test]
    fn wheel_burst_commits_single_step() {
        let mut rail = rail(true, InputMode::Gesture);
        let t0 = Instant::now();

        rail.handle(RailInput::Wheel(WheelDelta::new(0.0, 200.0)), t0);
        rail.handle(
            RailInput::Wheel(WheelDelta::new(0.0, 200.0)),
            t0 + Duration::from_millis(10),
        );
        assert_eq!(rail.active_index(), 1);

        let kinds: Vec<&RailEventKind> = rail.diagnostics().iter().map(|e| &e.kind).collect();
        assert!(matches!(
            kinds.as_slice(),
            [
                RailEventKind::IndexCommitted {
                    cause: StepCause::Wheel,
                    ..
                },
                RailEventKind::GestureRejected {
                    reason: RejectReason::Cooldown
                }
            ]
        ));
    }

    #[test]
    fn arrow_keys_navigate() {
        let mut rail = rail(true, InputMode::Gesture);
        let now = Instant::now();
        rail.handle(RailInput::Key(RailKey::ArrowLeft), now);
        assert_eq!(title(&rail), "D");
        rail.handle(RailInput::Key(RailKey::ArrowRight), now);
        rail.handle(RailInput::Key(RailKey::ArrowRight), now);
        assert_eq!(title(&rail), "B");
    }

    #[test]
    fn card_click_moves_by_offset() {
        let mut rail = rail(true, InputMode::Gesture);
        let now = Instant::now();
        rail.handle(RailInput::SelectOffset(2), now);
        assert_eq!(title(&rail), "C");
        rail.handle(RailInput::SelectOffset(-1), now);
        assert_eq!(title(&rail), "B");
    }

    #[test]
    fn autoplay_is_gated_by_hover_only() {
        let mut rail = FocusRail::new(
            letters(),
            RailSettings {
                autoplay_enabled: true,
                ..RailSettings::default()
            },
        );
        let now = Instant::now();

        rail.handle(RailInput::AutoplayTick, now);
        assert_eq!(rail.active_index(), 1);

        rail.set_hovering(true);
        assert_eq!(rail.handle(RailInput::AutoplayTick, now), None);

        rail.set_hovering(false);
        rail.handle(RailInput::AutoplayTick, now);
        assert_eq!(rail.active_index(), 2);

        rail.set_mode(InputMode::ScrollDriven, now);
        rail.handle(RailInput::AutoplayTick, now);
        assert_eq!(rail.active_index(), 3);
    }

    #[test]
    fn disabled_autoplay_ignores_ticks() {
        let mut rail = rail(true, InputMode::Gesture);
        assert_eq!(rail.handle(RailInput::AutoplayTick, Instant::now()), None);
    }

    #[test]
    fn detached_scroll_stops_following() {
        let mut rail = rail(true, InputMode::ScrollDriven);
        let now = Instant::now();

        rail.handle(RailInput::ScrollProgress(0.3), now);
        rail.detach_scroll(now);
        assert_eq!(rail.handle(RailInput::ScrollProgress(0.9), now), None);
        assert_eq!(rail.active_index(), 1);
        assert!(!rail.is_scroll_attached());

        rail.attach_scroll(now);
        rail.handle(RailInput::ScrollProgress(0.9), now);
        assert_eq!(rail.active_index(), 3);
    }

    #[test]
    fn switching_modes_toggles_scroll_link() {
        let mut rail = rail(true, InputMode::Gesture);
        let now = Instant::now();
        assert!(!rail.is_scroll_attached());

        rail.set_mode(InputMode::ScrollDriven, now);
        assert!(rail.is_scroll_attached());
        assert_eq!(
            rail.diagnostics().latest().map(|e| &e.kind),
            Some(&RailEventKind::ModeChanged {
                mode: InputMode::ScrollDriven
            })
        );

        rail.set_mode(InputMode::Gesture, now);
        assert!(!rail.is_scroll_attached());
    }

    #[test]
    fn listeners_follow_every_source() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut rail = rail(true, InputMode::Gesture);
        let now = Instant::now();

        let sink = Rc::clone(&seen);
        let id = rail.subscribe(move |change| sink.borrow_mut().push(change.current));

        rail.handle(RailInput::Next, now);
        rail.handle(RailInput::Key(RailKey::ArrowRight), now);
        rail.jump_to(0, now);
        assert_eq!(*seen.borrow(), vec![1, 2, 0]);

        assert!(rail.unsubscribe(id));
        rail.handle(RailInput::Next, now);
        assert_eq!(seen.borrow().len(), 3);
    }

    #[test]
    fn activate_returns_target_of_active_item() {
        let items = RailItems::new(vec![
            RailItem::new(1_i64, "Docs").with_target(NavTarget::new("/docs")),
            RailItem::new(2_i64, "Plain"),
        ])
        .expect("two items");
        let mut rail = FocusRail::new(items, RailSettings::default());
        let now = Instant::now();

        assert_eq!(rail.activate(now).map(NavTarget::href), Some("/docs"));
        rail.handle(RailInput::Next, now);
        assert_eq!(rail.activate(now), None);
        assert_eq!(rail.active_item().map(RailItem::id), Some(&ItemId::Number(2)));
    }

    #[test]
    fn single_item_rail_is_stable() {
        let items = RailItems::new(vec![RailItem::new("only", "Only")]).expect("one item");
        let mut rail = FocusRail::new(items, RailSettings::default());
        let now = Instant::now();

        for input in [
            RailInput::Next,
            RailInput::Previous,
            RailInput::SelectOffset(3),
            RailInput::Key(RailKey::ArrowRight),
        ] {
            assert_eq!(rail.handle(input, now), None);
        }
        assert_eq!(rail.active_index(), 0);
        assert_eq!(rail.counter_label(), "1 / 1");
    }

    #[test]
    fn visible_cards_follow_active_index() {
        let mut rail = rail(false, InputMode::Gesture);
        let now = Instant::now();
        rail.jump_to(1, now);
        let indices: Vec<usize> = rail.visible_cards().iter().map(|c| c.index).collect();
        assert_eq!(indices, vec![0, 1, 2, 3]);
        assert_eq!(rail.counter_label(), "2 / 4");
    }
}
