//! Scroll-lock state machine for full-viewport sections.
//!
//! A section "arrives" when, scrolling down, its bottom edge settles near the
//! bottom of the viewport. The first arrival locks document scrolling until the
//! visitor continues; scrolling the section away re-arms it. The machine is
//! pure: it returns the side effects for the hook to carry out.

/// How far below the viewport bottom the section bottom may sit and still count as arrived.
pub const ARRIVE_SLACK_PX: f64 = 100.0;
/// Past this distance below the viewport bottom the section has been scrolled away.
pub const LEAVE_SLACK_PX: f64 = 150.0;
/// Room left for the fixed header when scrolling to the next section.
pub const HEADER_OFFSET_PX: f64 = 120.0;
/// How long a programmatic smooth scroll is given before samples count again.
pub const UNLOCK_SETTLE_MS: u32 = 1_000;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionGeometry {
    pub top: f64,
    pub bottom: f64,
    pub viewport_height: f64,
}

impl SectionGeometry {
    pub fn has_arrived(&self) -> bool {
        let vh = self.viewport_height;
        self.bottom <= vh + ARRIVE_SLACK_PX && self.bottom > vh * 0.5 && self.top < vh * 0.3
    }

    pub fn is_leaving(&self) -> bool {
        self.bottom > self.viewport_height + LEAVE_SLACK_PX
    }
}

/// Document offset to scroll to so the target sits just below the header.
pub fn target_scroll_top(target_top_in_viewport: f64, scroll_y: f64) -> f64 {
    target_top_in_viewport + scroll_y - HEADER_OFFSET_PX
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollLockState {
    /// Armed: native scrolling, will lock on arrival.
    Idle,
    /// Document scrolling is held.
    Locked,
    /// A programmatic scroll to the next section is in flight.
    Unlocking,
    /// Unlocked after having locked; re-arms once the section leaves.
    Spent,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollEvent {
    Sample(SectionGeometry),
    Continue,
    UnlockSettled,
    Teardown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    HoldDocument,
    ReleaseDocument,
    ScrollToTarget { smooth: bool },
    ScheduleUnlockSettle,
}

#[derive(Debug, Clone)]
pub struct ScrollLock {
    state: ScrollLockState,
    enabled: bool,
}

impl ScrollLock {
    pub fn new(enabled: bool) -> Self {
        Self {
            state: ScrollLockState::Idle,
            enabled,
        }
    }

    pub fn state(&self) -> ScrollLockState {
        self.state
    }

    pub fn is_locked(&self) -> bool {
        self.state == ScrollLockState::Locked
    }

    /// Switching off (reduced motion, or the caller disabling it) releases any hold.
    pub fn set_enabled(&mut self, enabled: bool) -> Vec<Effect> {
        if self.enabled == enabled {
            return Vec::new();
        }
        self.enabled = enabled;
        let was_locked = self.is_locked();
        self.state = ScrollLockState::Idle;
        if !enabled && was_locked {
            vec![Effect::ReleaseDocument]
        } else {
            Vec::new()
        }
    }

    pub fn transition(&mut self, event: ScrollEvent) -> Vec<Effect> {
        use ScrollLockState::*;

        if !self.enabled {
            // Content stays reachable by native scroll; continue jumps without animation.
            return match event {
                ScrollEvent::Continue => vec![Effect::ScrollToTarget { smooth: false }],
                _ => Vec::new(),
            };
        }

        let (next, effects) = match (self.state, event) {
            (Idle, ScrollEvent::Sample(g)) if g.has_arrived() => (Locked, vec![Effect::HoldDocument]),
            (Locked, ScrollEvent::Sample(g)) if g.is_leaving() => (Idle, vec![Effect::ReleaseDocument]),
            (Spent, ScrollEvent::Sample(g)) if g.is_leaving() => (Idle, Vec::new()),
            // Samples during the smooth scroll are ignored so it is not fought.
            (Unlocking, ScrollEvent::Sample(_)) => (Unlocking, Vec::new()),
            (state, ScrollEvent::Sample(_)) => (state, Vec::new()),

            (Locked, ScrollEvent::Continue) => (
                Unlocking,
                vec![
                    Effect::ReleaseDocument,
                    Effect::ScrollToTarget { smooth: true },
                    Effect::ScheduleUnlockSettle,
                ],
            ),
            (Idle | Spent, ScrollEvent::Continue) => (
                Unlocking,
                vec![
                    Effect::ScrollToTarget { smooth: true },
                    Effect::ScheduleUnlockSettle,
                ],
            ),
            (Unlocking, ScrollEvent::Continue) => (Unlocking, Vec::new()),

            (Unlocking, ScrollEvent::UnlockSettled) => (Spent, Vec::new()),
            (state, ScrollEvent::UnlockSettled) => (state, Vec::new()),

            (Locked, ScrollEvent::Teardown) => (Idle, vec![Effect::ReleaseDocument]),
            (_, ScrollEvent::Teardown) => (Idle, Vec::new()),
        };

        self.state = next;
        effects
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VH: f64 = 800.0;

    fn at(top: f64, bottom: f64) -> ScrollEvent {
        ScrollEvent::Sample(SectionGeometry {
            top,
            bottom,
            viewport_height: VH,
        })
    }

    fn arrived() -> ScrollEvent {
        at(-100.0, 820.0)
    }

    fn approaching() -> ScrollEvent {
        at(300.0, 1_200.0)
    }

    fn holds(effects: &[Effect]) -> usize {
        effects.iter().filter(|e| **e == Effect::HoldDocument).count()
    }

    #[test]
    fn arrival_geometry() {
        let g = |top, bottom| SectionGeometry { top, bottom, viewport_height: VH };
        assert!(g(0.0, 800.0).has_arrived());
        assert!(g(100.0, 900.0).has_arrived());
        assert!(!g(100.0, 901.0).has_arrived());
        // top must be above 30% of the viewport
        assert!(!g(240.0, 850.0).has_arrived());
        // bottom must stay in the lower half
        assert!(!g(-500.0, 400.0).has_arrived());
        assert!(g(0.0, 951.0).is_leaving());
        assert!(!g(0.0, 950.0).is_leaving());
    }

    #[test]
    fn locks_once_on_arrival() {
        let mut lock = ScrollLock::new(true);
        assert!(lock.transition(approaching()).is_empty());

        let effects = lock.transition(arrived());
        assert_eq!(effects, vec![Effect::HoldDocument]);
        assert!(lock.is_locked());

        let again = lock.transition(arrived());
        assert_eq!(holds(&again), 0);
        assert!(again.is_empty());
        assert!(lock.is_locked());
    }

    #[test]
    fn continue_releases_and_scrolls_once() {
        let mut lock = ScrollLock::new(true);
        lock.transition(arrived());

        let effects = lock.transition(ScrollEvent::Continue);
        assert_eq!(
            effects,
            vec![
                Effect::ReleaseDocument,
                Effect::ScrollToTarget { smooth: true },
                Effect::ScheduleUnlockSettle,
            ]
        );
        assert_eq!(lock.state(), ScrollLockState::Unlocking);
        assert!(!lock.is_locked());

        // a double click does not scroll twice
        assert!(lock.transition(ScrollEvent::Continue).is_empty());
    }

    #[test]
    fn samples_are_ignored_while_unlocking() {
        let mut lock = ScrollLock::new(true);
        lock.transition(arrived());
        lock.transition(ScrollEvent::Continue);

        assert!(lock.transition(arrived()).is_empty());
        assert!(lock.transition(at(0.0, 2_000.0)).is_empty());
        assert_eq!(lock.state(), ScrollLockState::Unlocking);

        lock.transition(ScrollEvent::UnlockSettled);
        assert_eq!(lock.state(), ScrollLockState::Spent);
        // still arrived after the settle window: no re-lock
        assert!(lock.transition(arrived()).is_empty());
    }

    #[test]
    fn leaving_rearms_the_section() {
        let mut lock = ScrollLock::new(true);
        lock.transition(arrived());
        lock.transition(ScrollEvent::Continue);
        lock.transition(ScrollEvent::UnlockSettled);

        assert!(lock.transition(at(200.0, 1_100.0)).is_empty());
        assert_eq!(lock.state(), ScrollLockState::Idle);
        assert_eq!(lock.transition(arrived()), vec![Effect::HoldDocument]);
    }

    #[test]
    fn scrolling_back_up_while_locked_releases() {
        let mut lock = ScrollLock::new(true);
        lock.transition(arrived());
        assert_eq!(lock.transition(at(200.0, 1_100.0)), vec![Effect::ReleaseDocument]);
        assert_eq!(lock.state(), ScrollLockState::Idle);
    }

    #[test]
    fn teardown_releases_a_held_document() {
        let mut lock = ScrollLock::new(true);
        lock.transition(arrived());
        assert_eq!(lock.transition(ScrollEvent::Teardown), vec![Effect::ReleaseDocument]);

        let mut idle = ScrollLock::new(true);
        assert!(idle.transition(ScrollEvent::Teardown).is_empty());
    }

    #[test]
    fn continue_without_lock_still_scrolls() {
        let mut lock = ScrollLock::new(true);
        assert_eq!(
            lock.transition(ScrollEvent::Continue),
            vec![Effect::ScrollToTarget { smooth: true }, Effect::ScheduleUnlockSettle]
        );
    }

    #[test]
    fn disabled_controller_never_locks() {
        let mut lock = ScrollLock::new(false);
        assert!(lock.transition(arrived()).is_empty());
        assert!(!lock.is_locked());
        assert_eq!(
            lock.transition(ScrollEvent::Continue),
            vec![Effect::ScrollToTarget { smooth: false }]
        );
        assert_eq!(lock.state(), ScrollLockState::Idle);
    }

    #[test]
    fn disabling_while_locked_releases() {
        let mut lock = ScrollLock::new(true);
        lock.transition(arrived());
        assert_eq!(lock.set_enabled(false), vec![Effect::ReleaseDocument]);
        assert!(!lock.is_locked());
        assert!(lock.set_enabled(false).is_empty());
        assert!(lock.set_enabled(true).is_empty());
        assert_eq!(lock.transition(arrived()), vec![Effect::HoldDocument]);
    }

    #[test]
    fn scroll_target_accounts_for_header() {
        assert_eq!(target_scroll_top(400.0, 1_000.0), 1_280.0);
    }
}
