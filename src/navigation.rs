//! Section navigation for the single-page layout: a fixed catalog of five
//! full-viewport sections plus the debounced, clamped index machine that
//! wheel, touch and marker input all feed. The machine is deliberately
//! pure — callers pass the current time in milliseconds, so every rule
//! here runs under plain unit tests with a made-up clock.

/// Cooldown after a directional step during which further wheel/swipe
/// input is ignored, so one flick of the wheel moves one section.
pub const SECTION_COOLDOWN_MS: f64 = 1000.0;

/// Minimum vertical travel before a touch gesture counts as a swipe
/// rather than an accidental tap.
pub const SWIPE_THRESHOLD_PX: f64 = 50.0;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Section {
    pub id: &'static str,
    pub title: &'static str,
}

/// The page, in order. Fixed at compile time, never mutated.
pub const SECTIONS: [Section; 5] = [
    Section { id: "hero", title: "Home" },
    Section { id: "about", title: "About" },
    Section { id: "services", title: "Services" },
    Section { id: "portfolio", title: "Portfolio" },
    Section { id: "contact", title: "Contact" },
];

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    /// Wheel input: any downward delta pages forward, any upward delta
    /// pages backward. A zero delta is no input at all.
    pub fn from_wheel_delta(delta_y: f64) -> Option<Self> {
        if delta_y > 0.0 {
            Some(Direction::Forward)
        } else if delta_y < 0.0 {
            Some(Direction::Backward)
        } else {
            None
        }
    }

    /// Touch input: the delta is start minus end, so a positive value is
    /// a finger moving up the screen (paging forward). Anything within
    /// [`SWIPE_THRESHOLD_PX`] is discarded as a tap.
    pub fn from_swipe_delta(delta_y: f64) -> Option<Self> {
        if delta_y.abs() <= SWIPE_THRESHOLD_PX {
            return None;
        }
        Self::from_wheel_delta(delta_y)
    }
}

/// Pairs one `touchstart` with the following `touchend`.
#[derive(Clone, Copy, Default, PartialEq, Debug)]
pub struct SwipeTracker {
    start_y: Option<f64>,
}

impl SwipeTracker {
    pub fn begin(&mut self, y: f64) {
        self.start_y = Some(y);
    }

    /// Consumes the recorded start position. A `touchend` without a
    /// matching `touchstart` yields nothing.
    pub fn finish(&mut self, y: f64) -> Option<Direction> {
        let start = self.start_y.take()?;
        Direction::from_swipe_delta(start - y)
    }
}

/// Owns the current section index — the single source of truth for which
/// panel is on screen. Directional input is debounced and clamped;
/// explicit marker selection is immediate. Nothing here can fail:
/// out-of-range or mistimed input is absorbed as a no-op.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Navigator {
    current: usize,
    cooldown_until: f64,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    pub fn new() -> Self {
        Navigator {
            current: 0,
            cooldown_until: 0.0,
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn is_debouncing(&self, now_ms: f64) -> bool {
        now_ms < self.cooldown_until
    }

    /// Steps one section forward or backward, returning whether the index
    /// changed. Ignored entirely while the cooldown runs. The cooldown is
    /// armed even when the index is already clamped at an end, so leaning
    /// on the wheel at a boundary cannot queue up an instant move the
    /// other way.
    pub fn advance(&mut self, direction: Direction, now_ms: f64) -> bool {
        if self.is_debouncing(now_ms) {
            return false;
        }
        self.cooldown_until = now_ms + SECTION_COOLDOWN_MS;
        match direction {
            Direction::Forward if self.current + 1 < SECTIONS.len() => {
                self.current += 1;
                true
            }
            Direction::Backward if self.current > 0 => {
                self.current -= 1;
                true
            }
            _ => false,
        }
    }

    /// Jumps straight to `index`. Marker clicks use this: it bypasses the
    /// debounce and leaves any running cooldown untouched. Out-of-range
    /// indices are rejected without changing state.
    pub fn select(&mut self, index: usize) -> bool {
        if index < SECTIONS.len() {
            self.current = index;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn starts_at_the_hero_section() {
        let nav = Navigator::new();
        assert_eq!(nav.current(), 0);
        assert!(!nav.is_debouncing(0.0));
    }

    #[test]
    fn backward_at_the_first_section_is_a_noop() {
        let mut nav = Navigator::new();
        assert!(!nav.advance(Direction::Backward, 0.0));
        assert_eq!(nav.current(), 0);
    }

    #[test]
    fn forward_at_the_last_section_is_a_noop() {
        let mut nav = Navigator::new();
        nav.select(SECTIONS.len() - 1);
        assert!(!nav.advance(Direction::Forward, 0.0));
        assert_eq!(nav.current(), SECTIONS.len() - 1);
    }

    #[test]
    fn directional_input_is_swallowed_during_the_cooldown() {
        let mut nav = Navigator::new();
        assert!(nav.advance(Direction::Forward, 0.0));
        assert_eq!(nav.current(), 1);
        // Instant repeat, then another just before the window closes.
        assert!(!nav.advance(Direction::Forward, 0.0));
        assert!(!nav.advance(Direction::Forward, SECTION_COOLDOWN_MS - 1.0));
        assert_eq!(nav.current(), 1);
        // Window elapsed.
        assert!(nav.advance(Direction::Forward, SECTION_COOLDOWN_MS));
        assert_eq!(nav.current(), 2);
    }

    #[test]
    fn a_clamped_step_still_arms_the_cooldown() {
        let mut nav = Navigator::new();
        assert!(!nav.advance(Direction::Backward, 0.0));
        // The failed backward step armed the window, so this is swallowed.
        assert!(!nav.advance(Direction::Forward, 10.0));
        assert_eq!(nav.current(), 0);
        assert!(nav.advance(Direction::Forward, SECTION_COOLDOWN_MS));
        assert_eq!(nav.current(), 1);
    }

    #[test]
    fn stepping_through_every_section_and_back() {
        let mut nav = Navigator::new();
        let mut now = 0.0;
        for expected in 1..SECTIONS.len() {
            assert!(nav.advance(Direction::Forward, now));
            assert_eq!(nav.current(), expected);
            now += SECTION_COOLDOWN_MS;
        }
        for expected in (0..SECTIONS.len() - 1).rev() {
            assert!(nav.advance(Direction::Backward, now));
            assert_eq!(nav.current(), expected);
            now += SECTION_COOLDOWN_MS;
        }
    }

    #[test]
    fn selection_bypasses_a_running_cooldown() {
        let mut nav = Navigator::new();
        assert!(nav.advance(Direction::Forward, 0.0));
        assert!(nav.is_debouncing(1.0));
        assert!(nav.select(4));
        assert_eq!(nav.current(), 4);
        // Selecting neither cleared nor re-armed the directional window.
        assert!(!nav.advance(Direction::Backward, 2.0));
        assert!(nav.advance(Direction::Backward, SECTION_COOLDOWN_MS));
        assert_eq!(nav.current(), 3);
    }

    #[test]
    fn out_of_range_selection_changes_nothing() {
        let mut nav = Navigator::new();
        nav.select(2);
        assert!(!nav.select(SECTIONS.len()));
        assert!(!nav.select(usize::MAX));
        assert_eq!(nav.current(), 2);
    }

    #[test]
    fn wheel_deltas_map_sign_to_direction() {
        assert_eq!(Direction::from_wheel_delta(120.0), Some(Direction::Forward));
        assert_eq!(Direction::from_wheel_delta(-0.5), Some(Direction::Backward));
        assert_eq!(Direction::from_wheel_delta(0.0), None);
        assert_eq!(Direction::from_wheel_delta(f64::NAN), None);
    }

    #[test]
    fn taps_at_or_below_the_swipe_threshold_are_ignored() {
        assert_eq!(Direction::from_swipe_delta(SWIPE_THRESHOLD_PX), None);
        assert_eq!(Direction::from_swipe_delta(-SWIPE_THRESHOLD_PX), None);
        assert_eq!(
            Direction::from_swipe_delta(SWIPE_THRESHOLD_PX + 1.0),
            Some(Direction::Forward)
        );
        assert_eq!(
            Direction::from_swipe_delta(-(SWIPE_THRESHOLD_PX + 1.0)),
            Some(Direction::Backward)
        );
    }

    #[test]
    fn swipe_tracker_pairs_start_and_end() {
        let mut swipe = SwipeTracker::default();

        // Stray end without a start.
        assert_eq!(swipe.finish(100.0), None);

        swipe.begin(400.0);
        assert_eq!(swipe.finish(200.0), Some(Direction::Forward));
        // The gesture was consumed; a second end does nothing.
        assert_eq!(swipe.finish(0.0), None);

        swipe.begin(100.0);
        assert_eq!(swipe.finish(300.0), Some(Direction::Backward));

        swipe.begin(100.0);
        assert_eq!(swipe.finish(130.0), None);
    }

    proptest! {
        #[test]
        fn index_stays_in_range_for_any_event_sequence(
            steps in proptest::collection::vec((any::<bool>(), 0.0f64..10_000.0), 0..64)
        ) {
            let mut nav = Navigator::new();
            for (forward, now) in steps {
                let direction = if forward { Direction::Forward } else { Direction::Backward };
                nav.advance(direction, now);
                prop_assert!(nav.current() < SECTIONS.len());
            }
        }

        #[test]
        fn an_instant_burst_moves_at_most_one_section(count in 1usize..32) {
            let mut nav = Navigator::new();
            let mut moves = 0;
            for _ in 0..count {
                if nav.advance(Direction::Forward, 0.0) {
                    moves += 1;
                }
            }
            prop_assert_eq!(moves, 1);
            prop_assert_eq!(nav.current(), 1);
        }

        #[test]
        fn in_range_selection_is_always_immediate(index in 0usize..SECTIONS.len()) {
            let mut nav = Navigator::new();
            nav.advance(Direction::Forward, 0.0); // arm a cooldown first
            prop_assert!(nav.select(index));
            prop_assert_eq!(nav.current(), index);
        }
    }
}
