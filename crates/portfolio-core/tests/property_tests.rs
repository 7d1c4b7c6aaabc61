//! Property-based tests for menu, navigation and reveal state
//!
//! Uses proptest to verify invariants that must hold for any click or
//! scroll sequence.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use portfolio_core::{
    Easing, MenuVisibility, MotionSettings, NavOrigin, NavOutcome, PageShell, RevealController,
    RevealPhase, ScrollBehavior, ScrollTarget, Section, ViewportEntry,
};
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

fn section_strategy() -> impl Strategy<Value = Section> {
    prop::sample::select(Section::ALL.to_vec())
}

/// Entries as a scrolling user would produce them: sections entering and
/// re-entering in any order, occasionally repeated
fn entries_strategy(max: usize) -> impl Strategy<Value = Vec<ViewportEntry>> {
    prop::collection::vec(section_strategy().prop_map(ViewportEntry::Entered), 0..max)
}

/// Identifiers that may or may not name a section
fn identifier_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        section_strategy().prop_map(|s| s.anchor().to_string()),
        "[a-z#]{0,12}",
    ]
}

#[derive(Clone, Default)]
struct Counter(Rc<Cell<usize>>);

impl ScrollTarget for Counter {
    fn scroll_into_view(&self, _behavior: ScrollBehavior) {
        self.0.set(self.0.get() + 1);
    }
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Even toggle counts close the menu, odd counts open it
    #[test]
    fn toggle_parity(toggles in 0usize..64) {
        let mut shell: PageShell<Counter> = PageShell::default();
        for _ in 0..toggles {
            shell.toggle_menu();
        }
        let expected = if toggles % 2 == 0 { MenuVisibility::Closed } else { MenuVisibility::Open };
        prop_assert_eq!(shell.menu().visibility(), expected);
    }

    /// Each section reveals at most once no matter how often it re-enters
    #[test]
    fn reveal_fires_once(entries in entries_strategy(64)) {
        let mut controller = RevealController::new();
        controller.mount();
        let mut revealed = Vec::new();
        for entry in &entries {
            revealed.extend(controller.handle(*entry));
        }

        let mut deduped = revealed.clone();
        deduped.sort();
        deduped.dedup();
        prop_assert_eq!(deduped.len(), revealed.len());
        prop_assert_eq!(controller.fired_count(), revealed.len() + 1);

        // Every section that entered is visible, nothing ever went back
        for entry in &entries {
            if let ViewportEntry::Entered(section) = entry {
                if *section != Section::Hero {
                    prop_assert_eq!(controller.phase(*section), RevealPhase::Visible);
                }
            }
        }
    }

    /// Navigation with any identifier never panics and scrolls at most once;
    /// only exact anchors scroll
    #[test]
    fn navigation_never_fails(id in identifier_strategy(), open in any::<bool>()) {
        let counter = Counter::default();
        let mut shell = PageShell::new(ScrollBehavior::Smooth);
        for section in Section::ALL {
            shell.register_section(section, counter.clone());
        }
        if open {
            shell.toggle_menu();
        }

        let outcome = shell.navigate_to_section(&id, NavOrigin::MenuLink);

        prop_assert!(!shell.menu().is_open());
        match outcome {
            NavOutcome::Scrolled(section) => {
                prop_assert_eq!(counter.0.get(), 1);
                prop_assert_eq!(id.trim_start_matches('#'), section.anchor());
            }
            NavOutcome::UnknownSection => prop_assert_eq!(counter.0.get(), 0),
            NavOutcome::NotMounted(_) => prop_assert!(false, "every section was registered"),
        }
    }

    /// Staggered delays grow with item index
    #[test]
    fn stagger_is_monotonic(stagger_ms in 0u64..1000, a in 0usize..50, b in 0usize..50) {
        let motion = MotionSettings {
            stagger: Duration::from_millis(stagger_ms),
            ..MotionSettings::default()
        };
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(motion.item_delay(lo) <= motion.item_delay(hi));
    }

    /// Sampled opacity never leaves [0, 1] and only moves toward visible
    #[test]
    fn sample_is_bounded(elapsed_ms in 0u64..5000, index in 0usize..12) {
        let motion = MotionSettings { easing: Easing::EaseInOut, ..MotionSettings::default() };
        let now = motion.sample(
            RevealPhase::Hidden,
            RevealPhase::Visible,
            Duration::from_millis(elapsed_ms),
            index,
        );
        let later = motion.sample(
            RevealPhase::Hidden,
            RevealPhase::Visible,
            Duration::from_millis(elapsed_ms + 50),
            index,
        );
        prop_assert!((0.0..=1.0).contains(&now.opacity));
        prop_assert!(later.opacity >= now.opacity);
        prop_assert!(later.offset_y <= now.offset_y);
    }
}
