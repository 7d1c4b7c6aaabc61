//! Page shell state: the mobile menu plus section navigation.

use crate::menu::{MenuState, MenuVisibility};
use crate::navigation::{NavOutcome, ScrollBehavior, ScrollTarget, SectionRegistry};
use crate::section::Section;

/// Where a navigation request came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavOrigin {
    /// Desktop navigation bar link
    NavBar,
    /// Link inside the expanded mobile menu
    MenuLink,
    /// The name in the top-left corner
    Brand,
}

/// Interactive state owned by the page.
///
/// Menu transitions: `Closed -> Open` on the menu button, `Open -> Closed` on
/// the menu button or on any navigation-link activation.
#[derive(Debug)]
pub struct PageShell<T> {
    menu: MenuState,
    sections: SectionRegistry<T>,
    scroll: ScrollBehavior,
}

impl<T> Default for PageShell<T> {
    fn default() -> Self {
        Self::new(ScrollBehavior::default())
    }
}

impl<T> PageShell<T> {
    pub fn new(scroll: ScrollBehavior) -> Self {
        Self {
            menu: MenuState::new(),
            sections: SectionRegistry::new(),
            scroll,
        }
    }

    pub fn menu(&self) -> &MenuState {
        &self.menu
    }

    pub fn scroll_behavior(&self) -> ScrollBehavior {
        self.scroll
    }

    pub fn toggle_menu(&mut self) -> MenuVisibility {
        let visibility = self.menu.toggle();
        tracing::debug!(?visibility, "Menu toggled");
        visibility
    }

    pub fn close_menu(&mut self) -> bool {
        self.menu.close()
    }

    /// Record the mounted element for a section
    pub fn register_section(&mut self, section: Section, target: T) {
        self.sections.register(section, target);
    }

    /// Forget the element of a section that left the page
    pub fn unregister_section(&mut self, section: Section) {
        if self.sections.unregister(section).is_some() {
            tracing::trace!(section = %section, "Unregistered scroll target");
        }
    }
}

impl<T: ScrollTarget> PageShell<T> {
    /// Handle a navigation-link activation.
    ///
    /// Closes the mobile menu if it is open, then scrolls the named section
    /// into view. Unknown or unmounted sections are ignored.
    pub fn navigate_to_section(&mut self, id: &str, origin: NavOrigin) -> NavOutcome {
        if self.close_menu() {
            tracing::debug!(?origin, "Closed menu on navigation");
        }

        let outcome = self.sections.scroll_to(id, self.scroll);
        tracing::debug!(target_id = id, ?origin, ?outcome, "Navigation");
        outcome
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;

    #[derive(Clone, Default)]
    struct Counter(Rc<Cell<usize>>);

    impl ScrollTarget for Counter {
        fn scroll_into_view(&self, _behavior: ScrollBehavior) {
            self.0.set(self.0.get() + 1);
        }
    }

    fn shell_with_all_sections() -> (PageShell<Counter>, Counter) {
        let counter = Counter::default();
        let mut shell = PageShell::new(ScrollBehavior::Smooth);
        for section in Section::ALL {
            shell.register_section(section, counter.clone());
        }
        (shell, counter)
    }

    #[test]
    fn menu_link_closes_open_menu() {
        let (mut shell, counter) = shell_with_all_sections();
        shell.toggle_menu();
        assert!(shell.menu().is_open());

        let outcome = shell.navigate_to_section("achievements", NavOrigin::MenuLink);

        assert_eq!(outcome, NavOutcome::Scrolled(Section::Achievements));
        assert!(!shell.menu().is_open());
        assert_eq!(counter.0.get(), 1);
    }

    #[test]
    fn navigation_keeps_closed_menu_closed() {
        let (mut shell, _) = shell_with_all_sections();
        shell.navigate_to_section("about", NavOrigin::NavBar);
        assert!(!shell.menu().is_open());
    }

    #[test]
    fn unknown_section_scrolls_nothing() {
        let (mut shell, counter) = shell_with_all_sections();
        let outcome = shell.navigate_to_section("does-not-exist", NavOrigin::NavBar);
        assert_eq!(outcome, NavOutcome::UnknownSection);
        assert_eq!(counter.0.get(), 0);
    }

    #[test]
    fn uses_configured_behavior() {
        let shell: PageShell<Counter> = PageShell::new(ScrollBehavior::Instant);
        assert_eq!(shell.scroll_behavior(), ScrollBehavior::Instant);
        assert_eq!(PageShell::<Counter>::default().scroll_behavior(), ScrollBehavior::Smooth);
    }

    #[test]
    fn unmounted_section_is_skipped() {
        let (mut shell, counter) = shell_with_all_sections();
        shell.unregister_section(Section::Contact);

        let outcome = shell.navigate_to_section("contact", NavOrigin::MenuLink);

        assert_eq!(outcome, NavOutcome::NotMounted(Section::Contact));
        assert_eq!(counter.0.get(), 0);
    }

    #[test]
    fn close_menu_reports_change() {
        let mut shell: PageShell<Counter> = PageShell::default();
        assert!(!shell.close_menu());
        shell.toggle_menu();
        assert!(shell.close_menu());
        assert!(!shell.menu().is_open());
    }

    #[test]
    fn toggle_parity() {
        let mut shell: PageShell<Counter> = PageShell::default();
        for _ in 0..4 {
            shell.toggle_menu();
        }
        assert_eq!(shell.menu().visibility(), MenuVisibility::Closed);
        shell.toggle_menu();
        assert_eq!(shell.menu().visibility(), MenuVisibility::Open);
    }
}
