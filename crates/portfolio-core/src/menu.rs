//! Mobile menu state machine.

/// Visibility of the mobile menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuVisibility {
    #[default]
    Closed,
    Open,
}

impl MenuVisibility {
    pub fn flipped(self) -> Self {
        match self {
            MenuVisibility::Closed => MenuVisibility::Open,
            MenuVisibility::Open => MenuVisibility::Closed,
        }
    }
}

/// Whether the mobile menu is expanded.
///
/// Starts closed and is never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuState {
    visibility: MenuVisibility,
}

impl MenuState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visibility(&self) -> MenuVisibility {
        self.visibility
    }

    pub fn is_open(&self) -> bool {
        self.visibility == MenuVisibility::Open
    }

    /// Flip between open and closed, returning the new visibility
    pub fn toggle(&mut self) -> MenuVisibility {
        self.visibility = self.visibility.flipped();
        self.visibility
    }

    /// Close the menu. Returns true if it was open.
    pub fn close(&mut self) -> bool {
        let was_open = self.is_open();
        self.visibility = MenuVisibility::Closed;
        was_open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        assert!(!MenuState::new().is_open());
        assert_eq!(MenuState::default().visibility(), MenuVisibility::Closed);
    }

    #[test]
    fn toggle_flips() {
        let mut menu = MenuState::new();
        assert_eq!(menu.toggle(), MenuVisibility::Open);
        assert!(menu.is_open());
        assert_eq!(menu.toggle(), MenuVisibility::Closed);
        assert!(!menu.is_open());
    }

    #[test]
    fn close_reports_change() {
        let mut menu = MenuState::new();
        assert!(!menu.close());
        menu.toggle();
        assert!(menu.close());
        assert!(!menu.is_open());
    }
}
