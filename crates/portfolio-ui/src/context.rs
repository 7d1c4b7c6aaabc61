//! Page context shared through Dioxus `use_context`.
//!
//! ## Usage
//!
//! ```ignore
//! // In the root component
//! provide_page_context(&settings);
//!
//! // In child components
//! let mut shell = use_shell();
//! shell.write().toggle_menu();
//! ```

use dioxus::prelude::*;
use portfolio_core::{MotionSettings, PageShell, RevealController, Section, SiteSettings};

use crate::dom::MountedSection;

/// Menu state and mounted sections
pub type SharedShell = Signal<PageShell<MountedSection>>;

/// Reveal phase of every section
pub type SharedReveals = Signal<RevealController>;

/// The section a [`crate::RevealItem`] belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RevealScope(pub Section);

/// Provide shell, reveal state and motion settings to the component tree.
///
/// Call once from the root component. Returns the provided signals.
pub fn provide_page_context(settings: &SiteSettings) -> (SharedShell, SharedReveals) {
    let scroll = settings.scroll_behavior();
    let motion = settings.motion_settings();
    let shell = use_context_provider(|| Signal::new(PageShell::<MountedSection>::new(scroll)));
    let reveals = use_context_provider(|| Signal::new(RevealController::new()));
    use_context_provider(|| motion);
    (shell, reveals)
}

/// Hook to access the page shell.
///
/// Panics outside [`provide_page_context`].
pub fn use_shell() -> SharedShell {
    use_context::<SharedShell>()
}

/// Hook to access reveal state.
///
/// Panics outside [`provide_page_context`].
pub fn use_reveals() -> SharedReveals {
    use_context::<SharedReveals>()
}

/// Motion settings from context, or the defaults
pub fn use_motion() -> MotionSettings {
    try_use_context::<MotionSettings>().unwrap_or_default()
}
