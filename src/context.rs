//! Page context for the portfolio.
//!
//! Re-exports the shared hooks and adds access to the startup settings.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! provide_page_context(&get_settings());
//!
//! // In child components
//! let mut shell = use_shell();
//! let reveals = use_reveals();
//! ```

pub use portfolio_ui::{provide_page_context, use_reveals, use_shell, SharedShell};

use portfolio_core::{NavOrigin, Section, SiteSettings};

/// Get the settings parsed from the command line.
pub fn get_settings() -> SiteSettings {
    crate::get_settings()
}

/// Navigate to a section from a link click.
///
/// Closes the mobile menu and scrolls; unknown or unmounted sections are
/// ignored.
pub fn go_to(mut shell: SharedShell, section: Section, origin: NavOrigin) {
    shell.write().navigate_to_section(section.anchor(), origin);
}
