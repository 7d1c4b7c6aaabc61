//! Portfolio Core Library
//!
//! Framework-free logic behind the single-page portfolio.
//!
//! ## Overview
//!
//! Everything the page shows comes from the literal tables in [`content`].
//! The only runtime state is:
//!
//! - **Menu visibility**: the mobile menu's open/closed flag, owned by
//!   [`PageShell`]
//! - **Reveal phases**: one Hidden/Visible phase per [`Section`], owned by
//!   [`RevealController`]
//!
//! The UI layer supplies two capabilities: a [`ScrollTarget`] per mounted
//! section and a [`ViewportObserver`] that reports when sections enter the
//! viewport.
//!
//! ## Quick Start
//!
//! ```
//! use portfolio_core::{NavOrigin, NavOutcome, PageShell, ScrollBehavior, ScrollTarget, Section};
//!
//! struct Noop;
//! impl ScrollTarget for Noop {
//!     fn scroll_into_view(&self, _behavior: ScrollBehavior) {}
//! }
//!
//! let mut shell: PageShell<Noop> = PageShell::new(ScrollBehavior::Smooth);
//! shell.register_section(Section::Skills, Noop);
//!
//! assert_eq!(
//!     shell.navigate_to_section("skills", NavOrigin::NavBar),
//!     NavOutcome::Scrolled(Section::Skills)
//! );
//! assert_eq!(
//!     shell.navigate_to_section("pricing", NavOrigin::NavBar),
//!     NavOutcome::UnknownSection
//! );
//! ```

pub mod content;
pub mod error;
pub mod menu;
pub mod navigation;
pub mod reveal;
pub mod section;
pub mod settings;
pub mod shell;

// Re-exports
pub use content::{
    Achievement, CompanyLogo, ImageSpec, Profile, SocialLink, Testimonial, ACHIEVEMENTS,
    COMPANY_LOGOS, PROFILE, SKILLS, SOCIAL_LINKS, TESTIMONIALS, TOOLS,
};
pub use error::{PortfolioError, PortfolioResult};
pub use menu::{MenuState, MenuVisibility};
pub use navigation::{NavOutcome, ScrollBehavior, ScrollTarget, SectionRegistry};
pub use reveal::{
    drive_reveals, DriveOutcome, Easing, Keyframe, MotionSettings, RevealController, RevealPhase,
    RevealSink, RevealTrigger, TransitionStyle, ViewportEntry, ViewportObserver,
};
pub use section::Section;
pub use settings::{MotionPreference, SiteSettings};
pub use shell::{NavOrigin, PageShell};
