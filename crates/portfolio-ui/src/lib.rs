//! Portfolio UI Components
//!
//! Dioxus components and DOM adapters shared by the portfolio page.
//!
//! ## Pieces
//!
//! - **Reveal**: [`RevealSection`] and [`RevealItem`] render the
//!   Hidden/Visible transition computed by `portfolio_core::reveal`
//! - **DOM adapters**: [`MountedSection`] scrolls a mounted section into view,
//!   [`DomViewportObserver`] reports viewport entries from an
//!   `IntersectionObserver`
//! - **Primitives**: buttons, external links and images
//!
//! Every component renders without the page contexts. Missing reveal state
//! means content is shown unanimated.

pub mod components;
pub mod context;
pub mod dom;

pub use components::*;
pub use context::*;
pub use dom::*;
