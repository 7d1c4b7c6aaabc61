//! UI Components for the portfolio page.

mod footer;
mod nav_bar;
pub mod sections;

pub use footer::Footer;
pub use nav_bar::NavBar;
