//! Reusable UI components.

mod button;
mod external_link;
mod picture;
mod reveal;

pub use button::*;
pub use external_link::*;
pub use picture::*;
pub use reveal::*;
