use dioxus::prelude::*;
use portfolio_core::{Section, PROFILE};
use portfolio_ui::RevealSection;

/// Reveals as a single block.
#[component]
pub fn About() -> Element {
    rsx! {
        RevealSection { section: Section::About,
            h2 { class: "section-title", "About Me" }
            p { class: "section-body", "{PROFILE.about}" }
        }
    }
}
