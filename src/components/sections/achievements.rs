use dioxus::prelude::*;
use portfolio_core::{Section, ACHIEVEMENTS};
use portfolio_ui::{RevealItem, RevealSection};

/// Highlights grouped by employer, each tagged with the company name.
///
/// The list fades in as one block after the heading.
#[component]
pub fn Achievements() -> Element {
    rsx! {
        RevealSection { section: Section::Achievements,
            RevealItem { index: 0,
                h2 { class: "section-title", "Achievement Highlights" }
            }
            RevealItem { index: 1,
                ul { class: "achievement-list",
                    for (i, achievement) in ACHIEVEMENTS.iter().enumerate() {
                        li { key: "{i}", class: "achievement",
                            span { class: "achievement-icon", "aria-hidden": "true", "{achievement.icon}" }
                            span { class: "achievement-text", "{achievement.text}" }
                            span { class: "achievement-company", "{achievement.company}" }
                        }
                    }
                }
            }
        }
    }
}
