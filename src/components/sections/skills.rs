use dioxus::prelude::*;
use portfolio_core::{Section, SKILLS};
use portfolio_ui::{RevealItem, RevealSection};

#[component]
pub fn Skills() -> Element {
    rsx! {
        RevealSection { section: Section::Skills,
            RevealItem { index: 0,
                h2 { class: "section-title", "Skills & Expertise" }
            }
            ul { class: "skill-list",
                for (i, skill) in SKILLS.iter().enumerate() {
                    RevealItem {
                        key: "{skill}",
                        index: i + 1,
                        list_item: true,
                        class: "skill".to_string(),
                        "{skill}"
                    }
                }
            }
        }
    }
}
