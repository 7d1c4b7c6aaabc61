use dioxus::prelude::*;
use portfolio_core::{Section, TOOLS};
use portfolio_ui::{RevealItem, RevealSection};

#[component]
pub fn Tools() -> Element {
    rsx! {
        RevealSection { section: Section::Tools,
            RevealItem { index: 0,
                h2 { class: "section-title", "Specialized Tools and Technologies" }
            }
            ul { class: "tool-grid",
                for (i, tool) in TOOLS.iter().enumerate() {
                    RevealItem {
                        key: "{tool}",
                        index: i + 1,
                        list_item: true,
                        class: "tool".to_string(),
                        span { class: "tool-dot" }
                        "{tool}"
                    }
                }
            }
        }
    }
}
