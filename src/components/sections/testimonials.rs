use dioxus::prelude::*;
use portfolio_core::{Section, TESTIMONIALS};
use portfolio_ui::{RevealItem, RevealSection};

#[component]
pub fn Testimonials() -> Element {
    rsx! {
        RevealSection { section: Section::Testimonials,
            RevealItem { index: 0,
                h2 { class: "section-title centered", "What My Peers Say" }
            }
            div { class: "testimonial-grid",
                for (i, testimonial) in TESTIMONIALS.iter().enumerate() {
                    RevealItem {
                        key: "{i}",
                        index: i + 1,
                        class: "testimonial-card".to_string(),
                        p { class: "testimonial-text", "{testimonial.text}" }
                        p { class: "testimonial-author", "{testimonial.author}" }
                    }
                }
            }
        }
    }
}
