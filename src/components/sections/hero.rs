use dioxus::prelude::*;
use portfolio_core::{Section, PROFILE};
use portfolio_ui::{Picture, RevealItem, RevealSection};

/// Photo, name, headline and summary. Reveals right after the first render.
#[component]
pub fn Hero() -> Element {
    rsx! {
        RevealSection { section: Section::Hero, class: "hero".to_string(),
            RevealItem { index: 0, class: "hero-photo".to_string(),
                Picture { image: PROFILE.photo, class: "hero-avatar".to_string(), eager: true }
            }
            RevealItem { index: 1,
                h1 { class: "hero-name", "{PROFILE.name}" }
            }
            RevealItem { index: 2,
                p { class: "hero-headline", "{PROFILE.headline}" }
            }
            RevealItem { index: 3,
                p { class: "hero-summary", "{PROFILE.summary}" }
            }
        }
    }
}
