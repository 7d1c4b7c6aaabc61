use dioxus::prelude::*;
use portfolio_core::{Section, PROFILE, SOCIAL_LINKS};
use portfolio_ui::{ExternalLink, Picture, RevealItem, RevealSection};

#[component]
pub fn Contact() -> Element {
    rsx! {
        RevealSection { section: Section::Contact, class: "centered".to_string(),
            RevealItem { index: 0,
                h2 { class: "section-title", "Get in Touch" }
            }
            RevealItem { index: 1,
                p { class: "section-body", "{PROFILE.contact_blurb}" }
            }
            div { class: "social-row",
                for (i, social) in SOCIAL_LINKS.iter().enumerate() {
                    RevealItem {
                        key: "{social.alt_text}",
                        index: i + 2,
                        class: "social".to_string(),
                        ExternalLink {
                            href: social.href.to_string(),
                            class: format!("social-link {}", social.style_class),
                            label: social.alt_text.to_string(),
                            Picture { image: social.icon }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::sections::unescape;

    #[test]
    fn one_new_context_link_per_channel() {
        let html = unescape(&dioxus_ssr::render_element(rsx! { Contact {} }));

        assert_eq!(html.matches("<a ").count(), SOCIAL_LINKS.len());
        assert_eq!(html.matches(r#"target="_blank""#).count(), SOCIAL_LINKS.len());
        assert_eq!(html.matches(r#"rel="noopener noreferrer""#).count(), SOCIAL_LINKS.len());
        for social in &SOCIAL_LINKS {
            assert_eq!(html.matches(&format!(r#"href="{}""#, social.href)).count(), 1);
            assert!(html.contains(social.style_class));
        }
    }

    #[test]
    fn renders_without_page_context_as_visible() {
        let html = dioxus_ssr::render_element(rsx! { Contact {} });
        assert!(html.contains(r#"id="contact""#));
        assert!(!html.contains(r#"data-reveal="hidden""#));
    }
}
