use dioxus::prelude::*;
use portfolio_core::{Section, COMPANY_LOGOS, PROFILE};
use portfolio_ui::{ExternalLink, Picture, RevealItem, RevealSection};

/// Logos of former employers, each linking to the company site
#[component]
pub fn Companies() -> Element {
    rsx! {
        RevealSection { section: Section::Experience, class: "centered".to_string(),
            RevealItem { index: 0,
                h2 { class: "section-title", "Companies I've Worked With" }
            }
            RevealItem { index: 1,
                p { class: "section-lead", "{PROFILE.companies_blurb}" }
            }
            RevealItem { index: 2, class: "divider-row".to_string(),
                div { class: "divider" }
            }
            div { class: "company-grid",
                for (i, company) in COMPANY_LOGOS.iter().enumerate() {
                    RevealItem {
                        key: "{company.alt_text}",
                        index: i + 3,
                        class: "company".to_string(),
                        ExternalLink {
                            href: company.href.to_string(),
                            class: "company-link".to_string(),
                            label: company.alt_text.to_string(),
                            Picture { image: company.image, class: "company-logo".to_string() }
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
    fn one_new_context_link_per_company() {
        let html = unescape(&dioxus_ssr::render_element(rsx! { Companies {} }));

        assert_eq!(html.matches("<a ").count(), COMPANY_LOGOS.len());
        assert_eq!(html.matches(r#"target="_blank""#).count(), COMPANY_LOGOS.len());
        for company in &COMPANY_LOGOS {
            assert_eq!(html.matches(&format!(r#"href="{}""#, company.href)).count(), 1);
            assert!(html.contains(&format!(r#"alt="{}""#, company.image.alt)));
        }
    }

    #[test]
    fn logos_carry_intrinsic_size() {
        let html = unescape(&dioxus_ssr::render_element(rsx! { Companies {} }));
        assert_eq!(html.matches(r#"width="120""#).count(), 4);
        assert_eq!(html.matches(r#"height="120""#).count(), 4);
    }
}
