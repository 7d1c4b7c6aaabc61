//! Links that leave the page.

use dioxus::prelude::*;

/// `rel` for links opened in a new browsing context
pub const EXTERNAL_REL: &str = "noopener noreferrer";

#[derive(Clone, PartialEq, Props)]
pub struct ExternalLinkProps {
    pub href: String,
    /// Link content (usually an image)
    pub children: Element,
    #[props(default)]
    pub class: Option<String>,
    /// Accessible name when the content has no text
    #[props(default)]
    pub label: Option<String>,
}

/// Anchor that always opens its destination in a new browsing context
#[component]
pub fn ExternalLink(props: ExternalLinkProps) -> Element {
    rsx! {
        a {
            href: "{props.href}",
            target: "_blank",
            rel: EXTERNAL_REL,
            class: props.class.clone(),
            "aria-label": props.label.clone(),
            {props.children}
        }
    }
}
