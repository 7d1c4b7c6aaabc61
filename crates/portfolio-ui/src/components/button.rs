//! Button Components
//!
//! - Nav: section links in the navigation bar
//! - MenuItem: full-width section links in the mobile menu
//! - IconButton: compact icon-only control with an accessible label

use dioxus::prelude::*;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    /// Navigation bar entry
    #[default]
    Nav,
    /// Full-width entry in the mobile menu
    MenuItem,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Nav => "btn-nav",
            ButtonVariant::MenuItem => "btn-menu-item",
        }
    }
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// Visual style variant
    #[props(default)]
    pub variant: ButtonVariant,
    /// Button content (text, icons, etc.)
    pub children: Element,
    /// Click handler
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Styled button component
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         variant: ButtonVariant::MenuItem,
///         onclick: move |_| go_to(Section::Skills),
///         "Skills"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let full_class = join_classes(props.variant.class(), props.class.as_deref());

    rsx! {
        button {
            class: "{full_class}",
            r#type: "button",
            onclick: move |_| {
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}

/// Icon button for compact actions (menu toggle, close, ...)
#[derive(Clone, PartialEq, Props)]
pub struct IconButtonProps {
    /// The icon content (character or element)
    pub children: Element,
    /// Click handler
    pub onclick: EventHandler<()>,
    /// Accessible label for screen readers
    pub aria_label: String,
    /// Reported as `aria-expanded` when set
    #[props(default)]
    pub expanded: Option<bool>,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

#[component]
pub fn IconButton(props: IconButtonProps) -> Element {
    let full_class = join_classes("icon-btn", props.class.as_deref());
    let expanded = props.expanded.map(|open| if open { "true" } else { "false" });

    rsx! {
        button {
            class: "{full_class}",
            r#type: "button",
            "aria-label": "{props.aria_label}",
            "aria-expanded": expanded,
            onclick: move |_| props.onclick.call(()),
            {props.children}
        }
    }
}

fn join_classes(base: &str, extra: Option<&str>) -> String {
    match extra {
        Some(extra) if !extra.is_empty() => format!("{} {}", base, extra),
        _ => base.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_variant_classes() {
        assert_eq!(ButtonVariant::Nav.class(), "btn-nav");
        assert_eq!(ButtonVariant::MenuItem.class(), "btn-menu-item");
    }

    #[test]
    fn button_variant_default() {
        assert_eq!(ButtonVariant::default(), ButtonVariant::Nav);
    }

    #[test]
    fn button_renders_variant_class() {
        let html = dioxus_ssr::render_element(rsx! {
            Button { variant: ButtonVariant::MenuItem, class: "wide".to_string(), "Skills" }
        });
        assert!(html.contains(r#"class="btn-menu-item wide""#));
        assert!(html.contains(r#"type="button""#));
    }

    #[test]
    fn class_joining() {
        assert_eq!(join_classes("icon-btn", None), "icon-btn");
        assert_eq!(join_classes("icon-btn", Some("")), "icon-btn");
        assert_eq!(join_classes("icon-btn", Some("menu-toggle")), "icon-btn menu-toggle");
    }
}
