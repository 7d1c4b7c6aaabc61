//! Reveal Components
//!
//! `RevealSection` renders a page section with its current reveal phase and
//! registers the mounted element for scroll navigation. `RevealItem` renders
//! one staggered child of that section.
//!
//! Both read reveal state from context. Without it they render Visible, so
//! content always shows even when nothing drives the transitions.

use dioxus::prelude::*;
use portfolio_core::{RevealPhase, Section};

use crate::context::{use_motion, RevealScope, SharedReveals, SharedShell};
use crate::dom::MountedSection;

#[derive(Clone, PartialEq, Props)]
pub struct RevealSectionProps {
    pub section: Section,
    pub children: Element,
    #[props(default)]
    pub class: Option<String>,
}

/// A page section that fades and slides into view once.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     RevealSection { section: Section::Skills,
///         RevealItem { index: 0, h2 { "Skills & Expertise" } }
///         RevealItem { index: 1, "Agile Methodologies" }
///     }
/// }
/// ```
#[component]
pub fn RevealSection(props: RevealSectionProps) -> Element {
    let section = props.section;
    let reveals = try_use_context::<SharedReveals>();
    let shell = try_use_context::<SharedShell>();
    let motion = use_motion();
    use_context_provider(|| RevealScope(section));
    use_drop(move || {
        if let Some(mut shell) = shell {
            if let Ok(mut shell) = shell.try_write() {
                shell.unregister_section(section);
            }
        }
    });

    let phase = current_phase(reveals, section);
    // Staggered sections stay put; their items carry the transition
    let style = if section.staggered() {
        String::new()
    } else {
        motion.section_style(phase).to_css()
    };
    let class = match props.class.as_deref() {
        Some(extra) => format!("reveal-section {extra}"),
        None => "reveal-section".to_string(),
    };

    rsx! {
        section {
            id: section.anchor(),
            class: "{class}",
            "data-reveal": phase.as_str(),
            style: "{style}",
            onmounted: move |evt: MountedEvent| {
                if let Some(mut shell) = shell {
                    shell.write().register_section(section, MountedSection::new(evt.data()));
                }
            },
            {props.children}
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct RevealItemProps {
    /// Position in the stagger sequence
    pub index: usize,
    pub children: Element,
    #[props(default)]
    pub class: Option<String>,
    /// Render as `li` instead of `div`
    #[props(default = false)]
    pub list_item: bool,
}

/// One staggered child of the enclosing [`RevealSection`]
#[component]
pub fn RevealItem(props: RevealItemProps) -> Element {
    let scope = try_use_context::<RevealScope>();
    let reveals = try_use_context::<SharedReveals>();
    let motion = use_motion();

    let phase = match scope {
        Some(RevealScope(section)) => current_phase(reveals, section),
        None => RevealPhase::Visible,
    };
    let style = motion.item_style(phase, props.index).to_css();
    let class = match props.class.as_deref() {
        Some(extra) => format!("reveal-item {extra}"),
        None => "reveal-item".to_string(),
    };

    if props.list_item {
        rsx! {
            li { class: "{class}", "data-reveal": phase.as_str(), style: "{style}", {props.children} }
        }
    } else {
        rsx! {
            div { class: "{class}", "data-reveal": phase.as_str(), style: "{style}", {props.children} }
        }
    }
}

fn current_phase(reveals: Option<SharedReveals>, section: Section) -> RevealPhase {
    reveals
        .map(|reveals| reveals.read().phase(section))
        .unwrap_or(RevealPhase::Visible)
}
