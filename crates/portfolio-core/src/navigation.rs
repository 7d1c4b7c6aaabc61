//! In-page scroll navigation.
//!
//! Sections register a [`ScrollTarget`] once their element is mounted.
//! Navigation resolves an identifier to a registered target and asks it to
//! scroll itself top-aligned into view. Identifiers that name no section, or
//! a section that is not mounted, are a silent no-op.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::section::Section;

/// How the viewport moves to a section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScrollBehavior {
    /// Animated scroll
    #[default]
    Smooth,
    /// Jump without animation
    Instant,
}

/// Something that can bring a section's top edge to the top of the viewport
pub trait ScrollTarget {
    fn scroll_into_view(&self, behavior: ScrollBehavior);
}

/// Result of a navigation request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavOutcome {
    /// The section was asked to scroll into view
    Scrolled(Section),
    /// The identifier names no section
    UnknownSection,
    /// The section exists but its element is not mounted
    NotMounted(Section),
}

/// Mounted scroll targets, keyed by section
#[derive(Debug)]
pub struct SectionRegistry<T> {
    targets: BTreeMap<Section, T>,
}

impl<T> Default for SectionRegistry<T> {
    fn default() -> Self {
        Self {
            targets: BTreeMap::new(),
        }
    }
}

impl<T> SectionRegistry<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the target for a section, replacing any earlier one
    pub fn register(&mut self, section: Section, target: T) {
        if self.targets.insert(section, target).is_some() {
            tracing::trace!(section = %section, "Replaced scroll target");
        }
    }

    pub fn unregister(&mut self, section: Section) -> Option<T> {
        self.targets.remove(&section)
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

impl<T: ScrollTarget> SectionRegistry<T> {
    /// Scroll the section named by `id` into view.
    ///
    /// Never fails: an unknown or unmounted section leaves every target
    /// untouched.
    pub fn scroll_to(&self, id: &str, behavior: ScrollBehavior) -> NavOutcome {
        let section = match id.parse::<Section>() {
            Ok(section) => section,
            Err(e) => {
                tracing::debug!(error = %e, "Ignoring navigation to unknown section");
                return NavOutcome::UnknownSection;
            }
        };

        match self.targets.get(&section) {
            Some(target) => {
                target.scroll_into_view(behavior);
                NavOutcome::Scrolled(section)
            }
            None => {
                tracing::debug!(section = %section, "Section not mounted, skipping scroll");
                NavOutcome::NotMounted(section)
            }
        }
    }
}
