//! The closed set of page sections.

use std::fmt;
use std::str::FromStr;

use crate::error::PortfolioError;
use crate::reveal::RevealTrigger;
use crate::settings::SiteSettings;

/// A distinct content block of the page.
///
/// Declaration order is page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Section {
    Hero,
    About,
    Skills,
    Tools,
    Achievements,
    Experience,
    Testimonials,
    Contact,
}

impl Section {
    /// Every section, in page order
    pub const ALL: [Section; 8] = [
        Section::Hero,
        Section::About,
        Section::Skills,
        Section::Tools,
        Section::Achievements,
        Section::Experience,
        Section::Testimonials,
        Section::Contact,
    ];

    /// Sections reachable from the navigation bar, in nav order
    pub const NAV_TARGETS: [Section; 5] = [
        Section::About,
        Section::Skills,
        Section::Achievements,
        Section::Testimonials,
        Section::Contact,
    ];

    /// DOM id of the section element
    pub fn anchor(&self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::About => "about",
            Section::Skills => "skills",
            Section::Tools => "tools",
            Section::Achievements => "achievements",
            Section::Experience => "experience",
            Section::Testimonials => "testimonials",
            Section::Contact => "contact",
        }
    }

    /// Link text in the navigation bar and mobile menu
    pub fn nav_label(&self) -> &'static str {
        match self {
            Section::Hero => "Home",
            Section::About => "About",
            Section::Skills => "Skills",
            Section::Tools => "Tools",
            Section::Achievements => "Achievements",
            Section::Experience => "Experience",
            Section::Testimonials => "Testimonials",
            Section::Contact => "Contact",
        }
    }

    /// What starts this section's reveal transition
    pub fn trigger(&self) -> RevealTrigger {
        match self {
            Section::Hero => RevealTrigger::OnMount,
            _ => RevealTrigger::OnViewportEntry,
        }
    }

    /// Whether child items reveal one after another instead of the section
    /// fading as a single block
    pub fn staggered(&self) -> bool {
        !matches!(self, Section::About)
    }

    /// How far (px) the section must be inside the viewport before it reveals
    pub fn trigger_margin(&self, settings: &SiteSettings) -> u32 {
        match self {
            Section::Contact => 0,
            _ => settings.trigger_margin_px,
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.anchor())
    }
}

impl FromStr for Section {
    type Err = PortfolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.trim();
        let id = id.strip_prefix('#').unwrap_or(id);
        Section::ALL
            .into_iter()
            .find(|section| section.anchor() == id)
            .ok_or_else(|| PortfolioError::UnknownSection(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchors_round_trip() {
        for section in Section::ALL {
            assert_eq!(section.anchor().parse::<Section>().unwrap(), section);
        }
    }

    #[test]
    fn parse_accepts_hash_and_whitespace() {
        assert_eq!("#skills".parse::<Section>().unwrap(), Section::Skills);
        assert_eq!("  contact ".parse::<Section>().unwrap(), Section::Contact);
    }

    #[test]
    fn parse_rejects_unknown() {
        let err = "pricing".parse::<Section>().unwrap_err();
        assert!(matches!(err, PortfolioError::UnknownSection(ref id) if id == "pricing"));
        assert!("".parse::<Section>().is_err());
        assert!("Skills".parse::<Section>().is_err());
    }

    #[test]
    fn nav_targets_in_order() {
        let labels: Vec<_> = Section::NAV_TARGETS.iter().map(|s| s.nav_label()).collect();
        assert_eq!(labels, ["About", "Skills", "Achievements", "Testimonials", "Contact"]);
    }

    #[test]
    fn only_hero_reveals_on_mount() {
        for section in Section::ALL {
            let expected = if section == Section::Hero {
                RevealTrigger::OnMount
            } else {
                RevealTrigger::OnViewportEntry
            };
            assert_eq!(section.trigger(), expected, "{section}");
        }
    }

    #[test]
    fn contact_has_no_trigger_margin() {
        let settings = SiteSettings::default();
        assert_eq!(Section::Contact.trigger_margin(&settings), 0);
        assert_eq!(Section::Skills.trigger_margin(&settings), 100);
    }

    #[test]
    fn about_is_not_staggered() {
        assert!(!Section::About.staggered());
        assert!(Section::Testimonials.staggered());
    }
}
