//! Literal page content.
//!
//! Every table here is loaded once and never mutated. Display order is
//! declaration order.

/// An image handed to the asset collaborator: where it lives, its intrinsic
/// size and its alt text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageSpec {
    pub path: &'static str,
    pub width: u32,
    pub height: u32,
    pub alt: &'static str,
}

/// A peer quote shown in the testimonials grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub text: &'static str,
    pub author: &'static str,
}

/// A contact channel rendered as an icon link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub href: &'static str,
    /// Color classes applied to the anchor
    pub style_class: &'static str,
    pub icon: ImageSpec,
    pub alt_text: &'static str,
}

/// A former employer rendered as a logo link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompanyLogo {
    pub image: ImageSpec,
    pub alt_text: &'static str,
    pub href: &'static str,
}

/// One line of the achievement highlights list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Achievement {
    pub icon: &'static str,
    pub company: &'static str,
    pub text: &'static str,
}

/// Who the page is about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub headline: &'static str,
    pub summary: &'static str,
    pub about: &'static str,
    pub companies_blurb: &'static str,
    pub contact_blurb: &'static str,
    pub photo: ImageSpec,
    pub copyright_year: u16,
}

pub const PROFILE: Profile = Profile {
    name: "Agung Pratama",
    headline: "Lead Product Manager | Growth, Automation, & Analytics Specialist",
    summary: "Dedicated Lead Product Manager with expertise in e-commerce and OTA, \
              focusing on data-driven decision-making, automation, and scalability. \
              Passionate about seamless user experiences and growth through \
              innovation and operational excellence.",
    about: "Currently leading multiple transport verticals at Tiket.com, I bring \
            a wealth of experience in product development, data analytics, and \
            strategic automation. I've successfully launched new verticals and \
            scaled platforms to drive both revenue and engagement growth. \
            Leveraging agile methodologies and robust analytics, I work to \
            enhance operational efficiency and create impactful products.",
    companies_blurb: "Collaborating with industry leaders to drive innovation and growth.",
    contact_blurb: "I'm open to new opportunities, insights sharing, or collaboration on \
                    innovative projects. Reach out through any of the channels below.",
    photo: ImageSpec {
        path: "/assets/profile.svg",
        width: 200,
        height: 200,
        alt: "Agung Pratama",
    },
    copyright_year: 2024,
};

pub const SKILLS: &[&str] = &[
    "Strategic Product Development",
    "Data Analytics & Dynamic Pricing",
    "Process Automation & Optimization",
    "Agile Methodologies",
    "User Experience (UX) Design",
    "Platform Scaling & Integration",
];

pub const TOOLS: &[&str] = &[
    "SQL",
    "MongoDB",
    "JIRA",
    "Confluence",
    "Google Apps Script",
    "Google BigQuery",
    "Google Sheet",
    "Google Slides",
    "Google Docs",
    "Tableau",
    "Looker",
];

pub const ACHIEVEMENTS: &[Achievement] = &[
    Achievement {
        icon: "🚀",
        company: "Tiket.com",
        text: "Led the launch of two major transport verticals at Tiket.com, driving daily \
               revenue in billions of IDR and serving thousands of passengers monthly.",
    },
    Achievement {
        icon: "📈",
        company: "Tiket.com",
        text: "Boosted train insurance revenue by multiple times and significantly increased \
               vertical revenue through dynamic pricing and rule-based strategies.",
    },
    Achievement {
        icon: "💡",
        company: "Tiket.com",
        text: "Streamlined analytics processes, achieving 5x productivity for engineering \
               teams and enabling seamless machine learning model integrations.",
    },
    Achievement {
        icon: "🔄",
        company: "Tiket.com",
        text: "Enhanced user experience with optimized data points, leading to reduced \
               conversion time and a notable improvement in CS efficiency.",
    },
    Achievement {
        icon: "📦",
        company: "Tiket.com",
        text: "Pioneered a data-driven platform for critical operations, shifting analytics \
               to become a core part of revenue-driving efforts.",
    },
    Achievement {
        icon: "🚚",
        company: "Tokopedia",
        text: "Enhanced Tokopedia's Seller Fulfillment Platform by building new features and \
               improving existing functionalities to optimize seller and customer satisfaction.",
    },
    Achievement {
        icon: "🦁",
        company: "Lion Parcel",
        text: "Spearheaded a cross-functional project squad at Lion Parcel, integrating a \
               digital-first approach that significantly increased customer satisfaction and \
               streamlined user experience.",
    },
    Achievement {
        icon: "🛒",
        company: "Sorabel",
        text: "Developed Sorabel's enterprise solutions, ensuring best practices for seamless \
               operational flows and responsive tech support, and implemented data-driven \
               alerting systems for proactive decision-making.",
    },
    Achievement {
        icon: "💼",
        company: "Jualo.com",
        text: "Boosted Jualo.com's feature engagement through backlog prioritization, feature \
               performance analysis, and collaboration with UI/UX to elevate the product \
               experience.",
    },
    Achievement {
        icon: "🎯",
        company: "Jualo.com",
        text: "Achieved KPIs in user engagement, core feature usage, and monetization by \
               translating business goals into effective product requirements and enhancements.",
    },
    Achievement {
        icon: "🚗",
        company: "Grab",
        text: "Drove Grab's e-commerce and driver referral initiatives, aligning \
               cross-functional teams to enhance merchant acquisition, and executed \
               promotional strategies to boost engagement and sales.",
    },
];

const PEER: &str = "— Anonymous Peer";

pub static TESTIMONIALS: [Testimonial; 8] = [
    Testimonial {
        text: "Agung is an exemplary leader excelling in various areas, particularly in data \
               processing. His role as a mentor encourages me to continuously improve and \
               develop new skills.",
        author: PEER,
    },
    Testimonial {
        text: "He has great product acumen and understands the business concepts very well. \
               He is super effective in delivering products in record timelines along with \
               managing all the stakeholders.",
        author: PEER,
    },
    Testimonial {
        text: "Agung's strategic thinking has been instrumental in steering projects, aligning \
               them with the broader objectives of the company.",
        author: PEER,
    },
    Testimonial {
        text: "He is a valuable asset to the team. His extensive knowledge and ability to \
               quickly grasp new concepts make him indispensable.",
        author: PEER,
    },
    Testimonial {
        text: "He created a lot of monitoring tools using Google Apps Script and BigQuery \
               integration. Sometimes he backs up the tech team by creating alerts for issues \
               related to orders.",
        author: PEER,
    },
    Testimonial {
        text: "His willingness to learn and analytical skills made me nominate him as one of \
               the best people in the company right now.",
        author: PEER,
    },
    Testimonial {
        text: "He can back up the tech team's work, like creating alerts using Apps Script and \
               BigQuery. He inspires me with his initiatives and technical prowess.",
        author: PEER,
    },
    Testimonial {
        text: "Agung is the PM with such a comprehensive skill set. He consistently seeks \
               improvements for both product outcomes and processes, demonstrating a serious \
               commitment to learning about machine learning.",
        author: PEER,
    },
];

const fn social_icon(path: &'static str, alt: &'static str) -> ImageSpec {
    ImageSpec {
        path,
        width: 32,
        height: 32,
        alt,
    }
}

pub static SOCIAL_LINKS: [SocialLink; 4] = [
    SocialLink {
        href: "https://linkedin.com/in/apprtm/",
        style_class: "social-linkedin",
        icon: social_icon("/assets/linkedin-icon.svg", "LinkedIn"),
        alt_text: "LinkedIn",
    },
    SocialLink {
        href: "https://github.com/apprtm28",
        style_class: "social-github",
        icon: social_icon("/assets/github-icon.svg", "GitHub"),
        alt_text: "GitHub",
    },
    SocialLink {
        href: "https://twitter.com/apprtm",
        style_class: "social-twitter",
        icon: social_icon("/assets/twitter-icon.svg", "Twitter"),
        alt_text: "Twitter",
    },
    SocialLink {
        href: "mailto:agung.pprtm@gmail.com",
        style_class: "social-email",
        icon: social_icon("/assets/email-icon.svg", "Email"),
        alt_text: "Email",
    },
];

const fn company_logo(path: &'static str, alt: &'static str) -> ImageSpec {
    ImageSpec {
        path,
        width: 120,
        height: 120,
        alt,
    }
}

pub static COMPANY_LOGOS: [CompanyLogo; 4] = [
    CompanyLogo {
        image: company_logo("/assets/tiket-icon.svg", "Tiket.com"),
        alt_text: "Tiket.com",
        href: "https://www.tiket.com/",
    },
    CompanyLogo {
        image: company_logo("/assets/tokopedia-icon.svg", "Tokopedia"),
        alt_text: "Tokopedia",
        href: "https://www.tokopedia.com/",
    },
    CompanyLogo {
        image: company_logo("/assets/lionparcel-icon.svg", "Lion Parcel"),
        alt_text: "Lion Parcel",
        href: "https://lionparcel.com/",
    },
    CompanyLogo {
        image: company_logo("/assets/grab-icon.svg", "Grab"),
        alt_text: "Grab",
        href: "https://www.grab.com/",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_sizes() {
        assert_eq!(TESTIMONIALS.len(), 8);
        assert_eq!(SOCIAL_LINKS.len(), 4);
        assert_eq!(COMPANY_LOGOS.len(), 4);
        assert_eq!(SKILLS.len(), 6);
        assert_eq!(TOOLS.len(), 11);
        assert_eq!(ACHIEVEMENTS.len(), 11);
    }

    #[test]
    fn external_links_are_absolute() {
        for link in &SOCIAL_LINKS {
            assert!(
                link.href.starts_with("https://") || link.href.starts_with("mailto:"),
                "{} is not absolute",
                link.href
            );
        }
        for logo in &COMPANY_LOGOS {
            assert!(logo.href.starts_with("https://"), "{} is not absolute", logo.href);
        }
    }

    #[test]
    fn image_alt_matches_link_label() {
        for link in &SOCIAL_LINKS {
            assert_eq!(link.icon.alt, link.alt_text);
            assert_eq!((link.icon.width, link.icon.height), (32, 32));
        }
        for logo in &COMPANY_LOGOS {
            assert_eq!(logo.image.alt, logo.alt_text);
            assert_eq!((logo.image.width, logo.image.height), (120, 120));
        }
    }

    #[test]
    fn images_live_under_assets() {
        let paths: Vec<&str> = SOCIAL_LINKS
            .iter()
            .map(|l| l.icon.path)
            .chain(COMPANY_LOGOS.iter().map(|c| c.image.path))
            .chain(std::iter::once(PROFILE.photo.path))
            .collect();
        for path in paths {
            assert!(path.starts_with("/assets/"), "{path}");
        }
    }

    #[test]
    fn achievements_grouped_by_company() {
        // Entries for one employer are contiguous
        let mut seen: Vec<&str> = Vec::new();
        for achievement in ACHIEVEMENTS {
            if seen.last() != Some(&achievement.company) {
                assert!(
                    !seen.contains(&achievement.company),
                    "{} appears in two groups",
                    achievement.company
                );
                seen.push(achievement.company);
            }
        }
        assert_eq!(
            seen,
            ["Tiket.com", "Tokopedia", "Lion Parcel", "Sorabel", "Jualo.com", "Grab"]
        );
    }
}
