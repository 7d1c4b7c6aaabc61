//! Page sections, in page order.
//!
//! Each section is a `RevealSection` whose children reveal in stagger order.
//! Index 0 is always the heading.

mod about;
mod achievements;
mod companies;
mod contact;
mod hero;
mod skills;
mod testimonials;
mod tools;

pub use about::About;
pub use achievements::Achievements;
pub use companies::Companies;
pub use contact::Contact;
pub use hero::Hero;
pub use skills::Skills;
pub use testimonials::Testimonials;
pub use tools::Tools;

/// Undo the entity escaping of server-rendered markup
#[cfg(test)]
pub(crate) fn unescape(html: &str) -> String {
    html.replace("&#x27;", "'")
        .replace("&#39;", "'")
        .replace("&#x2f;", "/")
        .replace("&#x2F;", "/")
        .replace("&quot;", "\"")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}
