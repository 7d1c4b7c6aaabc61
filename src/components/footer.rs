//! Page footer.

use dioxus::prelude::*;
use portfolio_core::PROFILE;

/// Copyright line; fades in shortly after load (CSS)
#[component]
pub fn Footer() -> Element {
    rsx! {
        footer { class: "footer",
            p { "© {PROFILE.copyright_year} {PROFILE.name}. All rights reserved." }
        }
    }
}
