//! The portfolio page.
//!
//! Composes every section and starts the reveal transitions: the hero on
//! first render, everything else as it scrolls into view.

use dioxus::prelude::*;
use portfolio_core::drive_reveals;
use portfolio_ui::{DomViewportObserver, SignalRevealSink};

use crate::components::sections::{
    About, Achievements, Companies, Contact, Hero, Skills, Testimonials, Tools,
};
use crate::components::{Footer, NavBar};
use crate::context::{get_settings, use_reveals};

/// Home page component.
#[component]
pub fn Home() -> Element {
    let mut reveals = use_reveals();

    // Runs once after the first render, when every section is mounted
    use_effect(move || {
        for section in reveals.write().mount() {
            tracing::debug!(section = %section, "Revealed on mount");
        }

        let pending = reveals.peek().pending();
        let settings = get_settings();
        spawn(async move {
            let mut observer = DomViewportObserver::start(&pending, &settings);
            let mut sink = SignalRevealSink(reveals);
            let outcome = drive_reveals(&mut observer, &mut sink).await;
            tracing::debug!(?outcome, "Reveal observer finished");
        });
    });

    rsx! {
        div { class: "page",
            NavBar {}

            main { class: "page-main",
                Hero {}
                About {}
                Skills {}
                Tools {}
                Achievements {}
                Companies {}
                Testimonials {}
                Contact {}
            }

            Footer {}
        }
    }
}
