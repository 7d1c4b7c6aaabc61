//! DOM adapters for the core navigation and reveal capabilities.

use std::rc::Rc;

use dioxus::document::{self, Eval};
use dioxus::prelude::*;
use portfolio_core::{
    PortfolioError, RevealSink, ScrollBehavior, ScrollTarget, Section, SiteSettings,
    ViewportEntry, ViewportObserver,
};

use crate::context::SharedReveals;

/// Message the observer script sends when it cannot observe intersections
const UNSUPPORTED: &str = "*";

/// A mounted section element that can scroll itself into view
#[derive(Clone)]
pub struct MountedSection(Rc<MountedData>);

impl MountedSection {
    pub fn new(data: Rc<MountedData>) -> Self {
        Self(data)
    }
}

impl ScrollTarget for MountedSection {
    fn scroll_into_view(&self, behavior: ScrollBehavior) {
        let data = self.0.clone();
        let behavior = match behavior {
            ScrollBehavior::Smooth => dioxus::html::ScrollBehavior::Smooth,
            ScrollBehavior::Instant => dioxus::html::ScrollBehavior::Instant,
        };
        spawn(async move {
            if let Err(e) = data.scroll_to(behavior).await {
                tracing::debug!(error = ?e, "Scroll request failed");
            }
        });
    }
}

/// Viewport observer backed by an `IntersectionObserver` in the page.
///
/// The script reports each element id on entry. Elements that cannot be
/// found are reported straight away so they never stay hidden.
pub struct DomViewportObserver {
    eval: Eval,
}

impl DomViewportObserver {
    /// Start observing every section that is still waiting for its reveal
    pub fn start(pending: &[Section], settings: &SiteSettings) -> Self {
        let targets: Vec<serde_json::Value> = pending
            .iter()
            .map(|section| {
                serde_json::json!({
                    "id": section.anchor(),
                    "margin": section.trigger_margin(settings),
                })
            })
            .collect();
        let script = observer_script(&serde_json::Value::Array(targets));
        tracing::debug!(sections = pending.len(), "Starting viewport observer");
        Self {
            eval: document::eval(&script),
        }
    }
}

impl ViewportObserver for DomViewportObserver {
    type Error = PortfolioError;

    async fn next_entry(&mut self) -> Result<Option<ViewportEntry>, PortfolioError> {
        loop {
            let id: String = self
                .eval
                .recv()
                .await
                .map_err(|e| PortfolioError::Observer(format!("{e:?}")))?;

            if id == UNSUPPORTED {
                return Ok(Some(ViewportEntry::Unsupported));
            }
            match id.parse::<Section>() {
                Ok(section) => return Ok(Some(ViewportEntry::Entered(section))),
                Err(e) => tracing::warn!(error = %e, "Observer reported unknown element"),
            }
        }
    }
}

fn observer_script(targets: &serde_json::Value) -> String {
    format!(
        r#"
const targets = {targets};
if (!("IntersectionObserver" in window)) {{
  dioxus.send("{UNSUPPORTED}");
}} else {{
  for (const target of targets) {{
    const el = document.getElementById(target.id);
    if (!el) {{
      dioxus.send(target.id);
      continue;
    }}
    const observer = new IntersectionObserver((entries) => {{
      for (const entry of entries) {{
        if (entry.isIntersecting) {{
          observer.unobserve(entry.target);
          dioxus.send(entry.target.id);
        }}
      }}
    }}, {{ rootMargin: `-${{target.margin}}px` }});
    observer.observe(el);
  }}
}}
"#
    )
}

/// Reveal sink writing into the shared reveal signal.
///
/// Only writes when an entry changes something, so repeated entries do not
/// re-render the page.
pub struct SignalRevealSink(pub SharedReveals);

impl RevealSink for SignalRevealSink {
    fn apply(&mut self, entry: ViewportEntry) -> Vec<Section> {
        if !self.0.peek().accepts(&entry) {
            return Vec::new();
        }
        self.0.write().handle(entry)
    }

    fn is_complete(&self) -> bool {
        self.0.peek().is_complete()
    }
}
