use dioxus::prelude::*;

use crate::context::{get_settings, provide_page_context};
use crate::pages::Home;
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - The portfolio page
/// - anything else - Redirects to `/`
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

/// Root application component.
///
/// Provides global styles, page context, and routing.
#[component]
pub fn App() -> Element {
    let settings = get_settings();
    provide_page_context(&settings);

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}

/// Unknown paths land on the page itself
#[component]
fn NotFound(segments: Vec<String>) -> Element {
    let navigator = use_navigator();

    use_effect(move || {
        tracing::debug!(path = %segments.join("/"), "Unknown route, redirecting home");
        navigator.replace(Route::Home {});
    });

    rsx! {}
}
