//! Navigation Bar Component
//!
//! Desktop: name on the left, section links on the right
//! Mobile: links collapse behind a menu toggle that expands `MobileMenu`

use dioxus::prelude::*;
use portfolio_core::{NavOrigin, Section, PROFILE};
use portfolio_ui::{Button, ButtonVariant, IconButton};

use crate::context::{go_to, use_shell};

/// Sticky navigation bar.
///
/// Section links scroll the section into view; the name link suppresses its
/// default anchor jump. Any link click closes the mobile menu.
#[component]
pub fn NavBar() -> Element {
    let mut shell = use_shell();
    let menu_open = shell.read().menu().is_open();

    rsx! {
        nav { class: "navbar",
            div { class: "navbar-inner",
                a {
                    class: "navbar-brand",
                    href: "#hero",
                    onclick: move |evt: MouseEvent| {
                        evt.prevent_default();
                        go_to(shell, Section::Hero, NavOrigin::Brand);
                    },
                    "{PROFILE.name}"
                }

                div { class: "navbar-links",
                    for section in Section::NAV_TARGETS {
                        Button {
                            key: "{section.anchor()}",
                            variant: ButtonVariant::Nav,
                            onclick: move |_| go_to(shell, section, NavOrigin::NavBar),
                            "{section.nav_label()}"
                        }
                    }
                }

                IconButton {
                    class: "navbar-toggle".to_string(),
                    aria_label: menu_label(menu_open).to_string(),
                    expanded: menu_open,
                    onclick: move |_| {
                        shell.write().toggle_menu();
                    },
                    MenuIcon { open: menu_open }
                }
            }

            if menu_open {
                MobileMenu {}
            }
        }
    }
}

/// Expanded mobile menu; every entry navigates and closes the menu
#[component]
fn MobileMenu() -> Element {
    let shell = use_shell();

    rsx! {
        div { class: "mobile-menu",
            for section in Section::NAV_TARGETS {
                Button {
                    key: "{section.anchor()}",
                    variant: ButtonVariant::MenuItem,
                    onclick: move |_| go_to(shell, section, NavOrigin::MenuLink),
                    "{section.nav_label()}"
                }
            }
        }
    }
}

fn menu_label(open: bool) -> &'static str {
    if open {
        "Close menu"
    } else {
        "Open menu"
    }
}

/// Lucide menu / x icon
#[component]
fn MenuIcon(open: bool) -> Element {
    rsx! {
        svg {
            xmlns: "http://www.w3.org/2000/svg",
            width: "24",
            height: "24",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            if open {
                path { d: "M18 6 6 18" }
                path { d: "m6 6 12 12" }
            } else {
                line { x1: "4", x2: "20", y1: "12", y2: "12" }
                line { x1: "4", x2: "20", y1: "6", y2: "6" }
                line { x1: "4", x2: "20", y1: "18", y2: "18" }
            }
        }
    }
}
