use dioxus::prelude::*;
use dioxus_router::prelude::*;

use gloo_console::error as console_error;
use wasm_bindgen::{JsCast, closure::Closure};

use crate::Route;
use crate::footer::Footer;
use crate::theme::ThemeToggle;

/// Vertical offset (in CSS pixels) past which the navbar switches to its
/// solid presentation. The boundary is exclusive.
const SCROLL_CUTOFF: f64 = 50.0;

pub const NAV_ITEMS: [(&str, &str); 5] = [
    ("Home", "home"),
    ("About", "about"),
    ("Skills", "skills"),
    ("Projects", "projects"),
    ("Contact", "contact"),
];

pub fn is_scrolled(offset: f64) -> bool {
    offset > SCROLL_CUTOFF
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MobileMenuState {
    pub open: bool,
}

impl MobileMenuState {
    pub fn toggled(self) -> Self {
        Self { open: !self.open }
    }

    /// Any link activation closes the menu, open or not.
    pub fn closed(self) -> Self {
        Self { open: false }
    }
}

/// Smoothly scroll the viewport to an in-page anchor. A missing anchor
/// (for instance on the project detail page) is a silent no-op.
pub fn scroll_to_anchor(anchor: &str) {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };
    let Some(element) = document.get_element_by_id(anchor) else {
        return;
    };

    let options = web_sys::ScrollIntoViewOptions::new();
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

fn attach_scroll_listener(mut scrolled: Signal<bool>) {
    let Some(window) = web_sys::window() else {
        return;
    };

    let listener = Closure::wrap(Box::new(move || {
        let offset = web_sys::window()
            .and_then(|window| window.scroll_y().ok())
            .unwrap_or(0.0);
        scrolled.set(is_scrolled(offset));
    }) as Box<dyn FnMut()>);

    if window
        .add_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref())
        .is_err()
    {
        console_error!("Failed to attach window scroll listener");
    }

    // the navbar lives for the whole page, so the listener does too
    listener.forget();
}

#[component]
pub fn NavBar() -> Element {
    let scrolled = use_signal(|| false);
    let mut menu = use_signal(MobileMenuState::default);

    use_effect(move || attach_scroll_listener(scrolled));

    rsx! {
        header {
            class: if scrolled() { "navbar scrolled" } else { "navbar" },
            div { class: "nav-container",
                Link { class: "nav-logo", to: Route::Landing {}, span { "Portfolio" } }

                nav { class: "nav-links",
                    for (name, anchor) in NAV_ITEMS {
                        a {
                            class: "nav-link",
                            href: "#{anchor}",
                            onclick: move |evt| {
                                evt.prevent_default();
                                menu.set(menu().closed());
                                scroll_to_anchor(anchor);
                            },
                            "{name}"
                        }
                    }
                }

                button {
                    class: "nav-menu-button",
                    aria_label: "Toggle navigation menu",
                    onclick: move |_| menu.set(menu().toggled()),
                    if menu().open { "✕" } else { "☰" }
                }
            }

            if menu().open {
                div { class: "mobile-menu",
                    for (name, anchor) in NAV_ITEMS {
                        a {
                            class: "mobile-nav-link",
                            href: "#{anchor}",
                            onclick: move |evt| {
                                evt.prevent_default();
                                menu.set(menu().closed());
                                scroll_to_anchor(anchor);
                            },
                            "{name}"
                        }
                    }
                }
            }
        }
    }
}

/// Page chrome shared by every route: navbar above the routed body,
/// footer below it, floating theme toggle on top.
#[component]
pub fn PageShell() -> Element {
    rsx! {
        NavBar {}
        main { class: "page-body",
            Outlet::<Route> {}
            Footer {}
        }
        ThemeToggle {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scrolled_boundary_is_exclusive() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(50.0));
        assert!(is_scrolled(50.1));
        assert!(is_scrolled(51.0));
    }

    #[test]
    fn link_activation_closes_menu() {
        let open = MobileMenuState { open: true };
        assert!(!open.closed().open);

        // closing an already-closed menu stays closed
        assert!(!MobileMenuState::default().closed().open);
    }

    #[test]
    fn menu_button_toggles() {
        let menu = MobileMenuState::default();
        assert!(menu.toggled().open);
        assert!(!menu.toggled().toggled().open);
    }
}
