use dioxus::prelude::*;

use crate::nav::{NAV_ITEMS, scroll_to_anchor};

const SERVICES: [&str; 4] = ["Web Development", "UI/UX Design", "Mobile Apps", "Consulting"];

#[component]
pub fn Footer() -> Element {
    let year = js_sys::Date::new_0().get_full_year();

    rsx! {
        footer { class: "site-footer",
            div { class: "container",
                div { class: "footer-grid",
                    div { class: "footer-brand",
                        h3 { "Portfolio" }
                        p {
                            "Crafting digital experiences with modern web technologies. \
                             Let's build something amazing together."
                        }
                        div { class: "social-links",
                            a {
                                class: "social-link",
                                href: "https://github.com",
                                target: "_blank",
                                rel: "noopener noreferrer",
                                "GitHub"
                            }
                            a {
                                class: "social-link",
                                href: "https://linkedin.com",
                                target: "_blank",
                                rel: "noopener noreferrer",
                                "LinkedIn"
                            }
                            a {
                                class: "social-link",
                                href: "https://twitter.com",
                                target: "_blank",
                                rel: "noopener noreferrer",
                                "Twitter"
                            }
                            a {
                                class: "social-link",
                                href: "mailto:your.email@example.com",
                                "Email"
                            }
                        }
                    }

                    div { class: "footer-column",
                        h4 { "Quick Links" }
                        ul {
                            for (name, anchor) in NAV_ITEMS {
                                li {
                                    a {
                                        href: "#{anchor}",
                                        onclick: move |evt| {
                                            evt.prevent_default();
                                            scroll_to_anchor(anchor);
                                        },
                                        "{name}"
                                    }
                                }
                            }
                        }
                    }

                    div { class: "footer-column",
                        h4 { "Services" }
                        ul {
                            for service in SERVICES {
                                li { span { "{service}" } }
                            }
                        }
                    }

                    div { class: "footer-column",
                        h4 { "Resources" }
                        ul {
                            li { span { "Blog" } }
                            li { span { "Resume" } }
                            li {
                                a {
                                    href: "https://github.com",
                                    target: "_blank",
                                    rel: "noopener noreferrer",
                                    "GitHub"
                                }
                            }
                        }
                    }
                }

                div { class: "footer-bottom",
                    p { "© {year} Abhishek Gujar. All rights reserved." }
                }
            }
        }
    }
}
