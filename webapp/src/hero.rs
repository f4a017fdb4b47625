use dioxus::prelude::*;

use crate::nav::scroll_to_anchor;

// The hero animates on load rather than on reveal, so it carries no
// intersection observer; the entrance keyframes live in the stylesheet.
#[component]
pub fn Hero() -> Element {
    rsx! {
        section { id: "home", class: "hero",
            div { class: "floating-elements",
                div { class: "floating-element float-a" }
                div { class: "floating-element float-b" }
                div { class: "floating-element float-c" }
            }

            div { class: "hero-content",
                div { class: "hero-greeting", "Hello, I'm" }
                h1 { class: "hero-name", span { "Abhishek Gujar" } }
                div { class: "hero-role", "Web Developer & UI/UX Specialist" }
                p { class: "hero-tagline",
                    "Full Stack Developer | Crafting Unique Digital Experiences"
                }

                button {
                    class: "btn btn-primary btn-lg hero-cta",
                    onclick: move |_| scroll_to_anchor("about"),
                    "View My Work"
                }

                div { class: "hero-social",
                    a {
                        class: "social-link",
                        href: "https://github.com",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        aria_label: "GitHub",
                        "GitHub"
                    }
                    a {
                        class: "social-link",
                        href: "https://linkedin.com",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        aria_label: "LinkedIn",
                        "LinkedIn"
                    }
                    a {
                        class: "social-link",
                        href: "mailto:your.email@example.com",
                        aria_label: "Email",
                        "Email"
                    }
                }
            }

            button {
                class: "scroll-indicator",
                aria_label: "Scroll to content",
                onclick: move |_| scroll_to_anchor("about"),
                "↓"
            }
        }
    }
}
