use dioxus::prelude::*;
use dioxus_router::prelude::*;

use catalog::projects;

use crate::Route;
use crate::reveal::{REVEAL_THRESHOLD, reveal_class, use_reveal};

mod detail;
pub use detail::ProjectPage;

#[component]
pub fn Projects() -> Element {
    let revealed = use_reveal("projects", REVEAL_THRESHOLD);

    rsx! {
        section { id: "projects", class: "projects-section",
            div { class: "container",
                div { class: reveal_class("section-header section-block", revealed()),
                    h2 { class: "section-title", "Featured " span { "Projects" } }
                    p { class: "section-subtitle",
                        "A showcase of my recent work and technical expertise"
                    }
                }

                div { class: reveal_class("projects-grid section-block", revealed()),
                    for project in projects() {
                        div { class: "project-card", key: "{project.id}",
                            div { class: "project-image", "{project.image_label}" }

                            div { class: "project-content",
                                h3 { class: "project-title", "{project.title}" }
                                p { class: "project-desc", "{project.blurb}" }

                                div { class: "project-tech",
                                    for tech in project.technologies {
                                        span { class: "tech-tag", "{tech}" }
                                    }
                                }

                                div { class: "project-links",
                                    a {
                                        class: "project-link primary",
                                        href: "{project.live_url}",
                                        target: "_blank",
                                        rel: "noopener noreferrer",
                                        "Live Demo"
                                    }
                                    a {
                                        class: "project-link secondary",
                                        href: "{project.source_url}",
                                        target: "_blank",
                                        rel: "noopener noreferrer",
                                        "Code"
                                    }
                                    Link {
                                        class: "project-link secondary",
                                        to: Route::ProjectPage {
                                            project_id: project.id.to_owned(),
                                        },
                                        "Details →"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
