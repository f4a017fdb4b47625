use dioxus::prelude::*;

use catalog::{proficiencies, skill_categories};

use crate::reveal::{REVEAL_THRESHOLD, reveal_class, use_reveal};

#[component]
pub fn Skills() -> Element {
    let revealed = use_reveal("skills", REVEAL_THRESHOLD);

    rsx! {
        section { id: "skills", class: "skills-section",
            div { class: "container",
                div { class: reveal_class("section-header section-block", revealed()),
                    h2 { class: "section-title", "My " span { "Skills" } }
                    p { class: "section-subtitle",
                        "Technologies and tools I use to bring ideas to life"
                    }
                }

                div { class: reveal_class("skills-grid section-block", revealed()),
                    for category in skill_categories() {
                        div { class: "skill-category",
                            h3 { class: "category-title", "{category.title}" }
                            div { class: "skills-list",
                                for skill in category.skills {
                                    span { class: "skill-item", "{skill}" }
                                }
                            }
                        }
                    }
                }

                div { class: reveal_class("progress-section section-block delayed", revealed()),
                    h3 { class: "progress-title", "Proficiency Levels" }
                    div { class: "progress-grid",
                        for skill in proficiencies() {
                            div { class: "progress-card",
                                div { class: "progress-header",
                                    span { class: "progress-name", "{skill.name}" }
                                    span { class: "progress-percentage", "{skill.percent}%" }
                                }
                                div { class: "progress-bar",
                                    // bars grow from zero once the section reveals
                                    div {
                                        class: "progress-fill",
                                        style: if revealed() {
                                            "width: {skill.percent}%"
                                        } else {
                                            "width: 0"
                                        },
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
