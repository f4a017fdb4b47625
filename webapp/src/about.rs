use dioxus::prelude::*;

use crate::reveal::{REVEAL_THRESHOLD, reveal_class, use_reveal};

struct Feature {
    title: &'static str,
    description: &'static str,
}

const FEATURES: [Feature; 4] = [
    Feature {
        title: "Clean Code",
        description: "Writing maintainable, scalable, and well-documented code that follows \
                      best practices.",
    },
    Feature {
        title: "UI/UX Design",
        description: "Creating beautiful, intuitive user interfaces with exceptional user \
                      experiences.",
    },
    Feature {
        title: "Performance",
        description: "Optimizing applications for speed, efficiency, and smooth user \
                      interactions.",
    },
    Feature {
        title: "Collaboration",
        description: "Working effectively in teams, communicating clearly, and delivering \
                      on time.",
    },
];

#[component]
pub fn About() -> Element {
    let revealed = use_reveal("about", REVEAL_THRESHOLD);

    rsx! {
        section { id: "about", class: "about-section",
            div { class: "container",
                div { class: reveal_class("section-header section-block", revealed()),
                    h2 { class: "section-title", "About " span { "Me" } }
                    p { class: "section-subtitle",
                        "Get to know the person behind the code"
                    }
                }

                div { class: "about-content",
                    div { class: reveal_class("about-text section-block", revealed()),
                        h3 { "Turning Ideas Into Reality" }
                        p {
                            "I'm a passionate Full Stack Developer with a strong foundation in \
                             modern web technologies. With expertise in HTML, CSS, JavaScript, \
                             React, Node.js, and MongoDB, I specialize in creating unique \
                             digital experiences that combine beautiful design with powerful \
                             functionality."
                        }
                        p {
                            "My journey in web development started with a curiosity about how \
                             things work on the internet. Today, I craft applications that not \
                             only meet technical requirements but also provide exceptional user \
                             experiences. I believe in writing clean, maintainable code and \
                             staying up-to-date with the latest industry trends and best \
                             practices."
                        }
                        p {
                            "When I'm not coding, you'll find me exploring new technologies, \
                             contributing to open-source projects, or sharing knowledge with \
                             the developer community. I'm always excited to take on new \
                             challenges and collaborate on innovative projects."
                        }
                    }

                    div { class: reveal_class("feature-grid section-block delayed", revealed()),
                        for feature in FEATURES {
                            div { class: "feature-card",
                                h3 { class: "feature-title", "{feature.title}" }
                                p { class: "feature-desc", "{feature.description}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
