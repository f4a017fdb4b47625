use dioxus::prelude::*;
use dioxus_router::prelude::*;

use catalog::find_project;

use crate::Route;

// Project detail page, reached from the grid or a direct /project/{id}
// link. The id comes in as a route string and is resolved against the
// catalog here; ids with no record get an explicit not-found state.
#[derive(Clone, PartialEq, Props)]
pub struct ProjectPageProps {
    project_id: String,
}

#[component]
pub fn ProjectPage(props: ProjectPageProps) -> Element {
    let Some(project) = find_project(&props.project_id) else {
        return rsx! {
            section { class: "not-found",
                div { class: "container",
                    h1 { "Project not found" }
                    p { "No project matches \"{props.project_id}\"." }
                    Link { class: "btn btn-primary", to: Route::Landing {}, "Back to projects" }
                }
            }
        };
    };

    rsx! {
        section { class: "project-detail",
            div { class: "container",
                Link { class: "back-link", to: Route::Landing {}, "← Back to Projects" }

                div { class: "detail-header",
                    div { class: "project-image detail-image", "{project.image_label}" }
                    h1 { class: "detail-title", "{project.title}" }
                    p { class: "detail-blurb", "{project.blurb}" }

                    div { class: "detail-meta",
                        span { class: "meta-item", "📅 {project.date}" }
                        span { class: "meta-item", "👥 {project.team}" }
                        span { class: "meta-item", "💼 {project.role}" }
                    }

                    div { class: "project-tech",
                        for tech in project.technologies {
                            span { class: "tech-tag", "{tech}" }
                        }
                    }

                    div { class: "detail-actions",
                        a {
                            class: "btn btn-primary",
                            href: "{project.live_url}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            "Live Demo"
                        }
                        a {
                            class: "btn btn-secondary",
                            href: "{project.source_url}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            "View Source"
                        }
                    }
                }

                div { class: "detail-body",
                    div { class: "detail-main",
                        h2 { "About This Project" }
                        p { class: "detail-description", "{project.long_description}" }

                        DetailList { heading: "Challenges", items: project.challenges }
                        DetailList { heading: "Solutions", items: project.solutions }
                        DetailList { heading: "Results", items: project.results }
                    }

                    aside { class: "detail-sidebar",
                        h3 { "Project Info" }
                        dl {
                            dt { "Duration" }
                            dd { "{project.duration}" }
                            dt { "Team" }
                            dd { "{project.team}" }
                            dt { "Role" }
                            dd { "{project.role}" }
                            dt { "Year" }
                            dd { "{project.date}" }
                        }
                    }
                }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct DetailListProps {
    heading: &'static str,
    items: &'static [&'static str],
}

#[component]
fn DetailList(props: DetailListProps) -> Element {
    rsx! {
        div { class: "detail-list",
            h3 { "{props.heading}" }
            ul {
                for item in props.items {
                    li { "{item}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use catalog::find_project;

    #[test]
    fn known_ids_resolve() {
        for id in ["ecommerce-platform", "ai-chat"] {
            assert!(find_project(id).is_some(), "{id} should resolve");
        }
    }

    #[test]
    fn unknown_ids_do_not_resolve() {
        // matches the not-found rendering path for /project/42
        assert!(find_project("42").is_none());
    }
}
