#![allow(non_snake_case)]
use dioxus::prelude::*;
use dioxus_router::prelude::*;

use tracing::Level;

mod common;

mod theme;

mod reveal;

mod nav;
use nav::PageShell;

mod hero;
mod home;
use home::Landing;

mod about;
mod contact;
mod footer;
mod skills;

mod projects;
use projects::ProjectPage;

fn main() {
    dioxus_logger::init(Level::INFO).expect("failed to init logger");
    launch(App);
}

#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
enum Route {
    #[layout(PageShell)]
        #[route("/")]
        Landing {},
        #[route("/project/:project_id")]
        ProjectPage { project_id: String },
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

#[component]
pub fn App() -> Element {
    // load the persisted theme and apply it before anything renders
    use_hook(theme::init);

    rsx! {
        style { "{common::style::PORTFOLIO_STYLES}" }
        Router::<Route> { config: RouterConfig::default }
    }
}

#[component]
fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        section { class: "not-found",
            div { class: "container",
                h1 { "Page not found" }
                p { "There is nothing at /{path}." }
                Link { class: "btn btn-primary", to: Route::Landing {}, "Back to home" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Route;

    #[test]
    fn root_parses_to_landing() {
        let route: Route = "/".parse().unwrap();
        assert_eq!(route, Route::Landing {});
    }

    #[test]
    fn project_path_captures_id_verbatim() {
        let route: Route = "/project/42".parse().unwrap();
        assert_eq!(
            route,
            Route::ProjectPage {
                project_id: String::from("42")
            }
        );
    }

    #[test]
    fn unknown_path_falls_through_to_not_found() {
        let route: Route = "/no/such/page".parse().unwrap();
        match route {
            Route::NotFound { segments } => {
                assert_eq!(segments, vec!["no", "such", "page"]);
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
    }
}
