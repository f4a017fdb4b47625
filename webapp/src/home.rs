use dioxus::prelude::*;

use crate::about::About;
use crate::contact::Contact;
use crate::hero::Hero;
use crate::projects::Projects;
use crate::skills::Skills;

/// The landing composition: the hero banner followed by every content
/// section in page order. Each section owns its own reveal state; there
/// is no ordering between them.
#[component]
pub fn Landing() -> Element {
    rsx! {
        Hero {}
        About {}
        Skills {}
        Projects {}
        Contact {}
    }
}
