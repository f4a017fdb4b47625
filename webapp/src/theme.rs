use dioxus::prelude::*;

use gloo_console::error as console_error;

use crate::common::storage::{get_local_storage, set_local_storage};

const THEME_KEY: &str = "theme";

/// The document-wide visual mode. Dark is the default for first visits and
/// for anything unrecognized in storage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    /// Only the exact stored value "light" selects light mode; absent or
    /// corrupt values read as dark rather than as an error.
    pub fn from_stored(stored: Option<&str>) -> Self {
        match stored {
            Some("light") => Theme::Light,
            _ => Theme::Dark,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn flip(&self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

pub static THEME: GlobalSignal<Theme> = Signal::global(load);

fn load() -> Theme {
    Theme::from_stored(get_local_storage(THEME_KEY).as_deref())
}

/// Apply the persisted preference to the document. Called once at startup.
pub fn init() {
    apply(*THEME.read());
}

/// Flip the preference, persist it, and restyle the document. All three
/// effects happen in one synchronous step, so the in-memory flag, the stored
/// value, and the applied mode never disagree.
pub fn toggle() {
    let next = THEME.read().flip();
    set_local_storage(THEME_KEY, next.as_str());
    apply(next);
    *THEME.write() = next;
}

// The whole stylesheet keys off a single `dark` class on <body>; class-list
// add/remove are idempotent, so re-applying a mode is a no-op.
fn apply(theme: Theme) {
    let Some(body) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.body())
    else {
        return;
    };

    let result = match theme {
        Theme::Dark => body.class_list().add_1("dark"),
        Theme::Light => body.class_list().remove_1("dark"),
    };

    if result.is_err() {
        console_error!(format!("Failed to apply {} mode to document", theme.as_str()));
    }
}

#[component]
pub fn ThemeToggle() -> Element {
    let theme = *THEME.read();

    rsx! {
        button {
            class: "theme-toggle",
            aria_label: "Toggle dark mode",
            onclick: move |_| toggle(),
            if theme == Theme::Dark { "🌞" } else { "🌙" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Theme;

    #[test]
    fn only_exact_light_reads_as_light() {
        assert_eq!(Theme::from_stored(Some("light")), Theme::Light);

        assert_eq!(Theme::from_stored(None), Theme::Dark);
        assert_eq!(Theme::from_stored(Some("dark")), Theme::Dark);
        assert_eq!(Theme::from_stored(Some("garbage")), Theme::Dark);
        assert_eq!(Theme::from_stored(Some("Light")), Theme::Dark);
        assert_eq!(Theme::from_stored(Some("")), Theme::Dark);
    }

    #[test]
    fn flip_is_an_involution() {
        assert_eq!(Theme::Dark.flip(), Theme::Light);
        assert_eq!(Theme::Light.flip(), Theme::Dark);
        assert_eq!(Theme::Dark.flip().flip(), Theme::Dark);
    }

    // the persisted value is the bare label, no encoding around it
    #[test]
    fn stored_labels_are_bare_words() {
        assert_eq!(Theme::Dark.as_str(), "dark");
        assert_eq!(Theme::Light.as_str(), "light");
    }

    #[test]
    fn labels_round_trip() {
        for theme in [Theme::Dark, Theme::Light] {
            assert_eq!(Theme::from_stored(Some(theme.as_str())), theme);
        }
    }
}
