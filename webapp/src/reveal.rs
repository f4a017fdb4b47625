use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;

use gloo_console::error as console_error;
use wasm_bindgen::{JsCast, JsValue, closure::Closure};

/// Fraction of a section that must be visible before it reveals.
pub const REVEAL_THRESHOLD: f64 = 0.3;

// Margin under the registered threshold within which an intersecting
// entry still counts; crossing notifications can report the ratio a hair
// short of the threshold they fired for.
const RATIO_SLACK: f64 = 0.01;

/// One-shot latch: once revealed, no geometry event can hide it again.
pub fn latch(revealed: bool, intersecting: bool, visible_fraction: f64, threshold: f64) -> bool {
    if revealed || visible_fraction >= threshold {
        return true;
    }

    intersecting && visible_fraction >= threshold - RATIO_SLACK
}

/// Observe the element with the given id and flip the returned signal to
/// true the first time at least `threshold` of it is inside the viewport.
/// The observer disconnects after triggering; each section gets its own
/// independent instance.
///
/// Consumers must render their hidden presentation as the initial frame,
/// since the signal starts false and observation only begins after mount.
pub fn use_reveal(element_id: &'static str, threshold: f64) -> Signal<bool> {
    let mut revealed = use_signal(|| false);

    use_effect(move || {
        if revealed() {
            return;
        }

        let Some(document) = web_sys::window().and_then(|window| window.document()) else {
            return;
        };
        let Some(target) = document.get_element_by_id(element_id) else {
            console_error!(format!("Reveal target #{element_id} not found"));
            return;
        };

        let handle: Rc<RefCell<Option<web_sys::IntersectionObserver>>> =
            Rc::new(RefCell::new(None));

        let handle_inner = Rc::clone(&handle);
        let callback = Closure::wrap(Box::new(move |entries: js_sys::Array, _: JsValue| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web_sys::IntersectionObserverEntry>() else {
                    continue;
                };

                let hit = latch(
                    revealed(),
                    entry.is_intersecting(),
                    entry.intersection_ratio(),
                    threshold,
                );
                if hit && !revealed() {
                    revealed.set(true);
                    if let Some(observer) = handle_inner.borrow_mut().take() {
                        observer.disconnect();
                    }
                }
            }
        }) as Box<dyn FnMut(js_sys::Array, JsValue)>);

        let options = web_sys::IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from(threshold));

        match web_sys::IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &options,
        ) {
            Ok(observer) => {
                observer.observe(&target);
                *handle.borrow_mut() = Some(observer);
                callback.forget();
            }
            Err(_) => console_error!(format!("Failed to observe #{element_id}")),
        }
    });

    revealed
}

/// Class pair for a reveal-animated block.
pub fn reveal_class(base: &'static str, revealed: bool) -> String {
    if revealed {
        format!("{base} revealed")
    } else {
        base.to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latches_at_threshold() {
        assert!(!latch(false, false, 0.0, REVEAL_THRESHOLD));
        assert!(!latch(false, false, 0.29, REVEAL_THRESHOLD));
        assert!(latch(false, false, 0.3, REVEAL_THRESHOLD));
        assert!(latch(false, true, 1.0, REVEAL_THRESHOLD));
    }

    #[test]
    fn crossing_jitter_still_latches() {
        // an intersecting entry whose ratio lands a hair under the
        // registered threshold still counts
        assert!(latch(false, true, 0.295, REVEAL_THRESHOLD));

        // the initial observation of a barely visible section does not
        assert!(!latch(false, true, 0.05, REVEAL_THRESHOLD));

        // jitter without the intersection flag does not count either
        assert!(!latch(false, false, 0.295, REVEAL_THRESHOLD));
    }

    #[test]
    fn revealed_is_monotonic() {
        let mut revealed = false;
        revealed = latch(revealed, true, 0.5, REVEAL_THRESHOLD);
        assert!(revealed);

        // scrolling back out cannot hide the section again
        for fraction in [0.29, 0.0, -1.0] {
            revealed = latch(revealed, false, fraction, REVEAL_THRESHOLD);
            assert!(revealed);
        }
    }

    #[test]
    fn class_pair_tracks_state() {
        assert_eq!(reveal_class("section-block", false), "section-block");
        assert_eq!(reveal_class("section-block", true), "section-block revealed");
    }
}
