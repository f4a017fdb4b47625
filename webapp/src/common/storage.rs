use gloo_console::error as console_error;
use gloo_storage::{LocalStorage, Storage};

// Values are stored raw: the theme key holds the bare word "dark" or
// "light", readable by anything else that touches the same origin.
// Failures (disabled storage, quota) are logged and otherwise treated as
// an absent value; callers fall back to their defaults.

pub fn set_local_storage(key: &str, value: &str) {
    LocalStorage::raw()
        .set_item(key, value)
        .unwrap_or_else(|err| console_error!(format!("Failed to set local storage {key}: {err:?}")))
}

pub fn get_local_storage(key: &str) -> Option<String> {
    match LocalStorage::raw().get_item(key) {
        Ok(value) => value,
        Err(err) => {
            console_error!(format!("Failed to fetch local storage {key}: {err:?}"));
            None
        }
    }
}
