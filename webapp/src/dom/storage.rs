use gloo_console::error as console_error;
use gloo_storage::{LocalStorage, Storage};

use common::theme::PreferenceStorage;

// values are stored raw rather than json-encoded, so that the pre-paint script in
// index.html and this module agree on what "dark" looks like in storage

// LocalStorage::raw() assumes storage exists, but it can be missing or throw on
// access (privacy modes, sandboxed frames), so check through web_sys first
fn local_storage_available() -> bool {
    web_sys::window()
        .map(|window| matches!(window.local_storage(), Ok(Some(_))))
        .unwrap_or(false)
}

pub fn set_local_storage(key: &str, value: &str) -> anyhow::Result<()> {
    if !local_storage_available() {
        return Err(anyhow::Error::msg("Local storage unavailable"));
    }

    LocalStorage::raw().set_item(key, value).map_err(|err| {
        console_error!(format!("Failed to set local storage {key}: {err:?}"));
        anyhow::Error::msg("Local storage failure, see console log")
    })
}

pub fn get_local_storage(key: &str) -> Option<String> {
    if !local_storage_available() {
        return None;
    }

    LocalStorage::raw().get_item(key).unwrap_or_else(|err| {
        console_error!(format!("Failed to fetch local storage {key}: {err:?}"));
        None
    })
}

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl PreferenceStorage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        get_local_storage(key)
    }

    fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
        set_local_storage(key, value)
    }
}
