use std::{cell::RefCell, rc::Rc};

use dioxus::prelude::*;
use js_sys::Array;
use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use web_sys::{MutationObserver, MutationObserverInit, MutationRecord};

use common::theme::{
    ColorSchemeQuery, DisplayMode, MODE_ATTRIBUTE, ModeRoot, PreferenceStore, is_mode_attribute,
};

use crate::{
    dom::{root_element, storage::BrowserStorage},
    site::SITE_CONFIG,
};

// data-theme on <html>, plus the color-scheme hint so native controls follow along
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentRoot;

impl ModeRoot for DocumentRoot {
    fn mode(&self) -> Option<DisplayMode> {
        root_element()?
            .dataset()
            .get("theme")
            .and_then(|value| DisplayMode::parse(&value))
    }

    fn set_mode(&self, mode: DisplayMode) {
        let Some(root) = root_element() else {
            return;
        };

        let _ = root.dataset().set("theme", mode.as_str());
        let _ = root.style().set_property("color-scheme", mode.as_str());
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct MediaQuery;

impl ColorSchemeQuery for MediaQuery {
    fn prefers_dark(&self) -> bool {
        web_sys::window()
            .and_then(|window| {
                window
                    .match_media("(prefers-color-scheme: dark)")
                    .ok()
                    .flatten()
            })
            .map(|query| query.matches())
            .unwrap_or(false)
    }
}

pub type BrowserPreferences = PreferenceStore<DocumentRoot, BrowserStorage, MediaQuery>;

// the store is stateless beyond the key, so building one per use is fine
pub fn preferences() -> BrowserPreferences {
    PreferenceStore::new(
        DocumentRoot,
        BrowserStorage,
        MediaQuery,
        SITE_CONFIG.theme_storage_key.clone(),
    )
}

// watches the mode attribute on <html> until dropped
pub struct RootObserver {
    observer: MutationObserver,
    _callback: Closure<dyn FnMut(Array)>,
}

impl RootObserver {
    pub fn observe(mut on_change: impl FnMut() + 'static) -> Option<Self> {
        let root = root_element()?;

        let callback = Closure::<dyn FnMut(Array)>::new(move |records: Array| {
            let touched = records.iter().any(|record| {
                record
                    .dyn_into::<MutationRecord>()
                    .ok()
                    .and_then(|record| record.attribute_name())
                    .is_some_and(|name| is_mode_attribute(&name))
            });

            if touched {
                on_change();
            }
        });
        let observer = MutationObserver::new(callback.as_ref().unchecked_ref()).ok()?;

        let init = MutationObserverInit::new();
        init.set_attributes(true);
        init.set_attribute_filter(&Array::of1(&JsValue::from_str(MODE_ATTRIBUTE)));
        observer.observe_with_options(&root, &init).ok()?;

        Some(RootObserver {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for RootObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

// current display mode, kept in sync with the document root
//
// the first value is read from the root itself rather than guessed, and every
// component calling this converges on the same value after a single mutation
// notification.  the observer is disconnected when the component unmounts
pub fn use_display_mode() -> Signal<DisplayMode> {
    let mut mode = use_signal(|| preferences().current_mode());

    let observer = use_hook(|| {
        Rc::new(RefCell::new(RootObserver::observe(move || {
            let current = preferences().current_mode();
            if *mode.peek() != current {
                mode.set(current);
            }
        })))
    });

    use_drop(move || {
        observer.borrow_mut().take();
    });

    mode
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use std::cell::Cell;

    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;

    use common::loader::{OverflowAxis, OverflowHost, OverflowTarget};

    use super::*;
    use crate::dom::scroll::DocumentOverflow;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn root_observer_wakes_for_the_mode_only() {
        let changes = Rc::new(Cell::new(0));
        let sink = changes.clone();
        let observer = RootObserver::observe(move || sink.set(sink.get() + 1)).expect("document root");

        // the scroll lock rewrites the root's inline style
        DocumentOverflow.set_overflow(OverflowTarget::Root, OverflowAxis::Y, "hidden");
        DocumentOverflow.set_overflow(OverflowTarget::Root, OverflowAxis::Y, "");
        TimeoutFuture::new(0).await;
        assert_eq!(changes.get(), 0);

        DocumentRoot.set_mode(DisplayMode::Dark);
        TimeoutFuture::new(0).await;
        assert_eq!(changes.get(), 1);
        assert_eq!(DocumentRoot.mode(), Some(DisplayMode::Dark));

        drop(observer);
        DocumentRoot.set_mode(DisplayMode::Light);
        TimeoutFuture::new(0).await;
        assert_eq!(changes.get(), 1);
    }
}
