use dioxus::prelude::*;
use dioxus_router::prelude::*;
use tracing::warn;
use wasm_bindgen::{JsCast, closure::Closure};
use web_sys::{AddEventListenerOptions, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

use common::{
    loader::{OverflowAxis, OverflowHost, OverflowTarget},
    nav::{Navigator, PendingSection, ScrollHost, split_section_href},
};

use crate::{
    Route,
    dom::{body_element, root_element},
};

// a section scroll waiting for the home route to mount and the intro to finish
pub static PENDING_SECTION: GlobalSignal<PendingSection> = Signal::global(PendingSection::default);

#[derive(Clone, Copy, Debug, Default)]
pub struct WindowScroll;

impl ScrollHost for WindowScroll {
    fn scroll_y(&self) -> f64 {
        web_sys::window()
            .and_then(|window| window.scroll_y().ok())
            .unwrap_or(0.0)
    }

    fn viewport_height(&self) -> f64 {
        web_sys::window()
            .and_then(|window| window.inner_height().ok())
            .and_then(|height| height.as_f64())
            .unwrap_or(0.0)
    }

    fn element_top(&self, id: &str) -> Option<f64> {
        let element = web_sys::window()?.document()?.get_element_by_id(id)?;

        Some(element.get_bounding_client_rect().top())
    }

    fn smooth_scroll_to(&self, top: f64) {
        let Some(window) = web_sys::window() else {
            return;
        };

        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);

        window.scroll_to_with_scroll_to_options(&options);
    }
}

// passive window scroll listener, removed when dropped
pub struct ScrollListener {
    window: Window,
    callback: Closure<dyn FnMut()>,
}

impl ScrollListener {
    pub fn install(on_scroll: impl FnMut() + 'static) -> Option<Self> {
        let window = web_sys::window()?;
        let callback = Closure::<dyn FnMut()>::new(on_scroll);

        let options = AddEventListenerOptions::new();
        options.set_passive(true);

        window
            .add_event_listener_with_callback_and_add_event_listener_options(
                "scroll",
                callback.as_ref().unchecked_ref(),
                &options,
            )
            .ok()?;

        Some(ScrollListener { window, callback })
    }
}

impl Drop for ScrollListener {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback("scroll", self.callback.as_ref().unchecked_ref());
    }
}

// route changes for cross-page section links
//
// "/#contact" becomes a push to the home route with "contact" parked in
// PENDING_SECTION; the home page picks it up once it has mounted
#[derive(Clone, Copy, Debug, Default)]
pub struct RouterNavigator;

impl Navigator for RouterNavigator {
    fn go_to(&self, href: &str) {
        let (path, section) = split_section_href(href);

        match path.parse::<Route>() {
            Ok(route) => {
                if let Some(section) = section {
                    PENDING_SECTION.write().defer(section);
                }
                let _ = navigator().push(route);
            }
            Err(err) => warn!("cannot route to {path}: {err}"),
        }
    }
}

fn overflow_element(target: OverflowTarget) -> Option<HtmlElement> {
    match target {
        OverflowTarget::Root => root_element(),
        OverflowTarget::Body => body_element(),
    }
}

// inline overflow-x/overflow-y of <html> and <body>
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentOverflow;

impl OverflowHost for DocumentOverflow {
    fn overflow(&self, target: OverflowTarget, axis: OverflowAxis) -> String {
        overflow_element(target)
            .and_then(|element| element.style().get_property_value(axis.property()).ok())
            .unwrap_or_default()
    }

    // an empty value removes the inline property again
    fn set_overflow(&self, target: OverflowTarget, axis: OverflowAxis, value: &str) {
        if let Some(element) = overflow_element(target) {
            let _ = element.style().set_property(axis.property(), value);
        }
    }
}
