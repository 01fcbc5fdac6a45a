use dioxus::prelude::*;
use gloo_timers::callback::Timeout;

use common::{
    contact::Notifier,
    notify::{Severity, ToastQueue},
};

use crate::{dom::theme::use_display_mode, site::SITE_CONFIG};

pub static TOASTS: GlobalSignal<ToastQueue> = Signal::global(ToastQueue::default);

// each toast removes itself after the configured duration
#[derive(Clone, Copy, Debug, Default)]
pub struct ToastNotifier;

impl Notifier for ToastNotifier {
    fn notify(&self, message: &str, severity: Severity) {
        let id = TOASTS.write().push(message, severity);

        Timeout::new(SITE_CONFIG.toast_duration_ms, move || {
            TOASTS.write().dismiss(id);
        })
        .forget();
    }
}

#[component]
pub fn Toaster() -> Element {
    let mode = use_display_mode();

    rsx! {
        div {
            class: "toaster",
            "data-theme": "{mode}",
            role: "status",
            aria_live: "polite",
            for toast in TOASTS.read().toasts().iter().cloned() {
                div {
                    key: "{toast.id}",
                    class: "toast {toast.severity.as_str()}",
                    onclick: move |_| TOASTS.write().dismiss(toast.id),
                    "{toast.message}"
                }
            }
        }
    }
}
