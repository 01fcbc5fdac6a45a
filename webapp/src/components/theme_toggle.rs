use dioxus::prelude::*;
use tracing::debug;

use common::theme::{DisplayMode, toggle_label, toggle_pressed};

use crate::dom::theme::{preferences, use_display_mode};

#[component]
pub fn ThemeToggle() -> Element {
    let mode = use_display_mode();
    let label = toggle_label(Some(mode()));
    let pressed = toggle_pressed(Some(mode())).map(|pressed| pressed.to_string());
    let icon = match mode() {
        DisplayMode::Light => "☀",
        DisplayMode::Dark => "☾",
    };

    rsx! {
        button {
            class: "theme-toggle",
            r#type: "button",
            aria_label: "{label}",
            title: "{label}",
            aria_pressed: pressed,
            // the observer picks up the new value from the root
            onclick: move |_| {
                let next = preferences().toggle_mode();
                debug!(%next, "display mode toggled");
            },
            "{icon}"
        }
    }
}
