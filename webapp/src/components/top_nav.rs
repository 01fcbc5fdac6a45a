use std::{cell::RefCell, rc::Rc};

use dioxus::prelude::*;
use dioxus_router::prelude::*;
use tracing::debug;

use common::nav::{NAV_ITEMS, NavController, NavVisibility, ScrollHost};

use crate::{
    Route,
    dom::{
        clock::use_local_time,
        scroll::{RouterNavigator, ScrollListener, WindowScroll},
    },
    site::SITE_CONFIG,
    components::{layout::use_intro_gate, theme_toggle::ThemeToggle},
};

#[component]
pub fn TopNav(route: String) -> Element {
    let intro = use_intro_gate();
    let local_time = use_local_time();

    // computed eagerly, so a mid-page reload does not flash a hidden bar
    let mut visible = use_signal(|| {
        NavController::new(&SITE_CONFIG).is_nav_visible(
            &route,
            WindowScroll.scroll_y(),
            WindowScroll.viewport_height(),
        )
    });

    // only the home route hides the bar, so only it needs to watch scrolling
    let listener = use_hook(|| {
        let controller = NavController::new(&SITE_CONFIG);
        let route = route.clone();

        let listener = if controller.is_home(&route) {
            let mut tracker = NavVisibility::seeded(*visible.peek());
            ScrollListener::install(move || {
                let host = WindowScroll;
                let now = controller.is_nav_visible(&route, host.scroll_y(), host.viewport_height());
                if let Some(now) = tracker.update(now) {
                    visible.set(now);
                }
            })
        } else {
            None
        };

        Rc::new(RefCell::new(listener))
    });

    use_drop(move || {
        listener.borrow_mut().take();
    });

    rsx! {
        header { class: if visible() { "top-nav visible" } else { "top-nav" },
            div { class: "nav-container",
                Link { class: "nav-logo", to: Route::Home {}, "{SITE_CONFIG.loader.glyphs}" }

                nav { class: "nav-links",
                    for item in NAV_ITEMS {
                        button {
                            key: "{item.id}",
                            class: "nav-link",
                            r#type: "button",
                            onclick: {
                                let route = route.clone();
                                move |_| {
                                    let playing = intro.read().is_playing(&route);
                                    let outcome = NavController::new(&SITE_CONFIG)
                                        .interactive(!playing)
                                        .navigate_to_section(
                                            item.id,
                                            &route,
                                            SITE_CONFIG.nav_offset_px,
                                            &WindowScroll,
                                            &RouterNavigator,
                                        );
                                    debug!(?outcome, target = item.id, "nav click");
                                }
                            },
                            "{item.label}"
                        }
                    }
                    Link { class: "nav-link", to: Route::Resume {}, "Resume" }
                    ThemeToggle {}
                }

                div { class: "nav-clock",
                    p { class: "nav-clock-time", "{local_time}" }
                    p { "{SITE_CONFIG.clock.place}" }
                }
            }
        }
    }
}
