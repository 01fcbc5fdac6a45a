use dioxus::prelude::*;
use dioxus_router::prelude::*;
use tracing::debug;

use common::nav::{NavController, PendingSection};

use crate::{
    Route,
    contact::ContactSection,
    dom::{
        location_hash,
        scroll::{PENDING_SECTION, RouterNavigator, WindowScroll},
    },
    site::SITE_CONFIG,
    components::{layout::use_intro_gate, theme_toggle::ThemeToggle},
};

const PROJECTS: [(&str, &str); 3] = [
    (
        "Load Sequencer",
        "A phase machine that stages the site intro and hands scrolling back exactly as it found it.",
    ),
    (
        "Theme Preferences",
        "Light and dark modes resolved before first paint and kept in sync across every widget.",
    ),
    (
        "Contact Pipeline",
        "A form lifecycle that survives slow networks, double clicks, and early navigation.",
    ),
];

#[derive(Clone, PartialEq, Props)]
struct CtaButtonProps {
    route: String,
    label: &'static str,
    target: &'static str,
    class: &'static str,
}

// in-page call to action, routed through the same controller as the nav bar
#[component]
fn CtaButton(props: CtaButtonProps) -> Element {
    let intro = use_intro_gate();
    let route = props.route;

    rsx! {
        button {
            class: "{props.class}",
            r#type: "button",
            onclick: move |_| {
                let playing = intro.read().is_playing(&route);
                NavController::new(&SITE_CONFIG)
                    .interactive(!playing)
                    .navigate_to_section(
                        props.target,
                        &route,
                        SITE_CONFIG.nav_offset_px,
                        &WindowScroll,
                        &RouterNavigator,
                    );
            },
            "{props.label}"
        }
    }
}

// the first screen; the nav bar is hidden here, so the hero carries its own toggle
#[component]
fn Hero(route: String) -> Element {
    rsx! {
        section { id: "about", class: "hero",
            div { class: "container",
                div { class: "hero-toggle", ThemeToggle {} }
                h1 { class: "hero-title", "Hi, I build things for the web." }
                p { class: "hero-subtitle",
                    "Software engineer working on fast, accessible interfaces and the systems behind them."
                }
                div { class: "hero-actions",
                    CtaButton {
                        route: route.clone(),
                        label: "See my work",
                        target: "projects",
                        class: "btn btn-primary btn-lg",
                    }
                    CtaButton {
                        route: route.clone(),
                        label: "Get in touch",
                        target: "contact",
                        class: "btn btn-secondary btn-lg",
                    }
                }
            }
        }
    }
}

#[component]
pub fn Home() -> Element {
    let intro = use_intro_gate();
    let route = use_route::<Route>().to_string();

    // a deep link like /#contact scrolls once the intro is out of the way
    use_hook(|| {
        let Some(hash) = location_hash() else {
            return;
        };

        let pending = PendingSection::from_fragment(&hash);
        if pending.is_pending() {
            *PENDING_SECTION.write() = pending;
        }
    });

    use_effect({
        let route = route.clone();
        move || {
            let playing = intro.read().is_playing(&route);
            if playing || !PENDING_SECTION.read().is_pending() {
                return;
            }

            let controller = NavController::new(&SITE_CONFIG);
            if let Some(outcome) = PENDING_SECTION.write().resolve(&controller, &WindowScroll) {
                debug!(?outcome, "resolved pending section");
            }
        }
    });

    rsx! {
        div { class: "home-container",
            Hero { route: route.clone() }

            section { id: "projects", class: "section",
                div { class: "container",
                    h2 { class: "section-title", "Selected Work" }
                    div { class: "project-grid",
                        for (title, blurb) in PROJECTS {
                            div { key: "{title}", class: "project-card",
                                h3 { "{title}" }
                                p { "{blurb}" }
                            }
                        }
                    }
                }
            }

            ContactSection {}
        }
    }
}
