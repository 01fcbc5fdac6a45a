use dioxus::prelude::*;
use dioxus_router::prelude::*;

use common::loader::IntroGate;

use crate::{
    Route,
    components::{loader::InitialLoader, toaster::Toaster, top_nav::TopNav},
};

// shared by the loader, the nav bar, and any page that has to wait for the intro
pub fn use_intro_gate() -> Signal<IntroGate> {
    use_context::<Signal<IntroGate>>()
}

// mounts `children` afresh for every distinct route
//
// a key only takes effect on list items, so the children sit in a one-element list
// keyed by the route.  a new route drops the old scopes (running their use_drop
// cleanups) and creates new ones; re-rendering the same route keeps them
#[component]
pub fn RouteScope(route: String, children: Element) -> Element {
    rsx! {
        for scope in [route] {
            Fragment { key: "{scope}", {children.clone()} }
        }
    }
}

#[component]
pub fn SiteLayout() -> Element {
    use_context_provider(|| Signal::new(IntroGate::default()));

    let route = use_route::<Route>().to_string();

    rsx! {
        RouteScope { route: route.clone(),
            InitialLoader { route: route.clone() }
            TopNav { route: route.clone() }
        }
        main { Outlet::<Route> {} }
        footer { class: "site-footer",
            div { class: "container", "Built with Rust and Dioxus" }
        }
        Toaster {}
    }
}
