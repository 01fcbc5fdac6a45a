#![allow(non_snake_case)]
use dioxus::prelude::*;
use dioxus_router::prelude::*;

use tracing::Level;

mod components;
mod contact;
mod dom;
mod site;
mod style;

use components::layout::SiteLayout;

mod home;
use home::Home;

mod resume;
use resume::Resume;

fn main() {
    dioxus_logger::init(Level::DEBUG).expect("failed to init logger");

    // the pre-paint script in index.html has normally done this already; doing
    // it again here covers pages served without that script
    dom::theme::preferences().resolve_initial_mode();

    launch(App);
}

#[derive(Clone, PartialEq, Routable)]
#[rustfmt::skip]
enum Route {
    #[layout(SiteLayout)]
        #[route("/")]
        Home {},
        #[route("/resume")]
        Resume {},
}

#[component]
pub fn App() -> Element {
    rsx! {
        style { "{style::SITE_STYLES}" }
        style { "{style::HOME_STYLES}" }
        Router::<Route> { config: RouterConfig::default }
    }
}
