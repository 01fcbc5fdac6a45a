use tracing::debug;

use crate::config::SiteConfig;

// in-page sections reachable from the nav bar
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub id: &'static str,
}

pub const NAV_ITEMS: [NavItem; 3] = [
    NavItem {
        label: "About",
        id: "about",
    },
    NavItem {
        label: "Work",
        id: "projects",
    },
    NavItem {
        label: "Contact",
        id: "contact",
    },
];

// the scrollable viewport
pub trait ScrollHost {
    fn scroll_y(&self) -> f64;

    fn viewport_height(&self) -> f64;

    // top of the element's bounding rect, relative to the viewport
    fn element_top(&self, id: &str) -> Option<f64>;

    fn smooth_scroll_to(&self, top: f64);
}

// whatever performs route changes
pub trait Navigator {
    fn go_to(&self, path: &str);
}

#[derive(Clone, Debug, PartialEq)]
pub enum NavOutcome {
    Scrolled { top: f64 },
    Navigated { href: String },
    // the anchor is not in the document (yet); nothing happened
    MissingTarget,
    // the intro is still playing
    Blocked,
}

// Scroll Navigation Controller
#[derive(Clone, Debug, PartialEq)]
pub struct NavController {
    home_route: String,
    reveal_ratio: f64,
    offset: f64,
    interactive: bool,
}

impl NavController {
    pub fn new(config: &SiteConfig) -> Self {
        NavController {
            home_route: config.home_route.clone(),
            reveal_ratio: config.nav_reveal_ratio,
            offset: config.nav_offset_px,
            interactive: true,
        }
    }

    // while the intro overlay is up nothing may be scrolled to
    pub fn interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn is_home(&self, route: &str) -> bool {
        route == self.home_route
    }

    pub fn is_nav_visible(&self, route: &str, scroll_y: f64, viewport_height: f64) -> bool {
        if !self.is_home(route) {
            return true;
        }

        scroll_y > self.reveal_ratio * viewport_height
    }

    pub fn section_href(&self, id: &str) -> String {
        format!("{}#{}", self.home_route, id)
    }

    pub fn navigate_to_section(
        &self,
        target_id: &str,
        current_route: &str,
        offset: f64,
        host: &impl ScrollHost,
        navigator: &impl Navigator,
    ) -> NavOutcome {
        if !self.interactive {
            return NavOutcome::Blocked;
        }

        if self.is_home(current_route) {
            return self.scroll_to_section(target_id, offset, host);
        }

        let href = self.section_href(target_id);

        debug!(%href, from = current_route, "navigating to section on another route");

        navigator.go_to(&href);
        NavOutcome::Navigated { href }
    }

    // align the element's top `offset` pixels below the viewport top
    pub fn scroll_to_section(&self, target_id: &str, offset: f64, host: &impl ScrollHost) -> NavOutcome {
        let Some(rect_top) = host.element_top(target_id) else {
            debug!(target_id, "scroll target not mounted");
            return NavOutcome::MissingTarget;
        };

        let top = rect_top + host.scroll_y() - offset;

        host.smooth_scroll_to(top);
        NavOutcome::Scrolled { top }
    }
}

// split "/#contact" into ("/", Some("contact"))
pub fn split_section_href(href: &str) -> (&str, Option<&str>) {
    match href.split_once('#') {
        Some((path, fragment)) if !fragment.is_empty() => (path, Some(fragment)),
        Some((path, _)) => (path, None),
        None => (href, None),
    }
}

// NavVisibility
//
// remembers the last computed value so that callers only react to changes
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavVisibility {
    last: Option<bool>,
}

impl NavVisibility {
    pub fn seeded(visible: bool) -> Self {
        NavVisibility {
            last: Some(visible),
        }
    }

    pub fn visible(&self) -> bool {
        self.last.unwrap_or(false)
    }

    // Some(new) if the value changed
    pub fn update(&mut self, visible: bool) -> Option<bool> {
        if self.last == Some(visible) {
            return None;
        }

        self.last = Some(visible);
        Some(visible)
    }
}

// PendingSection
//
// a section scroll requested before its route (or the element) was ready.  it is
// resolved at most once: if the element is still missing by then, the request is
// dropped rather than retried
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PendingSection {
    target: Option<String>,
}

impl PendingSection {
    pub fn from_fragment(fragment: &str) -> Self {
        let target = fragment.trim_start_matches('#');

        PendingSection {
            target: (!target.is_empty()).then(|| target.to_owned()),
        }
    }

    pub fn defer(&mut self, target_id: &str) {
        self.target = Some(target_id.to_owned());
    }

    pub fn is_pending(&self) -> bool {
        self.target.is_some()
    }

    pub fn resolve(&mut self, controller: &NavController, host: &impl ScrollHost) -> Option<NavOutcome> {
        if !controller.interactive {
            return None;
        }

        let target = self.target.take()?;

        Some(controller.scroll_to_section(&target, controller.offset, host))
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, collections::HashMap};

    use super::*;

    #[derive(Default)]
    struct FakeViewport {
        scroll_y: f64,
        height: f64,
        tops: HashMap<&'static str, f64>,
        scrolls: RefCell<Vec<f64>>,
    }

    impl ScrollHost for FakeViewport {
        fn scroll_y(&self) -> f64 {
            self.scroll_y
        }

        fn viewport_height(&self) -> f64 {
            self.height
        }

        fn element_top(&self, id: &str) -> Option<f64> {
            self.tops.get(id).copied()
        }

        fn smooth_scroll_to(&self, top: f64) {
            self.scrolls.borrow_mut().push(top);
        }
    }

    #[derive(Default)]
    struct FakeRouter {
        visits: RefCell<Vec<String>>,
    }

    impl Navigator for FakeRouter {
        fn go_to(&self, path: &str) {
            self.visits.borrow_mut().push(path.to_owned());
        }
    }

    fn controller() -> NavController {
        NavController::new(&SiteConfig::default())
    }

    #[test]
    fn visibility_on_home_follows_scroll_depth() {
        let nav = controller();

        assert!(!nav.is_nav_visible("/", 0.0, 800.0));
        assert!(nav.is_nav_visible("/", 700.0, 800.0));
        assert!(!nav.is_nav_visible("/", 650.0, 800.0));
        assert!(nav.is_nav_visible("/", 681.0, 800.0));
    }

    #[test]
    fn visibility_off_home_is_always_true() {
        let nav = controller();

        assert!(nav.is_nav_visible("/resume", 0.0, 800.0));
        assert!(nav.is_nav_visible("/resume", 0.0, 0.0));
    }

    #[test]
    fn same_route_scroll_lands_below_fixed_header() {
        let nav = controller();
        let viewport = FakeViewport {
            scroll_y: 100.0,
            height: 800.0,
            tops: HashMap::from([("contact", 500.0)]),
            ..Default::default()
        };
        let router = FakeRouter::default();

        let outcome = nav.navigate_to_section("contact", "/", 80.0, &viewport, &router);

        assert_eq!(outcome, NavOutcome::Scrolled { top: 520.0 });
        assert_eq!(*viewport.scrolls.borrow(), vec![520.0]);
        assert!(router.visits.borrow().is_empty());
    }

    #[test]
    fn cross_route_navigates_home_with_fragment() {
        let nav = controller();
        let viewport = FakeViewport::default();
        let router = FakeRouter::default();

        let outcome = nav.navigate_to_section("projects", "/resume", 80.0, &viewport, &router);

        assert_eq!(
            outcome,
            NavOutcome::Navigated {
                href: "/#projects".into()
            }
        );
        assert_eq!(*router.visits.borrow(), vec!["/#projects".to_owned()]);
        assert!(viewport.scrolls.borrow().is_empty());
    }

    #[test]
    fn missing_target_is_a_quiet_no_op() {
        let nav = controller();
        let viewport = FakeViewport::default();
        let router = FakeRouter::default();

        let outcome = nav.navigate_to_section("nowhere", "/", 80.0, &viewport, &router);

        assert_eq!(outcome, NavOutcome::MissingTarget);
        assert!(viewport.scrolls.borrow().is_empty());
    }

    #[test]
    fn clicks_during_the_intro_are_ignored() {
        let nav = controller().interactive(false);
        let viewport = FakeViewport {
            tops: HashMap::from([("about", 0.0)]),
            ..Default::default()
        };
        let router = FakeRouter::default();

        assert_eq!(
            nav.navigate_to_section("about", "/", 80.0, &viewport, &router),
            NavOutcome::Blocked
        );
        assert_eq!(
            nav.navigate_to_section("about", "/resume", 80.0, &viewport, &router),
            NavOutcome::Blocked
        );
        assert!(viewport.scrolls.borrow().is_empty());
        assert!(router.visits.borrow().is_empty());
    }

    #[test]
    fn visibility_reports_only_changes() {
        let nav = controller();
        let mut tracker = NavVisibility::seeded(nav.is_nav_visible("/", 0.0, 800.0));

        assert_eq!(tracker.update(nav.is_nav_visible("/", 10.0, 800.0)), None);
        assert_eq!(tracker.update(nav.is_nav_visible("/", 900.0, 800.0)), Some(true));
        assert_eq!(tracker.update(nav.is_nav_visible("/", 950.0, 800.0)), None);
        assert!(tracker.visible());
        assert_eq!(tracker.update(nav.is_nav_visible("/", 0.0, 800.0)), Some(false));
    }

    #[test]
    fn section_hrefs_round_trip_through_split() {
        let nav = controller();

        assert_eq!(nav.section_href("contact"), "/#contact");
        assert_eq!(split_section_href("/#contact"), ("/", Some("contact")));
        assert_eq!(split_section_href("/resume"), ("/resume", None));
        assert_eq!(split_section_href("/#"), ("/", None));
    }

    #[test]
    fn pending_section_waits_for_the_intro_then_resolves_once() {
        let viewport = FakeViewport {
            scroll_y: 0.0,
            tops: HashMap::from([("contact", 1200.0)]),
            ..Default::default()
        };
        let mut pending = PendingSection::from_fragment("#contact");

        assert_eq!(pending.resolve(&controller().interactive(false), &viewport), None);
        assert!(pending.is_pending());

        assert_eq!(
            pending.resolve(&controller(), &viewport),
            Some(NavOutcome::Scrolled { top: 1120.0 })
        );
        assert!(!pending.is_pending());
        assert_eq!(pending.resolve(&controller(), &viewport), None);
        assert_eq!(viewport.scrolls.borrow().len(), 1);
    }

    #[test]
    fn pending_section_for_missing_element_is_dropped() {
        let viewport = FakeViewport::default();
        let mut pending = PendingSection::default();
        pending.defer("projects");

        assert_eq!(
            pending.resolve(&controller(), &viewport),
            Some(NavOutcome::MissingTarget)
        );
        assert!(!pending.is_pending());
    }

    #[test]
    fn empty_fragment_is_not_pending() {
        assert!(!PendingSection::from_fragment("").is_pending());
        assert!(!PendingSection::from_fragment("#").is_pending());
    }
}
