use std::{
    cell::{Cell, RefCell},
    fmt,
    rc::{Rc, Weak},
};

use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    Light,
    Dark,
}

impl DisplayMode {
    pub fn as_str(self) -> &'static str {
        match self {
            DisplayMode::Light => "light",
            DisplayMode::Dark => "dark",
        }
    }

    pub fn opposite(self) -> DisplayMode {
        match self {
            DisplayMode::Light => DisplayMode::Dark,
            DisplayMode::Dark => DisplayMode::Light,
        }
    }

    // only the two canonical spellings are accepted; anything else (including a
    // stale or hand-edited storage value) reads as absent
    pub fn parse(value: &str) -> Option<DisplayMode> {
        match value {
            "light" => Some(DisplayMode::Light),
            "dark" => Some(DisplayMode::Dark),
            _ => None,
        }
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// the root display-mode attribute
//
// in the browser this is data-theme (plus the color-scheme style hint) on the
// document element, and it is the single source of truth for every observer
pub trait ModeRoot {
    fn mode(&self) -> Option<DisplayMode>;

    fn set_mode(&self, mode: DisplayMode);
}

// durable key-value storage for the preference
pub trait PreferenceStorage {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&self, key: &str, value: &str) -> anyhow::Result<()>;
}

// the platform's "prefers dark" signal
pub trait ColorSchemeQuery {
    fn prefers_dark(&self) -> bool;
}

// Preference Store
//
// resolves, applies, and toggles the display mode.  note that nothing here caches
// the mode: every read goes to the root, so that independent observers can never
// disagree about what the current value is
pub struct PreferenceStore<R, S, Q> {
    root: R,
    storage: S,
    query: Q,
    key: String,
}

impl<R: ModeRoot, S: PreferenceStorage, Q: ColorSchemeQuery> PreferenceStore<R, S, Q> {
    pub fn new(root: R, storage: S, query: Q, key: impl Into<String>) -> Self {
        PreferenceStore {
            root,
            storage,
            query,
            key: key.into(),
        }
    }

    pub fn root(&self) -> &R {
        &self.root
    }

    // must run before anything mode-dependent is painted
    pub fn resolve_initial_mode(&self) -> DisplayMode {
        let stored = self
            .storage
            .get(&self.key)
            .and_then(|value| DisplayMode::parse(&value));

        let mode = stored.unwrap_or_else(|| self.ambient_mode());

        debug!(%mode, from_storage = stored.is_some(), "resolved initial display mode");

        self.root.set_mode(mode);
        mode
    }

    pub fn apply_mode(&self, mode: DisplayMode) {
        self.root.set_mode(mode);

        // persistence is best-effort; the root stays authoritative for the session
        if let Err(err) = self.storage.set(&self.key, mode.as_str()) {
            debug!("display mode not persisted: {err}");
        }
    }

    pub fn toggle_mode(&self) -> DisplayMode {
        let next = self.current_mode().opposite();

        self.apply_mode(next);
        next
    }

    pub fn current_mode(&self) -> DisplayMode {
        self.root.mode().unwrap_or_else(|| self.ambient_mode())
    }

    fn ambient_mode(&self) -> DisplayMode {
        if self.query.prefers_dark() {
            DisplayMode::Dark
        } else {
            DisplayMode::Light
        }
    }
}

// accessible label for the toggle button
//
// None means the observer has not read the root yet, in which case we cannot
// promise which way the toggle will go
pub fn toggle_label(mode: Option<DisplayMode>) -> String {
    match mode {
        Some(mode) => format!("Switch to {} mode", mode.opposite()),
        None => String::from("Toggle theme"),
    }
}

// aria-pressed for the toggle: "pressed" means dark.  left off while unknown
pub fn toggle_pressed(mode: Option<DisplayMode>) -> Option<bool> {
    mode.map(|mode| mode == DisplayMode::Dark)
}

// the root attribute carrying the mode
pub const MODE_ATTRIBUTE: &str = "data-theme";

// whether a root attribute change can have changed the mode
//
// the scroll lock rewrites the root's inline style while the intro plays, and those
// writes must not wake every mode observer
pub fn is_mode_attribute(name: &str) -> bool {
    name == MODE_ATTRIBUTE
}

type Listener = Rc<dyn Fn(DisplayMode)>;

#[derive(Default)]
struct CellInner {
    mode: Cell<Option<DisplayMode>>,
    color_scheme: Cell<Option<DisplayMode>>,
    listeners: RefCell<Vec<(u64, Listener)>>,
    next_id: Cell<u64>,
}

// ModeCell
//
// an owned display-mode value with publish/subscribe, standing in for the document
// root anywhere there is no DOM.  like a MutationObserver, listeners are told about
// every write, including writes of the value already present
#[derive(Clone, Default)]
pub struct ModeCell {
    inner: Rc<CellInner>,
}

impl ModeCell {
    pub fn new() -> Self {
        ModeCell::default()
    }

    pub fn color_scheme(&self) -> Option<DisplayMode> {
        self.inner.color_scheme.get()
    }

    pub fn subscribe(&self, listener: impl Fn(DisplayMode) + 'static) -> Subscription {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);

        self.inner
            .listeners
            .borrow_mut()
            .push((id, Rc::new(listener)));

        Subscription {
            inner: Rc::downgrade(&self.inner),
            id,
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }
}

impl ModeRoot for ModeCell {
    fn mode(&self) -> Option<DisplayMode> {
        self.inner.mode.get()
    }

    fn set_mode(&self, mode: DisplayMode) {
        self.inner.mode.set(Some(mode));
        self.inner.color_scheme.set(Some(mode));

        // snapshot first so a listener may unsubscribe (or subscribe) while we notify
        let listeners: Vec<Listener> = self
            .inner
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect();

        for listener in listeners {
            listener(mode);
        }
    }
}

// dropping the subscription detaches the listener
pub struct Subscription {
    inner: Weak<CellInner>,
    id: u64,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.inner.upgrade() {
            inner.listeners.borrow_mut().retain(|(id, _)| *id != self.id);
        }
    }
}

// Mode Observer
//
// reads the root once when mounted, then follows every change until dropped
pub struct ModeObserver {
    current: Rc<Cell<Option<DisplayMode>>>,
    _subscription: Subscription,
}

impl ModeObserver {
    pub fn mount(cell: &ModeCell) -> Self {
        let current = Rc::new(Cell::new(cell.mode()));

        let sink = current.clone();
        let subscription = cell.subscribe(move |mode| sink.set(Some(mode)));

        ModeObserver {
            current,
            _subscription: subscription,
        }
    }

    pub fn mode(&self) -> Option<DisplayMode> {
        self.current.get()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[derive(Clone, Default)]
    struct MapStorage {
        values: Rc<RefCell<HashMap<String, String>>>,
        broken: Rc<Cell<bool>>,
    }

    impl PreferenceStorage for MapStorage {
        fn get(&self, key: &str) -> Option<String> {
            self.values.borrow().get(key).cloned()
        }

        fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
            if self.broken.get() {
                return Err(anyhow::Error::msg("QuotaExceededError"));
            }
            self.values
                .borrow_mut()
                .insert(key.to_owned(), value.to_owned());
            Ok(())
        }
    }

    struct Ambient(bool);

    impl ColorSchemeQuery for Ambient {
        fn prefers_dark(&self) -> bool {
            self.0
        }
    }

    const KEY: &str = "akd-theme";

    fn store(
        cell: &ModeCell,
        storage: &MapStorage,
        prefers_dark: bool,
    ) -> PreferenceStore<ModeCell, MapStorage, Ambient> {
        PreferenceStore::new(cell.clone(), storage.clone(), Ambient(prefers_dark), KEY)
    }

    #[test]
    fn parse_accepts_only_canonical_values() {
        assert_eq!(DisplayMode::parse("dark"), Some(DisplayMode::Dark));
        assert_eq!(DisplayMode::parse("light"), Some(DisplayMode::Light));
        assert_eq!(DisplayMode::parse("Dark"), None);
        assert_eq!(DisplayMode::parse(""), None);
        assert_eq!(DisplayMode::parse("\"dark\""), None);
    }

    #[test]
    fn stored_value_reaches_root_before_any_observer_mounts() {
        let cell = ModeCell::new();
        let storage = MapStorage::default();
        storage
            .values
            .borrow_mut()
            .insert(KEY.into(), "dark".into());

        let resolved = store(&cell, &storage, false).resolve_initial_mode();

        assert_eq!(resolved, DisplayMode::Dark);
        assert_eq!(cell.mode(), Some(DisplayMode::Dark));
        assert_eq!(cell.color_scheme(), Some(DisplayMode::Dark));

        // first observer to mount sees dark on its very first read
        let observer = ModeObserver::mount(&cell);
        assert_eq!(observer.mode(), Some(DisplayMode::Dark));
    }

    #[test]
    fn missing_or_invalid_stored_value_falls_back_to_ambient() {
        let cell = ModeCell::new();
        let storage = MapStorage::default();
        assert_eq!(
            store(&cell, &storage, true).resolve_initial_mode(),
            DisplayMode::Dark
        );

        storage
            .values
            .borrow_mut()
            .insert(KEY.into(), "sepia".into());
        assert_eq!(
            store(&cell, &storage, false).resolve_initial_mode(),
            DisplayMode::Light
        );
        assert_eq!(cell.mode(), Some(DisplayMode::Light));
    }

    #[test]
    fn resolving_does_not_write_storage() {
        let cell = ModeCell::new();
        let storage = MapStorage::default();

        store(&cell, &storage, true).resolve_initial_mode();

        assert!(storage.values.borrow().is_empty());
    }

    #[test]
    fn root_and_storage_converge_after_every_toggle() {
        let cell = ModeCell::new();
        let storage = MapStorage::default();
        let prefs = store(&cell, &storage, false);
        prefs.resolve_initial_mode();

        let mut expected = DisplayMode::Light;
        for _ in 0..5 {
            expected = expected.opposite();
            assert_eq!(prefs.toggle_mode(), expected);
            assert_eq!(cell.mode(), Some(expected));
            assert_eq!(storage.get(KEY).as_deref(), Some(expected.as_str()));
        }
    }

    #[test]
    fn toggle_reads_the_root_not_a_cached_copy() {
        let cell = ModeCell::new();
        let storage = MapStorage::default();
        let prefs = store(&cell, &storage, false);
        prefs.resolve_initial_mode();

        // someone else writes the root behind the store's back
        cell.set_mode(DisplayMode::Dark);

        assert_eq!(prefs.toggle_mode(), DisplayMode::Light);
    }

    #[test]
    fn unset_root_toggles_away_from_ambient() {
        let cell = ModeCell::new();
        let storage = MapStorage::default();

        assert_eq!(store(&cell, &storage, true).toggle_mode(), DisplayMode::Light);
    }

    #[test]
    fn storage_failure_is_swallowed_and_root_stays_authoritative() {
        let cell = ModeCell::new();
        let storage = MapStorage::default();
        storage.broken.set(true);
        let prefs = store(&cell, &storage, false);

        prefs.apply_mode(DisplayMode::Dark);
        assert_eq!(cell.mode(), Some(DisplayMode::Dark));
        assert_eq!(prefs.toggle_mode(), DisplayMode::Light);
        assert_eq!(prefs.current_mode(), DisplayMode::Light);
        assert!(storage.values.borrow().is_empty());
    }

    #[test]
    fn last_write_wins() {
        let cell = ModeCell::new();
        let storage = MapStorage::default();
        let prefs = store(&cell, &storage, false);

        prefs.apply_mode(DisplayMode::Dark);
        prefs.apply_mode(DisplayMode::Light);

        assert_eq!(cell.mode(), Some(DisplayMode::Light));
        assert_eq!(storage.get(KEY).as_deref(), Some("light"));
    }

    #[test]
    fn observers_converge_and_detach_on_drop() {
        let cell = ModeCell::new();
        let storage = MapStorage::default();
        let prefs = store(&cell, &storage, false);
        prefs.resolve_initial_mode();

        let toggle = ModeObserver::mount(&cell);
        let toaster = ModeObserver::mount(&cell);
        assert_eq!(cell.subscriber_count(), 2);

        prefs.toggle_mode();
        assert_eq!(toggle.mode(), Some(DisplayMode::Dark));
        assert_eq!(toaster.mode(), Some(DisplayMode::Dark));

        drop(toaster);
        assert_eq!(cell.subscriber_count(), 1);

        prefs.toggle_mode();
        assert_eq!(toggle.mode(), Some(DisplayMode::Light));

        drop(toggle);
        assert_eq!(cell.subscriber_count(), 0);
    }

    #[test]
    fn observer_on_an_unset_root_starts_empty() {
        let cell = ModeCell::new();
        let observer = ModeObserver::mount(&cell);

        assert_eq!(observer.mode(), None);
        assert_eq!(toggle_label(observer.mode()), "Toggle theme");

        cell.set_mode(DisplayMode::Light);
        assert_eq!(toggle_label(observer.mode()), "Switch to dark mode");
    }

    #[test]
    fn toggle_is_pressed_only_in_dark_mode() {
        assert_eq!(toggle_pressed(None), None);
        assert_eq!(toggle_pressed(Some(DisplayMode::Light)), Some(false));
        assert_eq!(toggle_pressed(Some(DisplayMode::Dark)), Some(true));
    }

    #[test]
    fn only_the_theme_attribute_is_a_mode_change() {
        assert!(is_mode_attribute("data-theme"));
        assert!(!is_mode_attribute("style"));
        assert!(!is_mode_attribute("class"));
        assert!(!is_mode_attribute("data-theme-extra"));
    }

    #[test]
    fn listener_may_unsubscribe_during_notification() {
        let cell = ModeCell::new();
        let slot: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));

        let inner = slot.clone();
        let subscription = cell.subscribe(move |_| {
            inner.borrow_mut().take();
        });
        *slot.borrow_mut() = Some(subscription);

        cell.set_mode(DisplayMode::Dark);
        assert_eq!(cell.subscriber_count(), 0);
    }
}
