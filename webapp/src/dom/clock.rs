use std::{cell::RefCell, rc::Rc};

use dioxus::prelude::*;
use gloo_timers::callback::Interval;
use js_sys::{Array, Date, Function, Object, Reflect};
use tracing::warn;
use wasm_bindgen::{JsCast, JsValue};

use common::config::ClockConfig;

use crate::site::SITE_CONFIG;

// an Intl.DateTimeFormat bound to one zone, showing hours and minutes
pub struct LocalClock {
    format: Function,
}

impl LocalClock {
    // None if Intl is missing or rejects the zone; the constructor is reached through
    // Reflect so that a RangeError comes back as an Err instead of a throw
    pub fn new(config: &ClockConfig) -> Option<Self> {
        let intl = Reflect::get(&js_sys::global(), &JsValue::from_str("Intl")).ok()?;
        let constructor = Reflect::get(&intl, &JsValue::from_str("DateTimeFormat"))
            .ok()?
            .dyn_into::<Function>()
            .ok()?;

        let options = Object::new();
        for (key, value) in [
            ("timeZone", JsValue::from_str(&config.time_zone)),
            ("hour", JsValue::from_str("numeric")),
            ("minute", JsValue::from_str("2-digit")),
            ("hour12", JsValue::TRUE),
        ] {
            Reflect::set(&options, &JsValue::from_str(key), &value).ok()?;
        }

        let args = Array::of2(&JsValue::from_str(&config.locale), &options);
        let formatter = match Reflect::construct(&constructor, &args) {
            Ok(formatter) => formatter,
            Err(err) => {
                warn!(time_zone = %config.time_zone, "clock disabled: {err:?}");
                return None;
            }
        };

        let format = Reflect::get(&formatter, &JsValue::from_str("format"))
            .ok()?
            .dyn_into::<Function>()
            .ok()?;

        Some(LocalClock { format })
    }

    pub fn now(&self) -> Option<String> {
        self.format
            .call1(&JsValue::UNDEFINED, &Date::new_0())
            .ok()?
            .as_string()
    }
}

// current local time, refreshed every tick until the component unmounts
//
// empty if the clock could not be set up
pub fn use_local_time() -> Signal<String> {
    let clock = use_hook(|| LocalClock::new(&SITE_CONFIG.clock).map(Rc::new));

    let mut time = use_signal(|| {
        clock
            .as_ref()
            .and_then(|clock| clock.now())
            .unwrap_or_default()
    });

    let ticker = use_hook(|| {
        let ticker = clock.map(|clock| {
            Interval::new(SITE_CONFIG.clock.tick_ms, move || {
                let Some(now) = clock.now() else {
                    return;
                };
                if *time.peek() != now {
                    time.set(now);
                }
            })
        });

        Rc::new(RefCell::new(ticker))
    });

    use_drop(move || {
        ticker.borrow_mut().take();
    });

    time
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use wasm_bindgen_test::*;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn formats_hours_and_minutes_in_the_configured_zone() {
        let clock = LocalClock::new(&ClockConfig::default()).expect("Intl is available");
        let now = clock.now().expect("formatted time");

        assert!(now.contains(':'), "unexpected time {now}");
    }

    #[wasm_bindgen_test]
    fn unknown_zone_disables_the_clock() {
        let config = ClockConfig {
            time_zone: String::from("Not/A_Zone"),
            ..ClockConfig::default()
        };

        assert!(LocalClock::new(&config).is_none());
    }
}
