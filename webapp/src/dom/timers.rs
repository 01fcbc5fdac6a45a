use gloo_timers::callback::Timeout;
use wasm_bindgen::{JsCast, closure::Closure};

use common::loader::Scheduler;

// a requestAnimationFrame callback, cancelled when dropped
pub struct AnimationFrame {
    id: i32,
    _callback: Closure<dyn FnMut()>,
}

impl Drop for AnimationFrame {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            let _ = window.cancel_animation_frame(self.id);
        }
    }
}

pub enum ScheduledCallback {
    Timer(Timeout),
    Frame(AnimationFrame),
}

// gloo timeouts for wall-clock edges, animation frames for "next paint"
//
// both kinds of handle cancel on drop.  if no frame can be requested at all the
// handle is None, and the sequence simply enters on its first timer instead
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    type Handle = Option<ScheduledCallback>;

    fn next_frame(&self, callback: Box<dyn FnOnce()>) -> Self::Handle {
        let window = web_sys::window()?;

        let frame: Closure<dyn FnMut()> = Closure::once(move || callback());
        let id = window
            .request_animation_frame(frame.as_ref().unchecked_ref())
            .ok()?;

        Some(ScheduledCallback::Frame(AnimationFrame {
            id,
            _callback: frame,
        }))
    }

    fn after(&self, millis: u32, callback: Box<dyn FnOnce()>) -> Self::Handle {
        Some(ScheduledCallback::Timer(Timeout::new(millis, callback)))
    }
}
