use std::{cell::RefCell, rc::Rc};

use tracing::{debug, warn};

use crate::config::LoaderConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LoadPhase {
    Pre,
    Enter,
    Exit,
    Done,
}

impl LoadPhase {
    pub fn next(self) -> Option<LoadPhase> {
        match self {
            LoadPhase::Pre => Some(LoadPhase::Enter),
            LoadPhase::Enter => Some(LoadPhase::Exit),
            LoadPhase::Exit => Some(LoadPhase::Done),
            LoadPhase::Done => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LoadPhase::Pre => "pre",
            LoadPhase::Enter => "enter",
            LoadPhase::Exit => "exit",
            LoadPhase::Done => "done",
        }
    }
}

// what moves the sequence from one phase to the next
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trigger {
    // the next paintable frame, so we never animate out of an unrendered state
    NextFrame,
    // wall-clock milliseconds since the sequence was armed
    After(u32),
}

// (from, trigger) -> to
pub fn transitions(config: &LoaderConfig) -> [(LoadPhase, Trigger, LoadPhase); 3] {
    [
        (LoadPhase::Pre, Trigger::NextFrame, LoadPhase::Enter),
        (
            LoadPhase::Enter,
            Trigger::After(config.exit_after_ms),
            LoadPhase::Exit,
        ),
        (
            LoadPhase::Exit,
            Trigger::After(config.done_after_ms),
            LoadPhase::Done,
        ),
    ]
}

// a source of frame and timer callbacks
//
// handles cancel their callback when dropped, which is what makes tearing down a
// sequence mid-flight safe
pub trait Scheduler {
    type Handle;

    fn next_frame(&self, callback: Box<dyn FnOnce()>) -> Self::Handle;

    fn after(&self, millis: u32, callback: Box<dyn FnOnce()>) -> Self::Handle;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OverflowTarget {
    Root,
    Body,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OverflowAxis {
    X,
    Y,
}

impl OverflowAxis {
    pub fn property(self) -> &'static str {
        match self {
            OverflowAxis::X => "overflow-x",
            OverflowAxis::Y => "overflow-y",
        }
    }
}

// read/write access to the per-axis overflow style of the document root and body
pub trait OverflowHost {
    fn overflow(&self, target: OverflowTarget, axis: OverflowAxis) -> String;

    fn set_overflow(&self, target: OverflowTarget, axis: OverflowAxis, value: &str);
}

const LOCKED: [(OverflowTarget, OverflowAxis); 4] = [
    (OverflowTarget::Root, OverflowAxis::X),
    (OverflowTarget::Root, OverflowAxis::Y),
    (OverflowTarget::Body, OverflowAxis::X),
    (OverflowTarget::Body, OverflowAxis::Y),
];

// ScrollLock
//
// suppresses page scrolling for as long as it is held.  whatever overflow values
// were present at acquisition are put back verbatim on release, so a page that was
// already "scroll" (or had no inline value at all) returns to exactly that
pub struct ScrollLock<H: OverflowHost> {
    host: H,
    saved: Vec<(OverflowTarget, OverflowAxis, String)>,
}

impl<H: OverflowHost> ScrollLock<H> {
    pub fn acquire(host: H) -> Self {
        // axes are saved separately; a page may scroll one way and clip the other
        let saved = LOCKED
            .iter()
            .map(|&(target, axis)| (target, axis, host.overflow(target, axis)))
            .collect();

        for (target, axis) in LOCKED {
            host.set_overflow(target, axis, "hidden");
        }

        ScrollLock { host, saved }
    }
}

impl<H: OverflowHost> Drop for ScrollLock<H> {
    fn drop(&mut self) {
        for (target, axis, value) in &self.saved {
            self.host.set_overflow(*target, *axis, value);
        }
    }
}

struct SequenceState<H: OverflowHost> {
    phase: LoadPhase,
    lock: Option<ScrollLock<H>>,
    on_phase: Option<Box<dyn FnMut(LoadPhase)>>,
    on_complete: Option<Box<dyn FnOnce()>>,
}

// Load Sequencer
//
// one instance per route mount.  starting it locks scrolling and arms the frame
// request plus both timers; dropping it cancels anything still pending and
// releases the lock, so the completion callback can never outlive its owner
pub struct LoadSequence<S: Scheduler, H: OverflowHost + 'static> {
    state: Rc<RefCell<SequenceState<H>>>,
    _handles: Vec<S::Handle>,
}

impl<S: Scheduler, H: OverflowHost + 'static> LoadSequence<S, H> {
    pub fn start(
        scheduler: &S,
        host: H,
        config: &LoaderConfig,
        on_phase: impl FnMut(LoadPhase) + 'static,
        on_complete: impl FnOnce() + 'static,
    ) -> Self {
        let state = Rc::new(RefCell::new(SequenceState {
            phase: LoadPhase::Pre,
            lock: Some(ScrollLock::acquire(host)),
            on_phase: Some(Box::new(on_phase)),
            on_complete: Some(Box::new(on_complete)),
        }));

        let handles = transitions(config)
            .into_iter()
            .map(|(_, trigger, to)| {
                let weak = Rc::downgrade(&state);
                let callback: Box<dyn FnOnce()> = Box::new(move || {
                    if let Some(state) = weak.upgrade() {
                        advance(&state, to);
                    }
                });

                match trigger {
                    Trigger::NextFrame => scheduler.next_frame(callback),
                    Trigger::After(millis) => scheduler.after(millis, callback),
                }
            })
            .collect();

        debug!("load sequence armed");

        LoadSequence {
            state,
            _handles: handles,
        }
    }

    pub fn phase(&self) -> LoadPhase {
        self.state.borrow().phase
    }
}

impl<S: Scheduler, H: OverflowHost + 'static> Drop for LoadSequence<S, H> {
    fn drop(&mut self) {
        let (phase, lock) = {
            let mut state = self.state.borrow_mut();
            state.on_phase = None;
            state.on_complete = None;
            (state.phase, state.lock.take())
        };

        if phase != LoadPhase::Done {
            debug!(phase = phase.as_str(), "load sequence torn down early");
        }

        drop(lock);
    }
}

// walk forward one phase at a time until `target` is reached
//
// a late frame means a timer can fire while we are still in Pre; stepping through
// every intermediate phase keeps the observable order strictly pre, enter, exit, done
fn advance<H: OverflowHost>(state: &Rc<RefCell<SequenceState<H>>>, target: LoadPhase) {
    loop {
        let (phase, on_phase, lock) = {
            let mut state = state.borrow_mut();

            if state.phase >= target {
                return;
            }

            let Some(next) = state.phase.next() else {
                warn!("load sequence advanced past done");
                return;
            };

            state.phase = next;

            let lock = if next == LoadPhase::Done {
                state.lock.take()
            } else {
                None
            };

            (next, state.on_phase.take(), lock)
        };

        debug!(phase = phase.as_str(), "load sequence advanced");

        // release before notifying, so the consumer already sees a scrollable page
        drop(lock);

        if let Some(mut on_phase) = on_phase {
            on_phase(phase);
            state.borrow_mut().on_phase.get_or_insert(on_phase);
        }

        if phase == LoadPhase::Done {
            let on_complete = state.borrow_mut().on_complete.take();
            if let Some(on_complete) = on_complete {
                on_complete();
            }
            return;
        }
    }
}

// per-glyph animation cue, in milliseconds relative to entering the phase
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GlyphCue {
    pub glyph: char,
    pub delay_ms: u32,
    pub duration_ms: u32,
}

// staggered reveal (enter) or fade (exit) of the glyph mark
pub fn glyph_cues(config: &LoaderConfig, phase: LoadPhase) -> Vec<GlyphCue> {
    let (delay, stagger, duration) = match phase {
        LoadPhase::Enter => (
            config.enter_delay_ms,
            config.enter_stagger_ms,
            config.enter_duration_ms,
        ),
        LoadPhase::Exit => (
            config.exit_delay_ms,
            config.exit_stagger_ms,
            config.exit_duration_ms,
        ),
        LoadPhase::Pre | LoadPhase::Done => (0, 0, 0),
    };

    config
        .glyphs
        .chars()
        .zip(0u32..)
        .map(|(glyph, index)| GlyphCue {
            glyph,
            delay_ms: delay + index * stagger,
            duration_ms: duration,
        })
        .collect()
}

// (delay, duration) of the overlay fade; the overlay only fades once exiting
pub fn overlay_fade(config: &LoaderConfig, phase: LoadPhase) -> Option<(u32, u32)> {
    match phase {
        LoadPhase::Exit | LoadPhase::Done => {
            Some((config.overlay_fade_delay_ms, config.overlay_fade_ms))
        }
        LoadPhase::Pre | LoadPhase::Enter => None,
    }
}

// IntroGate
//
// remembers which route last finished its intro.  a re-render of that route keeps
// the overlay away; mounting any other route plays the whole sequence again
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IntroGate {
    finished_for: Option<String>,
}

impl IntroGate {
    pub fn is_playing(&self, route: &str) -> bool {
        self.finished_for.as_deref() != Some(route)
    }

    pub fn finish(&mut self, route: &str) {
        self.finished_for = Some(route.to_owned());
    }
}
