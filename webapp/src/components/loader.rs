use std::{cell::RefCell, rc::Rc};

use dioxus::prelude::*;

use common::loader::{LoadPhase, LoadSequence, glyph_cues, overlay_fade};

use crate::{
    dom::{scroll::DocumentOverflow, timers::BrowserScheduler},
    site::SITE_CONFIG,
    components::layout::use_intro_gate,
};

type BrowserSequence = LoadSequence<BrowserScheduler, DocumentOverflow>;

#[component]
pub fn InitialLoader(route: String) -> Element {
    let mut intro = use_intro_gate();
    let mut phase = use_signal(|| LoadPhase::Pre);

    let sequence = use_hook(|| Rc::new(RefCell::new(None::<BrowserSequence>)));

    // started after the first render so the pre state is on screen before the
    // enter frame is requested
    use_effect({
        let sequence = sequence.clone();
        let route = route.clone();
        move || {
            if !intro.peek().is_playing(&route) || sequence.borrow().is_some() {
                return;
            }

            let finished = route.clone();
            let started = LoadSequence::start(
                &BrowserScheduler,
                DocumentOverflow,
                &SITE_CONFIG.loader,
                move |next| phase.set(next),
                move || intro.write().finish(&finished),
            );

            *sequence.borrow_mut() = Some(started);
        }
    });

    use_drop(move || {
        sequence.borrow_mut().take();
    });

    let current = phase();
    if current == LoadPhase::Done || !intro.read().is_playing(&route) {
        return rsx! {};
    }

    let overlay_style = match overlay_fade(&SITE_CONFIG.loader, current) {
        Some((delay, duration)) => {
            format!("transition-delay: {delay}ms; transition-duration: {duration}ms;")
        }
        None => String::new(),
    };

    let cues = glyph_cues(&SITE_CONFIG.loader, current);

    rsx! {
        div {
            class: "loader phase-{current.as_str()}",
            style: "{overlay_style}",
            aria_hidden: "true",
            div { class: "loader-glyphs",
                for (index, cue) in cues.into_iter().enumerate() {
                    span {
                        key: "{index}",
                        class: "loader-glyph",
                        style: "transition-delay: {cue.delay_ms}ms; transition-duration: {cue.duration_ms}ms;",
                        "{cue.glyph}"
                    }
                }
            }
        }
    }
}
