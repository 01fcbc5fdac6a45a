// browser implementations of the interaction core's seams
pub mod clock;
pub mod scroll;
pub mod storage;
pub mod theme;
pub mod timers;

use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

pub fn root_element() -> Option<HtmlElement> {
    web_sys::window()?
        .document()?
        .document_element()?
        .dyn_into::<HtmlElement>()
        .ok()
}

pub fn body_element() -> Option<HtmlElement> {
    web_sys::window()?.document()?.body()
}

pub fn location_hash() -> Option<String> {
    web_sys::window()?.location().hash().ok()
}
