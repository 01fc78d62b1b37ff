//! Thin helpers over `web_sys` for the static pages. Every lookup returns
//! `Option` so a page without the element just skips the feature.

use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget, HtmlImageElement, HtmlInputElement};

pub fn document() -> Option<Document> {
    web_sys::window()?.document()
}

pub fn by_id<T: JsCast>(id: &str) -> Option<T> {
    document()?.get_element_by_id(id)?.dyn_into::<T>().ok()
}

pub fn exists(id: &str) -> bool {
    by_id::<Element>(id).is_some()
}

pub fn query_all(selector: &str) -> Vec<Element> {
    let Some(list) = document().and_then(|d| d.query_selector_all(selector).ok()) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Value of an input, select or textarea; empty when missing.
pub fn field_value(id: &str) -> String {
    let Some(el) = by_id::<Element>(id) else {
        return String::new();
    };
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(select) = el.dyn_ref::<web_sys::HtmlSelectElement>() {
        select.value()
    } else if let Some(area) = el.dyn_ref::<web_sys::HtmlTextAreaElement>() {
        area.value()
    } else {
        String::new()
    }
}

pub fn set_field_value(id: &str, value: &str) {
    let Some(el) = by_id::<Element>(id) else {
        return;
    };
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        input.set_value(value);
    } else if let Some(select) = el.dyn_ref::<web_sys::HtmlSelectElement>() {
        select.set_value(value);
    } else if let Some(area) = el.dyn_ref::<web_sys::HtmlTextAreaElement>() {
        area.set_value(value);
    }
}

pub fn image_src(id: &str) -> String {
    by_id::<HtmlImageElement>(id)
        .map(|img| img.src())
        .unwrap_or_default()
}

pub fn set_image_src(id: &str, src: &str) {
    if let Some(img) = by_id::<HtmlImageElement>(id) {
        img.set_src(src);
    }
}

pub fn set_text(id: &str, text: &str) {
    if let Some(el) = by_id::<Element>(id) {
        el.set_text_content(Some(text));
    }
}

pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

pub fn redirect(url: &str) {
    if let Some(window) = web_sys::window() {
        if window.location().set_href(url).is_err() {
            log::warn!("could not navigate to {}", url);
        }
    }
}

pub fn pathname() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_default()
}

/// Attach a listener for the lifetime of the page.
pub fn listen<F>(target: &EventTarget, event: &'static str, callback: F)
where
    F: FnMut(&Event) + 'static,
{
    EventListener::new(target, event, callback).forget();
}

pub fn on_click_id<F>(id: &str, callback: F)
where
    F: FnMut(&Event) + 'static,
{
    if let Some(target) = by_id::<EventTarget>(id) {
        listen(&target, "click", callback);
    }
}

/// Run `f` once the document has been parsed.
pub fn on_ready<F>(f: F)
where
    F: FnOnce() + 'static,
{
    match document() {
        Some(doc) if doc.ready_state() == "loading" => {
            EventListener::once(&doc, "DOMContentLoaded", move |_| f()).forget();
        }
        _ => f(),
    }
}
