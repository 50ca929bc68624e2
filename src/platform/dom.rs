//! Small DOM helpers shared by the page wiring

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, Event, EventTarget, HtmlElement, NodeList, ScrollBehavior,
    ScrollIntoViewOptions, ScrollLogicalPosition, Window,
};

use crate::render_loop::RenderLoop;
use crate::surface::DrawSurface;
use crate::viewport::Viewport;

pub fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no window"))
}

pub fn document() -> Result<Document, JsValue> {
    window()?
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))
}

/// Wall-clock milliseconds
pub fn now() -> f64 {
    js_sys::Date::now()
}

/// Current `innerWidth` x `innerHeight`
pub fn viewport(window: &Window) -> Viewport {
    let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    Viewport::from_inner(width, height)
}

/// All elements matching `selector`
pub fn query_all(root: &Document, selector: &str) -> Vec<Element> {
    elements(root.query_selector_all(selector), selector)
}

/// All elements under `root` matching `selector`
pub fn query_all_in(root: &Element, selector: &str) -> Vec<Element> {
    elements(root.query_selector_all(selector), selector)
}

fn elements(list: Result<NodeList, JsValue>, selector: &str) -> Vec<Element> {
    let Ok(list) = list else {
        log::warn!("Bad selector: {}", selector);
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Add or remove a class
pub fn set_class(el: &Element, class: &str, on: bool) {
    let _ = el.class_list().toggle_with_force(class, on);
}

/// Set an inline style property on an element
pub fn set_style(el: &Element, property: &str, value: &str) {
    if let Some(el) = el.dyn_ref::<HtmlElement>() {
        let _ = el.style().set_property(property, value);
    }
}

/// Disable or restore page scrolling
pub fn lock_body_scroll(document: &Document, locked: bool) {
    if let Some(body) = document.body() {
        let _ = body
            .style()
            .set_property("overflow", if locked { "hidden" } else { "" });
    }
}

/// Smooth-scroll an element into view
pub fn scroll_into_view(el: &Element, block: ScrollLogicalPosition) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(block);
    el.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Attach a listener for the lifetime of the page
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Run `f` once after `delay_ms`
pub fn set_timeout<F>(delay_ms: f64, f: F)
where
    F: FnOnce() + 'static,
{
    let Some(window) = web_sys::window() else {
        return;
    };
    let closure = Closure::once(f);
    if let Err(e) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        delay_ms.max(0.0) as i32,
    ) {
        log::warn!("setTimeout failed: {:?}", e);
    }
    closure.forget();
}

/// Computed value of a CSS property, empty when unavailable
pub fn computed_style(el: &Element, property: &str) -> String {
    web_sys::window()
        .and_then(|w| w.get_computed_style(el).ok().flatten())
        .and_then(|style| style.get_property_value(property).ok())
        .unwrap_or_default()
}

/// Run `f` once on the next animation frame
pub fn next_frame<F>(f: F)
where
    F: FnOnce() + 'static,
{
    let Some(window) = web_sys::window() else {
        return;
    };
    let closure = Closure::once(move |_time: f64| f());
    if let Err(e) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
        log::warn!("requestAnimationFrame failed: {:?}", e);
    }
    closure.forget();
}

/// Schedule the next frame of a shared render loop
pub fn request_animation_frame<S: DrawSurface + 'static>(render: Rc<RefCell<RenderLoop<S>>>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let closure = Closure::once(move |_time: f64| {
        animation_frame(render);
    });
    if let Err(e) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
        log::error!("requestAnimationFrame failed: {:?}", e);
    }
    closure.forget();
}

fn animation_frame<S: DrawSurface + 'static>(render: Rc<RefCell<RenderLoop<S>>>) {
    let keep_going = render.borrow_mut().frame();
    if keep_going {
        request_animation_frame(render);
    }
}
