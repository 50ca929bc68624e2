//! Browser platform layer
//!
//! Everything that touches `web_sys` lives here:
//! - `canvas`: Canvas 2D implementation of `DrawSurface`
//! - `dom`: Element lookup, classes, listeners, timers, frame scheduling
//! - `storage`: LocalStorage access
//! - `page`: Wires the `ui` state machines to the page
//! - `controls`: Settings controls exported to page scripts

#[cfg(target_arch = "wasm32")]
pub mod canvas;
#[cfg(target_arch = "wasm32")]
pub mod controls;
#[cfg(target_arch = "wasm32")]
pub mod dom;
#[cfg(target_arch = "wasm32")]
pub mod page;
#[cfg(target_arch = "wasm32")]
pub mod storage;
