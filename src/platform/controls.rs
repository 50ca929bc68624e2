//! Background controls exported to page scripts
//!
//! Each control updates the stored settings and applies them to the running
//! background.

use std::cell::RefCell;

use rand::SeedableRng;
use rand_pcg::Pcg32;
use wasm_bindgen::prelude::*;

use super::page::SharedBackground;
use crate::settings::Settings;

thread_local! {
    static BACKGROUND: RefCell<Option<SharedBackground>> = const { RefCell::new(None) };
}

/// Make the running background reachable from the exported controls
pub fn register(render: SharedBackground) {
    BACKGROUND.with(|slot| *slot.borrow_mut() = Some(render));
}

fn update(change: impl FnOnce(&mut Settings) -> bool) -> bool {
    let mut settings = Settings::load();
    if !change(&mut settings) {
        return false;
    }
    settings.save();

    BACKGROUND.with(|slot| {
        if let Some(render) = slot.borrow().as_ref() {
            let mut rng = Pcg32::seed_from_u64(js_sys::Date::now() as u64);
            render.borrow_mut().apply_settings(&settings, &mut rng);
        }
    });
    true
}

/// Switch the quality preset ("low", "medium", "high")
#[wasm_bindgen]
pub fn set_background_quality(preset: &str) -> bool {
    update(|settings| settings.apply_preset_name(preset))
}

/// Turn the lines between nearby particles on or off
#[wasm_bindgen]
pub fn set_background_connections(enabled: bool) {
    update(|settings| {
        settings.connections = enabled;
        true
    });
}

/// Keep particles still while still drawing them
#[wasm_bindgen]
pub fn set_reduced_motion(enabled: bool) {
    update(|settings| {
        settings.reduced_motion = enabled;
        true
    });
}
