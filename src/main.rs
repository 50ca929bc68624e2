//! Veldivia site entry point
//!
//! In the browser this starts the particle background and wires the page.
//! Natively it runs the background headlessly and reports what it drew.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_site {
    use wasm_bindgen::JsValue;

    use veldivia_site::Settings;
    use veldivia_site::platform::page;

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            web_sys::console::warn_1(&"Logger already initialised".into());
        }
        log::info!("Veldivia site starting...");

        let settings = Settings::load();
        let seed = js_sys::Date::now() as u64;

        // The handles stay alive through the listeners that captured them
        let _background = page::start_background(&settings, seed)?;
        let _page = page::start_page()?;

        log::info!("Veldivia site initialized");
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    if let Err(e) = wasm_site::run() {
        log::error!("Startup failed: {:?}", e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Veldivia site (native) starting...");
    log::info!("Native mode renders headlessly - serve the wasm build for the real page");

    // Usage: veldivia-site [frames] [seed] [low|medium|high]
    let mut args = std::env::args().skip(1);
    let frames = args.next().and_then(|a| a.parse().ok()).unwrap_or(600);
    let seed = args.next().and_then(|a| a.parse().ok()).unwrap_or(42);

    let mut settings = veldivia_site::Settings::load();
    if let Some(preset) = args.next() {
        settings.apply_preset_name(&preset);
    }

    headless::run(&settings, frames, seed);
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    use veldivia_site::{DrawSurface, RecordingSurface, RenderLoop, Settings, Viewport};

    pub fn run(settings: &Settings, frames: u64, seed: u64) {
        let mut rng = Pcg32::seed_from_u64(seed);
        let surface = RecordingSurface::new(1280, 720);
        let mut render = RenderLoop::from_settings(surface, settings, &mut rng);

        log::info!(
            "Running {} frames with {} particles (seed {})",
            frames,
            render.field().len(),
            seed
        );

        // Halfway through, shrink to a phone-sized viewport
        let first = frames / 2;
        render.run_frames(first);
        render.resize(Viewport::new(390, 844));
        render.run_frames(frames - first);

        let surface = render.surface();
        let (width, height) = surface.size();
        println!(
            "{} frames on {}x{}: last frame drew {} particles and {} links",
            render.frames(),
            width,
            height,
            surface.circles().count(),
            surface.lines().count()
        );
    }
}
