//! Frame driver for the particle background
//!
//! The loop owns the field and its surface. The host calls `frame()` from its
//! frame-synchronised callback (`requestAnimationFrame` in the browser) and
//! schedules the next callback only while `frame()` returns true.

use rand::Rng;

use crate::field::ParticleField;
use crate::settings::Settings;
use crate::surface::DrawSurface;
use crate::viewport::{Viewport, ViewportSync};

pub struct RenderLoop<S: DrawSurface> {
    field: ParticleField,
    surface: S,
    running: bool,
    frames: u64,
}

impl<S: DrawSurface> RenderLoop<S> {
    pub fn new(field: ParticleField, surface: S) -> Self {
        Self {
            field,
            surface,
            running: true,
            frames: 0,
        }
    }

    /// Build a field from settings and wrap it with `surface`
    pub fn from_settings<R: Rng + ?Sized>(surface: S, settings: &Settings, rng: &mut R) -> Self {
        let field = ParticleField::new(&surface, settings.particle_count(), rng);
        let mut render = Self::new(field, surface);
        render.apply_settings(settings, rng);
        render
    }

    /// Apply changed settings. The field is regenerated only when the
    /// particle count changes; the switches apply in place.
    pub fn apply_settings<R: Rng + ?Sized>(&mut self, settings: &Settings, rng: &mut R) {
        let count = settings.particle_count();
        if count != self.field.len() {
            log::info!("Rebuilding background with {} particles", count);
            self.field = ParticleField::new(&self.surface, count, rng);
        }
        self.field.connections = settings.connections;
        self.field.frozen = settings.reduced_motion;
    }

    /// Run one frame. Returns whether the next frame should be scheduled.
    pub fn frame(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.field.advance_and_render(&mut self.surface);
        self.frames += 1;
        true
    }

    /// Stop after the current frame; the pending callback will not reschedule
    pub fn stop(&mut self) {
        if self.running {
            log::info!("Render loop stopped after {} frames", self.frames);
        }
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Frames rendered so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Match the surface to a new viewport
    pub fn resize(&mut self, viewport: Viewport) -> bool {
        ViewportSync::apply(&mut self.surface, viewport)
    }

    /// Run `count` frames back to back (headless driver)
    pub fn run_frames(&mut self, count: u64) -> u64 {
        let mut ran = 0;
        while ran < count && self.frame() {
            ran += 1;
        }
        ran
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    pub fn field_mut(&mut self) -> &mut ParticleField {
        &mut self.field
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::RecordingSurface;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn make_loop(settings: &Settings) -> RenderLoop<RecordingSurface> {
        let mut rng = Pcg32::seed_from_u64(2024);
        RenderLoop::from_settings(RecordingSurface::new(640, 480), settings, &mut rng)
    }

    #[test]
    fn test_frames_counted() {
        let mut lp = make_loop(&Settings::default());
        assert_eq!(lp.run_frames(30), 30);
        assert_eq!(lp.frames(), 30);
        assert_eq!(lp.surface().circles().count(), 40);
    }

    #[test]
    fn test_stop_prevents_rescheduling() {
        let mut lp = make_loop(&Settings::default());
        assert!(lp.frame());
        lp.stop();
        assert!(!lp.frame());
        assert_eq!(lp.run_frames(10), 0);
        assert_eq!(lp.frames(), 1);
    }

    #[test]
    fn test_resize_keeps_particles() {
        let mut lp = make_loop(&Settings::default());
        lp.run_frames(5);
        let before = lp.field().particles().to_vec();

        assert!(lp.resize(Viewport::new(300, 200)));
        assert_eq!(lp.surface().size(), (300, 200));
        assert_eq!(lp.field().particles(), before.as_slice());

        lp.run_frames(100);
        assert_eq!(lp.field().len(), 40);
    }

    #[test]
    fn test_preset_change_rebuilds_field() {
        let mut rng = Pcg32::seed_from_u64(7);
        let mut lp = make_loop(&Settings::default());
        lp.run_frames(2);

        let mut settings = Settings::default();
        settings.apply_preset(crate::settings::QualityPreset::High);
        lp.apply_settings(&settings, &mut rng);
        assert_eq!(lp.field().len(), 60);

        settings.apply_preset(crate::settings::QualityPreset::Low);
        lp.apply_settings(&settings, &mut rng);
        assert_eq!(lp.field().len(), 20);
        assert!(!lp.field().connections);
    }

    #[test]
    fn test_switches_apply_in_place() {
        let mut rng = Pcg32::seed_from_u64(7);
        let mut lp = make_loop(&Settings::default());
        let before = lp.field().particles().to_vec();

        let settings = Settings {
            reduced_motion: true,
            ..Settings::default()
        };
        lp.apply_settings(&settings, &mut rng);
        assert!(lp.field().frozen);
        assert_eq!(lp.field().particles(), before.as_slice());
    }

    #[test]
    fn test_settings_applied() {
        let settings = Settings {
            connections: false,
            reduced_motion: true,
            ..Settings::default()
        };
        let mut lp = make_loop(&settings);
        let before = lp.field().particles().to_vec();
        lp.run_frames(3);
        assert_eq!(lp.field().particles(), before.as_slice());
        assert_eq!(lp.surface().lines().count(), 0);
    }
}
