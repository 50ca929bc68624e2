//! Per-frame rendering and motion
//!
//! Frame order: clear, particles, connection lines, then motion. Motion
//! reflects first and advances second, so a particle that has just crossed a
//! wall is turned around on the following frame. The visible overshoot is at
//! most one frame of velocity.

use super::link::links;
use super::state::ParticleField;
use crate::consts::LINK_WIDTH;
use crate::surface::DrawSurface;

/// Negate a velocity component that points out of `[0, max]` from on or
/// beyond the wall. Requiring an outward velocity makes the flip happen once
/// per crossing, and lets particles stranded by a shrinking viewport drift
/// back in instead of oscillating outside.
#[inline]
pub fn reflect(pos: f32, vel: f32, max: f32) -> f32 {
    if (pos <= 0.0 && vel < 0.0) || (pos >= max && vel > 0.0) {
        -vel
    } else {
        vel
    }
}

impl ParticleField {
    /// Draw the current frame and advance one step
    pub fn advance_and_render<S: DrawSurface + ?Sized>(&mut self, surface: &mut S) {
        self.render(surface);
        if !self.frozen {
            let (width, height) = surface.size();
            self.step(width as f32, height as f32);
        }
    }

    /// Draw particles and connection lines without moving anything
    pub fn render<S: DrawSurface + ?Sized>(&self, surface: &mut S) {
        surface.clear();

        for p in self.particles() {
            surface.fill_circle(p.pos, p.radius, p.color(), p.opacity());
        }

        if self.connections {
            let particles = self.particles();
            for link in links(particles) {
                surface.stroke_line(
                    link.from,
                    link.to,
                    LINK_WIDTH,
                    particles[link.a].color(),
                    link.opacity,
                );
            }
        }
    }

    /// Reflect off the `width` x `height` walls, then move by velocity
    pub fn step(&mut self, width: f32, height: f32) {
        for p in self.particles_mut() {
            p.vel.x = reflect(p.pos.x, p.vel.x, width);
            p.vel.y = reflect(p.pos.y, p.vel.y, height);
            p.pos += p.vel;
        }
    }
}
