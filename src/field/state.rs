//! Particle field state and construction

use rand::Rng;

use super::particle::Particle;
use crate::surface::DrawSurface;

/// A fixed-size set of drifting particles
///
/// The particle count never changes after construction. Bounds are not stored
/// here: every frame reads the live surface size, so a resize takes effect on
/// the next frame without touching particle state.
#[derive(Debug, Clone)]
pub struct ParticleField {
    particles: Vec<Particle>,
    /// Draw connection lines between nearby particles
    pub connections: bool,
    /// Draw without advancing (reduced motion)
    pub frozen: bool,
}

impl ParticleField {
    /// Scatter `count` random particles over the surface
    pub fn new<S, R>(surface: &S, count: usize, rng: &mut R) -> Self
    where
        S: DrawSurface + ?Sized,
        R: Rng + ?Sized,
    {
        let (width, height) = surface.size();
        let particles = (0..count)
            .map(|_| Particle::random(rng, width as f32, height as f32))
            .collect();
        Self::from_particles(particles)
    }

    /// Field with an explicit particle set
    pub fn from_particles(particles: Vec<Particle>) -> Self {
        Self {
            particles,
            connections: true,
            frozen: false,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub(super) fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}
