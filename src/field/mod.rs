//! Particle background simulation
//!
//! Pure and host-independent:
//! - Particle count fixed at construction
//! - Seeded RNG only (reproducible for a seed)
//! - Bounds read from the live surface size each frame
//! - Rendering goes through `DrawSurface`, never a platform API

pub mod link;
pub mod particle;
pub mod state;
pub mod step;

pub use link::{Link, link_opacity, links};
pub use particle::{ColorTag, Particle};
pub use state::ParticleField;
pub use step::reflect;
