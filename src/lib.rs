//! Veldivia site effects - particle background and page interactions
//!
//! Core modules:
//! - `field`: Particle simulation (drift, wall reflection, connection lines)
//! - `surface`: Drawing surface abstraction the field renders into
//! - `render_loop`: Per-frame driver owning the field and its surface
//! - `viewport`: Keeps the surface sized to the viewport
//! - `ui`: Page interaction state (navigation, menu, accordion, modals)
//! - `persistence`: Short-lived LocalStorage flags
//! - `platform`: Browser glue (canvas, DOM, storage)

pub mod field;
pub mod persistence;
pub mod platform;
pub mod render_loop;
pub mod settings;
pub mod surface;
pub mod ui;
pub mod viewport;

pub use field::{ColorTag, Particle, ParticleField};
pub use render_loop::RenderLoop;
pub use settings::{QualityPreset, Settings};
pub use surface::{DrawCommand, DrawSurface, RecordingSurface};
pub use viewport::{Viewport, ViewportSync};

/// Background effect constants
pub mod consts {
    /// Default particle count (Medium preset)
    pub const DEFAULT_PARTICLE_COUNT: usize = 40;
    /// Hard cap on particle count; connection checks grow quadratically
    pub const MAX_PARTICLE_COUNT: usize = 80;

    /// Per-axis velocity range, units per frame (symmetric around zero)
    pub const MAX_DRIFT_SPEED: f32 = 0.15;
    /// Particle radius range
    pub const MIN_RADIUS: f32 = 0.5;
    pub const MAX_RADIUS: f32 = 2.5;
    /// Particle opacity range
    pub const MIN_OPACITY: f32 = 0.1;
    pub const MAX_OPACITY: f32 = 0.5;

    /// Pairs closer than this get a connection line
    pub const LINK_DISTANCE: f32 = 100.0;
    /// Connection opacity at distance zero
    pub const LINK_MAX_OPACITY: f32 = 0.15;
    /// Connection stroke width
    pub const LINK_WIDTH: f32 = 0.5;

    /// Viewport width above which the mobile menu closes itself
    pub const MOBILE_BREAKPOINT: f64 = 768.0;

    /// Server address copied by the IP buttons
    pub const SERVER_ADDRESS: &str = "play.veldivia.net";
}
