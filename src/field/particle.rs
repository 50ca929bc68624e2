//! Particle entity and colour palette

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// The five-colour ember palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColorTag {
    Red,
    Crimson,
    Scarlet,
    Rose,
    Maroon,
}

impl ColorTag {
    pub const PALETTE: [ColorTag; 5] = [
        ColorTag::Red,
        ColorTag::Crimson,
        ColorTag::Scarlet,
        ColorTag::Rose,
        ColorTag::Maroon,
    ];

    /// CSS hex colour
    pub fn hex(&self) -> &'static str {
        match self {
            ColorTag::Red => "#EF4444",
            ColorTag::Crimson => "#DC2626",
            ColorTag::Scarlet => "#B91C1C",
            ColorTag::Rose => "#F87171",
            ColorTag::Maroon => "#991B1B",
        }
    }

    /// Uniformly pick a palette entry
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::PALETTE[rng.random_range(0..Self::PALETTE.len())]
    }
}

/// A single drifting point in the background
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    color: ColorTag,
    opacity: f32,
}

impl Particle {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32, color: ColorTag, opacity: f32) -> Self {
        Self {
            pos,
            vel,
            radius,
            color,
            opacity,
        }
    }

    /// Random particle somewhere inside a `width` x `height` area
    pub fn random<R: Rng + ?Sized>(rng: &mut R, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(sample(rng, 0.0, width), sample(rng, 0.0, height)),
            vel: Vec2::new(
                sample(rng, -MAX_DRIFT_SPEED, MAX_DRIFT_SPEED),
                sample(rng, -MAX_DRIFT_SPEED, MAX_DRIFT_SPEED),
            ),
            radius: sample(rng, MIN_RADIUS, MAX_RADIUS),
            color: ColorTag::random(rng),
            opacity: sample(rng, MIN_OPACITY, MAX_OPACITY),
        }
    }

    pub fn color(&self) -> ColorTag {
        self.color
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }
}

/// Uniform sample in `[lo, hi)`, or `lo` for an empty range (zero-sized viewport)
fn sample<R: Rng + ?Sized>(rng: &mut R, lo: f32, hi: f32) -> f32 {
    if hi > lo {
        rng.random_range(lo..hi)
    } else {
        lo
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_random_particle_ranges() {
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..500 {
            let p = Particle::random(&mut rng, 800.0, 600.0);
            assert!((0.0..800.0).contains(&p.pos.x));
            assert!((0.0..600.0).contains(&p.pos.y));
            assert!(p.vel.x.abs() <= MAX_DRIFT_SPEED);
            assert!(p.vel.y.abs() <= MAX_DRIFT_SPEED);
            assert!((MIN_RADIUS..MAX_RADIUS).contains(&p.radius));
            assert!((MIN_OPACITY..MAX_OPACITY).contains(&p.opacity()));
        }
    }

    #[test]
    fn test_palette_fully_used() {
        let mut rng = Pcg32::seed_from_u64(99);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(ColorTag::random(&mut rng));
        }
        assert_eq!(seen.len(), ColorTag::PALETTE.len());
    }

    #[test]
    fn test_zero_sized_area() {
        let mut rng = Pcg32::seed_from_u64(1);
        let p = Particle::random(&mut rng, 0.0, 0.0);
        assert_eq!(p.pos, Vec2::ZERO);
    }
}
