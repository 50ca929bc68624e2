//! Connection lines between nearby particles

use glam::Vec2;

use super::particle::Particle;
use crate::consts::{LINK_DISTANCE, LINK_MAX_OPACITY};

/// Line opacity for a pair at `distance`: linear fade from
/// `LINK_MAX_OPACITY` at 0 to exactly 0 at `LINK_DISTANCE` and beyond.
#[inline]
pub fn link_opacity(distance: f32) -> f32 {
    if distance < LINK_DISTANCE {
        (1.0 - distance / LINK_DISTANCE) * LINK_MAX_OPACITY
    } else {
        0.0
    }
}

/// A connection to draw, from `particles[a]` to `particles[b]` (a < b)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link {
    pub a: usize,
    pub b: usize,
    pub from: Vec2,
    pub to: Vec2,
    pub opacity: f32,
}

/// All unordered pairs closer than `LINK_DISTANCE`. O(n²).
pub fn links(particles: &[Particle]) -> impl Iterator<Item = Link> + '_ {
    particles.iter().enumerate().flat_map(move |(a, p)| {
        particles[a + 1..]
            .iter()
            .enumerate()
            .filter_map(move |(offset, q)| {
                let distance = p.pos.distance(q.pos);
                (distance < LINK_DISTANCE).then(|| Link {
                    a,
                    b: a + 1 + offset,
                    from: p.pos,
                    to: q.pos,
                    opacity: link_opacity(distance),
                })
            })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::ColorTag;

    fn at(x: f32, y: f32) -> Particle {
        Particle::new(Vec2::new(x, y), Vec2::ZERO, 1.0, ColorTag::Red, 0.3)
    }

    #[test]
    fn test_link_opacity_endpoints() {
        assert!((link_opacity(0.0) - 0.15).abs() < 1e-6);
        assert_eq!(link_opacity(100.0), 0.0);
        assert_eq!(link_opacity(250.0), 0.0);
        assert!((link_opacity(50.0) - 0.075).abs() < 1e-6);
    }

    #[test]
    fn test_link_opacity_strictly_decreasing() {
        let mut prev = link_opacity(0.0);
        for i in 1..100 {
            let cur = link_opacity(i as f32);
            assert!(cur < prev, "opacity must fall at d={}", i);
            prev = cur;
        }
    }

    #[test]
    fn test_links_unordered_pairs_only() {
        let particles = vec![at(0.0, 0.0), at(10.0, 0.0), at(20.0, 0.0)];
        let found: Vec<_> = links(&particles).map(|l| (l.a, l.b)).collect();
        assert_eq!(found, vec![(0, 1), (0, 2), (1, 2)]);
    }

    #[test]
    fn test_links_skip_distant_pairs() {
        let particles = vec![at(0.0, 0.0), at(100.0, 0.0), at(0.0, 99.0)];
        let found: Vec<_> = links(&particles).map(|l| (l.a, l.b)).collect();
        assert_eq!(found, vec![(0, 2)]);
    }

    #[test]
    fn test_links_empty_and_single() {
        assert_eq!(links(&[]).count(), 0);
        assert_eq!(links(&[at(1.0, 1.0)]).count(), 0);
    }
}
