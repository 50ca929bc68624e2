//! Viewport tracking for the background surface

use crate::surface::DrawSurface;

/// Viewport size in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// From the floating-point `innerWidth`/`innerHeight` pair the browser reports
    pub fn from_inner(width: f64, height: f64) -> Self {
        Self {
            width: width.max(0.0) as u32,
            height: height.max(0.0) as u32,
        }
    }
}

/// Keeps a surface's pixel size equal to the viewport
///
/// Safe to call redundantly; particle state is never touched.
pub struct ViewportSync;

impl ViewportSync {
    /// Resize `surface` to `viewport`. Returns true if the size changed.
    pub fn apply<S: DrawSurface + ?Sized>(surface: &mut S, viewport: Viewport) -> bool {
        let target = (viewport.width, viewport.height);
        if surface.size() == target {
            return false;
        }
        surface.set_size(viewport.width, viewport.height);
        log::debug!("Surface resized to {}x{}", viewport.width, viewport.height);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::RecordingSurface;

    #[test]
    fn test_apply_matches_viewport_exactly() {
        let mut surface = RecordingSurface::new(800, 600);
        assert!(ViewportSync::apply(&mut surface, Viewport::new(1024, 768)));
        assert_eq!(surface.size(), (1024, 768));
    }

    #[test]
    fn test_apply_is_idempotent() {
        let mut surface = RecordingSurface::new(800, 600);
        ViewportSync::apply(&mut surface, Viewport::new(375, 812));
        assert!(!ViewportSync::apply(&mut surface, Viewport::new(375, 812)));
        assert_eq!(surface.size(), (375, 812));
    }

    #[test]
    fn test_from_inner_truncates() {
        assert_eq!(Viewport::from_inner(1280.7, 720.2), Viewport::new(1280, 720));
        assert_eq!(Viewport::from_inner(-1.0, 10.0), Viewport::new(0, 10));
    }
}
