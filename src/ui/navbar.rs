//! Navbar response to content scrolling

/// Scroll offset past which the navbar gets its elevated style
pub const ELEVATE_AFTER_PX: f64 = 100.0;
/// Scroll offset past which scrolling down hides the navbar
pub const HIDE_AFTER_PX: f64 = 500.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavbarView {
    pub elevated: bool,
    pub hidden: bool,
}

impl NavbarView {
    pub fn backdrop_filter(&self) -> &'static str {
        if self.elevated {
            "blur(20px) saturate(180%)"
        } else {
            "blur(16px) saturate(180%)"
        }
    }

    pub fn box_shadow(&self) -> &'static str {
        if self.elevated {
            "0 8px 32px rgba(0, 0, 0, 0.4), 0 0 25px rgba(220, 38, 38, 0.15)"
        } else {
            "0 4px 6px -1px rgba(0, 0, 0, 0.4), 0 0 25px rgba(220, 38, 38, 0.15)"
        }
    }

    pub fn transform(&self) -> &'static str {
        if self.hidden {
            "translateY(-100%)"
        } else {
            "translateY(0)"
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct NavbarEffects {
    last_scroll: f64,
}

impl NavbarEffects {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the content wrapper's current `scrollTop`
    pub fn on_scroll(&mut self, scroll_top: f64) -> NavbarView {
        let view = NavbarView {
            elevated: scroll_top > ELEVATE_AFTER_PX,
            hidden: scroll_top > self.last_scroll && scroll_top > HIDE_AFTER_PX,
        };
        self.last_scroll = scroll_top;
        view
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elevation_threshold() {
        let mut nav = NavbarEffects::new();
        assert!(!nav.on_scroll(100.0).elevated);
        assert!(nav.on_scroll(101.0).elevated);
    }

    #[test]
    fn test_hide_on_scroll_down_only_past_threshold() {
        let mut nav = NavbarEffects::new();
        assert!(!nav.on_scroll(400.0).hidden);
        assert!(nav.on_scroll(600.0).hidden);
        assert!(!nav.on_scroll(550.0).hidden);
        assert!(!nav.on_scroll(550.0).hidden);
    }

    #[test]
    fn test_styles() {
        let view = NavbarView {
            elevated: true,
            hidden: true,
        };
        assert_eq!(view.transform(), "translateY(-100%)");
        assert!(view.backdrop_filter().starts_with("blur(20px)"));
    }
}
