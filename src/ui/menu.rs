//! Mobile navigation menu state
//!
//! Timers are driven by the host: transitions that finish later (the closing
//! animation, the delayed close after a link click) complete on `tick(now)`.

use crate::consts::MOBILE_BREAKPOINT;

/// Closing animation length
pub const CLOSE_ANIMATION_MS: f64 = 400.0;
/// Delay between a link click and the menu closing
pub const LINK_CLOSE_DELAY_MS: f64 = 150.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MenuState {
    Closed,
    Open,
    /// Closing animation running since the given time (ms)
    Closing { since: f64 },
}

/// Classes and attributes the DOM should reflect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuView {
    /// Hamburger `active` class and `aria-expanded`
    pub expanded: bool,
    /// Menu panel `active` class
    pub panel_active: bool,
    /// Menu panel `closing` class
    pub panel_closing: bool,
    /// Overlay `active` class
    pub overlay_active: bool,
    /// Body scrolling disabled
    pub scroll_locked: bool,
}

#[derive(Debug, Clone)]
pub struct MobileMenu {
    state: MenuState,
    /// Close scheduled after a link click
    pending_close: Option<f64>,
}

impl Default for MobileMenu {
    fn default() -> Self {
        Self::new()
    }
}

impl MobileMenu {
    pub fn new() -> Self {
        Self {
            state: MenuState::Closed,
            pending_close: None,
        }
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == MenuState::Open
    }

    /// Open the menu. Returns true when link entry animations should replay
    /// (false when restoring an open menu after navigation).
    pub fn open(&mut self, skip_reset_animations: bool) -> bool {
        self.state = MenuState::Open;
        self.pending_close = None;
        !skip_reset_animations
    }

    /// Start closing. No-op unless open.
    pub fn close(&mut self, now_ms: f64) -> bool {
        if !self.is_open() {
            return false;
        }
        self.state = MenuState::Closing { since: now_ms };
        self.pending_close = None;
        true
    }

    pub fn toggle(&mut self, now_ms: f64) {
        if self.is_open() {
            self.close(now_ms);
        } else {
            self.open(false);
        }
    }

    /// A menu link was clicked. The server-IP entry keeps the menu open.
    pub fn link_clicked(&mut self, now_ms: f64, is_server_ip: bool) {
        if !is_server_ip && self.is_open() {
            self.pending_close = Some(now_ms + LINK_CLOSE_DELAY_MS);
        }
    }

    pub fn on_escape(&mut self, now_ms: f64) -> bool {
        self.close(now_ms)
    }

    /// Back to a desktop-width viewport closes the menu
    pub fn on_resize(&mut self, viewport_width: f64, now_ms: f64) -> bool {
        viewport_width > MOBILE_BREAKPOINT && self.close(now_ms)
    }

    /// Advance timers. Returns true if the state changed.
    pub fn tick(&mut self, now_ms: f64) -> bool {
        if let Some(at) = self.pending_close {
            if now_ms >= at {
                self.pending_close = None;
                return self.close(now_ms);
            }
        }
        if let MenuState::Closing { since } = self.state {
            if now_ms - since >= CLOSE_ANIMATION_MS {
                self.state = MenuState::Closed;
                return true;
            }
        }
        false
    }

    pub fn view(&self) -> MenuView {
        match self.state {
            MenuState::Closed => MenuView {
                expanded: false,
                panel_active: false,
                panel_closing: false,
                overlay_active: false,
                scroll_locked: false,
            },
            MenuState::Open => MenuView {
                expanded: true,
                panel_active: true,
                panel_closing: false,
                overlay_active: true,
                scroll_locked: true,
            },
            MenuState::Closing { .. } => MenuView {
                expanded: false,
                panel_active: true,
                panel_closing: true,
                overlay_active: false,
                scroll_locked: true,
            },
        }
    }
}

/// Whether clicking a link with this href leaves the page
pub fn is_navigation_href(href: Option<&str>) -> bool {
    match href {
        Some(href) => !href.is_empty() && href != "#" && !href.starts_with("javascript:"),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_cycle() {
        let mut menu = MobileMenu::new();
        menu.toggle(0.0);
        assert!(menu.is_open());
        assert!(menu.view().scroll_locked);

        menu.toggle(100.0);
        assert_eq!(menu.state(), MenuState::Closing { since: 100.0 });
        let view = menu.view();
        assert!(view.panel_closing && !view.overlay_active && !view.expanded);

        assert!(!menu.tick(499.0));
        assert!(menu.tick(500.0));
        assert_eq!(menu.state(), MenuState::Closed);
        assert!(!menu.view().scroll_locked);
    }

    #[test]
    fn test_close_when_closed_is_noop() {
        let mut menu = MobileMenu::new();
        assert!(!menu.close(0.0));
        assert!(!menu.on_escape(0.0));
        assert_eq!(menu.state(), MenuState::Closed);
    }

    #[test]
    fn test_reopen_during_close_stays_open() {
        let mut menu = MobileMenu::new();
        menu.open(false);
        menu.close(0.0);
        menu.open(false);
        assert!(!menu.tick(1_000.0));
        assert!(menu.is_open());
    }

    #[test]
    fn test_link_click_closes_after_delay() {
        let mut menu = MobileMenu::new();
        menu.open(false);
        menu.link_clicked(1_000.0, false);
        assert!(!menu.tick(1_100.0));
        assert!(menu.tick(1_150.0));
        assert!(matches!(menu.state(), MenuState::Closing { .. }));
    }

    #[test]
    fn test_server_ip_link_keeps_menu_open() {
        let mut menu = MobileMenu::new();
        menu.open(false);
        menu.link_clicked(0.0, true);
        assert!(!menu.tick(10_000.0));
        assert!(menu.is_open());
    }

    #[test]
    fn test_resize_breakpoint() {
        let mut menu = MobileMenu::new();
        menu.open(false);
        assert!(!menu.on_resize(768.0, 0.0));
        assert!(menu.on_resize(1024.0, 0.0));
    }

    #[test]
    fn test_restore_skips_animation_replay() {
        let mut menu = MobileMenu::new();
        assert!(!menu.open(true));
        assert!(menu.open(false));
    }

    #[test]
    fn test_navigation_href() {
        assert!(is_navigation_href(Some("/jobs")));
        assert!(is_navigation_href(Some("https://discord.gg/x")));
        assert!(!is_navigation_href(Some("#")));
        assert!(!is_navigation_href(Some("javascript:void(0)")));
        assert!(!is_navigation_href(Some("")));
        assert!(!is_navigation_href(None));
    }
}
