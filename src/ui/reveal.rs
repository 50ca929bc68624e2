//! Page-enter stagger and play-once scroll reveal

use std::collections::HashSet;

/// Gap between consecutive enter animations
pub const ENTER_STEP_MS: f64 = 100.0;
/// Length of one enter animation
pub const ENTER_DURATION_MS: f64 = 600.0;
/// Hero children start one step in
pub const HERO_FIRST_DELAY_MS: f64 = 100.0;
/// News cards wait for the hero to settle
pub const NEWS_CARD_FIRST_DELAY_MS: f64 = 1_000.0;
/// Extra wait before an inline transition is removed
pub const CLEANUP_SLACK_MS: f64 = 50.0;
/// Visible ratio that triggers a reveal
pub const REVEAL_THRESHOLD: f64 = 0.25;

pub const HIDDEN_TRANSFORM: &str = "translateY(30px)";
pub const SHOWN_TRANSFORM: &str = "translateY(0)";
pub const ENTER_TRANSITION: &str = "opacity 0.6s cubic-bezier(0.42, 0, 0.58, 1), \
     transform 0.6s cubic-bezier(0.42, 0, 0.58, 1)";

/// Start delays for `.page-enter` elements: 100, 200, 300 ms...
pub fn enter_delays(count: usize) -> impl Iterator<Item = f64> {
    (1..=count).map(|i| i as f64 * ENTER_STEP_MS)
}

/// How a hero child is brought in
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HeroEntrance {
    /// No keyframes of its own: use the page-enter animation with a delay
    Keyframes { delay_ms: f64 },
    /// Already animated (floating logo etc.): fade opacity only, then drop
    /// the inline transition at `cleanup_ms`
    FadeOnly { delay_ms: f64, cleanup_ms: f64 },
}

impl HeroEntrance {
    pub fn for_child(index: usize, has_animation: bool) -> Self {
        let delay_ms = HERO_FIRST_DELAY_MS + index as f64 * ENTER_STEP_MS;
        if has_animation {
            HeroEntrance::FadeOnly {
                delay_ms,
                cleanup_ms: ENTER_DURATION_MS + delay_ms + CLEANUP_SLACK_MS,
            }
        } else {
            HeroEntrance::Keyframes { delay_ms }
        }
    }

    /// Inline transition for the fade-only case
    pub fn fade_transition(&self) -> Option<String> {
        match self {
            HeroEntrance::FadeOnly { delay_ms, .. } => Some(format!(
                "opacity {}ms cubic-bezier(0.42, 0, 0.58, 1) {}ms",
                ENTER_DURATION_MS, delay_ms
            )),
            HeroEntrance::Keyframes { .. } => None,
        }
    }
}

/// `animation-delay` for the n-th news card
pub fn news_card_delay_ms(index: usize) -> f64 {
    NEWS_CARD_FIRST_DELAY_MS + index as f64 * ENTER_STEP_MS
}

/// CSS seconds value for a millisecond delay
pub fn css_seconds(ms: f64) -> String {
    format!("{}s", ms / 1000.0)
}

/// Fully opaque and untransformed elements have nothing left to reveal
pub fn already_visible(computed_opacity: &str, computed_transform: &str) -> bool {
    let opaque = computed_opacity
        .trim()
        .parse::<f64>()
        .is_ok_and(|o| o >= 1.0);
    opaque && computed_transform.trim() == "none"
}

/// Play-once reveal bookkeeping, keyed by the id the page assigns
#[derive(Debug, Clone, Default)]
pub struct ScrollReveal {
    revealed: HashSet<usize>,
}

impl ScrollReveal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true the first time `id` comes into view
    pub fn on_intersect(&mut self, id: usize, intersecting: bool) -> bool {
        intersecting && self.revealed.insert(id)
    }

    pub fn is_revealed(&self, id: usize) -> bool {
        self.revealed.contains(&id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enter_delays_step_by_100() {
        let delays: Vec<f64> = enter_delays(3).collect();
        assert_eq!(delays, vec![100.0, 200.0, 300.0]);
        assert_eq!(enter_delays(0).count(), 0);
    }

    #[test]
    fn test_hero_children() {
        assert_eq!(
            HeroEntrance::for_child(0, false),
            HeroEntrance::Keyframes { delay_ms: 100.0 }
        );
        let floating = HeroEntrance::for_child(2, true);
        assert_eq!(
            floating,
            HeroEntrance::FadeOnly {
                delay_ms: 300.0,
                cleanup_ms: 950.0
            }
        );
        assert_eq!(
            floating.fade_transition().as_deref(),
            Some("opacity 600ms cubic-bezier(0.42, 0, 0.58, 1) 300ms")
        );
        assert_eq!(HeroEntrance::for_child(1, false).fade_transition(), None);
    }

    #[test]
    fn test_news_card_delays() {
        assert_eq!(css_seconds(news_card_delay_ms(0)), "1s");
        assert_eq!(css_seconds(news_card_delay_ms(2)), "1.2s");
    }

    #[test]
    fn test_already_visible() {
        assert!(already_visible("1", "none"));
        assert!(!already_visible("0", "none"));
        assert!(!already_visible("1", "matrix(1, 0, 0, 1, 0, 30)"));
        assert!(!already_visible("", "none"));
    }

    #[test]
    fn test_reveal_plays_once() {
        let mut reveal = ScrollReveal::new();
        assert!(!reveal.on_intersect(4, false));
        assert!(!reveal.is_revealed(4));
        assert!(reveal.on_intersect(4, true));
        assert!(!reveal.on_intersect(4, true));
        assert!(reveal.on_intersect(5, true));
        assert!(reveal.is_revealed(4));
        assert!(reveal.is_revealed(5));
    }
}
