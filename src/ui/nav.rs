//! Section navigation: config, active-section tracking, click routing
//!
//! The active section follows whichever observed section has the largest
//! visible ratio. Clicks give immediate feedback by setting it directly.

use serde::{Deserialize, Serialize};

use super::modal::parse_article_index;

/// Section that owns the article subsections
pub const NEWS_SECTION: &str = "news";
/// Visibility ratios at which the observer reports
pub const OBSERVER_THRESHOLDS: [f64; 3] = [0.25, 0.5, 0.75];

/// What clicking a subsection does
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubsectionAction {
    /// Scroll the element with the subsection's id into the centre
    Scroll,
    /// Open the article at this index
    Article(usize),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavSubsection {
    pub id: String,
    pub label: String,
    pub action: SubsectionAction,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavSection {
    pub id: String,
    pub label: String,
    /// CSS selector of the section element
    pub selector: String,
    #[serde(default)]
    pub subsections: Vec<NavSubsection>,
}

impl NavSection {
    fn new(id: &str, label: &str, selector: &str) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            selector: selector.to_string(),
            subsections: Vec::new(),
        }
    }
}

/// The site's navigation layout
pub fn default_navigation() -> Vec<NavSection> {
    let news_cards = [
        "Veldivia\u{2019}s Origins & Early Combat Direction",
        "Expanded Infrastructure - EU & NA Proxy Servers",
        "Quality-of-Life Improvements & Community Growth",
    ];

    let mut news = NavSection::new(NEWS_SECTION, "News", "#news");
    news.subsections = news_cards
        .iter()
        .enumerate()
        .map(|(i, label)| NavSubsection {
            id: format!("news-card-{}", i),
            label: label.to_string(),
            action: SubsectionAction::Scroll,
        })
        .collect();

    vec![
        NavSection::new("hero", "Home", ".hero"),
        news,
        NavSection::new("discord", "Discord", "#discord"),
    ]
}

/// What a navigation click resolved to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavAction {
    /// Scroll an element (by id) to the viewport centre
    ScrollToElement(String),
    /// Open an article
    OpenArticle(usize),
    /// Scroll a section to the top and mark it active
    ScrollToSection(String),
}

/// The nav element a click landed in, read from its data attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavClick<'a> {
    Subsection {
        scroll_to: Option<&'a str>,
        article: Option<&'a str>,
    },
    Section(&'a str),
}

/// Tracks which sections are visible and which one is active
#[derive(Debug, Clone, Default)]
pub struct SectionTracker {
    /// Known section ids, in navigation order
    order: Vec<String>,
    /// Visible ratio per section (parallel to `order`)
    visible: Vec<Option<f64>>,
    active: Option<String>,
}

impl SectionTracker {
    pub fn new<I, T>(ids: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let order: Vec<String> = ids.into_iter().map(Into::into).collect();
        let visible = vec![None; order.len()];
        Self {
            order,
            visible,
            active: None,
        }
    }

    pub fn from_navigation(sections: &[NavSection]) -> Self {
        Self::new(sections.iter().map(|s| s.id.clone()))
    }

    pub fn knows(&self, id: &str) -> bool {
        self.index_of(id).is_some()
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Record an observer entry. Unknown ids are ignored.
    pub fn observe(&mut self, id: &str, intersecting: bool, ratio: f64) {
        if let Some(i) = self.index_of(id) {
            self.visible[i] = intersecting.then_some(ratio);
        }
    }

    /// Pick the most visible section. Returns it only if the active section
    /// changed; with nothing visible the current one is kept.
    pub fn resolve(&mut self) -> Option<&str> {
        let mut best: Option<(usize, f64)> = None;
        for (i, ratio) in self.visible.iter().enumerate() {
            if let Some(ratio) = *ratio {
                if best.is_none_or(|(_, r)| ratio > r) {
                    best = Some((i, ratio));
                }
            }
        }

        let (index, _) = best?;
        if self.active.as_deref() == Some(self.order[index].as_str()) {
            return None;
        }
        self.active = Some(self.order[index].clone());
        self.active.as_deref()
    }

    /// Force the active section. Returns false for unknown ids.
    pub fn set_active(&mut self, id: &str) -> bool {
        if !self.knows(id) {
            return false;
        }
        self.active = Some(id.to_string());
        true
    }

    /// Route a navigation click. Subsection clicks never fall through to the
    /// enclosing section.
    pub fn handle_click(&mut self, click: NavClick<'_>) -> Vec<NavAction> {
        match click {
            NavClick::Subsection { scroll_to, article } => {
                let mut actions = Vec::new();
                if let Some(id) = scroll_to.filter(|id| !id.is_empty()) {
                    actions.push(NavAction::ScrollToElement(id.to_string()));
                }
                if let Some(index) = article.and_then(parse_article_index) {
                    actions.push(NavAction::OpenArticle(index));
                }
                actions
            }
            NavClick::Section(id) => {
                if self.set_active(id) {
                    vec![NavAction::ScrollToSection(id.to_string())]
                } else {
                    Vec::new()
                }
            }
        }
    }

    fn index_of(&self, id: &str) -> Option<usize> {
        self.order.iter().position(|s| s == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker() -> SectionTracker {
        SectionTracker::from_navigation(&default_navigation())
    }

    #[test]
    fn test_default_navigation_layout() {
        let nav = default_navigation();
        let ids: Vec<_> = nav.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["hero", "news", "discord"]);
        assert_eq!(nav[1].subsections.len(), 3);
        assert_eq!(nav[1].subsections[2].id, "news-card-2");
    }

    #[test]
    fn test_largest_ratio_wins() {
        let mut t = tracker();
        t.observe("hero", true, 0.25);
        t.observe("news", true, 0.75);
        assert_eq!(t.resolve(), Some("news"));
        assert_eq!(t.active(), Some("news"));
    }

    #[test]
    fn test_only_changes_reported() {
        let mut t = tracker();
        t.observe("hero", true, 0.5);
        assert_eq!(t.resolve(), Some("hero"));
        t.observe("hero", true, 0.75);
        assert_eq!(t.resolve(), None);
    }

    #[test]
    fn test_nothing_visible_keeps_active() {
        let mut t = tracker();
        t.observe("discord", true, 0.5);
        t.resolve();
        t.observe("discord", false, 0.0);
        assert_eq!(t.resolve(), None);
        assert_eq!(t.active(), Some("discord"));
    }

    #[test]
    fn test_tie_goes_to_navigation_order() {
        let mut t = tracker();
        t.observe("discord", true, 0.5);
        t.observe("hero", true, 0.5);
        assert_eq!(t.resolve(), Some("hero"));
    }

    #[test]
    fn test_unknown_ids_ignored() {
        let mut t = tracker();
        t.observe("footer", true, 1.0);
        assert_eq!(t.resolve(), None);
        assert!(!t.set_active("footer"));
    }

    #[test]
    fn test_section_click_sets_active() {
        let mut t = tracker();
        let actions = t.handle_click(NavClick::Section("discord"));
        assert_eq!(actions, vec![NavAction::ScrollToSection("discord".into())]);
        assert_eq!(t.active(), Some("discord"));
        assert!(t.handle_click(NavClick::Section("missing")).is_empty());
    }

    #[test]
    fn test_subsection_click_routes() {
        let mut t = tracker();
        let actions = t.handle_click(NavClick::Subsection {
            scroll_to: Some("news-card-1"),
            article: None,
        });
        assert_eq!(actions, vec![NavAction::ScrollToElement("news-card-1".into())]);

        let actions = t.handle_click(NavClick::Subsection {
            scroll_to: None,
            article: Some("2"),
        });
        assert_eq!(actions, vec![NavAction::OpenArticle(2)]);

        let actions = t.handle_click(NavClick::Subsection {
            scroll_to: None,
            article: Some("abc"),
        });
        assert!(actions.is_empty());
        assert_eq!(t.active(), None);
    }
}
