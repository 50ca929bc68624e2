//! Article and Discord modals

use serde::{Deserialize, Serialize};

/// Article modal fade-out length
pub const ARTICLE_CLOSE_MS: f64 = 600.0;

/// A news article shown in the modal. Content comes from the host page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub date: String,
    /// Image URL (data URLs allowed)
    pub image: String,
    /// Trusted HTML body
    pub body: String,
}

/// Parse the article list supplied by the page
pub fn parse_articles(json: &str) -> Result<Vec<Article>, serde_json::Error> {
    serde_json::from_str(json)
}

/// Parse an article index from a data attribute
pub fn parse_article_index(raw: &str) -> Option<usize> {
    raw.trim().parse().ok()
}

/// Article opened by a news card: its own `data-open-article` wins, otherwise
/// its position in the news grid
pub fn card_article(data_open_article: Option<&str>, position: usize) -> Option<usize> {
    match data_open_article {
        Some(raw) => parse_article_index(raw),
        None => Some(position),
    }
}

/// What started a close request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseTrigger {
    /// Programmatic or keyboard close
    Direct,
    /// Click on the backdrop itself
    Backdrop,
    /// Click on an explicit close button
    CloseButton,
    /// Click somewhere inside the dialog
    Inside,
}

impl CloseTrigger {
    /// Classify a click on a modal. `in_close_button` covers clicks on the
    /// button's icon or label as well as the button itself.
    pub fn from_click(on_backdrop: bool, in_close_button: bool) -> Self {
        if on_backdrop {
            CloseTrigger::Backdrop
        } else if in_close_button {
            CloseTrigger::CloseButton
        } else {
            CloseTrigger::Inside
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ArticleModalState {
    Closed,
    Open { index: usize },
    Closing { index: usize, since: f64 },
}

/// Classes and body lock the modal element should carry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArticleModalView {
    pub active: bool,
    pub closing: bool,
    pub scroll_locked: bool,
    pub highlighted: Option<usize>,
}

#[derive(Debug, Clone)]
pub struct ArticleModal {
    articles: Vec<Article>,
    state: ArticleModalState,
}

impl ArticleModal {
    pub fn new(articles: Vec<Article>) -> Self {
        Self {
            articles,
            state: ArticleModalState::Closed,
        }
    }

    pub fn state(&self) -> ArticleModalState {
        self.state
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    /// Open an article. Out-of-range indices leave the modal untouched.
    pub fn open(&mut self, index: usize) -> Option<&Article> {
        let article = self.articles.get(index)?;
        self.state = ArticleModalState::Open { index };
        Some(article)
    }

    /// Start the fade-out. Clicks inside the dialog are ignored, as is
    /// closing a modal that isn't open.
    pub fn close(&mut self, trigger: CloseTrigger, now_ms: f64) -> bool {
        if !matches!(trigger, CloseTrigger::Direct | CloseTrigger::Backdrop) {
            return false;
        }
        match self.state {
            ArticleModalState::Open { index } => {
                self.state = ArticleModalState::Closing {
                    index,
                    since: now_ms,
                };
                true
            }
            _ => false,
        }
    }

    /// Finish the fade-out. Returns true once the modal is fully closed.
    pub fn tick(&mut self, now_ms: f64) -> bool {
        if let ArticleModalState::Closing { since, .. } = self.state {
            if now_ms - since >= ARTICLE_CLOSE_MS {
                self.state = ArticleModalState::Closed;
                return true;
            }
        }
        false
    }

    /// Subsection nav item to highlight while an article is showing
    pub fn highlighted_subsection(&self) -> Option<usize> {
        match self.state {
            ArticleModalState::Open { index } | ArticleModalState::Closing { index, .. } => {
                Some(index)
            }
            ArticleModalState::Closed => None,
        }
    }

    /// Body scrolling disabled
    pub fn scroll_locked(&self) -> bool {
        self.state != ArticleModalState::Closed
    }

    pub fn view(&self) -> ArticleModalView {
        ArticleModalView {
            active: self.state != ArticleModalState::Closed,
            closing: matches!(self.state, ArticleModalState::Closing { .. }),
            scroll_locked: self.scroll_locked(),
            highlighted: self.highlighted_subsection(),
        }
    }
}

/// Discord invite modal; opens and closes without animation delays
#[derive(Debug, Clone, Default)]
pub struct DiscordModal {
    open: bool,
}

impl DiscordModal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self, trigger: CloseTrigger) -> bool {
        if trigger == CloseTrigger::Inside || !self.open {
            return false;
        }
        self.open = false;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn articles() -> Vec<Article> {
        (0..3)
            .map(|i| Article {
                title: format!("Article {}", i),
                date: "Nov 24, 2025".into(),
                image: String::new(),
                body: "<p>body</p>".into(),
            })
            .collect()
    }

    #[test]
    fn test_open_and_close_cycle() {
        let mut modal = ArticleModal::new(articles());
        assert_eq!(modal.open(1).map(|a| a.title.as_str()), Some("Article 1"));
        assert_eq!(modal.highlighted_subsection(), Some(1));
        assert!(modal.scroll_locked());

        assert!(modal.close(CloseTrigger::Direct, 1_000.0));
        assert!(!modal.tick(1_599.0));
        assert!(modal.tick(1_600.0));
        assert_eq!(modal.state(), ArticleModalState::Closed);
        assert_eq!(modal.highlighted_subsection(), None);
        assert!(!modal.scroll_locked());
    }

    #[test]
    fn test_reopen_during_fade_out() {
        let mut modal = ArticleModal::new(articles());
        modal.open(0);
        assert!(modal.close(CloseTrigger::Direct, 1_000.0));
        assert!(modal.view().closing);

        modal.open(1);
        let view = modal.view();
        assert!(view.active);
        assert!(!view.closing);
        assert_eq!(view.highlighted, Some(1));

        // The timer from the first close fires into an open modal
        assert!(!modal.tick(1_605.0));
        assert_eq!(modal.state(), ArticleModalState::Open { index: 1 });
        assert!(modal.view().scroll_locked);
    }

    #[test]
    fn test_closed_view() {
        let modal = ArticleModal::new(articles());
        let view = modal.view();
        assert!(!view.active && !view.closing && !view.scroll_locked);
        assert_eq!(view.highlighted, None);
    }

    #[test]
    fn test_news_cards_open_their_articles() {
        let mut modal = ArticleModal::new(articles());
        for position in 0..modal.articles().len() {
            let index = card_article(None, position);
            assert_eq!(index, Some(position));
            assert!(modal.open(position).is_some());
        }
        assert_eq!(card_article(Some(" 2 "), 0), Some(2));
        assert_eq!(card_article(Some("next"), 0), None);
    }

    #[test]
    fn test_out_of_range_open() {
        let mut modal = ArticleModal::new(articles());
        assert!(modal.open(3).is_none());
        assert_eq!(modal.state(), ArticleModalState::Closed);
    }

    #[test]
    fn test_inside_click_does_not_close() {
        let mut modal = ArticleModal::new(articles());
        modal.open(0);
        assert!(!modal.close(CloseTrigger::Inside, 0.0));
        assert!(modal.close(CloseTrigger::Backdrop, 0.0));
    }

    #[test]
    fn test_close_when_closed_is_noop() {
        let mut modal = ArticleModal::new(articles());
        assert!(!modal.close(CloseTrigger::Direct, 0.0));
        assert!(!modal.tick(10_000.0));
    }

    #[test]
    fn test_parse_articles() {
        let json = r#"[{"title":"T","date":"D","image":"I","body":"<p>B</p>"}]"#;
        let parsed = parse_articles(json).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].body, "<p>B</p>");
        assert!(parse_articles("[{}]").is_err());
    }

    #[test]
    fn test_close_button_icon_closes_discord() {
        let mut modal = DiscordModal::new();
        modal.open();
        // Click landed on the icon; its closest ancestor is the button
        let trigger = CloseTrigger::from_click(false, true);
        assert_eq!(trigger, CloseTrigger::CloseButton);
        assert!(modal.close(trigger));

        assert_eq!(CloseTrigger::from_click(true, false), CloseTrigger::Backdrop);
        assert_eq!(CloseTrigger::from_click(false, false), CloseTrigger::Inside);
    }

    #[test]
    fn test_discord_modal() {
        let mut modal = DiscordModal::new();
        assert!(!modal.close(CloseTrigger::Direct));
        modal.open();
        assert!(!modal.close(CloseTrigger::Inside));
        assert!(modal.close(CloseTrigger::CloseButton));
        assert!(!modal.is_open());
    }
}
