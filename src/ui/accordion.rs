//! Single-open accordion with staggered reveal and click ripples

/// Delay between successive child reveals
pub const REVEAL_STAGGER_MS: f64 = 100.0;
/// Delay before an opened item scrolls into view
pub const SCROLL_DELAY_MS: f64 = 300.0;
/// Ripple lifetime
pub const RIPPLE_MS: f64 = 600.0;

/// Result of a toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AccordionChange {
    /// Item that closed
    pub closed: Option<usize>,
    /// Item that opened
    pub opened: Option<usize>,
}

#[derive(Debug, Clone)]
pub struct Accordion {
    len: usize,
    open: Option<usize>,
}

impl Accordion {
    pub fn new(len: usize) -> Self {
        Self { len, open: None }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn open_item(&self) -> Option<usize> {
        self.open
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    /// Toggle an item, closing whichever other item is open
    pub fn toggle(&mut self, index: usize) -> AccordionChange {
        if index >= self.len {
            return AccordionChange::default();
        }
        match self.open {
            Some(current) if current == index => {
                self.open = None;
                AccordionChange {
                    closed: Some(index),
                    opened: None,
                }
            }
            previous => {
                self.open = Some(index);
                AccordionChange {
                    closed: previous,
                    opened: Some(index),
                }
            }
        }
    }

    /// Hover glow stays on open items after the pointer leaves
    pub fn keeps_glow(&self, index: usize) -> bool {
        self.is_open(index)
    }
}

/// Reveal delay for each of `count` children
pub fn reveal_delays(count: usize) -> impl Iterator<Item = f64> {
    (0..count).map(|k| k as f64 * REVEAL_STAGGER_MS)
}

/// Ripple placement inside a header, in header-local pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ripple {
    pub size: f64,
    pub left: f64,
    pub top: f64,
}

impl Ripple {
    /// Centre a ripple on the click point. `rect` is (left, top, width, height)
    /// of the header in client coordinates.
    pub fn at(click_x: f64, click_y: f64, rect: (f64, f64, f64, f64)) -> Self {
        let (left, top, width, height) = rect;
        let size = width.max(height);
        Self {
            size,
            left: click_x - left - size / 2.0,
            top: click_y - top - size / 2.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_open() {
        let mut acc = Accordion::new(3);
        assert_eq!(
            acc.toggle(0),
            AccordionChange {
                closed: None,
                opened: Some(0)
            }
        );
        assert_eq!(
            acc.toggle(2),
            AccordionChange {
                closed: Some(0),
                opened: Some(2)
            }
        );
        assert!(acc.is_open(2) && !acc.is_open(0));
    }

    #[test]
    fn test_toggle_open_item_closes_it() {
        let mut acc = Accordion::new(2);
        acc.toggle(1);
        let change = acc.toggle(1);
        assert_eq!(change.closed, Some(1));
        assert_eq!(change.opened, None);
        assert_eq!(acc.open_item(), None);
    }

    #[test]
    fn test_out_of_range_ignored() {
        let mut acc = Accordion::new(1);
        assert_eq!(acc.toggle(5), AccordionChange::default());
        assert_eq!(acc.open_item(), None);
    }

    #[test]
    fn test_reveal_delays() {
        let delays: Vec<_> = reveal_delays(3).collect();
        assert_eq!(delays, vec![0.0, 100.0, 200.0]);
    }

    #[test]
    fn test_ripple_centred_on_click() {
        let ripple = Ripple::at(150.0, 40.0, (100.0, 20.0, 300.0, 60.0));
        assert_eq!(ripple.size, 300.0);
        assert_eq!(ripple.left, -100.0);
        assert_eq!(ripple.top, -130.0);
    }
}
