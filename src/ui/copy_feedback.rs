//! "Copied!" flip animation for the server address labels

/// Container pulse length
pub const PULSE_MS: f64 = 600.0;
/// One flip (out or in)
pub const FLIP_MS: f64 = 250.0;
/// How long "Copied!" stays up
pub const HOLD_MS: f64 = 2000.0;
/// Text shown after a successful copy
pub const COPIED_TEXT: &str = "Copied!";
/// CSS transition applied to the label while flipping
pub const FLIP_TRANSITION: &str = "transform 0.25s cubic-bezier(0.42, 0, 0.58, 1)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelPhase {
    /// Flipping away from the original text
    FlipOut,
    /// Showing "Copied!"
    Copied,
    /// Flipping away from "Copied!"
    FlipBack,
    /// Original text restored
    Restored,
}

impl LabelPhase {
    /// X rotation of the label in degrees
    pub fn rotation_deg(&self) -> f64 {
        match self {
            LabelPhase::FlipOut | LabelPhase::FlipBack => 90.0,
            LabelPhase::Copied | LabelPhase::Restored => 0.0,
        }
    }

    /// Text the label shows
    pub fn text<'a>(&self, original: &'a str) -> &'a str {
        match self {
            LabelPhase::Copied | LabelPhase::FlipBack => COPIED_TEXT,
            LabelPhase::FlipOut | LabelPhase::Restored => original,
        }
    }
}

/// Phase at `elapsed_ms` after a successful copy
pub fn phase_at(elapsed_ms: f64) -> LabelPhase {
    if elapsed_ms < FLIP_MS {
        LabelPhase::FlipOut
    } else if elapsed_ms < FLIP_MS + HOLD_MS {
        LabelPhase::Copied
    } else if elapsed_ms < FLIP_MS * 2.0 + HOLD_MS {
        LabelPhase::FlipBack
    } else {
        LabelPhase::Restored
    }
}

/// Container carries the `copying` class
pub fn is_pulsing(elapsed_ms: f64) -> bool {
    (0.0..PULSE_MS).contains(&elapsed_ms)
}

/// When each phase starts, for hosts that schedule one timer per change
pub fn schedule() -> [(f64, LabelPhase); 4] {
    [
        (0.0, LabelPhase::FlipOut),
        (FLIP_MS, LabelPhase::Copied),
        (FLIP_MS + HOLD_MS, LabelPhase::FlipBack),
        (FLIP_MS * 2.0 + HOLD_MS, LabelPhase::Restored),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeline() {
        assert_eq!(phase_at(0.0), LabelPhase::FlipOut);
        assert_eq!(phase_at(249.0), LabelPhase::FlipOut);
        assert_eq!(phase_at(250.0), LabelPhase::Copied);
        assert_eq!(phase_at(2249.0), LabelPhase::Copied);
        assert_eq!(phase_at(2250.0), LabelPhase::FlipBack);
        assert_eq!(phase_at(2500.0), LabelPhase::Restored);
    }

    #[test]
    fn test_schedule_matches_timeline() {
        for (at, phase) in schedule() {
            assert_eq!(phase_at(at), phase);
        }
    }

    #[test]
    fn test_label_text_and_rotation() {
        let original = "play.veldivia.net";
        assert_eq!(LabelPhase::FlipOut.text(original), original);
        assert_eq!(LabelPhase::Copied.text(original), "Copied!");
        assert_eq!(LabelPhase::FlipBack.rotation_deg(), 90.0);
        assert_eq!(LabelPhase::Restored.text(original), original);
        assert_eq!(LabelPhase::Restored.rotation_deg(), 0.0);
    }

    #[test]
    fn test_pulse_window() {
        assert!(is_pulsing(0.0));
        assert!(is_pulsing(599.0));
        assert!(!is_pulsing(600.0));
    }
}
