//! One-shot reveal bookkeeping

use super::motion::MotionPreset;

/// Elements that fade in when scrolled into view
pub const REVEAL_SELECTOR: &str = ".features, .feature-card, .stat-item, .package-box";

/// Container whose cards slide up one after another
pub const FEATURES_CLASS: &str = "features";

/// Cards inside the features container
pub const FEATURE_CARD_SELECTOR: &str = ".feature-card";

/// Pause between the container reveal and the first card animation
pub const CARD_SETTLE_MS: u32 = 100;

/// Duration of each card slide-up
pub const CARD_SLIDE_MS: u32 = 600;

/// Tracks which observed targets have been revealed.
///
/// A target moves from hidden to revealed exactly once.
#[derive(Debug, Clone, Default)]
pub struct RevealTracker {
    revealed: Vec<bool>,
}

impl RevealTracker {
    pub fn new(targets: usize) -> Self {
        Self {
            revealed: vec![false; targets],
        }
    }

    /// Mark `index` revealed. Returns `true` only on the first call for it.
    pub fn reveal(&mut self, index: usize) -> bool {
        match self.revealed.get_mut(index) {
            Some(flag) if !*flag => {
                *flag = true;
                tracing::debug!(index, "reveal target entered view");
                true
            }
            _ => false,
        }
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    /// Whether nothing is left to watch
    pub fn all_revealed(&self) -> bool {
        self.revealed.iter().all(|r| *r)
    }
}

/// Slide-up delay for each of `cards` feature cards
pub fn card_delays(cards: usize, stagger_ms: u32) -> Vec<u32> {
    (0..cards as u32).map(|i| i * stagger_ms).collect()
}

/// `animation` value for a card starting after `delay_ms`
pub fn card_animation(delay_ms: u32) -> String {
    MotionPreset::SlideUp.once(CARD_SLIDE_MS, delay_ms, "ease-out", "both")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveal_is_one_shot() {
        let mut tracker = RevealTracker::new(3);

        assert!(tracker.reveal(1));
        assert!(!tracker.reveal(1));
        assert!(tracker.is_revealed(1));
        assert!(!tracker.is_revealed(0));
        assert!(!tracker.all_revealed());
    }

    #[test]
    fn test_reveal_out_of_range() {
        let mut tracker = RevealTracker::new(1);
        assert!(!tracker.reveal(5));
        assert!(!tracker.is_revealed(5));
    }

    #[test]
    fn test_reveal_state_is_monotonic() {
        let mut tracker = RevealTracker::new(4);
        let sequence = [2, 0, 2, 3, 0, 1, 1, 3];
        let mut seen = [false; 4];
        let mut triggers = 0;

        for index in sequence {
            if tracker.reveal(index) {
                triggers += 1;
            }
            seen[index] = true;
            // once revealed, always revealed
            for (i, was_seen) in seen.iter().enumerate() {
                assert_eq!(tracker.is_revealed(i), *was_seen);
            }
        }

        assert_eq!(triggers, 4);
        assert!(tracker.all_revealed());
    }

    #[test]
    fn test_card_delays() {
        assert_eq!(card_delays(4, 200), vec![0, 200, 400, 600]);
        assert!(card_delays(0, 200).is_empty());
    }

    #[test]
    fn test_card_animation() {
        let animations: Vec<String> = card_delays(3, 200)
            .into_iter()
            .map(card_animation)
            .collect();
        assert_eq!(animations[0], "fx-slide-up 600ms ease-out 0ms both");
        assert_eq!(animations[2], "fx-slide-up 600ms ease-out 400ms both");
    }
}
