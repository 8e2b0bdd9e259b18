//! Page lifecycle handling for the effects controller
//!
//! A `pagehide` only ends the effects when the page is discarded. Pages that
//! go into the back-forward cache keep their timers and listeners (the browser
//! freezes them) and pick up where they left off on `pageshow`.

/// `pagehide` / `pageshow` as seen by the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageTransition {
    /// `persisted` when the page is entering the back-forward cache
    Hide { persisted: bool },
    /// `persisted` when the page is restored from the back-forward cache
    Show { persisted: bool },
}

/// What the controller does in response to a [`PageTransition`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleAction {
    Keep,
    /// Release every timer, listener and observer
    Dispose,
    /// Clear state left over from before the page was cached
    Resume,
}

impl PageTransition {
    pub fn action(self) -> LifecycleAction {
        match self {
            PageTransition::Hide { persisted: false } => LifecycleAction::Dispose,
            PageTransition::Hide { persisted: true } => LifecycleAction::Keep,
            PageTransition::Show { persisted: true } => LifecycleAction::Resume,
            PageTransition::Show { persisted: false } => LifecycleAction::Keep,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discarded_page_disposes() {
        assert_eq!(
            PageTransition::Hide { persisted: false }.action(),
            LifecycleAction::Dispose
        );
    }

    #[test]
    fn test_cached_page_keeps_effects() {
        assert_eq!(
            PageTransition::Hide { persisted: true }.action(),
            LifecycleAction::Keep
        );
        assert_eq!(
            PageTransition::Show { persisted: true }.action(),
            LifecycleAction::Resume
        );
    }

    #[test]
    fn test_first_show_is_ignored() {
        assert_eq!(
            PageTransition::Show { persisted: false }.action(),
            LifecycleAction::Keep
        );
    }
}
