//! Button feedback geometry and timing
//!
//! Everything the delegated button listener needs to decide, without touching
//! the DOM: which behavior a pointer event maps to, where a ripple goes, which
//! way burst particles fly, and when the explore flash hands over to navigation.

use std::f64::consts::TAU;

use super::motion::MotionPreset;

/// Buttons that get hover and click feedback
pub const BUTTON_SELECTOR: &str = ".btn";

/// Id of the button that flashes the screen before navigating
pub const EXPLORE_BUTTON_ID: &str = "exploreBtn";

/// Pointer interactions the delegated listener reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interaction {
    /// Pointer entered the button from outside it
    Enter,
    Click,
}

/// Feedback to run for one interaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonAction {
    Ripple,
    Burst,
    /// Burst followed by the explore flash and navigation
    Explore,
}

/// Map an interaction on a `.btn` to its feedback.
///
/// `is_explore` is whether the button is the designated explore button.
pub fn classify(interaction: Interaction, is_explore: bool) -> ButtonAction {
    match (interaction, is_explore) {
        (Interaction::Enter, _) => ButtonAction::Ripple,
        (Interaction::Click, false) => ButtonAction::Burst,
        (Interaction::Click, true) => ButtonAction::Explore,
    }
}

/// Bounding box of a button in viewport coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Size and placement of a ripple inside its button
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ripple {
    pub size: f64,
    pub left: f64,
    pub top: f64,
}

impl Ripple {
    /// Ripple covering the button, centered on the pointer entry point
    pub fn at(rect: Rect, client_x: f64, client_y: f64) -> Self {
        let size = rect.width.max(rect.height);
        Self {
            size,
            left: client_x - rect.left - size / 2.0,
            top: client_y - rect.top - size / 2.0,
        }
    }

    pub fn style(&self, duration_ms: u32) -> String {
        format!(
            "position: absolute; border-radius: 50%; background: rgba(255, 255, 255, 0.6); \
             transform: scale(0); pointer-events: none; \
             width: {size}px; height: {size}px; left: {left}px; top: {top}px; animation: {anim};",
            size = self.size,
            left = self.left,
            top = self.top,
            anim = MotionPreset::Ripple.once(duration_ms, 0, "ease-out", ""),
        )
    }
}

/// End offsets of `count` burst particles spread evenly around a circle
pub fn burst_offsets(count: usize, distance: f64) -> Vec<(f64, f64)> {
    (0..count)
        .map(|i| {
            let angle = i as f64 / count as f64 * TAU;
            (angle.cos() * distance, angle.sin() * distance)
        })
        .collect()
}

/// Inline style for a burst particle flying to (`dx`, `dy`)
pub fn burst_particle_style(dx: f64, dy: f64, duration_ms: u32) -> String {
    format!(
        "position: absolute; width: 4px; height: 4px; background: rgba(255, 255, 255, 0.8); \
         border-radius: 50%; left: 50%; top: 50%; pointer-events: none; \
         --fx-dx: {dx:.2}px; --fx-dy: {dy:.2}px; animation: {anim};",
        anim = MotionPreset::Burst.once(duration_ms, 0, "ease-out", "forwards"),
    )
}

/// Inline style for the explore flash overlay
pub fn explosion_style(duration_ms: u32) -> String {
    format!(
        "position: fixed; top: 50%; left: 50%; width: 100px; height: 100px; \
         background: radial-gradient(circle, rgba(255,255,255,0.8), transparent 70%); \
         border-radius: 50%; transform: translate(-50%, -50%) scale(0); \
         pointer-events: none; z-index: 10000; animation: {};",
        MotionPreset::Explode.once(duration_ms, 0, "ease-out", "forwards"),
    )
}

/// What a click on the explore button should do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExploreStep {
    /// Show the overlay for `overlay_ms`, then remove it and navigate after
    /// `navigate_after_ms`
    Flash {
        overlay_ms: u32,
        navigate_after_ms: u32,
    },
    /// A navigation is already pending, only burst
    BurstOnly,
}

/// Explore button state. At most one navigation is pending at a time.
///
/// The overlay animation is `flash_ms` long but navigation cuts it short at
/// `navigate_ms`: the overlay is removed and the page navigates in the same step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExploreGuard {
    flash_ms: u32,
    navigate_ms: u32,
    pending: bool,
}

impl ExploreGuard {
    pub fn new(flash_ms: u32, navigate_ms: u32) -> Self {
        Self {
            flash_ms,
            navigate_ms,
            pending: false,
        }
    }

    /// Register a click and decide what it does
    pub fn click(&mut self) -> ExploreStep {
        if self.pending {
            return ExploreStep::BurstOnly;
        }
        self.pending = true;
        ExploreStep::Flash {
            overlay_ms: self.flash_ms,
            navigate_after_ms: self.navigate_ms.min(self.flash_ms),
        }
    }

    /// The navigation could not be scheduled; the next click tries again
    pub fn abort(&mut self) {
        self.pending = false;
    }

    /// The page was restored from the back-forward cache after navigating away
    pub fn reset(&mut self) {
        if self.pending {
            tracing::debug!("explore navigation cleared on restore");
        }
        self.pending = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_classify() {
        assert_eq!(classify(Interaction::Enter, false), ButtonAction::Ripple);
        assert_eq!(classify(Interaction::Enter, true), ButtonAction::Ripple);
        assert_eq!(classify(Interaction::Click, false), ButtonAction::Burst);
        assert_eq!(classify(Interaction::Click, true), ButtonAction::Explore);
    }

    #[test]
    fn test_ripple_centered_on_pointer() {
        let rect = Rect {
            left: 100.0,
            top: 50.0,
            width: 120.0,
            height: 40.0,
        };
        let ripple = Ripple::at(rect, 130.0, 60.0);

        assert_eq!(ripple.size, 120.0);
        assert_eq!(ripple.left, 130.0 - 100.0 - 60.0);
        assert_eq!(ripple.top, 60.0 - 50.0 - 60.0);
        // centre of the circle lands on the entry point
        assert_eq!(rect.left + ripple.left + ripple.size / 2.0, 130.0);
        assert_eq!(rect.top + ripple.top + ripple.size / 2.0, 60.0);
    }

    #[test]
    fn test_ripple_uses_larger_dimension() {
        let tall = Rect {
            left: 0.0,
            top: 0.0,
            width: 30.0,
            height: 90.0,
        };
        assert_eq!(Ripple::at(tall, 0.0, 0.0).size, 90.0);
    }

    #[test]
    fn test_ripple_style() {
        let style = Ripple {
            size: 80.0,
            left: -10.0,
            top: 5.0,
        }
        .style(600);
        assert!(style.contains("width: 80px"));
        assert!(style.contains("left: -10px"));
        assert!(style.contains("animation: fx-ripple 600ms ease-out 0ms;"));
    }

    #[test]
    fn test_burst_offsets_evenly_spaced() {
        let offsets = burst_offsets(6, 40.0);
        assert_eq!(offsets.len(), 6);

        for (dx, dy) in &offsets {
            assert!(((dx * dx + dy * dy).sqrt() - 40.0).abs() < EPS);
        }
        assert!((offsets[0].0 - 40.0).abs() < EPS);
        assert!(offsets[0].1.abs() < EPS);
        assert!((offsets[3].0 + 40.0).abs() < EPS);

        let sum_x: f64 = offsets.iter().map(|o| o.0).sum();
        let sum_y: f64 = offsets.iter().map(|o| o.1).sum();
        assert!(sum_x.abs() < EPS && sum_y.abs() < EPS);
    }

    #[test]
    fn test_burst_style_carries_direction() {
        let style = burst_particle_style(40.0, -20.0, 600);
        assert!(style.contains("--fx-dx: 40.00px"));
        assert!(style.contains("--fx-dy: -20.00px"));
        assert!(style.contains("fx-burst 600ms"));
    }

    #[test]
    fn test_explore_navigates_once() {
        let mut guard = ExploreGuard::new(800, 600);

        assert_eq!(
            guard.click(),
            ExploreStep::Flash {
                overlay_ms: 800,
                navigate_after_ms: 600,
            }
        );
        // clicks while the navigation is pending only burst
        assert_eq!(guard.click(), ExploreStep::BurstOnly);
        assert_eq!(guard.click(), ExploreStep::BurstOnly);
    }

    #[test]
    fn test_explore_retries_after_abort() {
        let mut guard = ExploreGuard::new(800, 600);

        assert!(matches!(guard.click(), ExploreStep::Flash { .. }));
        guard.abort();
        assert!(matches!(guard.click(), ExploreStep::Flash { .. }));
    }

    #[test]
    fn test_explore_overlay_removed_before_it_finishes() {
        let mut guard = ExploreGuard::new(400, 600);

        // navigation never waits past the end of the overlay animation
        assert_eq!(
            guard.click(),
            ExploreStep::Flash {
                overlay_ms: 400,
                navigate_after_ms: 400,
            }
        );
    }

    #[test]
    fn test_explore_reset_rearms() {
        let mut guard = ExploreGuard::new(800, 600);

        guard.click();
        guard.reset();
        assert!(matches!(guard.click(), ExploreStep::Flash { .. }));
    }

    #[test]
    fn test_explosion_style() {
        let style = explosion_style(800);
        assert!(style.contains("position: fixed"));
        assert!(style.contains("fx-explode 800ms ease-out 0ms forwards"));
    }
}
