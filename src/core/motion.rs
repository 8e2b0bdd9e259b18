//! Named motion presets
//!
//! Every keyframe curve the effects use is defined here once and referenced
//! by name from inline styles. The whole set is installed as a single style
//! block with id [`MOTION_STYLE_ID`].

/// DOM id of the `<style>` block holding all motion presets
pub const MOTION_STYLE_ID: &str = "fx-motion";

/// Class added to revealed elements
pub const REVEALED_CLASS: &str = "animate-in";

/// Keyframe curves available to the effects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MotionPreset {
    /// Four-waypoint drift, rotate and fade loop for floating particles
    Float,
    /// Rise into place while fading in
    SlideUp,
    /// Hover ripple expanding out of a button
    Ripple,
    /// Click burst particle flying along `--fx-dx` / `--fx-dy`
    Burst,
    /// Full-screen explore flash
    Explode,
}

impl MotionPreset {
    pub const ALL: [MotionPreset; 5] = [
        MotionPreset::Float,
        MotionPreset::SlideUp,
        MotionPreset::Ripple,
        MotionPreset::Burst,
        MotionPreset::Explode,
    ];

    /// Keyframes name used in `animation:` declarations
    pub fn name(self) -> &'static str {
        match self {
            MotionPreset::Float => "fx-float",
            MotionPreset::SlideUp => "fx-slide-up",
            MotionPreset::Ripple => "fx-ripple",
            MotionPreset::Burst => "fx-burst",
            MotionPreset::Explode => "fx-explode",
        }
    }

    fn frames(self) -> &'static str {
        match self {
            MotionPreset::Float => {
                "0%, 100% { transform: translate(0, 0) rotate(0deg); opacity: 0.3; }
    25% { transform: translate(100px, -50px) rotate(90deg); opacity: 0.7; }
    50% { transform: translate(50px, -100px) rotate(180deg); opacity: 0.4; }
    75% { transform: translate(-50px, -50px) rotate(270deg); opacity: 0.8; }"
            }
            MotionPreset::SlideUp => {
                "from { opacity: 0; transform: translateY(50px); }
    to { opacity: 1; transform: translateY(0); }"
            }
            MotionPreset::Ripple => "to { transform: scale(4); opacity: 0; }",
            MotionPreset::Burst => {
                "from { transform: translate(0, 0) scale(1); opacity: 1; }
    to { transform: translate(var(--fx-dx), var(--fx-dy)) scale(0); opacity: 0; }"
            }
            MotionPreset::Explode => {
                "0% { transform: translate(-50%, -50%) scale(0); opacity: 1; }
    100% { transform: translate(-50%, -50%) scale(15); opacity: 0; }"
            }
        }
    }

    /// `@keyframes` rule for this preset
    pub fn keyframes(self) -> String {
        format!("@keyframes {} {{\n    {}\n}}\n", self.name(), self.frames())
    }

    /// `animation` shorthand running this preset once
    pub fn once(self, duration_ms: u32, delay_ms: u32, easing: &str, fill: &str) -> String {
        format!(
            "{} {}ms {} {}ms {}",
            self.name(),
            duration_ms,
            easing,
            delay_ms,
            fill
        )
        .trim_end()
        .to_string()
    }
}

/// Style rules for revealable elements
const REVEAL_RULES: &str = ".animate-in { animation: fx-slide-up 0.8s ease-out both; }
.feature-card, .package-box { opacity: 0; transform: translateY(50px); }
.feature-card.animate-in, .package-box.animate-in { opacity: 1; transform: translateY(0); }
";

/// Complete motion stylesheet: every preset plus the reveal rules
pub fn motion_stylesheet() -> String {
    let mut css: String = MotionPreset::ALL.iter().map(|p| p.keyframes()).collect();
    css.push_str(REVEAL_RULES);
    css
}

/// Document that can hold identified style blocks
pub trait StyleHost {
    fn has_style(&self, id: &str) -> bool;
    fn insert_style(&self, id: &str, css: &str);
}

/// Install the motion stylesheet unless it is already present.
///
/// Returns `true` when a new block was inserted.
pub fn register_motion_presets(host: &impl StyleHost) -> bool {
    if host.has_style(MOTION_STYLE_ID) {
        return false;
    }
    host.insert_style(MOTION_STYLE_ID, &motion_stylesheet());
    true
}
