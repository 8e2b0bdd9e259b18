//! Effects configuration.
//!
//! Defaults reproduce the stock landing page. The server can override any
//! field through `FX_*` environment variables (see [`EffectsConfig::from_env`]);
//! the resulting config is embedded into the page as JSON and picked up by the
//! client bundle during hydration.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use super::error::FxError;

/// DOM id of the `<script type="application/json">` element carrying the config
pub const CONFIG_ELEMENT_ID: &str = "fx-config";

/// Allowed number of floating particles
pub const PARTICLE_COUNT_RANGE: RangeInclusive<usize> = 20..=30;

/// Allowed number of particles per click burst
pub const BURST_PARTICLES_RANGE: RangeInclusive<usize> = 1..=24;

/// Tunable timings and counts for every effect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectsConfig {
    /// Rain redraw interval in milliseconds
    pub rain_tick_ms: u32,
    /// Glyph cell size (and font size) of the rain in pixels
    pub glyph_size: u32,
    /// Probability that a column past the bottom edge restarts on a given tick
    pub rain_reset_chance: f64,

    /// Number of floating particles created at startup
    pub particle_count: usize,

    /// IntersectionObserver visibility threshold for reveals
    pub reveal_threshold: f64,
    /// IntersectionObserver root margin for reveals
    pub reveal_root_margin: String,
    /// Delay between consecutive feature card slide-ups
    pub card_stagger_ms: u32,

    /// Ripple lifetime
    pub ripple_ms: u32,
    /// Number of particles in a click burst
    pub burst_particles: usize,
    /// Distance travelled by each burst particle in pixels
    pub burst_distance: f64,
    /// Burst particle lifetime
    pub burst_ms: u32,
    /// Explosion overlay animation length
    pub explode_ms: u32,
    /// Delay before the explore button navigates away
    pub navigate_delay_ms: u32,

    /// Counter ramp length
    pub counter_duration_ms: u32,
    /// Counter update interval
    pub counter_tick_ms: u32,

    /// Pointer parallax strength per orb index
    pub parallax_factor: f64,
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            rain_tick_ms: 35,
            glyph_size: 14,
            rain_reset_chance: 0.025,
            particle_count: 25,
            reveal_threshold: 0.1,
            reveal_root_margin: "0px 0px -50px 0px".to_string(),
            card_stagger_ms: 200,
            ripple_ms: 600,
            burst_particles: 6,
            burst_distance: 40.0,
            burst_ms: 600,
            explode_ms: 800,
            navigate_delay_ms: 600,
            counter_duration_ms: 2000,
            counter_tick_ms: 16,
            parallax_factor: 0.05,
        }
    }
}

impl EffectsConfig {
    /// Build a config from defaults overridden by `FX_*` environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    /// Unparseable values are ignored with a warning.
    #[cfg(feature = "ssr")]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from defaults overridden by values from `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        fn apply<T: std::str::FromStr>(
            lookup: &impl Fn(&str) -> Option<String>,
            key: &str,
            slot: &mut T,
        ) {
            if let Some(raw) = lookup(key) {
                match raw.trim().parse() {
                    Ok(value) => *slot = value,
                    Err(_) => tracing::warn!("ignoring unparseable {}={:?}", key, raw),
                }
            }
        }

        let mut config = Self::default();
        apply(&lookup, "FX_RAIN_TICK_MS", &mut config.rain_tick_ms);
        apply(&lookup, "FX_GLYPH_SIZE", &mut config.glyph_size);
        apply(&lookup, "FX_RAIN_RESET_CHANCE", &mut config.rain_reset_chance);
        apply(&lookup, "FX_PARTICLE_COUNT", &mut config.particle_count);
        apply(&lookup, "FX_REVEAL_THRESHOLD", &mut config.reveal_threshold);
        apply(&lookup, "FX_REVEAL_ROOT_MARGIN", &mut config.reveal_root_margin);
        apply(&lookup, "FX_CARD_STAGGER_MS", &mut config.card_stagger_ms);
        apply(&lookup, "FX_RIPPLE_MS", &mut config.ripple_ms);
        apply(&lookup, "FX_BURST_PARTICLES", &mut config.burst_particles);
        apply(&lookup, "FX_BURST_DISTANCE", &mut config.burst_distance);
        apply(&lookup, "FX_BURST_MS", &mut config.burst_ms);
        apply(&lookup, "FX_EXPLODE_MS", &mut config.explode_ms);
        apply(&lookup, "FX_NAVIGATE_DELAY_MS", &mut config.navigate_delay_ms);
        apply(&lookup, "FX_COUNTER_DURATION_MS", &mut config.counter_duration_ms);
        apply(&lookup, "FX_COUNTER_TICK_MS", &mut config.counter_tick_ms);
        apply(&lookup, "FX_PARALLAX_FACTOR", &mut config.parallax_factor);
        config
    }

    /// Check value ranges the effects rely on.
    pub fn validate(&self) -> Result<(), FxError> {
        if self.glyph_size == 0 {
            return Err(FxError::InvalidConfig("glyph_size must be positive".into()));
        }
        if self.rain_tick_ms == 0 || self.counter_tick_ms == 0 {
            return Err(FxError::InvalidConfig("tick intervals must be positive".into()));
        }
        if !(0.0..=1.0).contains(&self.rain_reset_chance) {
            return Err(FxError::InvalidConfig(
                "rain_reset_chance must be within 0..=1".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.reveal_threshold) {
            return Err(FxError::InvalidConfig(
                "reveal_threshold must be within 0..=1".into(),
            ));
        }
        if !PARTICLE_COUNT_RANGE.contains(&self.particle_count) {
            return Err(FxError::InvalidConfig(format!(
                "particle_count must be within {:?}",
                PARTICLE_COUNT_RANGE
            )));
        }
        if !BURST_PARTICLES_RANGE.contains(&self.burst_particles) {
            return Err(FxError::InvalidConfig(format!(
                "burst_particles must be within {:?}",
                BURST_PARTICLES_RANGE
            )));
        }
        Ok(())
    }

    /// Serialize for embedding into the page
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    /// Parse and validate the embedded JSON. Missing fields take their defaults.
    pub fn from_json(raw: &str) -> Result<Self, FxError> {
        let config: Self = serde_json::from_str(raw)
            .map_err(|e| FxError::InvalidConfig(format!("malformed effects config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }
}
