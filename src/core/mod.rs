//! Effect logic that does not depend on the DOM
//!
//! Each module here computes what an effect should look like; the browser
//! glue in `crate::ui::effects` only applies the results.

pub mod config;
pub mod counter;
pub mod error;
pub mod feedback;
pub mod lifecycle;
pub mod motion;
pub mod parallax;
pub mod particles;
pub mod rain;
pub mod reveal;

pub use config::EffectsConfig;
pub use error::FxError;
