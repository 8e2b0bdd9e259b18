//! Browser side of the visual effects
//!
//! Thin glue between the DOM and the logic in `crate::core`. Only compiled
//! for the hydrate (WebAssembly) build.

mod controller;
mod counter;
pub mod dom;
mod feedback;
mod parallax;
mod particles;
mod rain;
mod reveal;

pub use controller::{VisualEffects, install};
