#[cfg(feature = "hydrate")]
pub mod effects;
pub mod pages;

pub use pages::{DemoPage, LandingPage, NotFoundPage, PageStyles};
