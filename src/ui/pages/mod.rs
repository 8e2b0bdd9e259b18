//! Application pages module
//!
//! - Landing page (home) carrying the visual effects
//! - Demo page the explore button navigates to
//! - Not found page

mod demo;
mod landing;
mod not_found;

pub use demo::DemoPage;
pub use landing::{LandingPage, PageStyles};
pub use not_found::NotFoundPage;
