//! Routed pages.

mod home;
mod model_hub;
mod platform_page;
mod showcase;
mod use_case_dashboard;

pub use home::HomePage;
pub use platform_page::{NotFound, PlatformRoute};
