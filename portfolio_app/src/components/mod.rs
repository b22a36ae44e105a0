mod views;
pub mod widgets;

pub use views::{HomePage, NotFound, PlatformRoute};
