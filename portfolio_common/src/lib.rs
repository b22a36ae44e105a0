//! Data model and view-independent logic for the AI platforms portfolio.
//!
//! Everything the front-end renders lives here as plain Rust: the platform
//! catalog with its literal datasets, the tab and category state, chart
//! validation, the live-tick state machines and the route table. None of it
//! touches the browser, so all of it is testable on the host.
//!
//! # Architecture
//!
//! - `portfolio_common` - this crate
//! - `portfolio_app` - Leptos client that renders the catalog
//!
//! # Usage
//!
//! ```rust
//! use portfolio_common::{AppRoute, Catalog, PlatformId, TabSelection};
//!
//! let catalog = Catalog::load().unwrap();
//! let route = AppRoute::resolve("/grid-smart-pro").unwrap();
//! assert_eq!(route, AppRoute::Platform(PlatformId::GridSmartPro));
//! let platform = catalog.platform(PlatformId::GridSmartPro).unwrap();
//! let tabs = TabSelection::new(platform.content.tab_count());
//! assert_eq!(tabs.index(), 0);
//! ```

mod alert;
mod chart;
mod config;
mod data;
mod error;
mod icon;
mod live;
mod metric;
mod model_hub;
mod platform;
mod plot;
mod routes;
mod selection;
mod use_case;

pub use alert::*;
pub use chart::*;
pub use config::*;
pub use error::*;
pub use icon::*;
pub use live::*;
pub use metric::*;
pub use model_hub::*;
pub use platform::*;
pub use plot::*;
pub use routes::*;
pub use selection::*;
pub use use_case::*;

/// Static copy of the home page.
pub mod home {
    pub use crate::data::home::*;
}
