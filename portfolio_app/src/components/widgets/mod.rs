//! Presentation primitives shared by every platform view.
//!
//! - **DashboardHeader**: title bar with demo chip, home button and account menu
//! - **TabBar**: scrollable tab strip
//! - **MetricCard**: KPI tile with trend chip
//! - **ChartCard**: titled SVG chart with a full-screen, export and refresh menu
//! - **AlertList** / **AlertBanner**: canned notifications
//! - **LiveBadge**: blinking LIVE chip
//! - **LoadGauge**: radial readout for the jittering grid load

mod alert_list;
mod chart_card;
mod chart_svg;
mod dashboard_header;
mod live_badge;
mod load_gauge;
mod metric_card;
mod tab_bar;

pub use alert_list::{AlertBanner, AlertList};
pub use chart_card::ChartCard;
pub use chart_svg::ChartSvg;
pub use dashboard_header::DashboardHeader;
pub use live_badge::LiveBadge;
pub use load_gauge::LoadGauge;
pub use metric_card::MetricCard;
pub use tab_bar::TabBar;

use leptos::prelude::*;
use portfolio_common::Icon;

/// Inline glyph for an [`Icon`].
#[component]
pub fn Glyph(
    icon: Icon,
    #[prop(default = "")] class: &'static str,
) -> impl IntoView {
    view! {
        <span class=format!("inline-flex items-center justify-center leading-none {}", class) aria-hidden="true">
            {icon.glyph()}
        </span>
    }
}
