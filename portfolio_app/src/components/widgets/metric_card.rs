//! KPI tile.

use leptos::prelude::*;
use portfolio_common::{DashboardConfig, Metric};

use super::Glyph;
use crate::live::{demo_fill, per_tick};

/// Metric tile: icon badge, trend chip, value, title and a decorative fill bar.
#[component]
pub fn MetricCard(
    metric: Metric,
    /// Tint used when the metric carries no colour of its own
    #[prop(into, default = "#2563eb".to_string())] fallback_color: String,
    /// Live tick counter; the fill bar redraws on every change
    #[prop(into, default = Signal::stored(0))] tick: Signal<u64>,
) -> impl IntoView {
    let config = use_context::<DashboardConfig>().unwrap_or_default();
    let color = metric.color_or(&fallback_color).to_string();
    let trend = metric.trend();
    let jitter = config.demo_jitter;
    let fill = per_tick(tick, move || demo_fill(jitter));
    let bar_color = color.clone();

    view! {
        <div class="h-full bg-white rounded-xl shadow-sm border border-slate-100 p-5 hover:shadow-md hover:-translate-y-0.5 transition-all">
            <div class="flex items-center justify-between mb-3">
                <div
                    class="w-11 h-11 rounded-lg flex items-center justify-center text-xl"
                    style=format!("background-color: {}1a; color: {};", color, color)
                >
                    <Glyph icon=metric.icon/>
                </div>
                <span
                    class="inline-flex items-center gap-1 text-xs font-semibold px-2 py-1 rounded-full"
                    style=format!("background-color: {}1a; color: {};", trend.color(), trend.color())
                >
                    {trend.arrow()}
                    {metric.change.clone()}
                </span>
            </div>
            <div class="text-2xl font-bold text-slate-900 mb-1">{metric.value.clone()}</div>
            <div class="text-sm text-slate-500">{metric.title.clone()}</div>
            {config.demo_jitter.then(move || view! {
                <div class="mt-3 h-1.5 bg-slate-100 rounded-full overflow-hidden">
                    <div
                        class="h-full rounded-full"
                        style=move || format!("width: {:.0}%; background-color: {};", fill.get(), bar_color)
                    ></div>
                </div>
            })}
        </div>
    }
}
