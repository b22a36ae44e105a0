//! Canned notifications.

use leptos::prelude::*;
use portfolio_common::{AlertEntry, Icon};

use super::Glyph;
use crate::live::{local_time, per_tick};

/// Card listing a use case's alerts, newest styling first.
#[component]
pub fn AlertList(
    #[prop(into)] heading: String,
    heading_icon: Icon,
    #[prop(into)] color: String,
    alerts: Vec<AlertEntry>,
    /// Second line of every entry, e.g. "Smart Grid Management System"
    #[prop(into)] source: String,
    /// Live tick counter; timestamps refresh on every change
    #[prop(into, default = Signal::stored(0))] tick: Signal<u64>,
) -> impl IntoView {
    let count = alerts.len();
    let time = per_tick(tick, local_time);

    view! {
        <section class="bg-white rounded-xl shadow-sm border border-slate-100 mb-8">
            <header class="flex items-center gap-3 px-5 py-4 border-b border-slate-100">
                <div class="w-10 h-10 rounded-full flex items-center justify-center text-white" style=format!("background-color: {};", color)>
                    <Glyph icon=heading_icon/>
                </div>
                <h3 class="text-lg font-semibold text-slate-800">{heading}</h3>
            </header>
            <ul class="px-5 py-2">
                {alerts.into_iter().enumerate().map(|(index, alert)| {
                    let (accent, _) = alert.kind.palette();
                    view! {
                        <li class={if index + 1 < count { "flex items-start gap-4 py-3 border-b border-slate-100" } else { "flex items-start gap-4 py-3" }}>
                            <span class="text-xl" style=format!("color: {};", accent)>
                                <Glyph icon=alert.kind.icon()/>
                            </span>
                            <div>
                                <p class="text-sm text-slate-800">{alert.message}</p>
                                <p class="text-xs text-slate-500">
                                    {let source = source.clone(); move || format!("{} - {}", time.get(), source)}
                                </p>
                            </div>
                        </li>
                    }
                }).collect_view()}
            </ul>
        </section>
    }
}

/// Single coloured banner with an optional bold lead-in.
#[component]
pub fn AlertBanner(alert: AlertEntry) -> impl IntoView {
    let (accent, background) = alert.kind.palette();

    view! {
        <div
            class="flex items-start gap-3 rounded-lg px-4 py-3 mb-4 border"
            style=format!("background-color: {}; border-color: {}40; color: {};", background, accent, accent)
        >
            <Glyph icon=alert.kind.icon() class="text-lg"/>
            <p class="text-sm text-slate-800">
                {alert.headline.map(|headline| view! { <strong class="mr-1">{headline}</strong> })}
                {alert.message}
            </p>
        </div>
    }
}
