//! Chart dashboards: PredictiveOil Pro, GridSmart Pro and RiskGuard Pro.

use leptos::prelude::*;
use portfolio_common::{DashboardConfig, LiveTick, TabSelection, UseCase, UseCaseDashboard};

use crate::components::widgets::{AlertList, ChartCard, Glyph, LiveBadge, LoadGauge, MetricCard, TabBar};
use crate::live::{use_interval, MathRandom};

#[component]
pub fn UseCaseDashboardView(dashboard: &'static UseCaseDashboard, color: &'static str) -> impl IntoView {
    let config = use_context::<DashboardConfig>().unwrap_or_default();
    let chrome = &dashboard.chrome;

    let tabs = RwSignal::new(TabSelection::new(dashboard.use_cases.len()));
    let live = RwSignal::new(LiveTick::new());
    use_interval(config.live_tick(), move || live.update(LiveTick::tick));

    let load = if dashboard.load_readout {
        match config.load_jitter() {
            Ok(jitter) => Some(RwSignal::new(jitter)),
            Err(e) => {
                log::error!("Grid load readout disabled: {}", e);
                None
            }
        }
    } else {
        None
    };
    if let Some(load) = load.filter(|_| config.demo_jitter) {
        use_interval(config.load_tick(), move || {
            load.update(|l| {
                l.advance(&mut MathRandom);
            })
        });
    }

    let on_select = Callback::new(move |k: usize| {
        let mut next = tabs.get_untracked();
        match next.select(k) {
            Ok(true) => {
                tabs.set(next);
                if let Some(use_case) = next.pick(&dashboard.use_cases) {
                    log::info!("Use case {} selected: {}", k, use_case.title);
                }
            }
            Ok(false) => {}
            Err(e) => log::warn!("Ignoring tab selection: {}", e),
        }
    });

    let tab_labels = dashboard
        .use_cases
        .iter()
        .map(|uc| (uc.title.clone(), Some(uc.icon)))
        .collect::<Vec<_>>();
    let current = move || tabs.with(|t| t.pick(&dashboard.use_cases));
    let tick = Signal::derive(move || live.with(LiveTick::ticks));

    view! {
        <div class="flex flex-wrap items-center justify-between gap-4 mb-6">
            <p class="text-sm text-slate-500">
                {format!("{} AI use cases", dashboard.use_cases.len())}
            </p>
            <LiveBadge label=chrome.live_label icon=chrome.live_icon live=Signal::derive(move || live.with(LiveTick::is_live))/>
        </div>

        <div class="bg-white rounded-lg shadow-sm mb-6">
            <TabBar tabs=tab_labels selected=Signal::derive(move || tabs.with(TabSelection::index)) on_select accent=color/>
        </div>

        {move || current().map(|use_case| view! { <UseCasePanel use_case dashboard tick/> })}

        {load.map(|load| view! { <LoadGauge load/> })}

        <ImpactCard dashboard color/>
    }
}

#[component]
fn UseCasePanel(
    use_case: &'static UseCase,
    dashboard: &'static UseCaseDashboard,
    tick: Signal<u64>,
) -> impl IntoView {
    let chrome = &dashboard.chrome;
    let color = use_case.color.as_str();
    let source = format!("{}{}", use_case.title, chrome.alert_source_suffix);

    view! {
        <div class="bg-white rounded-xl shadow-sm border-l-4 p-6 mb-6 flex items-start gap-4" style=format!("border-color: {};", color)>
            <div class="w-14 h-14 rounded-xl flex items-center justify-center text-3xl text-white shrink-0" style=format!("background-color: {};", color)>
                <Glyph icon=use_case.icon/>
            </div>
            <div>
                <h2 class="text-2xl font-bold text-slate-900 mb-1">{use_case.title.clone()}</h2>
                <p class="text-slate-600">{use_case.description.clone()}</p>
            </div>
        </div>

        <div class="grid gap-5 sm:grid-cols-2 lg:grid-cols-4 mb-8">
            {use_case.metrics.iter().map(|metric| view! {
                <MetricCard metric=metric.clone() fallback_color=color tick/>
            }).collect_view()}
        </div>

        <div class="grid gap-6 lg:grid-cols-2 mb-8">
            {use_case.charts.iter().map(|spec| view! {
                <ChartCard spec=spec.clone() color=color/>
            }).collect_view()}
        </div>

        <AlertList
            heading=chrome.alerts_heading
            heading_icon=chrome.alerts_icon
            color=color
            alerts=use_case.alerts.clone()
            source
            tick
        />
    }
}

#[component]
fn ImpactCard(dashboard: &'static UseCaseDashboard, color: &'static str) -> impl IntoView {
    let chrome = &dashboard.chrome;

    view! {
        <section class="rounded-xl p-6 border" style=format!("background-color: {}0d; border-color: {}33;", color, color)>
            <div class="flex items-center gap-3 mb-5">
                <Glyph icon=chrome.impact_icon class="text-2xl"/>
                <h3 class="text-xl font-semibold" style=format!("color: {};", color)>{chrome.impact_heading}</h3>
            </div>
            <div class="grid gap-6 md:grid-cols-3">
                {chrome.impact_notes.iter().map(|(heading, body)| view! {
                    <div>
                        <h4 class="font-semibold text-slate-800 mb-1">{*heading}</h4>
                        <p class="text-sm text-slate-600">{*body}</p>
                    </div>
                }).collect_view()}
            </div>
        </section>
    }
}
