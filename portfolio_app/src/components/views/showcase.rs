//! Capability showcases: six tabs of KPI tiles, one alert and two capability cards.

use leptos::prelude::*;
use portfolio_common::{Capability, Icon, Showcase, ShowcaseTab, TabSelection};

use crate::components::widgets::{AlertBanner, MetricCard, TabBar};

#[component]
pub fn ShowcaseView(showcase: &'static Showcase, color: &'static str) -> impl IntoView {
    let tabs = RwSignal::new(TabSelection::new(showcase.tabs.len()));

    let on_select = Callback::new(move |k: usize| {
        let mut next = tabs.get_untracked();
        match next.select(k) {
            Ok(true) => {
                tabs.set(next);
                log::info!("Showcase tab {} selected", k);
            }
            Ok(false) => {}
            Err(e) => log::warn!("Ignoring tab selection: {}", e),
        }
    });

    let labels = showcase
        .tabs
        .iter()
        .map(|tab| (tab.label.clone(), None::<Icon>))
        .collect::<Vec<_>>();

    view! {
        <div class="text-center mb-8">
            <h2 class="text-3xl md:text-4xl font-bold mb-3" style=format!("color: {};", color)>{showcase.title}</h2>
            <p class="text-slate-600 max-w-3xl mx-auto">{showcase.subtitle}</p>
        </div>

        <div class="bg-white rounded-lg shadow-sm mb-8">
            <TabBar
                tabs=labels
                selected=Signal::derive(move || tabs.with(TabSelection::index))
                on_select
                accent=color
                centered=true
            />
        </div>

        {move || tabs.with(|t| t.pick(&showcase.tabs)).map(|tab| view! { <ShowcasePanel tab color/> })}
    }
}

#[component]
fn ShowcasePanel(tab: &'static ShowcaseTab, color: &'static str) -> impl IntoView {
    view! {
        <h3 class="text-2xl font-semibold text-slate-900 mb-2">{tab.title.clone()}</h3>
        <p class="text-slate-600 mb-6">{tab.description.clone()}</p>

        <div class="grid gap-5 sm:grid-cols-2 lg:grid-cols-4 mb-6">
            {tab.metrics.iter().map(|metric| view! {
                <MetricCard metric=metric.clone() fallback_color=color/>
            }).collect_view()}
        </div>

        <AlertBanner alert=tab.alert.clone()/>

        <div class="grid gap-6 md:grid-cols-2 mt-6">
            {tab.capabilities.iter().map(|capability| view! { <CapabilityCard capability/> }).collect_view()}
        </div>
    }
}

#[component]
fn CapabilityCard(capability: &'static Capability) -> impl IntoView {
    view! {
        <div class="bg-white rounded-xl shadow-sm border border-slate-100 p-6">
            <h4 class="text-lg font-semibold text-slate-900 mb-3">{capability.title.clone()}</h4>
            <div class="flex flex-wrap gap-2 mb-3">
                {capability.tags.iter().map(|(label, tone)| view! {
                    <span class=format!("text-xs px-2.5 py-0.5 rounded-full border {}", tone.chip_class())>
                        {label.clone()}
                    </span>
                }).collect_view()}
            </div>
            <p class="text-sm text-slate-600">{capability.body.clone()}</p>
        </div>
    }
}
