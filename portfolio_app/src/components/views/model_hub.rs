//! AI Model Hub: two model collections with a category filter and a summary strip.

use leptos::prelude::*;
use portfolio_common::{
    empty_state_message, filter_models, performance_tone, AiModel, CategoryFilter, DashboardConfig,
    LiveTick, ModelHub, ModelStats, TabSelection, Tone,
};

use crate::components::widgets::{Glyph, TabBar};
use crate::live::use_interval;

fn bar_class(tone: Tone) -> &'static str {
    match tone {
        Tone::Success => "bg-green-500",
        Tone::Primary => "bg-blue-500",
        Tone::Warning => "bg-amber-500",
        Tone::Error => "bg-red-500",
        Tone::Secondary => "bg-purple-500",
        Tone::Info => "bg-sky-500",
    }
}

#[component]
pub fn ModelHubView(hub: &'static ModelHub, color: &'static str) -> impl IntoView {
    let config = use_context::<DashboardConfig>().unwrap_or_default();
    let tabs = RwSignal::new(TabSelection::with_category_filter(hub.tabs.len()));
    let live = RwSignal::new(LiveTick::new());
    use_interval(config.live_tick(), move || live.update(LiveTick::tick));

    let on_select = Callback::new(move |k: usize| {
        let mut next = tabs.get_untracked();
        match next.select(k) {
            Ok(true) => {
                tabs.set(next);
                log::info!("Model collection {} selected, filter reset", hub.tabs[k].label);
            }
            Ok(false) => {}
            Err(e) => log::warn!("Ignoring tab selection: {}", e),
        }
    });

    let set_filter = move |filter: CategoryFilter| {
        let mut next = tabs.get_untracked();
        match next.set_category(filter) {
            Ok(()) => {
                tabs.set(next);
                log::info!("Category filter: {}", filter.label());
            }
            Err(e) => log::warn!("{}", e),
        }
    };

    let labels = hub
        .tabs
        .iter()
        .map(|tab| (tab.label.to_string(), Some(tab.icon)))
        .collect::<Vec<_>>();
    let active_tab = move || tabs.with(|t| t.pick(&hub.tabs).copied());
    let filter = move || tabs.with(TabSelection::category);
    let seconds = config.live_tick().as_secs();

    view! {
        <div class="text-center mb-8">
            <h2 class="text-3xl md:text-4xl font-bold mb-2" style=format!("color: {};", color)>{hub.title}</h2>
            <p class="text-slate-600 mb-4">{hub.subtitle}</p>
            <span class="inline-flex items-center gap-2 px-3 py-1 rounded-full bg-emerald-50 text-emerald-700 text-sm border border-emerald-200">
                <span class=move || if live.with(LiveTick::is_live) { "w-2 h-2 rounded-full bg-emerald-500" } else { "w-2 h-2 rounded-full bg-emerald-200" }></span>
                {format!("Live tracking of trending models • Updated every {} seconds", seconds)}
                <span class="font-mono text-xs">{move || format!("#{}", live.with(LiveTick::ticks))}</span>
            </span>
        </div>

        <div class="bg-white rounded-lg shadow-sm mb-6">
            <TabBar
                tabs=labels
                selected=Signal::derive(move || tabs.with(TabSelection::index))
                on_select
                accent=color
                centered=true
            />
        </div>

        {move || active_tab().map(|tab| {
            let stats = ModelStats::of(tab.models);
            view! {
                <div class="grid gap-4 grid-cols-2 md:grid-cols-4 mb-6">
                    <StatTile label="Total Models" value=stats.total.to_string() color/>
                    <StatTile label="Trending" value=stats.trending.to_string() color="#f59e0b"/>
                    <StatTile label="Avg Performance" value=format!("{}%", stats.average_performance) color="#059669"/>
                    <StatTile label="Open Source" value=stats.open_source.to_string() color="#7c3aed"/>
                </div>
            }
        })}

        <div class="flex flex-wrap gap-2 mb-6">
            {CategoryFilter::CHOICES.into_iter().map(|choice| view! {
                <button
                    class=move || if filter() == choice {
                        "inline-flex items-center gap-1.5 px-3 py-1.5 rounded-full text-sm text-white"
                    } else {
                        "inline-flex items-center gap-1.5 px-3 py-1.5 rounded-full text-sm border border-slate-300 text-slate-700 hover:bg-slate-100"
                    }
                    style=move || if filter() == choice { format!("background-color: {};", color) } else { String::new() }
                    on:click=move |_| set_filter(choice)
                >
                    <Glyph icon=choice.icon()/>
                    {choice.label()}
                </button>
            }).collect_view()}
        </div>

        {move || active_tab().map(|tab| {
            let current = filter();
            let models = filter_models(tab.models, current);
            if models.is_empty() {
                view! {
                    <div class="text-center py-16 text-slate-500 bg-white rounded-xl border border-dashed border-slate-300">
                        {empty_state_message(current)}
                    </div>
                }.into_any()
            } else {
                view! {
                    <div class="grid gap-6 md:grid-cols-2 xl:grid-cols-3">
                        {models.into_iter().map(|model| view! { <ModelCard model color/> }).collect_view()}
                    </div>
                }.into_any()
            }
        })}
    }
}

#[component]
fn StatTile(
    label: &'static str,
    #[prop(into)] value: String,
    color: &'static str,
) -> impl IntoView {
    view! {
        <div class="bg-white rounded-xl shadow-sm border border-slate-100 p-4 text-center">
            <div class="text-2xl font-bold" style=format!("color: {};", color)>{value}</div>
            <div class="text-xs text-slate-500 uppercase tracking-wide">{label}</div>
        </div>
    }
}

#[component]
fn ModelCard(model: &'static AiModel, color: &'static str) -> impl IntoView {
    let performance = model.performance_or_zero();
    let tone = performance_tone(performance);
    let (capabilities, more) = model.capability_preview();

    view! {
        <article class="bg-white rounded-xl shadow-sm border border-slate-100 p-5 flex flex-col hover:shadow-md transition-shadow">
            <div class="flex items-start justify-between gap-3 mb-2">
                <div>
                    <h3 class="text-lg font-semibold text-slate-900">{model.name}</h3>
                    <p class="text-sm text-slate-500">{model.organization}</p>
                </div>
                {model.trending.then(|| view! {
                    <span class="text-xs font-semibold px-2 py-0.5 rounded-full bg-amber-100 text-amber-700">"🔥 Trending"</span>
                })}
            </div>

            <div class="flex flex-wrap gap-1.5 mb-3 text-xs">
                <span class="inline-flex items-center gap-1 px-2 py-0.5 rounded-full bg-slate-100 text-slate-700">
                    <Glyph icon=model.category.icon()/>
                    {CategoryFilter::Only(model.category).label()}
                </span>
                <span class="px-2 py-0.5 rounded-full bg-slate-100 text-slate-700">{model.parameters}</span>
                <span class="px-2 py-0.5 rounded-full bg-slate-100 text-slate-700">{model.released}</span>
            </div>

            <p class="text-sm text-slate-600 mb-4 flex-1">{model.description}</p>

            <div class="mb-3">
                <div class="flex justify-between text-xs text-slate-500 mb-1">
                    <span>"Performance"</span>
                    <span>{format!("{}%", performance)}</span>
                </div>
                <div class="h-1.5 bg-slate-100 rounded-full overflow-hidden">
                    <div class=format!("h-full rounded-full {}", bar_class(tone)) style=format!("width: {}%;", performance)></div>
                </div>
            </div>

            <dl class="grid grid-cols-2 gap-x-3 gap-y-1 text-xs text-slate-500 mb-3">
                {model.downloads.map(|d| view! { <dt>"Downloads"</dt><dd class="text-slate-700">{d}</dd> })}
                {model.context_length.map(|c| view! { <dt>"Context"</dt><dd class="text-slate-700">{c}</dd> })}
                {model.architecture.map(|a| view! { <dt>"Architecture"</dt><dd class="text-slate-700">{a}</dd> })}
            </dl>

            <div class="flex flex-wrap gap-1.5 mb-4">
                {capabilities.iter().map(|capability| view! {
                    <span class="text-xs px-2 py-0.5 rounded border border-slate-200 text-slate-600">{*capability}</span>
                }).collect_view()}
                {more.map(|more| view! {
                    <span class="text-xs px-2 py-0.5 rounded text-slate-400">{more}</span>
                })}
            </div>

            <div class="flex items-center justify-between">
                <span class=format!("text-xs px-2 py-0.5 rounded-full border {}", model.license_tone().chip_class())>
                    {model.license}
                </span>
                {model.model_url.map(|url| view! {
                    <a
                        href=url
                        target="_blank"
                        rel="noopener noreferrer"
                        class="text-sm font-medium hover:underline"
                        style=format!("color: {};", color)
                    >
                        "View Model →"
                    </a>
                })}
            </div>
        </article>
    }
}
