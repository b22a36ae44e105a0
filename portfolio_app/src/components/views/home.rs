//! Landing page: hero, one card per platform, closing call-to-action.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use portfolio_common::{home, Catalog, PlatformDescriptor};

use crate::components::widgets::Glyph;

#[component]
pub fn HomePage() -> impl IntoView {
    let descriptors: Vec<PlatformDescriptor> = match Catalog::shared() {
        Ok(catalog) => catalog.descriptors().to_vec(),
        Err(e) => {
            log::error!("Catalog failed to load: {}", e);
            home::descriptors()
        }
    };

    view! {
        <div class="min-h-screen bg-slate-50">
            <header class="h-16 bg-white/90 backdrop-blur border-b border-slate-200 flex items-center px-6 sticky top-0 z-30">
                <h1 class="flex-1 text-lg font-bold text-slate-900">{home::HEADER_TITLE}</h1>
                <button class="px-4 py-2 text-sm font-medium rounded-lg border border-slate-300 text-slate-700 hover:bg-slate-100">
                    {home::CONTACT_LABEL}
                </button>
            </header>

            <section class="text-center py-16 px-6 bg-gradient-to-b from-white to-slate-50">
                <h2 class="text-4xl md:text-5xl font-extrabold text-slate-900 mb-4">{home::HERO_TITLE}</h2>
                <p class="text-lg text-slate-600 max-w-2xl mx-auto mb-8">{home::HERO_SUBTITLE}</p>
                <div class="flex flex-wrap justify-center gap-2">
                    {home::HERO_BADGES.iter().map(|badge| view! {
                        <span class="px-3 py-1 text-sm rounded-full bg-blue-50 text-blue-700 border border-blue-200">{*badge}</span>
                    }).collect_view()}
                </div>
            </section>

            <section class="max-w-7xl mx-auto px-6 pb-16 grid gap-6 sm:grid-cols-2 lg:grid-cols-3">
                {descriptors.into_iter().map(|descriptor| view! { <PlatformCard descriptor/> }).collect_view()}
            </section>

            <section class="max-w-4xl mx-auto px-6 pb-20">
                <div class="rounded-2xl bg-gradient-to-r from-blue-600 to-indigo-600 text-white text-center p-10 shadow-lg">
                    <h3 class="text-2xl font-bold mb-3">{home::CTA_TITLE}</h3>
                    <p class="text-blue-100 mb-6">{home::CTA_BODY}</p>
                    <button class="px-6 py-3 rounded-lg bg-white text-blue-700 font-semibold hover:bg-blue-50">
                        {home::CTA_LABEL}
                    </button>
                </div>
            </section>
        </div>
    }
}

#[component]
fn PlatformCard(descriptor: PlatformDescriptor) -> impl IntoView {
    let navigate = use_navigate();
    let route = descriptor.route();
    let color = descriptor.color;

    view! {
        <article class="bg-white rounded-xl border border-slate-100 shadow-sm hover:shadow-lg hover:-translate-y-1 transition-all p-6 flex flex-col">
            <div class="flex items-center justify-between mb-4">
                <div
                    class="w-12 h-12 rounded-xl flex items-center justify-center text-2xl"
                    style=format!("background-color: {}1a; color: {};", color, color)
                >
                    <Glyph icon=descriptor.icon/>
                </div>
                <span
                    class="text-xs font-medium px-2.5 py-1 rounded-full"
                    style=format!("background-color: {}1a; color: {};", color, color)
                >
                    {descriptor.industry}
                </span>
            </div>
            <h3 class="text-xl font-bold text-slate-900">{descriptor.title}</h3>
            <p class="text-sm font-medium mb-3" style=format!("color: {};", color)>{descriptor.subtitle}</p>
            <p class="text-sm text-slate-600 mb-4 flex-1">{descriptor.description}</p>
            <div class="flex flex-wrap gap-1.5 mb-5">
                {descriptor.features.iter().map(|feature| view! {
                    <span class="text-xs px-2 py-0.5 rounded border border-slate-200 text-slate-600">{*feature}</span>
                }).collect_view()}
            </div>
            <button
                class="w-full py-2.5 rounded-lg text-white text-sm font-semibold hover:opacity-90"
                style=format!("background-color: {};", color)
                on:click=move |_| {
                    log::info!("Launching {}", route);
                    navigate(&route, Default::default());
                }
            >
                {home::LAUNCH_LABEL}
            </button>
        </article>
    }
}
