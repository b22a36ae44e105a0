//! `/:slug` resolution and the per-platform shell.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;
use portfolio_common::{AppRoute, Catalog, DashboardError, Platform, PlatformContent, PlatformId};

use super::home::HomePage;
use super::model_hub::ModelHubView;
use super::showcase::ShowcaseView;
use super::use_case_dashboard::UseCaseDashboardView;
use crate::components::widgets::DashboardHeader;

/// Resolves the slug through the route table and mounts the matching view.
/// A new slug tears the previous view down, taking its tab state and timers
/// with it.
#[component]
pub fn PlatformRoute() -> impl IntoView {
    let params = use_params_map();
    let path = Memo::new(move |_| format!("/{}", params.with(|p| p.get("slug").unwrap_or_default())));

    move || match AppRoute::resolve(&path.get()) {
        Ok(AppRoute::Platform(id)) => {
            log::info!("Opening {}", id.slug());
            view! { <PlatformPage id/> }.into_any()
        }
        Ok(AppRoute::Home) => view! { <HomePage/> }.into_any(),
        Err(e) => {
            log::warn!("{}", e);
            view! { <NotFound/> }.into_any()
        }
    }
}

#[component]
fn PlatformPage(id: PlatformId) -> impl IntoView {
    match Catalog::shared().and_then(|catalog| catalog.platform(id)) {
        Ok(platform) => view! { <PlatformShell platform/> }.into_any(),
        Err(e) => {
            log::error!("Cannot render {}: {}", id.slug(), e);
            view! { <ErrorPanel error=e/> }.into_any()
        }
    }
}

#[component]
fn PlatformShell(platform: &'static Platform) -> impl IntoView {
    let header = &platform.header;
    let color = header.color;
    let content = match &platform.content {
        PlatformContent::UseCases(dashboard) => view! { <UseCaseDashboardView dashboard color/> }.into_any(),
        PlatformContent::Showcase(showcase) => view! { <ShowcaseView showcase color/> }.into_any(),
        PlatformContent::ModelHub(hub) => view! { <ModelHubView hub color/> }.into_any(),
    };

    view! {
        <div class="min-h-screen flex flex-col bg-slate-50">
            <DashboardHeader title=header.title subtitle=header.subtitle color=header.color/>
            <main class="flex-1 w-full max-w-7xl mx-auto px-4 md:px-6 py-6">
                {content}
            </main>
        </div>
    }
}

#[component]
fn ErrorPanel(error: DashboardError) -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center bg-slate-50 p-6">
            <div class="max-w-lg w-full bg-white border border-red-200 rounded-xl p-6 shadow-sm">
                <h2 class="text-lg font-semibold text-red-600 mb-2">"This dashboard could not be loaded"</h2>
                <p class="text-sm text-slate-600 mb-4 font-mono">{error.to_string()}</p>
                <A href="/" attr:class="text-sm font-medium text-blue-600 hover:underline">"Back to all platforms"</A>
            </div>
        </div>
    }
}

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="min-h-screen flex flex-col items-center justify-center bg-slate-50 gap-4">
            <h1 class="text-6xl font-extrabold text-slate-300">"404"</h1>
            <p class="text-slate-600">"There is no platform at this address."</p>
            <A href="/" attr:class="px-4 py-2 rounded-lg bg-blue-600 text-white text-sm font-medium hover:bg-blue-700">
                "Back to all platforms"
            </A>
        </div>
    }
}
