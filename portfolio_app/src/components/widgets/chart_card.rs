//! Chart card with its overflow menu.
//!
//! The menu offers three actions: a full-screen overlay, a JSON download of
//! the chart's records and a refresh that re-mounts the drawing.

use leptos::html::Div;
use leptos::prelude::*;
use leptos_use::on_click_outside;
use portfolio_common::ChartSpec;

use super::ChartSvg;

#[component]
pub fn ChartCard(
    spec: ChartSpec,
    /// Primary series colour
    #[prop(into)] color: String,
) -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);
    let (full_screen, set_full_screen) = signal(false);
    let (revision, set_revision) = signal(0u32);
    let menu_ref = NodeRef::<Div>::new();

    let _ = on_click_outside(menu_ref, move |_| set_menu_open.set(false));

    let export_href = match spec.export_json() {
        Ok(json) => Some(format!(
            "data:application/json;charset=utf-8,{}",
            String::from(js_sys::encode_uri_component(&json))
        )),
        Err(e) => {
            log::error!("Chart '{}' cannot be exported: {}", spec.title, e);
            None
        }
    };
    let file_name = spec.export_file_name();
    let title = spec.title.clone();
    let overlay_title = title.clone();
    let spec = StoredValue::new(spec);
    let color = StoredValue::new(color);

    let drawing = move |height: &'static str| {
        // Reading the revision makes the closure re-run on refresh
        let _ = revision.get();
        view! { <ChartSvg spec=spec.get_value() color=color.get_value() height/> }
    };

    let item_class = "w-full text-left px-4 py-2 text-sm text-slate-700 hover:bg-slate-50 block";

    view! {
        <div class="bg-white rounded-xl shadow-sm border border-slate-100 p-5 h-full">
            <div class="flex items-center justify-between mb-4">
                <h3 class="text-base font-semibold text-slate-800">{title}</h3>
                <div class="relative" node_ref=menu_ref>
                    <button
                        class="p-1.5 rounded-full text-slate-500 hover:bg-slate-100"
                        title="Chart options"
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        <svg class="w-5 h-5" fill="currentColor" viewBox="0 0 24 24">
                            <circle cx="12" cy="5" r="2"/>
                            <circle cx="12" cy="12" r="2"/>
                            <circle cx="12" cy="19" r="2"/>
                        </svg>
                    </button>
                    <Show when=move || menu_open.get()>
                        <div class="absolute right-0 top-full mt-1 w-44 bg-white border border-slate-200 rounded-lg shadow-lg py-1 z-40">
                            <button
                                class=item_class
                                on:click=move |_| {
                                    set_full_screen.set(true);
                                    set_menu_open.set(false);
                                }
                            >
                                "Full Screen"
                            </button>
                            {match export_href.clone() {
                                Some(href) => view! {
                                    <a
                                        class=item_class
                                        href=href
                                        download=file_name.clone()
                                        on:click=move |_| {
                                            log::info!("Exported chart data");
                                            set_menu_open.set(false);
                                        }
                                    >
                                        "Export Data"
                                    </a>
                                }.into_any(),
                                None => view! {
                                    <span class="block px-4 py-2 text-sm text-slate-400">"Export Data"</span>
                                }.into_any(),
                            }}
                            <button
                                class=item_class
                                on:click=move |_| {
                                    set_revision.update(|r| *r += 1);
                                    set_menu_open.set(false);
                                    log::debug!("Chart refreshed");
                                }
                            >
                                "Refresh"
                            </button>
                        </div>
                    </Show>
                </div>
            </div>
            {move || drawing("300px")}
        </div>

        <Show when=move || full_screen.get()>
            <div class="fixed inset-0 z-50 bg-black/60 flex items-center justify-center p-6">
                <div class="bg-white rounded-xl shadow-2xl w-full max-w-6xl p-6">
                    <div class="flex items-center justify-between mb-4">
                        <h3 class="text-lg font-semibold text-slate-800">{overlay_title.clone()}</h3>
                        <button
                            class="px-3 py-1.5 text-sm rounded-md border border-slate-200 text-slate-600 hover:bg-slate-50"
                            on:click=move |_| set_full_screen.set(false)
                        >
                            "Close"
                        </button>
                    </div>
                    {move || drawing("70vh")}
                </div>
            </div>
        </Show>
    }
}
