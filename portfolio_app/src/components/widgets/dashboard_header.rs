//! Platform header bar.

use leptos::html::Div;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_use::on_click_outside;

/// Header shown on every platform view.
#[component]
pub fn DashboardHeader(
    /// Platform name, drawn in the accent colour
    #[prop(into)] title: String,
    /// Chip next to the title
    #[prop(into)] subtitle: String,
    /// Accent colour (hex)
    #[prop(into)] color: String,
    /// Show the "DEMO MODE" chip
    #[prop(default = true)] show_demo: bool,
) -> impl IntoView {
    let navigate = use_navigate();
    let (menu_open, set_menu_open) = signal(false);
    let menu_ref = NodeRef::<Div>::new();

    let _ = on_click_outside(menu_ref, move |_| set_menu_open.set(false));

    let chip_style = format!("background-color: {}20; color: {};", color, color);
    let avatar_style = format!("background-color: {};", color);

    view! {
        <header class="h-16 bg-white border-b border-black/5 shadow-sm flex items-center px-6 shrink-0">
            <div class="flex items-center flex-1 gap-3 min-w-0">
                <h1 class="text-lg font-semibold truncate" style=format!("color: {};", color)>{title}</h1>
                {(!subtitle.is_empty()).then(|| view! {
                    <span class="hidden md:inline text-xs font-medium px-2.5 py-1 rounded-full truncate" style=chip_style.clone()>
                        {subtitle.clone()}
                    </span>
                })}
            </div>

            <div class="flex items-center gap-1">
                {show_demo.then(|| view! {
                    <span class="mr-3 text-[11px] font-semibold text-white bg-amber-500 px-2.5 py-1 rounded-full">
                        "DEMO MODE"
                    </span>
                })}
                <button
                    class="p-2 rounded-full text-slate-500 hover:bg-slate-100"
                    title="Home"
                    on:click=move |_| {
                        log::info!("Navigating home");
                        navigate("/", Default::default());
                    }
                >
                    <svg class="w-5 h-5" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M3 12l9-9 9 9M5 10v10h5v-6h4v6h5V10"/>
                    </svg>
                </button>
                <button class="p-2 rounded-full text-slate-500 hover:bg-slate-100" title="Notifications">
                    <svg class="w-5 h-5" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M15 17h5l-1.4-1.4A2 2 0 0118 14.2V11a6 6 0 10-12 0v3.2c0 .5-.2 1-.6 1.4L4 17h5m6 0a3 3 0 11-6 0"/>
                    </svg>
                </button>
                <button class="p-2 rounded-full text-slate-500 hover:bg-slate-100" title="Settings">
                    <svg class="w-5 h-5" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M12 15a3 3 0 100-6 3 3 0 000 6z"/>
                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M19.4 15a1.7 1.7 0 00.3 1.8l.1.1a2 2 0 11-2.8 2.8l-.1-.1a1.7 1.7 0 00-1.8-.3 1.7 1.7 0 00-1 1.5V21a2 2 0 11-4 0v-.1a1.7 1.7 0 00-1.1-1.5 1.7 1.7 0 00-1.8.3l-.1.1a2 2 0 11-2.8-2.8l.1-.1a1.7 1.7 0 00.3-1.8 1.7 1.7 0 00-1.5-1H3a2 2 0 110-4h.1a1.7 1.7 0 001.5-1.1 1.7 1.7 0 00-.3-1.8l-.1-.1a2 2 0 112.8-2.8l.1.1a1.7 1.7 0 001.8.3H9a1.7 1.7 0 001-1.5V3a2 2 0 114 0v.1a1.7 1.7 0 001 1.5 1.7 1.7 0 001.8-.3l.1-.1a2 2 0 112.8 2.8l-.1.1a1.7 1.7 0 00-.3 1.8V9a1.7 1.7 0 001.5 1H21a2 2 0 110 4h-.1a1.7 1.7 0 00-1.5 1z"/>
                    </svg>
                </button>

                // Account menu
                <div class="relative" node_ref=menu_ref>
                    <button
                        class="ml-1 w-8 h-8 rounded-full text-white text-sm font-semibold flex items-center justify-center"
                        style=avatar_style
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        "A"
                    </button>
                    <Show when=move || menu_open.get()>
                        <div class="absolute right-0 top-full mt-2 w-40 bg-white border border-slate-200 rounded-lg shadow-lg py-1 z-50">
                            {["Profile", "Settings", "Logout"].into_iter().map(|item| view! {
                                <button
                                    class="w-full text-left px-4 py-2 text-sm text-slate-700 hover:bg-slate-50"
                                    on:click=move |_| set_menu_open.set(false)
                                >
                                    {item}
                                </button>
                            }).collect_view()}
                        </div>
                    </Show>
                </div>
            </div>
        </header>
    }
}
