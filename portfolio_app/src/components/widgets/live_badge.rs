use leptos::prelude::*;
use portfolio_common::Icon;

use super::Glyph;

/// "LIVE" chip whose fill toggles with `live`.
#[component]
pub fn LiveBadge(
    #[prop(into)] label: String,
    icon: Icon,
    #[prop(into)] live: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="relative inline-flex">
            <span class=move || format!(
                "inline-flex items-center gap-1.5 px-3 py-1.5 rounded-full text-sm font-medium border border-emerald-600 transition-colors duration-500 {}",
                if live.get() { "bg-emerald-600 text-white" } else { "bg-transparent text-emerald-700" }
            )>
                <Glyph icon/>
                {label}
            </span>
            <span class="absolute -top-2 -right-3 text-[10px] font-bold text-white bg-emerald-600 rounded-full px-1.5 py-0.5">
                "LIVE"
            </span>
        </div>
    }
}
