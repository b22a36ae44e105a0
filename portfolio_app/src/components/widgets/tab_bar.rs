use leptos::prelude::*;
use portfolio_common::Icon;

use super::Glyph;

/// Scrollable tab strip. Reports clicks through `on_select`; the owner decides
/// what a selection means.
#[component]
pub fn TabBar(
    /// (label, optional icon) per tab
    tabs: Vec<(String, Option<Icon>)>,
    /// Index of the highlighted tab
    #[prop(into)] selected: Signal<usize>,
    on_select: Callback<usize>,
    /// Underline colour of the active tab
    #[prop(into, default = "#2563eb".to_string())] accent: String,
    #[prop(default = false)] centered: bool,
) -> impl IntoView {
    let accent = StoredValue::new(accent);
    let justify = if centered { "justify-center" } else { "" };

    view! {
        <nav class=format!("flex overflow-x-auto border-b border-slate-200 bg-white rounded-t-lg {}", justify)>
            {tabs.into_iter().enumerate().map(|(index, (label, icon))| {
                let active = move || selected.get() == index;
                view! {
                    <button
                        class=move || format!(
                            "flex items-center gap-2 px-5 min-h-[64px] text-sm whitespace-nowrap border-b-2 transition-colors {}",
                            if active() { "font-semibold text-slate-900" } else { "border-transparent text-slate-500 hover:text-slate-800" }
                        )
                        style=move || if active() {
                            format!("border-color: {};", accent.get_value())
                        } else {
                            String::new()
                        }
                        on:click=move |_| on_select.run(index)
                    >
                        {icon.map(|icon| view! { <Glyph icon class="text-lg"/> })}
                        {label}
                    </button>
                }
            }).collect_view()}
        </nav>
    }
}
