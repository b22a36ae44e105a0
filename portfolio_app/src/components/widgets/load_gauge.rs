//! Grid load readout.
//!
//! A 270 degree radial gauge over the current [`LoadJitter`] value, plus the
//! "Real-time Mode" switch that pauses the random walk.

use leptos::prelude::*;
use portfolio_common::LoadJitter;

const CX: f64 = 50.0;
const CY: f64 = 50.0;
const R: f64 = 40.0;

/// Arc from the gauge's start angle to `percentage` of the sweep.
fn arc_path(percentage: f64) -> String {
    let pct = percentage.clamp(0.0, 100.0);
    let start = 135.0_f64.to_radians();
    let end = (135.0 + pct / 100.0 * 270.0).to_radians();
    let large_arc = if pct > 100.0 / 1.5 { 1 } else { 0 };
    format!(
        "M {:.2} {:.2} A {} {} 0 {} 1 {:.2} {:.2}",
        CX + R * start.cos(),
        CY + R * start.sin(),
        R,
        R,
        large_arc,
        CX + R * end.cos(),
        CY + R * end.sin()
    )
}

#[component]
pub fn LoadGauge(
    load: RwSignal<LoadJitter>,
    #[prop(into, default = "Current Grid Load".to_string())] label: String,
) -> impl IntoView {
    let color = move || load.with(|l| l.color());

    view! {
        <div class="bg-white rounded-xl shadow-sm border border-slate-100 p-5 mb-8 flex items-center gap-6">
            <div class="w-28 h-28 relative shrink-0">
                <svg viewBox="0 0 100 100" class="w-full h-full">
                    <path
                        d=arc_path(100.0)
                        fill="none"
                        stroke="#e2e8f0"
                        stroke-width="8"
                        stroke-linecap="round"
                    />
                    <path
                        d=move || arc_path(load.with(|l| l.value()))
                        fill="none"
                        stroke=color
                        stroke-width="8"
                        stroke-linecap="round"
                    />
                </svg>
                <div class="absolute inset-0 flex items-center justify-center">
                    <span class="text-lg font-bold font-mono" style=move || format!("color: {};", color())>
                        {move || format!("{:.1}%", load.with(|l| l.value()))}
                    </span>
                </div>
            </div>
            <div class="flex-1">
                <div class="text-sm text-slate-500 mb-1">{label}</div>
                <div class="h-2 bg-slate-100 rounded-full overflow-hidden mb-4">
                    <div
                        class="h-full rounded-full transition-all duration-500"
                        style=move || format!("width: {:.1}%; background-color: {};", load.with(|l| l.value()), color())
                    ></div>
                </div>
                <label class="inline-flex items-center gap-2 cursor-pointer select-none">
                    <input
                        type="checkbox"
                        class="w-4 h-4 accent-blue-600"
                        prop:checked=move || load.with(|l| l.is_enabled())
                        on:change=move |_| {
                            load.update(|l| {
                                let enabled = !l.is_enabled();
                                l.set_enabled(enabled);
                                log::info!("Real-time mode {}", if enabled { "on" } else { "off" });
                            });
                        }
                    />
                    <span class="text-sm text-slate-700">"Real-time Mode"</span>
                </label>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arc_starts_bottom_left() {
        let path = arc_path(0.0);
        assert!(path.starts_with("M 21.72 78.28"));
    }

    #[test]
    fn test_full_arc_uses_large_flag() {
        assert!(arc_path(100.0).contains(" 0 1 1 "));
        assert!(arc_path(50.0).contains(" 0 0 1 "));
    }
}
