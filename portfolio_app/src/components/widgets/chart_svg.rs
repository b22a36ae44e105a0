//! Static SVG rendering of a validated chart.

use leptos::prelude::*;
use portfolio_common::{tick_label, ChartKind, ChartSpec, Plot, PlotArea};

const SECONDARY: &str = "#ff7300";

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

#[component]
pub fn ChartSvg(
    spec: ChartSpec,
    /// Colour of the primary series
    #[prop(into)] color: String,
    /// CSS height of the drawing
    #[prop(default = "300px")] height: &'static str,
) -> impl IntoView {
    let area = PlotArea::default();
    let plot = Plot::for_spec(&spec, area);
    let points = spec.data.points();
    let primary: Vec<f64> = points.iter().map(|p| p.series_a).collect();
    let secondary: Vec<f64> = points.iter().filter_map(|p| p.series_b).collect();
    let has_secondary = spec.kind.plots_secondary() && secondary.len() == points.len();

    let grid = plot.ticks(4).into_iter().map(|(value, y)| view! {
        <g>
            <line x1=area.left x2={area.width - area.right} y1=y y2=y stroke="#e2e8f0" stroke-dasharray="3 3"/>
            <text x={area.left - 8.0} y={y + 4.0} text-anchor="end" font-size="11" fill="#64748b">{tick_label(value)}</text>
        </g>
    }).collect_view();

    let labels = points.iter().enumerate().map(|(i, p)| view! {
        <text x={plot.x_center(i)} y={area.height - area.bottom + 18.0} text-anchor="middle" font-size="11" fill="#64748b">
            {p.category.clone()}
        </text>
    }).collect_view();

    let series = match spec.kind {
        ChartKind::Composed => {
            let bars = primary.iter().enumerate().map(|(i, v)| {
                let r = plot.bar(i, 0, 1, *v);
                view! { <rect x=r.x y=r.y width=r.width height=r.height fill=color.clone() rx="2"/> }
            }).collect_view();
            let line = has_secondary.then(|| {
                let dots = secondary.iter().enumerate().map(|(i, v)| view! {
                    <circle cx=plot.x_center(i) cy=plot.y(*v) r="3" fill=SECONDARY/>
                }).collect_view();
                view! {
                    <g>
                        <path d=plot.line_path(&secondary) fill="none" stroke=SECONDARY stroke-width="2"/>
                        {dots}
                    </g>
                }
            });
            view! { <g>{bars}{line}</g> }.into_any()
        }
        ChartKind::Area => view! {
            <g>
                <path d=plot.area_path(&primary) fill=color.clone() fill-opacity="0.3" stroke=color.clone() stroke-width="2"/>
            </g>
        }.into_any(),
        ChartKind::OverlaidArea => {
            let overlay = has_secondary.then(|| view! {
                <path d=plot.area_path(&secondary) fill=SECONDARY fill-opacity="0.2" stroke=SECONDARY stroke-width="2"/>
            });
            view! {
                <g>
                    <path d=plot.area_path(&primary) fill=color.clone() fill-opacity="0.3" stroke=color.clone() stroke-width="2"/>
                    {overlay}
                </g>
            }.into_any()
        }
        ChartKind::GroupedBar => {
            let slots = if has_secondary { 2 } else { 1 };
            let bars = points.iter().enumerate().map(|(i, p)| {
                let a = plot.bar(i, 0, slots, p.series_a);
                let b = p.series_b.filter(|_| has_secondary).map(|v| {
                    let r = plot.bar(i, 1, slots, v);
                    view! { <rect x=r.x y=r.y width=r.width height=r.height fill=SECONDARY rx="2"/> }
                });
                view! {
                    <g>
                        <rect x=a.x y=a.y width=a.width height=a.height fill=color.clone() rx="2"/>
                        {b}
                    </g>
                }
            }).collect_view();
            view! { <g>{bars}</g> }.into_any()
        }
    };

    // Invisible band per record carrying its hover text. Built as markup so
    // the <title> lands in the SVG namespace.
    let hover = (0..points.len()).map(|i| {
        let tip = spec.data.tooltip(i, has_secondary).unwrap_or_default();
        let markup = format!(
            r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" fill="transparent"><title>{}</title></rect>"#,
            plot.x_center(i) - plot.band() / 2.0,
            area.top,
            plot.band(),
            plot.baseline() - area.top,
            escape_text(&tip)
        );
        view! { <g inner_html=markup></g> }
    }).collect_view();

    let legend = {
        let primary_key = spec.data.primary_key().to_string();
        let secondary_key = spec.data.secondary_key().filter(|_| has_secondary).map(str::to_string);
        view! {
            <div class="flex justify-center gap-4 text-xs text-slate-600 mt-2">
                <span class="flex items-center gap-1">
                    <span class="w-3 h-3 rounded-sm inline-block" style=format!("background-color: {};", color)></span>
                    {primary_key}
                </span>
                {secondary_key.map(|key| view! {
                    <span class="flex items-center gap-1">
                        <span class="w-3 h-3 rounded-sm inline-block" style=format!("background-color: {};", SECONDARY)></span>
                        {key}
                    </span>
                })}
            </div>
        }
    };

    view! {
        <div>
            <svg
                viewBox=format!("0 0 {} {}", area.width, area.height)
                preserveAspectRatio="none"
                class="w-full"
                style=format!("height: {};", height)
            >
                {grid}
                <line x1=area.left x2={area.width - area.right} y1=plot.baseline() y2=plot.baseline() stroke="#94a3b8"/>
                {series}
                {labels}
                {hover}
            </svg>
            {legend}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_text() {
        assert_eq!(escape_text("R&D <2025>"), "R&amp;D &lt;2025&gt;");
        assert_eq!(escape_text("North\nload: 4200"), "North\nload: 4200");
    }
}
