//! SVG geometry for the chart card.
//!
//! Categories are laid out in equal bands across the plot width; values map
//! linearly from 0 at the baseline to a rounded maximum at the top edge.

use crate::chart::{nice_ceiling, ChartSpec};

/// Canvas size and margins, in SVG user units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub width: f64,
    pub height: f64,
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Default for PlotArea {
    fn default() -> Self {
        Self {
            width: 600.0,
            height: 300.0,
            left: 52.0,
            right: 16.0,
            top: 16.0,
            bottom: 36.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plot {
    pub area: PlotArea,
    count: usize,
    y_max: f64,
}

impl Plot {
    pub fn new(area: PlotArea, count: usize, max_value: f64) -> Self {
        Self {
            area,
            count: count.max(1),
            y_max: nice_ceiling(max_value),
        }
    }

    pub fn for_spec(spec: &ChartSpec, area: PlotArea) -> Self {
        Self::new(
            area,
            spec.data.len(),
            spec.data.series_max(spec.kind.plots_secondary()),
        )
    }

    pub fn y_max(&self) -> f64 {
        self.y_max
    }

    pub fn baseline(&self) -> f64 {
        self.area.height - self.area.bottom
    }

    fn plot_width(&self) -> f64 {
        self.area.width - self.area.left - self.area.right
    }

    fn plot_height(&self) -> f64 {
        self.baseline() - self.area.top
    }

    pub fn band(&self) -> f64 {
        self.plot_width() / self.count as f64
    }

    pub fn x_center(&self, index: usize) -> f64 {
        self.area.left + self.band() * (index as f64 + 0.5)
    }

    /// Negative values sit on the baseline.
    pub fn y(&self, value: f64) -> f64 {
        let ratio = (value.max(0.0) / self.y_max).min(1.0);
        self.baseline() - self.plot_height() * ratio
    }

    /// One of `slots` side-by-side bars inside band `index`.
    pub fn bar(&self, index: usize, slot: usize, slots: usize, value: f64) -> Rect {
        let group = self.band() * 0.7;
        let width = group / slots.max(1) as f64;
        let x = self.x_center(index) - group / 2.0 + width * slot as f64;
        let y = self.y(value);
        Rect {
            x,
            y,
            width,
            height: self.baseline() - y,
        }
    }

    pub fn line_path(&self, values: &[f64]) -> String {
        values
            .iter()
            .enumerate()
            .map(|(i, v)| {
                let cmd = if i == 0 { 'M' } else { 'L' };
                format!("{} {:.1} {:.1}", cmd, self.x_center(i), self.y(*v))
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// The line path closed down to the baseline.
    pub fn area_path(&self, values: &[f64]) -> String {
        if values.is_empty() {
            return String::new();
        }
        format!(
            "{} L {:.1} {:.1} L {:.1} {:.1} Z",
            self.line_path(values),
            self.x_center(values.len() - 1),
            self.baseline(),
            self.x_center(0),
            self.baseline()
        )
    }

    /// Evenly spaced axis ticks from 0 to the rounded maximum.
    pub fn ticks(&self, steps: usize) -> Vec<(f64, f64)> {
        let steps = steps.max(1);
        (0..=steps)
            .map(|i| {
                let value = self.y_max * i as f64 / steps as f64;
                (value, self.y(value))
            })
            .collect()
    }
}

/// Short axis label: `4200` becomes `4.2K`.
pub fn tick_label(value: f64) -> String {
    if value >= 1_000_000.0 {
        format!("{}M", trim(value / 1_000_000.0))
    } else if value >= 1_000.0 {
        format!("{}K", trim(value / 1_000.0))
    } else {
        trim(value)
    }
}

fn trim(value: f64) -> String {
    let text = format!("{:.2}", value);
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plot() -> Plot {
        Plot::new(PlotArea::default(), 4, 87.0)
    }

    #[test]
    fn test_vertical_mapping() {
        let p = plot();
        assert_eq!(p.y_max(), 100.0);
        assert_eq!(p.y(0.0), p.baseline());
        assert_eq!(p.y(100.0), p.area.top);
        assert_eq!(p.y(-5.0), p.baseline());
    }

    #[test]
    fn test_bands() {
        let p = plot();
        assert_eq!(p.band(), 133.0);
        assert_eq!(p.x_center(0), 52.0 + 66.5);
        assert_eq!(p.x_center(3), 52.0 + 133.0 * 3.5);
    }

    #[test]
    fn test_grouped_bars_share_band() {
        let p = plot();
        let a = p.bar(1, 0, 2, 50.0);
        let b = p.bar(1, 1, 2, 25.0);
        assert_eq!(a.x + a.width, b.x);
        assert!((a.y + a.height - p.baseline()).abs() < 1e-9);
        assert!(b.height < a.height);
    }

    #[test]
    fn test_area_path_closes() {
        let p = Plot::new(PlotArea::default(), 2, 10.0);
        let path = p.area_path(&[5.0, 10.0]);
        assert!(path.starts_with("M "));
        assert!(path.ends_with(" Z"));
        assert_eq!(p.area_path(&[]), "");
    }

    #[test]
    fn test_ticks() {
        let ticks = plot().ticks(4);
        assert_eq!(ticks.len(), 5);
        assert_eq!(ticks[2].0, 50.0);
    }

    #[test]
    fn test_tick_labels() {
        assert_eq!(tick_label(0.0), "0");
        assert_eq!(tick_label(2.5), "2.5");
        assert_eq!(tick_label(4200.0), "4.2K");
        assert_eq!(tick_label(5_000_000.0), "5M");
    }
}
