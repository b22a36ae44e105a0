//! KPI tiles.

use serde::Serialize;

use crate::icon::Icon;

/// A single labelled KPI with its directional change badge.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metric {
    pub title: String,
    pub value: String,
    /// Display text such as `"+8.3%"` or `"-45%"`. Never parsed as a number.
    pub change: String,
    pub icon: Icon,
    /// Tile tint. Use-case dashboards leave this unset and tint with the use
    /// case colour instead.
    pub color: Option<String>,
}

impl Metric {
    pub fn new(title: &str, value: &str, change: &str, icon: Icon) -> Self {
        Self {
            title: title.to_string(),
            value: value.to_string(),
            change: change.to_string(),
            icon,
            color: None,
        }
    }

    pub fn tinted(mut self, color: &str) -> Self {
        self.color = Some(color.to_string());
        self
    }

    pub fn trend(&self) -> Trend {
        Trend::of(&self.change)
    }

    /// Tile colour, falling back to the owning use case colour.
    pub fn color_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.color.as_deref().unwrap_or(fallback)
    }
}

/// Direction of a change badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Trend {
    Up,
    Down,
}

impl Trend {
    /// Only a leading `+` counts as positive; `"0%"` and `"-12ms"` are both
    /// `Down`.
    pub fn of(change: &str) -> Self {
        if change.starts_with('+') {
            Trend::Up
        } else {
            Trend::Down
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Trend::Up => "#059669",
            Trend::Down => "#dc2626",
        }
    }

    pub fn arrow(self) -> &'static str {
        match self {
            Trend::Up => "▲",
            Trend::Down => "▼",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plus_prefix_is_up() {
        assert_eq!(Trend::of("+8.3%"), Trend::Up);
        assert_eq!(Trend::of("+1,847%"), Trend::Up);
        assert_eq!(Trend::of("+0.3"), Trend::Up);
    }

    #[test]
    fn test_everything_else_is_down() {
        assert_eq!(Trend::of("-45%"), Trend::Down);
        assert_eq!(Trend::of("-12ms"), Trend::Down);
        assert_eq!(Trend::of("0%"), Trend::Down);
        assert_eq!(Trend::of(""), Trend::Down);
    }

    #[test]
    fn test_trend_colors() {
        let up = Metric::new("Daily Production", "485,672 bbl", "+3.2%", Icon::LocalGasStation);
        let down = Metric::new("Incident Rate", "0.12/1M hrs", "-15%", Icon::Favorite);
        assert_eq!(up.trend().color(), "#059669");
        assert_eq!(down.trend().color(), "#dc2626");
    }

    #[test]
    fn test_color_fallback() {
        let plain = Metric::new("Load Factor", "78.2%", "+1.8%", Icon::Assessment);
        assert_eq!(plain.color_or("#3b82f6"), "#3b82f6");
        let tinted = plain.tinted("#388e3c");
        assert_eq!(tinted.color_or("#3b82f6"), "#388e3c");
    }
}
