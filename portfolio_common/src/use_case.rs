//! Tab content for the chart dashboards and the capability showcases.

use serde::Serialize;

use crate::alert::AlertEntry;
use crate::chart::{ChartDraft, ChartSpec, Rotation};
use crate::error::DashboardError;
use crate::icon::Icon;
use crate::metric::Metric;

/// One tab of a chart dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UseCase {
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon: Icon,
    pub color: String,
    pub metrics: [Metric; 4],
    pub charts: [ChartSpec; 2],
    pub alerts: Vec<AlertEntry>,
}

/// A use case as written in the static tables, before chart validation.
#[derive(Debug, Clone)]
pub struct UseCaseDraft {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: Icon,
    pub color: &'static str,
    pub metrics: [Metric; 4],
    pub charts: [ChartDraft; 2],
    pub alerts: Vec<AlertEntry>,
}

impl UseCaseDraft {
    /// Validates both charts and stamps each with the kind its position
    /// receives under `rotation`.
    pub fn finish(self, rotation: Rotation) -> Result<UseCase, DashboardError> {
        let [first, second] = self.charts;
        let charts = [
            first.finish(rotation.kind_for(0))?,
            second.finish(rotation.kind_for(1))?,
        ];
        Ok(UseCase {
            id: self.id.to_string(),
            title: self.title.to_string(),
            description: self.description.to_string(),
            icon: self.icon,
            color: self.color.to_string(),
            metrics: self.metrics,
            charts,
            alerts: self.alerts,
        })
    }
}

/// Builds an ordered use-case table.
pub fn build_table(
    rotation: Rotation,
    drafts: Vec<UseCaseDraft>,
) -> Result<Vec<UseCase>, DashboardError> {
    drafts
        .into_iter()
        .map(|draft| draft.finish(rotation))
        .collect()
}

/// Colour family of a capability tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Primary,
    Secondary,
    Success,
    Warning,
    Info,
    Error,
}

impl Tone {
    /// Tailwind classes for an outlined chip.
    pub fn chip_class(self) -> &'static str {
        match self {
            Tone::Primary => "border-blue-500 text-blue-600",
            Tone::Secondary => "border-purple-500 text-purple-600",
            Tone::Success => "border-green-500 text-green-600",
            Tone::Warning => "border-amber-500 text-amber-600",
            Tone::Info => "border-sky-500 text-sky-600",
            Tone::Error => "border-red-500 text-red-600",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Capability {
    pub title: String,
    pub tags: [(String, Tone); 3],
    pub body: String,
}

impl Capability {
    pub fn new(title: &str, tags: [(&str, Tone); 3], body: &str) -> Self {
        Self {
            title: title.to_string(),
            tags: tags.map(|(label, tone)| (label.to_string(), tone)),
            body: body.to_string(),
        }
    }
}

/// One tab of a capability showcase platform.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShowcaseTab {
    pub label: String,
    pub title: String,
    pub description: String,
    pub metrics: [Metric; 4],
    pub alert: AlertEntry,
    pub capabilities: [Capability; 2],
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::ChartKind;

    fn draft() -> UseCaseDraft {
        UseCaseDraft {
            id: "predictive-maintenance",
            title: "Predictive Maintenance",
            description: "AI-powered equipment failure prediction and maintenance optimization",
            icon: Icon::Build,
            color: "#f59e0b",
            metrics: [
                Metric::new("Equipment Uptime", "98.7%", "+2.3%", Icon::TrendingUp),
                Metric::new("Maintenance Cost", "$2.4M", "-18%", Icon::AttachMoney),
                Metric::new("Failure Prediction", "94.2%", "+5.1%", Icon::Insights),
                Metric::new("Downtime Reduced", "67%", "+12%", Icon::Schedule),
            ],
            charts: [
                crate::chart!("Equipment Health Score";
                    { "month": "Jan", "health": 85, "predicted": 87 },
                ),
                crate::chart!("Maintenance Cost Savings";
                    { "quarter": "Q1", "savings": 1.2 },
                ),
            ],
            alerts: vec![AlertEntry::warning("Pump P-101 vibration anomaly detected")],
        }
    }

    #[test]
    fn test_two_way_rotation_stamps_kinds() {
        let use_case = draft().finish(Rotation::TwoWay).unwrap();
        assert_eq!(use_case.charts[0].kind, ChartKind::Composed);
        assert_eq!(use_case.charts[1].kind, ChartKind::Area);
    }

    #[test]
    fn test_three_way_rotation_stamps_kinds() {
        let use_case = draft().finish(Rotation::ThreeWay).unwrap();
        assert_eq!(use_case.charts[0].kind, ChartKind::Composed);
        assert_eq!(use_case.charts[1].kind, ChartKind::OverlaidArea);
    }

    #[test]
    fn test_bad_chart_fails_the_table() {
        let mut bad = draft();
        bad.charts[1] = ChartDraft::new("Broken", vec![]);
        let err = build_table(Rotation::TwoWay, vec![draft(), bad]).unwrap_err();
        assert_eq!(err, DashboardError::EmptyChart { chart: "Broken".to_string() });
    }

    #[test]
    fn test_capability_tags() {
        let card = Capability::new(
            "Workflow Orchestration",
            [("Multi-step", Tone::Primary), ("Adaptive", Tone::Success), ("Resilient", Tone::Info)],
            "Coordinates dependent tasks across agents.",
        );
        assert_eq!(card.tags[1], ("Adaptive".to_string(), Tone::Success));
        assert!(Tone::Warning.chip_class().contains("amber"));
    }
}
