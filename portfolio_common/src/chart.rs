//! Chart datasets and the rules that bind them to axes.
//!
//! A dataset is a list of records sharing one ordered key set. The first key is
//! always the category axis, the second the primary series and the third, when
//! present, the secondary series. Any further keys ride along for export but
//! are never plotted.

use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

use crate::error::DashboardError;

/// A single cell of a chart record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ChartValue {
    Number(f64),
    Text(String),
}

impl ChartValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            ChartValue::Number(n) => Some(*n),
            ChartValue::Text(_) => None,
        }
    }

    /// Axis label text. Whole numbers print without a fraction.
    pub fn label(&self) -> String {
        match self {
            ChartValue::Number(n) if n.fract() == 0.0 => format!("{}", *n as i64),
            ChartValue::Number(n) => format!("{}", n),
            ChartValue::Text(s) => s.clone(),
        }
    }
}

impl From<i32> for ChartValue {
    fn from(n: i32) -> Self {
        ChartValue::Number(n as f64)
    }
}

impl From<f64> for ChartValue {
    fn from(n: f64) -> Self {
        ChartValue::Number(n)
    }
}

impl From<&str> for ChartValue {
    fn from(s: &str) -> Self {
        ChartValue::Text(s.to_string())
    }
}

/// Rendering archetype carried by every chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    /// Bars for the primary series, a line for the secondary.
    Composed,
    /// A single filled area for the primary series.
    Area,
    /// Two translucent areas, primary over secondary.
    OverlaidArea,
    /// Side-by-side bars for both series.
    GroupedBar,
}

impl ChartKind {
    pub fn plots_secondary(self) -> bool {
        !matches!(self, ChartKind::Area)
    }
}

/// Positional kind assignment used when a use-case table is assembled.
///
/// The demo dashboards pick a chart archetype from the chart's position. The
/// rotation is applied once at construction and stored on the `ChartSpec`, so
/// rendering never looks at the position again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    /// Composed, area.
    TwoWay,
    /// Composed, overlaid area, grouped bar.
    ThreeWay,
}

impl Rotation {
    pub fn kind_for(self, position: usize) -> ChartKind {
        match self {
            Rotation::TwoWay => match position % 2 {
                0 => ChartKind::Composed,
                _ => ChartKind::Area,
            },
            Rotation::ThreeWay => match position % 3 {
                0 => ChartKind::Composed,
                1 => ChartKind::OverlaidArea,
                _ => ChartKind::GroupedBar,
            },
        }
    }
}

/// Unvalidated chart literal as written in the data tables.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartDraft {
    pub title: String,
    pub records: Vec<Vec<(String, ChartValue)>>,
}

impl ChartDraft {
    pub fn new(title: &str, records: Vec<Vec<(String, ChartValue)>>) -> Self {
        Self {
            title: title.to_string(),
            records,
        }
    }

    /// Validates the records and fixes the rendering kind.
    pub fn finish(self, kind: ChartKind) -> Result<ChartSpec, DashboardError> {
        let data = ChartData::from_records(&self.title, self.records)?;
        Ok(ChartSpec {
            title: self.title,
            kind,
            data,
        })
    }
}

/// Builds a [`ChartDraft`] from JSON-like record literals.
///
/// ```
/// use portfolio_common::{chart, ChartKind};
///
/// let spec = chart!("Well Performance Analysis";
///     { "well": "W-001", "production": 95, "efficiency": 98 },
///     { "well": "W-002", "production": 87, "efficiency": 94 },
/// )
/// .finish(ChartKind::Area)
/// .unwrap();
/// assert_eq!(spec.data.category_key(), "well");
/// ```
#[macro_export]
macro_rules! chart {
    ($title:expr; $({ $($key:literal : $value:expr),+ $(,)? }),+ $(,)?) => {
        $crate::ChartDraft::new(
            $title,
            vec![$(vec![$(($key.to_string(), $crate::ChartValue::from($value))),+]),+],
        )
    };
}

/// A validated, homogeneous dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartData {
    columns: Vec<String>,
    rows: Vec<Vec<ChartValue>>,
}

impl ChartData {
    pub fn from_records(
        chart: &str,
        records: Vec<Vec<(String, ChartValue)>>,
    ) -> Result<Self, DashboardError> {
        let first = records.first().ok_or_else(|| DashboardError::EmptyChart {
            chart: chart.to_string(),
        })?;
        if first.len() < 2 {
            return Err(DashboardError::TooFewKeys {
                chart: chart.to_string(),
                found: first.len(),
            });
        }

        let columns: Vec<String> = first.iter().map(|(key, _)| key.clone()).collect();
        let heterogeneous = |row| DashboardError::HeterogeneousRecord {
            chart: chart.to_string(),
            row,
        };
        if columns
            .iter()
            .enumerate()
            .any(|(i, key)| columns[..i].contains(key))
        {
            return Err(heterogeneous(0));
        }

        let mut rows = Vec::with_capacity(records.len());
        for (row, record) in records.iter().enumerate() {
            if record.len() != columns.len() {
                return Err(heterogeneous(row));
            }
            let mut values = Vec::with_capacity(columns.len());
            for (i, key) in columns.iter().enumerate() {
                let value = record
                    .iter()
                    .find(|(k, _)| k == key)
                    .map(|(_, v)| v.clone())
                    .ok_or_else(|| heterogeneous(row))?;
                if (i == 1 || i == 2) && value.as_number().is_none() {
                    return Err(DashboardError::NonNumericSeries {
                        chart: chart.to_string(),
                        row,
                        key: key.clone(),
                    });
                }
                values.push(value);
            }
            rows.push(values);
        }
        Ok(Self { columns, rows })
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn category_key(&self) -> &str {
        &self.columns[0]
    }

    pub fn primary_key(&self) -> &str {
        &self.columns[1]
    }

    pub fn secondary_key(&self) -> Option<&str> {
        self.columns.get(2).map(String::as_str)
    }

    /// Rows projected onto the axis bindings.
    pub fn points(&self) -> Vec<ChartPoint> {
        self.rows
            .iter()
            .map(|row| ChartPoint {
                category: row[0].label(),
                series_a: row[1].as_number().unwrap_or_default(),
                series_b: row.get(2).and_then(ChartValue::as_number),
            })
            .collect()
    }

    /// Hover text for record `index`: the category, then one `key: value`
    /// line per plotted series.
    pub fn tooltip(&self, index: usize, include_secondary: bool) -> Option<String> {
        let row = self.rows.get(index)?;
        let series = if include_secondary { 2 } else { 1 };
        let mut lines = vec![row[0].label()];
        lines.extend(
            self.columns
                .iter()
                .zip(row)
                .skip(1)
                .take(series)
                .map(|(key, value)| format!("{}: {}", key, value.label())),
        );
        Some(lines.join("\n"))
    }

    /// Largest plotted value, or 0 for an all-negative dataset.
    pub fn series_max(&self, include_secondary: bool) -> f64 {
        self.points()
            .iter()
            .flat_map(|p| {
                let b = if include_secondary { p.series_b } else { None };
                std::iter::once(p.series_a).chain(b)
            })
            .fold(0.0, f64::max)
    }
}

impl Serialize for ChartData {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.rows.len()))?;
        for row in &self.rows {
            seq.serialize_element(&RecordRef {
                columns: &self.columns,
                row,
            })?;
        }
        seq.end()
    }
}

/// Serialises one row as an object in column order.
struct RecordRef<'a> {
    columns: &'a [String],
    row: &'a [ChartValue],
}

impl Serialize for RecordRef<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        for (key, value) in self.columns.iter().zip(self.row) {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// One record bound to the category axis and up to two series.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    pub category: String,
    pub series_a: f64,
    pub series_b: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub title: String,
    pub kind: ChartKind,
    pub data: ChartData,
}

impl ChartSpec {
    /// Pretty JSON of the chart for the chart card's export action.
    pub fn export_json(&self) -> Result<String, DashboardError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| DashboardError::Export(e.to_string()))
    }

    /// File name offered for the export download.
    pub fn export_file_name(&self) -> String {
        let slug: String = self
            .title
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '-' })
            .collect();
        let slug = slug
            .split('-')
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join("-");
        format!("{}.json", slug)
    }
}

/// Rounds an axis maximum up to 1, 2 or 5 times a power of ten.
pub fn nice_ceiling(value: f64) -> f64 {
    if value <= 0.0 || !value.is_finite() {
        return 1.0;
    }
    let magnitude = 10f64.powf(value.log10().floor());
    let normalized = value / magnitude;
    let step = if normalized <= 1.0 {
        1.0
    } else if normalized <= 2.0 {
        2.0
    } else if normalized <= 5.0 {
        5.0
    } else {
        10.0
    };
    step * magnitude
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(pairs: &[(&str, ChartValue)]) -> Vec<(String, ChartValue)> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.clone())).collect()
    }

    #[test]
    fn test_binds_keys_by_position() {
        let spec = chart!("Grid Performance Metrics";
            { "region": "North", "load": 2847, "capacity": 3200, "reliability": 99.9 },
            { "region": "South", "load": 3154, "capacity": 3400, "reliability": 99.8 },
        )
        .finish(ChartKind::Composed)
        .unwrap();

        assert_eq!(spec.data.category_key(), "region");
        assert_eq!(spec.data.primary_key(), "load");
        assert_eq!(spec.data.secondary_key(), Some("capacity"));
        let points = spec.data.points();
        assert_eq!(points[1].category, "South");
        assert_eq!(points[1].series_a, 3154.0);
        assert_eq!(points[1].series_b, Some(3400.0));
    }

    #[test]
    fn test_two_key_dataset_has_no_secondary() {
        let spec = chart!("Output"; { "product": "Diesel", "volume": 145000 })
            .finish(ChartKind::Area)
            .unwrap();
        assert_eq!(spec.data.secondary_key(), None);
        assert_eq!(spec.data.points()[0].series_b, None);
    }

    #[test]
    fn test_rejects_empty_dataset() {
        let err = ChartDraft::new("Empty", vec![]).finish(ChartKind::Area).unwrap_err();
        assert_eq!(err, DashboardError::EmptyChart { chart: "Empty".to_string() });
    }

    #[test]
    fn test_rejects_single_key() {
        let draft = ChartDraft::new("Thin", vec![record(&[("month", "Jan".into())])]);
        let err = draft.finish(ChartKind::Area).unwrap_err();
        assert_eq!(err, DashboardError::TooFewKeys { chart: "Thin".to_string(), found: 1 });
    }

    #[test]
    fn test_rejects_heterogeneous_records() {
        let draft = ChartDraft::new(
            "Mixed",
            vec![
                record(&[("month", "Jan".into()), ("incidents", 2.into())]),
                record(&[("month", "Feb".into()), ("nearMiss", 12.into())]),
            ],
        );
        let err = draft.finish(ChartKind::Composed).unwrap_err();
        assert_eq!(err, DashboardError::HeterogeneousRecord { chart: "Mixed".to_string(), row: 1 });
    }

    #[test]
    fn test_rejects_duplicate_keys() {
        let draft = ChartDraft::new(
            "Doubled",
            vec![record(&[("month", "Jan".into()), ("month", 2.into()), ("cost", 1.into())])],
        );
        assert!(matches!(
            draft.finish(ChartKind::Composed),
            Err(DashboardError::HeterogeneousRecord { row: 0, .. })
        ));
    }

    #[test]
    fn test_accepts_reordered_keys() {
        let draft = ChartDraft::new(
            "Reordered",
            vec![
                record(&[("week", "W1".into()), ("forecast", 95.2.into()), ("actual", 97.1.into())]),
                record(&[("actual", 95.9.into()), ("week", "W2".into()), ("forecast", 96.8.into())]),
            ],
        );
        let spec = draft.finish(ChartKind::Area).unwrap();
        assert_eq!(spec.data.points()[1].series_a, 96.8);
        assert_eq!(spec.data.points()[1].series_b, Some(95.9));
    }

    #[test]
    fn test_rejects_text_in_bound_series() {
        let draft = ChartDraft::new(
            "Lines",
            vec![record(&[("line", "TL-001".into()), ("status", "Normal".into())])],
        );
        let err = draft.finish(ChartKind::Composed).unwrap_err();
        assert_eq!(
            err,
            DashboardError::NonNumericSeries {
                chart: "Lines".to_string(),
                row: 0,
                key: "status".to_string()
            }
        );
    }

    #[test]
    fn test_text_allowed_beyond_bound_series() {
        let spec = chart!("Transmission Line Monitoring";
            { "line": "TL-003", "voltage": 400, "current": 1320, "temperature": 68, "status": "Monitor" },
        )
        .finish(ChartKind::OverlaidArea)
        .unwrap();
        assert_eq!(spec.data.columns().len(), 5);
    }

    #[test]
    fn test_rotation() {
        assert_eq!(Rotation::ThreeWay.kind_for(0), ChartKind::Composed);
        assert_eq!(Rotation::ThreeWay.kind_for(1), ChartKind::OverlaidArea);
        assert_eq!(Rotation::ThreeWay.kind_for(2), ChartKind::GroupedBar);
        assert_eq!(Rotation::ThreeWay.kind_for(3), ChartKind::Composed);
        assert_eq!(Rotation::TwoWay.kind_for(0), ChartKind::Composed);
        assert_eq!(Rotation::TwoWay.kind_for(1), ChartKind::Area);
        assert_eq!(Rotation::TwoWay.kind_for(2), ChartKind::Composed);
    }

    #[test]
    fn test_tooltip_lists_plotted_series() {
        let data = ChartData::from_records(
            "Load",
            vec![
                vec![
                    ("region".to_string(), "North".into()),
                    ("load".to_string(), ChartValue::from(4200)),
                    ("capacity".to_string(), ChartValue::from(5000.5)),
                ],
            ],
        )
        .unwrap();
        assert_eq!(data.tooltip(0, true).unwrap(), "North\nload: 4200\ncapacity: 5000.5");
        assert_eq!(data.tooltip(0, false).unwrap(), "North\nload: 4200");
        assert_eq!(data.tooltip(1, true), None);
    }

    #[test]
    fn test_series_max() {
        let spec = chart!("Safety Metrics Tracking";
            { "month": "Jan", "incidents": 2, "nearMiss": 15 },
            { "month": "Feb", "incidents": 1, "nearMiss": 12 },
        )
        .finish(ChartKind::Composed)
        .unwrap();
        assert_eq!(spec.data.series_max(false), 2.0);
        assert_eq!(spec.data.series_max(true), 15.0);
    }

    #[test]
    fn test_nice_ceiling() {
        assert_eq!(nice_ceiling(0.0), 1.0);
        assert_eq!(nice_ceiling(87.0), 100.0);
        assert_eq!(nice_ceiling(150.0), 200.0);
        assert_eq!(nice_ceiling(4200.0), 5000.0);
        assert_eq!(nice_ceiling(1000.0), 1000.0);
    }

    #[test]
    fn test_export_keeps_column_order() {
        let spec = chart!("Demand Forecasting Accuracy";
            { "week": "W1", "forecast": 95.2, "actual": 97.1 },
        )
        .finish(ChartKind::Area)
        .unwrap();
        let json = spec.export_json().unwrap();
        let week = json.find("\"week\"").unwrap();
        let forecast = json.find("\"forecast\"").unwrap();
        let actual = json.find("\"actual\"").unwrap();
        assert!(week < forecast && forecast < actual);

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["kind"], "area");
        assert_eq!(value["data"][0]["week"], "W1");
        assert_eq!(value["data"][0]["actual"], 97.1);
        assert_eq!(spec.export_file_name(), "demand-forecasting-accuracy.json");
    }
}
