//! Model catalogue entries, category filtering and the statistics strip.

use serde::Serialize;

use crate::icon::Icon;
use crate::use_case::Tone;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelCategory {
    Language,
    Multimodal,
    Vision,
    Audio,
    Code,
    Reasoning,
}

impl ModelCategory {
    pub fn name(self) -> &'static str {
        match self {
            ModelCategory::Language => "language",
            ModelCategory::Multimodal => "multimodal",
            ModelCategory::Vision => "vision",
            ModelCategory::Audio => "audio",
            ModelCategory::Code => "code",
            ModelCategory::Reasoning => "reasoning",
        }
    }

    pub fn icon(self) -> Icon {
        match self {
            ModelCategory::Language => Icon::Language,
            ModelCategory::Multimodal => Icon::ModelTraining,
            ModelCategory::Vision => Icon::Image,
            ModelCategory::Audio => Icon::AudioFile,
            ModelCategory::Code => Icon::Code,
            ModelCategory::Reasoning => Icon::Psychology,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(ModelCategory),
}

impl CategoryFilter {
    /// Chip order of the filter bar.
    pub const CHOICES: [CategoryFilter; 7] = [
        CategoryFilter::All,
        CategoryFilter::Only(ModelCategory::Multimodal),
        CategoryFilter::Only(ModelCategory::Language),
        CategoryFilter::Only(ModelCategory::Vision),
        CategoryFilter::Only(ModelCategory::Reasoning),
        CategoryFilter::Only(ModelCategory::Code),
        CategoryFilter::Only(ModelCategory::Audio),
    ];

    pub fn matches(self, category: ModelCategory) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => wanted == category,
        }
    }

    /// Capitalised chip label, e.g. `"Multimodal"`.
    pub fn label(self) -> String {
        let name = match self {
            CategoryFilter::All => "all",
            CategoryFilter::Only(category) => category.name(),
        };
        let mut chars = name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    pub fn icon(self) -> Icon {
        match self {
            CategoryFilter::All => Icon::Science,
            CategoryFilter::Only(category) => category.icon(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AiModel {
    pub id: &'static str,
    pub name: &'static str,
    pub organization: &'static str,
    pub parameters: &'static str,
    pub capabilities: &'static [&'static str],
    pub license: &'static str,
    pub performance: Option<u8>,
    pub downloads: Option<&'static str>,
    pub trending: bool,
    pub released: &'static str,
    pub description: &'static str,
    pub category: ModelCategory,
    pub model_url: Option<&'static str>,
    pub context_length: Option<&'static str>,
    pub architecture: Option<&'static str>,
}

impl AiModel {
    pub fn performance_or_zero(&self) -> u8 {
        self.performance.unwrap_or(0)
    }

    pub fn is_open_license(&self) -> bool {
        ["Open", "Apache", "MIT"]
            .iter()
            .any(|marker| self.license.contains(marker))
    }

    pub fn license_tone(&self) -> Tone {
        if self.is_open_license() {
            Tone::Success
        } else {
            Tone::Warning
        }
    }

    /// First three capabilities and the size of the remainder.
    pub fn capability_preview(&self) -> (&[&'static str], Option<String>) {
        let shown = &self.capabilities[..self.capabilities.len().min(3)];
        let hidden = self.capabilities.len() - shown.len();
        let more = if hidden > 0 {
            Some(format!("+{} more", hidden))
        } else {
            None
        };
        (shown, more)
    }
}

pub fn performance_tone(performance: u8) -> Tone {
    match performance {
        95.. => Tone::Success,
        90..=94 => Tone::Primary,
        85..=89 => Tone::Warning,
        _ => Tone::Error,
    }
}

/// One tab of the hub: a label and its model list.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ModelTab {
    pub label: &'static str,
    pub icon: Icon,
    pub models: &'static [AiModel],
}

/// Models of `models` admitted by `filter`, in their original order.
pub fn filter_models(models: &[AiModel], filter: CategoryFilter) -> Vec<&AiModel> {
    models.iter().filter(|m| filter.matches(m.category)).collect()
}

/// Message shown when a filter leaves nothing to display.
pub fn empty_state_message(filter: CategoryFilter) -> String {
    match filter {
        CategoryFilter::All => "No models in this collection yet.".to_string(),
        CategoryFilter::Only(category) => {
            format!("No {} models in this collection.", category.name())
        }
    }
}

/// Summary strip computed over a whole tab, ignoring the category filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ModelStats {
    pub total: usize,
    pub trending: usize,
    pub average_performance: u32,
    pub open_source: usize,
}

impl ModelStats {
    pub fn of(models: &[AiModel]) -> Self {
        let total = models.len();
        let sum: u32 = models.iter().map(|m| m.performance_or_zero() as u32).sum();
        let average_performance = if total == 0 {
            0
        } else {
            (sum as f64 / total as f64).round() as u32
        };
        Self {
            total,
            trending: models.iter().filter(|m| m.trending).count(),
            average_performance,
            open_source: models.iter().filter(|m| m.is_open_license()).count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model(id: &'static str, category: ModelCategory, performance: Option<u8>) -> AiModel {
        AiModel {
            id,
            name: id,
            organization: "Test Lab",
            parameters: "7B",
            capabilities: &["Chat", "Summaries", "Translation", "Tool Use", "Planning"],
            license: "Commercial",
            performance,
            downloads: None,
            trending: false,
            released: "2025",
            description: "",
            category,
            model_url: None,
            context_length: None,
            architecture: None,
        }
    }

    #[test]
    fn test_performance_tone_thresholds() {
        assert_eq!(performance_tone(97), Tone::Success);
        assert_eq!(performance_tone(95), Tone::Success);
        assert_eq!(performance_tone(94), Tone::Primary);
        assert_eq!(performance_tone(90), Tone::Primary);
        assert_eq!(performance_tone(89), Tone::Warning);
        assert_eq!(performance_tone(85), Tone::Warning);
        assert_eq!(performance_tone(84), Tone::Error);
        assert_eq!(performance_tone(0), Tone::Error);
    }

    #[test]
    fn test_capability_preview() {
        let m = model("a", ModelCategory::Language, Some(90));
        let (shown, more) = m.capability_preview();
        assert_eq!(shown, &["Chat", "Summaries", "Translation"]);
        assert_eq!(more.as_deref(), Some("+2 more"));
    }

    #[test]
    fn test_missing_performance_counts_as_zero() {
        let models = [
            model("a", ModelCategory::Language, Some(90)),
            model("b", ModelCategory::Code, None),
            model("c", ModelCategory::Code, Some(95)),
        ];
        assert_eq!(ModelStats::of(&models).average_performance, 62);
        assert_eq!(ModelStats::of(&[]).average_performance, 0);
    }

    #[test]
    fn test_labels() {
        assert_eq!(CategoryFilter::All.label(), "All");
        assert_eq!(CategoryFilter::Only(ModelCategory::Multimodal).label(), "Multimodal");
        assert_eq!(
            empty_state_message(CategoryFilter::Only(ModelCategory::Audio)),
            "No audio models in this collection."
        );
    }
}
