//! Platform identities, home-page descriptors and the validated catalog.

use std::sync::OnceLock;

use serde::Serialize;

use crate::data;
use crate::error::DashboardError;
use crate::icon::Icon;
use crate::model_hub::ModelTab;
use crate::use_case::{ShowcaseTab, UseCase};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlatformId {
    PredictiveOilPro,
    GridSmartPro,
    AutoVisionAi,
    RiskGuardPro,
    LogiSmart,
    TradeFlowPro,
    RoboVision,
    MedScanAi,
    AgenticFlowPro,
    MultimodalNexus,
    EdgeIntelPro,
    QuantumMindAi,
    SovereignShieldAi,
    AiModelHub,
}

impl PlatformId {
    /// Home-page order.
    pub const ALL: [PlatformId; 14] = [
        PlatformId::PredictiveOilPro,
        PlatformId::GridSmartPro,
        PlatformId::AutoVisionAi,
        PlatformId::RiskGuardPro,
        PlatformId::LogiSmart,
        PlatformId::TradeFlowPro,
        PlatformId::RoboVision,
        PlatformId::MedScanAi,
        PlatformId::AgenticFlowPro,
        PlatformId::MultimodalNexus,
        PlatformId::EdgeIntelPro,
        PlatformId::QuantumMindAi,
        PlatformId::SovereignShieldAi,
        PlatformId::AiModelHub,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            PlatformId::PredictiveOilPro => "predictive-oil-pro",
            PlatformId::GridSmartPro => "grid-smart-pro",
            PlatformId::AutoVisionAi => "auto-vision-ai",
            PlatformId::RiskGuardPro => "risk-guard-pro",
            PlatformId::LogiSmart => "logi-smart",
            PlatformId::TradeFlowPro => "trade-flow-pro",
            PlatformId::RoboVision => "robo-vision",
            PlatformId::MedScanAi => "med-scan-ai",
            PlatformId::AgenticFlowPro => "agentic-flow-pro",
            PlatformId::MultimodalNexus => "multimodal-nexus",
            PlatformId::EdgeIntelPro => "edge-intel-pro",
            PlatformId::QuantumMindAi => "quantum-mind-ai",
            PlatformId::SovereignShieldAi => "sovereign-shield-ai",
            PlatformId::AiModelHub => "ai-model-hub",
        }
    }

    pub fn path(self) -> String {
        format!("/{}", self.slug())
    }

    pub fn from_slug(slug: &str) -> Option<PlatformId> {
        PlatformId::ALL.into_iter().find(|id| id.slug() == slug)
    }
}

/// Home-page card for one platform.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlatformDescriptor {
    pub id: PlatformId,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub industry: &'static str,
    pub icon: Icon,
    pub color: &'static str,
    pub features: &'static [&'static str],
}

impl PlatformDescriptor {
    pub fn route(&self) -> String {
        self.id.path()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeaderInfo {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub color: &'static str,
}

/// Static copy around a chart dashboard's use-case content.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardChrome {
    pub live_label: &'static str,
    pub live_icon: Icon,
    pub alerts_heading: &'static str,
    pub alerts_icon: Icon,
    /// Appended to the use-case title in each alert's source line.
    pub alert_source_suffix: &'static str,
    pub impact_heading: &'static str,
    pub impact_icon: Icon,
    /// (heading, body) columns of the impact summary card.
    pub impact_notes: [(&'static str, &'static str); 3],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UseCaseDashboard {
    pub use_cases: Vec<UseCase>,
    pub chrome: DashboardChrome,
    /// Show the jittering grid-load readout with its real-time switch.
    pub load_readout: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Showcase {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub tabs: Vec<ShowcaseTab>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelHub {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub tabs: [ModelTab; 2],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum PlatformContent {
    UseCases(UseCaseDashboard),
    Showcase(Showcase),
    ModelHub(ModelHub),
}

impl PlatformContent {
    pub fn tab_count(&self) -> usize {
        match self {
            PlatformContent::UseCases(dashboard) => dashboard.use_cases.len(),
            PlatformContent::Showcase(showcase) => showcase.tabs.len(),
            PlatformContent::ModelHub(hub) => hub.tabs.len(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Platform {
    pub id: PlatformId,
    pub header: HeaderInfo,
    pub content: PlatformContent,
}

/// Every descriptor and every platform, validated once.
#[derive(Debug)]
pub struct Catalog {
    descriptors: Vec<PlatformDescriptor>,
    platforms: Vec<Platform>,
}

impl Catalog {
    pub fn load() -> Result<Catalog, DashboardError> {
        let descriptors = data::home::descriptors();
        let platforms = vec![
            data::oil_gas::platform()?,
            data::electricity::platform()?,
            data::finance::platform()?,
            data::model_hub::platform(),
        ]
        .into_iter()
        .chain(data::showcase::platforms())
        .collect();
        Self::from_parts(descriptors, platforms)
    }

    /// The process-wide catalog, built on first use.
    pub fn shared() -> Result<&'static Catalog, DashboardError> {
        static CATALOG: OnceLock<Result<Catalog, DashboardError>> = OnceLock::new();
        CATALOG.get_or_init(Catalog::load).as_ref().map_err(Clone::clone)
    }

    pub fn from_parts(
        descriptors: Vec<PlatformDescriptor>,
        mut platforms: Vec<Platform>,
    ) -> Result<Catalog, DashboardError> {
        for id in PlatformId::ALL {
            if !descriptors.iter().any(|d| d.id == id) {
                return Err(DashboardError::MissingPlatform(id));
            }
            let platform = platforms
                .iter()
                .find(|p| p.id == id)
                .ok_or(DashboardError::MissingPlatform(id))?;
            if platform.content.tab_count() == 0 {
                return Err(DashboardError::EmptyPlatform(id));
            }
        }
        platforms.sort_by_key(|p| PlatformId::ALL.iter().position(|id| *id == p.id));
        log::debug!(
            "catalog ready: {} descriptors, {} platforms",
            descriptors.len(),
            platforms.len()
        );
        Ok(Catalog {
            descriptors,
            platforms,
        })
    }

    pub fn descriptors(&self) -> &[PlatformDescriptor] {
        &self.descriptors
    }

    pub fn descriptor(&self, id: PlatformId) -> Option<&PlatformDescriptor> {
        self.descriptors.iter().find(|d| d.id == id)
    }

    pub fn platforms(&self) -> &[Platform] {
        &self.platforms
    }

    pub fn platform(&self, id: PlatformId) -> Result<&Platform, DashboardError> {
        self.platforms
            .iter()
            .find(|p| p.id == id)
            .ok_or(DashboardError::MissingPlatform(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_round_trip() {
        for id in PlatformId::ALL {
            assert_eq!(PlatformId::from_slug(id.slug()), Some(id));
        }
        assert_eq!(PlatformId::from_slug("predictive-oil"), None);
    }

    #[test]
    fn test_serialized_id_is_slug() {
        let json = serde_json::to_string(&PlatformId::SovereignShieldAi).unwrap();
        assert_eq!(json, "\"sovereign-shield-ai\"");
    }

    #[test]
    fn test_missing_platform_is_reported() {
        let err = Catalog::from_parts(data::home::descriptors(), vec![]).unwrap_err();
        assert_eq!(err, DashboardError::MissingPlatform(PlatformId::PredictiveOilPro));
    }

    #[test]
    fn test_platform_without_tabs_is_rejected() {
        let mut platforms = Catalog::load().unwrap().platforms().to_vec();
        if let PlatformContent::UseCases(dashboard) = &mut platforms[0].content {
            dashboard.use_cases.clear();
        }
        let err = Catalog::from_parts(data::home::descriptors(), platforms).unwrap_err();
        assert_eq!(err, DashboardError::EmptyPlatform(PlatformId::PredictiveOilPro));
    }
}
