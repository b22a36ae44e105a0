use crate::icon::Icon;
use crate::platform::{PlatformDescriptor, PlatformId};

pub const HEADER_TITLE: &str = "AI MVP Platforms Portfolio";
pub const CONTACT_LABEL: &str = "Contact Sales";
pub const HERO_TITLE: &str = "Professional AI Solutions";
pub const HERO_SUBTITLE: &str =
    "Cutting-edge AI platforms designed to transform industries and drive business growth";
pub const HERO_BADGES: [&str; 4] = ["Enterprise Ready", "Demo Available", "Scalable", "AI-Powered"];
pub const LAUNCH_LABEL: &str = "Launch Demo";
pub const CTA_TITLE: &str = "Ready to Transform Your Business?";
pub const CTA_BODY: &str = "Experience the power of AI-driven solutions tailored for your industry. \
Schedule a personalized demo and see how our platforms can drive your success.";
pub const CTA_LABEL: &str = "Schedule Demo";

pub fn descriptors() -> Vec<PlatformDescriptor> {
    vec![
        PlatformDescriptor {
            id: PlatformId::PredictiveOilPro,
            title: "PredictiveOil Pro",
            subtitle: "Predictive Maintenance Dashboard",
            description: "AI-powered equipment monitoring and failure prediction for oil & gas operations",
            industry: "Oil & Gas",
            icon: Icon::Build,
            color: "#f59e0b",
            features: &["Real-time Monitoring", "Failure Prediction", "Cost Optimization"],
        },
        PlatformDescriptor {
            id: PlatformId::GridSmartPro,
            title: "GridSmart Pro",
            subtitle: "Smart Grid Management",
            description: "Advanced grid optimization and energy distribution management system",
            industry: "Electricity",
            icon: Icon::Power,
            color: "#3b82f6",
            features: &["Load Balancing", "Outage Prevention", "Energy Optimization"],
        },
        PlatformDescriptor {
            id: PlatformId::AutoVisionAi,
            title: "AutoVision AI",
            subtitle: "Quality Control Dashboard",
            description: "Computer vision-powered quality assurance for automotive manufacturing",
            industry: "Automotive",
            icon: Icon::DirectionsCar,
            color: "#dc2626",
            features: &["Defect Detection", "Quality Analytics", "Process Optimization"],
        },
        PlatformDescriptor {
            id: PlatformId::RiskGuardPro,
            title: "RiskGuard Pro",
            subtitle: "AI Risk Assessment",
            description: "Comprehensive risk analysis and fraud detection for financial institutions",
            industry: "Finance",
            icon: Icon::Security,
            color: "#059669",
            features: &["Fraud Detection", "Risk Scoring", "Compliance Monitoring"],
        },
        PlatformDescriptor {
            id: PlatformId::LogiSmart,
            title: "LogiSmart",
            subtitle: "Route Optimization",
            description: "AI-driven logistics and supply chain optimization platform",
            industry: "Logistics",
            icon: Icon::LocalShipping,
            color: "#7c3aed",
            features: &["Route Planning", "Fleet Management", "Cost Reduction"],
        },
        PlatformDescriptor {
            id: PlatformId::TradeFlowPro,
            title: "TradeFlow Pro",
            subtitle: "Supply Chain Optimization",
            description: "Global trade and import/export management with AI insights",
            industry: "Import/Export",
            icon: Icon::Flight,
            color: "#0891b2",
            features: &["Trade Analytics", "Customs Automation", "Supply Optimization"],
        },
        PlatformDescriptor {
            id: PlatformId::RoboVision,
            title: "RoboVision",
            subtitle: "Computer Vision Platform",
            description: "Advanced robotics control and computer vision processing system",
            industry: "Robotics",
            icon: Icon::SmartToy,
            color: "#ea580c",
            features: &["Object Recognition", "Motion Planning", "Autonomous Control"],
        },
        PlatformDescriptor {
            id: PlatformId::MedScanAi,
            title: "MedScan AI",
            subtitle: "Medical Imaging Analysis",
            description: "AI-powered medical image analysis and diagnostic assistance",
            industry: "Healthcare",
            icon: Icon::HealthAndSafety,
            color: "#be185d",
            features: &["Image Analysis", "Diagnostic Support", "Patient Insights"],
        },
        PlatformDescriptor {
            id: PlatformId::AgenticFlowPro,
            title: "AgenticFlow Pro",
            subtitle: "Autonomous AI Agents",
            description: "Next-gen autonomous AI agents that work independently across your enterprise",
            industry: "Enterprise AI",
            icon: Icon::Psychology,
            color: "#6366f1",
            features: &["Autonomous Decision Making", "Multi-Agent Collaboration", "Workflow Automation"],
        },
        PlatformDescriptor {
            id: PlatformId::MultimodalNexus,
            title: "MultiModal Nexus",
            subtitle: "Vision + Language AI",
            description: "Advanced multimodal AI processing text, images, video, and audio in real-time",
            industry: "Multimodal AI",
            icon: Icon::Visibility,
            color: "#8b5cf6",
            features: &["Cross-Modal Understanding", "Real-time Processing", "Content Generation"],
        },
        PlatformDescriptor {
            id: PlatformId::EdgeIntelPro,
            title: "EdgeIntel Pro",
            subtitle: "Real-time Edge AI",
            description: "Ultra-fast AI inference at the edge for industrial IoT and autonomous systems",
            industry: "Edge Computing",
            icon: Icon::Memory,
            color: "#10b981",
            features: &["Sub-millisecond Latency", "Offline Operation", "Edge Optimization"],
        },
        PlatformDescriptor {
            id: PlatformId::QuantumMindAi,
            title: "QuantumMind AI",
            subtitle: "Quantum-Enhanced ML",
            description: "Revolutionary quantum-classical hybrid AI for complex optimization problems",
            industry: "Quantum Computing",
            icon: Icon::AutoFixHigh,
            color: "#f59e0b",
            features: &["Quantum Speedup", "Complex Optimization", "Scientific Computing"],
        },
        PlatformDescriptor {
            id: PlatformId::SovereignShieldAi,
            title: "SovereignShield AI",
            subtitle: "Privacy-First AI",
            description: "Compliant AI platform ensuring data sovereignty and regulatory compliance",
            industry: "Data Privacy",
            icon: Icon::Shield,
            color: "#dc2626",
            features: &["Data Sovereignty", "Regulatory Compliance", "Local Processing"],
        },
        PlatformDescriptor {
            id: PlatformId::AiModelHub,
            title: "AI Model Hub 2025",
            subtitle: "Latest AI Models",
            description: "Comprehensive showcase of the most advanced AI models from HuggingFace and AVIX Suite",
            industry: "AI Research",
            icon: Icon::CloudDone,
            color: "#6366f1",
            features: &["Latest Models", "Performance Tracking", "Multi-Platform Coverage"],
        },
    ]
}
