use crate::alert::{AlertEntry, AlertKind};
use crate::icon::Icon;
use crate::metric::Metric;
use crate::platform::{HeaderInfo, Platform, PlatformContent, PlatformId, Showcase};
use crate::use_case::{Capability, ShowcaseTab, Tone};

pub fn platform() -> Platform {
    Platform {
        id: PlatformId::SovereignShieldAi,
        header: HeaderInfo {
            title: "SovereignShield AI",
            subtitle: "Privacy-First AI",
            color: "#dc2626",
        },
        content: PlatformContent::Showcase(Showcase {
            title: "SovereignShield AI",
            subtitle: "Privacy-first AI platform ensuring data sovereignty, regulatory compliance, and secure computation with full transparency and auditability",
            tabs: tabs(),
        }),
    }
}

fn tabs() -> Vec<ShowcaseTab> {
    vec![
        ShowcaseTab {
            label: "Data Sovereignty".to_string(),
            title: "Data Sovereignty & Local Processing".to_string(),
            description: "Complete data sovereignty ensuring all AI processing happens within specified jurisdictions with full control over data location and access.".to_string(),
            metrics: [
                Metric::new("Local Processing", "100%", "+100%", Icon::LocationOn)
                    .tinted("#1976d2"),
                Metric::new("Sovereignty Score", "99.8%", "+15%", Icon::Shield)
                    .tinted("#388e3c"),
                Metric::new("Cross-border Protection", "97.3%", "+34%", Icon::Security)
                    .tinted("#f57c00"),
                Metric::new("Compliance Rate", "99.9%", "+2.1%", Icon::Gavel)
                    .tinted("#7b1fa2"),
            ],
            alert: AlertEntry::new(AlertKind::Success, "100% local processing maintained across 247 jurisdictions. Zero cross-border data transfers detected.")
                .headline("Sovereignty Update:"),
            capabilities: [
                Capability::new(
                    "Jurisdiction Control",
                    [
                        ("Geographic Boundaries", Tone::Primary),
                        ("Data Residency", Tone::Secondary),
                        ("Access Controls", Tone::Success),
                    ],
                    "Strict geographic boundary enforcement ensuring data never leaves designated jurisdictions without explicit authorization.",
                ),
                Capability::new(
                    "Local Infrastructure",
                    [
                        ("On-Premise Deployment", Tone::Primary),
                        ("Edge Computing", Tone::Warning),
                        ("Air-Gapped Systems", Tone::Error),
                    ],
                    "Complete local infrastructure deployment with air-gapped systems and edge computing capabilities.",
                ),
            ],
        },
        ShowcaseTab {
            label: "Privacy-Preserving AI".to_string(),
            title: "Privacy-Preserving AI Techniques".to_string(),
            description: "Advanced privacy-preserving AI methods including differential privacy, federated learning, and homomorphic encryption for secure AI training.".to_string(),
            metrics: [
                Metric::new("Differential Privacy", "99.7%", "+8.4%", Icon::VerifiedUser)
                    .tinted("#1976d2"),
                Metric::new("Federated Learning", "96.2%", "+23%", Icon::Assessment)
                    .tinted("#388e3c"),
                Metric::new("Homomorphic Encryption", "94.8%", "+67%", Icon::Lock)
                    .tinted("#f57c00"),
                Metric::new("Privacy Budget", "89.1%", "+12%", Icon::TrendingUp)
                    .tinted("#7b1fa2"),
            ],
            alert: AlertEntry::new(AlertKind::Info, "Federated learning completed across 847 nodes with 96.2% accuracy. Privacy budget consumption: 89.1%.")
                .headline("Privacy Alert:"),
            capabilities: [
                Capability::new(
                    "Differential Privacy",
                    [
                        ("Noise Injection", Tone::Primary),
                        ("Privacy Budget", Tone::Secondary),
                        ("Epsilon Control", Tone::Warning),
                    ],
                    "Mathematical privacy guarantees through controlled noise injection and privacy budget management.",
                ),
                Capability::new(
                    "Homomorphic Encryption",
                    [
                        ("Encrypted Computation", Tone::Primary),
                        ("Zero Exposure", Tone::Success),
                        ("Secure Aggregation", Tone::Info),
                    ],
                    "Computation on encrypted data without ever decrypting, ensuring complete data confidentiality.",
                ),
            ],
        },
        ShowcaseTab {
            label: "Regulatory Compliance".to_string(),
            title: "Regulatory Compliance Management".to_string(),
            description: "Comprehensive regulatory compliance framework supporting GDPR, CCPA, and other global privacy regulations with automated monitoring.".to_string(),
            metrics: [
                Metric::new("GDPR Compliance", "99.9%", "+1.8%", Icon::Gavel)
                    .tinted("#1976d2"),
                Metric::new("CCPA Compliance", "99.7%", "+2.3%", Icon::Security)
                    .tinted("#388e3c"),
                Metric::new("Audit Readiness", "98.4%", "+12%", Icon::Assessment)
                    .tinted("#f57c00"),
                Metric::new("Policy Adherence", "97.8%", "+8.9%", Icon::Business)
                    .tinted("#7b1fa2"),
            ],
            alert: AlertEntry::new(AlertKind::Warning, "GDPR audit scheduled for next week. All systems show 99.9% compliance with automated evidence collection ready.")
                .headline("Compliance Alert:"),
            capabilities: [
                Capability::new(
                    "Automated Compliance",
                    [
                        ("GDPR Automation", Tone::Primary),
                        ("Right to Erasure", Tone::Secondary),
                        ("Consent Management", Tone::Success),
                    ],
                    "Automated compliance monitoring with real-time policy enforcement and consent management.",
                ),
                Capability::new(
                    "Audit Trail Management",
                    [
                        ("Immutable Logs", Tone::Primary),
                        ("Chain of Custody", Tone::Warning),
                        ("Evidence Collection", Tone::Info),
                    ],
                    "Comprehensive audit trail management with immutable logging and automated evidence collection.",
                ),
            ],
        },
        ShowcaseTab {
            label: "Secure Computation".to_string(),
            title: "Secure Multi-Party Computation".to_string(),
            description: "Advanced secure computation protocols enabling collaborative AI training without revealing sensitive data to any party.".to_string(),
            metrics: [
                Metric::new("Secure Multi-party", "96.7%", "+18%", Icon::Lock)
                    .tinted("#1976d2"),
                Metric::new("Zero-Knowledge Proofs", "94.3%", "+45%", Icon::VerifiedUser)
                    .tinted("#388e3c"),
                Metric::new("Computation Speed", "847 ops/sec", "+89%", Icon::TrendingUp)
                    .tinted("#f57c00"),
                Metric::new("Security Level", "256-bit", "+100%", Icon::Security)
                    .tinted("#7b1fa2"),
            ],
            alert: AlertEntry::new(AlertKind::Success, "Multi-party computation completed with 96.7% efficiency. Zero-knowledge proofs verified across all participants.")
                .headline("Secure Computation:"),
            capabilities: [
                Capability::new(
                    "Multi-Party Protocols",
                    [
                        ("Secret Sharing", Tone::Primary),
                        ("Garbled Circuits", Tone::Secondary),
                        ("Oblivious Transfer", Tone::Success),
                    ],
                    "Advanced cryptographic protocols enabling secure computation across multiple parties without data exposure.",
                ),
                Capability::new(
                    "Zero-Knowledge Systems",
                    [
                        ("zk-SNARKs", Tone::Primary),
                        ("Proof Verification", Tone::Warning),
                        ("Privacy Preservation", Tone::Success),
                    ],
                    "Zero-knowledge proof systems enabling verification of computation correctness without revealing inputs.",
                ),
            ],
        },
        ShowcaseTab {
            label: "Transparency".to_string(),
            title: "AI Transparency & Explainability".to_string(),
            description: "Complete AI transparency with explainable models, decision tracking, and stakeholder-friendly explanations for all AI operations.".to_string(),
            metrics: [
                Metric::new("Model Explainability", "93.8%", "+28%", Icon::Visibility)
                    .tinted("#1976d2"),
                Metric::new("Decision Transparency", "91.2%", "+34%", Icon::Assessment)
                    .tinted("#388e3c"),
                Metric::new("Audit Trail Coverage", "99.6%", "+5.7%", Icon::Gavel)
                    .tinted("#f57c00"),
                Metric::new("Stakeholder Trust", "89.4%", "+42%", Icon::Business)
                    .tinted("#7b1fa2"),
            ],
            alert: AlertEntry::new(AlertKind::Info, "Model explanations generated for 2,847 decisions today. Stakeholder trust score: 89.4%.")
                .headline("Transparency Update:"),
            capabilities: [
                Capability::new(
                    "Explainable AI",
                    [
                        ("LIME/SHAP", Tone::Primary),
                        ("Feature Attribution", Tone::Secondary),
                        ("Counterfactual Analysis", Tone::Success),
                    ],
                    "Advanced explainability methods providing clear insights into AI decision-making processes.",
                ),
                Capability::new(
                    "Decision Documentation",
                    [
                        ("Decision Trees", Tone::Primary),
                        ("Reasoning Chains", Tone::Warning),
                        ("Stakeholder Reports", Tone::Info),
                    ],
                    "Comprehensive decision documentation with automated stakeholder reporting and reasoning chain tracking.",
                ),
            ],
        },
        ShowcaseTab {
            label: "Cross-Border Data".to_string(),
            title: "Cross-Border Data Management".to_string(),
            description: "Sophisticated cross-border data management ensuring compliance with international data transfer regulations and sovereignty requirements.".to_string(),
            metrics: [
                Metric::new("Data Localization", "100%", "+100%", Icon::LocationOn)
                    .tinted("#1976d2"),
                Metric::new("Transfer Compliance", "98.7%", "+12%", Icon::Gavel)
                    .tinted("#388e3c"),
                Metric::new("Jurisdiction Mapping", "95.3%", "+67%", Icon::Assessment)
                    .tinted("#f57c00"),
                Metric::new("Risk Mitigation", "97.1%", "+23%", Icon::Security)
                    .tinted("#7b1fa2"),
            ],
            alert: AlertEntry::new(AlertKind::Error, "Data transfer request from Region 7 blocked. Jurisdiction compliance check failed. Alternative processing route activated.")
                .headline("Border Control Alert:"),
            capabilities: [
                Capability::new(
                    "Transfer Adequacy",
                    [
                        ("Adequacy Decisions", Tone::Primary),
                        ("Standard Contractual Clauses", Tone::Secondary),
                        ("Binding Corporate Rules", Tone::Success),
                    ],
                    "Automated assessment of data transfer adequacy with support for multiple legal frameworks.",
                ),
                Capability::new(
                    "Jurisdiction Mapping",
                    [
                        ("Legal Framework Analysis", Tone::Primary),
                        ("Risk Assessment", Tone::Warning),
                        ("Compliance Routing", Tone::Info),
                    ],
                    "Intelligent jurisdiction mapping with automated compliance routing and risk assessment for data transfers.",
                ),
            ],
        },
    ]
}
