use crate::alert::{AlertEntry, AlertKind};
use crate::icon::Icon;
use crate::metric::Metric;
use crate::platform::{HeaderInfo, Platform, PlatformContent, PlatformId, Showcase};
use crate::use_case::{Capability, ShowcaseTab, Tone};

pub fn platform() -> Platform {
    Platform {
        id: PlatformId::TradeFlowPro,
        header: HeaderInfo {
            title: "TradeFlow Pro",
            subtitle: "Supply Chain Optimization",
            color: "#0891b2",
        },
        content: PlatformContent::Showcase(Showcase {
            title: "TradeFlow Pro",
            subtitle: "Comprehensive trade intelligence platform for customs automation, supply chain tracking, and international commerce optimization",
            tabs: tabs(),
        }),
    }
}

fn tabs() -> Vec<ShowcaseTab> {
    vec![
        ShowcaseTab {
            label: "Customs Automation".to_string(),
            title: "Customs Automation & Compliance".to_string(),
            description: "AI-powered customs documentation processing with automated compliance checking and intelligent classification systems.".to_string(),
            metrics: [
                Metric::new("Clearance Time", "4.2 hrs", "-34%", Icon::Schedule)
                    .tinted("#1976d2"),
                Metric::new("Compliance Rate", "99.8%", "+1.2%", Icon::Gavel)
                    .tinted("#388e3c"),
                Metric::new("Document Accuracy", "98.9%", "+5.1%", Icon::Assessment)
                    .tinted("#f57c00"),
                Metric::new("Processing Cost", "$127", "-28%", Icon::AccountBalance)
                    .tinted("#7b1fa2"),
            ],
            alert: AlertEntry::new(AlertKind::Success, "847 shipments processed today with 99.8% compliance rate. Average clearance time: 4.2 hours.")
                .headline("Customs Update:"),
            capabilities: [
                Capability::new(
                    "Document Processing",
                    [
                        ("OCR Recognition", Tone::Primary),
                        ("Data Validation", Tone::Secondary),
                        ("Auto Classification", Tone::Success),
                    ],
                    "Automated document processing with intelligent data extraction and validation for faster customs clearance.",
                ),
                Capability::new(
                    "Compliance Management",
                    [
                        ("Regulatory Updates", Tone::Primary),
                        ("Risk Assessment", Tone::Warning),
                        ("Audit Trails", Tone::Info),
                    ],
                    "Real-time compliance monitoring with automated risk assessment and comprehensive audit trails.",
                ),
            ],
        },
        ShowcaseTab {
            label: "Trade Finance".to_string(),
            title: "Trade Finance Optimization".to_string(),
            description: "Digital trade finance solutions with automated letter of credit processing, credit risk assessment, and blockchain verification.".to_string(),
            metrics: [
                Metric::new("LC Processing Time", "2.1 days", "-45%", Icon::Schedule)
                    .tinted("#1976d2"),
                Metric::new("Credit Risk Score", "94.7%", "+3.8%", Icon::Security)
                    .tinted("#388e3c"),
                Metric::new("Document Verification", "99.2%", "+2.1%", Icon::Assessment)
                    .tinted("#f57c00"),
                Metric::new("Cost Reduction", "$2.3M", "+67%", Icon::TrendingUp)
                    .tinted("#7b1fa2"),
            ],
            alert: AlertEntry::new(AlertKind::Info, "12 new LC applications received. AI pre-screening completed with 94.7% approval recommendation rate.")
                .headline("Finance Alert:"),
            capabilities: [
                Capability::new(
                    "Letter of Credit Processing",
                    [
                        ("Digital Processing", Tone::Primary),
                        ("Smart Contracts", Tone::Secondary),
                        ("Automated Matching", Tone::Success),
                    ],
                    "Streamlined LC processing with blockchain verification and intelligent document matching.",
                ),
                Capability::new(
                    "Credit Risk Assessment",
                    [
                        ("AI Scoring", Tone::Primary),
                        ("Market Analysis", Tone::Warning),
                        ("Real-time Monitoring", Tone::Info),
                    ],
                    "Advanced AI-powered credit risk assessment with real-time market analysis and dynamic scoring.",
                ),
            ],
        },
        ShowcaseTab {
            label: "Supply Chain Tracking".to_string(),
            title: "Global Supply Chain Tracking".to_string(),
            description: "End-to-end supply chain visibility with real-time tracking, predictive analytics, and automated notifications across global trade routes.".to_string(),
            metrics: [
                Metric::new("Shipment Visibility", "99.9%", "+0.8%", Icon::LocalShipping)
                    .tinted("#1976d2"),
                Metric::new("On-Time Delivery", "96.4%", "+8.2%", Icon::Schedule)
                    .tinted("#388e3c"),
                Metric::new("Transit Time", "12.3 days", "-18%", Icon::ImportExport)
                    .tinted("#f57c00"),
                Metric::new("Tracking Accuracy", "98.7%", "+4.5%", Icon::Assessment)
                    .tinted("#7b1fa2"),
            ],
            alert: AlertEntry::new(AlertKind::Warning, "Shipment #TF-2847 experiencing 2-day delay at Port of Rotterdam due to congestion. Alternative routing suggested.")
                .headline("Tracking Alert:"),
            capabilities: [
                Capability::new(
                    "Real-time Visibility",
                    [
                        ("GPS Tracking", Tone::Primary),
                        ("IoT Sensors", Tone::Secondary),
                        ("Multi-modal Tracking", Tone::Success),
                    ],
                    "Comprehensive tracking across air, sea, and land transportation with real-time status updates.",
                ),
                Capability::new(
                    "Predictive Analytics",
                    [
                        ("ETA Prediction", Tone::Primary),
                        ("Delay Analysis", Tone::Warning),
                        ("Route Optimization", Tone::Info),
                    ],
                    "AI-powered predictive analytics for accurate delivery estimates and proactive delay management.",
                ),
            ],
        },
        ShowcaseTab {
            label: "Risk Management".to_string(),
            title: "Trade Risk Management".to_string(),
            description: "Advanced risk assessment and mitigation with fraud detection, compliance monitoring, and automated alert systems.".to_string(),
            metrics: [
                Metric::new("Risk Score", "0.34%", "-52%", Icon::Warning)
                    .tinted("#d32f2f"),
                Metric::new("Fraud Detection", "99.6%", "+12%", Icon::Security)
                    .tinted("#388e3c"),
                Metric::new("Compliance Alerts", "23", "-31%", Icon::Gavel)
                    .tinted("#f57c00"),
                Metric::new("Insurance Claims", "0.12%", "-78%", Icon::AccountBalance)
                    .tinted("#1976d2"),
            ],
            alert: AlertEntry::new(AlertKind::Error, "High-risk transaction detected from Vendor #V847. Enhanced screening protocols activated automatically.")
                .headline("Risk Alert:"),
            capabilities: [
                Capability::new(
                    "Fraud Detection",
                    [
                        ("Pattern Recognition", Tone::Primary),
                        ("Anomaly Detection", Tone::Error),
                        ("Machine Learning", Tone::Secondary),
                    ],
                    "Advanced fraud detection using ML algorithms to identify suspicious patterns and transactions.",
                ),
                Capability::new(
                    "Compliance Monitoring",
                    [
                        ("Sanctions Screening", Tone::Warning),
                        ("KYC Verification", Tone::Info),
                        ("AML Compliance", Tone::Success),
                    ],
                    "Automated compliance monitoring with real-time sanctions screening and KYC verification.",
                ),
            ],
        },
        ShowcaseTab {
            label: "Port Operations".to_string(),
            title: "Smart Port Operations".to_string(),
            description: "Intelligent port management with automated scheduling, container tracking, and operational optimization for maximum efficiency.".to_string(),
            metrics: [
                Metric::new("Berth Utilization", "87.3%", "+11%", Icon::Business)
                    .tinted("#1976d2"),
                Metric::new("Container Dwell Time", "3.8 days", "-22%", Icon::Schedule)
                    .tinted("#388e3c"),
                Metric::new("Throughput", "2,847 TEU/day", "+15%", Icon::TrendingUp)
                    .tinted("#f57c00"),
                Metric::new("Operational Cost", "$142/TEU", "-19%", Icon::AccountBalance)
                    .tinted("#7b1fa2"),
            ],
            alert: AlertEntry::new(AlertKind::Info, "Berth 7 available ahead of schedule. Container ship MV Pacific can dock 4 hours early.")
                .headline("Port Update:"),
            capabilities: [
                Capability::new(
                    "Automated Scheduling",
                    [
                        ("Berth Allocation", Tone::Primary),
                        ("Resource Planning", Tone::Secondary),
                        ("Equipment Optimization", Tone::Success),
                    ],
                    "AI-driven scheduling system optimizing berth allocation and resource utilization for maximum throughput.",
                ),
                Capability::new(
                    "Container Management",
                    [
                        ("RFID Tracking", Tone::Primary),
                        ("Yard Optimization", Tone::Warning),
                        ("Dwell Time Reduction", Tone::Info),
                    ],
                    "Smart container tracking and yard management reducing dwell time and improving operational efficiency.",
                ),
            ],
        },
        ShowcaseTab {
            label: "Market Intelligence".to_string(),
            title: "Market Intelligence & Analytics".to_string(),
            description: "Advanced market analysis with price forecasting, trend identification, and competitive intelligence for strategic decision-making.".to_string(),
            metrics: [
                Metric::new("Price Forecast Accuracy", "93.8%", "+7.2%", Icon::Assessment)
                    .tinted("#1976d2"),
                Metric::new("Market Share Growth", "12.4%", "+34%", Icon::TrendingUp)
                    .tinted("#388e3c"),
                Metric::new("Opportunity Score", "89.2%", "+18%", Icon::Business)
                    .tinted("#f57c00"),
                Metric::new("Revenue Impact", "$5.7M", "+42%", Icon::AccountBalance)
                    .tinted("#7b1fa2"),
            ],
            alert: AlertEntry::new(AlertKind::Success, "Cotton prices expected to rise 8% next quarter. Recommend securing contracts for Q3 shipments.")
                .headline("Market Insight:"),
            capabilities: [
                Capability::new(
                    "Price Forecasting",
                    [
                        ("ML Algorithms", Tone::Primary),
                        ("Market Data Analysis", Tone::Secondary),
                        ("Trend Prediction", Tone::Success),
                    ],
                    "Advanced machine learning models analyzing global market data for accurate price forecasting.",
                ),
                Capability::new(
                    "Competitive Intelligence",
                    [
                        ("Market Share Analysis", Tone::Primary),
                        ("Competitor Tracking", Tone::Warning),
                        ("Opportunity Identification", Tone::Info),
                    ],
                    "Comprehensive competitive analysis identifying market opportunities and strategic advantages.",
                ),
            ],
        },
    ]
}
