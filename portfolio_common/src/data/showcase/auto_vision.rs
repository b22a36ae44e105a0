use crate::alert::{AlertEntry, AlertKind};
use crate::icon::Icon;
use crate::metric::Metric;
use crate::platform::{HeaderInfo, Platform, PlatformContent, PlatformId, Showcase};
use crate::use_case::{Capability, ShowcaseTab, Tone};

pub fn platform() -> Platform {
    Platform {
        id: PlatformId::AutoVisionAi,
        header: HeaderInfo {
            title: "AutoVision AI",
            subtitle: "Quality Control Dashboard",
            color: "#dc2626",
        },
        content: PlatformContent::Showcase(Showcase {
            title: "AutoVision AI",
            subtitle: "Comprehensive automotive intelligence platform for fleet management, autonomous driving, and manufacturing optimization",
            tabs: tabs(),
        }),
    }
}

fn tabs() -> Vec<ShowcaseTab> {
    vec![
        ShowcaseTab {
            label: "Fleet Management".to_string(),
            title: "Fleet Management & Optimization".to_string(),
            description: "Advanced fleet management with real-time vehicle tracking, route optimization, and comprehensive analytics for maximum operational efficiency.".to_string(),
            metrics: [
                Metric::new("Active Vehicles", "25,847", "+12%", Icon::DirectionsCar)
                    .tinted("#1976d2"),
                Metric::new("Fleet Utilization", "94.2%", "+5.1%", Icon::Speed)
                    .tinted("#388e3c"),
                Metric::new("On-Time Delivery", "98.7%", "+2.3%", Icon::Assessment)
                    .tinted("#f57c00"),
                Metric::new("Cost per Mile", "$2.14", "-8.5%", Icon::LocalGasStation)
                    .tinted("#7b1fa2"),
            ],
            alert: AlertEntry::new(AlertKind::Info, "23 vehicles require route optimization due to traffic conditions. Estimated savings: $4,200 in fuel costs.")
                .headline("Live Alert:"),
            capabilities: [
                Capability::new(
                    "Route Optimization",
                    [
                        ("AI Route Planning", Tone::Primary),
                        ("Traffic Analysis", Tone::Secondary),
                        ("Fuel Optimization", Tone::Success),
                    ],
                    "Real-time route optimization reducing travel time by 18% and fuel consumption by 22%.",
                ),
                Capability::new(
                    "Fleet Analytics",
                    [
                        ("Performance Metrics", Tone::Primary),
                        ("Cost Analysis", Tone::Warning),
                        ("Utilization Reports", Tone::Info),
                    ],
                    "Comprehensive analytics dashboard providing insights into fleet performance and cost optimization opportunities.",
                ),
            ],
        },
        ShowcaseTab {
            label: "Predictive Maintenance".to_string(),
            title: "Predictive Maintenance".to_string(),
            description: "AI-powered predictive maintenance system that anticipates vehicle service needs, reducing downtime and extending vehicle lifespan.".to_string(),
            metrics: [
                Metric::new("Maintenance Alerts", "342", "+15%", Icon::Build)
                    .tinted("#d32f2f"),
                Metric::new("Downtime Reduction", "67%", "+12%", Icon::TrendingUp)
                    .tinted("#388e3c"),
                Metric::new("Parts Inventory", "89%", "+3%", Icon::CarRepair)
                    .tinted("#1976d2"),
                Metric::new("Maintenance Cost", "$1.2M", "-22%", Icon::Assessment)
                    .tinted("#7b1fa2"),
            ],
            alert: AlertEntry::new(AlertKind::Warning, "Vehicle #2847 requires brake inspection within 72 hours. Predicted failure probability: 85%.")
                .headline("Maintenance Alert:"),
            capabilities: [
                Capability::new(
                    "AI Diagnostics",
                    [
                        ("Engine Analysis", Tone::Primary),
                        ("Brake Systems", Tone::Error),
                        ("Transmission", Tone::Warning),
                    ],
                    "Advanced AI diagnostics providing early detection of potential mechanical issues before they become critical.",
                ),
                Capability::new(
                    "Maintenance Scheduling",
                    [
                        ("Smart Scheduling", Tone::Success),
                        ("Parts Management", Tone::Info),
                        ("Service Tracking", Tone::Secondary),
                    ],
                    "Intelligent maintenance scheduling optimizing service intervals and parts inventory management.",
                ),
            ],
        },
        ShowcaseTab {
            label: "Autonomous Driving".to_string(),
            title: "Autonomous Driving Technology".to_string(),
            description: "Advanced autonomous driving capabilities with computer vision, sensor fusion, and AI decision-making for safe and efficient transportation.".to_string(),
            metrics: [
                Metric::new("Autonomous Miles", "2.1M", "+45%", Icon::Navigation)
                    .tinted("#1976d2"),
                Metric::new("Safety Score", "99.8%", "+0.5%", Icon::Security)
                    .tinted("#388e3c"),
                Metric::new("AI Accuracy", "99.1%", "+1.2%", Icon::Assessment)
                    .tinted("#f57c00"),
                Metric::new("Incident Rate", "0.02%", "-45%", Icon::WarningAmber)
                    .tinted("#d32f2f"),
            ],
            alert: AlertEntry::new(AlertKind::Success, "Autonomous fleet has completed 1M+ miles without incident. New safety milestone achieved.")
                .headline("Safety Update:"),
            capabilities: [
                Capability::new(
                    "Computer Vision",
                    [
                        ("Object Detection", Tone::Primary),
                        ("Lane Recognition", Tone::Success),
                        ("Sign Reading", Tone::Info),
                    ],
                    "Advanced computer vision systems for real-time object detection, lane keeping, and traffic sign recognition.",
                ),
                Capability::new(
                    "AI Decision Making",
                    [
                        ("Path Planning", Tone::Primary),
                        ("Risk Assessment", Tone::Warning),
                        ("Emergency Response", Tone::Error),
                    ],
                    "Intelligent decision-making algorithms for safe navigation and emergency situation handling.",
                ),
            ],
        },
        ShowcaseTab {
            label: "Supply Chain".to_string(),
            title: "Supply Chain Optimization".to_string(),
            description: "Intelligent supply chain management optimizing logistics, delivery routes, and inventory levels for maximum efficiency and customer satisfaction.".to_string(),
            metrics: [
                Metric::new("Route Efficiency", "96.3%", "+8%", Icon::Navigation)
                    .tinted("#1976d2"),
                Metric::new("Delivery Time", "2.1 hrs", "-15%", Icon::Speed)
                    .tinted("#388e3c"),
                Metric::new("Fuel Savings", "$2.8M", "+18%", Icon::LocalGasStation)
                    .tinted("#f57c00"),
                Metric::new("Customer Satisfaction", "97.4%", "+4%", Icon::Assessment)
                    .tinted("#7b1fa2"),
            ],
            alert: AlertEntry::new(AlertKind::Info, "New route algorithm implemented. Expected delivery time reduction: 12 minutes average per delivery.")
                .headline("Optimization Alert:"),
            capabilities: [
                Capability::new(
                    "Logistics Intelligence",
                    [
                        ("Route Planning", Tone::Primary),
                        ("Load Optimization", Tone::Success),
                        ("Delivery Tracking", Tone::Info),
                    ],
                    "AI-powered logistics optimization for efficient route planning and load distribution.",
                ),
                Capability::new(
                    "Inventory Management",
                    [
                        ("Demand Forecasting", Tone::Primary),
                        ("Stock Optimization", Tone::Warning),
                        ("Automated Ordering", Tone::Secondary),
                    ],
                    "Intelligent inventory management with demand forecasting and automated reordering systems.",
                ),
            ],
        },
        ShowcaseTab {
            label: "Quality Control".to_string(),
            title: "Manufacturing Quality Control".to_string(),
            description: "Advanced quality control systems using computer vision and AI to ensure manufacturing excellence and reduce defects in automotive production.".to_string(),
            metrics: [
                Metric::new("Defect Detection", "99.7%", "+2%", Icon::Assessment)
                    .tinted("#1976d2"),
                Metric::new("Production Efficiency", "95.8%", "+6%", Icon::Speed)
                    .tinted("#388e3c"),
                Metric::new("Quality Score", "98.9%", "+1.5%", Icon::Security)
                    .tinted("#f57c00"),
                Metric::new("Recall Incidents", "0.01%", "-67%", Icon::WarningAmber)
                    .tinted("#d32f2f"),
            ],
            alert: AlertEntry::new(AlertKind::Error, "Paint defect detected on production line 3. Automatic halt initiated. Estimated resolution time: 45 minutes.")
                .headline("Quality Alert:"),
            capabilities: [
                Capability::new(
                    "Visual Inspection",
                    [
                        ("Defect Detection", Tone::Primary),
                        ("Surface Analysis", Tone::Warning),
                        ("Dimensional Check", Tone::Info),
                    ],
                    "AI-powered visual inspection systems detecting defects and ensuring quality standards across production lines.",
                ),
                Capability::new(
                    "Process Optimization",
                    [
                        ("Production Efficiency", Tone::Success),
                        ("Waste Reduction", Tone::Error),
                        ("Quality Metrics", Tone::Secondary),
                    ],
                    "Continuous process improvement through AI analysis of production data and quality metrics.",
                ),
            ],
        },
        ShowcaseTab {
            label: "Driver Safety".to_string(),
            title: "Driver Safety & Analytics".to_string(),
            description: "Comprehensive driver monitoring and safety systems providing real-time feedback, training recommendations, and risk assessment.".to_string(),
            metrics: [
                Metric::new("Driver Score", "94.6%", "+7%", Icon::Security)
                    .tinted("#1976d2"),
                Metric::new("Accident Rate", "0.03%", "-34%", Icon::WarningAmber)
                    .tinted("#d32f2f"),
                Metric::new("Training Completed", "89%", "+12%", Icon::Assessment)
                    .tinted("#388e3c"),
                Metric::new("Insurance Savings", "$450K", "+28%", Icon::TrendingUp)
                    .tinted("#7b1fa2"),
            ],
            alert: AlertEntry::new(AlertKind::Warning, "Driver #1247 showing signs of fatigue. Automatic rest break recommendation sent. ETA adjusted accordingly.")
                .headline("Safety Alert:"),
            capabilities: [
                Capability::new(
                    "Behavior Monitoring",
                    [
                        ("Speed Analysis", Tone::Primary),
                        ("Fatigue Detection", Tone::Warning),
                        ("Distraction Alerts", Tone::Error),
                    ],
                    "Real-time driver behavior monitoring with instant feedback and safety recommendations.",
                ),
                Capability::new(
                    "Training & Improvement",
                    [
                        ("Personalized Training", Tone::Success),
                        ("Performance Scoring", Tone::Info),
                        ("Safety Certification", Tone::Secondary),
                    ],
                    "AI-driven training programs and performance improvement recommendations for enhanced driver safety.",
                ),
            ],
        },
    ]
}
