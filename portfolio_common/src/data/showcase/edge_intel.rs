use crate::alert::{AlertEntry, AlertKind};
use crate::icon::Icon;
use crate::metric::Metric;
use crate::platform::{HeaderInfo, Platform, PlatformContent, PlatformId, Showcase};
use crate::use_case::{Capability, ShowcaseTab, Tone};

pub fn platform() -> Platform {
    Platform {
        id: PlatformId::EdgeIntelPro,
        header: HeaderInfo {
            title: "EdgeIntel Pro",
            subtitle: "Real-time Edge AI",
            color: "#10b981",
        },
        content: PlatformContent::Showcase(Showcase {
            title: "EdgeIntel Pro",
            subtitle: "Ultra-fast edge AI platform for real-time inference, IoT device management, and industrial automation with sub-millisecond latency",
            tabs: tabs(),
        }),
    }
}

fn tabs() -> Vec<ShowcaseTab> {
    vec![
        ShowcaseTab {
            label: "Real-time Inference".to_string(),
            title: "Real-time Edge Inference".to_string(),
            description: "Ultra-low latency AI inference at the edge with optimized models, hardware acceleration, and real-time processing capabilities.".to_string(),
            metrics: [
                Metric::new("Inference Latency", "0.8 ms", "-67%", Icon::Speed)
                    .tinted("#1976d2"),
                Metric::new("Throughput", "15K req/sec", "+234%", Icon::TrendingUp)
                    .tinted("#388e3c"),
                Metric::new("Model Accuracy", "97.2%", "+3.1%", Icon::Assessment)
                    .tinted("#f57c00"),
                Metric::new("Power Efficiency", "89%", "+42%", Icon::BatteryChargingFull)
                    .tinted("#7b1fa2"),
            ],
            alert: AlertEntry::new(AlertKind::Success, "Edge inference achieving 0.8ms latency with 15K requests/second throughput. Model accuracy maintained at 97.2%.")
                .headline("Performance Update:"),
            capabilities: [
                Capability::new(
                    "Model Optimization",
                    [
                        ("Quantization", Tone::Primary),
                        ("Pruning", Tone::Secondary),
                        ("Hardware Acceleration", Tone::Success),
                    ],
                    "Advanced model optimization techniques including quantization, pruning, and hardware-specific acceleration for maximum performance.",
                ),
                Capability::new(
                    "Real-time Processing",
                    [
                        ("Stream Processing", Tone::Primary),
                        ("Batch Optimization", Tone::Warning),
                        ("Pipeline Acceleration", Tone::Info),
                    ],
                    "Optimized real-time processing pipeline with stream processing and batch optimization for consistent low-latency performance.",
                ),
            ],
        },
        ShowcaseTab {
            label: "IoT Management".to_string(),
            title: "IoT Device Management".to_string(),
            description: "Comprehensive IoT device management platform with device orchestration, data processing, and security management at scale.".to_string(),
            metrics: [
                Metric::new("Connected Devices", "847K", "+156%", Icon::DeviceHub)
                    .tinted("#1976d2"),
                Metric::new("Device Uptime", "99.7%", "+2.1%", Icon::Computer)
                    .tinted("#388e3c"),
                Metric::new("Data Processing", "2.3 TB/hr", "+78%", Icon::Memory)
                    .tinted("#f57c00"),
                Metric::new("Security Score", "98.4%", "+5.7%", Icon::Security)
                    .tinted("#7b1fa2"),
            ],
            alert: AlertEntry::new(AlertKind::Info, "847K devices connected and managed. Processing 2.3 TB/hour of IoT data with 99.7% device uptime.")
                .headline("IoT Update:"),
            capabilities: [
                Capability::new(
                    "Device Orchestration",
                    [
                        ("Auto-discovery", Tone::Primary),
                        ("Remote Management", Tone::Secondary),
                        ("Firmware Updates", Tone::Success),
                    ],
                    "Intelligent device orchestration with auto-discovery, remote management, and automated firmware updates.",
                ),
                Capability::new(
                    "Edge Data Processing",
                    [
                        ("Stream Analytics", Tone::Primary),
                        ("Data Filtering", Tone::Warning),
                        ("Anomaly Detection", Tone::Error),
                    ],
                    "Advanced edge data processing with stream analytics, intelligent filtering, and real-time anomaly detection.",
                ),
            ],
        },
        ShowcaseTab {
            label: "Offline Operations".to_string(),
            title: "Offline AI Operations".to_string(),
            description: "Robust offline AI capabilities with local model inference, data caching, and intelligent synchronization for disconnected environments.".to_string(),
            metrics: [
                Metric::new("Offline Accuracy", "96.8%", "+4.2%", Icon::CloudOff)
                    .tinted("#1976d2"),
                Metric::new("Local Storage", "94%", "+23%", Icon::Memory)
                    .tinted("#388e3c"),
                Metric::new("Sync Efficiency", "91.7%", "+18%", Icon::NetworkWifi)
                    .tinted("#f57c00"),
                Metric::new("Battery Life", "18.4 hrs", "+34%", Icon::BatteryChargingFull)
                    .tinted("#7b1fa2"),
            ],
            alert: AlertEntry::new(AlertKind::Warning, "247 edge nodes operating in offline mode. Maintaining 96.8% accuracy with local inference and intelligent data caching.")
                .headline("Offline Alert:"),
            capabilities: [
                Capability::new(
                    "Local Inference",
                    [
                        ("Model Caching", Tone::Primary),
                        ("Offline Processing", Tone::Secondary),
                        ("Battery Optimization", Tone::Success),
                    ],
                    "Advanced local inference capabilities with intelligent model caching and battery-optimized processing.",
                ),
                Capability::new(
                    "Smart Synchronization",
                    [
                        ("Delta Sync", Tone::Primary),
                        ("Conflict Resolution", Tone::Warning),
                        ("Bandwidth Optimization", Tone::Info),
                    ],
                    "Intelligent synchronization with delta sync, automatic conflict resolution, and bandwidth optimization.",
                ),
            ],
        },
        ShowcaseTab {
            label: "Edge Orchestration".to_string(),
            title: "Edge Computing Orchestration".to_string(),
            description: "Distributed edge computing orchestration with intelligent node coordination, load balancing, and fault tolerance mechanisms.".to_string(),
            metrics: [
                Metric::new("Node Coordination", "97.6%", "+8.9%", Icon::DeviceHub)
                    .tinted("#1976d2"),
                Metric::new("Load Balancing", "94.3%", "+12%", Icon::Assessment)
                    .tinted("#388e3c"),
                Metric::new("Resource Utilization", "87.2%", "+28%", Icon::Memory)
                    .tinted("#f57c00"),
                Metric::new("Fault Tolerance", "99.1%", "+3.4%", Icon::Security)
                    .tinted("#7b1fa2"),
            ],
            alert: AlertEntry::new(AlertKind::Success, "97.6% node coordination efficiency achieved. Load balancing optimized across 1,247 edge nodes.")
                .headline("Orchestration Update:"),
            capabilities: [
                Capability::new(
                    "Distributed Computing",
                    [
                        ("Node Clustering", Tone::Primary),
                        ("Task Distribution", Tone::Secondary),
                        ("Resource Sharing", Tone::Success),
                    ],
                    "Advanced distributed computing with intelligent node clustering and optimized task distribution.",
                ),
                Capability::new(
                    "Fault Tolerance",
                    [
                        ("Auto Recovery", Tone::Primary),
                        ("Failover Systems", Tone::Error),
                        ("Redundancy Management", Tone::Info),
                    ],
                    "Robust fault tolerance with automatic recovery, intelligent failover, and dynamic redundancy management.",
                ),
            ],
        },
        ShowcaseTab {
            label: "Industrial Automation".to_string(),
            title: "Industrial Automation Control".to_string(),
            description: "Ultra-fast industrial automation control with microsecond response times, safety systems, and real-time production optimization.".to_string(),
            metrics: [
                Metric::new("Control Loop Speed", "100 μs", "-85%", Icon::Speed)
                    .tinted("#1976d2"),
                Metric::new("Safety Response", "50 μs", "-92%", Icon::Security)
                    .tinted("#388e3c"),
                Metric::new("Production Efficiency", "96.8%", "+15%", Icon::TrendingUp)
                    .tinted("#f57c00"),
                Metric::new("System Reliability", "99.9%", "+1.2%", Icon::Assessment)
                    .tinted("#7b1fa2"),
            ],
            alert: AlertEntry::new(AlertKind::Error, "Emergency stop activated on Line 3 in 50 microseconds. Safety systems responding within specified parameters.")
                .headline("Safety Alert:"),
            capabilities: [
                Capability::new(
                    "Real-time Control",
                    [
                        ("Microsecond Latency", Tone::Primary),
                        ("Deterministic Timing", Tone::Secondary),
                        ("Control Loops", Tone::Success),
                    ],
                    "Ultra-low latency control systems with deterministic timing and high-frequency control loops.",
                ),
                Capability::new(
                    "Safety Systems",
                    [
                        ("Emergency Response", Tone::Error),
                        ("Predictive Safety", Tone::Warning),
                        ("Compliance Monitoring", Tone::Info),
                    ],
                    "Advanced safety systems with emergency response, predictive safety analysis, and compliance monitoring.",
                ),
            ],
        },
        ShowcaseTab {
            label: "Edge Analytics".to_string(),
            title: "Edge Analytics & Intelligence".to_string(),
            description: "Real-time edge analytics with data compression, bandwidth optimization, and intelligent insight generation at the point of data creation.".to_string(),
            metrics: [
                Metric::new("Real-time Analytics", "98.7%", "+6.3%", Icon::Assessment)
                    .tinted("#1976d2"),
                Metric::new("Data Compression", "89%", "+45%", Icon::Memory)
                    .tinted("#388e3c"),
                Metric::new("Bandwidth Savings", "76%", "+67%", Icon::NetworkWifi)
                    .tinted("#f57c00"),
                Metric::new("Insight Generation", "1.2 sec", "-58%", Icon::Speed)
                    .tinted("#7b1fa2"),
            ],
            alert: AlertEntry::new(AlertKind::Info, "Real-time analytics processing 2.3 TB/hour with 89% data compression. Bandwidth savings: 76%.")
                .headline("Analytics Update:"),
            capabilities: [
                Capability::new(
                    "Stream Analytics",
                    [
                        ("Real-time Processing", Tone::Primary),
                        ("Pattern Detection", Tone::Secondary),
                        ("Anomaly Identification", Tone::Warning),
                    ],
                    "Advanced stream analytics with real-time pattern detection and intelligent anomaly identification.",
                ),
                Capability::new(
                    "Intelligent Compression",
                    [
                        ("Adaptive Algorithms", Tone::Primary),
                        ("Lossless Compression", Tone::Success),
                        ("Bandwidth Optimization", Tone::Info),
                    ],
                    "Intelligent data compression with adaptive algorithms and bandwidth optimization for efficient data transmission.",
                ),
            ],
        },
    ]
}
