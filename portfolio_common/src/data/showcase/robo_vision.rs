use crate::alert::{AlertEntry, AlertKind};
use crate::icon::Icon;
use crate::metric::Metric;
use crate::platform::{HeaderInfo, Platform, PlatformContent, PlatformId, Showcase};
use crate::use_case::{Capability, ShowcaseTab, Tone};

pub fn platform() -> Platform {
    Platform {
        id: PlatformId::RoboVision,
        header: HeaderInfo {
            title: "RoboVision",
            subtitle: "Computer Vision Platform",
            color: "#ea580c",
        },
        content: PlatformContent::Showcase(Showcase {
            title: "RoboVision",
            subtitle: "Advanced robotics intelligence platform for industrial automation, computer vision, and autonomous systems",
            tabs: tabs(),
        }),
    }
}

fn tabs() -> Vec<ShowcaseTab> {
    vec![
        ShowcaseTab {
            label: "Industrial Automation".to_string(),
            title: "Industrial Automation & Manufacturing".to_string(),
            description: "Advanced robotic automation systems for manufacturing processes with intelligent scheduling, adaptive control, and real-time optimization.".to_string(),
            metrics: [
                Metric::new("Production Efficiency", "97.3%", "+12%", Icon::Factory)
                    .tinted("#1976d2"),
                Metric::new("Robot Uptime", "99.2%", "+3.4%", Icon::SmartToy)
                    .tinted("#388e3c"),
                Metric::new("Quality Score", "98.7%", "+5.1%", Icon::Assessment)
                    .tinted("#f57c00"),
                Metric::new("Cost Reduction", "34%", "+8.2%", Icon::Engineering)
                    .tinted("#7b1fa2"),
            ],
            alert: AlertEntry::new(AlertKind::Info, "Line 3 robots operating at 102% efficiency. Production target exceeded by 247 units today.")
                .headline("Production Alert:"),
            capabilities: [
                Capability::new(
                    "Robotic Process Control",
                    [
                        ("Adaptive Control", Tone::Primary),
                        ("Real-time Optimization", Tone::Secondary),
                        ("Multi-robot Coordination", Tone::Success),
                    ],
                    "Intelligent robotic systems with adaptive control algorithms and multi-robot coordination for optimal manufacturing efficiency.",
                ),
                Capability::new(
                    "Production Analytics",
                    [
                        ("Performance Metrics", Tone::Primary),
                        ("Efficiency Analysis", Tone::Warning),
                        ("Predictive Insights", Tone::Info),
                    ],
                    "Comprehensive production analytics providing real-time insights and predictive recommendations for continuous improvement.",
                ),
            ],
        },
        ShowcaseTab {
            label: "Computer Vision".to_string(),
            title: "Computer Vision & Image Processing".to_string(),
            description: "Advanced computer vision systems with deep learning models for object detection, classification, and real-time image analysis.".to_string(),
            metrics: [
                Metric::new("Object Detection", "99.8%", "+2.1%", Icon::Visibility)
                    .tinted("#1976d2"),
                Metric::new("Processing Speed", "247 fps", "+18%", Icon::Speed)
                    .tinted("#388e3c"),
                Metric::new("Classification Accuracy", "98.9%", "+4.7%", Icon::ControlPoint)
                    .tinted("#f57c00"),
                Metric::new("False Positive Rate", "0.12%", "-45%", Icon::Assessment)
                    .tinted("#d32f2f"),
            ],
            alert: AlertEntry::new(AlertKind::Success, "New neural network model deployed. Object detection accuracy improved to 99.8% with 18% faster processing.")
                .headline("Vision Update:"),
            capabilities: [
                Capability::new(
                    "Deep Learning Models",
                    [
                        ("CNN Architecture", Tone::Primary),
                        ("Transfer Learning", Tone::Secondary),
                        ("Real-time Inference", Tone::Success),
                    ],
                    "State-of-the-art deep learning models optimized for real-time computer vision applications in industrial environments.",
                ),
                Capability::new(
                    "Image Processing Pipeline",
                    [
                        ("Edge Computing", Tone::Primary),
                        ("GPU Acceleration", Tone::Warning),
                        ("Multi-camera Fusion", Tone::Info),
                    ],
                    "Optimized image processing pipeline with edge computing and GPU acceleration for maximum performance.",
                ),
            ],
        },
        ShowcaseTab {
            label: "Autonomous Navigation".to_string(),
            title: "Autonomous Navigation & Path Planning".to_string(),
            description: "Intelligent navigation systems with SLAM technology, dynamic path planning, and obstacle avoidance for autonomous mobile robots.".to_string(),
            metrics: [
                Metric::new("Navigation Accuracy", "99.4%", "+6.3%", Icon::SmartToy)
                    .tinted("#1976d2"),
                Metric::new("Path Efficiency", "96.8%", "+9.1%", Icon::Speed)
                    .tinted("#388e3c"),
                Metric::new("Collision Avoidance", "99.9%", "+0.8%", Icon::Security)
                    .tinted("#f57c00"),
                Metric::new("Task Completion", "97.1%", "+7.2%", Icon::Assessment)
                    .tinted("#7b1fa2"),
            ],
            alert: AlertEntry::new(AlertKind::Warning, "Robot R-247 encountered unexpected obstacle. Alternative path calculated. ETA adjusted by 3 minutes.")
                .headline("Navigation Alert:"),
            capabilities: [
                Capability::new(
                    "SLAM Technology",
                    [
                        ("LiDAR Mapping", Tone::Primary),
                        ("Visual SLAM", Tone::Secondary),
                        ("Sensor Fusion", Tone::Success),
                    ],
                    "Advanced SLAM technology combining LiDAR and visual sensors for accurate mapping and localization.",
                ),
                Capability::new(
                    "Dynamic Path Planning",
                    [
                        ("A* Algorithm", Tone::Primary),
                        ("Real-time Adaptation", Tone::Warning),
                        ("Collision Avoidance", Tone::Error),
                    ],
                    "Intelligent path planning algorithms with real-time adaptation and advanced collision avoidance capabilities.",
                ),
            ],
        },
        ShowcaseTab {
            label: "Predictive Maintenance".to_string(),
            title: "Predictive Maintenance & Diagnostics".to_string(),
            description: "AI-powered predictive maintenance systems monitoring robot health, predicting failures, and optimizing maintenance schedules.".to_string(),
            metrics: [
                Metric::new("Failure Prediction", "94.8%", "+11%", Icon::Psychology)
                    .tinted("#1976d2"),
                Metric::new("Maintenance Cost", "$1.2M", "-22%", Icon::Build)
                    .tinted("#388e3c"),
                Metric::new("Downtime Reduction", "67%", "+15%", Icon::Engineering)
                    .tinted("#f57c00"),
                Metric::new("Equipment Lifespan", "+28%", "+12%", Icon::Assessment)
                    .tinted("#7b1fa2"),
            ],
            alert: AlertEntry::new(AlertKind::Error, "Robot R-184 showing bearing wear patterns. Scheduled maintenance recommended within 72 hours.")
                .headline("Maintenance Alert:"),
            capabilities: [
                Capability::new(
                    "Health Monitoring",
                    [
                        ("Vibration Analysis", Tone::Primary),
                        ("Thermal Monitoring", Tone::Warning),
                        ("Performance Tracking", Tone::Info),
                    ],
                    "Continuous health monitoring using multiple sensor modalities for early detection of potential issues.",
                ),
                Capability::new(
                    "Failure Prediction",
                    [
                        ("ML Algorithms", Tone::Primary),
                        ("Pattern Recognition", Tone::Secondary),
                        ("Anomaly Detection", Tone::Error),
                    ],
                    "Advanced machine learning models for accurate failure prediction and proactive maintenance scheduling.",
                ),
            ],
        },
        ShowcaseTab {
            label: "Quality Control".to_string(),
            title: "Automated Quality Control".to_string(),
            description: "Precision quality control systems with robotic inspection, defect detection, and automated sorting for manufacturing excellence.".to_string(),
            metrics: [
                Metric::new("Defect Detection", "99.7%", "+3.2%", Icon::ControlPoint)
                    .tinted("#1976d2"),
                Metric::new("Inspection Speed", "8.4 sec/unit", "-25%", Icon::Speed)
                    .tinted("#388e3c"),
                Metric::new("Accuracy Rate", "98.9%", "+2.8%", Icon::Assessment)
                    .tinted("#f57c00"),
                Metric::new("Recall Rate", "0.08%", "-58%", Icon::Security)
                    .tinted("#d32f2f"),
            ],
            alert: AlertEntry::new(AlertKind::Info, "2,847 units inspected today with 99.7% defect detection rate. 12 defective units automatically sorted.")
                .headline("Quality Update:"),
            capabilities: [
                Capability::new(
                    "Robotic Inspection",
                    [
                        ("Multi-angle Scanning", Tone::Primary),
                        ("Precision Measurement", Tone::Secondary),
                        ("Automated Reporting", Tone::Success),
                    ],
                    "High-precision robotic inspection systems with multi-angle scanning and automated quality reporting.",
                ),
                Capability::new(
                    "Defect Classification",
                    [
                        ("AI Classification", Tone::Primary),
                        ("Severity Assessment", Tone::Warning),
                        ("Automated Sorting", Tone::Info),
                    ],
                    "Intelligent defect classification with AI-powered severity assessment and automated sorting capabilities.",
                ),
            ],
        },
        ShowcaseTab {
            label: "Human-Robot Collab".to_string(),
            title: "Human-Robot Collaboration".to_string(),
            description: "Safe and efficient human-robot collaborative systems with advanced safety protocols, intuitive interfaces, and adaptive behavior.".to_string(),
            metrics: [
                Metric::new("Safety Score", "99.9%", "+0.5%", Icon::Security)
                    .tinted("#1976d2"),
                Metric::new("Productivity Gain", "42%", "+18%", Icon::Engineering)
                    .tinted("#388e3c"),
                Metric::new("Task Accuracy", "97.6%", "+8.4%", Icon::ControlPoint)
                    .tinted("#f57c00"),
                Metric::new("Worker Satisfaction", "91%", "+12%", Icon::Psychology)
                    .tinted("#7b1fa2"),
            ],
            alert: AlertEntry::new(AlertKind::Success, "847 collaborative tasks completed today with 99.9% safety score and 42% productivity improvement.")
                .headline("Collaboration Update:"),
            capabilities: [
                Capability::new(
                    "Safety Systems",
                    [
                        ("Proximity Sensing", Tone::Primary),
                        ("Force Limiting", Tone::Error),
                        ("Emergency Stop", Tone::Warning),
                    ],
                    "Advanced safety systems with proximity sensing, force limiting, and instant emergency stop capabilities.",
                ),
                Capability::new(
                    "Adaptive Interaction",
                    [
                        ("Gesture Recognition", Tone::Primary),
                        ("Voice Commands", Tone::Secondary),
                        ("Learning Algorithms", Tone::Success),
                    ],
                    "Intuitive human-robot interaction with gesture recognition, voice commands, and adaptive learning capabilities.",
                ),
            ],
        },
    ]
}
