use crate::alert::{AlertEntry, AlertKind};
use crate::icon::Icon;
use crate::metric::Metric;
use crate::platform::{HeaderInfo, Platform, PlatformContent, PlatformId, Showcase};
use crate::use_case::{Capability, ShowcaseTab, Tone};

pub fn platform() -> Platform {
    Platform {
        id: PlatformId::LogiSmart,
        header: HeaderInfo {
            title: "LogiSmart",
            subtitle: "Route Optimization",
            color: "#7c3aed",
        },
        content: PlatformContent::Showcase(Showcase {
            title: "LogiSmart",
            subtitle: "Advanced logistics intelligence platform for warehouse management, route optimization, and supply chain visibility",
            tabs: tabs(),
        }),
    }
}

fn tabs() -> Vec<ShowcaseTab> {
    vec![
        ShowcaseTab {
            label: "Warehouse Management".to_string(),
            title: "Warehouse Management System".to_string(),
            description: "AI-powered warehouse operations with automated inventory tracking, intelligent picking routes, and real-time optimization.".to_string(),
            metrics: [
                Metric::new("Inventory Accuracy", "99.7%", "+2.3%", Icon::Inventory)
                    .tinted("#1976d2"),
                Metric::new("Order Fulfillment", "97.8%", "+5.2%", Icon::LocalShipping)
                    .tinted("#388e3c"),
                Metric::new("Pick Efficiency", "94.5%", "+8.1%", Icon::Speed)
                    .tinted("#f57c00"),
                Metric::new("Storage Utilization", "89.2%", "+3.7%", Icon::Assessment)
                    .tinted("#7b1fa2"),
            ],
            alert: AlertEntry::new(AlertKind::Info, "Zone A requires restocking of SKU #14782. Automated transfer initiated from overflow storage.")
                .headline("Warehouse Alert:"),
            capabilities: [
                Capability::new(
                    "Automated Inventory Management",
                    [
                        ("RFID Tracking", Tone::Primary),
                        ("Real-time Updates", Tone::Secondary),
                        ("Cycle Counting", Tone::Success),
                    ],
                    "AI-driven inventory management with automated tracking and predictive restocking algorithms.",
                ),
                Capability::new(
                    "Intelligent Picking",
                    [
                        ("Route Optimization", Tone::Primary),
                        ("Pick Sequencing", Tone::Warning),
                        ("Voice Picking", Tone::Info),
                    ],
                    "Optimized picking routes and intelligent sequencing reducing travel time and improving accuracy.",
                ),
            ],
        },
        ShowcaseTab {
            label: "Route Optimization".to_string(),
            title: "Route Optimization & Planning".to_string(),
            description: "Advanced routing algorithms considering traffic, weather, and delivery constraints for optimal route planning and fuel efficiency.".to_string(),
            metrics: [
                Metric::new("Route Efficiency", "96.8%", "+12%", Icon::LocationOn)
                    .tinted("#1976d2"),
                Metric::new("Delivery Time", "2.3 hrs", "-18%", Icon::Schedule)
                    .tinted("#388e3c"),
                Metric::new("Fuel Savings", "$3.2M", "+24%", Icon::TrendingUp)
                    .tinted("#f57c00"),
                Metric::new("On-Time Delivery", "98.4%", "+6.8%", Icon::LocalShipping)
                    .tinted("#7b1fa2"),
            ],
            alert: AlertEntry::new(AlertKind::Success, "Dynamic rerouting saved 47 minutes across 12 delivery routes due to traffic optimization.")
                .headline("Route Update:"),
            capabilities: [
                Capability::new(
                    "Dynamic Route Planning",
                    [
                        ("Real-time Traffic", Tone::Primary),
                        ("Weather Integration", Tone::Warning),
                        ("Vehicle Capacity", Tone::Info),
                    ],
                    "AI-powered dynamic routing considering multiple variables for optimal delivery efficiency.",
                ),
                Capability::new(
                    "Fleet Optimization",
                    [
                        ("Load Balancing", Tone::Success),
                        ("Fuel Efficiency", Tone::Primary),
                        ("Driver Scheduling", Tone::Secondary),
                    ],
                    "Comprehensive fleet optimization balancing load distribution and driver schedules.",
                ),
            ],
        },
        ShowcaseTab {
            label: "Demand Forecasting".to_string(),
            title: "AI-Powered Demand Forecasting".to_string(),
            description: "Machine learning models analyzing historical data, market trends, and external factors for accurate demand prediction.".to_string(),
            metrics: [
                Metric::new("Forecast Accuracy", "94.7%", "+9.2%", Icon::Assessment)
                    .tinted("#1976d2"),
                Metric::new("Inventory Turnover", "12.4x", "+15%", Icon::TrendingUp)
                    .tinted("#388e3c"),
                Metric::new("Stockout Reduction", "78%", "+22%", Icon::Inventory)
                    .tinted("#f57c00"),
                Metric::new("Cost Savings", "$1.8M", "+19%", Icon::AccountBalance)
                    .tinted("#7b1fa2"),
            ],
            alert: AlertEntry::new(AlertKind::Warning, "23% increase in demand predicted for Category B products next week. Recommended inventory adjustment: +450 units.")
                .headline("Demand Alert:"),
            capabilities: [
                Capability::new(
                    "Predictive Analytics",
                    [
                        ("Time Series Analysis", Tone::Primary),
                        ("Seasonal Patterns", Tone::Secondary),
                        ("Market Trends", Tone::Success),
                    ],
                    "Advanced analytics identifying demand patterns and seasonal variations for accurate forecasting.",
                ),
                Capability::new(
                    "Inventory Optimization",
                    [
                        ("Safety Stock Calc", Tone::Warning),
                        ("Reorder Points", Tone::Info),
                        ("Economic Order Qty", Tone::Secondary),
                    ],
                    "AI-driven inventory optimization reducing carrying costs while maintaining service levels.",
                ),
            ],
        },
        ShowcaseTab {
            label: "Supply Chain Visibility".to_string(),
            title: "Supply Chain Visibility & Control".to_string(),
            description: "End-to-end supply chain visibility with real-time tracking, risk monitoring, and performance analytics across all partners.".to_string(),
            metrics: [
                Metric::new("Shipment Tracking", "99.9%", "+1.2%", Icon::LocationOn)
                    .tinted("#1976d2"),
                Metric::new("Supply Chain Risk", "0.08%", "-45%", Icon::Warning)
                    .tinted("#d32f2f"),
                Metric::new("Vendor Performance", "96.1%", "+7.3%", Icon::Business)
                    .tinted("#388e3c"),
                Metric::new("Lead Time Accuracy", "95.6%", "+4.1%", Icon::Schedule)
                    .tinted("#f57c00"),
            ],
            alert: AlertEntry::new(AlertKind::Error, "Supplier ABC experiencing delays due to weather conditions. Alternative supplier routing activated automatically.")
                .headline("Risk Alert:"),
            capabilities: [
                Capability::new(
                    "Real-time Tracking",
                    [
                        ("GPS Monitoring", Tone::Primary),
                        ("IoT Sensors", Tone::Secondary),
                        ("Status Updates", Tone::Success),
                    ],
                    "Comprehensive tracking system providing real-time visibility across the entire supply chain.",
                ),
                Capability::new(
                    "Risk Management",
                    [
                        ("Risk Assessment", Tone::Error),
                        ("Mitigation Plans", Tone::Warning),
                        ("Alternative Routes", Tone::Info),
                    ],
                    "Proactive risk identification and automated mitigation strategies for supply chain resilience.",
                ),
            ],
        },
        ShowcaseTab {
            label: "Last-Mile Delivery".to_string(),
            title: "Last-Mile Delivery Optimization".to_string(),
            description: "Specialized last-mile delivery solutions with customer preference optimization, delivery window management, and real-time tracking.".to_string(),
            metrics: [
                Metric::new("Delivery Success", "98.9%", "+3.4%", Icon::LocalShipping)
                    .tinted("#1976d2"),
                Metric::new("Customer Satisfaction", "97.2%", "+5.8%", Icon::Assessment)
                    .tinted("#388e3c"),
                Metric::new("Delivery Cost", "$4.12", "-12%", Icon::AccountBalance)
                    .tinted("#f57c00"),
                Metric::new("Route Density", "15.7/hr", "+18%", Icon::Speed)
                    .tinted("#7b1fa2"),
            ],
            alert: AlertEntry::new(AlertKind::Info, "Customer notification system reports 97% customer satisfaction with delivery time accuracy.")
                .headline("Delivery Update:"),
            capabilities: [
                Capability::new(
                    "Customer-Centric Delivery",
                    [
                        ("Time Windows", Tone::Primary),
                        ("Delivery Preferences", Tone::Secondary),
                        ("Real-time Updates", Tone::Success),
                    ],
                    "Personalized delivery experience with flexible time windows and real-time customer communication.",
                ),
                Capability::new(
                    "Delivery Analytics",
                    [
                        ("Performance Metrics", Tone::Warning),
                        ("Cost Analysis", Tone::Info),
                        ("Route Density", Tone::Secondary),
                    ],
                    "Comprehensive analytics driving continuous improvement in last-mile delivery operations.",
                ),
            ],
        },
        ShowcaseTab {
            label: "Cross-Docking".to_string(),
            title: "Cross-Docking Operations".to_string(),
            description: "Optimized cross-docking operations with intelligent dock scheduling, load matching, and real-time coordination systems.".to_string(),
            metrics: [
                Metric::new("Dock Utilization", "91.3%", "+8.4%", Icon::Assessment)
                    .tinted("#1976d2"),
                Metric::new("Turnaround Time", "2.8 hrs", "-25%", Icon::Schedule)
                    .tinted("#388e3c"),
                Metric::new("Throughput", "1,247 units/hr", "+31%", Icon::Speed)
                    .tinted("#f57c00"),
                Metric::new("Error Rate", "0.12%", "-67%", Icon::Warning)
                    .tinted("#d32f2f"),
            ],
            alert: AlertEntry::new(AlertKind::Success, "Cross-dock operations achieving 91% dock utilization with 2.8-hour average turnaround time.")
                .headline("Efficiency Update:"),
            capabilities: [
                Capability::new(
                    "Dock Scheduling",
                    [
                        ("Appointment Booking", Tone::Primary),
                        ("Load Matching", Tone::Secondary),
                        ("Resource Allocation", Tone::Success),
                    ],
                    "Intelligent dock scheduling system optimizing facility utilization and minimizing wait times.",
                ),
                Capability::new(
                    "Flow Optimization",
                    [
                        ("Material Flow", Tone::Warning),
                        ("Queue Management", Tone::Info),
                        ("Automated Sorting", Tone::Secondary),
                    ],
                    "Streamlined material flow with automated sorting and queue management for maximum throughput.",
                ),
            ],
        },
    ]
}
