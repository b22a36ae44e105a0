//! GridSmart Pro: six electricity use cases plus the live grid-load readout.

use crate::alert::AlertEntry;
use crate::chart::Rotation;
use crate::error::DashboardError;
use crate::icon::Icon;
use crate::metric::Metric;
use crate::platform::{
    DashboardChrome, HeaderInfo, Platform, PlatformContent, PlatformId, UseCaseDashboard,
};
use crate::use_case::{build_table, UseCaseDraft};

pub fn platform() -> Result<Platform, DashboardError> {
    Ok(Platform {
        id: PlatformId::GridSmartPro,
        header: HeaderInfo {
            title: "GridSmart Pro",
            subtitle: "Comprehensive Electricity Grid AI Management Platform",
            color: "#3b82f6",
        },
        content: PlatformContent::UseCases(UseCaseDashboard {
            use_cases: build_table(Rotation::ThreeWay, use_cases())?,
            chrome: DashboardChrome {
                live_label: "Real-time Grid Data",
                live_icon: Icon::MonitorHeart,
                alerts_heading: "Grid Operations Center - Live Alerts",
                alerts_icon: Icon::Bolt,
                alert_source_suffix: " System",
                impact_heading: "Electricity Sector AI Transformation Impact",
                impact_icon: Icon::Power,
                impact_notes: [
                    (
                        "Grid Modernization",
                        "AI-powered smart grid technologies improve reliability by 15%, reduce transmission losses by 8%, and enable 95% renewable energy integration.",
                    ),
                    (
                        "Operational Excellence",
                        "Predictive maintenance and real-time optimization reduce operational costs by $1.8B annually while improving grid stability to 99.8%.",
                    ),
                    (
                        "Sustainable Future",
                        "Advanced renewable integration and demand response programs achieve 67% clean energy mix and 2.8M ton carbon reduction annually.",
                    ),
                ],
            },
            load_readout: true,
        }),
    })
}

fn use_cases() -> Vec<UseCaseDraft> {
    vec![
        UseCaseDraft {
            id: "generation",
            title: "Power Generation",
            description: "Optimize electricity generation from multiple sources including renewables",
            icon: Icon::ElectricBolt,
            color: "#3b82f6",
            metrics: [
                Metric::new("Total Capacity", "12.8 GW", "+5.2%", Icon::ElectricBolt),
                Metric::new("Generation Efficiency", "94.7%", "+2.1%", Icon::TrendingUp),
                Metric::new("Renewable Mix", "67.3%", "+8.5%", Icon::WbSunny),
                Metric::new("Load Factor", "78.2%", "+1.8%", Icon::Assessment),
            ],
            charts: [
                crate::chart!("Generation Portfolio Mix";
                    { "source": "Solar", "capacity": 4200, "output": 3850, "efficiency": 91.7 },
                    { "source": "Wind", "capacity": 3800, "output": 3420, "efficiency": 90.0 },
                    { "source": "Hydro", "capacity": 2400, "output": 2280, "efficiency": 95.0 },
                    { "source": "Natural Gas", "capacity": 1800, "output": 1710, "efficiency": 95.0 },
                    { "source": "Nuclear", "capacity": 600, "output": 570, "efficiency": 95.0 },
                ),
                crate::chart!("Renewable Energy Trends";
                    { "month": "Jan", "solar": 3200, "wind": 2800, "hydro": 2100, "total": 8100 },
                    { "month": "Feb", "solar": 3400, "wind": 3000, "hydro": 2200, "total": 8600 },
                    { "month": "Mar", "solar": 3650, "wind": 3200, "hydro": 2250, "total": 9100 },
                    { "month": "Apr", "solar": 3800, "wind": 3300, "hydro": 2280, "total": 9380 },
                    { "month": "May", "solar": 3900, "wind": 3400, "hydro": 2280, "total": 9580 },
                    { "month": "Jun", "solar": 3850, "wind": 3420, "hydro": 2280, "total": 9550 },
                ),
            ],
            alerts: vec![
                AlertEntry::success("Renewable energy target of 65% exceeded"),
                AlertEntry::info("Solar farm #12 connected to grid successfully"),
                AlertEntry::warning("Wind turbine W-45 requires maintenance"),
            ],
        },
        UseCaseDraft {
            id: "transmission",
            title: "Transmission & Distribution",
            description: "Monitor and optimize electrical transmission and distribution networks",
            icon: Icon::Cable,
            color: "#10b981",
            metrics: [
                Metric::new("Grid Stability", "99.8%", "+0.3%", Icon::Router),
                Metric::new("Transmission Loss", "2.1%", "-0.5%", Icon::TrendingDown),
                Metric::new("Network Reliability", "99.97%", "+0.02%", Icon::CheckCircle),
                Metric::new("Load Balancing", "96.4%", "+1.2%", Icon::Timeline),
            ],
            charts: [
                crate::chart!("Grid Performance Metrics";
                    { "region": "North", "load": 2847, "capacity": 3200, "reliability": 99.9 },
                    { "region": "South", "load": 3154, "capacity": 3400, "reliability": 99.8 },
                    { "region": "East", "load": 2698, "capacity": 2900, "reliability": 99.95 },
                    { "region": "West", "load": 2901, "capacity": 3100, "reliability": 99.92 },
                ),
                crate::chart!("Transmission Line Monitoring";
                    { "line": "TL-001", "voltage": 400, "current": 1250, "temperature": 65, "status": "Normal" },
                    { "line": "TL-002", "voltage": 400, "current": 1180, "temperature": 62, "status": "Normal" },
                    { "line": "TL-003", "voltage": 400, "current": 1320, "temperature": 68, "status": "Monitor" },
                    { "line": "TL-004", "voltage": 400, "current": 1100, "temperature": 59, "status": "Normal" },
                ),
            ],
            alerts: vec![
                AlertEntry::success("Grid reliability maintained above 99.95%"),
                AlertEntry::warning("Transmission line TL-003 approaching thermal limit"),
                AlertEntry::info("Load balancing optimization deployed in West region"),
            ],
        },
        UseCaseDraft {
            id: "smartgrid",
            title: "Smart Grid Management",
            description: "Advanced smart grid technologies for intelligent power management",
            icon: Icon::Memory,
            color: "#7c3aed",
            metrics: [
                Metric::new("Smart Meters", "2.4M", "+12%", Icon::Memory),
                Metric::new("Grid Intelligence", "94.2%", "+3.8%", Icon::Analytics),
                Metric::new("Demand Response", "87.6%", "+5.2%", Icon::Schedule),
                Metric::new("Self-Healing Events", "1,247", "+18%", Icon::Engineering),
            ],
            charts: [
                crate::chart!("Smart Grid Analytics";
                    { "hour": "00:00", "demand": 8500, "supply": 8650, "price": 0.12 },
                    { "hour": "06:00", "demand": 9800, "supply": 9950, "price": 0.15 },
                    { "hour": "12:00", "demand": 11200, "supply": 11350, "price": 0.18 },
                    { "hour": "18:00", "demand": 12800, "supply": 12950, "price": 0.22 },
                    { "hour": "21:00", "demand": 11500, "supply": 11650, "price": 0.19 },
                ),
                crate::chart!("Demand Response Programs";
                    { "program": "Residential DR", "participants": 485000, "reduction": 850, "savings": 1.2 },
                    { "program": "Commercial DR", "participants": 12400, "reduction": 1200, "savings": 2.8 },
                    { "program": "Industrial DR", "participants": 847, "reduction": 2100, "savings": 4.5 },
                    { "program": "EV Charging DR", "participants": 89000, "reduction": 420, "savings": 0.8 },
                ),
            ],
            alerts: vec![
                AlertEntry::success("Smart meter deployment reached 95% coverage"),
                AlertEntry::info("AI-powered grid optimization activated"),
                AlertEntry::success("Demand response program exceeded targets by 15%"),
            ],
        },
        UseCaseDraft {
            id: "renewable",
            title: "Renewable Integration",
            description: "Optimize renewable energy integration and storage management",
            icon: Icon::WbSunny,
            color: "#f59e0b",
            metrics: [
                Metric::new("Renewable Capacity", "8.4 GW", "+15.2%", Icon::WbSunny),
                Metric::new("Integration Rate", "92.8%", "+4.1%", Icon::Landscape),
                Metric::new("Storage Efficiency", "89.3%", "+2.7%", Icon::BatteryChargingFull),
                Metric::new("Carbon Reduction", "2.8M tons", "+18%", Icon::Landscape),
            ],
            charts: [
                crate::chart!("Renewable Energy Production";
                    { "date": "2025-10-01", "solar": 3200, "wind": 2800, "hydro": 2100, "storage": 450 },
                    { "date": "2025-10-02", "solar": 3400, "wind": 3000, "hydro": 2200, "storage": 520 },
                    { "date": "2025-10-03", "solar": 3650, "wind": 3200, "hydro": 2250, "storage": 580 },
                    { "date": "2025-10-04", "solar": 3800, "wind": 3300, "hydro": 2280, "storage": 650 },
                    { "date": "2025-10-05", "solar": 3850, "wind": 3420, "hydro": 2280, "storage": 720 },
                ),
                crate::chart!("Energy Storage Management";
                    { "facility": "Battery Farm A", "capacity": 200, "stored": 185, "efficiency": 92.5 },
                    { "facility": "Battery Farm B", "capacity": 150, "stored": 138, "efficiency": 92.0 },
                    { "facility": "Pumped Hydro", "capacity": 800, "stored": 720, "efficiency": 90.0 },
                    { "facility": "Compressed Air", "capacity": 100, "stored": 89, "efficiency": 89.0 },
                ),
            ],
            alerts: vec![
                AlertEntry::success("Renewable targets exceeded - 67.3% of total generation"),
                AlertEntry::info("New battery storage facility commissioned"),
                AlertEntry::success("Carbon emissions reduced by 18% year-over-year"),
            ],
        },
        UseCaseDraft {
            id: "customer",
            title: "Customer & Retail",
            description: "Customer energy management, billing, and retail market operations",
            icon: Icon::Store,
            color: "#dc2626",
            metrics: [
                Metric::new("Customer Base", "2.4M", "+3.2%", Icon::Store),
                Metric::new("Satisfaction Score", "4.7/5", "+0.3", Icon::CheckCircle),
                Metric::new("Bill Accuracy", "99.8%", "+0.1%", Icon::Assessment),
                Metric::new("Energy Savings", "12.4%", "+2.1%", Icon::Landscape),
            ],
            charts: [
                crate::chart!("Customer Segmentation Analysis";
                    { "segment": "Residential", "customers": 1950000, "consumption": 4200, "revenue": 125.4 },
                    { "segment": "Small Business", "customers": 380000, "consumption": 2800, "revenue": 89.2 },
                    { "segment": "Industrial", "customers": 12400, "consumption": 8500, "revenue": 285.7 },
                    { "segment": "Municipal", "customers": 57600, "consumption": 1200, "revenue": 38.9 },
                ),
                crate::chart!("Energy Usage Patterns";
                    { "hour": "00:00", "residential": 1800, "commercial": 1200, "industrial": 3200 },
                    { "hour": "06:00", "residential": 2400, "commercial": 1800, "industrial": 3400 },
                    { "hour": "12:00", "residential": 2200, "commercial": 3200, "industrial": 3600 },
                    { "hour": "18:00", "residential": 3200, "commercial": 2800, "industrial": 3500 },
                    { "hour": "21:00", "residential": 2800, "commercial": 1500, "industrial": 3300 },
                ),
            ],
            alerts: vec![
                AlertEntry::success("Customer satisfaction increased to 4.7/5 rating"),
                AlertEntry::info("New time-of-use tariff program launched"),
                AlertEntry::success("Energy efficiency programs saved customers 12.4%"),
            ],
        },
        UseCaseDraft {
            id: "maintenance",
            title: "Asset Management & Maintenance",
            description: "Predictive maintenance and asset lifecycle management for grid infrastructure",
            icon: Icon::Engineering,
            color: "#0891b2",
            metrics: [
                Metric::new("Asset Health", "94.6%", "+2.3%", Icon::MonitorHeart),
                Metric::new("Maintenance Efficiency", "96.8%", "+1.9%", Icon::Engineering),
                Metric::new("Asset Lifespan", "+18.2%", "+3.1%", Icon::TrendingUp),
                Metric::new("Downtime Reduction", "42%", "+8%", Icon::Schedule),
            ],
            charts: [
                crate::chart!("Asset Health Monitoring";
                    { "asset": "Transformers", "health": 96, "maintenance": 12, "lifespan": 28 },
                    { "asset": "Transmission Lines", "health": 94, "maintenance": 8, "lifespan": 35 },
                    { "asset": "Substations", "health": 97, "maintenance": 15, "lifespan": 32 },
                    { "asset": "Distribution Equipment", "health": 93, "maintenance": 18, "lifespan": 25 },
                ),
                crate::chart!("Predictive Maintenance Schedule";
                    { "month": "Oct", "scheduled": 245, "emergency": 12, "cost": 2.8 },
                    { "month": "Nov", "scheduled": 268, "emergency": 8, "cost": 2.9 },
                    { "month": "Dec", "scheduled": 295, "emergency": 6, "cost": 3.1 },
                    { "month": "Jan", "scheduled": 220, "emergency": 4, "cost": 2.6 },
                ),
            ],
            alerts: vec![
                AlertEntry::success("Predictive maintenance reduced unplanned outages by 42%"),
                AlertEntry::warning("Transformer T-245 scheduled for replacement next month"),
                AlertEntry::info("AI maintenance optimization deployed across 1,200 assets"),
            ],
        },
    ]
}
