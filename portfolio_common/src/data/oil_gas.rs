//! PredictiveOil Pro: six oil & gas use cases, charts on the two-way rotation.

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
        id: PlatformId::PredictiveOilPro,
        header: HeaderInfo {
            title: "PredictiveOil Pro",
            subtitle: "Comprehensive Oil & Gas AI Operations Platform",
            color: "#f59e0b",
        },
        content: PlatformContent::UseCases(UseCaseDashboard {
            use_cases: build_table(Rotation::TwoWay, use_cases())?,
            chrome: DashboardChrome {
                live_label: "Real-time Data",
                live_icon: Icon::Favorite,
                alerts_heading: "Real-time Alerts & Notifications",
                alerts_icon: Icon::Warning,
                alert_source_suffix: "",
                impact_heading: "Oil & Gas Industry AI Impact Summary",
                impact_icon: Icon::Assessment,
                impact_notes: [
                    (
                        "Operational Excellence",
                        "AI-driven optimization across exploration, production, and refining operations delivers 15-25% efficiency improvements and $2.3B annual cost savings.",
                    ),
                    (
                        "Safety & Compliance",
                        "Predictive safety monitoring and automated compliance tracking reduce incidents by 40% and ensure 100% regulatory adherence.",
                    ),
                    (
                        "Future-Ready Infrastructure",
                        "Advanced analytics and ML models enable proactive decision-making, extending asset life by 20% and optimizing energy transition strategies.",
                    ),
                ],
            },
            load_readout: false,
        }),
    })
}

fn use_cases() -> Vec<UseCaseDraft> {
    vec![
        UseCaseDraft {
            id: "exploration",
            title: "Exploration & Drilling",
            description: "AI-powered geological analysis, seismic interpretation, and drilling optimization",
            icon: Icon::Search,
            color: "#f59e0b",
            metrics: [
                Metric::new("Active Wells", "2,847", "+12%", Icon::LocationOn),
                Metric::new("Drilling Efficiency", "94.2%", "+8%", Icon::Engineering),
                Metric::new("Seismic Coverage", "89,450 km²", "+15%", Icon::Assessment),
                Metric::new("Discovery Rate", "23%", "+5%", Icon::TrendingUp),
            ],
            charts: [
                crate::chart!("Drilling Performance Optimization";
                    { "month": "Jan", "efficiency": 87, "cost": 2.3, "depth": 4500 },
                    { "month": "Feb", "efficiency": 89, "cost": 2.1, "depth": 4650 },
                    { "month": "Mar", "efficiency": 91, "cost": 1.9, "depth": 4800 },
                    { "month": "Apr", "efficiency": 93, "cost": 1.8, "depth": 5000 },
                    { "month": "May", "efficiency": 94, "cost": 1.7, "depth": 5200 },
                    { "month": "Jun", "efficiency": 96, "cost": 1.6, "depth": 5400 },
                ),
                crate::chart!("Seismic Analysis Results";
                    { "formation": "Sandstone", "probability": 85, "reserves": 450 },
                    { "formation": "Limestone", "probability": 72, "reserves": 320 },
                    { "formation": "Shale", "probability": 68, "reserves": 180 },
                    { "formation": "Dolomite", "probability": 61, "reserves": 240 },
                ),
            ],
            alerts: vec![
                AlertEntry::success("New oil reservoir discovered in Sector 7-A"),
                AlertEntry::warning("Drilling rig #4 requires maintenance scheduling"),
                AlertEntry::info("Seismic survey completed for Block 15"),
            ],
        },
        UseCaseDraft {
            id: "production",
            title: "Production Optimization",
            description: "Real-time monitoring and optimization of oil & gas production operations",
            icon: Icon::LocalGasStation,
            color: "#3b82f6",
            metrics: [
                Metric::new("Daily Production", "485,672 bbl", "+3.2%", Icon::LocalGasStation),
                Metric::new("Well Uptime", "97.8%", "+1.1%", Icon::CheckCircle),
                Metric::new("Flow Rate Efficiency", "92.4%", "+2.8%", Icon::Opacity),
                Metric::new("Pressure Optimization", "2,847 PSI", "+0.5%", Icon::Speed),
            ],
            charts: [
                crate::chart!("Production Trends";
                    { "date": "2025-10-01", "crude": 485000, "gas": 2.8, "water": 125000 },
                    { "date": "2025-10-02", "crude": 487000, "gas": 2.9, "water": 124000 },
                    { "date": "2025-10-03", "crude": 489000, "gas": 3.0, "water": 123000 },
                    { "date": "2025-10-04", "crude": 491000, "gas": 3.1, "water": 122000 },
                    { "date": "2025-10-05", "crude": 485672, "gas": 2.85, "water": 125500 },
                ),
                crate::chart!("Well Performance Analysis";
                    { "well": "W-001", "production": 95, "efficiency": 98 },
                    { "well": "W-002", "production": 87, "efficiency": 94 },
                    { "well": "W-003", "production": 92, "efficiency": 96 },
                    { "well": "W-004", "production": 88, "efficiency": 91 },
                    { "well": "W-005", "production": 96, "efficiency": 99 },
                ),
            ],
            alerts: vec![
                AlertEntry::success("Production targets exceeded by 3.2%"),
                AlertEntry::warning("Well W-004 showing decreased flow rate"),
                AlertEntry::info("Optimization algorithm deployed to 12 wells"),
            ],
        },
        UseCaseDraft {
            id: "pipeline",
            title: "Pipeline & Transportation",
            description: "Monitoring pipeline integrity, flow optimization, and transportation logistics",
            icon: Icon::AccountTree,
            color: "#10b981",
            metrics: [
                Metric::new("Pipeline Length", "12,847 km", "+2.1%", Icon::AccountTree),
                Metric::new("Flow Rate", "2.8M bbl/day", "+1.8%", Icon::Timeline),
                Metric::new("Integrity Score", "98.7%", "+0.3%", Icon::Security),
                Metric::new("Transport Efficiency", "94.5%", "+2.2%", Icon::LocalShipping),
            ],
            charts: [
                crate::chart!("Pipeline Pressure Monitoring";
                    { "segment": "A1-A5", "pressure": 1200, "flow": 85000, "integrity": 98 },
                    { "segment": "B1-B8", "pressure": 1180, "flow": 92000, "integrity": 97 },
                    { "segment": "C1-C12", "pressure": 1220, "flow": 78000, "integrity": 99 },
                    { "segment": "D1-D6", "pressure": 1195, "flow": 88000, "integrity": 96 },
                ),
                crate::chart!("Transportation Analytics";
                    { "route": "Route A", "volume": 125000, "cost": 2.3, "time": 48 },
                    { "route": "Route B", "volume": 98000, "cost": 2.8, "time": 52 },
                    { "route": "Route C", "volume": 145000, "cost": 2.1, "time": 45 },
                    { "route": "Route D", "volume": 87000, "cost": 3.2, "time": 58 },
                ),
            ],
            alerts: vec![
                AlertEntry::success("All pipeline segments operating within normal parameters"),
                AlertEntry::warning("Segment C1-C12 requires scheduled maintenance"),
                AlertEntry::info("New pipeline route D1-D6 commissioned"),
            ],
        },
        UseCaseDraft {
            id: "refining",
            title: "Refining Operations",
            description: "Optimizing refinery processes, product quality, and energy efficiency",
            icon: Icon::Factory,
            color: "#dc2626",
            metrics: [
                Metric::new("Refinery Capacity", "450K bbl/day", "+1.5%", Icon::Factory),
                Metric::new("Product Quality", "99.2%", "+0.8%", Icon::CheckCircle),
                Metric::new("Energy Efficiency", "87.3%", "+3.1%", Icon::ElectricBolt),
                Metric::new("Yield Optimization", "94.6%", "+2.4%", Icon::TrendingUp),
            ],
            charts: [
                crate::chart!("Refinery Output Composition";
                    { "product": "Gasoline", "volume": 180000, "margin": 15.2 },
                    { "product": "Diesel", "volume": 145000, "margin": 18.7 },
                    { "product": "Jet Fuel", "volume": 85000, "margin": 22.1 },
                    { "product": "Heavy Oil", "volume": 40000, "margin": 8.9 },
                ),
                crate::chart!("Process Efficiency Trends";
                    { "unit": "CDU-1", "efficiency": 94, "temperature": 350, "pressure": 15 },
                    { "unit": "CDU-2", "efficiency": 91, "temperature": 365, "pressure": 14.5 },
                    { "unit": "FCC-1", "efficiency": 96, "temperature": 520, "pressure": 2.1 },
                    { "unit": "HDS-1", "efficiency": 98, "temperature": 380, "pressure": 35 },
                ),
            ],
            alerts: vec![
                AlertEntry::success("Yield optimization increased by 2.4%"),
                AlertEntry::warning("CDU-2 operating at elevated temperature"),
                AlertEntry::info("New catalyst deployed in FCC-1 unit"),
            ],
        },
        UseCaseDraft {
            id: "safety",
            title: "Safety & HSE Monitoring",
            description: "Health, Safety, Environment monitoring with AI-powered risk assessment",
            icon: Icon::Security,
            color: "#7c3aed",
            metrics: [
                Metric::new("Safety Score", "99.8%", "+0.2%", Icon::Security),
                Metric::new("Incident Rate", "0.12/1M hrs", "-15%", Icon::Favorite),
                Metric::new("Environmental Score", "96.4%", "+1.8%", Icon::Landscape),
                Metric::new("Compliance Rate", "100%", "0%", Icon::Gavel),
            ],
            charts: [
                crate::chart!("Safety Metrics Tracking";
                    { "month": "Jan", "incidents": 2, "nearMiss": 15, "training": 487 },
                    { "month": "Feb", "incidents": 1, "nearMiss": 12, "training": 523 },
                    { "month": "Mar", "incidents": 0, "nearMiss": 8, "training": 556 },
                    { "month": "Apr", "incidents": 1, "nearMiss": 10, "training": 498 },
                    { "month": "May", "incidents": 0, "nearMiss": 6, "training": 612 },
                    { "month": "Jun", "incidents": 0, "nearMiss": 4, "training": 587 },
                ),
                crate::chart!("Environmental Impact Assessment";
                    { "parameter": "Emissions", "current": 85, "target": 80, "compliance": 94 },
                    { "parameter": "Water Usage", "current": 92, "target": 90, "compliance": 98 },
                    { "parameter": "Waste Reduction", "current": 88, "target": 85, "compliance": 96 },
                    { "parameter": "Energy Efficiency", "current": 91, "target": 88, "compliance": 97 },
                ),
            ],
            alerts: vec![
                AlertEntry::success("Zero incidents recorded for 45 consecutive days"),
                AlertEntry::info("Safety training compliance at 100%"),
                AlertEntry::success("Environmental targets exceeded in all categories"),
            ],
        },
        UseCaseDraft {
            id: "retail",
            title: "Retail & Distribution",
            description: "Fuel retail analytics, demand forecasting, and distribution optimization",
            icon: Icon::Store,
            color: "#0891b2",
            metrics: [
                Metric::new("Retail Outlets", "2,847", "+5.2%", Icon::Store),
                Metric::new("Fuel Sales", "12.8M L/day", "+3.8%", Icon::LocalGasStation),
                Metric::new("Demand Accuracy", "96.7%", "+2.1%", Icon::Assessment),
                Metric::new("Customer Satisfaction", "4.6/5", "+0.3", Icon::CheckCircle),
            ],
            charts: [
                crate::chart!("Retail Sales Analytics";
                    { "region": "North", "gasoline": 285000, "diesel": 195000, "revenue": 4.2 },
                    { "region": "South", "gasoline": 325000, "diesel": 245000, "revenue": 5.1 },
                    { "region": "East", "gasoline": 298000, "diesel": 187000, "revenue": 4.6 },
                    { "region": "West", "gasoline": 312000, "diesel": 203000, "revenue": 4.8 },
                ),
                crate::chart!("Demand Forecasting Accuracy";
                    { "week": "W1", "forecast": 95.2, "actual": 97.1 },
                    { "week": "W2", "forecast": 96.8, "actual": 95.9 },
                    { "week": "W3", "forecast": 98.1, "actual": 98.7 },
                    { "week": "W4", "forecast": 94.5, "actual": 93.8 },
                ),
            ],
            alerts: vec![
                AlertEntry::success("Q3 sales targets exceeded by 8.2%"),
                AlertEntry::warning("Increased demand predicted for Region South"),
                AlertEntry::info("New outlet opened in metropolitan area"),
            ],
        },
    ]
}
