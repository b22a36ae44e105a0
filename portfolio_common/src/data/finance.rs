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
        id: PlatformId::RiskGuardPro,
        header: HeaderInfo {
            title: "RiskGuard Pro",
            subtitle: "Comprehensive Financial AI Risk & Operations Platform",
            color: "#059669",
        },
        content: PlatformContent::UseCases(UseCaseDashboard {
            use_cases: build_table(Rotation::ThreeWay, use_cases())?,
            chrome: DashboardChrome {
                live_label: "Real-time Financial Data",
                live_icon: Icon::MonitorHeart,
                alerts_heading: "Financial Risk Monitoring Center - Live Alerts",
                alerts_icon: Icon::Security,
                alert_source_suffix: " System",
                impact_heading: "Financial Services AI Transformation Impact",
                impact_icon: Icon::AccountBalance,
                impact_notes: [
                    (
                        "Risk Management Revolution",
                        "AI-powered risk assessment and fraud detection prevent $24.8M in losses annually while maintaining 99.7% accuracy and sub-second response times.",
                    ),
                    (
                        "Operational Excellence",
                        "Automated compliance monitoring achieves 99.9% regulatory adherence while algorithmic trading generates $847M in additional alpha annually.",
                    ),
                    (
                        "Customer Experience",
                        "Digital banking transformation achieves 87.3% adoption rate with NPS of 68, while AI advisory services manage $847B with 94.6% accuracy.",
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
            id: "fraud",
            title: "Fraud Detection & Prevention",
            description: "Real-time fraud monitoring and prevention across all financial transactions",
            icon: Icon::Shield,
            color: "#dc2626",
            metrics: [
                Metric::new("Fraud Detection Rate", "99.7%", "+0.3%", Icon::Shield),
                Metric::new("False Positives", "0.8%", "-0.2%", Icon::TrendingDown),
                Metric::new("Response Time", "47ms", "-12ms", Icon::MonitorHeart),
                Metric::new("Prevented Losses", "$24.8M", "+18%", Icon::AttachMoney),
            ],
            charts: [
                crate::chart!("Fraud Detection Performance";
                    { "month": "Jan", "detected": 4847, "prevented": 4782, "losses": 2.3 },
                    { "month": "Feb", "detected": 5124, "prevented": 5089, "losses": 1.8 },
                    { "month": "Mar", "detected": 4965, "prevented": 4938, "losses": 1.2 },
                    { "month": "Apr", "detected": 5287, "prevented": 5261, "losses": 0.9 },
                    { "month": "May", "detected": 5456, "prevented": 5439, "losses": 0.7 },
                    { "month": "Jun", "detected": 5198, "prevented": 5183, "losses": 0.5 },
                ),
                crate::chart!("Transaction Risk Scoring";
                    { "risk": "Low (0-30)", "transactions": 2847650, "fraud": 12, "percentage": 0.0004 },
                    { "risk": "Medium (31-70)", "transactions": 189420, "fraud": 145, "percentage": 0.077 },
                    { "risk": "High (71-90)", "transactions": 12847, "fraud": 987, "percentage": 7.68 },
                    { "risk": "Critical (91-100)", "transactions": 2156, "fraud": 1876, "percentage": 87.01 },
                ),
            ],
            alerts: vec![
                AlertEntry::warning("Suspicious activity pattern detected in Region 7"),
                AlertEntry::success("Fraud prevention saved $847K today"),
                AlertEntry::info("New ML model deployed - 15% accuracy improvement"),
            ],
        },
        UseCaseDraft {
            id: "risk",
            title: "Risk Assessment & Management",
            description: "Comprehensive risk evaluation for lending, investments, and portfolio management",
            icon: Icon::Assessment,
            color: "#f59e0b",
            metrics: [
                Metric::new("Portfolio Risk Score", "2.4/10", "-0.3", Icon::Assessment),
                Metric::new("Default Prediction", "96.8%", "+1.2%", Icon::Analytics),
                Metric::new("Risk-Adjusted Returns", "12.7%", "+2.1%", Icon::TrendingUp),
                Metric::new("Capital Adequacy", "18.4%", "+0.8%", Icon::AccountBalance),
            ],
            charts: [
                crate::chart!("Risk Distribution Analysis";
                    { "category": "Credit Risk", "exposure": 450, "mitigation": 425, "score": 2.8 },
                    { "category": "Market Risk", "exposure": 380, "mitigation": 365, "score": 2.1 },
                    { "category": "Operational Risk", "exposure": 290, "mitigation": 278, "score": 1.9 },
                    { "category": "Liquidity Risk", "exposure": 185, "mitigation": 180, "score": 1.4 },
                ),
                crate::chart!("Credit Scoring Model Performance";
                    { "segment": "Prime", "applications": 12450, "approved": 11897, "default": 0.8 },
                    { "segment": "Near Prime", "applications": 8947, "approved": 7158, "default": 2.4 },
                    { "segment": "Subprime", "applications": 5689, "approved": 2845, "default": 7.2 },
                    { "segment": "Deep Subprime", "applications": 2147, "approved": 429, "default": 18.9 },
                ),
            ],
            alerts: vec![
                AlertEntry::success("Portfolio risk reduced by 12% this quarter"),
                AlertEntry::warning("Market volatility increasing - review exposure limits"),
                AlertEntry::info("New ESG risk factors integrated into models"),
            ],
        },
        UseCaseDraft {
            id: "trading",
            title: "Algorithmic Trading & Markets",
            description: "AI-powered trading algorithms and market analysis for optimal execution",
            icon: Icon::ShowChart,
            color: "#10b981",
            metrics: [
                Metric::new("Trading Volume", "$2.8B", "+15.2%", Icon::CompareArrows),
                Metric::new("Alpha Generation", "8.7%", "+1.9%", Icon::TrendingUp),
                Metric::new("Execution Quality", "98.9%", "+0.4%", Icon::CheckCircle),
                Metric::new("Market Making PnL", "$12.4M", "+24%", Icon::MonetizationOn),
            ],
            charts: [
                crate::chart!("Trading Performance Metrics";
                    { "strategy": "Momentum", "returns": 12.4, "sharpe": 1.8, "drawdown": 3.2 },
                    { "strategy": "Mean Reversion", "returns": 8.9, "sharpe": 2.1, "drawdown": 2.1 },
                    { "strategy": "Arbitrage", "returns": 6.7, "sharpe": 2.8, "drawdown": 1.1 },
                    { "strategy": "Market Making", "returns": 15.2, "sharpe": 1.9, "drawdown": 4.1 },
                ),
                crate::chart!("Market Liquidity Analysis";
                    { "asset": "Equities", "volume": 1.2, "spread": 0.008, "depth": 450 },
                    { "asset": "Fixed Income", "volume": 0.8, "spread": 0.012, "depth": 320 },
                    { "asset": "FX", "volume": 2.1, "spread": 0.004, "depth": 780 },
                    { "asset": "Commodities", "volume": 0.4, "spread": 0.018, "depth": 150 },
                ),
            ],
            alerts: vec![
                AlertEntry::success("Trading algorithms generated $2.1M profit today"),
                AlertEntry::info("New high-frequency strategy deployed in FX markets"),
                AlertEntry::warning("Unusual market volatility detected - algorithms adapted"),
            ],
        },
        UseCaseDraft {
            id: "compliance",
            title: "Regulatory Compliance & Reporting",
            description: "Automated compliance monitoring and regulatory reporting across jurisdictions",
            icon: Icon::Policy,
            color: "#7c3aed",
            metrics: [
                Metric::new("Compliance Score", "99.9%", "+0.1%", Icon::Policy),
                Metric::new("Regulatory Filings", "1,247", "+12%", Icon::Gavel),
                Metric::new("Audit Readiness", "100%", "0%", Icon::CheckCircle),
                Metric::new("Violation Risk", "0.02%", "-0.01%", Icon::Security),
            ],
            charts: [
                crate::chart!("Compliance Monitoring Dashboard";
                    { "regulation": "Basel III", "score": 99.8, "violations": 0, "risk": 0.1 },
                    { "regulation": "Dodd-Frank", "score": 99.9, "violations": 0, "risk": 0.05 },
                    { "regulation": "MiFID II", "score": 99.7, "violations": 1, "risk": 0.15 },
                    { "regulation": "GDPR", "score": 100, "violations": 0, "risk": 0.0 },
                ),
                crate::chart!("Regulatory Capital Requirements";
                    { "tier": "Tier 1 Capital", "required": 8.0, "actual": 12.4, "buffer": 4.4 },
                    { "tier": "Common Equity", "required": 4.5, "actual": 9.8, "buffer": 5.3 },
                    { "tier": "Capital Conservation", "required": 2.5, "actual": 3.1, "buffer": 0.6 },
                    { "tier": "Leverage Ratio", "required": 3.0, "actual": 5.2, "buffer": 2.2 },
                ),
            ],
            alerts: vec![
                AlertEntry::success("All regulatory reports submitted on time"),
                AlertEntry::info("New compliance framework integrated for crypto assets"),
                AlertEntry::success("Zero compliance violations for 18 consecutive months"),
            ],
        },
        UseCaseDraft {
            id: "wealth",
            title: "Wealth Management & Advisory",
            description: "AI-driven wealth management, portfolio optimization, and financial advisory services",
            icon: Icon::Business,
            color: "#0891b2",
            metrics: [
                Metric::new("Assets Under Management", "$847B", "+12.8%", Icon::Business),
                Metric::new("Client Satisfaction", "4.8/5", "+0.2", Icon::Person),
                Metric::new("Portfolio Performance", "11.4%", "+2.7%", Icon::TrendingUp),
                Metric::new("Advisory Accuracy", "94.6%", "+1.8%", Icon::Analytics),
            ],
            charts: [
                crate::chart!("Portfolio Allocation Optimization";
                    { "allocation": "Equities", "target": 60, "actual": 58.7, "performance": 12.4 },
                    { "allocation": "Fixed Income", "target": 25, "actual": 26.2, "performance": 5.8 },
                    { "allocation": "Real Estate", "target": 10, "actual": 9.8, "performance": 8.9 },
                    { "allocation": "Alternatives", "target": 5, "actual": 5.3, "performance": 15.2 },
                ),
                crate::chart!("Client Segmentation Analysis";
                    { "segment": "UHNW (>$50M)", "clients": 247, "aum": 425, "fees": 0.8 },
                    { "segment": "HNW ($5-50M)", "clients": 1847, "aum": 298, "fees": 1.2 },
                    { "segment": "Affluent ($1-5M)", "clients": 12450, "aum": 89, "fees": 1.5 },
                    { "segment": "Mass Market (<$1M)", "clients": 485000, "aum": 35, "fees": 1.8 },
                ),
            ],
            alerts: vec![
                AlertEntry::success("Q3 client acquisition exceeded targets by 18%"),
                AlertEntry::info("New ESG investment products launched"),
                AlertEntry::success("AI advisory platform achieved 94.6% accuracy"),
            ],
        },
        UseCaseDraft {
            id: "banking",
            title: "Digital Banking Operations",
            description: "Core banking systems, digital payments, and customer experience optimization",
            icon: Icon::CreditCard,
            color: "#be185d",
            metrics: [
                Metric::new("Transaction Volume", "2.4M/day", "+8.7%", Icon::CreditCard),
                Metric::new("Digital Adoption", "87.3%", "+5.2%", Icon::CheckCircle),
                Metric::new("Processing Speed", "2.1sec", "-0.3sec", Icon::MonitorHeart),
                Metric::new("Customer NPS", "68", "+12", Icon::Person),
            ],
            charts: [
                crate::chart!("Digital Banking Metrics";
                    { "channel": "Mobile App", "users": 1890000, "transactions": 847000, "satisfaction": 4.6 },
                    { "channel": "Online Banking", "users": 1245000, "transactions": 456000, "satisfaction": 4.3 },
                    { "channel": "ATM Network", "users": 987000, "transactions": 289000, "satisfaction": 4.1 },
                    { "channel": "Branch", "users": 234000, "transactions": 98000, "satisfaction": 4.8 },
                ),
                crate::chart!("Payment Processing Analytics";
                    { "type": "Card Payments", "volume": 1.8, "value": 247, "growth": 12.4 },
                    { "type": "Wire Transfers", "volume": 0.3, "value": 189, "growth": 8.7 },
                    { "type": "ACH", "volume": 0.9, "value": 67, "growth": 15.2 },
                    { "type": "Digital Wallets", "volume": 1.2, "value": 89, "growth": 28.9 },
                ),
            ],
            alerts: vec![
                AlertEntry::success("Mobile app usage increased 28% this quarter"),
                AlertEntry::info("New contactless payment limits implemented"),
                AlertEntry::success("Digital onboarding time reduced to 4.2 minutes"),
            ],
        },
    ]
}
