use crate::alert::{AlertEntry, AlertKind};
use crate::icon::Icon;
use crate::metric::Metric;
use crate::platform::{HeaderInfo, Platform, PlatformContent, PlatformId, Showcase};
use crate::use_case::{Capability, ShowcaseTab, Tone};

pub fn platform() -> Platform {
    Platform {
        id: PlatformId::AgenticFlowPro,
        header: HeaderInfo {
            title: "AgenticFlow Pro",
            subtitle: "Autonomous AI Agents",
            color: "#6366f1",
        },
        content: PlatformContent::Showcase(Showcase {
            title: "AgenticFlow Pro",
            subtitle: "Next-generation autonomous AI agents platform for enterprise automation, intelligent decision-making, and multi-agent orchestration",
            tabs: tabs(),
        }),
    }
}

fn tabs() -> Vec<ShowcaseTab> {
    vec![
        ShowcaseTab {
            label: "Autonomous Decision".to_string(),
            title: "Autonomous Decision Making".to_string(),
            description: "Intelligent autonomous agents capable of making complex decisions independently using advanced reasoning and contextual understanding.".to_string(),
            metrics: [
                Metric::new("Decision Accuracy", "96.8%", "+8.3%", Icon::Psychology)
                    .tinted("#1976d2"),
                Metric::new("Response Time", "1.2 sec", "-45%", Icon::Speed)
                    .tinted("#388e3c"),
                Metric::new("Success Rate", "94.7%", "+12%", Icon::Assessment)
                    .tinted("#f57c00"),
                Metric::new("Cost Reduction", "67%", "+23%", Icon::TrendingUp)
                    .tinted("#7b1fa2"),
            ],
            alert: AlertEntry::new(AlertKind::Info, "Agent A-247 autonomously resolved supply chain disruption by identifying 3 alternative suppliers. Decision confidence: 96.8%.")
                .headline("Decision Alert:"),
            capabilities: [
                Capability::new(
                    "Cognitive Reasoning",
                    [
                        ("Neural Reasoning", Tone::Primary),
                        ("Context Awareness", Tone::Secondary),
                        ("Causal Inference", Tone::Success),
                    ],
                    "Advanced cognitive reasoning capabilities enabling agents to understand context and make informed decisions autonomously.",
                ),
                Capability::new(
                    "Decision Explainability",
                    [
                        ("Transparent Logic", Tone::Primary),
                        ("Audit Trails", Tone::Warning),
                        ("Confidence Scores", Tone::Info),
                    ],
                    "Comprehensive decision explainability with transparent reasoning paths and confidence assessments for enterprise trust.",
                ),
            ],
        },
        ShowcaseTab {
            label: "Multi-Agent Collab".to_string(),
            title: "Multi-Agent Collaboration".to_string(),
            description: "Coordinated multi-agent systems working together to solve complex enterprise problems through intelligent collaboration and task distribution.".to_string(),
            metrics: [
                Metric::new("Agent Coordination", "98.2%", "+6.1%", Icon::Groups)
                    .tinted("#1976d2"),
                Metric::new("Task Distribution", "91.4%", "+18%", Icon::Timeline)
                    .tinted("#388e3c"),
                Metric::new("System Efficiency", "93.6%", "+14%", Icon::Speed)
                    .tinted("#f57c00"),
                Metric::new("Conflict Resolution", "89.7%", "+22%", Icon::Security)
                    .tinted("#7b1fa2"),
            ],
            alert: AlertEntry::new(AlertKind::Success, "12 agents successfully coordinated on Project Alpha. Task completion 18% ahead of schedule with 98.2% accuracy.")
                .headline("Collaboration Update:"),
            capabilities: [
                Capability::new(
                    "Agent Orchestration",
                    [
                        ("Dynamic Allocation", Tone::Primary),
                        ("Load Balancing", Tone::Secondary),
                        ("Skill Matching", Tone::Success),
                    ],
                    "Intelligent agent orchestration with dynamic task allocation and skill-based matching for optimal collaboration.",
                ),
                Capability::new(
                    "Conflict Resolution",
                    [
                        ("Consensus Building", Tone::Primary),
                        ("Negotiation Protocols", Tone::Warning),
                        ("Priority Management", Tone::Info),
                    ],
                    "Advanced conflict resolution mechanisms enabling agents to negotiate and reach consensus on complex decisions.",
                ),
            ],
        },
        ShowcaseTab {
            label: "Workflow Automation".to_string(),
            title: "Intelligent Workflow Automation".to_string(),
            description: "End-to-end workflow automation with intelligent process optimization, exception handling, and adaptive learning capabilities.".to_string(),
            metrics: [
                Metric::new("Process Automation", "87.3%", "+34%", Icon::AutoAwesome)
                    .tinted("#1976d2"),
                Metric::new("Error Reduction", "92.1%", "+28%", Icon::Security)
                    .tinted("#388e3c"),
                Metric::new("Time Savings", "78%", "+41%", Icon::Speed)
                    .tinted("#f57c00"),
                Metric::new("ROI Improvement", "156%", "+67%", Icon::TrendingUp)
                    .tinted("#7b1fa2"),
            ],
            alert: AlertEntry::new(AlertKind::Warning, "Workflow W-184 encountered exception. Agent autonomously implemented workaround. Process continued with 0 downtime.")
                .headline("Automation Alert:"),
            capabilities: [
                Capability::new(
                    "Adaptive Automation",
                    [
                        ("Self-Healing", Tone::Primary),
                        ("Exception Handling", Tone::Error),
                        ("Process Learning", Tone::Secondary),
                    ],
                    "Self-adaptive automation systems that learn from exceptions and continuously improve process efficiency.",
                ),
                Capability::new(
                    "Process Optimization",
                    [
                        ("Bottleneck Detection", Tone::Primary),
                        ("Performance Tuning", Tone::Success),
                        ("Resource Allocation", Tone::Info),
                    ],
                    "Continuous process optimization with bottleneck detection and intelligent resource allocation for maximum efficiency.",
                ),
            ],
        },
        ShowcaseTab {
            label: "Resource Management".to_string(),
            title: "Intelligent Resource Management".to_string(),
            description: "AI-driven resource allocation and management with predictive scaling, cost optimization, and performance monitoring.".to_string(),
            metrics: [
                Metric::new("Resource Utilization", "94.8%", "+11%", Icon::Assessment)
                    .tinted("#1976d2"),
                Metric::new("Load Balancing", "96.3%", "+7.2%", Icon::Timeline)
                    .tinted("#388e3c"),
                Metric::new("Cost Optimization", "$2.4M", "+38%", Icon::TrendingUp)
                    .tinted("#f57c00"),
                Metric::new("System Uptime", "99.7%", "+1.8%", Icon::Security)
                    .tinted("#7b1fa2"),
            ],
            alert: AlertEntry::new(AlertKind::Info, "Predictive scaling activated for Region 3. Capacity increased by 23% based on demand forecast. Cost impact: +$1,247.")
                .headline("Resource Alert:"),
            capabilities: [
                Capability::new(
                    "Predictive Scaling",
                    [
                        ("Demand Forecasting", Tone::Primary),
                        ("Auto-scaling", Tone::Secondary),
                        ("Cost Optimization", Tone::Success),
                    ],
                    "Intelligent predictive scaling with demand forecasting and automated resource allocation for optimal performance and cost.",
                ),
                Capability::new(
                    "Performance Monitoring",
                    [
                        ("Real-time Metrics", Tone::Primary),
                        ("Anomaly Detection", Tone::Warning),
                        ("SLA Management", Tone::Info),
                    ],
                    "Comprehensive performance monitoring with real-time metrics, anomaly detection, and automated SLA management.",
                ),
            ],
        },
        ShowcaseTab {
            label: "Process Mining".to_string(),
            title: "Cognitive Process Mining".to_string(),
            description: "Advanced process discovery and optimization using AI to analyze business processes, identify bottlenecks, and recommend improvements.".to_string(),
            metrics: [
                Metric::new("Process Discovery", "93.4%", "+19%", Icon::Psychology)
                    .tinted("#1976d2"),
                Metric::new("Bottleneck Detection", "89.7%", "+26%", Icon::Assessment)
                    .tinted("#388e3c"),
                Metric::new("Optimization Rate", "76.2%", "+43%", Icon::AutoAwesome)
                    .tinted("#f57c00"),
                Metric::new("Compliance Score", "97.8%", "+8.4%", Icon::Security)
                    .tinted("#7b1fa2"),
            ],
            alert: AlertEntry::new(AlertKind::Success, "Identified 15 optimization opportunities in procurement workflow. Estimated efficiency gain: 34%. Implementation recommended.")
                .headline("Process Discovery:"),
            capabilities: [
                Capability::new(
                    "Process Discovery",
                    [
                        ("Event Log Analysis", Tone::Primary),
                        ("Pattern Recognition", Tone::Secondary),
                        ("Workflow Mapping", Tone::Success),
                    ],
                    "Automated process discovery through event log analysis and pattern recognition for comprehensive workflow understanding.",
                ),
                Capability::new(
                    "Optimization Recommendations",
                    [
                        ("AI Insights", Tone::Primary),
                        ("Impact Analysis", Tone::Warning),
                        ("Implementation Plans", Tone::Info),
                    ],
                    "AI-powered optimization recommendations with impact analysis and detailed implementation plans for process improvement.",
                ),
            ],
        },
        ShowcaseTab {
            label: "AI Governance".to_string(),
            title: "Enterprise AI Governance".to_string(),
            description: "Comprehensive AI governance framework ensuring model reliability, bias detection, compliance monitoring, and risk management.".to_string(),
            metrics: [
                Metric::new("Model Reliability", "98.9%", "+3.7%", Icon::Security)
                    .tinted("#1976d2"),
                Metric::new("Bias Detection", "91.2%", "+24%", Icon::Assessment)
                    .tinted("#388e3c"),
                Metric::new("Compliance Rate", "99.4%", "+2.1%", Icon::Business)
                    .tinted("#f57c00"),
                Metric::new("Risk Mitigation", "94.6%", "+16%", Icon::TrendingUp)
                    .tinted("#7b1fa2"),
            ],
            alert: AlertEntry::new(AlertKind::Error, "Model M-847 showing bias indicators in demographic analysis. Automatic retraining initiated with balanced dataset.")
                .headline("Governance Alert:"),
            capabilities: [
                Capability::new(
                    "Model Monitoring",
                    [
                        ("Performance Tracking", Tone::Primary),
                        ("Drift Detection", Tone::Warning),
                        ("Automated Alerts", Tone::Error),
                    ],
                    "Continuous model monitoring with performance tracking, drift detection, and automated alerting for proactive governance.",
                ),
                Capability::new(
                    "Compliance & Ethics",
                    [
                        ("Regulatory Compliance", Tone::Primary),
                        ("Ethical AI", Tone::Success),
                        ("Audit Readiness", Tone::Info),
                    ],
                    "Comprehensive compliance framework ensuring ethical AI practices and regulatory adherence with audit-ready documentation.",
                ),
            ],
        },
    ]
}
