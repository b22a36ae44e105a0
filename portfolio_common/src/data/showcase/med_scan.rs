use crate::alert::{AlertEntry, AlertKind};
use crate::icon::Icon;
use crate::metric::Metric;
use crate::platform::{HeaderInfo, Platform, PlatformContent, PlatformId, Showcase};
use crate::use_case::{Capability, ShowcaseTab, Tone};

pub fn platform() -> Platform {
    Platform {
        id: PlatformId::MedScanAi,
        header: HeaderInfo {
            title: "MedScan AI",
            subtitle: "Medical Imaging Analysis",
            color: "#be185d",
        },
        content: PlatformContent::Showcase(Showcase {
            title: "MedScan AI",
            subtitle: "Advanced healthcare intelligence platform for medical imaging, patient monitoring, and clinical decision support",
            tabs: tabs(),
        }),
    }
}

fn tabs() -> Vec<ShowcaseTab> {
    vec![
        ShowcaseTab {
            label: "Medical Imaging".to_string(),
            title: "Medical Imaging & AI Diagnostics".to_string(),
            description: "Advanced AI-powered medical imaging analysis with deep learning models for radiology, pathology, and early disease detection.".to_string(),
            metrics: [
                Metric::new("Diagnostic Accuracy", "98.7%", "+4.2%", Icon::Visibility)
                    .tinted("#1976d2"),
                Metric::new("Scan Processing Time", "3.2 min", "-45%", Icon::Speed)
                    .tinted("#388e3c"),
                Metric::new("Early Detection Rate", "94.8%", "+12%", Icon::Assessment)
                    .tinted("#f57c00"),
                Metric::new("False Positive Rate", "1.1%", "-38%", Icon::Security)
                    .tinted("#d32f2f"),
            ],
            alert: AlertEntry::new(AlertKind::Success, "AI detected early-stage lung nodule in CT scan #CT-2847. Radiologist review completed. Patient referred for further evaluation.")
                .headline("Diagnostic Update:"),
            capabilities: [
                Capability::new(
                    "Radiology AI",
                    [
                        ("CNN Models", Tone::Primary),
                        ("Multi-modal Analysis", Tone::Secondary),
                        ("Real-time Processing", Tone::Success),
                    ],
                    "Deep learning models for automated analysis of X-rays, CT scans, MRIs, and ultrasounds with radiologist-level accuracy.",
                ),
                Capability::new(
                    "Pathology Analysis",
                    [
                        ("Digital Pathology", Tone::Primary),
                        ("Cancer Detection", Tone::Error),
                        ("Tissue Classification", Tone::Info),
                    ],
                    "AI-powered digital pathology for automated cancer detection and tissue classification with enhanced diagnostic precision.",
                ),
            ],
        },
        ShowcaseTab {
            label: "Patient Monitoring".to_string(),
            title: "Real-time Patient Monitoring".to_string(),
            description: "Continuous patient monitoring systems with IoT sensors, predictive analytics, and automated alert systems for proactive healthcare.".to_string(),
            metrics: [
                Metric::new("Real-time Alerts", "99.6%", "+2.1%", Icon::MonitorHeart)
                    .tinted("#1976d2"),
                Metric::new("Patient Compliance", "89.3%", "+15%", Icon::LocalHospital)
                    .tinted("#388e3c"),
                Metric::new("Emergency Response", "4.2 min", "-28%", Icon::Healing)
                    .tinted("#f57c00"),
                Metric::new("Readmission Rate", "8.7%", "-34%", Icon::Assessment)
                    .tinted("#7b1fa2"),
            ],
            alert: AlertEntry::new(AlertKind::Warning, "Patient #P-1247 showing irregular heart rhythm patterns. Medical team notified. Immediate attention required.")
                .headline("Patient Alert:"),
            capabilities: [
                Capability::new(
                    "Vital Signs Monitoring",
                    [
                        ("IoT Sensors", Tone::Primary),
                        ("Real-time Analytics", Tone::Secondary),
                        ("Predictive Alerts", Tone::Warning),
                    ],
                    "Continuous monitoring of vital signs with intelligent alert systems for early detection of patient deterioration.",
                ),
                Capability::new(
                    "Remote Patient Care",
                    [
                        ("Wearable Devices", Tone::Primary),
                        ("Mobile Health", Tone::Info),
                        ("Telemedicine", Tone::Success),
                    ],
                    "Remote patient monitoring solutions enabling continuous care outside hospital settings with telemedicine integration.",
                ),
            ],
        },
        ShowcaseTab {
            label: "Drug Discovery".to_string(),
            title: "AI-Powered Drug Discovery".to_string(),
            description: "Accelerated drug discovery platform using machine learning for compound identification, molecular modeling, and clinical trial optimization.".to_string(),
            metrics: [
                Metric::new("Compound Success Rate", "23.4%", "+67%", Icon::Biotech)
                    .tinted("#1976d2"),
                Metric::new("Discovery Timeline", "18 months", "-42%", Icon::Speed)
                    .tinted("#388e3c"),
                Metric::new("Research Cost", "$42M", "-31%", Icon::TrendingUp)
                    .tinted("#f57c00"),
                Metric::new("Clinical Trial Success", "78%", "+23%", Icon::Assessment)
                    .tinted("#7b1fa2"),
            ],
            alert: AlertEntry::new(AlertKind::Info, "AI identified 23 promising compounds for Alzheimer's treatment. Molecular simulations show 89% binding affinity. Moving to Phase I trials.")
                .headline("Discovery Update:"),
            capabilities: [
                Capability::new(
                    "Molecular Modeling",
                    [
                        ("Protein Folding", Tone::Primary),
                        ("Drug-Target Interaction", Tone::Secondary),
                        ("QSAR Modeling", Tone::Success),
                    ],
                    "Advanced molecular modeling and simulation for drug-target interaction prediction and compound optimization.",
                ),
                Capability::new(
                    "Clinical Trial Optimization",
                    [
                        ("Patient Stratification", Tone::Primary),
                        ("Endpoint Prediction", Tone::Warning),
                        ("Risk Assessment", Tone::Error),
                    ],
                    "AI-driven clinical trial design with patient stratification and endpoint prediction for improved success rates.",
                ),
            ],
        },
        ShowcaseTab {
            label: "Personalized Medicine".to_string(),
            title: "Personalized Medicine & Genomics".to_string(),
            description: "Precision medicine platform leveraging genomic data, biomarkers, and patient history for personalized treatment recommendations.".to_string(),
            metrics: [
                Metric::new("Treatment Efficacy", "92.8%", "+18%", Icon::Healing)
                    .tinted("#1976d2"),
                Metric::new("Adverse Reactions", "2.1%", "-56%", Icon::Security)
                    .tinted("#d32f2f"),
                Metric::new("Patient Outcomes", "94.3%", "+14%", Icon::LocalHospital)
                    .tinted("#388e3c"),
                Metric::new("Cost Effectiveness", "87%", "+29%", Icon::TrendingUp)
                    .tinted("#f57c00"),
            ],
            alert: AlertEntry::new(AlertKind::Success, "Personalized therapy protocol for Patient #P-8472 shows 94% efficacy prediction. Treatment plan optimized based on genetic profile.")
                .headline("Treatment Update:"),
            capabilities: [
                Capability::new(
                    "Genomic Analysis",
                    [
                        ("Whole Genome Sequencing", Tone::Primary),
                        ("Variant Analysis", Tone::Secondary),
                        ("Pharmacogenomics", Tone::Success),
                    ],
                    "Comprehensive genomic analysis for personalized treatment selection and drug dosing optimization.",
                ),
                Capability::new(
                    "Biomarker Discovery",
                    [
                        ("Multi-omics Integration", Tone::Primary),
                        ("Predictive Modeling", Tone::Warning),
                        ("Treatment Response", Tone::Info),
                    ],
                    "AI-powered biomarker discovery for treatment response prediction and personalized therapy selection.",
                ),
            ],
        },
        ShowcaseTab {
            label: "Mental Health".to_string(),
            title: "Mental Health Analytics".to_string(),
            description: "Digital mental health platform with AI-powered mood analysis, intervention recommendations, and crisis prevention systems.".to_string(),
            metrics: [
                Metric::new("Depression Detection", "91.7%", "+22%", Icon::Psychology)
                    .tinted("#1976d2"),
                Metric::new("Intervention Success", "84.2%", "+16%", Icon::Healing)
                    .tinted("#388e3c"),
                Metric::new("Patient Engagement", "78.9%", "+31%", Icon::MonitorHeart)
                    .tinted("#f57c00"),
                Metric::new("Crisis Prevention", "89.4%", "+19%", Icon::Security)
                    .tinted("#7b1fa2"),
            ],
            alert: AlertEntry::new(AlertKind::Warning, "Patient #MH-1847 showing signs of severe depression. Crisis intervention protocol activated. Therapist notified.")
                .headline("Mental Health Alert:"),
            capabilities: [
                Capability::new(
                    "Digital Therapeutics",
                    [
                        ("CBT Apps", Tone::Primary),
                        ("Mood Tracking", Tone::Secondary),
                        ("Behavioral Analytics", Tone::Success),
                    ],
                    "Evidence-based digital therapeutics with cognitive behavioral therapy and mood tracking capabilities.",
                ),
                Capability::new(
                    "Crisis Prevention",
                    [
                        ("Risk Prediction", Tone::Error),
                        ("Early Intervention", Tone::Warning),
                        ("Support Networks", Tone::Info),
                    ],
                    "AI-powered crisis prediction and prevention with early intervention protocols and support network activation.",
                ),
            ],
        },
        ShowcaseTab {
            label: "Epidemic Tracking".to_string(),
            title: "Epidemic Tracking & Public Health".to_string(),
            description: "Advanced epidemic surveillance and public health monitoring with predictive modeling, contact tracing, and intervention planning.".to_string(),
            metrics: [
                Metric::new("Outbreak Prediction", "87.3%", "+34%", Icon::Assessment)
                    .tinted("#1976d2"),
                Metric::new("Contact Tracing", "96.8%", "+8.7%", Icon::Security)
                    .tinted("#388e3c"),
                Metric::new("Response Time", "6.4 hrs", "-52%", Icon::Speed)
                    .tinted("#f57c00"),
                Metric::new("Public Health Impact", "92.1%", "+25%", Icon::LocalHospital)
                    .tinted("#7b1fa2"),
            ],
            alert: AlertEntry::new(AlertKind::Error, "Potential outbreak detected in Region 7. Contact tracing initiated for 142 individuals. Health authorities notified.")
                .headline("Public Health Alert:"),
            capabilities: [
                Capability::new(
                    "Disease Surveillance",
                    [
                        ("Real-time Monitoring", Tone::Primary),
                        ("Pattern Detection", Tone::Secondary),
                        ("Outbreak Prediction", Tone::Warning),
                    ],
                    "Real-time disease surveillance with pattern detection and early outbreak prediction capabilities.",
                ),
                Capability::new(
                    "Contact Tracing",
                    [
                        ("Digital Tracing", Tone::Primary),
                        ("Privacy Protection", Tone::Success),
                        ("Risk Assessment", Tone::Error),
                    ],
                    "Privacy-preserving digital contact tracing with risk assessment and automated notification systems.",
                ),
            ],
        },
    ]
}
