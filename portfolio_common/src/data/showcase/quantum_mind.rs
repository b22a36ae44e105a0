use crate::alert::{AlertEntry, AlertKind};
use crate::icon::Icon;
use crate::metric::Metric;
use crate::platform::{HeaderInfo, Platform, PlatformContent, PlatformId, Showcase};
use crate::use_case::{Capability, ShowcaseTab, Tone};

pub fn platform() -> Platform {
    Platform {
        id: PlatformId::QuantumMindAi,
        header: HeaderInfo {
            title: "QuantumMind AI",
            subtitle: "Quantum-Enhanced ML",
            color: "#f59e0b",
        },
        content: PlatformContent::Showcase(Showcase {
            title: "QuantumMind AI",
            subtitle: "Revolutionary quantum-classical hybrid AI platform for complex optimization, machine learning, and scientific computing applications",
            tabs: tabs(),
        }),
    }
}

fn tabs() -> Vec<ShowcaseTab> {
    vec![
        ShowcaseTab {
            label: "Quantum ML".to_string(),
            title: "Quantum Machine Learning".to_string(),
            description: "Revolutionary quantum-enhanced machine learning algorithms achieving exponential speedups for complex pattern recognition and optimization tasks.".to_string(),
            metrics: [
                Metric::new("Quantum Speedup", "247x", "+1,847%", Icon::AutoFixHigh)
                    .tinted("#1976d2"),
                Metric::new("Model Accuracy", "98.9%", "+12%", Icon::Assessment)
                    .tinted("#388e3c"),
                Metric::new("Training Time", "2.4 hrs", "-89%", Icon::Speed)
                    .tinted("#f57c00"),
                Metric::new("Quantum Fidelity", "97.3%", "+8.7%", Icon::Security)
                    .tinted("#7b1fa2"),
            ],
            alert: AlertEntry::new(AlertKind::Success, "Achieved 247x speedup on classification task with 98.9% accuracy. Quantum fidelity maintained at 97.3%.")
                .headline("Quantum ML Update:"),
            capabilities: [
                Capability::new(
                    "Quantum Algorithms",
                    [
                        ("Variational Quantum Eigensolver", Tone::Primary),
                        ("Quantum Approximate Optimization", Tone::Secondary),
                        ("Quantum Support Vector Machine", Tone::Success),
                    ],
                    "Advanced quantum algorithms for machine learning with proven quantum advantage over classical methods.",
                ),
                Capability::new(
                    "Quantum Feature Maps",
                    [
                        ("Hilbert Space Mapping", Tone::Primary),
                        ("Quantum Entanglement", Tone::Warning),
                        ("Exponential Dimensionality", Tone::Info),
                    ],
                    "Quantum feature maps enabling exponential-dimensional feature spaces for enhanced pattern recognition.",
                ),
            ],
        },
        ShowcaseTab {
            label: "Optimization".to_string(),
            title: "Quantum Optimization".to_string(),
            description: "Quantum-powered optimization algorithms solving complex combinatorial problems with thousands of variables in unprecedented time.".to_string(),
            metrics: [
                Metric::new("Solution Quality", "96.8%", "+24%", Icon::Functions)
                    .tinted("#1976d2"),
                Metric::new("Convergence Speed", "67% faster", "+45%", Icon::Speed)
                    .tinted("#388e3c"),
                Metric::new("Problem Complexity", "10K variables", "+567%", Icon::Assessment)
                    .tinted("#f57c00"),
                Metric::new("Energy Efficiency", "89%", "+178%", Icon::TrendingUp)
                    .tinted("#7b1fa2"),
            ],
            alert: AlertEntry::new(AlertKind::Info, "Portfolio optimization with 10K variables completed in 67% less time. Solution quality: 96.8%.")
                .headline("Optimization Alert:"),
            capabilities: [
                Capability::new(
                    "Combinatorial Optimization",
                    [
                        ("Traveling Salesman", Tone::Primary),
                        ("Portfolio Optimization", Tone::Secondary),
                        ("Resource Allocation", Tone::Success),
                    ],
                    "Quantum algorithms for complex combinatorial optimization problems with exponential solution spaces.",
                ),
                Capability::new(
                    "Quantum Annealing",
                    [
                        ("Adiabatic Computing", Tone::Primary),
                        ("Energy Minimization", Tone::Warning),
                        ("Global Optima", Tone::Info),
                    ],
                    "Quantum annealing for finding global optima in complex energy landscapes and optimization problems.",
                ),
            ],
        },
        ShowcaseTab {
            label: "Cryptography".to_string(),
            title: "Quantum Cryptography & Security".to_string(),
            description: "Next-generation quantum cryptography providing unbreakable security through quantum key distribution and post-quantum algorithms.".to_string(),
            metrics: [
                Metric::new("Key Generation", "99.99%", "+15%", Icon::Security)
                    .tinted("#1976d2"),
                Metric::new("Quantum Resistance", "100%", "+100%", Icon::AutoFixHigh)
                    .tinted("#388e3c"),
                Metric::new("Encryption Speed", "1.2 μs", "-78%", Icon::Speed)
                    .tinted("#f57c00"),
                Metric::new("Security Level", "256-bit", "+100%", Icon::Assessment)
                    .tinted("#7b1fa2"),
            ],
            alert: AlertEntry::new(AlertKind::Warning, "Quantum key distribution active across 247 nodes. 100% quantum resistance maintained for all encrypted communications.")
                .headline("Security Alert:"),
            capabilities: [
                Capability::new(
                    "Quantum Key Distribution",
                    [
                        ("BB84 Protocol", Tone::Primary),
                        ("Entanglement-based", Tone::Secondary),
                        ("Intrusion Detection", Tone::Error),
                    ],
                    "Quantum key distribution ensuring information-theoretic security with automatic intrusion detection.",
                ),
                Capability::new(
                    "Post-Quantum Cryptography",
                    [
                        ("Lattice-based", Tone::Primary),
                        ("Code-based", Tone::Warning),
                        ("Multivariate", Tone::Info),
                    ],
                    "Post-quantum cryptographic algorithms resistant to both classical and quantum attacks.",
                ),
            ],
        },
        ShowcaseTab {
            label: "Scientific Computing".to_string(),
            title: "Quantum Scientific Computing".to_string(),
            description: "High-performance quantum simulations for molecular modeling, materials science, and fundamental physics research.".to_string(),
            metrics: [
                Metric::new("Simulation Accuracy", "99.7%", "+18%", Icon::Science)
                    .tinted("#1976d2"),
                Metric::new("Computational Speed", "1,247x", "+2,340%", Icon::Speed)
                    .tinted("#388e3c"),
                Metric::new("Memory Efficiency", "94.2%", "+67%", Icon::Memory)
                    .tinted("#f57c00"),
                Metric::new("Research Impact", "847 papers", "+234%", Icon::TrendingUp)
                    .tinted("#7b1fa2"),
            ],
            alert: AlertEntry::new(AlertKind::Success, "Molecular simulation achieved 1,247x speedup. Published 847 research papers leveraging quantum computing capabilities.")
                .headline("Research Update:"),
            capabilities: [
                Capability::new(
                    "Molecular Simulation",
                    [
                        ("Quantum Chemistry", Tone::Primary),
                        ("Drug Discovery", Tone::Secondary),
                        ("Catalyst Design", Tone::Success),
                    ],
                    "Quantum molecular simulations for drug discovery, catalyst design, and understanding chemical reactions.",
                ),
                Capability::new(
                    "Materials Science",
                    [
                        ("Superconductors", Tone::Primary),
                        ("Quantum Materials", Tone::Warning),
                        ("Electronic Properties", Tone::Info),
                    ],
                    "Quantum simulations for designing new materials with exotic electronic and magnetic properties.",
                ),
            ],
        },
        ShowcaseTab {
            label: "Quantum Neural Nets".to_string(),
            title: "Quantum Neural Networks".to_string(),
            description: "Hybrid quantum-classical neural networks leveraging quantum superposition and entanglement for enhanced learning capabilities.".to_string(),
            metrics: [
                Metric::new("Network Performance", "97.1%", "+23%", Icon::Psychology)
                    .tinted("#1976d2"),
                Metric::new("Quantum Advantage", "89x", "+1,245%", Icon::AutoFixHigh)
                    .tinted("#388e3c"),
                Metric::new("Parameter Efficiency", "78%", "+156%", Icon::Functions)
                    .tinted("#f57c00"),
                Metric::new("Coherence Time", "847 μs", "+89%", Icon::Timeline)
                    .tinted("#7b1fa2"),
            ],
            alert: AlertEntry::new(AlertKind::Info, "Quantum neural network achieving 89x advantage with 97.1% performance. Coherence time: 847 microseconds.")
                .headline("Neural Network Update:"),
            capabilities: [
                Capability::new(
                    "Variational Quantum Circuits",
                    [
                        ("Parameterized Gates", Tone::Primary),
                        ("Gradient Descent", Tone::Secondary),
                        ("Quantum Backpropagation", Tone::Success),
                    ],
                    "Variational quantum circuits with trainable parameters optimized through quantum gradient descent.",
                ),
                Capability::new(
                    "Quantum Attention Mechanisms",
                    [
                        ("Quantum Transformers", Tone::Primary),
                        ("Entangled Attention", Tone::Warning),
                        ("Superposition States", Tone::Info),
                    ],
                    "Quantum attention mechanisms enabling exponentially large attention matrices through superposition.",
                ),
            ],
        },
        ShowcaseTab {
            label: "Hybrid Computing".to_string(),
            title: "Hybrid Classical-Quantum Computing".to_string(),
            description: "Seamless integration of classical and quantum computing resources with intelligent workload distribution and error correction.".to_string(),
            metrics: [
                Metric::new("Classical-Quantum Sync", "96.4%", "+34%", Icon::AutoFixHigh)
                    .tinted("#1976d2"),
                Metric::new("Resource Allocation", "91.7%", "+28%", Icon::Assessment)
                    .tinted("#388e3c"),
                Metric::new("Error Correction", "99.2%", "+12%", Icon::Security)
                    .tinted("#f57c00"),
                Metric::new("System Throughput", "2.3K jobs/hr", "+467%", Icon::Speed)
                    .tinted("#7b1fa2"),
            ],
            alert: AlertEntry::new(AlertKind::Error, "Quantum error correction active. 99.2% error correction rate maintained across 2.3K quantum jobs per hour.")
                .headline("System Alert:"),
            capabilities: [
                Capability::new(
                    "Workload Orchestration",
                    [
                        ("Intelligent Routing", Tone::Primary),
                        ("Resource Optimization", Tone::Secondary),
                        ("Dynamic Scaling", Tone::Success),
                    ],
                    "Intelligent workload orchestration optimally distributing tasks between classical and quantum processors.",
                ),
                Capability::new(
                    "Quantum Error Correction",
                    [
                        ("Surface Codes", Tone::Primary),
                        ("Logical Qubits", Tone::Warning),
                        ("Fault Tolerance", Tone::Error),
                    ],
                    "Advanced quantum error correction enabling fault-tolerant quantum computation with logical qubits.",
                ),
            ],
        },
    ]
}
