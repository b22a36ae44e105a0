use crate::icon::Icon;
use crate::model_hub::{AiModel, ModelCategory, ModelTab};
use crate::platform::{HeaderInfo, ModelHub, Platform, PlatformContent, PlatformId};

pub fn platform() -> Platform {
    Platform {
        id: PlatformId::AiModelHub,
        header: HeaderInfo {
            title: "AI Model Hub 2025",
            subtitle: "Latest AI Models",
            color: "#6366f1",
        },
        content: PlatformContent::ModelHub(ModelHub {
            title: "AI Model Hub 2025",
            subtitle: "Latest & Greatest AI Models from HuggingFace & AVIX Suite",
            tabs: [
                ModelTab {
                    label: "HuggingFace Models",
                    icon: Icon::ModelTraining,
                    models: &HUGGING_FACE_MODELS,
                },
                ModelTab {
                    label: "AVIX Suite Models",
                    icon: Icon::RocketLaunch,
                    models: &AVIX_MODELS,
                },
            ],
        }),
    }
}

static HUGGING_FACE_MODELS: [AiModel; 8] = [
    AiModel {
        id: "qwen3-vl-30b",
        name: "Qwen3-VL-30B-A3B",
        organization: "Alibaba/Qwen",
        parameters: "30B (3B activated)",
        capabilities: &[
            "Vision-Language Understanding",
            "Image-Text Alignment",
            "Multimodal Reasoning",
            "Computer Screen Understanding",
        ],
        license: "Apache 2.0",
        performance: Some(94),
        downloads: Some("2.3M"),
        trending: true,
        released: "October 2025",
        description: "Advanced vision-language model with superior image understanding and text generation capabilities. Features DeepStack architecture for fine-grained visual details.",
        category: ModelCategory::Multimodal,
        model_url: Some("https://huggingface.co/Qwen/Qwen3-VL-30B-A3B-Instruct"),
        context_length: Some("128K tokens"),
        architecture: Some("Mixture of Experts (MoE)"),
    },
    AiModel {
        id: "deepseek-v3-1",
        name: "DeepSeek V3.1",
        organization: "DeepSeek",
        parameters: "671B (37B activated)",
        capabilities: &[
            "Hybrid Thinking Mode",
            "Long Context",
            "Mathematical Reasoning",
            "Code Generation",
            "Multi-step Planning",
        ],
        license: "MIT",
        performance: Some(96),
        downloads: Some("1.8M"),
        trending: true,
        released: "August 2025",
        description: "Hybrid system with thinking and non-thinking modes. Excels at complex reasoning, financial analysis, and automated theorem proving.",
        category: ModelCategory::Reasoning,
        model_url: Some("https://huggingface.co/deepseek-ai/DeepSeek-V3.1"),
        context_length: Some("128K tokens"),
        architecture: Some("MoE with Multi-head Latent Attention"),
    },
    AiModel {
        id: "claude-4-opus",
        name: "Claude 4 Opus",
        organization: "Anthropic",
        parameters: "~400B",
        capabilities: &[
            "Extended Thinking Mode",
            "Agent Workflows",
            "Computer Use",
            "Advanced Coding",
            "Long-running Tasks",
        ],
        license: "Commercial",
        performance: Some(95),
        downloads: Some("950K"),
        trending: true,
        released: "September 2025",
        description: "Most powerful Claude model excelling at complex, long-running tasks and agent workflows. Features computer use capabilities.",
        category: ModelCategory::Language,
        model_url: None,
        context_length: Some("200K tokens (1M beta)"),
        architecture: Some("Constitutional AI"),
    },
    AiModel {
        id: "gpt-5",
        name: "GPT-5",
        organization: "OpenAI",
        parameters: "1.7T",
        capabilities: &[
            "Multimodal Understanding",
            "Advanced Reasoning",
            "Tool Use",
            "Few-shot Function Calling",
            "Health Tasks",
        ],
        license: "Commercial",
        performance: Some(97),
        downloads: Some("3.1M"),
        trending: true,
        released: "September 2025",
        description: "State-of-the-art unified model with enhanced multimodal capabilities and reduced hallucinations. Default model for new users.",
        category: ModelCategory::Multimodal,
        model_url: None,
        context_length: Some("2M tokens"),
        architecture: Some("Advanced Transformer"),
    },
    AiModel {
        id: "llama-4-scout",
        name: "Llama 4 Scout",
        organization: "Meta",
        parameters: "405B",
        capabilities: &[
            "Multimodal Processing",
            "Ultra-long Context",
            "Video Understanding",
            "Open Source",
            "Fine-tuning Support",
        ],
        license: "Custom Open Source",
        performance: Some(93),
        downloads: Some("4.2M"),
        trending: true,
        released: "October 2025",
        description: "Natively multimodal with industry-leading 10 million token context window. Outperforms competitors in coding and reasoning.",
        category: ModelCategory::Multimodal,
        model_url: None,
        context_length: Some("10M tokens"),
        architecture: Some("Mixture of Experts (MoE)"),
    },
    AiModel {
        id: "gemini-2-5-pro",
        name: "Gemini 2.5 Pro",
        organization: "Google DeepMind",
        parameters: "1.5T",
        capabilities: &[
            "Deep Think Mode",
            "Multimodal Understanding",
            "Code Generation",
            "Video Analysis",
            "Step-by-step Reasoning",
        ],
        license: "Commercial",
        performance: Some(94),
        downloads: Some("2.7M"),
        trending: true,
        released: "March 2025",
        description: "Enhanced complex problem-solving with Deep Think mode for step-by-step reasoning. Highly capable in coding and content generation.",
        category: ModelCategory::Multimodal,
        model_url: None,
        context_length: Some("2M tokens"),
        architecture: Some("Gemini Architecture"),
    },
    AiModel {
        id: "mistral-medium-3",
        name: "Mistral Medium 3",
        organization: "Mistral AI",
        parameters: "120B",
        capabilities: &[
            "Multimodal Processing",
            "Agentic Coding",
            "Mathematical Problem Solving",
            "Multiple Languages",
            "Resource Efficiency",
        ],
        license: "Apache 2.0",
        performance: Some(91),
        downloads: Some("1.5M"),
        trending: true,
        released: "August 2025",
        description: "State-of-the-art multimodal model with specialized versions for coding, mathematics, and speech processing.",
        category: ModelCategory::Multimodal,
        model_url: None,
        context_length: Some("128K tokens"),
        architecture: Some("Mixture of Experts (MoE)"),
    },
    AiModel {
        id: "cohere-command-a",
        name: "Command A",
        organization: "Cohere",
        parameters: "104B",
        capabilities: &[
            "RAG Optimization",
            "Enterprise Focus",
            "Multilingual Support",
            "Hardware Efficiency",
            "Secure Deployment",
        ],
        license: "Commercial",
        performance: Some(89),
        downloads: Some("720K"),
        trending: false,
        released: "July 2025",
        description: "Hardware-efficient model requiring only two GPUs. Built for enterprise RAG applications with strong multilingual support.",
        category: ModelCategory::Language,
        model_url: None,
        context_length: Some("256K tokens"),
        architecture: Some("Efficient Transformer"),
    },
];

static AVIX_MODELS: [AiModel; 2] = [
    AiModel {
        id: "timebly-2",
        name: "TIMEBLY 2",
        organization: "AVIX Suite",
        parameters: "N/A",
        capabilities: &[
            "Time Data Management",
            "Computer Vision",
            "Digital Human Models",
            "Industrial Innovation",
            "AI-Powered Analytics",
        ],
        license: "Commercial",
        performance: Some(87),
        downloads: Some("12K"),
        trending: true,
        released: "September 2025",
        description: "Advanced time data management system with AI, computer vision, and digital human models. Part of Vinnova's industrial innovation investment.",
        category: ModelCategory::Vision,
        model_url: Some("https://www.avixsuite.com/timebly-2/"),
        context_length: Some("N/A"),
        architecture: Some("Computer Vision + AI"),
    },
    AiModel {
        id: "avix-4-8-17",
        name: "AVIX 4.8.17",
        organization: "AVIX Suite",
        parameters: "N/A",
        capabilities: &[
            "Process Planning",
            "Work Visualization",
            "AI Integration",
            "Industrial Workflows",
            "Business Intelligence",
        ],
        license: "Commercial",
        performance: Some(85),
        downloads: Some("8.5K"),
        trending: false,
        released: "February 2024",
        description: "Comprehensive industrial AI solution for process planning and work visualization. Award-winning business impact in manufacturing.",
        category: ModelCategory::Vision,
        model_url: Some("https://www.avixsuite.com/"),
        context_length: Some("N/A"),
        architecture: Some("Industrial AI Framework"),
    },
];
