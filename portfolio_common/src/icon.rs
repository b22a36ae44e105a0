use serde::Serialize;

/// Icon shown on tabs, tiles and cards.
///
/// Variants follow the Material icon names used across the portfolio so the
/// literal tables read the same as the dashboards they describe. Rendering is a
/// single glyph; there is no icon font.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Icon {
    AccountBalance,
    AccountTree,
    Analytics,
    Assessment,
    AttachMoney,
    AudioFile,
    AutoAwesome,
    AutoFixHigh,
    BatteryChargingFull,
    Biotech,
    Bolt,
    Build,
    Business,
    Cable,
    CarRepair,
    CheckCircle,
    CloudDone,
    CloudOff,
    Code,
    CompareArrows,
    Computer,
    ControlPoint,
    CreditCard,
    DeviceHub,
    DirectionsCar,
    ElectricBolt,
    Engineering,
    Factory,
    Favorite,
    Flight,
    Functions,
    Gavel,
    Groups,
    Healing,
    HealthAndSafety,
    Hub,
    Image,
    ImportExport,
    Insights,
    Inventory,
    Landscape,
    Language,
    LocalGasStation,
    LocalHospital,
    LocalShipping,
    LocationOn,
    Lock,
    Memory,
    ModelTraining,
    MonetizationOn,
    MonitorHeart,
    Navigation,
    NetworkWifi,
    Opacity,
    Person,
    Policy,
    Power,
    Psychology,
    RecordVoiceOver,
    RocketLaunch,
    Router,
    Schedule,
    Science,
    Search,
    Security,
    Shield,
    ShowChart,
    SmartToy,
    Speed,
    Store,
    Timeline,
    Translate,
    TrendingDown,
    TrendingUp,
    VerifiedUser,
    VideoFile,
    Visibility,
    Warning,
    WarningAmber,
    WbSunny,
}

impl Icon {
    /// Glyph used by the front-end.
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::AccountBalance => "🏦",
            Icon::AccountTree => "🌳",
            Icon::Analytics => "📊",
            Icon::Assessment => "📋",
            Icon::AttachMoney => "💲",
            Icon::AudioFile => "🎵",
            Icon::AutoAwesome => "✨",
            Icon::AutoFixHigh => "🪄",
            Icon::BatteryChargingFull => "🔋",
            Icon::Biotech => "🧬",
            Icon::Bolt => "⚡",
            Icon::Build => "🔧",
            Icon::Business => "💼",
            Icon::Cable => "🔌",
            Icon::CarRepair => "🛠",
            Icon::CheckCircle => "✅",
            Icon::CloudDone => "☁",
            Icon::CloudOff => "🌥",
            Icon::Code => "💻",
            Icon::CompareArrows => "⇄",
            Icon::Computer => "🖥",
            Icon::ControlPoint => "⊕",
            Icon::CreditCard => "💳",
            Icon::DeviceHub => "🔗",
            Icon::DirectionsCar => "🚗",
            Icon::ElectricBolt => "⚡",
            Icon::Engineering => "👷",
            Icon::Factory => "🏭",
            Icon::Favorite => "❤",
            Icon::Flight => "✈",
            Icon::Functions => "ƒ",
            Icon::Gavel => "⚖",
            Icon::Groups => "👥",
            Icon::Healing => "🩹",
            Icon::HealthAndSafety => "🛡",
            Icon::Hub => "🕸",
            Icon::Image => "🖼",
            Icon::ImportExport => "⇅",
            Icon::Insights => "💡",
            Icon::Inventory => "📦",
            Icon::Landscape => "🏞",
            Icon::Language => "🌐",
            Icon::LocalGasStation => "⛽",
            Icon::LocalHospital => "🏥",
            Icon::LocalShipping => "🚚",
            Icon::LocationOn => "📍",
            Icon::Lock => "🔒",
            Icon::Memory => "🧠",
            Icon::ModelTraining => "🤖",
            Icon::MonetizationOn => "💰",
            Icon::MonitorHeart => "💓",
            Icon::Navigation => "🧭",
            Icon::NetworkWifi => "📶",
            Icon::Opacity => "💧",
            Icon::Person => "👤",
            Icon::Policy => "📜",
            Icon::Power => "⏻",
            Icon::Psychology => "🧠",
            Icon::RecordVoiceOver => "🗣",
            Icon::RocketLaunch => "🚀",
            Icon::Router => "📡",
            Icon::Schedule => "🕒",
            Icon::Science => "🔬",
            Icon::Search => "🔍",
            Icon::Security => "🔐",
            Icon::Shield => "🛡",
            Icon::ShowChart => "📈",
            Icon::SmartToy => "🤖",
            Icon::Speed => "⏱",
            Icon::Store => "🏪",
            Icon::Timeline => "📉",
            Icon::Translate => "🈂",
            Icon::TrendingDown => "↘",
            Icon::TrendingUp => "↗",
            Icon::VerifiedUser => "✔",
            Icon::VideoFile => "🎞",
            Icon::Visibility => "👁",
            Icon::Warning => "⚠",
            Icon::WarningAmber => "⚠",
            Icon::WbSunny => "☀",
        }
    }
}
