//! Canned alert banners. These are display copy, not error signals.

use serde::Serialize;

use crate::icon::Icon;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    Success,
    Warning,
    Info,
    Error,
}

impl AlertKind {
    pub fn icon(self) -> Icon {
        match self {
            AlertKind::Success => Icon::CheckCircle,
            AlertKind::Warning => Icon::Warning,
            AlertKind::Info => Icon::Insights,
            AlertKind::Error => Icon::WarningAmber,
        }
    }

    /// (accent, background) pair for the banner.
    pub fn palette(self) -> (&'static str, &'static str) {
        match self {
            AlertKind::Success => ("#059669", "#ecfdf5"),
            AlertKind::Warning => ("#d97706", "#fffbeb"),
            AlertKind::Info => ("#0284c7", "#f0f9ff"),
            AlertKind::Error => ("#dc2626", "#fef2f2"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlertEntry {
    pub kind: AlertKind,
    /// Bold lead-in such as `"Decision Alert:"`, used by the showcase tabs.
    pub headline: Option<String>,
    pub message: String,
}

impl AlertEntry {
    pub fn new(kind: AlertKind, message: &str) -> Self {
        Self {
            kind,
            headline: None,
            message: message.to_string(),
        }
    }

    pub fn success(message: &str) -> Self {
        Self::new(AlertKind::Success, message)
    }

    pub fn warning(message: &str) -> Self {
        Self::new(AlertKind::Warning, message)
    }

    pub fn info(message: &str) -> Self {
        Self::new(AlertKind::Info, message)
    }

    pub fn error(message: &str) -> Self {
        Self::new(AlertKind::Error, message)
    }

    pub fn headline(mut self, headline: &str) -> Self {
        self.headline = Some(headline.to_string());
        self
    }
}
