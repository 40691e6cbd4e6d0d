//! Transient user feedback: alerts and their fixed texts.

use serde::Serialize;

/// How long an alert stays on screen before it closes itself.
pub const ALERT_DISMISS_MS: u64 = 5_000;

pub const SERVER_UNREACHABLE: &str = "No se pudo conectar con el servidor";
pub const PRODUCTS_FAILED: &str = "Error cargando productos";
pub const PRODUCT_DETAIL_FAILED: &str = "Error cargando detalle del producto";
pub const FILES_FAILED: &str = "Error cargando archivos";
pub const CALENDAR_FAILED: &str = "Error cargando calendario";
pub const SUMMARY_FAILED: &str = "Error cargando datos del servidor";
pub const HASH_COPIED: &str = "Hash copiado al portapapeles";
pub const HASH_COPY_FAILED: &str = "Error copiando hash";

/// Bootstrap contextual level of an alert.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertLevel {
    Success,
    Info,
    Warning,
    Danger,
}

impl AlertLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertLevel::Success => "success",
            AlertLevel::Info => "info",
            AlertLevel::Warning => "warning",
            AlertLevel::Danger => "danger",
        }
    }
}

/// A dismissible notice shown at the top of the page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Alert {
    pub message: String,
    pub level: AlertLevel,
}

impl Alert {
    pub fn new(message: impl Into<String>, level: AlertLevel) -> Self {
        Self {
            message: message.into(),
            level,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, AlertLevel::Success)
    }

    pub fn danger(message: impl Into<String>) -> Self {
        Self::new(message, AlertLevel::Danger)
    }
}

/// Notice raised after the browser tried to copy a hash to the clipboard.
pub fn copy_notice(copied: bool) -> Alert {
    if copied {
        Alert::success(HASH_COPIED)
    } else {
        Alert::danger(HASH_COPY_FAILED)
    }
}
