use thiserror::Error;

/// Unified error type for the storefront-dashboard-core library.
///
/// The range engine itself (resolver, filter, aggregator) is total and never
/// returns this type. It only surfaces at the edges that parse or validate
/// user input: preset tags, time-of-day strings, custom ranges, settings.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── User Input ──────────────────────────────────────────────────
    #[error("Unknown time range preset: {0}")]
    InvalidPreset(String),

    #[error("Invalid time of day '{0}': expected HH:MM")]
    InvalidTimeOfDay(String),

    #[error("Invalid range: 'from' ({from}) is after 'to' ({to})")]
    InvalidRange { from: String, to: String },

    // ── Settings ────────────────────────────────────────────────────
    #[error("Invalid settings: {0}")]
    InvalidSettings(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Deserialization(e.to_string())
    }
}
