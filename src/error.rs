//! Error types for trend registration and threshold coercion.

/// Errors produced by the metrics helper
#[derive(Debug, thiserror::Error)]
pub enum MetricsError {
    #[error("Failed to register trend '{name}': {source}")]
    RegistrationFailed {
        name: String,
        #[source]
        source: prometheus::Error,
    },

    #[error("Failed to render metrics: {0}")]
    Render(#[source] prometheus::Error),

    #[error("Threshold {key} is not a millisecond value: {value:?}")]
    InvalidThreshold { key: &'static str, value: String },
}

pub type Result<T> = std::result::Result<T, MetricsError>;
