use thiserror::Error;

/// Reasons a configuration source is rejected.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("malformed constellation config: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("{field} out of range: {value}")]
    OutOfRange { field: &'static str, value: f64 },
}

/// Browser environment pieces the effect needs before it can draw.
///
/// None of these are fatal: the background is decorative, so callers log
/// them and leave the effect disabled.
#[derive(Debug, Error)]
pub enum EnvError {
    #[error("no window available")]
    NoWindow,

    #[error("no document available")]
    NoDocument,

    #[error("missing canvas element #{id}")]
    MissingCanvas { id: String },

    #[error("element #{id} is not a canvas")]
    NotACanvas { id: String },

    #[error("2d context unavailable: {reason}")]
    ContextUnavailable { reason: String },
}
