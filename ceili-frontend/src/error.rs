/// Errors that can occur while rendering or writing a generated module.
#[derive(Debug, thiserror::Error)]
pub enum FrontendError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown output format: {0} (expected 'ts' or 'json')")]
    UnknownFormat(String),
}
