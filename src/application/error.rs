/// Typed error model shared by every operation. Variants map to status
/// codes at the HTTP boundary only (see `presentation::http::error`).
///
/// Repository faults arrive through the `Internal` variant; callers never
/// see the underlying detail, only a status code and a short fixed phrase.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Entity absent, or (for the legacy catalog endpoints) collection empty.
    #[error("{0}")]
    NotFound(&'static str),

    /// Role check failed.
    #[error("access denied")]
    Forbidden,

    /// Principal absent or unresolvable.
    #[error("authentication required")]
    Unauthorized,

    /// Request rejected before any data access.
    #[error("{0}")]
    Validation(String),

    /// An unhandled data-access fault.
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

pub type AppResult<T> = Result<T, AppError>;
