use thiserror::Error;

/// Core error type shared across passforge crates.
///
/// Policy failures are not errors; they are reported through
/// [`PolicyVerdict`](crate::PolicyVerdict). This type only covers contract
/// violations by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A requested count is outside what a count can represent.
    #[error("invalid argument: {field} = {value} ({reason})")]
    InvalidArgument {
        field: &'static str,
        value: i64,
        reason: &'static str,
    },
}

/// Convenience alias for results returned by passforge-core.
pub type Result<T> = std::result::Result<T, CoreError>;
