//! Result type alias for Groundline operations.

use super::groundline_error::GroundlineError;

/// Type alias for Results using GroundlineError.
///
/// # Example
///
/// ```ignore
/// use groundline::error::GroundlineResult;
///
/// fn load() -> GroundlineResult<Config> {
///     let config = Config::from_env()?;
///     config.validate()?;
///     Ok(config)
/// }
/// ```
pub type GroundlineResult<T> = Result<T, GroundlineError>;
