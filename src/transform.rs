//! Higher-order application and the small conversions used with it.

use crate::error::{Result, ToolkitError};
use tracing::warn;

/// Apply `operation` to `arg` and hand back whatever it returns.
///
/// Nothing is caught here: if `operation` returns a `Result`, an `Err` reaches
/// the caller as-is.
pub fn transform<T, U, F>(arg: T, operation: F) -> U
where
    F: FnOnce(T) -> U,
{
    operation(arg)
}

/// Parse a base-10 integer. Surrounding whitespace is not accepted.
pub fn string_to_int(input: &str) -> Result<i64> {
    input.parse::<i64>().map_err(|err| {
        warn!(input, error = %err, "integer conversion failed");
        ToolkitError::conversion(input, err)
    })
}

pub fn int_to_string(value: i64) -> String {
    value.to_string()
}

/// Square `value`, failing with [`ToolkitError::Overflow`] when the result
/// does not fit in an `i64`.
pub fn square(value: i64) -> Result<i64> {
    value
        .checked_mul(value)
        .ok_or(ToolkitError::Overflow { value })
}
