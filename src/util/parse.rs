use crate::error::{internal::InternalError, AppError};

/// Parses a u64 value from String
///
/// # Arguments
/// - `value` - The String to attempt to parse into `u64`
///
/// # Returns
/// - `Ok(u64)` - Successfully parsed String to `u64`
/// - `Err(AppError::InternalErr(ParseStringId))` - Failed to parse the string
///   as a u64
pub fn parse_u64_from_string(value: String) -> Result<u64, AppError> {
    let result = value
        .parse::<u64>()
        .map_err(|e| InternalError::ParseStringId { value, source: e })?;

    Ok(result)
}

/// Parses an operator-supplied duration string into whole seconds.
///
/// Accepted forms are `<n>m`, `<n>h` and `<n>d` (e.g. `10m`, `1h`, `2d`),
/// case-insensitive. The numeric part must be a positive integer.
///
/// # Arguments
/// - `input` - The raw duration string from the slash command option
///
/// # Returns
/// - `Some(seconds)` - Successfully parsed duration
/// - `None` - Input is not a valid duration string
pub fn parse_duration_string(input: &str) -> Option<i64> {
    let input = input.trim().to_ascii_lowercase();
    if input.len() < 2 {
        return None;
    }

    let (digits, unit) = input.split_at(input.len() - 1);
    let value = digits.parse::<i64>().ok()?;
    if value <= 0 {
        return None;
    }

    let per_unit = match unit {
        "m" => 60,
        "h" => 3_600,
        "d" => 86_400,
        _ => return None,
    };

    value.checked_mul(per_unit)
}
