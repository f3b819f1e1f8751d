use crate::core::derive::{max_unique_pins, MAX_PIN_LENGTH};
use crate::utils::error::{PinError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(PinError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(PinError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_length(length: u32) -> Result<()> {
    if length == 0 || length > MAX_PIN_LENGTH {
        return Err(PinError::InvalidLength { length });
    }
    Ok(())
}

/// A count is valid when `0 <= count <= 10^length`.
pub fn validate_count(length: u32, count: i64) -> Result<usize> {
    validate_length(length)?;

    if count < 0 {
        return Err(PinError::InvalidCount {
            length,
            count,
            reason: "count cannot be negative".to_string(),
        });
    }

    let max_unique = max_unique_pins(length);
    if count as u64 > max_unique {
        return Err(PinError::InvalidCount {
            length,
            count,
            reason: format!("maximum is {} distinct values", max_unique),
        });
    }

    usize::try_from(count).map_err(|_| PinError::InvalidCount {
        length,
        count,
        reason: "count does not fit in memory on this platform".to_string(),
    })
}
