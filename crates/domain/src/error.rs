//! Common error types used across the workspace.
//!
//! Each failure is a typed error converted into [`SmartHomeError`] via
//! `#[from]`. Only range-checked attributes and id allocation can fail;
//! every other device operation is infallible.

/// Top-level error for device operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SmartHomeError {
    #[error(transparent)]
    OutOfRange(#[from] OutOfRangeError),
    #[error("device id space exhausted")]
    IdSpaceExhausted,
}

/// A numeric attribute was set outside its accepted inclusive range.
///
/// The attribute keeps its previous value when this error is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{attribute} must be between {min} and {max}")]
pub struct OutOfRangeError {
    pub attribute: &'static str,
    pub value: i64,
    pub min: i64,
    pub max: i64,
}

impl OutOfRangeError {
    /// Check `value` against `min..=max`.
    ///
    /// # Errors
    ///
    /// Returns an [`OutOfRangeError`] describing the attribute when `value`
    /// falls outside the range.
    pub fn check(attribute: &'static str, value: i64, min: i64, max: i64) -> Result<(), Self> {
        if (min..=max).contains(&value) {
            Ok(())
        } else {
            Err(Self {
                attribute,
                value,
                min,
                max,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_accept_both_bounds() {
        assert!(OutOfRangeError::check("Brightness", 0, 0, 100).is_ok());
        assert!(OutOfRangeError::check("Brightness", 100, 0, 100).is_ok());
    }

    #[test]
    fn should_reject_value_below_minimum() {
        let err = OutOfRangeError::check("Brightness", -1, 0, 100).unwrap_err();
        assert_eq!(err.value, -1);
    }

    #[test]
    fn should_render_range_message() {
        let err = OutOfRangeError::check("Brightness", 101, 0, 100).unwrap_err();
        assert_eq!(err.to_string(), "Brightness must be between 0 and 100");
    }

    #[test]
    fn should_keep_message_when_wrapped() {
        let err: SmartHomeError = OutOfRangeError::check("Lift level", 150, 0, 100)
            .unwrap_err()
            .into();
        assert_eq!(err.to_string(), "Lift level must be between 0 and 100");
    }
}
