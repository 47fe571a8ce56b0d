use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty {
        field: &'static str,
    },
    /// `.` or `..`, which would resolve to a different endpoint.
    DotSegment {
        field: &'static str,
    },
    OutOfRange {
        field: &'static str,
        min: u32,
        max: u32,
        actual: u32,
    },
    Conflict {
        first: &'static str,
        second: &'static str,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::DotSegment { field } => write!(f, "{field} must not be `.` or `..`"),
            Self::OutOfRange {
                field,
                min,
                max,
                actual,
            } => {
                write!(f, "{field} out of range: {actual} (expected {min}..={max})")
            }
            Self::Conflict { first, second } => {
                write!(f, "{first} and {second} cannot be used together")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

pub(crate) fn ensure_range(
    field: &'static str,
    value: Option<u32>,
    min: u32,
    max: u32,
) -> Result<(), ValidationError> {
    match value {
        Some(actual) if !(min..=max).contains(&actual) => Err(ValidationError::OutOfRange {
            field,
            min,
            max,
            actual,
        }),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::{ValidationError, ensure_range};

    #[test]
    fn display_messages_are_human_readable() {
        let err = ValidationError::Empty { field: "username" };
        assert_eq!(err.to_string(), "username must not be empty");

        let err = ValidationError::DotSegment { field: "photo_id" };
        assert_eq!(err.to_string(), "photo_id must not be `.` or `..`");

        let err = ValidationError::OutOfRange {
            field: "per_page",
            min: 1,
            max: 30,
            actual: 31,
        };
        assert_eq!(err.to_string(), "per_page out of range: 31 (expected 1..=30)");

        let err = ValidationError::Conflict {
            first: "query",
            second: "collections",
        };
        assert_eq!(
            err.to_string(),
            "query and collections cannot be used together"
        );
    }

    #[test]
    fn ensure_range_accepts_missing_and_bounds() {
        assert!(ensure_range("page", None, 1, 10).is_ok());
        assert!(ensure_range("page", Some(1), 1, 10).is_ok());
        assert!(ensure_range("page", Some(10), 1, 10).is_ok());
        assert!(ensure_range("page", Some(0), 1, 10).is_err());
        assert!(ensure_range("page", Some(11), 1, 10).is_err());
    }
}
