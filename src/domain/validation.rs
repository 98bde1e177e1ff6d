use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty {
        field: &'static str,
    },
    TooMany {
        field: &'static str,
        max: usize,
        actual: usize,
    },
    LengthMismatch {
        field: &'static str,
        expected: usize,
        actual: usize,
    },
    ContainsWhitespace {
        field: &'static str,
    },
    InvalidPhoneNumber {
        input: String,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::TooMany { field, max, actual } => {
                write!(f, "too many {field} values: {actual} (max {max})")
            }
            Self::LengthMismatch {
                field,
                expected,
                actual,
            } => write!(
                f,
                "{field} must have one value per receptor: got {actual}, expected {expected}"
            ),
            Self::ContainsWhitespace { field } => {
                write!(f, "{field} must not contain whitespace")
            }
            Self::InvalidPhoneNumber { input } => write!(f, "invalid phone number: {input}"),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::ValidationError;

    #[test]
    fn display_messages_are_human_readable() {
        let err = ValidationError::Empty { field: "receptor" };
        assert_eq!(err.to_string(), "receptor must not be empty");

        let err = ValidationError::TooMany {
            field: "messageid",
            max: 2,
            actual: 3,
        };
        assert_eq!(err.to_string(), "too many messageid values: 3 (max 2)");

        let err = ValidationError::LengthMismatch {
            field: "localid",
            expected: 2,
            actual: 1,
        };
        assert_eq!(
            err.to_string(),
            "localid must have one value per receptor: got 1, expected 2"
        );

        let err = ValidationError::ContainsWhitespace { field: "token" };
        assert_eq!(err.to_string(), "token must not contain whitespace");

        let err = ValidationError::InvalidPhoneNumber {
            input: "bad".to_owned(),
        };
        assert_eq!(err.to_string(), "invalid phone number: bad");
    }
}
