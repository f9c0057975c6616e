use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    TtlOutOfRange { min: u32, max: u32, actual: u32 },
    ClientRefTooLong { max: usize, actual: usize },
    InvalidUrl { field: &'static str, input: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TtlOutOfRange { min, max, actual } => {
                write!(f, "ttl out of range: {actual} ms (expected {min}..={max})")
            }
            Self::ClientRefTooLong { max, actual } => {
                write!(f, "client-ref too long: {actual} characters (max {max})")
            }
            Self::InvalidUrl { field, input } => write!(f, "{field} is not a valid URL: {input}"),
        }
    }
}

impl std::error::Error for ValidationError {}
