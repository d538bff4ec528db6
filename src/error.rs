use thiserror::Error;

#[derive(Error, Debug)]
pub enum BabelError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Value out of domain: must be less than {radix}^{length}")]
    Domain { radix: u32, length: usize },

    #[error("Invalid digit vector length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("Invalid digit {digit} for radix {radix}")]
    InvalidDigit { digit: u32, radix: u32 },

    #[error("Invalid construction: {0}")]
    InvalidConstruction(String),

    #[error("Invalid alphabet: {0}")]
    InvalidAlphabet(String),

    #[error("Invalid text: {0:?} is not in the alphabet")]
    InvalidText(char),

    #[error("Text too long: {length} characters, max {max}")]
    TextTooLong { length: usize, max: usize },

    #[error("Invalid number: {0:?}")]
    InvalidNumber(String),

    #[error("Invalid page number: {0}")]
    InvalidPageNumber(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid key: {0}")]
    InvalidKey(String),

    #[error("Unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),
}

pub type Result<T> = std::result::Result<T, BabelError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_error_names_the_bound() {
        let err = BabelError::Domain {
            radix: 29,
            length: 256,
        };
        assert_eq!(err.to_string(), "Value out of domain: must be less than 29^256");
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: BabelError = io.into();
        assert!(matches!(err, BabelError::Io(_)));
    }
}
