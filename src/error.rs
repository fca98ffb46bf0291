/// Shape violations detected at a call boundary, before any parameter is touched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("invalid input length: expected {expected}, got {actual}")]
    InputLengthMismatch { expected: usize, actual: usize },

    #[error("invalid expected output length: expected {expected}, got {actual}")]
    OutputLengthMismatch { expected: usize, actual: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
