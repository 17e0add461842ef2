use thiserror::Error;

pub type Result<T> = std::result::Result<T, MsaError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MsaError {
    #[error("The sequence set is empty.")]
    Empty,

    #[error("The sequence count line '{0}' is not a non-negative integer.")]
    InvalidCount(String),

    #[error("Declared {declared} sequences but found {found}.")]
    CountMismatch { declared: usize, found: usize },

    #[error("Sequence {index} contains the reserved gap symbol '-'.")]
    GapInSequence { index: usize },

    #[error("Aligned row {row} has length {found}, expected {expected}.")]
    UnequalLengths {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Internal invariant violated: {0}.")]
    Invariant(String),
}
