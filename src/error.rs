// Error taxonomy for sequence and metric operations

/// Error type for Morph construction and metric evaluation
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MorphError {
    #[error("Sequence too short: {0} element(s), at least 2 required")]
    TooShortSequence(usize),

    #[error("Invalid derivative order {order} for sequence of length {len}")]
    InvalidOrder { order: usize, len: usize },

    #[error("Ordering violation: {0}")]
    OrderingViolation(String),

    #[error("Parameter mismatch: {0}")]
    ParameterMismatch(String),

    #[error("Undefined parameter: {0}")]
    UndefinedParameter(&'static str),

    #[error("Index {index} out of range for sequence of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Operand lengths differ: {m} vs {n}")]
    LengthMismatch { m: usize, n: usize },
}

pub type Result<T> = std::result::Result<T, MorphError>;
