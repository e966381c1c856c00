use thiserror::Error;

/// A violated input constraint. Each variant identifies which constraint failed.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum InvalidArgument {
    #[error("x must be a non-negative integer, got {0}")]
    NegativeInput(i64),

    #[error("start must be a non-negative integer, got {0}")]
    NegativeStart(i64),

    #[error("start ({start}) must not be greater than end ({end})")]
    StartAfterEnd { start: i64, end: i64 },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(#[from] InvalidArgument),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_identify_the_violated_constraint() {
        let err: EngineError = InvalidArgument::NegativeInput(-1).into();
        assert_eq!(
            err.to_string(),
            "Invalid argument: x must be a non-negative integer, got -1"
        );

        let err: EngineError = InvalidArgument::StartAfterEnd { start: 5, end: 3 }.into();
        assert_eq!(
            err.to_string(),
            "Invalid argument: start (5) must not be greater than end (3)"
        );
    }
}
