use thiserror::Error;

/// A discriminated error type for the operations in this crate that can fail
/// on untrusted input: FEN parsing, UCI move parsing, and move legality
/// checks. Kept separate from the ad-hoc `&str`/`String` errors used for
/// lower-level, purely-internal parsing helpers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// A FEN string was malformed: wrong field count, an unknown piece
    /// letter, an out-of-range square, a non-numeric counter, or placement
    /// that does not describe exactly 8 ranks of 8 files.
    #[error("invalid FEN: {0}")]
    InvalidFen(String),

    /// A UCI move token (e.g. `e2e4`, `a7a8q`) was not well-formed.
    #[error("invalid move syntax: {0}")]
    InvalidMoveSyntax(String),

    /// A syntactically valid move is not in the legal move set of the
    /// current position.
    #[error("illegal move: {0}")]
    IllegalMove(String),

    /// A UCI command verb was not recognized.
    #[error("invalid command: {0}")]
    InvalidCommand(String),
}

impl From<EngineError> for String {
    fn from(e: EngineError) -> String {
        e.to_string()
    }
}

/// Lifts the ad-hoc `&str` errors used by the lower-level FEN/square parsing
/// helpers into the `InvalidFen` variant, so `from_fen` can use `?`
/// throughout without rewrapping every parse failure by hand.
impl From<&str> for EngineError {
    fn from(s: &str) -> Self {
        EngineError::InvalidFen(s.to_string())
    }
}
