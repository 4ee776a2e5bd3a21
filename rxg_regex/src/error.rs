/**
 * Errors of parsing and compiling patterns.
 */

use thiserror::Error;

/// What went wrong during parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxErrorReason {
    #[error("end-of-string expected")]
    TrailingInput,

    #[error("expected '{0}'")]
    Expected(char),

    #[error("unexpected end-of-string")]
    UnexpectedEnd,

    #[error("integer expected")]
    IntegerExpected,

    #[error("integer too large")]
    IntegerOverflow,

    #[error("interval syntax error")]
    IntervalSyntax,

    #[error("illegal identifier")]
    IllegalIdentifier,

    #[error("repetition lower bound {min} exceeds upper bound {max}")]
    RepeatBoundsOrder{
        min: usize,
        max: usize,
    },
}

/// A parse failure at a 0-based character offset of the pattern.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{reason} at position {position}")]
pub struct SyntaxError {
    pub position: usize,
    pub reason: SyntaxErrorReason,
}

impl SyntaxError {
    pub fn new(position: usize, reason: SyntaxErrorReason) -> Self {
        Self{ position, reason }
    }
}

/// The error type automaton providers report failures with.
pub type ProviderError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
pub enum CompileError {
    /// Neither the automaton table nor the provider knew the name, or the
    /// provider failed looking it up.
    #[error("'{identifier}' not found")]
    UnresolvedReference{
        identifier: String,
        #[source]
        source: Option<ProviderError>,
    },
}

// Tests ///////////////////////////////////////////////////////////////////////
