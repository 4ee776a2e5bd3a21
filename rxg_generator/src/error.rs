/**
 * Errors of setting up a generator.
 */

use thiserror::Error;
use rxg_regex::{CompileError, SyntaxError};

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("the pattern is empty")]
    EmptyPattern,

    #[error("the pattern matches no strings")]
    EmptyLanguage,

    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    #[error(transparent)]
    Compile(#[from] CompileError),
}
