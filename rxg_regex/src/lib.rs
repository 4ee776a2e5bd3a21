/**
 * Extended regular expressions: parsing into a syntax tree, analysis,
 * re-serialization, and compilation into minimal automata.
 */

extern crate rxg_dense_fsa;

mod alphabet;
mod analyze;
mod compile;
mod display;
mod error;
mod syntax;

pub mod ast;
pub mod parser;

use std::collections::BTreeSet;
use std::fmt;

pub use rxg_dense_fsa::Automaton;

pub use alphabet::Alphabet;
pub use analyze::{identifiers, used_alphabet};
pub use ast::Node;
pub use compile::{AutomatonProvider, CompileOptions, Compiler};
pub use error::{CompileError, ProviderError, SyntaxError, SyntaxErrorReason};
pub use syntax::SyntaxOptions;

/// A parsed pattern together with the alphabet it was parsed against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Regex {
    node: Node,
    alphabet: Option<Alphabet>,
}

impl Regex {
    /// Parses a pattern with every syntax extension and the default alphabet.
    pub fn new(pattern: &str) -> Result<Self, SyntaxError> {
        Self::with_options(pattern, None, SyntaxOptions::ALL)
    }

    pub fn with_options(pattern: &str, alphabet: Option<Alphabet>, options: SyntaxOptions) -> Result<Self, SyntaxError> {
        let node = parser::parse_with(pattern, options, alphabet.as_ref())?;
        Ok(Self{ node, alphabet })
    }

    pub fn node(&self) -> &Node {
        &self.node
    }

    pub fn alphabet(&self) -> Option<&Alphabet> {
        self.alphabet.as_ref()
    }

    /// The characters the pattern can use, sorted.
    pub fn used_alphabet(&self) -> String {
        used_alphabet(&self.node, self.alphabet()).into_iter().collect()
    }

    /// The names of all automaton references.
    pub fn identifiers(&self) -> BTreeSet<String> {
        identifiers(&self.node)
    }

    /// A compiler set up with this pattern's alphabet, to be extended with
    /// references and options.
    pub fn compiler(&self) -> Compiler<'_> {
        Compiler::new(self.alphabet())
    }

    /// Compiles the pattern without any references available.
    pub fn to_automaton(&self) -> Result<Automaton, CompileError> {
        self.compiler().compile(&self.node)
    }
}

impl fmt::Display for Regex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.node)
    }
}
