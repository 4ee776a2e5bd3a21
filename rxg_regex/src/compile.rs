/**
 * Translation of syntax trees into minimal deterministic automata.
 */

use std::collections::HashMap;
use log::debug;
use rxg_dense_fsa::Automaton;
use crate::alphabet::Alphabet;
use crate::ast::Node;
use crate::error::{CompileError, ProviderError};

/// Resolves automaton references that the name table doesn't contain.
pub trait AutomatonProvider {
    /// Looks up the automaton named `name`. `Ok(None)` means the provider
    /// doesn't know the name.
    fn automaton(&self, name: &str) -> Result<Option<Automaton>, ProviderError>;
}

impl <F, E> AutomatonProvider for F
    where F : Fn(&str) -> Result<Option<Automaton>, E>,
          E : Into<ProviderError> {
    fn automaton(&self, name: &str) -> Result<Option<Automaton>, ProviderError> {
        self(name).map_err(Into::into)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CompileOptions {
    /// Minimize intermediate automata in place instead of producing minimized
    /// copies.
    pub allow_mutation: bool,
}

/// Compiles syntax trees with a fixed alphabet and reference environment.
pub struct Compiler<'a> {
    alphabet: Option<&'a Alphabet>,
    automata: Option<&'a HashMap<String, Automaton>>,
    provider: Option<&'a dyn AutomatonProvider>,
    options: CompileOptions,
}

impl <'a> Compiler<'a> {
    /// A compiler with no references available. `.` ranges over `alphabet`,
    /// or the printable range when absent.
    pub fn new(alphabet: Option<&'a Alphabet>) -> Self {
        Self{
            alphabet,
            automata: None,
            provider: None,
            options: CompileOptions::default(),
        }
    }

    /// Names consulted first when resolving references.
    pub fn with_automata(mut self, automata: &'a HashMap<String, Automaton>) -> Self {
        self.automata = Some(automata);
        self
    }

    /// Consulted for names the table doesn't contain.
    pub fn with_provider(mut self, provider: &'a dyn AutomatonProvider) -> Self {
        self.provider = Some(provider);
        self
    }

    pub fn with_options(mut self, options: CompileOptions) -> Self {
        self.options = options;
        self
    }

    pub fn compile(&self, node: &Node) -> Result<Automaton, CompileError> {
        // Leaves like intervals and references aren't minimal on their own
        let result = self.finish(self.compile_node(node)?);
        debug!("compiled expression into {} states", result.state_count());
        Ok(result)
    }

    fn compile_node(&self, node: &Node) -> Result<Automaton, CompileError> {
        let result = match node {
            Node::Union{ .. } => {
                let mut operands = Vec::new();
                self.union_operands(node, &mut operands)?;
                self.finish(Automaton::union(operands))
            },

            Node::Concatenation{ .. } => {
                let mut operands = Vec::new();
                self.concat_operands(node, &mut operands)?;
                self.finish(Automaton::concatenate(operands))
            },

            Node::Intersection{ first, second } => {
                let first = self.compile_node(first)?;
                let second = self.compile_node(second)?;
                self.finish(first.intersection(&second))
            },

            Node::Optional(subnode) => self.finish(self.compile_node(subnode)?.optional()),
            Node::Repeat(subnode) => self.finish(self.compile_node(subnode)?.repeat()),
            Node::RepeatAtLeast{ subnode, min } =>
                self.finish(self.compile_node(subnode)?.repeat_min(*min)),
            Node::RepeatBetween{ subnode, min, max } =>
                self.finish(self.compile_node(subnode)?.repeat_between(*min, *max)),
            Node::Complement(subnode) => self.finish(self.compile_node(subnode)?.complement()),

            Node::Char(c) => Automaton::from_char(*c),
            Node::CharRange{ from, to } => Automaton::from_char_range(*from, *to),
            Node::AnyChar => match self.alphabet {
                Some(alphabet) => Automaton::from_char_set(alphabet.chars().iter().cloned()),
                None => Automaton::from_char_range(' ', '~'),
            },
            Node::AnyString => Automaton::any_string(),
            Node::Empty => Automaton::empty(),
            Node::LiteralString(s) => Automaton::from_string(s),
            Node::AutomatonRef(name) => self.resolve(name)?,
            Node::Interval{ min, max, digits } => Automaton::interval(*min, *max, *digits),
        };
        Ok(result)
    }

    /// Flattens a chain of unions into its operands, compiled.
    fn union_operands(&self, node: &Node, out: &mut Vec<Automaton>) -> Result<(), CompileError> {
        match node {
            Node::Union{ first, second } => {
                self.union_operands(first, out)?;
                self.union_operands(second, out)
            },
            _ => {
                out.push(self.compile_node(node)?);
                Ok(())
            },
        }
    }

    /// Flattens a chain of concatenations into its operands, compiled.
    fn concat_operands(&self, node: &Node, out: &mut Vec<Automaton>) -> Result<(), CompileError> {
        match node {
            Node::Concatenation{ first, second } => {
                self.concat_operands(first, out)?;
                self.concat_operands(second, out)
            },
            _ => {
                out.push(self.compile_node(node)?);
                Ok(())
            },
        }
    }

    fn finish(&self, mut automaton: Automaton) -> Automaton {
        if self.options.allow_mutation {
            automaton.minimize();
            automaton
        }
        else {
            automaton.minimized()
        }
    }

    /// Looks a reference up in the table, then asks the provider. The result
    /// is always a copy.
    fn resolve(&self, name: &str) -> Result<Automaton, CompileError> {
        if let Some(found) = self.automata.and_then(|table| table.get(name)) {
            return Ok(found.clone());
        }

        let provided = match self.provider {
            Some(provider) => provider.automaton(name).map_err(|err| CompileError::UnresolvedReference{
                identifier: name.to_string(),
                source: Some(err),
            })?,
            None => None,
        };

        provided.ok_or_else(|| CompileError::UnresolvedReference{
            identifier: name.to_string(),
            source: None,
        })
    }
}

// Tests ///////////////////////////////////////////////////////////////////////
