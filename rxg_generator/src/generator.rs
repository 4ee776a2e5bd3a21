/**
 * Random strings from the language of a pattern.
 */

use log::{debug, trace};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64Mcg;
use rxg_dense_fsa::Automaton;
use rxg_regex::{Alphabet, Regex, SyntaxOptions};
use crate::error::GeneratorError;
use crate::weights::StateWeights;

/// Produces random strings matching a pattern by walking its minimal
/// automaton. Every character a state can step on is equally likely, and an
/// accepting state stops the walk as if it had one more character to choose.
pub struct Generator<R> {
    automaton: Automaton,
    weights: Vec<StateWeights>,
    used_alphabet: Option<String>,
    rng: R,
}

impl Generator<Pcg64Mcg> {
    /// A generator seeded from system entropy.
    pub fn from_entropy(pattern: &str) -> Result<Self, GeneratorError> {
        Self::new(pattern, Pcg64Mcg::from_entropy())
    }
}

impl <R> Generator<R> where R : Rng {
    /// A generator over the default printable alphabet.
    pub fn new(pattern: &str, rng: R) -> Result<Self, GeneratorError> {
        Self::with_alphabet(pattern, rng, None)
    }

    /// One leading `^` and one trailing `$` are ignored, and `@` is an
    /// ordinary character.
    pub fn with_alphabet(pattern: &str, rng: R, alphabet: Option<Alphabet>) -> Result<Self, GeneratorError> {
        if pattern.is_empty() {
            return Err(GeneratorError::EmptyPattern);
        }

        let pattern = strip_anchors(pattern);
        let regex = Regex::with_options(pattern, alphabet, SyntaxOptions::ALL & !SyntaxOptions::ANY_STRING)?;
        let used_alphabet = regex.used_alphabet();
        let automaton = regex.to_automaton()?;
        debug!("generator for {:?} uses alphabet {:?}", pattern, used_alphabet);

        let mut result = Self::from_automaton(automaton, rng)?;
        result.used_alphabet = Some(used_alphabet);
        Ok(result)
    }

    /// A generator over an already built automaton. Fails if the automaton
    /// accepts nothing.
    pub fn from_automaton(automaton: Automaton, rng: R) -> Result<Self, GeneratorError> {
        let automaton = automaton.minimized();
        if automaton.is_empty() {
            return Err(GeneratorError::EmptyLanguage);
        }

        let weights = automaton.states()
            .map(|s| StateWeights::new(automaton.transitions_from(&s)))
            .collect();
        debug!("generator automaton has {} states", automaton.state_count());
        Ok(Self{ automaton, weights, used_alphabet: None, rng })
    }

    /// The characters the pattern can use, when built from a pattern.
    pub fn used_alphabet(&self) -> Option<&str> {
        self.used_alphabet.as_deref()
    }

    pub fn automaton(&self) -> &Automaton {
        &self.automaton
    }

    pub fn generate(&mut self) -> String {
        let mut result = String::new();
        let mut state = self.automaton.initial();
        loop {
            let weights = &self.weights[state.id()];
            let accepting = self.automaton.is_accepting(&state);
            let total = weights.total();
            if total == 0 {
                // Minimal automata have no dead ends
                assert!(accepting, "non-accepting state without transitions");
                break;
            }

            let bound = if accepting { total + 1 } else { total };
            let n = self.rng.gen_range(0, bound);
            if n == total {
                break;
            }
            let (c, next) = weights.pick(n);
            trace!("stepping on {:?} into state {}", c, next.id());
            result.push(c);
            state = next;
        }
        result
    }
}

fn strip_anchors(pattern: &str) -> &str {
    let pattern = pattern.strip_prefix('^').unwrap_or(pattern);
    pattern.strip_suffix('$').unwrap_or(pattern)
}

// Tests ///////////////////////////////////////////////////////////////////////
