/**
 * Elementary automata.
 */

use rxg_intervals::{Interval, IntervalSet};
use crate::dfa::Automaton;

impl Automaton {
    /// Accepts nothing. Same as `Automaton::new()`.
    pub fn empty() -> Self {
        Self::new()
    }

    /// Accepts only the empty string.
    pub fn empty_string() -> Self {
        let mut result = Self::new();
        let start = result.initial();
        result.add_accepting(start);
        result
    }

    /// Accepts a single character.
    pub fn from_char(c: char) -> Self {
        Self::from_char_range(c, c)
    }

    /// Accepts a single character from `from..=to`. An inverted range gives
    /// the empty language.
    pub fn from_char_range(from: char, to: char) -> Self {
        let mut result = Self::new();
        if let Some(iv) = Interval::try_new(from, to) {
            let end = result.unique_state();
            result.add_accepting(end);
            result.add_transition(result.initial(), iv, end);
        }
        result
    }

    /// Accepts a single character from the given ones.
    pub fn from_char_set<I>(chars: I) -> Self where I : IntoIterator<Item = char> {
        let set = IntervalSet::from_elements(chars);
        let mut result = Self::new();
        if set.is_empty() {
            return result;
        }
        let end = result.unique_state();
        result.add_accepting(end);
        for iv in set {
            result.add_transition(result.initial(), iv, end);
        }
        result
    }

    /// Accepts exactly the given string.
    pub fn from_string(s: &str) -> Self {
        let mut result = Self::new();
        let mut last = result.initial();
        for c in s.chars() {
            let next = result.unique_state();
            result.add_transition(last, Interval::singleton(c), next);
            last = next;
        }
        result.add_accepting(last);
        result
    }

    /// Accepts any single character.
    pub fn any_char() -> Self {
        Self::from_char_range('\0', std::char::MAX)
    }

    /// Accepts every string.
    pub fn any_string() -> Self {
        let mut result = Self::new();
        let start = result.initial();
        result.add_accepting(start);
        result.add_transition(start, Interval::full(), start);
        result
    }
}

// Tests ///////////////////////////////////////////////////////////////////////
