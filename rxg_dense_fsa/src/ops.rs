/**
 * Language operations. The composing operations glue their operands together
 * in an epsilon-NFA and determinize the result. None of them minimize the
 * final automaton, callers decide when to do that.
 */

use std::collections::HashMap;
use log::trace;
use rxg_intervals::IntervalSet;
use crate::dfa::{Automaton, State};
use crate::nfa::Automaton as NFA;

impl Automaton {
    /// Accepts the strings accepted by any of the given automata. An empty
    /// list gives the empty language.
    pub fn union<I>(automata: I) -> Self where I : IntoIterator<Item = Self> {
        let mut nfa = NFA::new();
        let start = nfa.start;
        let mut count = 0;
        for automaton in automata {
            let emb = nfa.embed(&automaton);
            nfa.add_epsilon_transition(start, emb.start);
            for acc in emb.accepting {
                nfa.add_accepting(acc);
            }
            count += 1;
        }
        trace!("union of {} automata", count);
        Self::from(nfa)
    }

    /// Accepts the strings that split into consecutive parts accepted by the
    /// given automata in order. An empty list gives the empty string.
    pub fn concatenate<I>(automata: I) -> Self where I : IntoIterator<Item = Self> {
        let mut nfa = NFA::new();
        let mut ends = vec![nfa.start];
        let mut count = 0;
        for automaton in automata {
            let emb = nfa.embed(&automaton);
            for end in &ends {
                nfa.add_epsilon_transition(*end, emb.start);
            }
            ends = emb.accepting;
            count += 1;
        }
        for end in ends {
            nfa.add_accepting(end);
        }
        trace!("concatenation of {} automata", count);
        Self::from(nfa)
    }

    /// Accepts the empty string or anything this automaton accepts.
    pub fn optional(self) -> Self {
        Self::union(vec![self, Self::empty_string()])
    }

    /// Kleene star.
    pub fn repeat(self) -> Self {
        let mut nfa = NFA::new();
        let start = nfa.start;
        nfa.add_accepting(start);
        let emb = nfa.embed(&self);
        nfa.add_epsilon_transition(start, emb.start);
        for acc in emb.accepting {
            nfa.add_epsilon_transition(acc, start);
        }
        Self::from(nfa)
    }

    /// At least `min` consecutive strings of this automaton's language.
    pub fn repeat_min(self, min: usize) -> Self {
        if min == 0 {
            return self.repeat();
        }
        let mut parts = vec![self.clone(); min];
        parts.push(self.repeat());
        Self::concatenate(parts)
    }

    /// Between `min` and `max` consecutive strings of this automaton's
    /// language, inclusive. Gives the empty language if `min > max`.
    pub fn repeat_between(self, min: usize, max: usize) -> Self {
        if min > max {
            return Self::empty();
        }

        // The optional tail is built inside out: (x(x(x)?)?)?
        let mut tail = Self::empty_string();
        for _ in min..max {
            tail = Self::concatenate(vec![self.clone(), tail]).optional().minimized();
        }

        let mut parts = vec![self; min];
        parts.push(tail);
        Self::concatenate(parts)
    }

    /// Accepts the strings accepted by both automata.
    pub fn intersection(&self, other: &Self) -> Self {
        let mut result = Self::new();
        let mut pairs: HashMap<(State, State), State> = HashMap::new();
        let mut stk = vec![(self.start, other.start, result.initial())];
        pairs.insert((self.start, other.start), result.initial());

        while let Some((a, b, to_state)) = stk.pop() {
            if self.is_accepting(&a) && other.is_accepting(&b) {
                result.add_accepting(to_state);
            }

            let left = self.transitions_from(&a);
            let right = other.transitions_from(&b);
            let (mut i, mut j) = (0, 0);
            while i < left.len() && j < right.len() {
                let (l, r) = (&left[i], &right[j]);
                if let Some(common) = l.interval().intersection(&r.interval()) {
                    let key = (l.to, r.to);
                    let target = match pairs.get(&key) {
                        Some(existing) => *existing,
                        None => {
                            let fresh = result.unique_state();
                            pairs.insert(key, fresh);
                            stk.push((l.to, r.to, fresh));
                            fresh
                        },
                    };
                    result.add_transition(to_state, common, target);
                }
                if l.max < r.max {
                    i += 1;
                }
                else {
                    j += 1;
                }
            }
        }

        trace!("intersection produced {} states", result.state_count());
        result
    }

    /// Accepts every string over the whole character domain that this
    /// automaton rejects.
    pub fn complement(mut self) -> Self {
        self.totalize();
        for acc in self.accepting.iter_mut() {
            *acc = !*acc;
        }
        self
    }

    /// Makes every state have a transition on every character by routing the
    /// missing ones into a fresh dead state.
    fn totalize(&mut self) {
        let dead = self.unique_state();
        let states: Vec<State> = self.states().collect();
        for state in states {
            let mut missing: IntervalSet<char> = self.transitions_from(&state).iter()
                .map(|tr| tr.interval())
                .collect();
            missing.invert();
            for gap in missing {
                self.add_transition(state, gap, dead);
            }
        }
    }
}

// Tests ///////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod ops_tests {
    use super::*;
    use rxg_intervals::Interval;

    fn word(s: &str) -> Automaton {
        Automaton::from_string(s)
    }

    #[test]
    fn union_of_words() {
        let df = Automaton::union(vec![word("ab"), word("cd"), word("")]);
        assert!(df.run("ab"));
        assert!(df.run("cd"));
        assert!(df.run(""));
        assert!(!df.run("abcd"));
        assert!(Automaton::union(Vec::new()).is_empty());
    }

    #[test]
    fn concatenation_of_words() {
        let df = Automaton::concatenate(vec![word("ab"), Automaton::from_char_range('0', '9'), word("c")]);
        assert!(df.run("ab5c"));
        assert!(!df.run("abc"));
        let eps = Automaton::concatenate(Vec::new());
        assert!(eps.run(""));
        assert!(!eps.run("a"));
    }

    #[test]
    fn kleene_star() {
        let df = word("ab").repeat();
        assert!(df.run(""));
        assert!(df.run("ab"));
        assert!(df.run("ababab"));
        assert!(!df.run("aba"));
    }

    #[test]
    fn bounded_repetition() {
        let df = Automaton::from_char('x').repeat_between(2, 4);
        assert!(!df.run("x"));
        assert!(df.run("xx"));
        assert!(df.run("xxx"));
        assert!(df.run("xxxx"));
        assert!(!df.run("xxxxx"));

        let zero = Automaton::from_char('x').repeat_between(0, 0);
        assert!(zero.run(""));
        assert!(!zero.run("x"));

        assert!(Automaton::from_char('x').repeat_between(3, 2).is_empty());
    }

    #[test]
    fn unbounded_repetition() {
        let df = Automaton::from_char('x').repeat_min(2);
        assert!(!df.run("x"));
        assert!(df.run("xx"));
        assert!(df.run("xxxxxxx"));
        assert!(Automaton::from_char('x').repeat_min(0).run(""));
    }

    #[test]
    fn optional_word() {
        let df = word("ab").optional();
        assert!(df.run(""));
        assert!(df.run("ab"));
        assert!(!df.run("a"));
    }

    #[test]
    fn intersection_of_ranges() {
        let letters = Automaton::from_char_range('a', 'm').repeat();
        let other = Automaton::from_char_range('h', 'z').repeat();
        let df = letters.intersection(&other);
        assert!(df.run("hijk"));
        assert!(df.run(""));
        assert!(!df.run("hia"));
        assert!(!df.run("n"));
    }

    #[test]
    fn complement_flips_membership() {
        let df = word("ab").complement();
        assert!(!df.run("ab"));
        assert!(df.run(""));
        assert!(df.run("a"));
        assert!(df.run("abc"));
        assert!(df.run("\u{10FFFF}"));
        assert!(Automaton::any_string().complement().minimized().is_empty());
    }

    #[test]
    fn totalized_states_cover_everything() {
        let mut df = word("a");
        df.totalize();
        for s in df.states() {
            let covered: u64 = df.transitions_from(&s).iter().map(|t| t.width()).sum();
            assert_eq!(covered, Interval::<char>::full().len());
        }
    }
}
