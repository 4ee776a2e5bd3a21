/**
 * Dense deterministic finite automaton representation. States are indices
 * into the state table, transitions of a state are kept sorted by their
 * lower character and never overlap.
 */

use std::collections::{BTreeMap, BTreeSet};
use rxg_intervals::{Interval, IntervalMap};
use crate::nfa::{self, Automaton as NFA};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct State(pub(crate) usize);

impl State {
    pub fn id(&self) -> usize {
        self.0
    }
}

/// A transition on every character in `min..=max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Transition {
    pub min: char,
    pub max: char,
    pub to: State,
}

impl Transition {
    pub fn interval(&self) -> Interval<char> {
        Interval::new(self.min, self.max)
    }

    /// The number of distinct characters this transition can be taken on.
    pub fn width(&self) -> u64 {
        self.interval().len()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Automaton {
    pub(crate) start: State,
    pub(crate) accepting: Vec<bool>,
    pub(crate) transitions: Vec<Vec<Transition>>,
}

impl Automaton {
    /// An automaton with a single, non-accepting state. Accepts nothing.
    pub fn new() -> Self {
        Self{
            start: State(0),
            accepting: vec![false],
            transitions: vec![Vec::new()],
        }
    }

    pub fn unique_state(&mut self) -> State {
        self.accepting.push(false);
        self.transitions.push(Vec::new());
        State(self.accepting.len() - 1)
    }

    pub fn initial(&self) -> State {
        self.start
    }

    pub fn add_accepting(&mut self, state: State) {
        self.accepting[state.0] = true;
    }

    pub fn set_accepting(&mut self, state: State, accepting: bool) {
        self.accepting[state.0] = accepting;
    }

    pub fn is_accepting(&self, state: &State) -> bool {
        self.accepting[state.0]
    }

    pub fn state_count(&self) -> usize {
        self.accepting.len()
    }

    pub fn states(&self) -> impl Iterator<Item = State> {
        (0..self.accepting.len()).map(State)
    }

    /// The outgoing transitions of a state, sorted by character.
    pub fn transitions_from(&self, state: &State) -> &[Transition] {
        &self.transitions[state.0]
    }

    /// Adds a transition, merging it with a neighbour that leads to the same
    /// state and touches it. The new interval must not overlap any existing
    /// transition of the state.
    pub fn add_transition(&mut self, from: State, on: Interval<char>, to: State) {
        let trs = &mut self.transitions[from.0];
        let idx = trs.partition_point(|t| t.max < on.lower);
        assert!(idx == trs.len() || on.upper < trs[idx].min, "overlapping transitions in a DFA");

        let mut tr = Transition{ min: on.lower, max: on.upper, to };
        let mut at = idx;
        if idx < trs.len() && trs[idx].to == to && tr.interval().is_touching(&trs[idx].interval()) {
            tr.max = trs[idx].max;
            trs.remove(idx);
        }
        if idx > 0 && trs[idx - 1].to == to && tr.interval().is_touching(&trs[idx - 1].interval()) {
            tr.min = trs[idx - 1].min;
            trs.remove(idx - 1);
            at -= 1;
        }
        trs.insert(at, tr);
    }

    /// The state reached from `state` on `c`, if any.
    pub fn step(&self, state: &State, c: char) -> Option<State> {
        let trs = self.transitions_from(state);
        let idx = trs.partition_point(|t| t.max < c);
        trs.get(idx).filter(|t| t.min <= c).map(|t| t.to)
    }

    /// Checks whether the automaton accepts the given string.
    pub fn run(&self, input: &str) -> bool {
        let mut state = self.start;
        for c in input.chars() {
            match self.step(&state, c) {
                Some(next) => state = next,
                None => return false,
            }
        }
        self.is_accepting(&state)
    }

    /// Marks the states reachable from the initial one.
    pub(crate) fn reachable(&self) -> Vec<bool> {
        let mut seen = vec![false; self.state_count()];
        let mut stk = vec![self.start];
        seen[self.start.0] = true;
        while let Some(s) = stk.pop() {
            for tr in self.transitions_from(&s) {
                if !seen[tr.to.0] {
                    seen[tr.to.0] = true;
                    stk.push(tr.to);
                }
            }
        }
        seen
    }

    /// Checks if the automaton accepts no strings at all.
    pub fn is_empty(&self) -> bool {
        !self.reachable().iter().zip(self.accepting.iter()).any(|(r, a)| *r && *a)
    }
}

impl Default for Automaton {
    fn default() -> Self {
        Self::new()
    }
}

/**
 * Determinization.
 */

impl From<NFA> for Automaton {
    fn from(nfa: NFA) -> Self {
        Self::from(&nfa)
    }
}

impl From<&NFA> for Automaton {
    fn from(nfa: &NFA) -> Self {
        let mut dfa = Self::new();
        let mut nfa_set_to_dfa_state = BTreeMap::new();
        let mut stk = Vec::new();

        // We need the start state's mapping
        {
            let mut start = BTreeSet::new();
            start.insert(nfa.start);
            let start_states = nfa.epsilon_closure(&start);
            nfa_set_to_dfa_state.insert(start_states.clone(), dfa.start);
            stk.push((start_states, dfa.start));
        }

        while let Some((nfa_states, dfa_state)) = stk.pop() {
            if nfa_states.iter().any(|s| nfa.is_accepting(s)) {
                dfa.add_accepting(dfa_state);
            }

            // Now we collect where we can transition to using an interval map
            let mut transitions: IntervalMap<char, BTreeSet<nfa::State>> = IntervalMap::new();
            for nf_state in &nfa_states {
                if let Some(trs) = nfa.transitions_from(nf_state) {
                    for (iv, dest_states) in trs {
                        transitions.insert_and_unify(*iv, dest_states.clone(), |mut unif| {
                            unif.existing.extend(unif.inserted);
                            unif.existing
                        });
                    }
                }
            }

            // Now 'transitions' contains all transitions from the set of nfa states
            for (on, to) in transitions {
                let to = nfa.epsilon_closure(&to);
                let dfa_to = match nfa_set_to_dfa_state.get(&to) {
                    Some(existing) => *existing,
                    None => {
                        let fresh = dfa.unique_state();
                        nfa_set_to_dfa_state.insert(to.clone(), fresh);
                        stk.push((to, fresh));
                        fresh
                    },
                };
                dfa.add_transition(dfa_state, on, dfa_to);
            }
        }

        dfa
    }
}

// Tests ///////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod dfa_tests {
    use super::*;

    #[test]
    fn determinize_overlapping_branches() {
        let mut nf = NFA::new();

        let a = nf.start;
        let b = nf.unique_state();
        let c = nf.unique_state();
        let d = nf.unique_state();
        let e = nf.unique_state();
        let f = nf.unique_state();
        let g = nf.unique_state();

        nf.add_transition(b, Interval::new('a', 'j'), g);
        nf.add_transition(c, Interval::new('e', 'o'), f);
        nf.add_transition(d, Interval::new('c', 'g'), e);

        nf.add_epsilon_transition(a, b);
        nf.add_epsilon_transition(a, c);
        nf.add_epsilon_transition(a, d);
        nf.add_accepting(e);
        nf.add_accepting(g);

        let df = Automaton::from(nf);

        assert!(df.run("a"));
        assert!(df.run("d"));
        assert!(df.run("j"));
        assert!(!df.run("k"));
        assert!(!df.run("o"));
        assert!(!df.run(""));
        assert!(!df.run("aa"));
    }

    #[test]
    fn add_transition_merges_neighbours() {
        let mut df = Automaton::new();
        let to = df.unique_state();
        df.add_transition(df.initial(), Interval::new('a', 'c'), to);
        df.add_transition(df.initial(), Interval::new('g', 'h'), to);
        df.add_transition(df.initial(), Interval::new('d', 'f'), to);
        assert_eq!(df.transitions_from(&df.initial()), &[Transition{ min: 'a', max: 'h', to }]);
    }

    #[test]
    fn add_transition_keeps_distinct_targets() {
        let mut df = Automaton::new();
        let x = df.unique_state();
        let y = df.unique_state();
        df.add_transition(df.initial(), Interval::new('d', 'f'), y);
        df.add_transition(df.initial(), Interval::new('a', 'c'), x);
        assert_eq!(df.transitions_from(&df.initial()), &[
            Transition{ min: 'a', max: 'c', to: x },
            Transition{ min: 'd', max: 'f', to: y },
        ]);
        assert_eq!(df.step(&df.initial(), 'e'), Some(y));
        assert_eq!(df.step(&df.initial(), 'z'), None);
    }

    #[test]
    fn emptiness() {
        assert!(Automaton::new().is_empty());
        let mut df = Automaton::new();
        let s = df.unique_state();
        assert!(df.is_empty());
        df.add_accepting(s);
        assert!(df.is_empty());
        df.add_transition(df.initial(), Interval::singleton('x'), s);
        assert!(!df.is_empty());
    }
}
