/**
 * Dense nondeterministic finite automaton with epsilon-transitions. This is
 * where deterministic automata get glued together before determinization.
 */

use std::collections::{BTreeMap, BTreeSet};
use rxg_intervals::{Interval, IntervalMap};
use crate::dfa;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct State(usize);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Automaton {
    state_counter: usize,
    pub start: State,
    accepting: BTreeSet<State>,
    transitions: BTreeMap<State, IntervalMap<char, BTreeSet<State>>>,
    epsilon: BTreeMap<State, BTreeSet<State>>,
}

/// Where a deterministic automaton ended up after being copied into an NFA.
pub struct Embedding {
    pub start: State,
    pub accepting: Vec<State>,
}

impl Automaton {
    pub fn new() -> Self {
        Self{
            state_counter: 0,
            start: State(0),
            accepting: BTreeSet::new(),
            transitions: BTreeMap::new(),
            epsilon: BTreeMap::new(),
        }
    }

    pub fn unique_state(&mut self) -> State {
        self.state_counter += 1;
        State(self.state_counter)
    }

    pub fn add_accepting(&mut self, state: State) {
        self.accepting.insert(state);
    }

    pub fn is_accepting(&self, state: &State) -> bool {
        self.accepting.contains(state)
    }

    /// Every state reachable from the given ones through epsilon-transitions,
    /// including themselves.
    pub fn epsilon_closure(&self, states: &BTreeSet<State>) -> BTreeSet<State> {
        let mut result = states.clone();
        let mut stk: Vec<State> = states.iter().cloned().collect();

        while let Some(top) = stk.pop() {
            if let Some(targets) = self.epsilon.get(&top) {
                for s in targets {
                    if result.insert(*s) {
                        stk.push(*s);
                    }
                }
            }
        }

        result
    }

    pub fn add_epsilon_transition(&mut self, from: State, to: State) {
        self.epsilon.entry(from).or_insert_with(BTreeSet::new).insert(to);
    }

    pub fn add_transition(&mut self, from: State, on: Interval<char>, to: State) {
        let from_map = self.transitions.entry(from).or_insert_with(IntervalMap::new);
        let mut targets = BTreeSet::new();
        targets.insert(to);
        from_map.insert_and_unify(on, targets, |mut unification| {
            unification.existing.append(&mut unification.inserted);
            unification.existing
        });
    }

    pub fn transitions_from(&self, from: &State) -> Option<&IntervalMap<char, BTreeSet<State>>> {
        self.transitions.get(from)
    }

    pub fn states(&self) -> impl Iterator<Item = State> {
        (0..=self.state_counter).map(State)
    }

    /// Copies a deterministic automaton into this one with fresh states. The
    /// copy is not connected to anything yet.
    pub fn embed(&mut self, automaton: &dfa::Automaton) -> Embedding {
        let mapping: Vec<State> = automaton.states().map(|_| self.unique_state()).collect();

        for from in automaton.states() {
            for tr in automaton.transitions_from(&from) {
                self.add_transition(mapping[from.id()], Interval::new(tr.min, tr.max), mapping[tr.to.id()]);
            }
        }

        Embedding{
            start: mapping[automaton.initial().id()],
            accepting: automaton.states()
                .filter(|s| automaton.is_accepting(s))
                .map(|s| mapping[s.id()])
                .collect(),
        }
    }
}

impl Default for Automaton {
    fn default() -> Self {
        Self::new()
    }
}

// Tests ///////////////////////////////////////////////////////////////////////
