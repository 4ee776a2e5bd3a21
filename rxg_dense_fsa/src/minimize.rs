/**
 * Minimization. The result is trimmed (every state is reachable and can reach
 * an accepting state), minimal, and numbered in breadth-first order from the
 * initial state, so equal languages produce equal automata.
 */

use std::collections::{HashMap, VecDeque};
use log::debug;
use crate::dfa::{Automaton, State, Transition};

/// The outgoing behaviour of a state in terms of the current partition:
/// (min, max, class of the target) with neighbouring ranges into the same
/// class merged.
type Signature = Vec<(char, char, usize)>;

impl Automaton {
    /// Minimizes the automaton in place.
    pub fn minimize(&mut self) {
        let before = self.state_count();
        let result = self.minimized();
        debug!("minimized automaton from {} to {} states", before, result.state_count());
        *self = result;
    }

    /// The minimal automaton accepting the same language.
    pub fn minimized(&self) -> Self {
        let keep = self.useful_states();
        if !keep[self.start.id()] {
            return Automaton::new();
        }

        let class = self.partition(&keep);
        self.rebuild(&keep, &class)
    }

    /// States that are both reachable and co-reachable.
    fn useful_states(&self) -> Vec<bool> {
        let reachable = self.reachable();

        let mut reverse: Vec<Vec<usize>> = vec![Vec::new(); self.state_count()];
        for from in self.states() {
            for tr in self.transitions_from(&from) {
                reverse[tr.to.id()].push(from.id());
            }
        }

        let mut live = vec![false; self.state_count()];
        let mut stk: Vec<usize> = self.states()
            .filter(|s| self.is_accepting(s) && reachable[s.id()])
            .map(|s| s.id())
            .collect();
        for s in &stk {
            live[*s] = true;
        }
        while let Some(s) = stk.pop() {
            for from in &reverse[s] {
                if reachable[*from] && !live[*from] {
                    live[*from] = true;
                    stk.push(*from);
                }
            }
        }

        live
    }

    fn signature(&self, state: &State, keep: &[bool], class: &[usize]) -> Signature {
        let mut sig: Signature = Vec::new();
        for tr in self.transitions_from(state) {
            if !keep[tr.to.id()] {
                continue;
            }
            let target = class[tr.to.id()];
            if let Some(last) = sig.last_mut() {
                if last.2 == target && tr.interval().is_touching(&rxg_intervals::Interval::new(last.0, last.1)) {
                    last.1 = tr.max;
                    continue;
                }
            }
            sig.push((tr.min, tr.max, target));
        }
        sig
    }

    /// Moore-style partition refinement over the useful states. Returns the
    /// class of every useful state.
    fn partition(&self, keep: &[bool]) -> Vec<usize> {
        let mut class: Vec<usize> = self.accepting.iter().map(|a| if *a { 1 } else { 0 }).collect();
        let mut class_count = 0;

        loop {
            let mut ids: HashMap<(usize, Signature), usize> = HashMap::new();
            let mut next = vec![usize::MAX; self.state_count()];
            for s in self.states().filter(|s| keep[s.id()]) {
                let key = (class[s.id()], self.signature(&s, keep, &class));
                let fresh = ids.len();
                next[s.id()] = *ids.entry(key).or_insert(fresh);
            }

            let new_count = ids.len();
            class = next;
            if new_count == class_count {
                return class;
            }
            class_count = new_count;
        }
    }

    /// Builds the quotient automaton, numbering classes breadth-first.
    fn rebuild(&self, keep: &[bool], class: &[usize]) -> Self {
        // A representative state for every class
        let mut representative: HashMap<usize, State> = HashMap::new();
        for s in self.states().filter(|s| keep[s.id()]) {
            representative.entry(class[s.id()]).or_insert(s);
        }

        let mut result = Automaton::new();
        let mut numbering: HashMap<usize, State> = HashMap::new();
        let mut queue = VecDeque::new();

        let start_class = class[self.start.id()];
        numbering.insert(start_class, result.initial());
        queue.push_back(start_class);

        while let Some(c) = queue.pop_front() {
            let rep = representative[&c];
            let from = numbering[&c];
            result.set_accepting(from, self.is_accepting(&rep));

            for (min, max, target) in self.signature(&rep, keep, class) {
                let to = match numbering.get(&target) {
                    Some(existing) => *existing,
                    None => {
                        let fresh = result.unique_state();
                        numbering.insert(target, fresh);
                        queue.push_back(target);
                        fresh
                    },
                };
                result.transitions[from.id()].push(Transition{ min, max, to });
            }
        }

        result
    }
}

// Tests ///////////////////////////////////////////////////////////////////////
