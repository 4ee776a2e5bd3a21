/**
 * Uniform choice among all characters a state can step on.
 */

use rxg_dense_fsa::{State, Transition};

/// The outgoing transitions of a state with their running widths. The n-th
/// character (counting through all transitions in order) is found with a
/// binary search.
#[derive(Debug, Clone)]
pub(crate) struct StateWeights {
    transitions: Vec<Transition>,
    cumulative: Vec<u64>,
}

impl StateWeights {
    pub(crate) fn new(transitions: &[Transition]) -> Self {
        let mut sum = 0;
        let cumulative = transitions.iter()
            .map(|tr| {
                sum += tr.width();
                sum
            })
            .collect();
        Self{ transitions: transitions.to_vec(), cumulative }
    }

    /// The number of distinct characters to choose from.
    pub(crate) fn total(&self) -> u64 {
        self.cumulative.last().cloned().unwrap_or(0)
    }

    /// The character with index `n` in `0..total()` and the state it leads to.
    pub(crate) fn pick(&self, n: u64) -> (char, State) {
        let idx = self.cumulative.partition_point(|sum| *sum <= n);
        let before = if idx == 0 { 0 } else { self.cumulative[idx - 1] };
        let tr = &self.transitions[idx];
        match tr.interval().nth(n - before) {
            Some(c) => (c, tr.to),
            None => panic!("character index {} out of transition bounds", n),
        }
    }
}

// Tests ///////////////////////////////////////////////////////////////////////
