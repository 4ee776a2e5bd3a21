/**
 * Automata for decimal numbers in a range.
 */

use std::collections::HashMap;
use rxg_intervals::Interval;
use crate::dfa::{Automaton, State};

fn digit_count(n: u64) -> usize {
    n.to_string().len()
}

/// The decimal digits of `n`, left-padded with zeros to `width`.
fn padded_digits(n: u64, width: usize) -> Vec<u8> {
    format!("{:0width$}", n, width = width).bytes().map(|b| b - b'0').collect()
}

/// Builds the automaton of numbers with exactly `width` digits (leading zeros
/// included) whose value lies in `lo..=hi`.
struct FixedWidth {
    width: usize,
    lo: Vec<u8>,
    hi: Vec<u8>,
    states: HashMap<(usize, bool, bool), State>,
    result: Automaton,
}

impl FixedWidth {
    fn build(width: usize, lo: u64, hi: u64) -> Automaton {
        let cap = 10u64.saturating_pow(width as u32).saturating_sub(1);
        let hi = hi.min(cap);
        if lo > hi {
            return Automaton::empty();
        }

        let mut builder = FixedWidth{
            width,
            lo: padded_digits(lo, width),
            hi: padded_digits(hi, width),
            states: HashMap::new(),
            result: Automaton::new(),
        };
        let start = builder.result.initial();
        builder.states.insert((0, true, true), start);
        builder.expand(0, true, true, start);
        builder.result
    }

    /// Fills out the transitions of the state at digit `pos`. The flags tell
    /// whether the prefix read so far equals the prefix of the lower or upper
    /// bound.
    fn expand(&mut self, pos: usize, tight_lo: bool, tight_hi: bool, state: State) {
        if pos == self.width {
            self.result.add_accepting(state);
            return;
        }

        let first = if tight_lo { self.lo[pos] } else { 0 };
        let last = if tight_hi { self.hi[pos] } else { 9 };
        for d in first..=last {
            let key = (pos + 1, tight_lo && d == first, tight_hi && d == last);
            let target = match self.states.get(&key) {
                Some(existing) => *existing,
                None => {
                    let fresh = self.result.unique_state();
                    self.states.insert(key, fresh);
                    self.expand(key.0, key.1, key.2, fresh);
                    fresh
                },
            };
            let c = char::from(b'0' + d);
            self.result.add_transition(state, Interval::singleton(c), target);
        }
    }
}

impl Automaton {
    /// Accepts the decimal numbers between `min` and `max`, inclusive.
    ///
    /// With `digits > 0` the numbers are written with exactly
    /// `max(digits, digit count of max)` digits, padded with leading zeros.
    /// With `digits == 0` any number of leading zeros is allowed.
    pub fn interval(min: u32, max: u32, digits: usize) -> Self {
        let (min, max) = if min > max { (max, min) } else { (min, max) };
        let (min, max) = (u64::from(min), u64::from(max));
        let max_len = digit_count(max);

        if digits > 0 {
            return FixedWidth::build(digits.max(max_len), min, max);
        }

        let mut lengths = Vec::new();
        for k in 1..=max_len {
            let low = if k == 1 { 0 } else { 10u64.pow(k as u32 - 1) };
            let high = 10u64.pow(k as u32) - 1;
            let (lo, hi) = (min.max(low), max.min(high));
            if lo <= hi {
                lengths.push(FixedWidth::build(k, lo, hi));
            }
        }

        Self::concatenate(vec![
            Self::from_char('0').repeat(),
            Self::union(lengths),
        ])
    }
}

// Tests ///////////////////////////////////////////////////////////////////////
