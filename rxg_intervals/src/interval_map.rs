/**
 * Associative set from an interval to some value. The intervals are always
 * disjunct but there is a possibility they will touch.
 */

use crate::discrete::Discrete;
use crate::interval::{Interval, intersecting_index_range};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntervalMap<K, V> {
    pub(crate) intervals: Vec<(Interval<K>, V)>,
}

/// The two values that meet on an overlapping part of an insertion.
pub struct Unification<V> {
    pub existing: V,
    pub inserted: V,
}

impl <K, V> IntervalMap<K, V> {
    pub fn new() -> Self {
        IntervalMap{ intervals: Vec::new() }
    }
}

impl <K, V> Default for IntervalMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl <K, V> IntervalMap<K, V> where K : Discrete, V : Clone {
    /// Inserts `value` for every element of `key`. The parts of `key` that
    /// overlap existing entries are split off, and get the value produced by
    /// `unify` from the existing and the inserted value.
    pub fn insert_and_unify<F>(&mut self, key: Interval<K>, value: V, mut unify: F)
        where F : FnMut(Unification<V>) -> V {

        let range = intersecting_index_range(&self.intervals, &key, |x| &x.0);

        if range.is_empty() {
            // Intersects nothing, just insert
            self.intervals.insert(range.start, (key, value));
            return;
        }

        let mut replacement = Vec::with_capacity(range.len() * 2 + 1);
        // The part of the inserted interval that is not covered yet
        let mut rest = Some(key);

        for (existing, existing_value) in self.intervals.drain(range.clone()) {
            let remaining = match rest {
                Some(r) => r,
                None => {
                    replacement.push((existing, existing_value));
                    continue;
                },
            };

            // Part of the existing entry before the inserted one
            if let Some(before) = existing.below(remaining.lower) {
                replacement.push((before, existing_value.clone()));
            }
            // Part of the inserted one before the existing entry
            if let Some(before) = remaining.below(existing.lower) {
                replacement.push((before, value.clone()));
            }

            match existing.intersection(&remaining) {
                Some(common) => {
                    let unified = unify(Unification{
                        existing: existing_value.clone(),
                        inserted: value.clone(),
                    });
                    replacement.push((common, unified));
                    if let Some(after) = existing.above(common.upper) {
                        replacement.push((after, existing_value));
                    }
                    rest = remaining.above(common.upper);
                },
                None => replacement.push((existing, existing_value)),
            }
        }

        if let Some(r) = rest {
            replacement.push((r, value));
        }

        let at = range.start;
        self.intervals.splice(at..at, replacement);
    }
}

impl <K, V> IntoIterator for IntervalMap<K, V> {
    type Item = (Interval<K>, V);
    type IntoIter = std::vec::IntoIter<(Interval<K>, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.intervals.into_iter()
    }
}

impl <'a, K, V> IntoIterator for &'a IntervalMap<K, V> {
    type Item = &'a (Interval<K>, V);
    type IntoIter = std::slice::Iter<'a, (Interval<K>, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.intervals.iter()
    }
}

// Tests ///////////////////////////////////////////////////////////////////////
