/**
 * Stores a set of disjunct intervals, unifying them when possible.
 */

use crate::discrete::Discrete;
use crate::interval::{Interval, touching_index_range};

/// A set of elements stored as sorted intervals. Stored intervals never
/// overlap or touch, so every set has exactly one representation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct IntervalSet<T> {
    pub(crate) intervals: Vec<Interval<T>>,
}

impl <T> IntervalSet<T> {
    pub fn new() -> Self {
        IntervalSet{ intervals: Vec::new() }
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }
}

impl <T> IntervalSet<T> where T : Discrete {
    /// Inserts an interval into the set, unifying every touching and
    /// overlapping entry.
    pub fn insert(&mut self, value: Interval<T>) {
        let range = touching_index_range(&self.intervals, &value, |x| x);

        if range.is_empty() {
            // Intersects or touches nothing, just insert
            self.intervals.insert(range.start, value);
        }
        else {
            // Unify into the first entry and drop the rest
            let lower = std::cmp::min(self.intervals[range.start].lower, value.lower);
            let upper = std::cmp::max(self.intervals[range.end - 1].upper, value.upper);
            self.intervals[range.start] = Interval::new(lower, upper);
            self.intervals.drain((range.start + 1)..range.end);
        }
    }

    /// Turns the set into its complement over the whole domain.
    pub fn invert(&mut self) {
        let mut result = Vec::with_capacity(self.intervals.len() + 1);
        let mut next = Some(T::MIN);
        for iv in &self.intervals {
            if let Some(lower) = next {
                if let Some(gap) = Interval::try_new(lower, T::MAX).and_then(|rest| rest.below(iv.lower)) {
                    result.push(gap);
                }
            }
            next = iv.upper.successor();
        }
        if let Some(lower) = next {
            result.push(Interval::new(lower, T::MAX));
        }
        self.intervals = result;
    }

    /// Builds a set from individual elements.
    pub fn from_elements<I : IntoIterator<Item = T>>(elements: I) -> Self {
        elements.into_iter().map(Interval::singleton).collect()
    }
}

impl <T> std::iter::FromIterator<Interval<T>> for IntervalSet<T> where T : Discrete {
    fn from_iter<I : IntoIterator<Item = Interval<T>>>(iter: I) -> Self {
        let mut result = Self::new();
        for iv in iter {
            result.insert(iv);
        }
        result
    }
}

impl <T> IntoIterator for IntervalSet<T> {
    type Item = Interval<T>;
    type IntoIter = std::vec::IntoIter<Interval<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.intervals.into_iter()
    }
}

// Tests ///////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod interval_set_tests {
    use super::*;

    fn ri(lower: char, upper: char) -> Interval<char> {
        Interval::new(lower, upper)
    }

    macro_rules! ivset {
        ( $( $l:expr => $u:expr ),* ) => {
            {
                let mut set = IntervalSet::new();
                $(
                    set.insert(ri($l, $u));
                )*
                set
            }
        };
    }

    #[test]
    fn insert_disjunct_keeps_order() {
        let set = ivset!['k' => 'm', 'a' => 'b', 'e' => 'f'];
        assert_eq!(set.intervals, vec![ri('a', 'b'), ri('e', 'f'), ri('k', 'm')]);
    }

    #[test]
    fn insert_touching_unifies() {
        let set = ivset!['a' => 'b', 'c' => 'd'];
        assert_eq!(set.intervals, vec![ri('a', 'd')]);
    }

    #[test]
    fn insert_spanning_many_unifies() {
        let set = ivset!['a' => 'b', 'e' => 'f', 'j' => 'l', 't' => 'u', 'g' => 'o'];
        assert_eq!(set.intervals, vec![ri('a', 'b'), ri('e', 'o'), ri('t', 'u')]);
    }

    #[test]
    fn invert_middle() {
        let mut set = ivset!['e' => 'f'];
        set.invert();
        assert_eq!(set.intervals, vec![ri('\0', 'd'), ri('g', char::MAX)]);
    }

    #[test]
    fn invert_edges() {
        let mut set = ivset!['\0' => 'c', 'j' => char::MAX];
        set.invert();
        assert_eq!(set.intervals, vec![ri('d', 'i')]);
    }

    #[test]
    fn invert_empty_is_full() {
        let mut set = IntervalSet::<char>::new();
        set.invert();
        assert_eq!(set.intervals, vec![Interval::full()]);
    }

    #[test]
    fn invert_around_surrogates() {
        let mut set = ivset!['\u{D7FF}' => '\u{D7FF}'];
        set.invert();
        assert_eq!(set.intervals, vec![ri('\0', '\u{D7FE}'), ri('\u{E000}', char::MAX)]);
    }

    #[test]
    fn collect_from_chars() {
        let set = IntervalSet::from_elements("cabxz".chars());
        assert_eq!(set.intervals, vec![ri('a', 'c'), Interval::singleton('x'), Interval::singleton('z')]);
        assert!(!set.is_empty());
    }
}
