/**
 * The inclusive interval over a discrete element type.
 */

use crate::discrete::Discrete;

/// Represents the interval `lower..=upper`. An interval is never empty.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Interval<T> {
    pub lower: T,
    pub upper: T,
}

/**
 * Constructing an interval.
 */

impl <T> Interval<T> where T : Ord {
    pub fn new(lower: T, upper: T) -> Self {
        assert!(lower <= upper, "interval bounds out of order");
        Self{ lower, upper }
    }

    /// Like `new`, but yields `None` for reversed bounds instead of panicking.
    pub fn try_new(lower: T, upper: T) -> Option<Self> {
        if lower <= upper {
            Some(Self{ lower, upper })
        }
        else {
            None
        }
    }
}

impl <T> Interval<T> where T : Clone + Ord {
    pub fn singleton(value: T) -> Self {
        Self::new(value.clone(), value)
    }
}

impl <T> Interval<T> where T : Discrete {
    pub fn full() -> Self {
        Self::new(T::MIN, T::MAX)
    }
}

/**
 * Debug-print an interval.
 */
impl <T> std::fmt::Debug for Interval<T> where T : std::fmt::Debug {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        self.lower.fmt(f)?;
        write!(f, "; ")?;
        self.upper.fmt(f)?;
        write!(f, "]")
    }
}

/**
 * Info about a single interval.
 */

impl <T> Interval<T> where T : Discrete {
    /// The number of elements in the interval.
    pub fn len(&self) -> u64 {
        T::count(self.lower, self.upper)
    }

    /// The `n`th element of the interval, counting from zero.
    pub fn nth(&self, n: u64) -> Option<T> {
        T::nth_after(self.lower, n).filter(|x| *x <= self.upper)
    }

    /// Checks if the two intervals are disjunct but there is no gap between them.
    pub fn is_touching(&self, other: &Self) -> bool {
        self.upper.successor() == Some(other.lower) || other.upper.successor() == Some(self.lower)
    }

    /// The common part of two intervals.
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        Self::try_new(std::cmp::max(self.lower, other.lower), std::cmp::min(self.upper, other.upper))
    }

    /// The part of the interval that lies strictly below `at`.
    pub fn below(&self, at: T) -> Option<Self> {
        let upper = at.predecessor()?;
        Self::try_new(self.lower, std::cmp::min(upper, self.upper))
    }

    /// The part of the interval that lies strictly above `at`.
    pub fn above(&self, at: T) -> Option<Self> {
        let lower = at.successor()?;
        Self::try_new(std::cmp::max(lower, self.lower), self.upper)
    }
}

/**
 * Utilities for interval lists/maps.
 */

/// The index range of the elements in a sorted, disjunct list that intersect
/// the given interval.
pub(crate) fn intersecting_index_range<E, T, F>(
    slice: &[E], interval: &Interval<T>, proj: F) -> std::ops::Range<usize>
    where F : Fn(&E) -> &Interval<T>, T : Ord {

    let from = slice.partition_point(|x| proj(x).upper < interval.lower);
    let to = from + slice[from..].partition_point(|x| proj(x).lower <= interval.upper);
    from..to
}

/// Like `intersecting_index_range`, but also includes the neighbours that
/// only touch the interval.
pub(crate) fn touching_index_range<E, T, F>(
    slice: &[E], interval: &Interval<T>, proj: F) -> std::ops::Range<usize>
    where F : Fn(&E) -> &Interval<T>, T : Discrete {

    let std::ops::Range{ mut start, mut end, } = intersecting_index_range(slice, interval, &proj);

    if start != 0 && proj(&slice[start - 1]).is_touching(interval) {
        start -= 1;
    }
    if end != slice.len() && proj(&slice[end]).is_touching(interval) {
        end += 1;
    }

    start..end
}

// Tests ///////////////////////////////////////////////////////////////////////
