/**
 * Element types with a successor and predecessor, so that inclusive intervals
 * over them can be split and glued together without gaps.
 */

/// A totally ordered type where every element has a well-defined neighbour.
pub trait Discrete : Copy + Ord {
    const MIN: Self;
    const MAX: Self;

    fn successor(self) -> Option<Self>;
    fn predecessor(self) -> Option<Self>;

    /// The number of elements in the inclusive range `lower..=upper`.
    fn count(lower: Self, upper: Self) -> u64;

    /// The element `n` steps after `lower`, if there is one.
    fn nth_after(lower: Self, n: u64) -> Option<Self>;
}

/**
 * Characters. The surrogate block is not part of the domain, so the neighbours
 * around it skip over the gap.
 */

const SURROGATE_FIRST: u32 = 0xD800;
const SURROGATE_LAST: u32 = 0xDFFF;
const SURROGATE_COUNT: u32 = SURROGATE_LAST - SURROGATE_FIRST + 1;

impl Discrete for char {
    const MIN: Self = '\0';
    const MAX: Self = std::char::MAX;

    fn successor(self) -> Option<Self> {
        match self as u32 {
            0xD7FF => Some('\u{E000}'),
            x => std::char::from_u32(x.checked_add(1)?),
        }
    }

    fn predecessor(self) -> Option<Self> {
        match self as u32 {
            0xE000 => Some('\u{D7FF}'),
            x => std::char::from_u32(x.checked_sub(1)?),
        }
    }

    fn count(lower: Self, upper: Self) -> u64 {
        if lower > upper {
            return 0;
        }
        let (l, u) = (lower as u32, upper as u32);
        let mut result = u64::from(u - l) + 1;
        if l < SURROGATE_FIRST && u > SURROGATE_LAST {
            result -= u64::from(SURROGATE_COUNT);
        }
        result
    }

    fn nth_after(lower: Self, n: u64) -> Option<Self> {
        let mut value = u64::from(lower as u32).checked_add(n)?;
        if (lower as u32) < SURROGATE_FIRST && value >= u64::from(SURROGATE_FIRST) {
            value += u64::from(SURROGATE_COUNT);
        }
        if value > u64::from(std::char::MAX as u32) {
            None
        }
        else {
            std::char::from_u32(value as u32)
        }
    }
}

// Tests ///////////////////////////////////////////////////////////////////////
