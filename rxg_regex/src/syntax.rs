/**
 * Optional grammar extensions.
 */

use std::ops::{BitAnd, BitOr, Not};

/// A set of optional productions the parser accepts. When an extension is
/// disabled, its trigger character is parsed as an ordinary literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SyntaxOptions(u8);

impl SyntaxOptions {
    pub const NONE: Self = Self(0);
    /// `a&b`
    pub const INTERSECTION: Self = Self(0x01);
    /// `~a`
    pub const COMPLEMENT: Self = Self(0x02);
    /// `#`
    pub const EMPTY: Self = Self(0x04);
    /// `@`
    pub const ANY_STRING: Self = Self(0x08);
    /// `<name>`
    pub const AUTOMATON: Self = Self(0x10);
    /// `<min-max>`
    pub const INTERVAL: Self = Self(0x20);
    pub const ALL: Self = Self(0x3f);

    /// Checks if every extension in `other` is enabled.
    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl Default for SyntaxOptions {
    fn default() -> Self {
        Self::ALL
    }
}

impl BitOr for SyntaxOptions {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitAnd for SyntaxOptions {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl Not for SyntaxOptions {
    type Output = Self;

    fn not(self) -> Self {
        Self(!self.0 & Self::ALL.0)
    }
}

// Tests ///////////////////////////////////////////////////////////////////////
