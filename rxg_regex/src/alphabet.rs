/**
 * The character universe of `.`, the class escapes and complements.
 */

/// An ordered, duplicate-free set of characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Alphabet {
    chars: Vec<char>,
}

impl Alphabet {
    /// Builds an alphabet, dropping repeated characters. The first occurrence
    /// determines the order.
    pub fn new<I>(chars: I) -> Self where I : IntoIterator<Item = char> {
        let mut result = Vec::new();
        for c in chars {
            if !result.contains(&c) {
                result.push(c);
            }
        }
        Self{ chars: result }
    }

    /// The printable ASCII range, `' '..='~'`.
    pub fn printable() -> Self {
        Self{ chars: (' '..='~').collect() }
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// The characters satisfying `pred`, in alphabet order.
    pub fn filter<F>(&self, pred: F) -> Vec<char> where F : Fn(char) -> bool {
        self.chars.iter().cloned().filter(|c| pred(*c)).collect()
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::printable()
    }
}

impl From<&str> for Alphabet {
    fn from(s: &str) -> Self {
        Self::new(s.chars())
    }
}

// Tests ///////////////////////////////////////////////////////////////////////
