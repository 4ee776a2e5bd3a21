/**
 * The regex syntax-tree (AST) and the normalizing constructors the parser
 * builds it with.
 */

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Union{
        first: Box<Node>,
        second: Box<Node>,
    },

    Concatenation{
        first: Box<Node>,
        second: Box<Node>,
    },

    Intersection{
        first: Box<Node>,
        second: Box<Node>,
    },

    Optional(Box<Node>),

    Repeat(Box<Node>),

    RepeatAtLeast{
        subnode: Box<Node>,
        min: usize,
    },

    RepeatBetween{
        subnode: Box<Node>,
        min: usize,
        max: usize,
    },

    Complement(Box<Node>),

    Char(char),

    CharRange{
        from: char,
        to: char,
    },

    AnyChar,

    AnyString,

    /// The empty language.
    Empty,

    LiteralString(String),

    AutomatonRef(String),

    /// Decimal numbers in `min..=max`. A nonzero `digits` means the numbers
    /// are zero-padded to that width.
    Interval{
        min: u32,
        max: u32,
        digits: usize,
    },
}

/**
 * Builder.
 */

impl Node {
    pub fn union(first: Node, second: Node) -> Node {
        Node::Union{ first: Box::new(first), second: Box::new(second) }
    }

    /// Concatenation that folds neighbouring literals into a single
    /// `LiteralString`, also across the nearer side of nested concatenations.
    pub fn concat(first: Node, second: Node) -> Node {
        match (first, second) {
            (first, second) if first.is_literal() && second.is_literal() =>
                Node::LiteralString(first.literal_text() + &second.literal_text()),

            (Node::Concatenation{ first: ff, second: fs }, second) if fs.is_literal() && second.is_literal() =>
                Node::Concatenation{ first: ff, second: Box::new(Node::concat(*fs, second)) },

            (first, Node::Concatenation{ first: sf, second: ss }) if first.is_literal() && sf.is_literal() =>
                Node::Concatenation{ first: Box::new(Node::concat(first, *sf)), second: ss },

            (first, second) => Node::concat_unfolded(first, second),
        }
    }

    /// Concatenation without any folding.
    pub fn concat_unfolded(first: Node, second: Node) -> Node {
        Node::Concatenation{ first: Box::new(first), second: Box::new(second) }
    }

    pub fn intersection(first: Node, second: Node) -> Node {
        Node::Intersection{ first: Box::new(first), second: Box::new(second) }
    }

    pub fn optional(subnode: Node) -> Node {
        Node::Optional(Box::new(subnode))
    }

    pub fn repeat(subnode: Node) -> Node {
        Node::Repeat(Box::new(subnode))
    }

    pub fn repeat_at_least(subnode: Node, min: usize) -> Node {
        Node::RepeatAtLeast{ subnode: Box::new(subnode), min }
    }

    pub fn repeat_between(subnode: Node, min: usize, max: usize) -> Node {
        Node::RepeatBetween{ subnode: Box::new(subnode), min, max }
    }

    pub fn complement(subnode: Node) -> Node {
        Node::Complement(Box::new(subnode))
    }

    /// Any character of the active alphabet except the ones `excluded`
    /// matches.
    pub fn exclude_chars(excluded: Node) -> Node {
        Node::intersection(Node::AnyChar, Node::complement(excluded))
    }

    pub fn char_range(from: char, to: char) -> Node {
        Node::CharRange{ from, to }
    }

    /// A union matching exactly the given characters, with consecutive runs
    /// collapsed into ranges. No characters give `Empty`.
    pub fn char_class(chars: &[char]) -> Node {
        let mut sorted = chars.to_vec();
        sorted.sort_unstable();
        sorted.dedup();

        let mut runs: Vec<(char, char)> = Vec::new();
        for c in sorted {
            match runs.last_mut() {
                Some(last) if (last.1 as u32) + 1 == c as u32 => last.1 = c,
                _ => runs.push((c, c)),
            }
        }

        runs.into_iter()
            .map(|(from, to)| if from == to { Node::Char(from) } else { Node::char_range(from, to) })
            .fold(None, |acc, n| match acc {
                None => Some(n),
                Some(acc) => Some(Node::union(acc, n)),
            })
            .unwrap_or(Node::Empty)
    }

    pub fn literal(s: impl Into<String>) -> Node {
        Node::LiteralString(s.into())
    }

    pub fn automaton_ref(name: impl Into<String>) -> Node {
        Node::AutomatonRef(name.into())
    }

    pub fn interval(min: u32, max: u32, digits: usize) -> Node {
        Node::Interval{ min, max, digits }
    }

    fn is_literal(&self) -> bool {
        match self {
            Node::Char(_) | Node::LiteralString(_) => true,
            _ => false,
        }
    }

    fn literal_text(&self) -> String {
        match self {
            Node::Char(c) => c.to_string(),
            Node::LiteralString(s) => s.clone(),
            _ => panic!("literal_text called on a non-literal node"),
        }
    }
}

// Tests ///////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod ast_tests {
    use super::*;

    fn ch(c: char) -> Node {
        Node::Char(c)
    }

    fn lit(s: &str) -> Node {
        Node::literal(s)
    }

    #[test]
    fn chars_fold() {
        assert_eq!(Node::concat(ch('a'), ch('b')), lit("ab"));
        assert_eq!(Node::concat(lit("ab"), ch('c')), lit("abc"));
        assert_eq!(Node::concat(ch('a'), lit("")), lit("a"));
    }

    #[test]
    fn fold_into_left_spine() {
        let left = Node::concat(Node::AnyChar, ch('a'));
        assert_eq!(left, Node::concat_unfolded(Node::AnyChar, ch('a')));
        assert_eq!(Node::concat(left, ch('b')), Node::concat_unfolded(Node::AnyChar, lit("ab")));
    }

    #[test]
    fn fold_into_right_spine() {
        let right = Node::concat_unfolded(ch('b'), Node::AnyChar);
        assert_eq!(Node::concat(ch('a'), right), Node::concat_unfolded(lit("ab"), Node::AnyChar));
    }

    #[test]
    fn no_fold_across_structure() {
        let star = Node::repeat(ch('a'));
        assert_eq!(Node::concat(star.clone(), ch('b')), Node::concat_unfolded(star, ch('b')));
    }

    #[test]
    fn char_classes() {
        assert_eq!(Node::char_class(&[]), Node::Empty);
        assert_eq!(Node::char_class(&['x']), ch('x'));
        assert_eq!(
            Node::char_class(&['c', 'a', 'b', 'x', 'a']),
            Node::union(Node::char_range('a', 'c'), ch('x')));
    }

    #[test]
    fn exclusion_shape() {
        assert_eq!(
            Node::exclude_chars(ch('a')),
            Node::intersection(Node::AnyChar, Node::complement(ch('a'))));
    }
}
