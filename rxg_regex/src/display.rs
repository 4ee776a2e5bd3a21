/**
 * Writes a syntax tree back as pattern text. Every composite is
 * parenthesized, so the output parses back to the same language with all
 * syntax extensions enabled.
 */

use std::fmt;
use crate::ast::Node;

/// Characters that stand for a class after a backslash, so they are written
/// bare.
const CLASS_ESCAPES: &str = "dDsSwW";

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Union{ first, second } => write!(f, "({}|{})", first, second),
            Node::Concatenation{ first, second } => write!(f, "({}{})", first, second),
            Node::Intersection{ first, second } => write!(f, "({}&{})", first, second),
            Node::Optional(subnode) => write!(f, "({})?", subnode),
            Node::Repeat(subnode) => write!(f, "({})*", subnode),
            Node::RepeatAtLeast{ subnode, min } => write!(f, "({}){{{},}}", subnode, min),
            Node::RepeatBetween{ subnode, min, max } => write!(f, "({}){{{},{}}}", subnode, min, max),
            Node::Complement(subnode) => write!(f, "~({})", subnode),
            Node::Char(c) => write_char(f, *c),
            Node::CharRange{ from, to } => write!(f, "[\\{}-\\{}]", from, to),
            Node::AnyChar => f.write_str("."),
            Node::AnyString => f.write_str("@"),
            Node::Empty => f.write_str("#"),
            Node::LiteralString(s) => write_literal(f, s),
            Node::AutomatonRef(name) => write!(f, "<{}>", name),
            Node::Interval{ min, max, digits } =>
                write!(f, "<{:0width$}-{:0width$}>", min, max, width = *digits),
        }
    }
}

fn write_char(f: &mut fmt::Formatter<'_>, c: char) -> fmt::Result {
    if CLASS_ESCAPES.contains(c) {
        write!(f, "{}", c)
    }
    else {
        write!(f, "\\{}", c)
    }
}

/// Quoted literals have no escapes, so a string containing `"` is written as
/// a group of quoted pieces and escaped quotes.
fn write_literal(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    if !s.contains('"') {
        return write!(f, "\"{}\"", s);
    }

    f.write_str("(")?;
    for (i, piece) in s.split('"').enumerate() {
        if i > 0 {
            f.write_str("\\\"")?;
        }
        if !piece.is_empty() {
            write!(f, "\"{}\"", piece)?;
        }
    }
    f.write_str(")")
}

// Tests ///////////////////////////////////////////////////////////////////////
