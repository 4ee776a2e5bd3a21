/**
 * Syntactic analysis of the characters an expression can produce.
 */

use std::collections::BTreeSet;
use crate::alphabet::Alphabet;
use crate::ast::Node;

/// A conservative set of the characters the expression uses, derived from its
/// structure alone. `alphabet` is the active alphabet, the printable range
/// when absent.
///
/// An automaton reference contributes the characters of its name, as the
/// referenced automaton is unknown here.
pub fn used_alphabet(node: &Node, alphabet: Option<&Alphabet>) -> BTreeSet<char> {
    let mut result = BTreeSet::new();
    collect(node, alphabet, &mut result);
    result
}

fn universe(alphabet: Option<&Alphabet>) -> BTreeSet<char> {
    match alphabet {
        Some(alphabet) => alphabet.chars().iter().cloned().collect(),
        None => (' '..='~').collect(),
    }
}

fn collect(node: &Node, alphabet: Option<&Alphabet>, out: &mut BTreeSet<char>) {
    match node {
        Node::Union{ first, second } | Node::Concatenation{ first, second } => {
            collect(first, alphabet, out);
            collect(second, alphabet, out);
        },

        Node::Intersection{ first, second } => {
            let left = used_alphabet(first, alphabet);
            let right = used_alphabet(second, alphabet);
            out.extend(left.intersection(&right));
        },

        Node::Optional(subnode)
        | Node::Repeat(subnode)
        | Node::RepeatAtLeast{ subnode, .. }
        | Node::RepeatBetween{ subnode, .. } => collect(subnode, alphabet, out),

        Node::Complement(subnode) => {
            let excluded = used_alphabet(subnode, alphabet);
            out.extend(universe(alphabet).difference(&excluded));
        },

        Node::Char(c) => {
            out.insert(*c);
        },

        Node::CharRange{ from, to } => out.extend(*from..=*to),

        Node::AnyChar | Node::AnyString => out.extend(universe(alphabet)),

        Node::Empty => match alphabet {
            Some(alphabet) => out.extend(alphabet.filter(char::is_whitespace)),
            None => {
                out.insert(' ');
            },
        },

        Node::LiteralString(s) | Node::AutomatonRef(s) => out.extend(s.chars()),

        Node::Interval{ min, max, .. } => {
            out.extend(min.to_string().chars());
            out.extend(max.to_string().chars());
        },
    }
}

/// The names of every automaton reference in the expression.
pub fn identifiers(node: &Node) -> BTreeSet<String> {
    let mut result = BTreeSet::new();
    collect_identifiers(node, &mut result);
    result
}

fn collect_identifiers(node: &Node, out: &mut BTreeSet<String>) {
    match node {
        Node::Union{ first, second }
        | Node::Concatenation{ first, second }
        | Node::Intersection{ first, second } => {
            collect_identifiers(first, out);
            collect_identifiers(second, out);
        },

        Node::Optional(subnode)
        | Node::Repeat(subnode)
        | Node::RepeatAtLeast{ subnode, .. }
        | Node::RepeatBetween{ subnode, .. }
        | Node::Complement(subnode) => collect_identifiers(subnode, out),

        Node::AutomatonRef(name) => {
            out.insert(name.clone());
        },

        _ => {},
    }
}

// Tests ///////////////////////////////////////////////////////////////////////
