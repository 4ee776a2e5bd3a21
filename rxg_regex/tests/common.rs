
use proptest::prelude::*;
use rxg_regex::{Automaton, Compiler, Node};

/// Compiles a reference-free tree into its canonical minimal automaton.
pub fn language(node: &Node) -> Automaton {
    Compiler::new(None).compile(node).unwrap().minimized()
}

/// Anchors a pattern for the `regex` crate, which searches by default.
pub fn anchored(pattern: &str) -> regex::Regex {
    regex::Regex::new(&format!("^(?:{})$", pattern)).unwrap()
}

fn arb_char() -> impl Strategy<Value = char> {
    proptest::sample::select(vec!['a', 'b', 'c', 'd', 's', 'w', '*', '(', '"', '\\', '-', '<', '~'])
}

/// Only widths the textual form can express: equal-length bounds always
/// carry their length.
fn arb_interval(a: u32, b: u32, pad: bool) -> Node {
    let (min, max) = (a.min(b), a.max(b));
    let (lo_len, hi_len) = (min.to_string().len(), max.to_string().len());
    let digits = if lo_len == hi_len { lo_len } else if pad { 3 } else { 0 };
    Node::interval(min, max, digits)
}

fn arb_leaf() -> impl Strategy<Value = Node> {
    prop_oneof![
        arb_char().prop_map(Node::Char),
        (proptest::char::range('a', 'f'), proptest::char::range('a', 'f')).prop_map(|(a, b)| Node::char_range(a.min(b), a.max(b))),
        Just(Node::AnyChar),
        Just(Node::Empty),
        "[ab\"\\\\]{0,3}".prop_map(Node::literal),
        (0u32..30, 0u32..30, any::<bool>()).prop_map(|(a, b, pad)| arb_interval(a, b, pad)),
    ]
}

/// Reference-free trees in the shapes the parser produces.
pub fn arb_node() -> impl Strategy<Value = Node> {
    arb_leaf().prop_recursive(4, 16, 2, |inner| prop_oneof![
        (inner.clone(), inner.clone()).prop_map(|(a, b)| Node::union(a, b)),
        (inner.clone(), inner.clone()).prop_map(|(a, b)| Node::concat(a, b)),
        (inner.clone(), inner.clone()).prop_map(|(a, b)| Node::intersection(a, b)),
        inner.clone().prop_map(Node::optional),
        inner.clone().prop_map(Node::repeat),
        (inner.clone(), 0usize..3).prop_map(|(n, min)| Node::repeat_at_least(n, min)),
        (inner.clone(), 0usize..3, 0usize..3)
            .prop_map(|(n, a, b)| Node::repeat_between(n, a.min(b), a.max(b))),
        inner.prop_map(Node::complement),
    ])
}
