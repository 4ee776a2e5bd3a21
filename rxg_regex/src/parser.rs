/**
 * A recursive-descent parser for the extended regex syntax.
 */

use crate::alphabet::Alphabet;
use crate::ast::Node;
use crate::error::{SyntaxError, SyntaxErrorReason};
use crate::syntax::SyntaxOptions;

/*
 * Reference grammar for the parser:
 *
 * union       ::= inter ('|' union)?
 * inter       ::= concat ('&' inter)?              (INTERSECTION)
 * concat      ::= repeat concat?                   (until ')', '|' or '&')
 * repeat      ::= compl ('?' | '*' | '+' | '{' n (',' m?)? '}')*
 * compl       ::= '~' compl | class                (COMPLEMENT)
 * class       ::= '[' '^'? class_item+ ']' | simple
 * class_item  ::= char_exp ('-' char_exp)?         ('-' before ']' is literal)
 * simple      ::= '.'
 *               | '#'                              (EMPTY)
 *               | '@'                              (ANY_STRING)
 *               | '"' ANY_CHAR_BUT_QUOTE* '"'
 *               | '(' ('?' FLAG* ':'?)? ')'
 *               | '(' ('?' FLAG* ':'?)? union ')'
 *               | '<' IDENTIFIER '>'               (AUTOMATON)
 *               | '<' DIGITS '-' DIGITS '>'        (INTERVAL)
 *               | '\' ('d' | 'D' | 's' | 'S' | 'w' | 'W')
 *               | char_exp
 *               ;
 * char_exp    ::= '\'? ANY_CHAR
 */

/// Characters that may appear after `(?` as inline matching flags.
const INLINE_FLAGS: &str = "imnsx-";

/// A small helper to ease the Chars interface a bit, also tracking the
/// character offset for error reporting.
#[derive(Clone)]
struct Chars<'a> {
    it: std::str::Chars<'a>,
    pos: usize,
}

impl <'a> Chars<'a> {
    fn new(source: &'a str) -> Self {
        Self{ it: source.chars(), pos: 0 }
    }

    fn next(&self) -> Option<(char, Chars<'a>)> {
        let mut clone = self.clone();
        match clone.it.next() {
            Some(c) => Some((c, Chars{ it: clone.it, pos: clone.pos + 1 })),
            None => None,
        }
    }

    fn peek(&self) -> Option<char> {
        self.it.clone().next()
    }

    fn is_end(&self) -> bool {
        self.peek().is_none()
    }

    fn error(&self, reason: SyntaxErrorReason) -> SyntaxError {
        SyntaxError::new(self.pos, reason)
    }

    fn expect(&self, c: char) -> Result<Chars<'a>, SyntaxError> {
        match self.next() {
            Some((x, rest)) if x == c => Ok(rest),
            _ => Err(self.error(SyntaxErrorReason::Expected(c))),
        }
    }

    /// Consumes characters while they satisfy `pred`.
    fn take_while<F>(&self, pred: F) -> (String, Chars<'a>) where F : Fn(char) -> bool {
        let mut taken = String::new();
        let mut it = self.clone();
        while let Some((c, rest)) = it.next() {
            if !pred(c) {
                break;
            }
            taken.push(c);
            it = rest;
        }
        (taken, it)
    }
}

type ParseResult<'a, T> = Result<(T, Chars<'a>), SyntaxError>;

/**
 * Actual parsing.
 */

/// Parses a pattern with every syntax extension enabled and the default
/// alphabet.
pub fn parse(source: &str) -> Result<Node, SyntaxError> {
    parse_with(source, SyntaxOptions::ALL, None)
}

/// Parses a pattern. An empty pattern is the empty string.
pub fn parse_with(source: &str, options: SyntaxOptions, alphabet: Option<&Alphabet>) -> Result<Node, SyntaxError> {
    if source.is_empty() {
        return Ok(Node::literal(""));
    }

    let parser = Parser{ options, alphabet };
    let (node, it) = parser.parse_union(Chars::new(source))?;
    if !it.is_end() {
        return Err(it.error(SyntaxErrorReason::TrailingInput));
    }
    Ok(node)
}

struct Parser<'p> {
    options: SyntaxOptions,
    alphabet: Option<&'p Alphabet>,
}

impl <'p> Parser<'p> {
    fn enabled(&self, option: SyntaxOptions) -> bool {
        self.options.contains(option)
    }

    fn parse_union<'a>(&self, it: Chars<'a>) -> ParseResult<'a, Node> {
        let (first, it) = self.parse_inter(it)?;
        if let Some(('|', it)) = it.next() {
            let (second, it) = self.parse_union(it)?;
            Ok((Node::union(first, second), it))
        }
        else {
            Ok((first, it))
        }
    }

    fn parse_inter<'a>(&self, it: Chars<'a>) -> ParseResult<'a, Node> {
        let (first, it) = self.parse_concat(it)?;
        if self.enabled(SyntaxOptions::INTERSECTION) {
            if let Some(('&', it)) = it.next() {
                let (second, it) = self.parse_inter(it)?;
                return Ok((Node::intersection(first, second), it));
            }
        }
        Ok((first, it))
    }

    fn parse_concat<'a>(&self, it: Chars<'a>) -> ParseResult<'a, Node> {
        let (first, it) = self.parse_repeat(it)?;
        match it.peek() {
            Some(c) if !self.ends_concat(c) => {
                let (second, it) = self.parse_concat(it)?;
                Ok((Node::concat(first, second), it))
            },
            _ => Ok((first, it)),
        }
    }

    fn ends_concat(&self, c: char) -> bool {
        c == ')' || c == '|' || (c == '&' && self.enabled(SyntaxOptions::INTERSECTION))
    }

    fn parse_repeat<'a>(&self, it: Chars<'a>) -> ParseResult<'a, Node> {
        let (mut node, mut it) = self.parse_compl(it)?;
        loop {
            match it.next() {
                Some(('?', rest)) => {
                    node = Node::optional(node);
                    it = rest;
                },
                Some(('*', rest)) => {
                    node = Node::repeat(node);
                    it = rest;
                },
                Some(('+', rest)) => {
                    node = Node::repeat_at_least(node, 1);
                    it = rest;
                },
                Some(('{', rest)) => {
                    let open = it.pos;
                    let (min, rest) = parse_integer(rest)?;
                    let (max, rest) = match rest.next() {
                        Some((',', rest)) => match rest.peek() {
                            Some(c) if c.is_ascii_digit() => {
                                let (max, rest) = parse_integer(rest)?;
                                (Some(max), rest)
                            },
                            _ => (None, rest),
                        },
                        _ => (Some(min), rest),
                    };
                    let rest = rest.expect('}')?;

                    node = match max {
                        None => Node::repeat_at_least(node, min),
                        Some(max) if min > max =>
                            return Err(SyntaxError::new(open, SyntaxErrorReason::RepeatBoundsOrder{ min, max })),
                        Some(max) => Node::repeat_between(node, min, max),
                    };
                    it = rest;
                },
                _ => return Ok((node, it)),
            }
        }
    }

    fn parse_compl<'a>(&self, it: Chars<'a>) -> ParseResult<'a, Node> {
        if self.enabled(SyntaxOptions::COMPLEMENT) {
            if let Some(('~', it)) = it.next() {
                let (subnode, it) = self.parse_compl(it)?;
                return Ok((Node::complement(subnode), it));
            }
        }
        self.parse_char_class(it)
    }

    fn parse_char_class<'a>(&self, it: Chars<'a>) -> ParseResult<'a, Node> {
        if let Some(('[', it)) = it.next() {
            let (negated, it) = match it.next() {
                Some(('^', rest)) => (true, rest),
                _ => (false, it),
            };
            let (items, it) = parse_class_items(it)?;
            let it = it.expect(']')?;
            let node = if negated { Node::exclude_chars(items) } else { items };
            Ok((node, it))
        }
        else {
            self.parse_simple(it)
        }
    }

    fn parse_simple<'a>(&self, it: Chars<'a>) -> ParseResult<'a, Node> {
        match it.next() {
            Some(('.', rest)) => Ok((Node::AnyChar, rest)),
            Some(('#', rest)) if self.enabled(SyntaxOptions::EMPTY) => Ok((Node::Empty, rest)),
            Some(('@', rest)) if self.enabled(SyntaxOptions::ANY_STRING) => Ok((Node::AnyString, rest)),
            Some(('"', rest)) => parse_quoted(rest),
            Some(('(', rest)) => self.parse_group(rest),
            Some(('<', rest)) if self.enabled(SyntaxOptions::AUTOMATON) || self.enabled(SyntaxOptions::INTERVAL) =>
                self.parse_angle(rest),
            Some(('\\', rest)) => self.parse_escape(rest),
            Some((c, rest)) => Ok((Node::Char(c), rest)),
            None => Err(it.error(SyntaxErrorReason::UnexpectedEnd)),
        }
    }

    fn parse_group<'a>(&self, it: Chars<'a>) -> ParseResult<'a, Node> {
        // Inline flags and the non-capturing marker carry no meaning here
        let it = match it.next() {
            Some(('?', rest)) => {
                let (_, rest) = rest.take_while(|c| INLINE_FLAGS.contains(c));
                match rest.next() {
                    Some((':', rest)) => rest,
                    _ => rest,
                }
            },
            _ => it,
        };

        if let Some((')', it)) = it.next() {
            return Ok((Node::literal(""), it));
        }
        let (node, it) = self.parse_union(it)?;
        let it = it.expect(')')?;
        Ok((node, it))
    }

    /// Either `<identifier>` or `<min-max>`.
    fn parse_angle<'a>(&self, it: Chars<'a>) -> ParseResult<'a, Node> {
        let (text, it) = it.take_while(|c| c != '>');
        let close = it.pos;
        let it = it.expect('>')?;

        let dash = match text.find('-') {
            None if self.enabled(SyntaxOptions::AUTOMATON) => return Ok((Node::automaton_ref(text), it)),
            None => return Err(SyntaxError::new(close, SyntaxErrorReason::IntervalSyntax)),
            Some(_) if !self.enabled(SyntaxOptions::INTERVAL) =>
                return Err(SyntaxError::new(close, SyntaxErrorReason::IllegalIdentifier)),
            Some(dash) => dash,
        };

        let node = parse_interval(&text, dash).map_err(|reason| SyntaxError::new(close, reason))?;
        Ok((node, it))
    }

    fn parse_escape<'a>(&self, it: Chars<'a>) -> ParseResult<'a, Node> {
        match it.next() {
            Some((c, rest)) if "dDsSwW".contains(c) => Ok((self.class_escape(c), rest)),
            Some((c, rest)) => Ok((Node::Char(c), rest)),
            None => Err(it.error(SyntaxErrorReason::UnexpectedEnd)),
        }
    }

    /// The node for `\d`, `\s`, `\w` and their negated uppercase forms.
    fn class_escape(&self, c: char) -> Node {
        let kind = c.to_ascii_lowercase();
        let fixed = match kind {
            'd' => Node::char_range('0', '9'),
            's' => Node::union(Node::Char(' '), Node::Char('\t')),
            _ => vec![Node::char_range('A', 'Z'), Node::char_range('a', 'z'), Node::char_range('0', '9')]
                .into_iter()
                .fold(Node::Char('_'), Node::union),
        };

        let pred: fn(char) -> bool = match kind {
            'd' => is_digit_char,
            's' => char::is_whitespace,
            _ => is_word_char,
        };
        let negated = c.is_ascii_uppercase();
        match self.alphabet {
            // A class and its negation split the alphabet between them
            Some(alphabet) => Node::char_class(&alphabet.filter(|x| pred(x) != negated)),
            None if negated => Node::exclude_chars(fixed),
            None => fixed,
        }
    }
}

fn parse_class_items(it: Chars<'_>) -> ParseResult<'_, Node> {
    let (mut node, mut it) = parse_class_item(it)?;
    while let Some(c) = it.peek() {
        if c == ']' {
            break;
        }
        let (item, rest) = parse_class_item(it)?;
        node = Node::union(node, item);
        it = rest;
    }
    Ok((node, it))
}

fn parse_class_item(it: Chars<'_>) -> ParseResult<'_, Node> {
    let (from, it) = parse_char_exp(it)?;
    if let Some(('-', rest)) = it.next() {
        if rest.peek() == Some(']') {
            return Ok((Node::union(Node::Char(from), Node::Char('-')), rest));
        }
        let (to, rest) = parse_char_exp(rest)?;
        return Ok((Node::char_range(from, to), rest));
    }
    Ok((Node::Char(from), it))
}

fn parse_char_exp(it: Chars<'_>) -> ParseResult<'_, char> {
    let it = match it.next() {
        Some(('\\', rest)) => rest,
        _ => it,
    };
    match it.next() {
        Some((c, rest)) => Ok((c, rest)),
        None => Err(it.error(SyntaxErrorReason::UnexpectedEnd)),
    }
}

fn parse_quoted(it: Chars<'_>) -> ParseResult<'_, Node> {
    let (text, it) = it.take_while(|c| c != '"');
    let it = it.expect('"')?;
    Ok((Node::literal(text), it))
}

/// Repetition counts are limited to the `u32` range.
fn parse_integer(it: Chars<'_>) -> ParseResult<'_, usize> {
    let (digits, rest) = it.take_while(|c| c.is_ascii_digit());
    if digits.is_empty() {
        return Err(it.error(SyntaxErrorReason::IntegerExpected));
    }
    let value = digits.parse::<u32>().map_err(|_| it.error(SyntaxErrorReason::IntegerOverflow))?;
    Ok((value as usize, rest))
}

/// Parses `min-max` with the single dash at byte offset `dash`. Equal-length
/// bounds record their length as padding width.
fn parse_interval(text: &str, dash: usize) -> Result<Node, SyntaxErrorReason> {
    if dash == 0 || dash == text.len() - 1 || text.rfind('-') != Some(dash) {
        return Err(SyntaxErrorReason::IntervalSyntax);
    }

    let (lo, hi) = (&text[..dash], &text[dash + 1..]);
    if !lo.chars().chain(hi.chars()).all(|c| c.is_ascii_digit()) {
        return Err(SyntaxErrorReason::IntervalSyntax);
    }
    let min: u32 = lo.parse().map_err(|_| SyntaxErrorReason::IntegerOverflow)?;
    let max: u32 = hi.parse().map_err(|_| SyntaxErrorReason::IntegerOverflow)?;
    let digits = if lo.len() == hi.len() { lo.len() } else { 0 };

    let (min, max) = if min > max { (max, min) } else { (min, max) };
    Ok(Node::interval(min, max, digits))
}

fn is_digit_char(c: char) -> bool {
    c.is_ascii_digit()
}

fn is_word_char(c: char) -> bool {
    c.is_alphabetic() || c.is_ascii_digit() || c == '_'
}

// Tests ///////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod parser_tests {
    use super::*;
    use crate::error::SyntaxErrorReason::*;

    /**
     * Helpers to construct results.
     */

    fn alt(first: Node, second: Node) -> Node {
        Node::union(first, second)
    }

    fn seq(first: Node, second: Node) -> Node {
        Node::concat_unfolded(first, second)
    }

    fn ch(c: char) -> Node {
        Node::Char(c)
    }

    fn lit(s: &str) -> Node {
        Node::literal(s)
    }

    fn rng(a: char, b: char) -> Node {
        Node::char_range(a, b)
    }

    fn star(subnode: Node) -> Node {
        Node::repeat(subnode)
    }

    fn err(position: usize, reason: SyntaxErrorReason) -> Result<Node, SyntaxError> {
        Err(SyntaxError::new(position, reason))
    }

    fn parse_opts(source: &str, options: SyntaxOptions) -> Result<Node, SyntaxError> {
        parse_with(source, options, None)
    }

    /**
     * Actual tests.
     */

    #[test]
    fn empty_pattern() {
        assert_eq!(parse(""), Ok(lit("")));
    }

    #[test]
    fn a_or_b_or_c() {
        assert_eq!(parse(r"a|b|c"), Ok(alt(ch('a'), alt(ch('b'), ch('c')))));
    }

    #[test]
    fn literal_runs_fold() {
        assert_eq!(parse(r"abc"), Ok(lit("abc")));
        assert_eq!(parse(r"ab|cd"), Ok(alt(lit("ab"), lit("cd"))));
    }

    #[test]
    fn a_b_or_c_d() {
        assert_eq!(parse(r"a(b|c)d"), Ok(seq(ch('a'), seq(alt(ch('b'), ch('c')), ch('d')))));
    }

    #[test]
    fn a_then_b_zero_or_more() {
        assert_eq!(parse(r"ab*"), Ok(seq(ch('a'), star(ch('b')))));
    }

    #[test]
    fn ab_zero_or_more() {
        assert_eq!(parse(r"(ab)*"), Ok(star(lit("ab"))));
    }

    #[test]
    fn stacked_quantifiers() {
        assert_eq!(parse(r"a+?"), Ok(Node::optional(Node::repeat_at_least(ch('a'), 1))));
    }

    #[test]
    fn counted_repetition() {
        assert_eq!(parse(r"a{3}"), Ok(Node::repeat_between(ch('a'), 3, 3)));
        assert_eq!(parse(r"a{3,}"), Ok(Node::repeat_at_least(ch('a'), 3)));
        assert_eq!(parse(r"a{2,5}"), Ok(Node::repeat_between(ch('a'), 2, 5)));
        assert_eq!(parse(r"a{0,0}"), Ok(Node::repeat_between(ch('a'), 0, 0)));
    }

    #[test]
    fn counted_repetition_errors() {
        assert_eq!(parse(r"a{"), err(2, IntegerExpected));
        assert_eq!(parse(r"a{x}"), err(2, IntegerExpected));
        assert_eq!(parse(r"a{2"), err(3, Expected('}')));
        assert_eq!(parse(r"a{2,5"), err(5, Expected('}')));
        assert_eq!(parse(r"a{5,2}"), err(1, RepeatBoundsOrder{ min: 5, max: 2 }));
        assert_eq!(parse(r"a{99999999999999999999999}"), err(2, IntegerOverflow));
        assert_eq!(parse(r"a{4294967296}"), err(2, IntegerOverflow));
        assert_eq!(parse(r"a{1,18446744073709551615}"), err(4, IntegerOverflow));
        assert_eq!(parse(r"a{4294967295,}"), Ok(Node::repeat_at_least(ch('a'), 4294967295)));
    }

    #[test]
    fn a_to_c_and_f_to_h_group() {
        assert_eq!(parse(r"[a-cf-h]"), Ok(alt(rng('a', 'c'), rng('f', 'h'))));
    }

    #[test]
    fn class_with_trailing_dash() {
        assert_eq!(parse(r"[a-]"), Ok(alt(ch('a'), ch('-'))));
        assert_eq!(parse(r"[-a]"), Ok(alt(ch('-'), ch('a'))));
    }

    #[test]
    fn class_escapes_inside() {
        assert_eq!(parse(r"[\]\-]"), Ok(alt(ch(']'), ch('-'))));
    }

    #[test]
    fn negated_class() {
        assert_eq!(
            parse(r"[^abc]"),
            Ok(Node::exclude_chars(alt(alt(ch('a'), ch('b')), ch('c')))));
        assert_eq!(
            parse(r"[^a]"),
            Ok(Node::intersection(Node::AnyChar, Node::complement(ch('a')))));
    }

    #[test]
    fn unterminated_class() {
        assert_eq!(parse(r"[ab"), err(3, Expected(']')));
        assert_eq!(parse(r"[a-"), err(3, UnexpectedEnd));
    }

    #[test]
    fn unclosed_group() {
        assert_eq!(parse(r"(a"), err(2, Expected(')')));
    }

    #[test]
    fn trailing_input() {
        assert_eq!(parse(r"a)"), err(1, TrailingInput));
        assert_eq!(parse(r"ab)c"), err(2, TrailingInput));
    }

    #[test]
    fn empty_and_noncapturing_groups() {
        assert_eq!(parse(r"()"), Ok(lit("")));
        assert_eq!(parse(r"(?:ab)"), Ok(lit("ab")));
        assert_eq!(parse(r"(?i)"), Ok(lit("")));
        assert_eq!(parse(r"(?-i:x)y"), Ok(lit("xy")));
    }

    #[test]
    fn quoted_literals() {
        assert_eq!(parse(r#""a|b"c"#), Ok(lit("a|bc")));
        assert_eq!(parse(r#""abc"#), err(4, Expected('"')));
    }

    #[test]
    fn special_atoms() {
        assert_eq!(parse(r"."), Ok(Node::AnyChar));
        assert_eq!(parse(r"#"), Ok(Node::Empty));
        assert_eq!(parse(r"@"), Ok(Node::AnyString));
        assert_eq!(parse(r"~a"), Ok(Node::complement(ch('a'))));
        assert_eq!(parse(r"a&b"), Ok(Node::intersection(ch('a'), ch('b'))));
    }

    #[test]
    fn disabled_extensions_are_literals() {
        let none = SyntaxOptions::NONE;
        assert_eq!(parse_opts(r"#", none), Ok(ch('#')));
        assert_eq!(parse_opts(r"a&b", none), Ok(lit("a&b")));
        assert_eq!(parse_opts(r"~@", none), Ok(lit("~@")));
        assert_eq!(parse_opts(r"<x>", none), Ok(lit("<x>")));
    }

    #[test]
    fn automaton_refs() {
        assert_eq!(parse(r"<name>"), Ok(Node::automaton_ref("name")));
        assert_eq!(parse_opts(r"<name>", SyntaxOptions::INTERVAL), err(5, IntervalSyntax));
        assert_eq!(parse(r"<name"), err(5, Expected('>')));
    }

    #[test]
    fn intervals() {
        assert_eq!(parse(r"<5-12>"), Ok(Node::interval(5, 12, 0)));
        assert_eq!(parse(r"<05-12>"), Ok(Node::interval(5, 12, 2)));
        assert_eq!(parse(r"<12-5>"), Ok(Node::interval(5, 12, 0)));
        assert_eq!(parse(r"<010-001>"), Ok(Node::interval(1, 10, 3)));
    }

    #[test]
    fn interval_errors() {
        assert_eq!(parse(r"<1-2-3>"), err(6, IntervalSyntax));
        assert_eq!(parse(r"<-5>"), err(3, IntervalSyntax));
        assert_eq!(parse(r"<5->"), err(3, IntervalSyntax));
        assert_eq!(parse(r"<a-b>"), err(4, IntervalSyntax));
        assert_eq!(parse_opts(r"<1-2>", SyntaxOptions::AUTOMATON), err(4, IllegalIdentifier));
        assert_eq!(parse(r"<1-99999999999>"), err(14, IntegerOverflow));
    }

    #[test]
    fn escapes() {
        assert_eq!(parse(r"\\"), Ok(ch('\\')));
        assert_eq!(parse(r"\*"), Ok(ch('*')));
        assert_eq!(parse(r"\d"), Ok(rng('0', '9')));
        assert_eq!(parse(r"\s"), Ok(alt(ch(' '), ch('\t'))));
        assert_eq!(parse(r"\D"), Ok(Node::exclude_chars(rng('0', '9'))));
        assert_eq!(parse(r"a\"), err(2, UnexpectedEnd));
    }

    #[test]
    fn escapes_with_alphabet() {
        let alphabet = Alphabet::from("ab1_-");
        let parse_ab = |s| parse_with(s, SyntaxOptions::ALL, Some(&alphabet));
        assert_eq!(parse_ab(r"\d"), Ok(ch('1')));
        assert_eq!(parse_ab(r"\w"), Ok(alt(alt(ch('1'), ch('_')), rng('a', 'b'))));
        assert_eq!(parse_ab(r"\s"), Ok(Node::Empty));
        assert_eq!(parse_ab(r"\D"), Ok(alt(alt(ch('-'), ch('_')), rng('a', 'b'))));
        assert_eq!(parse_ab(r"\W"), Ok(ch('-')));
        assert_eq!(parse_ab(r"\S"), Ok(alt(alt(alt(ch('-'), ch('1')), ch('_')), rng('a', 'b'))));
    }

    #[test]
    fn escapes_with_non_ascii_alphabet() {
        let alphabet = Alphabet::from("a\u{e9}1\u{bd}\u{b2} ");
        let parse_in = |s| parse_with(s, SyntaxOptions::ALL, Some(&alphabet));
        assert_eq!(parse_in(r"\d"), Ok(ch('1')));
        assert_eq!(parse_in(r"\w"), Ok(alt(alt(ch('1'), ch('a')), ch('\u{e9}'))));
        assert_eq!(parse_in(r"\W"), Ok(alt(alt(ch(' '), ch('\u{b2}')), ch('\u{bd}'))));
    }

    #[test]
    fn unicode_positions() {
        assert_eq!(parse("éé)"), err(2, TrailingInput));
    }
}
