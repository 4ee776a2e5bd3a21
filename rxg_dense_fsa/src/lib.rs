/**
 * Dense finite automata over characters: an epsilon-NFA used as a scratch
 * space for composition, and a deterministic automaton that every public
 * operation produces.
 */

pub extern crate rxg_intervals;

pub mod nfa;
pub mod dfa;

mod basic;
mod numeric;
mod ops;
mod minimize;

pub use dfa::{Automaton, State, Transition};
