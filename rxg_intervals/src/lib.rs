
mod discrete;
mod interval;
mod interval_set;
mod interval_map;

pub use discrete::Discrete;
pub use interval::Interval;
pub use interval_set::IntervalSet;
pub use interval_map::{IntervalMap, Unification};
