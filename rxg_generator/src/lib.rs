/**
 * Generation of random strings matching an extended regex.
 */

extern crate rand;
extern crate rand_pcg;

mod error;
mod generator;
mod weights;

pub use error::GeneratorError;
pub use generator::Generator;
