
use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;
use rxg_generator::Generator;

pub fn seeded(pattern: &str, seed: u64) -> Generator<Pcg64Mcg> {
    Generator::new(pattern, Pcg64Mcg::seed_from_u64(seed)).unwrap()
}

/// Anchors a pattern for the `regex` crate, which searches by default.
pub fn anchored(pattern: &str) -> regex::Regex {
    regex::Regex::new(&format!("^(?:{})$", pattern)).unwrap()
}

/// Draws `count` strings from a freshly seeded generator.
pub fn samples(pattern: &str, seed: u64, count: usize) -> Vec<String> {
    let mut gen = seeded(pattern, seed);
    (0..count).map(|_| gen.generate()).collect()
}
