//! Determinism of the process-wide seed.
//!
//! Kept as a single test: every draw below goes through the shared
//! process-wide generator, and parallel tests in the same binary would
//! interleave their draws.

use samplespec::{Distribution, Normal, RandInt, Samples, Uniform, seed};

#[test]
fn reseeding_reproduces_the_draw_sequence() {
    let samplers = [
        Distribution::RandInt(RandInt::new(8, 100)),
        Distribution::Uniform(Uniform::new(8, 0.0, 1.0)),
        Distribution::Normal(Normal::new(8, 0.0, 1.0)),
    ];

    let run = || -> Vec<Samples> {
        seed(42);
        samplers.iter().map(Distribution::generate).collect()
    };

    let first = run();
    let second = run();
    assert_eq!(first, second);

    seed(43);
    let third: Vec<Samples> = samplers.iter().map(Distribution::generate).collect();
    assert_ne!(first, third);
}
