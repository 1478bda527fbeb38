//! Read-race scaling under the allocation-metered clock.
//!
//! Kept in its own test binary: the metered clock reads process-global
//! allocation tallies, so no other test may run concurrently with it.

use racebench::{AllocClock, Corpus, CountingAllocator, Shape, read_race};

#[global_allocator]
static ALLOC: CountingAllocator = CountingAllocator;

fn synthetic_corpus(n: usize) -> Corpus {
    Corpus::from_records((0..n).map(|i| format!("record-{i:06}")).collect())
}

#[test]
fn doubling_the_corpus_never_shrinks_a_read_measurement() {
    let base = synthetic_corpus(1000);
    let doubled = synthetic_corpus(2000);

    let clock = AllocClock;
    let small = read_race(&base, &clock);
    let large = read_race(&doubled, &clock);

    for shape in Shape::ALL {
        assert!(
            large.get(shape) >= small.get(shape),
            "{} shrank: {} records -> {}, {} records -> {}",
            shape.label(),
            base.len(),
            small.get(shape),
            doubled.len(),
            large.get(shape),
        );
    }

    // The meter actually observed the construction work
    for shape in Shape::ALL {
        assert!(small.get(shape) > 0);
    }
}
