//! Operation Runners
//!
//! Each runner builds a fresh instance of every shape from the corpus and
//! times exactly the operation under test. Construction cost is the subject
//! of the Read race; everywhere else it is kept outside the clock, the same
//! setup/measure split a bencher uses for `iter_with_setup`. No container
//! instance is ever reused across operations or trials.

use std::collections::{BTreeSet, LinkedList};
use std::hint::black_box;

use crate::clock::Clock;
use crate::corpus::Corpus;
use crate::{Operation, Shape};

/// Probe record inserted at the structural midpoint during the Insert race.
pub const MIDPOINT_PROBE: &str = "TESTCODE";

/// One elapsed-microsecond reading per shape, from a single runner pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Timings {
    cells: [u64; Shape::COUNT],
}

impl Timings {
    /// Reading for `shape`, in whole microseconds.
    pub fn get(self, shape: Shape) -> u64 {
        self.cells[shape.index()]
    }

    fn set(&mut self, shape: Shape, micros: u64) {
        self.cells[shape.index()] = micros;
    }
}

/// Run one operation race over the corpus, timing through `clock`.
pub fn run_operation(op: Operation, corpus: &Corpus, clock: &impl Clock) -> Timings {
    match op {
        Operation::Read => read_race(corpus, clock),
        Operation::Sort => sort_race(corpus, clock),
        Operation::Insert => insert_race(corpus, clock),
        Operation::Delete => delete_race(corpus, clock),
    }
}

/// Read race: construction is the operation under test, so the clock wraps
/// it. The set deduplicates and reorders by key as it fills, by nature.
pub fn read_race(corpus: &Corpus, clock: &impl Clock) -> Timings {
    let records = corpus.records();
    let mut timings = Timings::default();

    let mut vec = Vec::new();
    timings.set(
        Shape::Vector,
        clock.measure(&mut || {
            vec = records.to_vec();
        }),
    );
    black_box(&vec);

    let mut list = LinkedList::new();
    timings.set(
        Shape::List,
        clock.measure(&mut || {
            list = records.iter().cloned().collect();
        }),
    );
    black_box(&list);

    let mut set = BTreeSet::new();
    timings.set(
        Shape::Set,
        clock.measure(&mut || {
            set = records.iter().cloned().collect();
        }),
    );
    black_box(&set);

    timings
}

/// Sort race: each shape is constructed before its clock starts.
pub fn sort_race(corpus: &Corpus, clock: &impl Clock) -> Timings {
    let records = corpus.records();
    let mut timings = Timings::default();

    let mut vec = records.to_vec();
    timings.set(Shape::Vector, clock.measure(&mut || vec.sort_unstable()));
    black_box(&vec);

    let mut list: LinkedList<String> = records.iter().cloned().collect();
    timings.set(Shape::List, clock.measure(&mut || list_sort(&mut list)));
    black_box(&list);

    // Sortedness is a standing invariant of the set: it is sorted the moment
    // construction finishes, so there is no work to time. The measured cost
    // is the literal 0, never a stopped-clock subtraction or a negative
    // sentinel conflated with the timing unit.
    let set: BTreeSet<String> = records.iter().cloned().collect();
    black_box(&set);
    timings.set(Shape::Set, 0);

    timings
}

/// Insert race: one probe record at the structural midpoint, timed against
/// pre-built instances. The set ignores positional intent and places the
/// probe by key order.
pub fn insert_race(corpus: &Corpus, clock: &impl Clock) -> Timings {
    let records = corpus.records();
    let mut timings = Timings::default();

    let mut vec = records.to_vec();
    timings.set(
        Shape::Vector,
        clock.measure(&mut || vec_insert_midpoint(&mut vec, MIDPOINT_PROBE.to_string())),
    );
    black_box(&vec);

    let mut list: LinkedList<String> = records.iter().cloned().collect();
    timings.set(
        Shape::List,
        clock.measure(&mut || list_insert_midpoint(&mut list, MIDPOINT_PROBE.to_string())),
    );
    black_box(&list);

    let mut set: BTreeSet<String> = records.iter().cloned().collect();
    timings.set(
        Shape::Set,
        clock.measure(&mut || {
            set.insert(MIDPOINT_PROBE.to_string());
        }),
    );
    black_box(&set);

    timings
}

/// Delete race: remove the element at the structural midpoint, timed against
/// pre-built instances. On an empty corpus there is nothing to remove and
/// the operation is a timed no-op (the midpoint clamps to the boundary).
pub fn delete_race(corpus: &Corpus, clock: &impl Clock) -> Timings {
    let records = corpus.records();
    let mut timings = Timings::default();

    let mut vec = records.to_vec();
    timings.set(
        Shape::Vector,
        clock.measure(&mut || vec_remove_midpoint(&mut vec)),
    );
    black_box(&vec);

    let mut list: LinkedList<String> = records.iter().cloned().collect();
    timings.set(
        Shape::List,
        clock.measure(&mut || list_remove_midpoint(&mut list)),
    );
    black_box(&list);

    let mut set: BTreeSet<String> = records.iter().cloned().collect();
    timings.set(
        Shape::Set,
        clock.measure(&mut || set_remove_midpoint(&mut set)),
    );
    black_box(&set);

    timings
}

/// Insert `record` at index `len/2`. Empty sequence: index 0, the start.
fn vec_insert_midpoint(vec: &mut Vec<String>, record: String) {
    let mid = vec.len() / 2;
    vec.insert(mid, record);
}

/// Remove the element at index `len/2`, if any.
fn vec_remove_midpoint(vec: &mut Vec<String>) {
    if !vec.is_empty() {
        vec.remove(vec.len() / 2);
    }
}

/// Splice `record` in front of the `len/2`-th node. The split walks to the
/// midpoint, which is the cost under measurement. Empty list: front.
fn list_insert_midpoint(list: &mut LinkedList<String>, record: String) {
    let mut tail = list.split_off(list.len() / 2);
    tail.push_front(record);
    list.append(&mut tail);
}

/// Drop the `len/2`-th node, if any.
fn list_remove_midpoint(list: &mut LinkedList<String>) {
    if list.is_empty() {
        return;
    }
    let mut tail = list.split_off(list.len() / 2);
    tail.pop_front();
    list.append(&mut tail);
}

/// Remove the `len/2`-th key in iteration order, if any.
fn set_remove_midpoint(set: &mut BTreeSet<String>) {
    let midpoint = set.iter().nth(set.len() / 2).cloned();
    if let Some(key) = midpoint {
        set.remove(&key);
    }
}

/// Sort a linked list through its own splice primitives: split in half,
/// sort each half, merge by splicing single front nodes. The same mechanism
/// a native list sort uses; `LinkedList` in std ships none of its own.
fn list_sort(list: &mut LinkedList<String>) {
    if list.len() < 2 {
        return;
    }
    let mut right = list.split_off(list.len() / 2);
    list_sort(list);
    list_sort(&mut right);

    let mut merged = LinkedList::new();
    while !list.is_empty() && !right.is_empty() {
        // Ties take the left node, keeping the merge stable.
        let source = if list.front() <= right.front() {
            &mut *list
        } else {
            &mut right
        };
        let rest = source.split_off(1);
        merged.append(source);
        *source = rest;
    }
    merged.append(list);
    merged.append(&mut right);
    *list = merged;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::{ScriptedClock, WallClock};

    fn corpus_bac() -> Corpus {
        Corpus::from_records(vec!["b".into(), "a".into(), "c".into()])
    }

    #[test]
    fn list_sort_orders_records() {
        let mut list: LinkedList<String> =
            ["b", "a", "c"].iter().map(|s| s.to_string()).collect();
        list_sort(&mut list);
        let sorted: Vec<_> = list.into_iter().collect();
        assert_eq!(sorted, ["a", "b", "c"]);
    }

    #[test]
    fn list_sort_matches_slice_sort_on_larger_input() {
        let records: Vec<String> = (0..257).map(|i| format!("rec{:03}", (i * 97) % 257)).collect();
        let mut list: LinkedList<String> = records.iter().cloned().collect();
        list_sort(&mut list);

        let mut expected = records;
        expected.sort_unstable();
        let sorted: Vec<_> = list.into_iter().collect();
        assert_eq!(sorted, expected);
    }

    #[test]
    fn vec_midpoint_insert_grows_three_to_four() {
        let mut vec: Vec<String> = ["b", "a", "c"].iter().map(|s| s.to_string()).collect();
        vec_insert_midpoint(&mut vec, MIDPOINT_PROBE.to_string());
        assert_eq!(vec.len(), 4);
        assert_eq!(vec[1], MIDPOINT_PROBE);
    }

    #[test]
    fn vec_midpoint_delete_shrinks_three_to_two() {
        let mut vec: Vec<String> = ["b", "a", "c"].iter().map(|s| s.to_string()).collect();
        vec_remove_midpoint(&mut vec);
        // The original index-1 element is gone
        assert_eq!(vec, ["b", "c"]);
    }

    #[test]
    fn list_midpoint_insert_lands_at_index_one_of_three() {
        let mut list: LinkedList<String> =
            ["b", "a", "c"].iter().map(|s| s.to_string()).collect();
        list_insert_midpoint(&mut list, MIDPOINT_PROBE.to_string());
        let records: Vec<_> = list.into_iter().collect();
        assert_eq!(records, ["b", MIDPOINT_PROBE, "a", "c"]);
    }

    #[test]
    fn list_midpoint_delete_drops_index_one_of_three() {
        let mut list: LinkedList<String> =
            ["b", "a", "c"].iter().map(|s| s.to_string()).collect();
        list_remove_midpoint(&mut list);
        let records: Vec<_> = list.into_iter().collect();
        assert_eq!(records, ["b", "c"]);
    }

    #[test]
    fn set_midpoint_delete_drops_middle_key() {
        let mut set: BTreeSet<String> = ["b", "a", "c"].iter().map(|s| s.to_string()).collect();
        set_remove_midpoint(&mut set);
        let remaining: Vec<_> = set.into_iter().collect();
        assert_eq!(remaining, ["a", "c"]);
    }

    #[test]
    fn midpoint_operations_clamp_on_empty_containers() {
        let mut vec: Vec<String> = Vec::new();
        vec_insert_midpoint(&mut vec, MIDPOINT_PROBE.to_string());
        assert_eq!(vec, [MIDPOINT_PROBE]);
        vec.clear();
        vec_remove_midpoint(&mut vec);
        assert!(vec.is_empty());

        let mut list: LinkedList<String> = LinkedList::new();
        list_insert_midpoint(&mut list, MIDPOINT_PROBE.to_string());
        assert_eq!(list.front().map(String::as_str), Some(MIDPOINT_PROBE));
        list.clear();
        list_remove_midpoint(&mut list);
        assert!(list.is_empty());

        let mut set: BTreeSet<String> = BTreeSet::new();
        set_remove_midpoint(&mut set);
        assert!(set.is_empty());
    }

    #[test]
    fn set_sort_cost_is_always_zero() {
        let corpus = corpus_bac();
        let timings = sort_race(&corpus, &WallClock);
        assert_eq!(timings.get(Shape::Set), 0);

        let bigger = Corpus::from_records((0..500).map(|i| format!("r{i:04}")).collect());
        assert_eq!(sort_race(&bigger, &WallClock).get(Shape::Set), 0);
    }

    #[test]
    fn races_never_mutate_the_corpus() {
        let corpus = corpus_bac();
        let before = corpus.records().to_vec();
        for op in Operation::ALL {
            run_operation(op, &corpus, &WallClock);
        }
        assert_eq!(corpus.records(), before.as_slice());
    }

    #[test]
    fn races_accept_an_empty_corpus() {
        let corpus = Corpus::from_records(Vec::new());
        let clock = ScriptedClock::constant(3);
        for op in Operation::ALL {
            let timings = run_operation(op, &corpus, &clock);
            for shape in Shape::ALL {
                // Every clocked cell carries the scripted reading; the set's
                // sort cell alone is the fixed zero.
                let expected = if op == Operation::Sort && shape == Shape::Set {
                    0
                } else {
                    3
                };
                assert_eq!(timings.get(shape), expected);
            }
        }
    }

    #[test]
    fn scripted_timings_land_in_shape_order() {
        let corpus = corpus_bac();
        let clock = ScriptedClock::new(vec![11, 22, 33]);
        let timings = read_race(&corpus, &clock);
        assert_eq!(timings.get(Shape::Vector), 11);
        assert_eq!(timings.get(Shape::List), 22);
        assert_eq!(timings.get(Shape::Set), 33);
    }
}
