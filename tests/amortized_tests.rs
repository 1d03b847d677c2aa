//! Amortized-cost accounting checks
//!
//! The textbook analysis charges every operation its actual work plus the
//! change in `potential = trees + 2 * marks`. These tests replay operation
//! sequences and verify the per-operation bounds directly from the link and
//! cut counters, so they are deterministic and independent of timing.
//!
//! - insert: potential rises by exactly 1, no links or cuts
//! - meld: potential is additive, no links or cuts
//! - decrease_key: `cuts + Δpotential <= 4`
//! - delete_min: `links + Δtrees == rank(min) - 1`, hence bounded by the
//!   maximum rank
//!
//! Keys are spread with a multiplicative hash so the sequences are
//! reproducible without a random number generator.

use fibheap::rank::max_rank;
use fibheap::{FibonacciHeap, NodeHandle};

fn scatter(i: u64, n: u64) -> i64 {
    (i.wrapping_mul(2_654_435_761) % n) as i64
}

struct Snapshot {
    links: u64,
    cuts: u64,
    trees: usize,
    potential: usize,
}

impl Snapshot {
    fn take(heap: &FibonacciHeap) -> Self {
        Snapshot {
            links: heap.total_links(),
            cuts: heap.total_cuts(),
            trees: heap.tree_count(),
            potential: heap.potential(),
        }
    }

    fn potential_delta(&self, heap: &FibonacciHeap) -> i64 {
        heap.potential() as i64 - self.potential as i64
    }
}

/// Checked delete_min: returns the key after verifying the link identity
fn delete_min_checked(heap: &mut FibonacciHeap) -> i64 {
    let min = heap.find_min().unwrap();
    let rank = i64::from(heap.rank(min).unwrap());
    let len = heap.len();
    let before = Snapshot::take(heap);

    let key = heap.delete_min().unwrap();

    let links = (heap.total_links() - before.links) as i64;
    let trees_delta = heap.tree_count() as i64 - before.trees as i64;
    assert_eq!(links + trees_delta, rank - 1);
    assert_eq!(heap.total_cuts(), before.cuts);
    assert!(links + before.potential_delta(heap) <= max_rank(len) as i64);
    if !heap.is_empty() {
        assert!(heap.tree_count() <= max_rank(heap.len()) + 1);
    }
    key
}

/// Checked decrease_key: verifies the amortized O(1) bound
fn decrease_key_checked(heap: &mut FibonacciHeap, node: NodeHandle, delta: i64) {
    let before = Snapshot::take(heap);
    heap.decrease_key(node, delta).unwrap();
    let cuts = (heap.total_cuts() - before.cuts) as i64;
    assert!(
        cuts + before.potential_delta(heap) <= 4,
        "cuts {cuts}, potential {} -> {}",
        before.potential,
        heap.potential()
    );
    assert_eq!(heap.total_links(), before.links);
}

#[test]
fn test_insert_raises_potential_by_one() {
    let mut heap = FibonacciHeap::new();
    for i in 0..1_000 {
        let before = Snapshot::take(&heap);
        heap.insert(scatter(i, 10_000));
        assert_eq!(before.potential_delta(&heap), 1);
        assert_eq!(heap.total_links(), 0);
        assert_eq!(heap.total_cuts(), 0);
    }
}

#[test]
fn test_meld_potential_is_additive() {
    let mut a = FibonacciHeap::new();
    let handles: Vec<_> = (0..300).map(|i| a.insert(scatter(i, 1_000))).collect();
    delete_min_checked(&mut a);
    for &h in handles.iter().step_by(5) {
        if a.contains(h) && a.is_root(h) == Ok(false) {
            decrease_key_checked(&mut a, h, 1);
        }
    }

    let mut b: FibonacciHeap = (0..100).map(|i| scatter(i, 500)).collect();
    delete_min_checked(&mut b);

    let expected = a.potential() + b.potential();
    let (links, cuts) = (a.total_links(), a.total_cuts());
    a.meld(b);
    assert_eq!(a.potential(), expected);
    assert_eq!(a.total_links(), links);
    assert_eq!(a.total_cuts(), cuts);
}

#[test]
fn test_delete_min_link_identity_over_drain() {
    let n = 5_000;
    let mut heap: FibonacciHeap = (0..n).map(|i| scatter(i, n)).collect();
    let mut last = i64::MIN;
    while !heap.is_empty() {
        let key = delete_min_checked(&mut heap);
        assert!(key >= last);
        last = key;
    }
    // Every link hides one root, and each node was a root when inserted
    assert!(heap.total_links() <= n * (max_rank(n as usize) as u64 + 1));
}

#[test]
fn test_decrease_key_amortized_bound() {
    let n = 4_096;
    let mut heap = FibonacciHeap::new();
    let handles: Vec<_> = (0..n).map(|i| heap.insert(i as i64 * 4)).collect();
    delete_min_checked(&mut heap);

    // Pull keys from deep inside the trees below their parents, in an order
    // that repeatedly hits siblings so cascades happen
    let mut decreases = 0u64;
    for round in 0..4 {
        for i in (1..n).rev().step_by(3 + round) {
            if !heap.contains(handles[i]) {
                continue;
            }
            decrease_key_checked(&mut heap, handles[i], 3);
            decreases += 1;
        }
        delete_min_checked(&mut heap);
    }
    heap.check_invariants().unwrap();

    // Each decrease marks at most one node, and every cut past the first
    // consumes a mark
    assert!(heap.total_cuts() <= 2 * decreases);
}

#[test]
fn test_mixed_workload_bounds() {
    let mut heap = FibonacciHeap::new();
    let mut live: Vec<NodeHandle> = Vec::new();
    for i in 0..20_000u64 {
        match i % 5 {
            0 | 1 | 2 => live.push(heap.insert(scatter(i, 1 << 20))),
            3 => {
                if !heap.is_empty() {
                    delete_min_checked(&mut heap);
                }
            }
            _ => {
                live.retain(|&h| heap.contains(h));
                if let Some(&h) = live.get(scatter(i, live.len() as u64 + 1) as usize) {
                    decrease_key_checked(&mut heap, h, 1 + scatter(i, 1_000));
                }
            }
        }
    }
    heap.check_invariants().unwrap();
    let bound = max_rank(heap.len());
    for &h in live.iter().filter(|&&h| heap.contains(h)) {
        assert!(usize::from(heap.rank(h).unwrap()) <= bound);
    }
}

#[test]
fn test_delete_cost_matches_cut_plus_delete_min() {
    let mut heap: FibonacciHeap = (0..1_024).collect();
    let target = heap.insert(2_000);
    // 1024 nodes consolidate into a single tree
    delete_min_checked(&mut heap);
    assert_eq!(heap.tree_count(), 1);
    assert_eq!(heap.is_root(target), Ok(false));

    let before = Snapshot::take(&heap);
    let len = heap.len();
    assert_eq!(heap.delete(target), Ok(2_000));
    let cuts = heap.total_cuts() - before.cuts;
    let links = heap.total_links() - before.links;
    assert!(cuts >= 1);
    assert!(links as usize <= max_rank(len) + cuts as usize + 1);
}

/// Grows one path-shaped tree of `extra + 2` nodes with the handle of its
/// bottom node. Each round drops `top - 3`, which links `top - 2` over both
/// `top - 1` and the path; `top - 1` is then cut away and removed.
fn path_tree(extra: usize) -> (FibonacciHeap, NodeHandle, i64) {
    let mut heap = FibonacciHeap::new();
    let bottom = heap.insert(1);
    heap.insert(0);
    heap.insert(-1);
    heap.delete_min().unwrap();

    let mut top = 0;
    for _ in 0..extra {
        heap.insert(top - 3);
        heap.insert(top - 2);
        let spare = heap.insert(top - 1);
        heap.delete_min().unwrap();
        decrease_key_checked(&mut heap, spare, 1 << 40);
        heap.delete_min().unwrap();
        top -= 2;
    }
    (heap, bottom, top)
}

#[test]
fn test_cut_at_bottom_of_deep_path() {
    let (mut heap, bottom, top) = path_tree(2_000);
    assert_eq!(heap.tree_count(), 1);
    assert_eq!(heap.len(), 2_002);

    let cuts = heap.total_cuts();
    decrease_key_checked(&mut heap, bottom, 1 << 40);
    assert_eq!(heap.total_cuts(), cuts + 1);
    assert_eq!(heap.find_min(), Some(bottom));
    heap.check_invariants().unwrap();

    let dump = heap.dump().to_string();
    let expected = format!("\n{top} [rank=1 size=2001]\n");
    assert!(dump.contains(&expected), "{}", &dump[..200]);
}
