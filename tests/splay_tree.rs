use std::collections::BTreeMap;

use proptest::prelude::*;
use splay_tree::SplayTree;

/// The number of operations to perform in each proptest case.
const TEST_SIZE: usize = 10_000;

/// Generates random values in a range narrow enough to guarantee duplicates.
fn value_strategy() -> impl Strategy<Value = i64> {
    -5_000i64..5_000i64
}

/// The multiset contents a sequence of plain inserts should produce.
fn sorted_items(values: &[i64]) -> Vec<i64> {
    let mut sorted = values.to_vec();
    sorted.sort_unstable();
    sorted
}

// ─── Model multiset oracle ───────────────────────────────────────────────────

/// A reference multiset backed by per-value occurrence counts.
#[derive(Default)]
struct Model {
    counts: BTreeMap<i64, usize>,
    len: usize,
}

impl Model {
    fn insert(&mut self, value: i64) {
        *self.counts.entry(value).or_insert(0) += 1;
        self.len += 1;
    }

    /// Removes one occurrence. Returns `true` if the value was present.
    fn remove(&mut self, value: i64) -> bool {
        let Some(count) = self.counts.get_mut(&value) else {
            return false;
        };
        *count -= 1;
        if *count == 0 {
            self.counts.remove(&value);
        }
        self.len -= 1;
        true
    }

    fn pop(&mut self) -> Option<i64> {
        let (&value, _) = self.counts.iter().next()?;
        self.remove(value);
        Some(value)
    }

    fn contains(&self, value: i64) -> bool {
        self.counts.contains_key(&value)
    }

    fn min(&self) -> Option<i64> {
        self.counts.keys().next().copied()
    }

    fn max(&self) -> Option<i64> {
        self.counts.keys().next_back().copied()
    }

    fn items(&self) -> Vec<i64> {
        self.counts
            .iter()
            .flat_map(|(&value, &count)| std::iter::repeat(value).take(count))
            .collect()
    }
}

// ─── Operations enum for driving randomized tests ────────────────────────────

#[derive(Debug, Clone)]
enum TreeOp {
    Insert(i64),
    Add(i64),
    Remove(i64),
    Pop,
    Find(i64),
    Contains(i64),
}

fn tree_op_strategy() -> impl Strategy<Value = TreeOp> {
    prop_oneof![
        6 => value_strategy().prop_map(TreeOp::Insert),
        2 => value_strategy().prop_map(TreeOp::Add),
        4 => value_strategy().prop_map(TreeOp::Remove),
        2 => Just(TreeOp::Pop),
        3 => value_strategy().prop_map(TreeOp::Find),
        3 => value_strategy().prop_map(TreeOp::Contains),
    ]
}

// ─── Core CRUD operations ────────────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    /// Replays a random sequence of mutating and searching operations on both
    /// SplayTree and the count-based model and asserts identical results at
    /// every step.
    #[test]
    fn tree_ops_match_model(ops in proptest::collection::vec(tree_op_strategy(), TEST_SIZE)) {
        let mut tree: SplayTree<i64> = SplayTree::new();
        let mut model = Model::default();

        for op in &ops {
            match op {
                TreeOp::Insert(v) => {
                    let id = tree.insert(*v);
                    model.insert(*v);
                    prop_assert_eq!(tree.item(id), v, "insert({}) returned a foreign handle", v);
                    prop_assert_eq!(tree.root(), Some(id), "insert({}) did not splay to the root", v);
                }
                TreeOp::Add(v) => {
                    let was_present = model.contains(*v);
                    let id = tree.add(*v);
                    if !was_present {
                        model.insert(*v);
                    }
                    prop_assert_eq!(tree.item(id), v, "add({}) returned a foreign handle", v);
                }
                TreeOp::Remove(v) => {
                    let expected = model.remove(*v).then_some(*v);
                    prop_assert_eq!(tree.remove(v), expected, "remove({})", v);
                }
                TreeOp::Pop => {
                    prop_assert_eq!(tree.pop(), model.pop(), "pop()");
                }
                TreeOp::Find(v) => {
                    let found = tree.find(v);
                    prop_assert_eq!(found.is_some(), model.contains(*v), "find({})", v);
                    if let Some(id) = found {
                        prop_assert_eq!(tree.item(id), v, "find({}) returned a foreign handle", v);
                        prop_assert_eq!(tree.root(), Some(id), "find({}) did not splay to the root", v);
                    }
                }
                TreeOp::Contains(v) => {
                    prop_assert_eq!(tree.contains(v), model.contains(*v), "contains({})", v);
                }
            }
            prop_assert_eq!(tree.len(), model.len, "len mismatch after {:?}", op);
            prop_assert_eq!(tree.is_empty(), model.len == 0, "is_empty mismatch after {:?}", op);
            prop_assert_eq!(tree.min().copied(), model.min(), "min mismatch after {:?}", op);
            prop_assert_eq!(tree.max().copied(), model.max(), "max mismatch after {:?}", op);
        }

        let items: Vec<_> = tree.iter().copied().collect();
        prop_assert_eq!(items, model.items(), "final contents mismatch");
    }

    /// Tests that iteration yields the inserted multiset in sorted order, in
    /// all three flavors: borrowed, reversed, and owning.
    #[test]
    fn iter_yields_sorted_multiset(values in proptest::collection::vec(value_strategy(), TEST_SIZE)) {
        let tree: SplayTree<i64> = values.iter().copied().collect();
        let expected = sorted_items(&values);

        let forward: Vec<_> = tree.iter().copied().collect();
        prop_assert_eq!(&forward, &expected, "iter() mismatch");

        let reverse: Vec<_> = tree.iter().rev().copied().collect();
        let mut expected_rev = expected.clone();
        expected_rev.reverse();
        prop_assert_eq!(&reverse, &expected_rev, "iter().rev() mismatch");

        let owned: Vec<_> = tree.into_iter().collect();
        prop_assert_eq!(&owned, &expected, "into_iter() mismatch");
    }

    /// Tests ExactSizeIterator and interleaved DoubleEndedIterator behavior.
    #[test]
    fn iter_size_and_double_ended(values in proptest::collection::vec(value_strategy(), 1..TEST_SIZE)) {
        let tree: SplayTree<i64> = values.iter().copied().collect();
        let expected = sorted_items(&values);

        let iter = tree.iter();
        prop_assert_eq!(iter.len(), tree.len(), "ExactSizeIterator len mismatch");

        // Alternating front/back consumption must meet in the middle without
        // yielding anything twice.
        let mut from_front = Vec::new();
        let mut from_back = Vec::new();
        let mut iter = tree.iter();
        let mut toggle = true;
        loop {
            if toggle {
                if let Some(item) = iter.next() {
                    from_front.push(*item);
                } else {
                    break;
                }
            } else if let Some(item) = iter.next_back() {
                from_back.push(*item);
            } else {
                break;
            }
            toggle = !toggle;
        }

        from_back.reverse();
        from_front.extend(from_back);
        prop_assert_eq!(&from_front, &expected, "interleaved iteration mismatch");
    }

    /// Tests retain keeps exactly the matching occurrences, in order.
    #[test]
    fn retain_keeps_matching_items(values in proptest::collection::vec(value_strategy(), TEST_SIZE)) {
        let mut tree: SplayTree<i64> = values.iter().copied().collect();
        tree.retain(|v| v % 3 != 0);

        let items: Vec<_> = tree.iter().copied().collect();
        let expected: Vec<_> = sorted_items(&values).into_iter().filter(|v| v % 3 != 0).collect();
        prop_assert_eq!(&items, &expected, "retain mismatch");
    }

    /// Tests append moves every occurrence across and empties the source.
    #[test]
    fn append_merges_multisets(
        values_a in proptest::collection::vec(value_strategy(), TEST_SIZE / 2),
        values_b in proptest::collection::vec(value_strategy(), TEST_SIZE / 2),
    ) {
        let mut tree_a: SplayTree<i64> = values_a.iter().copied().collect();
        let mut tree_b: SplayTree<i64> = values_b.iter().copied().collect();

        tree_a.append(&mut tree_b);

        prop_assert_eq!(tree_b.len(), 0, "append did not empty source");

        let mut merged = values_a.clone();
        merged.extend_from_slice(&values_b);
        let items: Vec<_> = tree_a.iter().copied().collect();
        prop_assert_eq!(&items, &sorted_items(&merged), "append content mismatch");
    }

    /// Tests clear empties the tree.
    #[test]
    fn clear_empties_tree(values in proptest::collection::vec(value_strategy(), TEST_SIZE)) {
        let mut tree: SplayTree<i64> = values.iter().copied().collect();
        tree.clear();
        prop_assert!(tree.is_empty());
        prop_assert_eq!(tree.len(), 0);
        prop_assert_eq!(tree.iter().count(), 0);
    }

    /// Tests get answers probes without disturbing the tree's contents.
    #[test]
    fn get_matches_model(
        values in proptest::collection::vec(value_strategy(), TEST_SIZE),
        probes in proptest::collection::vec(value_strategy(), 1_000),
    ) {
        let tree: SplayTree<i64> = values.iter().copied().collect();
        let model: Model = {
            let mut model = Model::default();
            for &v in &values {
                model.insert(v);
            }
            model
        };

        for p in &probes {
            let expected = model.contains(*p).then_some(*p);
            prop_assert_eq!(tree.get(p).copied(), expected, "get({})", p);
        }
    }

    /// Tests Extend inserts every element, duplicates included.
    #[test]
    fn extend_keeps_duplicates(
        initial in proptest::collection::vec(value_strategy(), TEST_SIZE / 2),
        extra in proptest::collection::vec(value_strategy(), TEST_SIZE / 2),
    ) {
        let mut tree: SplayTree<i64> = initial.iter().copied().collect();
        tree.extend(extra.iter().copied());

        prop_assert_eq!(tree.len(), initial.len() + extra.len(), "extend dropped occurrences");

        let mut merged = initial.clone();
        merged.extend_from_slice(&extra);
        let items: Vec<_> = tree.iter().copied().collect();
        prop_assert_eq!(&items, &sorted_items(&merged), "extend content mismatch");
    }
}

// ─── Trait implementations ───────────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    /// Tests FromIterator builds the same multiset as repeated insert.
    #[test]
    fn from_iter_matches_inserts(values in proptest::collection::vec(value_strategy(), TEST_SIZE)) {
        let collected: SplayTree<i64> = values.iter().copied().collect();

        let mut inserted: SplayTree<i64> = SplayTree::new();
        for &v in &values {
            inserted.insert(v);
        }

        prop_assert_eq!(collected.len(), inserted.len());
        prop_assert!(collected == inserted, "FromIterator and insert built different trees");
    }

    /// Tests Clone copies the contents, carries handles over, and leaves the
    /// trees independent afterwards.
    #[test]
    fn clone_preserves_contents_and_handles(values in proptest::collection::vec(value_strategy(), 1..1_000)) {
        let tree: SplayTree<i64> = values.iter().copied().collect();
        let mut cloned = tree.clone();

        prop_assert_eq!(tree.len(), cloned.len());
        let original: Vec<_> = tree.iter().copied().collect();
        let copied: Vec<_> = cloned.iter().copied().collect();
        prop_assert_eq!(&original, &copied, "clone content mismatch");

        // Handles minted by the original address the same items in the clone.
        for id in tree.nodes() {
            prop_assert_eq!(cloned.item(id), tree.item(id), "handle does not carry over");
        }

        // Mutating the clone leaves the original untouched.
        cloned.pop();
        cloned.insert(9_999);
        let after: Vec<_> = tree.iter().copied().collect();
        prop_assert_eq!(&after, &original, "clone is not independent");
    }

    /// Tests PartialEq compares contents, not insertion order or shape.
    #[test]
    fn eq_ignores_insertion_order(values in proptest::collection::vec(value_strategy(), TEST_SIZE / 2)) {
        let forward: SplayTree<i64> = values.iter().copied().collect();
        let backward: SplayTree<i64> = values.iter().rev().copied().collect();

        prop_assert!(forward == backward, "insertion order leaked into equality");

        let mut shorter = forward.clone();
        if shorter.pop().is_some() {
            prop_assert!(forward != shorter, "trees of different length compare equal");
        }
    }

    /// Tests Hash agrees with PartialEq: equal trees hash identically.
    #[test]
    fn hash_consistent_for_equal_trees(values in proptest::collection::vec(value_strategy(), TEST_SIZE / 2)) {
        use std::hash::{DefaultHasher, Hash, Hasher};

        let forward: SplayTree<i64> = values.iter().copied().collect();
        let backward: SplayTree<i64> = values.iter().rev().copied().collect();

        let mut h1 = DefaultHasher::new();
        let mut h2 = DefaultHasher::new();
        forward.hash(&mut h1);
        backward.hash(&mut h2);

        prop_assert_eq!(h1.finish(), h2.finish(), "equal trees should have equal hashes");
    }
}

// ─── Deterministic insertion pattern tests ───────────────────────────────────

/// Helper function to generate deterministic pseudo-random values using LCG.
fn random_values_deterministic(n: usize) -> Vec<i64> {
    let mut values = Vec::with_capacity(n);
    let mut x: u64 = 12345; // Fixed seed for reproducibility
    for _ in 0..n {
        x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
        values.push((x >> 33) as i64);
    }
    values
}

mod insertion_pattern_tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const N: usize = 10_000;

    /// Tests ascending inserts, the worst case for tree shape, still produce
    /// sorted contents.
    #[test]
    fn ordered_inserts_stay_sorted() {
        let mut tree: SplayTree<i64> = SplayTree::new();
        for i in 0..N as i64 {
            tree.insert(i);
        }

        assert_eq!(tree.len(), N);
        assert_eq!(tree.min(), Some(&0));
        assert_eq!(tree.max(), Some(&(N as i64 - 1)));

        let items: Vec<_> = tree.iter().copied().collect();
        let expected: Vec<_> = (0..N as i64).collect();
        assert_eq!(items, expected, "ordered inserts content mismatch");
    }

    /// Tests descending inserts mirror the ascending case.
    #[test]
    fn reverse_ordered_inserts_stay_sorted() {
        let mut tree: SplayTree<i64> = SplayTree::new();
        for i in (0..N as i64).rev() {
            tree.insert(i);
        }

        assert_eq!(tree.len(), N);

        let items: Vec<_> = tree.iter().copied().collect();
        let expected: Vec<_> = (0..N as i64).collect();
        assert_eq!(items, expected, "reverse ordered inserts content mismatch");
    }

    /// Tests random inserts keep every occurrence.
    #[test]
    fn random_inserts_keep_all_occurrences() {
        let values = random_values_deterministic(N);
        let tree: SplayTree<i64> = values.iter().copied().collect();

        assert_eq!(tree.len(), N);

        let items: Vec<_> = tree.iter().copied().collect();
        assert_eq!(items, sorted_items(&values), "random inserts content mismatch");
    }

    /// Tests a full ascending find sweep over a degenerate tree. Sequential
    /// access is the pattern splaying is built for; each find brings the next
    /// item near the root, so the sweep must stay fast despite the initial
    /// chain shape.
    #[test]
    fn sequential_finds_traverse_a_degenerate_tree() {
        let mut tree: SplayTree<i64> = SplayTree::new();
        for i in 0..N as i64 {
            tree.insert(i);
        }

        for i in 0..N as i64 {
            let id = tree.find(&i).expect("value was inserted");
            assert_eq!(tree.item(id), &i);
            assert_eq!(tree.root(), Some(id), "find({i}) did not splay to the root");
        }

        assert_eq!(tree.len(), N, "finds must not change the contents");
    }

    /// Tests popping drains a randomly built tree in sorted order.
    #[test]
    fn pops_drain_in_sorted_order() {
        let values = random_values_deterministic(N);
        let mut tree: SplayTree<i64> = values.iter().copied().collect();

        let mut drained = Vec::with_capacity(N);
        while let Some(value) = tree.pop() {
            drained.push(value);
        }

        assert_eq!(drained, sorted_items(&values), "pop drain mismatch");
        assert!(tree.is_empty());
        assert_eq!(tree.pop(), None);
    }

    /// Tests node handles keep addressing their item through arbitrary
    /// amounts of splaying.
    #[test]
    fn handles_survive_restructuring() {
        let values = random_values_deterministic(1_000);
        let mut tree: SplayTree<i64> = SplayTree::new();

        let handles: Vec<_> = values.iter().map(|&v| (tree.insert(v), v)).collect();

        // Splay aggressively and then check every handle still resolves.
        for &v in &values {
            tree.find(&v);
        }
        for &(id, v) in &handles {
            assert_eq!(tree.item(id), &v, "handle lost its item");
        }
    }
}

// ─── Stale handle panics ─────────────────────────────────────────────────────

/// Tests that a handle dies with its item.
#[test]
#[should_panic(expected = "`Arena::get()` - `id` is invalid!")]
fn item_after_remove_panics() {
    let mut tree = SplayTree::from([1, 2, 3]);
    let id = tree.find(&2).unwrap();
    tree.remove(&2);
    let _ = tree.item(id);
}

/// Tests that navigation from a removed node panics rather than answering.
#[test]
#[should_panic(expected = "`Arena::get()` - `id` is invalid!")]
fn next_after_pop_panics() {
    let mut tree = SplayTree::from([1, 2]);
    let min = tree.min_node().unwrap();
    tree.pop();
    let _ = tree.next(min);
}

/// Tests that clearing invalidates every outstanding handle.
#[test]
#[should_panic(expected = "index out of bounds")]
fn item_after_clear_panics() {
    let mut tree = SplayTree::from([1, 2, 3]);
    let id = tree.find(&2).unwrap();
    tree.clear();
    let _ = tree.item(id);
}
