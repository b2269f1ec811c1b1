use crate::prelude::*;

fn sorted(seq: &LinkedSeq<i32>) -> bool {
    (1..seq.len()).all(|i| seq[i - 1] <= seq[i])
}

#[test]
fn merge_sort_example() -> anyhow::Result<()> {
    let mut seq = LinkedSeq::<i32>::new();
    for value in [5, 3, 8, 1] {
        seq.insert(value, 0)?;
    }
    assert_eq!(seq.to_string(), "1, 8, 3, 5");

    seq.merge_sort();
    assert_eq!(seq.to_string(), "1, 3, 5, 8");

    seq.erase(0)?;
    assert_eq!(seq.to_string(), "3, 5, 8");
    assert_eq!(seq.len(), 3);
    Ok(())
}

#[test]
fn all_sorts_order_adjacent_pairs() {
    let input = [9, -3, 7, 7, 0, 12, -3, 5, 2, 2, 11, 1];
    let sorts: [fn(&mut LinkedSeq<i32>); 4] = [
        |seq| seq.merge_sort(),
        |seq| seq.quick_sort(),
        |seq| seq.quick_sort_random(),
        |seq| seq.sort(),
    ];
    for sort in sorts {
        let mut seq: LinkedSeq<i32> = input.into_iter().collect();
        sort(&mut seq);
        assert_eq!(seq.len(), input.len());
        assert!(sorted(&seq), "unsorted result: {seq}");
    }
}

#[test]
fn sorts_preserve_multiset() {
    let input = [4, 4, 4, 1, 1, 9];
    let mut seq: LinkedSeq<i32> = input.into_iter().collect();
    seq.quick_sort();
    assert_eq!(seq.to_string(), "1, 1, 4, 4, 4, 9");
}

#[test]
fn merge_sort_is_stable() {
    // Distinguish equal keys through a payload the ordering ignores;
    // the linked merge uses `<=` so the earlier element of a tie stays
    // first.
    #[derive(Clone, Debug)]
    struct Keyed {
        key: i32,
        tag: u8,
    }

    impl PartialEq for Keyed {
        fn eq(&self, other: &Self) -> bool {
            self.key == other.key
        }
    }

    impl Eq for Keyed {}

    impl PartialOrd for Keyed {
        fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
            Some(self.cmp(other))
        }
    }

    impl Ord for Keyed {
        fn cmp(&self, other: &Self) -> std::cmp::Ordering {
            self.key.cmp(&other.key)
        }
    }

    let mut seq: LinkedSeq<Keyed> = [
        Keyed { key: 2, tag: 0 },
        Keyed { key: 1, tag: 0 },
        Keyed { key: 2, tag: 1 },
        Keyed { key: 1, tag: 1 },
    ]
    .into_iter()
    .collect();
    seq.merge_sort();

    let tags: Vec<(i32, u8)> = seq.iter().map(|k| (k.key, k.tag)).collect();
    assert_eq!(tags, vec![(1, 0), (1, 1), (2, 0), (2, 1)]);
}

#[test]
fn sort_is_idempotent() {
    let mut seq: LinkedSeq<i32> = [3, 1, 2].into_iter().collect();
    seq.sort();
    let once = seq.clone();
    seq.sort();
    assert_eq!(seq, once);
}

#[test]
fn sorted_input_is_unchanged() {
    let mut seq: LinkedSeq<i32> = (0..16).collect();
    let before = seq.clone();
    seq.quick_sort();
    assert_eq!(seq, before);
    seq.merge_sort();
    assert_eq!(seq, before);
}

#[test]
fn trivial_sequences_sort() {
    let mut empty = LinkedSeq::<i32>::new();
    empty.sort();
    assert!(empty.is_empty());

    let mut single: LinkedSeq<i32> = [42].into_iter().collect();
    single.merge_sort();
    single.quick_sort();
    single.quick_sort_random();
    assert_eq!(single.to_string(), "42");
}

#[test]
fn random_pivot_sort_is_reproducible() {
    let input = [8, 6, 7, 5, 3, 0, 9, 1, 4, 2];
    let mut first: LinkedSeq<i32> = input.into_iter().collect();
    let mut second: LinkedSeq<i32> = input.into_iter().collect();
    first.quick_sort_random();
    second.quick_sort_random();
    assert_eq!(first, second);
}

#[test]
fn two_element_chains_sort() {
    let sorts: [fn(&mut LinkedSeq<i32>); 3] = [
        |seq| seq.merge_sort(),
        |seq| seq.quick_sort(),
        |seq| seq.quick_sort_random(),
    ];
    for sort in sorts {
        let mut seq: LinkedSeq<i32> = [2, 1].into_iter().collect();
        sort(&mut seq);
        assert_eq!(seq.to_string(), "1, 2");
    }
}
