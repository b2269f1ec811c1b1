use std::fmt;
use std::ops::{Index, IndexMut};
use std::ptr::NonNull;

use anyhow::Result;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

use crate::traits::{Sequence, Sorting, PIVOT_SEED};

const CHAIN_INVARIANT: &str = "invariant violation: chain shorter than recorded length";
const TAIL_INVARIANT: &str = "invariant violation: missing tail on non-empty sequence";

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    value: T,
    next: Link<T>,
}

/// Walks `hops` links forward and returns the slot reached. Panics if
/// the chain runs out first, since callers derive `hops` from `count`.
fn link_at<T>(mut link: &mut Link<T>, hops: usize) -> &mut Link<T> {
    for _ in 0..hops {
        match link {
            Some(node) => link = &mut node.next,
            None => panic!("{CHAIN_INVARIANT}"),
        }
    }
    link
}

/// Walks to the first vacant slot, i.e. the `next` of the last node (or
/// the head slot of an empty chain).
fn tail_link<T>(mut link: &mut Link<T>) -> &mut Link<T> {
    while let Some(node) = link {
        link = &mut node.next;
    }
    link
}

/// Splices `node` into the vacant slot and hands back the slot after it,
/// so a caller can keep appending in O(1) per node.
fn splice_back<T>(slot: &mut Link<T>, node: Box<Node<T>>) -> &mut Link<T> {
    debug_assert!(slot.is_none());
    &mut slot.insert(node).next
}

/// ### -> `LinkedSeq<T>` - the singly-linked node-chain sequence backend.
///
/// Each node exclusively owns its successor; a non-owning tail pointer
/// caches the last node for O(1) append and O(1) access to the final
/// element, and a count field caches the length.
///
/// ### -> `Invariants`
///
/// 1. `count == 0` exactly when both head and tail are absent.
/// 2. Otherwise the tail is reachable from the head in `count - 1` hops
///    and has no successor.
///
/// Every mutation maintains these; the sorts rebuild the tail cache by
/// rescanning the chain, because splicing alone does not keep it valid.
///
/// ### -> `Sorting by splicing`
///
/// All three sort algorithms detach and relink the existing nodes: no
/// node is allocated or freed while sorting, and values are never copied
/// (the randomized quicksort swaps two node *values* once per partition
/// call to relocate its chosen pivot to the front).
///
/// ### -> `Complexity`
///
/// - `len` / `is_empty`: O(1).
/// - `push_back`, `get(len - 1)`: O(1) through the cached tail.
/// - `get` / `insert` / `erase` elsewhere: O(n) walk.
/// - `contains`: O(n) scan.
pub struct LinkedSeq<T> {
    head: Link<T>,
    tail: Option<NonNull<Node<T>>>,
    count: usize,
}

// The tail pointer only ever aims into the chain the sequence itself
// owns, so the container is as thread-compatible as its element type.
unsafe impl<T: Send> Send for LinkedSeq<T> {}
unsafe impl<T: Sync> Sync for LinkedSeq<T> {}

impl<T> LinkedSeq<T> {
    /// Creates an empty sequence.
    pub fn new() -> Self {
        Self {
            head: None,
            tail: None,
            count: 0,
        }
    }

    /// Appends `elem` after the cached tail in O(1).
    pub fn push_back(&mut self, elem: T) {
        let mut node = Box::new(Node {
            value: elem,
            next: None,
        });
        // The heap address is stable across the moves below.
        let raw = NonNull::from(&mut *node);
        match self.tail {
            Some(mut tail) => unsafe { tail.as_mut().next = Some(node) },
            None => self.head = Some(node),
        }
        self.tail = Some(raw);
        self.count += 1;
    }

    /// Borrowing iterator over the elements in order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    /// Rescans the chain and re-points the tail cache at the last node.
    /// Required after any splicing operation.
    fn rebuild_tail(&mut self) {
        let mut tail = None;
        let mut cursor = &mut self.head;
        while let Some(node) = cursor {
            tail = Some(NonNull::from(&mut **node));
            cursor = &mut node.next;
        }
        self.tail = tail;
    }

    fn out_of_range(&self, operation: &str, index: usize) -> anyhow::Error {
        anyhow::anyhow!(
            "Index {} out of bounds for sequence of length {}. '{}' can only operate on existing indexes.",
            index,
            self.count,
            operation,
        )
    }
}

impl<T> Sequence<T> for LinkedSeq<T> {
    fn len(&self) -> usize {
        self.count
    }

    fn clear(&mut self) {
        // Iterative teardown: a recursive Box drop would exhaust the
        // stack on long chains.
        let mut next = self.head.take();
        while let Some(mut node) = next {
            next = node.next.take();
        }
        self.tail = None;
        self.count = 0;
    }

    fn get(&self, index: usize) -> Result<&T> {
        if index >= self.count {
            return Err(self.out_of_range("get", index));
        }
        if index + 1 == self.count {
            let tail = self.tail.expect(TAIL_INVARIANT);
            return Ok(unsafe { &(*tail.as_ptr()).value });
        }
        let mut node = self.head.as_deref().expect(CHAIN_INVARIANT);
        for _ in 0..index {
            node = node.next.as_deref().expect(CHAIN_INVARIANT);
        }
        Ok(&node.value)
    }

    fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        if index >= self.count {
            return Err(self.out_of_range("get_mut", index));
        }
        if index + 1 == self.count {
            let tail = self.tail.expect(TAIL_INVARIANT);
            return Ok(unsafe { &mut (*tail.as_ptr()).value });
        }
        let node = link_at(&mut self.head, index)
            .as_mut()
            .expect(CHAIN_INVARIANT);
        Ok(&mut node.value)
    }

    fn insert(&mut self, elem: T, index: usize) -> Result<()> {
        if index > self.count {
            return Err(anyhow::anyhow!(
                "Index {} out of bounds for sequence of length {}. 'insert' accepts indexes up to and including the length.",
                index,
                self.count,
            ));
        }
        if index == self.count {
            // Covers both the empty chain and a plain append.
            self.push_back(elem);
        } else if index == 0 {
            let node = Box::new(Node {
                value: elem,
                next: self.head.take(),
            });
            self.head = Some(node);
            self.count += 1;
        } else {
            let prev = link_at(&mut self.head, index - 1)
                .as_mut()
                .expect(CHAIN_INVARIANT);
            let node = Box::new(Node {
                value: elem,
                next: prev.next.take(),
            });
            prev.next = Some(node);
            self.count += 1;
        }
        Ok(())
    }

    fn erase(&mut self, index: usize) -> Result<()> {
        if index >= self.count {
            return Err(self.out_of_range("erase", index));
        }
        if index == 0 {
            let mut node = self.head.take().expect(CHAIN_INVARIANT);
            self.head = node.next.take();
            if self.head.is_none() {
                self.tail = None;
            }
        } else {
            let erased_last = index + 1 == self.count;
            let prev = link_at(&mut self.head, index - 1)
                .as_mut()
                .expect(CHAIN_INVARIANT);
            let mut removed = prev.next.take().expect(CHAIN_INVARIANT);
            prev.next = removed.next.take();
            if erased_last {
                self.tail = Some(NonNull::from(&mut **prev));
            }
        }
        self.count -= 1;
        Ok(())
    }

    fn contains(&self, elem: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|value| value == elem)
    }
}

impl<T: Ord> LinkedSeq<T> {
    /// Recursive merge sort over a detached chain of known length:
    /// split at `len / 2` by cutting one link, sort both halves, merge
    /// by relinking.
    fn merge_sort_chain(mut chain: Link<T>, len: usize) -> Link<T> {
        if len <= 1 {
            return chain;
        }
        let mid = len / 2;
        let right = link_at(&mut chain, mid).take();
        let left = Self::merge_sort_chain(chain, mid);
        let right = Self::merge_sort_chain(right, len - mid);
        Self::merge_chains(left, right)
    }

    /// Relinks two sorted chains into one. `<=` keeps the left operand
    /// first on ties, so this merge is stable, unlike the array
    /// backend's `<` merge. The discrepancy is deliberate; callers must
    /// not rely on either tie order.
    fn merge_chains(mut left: Link<T>, mut right: Link<T>) -> Link<T> {
        let mut merged: Link<T> = None;
        let mut cursor = &mut merged;
        while let (Some(l), Some(r)) = (&left, &right) {
            let from_left = l.value <= r.value;
            let mut node = if from_left { left.take() } else { right.take() }
                .expect(CHAIN_INVARIANT);
            if from_left {
                left = node.next.take();
            } else {
                right = node.next.take();
            }
            cursor = splice_back(cursor, node);
        }
        // Whichever chain survived is already sorted; hang it off the end.
        *cursor = if left.is_some() { left } else { right };
        merged
    }

    /// Splits `rest` into a "less than or equal to the pivot" chain and
    /// a "greater" chain by tail-splicing each node onto one of them.
    /// Pivot-valued elements join the smaller side.
    fn partition_chain(pivot: &T, mut rest: Link<T>) -> (Link<T>, usize, Link<T>, usize) {
        let mut smaller: Link<T> = None;
        let mut larger: Link<T> = None;
        let mut smaller_cursor = &mut smaller;
        let mut larger_cursor = &mut larger;
        let mut smaller_len = 0;
        let mut larger_len = 0;
        while let Some(mut node) = rest {
            rest = node.next.take();
            if node.value <= *pivot {
                smaller_cursor = splice_back(smaller_cursor, node);
                smaller_len += 1;
            } else {
                larger_cursor = splice_back(larger_cursor, node);
                larger_len += 1;
            }
        }
        (smaller, smaller_len, larger, larger_len)
    }

    /// smaller-chain → pivot → larger-chain. When the smaller chain is
    /// empty the pivot becomes the new head.
    fn reassemble(mut smaller: Link<T>, mut pivot: Box<Node<T>>, larger: Link<T>) -> Link<T> {
        pivot.next = larger;
        if smaller.is_none() {
            return Some(pivot);
        }
        *tail_link(&mut smaller) = Some(pivot);
        smaller
    }

    /// Quicksort over a detached chain: the first node is detached as
    /// the pivot, the remainder partitioned and both sides recursively
    /// sorted, then the pieces are relinked.
    fn quick_sort_chain(chain: Link<T>, len: usize) -> Link<T> {
        if len <= 1 {
            return chain;
        }
        let mut pivot = chain.expect(CHAIN_INVARIANT);
        let rest = pivot.next.take();
        let (smaller, smaller_len, larger, larger_len) =
            Self::partition_chain(&pivot.value, rest);
        let smaller = Self::quick_sort_chain(smaller, smaller_len);
        let larger = Self::quick_sort_chain(larger, larger_len);
        Self::reassemble(smaller, pivot, larger)
    }

    /// Like [`Self::quick_sort_chain`], but first swaps the *value* of a
    /// uniformly chosen node in `[0, len - 2]` with the first node's
    /// value, relocating the pivot to the front without moving nodes.
    fn quick_sort_random_chain(
        mut chain: Link<T>,
        len: usize,
        rng: &mut Xoshiro256PlusPlus,
    ) -> Link<T> {
        if len <= 1 {
            return chain;
        }
        let offset = rng.gen_range(0..len - 1);
        if offset > 0 {
            let Node { value, next } = &mut **chain.as_mut().expect(CHAIN_INVARIANT);
            let target = link_at(next, offset - 1).as_mut().expect(CHAIN_INVARIANT);
            std::mem::swap(value, &mut target.value);
        }
        let mut pivot = chain.expect(CHAIN_INVARIANT);
        let rest = pivot.next.take();
        let (smaller, smaller_len, larger, larger_len) =
            Self::partition_chain(&pivot.value, rest);
        let smaller = Self::quick_sort_random_chain(smaller, smaller_len, rng);
        let larger = Self::quick_sort_random_chain(larger, larger_len, rng);
        Self::reassemble(smaller, pivot, larger)
    }
}

impl<T: Ord> Sorting<T> for LinkedSeq<T> {
    fn sort(&mut self) {
        self.merge_sort();
    }

    fn merge_sort(&mut self) {
        let chain = self.head.take();
        self.head = Self::merge_sort_chain(chain, self.count);
        self.rebuild_tail();
    }

    fn quick_sort(&mut self) {
        let chain = self.head.take();
        self.head = Self::quick_sort_chain(chain, self.count);
        self.rebuild_tail();
    }

    fn quick_sort_random(&mut self) {
        let chain = self.head.take();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(PIVOT_SEED);
        self.head = Self::quick_sort_random_chain(chain, self.count, &mut rng);
        self.rebuild_tail();
    }
}

/// Borrowing iterator over a [`LinkedSeq<T>`].
pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.value
        })
    }
}

impl<T> Drop for LinkedSeq<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Default for LinkedSeq<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Deep value copy: walks the source chain and re-appends every value at
/// the destination's growing tail. Nodes are never shared.
impl<T: Clone> Clone for LinkedSeq<T> {
    fn clone(&self) -> Self {
        let mut seq = Self::new();
        for value in self.iter() {
            seq.push_back(value.clone());
        }
        seq
    }
}

impl<T> FromIterator<T> for LinkedSeq<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut seq = Self::new();
        seq.extend(iter);
        seq
    }
}

impl<T> Extend<T> for LinkedSeq<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for elem in iter {
            self.push_back(elem);
        }
    }
}

impl<T: PartialEq> PartialEq for LinkedSeq<T> {
    fn eq(&self, other: &Self) -> bool {
        self.count == other.count && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedSeq<T> {}

impl<T: fmt::Debug> fmt::Debug for LinkedSeq<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Comma-and-space-separated element listing, no trailing separator,
/// empty output for an empty sequence.
impl<T: fmt::Display> fmt::Display for LinkedSeq<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{value}")?;
        }
        Ok(())
    }
}

/// Panicking sugar over [`Sequence::get`].
impl<T> Index<usize> for LinkedSeq<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Ok(value) => value,
            Err(error) => panic!("{error}"),
        }
    }
}

/// Panicking sugar over [`Sequence::get_mut`].
impl<T> IndexMut<usize> for LinkedSeq<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.get_mut(index) {
            Ok(value) => value,
            Err(error) => panic!("{error}"),
        }
    }
}

#[cfg(test)]
mod tests;
