use std::fmt;
use std::ops::{Index, IndexMut};

use anyhow::Result;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

use crate::traits::{Sequence, Sorting, PIVOT_SEED};

/// Panic message for a hole inside the occupied prefix. A `None` slot
/// below `count` means the container state is corrupt, not that the
/// caller made a mistake.
const SLOT_INVARIANT: &str = "invariant violation: empty slot below count";

/// ### -> `ArraySeq<T>` - the contiguous growable-buffer sequence backend.
///
/// Elements live in a single boxed slice of slots; the occupied prefix
/// `[0, count)` holds the sequence in order and everything above it is
/// vacant headroom. Capacity is the slice length.
///
/// ### -> `Invariants`
///
/// 1. `count <= capacity` at all times.
/// 2. Every slot below `count` is occupied; every slot at or above
///    `count` is vacant.
///
/// A violation of these indicates corruption and panics; it is never
/// reported as a recoverable error.
///
/// ### -> `Lifecycle`
///
/// - The buffer is allocated lazily on the first insert.
/// - When `count` reaches capacity, the buffer is reallocated at double
///   the capacity (or capacity 1 from 0) and the occupied prefix moves
///   across.
/// - `clear` releases the buffer entirely; capacity returns to 0.
/// - Cloning reproduces the source's capacity, not just its count, so a
///   copy carries the same storage headroom as the original.
///
/// ### -> `Complexity`
///
/// - `len` / `is_empty` / `capacity`: O(1).
/// - `get` / `get_mut`: O(1).
/// - `push_back`: amortized O(1).
/// - `insert` / `erase`: O(n) shift.
/// - `contains`: O(n) scan.
#[derive(Clone)]
pub struct ArraySeq<T> {
    slots: Box<[Option<T>]>,
    count: usize,
}

impl<T> ArraySeq<T> {
    /// Creates an empty sequence. No buffer is allocated until the first
    /// insert.
    pub fn new() -> Self {
        Self {
            slots: Box::default(),
            count: 0,
        }
    }

    /// Creates an empty sequence with room for `capacity` elements
    /// before the first reallocation.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut slots = Vec::new();
        slots.resize_with(capacity, || None);
        Self {
            slots: slots.into_boxed_slice(),
            count: 0,
        }
    }

    /// Returns the number of elements the buffer can hold before the
    /// next reallocation.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Appends `elem` at the end of the sequence, growing the buffer if
    /// it is full.
    pub fn push_back(&mut self, elem: T) {
        if self.count == self.slots.len() {
            self.grow();
        }
        self.slots[self.count] = Some(elem);
        self.count += 1;
    }

    /// Borrowing iterator over the elements in order.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.slots[..self.count]
            .iter()
            .map(|slot| slot.as_ref().expect(SLOT_INVARIANT))
    }

    /// Doubles the capacity (1 from 0) and moves the occupied prefix
    /// into the new buffer.
    fn grow(&mut self) {
        let capacity = if self.slots.is_empty() {
            1
        } else {
            self.slots.len() * 2
        };
        let mut slots = Vec::with_capacity(capacity);
        for slot in self.slots.iter_mut() {
            slots.push(slot.take());
        }
        slots.resize_with(capacity, || None);
        self.slots = slots.into_boxed_slice();
    }

    fn value(&self, index: usize) -> &T {
        self.slots[index].as_ref().expect(SLOT_INVARIANT)
    }

    fn take_value(&mut self, index: usize) -> T {
        self.slots[index].take().expect(SLOT_INVARIANT)
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

impl<T> Sequence<T> for ArraySeq<T> {
    fn len(&self) -> usize {
        self.count
    }

    fn clear(&mut self) {
        self.slots = Box::default();
        self.count = 0;
    }

    fn get(&self, index: usize) -> Result<&T> {
        if index >= self.count {
            return Err(self.out_of_range("get", index));
        }
        Ok(self.value(index))
    }

    fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        if index >= self.count {
            return Err(self.out_of_range("get_mut", index));
        }
        Ok(self.slots[index].as_mut().expect(SLOT_INVARIANT))
    }

    fn insert(&mut self, elem: T, index: usize) -> Result<()> {
        if index > self.count {
            return Err(anyhow::anyhow!(
                "Index {} out of bounds for sequence of length {}. 'insert' accepts indexes up to and including the length.",
                index,
                self.count,
            ));
        }
        if self.count == self.slots.len() {
            self.grow();
        }
        // Open the hole from the end backward so nothing is overwritten.
        for i in (index..self.count).rev() {
            self.slots[i + 1] = self.slots[i].take();
        }
        self.slots[index] = Some(elem);
        self.count += 1;
        Ok(())
    }

    fn erase(&mut self, index: usize) -> Result<()> {
        if index >= self.count {
            return Err(self.out_of_range("erase", index));
        }
        for i in index..self.count - 1 {
            self.slots[i] = self.slots[i + 1].take();
        }
        self.slots[self.count - 1] = None;
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

impl<T: Ord> ArraySeq<T> {
    /// Top-down merge sort over the inclusive subrange `[start, end]`.
    ///
    /// The merge compares with strict `<`, so ties take from the right
    /// half: equal elements are not guaranteed to keep their original
    /// relative order. The linked backend's merge uses `<=` instead;
    /// the discrepancy is deliberate and callers must not rely on
    /// either tie order.
    fn msort(&mut self, start: usize, end: usize) {
        if start >= end {
            return;
        }
        let mid = (start + end) / 2;
        self.msort(start, mid);
        self.msort(mid + 1, end);

        let mut merged = Vec::with_capacity(end - start + 1);
        let mut first = start;
        let mut second = mid + 1;
        while first <= mid && second <= end {
            if self.value(first) < self.value(second) {
                merged.push(self.take_value(first));
                first += 1;
            } else {
                merged.push(self.take_value(second));
                second += 1;
            }
        }
        while first <= mid {
            merged.push(self.take_value(first));
            first += 1;
        }
        while second <= end {
            merged.push(self.take_value(second));
            second += 1;
        }
        for (offset, value) in merged.into_iter().enumerate() {
            self.slots[start + offset] = Some(value);
        }
    }

    /// Lomuto partition with the pivot at `start`: strictly-less
    /// elements collect just after `start`, then the pivot swaps into
    /// the boundary. Returns the pivot's final position.
    fn partition(&mut self, start: usize, end: usize) -> usize {
        let mut boundary = start;
        for i in start + 1..=end {
            if self.value(i) < self.value(start) {
                boundary += 1;
                self.slots.swap(i, boundary);
            }
        }
        self.slots.swap(start, boundary);
        boundary
    }

    fn qsort(&mut self, start: usize, end: usize) {
        if start >= end {
            return;
        }
        let boundary = self.partition(start, end);
        if boundary > start {
            self.qsort(start, boundary - 1);
        }
        self.qsort(boundary + 1, end);
    }

    fn qsort_random(&mut self, start: usize, end: usize, rng: &mut Xoshiro256PlusPlus) {
        if start >= end {
            return;
        }
        // Swap a uniformly chosen pivot from [start, end - 1] into the
        // front, then partition exactly like the deterministic variant.
        let offset = rng.gen_range(0..end - start);
        self.slots.swap(start, start + offset);
        let boundary = self.partition(start, end);
        if boundary > start {
            self.qsort_random(start, boundary - 1, rng);
        }
        self.qsort_random(boundary + 1, end, rng);
    }
}

impl<T: Ord> Sorting<T> for ArraySeq<T> {
    fn sort(&mut self) {
        self.quick_sort_random();
    }

    fn merge_sort(&mut self) {
        if self.count > 1 {
            self.msort(0, self.count - 1);
        }
    }

    fn quick_sort(&mut self) {
        if self.count > 1 {
            self.qsort(0, self.count - 1);
        }
    }

    fn quick_sort_random(&mut self) {
        if self.count > 1 {
            let mut rng = Xoshiro256PlusPlus::seed_from_u64(PIVOT_SEED);
            self.qsort_random(0, self.count - 1, &mut rng);
        }
    }
}

impl<T> Default for ArraySeq<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for ArraySeq<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut seq = Self::new();
        seq.extend(iter);
        seq
    }
}

impl<T> Extend<T> for ArraySeq<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for elem in iter {
            self.push_back(elem);
        }
    }
}

impl<T: PartialEq> PartialEq for ArraySeq<T> {
    fn eq(&self, other: &Self) -> bool {
        self.count == other.count && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for ArraySeq<T> {}

impl<T: fmt::Debug> fmt::Debug for ArraySeq<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Comma-and-space-separated element listing, no trailing separator,
/// empty output for an empty sequence.
impl<T: fmt::Display> fmt::Display for ArraySeq<T> {
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
impl<T> Index<usize> for ArraySeq<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Ok(value) => value,
            Err(error) => panic!("{error}"),
        }
    }
}

/// Panicking sugar over [`Sequence::get_mut`].
impl<T> IndexMut<usize> for ArraySeq<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.get_mut(index) {
            Ok(value) => value,
            Err(error) => panic!("{error}"),
        }
    }
}

#[cfg(test)]
mod tests;
