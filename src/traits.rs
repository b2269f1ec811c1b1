use anyhow::Result;

/// Seed fed to the pivot generator at the start of every top-level
/// randomized-sort call. Reseeding per call makes repeated calls
/// reproducible run-to-run regardless of how many sorts ran before.
pub(crate) const PIVOT_SEED: u64 = 22;

/// ### -> `Sequence<T> Trait`.
///
/// The abstract capability set shared by both container backends: an
/// ordered, zero-indexed collection where insertion order defines
/// position. Callers program against this trait and pick
/// [`ArraySeq<T>`](crate::ArraySeq) or [`LinkedSeq<T>`](crate::LinkedSeq)
/// at construction time.
///
/// Type Parameters:
/// - `T`: The type of elements stored in the sequence.
///
/// ### -> `Contract`
///
/// - Valid read/erase indexes are `[0, len())`; valid insert indexes are
///   `[0, len()]`, where `len()` itself means append.
/// - Every index is validated *before* any state changes: an out-of-range
///   call returns an error and leaves the sequence exactly as it was.
/// - Out-of-range is the only recoverable error kind. Internal invariant
///   violations indicate corruption and panic instead.
///
/// ### -> `Usage`
///
/// ```
/// use biseq::prelude::*;
/// use anyhow::Result;
///
/// fn example<S: Sequence<i32> + Default>() -> Result<()> {
///     let mut seq = S::default();
///     assert!(seq.is_empty());
///
///     seq.insert(10, 0)?;
///     seq.insert(20, 1)?;
///     seq.insert(15, 1)?;
///     assert_eq!(seq.len(), 3);
///     assert_eq!(*seq.get(1)?, 15);
///     assert!(seq.contains(&20));
///
///     seq.erase(0)?;
///     assert_eq!(*seq.get(0)?, 15);
///     assert!(seq.insert(0, 5).is_err()); // index 5 > len 2
///     Ok(())
/// }
///
/// example::<ArraySeq<i32>>().unwrap();
/// example::<LinkedSeq<i32>>().unwrap();
/// ```
pub trait Sequence<T> {
    /// Returns the number of elements in the sequence. O(1).
    fn len(&self) -> usize;

    /// Tests whether the sequence holds no elements. O(1).
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes every element and releases the backing storage.
    fn clear(&mut self);

    /// Returns a shared reference to the element at `index`.
    /// - The index must be within `[0, len())`; otherwise an error is
    ///   returned and nothing changes.
    fn get(&self, index: usize) -> Result<&T>;

    /// Returns a mutable reference to the element at `index`.
    /// - The index must be within `[0, len())`; otherwise an error is
    ///   returned and nothing changes.
    fn get_mut(&mut self, index: usize) -> Result<&mut T>;

    /// Extends the sequence by inserting `elem` at `index`, shifting
    /// every element at or above `index` one position toward the end.
    /// - The index may equal `len()`, meaning append.
    /// - An index above `len()` is an error and nothing changes.
    fn insert(&mut self, elem: T, index: usize) -> Result<()>;

    /// Shrinks the sequence by removing the element at `index`, shifting
    /// every element above it one position toward the front.
    /// - The index must be within `[0, len())`; otherwise an error is
    ///   returned and nothing changes.
    fn erase(&mut self, index: usize) -> Result<()>;

    /// Returns true if some element of the sequence equals `elem`.
    /// Linear scan.
    fn contains(&self, elem: &T) -> bool
    where
        T: PartialEq;
}

/// ### -> `Sorting<T> Trait`.
///
/// Three independent in-place sorting algorithms plus the general entry
/// point. Both backends satisfy the same contract (after any of these
/// calls, adjacent elements are in non-decreasing order) but their
/// mechanics differ: the array backend moves values through its buffer,
/// the linked backend rewires nodes without copying values.
///
/// ### -> `Stability`
///
/// The backends deliberately disagree on ties. The linked backend's merge
/// compares with `<=` and is stable; the array backend's merge compares
/// with `<` and is not. Neither quicksort is stable. Callers must not
/// rely on the relative order of equal elements.
///
/// ### -> `Usage`
///
/// ```
/// use biseq::prelude::*;
/// use anyhow::Result;
///
/// fn example() -> Result<()> {
///     let mut seq: LinkedSeq<i32> = [5, 3, 8, 1].into_iter().collect();
///     seq.quick_sort();
///     assert_eq!(seq.to_string(), "1, 3, 5, 8");
///
///     seq.sort(); // already sorted: no observable change
///     assert_eq!(seq.to_string(), "1, 3, 5, 8");
///     Ok(())
/// }
///
/// example().unwrap();
/// ```
pub trait Sorting<T: Ord> {
    /// Sorts the sequence in place using the backend's preferred
    /// algorithm: randomized quicksort for the array backend, merge sort
    /// for the linked backend.
    fn sort(&mut self);

    /// Sorts the sequence in place using top-down merge sort.
    fn merge_sort(&mut self);

    /// Sorts the sequence in place using quicksort with the first
    /// element of each subrange as the pivot. Worst-case O(n²) on
    /// already-sorted input.
    fn quick_sort(&mut self);

    /// Sorts the sequence in place using quicksort with a uniformly
    /// random pivot per subrange. The generator is seeded with a fixed
    /// constant at the start of every call, so results are deterministic
    /// and reproducible call-to-call.
    fn quick_sort_random(&mut self);
}
