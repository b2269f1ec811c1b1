//! # biseq
//!
//! Two interchangeable dynamic sequence containers behind one abstract
//! capability set:
//!
//! - [`ArraySeq<T>`]: a contiguous growable-buffer backend with
//!   amortized-doubling capacity management.
//! - [`LinkedSeq<T>`]: a singly-linked node-chain backend with a cached
//!   tail for O(1) append, whose sorts physically rewire nodes instead of
//!   copying values.
//!
//! Both implement [`Sequence<T>`] (size, emptiness, clear, indexed
//! read/write, positional insert/erase, membership) and [`Sorting<T>`]
//! (merge sort, deterministic quicksort, randomized-pivot quicksort), so a
//! caller picks a backend at construction time and swaps it without code
//! changes. Identical operation scripts applied to both backends yield
//! identical lengths, contents, and rendered output.
//!
//! ## Usage
//!
//! ```
//! use biseq::prelude::*;
//! use anyhow::Result;
//!
//! fn example() -> Result<()> {
//!     let mut seq = ArraySeq::<i32>::new();
//!     for value in [5, 3, 8, 1] {
//!         seq.insert(value, 0)?; // prepend
//!     }
//!     assert_eq!(seq.len(), 4);
//!     assert_eq!(seq.to_string(), "1, 8, 3, 5");
//!
//!     seq.merge_sort();
//!     assert_eq!(seq.to_string(), "1, 3, 5, 8");
//!     Ok(())
//! }
//!
//! example().unwrap();
//! ```
//!
//! Every index-taking operation validates its index before touching any
//! state; out-of-range conditions come back as [`anyhow::Result`] errors
//! and never leave a partial mutation behind.

pub mod array;
pub mod linked;
pub mod prelude;
pub mod traits;

pub use {
    crate::array::ArraySeq,
    crate::linked::LinkedSeq,
    crate::traits::{Sequence, Sorting},
};
