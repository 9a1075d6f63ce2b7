//! # Merge Strategies
//!
//! * [`SweepMergeContext`] - rescan, then rewrite every occurrence of the best pair.
//! * [`HeapMergeContext`] - priority queue of adjacent pairs with lazy invalidation.
//!
//! Both produce identical tokens for every valid merge table.

mod heap;
mod sweep;

#[doc(inline)]
pub use heap::*;
#[doc(inline)]
pub use sweep::*;
