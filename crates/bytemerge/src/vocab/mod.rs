//! # Token Vocabularies
//!
//! * [`MergeTable`] - the ordered `(T, T) -> T` merge table.
//! * [`ByteVocab`] - the resolved `T -> Vec<u8>` vocabulary.
//! * [`UnifiedTokenVocab`] - both, as one immutable configuration object.
//! * [`io`] - loading and saving the static tables.

pub mod io;

mod byte_vocab;
mod merge_table;
mod unified_vocab;

#[doc(inline)]
pub use byte_vocab::*;
#[doc(inline)]
pub use merge_table::*;
#[doc(inline)]
pub use unified_vocab::*;
