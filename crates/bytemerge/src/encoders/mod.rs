//! # Token Encoders
//!
//! Text is encoded as its UTF-8 bytes, which are then merged by the
//! [`crate::vocab::MergeTable`] until no adjacent pair has a merge.
//!
//! * [`TokenEncoder`] - the encoder trait.
//! * [`MergeEncoder`] - the merge-table encoder, generic over a [`MergeContextBuilder`].
//! * [`merge_contexts`] - the merge strategies.

pub mod merge_contexts;

mod merge_encoder;
mod token_encoder;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

#[doc(inline)]
pub use merge_encoder::*;
#[doc(inline)]
pub use token_encoder::*;

/// The default [`TokenEncoder`] implementation.
pub type DefaultTokenEncoder<T> = MergeEncoder<T>;
