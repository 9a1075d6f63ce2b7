//! # Vocabulary IO
//!
//! ## Loading A Vocab
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use bytemerge::{
//!     decoders::TokenDecoder,
//!     encoders::TokenEncoder,
//!     vocab::{UnifiedTokenVocab, io::load_unified_vocab_json_path},
//! };
//!
//! fn example() -> bytemerge::BMResult<(Arc<dyn TokenEncoder<u32>>, Arc<dyn TokenDecoder<u32>>)> {
//!     let vocab: Arc<UnifiedTokenVocab<u32>> =
//!         load_unified_vocab_json_path("merges.json")?.into();
//!
//!     let encoder = vocab.to_default_encoder();
//!     let decoder = vocab.to_default_decoder();
//!
//!     Ok((encoder, decoder))
//! }
//! ```

mod merge_json;

#[doc(inline)]
pub use merge_json::*;
