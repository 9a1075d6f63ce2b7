#![warn(missing_docs, unused)]
//! # `bytemerge` Byte-Level BPE Tokenizer
//!
//! `bytemerge` encodes text into token IDs with a precomputed, ordered table of
//! pairwise merges, and decodes token IDs back into text.
//!
//! * Token IDs `0..=255` are the raw UTF-8 bytes.
//! * Token IDs from `256` up are assigned by the merge table, in priority order.
//!
//! See:
//! * [`vocab`] to build and load merge tables and vocabularies.
//! * [`encoders`] to encode text into tokens.
//! * [`decoders`] to decode tokens into text.
//! * [`highlight`] to render token boundaries for display.
//!
//! ## Crate Features
#![doc = document_features::document_features!()]
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use bytemerge::vocab::UnifiedTokenVocab;
//!
//! fn example() -> bytemerge::BMResult<()> {
//!     let vocab: Arc<UnifiedTokenVocab<u32>> =
//!         UnifiedTokenVocab::try_from_merges([((104, 105), 256)])?.into();
//!
//!     let encoder = vocab.to_default_encoder();
//!     let decoder = vocab.to_default_decoder();
//!
//!     let tokens = encoder.try_encode("hi")?;
//!     assert_eq!(tokens, vec![256]);
//!     assert_eq!(decoder.try_decode_to_string(&tokens)?, "hi");
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

extern crate alloc;

pub mod decoders;
pub mod encoders;
pub mod errors;
pub mod highlight;
pub mod types;
pub mod vocab;

#[cfg(feature = "rayon")]
pub mod rayon;

#[doc(inline)]
pub use decoders::{TokenDecoder, DefaultTokenDecoder};
#[doc(inline)]
pub use encoders::{DefaultTokenEncoder, TokenEncoder};
#[doc(inline)]
pub use errors::{BMError, BMResult, ConfigError};
#[doc(inline)]
pub use types::TokenType;
#[doc(inline)]
pub use vocab::{UnifiedTokenVocab, build_vocabulary};
