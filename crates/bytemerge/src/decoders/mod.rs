//! # Token Decoders
//!
//! * [`TokenDecoder`] - the decoder trait.
//! * [`DictionaryDecoder`] - the vocabulary lookup decoder.
//! * [`parse_token_list`] - parse host-supplied `"1, 2, 3"` token lists.

mod dictionary_decoder;
mod token_decoder;
mod token_list;

#[doc(inline)]
pub use dictionary_decoder::*;
#[doc(inline)]
pub use token_decoder::*;
#[doc(inline)]
pub use token_list::*;

/// The default [`TokenDecoder`] implementation.
pub type DefaultTokenDecoder<T> = DictionaryDecoder<T>;
