//! # Dictionary ``{ T -> Vec<u8> }`` Token Decoder

use crate::alloc::sync::Arc;
use crate::alloc::vec::Vec;
use crate::decoders::token_decoder::TokenDecoder;
use crate::errors::{BMError, BMResult};
use crate::types::{TokenType, token_to_u64};
use crate::vocab::UnifiedTokenVocab;

/// A decoder which looks each token up in the [`crate::vocab::ByteVocab`].
#[derive(Clone)]
pub struct DictionaryDecoder<T: TokenType> {
    data: Arc<UnifiedTokenVocab<T>>,
}

impl<T: TokenType> DictionaryDecoder<T> {
    /// Build a decoder over a shared vocabulary.
    pub fn from_unified_vocab(data: Arc<UnifiedTokenVocab<T>>) -> Self {
        Self { data }
    }

    /// The vocabulary this decoder reads.
    pub fn vocab(&self) -> &UnifiedTokenVocab<T> {
        &self.data
    }
}

impl<T: TokenType> TokenDecoder<T> for DictionaryDecoder<T> {
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "trace", skip(self, tokens, buf))
    )]
    fn try_decode_append(
        &self,
        tokens: &[T],
        buf: &mut Vec<u8>,
    ) -> BMResult<()> {
        let byte_vocab = self.data.byte_vocab();
        for token in tokens {
            let span = byte_vocab
                .lookup_span(token)
                .ok_or_else(|| BMError::UnknownToken {
                    token: token_to_u64(*token),
                })?;
            buf.extend_from_slice(span);
        }
        Ok(())
    }
}
