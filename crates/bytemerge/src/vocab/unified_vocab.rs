//! # Unified Token Vocabulary

use crate::alloc::sync::Arc;
use crate::decoders::{DefaultTokenDecoder, TokenDecoder};
use crate::encoders::{DefaultTokenEncoder, TokenEncoder};
use crate::errors::BMResult;
use crate::types::{Pair, TokenType};
use crate::vocab::byte_vocab::ByteVocab;
use crate::vocab::merge_table::MergeTable;

/// The immutable tokenizer configuration.
///
/// Holds the [`MergeTable`] and the [`ByteVocab`] derived from it.
/// Built once, then shared (usually behind an [`Arc`]) by any number of
/// encoders and decoders.
#[derive(Debug, Clone, PartialEq)]
pub struct UnifiedTokenVocab<T: TokenType> {
    merges: MergeTable<T>,
    byte_vocab: ByteVocab<T>,
}

impl<T: TokenType> UnifiedTokenVocab<T> {
    /// Build from a validated merge table.
    pub fn from_merge_table(merges: MergeTable<T>) -> BMResult<Self> {
        let byte_vocab = ByteVocab::from_merge_table(&merges)?;
        Ok(Self { merges, byte_vocab })
    }

    /// Validate merge records and build.
    pub fn try_from_merges<I>(merges: I) -> BMResult<Self>
    where
        I: IntoIterator<Item = (Pair<T>, T)>,
    {
        Self::from_merge_table(MergeTable::try_from_merges(merges)?)
    }

    /// The merge table.
    pub fn merge_table(&self) -> &MergeTable<T> {
        &self.merges
    }

    /// The byte vocabulary.
    pub fn byte_vocab(&self) -> &ByteVocab<T> {
        &self.byte_vocab
    }

    /// Look up the merge target for a pair.
    pub fn lookup_pair(
        &self,
        pair: &Pair<T>,
    ) -> Option<T> {
        self.merges.lookup_pair(pair)
    }

    /// Look up the bytes for a token.
    pub fn lookup_span(
        &self,
        token: &T,
    ) -> Option<&[u8]> {
        self.byte_vocab.lookup_span(token)
    }

    /// The largest token ID.
    pub fn max_token(&self) -> T {
        self.byte_vocab.max_token()
    }

    /// Build the default encoder over a shared vocab.
    pub fn to_default_encoder(self: &Arc<Self>) -> Arc<dyn TokenEncoder<T>> {
        Arc::new(DefaultTokenEncoder::new(self.clone()))
    }

    /// Build the default decoder over a shared vocab.
    pub fn to_default_decoder(self: &Arc<Self>) -> Arc<dyn TokenDecoder<T>> {
        Arc::new(DefaultTokenDecoder::from_unified_vocab(self.clone()))
    }
}
