//! # Encoder for [`UnifiedTokenVocab`].

use crate::alloc::sync::Arc;
use crate::alloc::vec::Vec;
use crate::encoders::merge_contexts::HeapMergeContextBuilder;
use crate::encoders::token_encoder::TokenEncoder;
use crate::types::TokenType;
use crate::vocab::UnifiedTokenVocab;

/// Merge Context.
///
/// Per-call working state for one merge strategy.
pub trait MergeContext<'a, T: TokenType>: Send {
    /// Encodes a byte sequence.
    ///
    /// Appends the byte tokens of `bytes` to `tokens`, then merges them
    /// in place until no pair in the appended region has a merge.
    ///
    /// ## Arguments
    /// * `bytes` - The bytes to encode.
    /// * `tokens` - The target token buffer to append to.
    fn encode_append_bytes(
        &mut self,
        bytes: &[u8],
        tokens: &mut Vec<T>,
    );
}

/// Trait for building merge context
pub trait MergeContextBuilder<T: TokenType>: Clone + Default + Send + Sync {
    /// The context type produced by this builder.
    type Context<'a>: MergeContext<'a, T>;

    /// Builds a merge context for the given vocabulary.
    fn build_merge_context<'a>(data: &'a UnifiedTokenVocab<T>) -> Self::Context<'a>;
}

/// A ``(T, T) -> T`` merge table [`TokenEncoder`].
///
/// The merge strategy is chosen by the [`MergeContextBuilder`];
/// every strategy yields the same tokens.
#[derive(Clone)]
pub struct MergeEncoder<T: TokenType, B: MergeContextBuilder<T> = HeapMergeContextBuilder<T>> {
    /// Data for the encoders.
    pub data: Arc<UnifiedTokenVocab<T>>,

    marker: core::marker::PhantomData<B>,
}

impl<T: TokenType, B: MergeContextBuilder<T>> MergeEncoder<T, B> {
    /// Initialize an encoder.
    ///
    /// ## Arguments
    /// * `data` - The unified token vocabulary to build the encoder from.
    ///
    /// ## Returns
    /// A new `MergeEncoder` instance.
    pub fn new(data: Arc<UnifiedTokenVocab<T>>) -> Self {
        Self {
            data,
            marker: Default::default(),
        }
    }
}

impl<T: TokenType, B: MergeContextBuilder<T>> TokenEncoder<T> for MergeEncoder<T, B> {
    fn vocab(&self) -> &UnifiedTokenVocab<T> {
        &self.data
    }

    /// Encode bytes into tokens.
    ///
    /// ## Arguments
    /// * `bytes` - The bytes to encode.
    /// * `tokens` - The target token buffer to append to.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "trace", skip(self, bytes, tokens))
    )]
    fn encode_bytes_append(
        &self,
        bytes: &[u8],
        tokens: &mut Vec<T>,
    ) {
        let mut context = B::build_merge_context(&self.data);
        context.encode_append_bytes(bytes, tokens);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoders::merge_contexts::SweepMergeContextBuilder;
    use crate::encoders::testing::{common_encoder_test_vocab, common_encoder_tests};

    fn test_encoder<T: TokenType>() {
        let vocab: Arc<UnifiedTokenVocab<T>> = common_encoder_test_vocab().into();

        let encoder = MergeEncoder::<T>::new(vocab.clone());
        common_encoder_tests(vocab.clone(), &encoder);

        let encoder = MergeEncoder::<T, SweepMergeContextBuilder<T>>::new(vocab.clone());
        common_encoder_tests(vocab, &encoder);
    }

    #[test]
    fn test_encoder_u16() {
        test_encoder::<u16>();
    }

    #[test]
    fn test_encoder_u32() {
        test_encoder::<u32>();
    }

    #[test]
    fn test_append_keeps_prefix() {
        let vocab: Arc<UnifiedTokenVocab<u32>> =
            UnifiedTokenVocab::try_from_merges([((104, 105), 256)]).unwrap().into();
        let encoder = MergeEncoder::<u32>::new(vocab);

        let mut tokens = vec![7, 104];
        encoder.try_encode_append("hi", &mut tokens).unwrap();
        // The existing prefix is not merged with the new bytes.
        assert_eq!(tokens, vec![7, 104, 256]);
    }
}
