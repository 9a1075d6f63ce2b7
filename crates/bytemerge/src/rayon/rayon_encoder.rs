//! # Parallel Encoder

use rayon::prelude::*;

use crate::alloc::vec::Vec;
use crate::encoders::TokenEncoder;
use crate::errors::BMResult;
use crate::types::TokenType;
use crate::vocab::UnifiedTokenVocab;

/// Batch-Level Parallel Encoder Wrapper.
#[derive(Clone)]
pub struct ParallelRayonEncoder<T: TokenType, D: TokenEncoder<T>> {
    /// Inner token encoder.
    pub inner: D,

    _marker: core::marker::PhantomData<T>,
}

impl<T, D> ParallelRayonEncoder<T, D>
where
    T: TokenType,
    D: TokenEncoder<T>,
{
    /// Create a new parallel encoder.
    ///
    /// ## Arguments
    /// * `inner` - The token encoder to wrap.
    ///
    /// ## Returns
    /// A new `ParallelRayonEncoder` instance.
    pub fn new(inner: D) -> Self {
        Self {
            inner,
            _marker: core::marker::PhantomData,
        }
    }
}

impl<T, D> TokenEncoder<T> for ParallelRayonEncoder<T, D>
where
    T: TokenType,
    D: TokenEncoder<T>,
{
    fn vocab(&self) -> &UnifiedTokenVocab<T> {
        self.inner.vocab()
    }

    fn encode_bytes_append(
        &self,
        bytes: &[u8],
        tokens: &mut Vec<T>,
    ) {
        self.inner.encode_bytes_append(bytes, tokens)
    }

    fn try_encode_append(
        &self,
        text: &str,
        tokens: &mut Vec<T>,
    ) -> BMResult<()> {
        self.inner.try_encode_append(text, tokens)
    }

    fn try_encode_batch(
        &self,
        batch: &[&str],
    ) -> BMResult<Vec<Vec<T>>> {
        batch
            .par_iter()
            .map(|text| self.inner.try_encode(text))
            .collect()
    }
}
