//! # Parallel Decoder

use rayon::prelude::*;

use crate::alloc::string::String;
use crate::alloc::vec::Vec;
use crate::decoders::TokenDecoder;
use crate::errors::BMResult;
use crate::types::TokenType;

/// Batch-Level Parallel Decoder Wrapper.
#[derive(Clone)]
pub struct ParallelRayonDecoder<T: TokenType, D: TokenDecoder<T>> {
    /// Inner token decoder.
    pub inner: D,

    _marker: core::marker::PhantomData<T>,
}

impl<T, D> ParallelRayonDecoder<T, D>
where
    T: TokenType,
    D: TokenDecoder<T>,
{
    /// Create a new parallel decoder.
    pub fn new(inner: D) -> Self {
        Self {
            inner,
            _marker: core::marker::PhantomData,
        }
    }
}

impl<T, D> TokenDecoder<T> for ParallelRayonDecoder<T, D>
where
    T: TokenType,
    D: TokenDecoder<T>,
{
    fn try_decode_append(
        &self,
        tokens: &[T],
        buf: &mut Vec<u8>,
    ) -> BMResult<()> {
        self.inner.try_decode_append(tokens, buf)
    }

    fn try_decode_batch_to_strings(
        &self,
        batch: &[Vec<T>],
    ) -> BMResult<Vec<String>> {
        batch
            .par_iter()
            .map(|tokens| self.inner.try_decode_to_string(tokens))
            .collect()
    }
}
