//! # Token Encoder Trait

use crate::alloc::vec::Vec;
use crate::errors::BMResult;
use crate::types::TokenType;
use crate::vocab::UnifiedTokenVocab;

/// A trait for token encoders.
pub trait TokenEncoder<T: TokenType>: Send + Sync {
    /// The vocabulary this encoder merges with.
    fn vocab(&self) -> &UnifiedTokenVocab<T>;

    /// Encode raw bytes, appending tokens to the buffer.
    ///
    /// ## Arguments
    /// * `bytes` - The bytes to encode.
    /// * `tokens` - The target token buffer to append to.
    fn encode_bytes_append(
        &self,
        bytes: &[u8],
        tokens: &mut Vec<T>,
    );

    /// Encode text, appending tokens to the buffer.
    ///
    /// Text is encoded as its UTF-8 bytes; merges never see character
    /// boundaries.
    ///
    /// ## Arguments
    /// * `text` - The string slice to encode.
    /// * `tokens` - The target token buffer to append to.
    fn try_encode_append(
        &self,
        text: &str,
        tokens: &mut Vec<T>,
    ) -> BMResult<()> {
        self.encode_bytes_append(text.as_bytes(), tokens);
        Ok(())
    }

    /// Encode raw bytes into tokens.
    fn encode_bytes(
        &self,
        bytes: &[u8],
    ) -> Vec<T> {
        let mut tokens = Vec::with_capacity(bytes.len());
        self.encode_bytes_append(bytes, &mut tokens);
        tokens
    }

    /// Encode text into tokens.
    ///
    /// ## Arguments
    /// * `text` - The string slice to encode.
    ///
    /// ## Returns
    /// The token sequence; empty for empty text.
    fn try_encode(
        &self,
        text: &str,
    ) -> BMResult<Vec<T>> {
        let mut tokens = Vec::with_capacity(text.len());
        self.try_encode_append(text, &mut tokens)?;
        Ok(tokens)
    }

    /// Encode a batch of text.
    ///
    /// ## Arguments
    /// * `batch` - The texts to encode.
    ///
    /// ## Returns
    /// One token sequence per text, in order.
    fn try_encode_batch(
        &self,
        batch: &[&str],
    ) -> BMResult<Vec<Vec<T>>> {
        batch.iter().map(|text| self.try_encode(text)).collect()
    }
}
