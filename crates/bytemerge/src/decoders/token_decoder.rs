//! # Token Decoder Trait

use crate::alloc::string::String;
use crate::alloc::vec::Vec;
use crate::errors::BMResult;
use crate::types::TokenType;

/// The result of a lossy text decode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedText {
    /// The decoded text.
    pub text: String,

    /// Whether any malformed UTF-8 was replaced with `U+FFFD`.
    pub lossy: bool,
}

impl DecodedText {
    /// Decode a byte buffer as UTF-8, replacing malformed subsequences.
    pub fn from_utf8_lossy(bytes: Vec<u8>) -> Self {
        match String::from_utf8(bytes) {
            Ok(text) => Self { text, lossy: false },
            Err(err) => {
                let text = String::from_utf8_lossy(err.as_bytes()).into_owned();
                log::trace!("replaced malformed utf-8 in decoded tokens");
                Self { text, lossy: true }
            }
        }
    }
}

/// A trait for token decoders.
pub trait TokenDecoder<T: TokenType>: Send + Sync {
    /// Decode tokens, appending their bytes to the buffer.
    ///
    /// ## Arguments
    /// * `tokens` - The tokens to decode.
    /// * `buf` - The target byte buffer to append to.
    ///
    /// ## Returns
    /// [`crate::BMError::UnknownToken`] for the first token with no vocabulary
    /// entry; `buf` may then hold a partial prefix.
    fn try_decode_append(
        &self,
        tokens: &[T],
        buf: &mut Vec<u8>,
    ) -> BMResult<()>;

    /// Decode tokens into their bytes.
    fn try_decode_to_bytes(
        &self,
        tokens: &[T],
    ) -> BMResult<Vec<u8>> {
        let mut buf = Vec::with_capacity(tokens.len() * 4);
        self.try_decode_append(tokens, &mut buf)?;
        Ok(buf)
    }

    /// Decode tokens into text, reporting whether replacement happened.
    fn try_decode_checked(
        &self,
        tokens: &[T],
    ) -> BMResult<DecodedText> {
        Ok(DecodedText::from_utf8_lossy(self.try_decode_to_bytes(tokens)?))
    }

    /// Decode tokens into text.
    ///
    /// Malformed UTF-8 (which can occur for token sequences not produced by
    /// an encoder) is replaced by `U+FFFD`; it is never an error.
    fn try_decode_to_string(
        &self,
        tokens: &[T],
    ) -> BMResult<String> {
        Ok(self.try_decode_checked(tokens)?.text)
    }

    /// Decode a batch of token sequences into text.
    fn try_decode_batch_to_strings(
        &self,
        batch: &[Vec<T>],
    ) -> BMResult<Vec<String>> {
        batch
            .iter()
            .map(|tokens| self.try_decode_to_string(tokens))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decoded_text() {
        assert_eq!(
            DecodedText::from_utf8_lossy("नमस्ते".as_bytes().to_vec()),
            DecodedText {
                text: "नमस्ते".to_string(),
                lossy: false
            }
        );

        let decoded = DecodedText::from_utf8_lossy(vec![b'a', 0xA4, b'b']);
        assert_eq!(decoded.text, "a\u{FFFD}b");
        assert!(decoded.lossy);

        // A truncated multi-byte sequence.
        let decoded = DecodedText::from_utf8_lossy(vec![0xE0, 0xA4]);
        assert_eq!(decoded.text, "\u{FFFD}");
        assert!(decoded.lossy);
    }
}
