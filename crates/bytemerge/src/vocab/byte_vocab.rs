//! # Byte Vocabulary
//!
//! The resolved `{ T -> Vec<u8> }` mapping from every token to the bytes it expands to.

use crate::alloc::vec::Vec;
use crate::errors::{BMResult, ConfigError};
use crate::types::{BMHashMap, BYTE_TOKEN_COUNT, TokenType, byte_token, token_to_u64};
use crate::vocab::merge_table::MergeTable;

/// Token to byte-span vocabulary.
///
/// Always holds the 256 single-byte tokens, plus one entry per merge.
#[derive(Debug, Clone, PartialEq)]
pub struct ByteVocab<T: TokenType> {
    spans: BMHashMap<T, Vec<u8>>,
    max_token: T,
}

impl<T: TokenType> Default for ByteVocab<T> {
    fn default() -> Self {
        let spans = (0..=u8::MAX)
            .map(|b| (byte_token::<T>(b), vec![b]))
            .collect::<BMHashMap<_, _>>();

        Self {
            spans,
            max_token: byte_token(u8::MAX),
        }
    }
}

impl<T: TokenType> ByteVocab<T> {
    /// Build the vocabulary for a merge table.
    ///
    /// Walks the merges in ascending target order, so every pair element is
    /// already resolved when its merge is reached.
    ///
    /// ## Arguments
    /// * `table` - The merge table.
    ///
    /// ## Returns
    /// The vocabulary, or [`ConfigError::UndefinedPairElement`] if a merge
    /// references a token with no entry.
    pub fn from_merge_table(table: &MergeTable<T>) -> BMResult<Self> {
        let mut vocab = Self::default();
        vocab.spans.reserve(table.len());

        for &((left, right), target) in table.iter() {
            let undefined = |element: T| ConfigError::UndefinedPairElement {
                left: token_to_u64(left),
                right: token_to_u64(right),
                target: token_to_u64(target),
                element: token_to_u64(element),
            };

            let mut span = vocab.spans.get(&left).ok_or_else(|| undefined(left))?.clone();
            span.extend_from_slice(vocab.spans.get(&right).ok_or_else(|| undefined(right))?);

            vocab.spans.insert(target, span);
            if target > vocab.max_token {
                vocab.max_token = target;
            }
        }

        log::debug!(
            "built byte vocab: {} tokens, max token {}",
            vocab.len(),
            vocab.max_token
        );

        Ok(vocab)
    }

    /// The number of tokens in the vocabulary.
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    /// A vocabulary always holds the byte tokens.
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// The largest token ID.
    pub fn max_token(&self) -> T {
        self.max_token
    }

    /// The number of merge-assigned tokens.
    pub fn merge_count(&self) -> usize {
        self.len() - BYTE_TOKEN_COUNT
    }

    /// Look up the byte span for a token.
    pub fn lookup_span(
        &self,
        token: &T,
    ) -> Option<&[u8]> {
        self.spans.get(token).map(Vec::as_slice)
    }

    /// Iterate over `(token, span)` entries, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&T, &Vec<u8>)> {
        self.spans.iter()
    }

    /// Append the byte tokens for `bytes` to `tokens`.
    ///
    /// This is the identity mapping `b -> T(b)`.
    pub fn append_byte_tokens(
        &self,
        bytes: &[u8],
        tokens: &mut Vec<T>,
    ) {
        tokens.extend(bytes.iter().map(|&b| byte_token::<T>(b)));
    }
}

/// Build the vocabulary for a merge table.
///
/// See [`ByteVocab::from_merge_table`].
pub fn build_vocabulary<T: TokenType>(table: &MergeTable<T>) -> BMResult<ByteVocab<T>> {
    ByteVocab::from_merge_table(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check_build<T: TokenType>() {
        let t = |v: u32| T::from_u32(v).unwrap();

        let table = MergeTable::<T>::try_from_merges([
            ((t(104), t(105)), t(256)),
            ((t(256), t(256)), t(257)),
            ((t(32), t(257)), t(258)),
        ])
        .unwrap();

        let vocab = build_vocabulary(&table).unwrap();

        assert_eq!(vocab.len(), 259);
        assert!(!vocab.is_empty());
        assert_eq!(vocab.merge_count(), 3);
        assert_eq!(vocab.max_token(), t(258));

        assert_eq!(vocab.lookup_span(&t(0)), Some(&[0u8][..]));
        assert_eq!(vocab.lookup_span(&t(255)), Some(&[255u8][..]));
        assert_eq!(vocab.lookup_span(&t(256)), Some(&b"hi"[..]));
        assert_eq!(vocab.lookup_span(&t(257)), Some(&b"hihi"[..]));
        assert_eq!(vocab.lookup_span(&t(258)), Some(&b" hihi"[..]));
        assert_eq!(vocab.lookup_span(&t(259)), None);

        // vocab[id] == vocab[left] + vocab[right], for every merge.
        for &((left, right), target) in table.iter() {
            let mut expected = vocab.lookup_span(&left).unwrap().to_vec();
            expected.extend_from_slice(vocab.lookup_span(&right).unwrap());
            assert_eq!(vocab.lookup_span(&target), Some(expected.as_slice()));
        }

        // Idempotent.
        assert_eq!(build_vocabulary(&table).unwrap(), vocab);
    }

    #[test]
    fn test_build_u16() {
        check_build::<u16>();
    }

    #[test]
    fn test_build_u32() {
        check_build::<u32>();
    }

    #[test]
    fn test_default_is_bytes() {
        let vocab = ByteVocab::<u32>::default();
        assert_eq!(vocab.len(), 256);
        assert_eq!(vocab.merge_count(), 0);
        assert_eq!(vocab.max_token(), 255);
        for (&token, span) in vocab.iter() {
            assert_eq!(span, &vec![token as u8]);
        }

        let empty = build_vocabulary(&MergeTable::<u32>::default()).unwrap();
        assert_eq!(empty, vocab);
    }

    #[test]
    fn test_append_byte_tokens() {
        let vocab = ByteVocab::<u16>::default();
        let mut tokens = vec![999];
        vocab.append_byte_tokens("hé".as_bytes(), &mut tokens);
        assert_eq!(tokens, vec![999, 104, 0xC3, 0xA9]);
    }
}
