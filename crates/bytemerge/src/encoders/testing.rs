//! # Encoder Test Utilities

use crate::alloc::sync::Arc;
use crate::alloc::vec::Vec;
use crate::decoders::{DictionaryDecoder, TokenDecoder};
use crate::encoders::TokenEncoder;
use crate::types::TokenType;
use crate::vocab::UnifiedTokenVocab;

/// Sample texts used by [`common_encoder_tests`].
pub const COMMON_SAMPLES: &[&str] = &[
    "",
    "h",
    "hi",
    "the hi",
    "hello world",
    "aaaaa",
    "café é",
    "नमस्ते दुनिया",
    "\u{0}\u{7f}",
    "emoji 🦀 crab",
];

/// A small merge table covering ASCII, Latin-1 and Devanagari fragments.
pub fn common_encoder_test_vocab<T: TokenType>() -> UnifiedTokenVocab<T> {
    let t = |v: u32| T::from_u32(v).unwrap();

    UnifiedTokenVocab::try_from_merges([
        ((t(104), t(105)), t(256)),  // "hi"
        ((t(32), t(256)), t(257)),   // " hi"
        ((t(116), t(104)), t(258)),  // "th"
        ((t(258), t(101)), t(259)),  // "the"
        ((t(32), t(259)), t(260)),   // " the"
        ((t(97), t(97)), t(261)),    // "aa"
        ((t(261), t(261)), t(262)),  // "aaaa"
        ((t(0xC3), t(0xA9)), t(263)), // "é"
        ((t(0xE0), t(0xA4)), t(264)), // Devanagari lead bytes
        ((t(264), t(0xA8)), t(265)), // "न"
        ((t(108), t(108)), t(266)),  // "ll"
        ((t(101), t(266)), t(267)),  // "ell"
    ])
    .unwrap()
}

/// Run the shared encoder checks against [`common_encoder_test_vocab`].
pub fn common_encoder_tests<T: TokenType, E: TokenEncoder<T>>(
    vocab: Arc<UnifiedTokenVocab<T>>,
    encoder: &E,
) {
    let t = |v: u32| T::from_u32(v).unwrap();
    let decoder = DictionaryDecoder::from_unified_vocab(vocab.clone());

    assert_eq!(encoder.vocab(), vocab.as_ref());

    assert_eq!(encoder.try_encode("").unwrap(), Vec::<T>::new());
    assert_eq!(encoder.try_encode("\u{0}").unwrap(), vec![t(0)]);
    assert_eq!(encoder.try_encode("h").unwrap(), vec![t(104)]);
    assert_eq!(encoder.try_encode("hi").unwrap(), vec![t(256)]);
    assert_eq!(encoder.try_encode("the hi").unwrap(), vec![t(259), t(257)]);
    assert_eq!(encoder.try_encode("aaaaa").unwrap(), vec![t(262), t(97)]);
    assert_eq!(encoder.try_encode("é").unwrap(), vec![t(263)]);
    assert_eq!(encoder.try_encode("न").unwrap(), vec![t(265)]);
    assert_eq!(
        encoder.try_encode("hello").unwrap(),
        vec![t(104), t(267), t(111)]
    );
    assert_eq!(encoder.encode_bytes(b"hi"), vec![t(256)]);

    for &sample in COMMON_SAMPLES {
        let tokens = encoder.try_encode(sample).unwrap();

        // Monotonic shrink.
        assert!(tokens.len() <= sample.len(), "{sample:?}");
        if !sample.is_empty() {
            assert!(!tokens.is_empty(), "{sample:?}");
        }

        // Deterministic.
        assert_eq!(encoder.try_encode(sample).unwrap(), tokens);

        // Round trip, with no replacement markers.
        let decoded = decoder.try_decode_checked(&tokens).unwrap();
        assert_eq!(decoded.text, sample);
        assert!(!decoded.lossy, "{sample:?}");
    }

    let batch = encoder.try_encode_batch(COMMON_SAMPLES).unwrap();
    assert_eq!(batch.len(), COMMON_SAMPLES.len());
    for (tokens, &sample) in batch.iter().zip(COMMON_SAMPLES) {
        assert_eq!(tokens, &encoder.try_encode(sample).unwrap());
    }
}
