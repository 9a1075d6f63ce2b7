#![allow(missing_docs)]

use std::sync::Arc;

use bytemerge::decoders::{DictionaryDecoder, TokenDecoder};
use bytemerge::encoders::merge_contexts::{HeapMergeContextBuilder, SweepMergeContextBuilder};
use bytemerge::encoders::{MergeEncoder, TokenEncoder};
use bytemerge::vocab::{MergeTable, UnifiedTokenVocab, build_vocabulary};
use proptest::prelude::*;

/// Bytes the generated merges draw on; keeps merges likely to apply.
const ALPHABET: &[u8] = b"ab \xC3\xA9\xE0\xA4\xA8";

/// Build a valid merge table from raw choices.
///
/// Each choice picks its two pair elements from the alphabet bytes plus
/// every target defined so far; repeated pairs are skipped.
fn table_from_choices(choices: &[(u16, u16)]) -> MergeTable<u32> {
    let mut pool: Vec<u32> = ALPHABET.iter().map(|&b| b as u32).collect();
    let mut merges = Vec::new();
    let mut seen = std::collections::HashSet::new();
    let mut next = 256u32;

    for &(l, r) in choices {
        let pair = (
            pool[l as usize % pool.len()],
            pool[r as usize % pool.len()],
        );
        if !seen.insert(pair) {
            continue;
        }
        merges.push((pair, next));
        pool.push(next);
        next += 1;
    }

    MergeTable::try_from_merges(merges).unwrap()
}

fn text_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[ab é न]{0,48}",
        any::<String>(),
    ]
}

fn choices_strategy() -> impl Strategy<Value = Vec<(u16, u16)>> {
    prop::collection::vec((any::<u16>(), any::<u16>()), 0..40)
}

proptest! {
    #[test]
    fn round_trip(choices in choices_strategy(), text in text_strategy()) {
        let vocab = Arc::new(UnifiedTokenVocab::from_merge_table(table_from_choices(&choices)).unwrap());
        let encoder = MergeEncoder::<u32>::new(vocab.clone());
        let decoder = DictionaryDecoder::from_unified_vocab(vocab);

        let tokens = encoder.try_encode(&text).unwrap();
        let decoded = decoder.try_decode_checked(&tokens).unwrap();

        prop_assert_eq!(decoded.text, text);
        prop_assert!(!decoded.lossy);
    }

    #[test]
    fn monotonic_shrink(choices in choices_strategy(), text in text_strategy()) {
        let table = table_from_choices(&choices);
        let vocab = Arc::new(UnifiedTokenVocab::from_merge_table(table.clone()).unwrap());
        let encoder = MergeEncoder::<u32>::new(vocab);

        let bytes = text.as_bytes();
        let tokens = encoder.try_encode(&text).unwrap();

        prop_assert!(tokens.len() <= bytes.len());
        prop_assert_eq!(tokens.is_empty(), bytes.is_empty());

        let any_merge_applies = bytes
            .windows(2)
            .any(|w| table.lookup_pair(&(w[0] as u32, w[1] as u32)).is_some());
        prop_assert_eq!(tokens.len() == bytes.len(), !any_merge_applies);
    }

    #[test]
    fn deterministic(choices in choices_strategy(), text in text_strategy()) {
        let vocab = Arc::new(UnifiedTokenVocab::from_merge_table(table_from_choices(&choices)).unwrap());
        let a = MergeEncoder::<u32>::new(vocab.clone());
        let b = MergeEncoder::<u32>::new(vocab);

        prop_assert_eq!(a.try_encode(&text).unwrap(), a.try_encode(&text).unwrap());
        prop_assert_eq!(a.try_encode(&text).unwrap(), b.try_encode(&text).unwrap());
    }

    #[test]
    fn heap_matches_sweep(choices in choices_strategy(), text in text_strategy()) {
        let vocab = Arc::new(UnifiedTokenVocab::from_merge_table(table_from_choices(&choices)).unwrap());
        let heap = MergeEncoder::<u32, HeapMergeContextBuilder<u32>>::new(vocab.clone());
        let sweep = MergeEncoder::<u32, SweepMergeContextBuilder<u32>>::new(vocab);

        prop_assert_eq!(heap.try_encode(&text).unwrap(), sweep.try_encode(&text).unwrap());
    }

    #[test]
    fn vocabulary_build_is_idempotent(choices in choices_strategy()) {
        let table = table_from_choices(&choices);
        prop_assert_eq!(build_vocabulary(&table).unwrap(), build_vocabulary(&table).unwrap());
    }
}

#[test]
fn empty_input() {
    let vocab = Arc::new(UnifiedTokenVocab::<u32>::try_from_merges([((104, 105), 256)]).unwrap());
    let encoder = vocab.to_default_encoder();
    let decoder = vocab.to_default_decoder();

    assert!(encoder.try_encode("").unwrap().is_empty());
    assert_eq!(decoder.try_decode_to_string(&[]).unwrap(), "");
}

#[test]
fn single_unmergeable_byte() {
    let vocab = Arc::new(UnifiedTokenVocab::<u32>::try_from_merges([((104, 105), 256)]).unwrap());
    let encoder = vocab.to_default_encoder();

    assert_eq!(encoder.try_encode("\x00").unwrap(), vec![0]);
}

#[test]
fn hi_merges_to_one_token() {
    let vocab = Arc::new(UnifiedTokenVocab::<u32>::try_from_merges([((104, 105), 256)]).unwrap());
    let encoder = vocab.to_default_encoder();
    let decoder = vocab.to_default_decoder();

    assert_eq!(encoder.try_encode("hi").unwrap(), vec![256]);
    assert_eq!(decoder.try_decode_to_string(&[256]).unwrap(), "hi");
}

#[test]
fn unknown_id_is_an_error() {
    let vocab = Arc::new(UnifiedTokenVocab::<u32>::try_from_merges([((104, 105), 256)]).unwrap());
    let decoder = vocab.to_default_decoder();

    let err = decoder.try_decode_to_string(&[9999]).unwrap_err();
    assert!(err.is_unknown_token());
    assert!(!err.is_config_error());
}

#[test]
fn lone_continuation_byte_is_replaced() {
    let vocab = Arc::new(UnifiedTokenVocab::<u32>::try_from_merges([((0xA4, 0xA8), 256)]).unwrap());
    let decoder = vocab.to_default_decoder();

    assert_eq!(decoder.try_decode_to_string(&[0xA8]).unwrap(), "\u{FFFD}");
    assert!(decoder.try_decode_to_string(&[256]).unwrap().contains('\u{FFFD}'));
}
