//! # Sweep Merge Context
//!
//! Each round scans the working sequence for the lowest-ranked pair present,
//! then rewrites every non-overlapping occurrence of it in one left-to-right
//! sweep. O(n) per round; at most n rounds.

use crate::alloc::vec::Vec;
use crate::encoders::merge_encoder::{MergeContext, MergeContextBuilder};
use crate::types::{BMHashMap, Pair, TokenType};
use crate::vocab::UnifiedTokenVocab;

/// Count the occurrences of each adjacent pair in `tokens`.
///
/// Overlapping occurrences are all counted: `[a, a, a]` has `(a, a)` twice.
pub fn pair_counts<T: TokenType>(tokens: &[T]) -> BMHashMap<Pair<T>, usize> {
    let mut counts: BMHashMap<Pair<T>, usize> = BMHashMap::default();
    for w in tokens.windows(2) {
        *counts.entry((w[0], w[1])).or_default() += 1;
    }
    counts
}

/// Find the best mergeable pair in `tokens`.
///
/// ## Returns
/// `Some((pair, target))` for the pair with the lowest merge rank,
/// or `None` when no adjacent pair is in the merge table.
fn best_pair<T: TokenType>(
    data: &UnifiedTokenVocab<T>,
    tokens: &[T],
) -> Option<(Pair<T>, T)> {
    tokens
        .windows(2)
        .filter_map(|w| {
            let pair = (w[0], w[1]);
            data.lookup_pair(&pair).map(|target| (pair, target))
        })
        .min_by_key(|&(_, target)| target)
}

/// Replace every non-overlapping occurrence of `pair` in `tokens[start..]`.
///
/// A freshly written `target` is never the left element of the next match.
fn replace_pair<T: TokenType>(
    tokens: &mut Vec<T>,
    start: usize,
    pair: Pair<T>,
    target: T,
) {
    let end = tokens.len();
    let mut read = start;
    let mut write = start;

    while read < end {
        if read + 1 < end && tokens[read] == pair.0 && tokens[read + 1] == pair.1 {
            tokens[write] = target;
            read += 2;
        } else {
            tokens[write] = tokens[read];
            read += 1;
        }
        write += 1;
    }

    tokens.truncate(write);
}

/// Whole-sequence rescan [`MergeContext`].
pub struct SweepMergeContext<'a, T: TokenType> {
    data: &'a UnifiedTokenVocab<T>,
}

impl<'a, T: TokenType> SweepMergeContext<'a, T> {
    /// Create a context over a vocabulary.
    pub fn new(data: &'a UnifiedTokenVocab<T>) -> Self {
        Self { data }
    }
}

impl<'a, T: TokenType> MergeContext<'a, T> for SweepMergeContext<'a, T> {
    fn encode_append_bytes(
        &mut self,
        bytes: &[u8],
        tokens: &mut Vec<T>,
    ) {
        // We reuse the output buffer as our working memory.
        // - `start` is the first index of the working memory buffer.
        let start = tokens.len();
        self.data.byte_vocab().append_byte_tokens(bytes, tokens);

        while tokens.len() - start >= 2 {
            let Some((pair, target)) = best_pair(self.data, &tokens[start..]) else {
                break;
            };
            replace_pair(tokens, start, pair, target);
        }
    }
}

/// Builder for [`SweepMergeContext`].
#[derive(Clone, Default)]
pub struct SweepMergeContextBuilder<T: TokenType> {
    marker: core::marker::PhantomData<T>,
}

impl<T: TokenType> MergeContextBuilder<T> for SweepMergeContextBuilder<T> {
    type Context<'a> = SweepMergeContext<'a, T>;

    fn build_merge_context<'a>(data: &'a UnifiedTokenVocab<T>) -> Self::Context<'a> {
        SweepMergeContext::new(data)
    }
}
