//! # Heap [`MergeContext`].
//!
//! A min-heap of `(rank, position)` over a doubly-linked list of tokens,
//! with lazy invalidation of stale heap entries. O(n log n) per call.
//!
//! Ranks are merge targets, and a merge can only produce pairs of higher
//! rank than itself, so popping `(rank, position)` in order visits the
//! occurrences of each pair leftmost-first. That is the same rewrite order
//! as [`super::SweepMergeContext`].

use core::cmp::Reverse;

use crate::alloc::collections::BinaryHeap;
use crate::alloc::vec::Vec;
use crate::encoders::merge_contexts::sweep::SweepMergeContext;
use crate::encoders::merge_encoder::{MergeContext, MergeContextBuilder};
use crate::types::TokenType;
use crate::vocab::UnifiedTokenVocab;

/// Sentinel value for "no neighbor" in the linked list.
const SENTINEL: u32 = u32::MAX;

/// A heap entry: (merge_rank, position, generation_at_push_time).
///
/// Wrapped in [`Reverse`] so the [`BinaryHeap`] acts as a min-heap by rank,
/// with ties broken by position (leftmost first).
type HeapEntry<T> = Reverse<(T, u32, u32)>;

/// Heap-driven [`MergeContext`].
///
/// Working buffers are reused across calls to avoid repeated allocation.
pub struct HeapMergeContext<'a, T: TokenType> {
    data: &'a UnifiedTokenVocab<T>,
    next: Vec<u32>,
    prev: Vec<u32>,
    generation: Vec<u32>,
    heap: BinaryHeap<HeapEntry<T>>,
}

impl<'a, T: TokenType> HeapMergeContext<'a, T> {
    fn heap_merge(
        &mut self,
        tokens: &mut Vec<T>,
        start: usize,
    ) {
        let vocab = self.data;
        let n = tokens.len() - start;

        // Initialize linked-list arrays and generation counters.
        self.next.clear();
        self.next
            .extend((1..=n as u32).map(|i| if i < n as u32 { i } else { SENTINEL }));

        self.prev.clear();
        self.prev.push(SENTINEL);
        self.prev.extend(0..n as u32 - 1);

        self.generation.clear();
        self.generation.resize(n, 0);

        // Seed the heap with all adjacent pairs.
        self.heap.clear();
        for pos in 0..n - 1 {
            if let Some(rank) = vocab.lookup_pair(&(tokens[start + pos], tokens[start + pos + 1])) {
                self.heap.push(Reverse((rank, pos as u32, 0)));
            }
        }

        // Merge loop.
        while let Some(Reverse((rank, i, entry_gen))) = self.heap.pop() {
            let ii = i as usize;

            if entry_gen != self.generation[ii] {
                continue;
            }
            let j = self.next[ii];
            if j == SENTINEL {
                continue;
            }
            let jj = j as usize;

            tokens[start + ii] = rank;

            let k = self.next[jj];
            self.next[ii] = k;
            if k != SENTINEL {
                self.prev[k as usize] = i;
            }
            self.next[jj] = SENTINEL;

            self.generation[ii] = self.generation[ii].wrapping_add(1);

            let p = self.prev[ii];
            if p != SENTINEL {
                let pp = p as usize;
                self.generation[pp] = self.generation[pp].wrapping_add(1);
                if let Some(new_rank) = vocab.lookup_pair(&(tokens[start + pp], tokens[start + ii])) {
                    self.heap.push(Reverse((new_rank, p, self.generation[pp])));
                }
            }

            if k != SENTINEL
                && let Some(new_rank) =
                    vocab.lookup_pair(&(tokens[start + ii], tokens[start + k as usize]))
            {
                self.heap.push(Reverse((new_rank, i, self.generation[ii])));
            }
        }

        // Compact live tokens in-place by walking the linked list.
        let mut write = start;
        let mut pos = 0u32;
        loop {
            tokens[write] = tokens[start + pos as usize];
            write += 1;
            let nxt = self.next[pos as usize];
            if nxt == SENTINEL {
                break;
            }
            pos = nxt;
        }
        tokens.truncate(write);
    }
}

impl<'a, T: TokenType> MergeContext<'a, T> for HeapMergeContext<'a, T> {
    fn encode_append_bytes(
        &mut self,
        bytes: &[u8],
        tokens: &mut Vec<T>,
    ) {
        // Positions are u32; longer inputs fall back to the sweep.
        if bytes.len() >= SENTINEL as usize {
            SweepMergeContext::new(self.data).encode_append_bytes(bytes, tokens);
            return;
        }

        let start = tokens.len();
        self.data.byte_vocab().append_byte_tokens(bytes, tokens);

        if tokens.len() - start < 2 {
            return;
        }
        self.heap_merge(tokens, start);
    }
}

/// Builder for [`HeapMergeContext`].
#[derive(Clone, Default)]
pub struct HeapMergeContextBuilder<T: TokenType> {
    marker: core::marker::PhantomData<T>,
}

impl<T: TokenType> MergeContextBuilder<T> for HeapMergeContextBuilder<T> {
    type Context<'a> = HeapMergeContext<'a, T>;

    fn build_merge_context<'a>(data: &'a UnifiedTokenVocab<T>) -> Self::Context<'a> {
        HeapMergeContext {
            data,
            next: Vec::with_capacity(16),
            prev: Vec::with_capacity(16),
            generation: Vec::with_capacity(16),
            heap: BinaryHeap::with_capacity(16),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoders::merge_contexts::SweepMergeContextBuilder;

    fn both(
        vocab: &UnifiedTokenVocab<u32>,
        bytes: &[u8],
    ) -> (Vec<u32>, Vec<u32>) {
        let mut heap_tokens = vec![];
        HeapMergeContextBuilder::<u32>::build_merge_context(vocab)
            .encode_append_bytes(bytes, &mut heap_tokens);

        let mut sweep_tokens = vec![];
        SweepMergeContextBuilder::<u32>::build_merge_context(vocab)
            .encode_append_bytes(bytes, &mut sweep_tokens);

        (heap_tokens, sweep_tokens)
    }

    #[test]
    fn test_overlapping_runs_match_sweep() {
        let vocab = UnifiedTokenVocab::<u32>::try_from_merges([
            ((97, 97), 256),
            ((256, 97), 257),
            ((98, 256), 258),
        ])
        .unwrap();

        for text in ["a", "aa", "aaa", "aaaa", "aaaaa", "baaab", "abaaaaba", "baaaaaaab"] {
            let (heap_tokens, sweep_tokens) = both(&vocab, text.as_bytes());
            assert_eq!(heap_tokens, sweep_tokens, "{text:?}");
        }

        let (heap_tokens, _) = both(&vocab, b"aaa");
        assert_eq!(heap_tokens, vec![257]);
    }

    #[test]
    fn test_reuse_context() {
        let vocab = UnifiedTokenVocab::<u32>::try_from_merges([((104, 105), 256)]).unwrap();
        let mut ctx = HeapMergeContextBuilder::<u32>::build_merge_context(&vocab);

        let mut tokens = vec![];
        ctx.encode_append_bytes(b"hi hi", &mut tokens);
        ctx.encode_append_bytes(b"h", &mut tokens);
        ctx.encode_append_bytes(b"", &mut tokens);
        ctx.encode_append_bytes(b"ih", &mut tokens);
        assert_eq!(tokens, vec![256, 32, 256, 104, 105, 104]);
    }
}
