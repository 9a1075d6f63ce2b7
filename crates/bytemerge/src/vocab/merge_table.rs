//! # Merge Table
//!
//! An ordered `(T, T) -> T` table of merges.
//!
//! Records are held in ascending target-ID order; a record's position is its
//! priority rank. Because targets are strictly increasing, comparing targets
//! is equivalent to comparing ranks, and the encoders rely on that.

use crate::alloc::vec::Vec;
use crate::errors::{BMResult, ConfigError};
use crate::types::{BMHashMap, BMHashSet, BYTE_TOKEN_COUNT, Pair, TokenType, token_to_u64};

/// A single merge record: `pair -> target`.
pub type MergeRecord<T> = (Pair<T>, T);

/// Validated, ordered merge table.
#[derive(Debug, Clone, PartialEq)]
pub struct MergeTable<T: TokenType> {
    merges: Vec<MergeRecord<T>>,
    pair_map: BMHashMap<Pair<T>, T>,
}

impl<T: TokenType> Default for MergeTable<T> {
    fn default() -> Self {
        Self {
            merges: Vec::new(),
            pair_map: BMHashMap::default(),
        }
    }
}

impl<T: TokenType> MergeTable<T> {
    /// Build a validated table from merge records.
    ///
    /// Records may arrive in any order; they are sorted by target ID,
    /// which then defines priority.
    ///
    /// ## Arguments
    /// * `merges` - `(pair, target)` records.
    ///
    /// ## Returns
    /// The table, or a [`ConfigError`] when the records violate the
    /// ordering or pair-closure invariants.
    pub fn try_from_merges<I>(merges: I) -> BMResult<Self>
    where
        I: IntoIterator<Item = MergeRecord<T>>,
    {
        let mut merges: Vec<MergeRecord<T>> = merges.into_iter().collect();
        merges.sort_by_key(|&(_, target)| target);

        let byte_limit = T::from_usize(BYTE_TOKEN_COUNT).ok_or(ConfigError::TokenOutOfRange {
            value: BYTE_TOKEN_COUNT as u64,
        })?;

        let mut defined: BMHashSet<T> = BMHashSet::with_capacity(merges.len());
        let mut pair_map: BMHashMap<Pair<T>, T> = BMHashMap::with_capacity(merges.len());

        for &((left, right), target) in &merges {
            if target < byte_limit {
                return Err(ConfigError::ReservedTarget {
                    target: token_to_u64(target),
                }
                .into());
            }
            if defined.contains(&target) {
                return Err(ConfigError::DuplicateTarget {
                    target: token_to_u64(target),
                }
                .into());
            }

            for element in [left, right] {
                if element >= byte_limit && !defined.contains(&element) {
                    return Err(ConfigError::UndefinedPairElement {
                        left: token_to_u64(left),
                        right: token_to_u64(right),
                        target: token_to_u64(target),
                        element: token_to_u64(element),
                    }
                    .into());
                }
            }

            if let Some(&first) = pair_map.get(&(left, right)) {
                return Err(ConfigError::DuplicatePair {
                    left: token_to_u64(left),
                    right: token_to_u64(right),
                    first: token_to_u64(first),
                    second: token_to_u64(target),
                }
                .into());
            }

            pair_map.insert((left, right), target);
            defined.insert(target);
        }

        log::debug!("validated merge table with {} merges", merges.len());

        Ok(Self { merges, pair_map })
    }

    /// Build a validated table from raw `u64` records.
    ///
    /// This is the path used by loaders, which see untyped integers.
    pub fn try_from_raw_merges<I>(merges: I) -> BMResult<Self>
    where
        I: IntoIterator<Item = ((u64, u64), u64)>,
    {
        let convert = |value: u64| T::from_u64(value).ok_or(ConfigError::TokenOutOfRange { value });

        let merges = merges
            .into_iter()
            .map(|((left, right), target)| Ok(((convert(left)?, convert(right)?), convert(target)?)))
            .collect::<Result<Vec<_>, ConfigError>>()?;

        Self::try_from_merges(merges)
    }

    /// The number of merges.
    pub fn len(&self) -> usize {
        self.merges.len()
    }

    /// Is the table empty?
    pub fn is_empty(&self) -> bool {
        self.merges.is_empty()
    }

    /// The merge records, in priority order.
    pub fn merges(&self) -> &[MergeRecord<T>] {
        &self.merges
    }

    /// Iterate over the merge records in priority order.
    pub fn iter(&self) -> impl Iterator<Item = &MergeRecord<T>> {
        self.merges.iter()
    }

    /// Look up the target token for a pair.
    pub fn lookup_pair(
        &self,
        pair: &Pair<T>,
    ) -> Option<T> {
        self.pair_map.get(pair).copied()
    }

    /// The priority rank of a pair; `0` is the first merge.
    pub fn rank_of(
        &self,
        pair: &Pair<T>,
    ) -> Option<usize> {
        let target = self.lookup_pair(pair)?;
        self.merges.binary_search_by_key(&target, |&(_, t)| t).ok()
    }

    /// The largest token ID defined by bytes or merges.
    pub fn max_token(&self) -> T {
        match self.merges.last() {
            Some(&(_, target)) => target,
            None => T::from_u8(u8::MAX).unwrap_or_else(T::zero),
        }
    }
}
