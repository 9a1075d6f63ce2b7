//! # Common Types and Traits

use core::fmt::{Debug, Display};
use core::hash::Hash;
use num_traits::{FromPrimitive, PrimInt, ToPrimitive, Unsigned};

/// A type that can be used as a token ID.
///
/// Any unsigned primitive integer wide enough to hold the merge-assigned
/// IDs of a table qualifies; the byte IDs `0..=255` must always fit.
pub trait TokenType:
    'static
    + PrimInt
    + Unsigned
    + FromPrimitive
    + ToPrimitive
    + Hash
    + Default
    + Debug
    + Display
    + Send
    + Sync
{
}

impl<T> TokenType for T where
    T: 'static
        + PrimInt
        + Unsigned
        + FromPrimitive
        + ToPrimitive
        + Hash
        + Default
        + Debug
        + Display
        + Send
        + Sync
{
}

/// An adjacent pair of tokens.
pub type Pair<T> = (T, T);

/// Number of reserved byte token IDs (`0..=255`).
pub const BYTE_TOKEN_COUNT: usize = 256;

cfg_if::cfg_if! {
    if #[cfg(feature = "ahash")] {
        /// Type Alias for hash maps in this crate.
        pub type BMHashMap<K, V> = ahash::AHashMap<K, V>;

        /// Type Alias for hash sets in this crate.
        pub type BMHashSet<V> = ahash::AHashSet<V>;
    } else {
        /// Type Alias for hash maps in this crate.
        pub type BMHashMap<K, V> = std::collections::HashMap<K, V>;

        /// Type Alias for hash sets in this crate.
        pub type BMHashSet<V> = std::collections::HashSet<V>;
    }
}

/// Convert a token to `u64` for error reporting and serialization.
///
/// Every [`TokenType`] is an unsigned primitive, so this never truncates
/// for the widths this crate supports.
pub fn token_to_u64<T: TokenType>(token: T) -> u64 {
    token.to_u64().unwrap_or(u64::MAX)
}

/// Build the byte token for `byte`.
pub fn byte_token<T: TokenType>(byte: u8) -> T {
    T::from_u8(byte).unwrap_or_else(T::zero)
}
