//! # Token List Parsing

use crate::alloc::string::String;
use crate::alloc::vec::Vec;
use crate::errors::{BMError, BMResult};
use crate::types::TokenType;

/// Parse a comma-separated token list, such as `"256, 32,104"`.
///
/// Whitespace around entries is ignored. An empty (or all-whitespace)
/// string is the empty list.
///
/// ## Returns
/// The tokens, or [`BMError::InvalidTokenList`] naming the first bad entry.
pub fn parse_token_list<T: TokenType>(text: &str) -> BMResult<Vec<T>> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }

    text.split(',')
        .map(|entry| {
            let entry = entry.trim();
            entry
                .parse::<u64>()
                .ok()
                .and_then(T::from_u64)
                .ok_or_else(|| BMError::InvalidTokenList {
                    entry: entry.to_string(),
                })
        })
        .collect()
}

/// Format tokens as a comma-separated list.
pub fn format_token_list<T: TokenType>(tokens: &[T]) -> String {
    tokens
        .iter()
        .map(|t| t.to_string())
        .collect::<Vec<_>>()
        .join(",")
}
