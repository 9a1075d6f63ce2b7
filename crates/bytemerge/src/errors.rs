//! # Error Types
//!
//! Configuration errors (a bad merge or color table) and per-call
//! decode errors (an unknown token ID) are kept as distinct variants,
//! so hosts can tell startup failures from request failures.
//!
//! Malformed UTF-8 in a decoded buffer is *not* an error;
//! see [`crate::decoders::DecodedText`].

/// Errors raised while validating static configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A merge targets one of the reserved byte IDs `0..=255`.
    #[error("merge target {target} collides with the reserved byte range 0..=255")]
    ReservedTarget {
        /// The offending target ID.
        target: u64,
    },

    /// Two merges assign the same target ID.
    #[error("merge target {target} is assigned more than once")]
    DuplicateTarget {
        /// The repeated target ID.
        target: u64,
    },

    /// A merge references an ID which is neither a byte nor an earlier merge.
    #[error("merge ({left}, {right}) -> {target} references undefined token {element}")]
    UndefinedPairElement {
        /// Left pair element.
        left: u64,
        /// Right pair element.
        right: u64,
        /// Merge target.
        target: u64,
        /// The undefined element.
        element: u64,
    },

    /// The same pair is listed twice.
    #[error("pair ({left}, {right}) is merged by both {first} and {second}")]
    DuplicatePair {
        /// Left pair element.
        left: u64,
        /// Right pair element.
        right: u64,
        /// First target.
        first: u64,
        /// Second target.
        second: u64,
    },

    /// A configured ID does not fit the selected token type.
    #[error("token id {value} does not fit the token type")]
    TokenOutOfRange {
        /// The raw value.
        value: u64,
    },

    /// A merge table key is not of the form `"(int, int)"`.
    #[error("malformed merge key {key:?}; expected \"(int, int)\"")]
    MalformedMergeKey {
        /// The rejected key.
        key: String,
    },

    /// A color table key is not a token ID.
    #[error("malformed color table key {key:?}; expected a token id")]
    InvalidColorKey {
        /// The rejected key.
        key: String,
    },
}

/// Crate error type.
#[derive(Debug, thiserror::Error)]
pub enum BMError {
    /// Invalid static configuration; fatal to startup.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A token ID presented for decoding has no vocabulary entry.
    #[error("unknown token id: {token}")]
    UnknownToken {
        /// The unknown ID.
        token: u64,
    },

    /// A textual token list could not be parsed.
    #[error("invalid token list entry {entry:?}")]
    InvalidTokenList {
        /// The rejected entry.
        entry: String,
    },

    /// JSON (de)serialization failure.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// IO failure.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl BMError {
    /// Is this a configuration error?
    pub fn is_config_error(&self) -> bool {
        matches!(self, BMError::Config(_))
    }

    /// Is this an unknown token error?
    pub fn is_unknown_token(&self) -> bool {
        matches!(self, BMError::UnknownToken { .. })
    }
}

/// Crate result type.
pub type BMResult<T> = Result<T, BMError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds_are_distinct() {
        let err: BMError = ConfigError::ReservedTarget { target: 12 }.into();
        assert!(err.is_config_error());
        assert!(!err.is_unknown_token());

        let err = BMError::UnknownToken { token: 9999 };
        assert!(err.is_unknown_token());
        assert!(!err.is_config_error());
        assert_eq!(err.to_string(), "unknown token id: 9999");
    }

    #[test]
    fn test_config_display() {
        let err = ConfigError::UndefinedPairElement {
            left: 104,
            right: 300,
            target: 256,
            element: 300,
        };
        assert_eq!(
            err.to_string(),
            "merge (104, 300) -> 256 references undefined token 300"
        );
    }
}
