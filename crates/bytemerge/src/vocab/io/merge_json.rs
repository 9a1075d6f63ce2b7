//! # JSON Merge Table IO
//!
//! The on-disk format is a JSON object keyed by pair:
//!
//! ```json
//! { "(104, 105)": 256, "(256, 32)": 257 }
//! ```
//!
//! Keys are parsed by [`parse_pair_key`]; they are never evaluated.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::alloc::string::String;
use crate::errors::{BMResult, ConfigError};
use crate::types::{TokenType, token_to_u64};
use crate::vocab::merge_table::MergeTable;
use crate::vocab::unified_vocab::UnifiedTokenVocab;

static PAIR_KEY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[ \t]*\([ \t]*([0-9]+)[ \t]*,[ \t]*([0-9]+)[ \t]*\)[ \t]*$")
        .expect("pair key pattern is valid")
});

/// Parse a `"(int, int)"` merge table key.
///
/// ## Arguments
/// * `key` - The key text, e.g. `"(104, 105)"`.
///
/// ## Returns
/// The pair, or [`ConfigError::MalformedMergeKey`].
pub fn parse_pair_key(key: &str) -> BMResult<(u64, u64)> {
    let malformed = || ConfigError::MalformedMergeKey {
        key: key.to_string(),
    };

    let caps = PAIR_KEY_RE.captures(key).ok_or_else(malformed)?;
    let left = caps[1].parse::<u64>().map_err(|_| malformed())?;
    let right = caps[2].parse::<u64>().map_err(|_| malformed())?;

    Ok((left, right))
}

/// Format a pair as a merge table key.
pub fn format_pair_key<T: TokenType>(pair: &(T, T)) -> String {
    format!("({}, {})", pair.0, pair.1)
}

/// Load a merge table from a JSON reader.
pub fn load_merge_table_json_reader<T, R>(reader: R) -> BMResult<MergeTable<T>>
where
    T: TokenType,
    R: Read,
{
    let raw: BTreeMap<String, u64> = serde_json::from_reader(reader)?;

    let merges = raw
        .iter()
        .map(|(key, &target)| Ok((parse_pair_key(key)?, target)))
        .collect::<BMResult<Vec<_>>>()?;

    MergeTable::try_from_raw_merges(merges)
}

/// Load a merge table from a JSON file.
pub fn load_merge_table_json_path<T, P>(path: P) -> BMResult<MergeTable<T>>
where
    T: TokenType,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    log::debug!("loading merge table: {}", path.display());

    let reader = BufReader::new(File::open(path)?);
    load_merge_table_json_reader(reader)
}

/// Load, validate, and build a [`UnifiedTokenVocab`] from a JSON merge table file.
pub fn load_unified_vocab_json_path<T, P>(path: P) -> BMResult<UnifiedTokenVocab<T>>
where
    T: TokenType,
    P: AsRef<Path>,
{
    UnifiedTokenVocab::from_merge_table(load_merge_table_json_path(path)?)
}

/// Save a merge table to a JSON writer.
pub fn save_merge_table_json_writer<T, W>(
    table: &MergeTable<T>,
    writer: W,
) -> BMResult<()>
where
    T: TokenType,
    W: Write,
{
    let raw: BTreeMap<String, u64> = table
        .iter()
        .map(|(pair, target)| (format_pair_key(pair), token_to_u64(*target)))
        .collect();

    serde_json::to_writer_pretty(writer, &raw)?;
    Ok(())
}

/// Save a merge table to a JSON file.
pub fn save_merge_table_json_path<T, P>(
    table: &MergeTable<T>,
    path: P,
) -> BMResult<()>
where
    T: TokenType,
    P: AsRef<Path>,
{
    let mut writer = BufWriter::new(File::create(path)?);
    save_merge_table_json_writer(table, &mut writer)?;
    writer.flush()?;
    Ok(())
}
