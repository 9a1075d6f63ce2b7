//! # Token Color Table
//!
//! A display-only `{ T -> color }` table, stored as a JSON object keyed by
//! the token ID's decimal text:
//!
//! ```json
//! { "256": "#FFB3BA", "257": "#BAFFC9" }
//! ```

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::alloc::string::String;
use crate::errors::{BMResult, ConfigError};
use crate::types::{BMHashMap, TokenType};

/// The color for tokens with no table entry.
pub const DEFAULT_TOKEN_COLOR: &str = "#E0E0E0";

/// Token ID to display color table.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorTable<T: TokenType> {
    colors: BMHashMap<T, String>,
    default_color: String,
}

impl<T: TokenType> Default for ColorTable<T> {
    fn default() -> Self {
        Self {
            colors: BMHashMap::default(),
            default_color: DEFAULT_TOKEN_COLOR.to_string(),
        }
    }
}

impl<T: TokenType> ColorTable<T> {
    /// Build a table from `(token, color)` entries.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (T, S)>,
        S: Into<String>,
    {
        Self {
            colors: entries.into_iter().map(|(t, c)| (t, c.into())).collect(),
            ..Default::default()
        }
    }

    /// Replace the fallback color.
    pub fn with_default_color<S: Into<String>>(
        self,
        default_color: S,
    ) -> Self {
        Self {
            default_color: default_color.into(),
            ..self
        }
    }

    /// The number of explicit entries.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Does the table have no explicit entries?
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// The fallback color.
    pub fn default_color(&self) -> &str {
        &self.default_color
    }

    /// The color for a token; the default color when absent.
    pub fn color_for(
        &self,
        token: &T,
    ) -> &str {
        self.colors
            .get(token)
            .map(String::as_str)
            .unwrap_or(&self.default_color)
    }
}

/// Load a color table from a JSON reader.
pub fn load_color_table_json_reader<T, R>(reader: R) -> BMResult<ColorTable<T>>
where
    T: TokenType,
    R: Read,
{
    let raw: BTreeMap<String, String> = serde_json::from_reader(reader)?;

    let entries = raw
        .into_iter()
        .map(|(key, color)| {
            let token = key
                .trim()
                .parse::<u64>()
                .ok()
                .and_then(T::from_u64)
                .ok_or(ConfigError::InvalidColorKey { key })?;
            Ok((token, color))
        })
        .collect::<BMResult<Vec<_>>>()?;

    Ok(ColorTable::from_entries(entries))
}

/// Load a color table from a JSON file.
pub fn load_color_table_json_path<T, P>(path: P) -> BMResult<ColorTable<T>>
where
    T: TokenType,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    log::debug!("loading color table: {}", path.display());

    let reader = BufReader::new(File::open(path)?);
    load_color_table_json_reader(reader)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::BMError;

    #[test]
    fn test_color_for() {
        let table = ColorTable::<u32>::from_entries([(256, "#FF0000"), (32, "#00FF00")]);
        assert_eq!(table.len(), 2);
        assert!(!table.is_empty());
        assert_eq!(table.color_for(&256), "#FF0000");
        assert_eq!(table.color_for(&32), "#00FF00");
        assert_eq!(table.color_for(&257), DEFAULT_TOKEN_COLOR);

        let table = table.with_default_color("white");
        assert_eq!(table.default_color(), "white");
        assert_eq!(table.color_for(&257), "white");

        let empty = ColorTable::<u16>::default();
        assert!(empty.is_empty());
        assert_eq!(empty.color_for(&0), "#E0E0E0");
    }

    #[test]
    fn test_load_reader() {
        let json = r##"{ "256": "#FFB3BA", " 104 ": "#BAFFC9" }"##;
        let table: ColorTable<u32> = load_color_table_json_reader(json.as_bytes()).unwrap();
        assert_eq!(table.color_for(&256), "#FFB3BA");
        assert_eq!(table.color_for(&104), "#BAFFC9");
        assert_eq!(table.color_for(&105), DEFAULT_TOKEN_COLOR);
    }

    #[test]
    fn test_load_rejects_bad_keys() {
        let err = load_color_table_json_reader::<u32, _>(r##"{"(1, 2)": "#FFF"}"##.as_bytes())
            .unwrap_err();
        assert!(matches!(
            err,
            BMError::Config(ConfigError::InvalidColorKey { ref key }) if key == "(1, 2)"
        ));

        let err = load_color_table_json_reader::<u16, _>(r##"{"70000": "#FFF"}"##.as_bytes())
            .unwrap_err();
        assert!(err.is_config_error());

        let err = load_color_table_json_reader::<u32, _>(r##"{"1": 7}"##.as_bytes()).unwrap_err();
        assert!(matches!(err, BMError::Json(_)));
    }
}
