//! # HTML Token Highlighting

use core::fmt::Write;

use crate::alloc::string::String;
use crate::alloc::sync::Arc;
use crate::errors::{BMError, BMResult};
use crate::highlight::color_table::ColorTable;
use crate::types::{TokenType, token_to_u64};
use crate::vocab::UnifiedTokenVocab;

/// Escape text for inclusion in HTML element content.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// Renders token sequences as colored HTML spans.
#[derive(Debug, Clone)]
pub struct TokenHighlighter<T: TokenType> {
    vocab: Arc<UnifiedTokenVocab<T>>,
    colors: Arc<ColorTable<T>>,
}

impl<T: TokenType> TokenHighlighter<T> {
    /// Create a highlighter.
    pub fn new(
        vocab: Arc<UnifiedTokenVocab<T>>,
        colors: Arc<ColorTable<T>>,
    ) -> Self {
        Self { vocab, colors }
    }

    /// The color table.
    pub fn colors(&self) -> &ColorTable<T> {
        &self.colors
    }

    fn push_span(
        &self,
        out: &mut String,
        token: &T,
        label: &str,
    ) {
        // Writing to a String is infallible.
        let _ = write!(
            out,
            r#"<span style="background-color: {}; padding: 2px; border-radius: 5px; margin: 2px">{}</span>"#,
            escape_html(self.colors.color_for(token)),
            label,
        );
    }

    /// Render one span per token, labelled with the token ID.
    pub fn highlight_token_ids(
        &self,
        tokens: &[T],
    ) -> String {
        let mut out = String::new();
        for token in tokens {
            self.push_span(&mut out, token, &token.to_string());
            out.push(' ');
        }
        out
    }

    /// Render one span per token, labelled with the token's own bytes.
    ///
    /// Each token's bytes are decoded on their own, so a token holding part
    /// of a multi-byte character shows `U+FFFD`.
    ///
    /// ## Returns
    /// [`BMError::UnknownToken`] if any token is not in the vocabulary.
    pub fn highlight_decoded(
        &self,
        tokens: &[T],
    ) -> BMResult<String> {
        let mut out = String::new();
        for token in tokens {
            let span = self
                .vocab
                .lookup_span(token)
                .ok_or_else(|| BMError::UnknownToken {
                    token: token_to_u64(*token),
                })?;
            let label = escape_html(&String::from_utf8_lossy(span));
            self.push_span(&mut out, token, &label);
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn highlighter() -> TokenHighlighter<u32> {
        let vocab = UnifiedTokenVocab::try_from_merges([((104, 105), 256), ((60, 98), 257)]).unwrap();
        let colors = ColorTable::from_entries([(256, "#FF0000")]);
        TokenHighlighter::new(Arc::new(vocab), Arc::new(colors))
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("a<b>&\"'"), "a&lt;b&gt;&amp;&quot;&#39;");
        assert_eq!(escape_html("नमस्ते"), "नमस्ते");
    }

    #[test]
    fn test_highlight_token_ids() {
        let h = highlighter();
        assert_eq!(h.highlight_token_ids(&[]), "");
        assert_eq!(
            h.highlight_token_ids(&[256, 33]),
            concat!(
                r#"<span style="background-color: #FF0000; padding: 2px; border-radius: 5px; margin: 2px">256</span> "#,
                r#"<span style="background-color: #E0E0E0; padding: 2px; border-radius: 5px; margin: 2px">33</span> "#,
            )
        );
    }

    #[test]
    fn test_highlight_decoded() {
        let h = highlighter();
        assert_eq!(
            h.highlight_decoded(&[256, 257]).unwrap(),
            concat!(
                r#"<span style="background-color: #FF0000; padding: 2px; border-radius: 5px; margin: 2px">hi</span>"#,
                r#"<span style="background-color: #E0E0E0; padding: 2px; border-radius: 5px; margin: 2px">&lt;b</span>"#,
            )
        );

        // A lone continuation byte renders as U+FFFD, not chr(id).
        let html = h.highlight_decoded(&[0xA8]).unwrap();
        assert!(html.contains(">\u{FFFD}</span>"));

        let err = h.highlight_decoded(&[256, 9999]).unwrap_err();
        assert!(err.is_unknown_token());
    }
}
