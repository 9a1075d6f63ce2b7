//! Subcommand implementations.

use std::sync::Arc;

use anyhow::Context;
use bytemerge::decoders::{DictionaryDecoder, TokenDecoder, format_token_list, parse_token_list};
use bytemerge::encoders::merge_contexts::{HeapMergeContextBuilder, SweepMergeContextBuilder};
use bytemerge::encoders::{MergeEncoder, TokenEncoder};
use bytemerge::highlight::{ColorTable, TokenHighlighter, load_color_table_json_path};
use bytemerge::vocab::UnifiedTokenVocab;
use bytemerge::vocab::io::load_unified_vocab_json_path;
use bytemerge_resources::ResourcePaths;
use serde::Serialize;

type T = u32;

/// Which [`bytemerge::encoders::MergeContext`] to encode with.
#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum MergeStrategy {
    /// Priority queue of adjacent pairs.
    Heap,

    /// Rescan and rewrite the best pair each round.
    Sweep,
}

/// Summary printed by `inspect`.
#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct VocabSummary {
    pub merges: usize,
    pub vocab_size: usize,
    pub max_token: T,
}

/// The loaded tables.
pub struct Tokenizer {
    vocab: Arc<UnifiedTokenVocab<T>>,
    colors: Arc<ColorTable<T>>,
}

impl Tokenizer {
    pub fn new(
        vocab: Arc<UnifiedTokenVocab<T>>,
        colors: Arc<ColorTable<T>>,
    ) -> Self {
        Self { vocab, colors }
    }

    /// Load the tables named by `paths`.
    pub fn load(paths: &ResourcePaths) -> anyhow::Result<Self> {
        let vocab = load_unified_vocab_json_path::<T, _>(&paths.merges_path).with_context(|| {
            format!("failed to load merge table {}", paths.merges_path.display())
        })?;

        let colors = match &paths.colors_path {
            Some(path) => load_color_table_json_path::<T, _>(path)
                .with_context(|| format!("failed to load color table {}", path.display()))?,
            None => ColorTable::default(),
        };

        log::info!(
            "loaded {} merges ({} tokens), {} colors",
            vocab.merge_table().len(),
            vocab.byte_vocab().len(),
            colors.len()
        );

        Ok(Self::new(Arc::new(vocab), Arc::new(colors)))
    }

    pub fn encode(
        &self,
        text: &str,
        strategy: MergeStrategy,
    ) -> anyhow::Result<String> {
        let tokens = match strategy {
            MergeStrategy::Heap => {
                MergeEncoder::<T, HeapMergeContextBuilder<T>>::new(self.vocab.clone())
                    .try_encode(text)?
            }
            MergeStrategy::Sweep => {
                MergeEncoder::<T, SweepMergeContextBuilder<T>>::new(self.vocab.clone())
                    .try_encode(text)?
            }
        };
        log::debug!("{} bytes -> {} tokens", text.len(), tokens.len());

        Ok(format_token_list(&tokens))
    }

    pub fn decode(
        &self,
        ids: &str,
    ) -> anyhow::Result<String> {
        let tokens = parse_token_list::<T>(ids)?;
        let decoded = DictionaryDecoder::from_unified_vocab(self.vocab.clone()).try_decode_checked(&tokens)?;
        if decoded.lossy {
            log::warn!("decoded bytes are not valid UTF-8; replaced with U+FFFD");
        }
        Ok(decoded.text)
    }

    pub fn highlight(
        &self,
        input: &str,
        decode: bool,
    ) -> anyhow::Result<String> {
        let highlighter = TokenHighlighter::new(self.vocab.clone(), self.colors.clone());
        if decode {
            let tokens = parse_token_list::<T>(input)?;
            Ok(highlighter.highlight_decoded(&tokens)?)
        } else {
            let tokens = MergeEncoder::<T>::new(self.vocab.clone()).try_encode(input)?;
            Ok(highlighter.highlight_token_ids(&tokens))
        }
    }

    pub fn summary(&self) -> VocabSummary {
        VocabSummary {
            merges: self.vocab.merge_table().len(),
            vocab_size: self.vocab.byte_vocab().len(),
            max_token: self.vocab.max_token(),
        }
    }

    pub fn inspect(
        &self,
        json: bool,
    ) -> anyhow::Result<String> {
        let summary = self.summary();
        if json {
            return Ok(serde_json::to_string_pretty(&summary)?);
        }
        Ok(format!(
            "merges: {}\nvocab size: {}\nmax token: {}",
            summary.merges, summary.vocab_size, summary.max_token
        ))
    }
}
