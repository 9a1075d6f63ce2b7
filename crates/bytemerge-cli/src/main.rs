use std::io::Read;
use std::path::PathBuf;

use bytemerge_resources::{ResourceOptions, ResourcePaths};
use clap::{Parser, Subcommand};

use crate::commands::{MergeStrategy, Tokenizer};

mod commands;

/// Byte-level BPE encoder and decoder.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Directory holding `merges.json` and `token_colors.json`.
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Merge table path; overrides `--data-dir`.
    #[arg(long, global = true)]
    pub merges: Option<PathBuf>,

    /// Color table path; overrides `--data-dir`.
    #[arg(long, global = true)]
    pub colors: Option<PathBuf>,

    /// Increase log verbosity (repeatable).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Silence all logging.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Encode text into comma-separated token IDs.
    Encode {
        /// Text to encode; read from stdin when absent.
        text: Option<String>,

        /// Merge strategy.
        #[arg(long, value_enum, default_value_t = MergeStrategy::Heap)]
        strategy: MergeStrategy,
    },

    /// Decode comma-separated token IDs into text.
    Decode {
        /// Token IDs, e.g. "256,32,104".
        ids: String,
    },

    /// Render tokens as colored HTML spans.
    Highlight {
        /// Text to encode, or token IDs with `--decode`.
        input: String,

        /// Treat the input as token IDs and label spans with their text.
        #[arg(long)]
        decode: bool,
    },

    /// Summarize the loaded merge table.
    Inspect {
        /// Print JSON.
        #[arg(long)]
        json: bool,
    },
}

fn init_logging(args: &Args) -> anyhow::Result<()> {
    stderrlog::new()
        .modules(["bytemerge", "bytemerge_resources", module_path!()])
        .quiet(args.quiet)
        .verbosity(1 + args.verbose as usize)
        .init()?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(&args)?;
    log::debug!("{:#?}", args);

    let paths = ResourcePaths::resolve(ResourceOptions {
        data_dir: args.data_dir.clone(),
        merges_path: args.merges.clone(),
        colors_path: args.colors.clone(),
    })?;
    let tokenizer = Tokenizer::load(&paths)?;

    let output = match &args.command {
        Command::Encode { text, strategy } => {
            let text = match text {
                Some(text) => text.clone(),
                None => {
                    let mut buf = String::new();
                    std::io::stdin().read_to_string(&mut buf)?;
                    buf
                }
            };
            tokenizer.encode(&text, *strategy)?
        }
        Command::Decode { ids } => tokenizer.decode(ids)?,
        Command::Highlight { input, decode } => tokenizer.highlight(input, *decode)?,
        Command::Inspect { json } => tokenizer.inspect(*json)?,
    };

    println!("{output}");
    Ok(())
}
