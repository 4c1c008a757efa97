//! precis CLI - Frequency-Based Extractive Summarization
//!
//! Command-line interface for summarizing documents and inspecting the word
//! weights behind a summary.

use clap::{Args, Parser, Subcommand, ValueEnum};
use log::{error, info};
use precis::{
    extract_article, Config, PrecisError, Result, SplitterKind, StopwordSet, Summarizer,
    SummaryOrder,
};
use serde::Serialize;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "precis")]
#[command(version)]
#[command(about = "Frequency-based extractive summarizer", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize a document
    Summarize {
        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        scoring: ScoringArgs,

        /// Number of sentences in the summary
        #[arg(short = 'n', long, default_value = "3")]
        sentences: usize,

        /// Sentence order (score, document)
        #[arg(long, default_value = "score")]
        order: SummaryOrder,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Show the highest-weighted words of a document
    Keywords {
        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        scoring: ScoringArgs,

        /// Number of words to show
        #[arg(short = 'k', long, default_value = "10")]
        count: usize,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Show how a document is split into sentences
    Sentences {
        #[command(flatten)]
        input: InputArgs,

        /// Sentence splitter (rules, unicode)
        #[arg(long, default_value = "rules")]
        splitter: SplitterKind,
    },
}

#[derive(Args)]
struct InputArgs {
    /// Input file (use "-" for stdin)
    #[arg(short, long)]
    input: Option<String>,

    /// Direct text input (alternative to --input)
    #[arg(short, long)]
    text: Option<String>,

    /// Treat the input as HTML and summarize its paragraph text
    #[arg(long)]
    html: bool,
}

#[derive(Args)]
struct ScoringArgs {
    /// JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Lower frequency cutoff (overrides the config file)
    #[arg(long)]
    min_cut: Option<f64>,

    /// Upper frequency cutoff (overrides the config file)
    #[arg(long)]
    max_cut: Option<f64>,

    /// Stopword file, one word per line (replaces the built-in English list)
    #[arg(long)]
    stopwords: Option<PathBuf>,

    /// Sentence splitter (rules, unicode)
    #[arg(long)]
    splitter: Option<SplitterKind>,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Document text with the page title when it came from HTML.
struct Document {
    title: Option<String>,
    text: String,
}

#[derive(Serialize)]
struct SummaryOutput<'a> {
    title: Option<&'a str>,
    #[serde(flatten)]
    summary: &'a precis::Summary,
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let result = match cli.command {
        Commands::Summarize {
            input,
            scoring,
            sentences,
            order,
            format,
        } => summarize(input, scoring, sentences, order, format),

        Commands::Keywords {
            input,
            scoring,
            count,
            format,
        } => keywords(input, scoring, count, format),

        Commands::Sentences { input, splitter } => show_sentences(input, splitter),
    };

    if let Err(e) = result {
        error!("Error: {}", e);
        std::process::exit(1);
    }
}

fn read_document(args: &InputArgs) -> Result<Document> {
    let raw = match (&args.input, &args.text) {
        (Some(path), _) if path == "-" => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
        (Some(path), _) => {
            let path = PathBuf::from(path);
            if !path.exists() {
                return Err(PrecisError::FileNotFound(path));
            }
            fs::read_to_string(&path)?
        }
        (_, Some(t)) => t.clone(),
        (None, None) => {
            return Err(PrecisError::InvalidArgument(
                "No input provided. Use --input <file>, --input - for stdin, or --text <text>"
                    .to_string(),
            ));
        }
    };

    if args.html {
        let extracted = extract_article(&raw)?;
        info!("Extracted {} bytes of paragraph text", extracted.text.len());
        Ok(Document {
            title: extracted.title,
            text: extracted.text,
        })
    } else {
        Ok(Document {
            title: None,
            text: raw,
        })
    }
}

fn build_summarizer(args: &ScoringArgs) -> Result<Summarizer> {
    let mut config = match &args.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    if let Some(min_cut) = args.min_cut {
        config.summarizer.min_cut = min_cut;
    }
    if let Some(max_cut) = args.max_cut {
        config.summarizer.max_cut = max_cut;
    }
    if let Some(splitter) = args.splitter {
        config.text.splitter = splitter;
    }

    info!(
        "Cutoffs: min {} / max {}, splitter {:?}",
        config.summarizer.min_cut, config.summarizer.max_cut, config.text.splitter
    );

    let summarizer = Summarizer::with_config(config)?;
    match &args.stopwords {
        Some(path) => {
            let stopwords = StopwordSet::from_file(path)?;
            info!("Using {} stopwords from {}", stopwords.len(), path.display());
            Ok(summarizer.with_stopwords(Arc::new(stopwords)))
        }
        None => Ok(summarizer),
    }
}

fn summarize(
    input: InputArgs,
    scoring: ScoringArgs,
    n: usize,
    order: SummaryOrder,
    format: OutputFormat,
) -> Result<()> {
    let document = read_document(&input)?;
    let summarizer = build_summarizer(&scoring)?;

    let summary = summarizer.summarize_detailed(&document.text, n)?.ordered(order);
    info!(
        "Selected {} of {} sentences",
        summary.sentences.len(),
        summary.sentence_count
    );

    match format {
        OutputFormat::Text => {
            if let Some(title) = &document.title {
                println!("{}", title);
                println!();
            }
            for sentence in &summary.sentences {
                println!("{}", sentence.text);
            }
        }
        OutputFormat::Json => {
            let output = SummaryOutput {
                title: document.title.as_deref(),
                summary: &summary,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}

fn keywords(input: InputArgs, scoring: ScoringArgs, count: usize, format: OutputFormat) -> Result<()> {
    let document = read_document(&input)?;
    let summarizer = build_summarizer(&scoring)?;
    let keywords = summarizer.keywords(&document.text, count)?;

    match format {
        OutputFormat::Text => {
            if keywords.is_empty() {
                println!("No words passed the frequency cutoffs.");
            }
            for (word, weight) in &keywords {
                println!("  {:.4}  {}", weight, word);
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&keywords)?);
        }
    }

    Ok(())
}

fn show_sentences(input: InputArgs, splitter: SplitterKind) -> Result<()> {
    let document = read_document(&input)?;
    let sentences = splitter.split(&document.text);

    println!("Sentences: {}", sentences.len());
    for (i, sentence) in sentences.iter().enumerate() {
        println!("{:>4}  {}", i, sentence);
    }

    Ok(())
}
