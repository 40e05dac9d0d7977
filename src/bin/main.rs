use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use crossterm::style::Stylize;
use decoder_core::core::types::TallyEntry;
use decoder_core::{Analysis, CodingLabel, DecoderEngine, HyphenRule, JobAd, WordLists};
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "decoder", about = "Find gender-coded wording in job advertisements")]
struct Cli {
    /// JSON file with word lists; the bundled English/Swedish lists otherwise
    #[arg(long, global = true, env = "DECODER_WORDLISTS")]
    wordlists: Option<PathBuf>,

    /// Split tokens that start with a hyphen as well
    #[arg(long, global = true)]
    split_leading_hyphen: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Analyse an advertisement read from a file or stdin
    Analyze {
        #[arg(short, long, default_value = "en")]
        language: String,
        /// Read the advertisement from this file instead of stdin
        #[arg(short, long)]
        file: Option<PathBuf>,
        /// Keep the advertisement in this store file
        #[arg(long, env = "DECODER_STORE")]
        store: Option<PathBuf>,
        #[arg(long)]
        json: bool,
    },
    /// Show a stored advertisement and its word tally
    Show {
        hash: String,
        #[arg(long, env = "DECODER_STORE")]
        store: PathBuf,
        #[arg(long)]
        json: bool,
    },
    /// Re-run the analysis of a stored advertisement with the current lists
    Reanalyse {
        hash: String,
        #[arg(long, env = "DECODER_STORE")]
        store: PathBuf,
    },
    /// List the configured languages
    Languages,
}

/// Logs go to stderr so stdout stays clean for results.
/// JSON formatting when `RUST_LOG_FORMAT=json`.
fn init_tracing() {
    let use_json = std::env::var("RUST_LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false);
    let filter = EnvFilter::builder()
        .with_default_directive(Level::INFO.into())
        .from_env_lossy();

    if use_json {
        tracing_subscriber::registry()
            .with(fmt::layer().json().flatten_event(true).with_writer(io::stderr))
            .with(filter)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(io::stderr))
            .with(filter)
            .init();
    }
}

fn load_word_lists(cli: &Cli) -> Result<WordLists> {
    let lists = match &cli.wordlists {
        Some(path) => WordLists::from_json_file(path)
            .with_context(|| format!("loading word lists from {}", path.display()))?,
        None => WordLists::builtin(),
    };
    let rule = if cli.split_leading_hyphen {
        HyphenRule::SplitAll
    } else {
        HyphenRule::PreserveLeading
    };
    Ok(lists.with_hyphen_rule(rule))
}

fn read_text(file: Option<&Path>, input: &mut dyn Read) -> Result<String> {
    let text = match file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?,
        None => {
            let mut text = String::new();
            input.read_to_string(&mut text).context("reading stdin")?;
            text
        }
    };
    Ok(text)
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    run(cli, &mut io::stdin(), &mut io::stdout().lock())
}

/// Executes one command. Advertisement text comes from `input` when no file
/// is given; results are written to `out`.
fn run(cli: Cli, input: &mut dyn Read, out: &mut dyn Write) -> Result<()> {
    let lists = Arc::new(load_word_lists(&cli)?);

    match cli.command {
        Command::Analyze { language, file, store, json } => {
            let text = read_text(file.as_deref(), input)?;
            match store {
                Some(path) => {
                    let engine = DecoderEngine::from_file_or_new(&path, lists)
                        .with_context(|| format!("opening store {}", path.display()))?;
                    let ad = engine.submit(&text, &language)?;
                    engine.save_store()?;
                    if json {
                        writeln!(out, "{}", serde_json::to_string_pretty(&ad)?)?;
                    } else {
                        print_job_ad(out, &ad, &engine.tally(&ad.hash))?;
                    }
                }
                None => {
                    let analysis = decoder_core::analyze(&lists, &text, &language)?;
                    if json {
                        writeln!(out, "{}", serde_json::to_string_pretty(&analysis)?)?;
                    } else {
                        print_analysis(out, &analysis)?;
                    }
                }
            }
        }
        Command::Show { hash, store, json } => {
            let engine = open_existing(&store, lists)?;
            let Some(ad) = engine.job_ad(&hash) else {
                bail!("no advertisement {hash} in {}", store.display());
            };
            let tally = engine.tally(&hash);
            if json {
                let body = serde_json::json!({ "ad": ad, "tally": tally });
                writeln!(out, "{}", serde_json::to_string_pretty(&body)?)?;
            } else {
                print_job_ad(out, &ad, &tally)?;
            }
        }
        Command::Reanalyse { hash, store } => {
            let engine = open_existing(&store, lists)?;
            let ad = engine.reanalyse(&hash)?;
            engine.save_store()?;
            print_job_ad(out, &ad, &engine.tally(&hash))?;
        }
        Command::Languages => {
            for (code, name) in lists.languages() {
                writeln!(out, "{code}\t{name}")?;
            }
        }
    }
    Ok(())
}

fn open_existing(path: &Path, lists: Arc<WordLists>) -> Result<DecoderEngine> {
    if !path.exists() {
        bail!("store {} does not exist", path.display());
    }
    DecoderEngine::from_file_or_new(path, lists)
        .with_context(|| format!("opening store {}", path.display()))
}

fn print_job_ad(out: &mut dyn Write, ad: &JobAd, tally: &[(String, TallyEntry)]) -> io::Result<()> {
    writeln!(out, "{} {}", "Advertisement".bold(), ad.hash.as_str().cyan())?;
    writeln!(
        out,
        "Language: {}  Submitted: {}",
        ad.language,
        ad.date.format("%Y-%m-%d %H:%M UTC")
    )?;
    print_analysis(
        out,
        &Analysis {
            masculine_words: ad.masculine_words.clone(),
            masculine_count: ad.masculine_word_count,
            feminine_words: ad.feminine_words.clone(),
            feminine_count: ad.feminine_word_count,
            coding: ad.coding,
        },
    )?;
    if !tally.is_empty() {
        writeln!(out, "\n{}", "Word tally:".bold())?;
        for (word, entry) in tally {
            writeln!(out, "  {:<20} {:<10} {}", word, entry.gender, entry.count)?;
        }
    }
    Ok(())
}

fn print_analysis(out: &mut dyn Write, analysis: &Analysis) -> io::Result<()> {
    let label = analysis.coding.as_str();
    let styled = match analysis.coding {
        CodingLabel::Empty | CodingLabel::Neutral => label.white(),
        CodingLabel::FeminineCoded | CodingLabel::StronglyFeminineCoded => label.magenta(),
        CodingLabel::MasculineCoded | CodingLabel::StronglyMasculineCoded => label.blue(),
    };
    writeln!(out, "\nCoding: {}", styled.bold())?;
    writeln!(
        out,
        "Masculine-coded words ({}): {}",
        analysis.masculine_count,
        analysis.masculine_words.join(", ")
    )?;
    writeln!(
        out,
        "Feminine-coded words ({}): {}",
        analysis.feminine_count,
        analysis.feminine_words.join(", ")
    )
}
