//! # pawmate-cli: A CLI for `pawmate`
//!
//! This is the main entry point for the `pawmate` command-line interface:
//! suggest follow-up prompts for analysis text, format assistant output
//! into renderable markup, and parse full analysis responses.

mod config;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use pawmate::{parse_analysis, suggest_prompts, Dialect, PromptCatalog};
use std::io::Read;
use tracing_subscriber::{fmt, EnvFilter};

// --- CLI Definition ---

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Path to a YAML prompt catalog override file
    #[arg(long, env = "PAWMATE_PROMPTS", global = true)]
    prompts: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Suggest follow-up prompts for free-form analysis text
    Suggest(SuggestArgs),
    /// Format assistant text into renderable markup
    Format(FormatArgs),
    /// Parse a full analysis response and suggest follow-up prompts
    Analyze(AnalyzeArgs),
}

#[derive(Parser, Debug)]
struct SuggestArgs {
    /// Read text from this file instead of stdin
    #[arg(long)]
    file: Option<String>,
}

#[derive(Parser, Debug)]
struct FormatArgs {
    /// The markup dialect to apply ("chat" or "advice")
    #[arg(long, default_value = "chat")]
    dialect: String,
    /// Read text from this file instead of stdin
    #[arg(long)]
    file: Option<String>,
}

#[derive(Parser, Debug)]
struct AnalyzeArgs {
    /// Read the response from this file instead of stdin
    #[arg(long)]
    file: Option<String>,
}

// --- Main Application Entry ---

fn main() -> Result<()> {
    let subscriber = fmt::Subscriber::builder()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env())
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();
    let catalog = config::load_catalog(cli.prompts.as_deref())?;

    match &cli.command {
        Commands::Suggest(args) => handle_suggest(&catalog, args),
        Commands::Format(args) => handle_format(args),
        Commands::Analyze(args) => handle_analyze(&catalog, args),
    }
}

// --- Command Handlers ---

fn handle_suggest(catalog: &PromptCatalog, args: &SuggestArgs) -> Result<()> {
    let text = read_input(args.file.as_deref())?;
    let prompts = pawmate::classify(catalog, &[&text]);
    println!("{}", serde_json::to_string_pretty(&prompts)?);
    Ok(())
}

fn handle_format(args: &FormatArgs) -> Result<()> {
    let dialect = match args.dialect.as_str() {
        "chat" => Dialect::Chat,
        "advice" => Dialect::Advice,
        other => bail!("Unknown dialect `{other}`. Expected `chat` or `advice`."),
    };

    let text = read_input(args.file.as_deref())?;
    println!("{}", pawmate::format(&text, dialect));
    Ok(())
}

fn handle_analyze(catalog: &PromptCatalog, args: &AnalyzeArgs) -> Result<()> {
    let text = read_input(args.file.as_deref())?;
    let analysis = parse_analysis(&text)?;
    let prompts = suggest_prompts(catalog, &analysis);

    let output = serde_json::json!({
        "analysis": analysis,
        "suggested_prompts": prompts,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn read_input(file: Option<&str>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file '{path}'")),
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read from stdin")?;
            Ok(buffer)
        }
    }
}
