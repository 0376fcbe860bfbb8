//! CLI command definitions for verse-forge.
//!
//! `compose` collects the preference record from flags, compiles it, and
//! runs one generation request against the configured OpenAI-compatible
//! endpoint. `structures` prints the built-in poem-structure guide.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::Parser;
use tracing::info;

use crate::catalog::STRUCTURE_GUIDES;
use crate::compiler::compile;
use crate::error::GenerationError;
use crate::generator::PoemGenerator;
use crate::llm::openai::DEFAULT_MODEL;
use crate::llm::OpenAiProvider;
use crate::preferences::{LengthBucket, Mood, Poet, PoemPreferences, PoemStructure, PoemType};

/// Default filename for the plain-text poem export.
const DEFAULT_OUTPUT_FILE: &str = "verse_crafter_output.txt";

/// Personalized poem generator driven by an LLM.
#[derive(Parser)]
#[command(name = "verse-forge")]
#[command(about = "Compose personalized poems shaped by mood, theme, and style")]
#[command(version)]
#[command(
    long_about = "verse-forge compiles a set of poem preferences into a prompt and sends it to an \
OpenAI-compatible completion endpoint in a single shot.\n\nExample usage:\n  verse-forge compose \
--poem-type romantic --theme \"lost love\" --mood wistful --structure haiku --length very-short"
)]
pub struct Cli {
    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short, long, default_value = "info", global = true)]
    pub log_level: String,
}

/// Available CLI subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Compose a poem from the given preferences.
    #[command(alias = "gen")]
    Compose(Box<ComposeArgs>),

    /// Print the poem-structure reference guide.
    Structures,
}

/// Arguments for `verse-forge compose`.
#[derive(Parser, Debug)]
pub struct ComposeArgs {
    /// What kind of poem to write.
    #[arg(long, value_enum)]
    pub poem_type: PoemType,

    /// Central theme or subject (e.g. "lost love", "forest at dawn").
    /// Leaving it empty weakens the prompt but is not an error.
    #[arg(long, default_value = "")]
    pub theme: String,

    /// Who the poem is for (e.g. "myself", "a friend").
    #[arg(long)]
    pub recipient: Option<String>,

    /// Tone or mood for the poem.
    #[arg(long, value_enum)]
    pub mood: Mood,

    /// Structural form of the poem.
    #[arg(long, value_enum)]
    pub structure: PoemStructure,

    /// Preferred poem length.
    #[arg(long, value_enum)]
    pub length: LengthBucket,

    /// Use this exact title instead of letting the model invent one.
    #[arg(long)]
    pub custom_title: Option<String>,

    /// Words or phrases the poem should include (e.g. "moonlight, echo").
    #[arg(long)]
    pub keywords: Option<String>,

    /// Mimic the style of a famous poet.
    #[arg(long, value_enum)]
    pub mimic_poet: Option<Poet>,

    /// Add a short explanation of the poem after it.
    #[arg(long)]
    pub explain: bool,

    /// Model identifier to use for generation.
    #[arg(long, default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Override the API base URL (any OpenAI-compatible endpoint).
    #[arg(long)]
    pub base_url: Option<String>,

    /// API key for the completion endpoint.
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Write the poem to a plain-text file. With no value, writes to
    /// "verse_crafter_output.txt" in the current directory.
    #[arg(short, long, num_args = 0..=1, default_missing_value = DEFAULT_OUTPUT_FILE)]
    pub output: Option<PathBuf>,

    /// Print the compiled instruction set instead of calling the API.
    /// Requires no credential.
    #[arg(long)]
    pub dry_run: bool,

    /// Sampling temperature (0.0 - 2.0).
    #[arg(long)]
    pub temperature: Option<f64>,

    /// Cap on generated tokens.
    #[arg(long)]
    pub max_tokens: Option<u32>,
}

impl ComposeArgs {
    /// Assemble the preference record. Optional flags pass through as given;
    /// the compiler treats empty strings as absent.
    fn to_preferences(&self) -> PoemPreferences {
        PoemPreferences {
            poem_type: self.poem_type,
            theme: self.theme.clone(),
            recipient: self.recipient.clone(),
            mood: self.mood,
            structure: self.structure,
            length: self.length,
            custom_title: self.custom_title.clone(),
            keywords: self.keywords.clone(),
            mimic_poet: self.mimic_poet,
            wants_explanation: self.explain,
        }
    }
}

/// Parse command-line arguments.
pub fn parse_cli() -> Cli {
    Cli::parse()
}

/// Parse arguments and run the selected command.
pub async fn run() -> anyhow::Result<()> {
    run_with_cli(parse_cli()).await
}

/// Run the selected command with already-parsed arguments.
pub async fn run_with_cli(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Compose(args) => run_compose(*args).await,
        Commands::Structures => {
            print_structure_guide();
            Ok(())
        }
    }
}

async fn run_compose(args: ComposeArgs) -> anyhow::Result<()> {
    let prefs = args.to_preferences();

    if args.dry_run {
        let instructions = compile(&prefs);
        for (position, directive) in instructions.directives().iter().enumerate() {
            println!("{:2}. {}", position + 1, directive);
        }
        return Ok(());
    }

    // Credential check comes first: a missing key aborts before any
    // compilation or generation attempt.
    let api_key = args
        .api_key
        .clone()
        .filter(|key| !key.is_empty())
        .ok_or(GenerationError::MissingApiKey)?;

    let provider = match args.base_url.clone() {
        Some(base_url) => OpenAiProvider::with_custom_url(api_key, base_url, args.model.clone())?,
        None => OpenAiProvider::with_model(api_key, args.model.clone())?,
    };
    info!(
        model = %args.model,
        api_key = %provider.api_key_masked(),
        "Initialized generation model"
    );

    let mut generator = PoemGenerator::new(Arc::new(provider), args.model.clone());
    if let Some(temperature) = args.temperature {
        generator = generator.with_temperature(temperature);
    }
    if let Some(max_tokens) = args.max_tokens {
        generator = generator.with_max_tokens(max_tokens);
    }

    let poem = generator.compose(&prefs).await?;
    println!("{}", poem);

    if let Some(path) = args.output {
        write_output(&path, &poem)?;
        info!(path = %path.display(), "Saved poem");
    }

    Ok(())
}

/// Print the structure guide, one entry per form.
fn print_structure_guide() {
    for guide in STRUCTURE_GUIDES {
        println!("{}", guide.structure);
        println!("  {}", guide.summary);
        for line in guide.example.lines() {
            println!("  > {}", line);
        }
        println!();
    }
}

/// Write the poem to a plain-text file, newline-terminated.
fn write_output(path: &Path, poem: &str) -> std::io::Result<()> {
    let mut content = poem.to_string();
    if !content.ends_with('\n') {
        content.push('\n');
    }
    fs::write(path, content)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compose_args(extra: &[&str]) -> ComposeArgs {
        let mut argv = vec![
            "verse-forge",
            "compose",
            "--poem-type",
            "romantic",
            "--theme",
            "lost love",
            "--mood",
            "wistful",
            "--structure",
            "haiku",
            "--length",
            "very-short",
        ];
        argv.extend_from_slice(extra);
        let cli = Cli::try_parse_from(argv).expect("arguments should parse");
        match cli.command {
            Commands::Compose(args) => *args,
            _ => panic!("expected compose command"),
        }
    }

    #[test]
    fn test_compose_args_to_preferences() {
        let args = compose_args(&["--keywords", "moonlight", "--explain"]);
        let prefs = args.to_preferences();

        assert_eq!(prefs.poem_type, PoemType::Romantic);
        assert_eq!(prefs.theme, "lost love");
        assert_eq!(prefs.mood, Mood::Wistful);
        assert_eq!(prefs.structure, PoemStructure::Haiku);
        assert_eq!(prefs.length, LengthBucket::VeryShort);
        assert_eq!(prefs.keywords.as_deref(), Some("moonlight"));
        assert!(prefs.recipient.is_none());
        assert!(prefs.mimic_poet.is_none());
        assert!(prefs.wants_explanation);
    }

    #[test]
    fn test_mimic_poet_flag_parses_to_enum() {
        let args = compose_args(&["--mimic-poet", "emily-dickinson"]);
        assert_eq!(args.to_preferences().mimic_poet, Some(Poet::EmilyDickinson));
    }

    #[test]
    fn test_output_flag_defaults_to_export_filename() {
        let args = compose_args(&["--output"]);
        assert_eq!(args.output.as_deref(), Some(Path::new(DEFAULT_OUTPUT_FILE)));
    }

    #[test]
    fn test_invalid_enum_value_is_rejected() {
        let result = Cli::try_parse_from([
            "verse-forge",
            "compose",
            "--poem-type",
            "epic-saga",
            "--mood",
            "wistful",
            "--structure",
            "haiku",
            "--length",
            "very-short",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_write_output_appends_trailing_newline() {
        let dir = tempfile::tempdir().expect("tempdir should be created");
        let path = dir.path().join("poem.txt");

        write_output(&path, "### Dawn\nGreen light wakes.").expect("write should succeed");
        let written = fs::read_to_string(&path).expect("file should be readable");
        assert_eq!(written, "### Dawn\nGreen light wakes.\n");
    }
}
