//! gabarito CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;
mod config;

#[derive(Parser)]
#[command(
    name = "gabarito",
    version,
    about = "Scoring engine for a gamified learning platform"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate arithmetic drill questions
    Drill {
        /// Difficulty tier: facil, medio, dificil
        #[arg(long, default_value = "facil")]
        tier: String,

        /// Number of questions to generate
        #[arg(long, default_value = "5")]
        count: usize,

        /// Seed for a reproducible drill
        #[arg(long)]
        seed: Option<u64>,

        /// Print the expected answers
        #[arg(long)]
        show_answers: bool,
    },

    /// Evaluate an essay
    Essay {
        /// Read the essay text from a file
        #[arg(long, conflicts_with = "text")]
        file: Option<PathBuf>,

        /// Essay text given directly on the command line
        #[arg(long)]
        text: Option<String>,

        /// Topic label recorded with the evaluation
        #[arg(long, default_value = "tecnologia")]
        topic: String,

        /// Output format: text, json
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Grade a robotics project description
    Project {
        /// Read the description from a file
        #[arg(long, conflicts_with = "description")]
        file: Option<PathBuf>,

        /// Project description given directly on the command line
        #[arg(long)]
        description: Option<String>,

        /// Project area: Arduino, Scratch, IA, Maker
        #[arg(long, default_value = "Arduino")]
        area: String,

        /// Declared difficulty: iniciante, intermediario, avancado
        #[arg(long, default_value = "iniciante")]
        tier: String,

        /// Output format: text, json
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Grade a batch file or directory into class reports
    Grade {
        /// Path to a .toml batch file or directory
        #[arg(long)]
        batch: PathBuf,

        /// Output directory for report files
        #[arg(long)]
        output: Option<PathBuf>,

        /// Output format: text, json, html, all
        #[arg(long)]
        format: Option<String>,

        /// Rows to keep in the standings table
        #[arg(long)]
        standings_limit: Option<usize>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Compare two class reports
    Compare {
        /// Baseline report JSON
        #[arg(long)]
        baseline: PathBuf,

        /// Current report JSON
        #[arg(long)]
        current: PathBuf,

        /// Total-point deltas within this margin count as unchanged
        #[arg(long, default_value = "5")]
        min_delta: u32,

        /// Exit code 1 if any student's total went down
        #[arg(long)]
        fail_on_setback: bool,

        /// Output format: text, json, markdown
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Validate batch TOML files
    Validate {
        /// Path to a batch file or directory
        #[arg(long)]
        batch: PathBuf,
    },

    /// Print the scoring vocabulary tables
    Lexicon,

    /// Create starter config and an example batch
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("gabarito=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Drill {
            tier,
            count,
            seed,
            show_answers,
        } => commands::drill::execute(tier, count, seed, show_answers),
        Commands::Essay {
            file,
            text,
            topic,
            format,
        } => commands::essay::execute(file, text, topic, format),
        Commands::Project {
            file,
            description,
            area,
            tier,
            format,
        } => commands::project::execute(file, description, area, tier, format),
        Commands::Grade {
            batch,
            output,
            format,
            standings_limit,
            config,
        } => commands::grade::execute(batch, output, format, standings_limit, config),
        Commands::Compare {
            baseline,
            current,
            min_delta,
            fail_on_setback,
            format,
        } => commands::compare::execute(baseline, current, min_delta, fail_on_setback, format),
        Commands::Validate { batch } => commands::validate::execute(batch),
        Commands::Lexicon => commands::lexicon::execute(),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
