//! CLI host for the Fablekeep rules engine.

mod commands;

use std::process;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
#[command(
    name = "fk",
    about = "Fablekeep: resolve tabletop mechanics from the command line",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

// Options shared by every subcommand.
#[derive(Args, Debug, Clone)]
struct GlobalArgs {
    /// Rules system: dnd5e or pbta
    #[arg(long, global = true, env = "FK_RULES_SYSTEM", default_value = "dnd5e")]
    system: String,

    /// Session seed for reproducible rolls
    #[arg(long, global = true, env = "FK_RULES_SEED", default_value = "42")]
    seed: u64,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Log engine decisions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Roll a dice expression such as 2d6+3
    Roll {
        /// Dice notation: <count>d<sides>[+|-<modifier>]
        #[arg(allow_hyphen_values = true)]
        expression: String,
    },

    /// Make an ability check
    Check {
        /// Acting character
        #[arg(short, long)]
        actor: String,

        /// Skill, move, or stat being tested
        #[arg(short, long)]
        skill: String,

        /// Target number (system default when omitted)
        #[arg(short, long, allow_hyphen_values = true)]
        difficulty: Option<i32>,

        /// Known modifier for the actor, e.g. athletics=5 (repeatable)
        #[arg(short, long = "modifier", value_parser = commands::parse_modifier)]
        modifiers: Vec<(String, i32)>,
    },

    /// Order actors for an encounter
    Order {
        /// Actor IDs in input order
        #[arg(required = true)]
        actors: Vec<String>,
    },

    /// Exercise the whole engine interface once and report
    Smoke {
        /// Actors for the turn order step
        #[arg(short, long = "actor")]
        actors: Vec<String>,

        /// Run every supported system, not just the selected one
        #[arg(long)]
        all: bool,
    },

    /// List supported rules systems
    Systems,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.global.verbose);

    let global = &cli.global;
    let result = match cli.command {
        Commands::Roll { expression } => commands::roll::run(global, &expression),
        Commands::Check {
            actor,
            skill,
            difficulty,
            modifiers,
        } => commands::check::run(global, &actor, &skill, difficulty, &modifiers),
        Commands::Order { actors } => commands::order::run(global, &actors),
        Commands::Smoke { actors, all } => commands::smoke::run(global, &actors, all),
        Commands::Systems => commands::systems::run(global),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

/// Install a stderr subscriber; `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default = if verbose { "fk_rules=debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
