//! CLI frontend for the Tablekit resolution engine.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::Context;
use tk_mechanics::EngineConfig;

#[derive(Parser)]
#[command(
    name = "tk",
    about = "Tablekit: dice, checks, and oracle answers for tabletop play",
    version,
    propagate_version = true
)]
struct Cli {
    /// RNG seed for reproducible rolls
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Character roster file
    #[arg(long, global = true, env = "TK_ROSTER", default_value = "characters.json")]
    roster: PathBuf,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Roll dice, e.g. `2d6+3`
    Roll {
        /// Dice notation: [count]d<sides>[+/-modifier]
        notation: String,

        /// Roll the notation this many times
        #[arg(short, long, default_value = "1", value_parser = clap::value_parser!(u32).range(1..))]
        times: u32,
    },

    /// Roll a character's stat against a Difficulty Class
    Check {
        /// Character name or id
        character: String,

        /// Stat name or abbreviation (e.g. Strength, agi)
        stat: String,

        /// Target DC
        #[arg(long, conflicts_with = "difficulty")]
        dc: Option<i32>,

        /// Named difficulty (e.g. easy, hard, very-hard)
        #[arg(long)]
        difficulty: Option<String>,
    },

    /// Contest an encounter action between two characters
    Oppose {
        /// The acting character
        initiator: String,

        /// The character resisting
        opponent: String,

        /// Encounter type (combat, social, physical, mental, exploration, other)
        #[arg(short, long)]
        encounter: String,

        /// Action name within the encounter type
        #[arg(short, long)]
        action: String,
    },

    /// Run a fixed-DC encounter action for one character
    Act {
        /// The acting character
        character: String,

        /// Encounter type
        #[arg(short, long)]
        encounter: String,

        /// Action name within the encounter type
        #[arg(short, long)]
        action: String,

        /// Target DC
        #[arg(long)]
        dc: Option<i32>,
    },

    /// List encounter actions
    Actions {
        /// Only show this encounter type
        encounter: Option<String>,
    },

    /// Ask the oracle a yes/no question
    Oracle {
        /// How likely a "Yes" is (e.g. likely, "very unlikely", 50/50)
        likelihood: String,

        /// Look up a specific d100 roll instead of rolling
        #[arg(long)]
        roll: Option<u32>,
    },

    /// Roll d100 against a character's Luck
    Luck {
        /// Character name or id
        character: String,
    },

    /// Add a character with default stats to the roster
    New {
        /// Character name
        name: String,

        /// Character kind: player, npc, enemy, event
        #[arg(short, long, default_value = "player")]
        kind: String,
    },

    /// Check roster records for data problems
    Validate,

    /// Verify the built-in encounter catalog and oracle tables
    Selfcheck,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("TK_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// The built-in encounter catalog and oracle tables must be well formed
/// before any command runs.
fn startup_checks() -> Result<(), String> {
    tk_mechanics::EncounterCatalog::builtin()
        .validate()
        .map_err(|e| e.to_string())?;
    tk_oracle::validate_tables().map_err(|e| e.to_string())
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    if let Err(e) = startup_checks() {
        eprintln!("error: {e}");
        process::exit(1);
    }

    let mut config = EngineConfig::default();
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    let ctx = Context {
        config,
        roster: cli.roster,
        json: cli.json,
    };
    tracing::debug!(seed = ?ctx.config.seed, roster = %ctx.roster.display(), "starting");

    let result = match cli.command {
        Commands::Roll { notation, times } => commands::roll::run(&ctx, &notation, times),
        Commands::Check {
            character,
            stat,
            dc,
            difficulty,
        } => commands::check::run(&ctx, &character, &stat, dc, difficulty.as_deref()),
        Commands::Oppose {
            initiator,
            opponent,
            encounter,
            action,
        } => commands::oppose::run(&ctx, &initiator, &opponent, &encounter, &action),
        Commands::Act {
            character,
            encounter,
            action,
            dc,
        } => commands::act::run(&ctx, &character, &encounter, &action, dc),
        Commands::Actions { encounter } => commands::actions::run(&ctx, encounter.as_deref()),
        Commands::Oracle { likelihood, roll } => commands::oracle::run(&ctx, &likelihood, roll),
        Commands::Luck { character } => commands::luck::run(&ctx, &character),
        Commands::New { name, kind } => commands::new::run(&ctx, &name, &kind),
        Commands::Validate => commands::validate::run(&ctx),
        Commands::Selfcheck => commands::selfcheck::run(&ctx),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
