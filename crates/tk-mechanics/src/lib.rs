//! Resolution engine for Tablekit.
//!
//! Provides dice notation parsing and rolling, the stat-to-modifier formula,
//! d20 checks against a fixed DC or an opponent, the static catalog of
//! encounter actions, and the text rendering of check results.
//!
//! Every rolling operation takes its random source explicitly, so results
//! are reproducible under a seeded generator and calls share no state.

pub mod check;
pub mod config;
pub mod dice;
pub mod encounter;
pub mod error;
pub mod format;
pub mod modifier;

pub use check::{
    CheckVsDcResult, ComparisonOutcome, Difficulty, LuckTestResult, OpposedCheckResult,
    Resolution, RollDetails, determine_outcome, luck_test, resolve_action_vs_dc,
    resolve_opposed_check, simulate_check, skill_check_vs_dc,
};
pub use config::EngineConfig;
pub use dice::{DiceNotation, DiceRoll, Die, roll, roll_detailed, roll_multiple};
pub use encounter::{ActionMode, EncounterAction, EncounterCatalog, EncounterType, actions_for};
pub use error::{MechError, MechResult};
pub use format::format_outcome;
pub use modifier::{modifier_or_default, stat_modifier, total_stat};
