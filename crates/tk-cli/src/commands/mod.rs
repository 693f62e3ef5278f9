pub mod act;
pub mod actions;
pub mod check;
pub mod luck;
pub mod new;
pub mod oppose;
pub mod oracle;
pub mod roll;
pub mod selfcheck;
pub mod validate;

use std::path::PathBuf;

use rand::rngs::StdRng;
use serde::Serialize;
use tk_core::Roster;
use tk_mechanics::{
    EncounterAction, EncounterCatalog, EncounterType, EngineConfig, MechError, Resolution,
    format_outcome,
};

/// Settings shared by every subcommand.
pub struct Context {
    pub config: EngineConfig,
    pub roster: PathBuf,
    pub json: bool,
}

impl Context {
    /// A fresh random source for this invocation.
    pub fn rng(&self) -> StdRng {
        self.config.rng()
    }

    /// Load the roster file. A missing file is an error here; only `new`
    /// creates one.
    pub fn load_roster(&self) -> Result<Roster, String> {
        Roster::load(&self.roster)
            .map_err(|e| format!("cannot load {}: {e}", self.roster.display()))
    }

    /// Print a resolved check as a text report or JSON.
    pub fn emit_resolution(&self, resolution: &Resolution) -> Result<(), String> {
        if self.json {
            print_json(resolution)
        } else {
            println!("{}", format_outcome(resolution));
            Ok(())
        }
    }
}

/// Pretty-print any serializable value to stdout.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), String> {
    let out = serde_json::to_string_pretty(value).map_err(|e| e.to_string())?;
    println!("{out}");
    Ok(())
}

/// Resolve an encounter type and action name against the built-in catalog.
fn lookup_action(encounter: &str, action: &str) -> Result<&'static EncounterAction, String> {
    let category = parse_encounter(encounter)?;
    EncounterCatalog::builtin()
        .find_action(category, action)
        .map_err(|e| e.to_string())
}

fn parse_encounter(name: &str) -> Result<EncounterType, String> {
    EncounterType::parse(name)
        .ok_or_else(|| MechError::UnknownEncounter(name.to_string()).to_string())
}
