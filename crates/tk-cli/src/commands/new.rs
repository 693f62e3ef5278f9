use colored::Colorize;
use tk_core::{Character, CharacterKind, Roster};

use super::{Context, print_json};

pub fn run(ctx: &Context, name: &str, kind: &str) -> Result<(), String> {
    let name = name.trim();
    if name.is_empty() {
        return Err("character name cannot be empty".into());
    }
    let kind = CharacterKind::parse(kind).map_err(|e| e.to_string())?;

    let path = &ctx.roster;
    let mut roster = Roster::load_or_default(path)
        .map_err(|e| format!("cannot load {}: {e}", path.display()))?;
    let character = Character::new(name, kind);
    roster.add(character.clone()).map_err(|e| e.to_string())?;
    roster
        .save(path)
        .map_err(|e| format!("cannot write {}: {e}", path.display()))?;

    if ctx.json {
        return print_json(&character);
    }
    println!(
        "  {} {kind} '{name}' to {}",
        "Added".bold(),
        path.display()
    );
    Ok(())
}
