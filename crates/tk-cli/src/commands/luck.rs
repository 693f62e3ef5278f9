use tk_mechanics::luck_test;

use super::{Context, print_json};

pub fn run(ctx: &Context, character: &str) -> Result<(), String> {
    let roster = ctx.load_roster()?;
    let character = roster.get(character).map_err(|e| e.to_string())?;
    let result = luck_test(character, &mut ctx.rng());

    if ctx.json {
        return print_json(&result);
    }
    println!("{}: {result}", character.name);
    Ok(())
}
