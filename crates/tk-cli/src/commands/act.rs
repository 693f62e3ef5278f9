use tk_mechanics::{Resolution, resolve_action_vs_dc};

use super::{Context, lookup_action};

pub fn run(
    ctx: &Context,
    character: &str,
    encounter: &str,
    action: &str,
    dc: Option<i32>,
) -> Result<(), String> {
    let roster = ctx.load_roster()?;
    let character = roster.get(character).map_err(|e| e.to_string())?;
    let action = lookup_action(encounter, action)?;

    let dc = dc.unwrap_or(ctx.config.default_dc);
    let result =
        resolve_action_vs_dc(character, action, dc, &mut ctx.rng()).map_err(|e| e.to_string())?;
    ctx.emit_resolution(&Resolution::from(result))
}
