use tk_mechanics::{Resolution, resolve_opposed_check};

use super::{Context, lookup_action};

pub fn run(
    ctx: &Context,
    initiator: &str,
    opponent: &str,
    encounter: &str,
    action: &str,
) -> Result<(), String> {
    let roster = ctx.load_roster()?;
    let initiator = roster.get(initiator).map_err(|e| e.to_string())?;
    let opponent = roster.get(opponent).map_err(|e| e.to_string())?;
    let action = lookup_action(encounter, action)?;

    let result = resolve_opposed_check(initiator, opponent, action, &mut ctx.rng())
        .map_err(|e| e.to_string())?;
    ctx.emit_resolution(&Resolution::from(result))
}
