use tk_core::CoreStat;
use tk_mechanics::{Difficulty, Resolution, skill_check_vs_dc};

use super::Context;

pub fn run(
    ctx: &Context,
    character: &str,
    stat: &str,
    dc: Option<i32>,
    difficulty: Option<&str>,
) -> Result<(), String> {
    let roster = ctx.load_roster()?;
    let character = roster.get(character).map_err(|e| e.to_string())?;
    let stat = CoreStat::try_parse(stat).map_err(|e| e.to_string())?;

    let dc = match (dc, difficulty) {
        (Some(dc), _) => dc,
        (None, Some(name)) => Difficulty::parse(name).map_err(|e| e.to_string())?.dc(),
        (None, None) => ctx.config.default_dc,
    };

    let result = skill_check_vs_dc(character, stat, dc, &mut ctx.rng());
    ctx.emit_resolution(&Resolution::from(result))
}
