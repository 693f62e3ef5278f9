use colored::Colorize;
use tk_core::validate_roster;

use super::{Context, print_json};

pub fn run(ctx: &Context) -> Result<(), String> {
    let roster = ctx.load_roster()?;
    let issues = validate_roster(&roster);

    if ctx.json {
        print_json(&issues)?;
    } else if issues.is_empty() {
        println!("  {} characters, no issues", roster.len());
    } else {
        for issue in &issues {
            println!("  {} {issue}", "warning:".yellow());
        }
    }

    match issues.len() {
        0 => Ok(()),
        1 => Err("1 validation issue".into()),
        n => Err(format!("{n} validation issues")),
    }
}
