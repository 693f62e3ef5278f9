use colored::Colorize;
use tk_oracle::{consult, consult_for_roll};

use super::{Context, print_json};

pub fn run(ctx: &Context, likelihood: &str, roll: Option<u32>) -> Result<(), String> {
    let outcome = match roll {
        Some(roll) => consult_for_roll(likelihood, roll),
        None => consult(likelihood, &mut ctx.rng()),
    }
    .map_err(|e| e.to_string())?;

    if ctx.json {
        return print_json(&outcome);
    }

    println!("{outcome}");
    let answer = outcome.answer.to_string();
    if outcome.is_yes {
        println!("  {}", answer.green().bold());
    } else {
        println!("  {}", answer.red().bold());
    }
    Ok(())
}
