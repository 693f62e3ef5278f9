use tk_mechanics::{DiceNotation, DiceRoll};

use super::{Context, print_json};

pub fn run(ctx: &Context, notation: &str, times: u32) -> Result<(), String> {
    let parsed = DiceNotation::parse(notation).map_err(|e| e.to_string())?;
    let mut rng = ctx.rng();
    let rolls: Vec<DiceRoll> = (0..times).map(|_| parsed.roll_detailed(&mut rng)).collect();

    if ctx.json {
        return match rolls.as_slice() {
            [single] => print_json(single),
            many => print_json(many),
        };
    }

    for roll in &rolls {
        println!("{roll}");
    }
    if rolls.len() > 1 {
        let sum: i64 = rolls.iter().map(|r| r.total).sum();
        println!();
        println!("  {} rolls, sum {sum}", rolls.len());
    }
    Ok(())
}
