use colored::Colorize;
use tk_mechanics::EncounterCatalog;
use tk_oracle::{Likelihood, validate_tables};

use super::Context;

pub fn run(ctx: &Context) -> Result<(), String> {
    let catalog = EncounterCatalog::builtin();
    catalog.validate().map_err(|e| e.to_string())?;
    validate_tables().map_err(|e| e.to_string())?;

    let categories = catalog.categories().count();
    let actions: usize = catalog.categories().map(|(_, a)| a.len()).sum();
    let levels = Likelihood::all().len();

    if ctx.json {
        return super::print_json(&serde_json::json!({
            "categories": categories,
            "actions": actions,
            "likelihoods": levels,
            "ok": true,
        }));
    }
    println!(
        "  {} encounter catalog: {categories} categories, {actions} actions",
        "ok".green()
    );
    println!("  {} oracle tables: {levels} likelihoods cover 1-100", "ok".green());
    Ok(())
}
