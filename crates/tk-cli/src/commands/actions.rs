use comfy_table::{ContentArrangement, Table};
use serde::Serialize;
use tk_mechanics::{EncounterAction, EncounterCatalog, EncounterType};

use super::{Context, parse_encounter, print_json};

#[derive(Serialize)]
struct Category<'a> {
    encounter: EncounterType,
    actions: &'a [EncounterAction],
}

pub fn run(ctx: &Context, encounter: Option<&str>) -> Result<(), String> {
    let catalog = EncounterCatalog::builtin();
    let categories: Vec<Category<'_>> = match encounter {
        Some(name) => {
            let category = parse_encounter(name)?;
            vec![Category {
                encounter: category,
                actions: catalog.actions(category),
            }]
        }
        None => catalog
            .categories()
            .map(|(encounter, actions)| Category { encounter, actions })
            .collect(),
    };

    if ctx.json {
        return print_json(&categories);
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Encounter", "Action", "Roll", "Against"]);

    let mut count = 0;
    for category in &categories {
        for action in category.actions {
            let against = match action.secondary_stat() {
                Some(stat) => format!("{stat} (opposed)"),
                None => "DC".to_string(),
            };
            table.add_row(vec![
                category.encounter.to_string(),
                action.name.clone(),
                action.primary_stat.to_string(),
                against,
            ]);
            count += 1;
        }
    }

    if count == 0 {
        println!("  No actions found.");
        return Ok(());
    }

    println!("{table}");
    println!();
    println!("  {count} actions");
    Ok(())
}
