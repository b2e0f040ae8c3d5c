use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use wheel_core::DecisionSession;

pub fn list(session: &mut DecisionSession) -> Result<(), String> {
    let catalog = session.categories();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Id", "Category", "Options"]);

    for category in catalog.all() {
        let preview = category.items.join(", ");
        let preview = if preview.chars().count() > 60 {
            let cut: String = preview.chars().take(57).collect();
            format!("{cut}...")
        } else {
            preview
        };
        table.add_row(vec![
            category.id.clone(),
            format!("{} {}", category.icon, category.title),
            preview,
        ]);
    }

    println!("{table}");
    println!();
    println!(
        "  {} built-in, {} saved",
        catalog.builtins().len(),
        catalog.custom().len()
    );
    Ok(())
}

pub fn load(session: &mut DecisionSession, id: &str) -> Result<(), String> {
    if !session.load_category(id).map_err(|e| e.to_string())? {
        return Err("a spin is in progress".into());
    }
    println!(
        "  {} '{id}' ({} options)",
        "Loaded".green().bold(),
        session.options().len()
    );
    Ok(())
}

pub fn save(session: &mut DecisionSession, name: &str) -> Result<(), String> {
    if session.options().is_empty() {
        return Err("nothing to save: the wheel is empty".into());
    }
    if !session
        .save_current_as_category(name)
        .map_err(|e| e.to_string())?
    {
        return Err("category name cannot be blank".into());
    }
    println!("  {} category '{}'", "Saved".green().bold(), name.trim());
    Ok(())
}

pub fn delete(session: &mut DecisionSession, id: &str) -> Result<(), String> {
    if session.categories().is_builtin(id) {
        return Err(format!("'{id}' is a built-in category and cannot be deleted"));
    }
    if !session.delete_category(id).map_err(|e| e.to_string())? {
        return Err(format!("no saved category '{id}'"));
    }
    println!("  {} category '{id}'", "Deleted".red().bold());
    Ok(())
}
