use colored::Colorize;
use comfy_table::{Cell, Color as CellColor, ContentArrangement, Table};

use wheel_core::{Color, DecisionSession, SpinSpeed};

use super::option_index;

const BUSY: &str = "a spin is in progress";

pub fn list(session: &mut DecisionSession) -> Result<(), String> {
    if session.options().is_empty() {
        println!("  The wheel is empty. Add options with `wheel add <label>`.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "Option", "Color"]);

    for (i, (label, color)) in session
        .options()
        .iter()
        .zip(session.colors())
        .enumerate()
    {
        let (r, g, b) = color.rgb();
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(label),
            Cell::new(color.as_str()).fg(CellColor::Rgb { r, g, b }),
        ]);
    }

    println!("{table}");
    println!();
    let mode = if session.simple_mode() { ", simple mode" } else { "" };
    println!(
        "  {} options, {} speed{mode}",
        session.options().len(),
        session.speed()
    );
    if let Some(winner) = session.winner() {
        println!("  Last result: {}", winner.bold());
    }
    Ok(())
}

pub fn add(session: &mut DecisionSession, label: &str) -> Result<(), String> {
    if session.is_spinning() {
        return Err(BUSY.into());
    }
    if !session.add_option(label) {
        return Err("option label cannot be blank".into());
    }
    println!(
        "  {} '{}' ({} options)",
        "Added".green().bold(),
        label.trim(),
        session.options().len()
    );
    Ok(())
}

pub fn remove(session: &mut DecisionSession, number: usize) -> Result<(), String> {
    let index = option_index(session, number)?;
    let label = session.options()[index].clone();
    if !session.remove_option(index) {
        return Err(BUSY.into());
    }
    println!("  {} '{label}'", "Removed".red().bold());
    Ok(())
}

pub fn clear(session: &mut DecisionSession) -> Result<(), String> {
    if !session.clear() {
        return Err(BUSY.into());
    }
    println!("  {} all options", "Cleared".bold());
    Ok(())
}

pub fn color(session: &mut DecisionSession, number: usize, color: &str) -> Result<(), String> {
    let index = option_index(session, number)?;
    let color = Color::parse(color).map_err(|e| e.to_string())?;
    if !session.assign_color(index, color.clone()) {
        return Err(BUSY.into());
    }
    println!(
        "  {} '{}' is now {color}",
        "Recolored".bold(),
        session.options()[index]
    );
    Ok(())
}

pub fn speed(session: &mut DecisionSession, input: &str) -> Result<(), String> {
    let speed = SpinSpeed::parse(input)
        .ok_or_else(|| format!("unknown speed '{input}' (use slow, normal or fast)"))?;
    if !session.set_speed(speed) {
        return Err(BUSY.into());
    }
    println!("  Speed set to {}", speed.to_string().bold());
    Ok(())
}

pub fn simple(session: &mut DecisionSession) -> Result<(), String> {
    if !session.toggle_simple_mode() {
        return Err(BUSY.into());
    }
    if session.simple_mode() {
        println!("  Simple mode {}: {}", "on".green().bold(), session.options().join(" / "));
    } else {
        println!("  Simple mode {}; the wheel is empty", "off".bold());
    }
    Ok(())
}
