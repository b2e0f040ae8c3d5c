//! Export, import, sharing and the sound preference.

use std::fs;
use std::path::Path;

use chrono::Utc;
use colored::Colorize;

use wheel_core::{DecisionSession, ShareOutcome};

pub fn export(session: &mut DecisionSession, output: Option<&Path>) -> Result<(), String> {
    match output {
        Some(path) => {
            let json = session
                .export_document(Utc::now())
                .to_json()
                .map_err(|e| e.to_string())?;
            fs::write(path, json).map_err(|e| format!("cannot write {}: {e}", path.display()))?;
            println!("  {} {}", "Exported".green().bold(), path.display());
        }
        None => {
            let filename = session.export_session().map_err(|e| e.to_string())?;
            println!("  {} {filename}", "Exported".green().bold());
        }
    }
    Ok(())
}

pub fn import(session: &mut DecisionSession, path: &Path) -> Result<(), String> {
    let text = fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
    if !session.import_session(&text).map_err(|e| e.to_string())? {
        return Err("a spin is in progress".into());
    }
    println!(
        "  {} {} options, {} past results",
        "Imported".green().bold(),
        session.options().len(),
        session.history().len()
    );
    Ok(())
}

pub fn share(session: &mut DecisionSession) -> Result<(), String> {
    match session.share_result().map_err(|e| e.to_string())? {
        ShareOutcome::Copied => println!("  Copied to clipboard"),
        ShareOutcome::Shared | ShareOutcome::Downloaded => {}
    }
    Ok(())
}

pub fn capture(session: &mut DecisionSession) -> Result<(), String> {
    match session.capture_wheel().map_err(|e| e.to_string())? {
        Some(ShareOutcome::Downloaded) => println!("  {} wheel image", "Saved".green().bold()),
        Some(ShareOutcome::Shared | ShareOutcome::Copied) => {}
        None => return Err("a spin is in progress".into()),
    }
    Ok(())
}

pub fn sound(session: &mut DecisionSession, state: Option<&str>) -> Result<(), String> {
    let enabled = match state.map(str::to_lowercase).as_deref() {
        None | Some("toggle") => session.toggle_sound().map_err(|e| e.to_string())?,
        Some("on") => {
            session.set_sound_enabled(true).map_err(|e| e.to_string())?;
            session.sound_enabled()
        }
        Some("off") => {
            session.set_sound_enabled(false).map_err(|e| e.to_string())?;
            session.sound_enabled()
        }
        Some(other) => {
            return Err(format!(
                "unknown sound setting '{other}' (use on, off or toggle)"
            ));
        }
    };
    let label = if enabled { "on".green() } else { "off".red() };
    println!("  Sound {}", label.bold());
    Ok(())
}
