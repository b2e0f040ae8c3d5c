use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use wheel_core::DecisionSession;

/// Spin and report the result. The terminal has no animation, so the spin
/// completes as soon as it starts.
pub fn spin(session: &mut DecisionSession) -> Result<(), String> {
    if session.is_spinning() {
        return Err("a spin is already in progress".into());
    }
    if session.spin().is_none() {
        println!("  Add at least two options to spin.");
        return Ok(());
    }

    match session.complete_spin() {
        Some(winner) => {
            println!("  The wheel picked: {}", winner.green().bold());
            Ok(())
        }
        None => Err("the spin finished without a result".into()),
    }
}

pub fn history(session: &mut DecisionSession) -> Result<(), String> {
    let history = session.history();
    if history.is_empty() {
        println!("  No spins yet.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "Result", "When"]);

    for (n, record) in history.newest_first() {
        let when = match record.timestamp.datetime() {
            Some(dt) => dt
                .with_timezone(&chrono::Local)
                .format("%Y-%m-%d %H:%M:%S")
                .to_string(),
            None => record.timestamp.to_string(),
        };
        table.add_row(vec![n.to_string(), record.winner.clone(), when]);
    }

    println!("{table}");
    println!();
    println!(
        "  {} results, {} spins started",
        history.len(),
        session.spin_count()
    );
    Ok(())
}
