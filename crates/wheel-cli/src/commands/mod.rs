pub mod categories;
pub mod options;
pub mod play;
pub mod spin;
pub mod transfer;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use wheel_core::{DecisionSession, SessionConfig, SessionSnapshot};

use crate::Commands;
use crate::frontend;

/// Working state between invocations.
pub const SESSION_FILE: &str = "wheel-session.json";

/// Sound and saved categories.
pub const PREFERENCES_FILE: &str = "wheel-preferences.json";

/// Run one command against the session stored in `dir`, saving it back if
/// anything changed.
pub fn run_once(dir: &Path, seed: Option<u64>, command: &Commands) -> Result<(), String> {
    let mut session = open_session(dir, seed)?;
    let before = session.snapshot();
    execute(&mut session, command)?;
    if session.snapshot() != before {
        save_session(dir, &session)?;
    }
    Ok(())
}

/// Dispatch a command to its handler.
pub fn execute(session: &mut DecisionSession, command: &Commands) -> Result<(), String> {
    match command {
        Commands::List => options::list(session),
        Commands::Add { label } => options::add(session, &label.join(" ")),
        Commands::Remove { number } => options::remove(session, *number),
        Commands::Clear => options::clear(session),
        Commands::Color { number, color } => options::color(session, *number, color),
        Commands::Speed { speed } => options::speed(session, speed),
        Commands::Simple => options::simple(session),
        Commands::Spin => spin::spin(session),
        Commands::History => spin::history(session),
        Commands::Categories => categories::list(session),
        Commands::Load { id } => categories::load(session, id),
        Commands::SaveCategory { name } => categories::save(session, &name.join(" ")),
        Commands::DeleteCategory { id } => categories::delete(session, id),
        Commands::Sound { state } => transfer::sound(session, state.as_deref()),
        Commands::Export { output } => transfer::export(session, output.as_deref()),
        Commands::Import { path } => transfer::import(session, path),
        Commands::Share => transfer::share(session),
        Commands::Capture => transfer::capture(session),
        Commands::Play => Err("already in an interactive session".into()),
    }
}

/// Open the session stored in `dir`. A missing session file starts fresh.
pub fn open_session(dir: &Path, seed: Option<u64>) -> Result<DecisionSession, String> {
    if !dir.is_dir() {
        return Err(format!("{} is not a directory", dir.display()));
    }

    let mut config = SessionConfig::default();
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }
    let collab = frontend::terminal(dir, &dir.join(PREFERENCES_FILE));

    let path = session_path(dir);
    match fs::read_to_string(&path) {
        Ok(json) => {
            let snapshot: SessionSnapshot = serde_json::from_str(&json)
                .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
            debug!(path = %path.display(), items = snapshot.items.len(), "restored session");
            Ok(DecisionSession::restore(config, collab, snapshot))
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(DecisionSession::new(config, collab)),
        Err(e) => Err(format!("cannot read {}: {e}", path.display())),
    }
}

/// Write the session back to `dir`.
pub fn save_session(dir: &Path, session: &DecisionSession) -> Result<(), String> {
    let path = session_path(dir);
    let json = serde_json::to_string_pretty(&session.snapshot()).map_err(|e| e.to_string())?;
    fs::write(&path, json).map_err(|e| format!("cannot write {}: {e}", path.display()))?;
    debug!(path = %path.display(), "saved session");
    Ok(())
}

fn session_path(dir: &Path) -> PathBuf {
    dir.join(SESSION_FILE)
}

/// Resolve a 1-based option number to an index.
fn option_index(session: &DecisionSession, number: usize) -> Result<usize, String> {
    let count = session.options().len();
    if number == 0 || number > count {
        return Err(format!("no option #{number} (the wheel has {count})"));
    }
    Ok(number - 1)
}
