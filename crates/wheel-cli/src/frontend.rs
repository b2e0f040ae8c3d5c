//! Terminal implementations of the wheel's collaborators.

use std::collections::BTreeMap;
use std::fs;
use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};
use std::time::Duration;

use colored::Colorize;
use tracing::{debug, warn};

use wheel_core::collab::{
    AudioCues, Celebration, Clipboard, FileSink, KeyValueStore, ShareSheet, SharedFile,
    Unsupported, WheelRenderer,
};
use wheel_core::{Collaborators, SpinRequest};

/// Draws a spin as a single status line.
pub struct TerminalWheel;

impl WheelRenderer for TerminalWheel {
    fn start_spin(&mut self, request: &SpinRequest) {
        println!(
            "  {} {} options, {:.1}s",
            "Spinning...".bold(),
            request.options.len(),
            request.duration.as_secs_f64()
        );
    }
}

/// Rings the terminal bell on a win; the spin loop has no terminal equivalent.
pub struct TerminalAudio;

impl AudioCues for TerminalAudio {
    fn start_spinning_loop(&mut self) {
        debug!("spin sound started");
    }

    fn stop_spinning_loop(&mut self) {
        debug!("spin sound stopped");
    }

    fn play_win(&mut self) {
        if io::stdout().is_terminal() {
            print!("\x07");
        }
    }
}

/// Prints a one-line celebration.
pub struct TerminalConfetti;

impl Celebration for TerminalConfetti {
    fn celebrate(&mut self, duration: Duration) {
        debug!(secs = duration.as_secs(), "celebration");
        println!("  🎉 🎊 🎉");
    }
}

/// "Shares" by printing the message for the user to copy.
pub struct PrintShare;

impl ShareSheet for PrintShare {
    fn is_available(&self) -> bool {
        true
    }

    fn share_text(&mut self, title: &str, text: &str, url: &str) -> Result<(), String> {
        println!("  {}", title.bold());
        for line in text.lines() {
            println!("  {line}");
        }
        if !url.is_empty() {
            println!("  {url}");
        }
        Ok(())
    }

    fn share_files(
        &mut self,
        _title: &str,
        _text: &str,
        _files: &[SharedFile],
    ) -> Result<(), String> {
        Err("file sharing is not available in the terminal".to_string())
    }
}

impl Clipboard for PrintShare {
    fn copy_text(&mut self, text: &str) -> Result<(), String> {
        println!("{text}");
        Ok(())
    }
}

/// Writes downloads into the state directory.
pub struct DirectorySink {
    dir: PathBuf,
}

impl FileSink for DirectorySink {
    fn download(&mut self, bytes: &[u8], filename: &str) -> Result<(), String> {
        let path = self.dir.join(filename);
        fs::write(&path, bytes).map_err(|e| format!("cannot write {}: {e}", path.display()))?;
        debug!(path = %path.display(), bytes = bytes.len(), "wrote download");
        Ok(())
    }
}

/// Key-value store kept as one JSON object in a file.
pub struct JsonFileStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl JsonFileStore {
    /// Open the store. A missing or unreadable file starts empty.
    pub fn open(path: &Path) -> Self {
        let values = match fs::read_to_string(path) {
            Ok(json) => serde_json::from_str(&json).unwrap_or_else(|e| {
                warn!(path = %path.display(), error = %e, "ignoring unreadable preference file");
                BTreeMap::new()
            }),
            Err(_) => BTreeMap::new(),
        };
        Self {
            path: path.to_path_buf(),
            values,
        }
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        self.values.insert(key.to_string(), value.to_string());
        let json = serde_json::to_string_pretty(&self.values).map_err(|e| e.to_string())?;
        fs::write(&self.path, json)
            .map_err(|e| format!("cannot write {}: {e}", self.path.display()))
    }
}

/// Collaborators for a terminal session rooted at `dir`.
pub fn terminal(dir: &Path, prefs_path: &Path) -> Collaborators {
    Collaborators {
        renderer: Box::new(TerminalWheel),
        audio: Box::new(TerminalAudio),
        celebration: Box::new(TerminalConfetti),
        store: Box::new(JsonFileStore::open(prefs_path)),
        files: Box::new(DirectorySink {
            dir: dir.to_path_buf(),
        }),
        share: Box::new(PrintShare),
        clipboard: Box::new(PrintShare),
        capture: Box::new(Unsupported),
    }
}
