//! Decision session management.
//!
//! `DecisionSession` owns every piece of wheel state and is the only place
//! it changes. While a spin is in flight every mutating call is refused, so
//! the winner picked at spin start is still the same option when the
//! renderer reports the animation finished.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::category::CategoryCatalog;
use crate::choice::ChoiceList;
use crate::collab::{
    AudioCues, Celebration, Clipboard, FileSink, KeyValueStore, MemoryStore, ScreenCapture,
    ShareSheet, SilentAudio, SilentCelebration, SilentRenderer, Unsupported, WheelRenderer,
};
use crate::config::SessionConfig;
use crate::document::{ImportedSession, SessionDocument, export_filename};
use crate::error::{WheelError, WheelResult};
use crate::history::{SpinHistory, SpinRecord};
use crate::palette::{Color, Palette};
use crate::preferences::Preferences;
use crate::share::{self, ShareOutcome};
use crate::spin::{SpinEngine, SpinRequest, SpinSpeed, SpinState};

/// Labels used by simple yes/no mode.
pub const SIMPLE_MODE_CHOICES: &[&str] = &["✅ Yes", "❌ No"];

/// The frontend services a session talks to.
pub struct Collaborators {
    /// Animates spins and reports completion.
    pub renderer: Box<dyn WheelRenderer>,
    /// Spin loop and win sounds.
    pub audio: Box<dyn AudioCues>,
    /// Confetti overlay.
    pub celebration: Box<dyn Celebration>,
    /// Preference storage.
    pub store: Box<dyn KeyValueStore>,
    /// Download target for exports.
    pub files: Box<dyn FileSink>,
    /// Native share sheet.
    pub share: Box<dyn ShareSheet>,
    /// Clipboard fallback for sharing.
    pub clipboard: Box<dyn Clipboard>,
    /// Wheel screenshotting.
    pub capture: Box<dyn ScreenCapture>,
}

impl Collaborators {
    /// Inert collaborators over the given preference store.
    pub fn headless(store: Box<dyn KeyValueStore>) -> Self {
        Self {
            renderer: Box::new(SilentRenderer),
            audio: Box::new(SilentAudio),
            celebration: Box::new(SilentCelebration),
            store,
            files: Box::new(Unsupported),
            share: Box::new(Unsupported),
            clipboard: Box::new(Unsupported),
            capture: Box::new(Unsupported),
        }
    }
}

impl Default for Collaborators {
    fn default() -> Self {
        Self::headless(Box::new(MemoryStore::new()))
    }
}

/// Complete working state of a session, for frontends that keep it between
/// runs. Unlike [`SessionDocument`] it also carries colors and simple mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    /// Option labels.
    pub items: Vec<String>,
    /// Slice colors.
    pub palette: Palette,
    /// Speed multiplier.
    pub spin_speed: f64,
    /// Spins started.
    pub spin_count: u64,
    /// Completed spins.
    pub spin_history: SpinHistory,
    /// Winner on display.
    pub winner: Option<String>,
    /// Whether simple yes/no mode is on.
    #[serde(default)]
    pub simple_mode: bool,
}

/// An interactive decision wheel session.
pub struct DecisionSession {
    config: SessionConfig,
    choices: ChoiceList,
    speed: SpinSpeed,
    engine: SpinEngine,
    history: SpinHistory,
    winner: Option<String>,
    simple_mode: bool,
    prefs: Preferences,
    collab: Collaborators,
}

impl DecisionSession {
    /// Start a session with the default options, loading preferences from
    /// the collaborators' store.
    pub fn new(config: SessionConfig, collab: Collaborators) -> Self {
        let engine = SpinEngine::new(config.seed);
        let prefs = Preferences::load(collab.store.as_ref());
        Self {
            config,
            choices: ChoiceList::default(),
            speed: SpinSpeed::Normal,
            engine,
            history: SpinHistory::new(),
            winner: None,
            simple_mode: false,
            prefs,
            collab,
        }
    }

    /// Resume a session from a snapshot.
    ///
    /// A winner that is still on the list comes back `Resolved`; one that is
    /// not is dropped and the session starts `Idle`.
    pub fn restore(
        config: SessionConfig,
        collab: Collaborators,
        snapshot: SessionSnapshot,
    ) -> Self {
        let mut session = Self::new(config, collab);
        session.choices = ChoiceList::from_labels(snapshot.items);
        session.choices.set_palette(snapshot.palette);
        session.speed = SpinSpeed::from_multiplier(snapshot.spin_speed).unwrap_or_default();
        session.engine.set_spin_count(snapshot.spin_count);
        session.history = snapshot.spin_history;
        session.simple_mode = snapshot.simple_mode;

        let winner_index = snapshot
            .winner
            .as_deref()
            .and_then(|w| session.choices.labels().iter().position(|l| l == w));
        match winner_index {
            Some(index) => {
                session.engine.resume_resolved(index);
                session.winner = snapshot.winner;
            }
            None if snapshot.winner.is_some() => {
                warn!("restored winner is no longer on the wheel; dropping it");
            }
            None => {}
        }
        session
    }

    /// Capture the full working state.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            items: self.choices.labels().to_vec(),
            palette: self.choices.palette().clone(),
            spin_speed: self.speed.multiplier(),
            spin_count: self.engine.spin_count(),
            spin_history: self.history.clone(),
            winner: self.winner.clone(),
            simple_mode: self.simple_mode,
        }
    }

    /// Session configuration.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// The option list.
    pub fn choices(&self) -> &ChoiceList {
        &self.choices
    }

    /// Option labels in wheel order.
    pub fn options(&self) -> &[String] {
        self.choices.labels()
    }

    /// One color per option.
    pub fn colors(&self) -> Vec<Color> {
        self.choices.colors()
    }

    /// Current speed preset.
    pub fn speed(&self) -> SpinSpeed {
        self.speed
    }

    /// Spin engine state.
    pub fn state(&self) -> SpinState {
        self.engine.state()
    }

    /// Whether a spin is in flight.
    pub fn is_spinning(&self) -> bool {
        self.engine.is_spinning()
    }

    /// Spins started.
    pub fn spin_count(&self) -> u64 {
        self.engine.spin_count()
    }

    /// Completed spins.
    pub fn history(&self) -> &SpinHistory {
        &self.history
    }

    /// Winner of the last completed spin, until the list changes.
    pub fn winner(&self) -> Option<&str> {
        self.winner.as_deref()
    }

    /// Whether simple yes/no mode is on.
    pub fn simple_mode(&self) -> bool {
        self.simple_mode
    }

    /// Whether audio cues play.
    pub fn sound_enabled(&self) -> bool {
        self.prefs.sound_enabled
    }

    /// Built-in and saved categories.
    pub fn categories(&self) -> &CategoryCatalog {
        &self.prefs.categories
    }

    /// Clear the displayed winner and leave `Resolved`.
    fn settle(&mut self) {
        self.winner = None;
        self.engine.reset();
    }

    /// Append an option. Blank labels and calls during a spin are ignored.
    pub fn add_option(&mut self, label: &str) -> bool {
        if self.is_spinning() || !self.choices.add(label) {
            return false;
        }
        self.settle();
        debug!(label = label.trim(), count = self.choices.len(), "added option");
        true
    }

    /// Remove the option at `index`.
    pub fn remove_option(&mut self, index: usize) -> bool {
        if self.is_spinning() {
            return false;
        }
        match self.choices.remove(index) {
            Some(label) => {
                self.settle();
                debug!(%label, index, "removed option");
                true
            }
            None => false,
        }
    }

    /// Remove every option and clear the winner.
    pub fn clear(&mut self) -> bool {
        if self.is_spinning() {
            return false;
        }
        self.choices.clear();
        self.settle();
        debug!("cleared options");
        true
    }

    /// Recolor the option at `index`.
    pub fn assign_color(&mut self, index: usize, color: Color) -> bool {
        !self.is_spinning() && self.choices.assign_color(index, color)
    }

    /// Replace the whole palette.
    pub fn replace_palette(&mut self, palette: Palette) -> bool {
        if self.is_spinning() {
            return false;
        }
        self.choices.set_palette(palette);
        true
    }

    /// Change the animation speed.
    pub fn set_speed(&mut self, speed: SpinSpeed) -> bool {
        if self.is_spinning() {
            return false;
        }
        self.speed = speed;
        true
    }

    /// Replace the options with a copy of a category's items.
    pub fn load_category(&mut self, id: &str) -> WheelResult<bool> {
        if self.is_spinning() {
            return Ok(false);
        }
        let category = self
            .prefs
            .categories
            .find(id)
            .ok_or_else(|| WheelError::UnknownCategory(id.to_string()))?;
        self.choices.replace(&category.items);
        info!(id, count = self.choices.len(), "loaded category");
        self.settle();
        Ok(true)
    }

    /// Save the current options as a user category and persist the set.
    ///
    /// Blank names and an empty option list are ignored.
    pub fn save_current_as_category(&mut self, name: &str) -> WheelResult<bool> {
        if self.is_spinning() {
            return Ok(false);
        }
        let mut prefs = self.prefs.clone();
        let Some(category) = prefs.categories.save(name, self.choices.labels()) else {
            return Ok(false);
        };
        let (id, items) = (category.id.clone(), category.items.len());
        prefs.save_categories(self.collab.store.as_mut())?;
        self.prefs = prefs;
        info!(%id, items, "saved category");
        Ok(true)
    }

    /// Delete a user category and persist the set. Built-in ids are never
    /// touched.
    pub fn delete_category(&mut self, id: &str) -> WheelResult<bool> {
        if self.is_spinning() {
            return Ok(false);
        }
        let mut prefs = self.prefs.clone();
        if !prefs.categories.delete(id) {
            return Ok(false);
        }
        prefs.save_categories(self.collab.store.as_mut())?;
        self.prefs = prefs;
        info!(id, "deleted category");
        Ok(true)
    }

    /// Flip the sound preference and persist it. Returns the new value.
    pub fn toggle_sound(&mut self) -> WheelResult<bool> {
        let enabled = !self.prefs.sound_enabled;
        self.set_sound_enabled(enabled)?;
        Ok(self.prefs.sound_enabled)
    }

    /// Set the sound preference and persist it.
    pub fn set_sound_enabled(&mut self, enabled: bool) -> WheelResult<()> {
        if self.is_spinning() {
            return Ok(());
        }
        let prefs = Preferences {
            sound_enabled: enabled,
            ..self.prefs.clone()
        };
        prefs.save_sound(self.collab.store.as_mut())?;
        self.prefs = prefs;
        Ok(())
    }

    /// Switch simple yes/no mode. Entering replaces the options and colors;
    /// leaving clears the options and restores the default palette.
    pub fn toggle_simple_mode(&mut self) -> bool {
        if self.is_spinning() {
            return false;
        }
        self.simple_mode = !self.simple_mode;
        if self.simple_mode {
            let labels: Vec<String> = SIMPLE_MODE_CHOICES.iter().map(|s| s.to_string()).collect();
            self.choices.replace(&labels);
            self.choices.set_palette(Palette::simple_mode());
        } else {
            self.choices.clear();
            self.choices.set_palette(Palette::default());
        }
        self.settle();
        true
    }

    /// Start a spin.
    ///
    /// Needs at least two options and no spin in flight; otherwise nothing
    /// happens and `None` is returned. The winner is fixed here and handed to
    /// the renderer, which must later call [`complete_spin`](Self::complete_spin).
    pub fn spin(&mut self) -> Option<usize> {
        let winner_index = self.engine.start(&self.choices, Utc::now())?;
        self.winner = None;

        let request = SpinRequest {
            options: self.choices.labels().to_vec(),
            colors: self.choices.colors(),
            winner_index,
            duration: self.speed.duration(self.config.base_spin_duration),
        };
        info!(
            spin = self.engine.spin_count(),
            options = request.options.len(),
            duration_ms = request.duration.as_millis() as u64,
            "spin started"
        );
        self.collab.renderer.start_spin(&request);
        if self.prefs.sound_enabled {
            self.collab.audio.start_spinning_loop();
        }
        Some(winner_index)
    }

    /// The renderer's animation-complete signal.
    ///
    /// Records the winner fixed at spin start, plays the win cue and starts
    /// the celebration. Returns the winner, or `None` if no spin was running.
    pub fn complete_spin(&mut self) -> Option<&str> {
        let index = self.engine.complete()?;
        if self.prefs.sound_enabled {
            self.collab.audio.stop_spinning_loop();
        }

        let Some(label) = self.choices.get(index).map(str::to_string) else {
            warn!(index, "winning index no longer exists; dropping result");
            self.engine.reset();
            return None;
        };

        self.history.push(SpinRecord::new(Utc::now(), label.clone()));
        info!(winner = %label, total = self.history.len(), "spin resolved");

        if self.prefs.sound_enabled {
            self.collab.audio.play_win();
        }
        self.collab
            .celebration
            .celebrate(self.config.celebration_duration);
        self.winner = Some(label);
        self.winner.as_deref()
    }

    /// Abandon the running spin without a result. The spin count keeps its
    /// increment.
    pub fn cancel_spin(&mut self) -> bool {
        if !self.engine.cancel() {
            return false;
        }
        if self.prefs.sound_enabled {
            self.collab.audio.stop_spinning_loop();
        }
        info!("spin cancelled");
        true
    }

    /// Cancel a spin that has waited longer than the configured timeout for
    /// its completion signal. Does nothing when no timeout is configured.
    pub fn expire_stalled_spin(&mut self, now: DateTime<Utc>) -> bool {
        let Some(timeout) = self.config.spin_timeout else {
            return false;
        };
        if !self.engine.is_stalled(now, timeout) {
            return false;
        }
        warn!(
            timeout_ms = timeout.as_millis() as u64,
            "spin never completed; abandoning it"
        );
        self.cancel_spin()
    }

    /// Build the export document.
    pub fn export_document(&self, now: DateTime<Utc>) -> SessionDocument {
        SessionDocument {
            items: self.choices.labels().to_vec(),
            spin_speed: self.speed.multiplier(),
            timestamp: now,
            winner: self.winner.clone(),
            spin_count: self.engine.spin_count(),
            spin_history: self.history.records().to_vec(),
        }
    }

    /// Export the session through the file sink. Returns the file name.
    pub fn export_session(&mut self) -> WheelResult<String> {
        let now = Utc::now();
        let json = self.export_document(now).to_json()?;
        let filename = export_filename(now, "json");
        self.collab
            .files
            .download(json.as_bytes(), &filename)
            .map_err(WheelError::Download)?;
        info!(%filename, items = self.choices.len(), "exported session");
        Ok(filename)
    }

    /// Import a session document.
    ///
    /// A document that does not parse changes nothing. Otherwise options and
    /// speed are always replaced, while history and spin count are replaced
    /// only when present. Ignored during a spin.
    pub fn import_session(&mut self, text: &str) -> WheelResult<bool> {
        if self.is_spinning() {
            return Ok(false);
        }
        let imported = ImportedSession::parse(text)?;

        let speed = imported.speed();
        self.choices.replace(imported.items.as_deref().unwrap_or_default());
        self.speed = speed;
        if let Some(records) = imported.spin_history {
            self.history = SpinHistory::from(records);
        }
        if let Some(count) = imported.spin_count {
            self.engine.set_spin_count(count);
        }
        self.settle();

        info!(
            items = self.choices.len(),
            history = self.history.len(),
            "imported session"
        );
        Ok(true)
    }

    /// Share the current winner, falling back to the clipboard.
    pub fn share_result(&mut self) -> WheelResult<ShareOutcome> {
        let winner = self.winner.clone().ok_or(WheelError::NoWinner)?;
        share::share_result(
            &winner,
            &self.config.share_url,
            self.collab.share.as_mut(),
            self.collab.clipboard.as_mut(),
        )
    }

    /// Capture the wheel as an image and share or download it. Ignored
    /// during a spin.
    pub fn capture_wheel(&mut self) -> WheelResult<Option<ShareOutcome>> {
        if self.is_spinning() {
            return Ok(None);
        }
        share::capture_wheel(
            self.winner.as_deref(),
            Utc::now(),
            self.collab.capture.as_mut(),
            self.collab.share.as_mut(),
            self.collab.files.as_mut(),
        )
        .map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;

    use crate::preferences::SOUND_KEY;

    #[derive(Default)]
    struct Calls(Rc<RefCell<Vec<String>>>);

    impl Calls {
        fn log(&self) -> Vec<String> {
            self.0.borrow().clone()
        }
    }

    struct Recorder(Rc<RefCell<Vec<String>>>);

    impl WheelRenderer for Recorder {
        fn start_spin(&mut self, request: &SpinRequest) {
            self.0
                .borrow_mut()
                .push(format!("render {} {:?}", request.winner_index, request.duration));
        }
    }

    impl AudioCues for Recorder {
        fn start_spinning_loop(&mut self) {
            self.0.borrow_mut().push("loop start".into());
        }
        fn stop_spinning_loop(&mut self) {
            self.0.borrow_mut().push("loop stop".into());
        }
        fn play_win(&mut self) {
            self.0.borrow_mut().push("win".into());
        }
    }

    impl Celebration for Recorder {
        fn celebrate(&mut self, duration: Duration) {
            self.0.borrow_mut().push(format!("confetti {}s", duration.as_secs()));
        }
    }

    #[derive(Default)]
    struct MemorySink(Rc<RefCell<Vec<(String, Vec<u8>)>>>);

    impl FileSink for MemorySink {
        fn download(&mut self, bytes: &[u8], filename: &str) -> Result<(), String> {
            self.0
                .borrow_mut()
                .push((filename.to_string(), bytes.to_vec()));
            Ok(())
        }
    }

    fn session() -> DecisionSession {
        DecisionSession::new(SessionConfig::default().with_seed(42), Collaborators::default())
    }

    fn session_with(labels: &[&str]) -> DecisionSession {
        let mut s = session();
        s.clear();
        for l in labels {
            s.add_option(l);
        }
        s
    }

    fn recorded_session(store: MemoryStore) -> (DecisionSession, Calls) {
        let calls = Calls::default();
        let mut collab = Collaborators::headless(Box::new(store));
        collab.renderer = Box::new(Recorder(calls.0.clone()));
        collab.audio = Box::new(Recorder(calls.0.clone()));
        collab.celebration = Box::new(Recorder(calls.0.clone()));
        let s = DecisionSession::new(SessionConfig::default().with_seed(3), collab);
        (s, calls)
    }

    #[test]
    fn new_session_defaults() {
        let s = session();
        assert_eq!(s.options().len(), 6);
        assert_eq!(s.state(), SpinState::Idle);
        assert_eq!(s.spin_count(), 0);
        assert!(s.history().is_empty());
        assert!(s.winner().is_none());
        assert!(s.sound_enabled());
        assert_eq!(s.speed(), SpinSpeed::Normal);
    }

    #[test]
    fn spin_then_complete_records_history() {
        let mut s = session_with(&["A", "B", "C"]);
        let idx = s.spin().unwrap();
        assert!(s.is_spinning());
        assert!(s.history().is_empty());

        let winner = s.complete_spin().unwrap().to_string();
        assert_eq!(winner, s.options()[idx]);
        assert_eq!(s.history().len(), 1);
        assert_eq!(s.spin_count(), 1);
        assert_eq!(s.state(), SpinState::Resolved { winner_index: idx });
        assert!(["A", "B", "C"].contains(&winner.as_str()));
    }

    #[test]
    fn spin_with_one_option_is_noop() {
        let mut s = session_with(&["A"]);
        assert!(s.spin().is_none());
        assert_eq!(s.state(), SpinState::Idle);
        assert!(s.history().is_empty());
        assert_eq!(s.spin_count(), 0);
    }

    #[test]
    fn second_spin_while_spinning_is_noop() {
        let mut s = session_with(&["A", "B"]);
        s.spin().unwrap();
        let state = s.state();
        assert!(s.spin().is_none());
        assert_eq!(s.state(), state);
        assert_eq!(s.spin_count(), 1);
    }

    #[test]
    fn complete_without_spin_is_noop() {
        let mut s = session();
        assert!(s.complete_spin().is_none());
        assert!(s.history().is_empty());
    }

    #[test]
    fn mutations_rejected_while_spinning() {
        let mut s = session_with(&["A", "B"]);
        s.spin().unwrap();
        assert!(!s.add_option("C"));
        assert!(!s.remove_option(0));
        assert!(!s.clear());
        assert!(!s.set_speed(SpinSpeed::Fast));
        assert!(!s.toggle_simple_mode());
        assert!(!s.assign_color(0, Color::parse("#000000").unwrap()));
        assert!(!s.load_category("food").unwrap());
        assert!(!s.save_current_as_category("Mine").unwrap());
        assert!(!s.import_session(r#"{"items":["X","Y"]}"#).unwrap());
        assert_eq!(s.capture_wheel().unwrap(), None);
        assert_eq!(s.options(), &["A".to_string(), "B".to_string()]);
        assert_eq!(s.speed(), SpinSpeed::Normal);
    }

    #[test]
    fn mutation_after_resolve_returns_to_idle() {
        let mut s = session_with(&["A", "B"]);
        s.spin().unwrap();
        s.complete_spin().unwrap();
        assert!(s.winner().is_some());
        s.add_option("C");
        assert_eq!(s.state(), SpinState::Idle);
        assert!(s.winner().is_none());
    }

    #[test]
    fn new_spin_clears_previous_winner() {
        let mut s = session_with(&["A", "B"]);
        s.spin().unwrap();
        s.complete_spin().unwrap();
        s.spin().unwrap();
        assert!(s.winner().is_none());
        assert_eq!(s.spin_count(), 2);
    }

    #[test]
    fn add_option_trims_and_ignores_blank() {
        let mut s = session_with(&[]);
        assert!(!s.add_option(""));
        assert!(!s.add_option("   "));
        assert!(s.options().is_empty());
        assert!(s.add_option(" X "));
        assert_eq!(s.options(), &["X".to_string()]);
    }

    #[test]
    fn collaborators_called_in_order() {
        let (mut s, calls) = recorded_session(MemoryStore::new());
        s.set_speed(SpinSpeed::Fast);
        let idx = s.spin().unwrap();
        s.complete_spin().unwrap();
        assert_eq!(
            calls.log(),
            vec![
                format!("render {idx} 400ms"),
                "loop start".to_string(),
                "loop stop".to_string(),
                "win".to_string(),
                "confetti 5s".to_string(),
            ]
        );
    }

    #[test]
    fn sound_off_silences_cues() {
        let (mut s, calls) = recorded_session(MemoryStore::new());
        s.set_sound_enabled(false).unwrap();
        s.spin().unwrap();
        s.complete_spin().unwrap();
        let log = calls.log();
        assert!(!log.iter().any(|c| c.starts_with("loop") || c == "win"));
        assert!(log.iter().any(|c| c.starts_with("confetti")));
    }

    #[test]
    fn sound_preference_survives_new_session() {
        let store = MemoryStore::new();
        let mut s = DecisionSession::new(
            SessionConfig::default(),
            Collaborators::headless(Box::new(store.clone())),
        );
        assert!(!s.toggle_sound().unwrap());
        assert_eq!(store.get(SOUND_KEY).as_deref(), Some("false"));

        let fresh = DecisionSession::new(
            SessionConfig::default(),
            Collaborators::headless(Box::new(store)),
        );
        assert!(!fresh.sound_enabled());
    }

    #[test]
    fn categories_persist_and_delete() {
        let store = MemoryStore::new();
        let mut s = DecisionSession::new(
            SessionConfig::default(),
            Collaborators::headless(Box::new(store.clone())),
        );
        assert!(!s.save_current_as_category("").unwrap());
        assert!(s.save_current_as_category("Lunch Ideas").unwrap());
        assert!(s.save_current_as_category("Other").unwrap());

        let reloaded = Preferences::load(&store);
        assert_eq!(reloaded.categories.custom().len(), 2);

        assert!(!s.delete_category("food").unwrap());
        assert!(s.delete_category("lunch-ideas").unwrap());
        let reloaded = Preferences::load(&store);
        let ids: Vec<_> = reloaded.categories.custom().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["other"]);
        assert!(reloaded.categories.find("food").is_some());
    }

    #[test]
    fn save_category_requires_options() {
        let mut s = session_with(&[]);
        assert!(!s.save_current_as_category("Empty").unwrap());
        assert!(s.categories().custom().is_empty());
    }

    #[test]
    fn load_category_copies_items() {
        let mut s = session();
        assert!(s.load_category("yes-no").unwrap());
        assert_eq!(s.options()[0], "✅ Yes");
        s.add_option("Extra");
        assert_eq!(s.categories().find("yes-no").unwrap().items.len(), 6);
        assert!(matches!(
            s.load_category("nope"),
            Err(WheelError::UnknownCategory(_))
        ));
    }

    #[test]
    fn simple_mode_round_trip() {
        let mut s = session();
        assert!(s.toggle_simple_mode());
        assert!(s.simple_mode());
        assert_eq!(s.options(), &["✅ Yes".to_string(), "❌ No".to_string()]);
        assert_eq!(s.colors()[0].as_str(), "#4CAF50");

        assert!(s.toggle_simple_mode());
        assert!(!s.simple_mode());
        assert!(s.options().is_empty());
        assert_eq!(s.choices().palette(), &Palette::default());
    }

    #[test]
    fn export_import_round_trip() {
        let mut s = session_with(&["A", "B", "C"]);
        s.set_speed(SpinSpeed::Slow);
        s.spin().unwrap();
        s.complete_spin().unwrap();
        let json = s.export_document(Utc::now()).to_json().unwrap();

        let mut other = session();
        assert!(other.import_session(&json).unwrap());
        assert_eq!(other.options(), s.options());
        assert_eq!(other.speed(), SpinSpeed::Slow);
        assert_eq!(other.spin_count(), 1);
        assert_eq!(other.history(), s.history());
        assert!(other.winner().is_none());
    }

    #[test]
    fn import_without_history_keeps_existing() {
        let mut s = session_with(&["A", "B"]);
        s.spin().unwrap();
        s.complete_spin().unwrap();

        assert!(s.import_session(r#"{"items":["X","Y","Z"]}"#).unwrap());
        assert_eq!(s.options().len(), 3);
        assert_eq!(s.history().len(), 1);
        assert_eq!(s.spin_count(), 1);
        assert_eq!(s.speed(), SpinSpeed::Normal);
    }

    #[test]
    fn import_missing_items_empties_list() {
        let mut s = session();
        assert!(s.import_session(r#"{"spinSpeed":2}"#).unwrap());
        assert!(s.options().is_empty());
        assert_eq!(s.speed(), SpinSpeed::Fast);
    }

    #[test]
    fn malformed_import_changes_nothing() {
        let mut s = session_with(&["A", "B"]);
        let err = s.import_session("{not json").unwrap_err();
        assert!(matches!(err, WheelError::MalformedSession(_)));
        assert_eq!(s.options().len(), 2);
    }

    #[test]
    fn export_hands_file_to_sink() {
        let sink = MemorySink::default();
        let files = sink.0.clone();
        let mut collab = Collaborators::default();
        collab.files = Box::new(sink);
        let mut s = DecisionSession::new(SessionConfig::default(), collab);

        let name = s.export_session().unwrap();
        assert!(name.starts_with("decision-wheel-") && name.ends_with(".json"));
        let saved = files.borrow();
        assert_eq!(saved[0].0, name);
        let text = String::from_utf8(saved[0].1.clone()).unwrap();
        assert!(text.contains("\"spinCount\":0"));
    }

    #[test]
    fn export_without_sink_fails() {
        let mut s = session();
        assert!(matches!(s.export_session(), Err(WheelError::Download(_))));
    }

    #[test]
    fn share_needs_winner() {
        let mut s = session();
        assert!(matches!(s.share_result(), Err(WheelError::NoWinner)));
    }

    #[test]
    fn capture_failure_surfaces() {
        let mut s = session();
        assert!(matches!(
            s.capture_wheel(),
            Err(WheelError::CaptureFailure(_))
        ));
    }

    #[test]
    fn cancel_leaves_no_history() {
        let mut s = session_with(&["A", "B"]);
        s.spin().unwrap();
        assert!(s.cancel_spin());
        assert_eq!(s.state(), SpinState::Idle);
        assert!(s.history().is_empty());
        assert_eq!(s.spin_count(), 1);
        assert!(s.complete_spin().is_none());
    }

    #[test]
    fn stalled_spin_expires_only_with_timeout() {
        let mut s = session_with(&["A", "B"]);
        s.spin().unwrap();
        let later = Utc::now() + chrono::Duration::hours(1);
        assert!(!s.expire_stalled_spin(later));
        assert!(s.is_spinning());

        let mut s = DecisionSession::new(
            SessionConfig::default().with_spin_timeout(Duration::from_secs(10)),
            Collaborators::default(),
        );
        s.spin().unwrap();
        assert!(!s.expire_stalled_spin(Utc::now()));
        assert!(s.expire_stalled_spin(later));
        assert_eq!(s.state(), SpinState::Idle);
    }

    #[test]
    fn snapshot_restore() {
        let mut s = session_with(&["A", "B"]);
        s.assign_color(1, Color::parse("#010203").unwrap());
        s.set_speed(SpinSpeed::Fast);
        s.spin().unwrap();
        s.complete_spin().unwrap();
        let snap = s.snapshot();

        let json = serde_json::to_string(&snap).unwrap();
        let back: SessionSnapshot = serde_json::from_str(&json).unwrap();
        let restored =
            DecisionSession::restore(SessionConfig::default(), Collaborators::default(), back);
        assert_eq!(restored.options(), s.options());
        assert_eq!(restored.colors(), s.colors());
        assert_eq!(restored.speed(), SpinSpeed::Fast);
        assert_eq!(restored.winner(), s.winner());
        assert_eq!(restored.history().len(), 1);
        let index = s.options().iter().position(|o| Some(o.as_str()) == s.winner());
        assert_eq!(
            restored.state(),
            SpinState::Resolved {
                winner_index: index.unwrap()
            }
        );
    }

    #[test]
    fn restore_drops_winner_missing_from_list() {
        let mut snap = session_with(&["A", "B"]).snapshot();
        snap.winner = Some("Z".into());
        let restored =
            DecisionSession::restore(SessionConfig::default(), Collaborators::default(), snap);
        assert_eq!(restored.winner(), None);
        assert_eq!(restored.state(), SpinState::Idle);
    }

    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> Option<String> {
            None
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<(), String> {
            Err("disk full".into())
        }
    }

    fn broken_session() -> DecisionSession {
        let mut s = DecisionSession::new(
            SessionConfig::default(),
            Collaborators::headless(Box::new(BrokenStore)),
        );
        s.clear();
        s.add_option("A");
        s
    }

    #[test]
    fn failed_category_save_keeps_catalog() {
        let mut s = broken_session();
        let err = s.save_current_as_category("Mine").unwrap_err();
        assert!(matches!(err, WheelError::Store(_)));
        assert!(s.categories().custom().is_empty());
    }

    #[test]
    fn failed_sound_save_keeps_flag() {
        let mut s = broken_session();
        assert!(s.sound_enabled());
        assert!(s.toggle_sound().is_err());
        assert!(s.set_sound_enabled(false).is_err());
        assert!(s.sound_enabled());
    }

    #[test]
    fn import_keeps_locale_history_timestamps() {
        let mut s = session();
        let doc = r#"{"items":["A","B"],"spinSpeed":1,"spinCount":1,"spinHistory":[{"timestamp":"01.05.2024 12:00:00","winner":"A"}]}"#;
        assert!(s.import_session(doc).unwrap());
        assert_eq!(s.options(), ["A".to_string(), "B".to_string()]);
        let record = s.history().last().unwrap();
        assert_eq!(record.winner, "A");
        assert_eq!(record.timestamp.to_string(), "01.05.2024 12:00:00");

        let exported = s.export_document(Utc::now()).to_json().unwrap();
        assert!(exported.contains(r#""timestamp":"01.05.2024 12:00:00""#));
    }
}
