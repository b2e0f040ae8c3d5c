//! Interfaces to the world outside the session.
//!
//! The session never draws, plays sound, touches the filesystem or talks to
//! a share sheet directly. Frontends implement these traits; the `Silent*`
//! types and [`MemoryStore`] are inert stand-ins for tests and headless use.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;

use crate::palette::Color;
use crate::spin::SpinRequest;

/// Animates the wheel.
///
/// After `start_spin` the frontend must call
/// [`DecisionSession::complete_spin`](crate::DecisionSession::complete_spin)
/// exactly once when the animation ends.
pub trait WheelRenderer {
    /// Begin animating towards `request.winner_index`.
    fn start_spin(&mut self, request: &SpinRequest);
}

/// Fire-and-forget sound cues. The session only calls these when sound is on.
pub trait AudioCues {
    /// Start the looping spin sound.
    fn start_spinning_loop(&mut self);
    /// Stop the looping spin sound.
    fn stop_spinning_loop(&mut self);
    /// Play the win jingle once.
    fn play_win(&mut self);
}

/// Time-bounded celebration overlay (confetti).
pub trait Celebration {
    /// Show the overlay; it removes itself after `duration`.
    fn celebrate(&mut self, duration: Duration);
}

/// Small persistent string store, one value per key.
pub trait KeyValueStore {
    /// Read a key.
    fn get(&self, key: &str) -> Option<String>;
    /// Write a key.
    fn set(&mut self, key: &str, value: &str) -> Result<(), String>;
}

/// Hands bytes to the user as a downloadable file.
pub trait FileSink {
    /// Save `bytes` under `filename`.
    fn download(&mut self, bytes: &[u8], filename: &str) -> Result<(), String>;
}

/// A file attached to a share request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharedFile {
    /// File name shown to the receiver.
    pub name: String,
    /// MIME type.
    pub mime: String,
    /// File contents.
    pub bytes: Vec<u8>,
}

/// The platform share sheet.
pub trait ShareSheet {
    /// Whether sharing is possible at all.
    fn is_available(&self) -> bool;
    /// Share a text message with a link.
    fn share_text(&mut self, title: &str, text: &str, url: &str) -> Result<(), String>;
    /// Share files with a message.
    fn share_files(&mut self, title: &str, text: &str, files: &[SharedFile])
    -> Result<(), String>;
}

/// Clipboard used when the share sheet is unavailable.
pub trait Clipboard {
    /// Copy text.
    fn copy_text(&mut self, text: &str) -> Result<(), String>;
}

/// Kinds of on-screen elements the capture may encounter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    /// The wheel graphic itself.
    Wheel,
    /// Confetti from the celebration overlay.
    Confetti,
    /// Any button.
    Button,
    /// The winner banner.
    WinnerDisplay,
    /// Anything else inside the captured region.
    Other,
}

/// Settings for rendering the wheel region to an image.
#[derive(Debug, Clone, PartialEq)]
pub struct CaptureOptions {
    /// Background fill behind the wheel.
    pub background: Color,
    /// Pixel density multiplier.
    pub scale: f32,
    /// Element kinds left out of the image.
    pub excluded: Vec<ElementKind>,
}

impl CaptureOptions {
    /// Whether an element of this kind is left out of the image.
    pub fn excludes(&self, kind: ElementKind) -> bool {
        self.excluded.contains(&kind)
    }
}

/// Renders an on-screen region to PNG bytes.
pub trait ScreenCapture {
    /// Capture the wheel region.
    fn capture(&mut self, options: &CaptureOptions) -> Result<Vec<u8>, String>;
}

/// A renderer that draws nothing.
#[derive(Debug, Default)]
pub struct SilentRenderer;

impl WheelRenderer for SilentRenderer {
    fn start_spin(&mut self, _request: &SpinRequest) {}
}

/// Audio that plays nothing.
#[derive(Debug, Default)]
pub struct SilentAudio;

impl AudioCues for SilentAudio {
    fn start_spinning_loop(&mut self) {}
    fn stop_spinning_loop(&mut self) {}
    fn play_win(&mut self) {}
}

/// A celebration nobody sees.
#[derive(Debug, Default)]
pub struct SilentCelebration;

impl Celebration for SilentCelebration {
    fn celebrate(&mut self, _duration: Duration) {}
}

/// Stand-in for a platform feature that does not exist here: sharing is
/// unavailable and every request fails.
#[derive(Debug, Default)]
pub struct Unsupported;

impl ShareSheet for Unsupported {
    fn is_available(&self) -> bool {
        false
    }

    fn share_text(&mut self, _title: &str, _text: &str, _url: &str) -> Result<(), String> {
        Err("sharing is not supported".to_string())
    }

    fn share_files(
        &mut self,
        _title: &str,
        _text: &str,
        _files: &[SharedFile],
    ) -> Result<(), String> {
        Err("sharing is not supported".to_string())
    }
}

impl Clipboard for Unsupported {
    fn copy_text(&mut self, _text: &str) -> Result<(), String> {
        Err("no clipboard available".to_string())
    }
}

impl ScreenCapture for Unsupported {
    fn capture(&mut self, _options: &CaptureOptions) -> Result<Vec<u8>, String> {
        Err("screen capture is not supported".to_string())
    }
}

impl FileSink for Unsupported {
    fn download(&mut self, _bytes: &[u8], _filename: &str) -> Result<(), String> {
        Err("file downloads are not supported".to_string())
    }
}

/// In-memory key-value store.
///
/// Clones share the same map, so a test can keep a handle and open a second
/// session over the same data.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
