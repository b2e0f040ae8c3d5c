//! Sharing a result and exporting the wheel as an image.

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use crate::collab::{
    CaptureOptions, Clipboard, ElementKind, FileSink, ScreenCapture, ShareSheet, SharedFile,
};
use crate::document::{EXPORT_PREFIX, export_filename};
use crate::error::{WheelError, WheelResult};
use crate::palette::Color;

/// Title used for shared results.
pub const SHARE_TITLE: &str = "Decision Wheel Result";

/// Title used for shared wheel images.
pub const IMAGE_SHARE_TITLE: &str = "Decision Wheel";

/// Background painted behind a captured wheel.
pub const CAPTURE_BACKGROUND: &str = "#581C85";

/// How a share request was delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareOutcome {
    /// Handed to the share sheet.
    Shared,
    /// Copied to the clipboard because no share sheet was available.
    Copied,
    /// Saved as a file because sharing was unavailable or failed.
    Downloaded,
}

/// Message shared for a winner.
pub fn result_message(winner: &str) -> String {
    format!("My decision wheel picked {winner}! 🎯\nWant to try it too? 🎲")
}

/// Caption attached to a shared wheel image.
pub fn image_caption(winner: Option<&str>) -> String {
    match winner {
        Some(w) => format!("My decision wheel picked {w}! 🎯"),
        None => "My decision wheel".to_string(),
    }
}

/// Capture settings: dark purple background, double density, and no
/// overlays or controls in the picture.
pub fn capture_options() -> CaptureOptions {
    CaptureOptions {
        background: Color::trusted(CAPTURE_BACKGROUND),
        scale: 2.0,
        excluded: vec![
            ElementKind::Confetti,
            ElementKind::Button,
            ElementKind::WinnerDisplay,
        ],
    }
}

/// Share `winner` through the share sheet, or copy it to the clipboard when
/// no share sheet exists.
pub fn share_result(
    winner: &str,
    url: &str,
    sheet: &mut dyn ShareSheet,
    clipboard: &mut dyn Clipboard,
) -> WheelResult<ShareOutcome> {
    let text = result_message(winner);
    if sheet.is_available() {
        sheet
            .share_text(SHARE_TITLE, &text, url)
            .map_err(WheelError::ShareFailure)?;
        info!(%winner, "shared result");
        Ok(ShareOutcome::Shared)
    } else {
        clipboard
            .copy_text(&text)
            .map_err(WheelError::ShareFailure)?;
        info!(%winner, "copied result to clipboard");
        Ok(ShareOutcome::Copied)
    }
}

/// Capture the wheel and share the PNG, falling back to a dated download
/// when sharing is unavailable or rejected.
pub fn capture_wheel(
    winner: Option<&str>,
    now: DateTime<Utc>,
    capture: &mut dyn ScreenCapture,
    sheet: &mut dyn ShareSheet,
    sink: &mut dyn FileSink,
) -> WheelResult<ShareOutcome> {
    let png = capture
        .capture(&capture_options())
        .map_err(WheelError::CaptureFailure)?;

    if sheet.is_available() {
        let file = SharedFile {
            name: format!("{EXPORT_PREFIX}.png"),
            mime: "image/png".to_string(),
            bytes: png.clone(),
        };
        match sheet.share_files(IMAGE_SHARE_TITLE, &image_caption(winner), &[file]) {
            Ok(()) => {
                info!(bytes = png.len(), "shared wheel image");
                return Ok(ShareOutcome::Shared);
            }
            Err(e) => warn!(error = %e, "image share failed; downloading instead"),
        }
    }

    let filename = export_filename(now, "png");
    sink.download(&png, &filename).map_err(WheelError::Download)?;
    info!(%filename, bytes = png.len(), "saved wheel image");
    Ok(ShareOutcome::Downloaded)
}
