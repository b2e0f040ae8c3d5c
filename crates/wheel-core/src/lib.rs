//! Core session model for the decision wheel.
//!
//! Holds the editable option list and its palette, the built-in and saved
//! category catalog, the spin state machine with its history, and the
//! persistence layer (portable session documents and a key-value preference
//! store). Rendering, audio, sharing and screen capture are reached through
//! the collaborator traits in [`collab`].

pub mod category;
pub mod choice;
pub mod collab;
pub mod config;
pub mod document;
pub mod error;
pub mod history;
pub mod palette;
pub mod preferences;
pub mod session;
pub mod share;
pub mod spin;

pub use category::{Category, CategoryCatalog};
pub use choice::ChoiceList;
pub use config::SessionConfig;
pub use document::SessionDocument;
pub use error::{WheelError, WheelResult};
pub use history::{RecordTime, SpinHistory, SpinRecord};
pub use palette::{Color, Palette};
pub use preferences::Preferences;
pub use session::{Collaborators, DecisionSession, SessionSnapshot};
pub use share::ShareOutcome;
pub use spin::{SpinEngine, SpinRequest, SpinSpeed, SpinState};
