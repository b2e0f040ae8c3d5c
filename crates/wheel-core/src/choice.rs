//! The editable list of wheel options and their colors.

use serde::{Deserialize, Serialize};

use crate::palette::{Color, Palette};

/// Options a fresh session starts with.
pub const DEFAULT_CHOICES: &[&str] = &[
    "🍕 Pizza",
    "🍔 Burger",
    "🍜 Noodles",
    "🍣 Sushi",
    "🥗 Salad",
    "🌮 Taco",
];

/// Ordered wheel options. An option's identity is its position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceList {
    labels: Vec<String>,
    palette: Palette,
}

impl ChoiceList {
    /// An empty list with the default palette.
    pub fn new() -> Self {
        Self {
            labels: Vec::new(),
            palette: Palette::default(),
        }
    }

    /// A list holding the given labels with the default palette.
    pub fn from_labels(labels: Vec<String>) -> Self {
        Self {
            labels,
            palette: Palette::default(),
        }
    }

    /// All option labels in wheel order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Label at `index`.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }

    /// Number of options.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether the list has no options.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Whether there are enough options for a spin.
    pub fn is_spinnable(&self) -> bool {
        self.labels.len() >= 2
    }

    /// The palette options are colored from.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// One color per option.
    pub fn colors(&self) -> Vec<Color> {
        self.palette.assign(self.labels.len())
    }

    /// Append a trimmed label. Blank labels are ignored. Returns true if added.
    pub fn add(&mut self, label: &str) -> bool {
        let trimmed = label.trim();
        if trimmed.is_empty() {
            return false;
        }
        self.labels.push(trimmed.to_string());
        true
    }

    /// Remove the option at `index`. Returns the removed label if it existed.
    pub fn remove(&mut self, index: usize) -> Option<String> {
        if index < self.labels.len() {
            Some(self.labels.remove(index))
        } else {
            None
        }
    }

    /// Drop every option.
    pub fn clear(&mut self) {
        self.labels.clear();
    }

    /// Replace every option with a copy of `labels`.
    pub fn replace(&mut self, labels: &[String]) {
        self.labels = labels.to_vec();
    }

    /// Recolor the option at `index`. Returns false if there is no such option.
    pub fn assign_color(&mut self, index: usize, color: Color) -> bool {
        if index >= self.labels.len() {
            return false;
        }
        self.palette.set_slot(index, color);
        true
    }

    /// Replace the whole palette.
    pub fn set_palette(&mut self, palette: Palette) {
        self.palette = palette;
    }
}

impl Default for ChoiceList {
    fn default() -> Self {
        Self::from_labels(DEFAULT_CHOICES.iter().map(|s| s.to_string()).collect())
    }
}
