//! Built-in and user-saved option sets.
//!
//! Built-in categories ship with the wheel and are never persisted or
//! deleted. User categories are snapshots of an option list, saved under a
//! name; their id is derived from that name and collisions are allowed.

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

/// Icon given to every user-saved category.
pub const CUSTOM_CATEGORY_ICON: &str = "⭐";

/// A named, reusable set of option labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Identifier derived from the title.
    pub id: String,
    /// Symbol shown next to the title.
    pub icon: String,
    /// Display name.
    pub title: String,
    /// Option labels in wheel order.
    pub items: Vec<String>,
}

impl Category {
    /// Build a user category from a name and the current labels.
    pub fn custom(name: &str, items: &[String]) -> Self {
        Self {
            id: category_id(name),
            icon: CUSTOM_CATEGORY_ICON.to_string(),
            title: name.to_string(),
            items: items.to_vec(),
        }
    }

    fn builtin(id: &str, icon: &str, title: &str, items: &[&str]) -> Self {
        Self {
            id: id.to_string(),
            icon: icon.to_string(),
            title: title.to_string(),
            items: items.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Derive a category id: lower-cased, whitespace runs collapsed to `-`.
pub fn category_id(name: &str) -> String {
    let lower = name.to_lowercase();
    let mut id = String::with_capacity(lower.len());
    let mut in_space = false;
    for c in lower.chars() {
        if c.is_whitespace() {
            if !in_space {
                id.push('-');
            }
            in_space = true;
        } else {
            id.push(c);
            in_space = false;
        }
    }
    id
}

static BUILTINS: LazyLock<Vec<Category>> = LazyLock::new(|| {
    vec![
        Category::builtin(
            "yes-no",
            "🤔",
            "Yes/No",
            &[
                "✅ Yes",
                "❌ No",
                "🤔 Maybe",
                "👍 Definitely Yes",
                "👎 Definitely No",
                "⏳ Later",
            ],
        ),
        Category::builtin(
            "food",
            "🍽️",
            "Food",
            &[
                "🍕 Pizza",
                "🍔 Burger",
                "🍜 Noodles",
                "🍣 Sushi",
                "🥗 Salad",
                "🌮 Taco",
                "🥘 Kebab",
                "🍝 Pasta",
                "🥪 Sandwich",
            ],
        ),
        Category::builtin(
            "cities",
            "🏙️",
            "Cities",
            &[
                "🏛️ Istanbul",
                "🏖️ Izmir",
                "🏔️ Ankara",
                "🌅 Antalya",
                "🌊 Mugla",
                "🏰 Bursa",
                "⛰️ Trabzon",
                "🌇 Eskisehir",
                "🌆 Konya",
            ],
        ),
        Category::builtin(
            "sports",
            "⚽",
            "Sports",
            &[
                "⚽ Football",
                "🏀 Basketball",
                "🏐 Volleyball",
                "🎾 Tennis",
                "🏊 Swimming",
                "🏃 Running",
                "🚴 Cycling",
                "🏋️ Fitness",
                "🎯 Darts",
            ],
        ),
        Category::builtin(
            "hobbies",
            "🎨",
            "Hobbies",
            &[
                "📚 Reading",
                "🎨 Painting",
                "🎮 Gaming",
                "🎸 Music",
                "📷 Photography",
                "🧘 Yoga",
                "🌱 Gardening",
                "✈️ Travel",
                "👨‍🍳 Cooking",
            ],
        ),
        Category::builtin(
            "movies",
            "🎬",
            "Movie Genres",
            &[
                "🎭 Drama",
                "😱 Horror",
                "🦸 Action",
                "🤖 Sci-Fi",
                "😂 Comedy",
                "💕 Romance",
                "🔍 Mystery",
                "🌍 Documentary",
                "🗺️ Adventure",
            ],
        ),
        Category::builtin(
            "music",
            "🎵",
            "Music",
            &[
                "🎸 Rock",
                "🎹 Pop",
                "🎺 Jazz",
                "🎻 Classical",
                "🎤 Hip Hop",
                "💃 Latin",
                "🪘 Folk",
                "🎼 Blues",
                "🎧 Electronic",
            ],
        ),
    ]
});

/// The fixed categories shipped with the wheel.
pub fn builtin_categories() -> &'static [Category] {
    &BUILTINS
}

/// Built-in categories plus the user's saved ones.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryCatalog {
    custom: Vec<Category>,
}

impl CategoryCatalog {
    /// A catalog with no user categories.
    pub fn new() -> Self {
        Self::default()
    }

    /// A catalog holding previously saved user categories.
    pub fn with_custom(custom: Vec<Category>) -> Self {
        Self { custom }
    }

    /// The fixed built-in categories.
    pub fn builtins(&self) -> &'static [Category] {
        builtin_categories()
    }

    /// User-saved categories in creation order.
    pub fn custom(&self) -> &[Category] {
        &self.custom
    }

    /// Built-ins followed by user categories.
    pub fn all(&self) -> impl Iterator<Item = &Category> {
        builtin_categories().iter().chain(self.custom.iter())
    }

    /// Find a category by id. Built-ins win over a colliding user id.
    pub fn find(&self, id: &str) -> Option<&Category> {
        self.all().find(|c| c.id == id)
    }

    /// Whether `id` names a built-in category.
    pub fn is_builtin(&self, id: &str) -> bool {
        builtin_categories().iter().any(|c| c.id == id)
    }

    /// Save `items` under `name`. Blank names and empty item lists are ignored.
    ///
    /// Returns the new category if one was created.
    pub fn save(&mut self, name: &str, items: &[String]) -> Option<&Category> {
        let name = name.trim();
        if name.is_empty() || items.is_empty() {
            return None;
        }
        self.custom.push(Category::custom(name, items));
        self.custom.last()
    }

    /// Delete every user category with this id. Returns true if any was removed.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.custom.len();
        self.custom.retain(|c| c.id != id);
        self.custom.len() < before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items() -> Vec<String> {
        vec!["A".to_string(), "B".to_string()]
    }

    #[test]
    fn id_from_name() {
        assert_eq!(category_id("Weekend Plans"), "weekend-plans");
        assert_eq!(category_id("Lunch \t  Spots"), "lunch-spots");
        assert_eq!(category_id("ABC"), "abc");
    }

    #[test]
    fn builtins_are_fixed() {
        let catalog = CategoryCatalog::new();
        assert_eq!(catalog.builtins().len(), 7);
        assert_eq!(catalog.builtins()[0].id, "yes-no");
        assert!(catalog.custom().is_empty());
        assert!(catalog.is_builtin("food"));
    }

    #[test]
    fn save_creates_custom_category() {
        let mut catalog = CategoryCatalog::new();
        let saved = catalog.save("Team Lunch", &items()).unwrap();
        assert_eq!(saved.id, "team-lunch");
        assert_eq!(saved.icon, CUSTOM_CATEGORY_ICON);
        assert_eq!(saved.items, items());
        assert_eq!(catalog.custom().len(), 1);
    }

    #[test]
    fn save_rejects_blank_name_or_no_items() {
        let mut catalog = CategoryCatalog::new();
        assert!(catalog.save("", &items()).is_none());
        assert!(catalog.save("   ", &items()).is_none());
        assert!(catalog.save("Empty", &[]).is_none());
        assert!(catalog.custom().is_empty());
    }

    #[test]
    fn delete_only_touches_custom() {
        let mut catalog = CategoryCatalog::new();
        catalog.save("Mine", &items());
        catalog.save("Other", &items());
        assert!(!catalog.delete("food"));
        assert!(!catalog.delete("missing"));
        assert!(catalog.delete("mine"));
        assert_eq!(catalog.custom().len(), 1);
        assert_eq!(catalog.custom()[0].id, "other");
        assert!(catalog.find("food").is_some());
    }

    #[test]
    fn delete_removes_every_colliding_id() {
        let mut catalog = CategoryCatalog::new();
        catalog.save("Road Trip", &items());
        catalog.save("Other", &items());
        catalog.save("road   trip", &["C".to_string()]);
        assert_eq!(
            catalog.custom().iter().filter(|c| c.id == "road-trip").count(),
            2
        );

        assert!(catalog.delete("road-trip"));
        assert_eq!(catalog.custom().len(), 1);
        assert_eq!(catalog.custom()[0].id, "other");
        assert!(!catalog.delete("road-trip"));
    }

    #[test]
    fn find_prefers_builtin() {
        let mut catalog = CategoryCatalog::new();
        catalog.save("Food", &items());
        assert_eq!(catalog.find("food").unwrap().icon, "🍽️");
    }

    #[test]
    fn serializes_as_plain_list() {
        let mut catalog = CategoryCatalog::new();
        catalog.save("Mine", &items());
        let json = serde_json::to_string(&catalog).unwrap();
        assert!(json.starts_with('['));
        assert!(json.contains("\"title\":\"Mine\""));
        let back: CategoryCatalog = serde_json::from_str(&json).unwrap();
        assert_eq!(back, catalog);
    }
}
