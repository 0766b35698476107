//! Dish domain model.
//!
//! # Responsibility
//! - Define the catalogue record created by the entry form and rendered by
//!   list/detail projections.
//! - Pin the serialized field tags used by the named-slot blob.
//!
//! # Invariants
//! - `id` is generated once at creation and never reassigned.
//! - `category` is one of the three fixed meal courses, serialized with its
//!   display spelling (`Antipasto`/`Primo`/`Secondo`).
//! - `photo` bytes are stored inline and serialized base64, standard alphabet.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a catalogued dish.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type DishId = Uuid;

/// Closed meal-course classification.
///
/// The variant order is the fixed enumeration order used by list grouping;
/// new categories must not be inserted in the middle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    /// Starter course.
    Antipasto,
    /// First course.
    Primo,
    /// Main course.
    Secondo,
}

impl Category {
    /// All categories in fixed enumeration order.
    pub const ALL: [Category; 3] = [Category::Antipasto, Category::Primo, Category::Secondo];

    /// Returns the persisted/display tag for this category.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Antipasto => "Antipasto",
            Category::Primo => "Primo",
            Category::Secondo => "Secondo",
        }
    }

    /// Parses a persisted category tag.
    pub fn parse(value: &str) -> Option<Category> {
        match value {
            "Antipasto" => Some(Category::Antipasto),
            "Primo" => Some(Category::Primo),
            "Secondo" => Some(Category::Secondo),
            _ => None,
        }
    }
}

/// A single catalogued dish record.
///
/// Field order matches the persisted tag layout of the catalogue blob.
/// Free-form fields (`description`, `recipe`, `duration`, `difficulty`)
/// carry no validation; `name` non-emptiness is enforced only by the entry
/// form at submit time, not by this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dish {
    /// Stable record identity, serialized as a string UUID.
    pub id: DishId,
    /// Display name. Non-empty for records produced by the form.
    pub name: String,
    /// Inline image payload (typically JPEG bytes), base64 in the blob.
    #[serde(with = "photo_base64")]
    pub photo: Vec<u8>,
    /// Free-form description text.
    pub description: String,
    /// Free-form recipe text.
    pub recipe: String,
    /// Meal-course classification used for list grouping.
    pub category: Category,
    /// Free-form preparation duration text.
    pub duration: String,
    /// Free-form difficulty text.
    pub difficulty: String,
}

impl Dish {
    /// Creates a dish with a freshly generated stable ID.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        photo: Vec<u8>,
        description: impl Into<String>,
        recipe: impl Into<String>,
        category: Category,
        duration: impl Into<String>,
        difficulty: impl Into<String>,
    ) -> Self {
        Self::with_id(
            Uuid::new_v4(),
            name,
            photo,
            description,
            recipe,
            category,
            duration,
            difficulty,
        )
    }

    /// Creates a dish with a caller-provided stable ID.
    ///
    /// Used by load/test paths where identity already exists.
    #[allow(clippy::too_many_arguments)]
    pub fn with_id(
        id: DishId,
        name: impl Into<String>,
        photo: Vec<u8>,
        description: impl Into<String>,
        recipe: impl Into<String>,
        category: Category,
        duration: impl Into<String>,
        difficulty: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            photo,
            description: description.into(),
            recipe: recipe.into(),
            category,
            duration: duration.into(),
            difficulty: difficulty.into(),
        }
    }
}

/// Serde adapter for inline photo bytes.
///
/// The blob format requires a binary-safe text encoding; standard-alphabet
/// base64 keeps the slot payload plain JSON.
mod photo_base64 {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&STANDARD.encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let text = String::deserialize(deserializer)?;
        STANDARD
            .decode(text.as_bytes())
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::{Category, Dish};

    #[test]
    fn category_tags_are_stable() {
        assert_eq!(Category::Antipasto.as_str(), "Antipasto");
        assert_eq!(Category::parse("Secondo"), Some(Category::Secondo));
        assert_eq!(Category::parse("Dolce"), None);
    }

    #[test]
    fn all_categories_keep_enumeration_order() {
        assert_eq!(
            Category::ALL,
            [Category::Antipasto, Category::Primo, Category::Secondo]
        );
    }

    #[test]
    fn new_generates_distinct_ids() {
        let a = Dish::new("a", vec![1], "", "", Category::Primo, "", "");
        let b = Dish::new("b", vec![2], "", "", Category::Primo, "", "");
        assert_ne!(a.id, b.id);
    }
}
