use serde::{Deserialize, Serialize};

/// A single ingredient requirement of a recipe.
///
/// The quantity is a plain integer; units (grams, millilitres, count)
/// are implicit per ingredient and never converted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientRequirement {
    /// Ingredient name, stored lower-cased so pantry lookups line up
    pub name: String,
    /// Required amount in the ingredient's implicit unit
    pub quantity: i32,
}

impl IngredientRequirement {
    /// Create a requirement, normalizing the name to lower case.
    ///
    /// Pantry keys are lower-cased on insert; requirement names must use
    /// the same normalization or lookups silently fail to match.
    pub fn new(name: &str, quantity: i32) -> Self {
        IngredientRequirement {
            name: name.to_lowercase(),
            quantity,
        }
    }
}

/// An immutable catalog recipe.
///
/// The ingredient list is assembled once at construction as structured
/// records; nothing is re-parsed at match time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    /// Display name of the recipe
    pub name: String,
    /// Ordered ingredient requirements, checked in this order
    pub ingredients: Vec<IngredientRequirement>,
    /// Preparation time in minutes
    pub time: i32,
    /// Free-form nutrition descriptor, e.g. "calories:500, protein:10g"
    pub nutrition: String,
}

impl Recipe {
    /// Create a recipe from its name, (ingredient, quantity) pairs,
    /// preparation time, and nutrition descriptor.
    pub fn new(name: &str, ingredients: &[(&str, i32)], time: i32, nutrition: &str) -> Self {
        Recipe {
            name: name.to_string(),
            ingredients: ingredients
                .iter()
                .map(|(ingredient, quantity)| IngredientRequirement::new(ingredient, *quantity))
                .collect(),
            time,
            nutrition: nutrition.to_string(),
        }
    }
}
