use crate::model::Recipe;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A catalog recipe that satisfied every constraint of a match run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeMatch {
    pub name: String,
    pub time: i32,
    pub nutrition: String,
}

impl RecipeMatch {
    pub(crate) fn new(recipe: &Recipe) -> Self {
        RecipeMatch {
            name: recipe.name.clone(),
            time: recipe.time,
            nutrition: recipe.nutrition.clone(),
        }
    }
}

impl fmt::Display for RecipeMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (Time: {} min, Nutrition: {})",
            self.name, self.time, self.nutrition
        )
    }
}
