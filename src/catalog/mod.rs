//! The fixed recipe catalog.
//!
//! The catalog is built once at startup and never mutated. The built-in
//! catalog carries the ten sample dishes of the planner; tests can inject
//! their own with [`Catalog::new`].

use crate::model::Recipe;
use serde::{Deserialize, Serialize};

/// An ordered, read-only sequence of recipes.
///
/// Duplicate recipe names are accepted as-is; nothing deduplicates or
/// validates the rows beyond construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    recipes: Vec<Recipe>,
}

impl Catalog {
    /// Create a catalog from an explicit recipe list.
    pub fn new(recipes: Vec<Recipe>) -> Self {
        Catalog { recipes }
    }

    /// The ten built-in sample recipes, in their fixed order.
    pub fn builtin() -> Self {
        Catalog::new(vec![
            Recipe::new(
                "Tomato Pasta",
                &[("tomato", 2), ("pasta", 200), ("olive oil", 10)],
                30,
                "calories:500, protein:10g",
            ),
            Recipe::new(
                "Salad",
                &[("lettuce", 50), ("tomato", 1), ("cucumber", 1), ("olive oil", 5)],
                10,
                "calories:150, protein:3g",
            ),
            Recipe::new(
                "Fruit Smoothie",
                &[("milk", 200), ("banana", 1), ("honey", 10)],
                5,
                "calories:200, protein:5g",
            ),
            Recipe::new(
                "Chicken Soup",
                &[("chicken", 100), ("carrot", 50), ("celery", 50)],
                60,
                "calories:250, protein:20g",
            ),
            Recipe::new(
                "Pancakes",
                &[("flour", 100), ("milk", 100), ("egg", 1)],
                20,
                "calories:300, protein:6g",
            ),
            Recipe::new(
                "Veg Stir-fry",
                &[("broccoli", 100), ("bell pepper", 50), ("soy sauce", 5)],
                15,
                "calories:180, protein:4g",
            ),
            Recipe::new(
                "Rice & Beans",
                &[("rice", 150), ("beans", 100), ("onion", 1)],
                40,
                "calories:400, protein:12g",
            ),
            Recipe::new(
                "Grilled Cheese",
                &[("bread", 2), ("cheese", 50), ("butter", 5)],
                10,
                "calories:300, protein:7g",
            ),
            Recipe::new(
                "Omelette",
                &[("egg", 2), ("cheese", 20), ("spinach", 30)],
                10,
                "calories:220, protein:12g",
            ),
            Recipe::new(
                "Yogurt Parfait",
                &[("yogurt", 100), ("granola", 50), ("berries", 50)],
                5,
                "calories:150, protein:6g",
            ),
        ])
    }

    /// Iterate over the recipes in catalog order.
    pub fn iter(&self) -> std::slice::Iter<'_, Recipe> {
        self.recipes.iter()
    }

    /// The recipes as a slice, in catalog order.
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Catalog::builtin()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Recipe;
    type IntoIter = std::slice::Iter<'a, Recipe>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_has_ten_recipes() {
        assert_eq!(Catalog::builtin().len(), 10);
    }

    #[test]
    fn test_builtin_order_is_fixed() {
        let catalog = Catalog::builtin();
        let names: Vec<&str> = catalog.iter().map(|r| r.name.as_str()).collect();

        assert_eq!(
            names,
            vec![
                "Tomato Pasta",
                "Salad",
                "Fruit Smoothie",
                "Chicken Soup",
                "Pancakes",
                "Veg Stir-fry",
                "Rice & Beans",
                "Grilled Cheese",
                "Omelette",
                "Yogurt Parfait",
            ]
        );
    }

    #[test]
    fn test_builtin_ingredient_names_are_lowercase() {
        for recipe in Catalog::builtin().iter() {
            for req in &recipe.ingredients {
                assert_eq!(req.name, req.name.to_lowercase());
            }
        }
    }

    #[test]
    fn test_builtin_quantities_and_times_are_positive() {
        for recipe in Catalog::builtin().iter() {
            assert!(recipe.time > 0);
            for req in &recipe.ingredients {
                assert!(req.quantity > 0, "{} in {}", req.name, recipe.name);
            }
        }
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::new(vec![]);
        assert!(catalog.is_empty());
        assert_eq!(catalog.iter().count(), 0);
    }
}
