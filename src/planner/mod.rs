//! The planner context: a catalog plus a pantry, driven by raw form input.
//!
//! This is the object a host application holds on to. It owns the state the
//! original planner kept in form-bound globals, so the matcher can be
//! exercised without any UI harness.

use crate::catalog::Catalog;
use crate::matcher::{find_matches_str, MatchError};
use crate::pantry::{Pantry, PantryError};

/// A pantry paired with a recipe catalog.
#[derive(Debug, Clone, Default)]
pub struct KitchenPlanner {
    catalog: Catalog,
    pantry: Pantry,
}

impl KitchenPlanner {
    /// Create a planner over the built-in ten-recipe catalog.
    pub fn new() -> Self {
        KitchenPlanner::default()
    }

    /// Create a planner over an explicit catalog.
    pub fn with_catalog(catalog: Catalog) -> Self {
        KitchenPlanner {
            catalog,
            pantry: Pantry::new(),
        }
    }

    /// Record an ingredient from raw form input.
    ///
    /// The amount must parse as an integer; on failure the pantry is left
    /// untouched.
    pub fn add_ingredient(&mut self, name: &str, amount: &str) -> Result<(), PantryError> {
        self.pantry.add_ingredient(name, amount)
    }

    /// Suggest recipes the current pantry can cover, as formatted lines.
    ///
    /// Each line has the form
    /// `"<name> (Time: <time> min, Nutrition: <nutrition>)"`, in catalog
    /// order. A non-numeric time budget aborts the whole operation.
    pub fn suggest_recipes(
        &self,
        time_budget: &str,
        nutrition_filter: &str,
    ) -> Result<Vec<String>, MatchError> {
        let matches = find_matches_str(&self.catalog, &self.pantry, time_budget, nutrition_filter)?;
        Ok(matches.iter().map(|m| m.to_string()).collect())
    }

    pub fn pantry(&self) -> &Pantry {
        &self.pantry
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}

/// Join suggestion lines into the text block the host renders.
///
/// An empty result becomes the planner's stock "no matches" message.
pub fn format_report(lines: &[String]) -> String {
    if lines.is_empty() {
        "No matching recipes found.".to_string()
    } else {
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Recipe;
    use indoc::indoc;

    #[test]
    fn test_add_then_suggest() {
        let mut planner = KitchenPlanner::new();
        planner.add_ingredient("Tomato", "2").unwrap();
        planner.add_ingredient("Pasta", "200").unwrap();
        planner.add_ingredient("Olive Oil", "10").unwrap();

        let lines = planner.suggest_recipes("30", "").unwrap();
        assert_eq!(
            lines,
            vec!["Tomato Pasta (Time: 30 min, Nutrition: calories:500, protein:10g)"]
        );
    }

    #[test]
    fn test_invalid_amount_is_reported() {
        let mut planner = KitchenPlanner::new();
        let err = planner.add_ingredient("Tomato", "abc").unwrap_err();

        assert!(matches!(err, PantryError::InvalidAmount(_)));
        assert!(planner.pantry().is_empty());
    }

    #[test]
    fn test_invalid_time_budget_produces_no_result() {
        let planner = KitchenPlanner::new();
        let err = planner.suggest_recipes("ten", "").unwrap_err();

        assert!(matches!(err, MatchError::InvalidTimeBudget(_)));
    }

    #[test]
    fn test_with_catalog_injects_test_data() {
        let catalog = Catalog::new(vec![
            Recipe::new("Toast", &[("bread", 1)], 5, "calories:90, protein:3g"),
            Recipe::new("Tea", &[], 3, "calories:2"),
        ]);
        let mut planner = KitchenPlanner::with_catalog(catalog);
        planner.add_ingredient("bread", "4").unwrap();

        let lines = planner.suggest_recipes("5", "").unwrap();
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn test_format_report_joins_lines() {
        let mut planner = KitchenPlanner::new();
        planner.add_ingredient("egg", "2").unwrap();
        planner.add_ingredient("cheese", "20").unwrap();
        planner.add_ingredient("spinach", "30").unwrap();
        planner.add_ingredient("yogurt", "100").unwrap();
        planner.add_ingredient("granola", "50").unwrap();
        planner.add_ingredient("berries", "50").unwrap();

        let lines = planner.suggest_recipes("10", "").unwrap();
        assert_eq!(
            format_report(&lines),
            indoc! {"
                Omelette (Time: 10 min, Nutrition: calories:220, protein:12g)
                Yogurt Parfait (Time: 5 min, Nutrition: calories:150, protein:6g)"}
        );
    }

    #[test]
    fn test_format_report_empty_fallback() {
        assert_eq!(format_report(&[]), "No matching recipes found.");
    }
}
