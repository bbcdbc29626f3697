use crate::catalog::Catalog;
use crate::model::Recipe;
use crate::pantry::Pantry;
use thiserror::Error;

mod model;

pub use model::RecipeMatch;

/// Errors that can occur when matching recipes.
#[derive(Error, Debug)]
pub enum MatchError {
    #[error("Invalid time budget, expected an integer: {0}")]
    InvalidTimeBudget(String),
}

/// Scan the catalog for recipes the pantry can cover within the time budget.
///
/// Recipes are checked in catalog order against three constraints:
/// ingredient sufficiency, `time <= time_budget`, and a case-insensitive
/// substring match of `nutrition_filter` against the nutrition descriptor.
/// An empty filter matches every descriptor.
///
/// Every call is a fresh full scan; results come back in catalog order
/// with no sorting and no deduplication.
pub fn find_matches(
    catalog: &Catalog,
    pantry: &Pantry,
    time_budget: i32,
    nutrition_filter: &str,
) -> Vec<RecipeMatch> {
    let filter = nutrition_filter.to_lowercase();
    let mut matches = Vec::new();

    for recipe in catalog {
        if !has_ingredients(pantry, recipe) {
            continue;
        }
        if recipe.time > time_budget {
            continue;
        }
        if !recipe.nutrition.to_lowercase().contains(&filter) {
            continue;
        }
        matches.push(RecipeMatch::new(recipe));
    }

    matches
}

/// Like [`find_matches`], but taking the time budget as raw form input.
///
/// A budget that does not parse as an integer aborts the whole operation
/// with [`MatchError::InvalidTimeBudget`]; the scan is not attempted.
pub fn find_matches_str(
    catalog: &Catalog,
    pantry: &Pantry,
    time_budget: &str,
    nutrition_filter: &str,
) -> Result<Vec<RecipeMatch>, MatchError> {
    let budget: i32 = time_budget
        .parse()
        .map_err(|_| MatchError::InvalidTimeBudget(time_budget.to_string()))?;
    Ok(find_matches(catalog, pantry, budget, nutrition_filter))
}

/// Check the recipe's requirements in list order, rejecting on the first
/// absent or insufficient ingredient. A recipe with no ingredients passes.
fn has_ingredients(pantry: &Pantry, recipe: &Recipe) -> bool {
    recipe
        .ingredients
        .iter()
        .all(|req| pantry.lookup(&req.name).is_some_and(|owned| owned >= req.quantity))
}
