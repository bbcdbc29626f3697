pub mod catalog;
pub mod ffi;
pub mod matcher;
pub mod model;
pub mod pantry;
pub mod planner;

pub use catalog::Catalog;
pub use matcher::{find_matches, find_matches_str, MatchError, RecipeMatch};
pub use model::{IngredientRequirement, Recipe};
pub use pantry::{Pantry, PantryError};
pub use planner::{format_report, KitchenPlanner};

uniffi::setup_scaffolding!();
