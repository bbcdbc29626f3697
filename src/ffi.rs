//! UniFFI bindings for host applications (desktop and mobile shells).
//!
//! This module provides FFI-safe types and functions for use with UniFFI.
//! The mutable planner state lives behind a mutex because FFI methods take
//! `&self`.

use crate::catalog::Catalog;
use crate::matcher::MatchError;
use crate::model::Recipe;
use crate::pantry::PantryError;
use crate::planner::{format_report, KitchenPlanner};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// FFI-safe error type that wraps all possible errors.
#[derive(Debug, uniffi::Error, thiserror::Error)]
pub enum PlannerError {
    #[error("Invalid amount: {message}")]
    InvalidAmount { message: String },

    #[error("Invalid time budget: {message}")]
    InvalidTimeBudget { message: String },
}

impl From<PantryError> for PlannerError {
    fn from(e: PantryError) -> Self {
        match e {
            PantryError::InvalidAmount(raw) => PlannerError::InvalidAmount { message: raw },
        }
    }
}

impl From<MatchError> for PlannerError {
    fn from(e: MatchError) -> Self {
        match e {
            MatchError::InvalidTimeBudget(raw) => PlannerError::InvalidTimeBudget { message: raw },
        }
    }
}

/// An ingredient requirement of a catalog recipe.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiIngredient {
    pub name: String,
    pub quantity: i32,
}

/// FFI-safe representation of a catalog recipe.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiRecipe {
    /// Display name of the recipe
    pub name: String,
    /// Ordered ingredient requirements
    pub ingredients: Vec<FfiIngredient>,
    /// Preparation time in minutes
    pub time: i32,
    /// Free-form nutrition descriptor
    pub nutrition: String,
    /// The full recipe as a JSON string for complex access
    pub raw_json: String,
}

impl From<&Recipe> for FfiRecipe {
    fn from(r: &Recipe) -> Self {
        // Convert the whole record to JSON for hosts that want structure
        let raw_json = serde_json::to_string(r).unwrap_or_default();

        FfiRecipe {
            name: r.name.clone(),
            ingredients: r
                .ingredients
                .iter()
                .map(|req| FfiIngredient {
                    name: req.name.clone(),
                    quantity: req.quantity,
                })
                .collect(),
            time: r.time,
            nutrition: r.nutrition.clone(),
            raw_json,
        }
    }
}

/// FFI-safe planner object holding the pantry and catalog.
///
/// This is the main type a host application constructs and drives.
#[derive(uniffi::Object)]
pub struct FfiKitchenPlanner {
    inner: Mutex<KitchenPlanner>,
}

impl FfiKitchenPlanner {
    fn lock(&self) -> MutexGuard<'_, KitchenPlanner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[uniffi::export]
impl FfiKitchenPlanner {
    /// Records an ingredient the user owns.
    ///
    /// The amount arrives as the raw form string; a non-integer amount
    /// returns an error and leaves the pantry untouched.
    pub fn add_ingredient(&self, name: String, amount: String) -> Result<(), PlannerError> {
        let mut planner = self.lock();
        planner.add_ingredient(&name, &amount).map_err(|e| e.into())
    }

    /// Suggests recipes the current pantry can cover.
    ///
    /// Returns formatted lines in catalog order. A non-numeric time budget
    /// returns an error and no lines.
    pub fn suggest_recipes(
        &self,
        time_budget: String,
        nutrition_filter: String,
    ) -> Result<Vec<String>, PlannerError> {
        let planner = self.lock();
        planner
            .suggest_recipes(&time_budget, &nutrition_filter)
            .map_err(|e| e.into())
    }

    /// Suggests recipes and renders them as a single text block.
    ///
    /// Matches become newline-joined lines; an empty result becomes the
    /// stock "No matching recipes found." message.
    pub fn suggestion_report(
        &self,
        time_budget: String,
        nutrition_filter: String,
    ) -> Result<String, PlannerError> {
        let lines = self.suggest_recipes(time_budget, nutrition_filter)?;
        Ok(format_report(&lines))
    }

    /// Returns the owned amount for an ingredient, if recorded.
    pub fn pantry_amount(&self, name: String) -> Option<i32> {
        let planner = self.lock();
        planner.pantry().lookup(&name.to_lowercase())
    }

    /// Returns the number of distinct ingredients recorded.
    pub fn pantry_size(&self) -> u32 {
        let planner = self.lock();
        planner.pantry().len() as u32
    }

    /// Returns the planner's catalog in order.
    pub fn catalog(&self) -> Vec<FfiRecipe> {
        let planner = self.lock();
        planner.catalog().iter().map(FfiRecipe::from).collect()
    }
}

// ============================================================================
// Exported FFI Functions
// ============================================================================

/// Creates a planner over the built-in ten-recipe catalog.
#[uniffi::export]
pub fn new_planner() -> Arc<FfiKitchenPlanner> {
    Arc::new(FfiKitchenPlanner {
        inner: Mutex::new(KitchenPlanner::new()),
    })
}

/// Returns the built-in catalog without constructing a planner.
#[uniffi::export]
pub fn builtin_catalog() -> Vec<FfiRecipe> {
    Catalog::builtin().iter().map(FfiRecipe::from).collect()
}

/// Returns the library version.
#[uniffi::export]
pub fn library_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
