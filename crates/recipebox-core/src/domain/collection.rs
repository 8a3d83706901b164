//! Helpers over a whole recipe collection.
//!
//! The collection is a plain `Vec<Recipe>` in display order. These functions
//! hold the invariants that span more than one recipe.

use super::Recipe;

/// The next free ID: one greater than the current maximum, or `1` for an
/// empty collection.
///
/// Returns `None` once the ID space is exhausted.
pub fn next_id(recipes: &[Recipe]) -> Option<i64> {
    match recipes.iter().map(|r| r.id).max() {
        Some(max) => max.checked_add(1),
        None => Some(1),
    }
}

/// The first ID that appears more than once, if any.
pub fn find_duplicate_id(recipes: &[Recipe]) -> Option<i64> {
    let mut seen = std::collections::HashSet::with_capacity(recipes.len());
    recipes.iter().map(|r| r.id).find(|id| !seen.insert(*id))
}

/// Position of the recipe with `id`.
pub fn position_of(recipes: &[Recipe], id: i64) -> Option<usize> {
    recipes.iter().position(|r| r.id == id)
}

/// Recipes whose name contains `term`, ignoring case, in collection order.
///
/// An empty term matches every recipe.
pub fn search_by_name<'a>(recipes: &'a [Recipe], term: &str) -> Vec<&'a Recipe> {
    let needle = term.to_lowercase();
    recipes
        .iter()
        .filter(|r| r.name.to_lowercase().contains(&needle))
        .collect()
}
