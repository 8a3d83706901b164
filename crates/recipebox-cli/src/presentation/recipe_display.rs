//! Recipe rendering for terminal output.

use recipebox_core::Recipe;

use super::tables::{format_optional, print_separator, truncate_string};

/// Print recipes as a table, one row each.
pub fn print_recipe_table(recipes: &[Recipe]) {
    println!(
        "{:<5} {:<30} {:<6} {:<12} Image",
        "ID", "Name", "Prep", "Ingredients"
    );
    print_separator(80);

    for recipe in recipes {
        println!(
            "{:<5} {:<30} {:<6} {:<12} {}",
            recipe.id,
            truncate_string(&recipe.name, 29),
            format!("{}m", recipe.prep_time),
            recipe.ingredients.len(),
            truncate_string(&format_optional(recipe.image.as_ref(), "--"), 24),
        );
    }
}

/// Print one recipe with all of its fields.
pub fn display_recipe(recipe: &Recipe) {
    println!("#{} {}", recipe.id, recipe.name);
    print_separator(40);
    println!("Prep time:  {} min", recipe.prep_time);
    println!("Image:      {}", format_optional(recipe.image.as_ref(), "--"));

    println!();
    println!("Ingredients:");
    if recipe.ingredients.is_empty() {
        println!("  (none)");
    }
    for ingredient in &recipe.ingredients {
        println!("  - {ingredient}");
    }

    println!();
    println!("Instructions:");
    if recipe.instructions.trim().is_empty() {
        println!("  (none)");
    } else {
        for line in recipe.instructions.lines() {
            println!("  {line}");
        }
    }
}
