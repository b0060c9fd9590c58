use std::fmt;

use serde::{Deserialize, Serialize};

/// Recipe categories offered by the application. The list is advisory:
/// `Recipe::category` accepts any string.
pub const CATEGORIES: [&str; 4] = ["N/A", "Breakfast", "Lunch", "Dinner"];

/// A single ingredient line within a recipe.
///
/// `quantity` is free-form text rather than a number so entries like "1/2"
/// or "a pinch" survive as the user typed them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    pub quantity: String,
    pub unit: String,
}

impl Ingredient {
    pub fn new(
        name: impl Into<String>,
        quantity: impl Into<String>,
        unit: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            quantity: quantity.into(),
            unit: unit.into(),
        }
    }
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} {})", self.name, self.quantity, self.unit)
    }
}

/// A named cooking procedure with its ingredients, ordered steps, and
/// serving/nutrition metadata.
///
/// The name is the recipe's identity inside a [`RecipeBook`]: two recipes
/// whose names differ only by case are considered the same recipe.
///
/// [`RecipeBook`]: crate::RecipeBook
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub name: String,
    pub ingredients: Vec<Ingredient>,
    /// Preparation steps in procedure order.
    pub steps: Vec<String>,
    /// Total preparation time in minutes.
    pub time_minutes: u32,
    /// Number of people served.
    pub serving_size: u32,
    pub category: String,
    pub calories: u32,
    /// Protein content in grams.
    pub protein: u32,
}

impl Recipe {
    /// The lowercased name, used as the case-insensitive lookup key.
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }
}

impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}:", self.name)?;
        let ingredients: Vec<String> = self.ingredients.iter().map(|i| i.to_string()).collect();
        writeln!(f, "Ingredients: {}", ingredients.join(", "))?;
        writeln!(f, "Steps: {}", self.steps.join("; "))?;
        writeln!(f, "Time Taken: {} minutes", self.time_minutes)?;
        writeln!(f, "Serving Size: {} people", self.serving_size)?;
        writeln!(f, "Recipe Category: {}", self.category)?;
        writeln!(f, "Calories: {} calories", self.calories)?;
        write!(f, "Protein: {} grams", self.protein)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ingredient_display() {
        let ingredient = Ingredient::new("Flour", "1/2", "cup");
        assert_eq!(ingredient.to_string(), "Flour (1/2 cup)");
    }

    #[test]
    fn test_recipe_key_is_lowercased() {
        let recipe = Recipe {
            name: "Apple Pie".to_string(),
            ingredients: vec![],
            steps: vec![],
            time_minutes: 0,
            serving_size: 0,
            category: "N/A".to_string(),
            calories: 0,
            protein: 0,
        };
        assert_eq!(recipe.key(), "apple pie");
    }
}
