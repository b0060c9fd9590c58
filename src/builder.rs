use crate::error::CookStackError;
use crate::model::{Ingredient, Recipe};

/// Builder for assembling a [`Recipe`] from user-entered form data.
///
/// Numeric fields accept either integers or the raw text the user typed;
/// text that does not parse as a non-negative integer fails `build()` with
/// [`CookStackError::InvalidInput`] naming the field. A recipe must have a
/// name, at least one ingredient, and at least one step.
///
/// # Example
/// ```
/// use cookstack::RecipeBuilder;
///
/// let recipe = RecipeBuilder::new()
///     .name("Toast")
///     .ingredient("Bread", "2", "slices")
///     .step("Toast the bread until golden.")
///     .time_minutes(5)
///     .serving_size(1)
///     .category("Breakfast")
///     .calories(120)
///     .protein(3)
///     .build()
///     .unwrap();
/// assert_eq!(recipe.name, "Toast");
/// ```
#[derive(Debug, Default)]
pub struct RecipeBuilder {
    name: Option<String>,
    ingredients: Vec<Ingredient>,
    steps: Vec<String>,
    time_minutes: NumericField,
    serving_size: NumericField,
    category: Option<String>,
    calories: NumericField,
    protein: NumericField,
}

/// A numeric form field: unset, set programmatically, or raw user text.
#[derive(Debug, Default)]
enum NumericField {
    #[default]
    Unset,
    Value(u32),
    Text(String),
}

impl NumericField {
    fn resolve(&self, field: &str) -> Result<u32, CookStackError> {
        match self {
            NumericField::Unset => Ok(0),
            NumericField::Value(value) => Ok(*value),
            NumericField::Text(text) => text.trim().parse().map_err(|_| {
                CookStackError::InvalidInput(format!(
                    "{field} must be a whole number, got \"{}\"",
                    text.trim()
                ))
            }),
        }
    }
}

impl RecipeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the recipe name. Required; must be non-empty after trimming.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Add one ingredient line.
    pub fn ingredient(
        mut self,
        name: impl Into<String>,
        quantity: impl Into<String>,
        unit: impl Into<String>,
    ) -> Self {
        self.ingredients.push(Ingredient::new(name, quantity, unit));
        self
    }

    /// Add several ingredients at once.
    pub fn ingredients(mut self, ingredients: impl IntoIterator<Item = Ingredient>) -> Self {
        self.ingredients.extend(ingredients);
        self
    }

    /// Add one preparation step.
    pub fn step(mut self, step: impl Into<String>) -> Self {
        self.steps.push(step.into());
        self
    }

    /// Add several steps at once, in procedure order.
    pub fn steps(mut self, steps: impl IntoIterator<Item = String>) -> Self {
        self.steps.extend(steps);
        self
    }

    pub fn time_minutes(mut self, minutes: u32) -> Self {
        self.time_minutes = NumericField::Value(minutes);
        self
    }

    /// Set the preparation time from user-entered text.
    pub fn time_minutes_text(mut self, text: impl Into<String>) -> Self {
        self.time_minutes = NumericField::Text(text.into());
        self
    }

    pub fn serving_size(mut self, servings: u32) -> Self {
        self.serving_size = NumericField::Value(servings);
        self
    }

    /// Set the serving size from user-entered text.
    pub fn serving_size_text(mut self, text: impl Into<String>) -> Self {
        self.serving_size = NumericField::Text(text.into());
        self
    }

    /// Set the category. Defaults to "N/A" when not provided.
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn calories(mut self, calories: u32) -> Self {
        self.calories = NumericField::Value(calories);
        self
    }

    /// Set the calorie count from user-entered text.
    pub fn calories_text(mut self, text: impl Into<String>) -> Self {
        self.calories = NumericField::Text(text.into());
        self
    }

    pub fn protein(mut self, grams: u32) -> Self {
        self.protein = NumericField::Value(grams);
        self
    }

    /// Set the protein content from user-entered text.
    pub fn protein_text(mut self, text: impl Into<String>) -> Self {
        self.protein = NumericField::Text(text.into());
        self
    }

    /// Validate the collected fields and produce the recipe.
    ///
    /// # Errors
    /// Returns [`CookStackError::InvalidInput`] if:
    /// - the name is missing or blank
    /// - no ingredients were added, or an ingredient name is blank
    /// - no steps were added, or a step is blank
    /// - a numeric field was given text that is not a non-negative integer
    pub fn build(self) -> Result<Recipe, CookStackError> {
        let name = self
            .name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .ok_or_else(|| CookStackError::InvalidInput("recipe name is required".to_string()))?
            .to_string();

        if self.ingredients.is_empty() {
            return Err(CookStackError::InvalidInput(
                "a recipe needs at least one ingredient".to_string(),
            ));
        }
        if self.ingredients.iter().any(|i| i.name.trim().is_empty()) {
            return Err(CookStackError::InvalidInput(
                "ingredient names cannot be empty".to_string(),
            ));
        }
        if self.steps.is_empty() {
            return Err(CookStackError::InvalidInput(
                "a recipe needs at least one step".to_string(),
            ));
        }
        if self.steps.iter().any(|s| s.trim().is_empty()) {
            return Err(CookStackError::InvalidInput(
                "steps cannot be empty".to_string(),
            ));
        }

        Ok(Recipe {
            name,
            ingredients: self.ingredients,
            steps: self.steps,
            time_minutes: self.time_minutes.resolve("time taken")?,
            serving_size: self.serving_size.resolve("serving size")?,
            category: self.category.unwrap_or_else(|| "N/A".to_string()),
            calories: self.calories.resolve("calories")?,
            protein: self.protein.resolve("protein")?,
        })
    }
}
