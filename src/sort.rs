use std::cmp::Ordering;

use crate::model::Recipe;

/// The field a [`RecipeBook`](crate::RecipeBook) sort orders by.
///
/// One enum replaces the per-field comparator objects the desktop app grew:
/// every key goes through [`compare`] with an explicit [`SortDirection`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Alphabetical by name, ignoring case.
    Name,
    /// Number of preparation steps.
    Steps,
    /// Protein content in grams.
    Protein,
    Calories,
    /// Preparation time in minutes.
    Time,
    /// Number of ingredients.
    Ingredients,
    /// The order recipes were added to the book.
    DateAdded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub(crate) fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

/// Compares two recipes on `key`, ascending. `SortKey::DateAdded` has no
/// per-recipe field to compare and is resolved by the book against its
/// insertion-order snapshot; here it compares equal.
pub(crate) fn compare(key: SortKey, a: &Recipe, b: &Recipe) -> Ordering {
    match key {
        SortKey::Name => a.key().cmp(&b.key()),
        SortKey::Steps => a.steps.len().cmp(&b.steps.len()),
        SortKey::Protein => a.protein.cmp(&b.protein),
        SortKey::Calories => a.calories.cmp(&b.calories),
        SortKey::Time => a.time_minutes.cmp(&b.time_minutes),
        SortKey::Ingredients => a.ingredients.len().cmp(&b.ingredients.len()),
        SortKey::DateAdded => Ordering::Equal,
    }
}
