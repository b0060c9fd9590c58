use std::collections::{HashMap, HashSet};
use std::fmt;

use log::debug;

use crate::error::CookStackError;
use crate::model::Recipe;
use crate::sort::{compare, SortDirection, SortKey};

/// An ordered collection of uniquely-named recipes belonging to one user.
///
/// Recipes live in a list (the live, displayed order) and a lowercase-name
/// index for exact lookup. The book also remembers the order recipes were
/// added in, separately from the live order, so sorting and reversing the
/// display can always be undone with [`SortKey::DateAdded`].
///
/// Every mutation keeps the index consistent with the list; callers never
/// touch the backing storage directly. Failed operations leave the book
/// unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecipeBook {
    owner_name: String,
    /// Live order: what the application currently displays.
    items: Vec<Recipe>,
    /// Lowercased names in insertion order, the canonical "date added" order.
    added_order: Vec<String>,
    /// Lowercased name to live position. Derived, never persisted.
    index: HashMap<String, usize>,
}

impl RecipeBook {
    /// Creates an empty cookbook for the given owner.
    pub fn new(owner_name: impl Into<String>) -> Self {
        Self {
            owner_name: owner_name.into(),
            ..Self::default()
        }
    }

    /// Rebuilds a book from persisted parts, restoring the derived index.
    ///
    /// Rejects payloads that violate the book's invariants: duplicate
    /// case-insensitive names, or an insertion-order snapshot that does not
    /// cover exactly the stored recipes.
    pub(crate) fn from_parts(
        owner_name: String,
        items: Vec<Recipe>,
        added_order: Vec<String>,
    ) -> Result<Self, CookStackError> {
        let mut index = HashMap::with_capacity(items.len());
        for (position, recipe) in items.iter().enumerate() {
            if index.insert(recipe.key(), position).is_some() {
                return Err(CookStackError::CorruptData(format!(
                    "duplicate recipe name \"{}\"",
                    recipe.name
                )));
            }
        }
        // The snapshot must list each indexed key exactly once
        let mut seen = HashSet::with_capacity(added_order.len());
        if added_order.len() != items.len()
            || added_order
                .iter()
                .any(|key| !index.contains_key(key) || !seen.insert(key.as_str()))
        {
            return Err(CookStackError::CorruptData(
                "insertion order does not match the stored recipes".to_string(),
            ));
        }
        Ok(Self {
            owner_name,
            items,
            added_order,
            index,
        })
    }

    /// Appends a recipe to the book.
    ///
    /// # Errors
    /// Returns [`CookStackError::DuplicateName`] if a recipe with the same
    /// case-insensitive name is already present.
    pub fn add(&mut self, recipe: Recipe) -> Result<(), CookStackError> {
        let key = self.check_new_name(&recipe)?;
        debug!("adding recipe \"{}\"", recipe.name);
        self.index.insert(key.clone(), self.items.len());
        self.items.push(recipe);
        self.added_order.push(key);
        Ok(())
    }

    /// Adds a recipe at the front of the displayed order.
    ///
    /// The recipe still counts as the newest addition: the canonical
    /// insertion order records it last, only the live order shows it first.
    ///
    /// # Errors
    /// Returns [`CookStackError::DuplicateName`] if a recipe with the same
    /// case-insensitive name is already present.
    pub fn add_to_front(&mut self, recipe: Recipe) -> Result<(), CookStackError> {
        let key = self.check_new_name(&recipe)?;
        debug!("adding recipe \"{}\" to front", recipe.name);
        self.items.insert(0, recipe);
        self.added_order.push(key);
        self.rebuild_index();
        Ok(())
    }

    /// Removes and returns the recipe at `position` in the live order.
    ///
    /// # Errors
    /// Returns [`CookStackError::IndexOutOfRange`] if `position` is not a
    /// valid position.
    pub fn remove_at(&mut self, position: usize) -> Result<Recipe, CookStackError> {
        if position >= self.items.len() {
            return Err(CookStackError::IndexOutOfRange {
                index: position,
                len: self.items.len(),
            });
        }
        let removed = self.items.remove(position);
        let key = removed.key();
        self.added_order.retain(|k| k != &key);
        self.rebuild_index();
        debug!("removed recipe \"{}\"", removed.name);
        Ok(removed)
    }

    /// Replaces the recipe at `position` with an edited one, returning the
    /// previous value. The edit keeps the original's slot in the insertion
    /// order even when the name changes.
    ///
    /// # Errors
    /// Returns [`CookStackError::IndexOutOfRange`] for an invalid position,
    /// or [`CookStackError::DuplicateName`] if the new name collides with a
    /// different recipe.
    pub fn replace_at(
        &mut self,
        position: usize,
        recipe: Recipe,
    ) -> Result<Recipe, CookStackError> {
        if position >= self.items.len() {
            return Err(CookStackError::IndexOutOfRange {
                index: position,
                len: self.items.len(),
            });
        }
        let old_key = self.items[position].key();
        let new_key = recipe.key();
        if new_key != old_key && self.index.contains_key(&new_key) {
            return Err(CookStackError::DuplicateName { name: recipe.name });
        }
        if new_key != old_key {
            self.index.remove(&old_key);
            self.index.insert(new_key.clone(), position);
            if let Some(slot) = self.added_order.iter_mut().find(|k| **k == old_key) {
                *slot = new_key;
            }
        }
        Ok(std::mem::replace(&mut self.items[position], recipe))
    }

    /// Looks up a recipe by exact name, ignoring case.
    pub fn find_exact(&self, name: &str) -> Option<&Recipe> {
        self.index
            .get(&name.to_lowercase())
            .map(|&position| &self.items[position])
    }

    /// Searches recipe names for `query`, ignoring case.
    ///
    /// An empty query returns every recipe. If the query exactly matches a
    /// recipe name, only that recipe is returned; otherwise all recipes
    /// whose names contain the query are returned, in live order.
    pub fn search(&self, query: &str) -> Vec<&Recipe> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return self.items.iter().collect();
        }
        if let Some(exact) = self.find_exact(&query) {
            return vec![exact];
        }
        self.items
            .iter()
            .filter(|recipe| recipe.key().contains(&query))
            .collect()
    }

    /// Sorts the live order by `key`. All sorts are stable: recipes that
    /// compare equal keep their relative order.
    ///
    /// [`SortKey::DateAdded`] restores the order recipes were added in
    /// (ascending: oldest first), regardless of any sorting or reversing
    /// done since.
    pub fn sort_by(&mut self, key: SortKey, direction: SortDirection) {
        match key {
            SortKey::DateAdded => {
                let slots: HashMap<&str, usize> = self
                    .added_order
                    .iter()
                    .enumerate()
                    .map(|(slot, k)| (k.as_str(), slot))
                    .collect();
                let slot_of =
                    |r: &Recipe| slots.get(r.key().as_str()).copied().unwrap_or(usize::MAX);
                self.items
                    .sort_by(|a, b| direction.apply(slot_of(a).cmp(&slot_of(b))));
            }
            _ => self
                .items
                .sort_by(|a, b| direction.apply(compare(key, a, b))),
        }
        self.rebuild_index();
    }

    /// Reverses the live order in place.
    pub fn reverse(&mut self) {
        self.items.reverse();
        self.rebuild_index();
    }

    pub fn owner_name(&self) -> &str {
        &self.owner_name
    }

    pub fn set_owner_name(&mut self, name: impl Into<String>) {
        self.owner_name = name.into();
    }

    /// The recipes in live order.
    pub fn recipes(&self) -> &[Recipe] {
        &self.items
    }

    /// Lowercased recipe keys in the order they were added.
    pub(crate) fn added_order(&self) -> &[String] {
        &self.added_order
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// All recipe names, one per line.
    pub fn recipe_names(&self) -> String {
        self.items
            .iter()
            .map(|recipe| recipe.name.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn check_new_name(&self, recipe: &Recipe) -> Result<String, CookStackError> {
        let key = recipe.key();
        if self.index.contains_key(&key) {
            return Err(CookStackError::DuplicateName {
                name: recipe.name.clone(),
            });
        }
        Ok(key)
    }

    fn rebuild_index(&mut self) {
        self.index.clear();
        for (position, recipe) in self.items.iter().enumerate() {
            self.index.insert(recipe.key(), position);
        }
    }
}

impl fmt::Display for RecipeBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}'s CookBook", self.owner_name)?;
        for recipe in &self.items {
            write!(f, "\n{}\n", recipe)?;
        }
        Ok(())
    }
}
