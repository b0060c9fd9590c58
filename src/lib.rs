pub mod book;
pub mod builder;
pub mod config;
pub mod error;
pub mod model;
pub mod sort;
pub mod store;

use std::path::Path;

pub use crate::book::RecipeBook;
pub use crate::builder::RecipeBuilder;
pub use crate::config::AppConfig;
pub use crate::error::CookStackError;
pub use crate::model::{Ingredient, Recipe, CATEGORIES};
pub use crate::sort::{SortDirection, SortKey};

/// Loads a cookbook from a file.
///
/// # Example
/// ```no_run
/// let book = cookstack::load_cookbook("family.cookstack")?;
/// println!("{} recipes", book.len());
/// # Ok::<(), cookstack::CookStackError>(())
/// ```
pub fn load_cookbook(path: impl AsRef<Path>) -> Result<RecipeBook, CookStackError> {
    store::load(path)
}

/// Saves a cookbook to a file, replacing any previous contents.
pub fn save_cookbook(book: &RecipeBook, path: impl AsRef<Path>) -> Result<(), CookStackError> {
    store::save(book, path)
}
