use std::fs;
use std::path::Path;

use log::{debug, error, warn};
use serde::{Deserialize, Serialize};

use crate::book::RecipeBook;
use crate::error::CookStackError;
use crate::model::Recipe;

/// Current on-disk format version. Bump when the envelope shape changes.
pub const FORMAT_VERSION: u32 = 1;

/// Conventional extension for cookbook files.
pub const FILE_EXTENSION: &str = "cookstack";

/// The on-disk envelope. An explicit schema rather than a dump of the live
/// structures: the derived name index is rebuilt on load, and the version
/// tag lets old files keep working when the shape evolves.
#[derive(Debug, Serialize, Deserialize)]
struct SaveFile {
    version: u32,
    owner: String,
    recipes: Vec<Recipe>,
    /// Lowercased recipe names in the order they were added.
    added_order: Vec<String>,
}

/// Encodes a cookbook into its versioned byte form.
pub fn to_bytes(book: &RecipeBook) -> Result<Vec<u8>, CookStackError> {
    let envelope = SaveFile {
        version: FORMAT_VERSION,
        owner: book.owner_name().to_string(),
        recipes: book.recipes().to_vec(),
        added_order: book.added_order().to_vec(),
    };
    Ok(serde_json::to_vec_pretty(&envelope)?)
}

/// Decodes a cookbook from its versioned byte form.
///
/// # Errors
/// [`CookStackError::CorruptData`] if the bytes are not a valid envelope or
/// the payload violates the book's invariants;
/// [`CookStackError::UnsupportedVersion`] for an unknown format version.
pub fn from_bytes(bytes: &[u8]) -> Result<RecipeBook, CookStackError> {
    let envelope: SaveFile = serde_json::from_slice(bytes)?;
    if envelope.version != FORMAT_VERSION {
        return Err(CookStackError::UnsupportedVersion {
            found: envelope.version,
        });
    }
    RecipeBook::from_parts(envelope.owner, envelope.recipes, envelope.added_order)
}

/// Writes the cookbook to `path`, replacing any existing file.
pub fn save(book: &RecipeBook, path: impl AsRef<Path>) -> Result<(), CookStackError> {
    let path = path.as_ref();
    let bytes = to_bytes(book)?;
    fs::write(path, bytes).map_err(|err| {
        error!("failed to write cookbook to {}: {}", path.display(), err);
        CookStackError::Io(err)
    })?;
    debug!(
        "saved cookbook with {} recipes to {}",
        book.len(),
        path.display()
    );
    Ok(())
}

/// Reads a cookbook back from `path`.
///
/// # Errors
/// [`CookStackError::NotFound`] when no file exists at the path; otherwise
/// the decoding errors of [`from_bytes`].
pub fn load(path: impl AsRef<Path>) -> Result<RecipeBook, CookStackError> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|err| {
        if err.kind() == std::io::ErrorKind::NotFound {
            warn!("no cookbook file at {}", path.display());
            CookStackError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            error!("failed to read cookbook from {}: {}", path.display(), err);
            CookStackError::Io(err)
        }
    })?;
    let book = from_bytes(&bytes).map_err(|err| {
        error!("could not decode cookbook at {}: {}", path.display(), err);
        err
    })?;
    debug!(
        "loaded cookbook with {} recipes from {}",
        book.len(),
        path.display()
    );
    Ok(book)
}
