pub mod stores;

use crate::prelude::{AppError, Contact};
use std::fs;
use std::path::Path;

pub use stores::{CsvStorage, TxtStorage};

pub const DEFAULT_STORAGE_PATH: &str = "contacts.txt";

/// A place the session's contacts can be read from and written back to.
pub trait Persistence {
    fn load(&self) -> Result<Vec<Contact>, AppError>;

    fn save(&self, contacts: &[Contact]) -> Result<(), AppError>;

    fn get_medium(&self) -> &str;

    /// Where the data lives, for messages shown to the user.
    fn location(&self) -> String;
}

pub fn create_file_parent(path: &Path) -> Result<(), AppError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}
