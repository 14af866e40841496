use dotenv::dotenv;
use std::path::PathBuf;

use crate::domain::ContactBook;
use crate::storage::stores::{JSON_STORAGE_PATH, JsonStorage};

pub const CONTACTS_FILE_ENV: &str = "CONTACTS_FILE";

/// Settings resolved from flags, the environment and an optional `.env` file.
#[derive(Debug, Clone)]
pub struct Config {
    pub contacts_path: PathBuf,
}

impl Config {
    pub fn new(contacts_path: impl Into<PathBuf>) -> Self {
        Self {
            contacts_path: contacts_path.into(),
        }
    }

    pub fn storage(&self) -> JsonStorage {
        JsonStorage::new(&self.contacts_path)
    }

    pub fn contact_book(&self) -> ContactBook {
        ContactBook::new(Box::new(self.storage()))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(JSON_STORAGE_PATH)
    }
}

/// Loads `.env` into the process environment if one exists. Must run before
/// argument parsing so env-backed flags see its values.
pub fn load_dotenv() {
    dotenv().ok();
}
