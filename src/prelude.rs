pub use crate::cli::{command, run_app};
pub use crate::config::Config;
pub use crate::domain::{
    Contact, ContactBook, ContactForm, NOT_AVAILABLE, SearchQuery,
    contact::{self, ValidationReq},
};
pub use crate::errors::AppError;
pub use crate::storage::{
    self, ContactStore,
    memory::MemStorage,
    stores::{CsvStorage, JsonStorage},
};
