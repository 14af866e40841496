pub mod contact;
pub mod manager;
pub mod search;

pub use crate::errors::AppError;
pub use crate::storage::ContactStore;
pub use contact::{Contact, ContactForm, NOT_AVAILABLE};
pub use manager::ContactBook;
pub use search::SearchQuery;
