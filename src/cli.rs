pub mod command;
pub mod run;

pub use run::run_app;

use crate::domain::Contact;
use crate::errors::AppError;

pub fn display_contact(contact: &Contact) -> String {
    format!(
        "Company: {}\n\
        Client: {}\n\
        Phone: {}\n\
        Email: {}",
        contact.company, contact.client, contact.phone, contact.email
    )
}

pub fn listing_row(position: usize, contact: &Contact) -> String {
    format!(
        "{position:>3}. {:<20} {:<20} {:15} {:<30}",
        contact.company, contact.client, contact.phone, contact.email
    )
}

/// Maps a 1-based position shown to the user back to a storage index.
pub fn position_to_index(position: usize) -> Result<usize, AppError> {
    position
        .checked_sub(1)
        .ok_or_else(|| AppError::Validation("Positions start at 1".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_one_is_first_index() -> Result<(), AppError> {
        assert_eq!(position_to_index(1)?, 0);
        assert_eq!(position_to_index(3)?, 2);
        Ok(())
    }

    #[test]
    fn position_zero_is_rejected() {
        assert!(matches!(
            position_to_index(0),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn display_shows_every_field() {
        let contact = Contact::new(
            "N/A".to_string(),
            "Jo".to_string(),
            "555".to_string(),
            "jo@example.com".to_string(),
        );

        assert_eq!(
            display_contact(&contact),
            "Company: N/A\nClient: Jo\nPhone: 555\nEmail: jo@example.com"
        );
    }
}
