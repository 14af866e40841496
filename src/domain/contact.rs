use super::*;
use serde::{Deserialize, Serialize};

/// Stored in place of a company or email left empty.
pub const NOT_AVAILABLE: &str = "N/A";

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct Contact {
    pub company: String,
    pub client: String,
    pub phone: String,
    pub email: String,
}

/// Raw user input for a contact, before validation and normalization.
#[derive(Debug, Default, Clone)]
pub struct ContactForm {
    pub company: String,
    pub client: String,
    pub phone: String,
    pub email: String,
}

pub enum ValidationReq {
    __,
}

impl ValidationReq {
    pub fn required_fields() -> String {
        "Client name and phone number are required!".to_string()
    }

    pub fn search_filter() -> String {
        "At least one search filter is required!".to_string()
    }
}

impl Contact {
    pub fn new(company: String, client: String, phone: String, email: String) -> Self {
        Contact {
            company,
            client,
            phone,
            email,
        }
    }

    pub fn has_company(&self) -> bool {
        self.company != NOT_AVAILABLE
    }
}

impl ContactForm {
    pub fn new(company: &str, client: &str, phone: &str, email: &str) -> Self {
        ContactForm {
            company: company.to_string(),
            client: client.to_string(),
            phone: phone.to_string(),
            email: email.to_string(),
        }
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if is_blank(&self.client) || is_blank(&self.phone) {
            return Err(AppError::Validation(ValidationReq::required_fields()));
        }
        Ok(())
    }

    /// Validate presence of the required fields and fill empty optional
    /// fields with the sentinel.
    pub fn into_contact(self) -> Result<Contact, AppError> {
        self.validate()?;

        Ok(Contact {
            company: or_not_available(self.company),
            client: self.client,
            phone: self.phone,
            email: or_not_available(self.email),
        })
    }
}

impl From<&Contact> for ContactForm {
    fn from(contact: &Contact) -> Self {
        ContactForm {
            company: contact.company.clone(),
            client: contact.client.clone(),
            phone: contact.phone.clone(),
            email: contact.email.clone(),
        }
    }
}

impl From<Contact> for ContactForm {
    fn from(contact: Contact) -> Self {
        ContactForm {
            company: contact.company,
            client: contact.client,
            phone: contact.phone,
            email: contact.email,
        }
    }
}

pub fn is_blank(value: &str) -> bool {
    value.is_empty()
}

fn or_not_available(value: String) -> String {
    if is_blank(&value) {
        NOT_AVAILABLE.to_string()
    } else {
        value
    }
}
