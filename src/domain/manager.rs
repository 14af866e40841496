use super::*;

use std::collections::BTreeSet;
use std::path::PathBuf;
use tracing::{debug, info, warn};

use crate::storage::stores::CsvStorage;

/// The contact book operations. Every call reads the full list from
/// storage, and every mutation writes the full list back, so no contact
/// data is held between calls.
pub struct ContactBook {
    pub storage: Box<dyn ContactStore>,
}

impl ContactBook {
    pub fn new(storage: Box<dyn ContactStore>) -> Self {
        Self { storage }
    }

    pub fn load(&self) -> Result<Vec<Contact>, AppError> {
        let contacts = self.storage.load()?;
        debug!(
            medium = self.storage.get_medium(),
            count = contacts.len(),
            "Loaded contacts"
        );
        Ok(contacts)
    }

    pub fn save(&self, contacts: &[Contact]) -> Result<(), AppError> {
        self.storage.save(contacts)?;
        debug!(
            medium = self.storage.get_medium(),
            count = contacts.len(),
            "Saved contacts"
        );
        Ok(())
    }

    /// Appends a contact and returns its index.
    pub fn add_contact(&self, form: ContactForm) -> Result<usize, AppError> {
        let contact = form.into_contact().inspect_err(|e| warn!(error = %e, "Add rejected"))?;

        let mut contacts = self.load()?;
        contacts.push(contact);
        self.save(&contacts)?;

        let index = contacts.len() - 1;
        info!(index, "Contact added");
        Ok(index)
    }

    /// Fetches the contact at `index`, the lookup behind editing a listed row.
    pub fn get(&self, index: usize) -> Result<Contact, AppError> {
        let mut contacts = self.load()?;
        check_bounds(index, contacts.len())?;
        Ok(contacts.swap_remove(index))
    }

    pub fn update_contact(&self, index: usize, form: ContactForm) -> Result<Contact, AppError> {
        let contact = form
            .into_contact()
            .inspect_err(|e| warn!(index, error = %e, "Update rejected"))?;

        let mut contacts = self.load()?;
        check_bounds(index, contacts.len())
            .inspect_err(|e| warn!(index, error = %e, "Update rejected"))?;

        contacts[index] = contact.clone();
        self.save(&contacts)?;

        info!(index, "Contact updated");
        Ok(contact)
    }

    pub fn delete_contact(&self, index: usize) -> Result<Contact, AppError> {
        let mut contacts = self.load()?;
        check_bounds(index, contacts.len())
            .inspect_err(|e| warn!(index, error = %e, "Delete rejected"))?;

        let removed = contacts.remove(index);
        self.save(&contacts)?;

        info!(index, "Contact deleted");
        Ok(removed)
    }

    /// Matching contacts in storage order, each paired with its index.
    pub fn search(&self, query: &SearchQuery) -> Result<Vec<(usize, Contact)>, AppError> {
        query
            .validate()
            .inspect_err(|e| warn!(error = %e, "Search rejected"))?;

        let results: Vec<(usize, Contact)> = self
            .load()?
            .into_iter()
            .enumerate()
            .filter(|(_, contact)| query.matches(contact))
            .collect();

        debug!(?query, matches = results.len(), "Search finished");
        Ok(results)
    }

    pub fn distinct_companies(&self) -> Result<Vec<String>, AppError> {
        let companies: BTreeSet<String> = self
            .load()?
            .into_iter()
            .filter(Contact::has_company)
            .map(|c| c.company)
            .collect();

        Ok(companies.into_iter().collect())
    }

    /// Appends every record of a CSV file. Rows go through the same checks
    /// as `add_contact`; one bad row rejects the whole file.
    pub fn import_contacts_from_csv(&self, src: Option<&str>) -> Result<(PathBuf, u64), AppError> {
        let csv = CsvStorage::for_import(src)?;
        let records = csv.load()?;

        let mut imported = Vec::with_capacity(records.len());
        for (row, record) in records.into_iter().enumerate() {
            let contact = ContactForm::from(record).into_contact().map_err(|e| {
                // Row 1 is the header
                AppError::Validation(format!("row {}: {}", row + 2, e))
            })?;
            imported.push(contact);
        }

        let total = imported.len() as u64;
        let mut contacts = self.load()?;
        contacts.extend(imported);
        self.save(&contacts)?;

        info!(path = %csv.path.display(), total, "Imported contacts");
        Ok((csv.path, total))
    }

    pub fn export_contacts_to_csv(&self, des: Option<&str>) -> Result<(PathBuf, u64), AppError> {
        let csv = CsvStorage::for_export(des)?;
        let contacts = self.load()?;
        csv.save(&contacts)?;

        let total = contacts.len() as u64;
        info!(path = %csv.path.display(), total, "Exported contacts");
        Ok((csv.path, total))
    }
}

fn check_bounds(index: usize, len: usize) -> Result<(), AppError> {
    if index < len {
        Ok(())
    } else {
        Err(AppError::OutOfRange { index, len })
    }
}
