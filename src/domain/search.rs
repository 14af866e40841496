use super::*;
use super::contact::{ValidationReq, is_blank};

/// Company and client filters for a search. An empty filter is ignored.
#[derive(Debug, Default, Clone)]
pub struct SearchQuery {
    pub company: Option<String>,
    pub client: Option<String>,
}

impl SearchQuery {
    pub fn new(company: Option<&str>, client: Option<&str>) -> Self {
        Self {
            company: company.map(str::to_string),
            client: client.map(str::to_string),
        }
    }

    pub fn by_company(company: &str) -> Self {
        Self::new(Some(company), None)
    }

    pub fn by_client(client: &str) -> Self {
        Self::new(None, Some(client))
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.company_filter().is_none() && self.client_filter().is_none() {
            return Err(AppError::Validation(ValidationReq::search_filter()));
        }
        Ok(())
    }

    pub fn matches(&self, contact: &Contact) -> bool {
        let company_ok = self
            .company_filter()
            .is_none_or(|f| contains_ignore_case(&contact.company, f));
        let client_ok = self
            .client_filter()
            .is_none_or(|f| contains_ignore_case(&contact.client, f));

        company_ok && client_ok
    }

    fn company_filter(&self) -> Option<&str> {
        self.company.as_deref().filter(|f| !is_blank(f))
    }

    fn client_filter(&self) -> Option<&str> {
        self.client.as_deref().filter(|f| !is_blank(f))
    }
}

fn contains_ignore_case(field: &str, filter: &str) -> bool {
    field.to_lowercase().contains(&filter.to_lowercase())
}
