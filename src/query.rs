use std::str::FromStr;

use crate::client::Client;
use crate::decimal::Rate;
use crate::errors::{LendingError, Result};
use crate::types::{LoanCategory, OwnershipType};

/// raw optional search criteria, exactly as a caller supplies them
///
/// list criteria (`ownership`, `category`) are comma-separated; blank or
/// omitted criteria impose no constraint
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchFilters {
    pub ownership: Option<String>,
    pub category: Option<String>,
    pub interest_rate: Option<String>,
    pub term: Option<String>,
    pub client_name: Option<String>,
}

impl SearchFilters {
    /// parse the raw criteria into a query, failing fast on bad values
    ///
    /// a parse failure names the offending field and the repository is
    /// never reached
    pub fn parse(&self) -> Result<ClientQuery> {
        let mut query = ClientQuery::default();

        if let Some(raw) = non_blank(&self.ownership) {
            let mut parsed = Vec::new();
            for token in raw.split(',').map(str::trim).filter(|t| !t.is_empty()) {
                let ownership = OwnershipType::from_str(token).map_err(|_| {
                    LendingError::InvalidFilterValue {
                        field: "ownership",
                        value: token.to_string(),
                    }
                })?;
                parsed.push(ownership);
            }
            query.ownership = Some(parsed);
        }

        if let Some(raw) = non_blank(&self.category) {
            let mut parsed = Vec::new();
            for token in raw.split(',').map(str::trim).filter(|t| !t.is_empty()) {
                let category = LoanCategory::from_str(token).map_err(|_| {
                    LendingError::InvalidFilterValue {
                        field: "category",
                        value: token.to_string(),
                    }
                })?;
                parsed.push(category);
            }
            query.categories = Some(parsed);
        }

        if let Some(raw) = non_blank(&self.interest_rate) {
            let rate =
                Rate::from_str(raw.trim()).map_err(|_| LendingError::InvalidFilterValue {
                    field: "interest_rate",
                    value: raw.to_string(),
                })?;
            query.interest_rate = Some(rate);
        }

        if let Some(raw) = non_blank(&self.term) {
            let term = raw
                .trim()
                .parse::<u32>()
                .map_err(|_| LendingError::InvalidFilterValue {
                    field: "term",
                    value: raw.to_string(),
                })?;
            query.term = Some(term);
        }

        if let Some(raw) = non_blank(&self.client_name) {
            query.name_contains = Some(raw.to_lowercase());
        }

        Ok(query)
    }
}

fn non_blank(raw: &Option<String>) -> Option<&str> {
    raw.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// parsed search predicate; supplied criteria AND together
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClientQuery {
    ownership: Option<Vec<OwnershipType>>,
    categories: Option<Vec<LoanCategory>>,
    interest_rate: Option<Rate>,
    term: Option<u32>,
    name_contains: Option<String>,
}

impl ClientQuery {
    /// match everything
    pub fn any() -> Self {
        Self::default()
    }

    pub fn matches(&self, client: &Client) -> bool {
        if let Some(ownership) = &self.ownership {
            if !ownership.contains(&client.ownership) {
                return false;
            }
        }
        if let Some(categories) = &self.categories {
            if !client
                .loans
                .iter()
                .any(|l| categories.contains(&l.loan_type.category))
            {
                return false;
            }
        }
        if let Some(rate) = self.interest_rate {
            if !client.loans.iter().any(|l| l.loan_type.interest_rate == rate) {
                return false;
            }
        }
        if let Some(term) = self.term {
            if !client.loans.iter().any(|l| l.loan_type.term == term) {
                return false;
            }
        }
        if let Some(needle) = &self.name_contains {
            if !client.name.to_lowercase().contains(needle) {
                return false;
            }
        }
        true
    }
}
