use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use orderdesk_core::{CustomerId, DomainError, DomainResult};

/// Customer record as returned by the customer store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Customer {
    /// Build a customer record, validating name and email.
    pub fn register(
        id: CustomerId,
        name: impl Into<String>,
        email: impl Into<String>,
        at: DateTime<Utc>,
    ) -> DomainResult<Self> {
        let name = name.into().trim().to_string();
        let email = email.into().trim().to_string();

        if name.is_empty() {
            return Err(DomainError::validation("customer name cannot be empty"));
        }
        if !is_plausible_email(&email) {
            return Err(DomainError::validation(format!(
                "customer email '{email}' is not a valid address"
            )));
        }

        Ok(Self {
            id,
            name,
            email,
            created_at: at,
            updated_at: at,
        })
    }
}

// Shape check only; deliverability is not our concern.
fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.') && !domain.starts_with('.'),
        None => false,
    }
}
