//! Product - Catalog entry with validated details and a status
//!
//! Pure domain entity without infrastructure dependencies. Every way of
//! producing or changing product details goes through [`ProductDetails::parse`],
//! so an invalid product cannot be constructed or updated into.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::errors::ValidationError;
use crate::domain::value_objects::{Category, Status};

/// Product - a sellable catalog item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Assigned by the repository; `0` until the product is persisted
    pub id: i64,
    pub name: String,
    pub description: String,
    pub net_price_cents: i64,
    pub category: Category,
    pub status: Status,
    pub created_at: DateTime<Utc>,
}

/// Validated, normalized product details
#[derive(Debug, Clone, PartialEq, Eq)]
struct ProductDetails {
    name: String,
    description: String,
    net_price_cents: i64,
    category: Category,
}

impl ProductDetails {
    fn parse(
        name: &str,
        description: &str,
        net_price_cents: i64,
        category: &str,
    ) -> Result<Self, ValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }

        if net_price_cents < 0 {
            return Err(ValidationError::NegativePrice(net_price_cents));
        }

        let category = category.parse::<Category>()?;

        Ok(Self {
            name: name.to_string(),
            description: description.trim().to_string(),
            net_price_cents,
            category,
        })
    }
}

impl Product {
    /// Create a new draft Product after validating the input
    ///
    /// The product has no identity yet; the repository assigns one on create.
    pub fn new(
        name: &str,
        description: &str,
        net_price_cents: i64,
        category: &str,
    ) -> Result<Self, ValidationError> {
        let details = ProductDetails::parse(name, description, net_price_cents, category)?;

        Ok(Self {
            id: 0,
            name: details.name,
            description: details.description,
            net_price_cents: details.net_price_cents,
            category: details.category,
            status: Status::Draft,
            created_at: Utc::now(),
        })
    }

    /// Overwrite name, description, price and category
    ///
    /// Leaves the product untouched when validation fails. Status is never
    /// changed here.
    pub fn update_details(
        &mut self,
        name: &str,
        description: &str,
        net_price_cents: i64,
        category: &str,
    ) -> Result<(), ValidationError> {
        let details = ProductDetails::parse(name, description, net_price_cents, category)?;

        self.name = details.name;
        self.description = details.description;
        self.net_price_cents = details.net_price_cents;
        self.category = details.category;

        Ok(())
    }

    /// Mark the product as active. Re-activating is a no-op.
    pub fn activate(&mut self) {
        self.status = Status::Active;
    }

    /// Mark the product as inactive. Re-deactivating is a no-op.
    pub fn deactivate(&mut self) {
        self.status = Status::Inactive;
    }

    pub fn is_active(&self) -> bool {
        self.status == Status::Active
    }
}
