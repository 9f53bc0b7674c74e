//! Product domain entity.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::constants::MIN_PRODUCT_PRICE;
use crate::error::{DomainError, DomainResult};

/// Product domain entity
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub price: f64,
    /// Creation instant, also the listing sort key
    pub created_at: DateTime<Utc>,
}

impl Product {
    /// Create a new product stamped with the current time.
    ///
    /// # Errors
    /// Returns a validation error if the name is empty or the price is
    /// negative (or not a number).
    pub fn new(name: &str, price: f64) -> DomainResult<Self> {
        Self::validate(name, price)?;

        Ok(Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            price,
            created_at: Utc::now(),
        })
    }

    /// Build the full replacement of this product.
    ///
    /// Identity and creation time are carried over; every other field comes
    /// from the arguments.
    pub fn revise(&self, name: &str, price: f64) -> DomainResult<Self> {
        Self::validate(name, price)?;

        Ok(Self {
            id: self.id,
            name: name.to_string(),
            price,
            created_at: self.created_at,
        })
    }

    fn validate(name: &str, price: f64) -> DomainResult<()> {
        if name.is_empty() {
            return Err(DomainError::validation("Name is required"));
        }
        if price.is_nan() || price < MIN_PRODUCT_PRICE {
            return Err(DomainError::validation("Price must not be negative"));
        }
        Ok(())
    }
}
