use super::ValidationError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Largest number of decimal places accepted for a price.
pub const PRICE_DECIMAL_PLACES: u32 = 4;

/// A row of the `products` table.
///
/// `available` is the soft-delete flag: a product takes part in reads,
/// updates and removals only while it is `true`. Removing a product flips it
/// to `false`; the row itself is never deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub available: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for creating a product. The id is assigned by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductCreate {
    pub name: String,
    pub price: f64,
}

impl ProductCreate {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_name(&self.name)?;
        validate_price(self.price)
    }
}

/// Partial update of a product.
///
/// Absent fields are left untouched. `id` is accepted so that callers can send
/// the whole record back, but it is never applied: the id passed alongside the
/// patch is the one that counts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductUpdate {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
}

impl ProductUpdate {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(name) = &self.name {
            validate_name(name)?;
        }
        if let Some(price) = self.price {
            validate_price(price)?;
        }
        Ok(())
    }

    /// Drops the embedded id, keeping only the fields that may change.
    pub fn without_id(self) -> Self {
        Self { id: None, ..self }
    }
}

fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::EmptyName);
    }
    Ok(())
}

fn validate_price(price: f64) -> Result<(), ValidationError> {
    if !price.is_finite() {
        return Err(ValidationError::NonFinitePrice(price));
    }
    if price < 0.0 {
        return Err(ValidationError::NegativePrice(price));
    }
    let scaled = price * 10f64.powi(PRICE_DECIMAL_PLACES as i32);
    if (scaled - scaled.round()).abs() > 1e-6 {
        return Err(ValidationError::TooManyDecimals {
            price,
            max: PRICE_DECIMAL_PLACES,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_payload_validation() {
        assert!(ProductCreate::new("Keyboard", 19.99).validate().is_ok());
        assert!(ProductCreate::new("Free sample", 0.0).validate().is_ok());
        assert_eq!(
            ProductCreate::new("   ", 1.0).validate(),
            Err(ValidationError::EmptyName)
        );
        assert_eq!(
            ProductCreate::new("Mouse", -1.0).validate(),
            Err(ValidationError::NegativePrice(-1.0))
        );
        assert!(matches!(
            ProductCreate::new("Mouse", 1.23456).validate(),
            Err(ValidationError::TooManyDecimals { max: 4, .. })
        ));
        assert!(matches!(
            ProductCreate::new("Mouse", f64::NAN).validate(),
            Err(ValidationError::NonFinitePrice(_))
        ));
    }

    #[test]
    fn update_payload_only_checks_present_fields() {
        assert!(ProductUpdate::default().validate().is_ok());
        assert!(ProductUpdate::default().price(12.5).validate().is_ok());
        assert_eq!(
            ProductUpdate::default().name("").validate(),
            Err(ValidationError::EmptyName)
        );
    }

    #[test]
    fn without_id_keeps_the_patch_fields() {
        let patch = ProductUpdate {
            id: Some(99),
            name: Some("Renamed".into()),
            price: None,
        };
        let stripped = patch.without_id();
        assert_eq!(stripped.id, None);
        assert_eq!(stripped.name.as_deref(), Some("Renamed"));
    }
}
