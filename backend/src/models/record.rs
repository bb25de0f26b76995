//! Typed shopping-trend records and the immutable dataset that holds them.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::define_key_type;
use crate::error::{DashboardError, DashboardResult};

define_key_type!(i64, CustomerId);

/// Subscription flag as stored in the source table (`Yes` / `No`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SubscriptionStatus {
    Yes,
    No,
}

impl SubscriptionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubscriptionStatus::Yes => "Yes",
            SubscriptionStatus::No => "No",
        }
    }
}

impl fmt::Display for SubscriptionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SubscriptionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Yes" => Ok(SubscriptionStatus::Yes),
            "No" => Ok(SubscriptionStatus::No),
            other => Err(format!("expected 'Yes' or 'No', got '{}'", other)),
        }
    }
}

/// One row of the shopping-trends table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub customer_id: CustomerId,
    pub age: Option<i64>,
    pub gender: String,
    pub item_purchased: String,
    pub category: String,
    pub price_in_usd: f64,
    pub location: String,
    pub size: String,
    pub color: Option<String>,
    pub season: String,
    pub review_rating: f64,
    pub subscription_status: SubscriptionStatus,
    pub shipping_type: String,
    pub discount_applied: Option<String>,
    pub promo_code_used: Option<String>,
    pub previous_purchases: i64,
    pub payment_method: Option<String>,
    pub frequency_of_purchases: Option<String>,
}

/// Categorical columns that can be filtered, counted or grouped on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CategoricalField {
    Category,
    Size,
    Location,
    Season,
    Gender,
    ItemPurchased,
    ShippingType,
    SubscriptionStatus,
}

impl CategoricalField {
    /// Normalized column name in the source table.
    pub fn column_name(&self) -> &'static str {
        match self {
            CategoricalField::Category => "Category",
            CategoricalField::Size => "Size",
            CategoricalField::Location => "Location",
            CategoricalField::Season => "Season",
            CategoricalField::Gender => "Gender",
            CategoricalField::ItemPurchased => "Item_Purchased",
            CategoricalField::ShippingType => "Shipping_Type",
            CategoricalField::SubscriptionStatus => "Subscription_Status",
        }
    }
}

/// Numeric columns that can be summed or averaged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NumericField {
    PriceInUsd,
    ReviewRating,
    PreviousPurchases,
}

impl NumericField {
    pub fn column_name(&self) -> &'static str {
        match self {
            NumericField::PriceInUsd => "Price_in_USD",
            NumericField::ReviewRating => "Review_Rating",
            NumericField::PreviousPurchases => "Previous_Purchases",
        }
    }
}

impl Record {
    pub fn categorical(&self, field: CategoricalField) -> &str {
        match field {
            CategoricalField::Category => &self.category,
            CategoricalField::Size => &self.size,
            CategoricalField::Location => &self.location,
            CategoricalField::Season => &self.season,
            CategoricalField::Gender => &self.gender,
            CategoricalField::ItemPurchased => &self.item_purchased,
            CategoricalField::ShippingType => &self.shipping_type,
            CategoricalField::SubscriptionStatus => self.subscription_status.as_str(),
        }
    }

    pub fn numeric(&self, field: NumericField) -> f64 {
        match field {
            NumericField::PriceInUsd => self.price_in_usd,
            NumericField::ReviewRating => self.review_rating,
            NumericField::PreviousPurchases => self.previous_purchases as f64,
        }
    }
}

/// Where a dataset came from; absent for datasets built in memory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetSource {
    pub path: String,
    /// Hex SHA-256 of the source bytes
    pub checksum: String,
}

/// Ordered, uniquely keyed collection of records. Never mutated after construction.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<Record>,
    index: HashMap<CustomerId, usize>,
    columns: Vec<String>,
    source: Option<DatasetSource>,
}

impl Dataset {
    /// Build a dataset, rejecting duplicate customer identifiers.
    pub fn from_records(records: Vec<Record>) -> DashboardResult<Self> {
        let mut index = HashMap::with_capacity(records.len());
        for (position, record) in records.iter().enumerate() {
            if index.insert(record.customer_id, position).is_some() {
                return Err(DashboardError::DuplicateKey(record.customer_id.value()));
            }
        }

        Ok(Self {
            records,
            index,
            columns: Vec::new(),
            source: None,
        })
    }

    pub fn with_columns(mut self, columns: Vec<String>) -> Self {
        self.columns = columns;
        self
    }

    pub fn with_source(mut self, source: DatasetSource) -> Self {
        self.source = Some(source);
        self
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn get(&self, id: CustomerId) -> Option<&Record> {
        self.index.get(&id).map(|&position| &self.records[position])
    }

    /// Normalized column names in source order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn source(&self) -> Option<&DatasetSource> {
        self.source.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::record;

    #[test]
    fn test_duplicate_key_rejected() {
        let records = vec![
            record(1, "Clothing", "M", "Texas"),
            record(1, "Shoes", "L", "Ohio"),
        ];
        let err = Dataset::from_records(records).unwrap_err();
        assert!(matches!(err, DashboardError::DuplicateKey(1)));
    }

    #[test]
    fn test_lookup_by_customer_id() {
        let dataset = Dataset::from_records(vec![
            record(10, "Clothing", "M", "Texas"),
            record(20, "Shoes", "L", "Ohio"),
        ])
        .unwrap();

        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.get(CustomerId::new(20)).unwrap().category, "Shoes");
        assert!(dataset.get(CustomerId::new(30)).is_none());
    }

    #[test]
    fn test_subscription_status_parsing() {
        assert_eq!("Yes".parse::<SubscriptionStatus>().unwrap(), SubscriptionStatus::Yes);
        assert_eq!(" No ".parse::<SubscriptionStatus>().unwrap(), SubscriptionStatus::No);
        assert!("maybe".parse::<SubscriptionStatus>().is_err());
    }

    #[test]
    fn test_field_accessors() {
        let mut r = record(1, "Accessories", "S", "Maine");
        r.subscription_status = SubscriptionStatus::Yes;
        assert_eq!(r.categorical(CategoricalField::Location), "Maine");
        assert_eq!(r.categorical(CategoricalField::SubscriptionStatus), "Yes");
        assert_eq!(r.numeric(NumericField::PreviousPurchases), 3.0);
    }

    #[test]
    fn test_customer_id_from_str() {
        let id: CustomerId = " 42 ".parse().unwrap();
        assert_eq!(id.value(), 42);
    }
}
