use polars::prelude::*;
use sha2::{Digest, Sha256};
use std::collections::HashSet;
use std::io::Cursor;
use std::path::Path;
use tracing::{debug, info};

use crate::error::{DashboardError, DashboardResult, RowContext};
use crate::models::{CustomerId, Dataset, DatasetSource, Record, SubscriptionStatus};

/// Purchase column after space normalization, before the canonical rename.
pub const PURCHASE_AMOUNT_COLUMN: &str = "Purchase_Amount_(USD)";
pub const PRICE_COLUMN: &str = "Price_in_USD";
pub const KEY_COLUMN: &str = "Customer_ID";

const REQUIRED_STRING_COLUMNS: [&str; 8] = [
    "Gender",
    "Item_Purchased",
    "Category",
    "Location",
    "Size",
    "Season",
    "Subscription_Status",
    "Shipping_Type",
];
const OPTIONAL_STRING_COLUMNS: [&str; 5] = [
    "Color",
    "Discount_Applied",
    "Promo_Code_Used",
    "Payment_Method",
    "Frequency_of_Purchases",
];
const REQUIRED_FLOAT_COLUMNS: [&str; 2] = [PRICE_COLUMN, "Review_Rating"];
const REQUIRED_INT_COLUMNS: [&str; 2] = [KEY_COLUMN, "Previous_Purchases"];
const OPTIONAL_INT_COLUMNS: [&str; 1] = ["Age"];

/// Spaces become underscores; the purchase amount column gets its canonical name.
pub fn normalize_column_name(name: &str) -> String {
    let name = name.replace(' ', "_");
    if name == PURCHASE_AMOUNT_COLUMN {
        PRICE_COLUMN.to_string()
    } else {
        name
    }
}

/// Hex SHA-256 of the raw source bytes.
pub fn source_checksum(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}

/// Read delimited text with a header row into a DataFrame of string columns.
///
/// Inference is disabled: it only samples leading rows, so a later `12.5` in an
/// integer-looking column or `XL` in a numeric-looking size column would fail
/// the parse. Callers cast to the types they need.
pub fn read_csv_bytes(bytes: Vec<u8>) -> DashboardResult<DataFrame> {
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .into_reader_with_file_handle(Cursor::new(bytes))
        .finish()?;
    Ok(df)
}

/// Parse the shopping-trends CSV and validate it into a keyed dataset.
pub fn load_dataset(path: &Path) -> DashboardResult<Dataset> {
    let bytes = std::fs::read(path).map_err(|e| DashboardError::io(path, e))?;
    let checksum = source_checksum(&bytes);
    let dataset = parse_dataset_bytes(bytes)?.with_source(DatasetSource {
        path: path.display().to_string(),
        checksum,
    });

    info!(
        path = %path.display(),
        rows = dataset.len(),
        "Loaded shopping trends dataset"
    );
    Ok(dataset)
}

pub fn parse_dataset_bytes(bytes: Vec<u8>) -> DashboardResult<Dataset> {
    let mut df = read_csv_bytes(bytes)?;

    let columns: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|s| normalize_column_name(s.as_str()))
        .collect();
    df.set_column_names(columns.iter().map(|s| s.as_str()))?;

    let present: HashSet<&str> = columns.iter().map(|s| s.as_str()).collect();
    for required in REQUIRED_STRING_COLUMNS
        .iter()
        .chain(REQUIRED_FLOAT_COLUMNS.iter())
        .chain(REQUIRED_INT_COLUMNS.iter())
    {
        if !present.contains(required) {
            return Err(DashboardError::MissingColumn(required.to_string()));
        }
    }

    let df = cast_columns(df, &present)?;
    let records = dataframe_to_records(&df)?;
    debug!(rows = records.len(), columns = columns.len(), "Converted frame to records");

    Ok(Dataset::from_records(records)?.with_columns(columns))
}

/// Cast the string columns to the types the record schema expects. Values that
/// do not parse become null and are reported per row by the record walk.
fn cast_columns(df: DataFrame, present: &HashSet<&str>) -> DashboardResult<DataFrame> {
    let mut lazy_df = df.lazy();

    for name in REQUIRED_STRING_COLUMNS
        .iter()
        .chain(OPTIONAL_STRING_COLUMNS.iter())
        .filter(|name| present.contains(*name))
    {
        lazy_df = lazy_df.with_column(col(*name).cast(DataType::String));
    }
    for name in REQUIRED_FLOAT_COLUMNS.iter() {
        lazy_df = lazy_df.with_column(col(*name).cast(DataType::Float64));
    }
    for name in REQUIRED_INT_COLUMNS
        .iter()
        .chain(OPTIONAL_INT_COLUMNS.iter())
        .filter(|name| present.contains(*name))
    {
        lazy_df = lazy_df.with_column(col(*name).cast(DataType::Int64));
    }

    Ok(lazy_df.collect()?)
}

fn required<T>(value: Option<T>, column: &str, row: usize) -> DashboardResult<T> {
    value.ok_or_else(|| {
        DashboardError::invalid(
            "missing or mistyped value",
            RowContext::new(column).at_row(row),
        )
    })
}

fn str_column<'a>(df: &'a DataFrame, name: &str) -> DashboardResult<&'a StringChunked> {
    Ok(df.column(name)?.str()?)
}

fn optional_str_column<'a>(df: &'a DataFrame, name: &str) -> Option<&'a StringChunked> {
    df.column(name).ok().and_then(|c| c.str().ok())
}

/// Convert a normalized, cast DataFrame into typed records.
pub fn dataframe_to_records(df: &DataFrame) -> DashboardResult<Vec<Record>> {
    let height = df.height();
    let mut records = Vec::with_capacity(height);

    let ids = df.column(KEY_COLUMN)?.i64()?;
    let previous_purchases = df.column("Previous_Purchases")?.i64()?;
    let prices = df.column(PRICE_COLUMN)?.f64()?;
    let ratings = df.column("Review_Rating")?.f64()?;
    let ages = df.column("Age").ok().and_then(|c| c.i64().ok());

    let genders = str_column(df, "Gender")?;
    let items = str_column(df, "Item_Purchased")?;
    let categories = str_column(df, "Category")?;
    let locations = str_column(df, "Location")?;
    let sizes = str_column(df, "Size")?;
    let seasons = str_column(df, "Season")?;
    let subscriptions = str_column(df, "Subscription_Status")?;
    let shipping_types = str_column(df, "Shipping_Type")?;

    let colors = optional_str_column(df, "Color");
    let discounts = optional_str_column(df, "Discount_Applied");
    let promo_codes = optional_str_column(df, "Promo_Code_Used");
    let payment_methods = optional_str_column(df, "Payment_Method");
    let frequencies = optional_str_column(df, "Frequency_of_Purchases");

    let optional_string = |column: Option<&StringChunked>, i: usize| {
        column.and_then(|c| c.get(i)).map(|s| s.to_string())
    };

    for i in 0..height {
        let price = required(prices.get(i), PRICE_COLUMN, i)?;
        if price < 0.0 {
            return Err(DashboardError::invalid(
                format!("negative price {}", price),
                RowContext::new(PRICE_COLUMN).at_row(i),
            ));
        }

        let purchases = required(previous_purchases.get(i), "Previous_Purchases", i)?;
        if purchases < 0 {
            return Err(DashboardError::invalid(
                format!("negative purchase count {}", purchases),
                RowContext::new("Previous_Purchases").at_row(i),
            ));
        }

        let rating = required(ratings.get(i), "Review_Rating", i)?;
        if !rating.is_finite() {
            return Err(DashboardError::invalid(
                "non-finite rating",
                RowContext::new("Review_Rating").at_row(i),
            ));
        }

        let subscription_raw = required(subscriptions.get(i), "Subscription_Status", i)?;
        let subscription_status = subscription_raw
            .parse::<SubscriptionStatus>()
            .map_err(|e| {
                DashboardError::invalid(e, RowContext::new("Subscription_Status").at_row(i))
            })?;

        records.push(Record {
            customer_id: CustomerId::new(required(ids.get(i), KEY_COLUMN, i)?),
            age: ages.and_then(|c| c.get(i)),
            gender: required(genders.get(i), "Gender", i)?.to_string(),
            item_purchased: required(items.get(i), "Item_Purchased", i)?.to_string(),
            category: required(categories.get(i), "Category", i)?.to_string(),
            price_in_usd: price,
            location: required(locations.get(i), "Location", i)?.to_string(),
            size: required(sizes.get(i), "Size", i)?.to_string(),
            color: optional_string(colors, i),
            season: required(seasons.get(i), "Season", i)?.to_string(),
            review_rating: rating,
            subscription_status,
            shipping_type: required(shipping_types.get(i), "Shipping_Type", i)?.to_string(),
            discount_applied: optional_string(discounts, i),
            promo_code_used: optional_string(promo_codes, i),
            previous_purchases: purchases,
            payment_method: optional_string(payment_methods, i),
            frequency_of_purchases: optional_string(frequencies, i),
        });
    }

    Ok(records)
}
