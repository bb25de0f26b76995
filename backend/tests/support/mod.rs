#![allow(dead_code)]

use std::collections::HashSet;
use std::io::Write;
use std::sync::{Arc, Mutex};

use shopping_trends::models::{Dataset, GeoReference};
use shopping_trends::parsing::parse_geo_bytes;
use shopping_trends::store::DatasetStore;
use tempfile::NamedTempFile;

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Runs `f` with environment variables temporarily modified.
///
/// Restores the previous values on unwind and serializes access to the
/// process environment across parallel tests.
///
/// `changes` is a list of `(key, value)` pairs:
/// - `Some(v)` sets the variable to `v`
/// - `None` removes the variable
pub fn with_scoped_env<F, R>(changes: &[(&str, Option<&str>)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _lock = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let _guard = ScopedEnv::new(changes);
    f()
}

struct ScopedEnv {
    snapshot: Vec<(String, Option<String>)>,
}

impl ScopedEnv {
    fn new(changes: &[(&str, Option<&str>)]) -> Self {
        let keys: HashSet<&str> = changes.iter().map(|(k, _)| *k).collect();
        let snapshot = keys
            .into_iter()
            .map(|k| (k.to_string(), std::env::var(k).ok()))
            .collect::<Vec<_>>();

        for (k, v) in changes {
            match v {
                Some(val) => std::env::set_var(k, val),
                None => std::env::remove_var(k),
            }
        }

        Self { snapshot }
    }
}

impl Drop for ScopedEnv {
    fn drop(&mut self) {
        for (k, v) in self.snapshot.drain(..) {
            match v {
                Some(val) => std::env::set_var(&k, val),
                None => std::env::remove_var(&k),
            }
        }
    }
}

pub const HEADER: &str = "Customer ID,Age,Gender,Item Purchased,Category,Purchase Amount (USD),Location,Size,Color,Season,Review Rating,Subscription Status,Shipping Type,Discount Applied,Promo Code Used,Previous Purchases,Payment Method,Frequency of Purchases";

/// Ten customers in four locations; `Atlantis` has no coordinates.
///
/// Sales: Maine 251, Kentucky 160, Oregon 100, Atlantis 85 (total 596).
pub const ROWS: [&str; 10] = [
    "1,55,Male,Blouse,Clothing,53,Kentucky,L,Gray,Winter,3.1,Yes,Express,Yes,Yes,14,Venmo,Fortnightly",
    "2,19,Male,Sweater,Clothing,64,Maine,L,Maroon,Winter,3.1,Yes,Express,Yes,Yes,2,Cash,Fortnightly",
    "3,50,Male,Jeans,Clothing,73,Kentucky,S,Maroon,Spring,3.1,No,Free Shipping,No,No,23,Credit Card,Weekly",
    "4,21,Female,Sandals,Footwear,90,Maine,M,Maroon,Spring,3.5,No,Next Day Air,No,No,49,PayPal,Weekly",
    "5,45,Female,Blouse,Clothing,49,Oregon,M,Turquoise,Spring,2.7,No,Free Shipping,No,No,31,PayPal,Annually",
    "6,46,Male,Sneakers,Footwear,20,Oregon,M,White,Summer,2.9,Yes,Standard,Yes,Yes,14,Venmo,Weekly",
    "7,63,Female,Shirt,Clothing,85,Atlantis,M,Gray,Fall,3.2,No,Free Shipping,No,No,49,Cash,Quarterly",
    "8,27,Male,Shorts,Clothing,34,Kentucky,L,Charcoal,Winter,3.2,Yes,Free Shipping,Yes,Yes,19,Credit Card,Weekly",
    "9,26,Female,Coat,Outerwear,97,Maine,L,Silver,Summer,2.6,No,Express,No,No,8,Venmo,Annually",
    "10,57,Male,Handbag,Accessories,31,Oregon,M,Pink,Spring,4.8,No,2-Day Shipping,No,No,4,Cash,Quarterly",
];

pub const GEO_CSV: &str = "name,description,latitude,longitude\n\
Kentucky,Frankfort,38.197274,-84.86311\n\
Maine,Augusta,44.323535,-69.765261\n\
Oregon,Salem,44.931109,-123.029159\n";

pub fn sample_csv() -> String {
    let mut content = String::from(HEADER);
    content.push('\n');
    for row in ROWS {
        content.push_str(row);
        content.push('\n');
    }
    content
}

/// Helper to create a temp CSV file
pub fn create_temp_csv(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{}", content).unwrap();
    temp_file.flush().unwrap();
    temp_file
}

/// Sample dataset loaded through the store, plus the file that backs it.
pub fn load_sample() -> (NamedTempFile, Arc<Dataset>) {
    let file = create_temp_csv(&sample_csv());
    let dataset = DatasetStore::new().load(file.path()).unwrap();
    (file, dataset)
}

pub fn sample_geo() -> GeoReference {
    parse_geo_bytes(GEO_CSV.as_bytes().to_vec()).unwrap()
}
