//! Record fixtures shared by unit tests.

use crate::models::{CustomerId, Dataset, Record, SubscriptionStatus};

pub(crate) fn record(id: i64, category: &str, size: &str, location: &str) -> Record {
    Record {
        customer_id: CustomerId::new(id),
        age: Some(30),
        gender: "Male".to_string(),
        item_purchased: "Blouse".to_string(),
        category: category.to_string(),
        price_in_usd: 10.0,
        location: location.to_string(),
        size: size.to_string(),
        color: None,
        season: "Winter".to_string(),
        review_rating: 4.0,
        subscription_status: SubscriptionStatus::No,
        shipping_type: "Express".to_string(),
        discount_applied: None,
        promo_code_used: None,
        previous_purchases: 3,
        payment_method: None,
        frequency_of_purchases: None,
    }
}

pub(crate) fn priced(
    id: i64,
    category: &str,
    size: &str,
    location: &str,
    price: f64,
) -> Record {
    Record {
        price_in_usd: price,
        ..record(id, category, size, location)
    }
}

pub(crate) fn dataset(records: Vec<Record>) -> Dataset {
    Dataset::from_records(records).expect("fixture records have unique ids")
}

/// Twelve rows across four states, two sizes and three categories.
pub(crate) fn sample_dataset() -> Dataset {
    let rows = [
        (1, "Clothing", "M", "California", 50.0, "Spring", 4.5, "Yes", "Blouse", "Male"),
        (2, "Shoes", "L", "Texas", 30.0, "Summer", 3.0, "No", "Sneakers", "Female"),
        (3, "Clothing", "L", "California", 70.0, "Fall", 3.8, "No", "Jeans", "Male"),
        (4, "Accessories", "M", "Ohio", 20.0, "Winter", 2.5, "Yes", "Belt", "Male"),
        (5, "Clothing", "M", "Texas", 45.0, "Spring", 4.9, "No", "Blouse", "Female"),
        (6, "Shoes", "M", "Maine", 90.0, "Summer", 4.1, "No", "Boots", "Male"),
        (7, "Accessories", "L", "California", 15.0, "Winter", 3.3, "No", "Belt", "Female"),
        (8, "Clothing", "L", "Ohio", 60.0, "Fall", 4.0, "Yes", "Jeans", "Male"),
        (9, "Shoes", "M", "Texas", 25.0, "Winter", 2.9, "Yes", "Sneakers", "Male"),
        (10, "Clothing", "M", "Maine", 35.0, "Spring", 3.6, "No", "Blouse", "Female"),
        (11, "Accessories", "M", "Ohio", 40.0, "Summer", 4.7, "No", "Scarf", "Male"),
        (12, "Clothing", "L", "Texas", 55.0, "Fall", 3.1, "No", "Jeans", "Male"),
    ];

    let records = rows
        .iter()
        .map(
            |&(id, category, size, location, price, season, rating, sub, item, gender)| Record {
                season: season.to_string(),
                review_rating: rating,
                subscription_status: sub.parse().expect("fixture status"),
                item_purchased: item.to_string(),
                gender: gender.to_string(),
                previous_purchases: id * 2,
                ..priced(id, category, size, location, price)
            },
        )
        .collect();

    dataset(records)
}
