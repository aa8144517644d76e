//! Shared sample data for unit tests.

use super::types::{DateRange, DemandRecord, DishDemand, InsightsRecord};
use chrono::{NaiveDate, NaiveDateTime};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn generated_at() -> NaiveDateTime {
    date(2024, 2, 1).and_hms_opt(9, 30, 15).unwrap()
}

pub fn sample_dataset() -> Vec<DemandRecord> {
    vec![
        DemandRecord::new("Madhapur", "Biryani", date(2024, 1, 1), 1200),
        DemandRecord::new("Madhapur", "Dosa", date(2024, 1, 1), 300),
        DemandRecord::new("Jubilee Hills", "Biryani", date(2024, 1, 1), 800),
        DemandRecord::new("Jubilee Hills", "Haleem", date(2024, 1, 2), 450),
        DemandRecord::new("Madhapur", "Biryani", date(2024, 1, 2), 1000),
        DemandRecord::new("Jubilee Hills", "Dosa", date(2024, 1, 2), 150),
    ]
}

pub fn sample_insights() -> InsightsRecord {
    InsightsRecord {
        top_dish: "Biryani".to_string(),
        top_dish_demand: 3000,
        top_outlet: "Madhapur".to_string(),
        top_outlet_demand: 2500,
        most_unbalanced_dish: "Haleem".to_string(),
        unbalance_coefficient: 1.41,
        best_dish_per_outlet: vec![
            ("Madhapur", DishDemand::new("Biryani", 2200)),
            ("Jubilee Hills", DishDemand::new("Biryani", 800)),
        ]
        .into_iter()
        .collect(),
        worst_dish_per_outlet: vec![
            ("Madhapur", DishDemand::new("Dosa", 300)),
            ("Jubilee Hills", DishDemand::new("Dosa", 150)),
        ]
        .into_iter()
        .collect(),
        peak_day: date(2024, 1, 1),
        peak_day_demand: 2300,
        avg_demand_per_dish: 483.3,
        most_consistent_dish: "Dosa".to_string(),
        total_dishes: 3,
        total_outlets: 2,
        date_range: DateRange {
            start: date(2024, 1, 1),
            end: date(2024, 1, 2),
        },
    }
}

pub fn sample_texts() -> Vec<String> {
    vec![
        "🏆 **Biryani** is the star performer with 3,000 total demand".to_string(),
        "🎯 *Dosa* shows the most consistent daily demand pattern".to_string(),
    ]
}

pub fn sample_recommendations() -> Vec<String> {
    vec![
        "🚀 **Promote Biryani** - It's your best performer!".to_string(),
        "⚡ **Haleem** performs inconsistently across outlets".to_string(),
    ]
}
