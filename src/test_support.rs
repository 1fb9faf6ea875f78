// Shared fixtures for unit tests.
use chrono::{NaiveDate, NaiveDateTime};
use serde_json::{Value, json};

/// A minimal valid election record, optionally with a range start date.
pub fn election_json(id: i64, range_start: Option<&str>) -> Value {
    let mut value = json!({
        "election_id": id,
        "election_name": {"en_US": format!("General Election {}", id)},
        "date_updated": "2024-04-01",
        "election_type": "general",
        "election_scope": "national",
        "district": {
            "district_ocd_id": "ocd-division/country:xx",
            "district_name": "Country X",
            "district_country": "XX",
            "district_type": "national"
        },
        "government_functions": {
            "details": "Parliament",
            "updated": "2024-01-01"
        }
    });
    if let Some(date) = range_start {
        value["election_range_start_date"] = json!(date);
    }
    value
}

/// Mid-afternoon on the given day.
pub fn now_at(year: i32, month: u32, day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(14, 30, 0)
        .unwrap()
}
