//! Custom serde helpers for the `dd-mm-yyyy` date convention.
//!
//! Use with `#[serde(with = "weekboard_core::serde::day_month_year")]` on
//! `NaiveDate` fields that must travel in the system-wide textual format.

/// Serialize/deserialize a `NaiveDate` as `dd-mm-yyyy`.
pub mod day_month_year {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::week::ANCHOR_FORMAT;

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&date.format(ANCHOR_FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NaiveDate::parse_from_str(&s, ANCHOR_FORMAT).map_err(serde::de::Error::custom)
    }
}
