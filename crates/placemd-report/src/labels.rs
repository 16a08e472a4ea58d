//! Fixed label tables used by the section renderers.
//!
//! Enum lookups are exhaustive over the known values and fall back to the raw
//! API string for anything else.

use placemd_places::{BusinessStatus, PriceLevel};

/// Day names indexed by the API's day number, Sunday first.
pub const WEEKDAYS: [&str; 7] = ["日", "月", "火", "水", "木", "金", "土"];

#[must_use]
pub fn business_status_label(status: &BusinessStatus) -> &str {
    match status {
        BusinessStatus::Operational => "営業中",
        BusinessStatus::ClosedTemporarily => "一時休業中",
        BusinessStatus::ClosedPermanently => "閉店",
        BusinessStatus::Other(raw) => raw,
    }
}

#[must_use]
pub fn price_level_label(level: &PriceLevel) -> &str {
    match level {
        PriceLevel::Unspecified => "不明",
        PriceLevel::Free => "無料",
        PriceLevel::Inexpensive => "お手頃",
        PriceLevel::Moderate => "普通",
        PriceLevel::Expensive => "高め",
        PriceLevel::VeryExpensive => "非常に高い",
        PriceLevel::Other(raw) => raw,
    }
}
