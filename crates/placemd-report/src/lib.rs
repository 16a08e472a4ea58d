//! Markdown report rendering for a single place.
//!
//! The report is three sections in a fixed order: identity/location/contact,
//! amenities/hours/pricing, and ratings/reviews. Every renderer is a total,
//! pure function of a [`PlaceDetails`] snapshot: a field that is absent
//! produces no output at all, and a heading is only written when at least one
//! line below it will be.

pub mod labels;
pub mod policy;
pub mod sections;

use chrono::{FixedOffset, Offset, Utc};
use placemd_places::PlaceDetails;

pub use policy::ReviewPolicy;
pub use sections::amenities::{format_period, render_amenities};
pub use sections::identity::render_identity;
pub use sections::reviews::{format_publish_date, render_reviews};

/// Rendering knobs that are not part of the place itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportOptions {
    pub review_policy: ReviewPolicy,
    /// Zone review publish dates are shown in.
    pub utc_offset: FixedOffset,
}

impl ReportOptions {
    /// Builds options from a whole-hour UTC offset. Offsets chrono rejects
    /// fall back to UTC.
    #[must_use]
    pub fn new(review_policy: ReviewPolicy, utc_offset_hours: i32) -> Self {
        let utc_offset = utc_offset_hours
            .checked_mul(3600)
            .and_then(FixedOffset::east_opt)
            .unwrap_or_else(|| Utc.fix());
        Self {
            review_policy,
            utc_offset,
        }
    }
}

impl Default for ReportOptions {
    /// Arrival-order reviews, dates in Japan Standard Time.
    fn default() -> Self {
        Self::new(ReviewPolicy::default(), 9)
    }
}

/// Renders the full report: identity, then amenities, then reviews.
///
/// Deterministic: identical input always yields byte-identical output. A
/// place with no fields set yields an empty string.
#[must_use]
pub fn render_report(place: &PlaceDetails, options: &ReportOptions) -> String {
    let mut out = String::new();
    render_identity(place, &mut out);
    render_amenities(place, &mut out);
    render_reviews(place, options, &mut out);
    out
}

#[cfg(test)]
#[path = "report_test.rs"]
mod tests;
