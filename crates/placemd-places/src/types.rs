//! Places API (New) request and response types.
//!
//! Every field of [`PlaceDetails`] is optional: the API only returns what the
//! field mask asked for, and omits anything the place does not have. Enum-like
//! strings keep unknown values in an `Other` variant instead of failing, so a
//! new value added by the API still deserializes.

use chrono::DateTime;
use serde::{Deserialize, Deserializer, Serialize};

// ---------------------------------------------------------------------------
// places:searchText
// ---------------------------------------------------------------------------

/// Request body for `places:searchText`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchTextRequest<'a> {
    pub text_query: &'a str,
    pub language_code: &'a str,
}

/// Response body for `places:searchText`. An empty result is `{}`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SearchTextResponse {
    pub places: Vec<PlaceSummary>,
}

/// A search hit, trimmed to `places.id,places.displayName`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceSummary {
    pub id: String,
    #[serde(default)]
    pub display_name: Option<LocalizedText>,
}

// ---------------------------------------------------------------------------
// places/{id}
// ---------------------------------------------------------------------------

/// Detail record for a single place.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PlaceDetails {
    pub id: Option<String>,
    pub display_name: Option<LocalizedText>,
    pub primary_type_display_name: Option<LocalizedText>,
    pub business_status: Option<BusinessStatus>,

    pub formatted_address: Option<String>,
    pub short_formatted_address: Option<String>,
    pub google_maps_uri: Option<String>,

    pub national_phone_number: Option<String>,
    pub website_uri: Option<String>,

    pub regular_opening_hours: Option<OpeningHours>,

    pub accessibility_options: Option<AccessibilityOptions>,
    pub parking_options: Option<ParkingOptions>,
    pub payment_options: Option<PaymentOptions>,

    pub menu_for_children: Option<bool>,
    pub serves_coffee: Option<bool>,
    pub serves_beer: Option<bool>,
    pub serves_wine: Option<bool>,
    pub serves_cocktails: Option<bool>,
    pub serves_breakfast: Option<bool>,
    pub serves_brunch: Option<bool>,
    pub serves_lunch: Option<bool>,
    pub serves_dinner: Option<bool>,
    pub serves_dessert: Option<bool>,
    pub serves_vegetarian_food: Option<bool>,

    pub restroom: Option<bool>,
    pub outdoor_seating: Option<bool>,
    pub live_music: Option<bool>,
    pub allows_dogs: Option<bool>,

    pub takeout: Option<bool>,
    pub delivery: Option<bool>,
    pub dine_in: Option<bool>,
    pub reservable: Option<bool>,

    pub good_for_children: Option<bool>,
    pub good_for_groups: Option<bool>,
    pub good_for_watching_sports: Option<bool>,

    pub price_level: Option<PriceLevel>,
    pub price_range: Option<PriceRange>,

    pub editorial_summary: Option<LocalizedText>,
    pub pure_service_area_business: Option<bool>,
    pub photos: Vec<Photo>,

    pub rating: Option<f64>,
    pub user_rating_count: Option<u32>,
    pub reviews: Vec<Review>,
}

/// Text with the language it was localized to.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LocalizedText {
    pub text: Option<String>,
    pub language_code: Option<String>,
}

impl LocalizedText {
    /// The text, or `None` when it is absent or empty.
    #[must_use]
    pub fn non_empty(&self) -> Option<&str> {
        self.text.as_deref().filter(|t| !t.is_empty())
    }
}

/// Operating state of a business.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum BusinessStatus {
    Operational,
    ClosedTemporarily,
    ClosedPermanently,
    Other(String),
}

impl From<String> for BusinessStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "OPERATIONAL" => Self::Operational,
            "CLOSED_TEMPORARILY" => Self::ClosedTemporarily,
            "CLOSED_PERMANENTLY" => Self::ClosedPermanently,
            _ => Self::Other(raw),
        }
    }
}

impl BusinessStatus {
    /// The wire value this status was decoded from.
    #[must_use]
    pub fn as_api_str(&self) -> &str {
        match self {
            Self::Operational => "OPERATIONAL",
            Self::ClosedTemporarily => "CLOSED_TEMPORARILY",
            Self::ClosedPermanently => "CLOSED_PERMANENTLY",
            Self::Other(raw) => raw,
        }
    }
}

/// Coarse price bracket reported by the API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum PriceLevel {
    Unspecified,
    Free,
    Inexpensive,
    Moderate,
    Expensive,
    VeryExpensive,
    Other(String),
}

impl From<String> for PriceLevel {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "PRICE_LEVEL_UNSPECIFIED" => Self::Unspecified,
            "PRICE_LEVEL_FREE" => Self::Free,
            "PRICE_LEVEL_INEXPENSIVE" => Self::Inexpensive,
            "PRICE_LEVEL_MODERATE" => Self::Moderate,
            "PRICE_LEVEL_EXPENSIVE" => Self::Expensive,
            "PRICE_LEVEL_VERY_EXPENSIVE" => Self::VeryExpensive,
            _ => Self::Other(raw),
        }
    }
}

/// `regularOpeningHours`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OpeningHours {
    pub open_now: Option<bool>,
    pub periods: Vec<Period>,
    pub weekday_descriptions: Vec<String>,
}

/// One weekly opening period. A missing `close` means open until midnight.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Period {
    pub open: Option<Point>,
    pub close: Option<Point>,
}

/// A point in the week. `day` runs 0..=6 starting on Sunday.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default)]
pub struct Point {
    pub day: Option<u8>,
    pub hour: Option<u8>,
    pub minute: Option<u8>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AccessibilityOptions {
    pub wheelchair_accessible_parking: Option<bool>,
    pub wheelchair_accessible_entrance: Option<bool>,
    pub wheelchair_accessible_restroom: Option<bool>,
    pub wheelchair_accessible_seating: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ParkingOptions {
    pub free_parking_lot: Option<bool>,
    pub paid_parking_lot: Option<bool>,
    pub free_street_parking: Option<bool>,
    pub paid_street_parking: Option<bool>,
    pub valet_parking: Option<bool>,
    pub free_garage_parking: Option<bool>,
    pub paid_garage_parking: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PaymentOptions {
    pub accepts_credit_cards: Option<bool>,
    pub accepts_debit_cards: Option<bool>,
    pub accepts_cash_only: Option<bool>,
    pub accepts_nfc: Option<bool>,
}

/// `priceRange`. Either bound may be missing.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PriceRange {
    pub start_price: Option<Money>,
    pub end_price: Option<Money>,
}

/// `google.type.Money`. `units` is an int64 and arrives as a JSON string.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Money {
    pub currency_code: Option<String>,
    #[serde(deserialize_with = "de_opt_i64")]
    pub units: Option<i64>,
    pub nanos: Option<i32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Photo {
    pub name: Option<String>,
    pub width_px: Option<u32>,
    pub height_px: Option<u32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Review {
    pub author_attribution: Option<AuthorAttribution>,
    pub rating: Option<f64>,
    pub text: Option<LocalizedText>,
    /// `None` when absent or unparseable; one bad timestamp does not fail
    /// the whole place.
    #[serde(deserialize_with = "de_lenient_publish_time")]
    pub publish_time: Option<PublishTime>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AuthorAttribution {
    pub display_name: Option<String>,
    pub uri: Option<String>,
    pub photo_uri: Option<String>,
}

/// Review publish time as seconds since the Unix epoch.
///
/// The REST API sends an RFC 3339 string; protobuf-style JSON sends
/// `{"seconds": "..."}`. Both decode to the same value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawPublishTime")]
pub struct PublishTime {
    pub seconds: i64,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawPublishTime {
    Rfc3339(String),
    Seconds { seconds: StringOrInt },
}

impl TryFrom<RawPublishTime> for PublishTime {
    type Error = String;

    fn try_from(raw: RawPublishTime) -> Result<Self, Self::Error> {
        let seconds = match raw {
            RawPublishTime::Rfc3339(s) => DateTime::parse_from_rfc3339(&s)
                .map_err(|e| format!("invalid publishTime '{s}': {e}"))?
                .timestamp(),
            RawPublishTime::Seconds { seconds } => seconds.into_i64()?,
        };
        Ok(Self { seconds })
    }
}

/// int64 values are strings in proto JSON but plain numbers elsewhere.
#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrInt {
    Int(i64),
    Str(String),
}

impl StringOrInt {
    fn into_i64(self) -> Result<i64, String> {
        match self {
            Self::Int(n) => Ok(n),
            Self::Str(s) => s
                .trim()
                .parse::<i64>()
                .map_err(|e| format!("invalid integer '{s}': {e}")),
        }
    }
}

fn de_opt_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<StringOrInt>::deserialize(deserializer)?
        .map(StringOrInt::into_i64)
        .transpose()
        .map_err(serde::de::Error::custom)
}

fn de_lenient_publish_time<'de, D>(deserializer: D) -> Result<Option<PublishTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = Option::<serde_json::Value>::deserialize(deserializer)? else {
        return Ok(None);
    };
    match PublishTime::deserialize(&raw) {
        Ok(time) => Ok(Some(time)),
        Err(e) => {
            tracing::debug!(error = %e, value = %raw, "ignoring unparseable publishTime");
            Ok(None)
        }
    }
}

// ---------------------------------------------------------------------------
// Error envelope
// ---------------------------------------------------------------------------

/// Body of a non-2xx response: `{"error": {"code", "message", "status"}}`.
#[derive(Debug, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub code: u16,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub status: Option<String>,
}
