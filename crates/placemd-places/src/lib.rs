//! Client and response model for the Google Places API (New).
//!
//! [`PlacesClient`] performs the two lookups the report needs: a text search
//! that resolves a free-text name to a place id, and a detail fetch limited to
//! the fields in [`FIELD_CATALOG`].

pub mod client;
pub mod error;
pub mod fields;
pub mod types;

pub use client::PlacesClient;
pub use error::PlacesError;
pub use fields::{field_mask, find_field, FieldSpec, FIELD_CATALOG};
pub use types::{
    AccessibilityOptions, AuthorAttribution, BusinessStatus, LocalizedText, Money,
    OpeningHours, ParkingOptions, PaymentOptions, Period, Photo, PlaceDetails, PlaceSummary,
    Point, PriceLevel, PriceRange, PublishTime, Review,
};
