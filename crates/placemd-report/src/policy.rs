//! Which reviews the report shows, and in what order.

use std::fmt;
use std::str::FromStr;

use placemd_places::Review;

/// Ratings at or above this are always kept by [`ReviewPolicy::RatingTiered`].
pub const HIGH_RATING_THRESHOLD: f64 = 4.0;

/// At most this many reviews below the threshold are kept by
/// [`ReviewPolicy::RatingTiered`].
pub const LOW_RATED_CAP: usize = 5;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReviewPolicy {
    /// Every review, in the order the API returned them.
    #[default]
    ArrivalOrder,
    /// Reviews with a non-blank body only, sorted by rating descending. All
    /// 4–5 star reviews are kept; lower-rated ones are capped at
    /// [`LOW_RATED_CAP`].
    RatingTiered,
}

impl ReviewPolicy {
    /// Applies the policy to `reviews`.
    #[must_use]
    pub fn select<'a>(self, reviews: &'a [Review]) -> Vec<&'a Review> {
        match self {
            Self::ArrivalOrder => reviews.iter().collect(),
            Self::RatingTiered => {
                let mut kept: Vec<&Review> =
                    reviews.iter().filter(|r| has_body(r)).collect();
                // Stable sort: equal ratings keep arrival order.
                kept.sort_by(|a, b| rating_of(b).total_cmp(&rating_of(a)));
                let (high, low): (Vec<&Review>, Vec<&Review>) = kept
                    .into_iter()
                    .partition(|r| rating_of(r) >= HIGH_RATING_THRESHOLD);
                high.into_iter()
                    .chain(low.into_iter().take(LOW_RATED_CAP))
                    .collect()
            }
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ArrivalOrder => "arrival-order",
            Self::RatingTiered => "rating-tiered",
        }
    }
}

impl fmt::Display for ReviewPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReviewPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "arrival-order" => Ok(Self::ArrivalOrder),
            "rating-tiered" => Ok(Self::RatingTiered),
            other => Err(format!(
                "unknown review policy '{other}' (expected arrival-order or rating-tiered)"
            )),
        }
    }
}

fn rating_of(review: &Review) -> f64 {
    review.rating.unwrap_or(0.0)
}

fn has_body(review: &Review) -> bool {
    review
        .text
        .as_ref()
        .and_then(|t| t.text.as_deref())
        .is_some_and(|t| !t.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use placemd_places::LocalizedText;

    use super::*;

    fn review(rating: f64, body: &str) -> Review {
        Review {
            rating: Some(rating),
            text: Some(LocalizedText {
                text: Some(body.to_string()),
                language_code: None,
            }),
            ..Review::default()
        }
    }

    fn bodies(selected: &[&Review]) -> Vec<String> {
        selected
            .iter()
            .map(|r| r.text.as_ref().and_then(|t| t.text.clone()).unwrap_or_default())
            .collect()
    }

    #[test]
    fn arrival_order_keeps_everything_in_place() {
        let reviews = vec![review(2.0, "b"), review(5.0, "a"), review(3.0, "  ")];
        let selected = ReviewPolicy::ArrivalOrder.select(&reviews);
        assert_eq!(bodies(&selected), vec!["b", "a", "  "]);
    }

    #[test]
    fn rating_tiered_sorts_descending_and_drops_blank_bodies() {
        let reviews = vec![
            review(3.0, "ok"),
            review(5.0, "great"),
            review(4.0, "   "),
            review(4.0, "good"),
        ];
        let selected = ReviewPolicy::RatingTiered.select(&reviews);
        assert_eq!(bodies(&selected), vec!["great", "good", "ok"]);
    }

    #[test]
    fn rating_tiered_caps_low_rated_reviews() {
        let mut reviews: Vec<Review> = (0..8).map(|i| review(2.0, &format!("low {i}"))).collect();
        reviews.extend((0..7).map(|i| review(5.0, &format!("high {i}"))));

        let selected = ReviewPolicy::RatingTiered.select(&reviews);
        let high = selected.iter().filter(|r| rating_of(r) >= 4.0).count();
        let low = selected.len() - high;
        assert_eq!(high, 7);
        assert_eq!(low, LOW_RATED_CAP);
        assert_eq!(bodies(&selected)[7], "low 0");
    }

    #[test]
    fn rating_tiered_treats_missing_text_as_blank() {
        let reviews = vec![Review {
            rating: Some(5.0),
            ..Review::default()
        }];
        assert!(ReviewPolicy::RatingTiered.select(&reviews).is_empty());
    }

    #[test]
    fn parses_and_displays_policy_names() {
        for policy in [ReviewPolicy::ArrivalOrder, ReviewPolicy::RatingTiered] {
            assert_eq!(policy.to_string().parse::<ReviewPolicy>(), Ok(policy));
        }
        assert!("newest-first".parse::<ReviewPolicy>().is_err());
    }
}
