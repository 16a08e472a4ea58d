//! `# レビュー情報`: aggregate rating, review count, and the review list.

use chrono::{DateTime, FixedOffset};
use placemd_places::{PlaceDetails, Review};

use super::{fact, heading_line, paragraph, render_section, Subsection};
use crate::ReportOptions;

const HEADING: &str = "レビュー情報";
const RULE: &str = "---\n\n";

struct ReviewContext<'a> {
    place: &'a PlaceDetails,
    options: &'a ReportOptions,
}

/// Appends the ratings/reviews section to `out`.
///
/// Reviews are chosen and ordered by `options.review_policy`. A horizontal
/// rule separates consecutive reviews that rendered something; reviews with
/// nothing to show are skipped without leaving a stray rule.
pub fn render_reviews(place: &PlaceDetails, options: &ReportOptions, out: &mut String) {
    let ctx = ReviewContext { place, options };
    let rows: [Subsection<ReviewContext<'_>>; 3] = [
        Subsection {
            present: has_rating,
            render: render_rating,
        },
        Subsection {
            present: has_rating_count,
            render: render_rating_count,
        },
        Subsection {
            present: has_review_list,
            render: render_review_list,
        },
    ];
    render_section(HEADING, &rows, &ctx, out);
}

/// Formats an epoch timestamp as a calendar date (`2023/11/15`) in `offset`.
///
/// Time of day is dropped. Returns `None` for timestamps chrono cannot
/// represent.
#[must_use]
pub fn format_publish_date(seconds: i64, offset: FixedOffset) -> Option<String> {
    let utc = DateTime::from_timestamp(seconds, 0)?;
    Some(utc.with_timezone(&offset).format("%Y/%-m/%-d").to_string())
}

fn positive_rating(place: &PlaceDetails) -> Option<f64> {
    place.rating.filter(|r| *r > 0.0)
}

fn has_rating(ctx: &ReviewContext<'_>) -> bool {
    positive_rating(ctx.place).is_some()
}

fn render_rating(ctx: &ReviewContext<'_>, out: &mut String) {
    if let Some(rating) = positive_rating(ctx.place) {
        fact(out, "評価", &format!("{rating}点"));
    }
}

fn positive_count(place: &PlaceDetails) -> Option<u32> {
    place.user_rating_count.filter(|c| *c > 0)
}

fn has_rating_count(ctx: &ReviewContext<'_>) -> bool {
    positive_count(ctx.place).is_some()
}

fn render_rating_count(ctx: &ReviewContext<'_>, out: &mut String) {
    if let Some(count) = positive_count(ctx.place) {
        fact(out, "レビュー数", &format!("{count}件"));
    }
}

/// Rendered blocks for the selected reviews, empty blocks removed.
fn review_blocks(ctx: &ReviewContext<'_>) -> Vec<String> {
    ctx.options
        .review_policy
        .select(&ctx.place.reviews)
        .into_iter()
        .map(|review| render_review(review, ctx.options.utc_offset))
        .filter(|block| !block.is_empty())
        .collect()
}

fn has_review_list(ctx: &ReviewContext<'_>) -> bool {
    !review_blocks(ctx).is_empty()
}

fn render_review_list(ctx: &ReviewContext<'_>, out: &mut String) {
    heading_line(out, 2, "レビュー一覧");
    out.push_str(&review_blocks(ctx).join(RULE));
}

fn render_review(review: &Review, offset: FixedOffset) -> String {
    let mut block = String::new();

    if let Some(author) = review
        .author_attribution
        .as_ref()
        .and_then(|a| a.display_name.as_deref())
        .filter(|name| !name.is_empty())
    {
        heading_line(&mut block, 3, author);
    }
    if let Some(rating) = review.rating.filter(|r| *r > 0.0) {
        fact(&mut block, "評価", &format!("{rating}点"));
    }
    if let Some(body) = review.text.as_ref().and_then(|t| t.non_empty()) {
        paragraph(&mut block, body);
    }
    if let Some(date) = review
        .publish_time
        .map(|t| t.seconds)
        .filter(|s| *s != 0)
        .and_then(|s| format_publish_date(s, offset))
    {
        fact(&mut block, "投稿日時", &date);
    }

    block
}
