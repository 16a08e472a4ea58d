//! Catalog of the place fields requested from the detail endpoint.
//!
//! The catalog is the single source for the `X-Goog-FieldMask` header and
//! lists every field the markdown report knows how to render.

/// One requestable place field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// API field name as used in the field mask.
    pub field: &'static str,
    /// Human-readable label.
    pub description: &'static str,
    /// Usage note for whoever reads the report.
    pub memo: Option<&'static str>,
}

const fn spec(field: &'static str, description: &'static str) -> FieldSpec {
    FieldSpec {
        field,
        description,
        memo: None,
    }
}

const fn spec_with_memo(
    field: &'static str,
    description: &'static str,
    memo: &'static str,
) -> FieldSpec {
    FieldSpec {
        field,
        description,
        memo: Some(memo),
    }
}

/// Every field the report may consult, in field-mask order.
pub const FIELD_CATALOG: &[FieldSpec] = &[
    spec("accessibilityOptions", "ユーザー補助機能の設定"),
    spec("allowsDogs", "犬の同伴可能"),
    spec_with_memo(
        "businessStatus",
        "ビジネスのステータス",
        "閉業になってたらアプローチしない",
    ),
    spec("delivery", "配信"),
    spec("dineIn", "イートイン"),
    spec("displayName", "表示名"),
    spec("editorialSummary", "編集者による概要"),
    spec("formattedAddress", "フォーマット済み住所"),
    spec("goodForChildren", "子供におすすめ"),
    spec("goodForGroups", "グループにおすすめ"),
    spec("goodForWatchingSports", "スポーツ観戦向き"),
    spec_with_memo("googleMapsUri", "Google マップの URI", "Map表示に使用する"),
    spec("id", "プレイス ID"),
    spec("liveMusic", "生演奏が楽しめるお店"),
    spec("menuForChildren", "子供向けメニュー"),
    spec("nationalPhoneNumber", "国内の電話番号"),
    spec("outdoorSeating", "テラス席があるお店"),
    spec("parkingOptions", "駐車場の種類"),
    spec("paymentOptions", "支払い方法"),
    spec_with_memo(
        "photos",
        "写真",
        "最大10件。誰でも投稿できるものなのでWEBサイトに使うのはよろしくない",
    ),
    spec("priceLevel", "価格帯"),
    spec("priceRange", "価格帯"),
    spec_with_memo(
        "primaryTypeDisplayName",
        "メインのタイプの表示名",
        "text ex: 企業のオフィス",
    ),
    spec("pureServiceAreaBusiness", "非店舗型ビジネス"),
    spec("rating", "評価"),
    spec("regularOpeningHours", "通常営業時間"),
    spec("reservable", "予約可能"),
    spec("restroom", "トイレ"),
    spec("reviews", "レビュー"),
    spec("servesBeer", "ビールを出すお店"),
    spec("servesBreakfast", "モーニング サービスがあるお店"),
    spec("servesBrunch", "ブランチ メニューあり"),
    spec("servesCocktails", "カクテルあり"),
    spec("servesCoffee", "コーヒーあり"),
    spec("servesDessert", "デザートあり"),
    spec("servesDinner", "ディナー メニューがあるお店"),
    spec("servesLunch", "ランチメニューがあるお店"),
    spec("servesVegetarianFood", "ベジタリアン料理あり"),
    spec("servesWine", "ワインを出すお店"),
    spec("shortFormattedAddress", "短いフォーマット済み住所"),
    spec("takeout", "テイクアウト"),
    spec("userRatingCount", "ユーザーの評価の数"),
    spec_with_memo(
        "websiteUri",
        "ウェブサイトの URI",
        "ここがinstagramとかなら見込み顧客",
    ),
];

/// Joins the field names into a comma-separated `X-Goog-FieldMask` value.
#[must_use]
pub fn field_mask(fields: &[FieldSpec]) -> String {
    fields
        .iter()
        .map(|f| f.field)
        .collect::<Vec<_>>()
        .join(",")
}

/// Looks up a catalog entry by API field name.
#[must_use]
pub fn find_field(name: &str) -> Option<&'static FieldSpec> {
    FIELD_CATALOG.iter().find(|f| f.field == name)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn catalog_field_names_are_unique() {
        let mut seen = HashSet::new();
        for entry in FIELD_CATALOG {
            assert!(seen.insert(entry.field), "duplicate field {}", entry.field);
        }
    }

    #[test]
    fn catalog_entries_have_descriptions() {
        for entry in FIELD_CATALOG {
            assert!(!entry.description.is_empty(), "{} has no label", entry.field);
        }
    }

    #[test]
    fn field_mask_joins_with_commas() {
        let mask = field_mask(&[spec("id", "a"), spec("displayName", "b")]);
        assert_eq!(mask, "id,displayName");
    }

    #[test]
    fn field_mask_of_full_catalog_has_no_spaces() {
        let mask = field_mask(FIELD_CATALOG);
        assert!(!mask.contains(' '));
        assert_eq!(mask.split(',').count(), FIELD_CATALOG.len());
    }

    #[test]
    fn photos_entry_carries_usage_memo() {
        let photos = find_field("photos").expect("photos should be cataloged");
        assert!(photos.memo.is_some_and(|m| m.contains("最大10件")));
        assert!(find_field("notAField").is_none());
    }
}
