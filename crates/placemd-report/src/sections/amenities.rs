//! `# その他情報`: accessibility, opening hours, menu, facilities, usage,
//! recommendations, pricing, and the editorial/business-type notes.

use placemd_places::{AccessibilityOptions, ParkingOptions, PaymentOptions, Period, PlaceDetails};

use super::{
    any_flag_set, fact, heading_line, paragraph, render_flags, render_section, Flag, Subsection,
};
use crate::labels::{price_level_label, WEEKDAYS};

const HEADING: &str = "その他情報";

const ROWS: &[Subsection<PlaceDetails>] = &[
    Subsection {
        present: has_accessibility,
        render: render_accessibility,
    },
    Subsection {
        present: has_opening_hours,
        render: render_opening_hours,
    },
    Subsection {
        present: has_menu,
        render: render_menu,
    },
    Subsection {
        present: has_facility,
        render: render_facility,
    },
    Subsection {
        present: has_usage,
        render: render_usage,
    },
    Subsection {
        present: has_recommendation,
        render: render_recommendation,
    },
    Subsection {
        present: has_price,
        render: render_price,
    },
    Subsection {
        present: has_editorial_summary,
        render: render_editorial_summary,
    },
    Subsection {
        present: is_service_area_only,
        render: render_service_area,
    },
    Subsection {
        present: has_photos,
        render: render_photos,
    },
];

const ACCESSIBILITY_FLAGS: &[Flag<AccessibilityOptions>] = &[
    Flag {
        get: |a: &AccessibilityOptions| a.wheelchair_accessible_parking,
        label: "車椅子対応駐車場",
        value: "あり",
    },
    Flag {
        get: |a: &AccessibilityOptions| a.wheelchair_accessible_entrance,
        label: "車椅子対応入口",
        value: "あり",
    },
    Flag {
        get: |a: &AccessibilityOptions| a.wheelchair_accessible_restroom,
        label: "車椅子対応トイレ",
        value: "あり",
    },
    Flag {
        get: |a: &AccessibilityOptions| a.wheelchair_accessible_seating,
        label: "車椅子対応座席",
        value: "あり",
    },
];

const MENU_FLAGS: &[Flag<PlaceDetails>] = &[
    Flag {
        get: |p: &PlaceDetails| p.menu_for_children,
        label: "子供向けメニュー",
        value: "あり",
    },
    Flag {
        get: |p: &PlaceDetails| p.serves_coffee,
        label: "コーヒー",
        value: "あり",
    },
    Flag {
        get: |p: &PlaceDetails| p.serves_beer,
        label: "ビール",
        value: "あり",
    },
    Flag {
        get: |p: &PlaceDetails| p.serves_wine,
        label: "ワイン",
        value: "あり",
    },
    Flag {
        get: |p: &PlaceDetails| p.serves_cocktails,
        label: "カクテル",
        value: "あり",
    },
    Flag {
        get: |p: &PlaceDetails| p.serves_breakfast,
        label: "朝食",
        value: "あり",
    },
    Flag {
        get: |p: &PlaceDetails| p.serves_brunch,
        label: "ブランチ",
        value: "あり",
    },
    Flag {
        get: |p: &PlaceDetails| p.serves_lunch,
        label: "ランチ",
        value: "あり",
    },
    Flag {
        get: |p: &PlaceDetails| p.serves_dinner,
        label: "ディナー",
        value: "あり",
    },
    Flag {
        get: |p: &PlaceDetails| p.serves_dessert,
        label: "デザート",
        value: "あり",
    },
    Flag {
        get: |p: &PlaceDetails| p.serves_vegetarian_food,
        label: "ベジタリアンメニュー",
        value: "あり",
    },
];

/// Parking kinds in display order.
const PARKING_FLAGS: &[Flag<ParkingOptions>] = &[
    Flag {
        get: |p: &ParkingOptions| p.free_parking_lot,
        label: "無料駐車場",
        value: "あり",
    },
    Flag {
        get: |p: &ParkingOptions| p.paid_parking_lot,
        label: "有料駐車場",
        value: "あり",
    },
    Flag {
        get: |p: &ParkingOptions| p.free_street_parking,
        label: "無料路上駐車",
        value: "あり",
    },
    Flag {
        get: |p: &ParkingOptions| p.paid_street_parking,
        label: "有料路上駐車",
        value: "あり",
    },
    Flag {
        get: |p: &ParkingOptions| p.valet_parking,
        label: "バレーパーキング",
        value: "あり",
    },
    Flag {
        get: |p: &ParkingOptions| p.free_garage_parking,
        label: "無料立体駐車場",
        value: "あり",
    },
    Flag {
        get: |p: &ParkingOptions| p.paid_garage_parking,
        label: "有料立体駐車場",
        value: "あり",
    },
];

/// Payment methods in display order.
const PAYMENT_FLAGS: &[Flag<PaymentOptions>] = &[
    Flag {
        get: |p: &PaymentOptions| p.accepts_credit_cards,
        label: "クレジットカード",
        value: "利用可",
    },
    Flag {
        get: |p: &PaymentOptions| p.accepts_debit_cards,
        label: "デビットカード",
        value: "利用可",
    },
    Flag {
        get: |p: &PaymentOptions| p.accepts_cash_only,
        label: "現金",
        value: "利用可",
    },
    Flag {
        get: |p: &PaymentOptions| p.accepts_nfc,
        label: "非接触決済",
        value: "利用可",
    },
];

const FACILITY_FLAGS: &[Flag<PlaceDetails>] = &[
    Flag {
        get: |p: &PlaceDetails| p.restroom,
        label: "トイレ",
        value: "あり",
    },
    Flag {
        get: |p: &PlaceDetails| p.outdoor_seating,
        label: "テラス席",
        value: "あり",
    },
    Flag {
        get: |p: &PlaceDetails| p.live_music,
        label: "生演奏",
        value: "あり",
    },
    Flag {
        get: |p: &PlaceDetails| p.allows_dogs,
        label: "犬の同伴",
        value: "可能",
    },
];

const USAGE_FLAGS: &[Flag<PlaceDetails>] = &[
    Flag {
        get: |p: &PlaceDetails| p.takeout,
        label: "テイクアウト",
        value: "可能",
    },
    Flag {
        get: |p: &PlaceDetails| p.delivery,
        label: "デリバリー",
        value: "あり",
    },
    Flag {
        get: |p: &PlaceDetails| p.dine_in,
        label: "店内飲食",
        value: "可能",
    },
    Flag {
        get: |p: &PlaceDetails| p.reservable,
        label: "予約",
        value: "可能",
    },
];

const RECOMMENDATION_FLAGS: &[Flag<PlaceDetails>] = &[
    Flag {
        get: |p: &PlaceDetails| p.good_for_children,
        label: "お子様連れ",
        value: "おすすめ",
    },
    Flag {
        get: |p: &PlaceDetails| p.good_for_groups,
        label: "グループ利用",
        value: "おすすめ",
    },
    Flag {
        get: |p: &PlaceDetails| p.good_for_watching_sports,
        label: "スポーツ観戦",
        value: "おすすめ",
    },
];

/// Appends the amenities/hours/pricing section to `out`.
pub fn render_amenities(place: &PlaceDetails, out: &mut String) {
    render_section(HEADING, ROWS, place, out);
}

/// Formats one opening period as `月曜日: 09:00 - 18:00`.
///
/// Returns `None` when the period has no opening point or its day is outside
/// 0..=6. A missing close point, or one without an hour, shows as `24:00`.
#[must_use]
pub fn format_period(period: &Period) -> Option<String> {
    let open = period.open?;
    let day = WEEKDAYS.get(usize::from(open.day?))?;
    let (close_hour, close_minute) = period
        .close
        .and_then(|close| close.hour.map(|hour| (hour, close.minute.unwrap_or(0))))
        .unwrap_or((24, 0));

    Some(format!(
        "{day}曜日: {:02}:{:02} - {close_hour:02}:{close_minute:02}",
        open.hour.unwrap_or(0),
        open.minute.unwrap_or(0),
    ))
}

fn has_accessibility(place: &PlaceDetails) -> bool {
    place
        .accessibility_options
        .as_ref()
        .is_some_and(|a| any_flag_set(ACCESSIBILITY_FLAGS, a))
}

fn render_accessibility(place: &PlaceDetails, out: &mut String) {
    heading_line(out, 2, "バリアフリー情報");
    if let Some(options) = &place.accessibility_options {
        render_flags(ACCESSIBILITY_FLAGS, options, out);
    }
}

fn opening_lines(place: &PlaceDetails) -> Vec<String> {
    place
        .regular_opening_hours
        .as_ref()
        .map(|hours| hours.periods.iter().filter_map(format_period).collect())
        .unwrap_or_default()
}

fn has_opening_hours(place: &PlaceDetails) -> bool {
    !opening_lines(place).is_empty()
}

fn render_opening_hours(place: &PlaceDetails, out: &mut String) {
    heading_line(out, 2, "営業時間");
    for line in opening_lines(place) {
        out.push_str(&line);
        out.push('\n');
    }
    out.push('\n');
}

fn has_menu(place: &PlaceDetails) -> bool {
    any_flag_set(MENU_FLAGS, place)
}

fn render_menu(place: &PlaceDetails, out: &mut String) {
    heading_line(out, 2, "メニュー情報");
    render_flags(MENU_FLAGS, place, out);
}

fn has_parking(place: &PlaceDetails) -> bool {
    place
        .parking_options
        .as_ref()
        .is_some_and(|p| any_flag_set(PARKING_FLAGS, p))
}

fn has_payment(place: &PlaceDetails) -> bool {
    place
        .payment_options
        .as_ref()
        .is_some_and(|p| any_flag_set(PAYMENT_FLAGS, p))
}

fn has_facility(place: &PlaceDetails) -> bool {
    has_parking(place) || has_payment(place) || any_flag_set(FACILITY_FLAGS, place)
}

fn render_facility(place: &PlaceDetails, out: &mut String) {
    heading_line(out, 2, "設備・サービス");
    // Plain flags go before the ### blocks so none land under 支払い方法.
    render_flags(FACILITY_FLAGS, place, out);

    if let Some(parking) = place.parking_options.as_ref().filter(|_| has_parking(place)) {
        heading_line(out, 3, "駐車場");
        render_flags(PARKING_FLAGS, parking, out);
    }
    if let Some(payment) = place.payment_options.as_ref().filter(|_| has_payment(place)) {
        heading_line(out, 3, "支払い方法");
        render_flags(PAYMENT_FLAGS, payment, out);
    }
}

fn has_usage(place: &PlaceDetails) -> bool {
    any_flag_set(USAGE_FLAGS, place)
}

fn render_usage(place: &PlaceDetails, out: &mut String) {
    heading_line(out, 2, "利用形態");
    render_flags(USAGE_FLAGS, place, out);
}

fn has_recommendation(place: &PlaceDetails) -> bool {
    any_flag_set(RECOMMENDATION_FLAGS, place)
}

fn render_recommendation(place: &PlaceDetails, out: &mut String) {
    heading_line(out, 2, "おすすめ用途");
    render_flags(RECOMMENDATION_FLAGS, place, out);
}

fn price_level_text(place: &PlaceDetails) -> Option<&str> {
    place
        .price_level
        .as_ref()
        .map(price_level_label)
        .filter(|label| !label.is_empty())
}

fn has_price(place: &PlaceDetails) -> bool {
    price_level_text(place).is_some() || place.price_range.is_some()
}

fn render_price(place: &PlaceDetails, out: &mut String) {
    heading_line(out, 2, "価格帯");
    if let Some(label) = price_level_text(place) {
        fact(out, "価格帯", label);
    }
    if let Some(range) = &place.price_range {
        let min = range
            .start_price
            .as_ref()
            .and_then(|m| m.units)
            .unwrap_or(0);
        let max = range
            .end_price
            .as_ref()
            .and_then(|m| m.units)
            .filter(|units| *units != 0)
            .map_or_else(|| "不明".to_string(), |units| format!("{units}円"));
        fact(out, "価格範囲", &format!("{min}円 - {max}"));
    }
}

fn editorial_summary(place: &PlaceDetails) -> Option<&str> {
    place.editorial_summary.as_ref().and_then(|t| t.non_empty())
}

fn has_editorial_summary(place: &PlaceDetails) -> bool {
    editorial_summary(place).is_some()
}

fn render_editorial_summary(place: &PlaceDetails, out: &mut String) {
    heading_line(out, 2, "編集者によるコメント");
    if let Some(summary) = editorial_summary(place) {
        paragraph(out, summary);
    }
}

fn is_service_area_only(place: &PlaceDetails) -> bool {
    place.pure_service_area_business == Some(true)
}

fn render_service_area(_place: &PlaceDetails, out: &mut String) {
    heading_line(out, 2, "ビジネス形態");
    fact(out, "非店舗型ビジネス", "はい");
}

fn has_photos(place: &PlaceDetails) -> bool {
    !place.photos.is_empty()
}

fn render_photos(place: &PlaceDetails, out: &mut String) {
    heading_line(out, 2, "写真");
    fact(out, "投稿写真", &format!("{}件", place.photos.len()));
}
