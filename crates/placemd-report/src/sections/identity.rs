//! `# 基本情報`: name, type and status, then location, contact, and the
//! place id last.

use placemd_places::{BusinessStatus, PlaceDetails};

use super::{fact, heading_line, non_empty, render_section, Subsection};
use crate::labels::business_status_label;

const HEADING: &str = "基本情報";

const ROWS: &[Subsection<PlaceDetails>] = &[
    Subsection {
        present: has_basic_info,
        render: render_basic_info,
    },
    Subsection {
        present: has_location,
        render: render_location,
    },
    Subsection {
        present: has_contact,
        render: render_contact,
    },
    Subsection {
        present: has_place_id,
        render: render_place_id,
    },
];

/// Appends the identity/location/contact section to `out`.
pub fn render_identity(place: &PlaceDetails, out: &mut String) {
    render_section(HEADING, ROWS, place, out);
}

fn display_name(place: &PlaceDetails) -> Option<&str> {
    place.display_name.as_ref().and_then(|t| t.non_empty())
}

fn primary_type(place: &PlaceDetails) -> Option<&str> {
    place
        .primary_type_display_name
        .as_ref()
        .and_then(|t| t.non_empty())
}

fn business_status(place: &PlaceDetails) -> Option<&BusinessStatus> {
    place
        .business_status
        .as_ref()
        .filter(|s| !s.as_api_str().is_empty())
}

fn has_basic_info(place: &PlaceDetails) -> bool {
    display_name(place).is_some()
        || primary_type(place).is_some()
        || business_status(place).is_some()
}

fn render_basic_info(place: &PlaceDetails, out: &mut String) {
    if let Some(name) = display_name(place) {
        fact(out, "店舗名", name);
    }
    if let Some(kind) = primary_type(place) {
        fact(out, "業種", kind);
    }
    if let Some(status) = business_status(place) {
        fact(out, "営業状態", business_status_label(status));
    }
}

fn has_location(place: &PlaceDetails) -> bool {
    non_empty(place.formatted_address.as_ref()).is_some()
        || non_empty(place.short_formatted_address.as_ref()).is_some()
        || non_empty(place.google_maps_uri.as_ref()).is_some()
}

fn render_location(place: &PlaceDetails, out: &mut String) {
    heading_line(out, 2, "所在地情報");
    if let Some(address) = non_empty(place.formatted_address.as_ref()) {
        fact(out, "詳細住所", address);
    }
    if let Some(address) = non_empty(place.short_formatted_address.as_ref()) {
        fact(out, "簡易住所", address);
    }
    if let Some(uri) = non_empty(place.google_maps_uri.as_ref()) {
        fact(out, "地図を見る", uri);
    }
}

fn has_contact(place: &PlaceDetails) -> bool {
    non_empty(place.national_phone_number.as_ref()).is_some()
        || non_empty(place.website_uri.as_ref()).is_some()
}

fn render_contact(place: &PlaceDetails, out: &mut String) {
    heading_line(out, 2, "連絡先");
    if let Some(phone) = non_empty(place.national_phone_number.as_ref()) {
        fact(out, "電話番号", phone);
    }
    if let Some(uri) = non_empty(place.website_uri.as_ref()) {
        fact(out, "ウェブサイト", uri);
    }
}

fn has_place_id(place: &PlaceDetails) -> bool {
    non_empty(place.id.as_ref()).is_some()
}

fn render_place_id(place: &PlaceDetails, out: &mut String) {
    heading_line(out, 2, "システム情報");
    if let Some(id) = non_empty(place.id.as_ref()) {
        fact(out, "プレイスID", id);
    }
}

#[cfg(test)]
mod tests {
    use placemd_places::LocalizedText;

    use super::*;

    fn render(place: &PlaceDetails) -> String {
        let mut out = String::new();
        render_identity(place, &mut out);
        out
    }

    fn text(value: &str) -> Option<LocalizedText> {
        Some(LocalizedText {
            text: Some(value.to_string()),
            language_code: Some("ja".to_string()),
        })
    }

    #[test]
    fn empty_place_renders_nothing() {
        assert_eq!(render(&PlaceDetails::default()), "");
    }

    #[test]
    fn empty_strings_count_as_absent() {
        let place = PlaceDetails {
            display_name: text(""),
            formatted_address: Some(String::new()),
            id: Some(String::new()),
            ..PlaceDetails::default()
        };
        assert_eq!(render(&place), "");
    }

    #[test]
    fn basic_info_sits_directly_under_heading() {
        let place = PlaceDetails {
            display_name: text("Cafe A"),
            primary_type_display_name: text("カフェ"),
            business_status: Some(BusinessStatus::ClosedTemporarily),
            ..PlaceDetails::default()
        };
        assert_eq!(
            render(&place),
            "# 基本情報\n\n店舗名: Cafe A\n\n業種: カフェ\n\n営業状態: 一時休業中\n\n"
        );
    }

    #[test]
    fn unknown_business_status_is_printed_verbatim() {
        let place = PlaceDetails {
            business_status: Some(BusinessStatus::Other("SOMETHING_NEW".to_string())),
            ..PlaceDetails::default()
        };
        assert!(render(&place).contains("営業状態: SOMETHING_NEW\n"));
    }

    #[test]
    fn only_place_id_renders_system_subsection() {
        let place = PlaceDetails {
            id: Some("ChIJ123".to_string()),
            ..PlaceDetails::default()
        };
        assert_eq!(
            render(&place),
            "# 基本情報\n\n## システム情報\n\nプレイスID: ChIJ123\n\n"
        );
    }

    #[test]
    fn subsections_render_in_fixed_order() {
        let place = PlaceDetails {
            id: Some("pid".to_string()),
            website_uri: Some("https://example.com".to_string()),
            google_maps_uri: Some("https://maps.google.com/?cid=1".to_string()),
            display_name: text("Cafe A"),
            ..PlaceDetails::default()
        };
        let out = render(&place);
        let name = out.find("店舗名").unwrap();
        let location = out.find("## 所在地情報").unwrap();
        let contact = out.find("## 連絡先").unwrap();
        let system = out.find("## システム情報").unwrap();
        assert!(name < location && location < contact && contact < system);
        assert_eq!(out.matches("# 基本情報").count(), 1);
    }

    #[test]
    fn single_contact_field_yields_one_fact_line() {
        let place = PlaceDetails {
            national_phone_number: Some("03-1234-5678".to_string()),
            ..PlaceDetails::default()
        };
        let out = render(&place);
        assert_eq!(out.matches("## 連絡先").count(), 1);
        let facts: Vec<&str> = out.lines().filter(|l| l.contains(": ")).collect();
        assert_eq!(facts, vec!["電話番号: 03-1234-5678"]);
        assert!(!out.contains("所在地情報"));
    }
}
