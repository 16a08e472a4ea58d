use super::*;

#[test]
fn no_place_name_is_none() {
    let cli = Cli::try_parse_from(["placemd"]).expect("expected valid cli args");
    assert!(cli.place_name.is_none());
    assert!(!cli.dry_run);
    assert_eq!(cli.review_policy, ReviewPolicy::ArrivalOrder);
}

#[test]
fn parses_place_name_and_flags() {
    let cli = Cli::try_parse_from([
        "placemd",
        "--output-dir",
        "reports",
        "--review-policy",
        "rating-tiered",
        "--dry-run",
        "東京タワー",
    ])
    .expect("expected valid cli args");

    assert_eq!(cli.place_name.as_deref(), Some("東京タワー"));
    assert_eq!(cli.output_dir, Some(PathBuf::from("reports")));
    assert_eq!(cli.review_policy, ReviewPolicy::RatingTiered);
    assert!(cli.dry_run);
}

#[test]
fn rejects_unknown_review_policy() {
    let result = Cli::try_parse_from(["placemd", "--review-policy", "newest", "cafe"]);
    assert!(result.is_err());
}

#[test]
fn decodes_percent_encoded_name() {
    let name = decode_place_name("%E6%9D%B1%E4%BA%AC%E3%82%BF%E3%83%AF%E3%83%BC")
        .expect("valid encoding");
    assert_eq!(name, "東京タワー");
}

#[test]
fn plain_name_passes_through() {
    assert_eq!(decode_place_name("Cafe A").expect("valid"), "Cafe A");
}

#[test]
fn blank_name_is_rejected() {
    assert!(decode_place_name(" ").is_err());
    assert!(decode_place_name("%20").is_err());
}

#[test]
fn invalid_utf8_is_rejected() {
    assert!(decode_place_name("%FF%FE").is_err());
}

fn config_for(base_url: &str, output_dir: &std::path::Path) -> AppConfig {
    AppConfig {
        places_api_key: "test-key".to_string(),
        places_base_url: base_url.to_string(),
        language_code: "ja".to_string(),
        request_timeout_secs: 30,
        user_agent: "placemd-test".to_string(),
        output_dir: output_dir.to_path_buf(),
        utc_offset_hours: 9,
        log_level: "info".to_string(),
    }
}

async fn mount_search(server: &wiremock::MockServer, body: serde_json::Value) {
    wiremock::Mock::given(wiremock::matchers::method("POST"))
        .and(wiremock::matchers::path("/v1/places:searchText"))
        .respond_with(wiremock::ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn no_results_is_printed_and_writes_nothing() {
    let server = wiremock::MockServer::start().await;
    mount_search(&server, serde_json::json!({})).await;
    let temp = tempfile::tempdir().expect("failed to create temp dir");
    let config = config_for(&server.uri(), temp.path());
    let cli = Cli::try_parse_from(["placemd", "cafe"]).expect("expected valid cli args");

    let mut stdout = Vec::new();
    run(&cli, &config, &mut stdout).await.expect("no results is not an error");

    assert_eq!(String::from_utf8(stdout).expect("utf-8"), "No results found.\n");
    assert_eq!(
        std::fs::read_dir(temp.path()).expect("dir readable").count(),
        0
    );
}

#[tokio::test]
async fn dry_run_prints_report_instead_of_writing() {
    let server = wiremock::MockServer::start().await;
    mount_search(&server, serde_json::json!({ "places": [{ "id": "p1" }] })).await;
    wiremock::Mock::given(wiremock::matchers::method("GET"))
        .and(wiremock::matchers::path("/v1/places/p1"))
        .respond_with(
            wiremock::ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "displayName": { "text": "Cafe A" } })),
        )
        .mount(&server)
        .await;
    let temp = tempfile::tempdir().expect("failed to create temp dir");
    let config = config_for(&server.uri(), temp.path());
    let cli =
        Cli::try_parse_from(["placemd", "--dry-run", "cafe"]).expect("expected valid cli args");

    let mut stdout = Vec::new();
    run(&cli, &config, &mut stdout).await.expect("lookup succeeds");

    assert_eq!(
        String::from_utf8(stdout).expect("utf-8"),
        "# 基本情報\n\n店舗名: Cafe A\n\n"
    );
    assert_eq!(
        std::fs::read_dir(temp.path()).expect("dir readable").count(),
        0
    );
}
