use nhs_procurement_api::{Notice, SearchResult};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

#[test]
fn deserialize_search_results_full() {
    let json = load_fixture("search_results.json");
    let resp: SearchResult = serde_json::from_str(&json).unwrap();
    assert_eq!(resp.total(), Some(2));
    assert_eq!(resp.items.len(), 2);

    let first = &resp.items[0];
    assert_eq!(first.title(), Some("Digital patient record platform"));
    assert_eq!(first.organisation_name(), Some("NHS England"));
    assert_eq!(first.notice_status(), Some("Open"));
    assert_eq!(first.deadline_date(), Some("2024-07-15"));
    assert_eq!(
        first.link(),
        Some("https://www.contractsfinder.service.gov.uk/notice/CF-0001")
    );
    assert_eq!(first.get("valueHigh"), Some(&serde_json::json!(1200000)));

    let second = &resp.items[1];
    assert_eq!(second.deadline_date(), None);
    assert_eq!(second.get("deadlineDate"), Some(&serde_json::Value::Null));
}

#[test]
fn deserialize_keeps_unmodelled_top_level_keys() {
    let json = load_fixture("search_results.json");
    let resp: SearchResult = serde_json::from_str(&json).unwrap();
    assert_eq!(resp.extra.get("took"), Some(&serde_json::json!(37)));
    assert!(!resp.extra.contains_key("items"));
}

#[test]
fn deserialize_search_results_empty() {
    let json = load_fixture("search_empty.json");
    let resp: SearchResult = serde_json::from_str(&json).unwrap();
    assert_eq!(resp.total(), Some(0));
    assert!(resp.is_empty());
    assert!(resp.extra.is_empty());
}

#[test]
fn deserialize_tolerates_missing_count_and_items() {
    let resp: SearchResult = serde_json::from_str(r#"{"message": "no results"}"#).unwrap();
    assert!(resp.count.is_null());
    assert_eq!(resp.total(), None);
    assert!(resp.items.is_empty());
    assert_eq!(resp.extra.len(), 1);
}

#[test]
fn notices_round_trip_for_export() {
    let json = load_fixture("search_results.json");
    let raw: serde_json::Value = serde_json::from_str(&json).unwrap();
    let resp: SearchResult = serde_json::from_value(raw.clone()).unwrap();
    assert_eq!(serde_json::to_value(&resp.items).unwrap(), raw["items"]);
}

#[test]
fn deserialize_malformed_json_returns_error() {
    let result = serde_json::from_str::<SearchResult>(r#"{"items": not valid json}"#);
    assert!(result.is_err());
}

#[test]
fn deserialize_accepts_loosely_shaped_bodies() {
    let cases = [
        (r#"{"count": null, "items": []}"#, None, 0),
        (r#"{"count": "2", "items": [{}, {}]}"#, Some(2), 2),
        (r#"{"count": 2.0, "items": [{}, {}]}"#, Some(2), 2),
        (r#"{"count": 1, "items": [null]}"#, Some(1), 1),
        (r#"{"count": 0, "items": null}"#, Some(0), 0),
        (r#"{"count": 2, "items": ["x", 7]}"#, Some(2), 2),
    ];
    for (body, total, len) in cases {
        let resp: SearchResult = serde_json::from_str(body).unwrap();
        assert_eq!(resp.total(), total, "body: {}", body);
        assert_eq!(resp.items.len(), len, "body: {}", body);
    }
}

#[test]
fn non_object_notices_round_trip_for_export() {
    let resp: SearchResult =
        serde_json::from_str(r#"{"count": 3, "items": ["x", null, [1, 2]]}"#).unwrap();
    assert_eq!(
        serde_json::to_value(&resp.items).unwrap(),
        serde_json::json!(["x", null, [1, 2]])
    );

    let notice: Notice = serde_json::from_str("[1, 2]").unwrap();
    assert_eq!(notice.title(), None);
}
