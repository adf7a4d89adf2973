use crate::{Client, DateRange, SUMMARY_URL, USER_AGENT};

use googletest::assert_that;
use googletest::prelude::{anything, eq, err, ok};

#[test]
fn given_range_when_building_url_then_query_in_fixed_order() {
    // Given
    let client = Client::new(SUMMARY_URL, "token");

    // When
    let url = client
        .summary_url("42", &DateRange::new("2024-01-01", "2024-01-31"))
        .unwrap();

    // Then
    assert_that!(url.path(), eq("/reports/api/v2/summary"));
    assert_that!(
        url.query(),
        eq(Some(
            "workspace_id=42&since=2024-01-01&until=2024-01-31&user_agent=toggl-export"
        ))
    );
}

#[test]
fn given_empty_range_when_building_url_then_empty_values_passed_through() {
    // Given
    let client = Client::new(SUMMARY_URL, "token");

    // When
    let url = client.summary_url("42", &DateRange::default()).unwrap();

    // Then
    let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
    assert_that!(
        pairs,
        eq(&vec![
            ("workspace_id".to_string(), "42".to_string()),
            ("since".to_string(), String::new()),
            ("until".to_string(), String::new()),
            ("user_agent".to_string(), USER_AGENT.to_string()),
        ])
    );
}

#[test]
fn given_reserved_characters_when_building_url_then_encoded() {
    let client = Client::new(SUMMARY_URL, "token");

    let url = client
        .summary_url("a&b", &DateRange::new("2024-01-01T00:00:00+01:00", ""))
        .unwrap();

    let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
    assert_that!(pairs[0].1.as_str(), eq("a&b"));
    assert_that!(pairs[1].1.as_str(), eq("2024-01-01T00:00:00+01:00"));
}

#[test]
fn given_invalid_endpoint_when_building_url_then_error() {
    let client = Client::new("not a url", "token");

    assert_that!(client.summary_url("42", &DateRange::default()), err(anything()));
}

#[test]
fn given_endpoint_when_client_created_then_stored_verbatim() {
    let client = Client::new("http://localhost:8000/summary", "token");

    assert_that!(client.endpoint.as_str(), eq("http://localhost:8000/summary"));
    assert_that!(client.summary_url("1", &DateRange::default()), ok(anything()));
}
