//! End-to-end search and suggestion flows against a wiremock backend.

use std::sync::Arc;
use std::time::Duration;

use lrs_client::{
    run_search, DebounceSettings, LrsClient, SearchRequest, SuggestionDebouncer,
};
use lrs_core::presentation::{EMPTY_LOCATION_NOTE, SERVER_UNREACHABLE_NOTE};
use lrs_core::Mode;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> LrsClient {
    LrsClient::with_base_url(base_url, 30, "lrs-test/0.1")
        .expect("client construction should not fail")
}

fn pick(name: &str, location: &str, distance: serde_json::Value) -> serde_json::Value {
    serde_json::json!({
        "name": name,
        "location": location,
        "rating": 4.5,
        "reviews": 250,
        "confidence": "Medium",
        "distance_miles": distance,
        "links": {
            "google_maps": format!("https://maps.google.com/?q={name}"),
            "yelp_search": format!("https://www.yelp.com/search?find_desc={name}")
        }
    })
}

#[tokio::test]
async fn blank_location_makes_no_request() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    for location in ["", "   ", "\t\n"] {
        let outcome = run_search(&client, &SearchRequest::new(location, "tacos", Mode::Strict)).await;
        assert_eq!(outcome.note, EMPTY_LOCATION_NOTE);
        assert!(outcome.picks.is_empty());
        assert!(outcome.debug_line.is_none());
    }
}

#[tokio::test]
async fn distance_guardrail_and_debug_line() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "picks": [
            pick("Near", "1 Main St, Austin, TX", serde_json::json!(3)),
            pick("Edge", "2 Main St, Austin, TX", serde_json::json!(10)),
            pick("Over", "3 Main St, Austin, TX", serde_json::json!(10.1)),
            pick("Far", "4 Main St, Austin, TX", serde_json::json!(25)),
            pick("Unknown", "5 Main St, Austin, TX", serde_json::Value::Null)
        ],
        "debug": { "mode": "strict", "final_count": 5 }
    });

    Mock::given(method("GET"))
        .and(path("/lrs"))
        .and(query_param("mode", "strict"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let outcome = run_search(&client, &SearchRequest::new("Austin, TX", "", Mode::Strict)).await;

    let names: Vec<_> = outcome.picks.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Near", "Edge", "Unknown"]);
    assert_eq!(outcome.dropped, 2);
    assert_eq!(
        outcome.note,
        "Heads up: I hid 2 results that were beyond 10 miles for Top Local Picks."
    );
    assert_eq!(
        outcome.debug_line.as_deref(),
        Some("You’re in Top Local Picks mode. I’m showing 3 picks.")
    );
}

#[tokio::test]
async fn backend_error_is_shown_verbatim() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/lrs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "error": "I couldn't find that location.",
            "picks": [pick("Ignored", "Austin, TX", serde_json::json!(1))]
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let outcome = run_search(&client, &SearchRequest::new("Atlantis", "", Mode::Best)).await;
    assert_eq!(outcome.note, "I couldn't find that location.");
    assert!(outcome.picks.is_empty());
}

#[tokio::test]
async fn backend_error_on_4xx_is_shown_verbatim() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/lrs"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "error": "I couldn't find that location."
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let outcome = run_search(&client, &SearchRequest::new("Atlantis", "", Mode::Strict)).await;
    assert_eq!(outcome.note, "I couldn't find that location.");
    assert!(outcome.picks.is_empty());
}

#[tokio::test]
async fn transport_failure_becomes_unreachable_note() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/lrs"))
        .respond_with(ResponseTemplate::new(502))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let outcome = run_search(&client, &SearchRequest::new("Austin", "", Mode::Hype)).await;
    assert_eq!(outcome.note, SERVER_UNREACHABLE_NOTE);
    assert!(outcome.picks.is_empty());
}

#[tokio::test]
async fn notes_combine_backend_distance_and_country() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/lrs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "picks": [
                pick("Kept", "123 Main St, Austin, TX, USA", serde_json::json!(4)),
                pick("Dropped", "9 Far Rd, Austin, TX, USA", serde_json::json!(40))
            ],
            "limitation_note": "Results are sparse."
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let outcome =
        run_search(&client, &SearchRequest::new("Manila, Philippines", "", Mode::Best)).await;

    let parts: Vec<_> = outcome.note.split("\n\n").collect();
    assert_eq!(parts.len(), 3, "{}", outcome.note);
    assert_eq!(parts[0], "Results are sparse.");
    assert_eq!(
        parts[1],
        "Heads up: I hid 1 result that were beyond 15 miles for Best Available."
    );
    assert!(parts[2].contains("You typed “Manila, Philippines”"));
    assert!(parts[2].contains("seeing results in USA"));
    assert!(outcome.debug_line.is_none());
}

#[tokio::test]
async fn empty_result_without_note_shows_empty_state() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/lrs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "picks": [] })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let outcome = run_search(&client, &SearchRequest::new("Austin", "birria", Mode::Strict)).await;
    assert!(outcome.show_empty_state());
}

#[tokio::test]
async fn debouncer_filters_live_suggestions() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/suggest"))
        .and(query_param("q", "Portland"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "suggestions": [
                { "label": "Portland, OR", "name": "Portland", "address": "" },
                { "label": "1 Portland Ave, Portland, ME", "name": "x", "address": "" },
                { "label": "Portland, ME", "name": "Portland", "address": "" }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = Arc::new(test_client(&server.uri()));
    let settings = DebounceSettings {
        delay: Duration::from_millis(10),
    };
    let mut deb = SuggestionDebouncer::new(client, settings);

    deb.update("Portland", true)
        .expect("qualifying query schedules")
        .await
        .unwrap();

    let labels: Vec<_> = deb
        .state()
        .suggestions
        .iter()
        .map(|s| s.label.clone())
        .collect();
    assert_eq!(labels, vec!["Portland, OR", "Portland, ME"]);
}

#[tokio::test]
async fn debouncer_swallows_suggest_failures() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/suggest"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = Arc::new(test_client(&server.uri()));
    let settings = DebounceSettings {
        delay: Duration::from_millis(10),
    };
    let mut deb = SuggestionDebouncer::new(client, settings);

    deb.update("Portland", true).unwrap().await.unwrap();
    let state = deb.state();
    assert!(state.suggestions.is_empty());
    assert!(!state.loading);
}

#[tokio::test]
async fn short_queries_never_reach_suggest() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/suggest"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "suggestions": []
        })))
        .expect(0)
        .mount(&server)
        .await;

    let client = Arc::new(test_client(&server.uri()));
    let settings = DebounceSettings {
        delay: Duration::from_millis(10),
    };
    let mut deb = SuggestionDebouncer::new(client, settings);

    for query in ["", "  ", "Po"] {
        assert!(deb.update(query, true).is_none());
    }
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert!(deb.state().suggestions.is_empty());
}
