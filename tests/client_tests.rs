use std::sync::{Arc, Mutex};

use serde_json::{json, Value};

use rib_stats::api::transport::{HttpResponse, HttpTransport};
use rib_stats::{AnalyticsQuery, AppError, Config, EventsQuery, RibApiClient};

/// Transport that answers every request with the same canned response and
/// records the URLs it was asked for.
struct CannedTransport {
    status: u16,
    body: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl HttpTransport for CannedTransport {
    fn get(&self, url: &str) -> Result<HttpResponse, AppError> {
        self.requests.lock().unwrap().push(url.to_string());
        Ok(HttpResponse {
            status: self.status,
            body: self.body.clone(),
        })
    }
}

struct FailingTransport;

impl HttpTransport for FailingTransport {
    fn get(&self, _url: &str) -> Result<HttpResponse, AppError> {
        Err(AppError::Transport("connection refused".to_string()))
    }
}

fn canned_client(status: u16, body: &str) -> (RibApiClient, Arc<Mutex<Vec<String>>>) {
    let requests = Arc::new(Mutex::new(Vec::new()));
    let transport = CannedTransport {
        status,
        body: body.to_string(),
        requests: requests.clone(),
    };
    let client = RibApiClient::with_transport(Config::default(), Box::new(transport));
    (client, requests)
}

fn last_request(requests: &Arc<Mutex<Vec<String>>>) -> String {
    requests.lock().unwrap().last().cloned().unwrap()
}

#[test]
fn fetch_data_unwraps_the_envelope() {
    let (client, _) = canned_client(200, r#"{"data": [1, 2, 3]}"#);
    let data = client.fetch_data("series?take=1").unwrap();
    assert_eq!(data, json!([1, 2, 3]));
}

#[test]
fn fetch_data_without_data_field_is_malformed() {
    let (client, _) = canned_client(200, "{}");
    let err = client.fetch_data("series?take=1").unwrap_err();
    assert!(matches!(err, AppError::MalformedResponse(_)));
}

#[test]
fn empty_endpoint_is_rejected_before_any_request() {
    let (client, requests) = canned_client(200, "{}");
    let err = client.fetch_raw("").unwrap_err();
    assert!(matches!(err, AppError::InvalidArgument(_)));
    assert!(requests.lock().unwrap().is_empty());
}

#[test]
fn team_payload_round_trips_untouched() {
    let payload = json!({
        "id": 17,
        "name": "some team",
        "players": [{ "id": 2716, "ign": "someone" }]
    });
    let (client, requests) = canned_client(200, &payload.to_string());

    let team = client.team(17).unwrap();
    assert_eq!(team, payload);
    assert_eq!(
        last_request(&requests),
        "https://backend-prod.rib.gg/v1/teams/17"
    );
}

#[test]
fn all_teams_hits_the_collection_endpoint() {
    let (client, requests) = canned_client(200, "[]");
    client.all_teams().unwrap();
    assert_eq!(
        last_request(&requests),
        "https://backend-prod.rib.gg/v1/teams/all"
    );
}

#[test]
fn non_success_status_is_a_transport_error() {
    let (client, _) = canned_client(500, "oops");
    let err = client.fetch_raw("teams/all").unwrap_err();
    assert!(matches!(err, AppError::Transport(_)));
}

#[test]
fn undecodable_body_is_a_transport_error() {
    let (client, _) = canned_client(200, "<html>not json</html>");
    let err = client.fetch_raw("teams/all").unwrap_err();
    assert!(matches!(err, AppError::Transport(_)));
}

#[test]
fn transport_failures_propagate_unmodified() {
    let client = RibApiClient::with_transport(Config::default(), Box::new(FailingTransport));
    let err = client.team(17).unwrap_err();
    assert!(matches!(err, AppError::Transport(ref msg) if msg == "connection refused"));
}

#[test]
fn events_requires_a_query_term() {
    let (client, requests) = canned_client(200, r#"{"data": []}"#);
    let err = client.events(&EventsQuery::default()).unwrap_err();
    assert!(matches!(err, AppError::InvalidArgument(_)));
    assert!(requests.lock().unwrap().is_empty());
}

#[test]
fn events_request_carries_take_and_encoded_query() {
    let (client, requests) = canned_client(200, r#"{"data": []}"#);

    let mut query = EventsQuery::new("valorant");
    query.take = 10;
    client.events(&query).unwrap();

    let url = last_request(&requests);
    assert!(url.contains("take=10"));
    assert!(url.contains("query=valorant"));

    client.events(&EventsQuery::new("red bull")).unwrap();
    assert!(last_request(&requests).contains("query=red+bull"));
}

#[test]
fn series_request_carries_all_three_parameters() {
    let (client, requests) = canned_client(200, r#"{"data": []}"#);
    client.series(42, true, 5).unwrap();

    let url = last_request(&requests);
    assert!(url.contains("take=5"));
    assert!(url.contains("eventIds[]=42"));
    assert!(url.contains("completed=true"));
}

#[test]
fn match_details_returns_the_parsed_payload() {
    let payload = json!({ "matchId": 99, "rounds": [{ "number": 1 }] });
    let (client, requests) = canned_client(200, &payload.to_string());

    let details = client.match_details(99).unwrap();
    assert_eq!(details, payload);
    assert_eq!(
        last_request(&requests),
        "https://backend-prod.rib.gg/v1/matches/99/details"
    );
}

#[test]
fn matches_fetches_the_series_resource() {
    let (client, requests) = canned_client(200, r#"{"id": 910}"#);
    client.matches(910).unwrap();
    assert_eq!(
        last_request(&requests),
        "https://backend-prod.rib.gg/v1/series/910"
    );
}

#[test]
fn player_row_preserves_nested_fields() {
    let (client, _) = canned_client(
        200,
        r#"{"id": 2716, "ign": "someone", "team": {"id": 17}, "agents": [4, 12]}"#,
    );

    let row = client.player(2716).unwrap();
    assert_eq!(row.get("ign"), Some(&json!("someone")));
    assert_eq!(row.get("team"), Some(&json!({ "id": 17 })));
    assert_eq!(row.get("agents"), Some(&json!([4, 12])));
}

#[test]
fn player_rejects_non_object_payloads() {
    let (client, _) = canned_client(200, "[1, 2, 3]");
    let err = client.player(2716).unwrap_err();
    assert!(matches!(err, AppError::MalformedResponse(_)));
}

#[test]
fn analytics_requests_attach_only_set_filters() {
    let (client, requests) = canned_client(200, "[]");

    client.agent_analytics(&AnalyticsQuery::default()).unwrap();
    assert_eq!(
        last_request(&requests),
        "https://backend-prod.rib.gg/v1/analytics/agents"
    );

    let query = AnalyticsQuery {
        map_id: Some(1),
        region_id: Some(2),
        side: Some(1),
        ..AnalyticsQuery::default()
    };
    client.weapon_analytics(&query).unwrap();
    let url = last_request(&requests);
    assert!(url.ends_with("analytics/weapons?map_id=1&side=1&region_id=2"));
}

#[test]
fn analytics_payload_is_returned_verbatim() {
    let payload: Value = json!([{ "agentId": 4, "pickRate": 0.31 }]);
    let (client, _) = canned_client(200, &payload.to_string());

    let stats = client
        .composition_analytics(&AnalyticsQuery {
            event_id: Some(42),
            ..AnalyticsQuery::default()
        })
        .unwrap();
    assert_eq!(stats, payload);
}
