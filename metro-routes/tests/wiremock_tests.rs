//! HTTP-level integration tests for the routes client (wiremock-based).

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use metro_routes::gmaps::{NormalizeError, RouteError, RoutesClient, RoutesConfig};
use metro_routes::trip::{TripStop, plan_trip};

fn client_for(server: &MockServer) -> RoutesClient {
    let config = RoutesConfig::new("test-key")
        .with_places_base_url(server.uri())
        .with_routes_base_url(server.uri())
        .with_timeout(5);
    RoutesClient::new(config).unwrap()
}

fn local(h: u32, m: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 8, 8)
        .unwrap()
        .and_time(NaiveTime::from_hms_opt(h, m, 0).unwrap())
}

fn candidate_body(address: &str) -> serde_json::Value {
    json!({
        "candidates": [
            {
                "formatted_address": address,
                "name": "Station",
                "types": ["subway_station", "transit_station"]
            }
        ],
        "status": "OK"
    })
}

fn transit_step(
    from: &str,
    to: &str,
    depart: &str,
    arrive: &str,
    line: &str,
    color: &str,
    headsign: &str,
) -> serde_json::Value {
    json!({
        "transitDetails": {
            "stopDetails": {
                "arrivalStop": {"name": to},
                "departureStop": {"name": from}
            },
            "localizedValues": {
                "arrivalTime": {"time": {"text": arrive}},
                "departureTime": {"time": {"text": depart}}
            },
            "headsign": headsign,
            "transitLine": {"name": line, "color": color}
        }
    })
}

#[tokio::test]
async fn find_station_returns_first_candidate_address() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/findplacefromtext/json"))
        .and(query_param("inputtype", "textquery"))
        .and(query_param(
            "input",
            "Closest transit station to Wiehle Avenue",
        ))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(candidate_body("1862 Wiehle Ave, Reston, VA 20190, USA")),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let address = client.find_station("Wiehle Avenue").await.unwrap();
    assert_eq!(address, "1862 Wiehle Ave, Reston, VA 20190, USA");
}

#[tokio::test]
async fn find_station_zero_candidates_is_no_candidate_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/findplacefromtext/json"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"candidates": [], "status": "ZERO_RESULTS"})),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.find_station("nowhere in particular").await.unwrap_err();

    match err {
        RouteError::NoCandidateFound { query } => {
            assert_eq!(query, "nowhere in particular");
        }
        other => panic!("expected NoCandidateFound, got {other:?}"),
    }
}

#[tokio::test]
async fn find_station_error_body_is_geocode_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/findplacefromtext/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "error": {
                "code": 403,
                "message": "The provided API key is invalid.",
                "status": "PERMISSION_DENIED"
            }
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.find_station("Georgetown").await.unwrap_err();

    match err {
        RouteError::Geocode { code, message } => {
            assert_eq!(code, 403);
            assert!(message.contains("API key"));
        }
        other => panic!("expected Geocode, got {other:?}"),
    }
}

/// The error field must be detected in the decoded JSON body even when
/// the HTTP status is 200.
#[tokio::test]
async fn route_error_in_ok_body_is_detected() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/directions/v2:computeRoutes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "error": {
                "code": 400,
                "message": "Invalid departure time.",
                "status": "INVALID_ARGUMENT"
            }
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .fetch_route_raw("A St", "B Ave", "2026-08-08T18:15:00Z")
        .await
        .unwrap_err();

    match err {
        RouteError::RouteFetch { code, message } => {
            assert_eq!(code, 400);
            assert!(message.contains("departure time"));
        }
        other => panic!("expected RouteFetch, got {other:?}"),
    }
}

#[tokio::test]
async fn route_http_error_without_envelope_is_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/directions/v2:computeRoutes"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream unavailable"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .fetch_route_raw("A St", "B Ave", "2026-08-08T18:15:00Z")
        .await
        .unwrap_err();

    match err {
        RouteError::Api { status, message } => {
            assert_eq!(status, 503);
            assert!(message.contains("unavailable"));
        }
        other => panic!("expected Api, got {other:?}"),
    }
}

#[tokio::test]
async fn compute_route_end_to_end() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/findplacefromtext/json"))
        .and(query_param(
            "input",
            "Closest transit station to Wiehle Avenue",
        ))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(candidate_body("1862 Wiehle Ave, Reston, VA 20190, USA")),
        )
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/findplacefromtext/json"))
        .and(query_param(
            "input",
            "Closest transit station to University of Maryland, College Park",
        ))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(candidate_body("4931 Calvert Rd, College Park, MD 20740, USA")),
        )
        .mount(&server)
        .await;

    // 14:45 local must go out as 18:15 Zulu (offset applied, buffer
    // subtracted), with the resolved addresses as waypoints.
    Mock::given(method("POST"))
        .and(path("/directions/v2:computeRoutes"))
        .and(body_partial_json(json!({
            "origin": {"address": "1862 Wiehle Ave, Reston, VA 20190, USA"},
            "destination": {"address": "4931 Calvert Rd, College Park, MD 20740, USA"},
            "travelMode": "TRANSIT",
            "departureTime": "2026-08-08T18:15:00Z",
            "transitPreferences": {"allowedTravelModes": ["SUBWAY", "TRAIN"]}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "routes": [{
                "legs": [{
                    "steps": [
                        {},
                        transit_step(
                            "Wiehle-Reston East",
                            "Metro Center",
                            "3:09\u{202f}PM",
                            "3:46\u{202f}PM",
                            "Silver Line",
                            "#a1a3a1",
                            "Largo"
                        ),
                        {},
                        transit_step(
                            "Metro Center",
                            "College Park-U of Md",
                            "3:52\u{202f}PM",
                            "4:21\u{202f}PM",
                            "Green Line",
                            "#00b140",
                            "Greenbelt"
                        ),
                        {}
                    ]
                }]
            }]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let legs = client
        .compute_route(
            "Wiehle Avenue",
            "University of Maryland, College Park",
            local(14, 45),
        )
        .await
        .unwrap();

    assert_eq!(legs.len(), 2);

    assert_eq!(legs[0].line.name, "Silver Line");
    assert_eq!(legs[0].line.color, "#a1a3a1");
    assert_eq!(legs[0].line.headsign, "Largo");
    assert_eq!(legs[0].from.name, "Wiehle-Reston East");
    assert_eq!(legs[0].from.time.to_string(), "15:09");
    assert_eq!(legs[0].to.name, "Metro Center");
    // Arrival carries the 5-minute walking buffer.
    assert_eq!(legs[0].to.time.to_string(), "15:51");

    assert_eq!(legs[1].line.name, "Green Line");
    assert_eq!(legs[1].from.time.to_string(), "15:52");
    assert_eq!(legs[1].to.name, "College Park-U of Md");
    assert_eq!(legs[1].to.time.to_string(), "16:26");
}

#[tokio::test]
async fn compute_route_no_transit_option_is_empty() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/findplacefromtext/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(candidate_body("somewhere")))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/directions/v2:computeRoutes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let legs = client
        .compute_route("here", "there", local(9, 0))
        .await
        .unwrap();
    assert!(legs.is_empty());
}

#[tokio::test]
async fn compute_route_malformed_time_is_normalize_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/findplacefromtext/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(candidate_body("somewhere")))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/directions/v2:computeRoutes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "routes": [{
                "legs": [{
                    "steps": [
                        transit_step("A", "B", "whenever", "4:12 PM", "Red Line", "#bf0d3e", "Glenmont")
                    ]
                }]
            }]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .compute_route("here", "there", local(9, 0))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        RouteError::Normalize(NormalizeError::MalformedTime(_))
    ));
}

#[tokio::test]
async fn plan_trip_routes_consecutive_pairs() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/findplacefromtext/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(candidate_body("resolved address")))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/directions/v2:computeRoutes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "routes": [{
                "legs": [{
                    "steps": [
                        transit_step("A", "B", "10:00 AM", "10:20 AM", "Red Line", "#bf0d3e", "Shady Grove")
                    ]
                }]
            }]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let stops = [
        TripStop::new("Georgetown", local(10, 0)),
        TripStop::new("Smithsonian", local(13, 0)),
        TripStop::new("Navy Yard", local(17, 30)),
    ];

    let plan = plan_trip(&client, &stops).await.unwrap();

    assert_eq!(plan.len(), 2);
    assert_eq!(plan[0].from, "Georgetown");
    assert_eq!(plan[0].to, "Smithsonian");
    assert_eq!(plan[1].from, "Smithsonian");
    assert_eq!(plan[1].to, "Navy Yard");
    assert_eq!(plan[0].legs.len(), 1);
    assert_eq!(plan[0].legs[0].to.time.to_string(), "10:25");
}
