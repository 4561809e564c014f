//! End-to-end harvest against a mocked nearby-search endpoint:
//! three regions, pagination, deduplication and CSV export.

use places_harvest::models::appenzell_innerrhoden_regions;
use places_harvest::services::{export, GooglePlacesClient, NoDelay, SearchService};
use serde_json::json;
use std::fs;
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

const MAIN: &str = "47.3165,9.4167";
const FIRST_ISLAND: &str = "47.343,9.431";
const SECOND_ISLAND: &str = "47.337,9.381";

fn place(id: &str, name: &str, lat: f64, lng: f64, vicinity: &str) -> serde_json::Value {
    json!({
        "place_id": id,
        "name": name,
        "geometry": { "location": { "lat": lat, "lng": lng } },
        "vicinity": vicinity,
        "types": ["supermarket", "food", "store"]
    })
}

async fn mount_page(
    server: &MockServer,
    location: &str,
    page_token: Option<&str>,
    body: serde_json::Value,
) {
    let mock = Mock::given(method("GET"))
        .and(path("/nearbysearch/json"))
        .and(query_param("location", location))
        .and(query_param("keyword", "Migros"))
        .and(query_param("key", "test-key"));

    let mock = match page_token {
        Some(token) => mock.and(query_param("pagetoken", token)),
        None => mock.and(query_param_is_missing("pagetoken")),
    };

    mock.respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(server)
        .await;
}

fn client(server: &MockServer) -> GooglePlacesClient {
    GooglePlacesClient::new("test-key")
        .unwrap()
        .with_base_url(server.uri())
        .with_wait_policy(NoDelay)
}

#[tokio::test]
async fn test_three_regions_export_four_rows() {
    let server = MockServer::start().await;

    mount_page(
        &server,
        MAIN,
        None,
        json!({
            "results": [
                place("id-1", "Migros Appenzell", 47.3305, 9.4095, "Poststrasse 4, Appenzell"),
                place("id-2", "Migrolino Appenzell", 47.3321, 9.4131, "Weissbadstrasse 1, Appenzell")
            ],
            "status": "OK"
        }),
    )
    .await;

    mount_page(
        &server,
        FIRST_ISLAND,
        None,
        json!({
            "results": [place("id-3", "Migros Oberegg", 47.4255, 9.5528, "Dorf 12, Oberegg")],
            "next_page_token": "page-2",
            "status": "OK"
        }),
    )
    .await;

    mount_page(
        &server,
        FIRST_ISLAND,
        Some("page-2"),
        json!({
            "results": [place("id-4", "Migros Reute", 47.4189, 9.5741, "Dorf 3, Reute")],
            "status": "OK"
        }),
    )
    .await;

    mount_page(
        &server,
        SECOND_ISLAND,
        None,
        json!({ "results": [], "status": "ZERO_RESULTS" }),
    )
    .await;

    let regions = appenzell_innerrhoden_regions();
    let harvest = SearchService::collect_all(&client(&server), &regions, "Migros")
        .await
        .unwrap();

    assert_eq!(harvest.results.len(), 4);
    assert_eq!(harvest.stats.api_requests, 4);
    assert_eq!(harvest.stats.duplicates_removed, 0);
    assert_eq!(harvest.stats.regions[2].results, 0);

    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("migros.csv");
    export(&harvest.results, &output).unwrap();

    let mut rdr = csv::Reader::from_path(&output).unwrap();
    let headers = rdr.headers().unwrap().clone();
    assert_eq!(
        headers.iter().collect::<Vec<_>>(),
        vec!["Place ID", "Name", "Latitude", "Longitude", "Address"]
    );

    let rows: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 4);
    assert_eq!(&rows[0][0], "id-1");
    assert_eq!(&rows[0][1], "Migros Appenzell");
    assert_eq!(&rows[0][2], "47.3305");
    assert_eq!(&rows[0][3], "9.4095");
    assert_eq!(&rows[0][4], "Poststrasse 4, Appenzell");
    assert_eq!(&rows[3][0], "id-4");
    assert_eq!(&rows[3][4], "Dorf 3, Reute");
}

#[tokio::test]
async fn test_overlap_between_main_and_island_is_one_row() {
    let server = MockServer::start().await;
    let shared = place("shared", "Migros Appenzell", 47.3305, 9.4095, "Poststrasse 4, Appenzell");

    mount_page(&server, MAIN, None, json!({ "results": [shared.clone()] })).await;
    mount_page(&server, FIRST_ISLAND, None, json!({ "results": [shared] })).await;
    mount_page(&server, SECOND_ISLAND, None, json!({ "results": [] })).await;

    let regions = appenzell_innerrhoden_regions();
    let harvest = SearchService::collect_all(&client(&server), &regions, "Migros")
        .await
        .unwrap();

    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("migros.csv");
    export(&harvest.results, &output).unwrap();

    let contents = fs::read_to_string(&output).unwrap();
    assert_eq!(contents.matches("shared,").count(), 1);
    assert_eq!(contents.lines().count(), 2);
}

#[tokio::test]
async fn test_transport_failure_aborts_run() {
    let server = MockServer::start().await;

    mount_page(&server, MAIN, None, json!({ "results": [] })).await;

    Mock::given(method("GET"))
        .and(path("/nearbysearch/json"))
        .and(query_param("location", FIRST_ISLAND))
        .respond_with(ResponseTemplate::new(403).set_body_string("forbidden"))
        .expect(1)
        .mount(&server)
        .await;

    // The run stops at the failing region; the third is never queried
    Mock::given(method("GET"))
        .and(path("/nearbysearch/json"))
        .and(query_param("location", SECOND_ISLAND))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "results": [] })))
        .expect(0)
        .mount(&server)
        .await;

    let regions = appenzell_innerrhoden_regions();
    let result = SearchService::collect_all(&client(&server), &regions, "Migros").await;

    assert!(matches!(
        result,
        Err(places_harvest::errors::PlacesError::Transport(_))
    ));
}
