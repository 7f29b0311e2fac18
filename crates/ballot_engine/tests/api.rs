use std::time::Duration;

use ballot_engine::{
    ApiError, ApiSettings, CountryRecord, RankingRecord, ReqwestVoteApi, VoteApi, VoteRequest,
};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn api_for(server: &MockServer) -> ReqwestVoteApi {
    let settings = ApiSettings::new(&server.uri()).expect("mock server url");
    ReqwestVoteApi::new(settings).expect("client")
}

fn ranking_body() -> serde_json::Value {
    json!({
        "data": [
            {
                "country": "Japan",
                "capital": "Tokyo",
                "region": "Asia",
                "subRegion": "Eastern Asia",
                "votes": 12,
                "rank": 1
            },
            {
                "country": "France",
                "capital": "Paris",
                "region": "Europe",
                "subRegion": "Western Europe",
                "votes": 7,
                "rank": 2
            }
        ]
    })
}

fn vote() -> VoteRequest {
    VoteRequest {
        name: "Al".to_string(),
        email: "a@b.co".to_string(),
        country: "FRA".to_string(),
    }
}

#[tokio::test]
async fn countries_are_read_from_data_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/countries"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                { "name": "France", "code": "FRA" },
                { "name": "Japan", "code": "JPN" }
            ]
        })))
        .mount(&server)
        .await;

    let countries = api_for(&server).countries().await.expect("countries");
    assert_eq!(
        countries,
        vec![
            CountryRecord {
                name: "France".to_string(),
                code: "FRA".to_string(),
            },
            CountryRecord {
                name: "Japan".to_string(),
                code: "JPN".to_string(),
            },
        ]
    );
}

#[tokio::test]
async fn top_rankings_map_wire_fields_in_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/votes/top"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ranking_body()))
        .mount(&server)
        .await;

    let rows = api_for(&server).top_rankings().await.expect("top");
    assert_eq!(rows.len(), 2);
    assert_eq!(
        rows[0],
        RankingRecord {
            country: "Japan".to_string(),
            capital: "Tokyo".to_string(),
            region: "Asia".to_string(),
            sub_region: "Eastern Asia".to_string(),
            votes: 12,
            rank: 1,
        }
    );
    assert_eq!(rows[1].country, "France");
}

#[tokio::test]
async fn search_sends_text_untrimmed_as_q() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/votes/search"))
        .and(query_param("q", " côte d'iv"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let rows = api_for(&server)
        .search_rankings(" côte d'iv")
        .await
        .expect("search");
    assert!(rows.is_empty());
}

#[tokio::test]
async fn submit_posts_json_and_accepts_empty_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/votes"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "name": "Al",
            "email": "a@b.co",
            "country": "FRA"
        })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    api_for(&server).submit_vote(&vote()).await.expect("vote accepted");
}

#[tokio::test]
async fn submit_rejection_carries_server_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/votes"))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({
            "message": "This email has already voted",
            "statusCode": 409
        })))
        .mount(&server)
        .await;

    let err = api_for(&server).submit_vote(&vote()).await.unwrap_err();
    assert_eq!(
        err,
        ApiError::Rejected {
            status: 409,
            message: Some("This email has already voted".to_string()),
        }
    );
}

#[tokio::test]
async fn validation_message_lists_are_joined() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/votes"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "message": ["email must be an email", "country should not be empty"],
            "statusCode": 400
        })))
        .mount(&server)
        .await;

    let err = api_for(&server).submit_vote(&vote()).await.unwrap_err();
    assert_eq!(
        err,
        ApiError::Rejected {
            status: 400,
            message: Some("email must be an email, country should not be empty".to_string()),
        }
    );
}

#[tokio::test]
async fn rejection_without_json_body_has_no_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/votes/top"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>bad gateway</html>"))
        .mount(&server)
        .await;

    let err = api_for(&server).top_rankings().await.unwrap_err();
    assert_eq!(
        err,
        ApiError::Rejected {
            status: 502,
            message: None,
        }
    );
    assert_eq!(err.to_string(), "http status 502");
}

#[tokio::test]
async fn malformed_list_body_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/votes/top"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "rows": [] })))
        .mount(&server)
        .await;

    let err = api_for(&server).top_rankings().await.unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)), "{err:?}");
}

#[tokio::test]
async fn slow_response_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/countries"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_json(json!({ "data": [] })),
        )
        .mount(&server)
        .await;

    let settings = ApiSettings {
        request_timeout: Duration::from_millis(50),
        ..ApiSettings::new(&server.uri()).unwrap()
    };
    let api = ReqwestVoteApi::new(settings).unwrap();

    let err = api.countries().await.unwrap_err();
    assert_eq!(err, ApiError::Timeout);
}

#[tokio::test]
async fn base_url_path_prefix_is_kept() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/votes/top"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ranking_body()))
        .expect(1)
        .mount(&server)
        .await;

    let settings = ApiSettings::new(&format!("{}/api", server.uri())).unwrap();
    let rows = ReqwestVoteApi::new(settings)
        .unwrap()
        .top_rankings()
        .await
        .unwrap();
    assert_eq!(rows.len(), 2);
}
