//! Resilient fetcher behaviour over HTTP

use crate::common::{empty_chart, fast_config};
use intraday_rth::fetch::{
    ChartSource, FetcherConfig, JsonFetcher, RetryPolicy, TransientFailure, YahooChartClient,
    NONCE_PARAM,
};
use intraday_rth::session::WindowSpec;
use reqwest::Url;
use serde_json::json;
use std::collections::HashSet;
use std::time::Duration;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn url(server: &MockServer, p: &str) -> Url {
    Url::parse(&format!("{}{}", server.uri(), p)).unwrap()
}

#[tokio::test]
async fn test_exhausts_on_empty_result() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/chart/AAPL"))
        .respond_with(ResponseTemplate::new(200).set_body_json(empty_chart()))
        .expect(3)
        .mount(&server)
        .await;

    let fetcher = JsonFetcher::new(fast_config(&server.uri(), 3)).unwrap();
    let err = fetcher
        .fetch_json(&url(&server, "/chart/AAPL"), &[("interval", "1m".into())])
        .await
        .unwrap_err();

    assert_eq!(err.attempts, 3);
    assert!(matches!(err.last, TransientFailure::EmptyResult { .. }));
}

#[tokio::test]
async fn test_every_attempt_has_fresh_nonce_and_user_agent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(header("user-agent", "Mozilla/5.0"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let fetcher = JsonFetcher::new(fast_config(&server.uri(), 3)).unwrap();
    let err = fetcher
        .fetch_json(&url(&server, "/chart/AAPL"), &[])
        .await
        .unwrap_err();
    assert!(matches!(err.last, TransientFailure::Status(s) if s.as_u16() == 500));

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 3);

    let nonces: HashSet<String> = requests
        .iter()
        .map(|r| {
            r.url
                .query_pairs()
                .find(|(k, _)| k == NONCE_PARAM)
                .map(|(_, v)| v.into_owned())
                .expect("nonce present")
        })
        .collect();
    assert_eq!(nonces.len(), 3);
}

#[tokio::test]
async fn test_recovers_after_failures() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"chart": {"result": [{"timestamp": [1]}]}})),
        )
        .mount(&server)
        .await;

    let fetcher = JsonFetcher::new(fast_config(&server.uri(), 3)).unwrap();
    let value = fetcher.fetch_json(&url(&server, "/x"), &[]).await.unwrap();

    assert_eq!(value["chart"]["result"][0]["timestamp"][0], 1);
    assert_eq!(server.received_requests().await.unwrap().len(), 3);
}

#[tokio::test]
async fn test_last_cause_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(502))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{"))
        .mount(&server)
        .await;

    let fetcher = JsonFetcher::new(fast_config(&server.uri(), 2)).unwrap();
    let err = fetcher.fetch_json(&url(&server, "/x"), &[]).await.unwrap_err();

    assert_eq!(err.attempts, 2);
    assert!(matches!(err.last, TransientFailure::Decode(_)));
}

#[tokio::test]
async fn test_timeout_per_attempt() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"chart": {"result": [{}]}}))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&server)
        .await;

    let config = FetcherConfig::default()
        .base_url(server.uri())
        .timeout(Duration::from_millis(50))
        .retry(RetryPolicy::new(1, Duration::ZERO));
    let fetcher = JsonFetcher::new(config).unwrap();
    let err = fetcher.fetch_json(&url(&server, "/x"), &[]).await.unwrap_err();

    assert_eq!(err.attempts, 1);
    assert!(matches!(err.last, TransientFailure::Timeout(_)));
}

#[tokio::test]
async fn test_network_error() {
    // Nothing listens on the reserved port once the server is dropped
    let uri = {
        let server = MockServer::start().await;
        server.uri()
    };

    let fetcher = JsonFetcher::new(fast_config(&uri, 2)).unwrap();
    let err = fetcher
        .fetch_json(&Url::parse(&format!("{uri}/x")).unwrap(), &[])
        .await
        .unwrap_err();

    assert_eq!(err.attempts, 2);
    assert!(matches!(
        err.last,
        TransientFailure::Network(_) | TransientFailure::Timeout(_)
    ));
}

#[tokio::test]
async fn test_chart_client_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/chart/TSLA"))
        .and(query_param("interval", "1m"))
        .and(query_param("range", "1d"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"chart": {"result": [{}]}})))
        .expect(1)
        .mount(&server)
        .await;

    let client = YahooChartClient::new(fast_config(&format!("{}/chart", server.uri()), 1)).unwrap();
    let window = WindowSpec::Relative { range: "1d" };
    let value = client.fetch_chart("TSLA", &window).await.unwrap();

    assert!(value["chart"]["result"].is_array());
}
