use std::sync::Arc;
use webreq::auth::NetworkCredential;
use webreq::http;
use webreq::mutators;
use webreq::HttpRequest;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn can_bind_localhost() -> bool {
    std::net::TcpListener::bind("127.0.0.1:0").is_ok()
}

#[cfg_attr(miri, ignore)]
#[tokio::test]
async fn test_pre_authenticate_sends_basic_header() {
    if !can_bind_localhost() {
        return;
    }

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/auth"))
        .and(header("Authorization", "Basic dXNlcjpwYXNz"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .expect(1)
        .mount(&server)
        .await;

    let mut request = HttpRequest::new(&format!("{}/auth", server.uri())).expect("valid url");
    request
        .apply_all([
            &mutators::credentials(Arc::new(NetworkCredential::new("user", "pass"))),
            &mutators::pre_authenticate(true),
        ])
        .expect("configured");

    let client = http::client(&request).expect("client should build");
    let prepared = http::prepare(&client, &request).expect("request should prepare");
    let response = client.execute(prepared).await.expect("request should succeed");
    assert_eq!(response.status(), 200);

    server.verify().await;
}
