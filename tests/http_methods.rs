use webreq::http;
use webreq::mutators::{
    METHOD_DELETE, METHOD_GET, METHOD_HEAD, METHOD_OPTIONS, METHOD_PATCH, METHOD_POST, METHOD_PUT,
};
use webreq::{HttpRequest, Mutator};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn can_bind_localhost() -> bool {
    std::net::TcpListener::bind("127.0.0.1:0").is_ok()
}

async fn execute_with_method(mutator: &Mutator, expected: &str) {
    let server = MockServer::start().await;
    Mock::given(method(expected))
        .and(path("/resource"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let mut request =
        HttpRequest::new(&format!("{}/resource", server.uri())).expect("valid url");
    request.apply(mutator).expect("configured");

    let client = http::client(&request).expect("client should build");
    let prepared = http::prepare(&client, &request).expect("request should prepare");
    let response = client.execute(prepared).await.expect("request should succeed");
    assert_eq!(response.status(), 200);

    server.verify().await;
}

#[cfg_attr(miri, ignore)]
#[tokio::test]
async fn test_get_request() {
    if !can_bind_localhost() {
        return;
    }
    execute_with_method(&METHOD_GET, "GET").await;
}

#[cfg_attr(miri, ignore)]
#[tokio::test]
async fn test_head_request() {
    if !can_bind_localhost() {
        return;
    }
    execute_with_method(&METHOD_HEAD, "HEAD").await;
}

#[cfg_attr(miri, ignore)]
#[tokio::test]
async fn test_post_request() {
    if !can_bind_localhost() {
        return;
    }
    execute_with_method(&METHOD_POST, "POST").await;
}

#[cfg_attr(miri, ignore)]
#[tokio::test]
async fn test_put_request() {
    if !can_bind_localhost() {
        return;
    }
    execute_with_method(&METHOD_PUT, "PUT").await;
}

#[cfg_attr(miri, ignore)]
#[tokio::test]
async fn test_delete_request() {
    if !can_bind_localhost() {
        return;
    }
    execute_with_method(&METHOD_DELETE, "DELETE").await;
}

#[cfg_attr(miri, ignore)]
#[tokio::test]
async fn test_options_request() {
    if !can_bind_localhost() {
        return;
    }
    execute_with_method(&METHOD_OPTIONS, "OPTIONS").await;
}

#[cfg_attr(miri, ignore)]
#[tokio::test]
async fn test_patch_request() {
    if !can_bind_localhost() {
        return;
    }
    execute_with_method(&METHOD_PATCH, "PATCH").await;
}

#[cfg_attr(miri, ignore)]
#[tokio::test]
async fn test_extension_method_request() {
    if !can_bind_localhost() {
        return;
    }
    execute_with_method(&webreq::mutators::method("PURGE"), "PURGE").await;
}
