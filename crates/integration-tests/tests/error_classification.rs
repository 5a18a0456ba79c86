//! Every failure path yields exactly one classified error

use copr_integration_tests::{authenticated_session, fixtures, session};
use copr_sdk::{
    BuildRequest, Configuration, CoprError, CoprService, DetailRequest, ListRequest,
    PlaygroundListRequest,
};
use wiremock::matchers::{any, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_list_api_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/coprs/jdaniels/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(fixtures::fail()))
        .expect(1)
        .mount(&server)
        .await;

    let result = session(&server).list(&ListRequest::new("jdaniels")).await;

    assert!(matches!(result, Err(CoprError::Rpc)));
    assert_eq!(server.received_requests().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_list_404() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/coprs/jdaniels/"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;

    let err = session(&server)
        .list(&ListRequest::new("jdaniels"))
        .await
        .unwrap_err();

    assert!(matches!(err, CoprError::Http { status: 404, .. }));
    assert!(err.to_string().contains("404 Not Found"));
}

#[tokio::test]
async fn test_detail_404() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/coprs/mizdebsk/override/detail/"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;

    let err = session(&server)
        .detail(&DetailRequest::new("mizdebsk", "override"))
        .await
        .unwrap_err();

    assert!(err.to_string().contains("404 Not Found"));
}

#[tokio::test]
async fn test_detail_api_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/coprs/mizdebsk/override/detail/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(fixtures::fail()))
        .expect(1)
        .mount(&server)
        .await;

    let result = session(&server)
        .detail(&DetailRequest::new("mizdebsk", "override"))
        .await;

    assert!(matches!(result, Err(CoprError::Rpc)));
}

#[tokio::test]
async fn test_playground_api_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/playground/list/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(fixtures::fail()))
        .expect(1)
        .mount(&server)
        .await;

    let result = session(&server)
        .playground_list(&PlaygroundListRequest::new())
        .await;

    assert!(matches!(result, Err(CoprError::Rpc)));
}

#[tokio::test]
async fn test_build_fail() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/coprs/john/toy/new_build/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(fixtures::fail()))
        .expect(1)
        .mount(&server)
        .await;

    let result = authenticated_session(&server)
        .build(&BuildRequest::new("john", "toy"))
        .await;

    assert!(matches!(result, Err(CoprError::Rpc)));
    assert_eq!(server.received_requests().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_build_without_token_never_hits_server() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_body_json(fixtures::build_log4j()))
        .expect(0)
        .mount(&server)
        .await;

    let mut configuration = Configuration::new(server.uri());
    configuration.set_login(Some("test-login".to_string()));
    let session = CoprService::new().new_session(configuration).unwrap();

    let err = session
        .build(&BuildRequest::new("john", "toy").with_source_rpm("a"))
        .await
        .unwrap_err();

    assert!(matches!(err, CoprError::AuthenticationMissing));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_build_without_login_never_hits_server() {
    let server = MockServer::start().await;

    let mut configuration = Configuration::new(server.uri());
    configuration.set_token(Some("p4s5w0rd".to_string()));
    let session = CoprService::new().new_session(configuration).unwrap();

    let result = session.build(&BuildRequest::new("john", "toy")).await;

    assert!(matches!(result, Err(CoprError::AuthenticationMissing)));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_non_json_body_is_protocol_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let result = session(&server).list(&ListRequest::new("jdaniels")).await;

    assert!(matches!(result, Err(CoprError::Protocol(_))));
}

#[tokio::test]
async fn test_server_error_with_ok_body_is_http_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500).set_body_json(fixtures::list_single()))
        .mount(&server)
        .await;

    let err = session(&server)
        .list(&ListRequest::new("jdaniels"))
        .await
        .unwrap_err();

    assert!(matches!(err, CoprError::Http { status: 500, .. }));
    assert!(err.to_string().contains("Internal Server Error"));
}

#[tokio::test]
async fn test_unreachable_server_is_transport_failure() {
    let uri = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        format!("http://{}", listener.local_addr().unwrap())
    };

    let session = CoprService::new()
        .new_session(Configuration::new(uri))
        .unwrap();
    let result = session.list(&ListRequest::new("jdaniels")).await;

    tokio_test::assert_err!(&result);
    assert!(matches!(result, Err(CoprError::Transport(_))));
}

#[tokio::test]
async fn test_closed_session_makes_no_requests() {
    let server = MockServer::start().await;
    let session = session(&server);
    session.close();

    let result = session.list(&ListRequest::new("jdaniels")).await;

    assert!(matches!(result, Err(CoprError::SessionClosed)));
    assert!(server.received_requests().await.unwrap().is_empty());
}
