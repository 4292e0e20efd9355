//! Integration tests for apiprobe using wiremock
//!
//! The library client is blocking, so each test drives the mock server on an
//! explicit tokio runtime and calls `fetch` from the plain test thread.

use apiprobe::{fetch, walk, DocumentType, ProbeError, TemplateRequest, DEFAULT_USER_AGENT};
use tokio::runtime::Runtime;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Install the test tracing subscriber; later calls are no-ops.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Start a server answering GET /data with the given status and body.
fn serve_body(rt: &Runtime, status: u16, body: &str, content_type: &str) -> MockServer {
    init_tracing();
    rt.block_on(async {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/data"))
            .respond_with(ResponseTemplate::new(status).set_body_raw(body.to_owned(), content_type))
            .mount(&server)
            .await;
        server
    })
}

#[test]
fn test_json_fetch_and_walk() {
    let rt = Runtime::new().unwrap();
    let server = serve_body(
        &rt,
        200,
        "{\"name\":\"test\",\"nested\":{\"a\":1}}",
        "application/json",
    );

    let resp = fetch(TemplateRequest::new(format!("{}/data", server.uri()))).unwrap();

    assert_eq!(resp.document_type(), DocumentType::Json);
    assert!(resp.is_parsed());
    let names: Vec<&str> = walk(&resp).collect();
    assert_eq!(names, vec!["name", "nested", "a"]);
}

#[test]
fn test_xml_fetch_and_walk() {
    let rt = Runtime::new().unwrap();
    let server = serve_body(
        &rt,
        200,
        "<?xml version=\"1.0\"?><root><child/></root>",
        "application/xml",
    );

    let resp = fetch(TemplateRequest::new(format!("{}/data", server.uri()))).unwrap();

    assert_eq!(resp.document_type(), DocumentType::Xml);
    assert!(resp.is_parsed());
    let names: Vec<&str> = walk(&resp).collect();
    assert_eq!(names, vec!["root", "child"]);
}

#[test]
fn test_html_fetch_is_opaque() {
    let rt = Runtime::new().unwrap();
    let server = serve_body(&rt, 200, "<html><body>hi</body></html>", "text/html");

    let resp = fetch(TemplateRequest::new(format!("{}/data", server.uri()))).unwrap();

    assert_eq!(resp.document_type(), DocumentType::Html);
    assert!(resp.is_parsed());
    let traversal = walk(&resp);
    assert!(!traversal.is_supported());
    assert_eq!(traversal.count(), 0);
}

#[test]
fn test_plain_text_is_unknown() {
    let rt = Runtime::new().unwrap();
    let server = serve_body(&rt, 200, "just some text", "text/plain");

    let resp = fetch(TemplateRequest::new(format!("{}/data", server.uri()))).unwrap();

    assert_eq!(resp.document_type(), DocumentType::Unknown);
    assert!(!resp.is_parsed());
    assert_eq!(resp.body(), "just some text");
    assert!(!walk(&resp).is_supported());
}

#[test]
fn test_empty_body_is_unknown() {
    let rt = Runtime::new().unwrap();
    let server = serve_body(&rt, 200, "", "text/plain");

    let resp = fetch(TemplateRequest::new(format!("{}/data", server.uri()))).unwrap();

    assert_eq!(resp.document_type(), DocumentType::Unknown);
    assert!(!resp.is_parsed());
    assert_eq!(walk(&resp).count(), 0);
}

#[test]
fn test_malformed_json_is_soft_failure() {
    let rt = Runtime::new().unwrap();
    let server = serve_body(&rt, 200, "{\"a\":", "application/json");

    // Fetch succeeds; only the structural parse failed.
    let resp = fetch(TemplateRequest::new(format!("{}/data", server.uri()))).unwrap();

    assert_eq!(resp.document_type(), DocumentType::Json);
    assert!(!resp.is_parsed());
    assert!(resp.parse_error().is_some());
    assert_eq!(resp.body(), "{\"a\":");
}

#[test]
fn test_error_status_is_hard_failure() {
    let rt = Runtime::new().unwrap();
    let server = serve_body(&rt, 404, "not found", "text/plain");

    let result = fetch(TemplateRequest::new(format!("{}/data", server.uri())));

    assert!(matches!(result, Err(ProbeError::Http { status: 404 })));
}

#[test]
fn test_connection_failure_is_hard_failure() {
    init_tracing();
    // Nothing listens on this port.
    let result = fetch(TemplateRequest::new("http://127.0.0.1:9/data"));
    assert!(matches!(result, Err(ProbeError::Transport(_))));
}

#[test]
fn test_template_substitution_reaches_the_wire() {
    init_tracing();
    let rt = Runtime::new().unwrap();
    let server = rt.block_on(async {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/42"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{\"id\":42}"))
            .mount(&server)
            .await;
        server
    });

    let req = TemplateRequest::new(format!("{}/users/[id]", server.uri())).param("id", "42");
    let resp = fetch(req).unwrap();

    assert_eq!(resp.document_type(), DocumentType::Json);
    // The response records the expanded URL, not the template.
    let expanded = format!("{}/users/42", server.uri());
    assert_eq!(resp.url(), Some(expanded.as_str()));
}

#[test]
fn test_default_user_agent_sent() {
    init_tracing();
    let rt = Runtime::new().unwrap();
    let server = rt.block_on(async {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/data"))
            .and(header("user-agent", DEFAULT_USER_AGENT))
            .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
            .mount(&server)
            .await;
        server
    });

    let resp = fetch(TemplateRequest::new(format!("{}/data", server.uri()))).unwrap();
    assert_eq!(resp.document_type(), DocumentType::Json);
}

#[test]
fn test_caller_headers_sent_and_user_agent_overridable() {
    init_tracing();
    let rt = Runtime::new().unwrap();
    let server = rt.block_on(async {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/data"))
            .and(header("x-api-key", "secret"))
            .and(header("user-agent", "custom-agent/1.0"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
            .mount(&server)
            .await;
        server
    });

    let req = TemplateRequest::new(format!("{}/data", server.uri()))
        .header("X-Api-Key", "secret")
        .header("User-Agent", "custom-agent/1.0");
    let resp = fetch(req).unwrap();
    assert_eq!(resp.document_type(), DocumentType::Json);
}

#[test]
fn test_missing_placeholder_sends_nothing() {
    init_tracing();
    let rt = Runtime::new().unwrap();
    let server = rt.block_on(async {
        let server = MockServer::start().await;
        // No mounted mocks: any request would 404 and fail the fetch anyway.
        server
    });

    let req = TemplateRequest::new(format!("{}/data", server.uri())).param("id", "42");
    let result = fetch(req);

    assert!(matches!(
        result,
        Err(ProbeError::MissingPlaceholder { ref name }) if name == "id"
    ));
    let received = rt.block_on(server.received_requests()).unwrap_or_default();
    assert!(received.is_empty());
}
