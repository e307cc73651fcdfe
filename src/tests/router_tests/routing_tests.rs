use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_json, request, serve, StubFetcher};
use http::Method;
use std::io::Read;

#[test]
fn preflight_answers_ok_with_cors_headers() {
    let fetcher = StubFetcher::returning("", "");

    let resp = serve(request(Method::OPTIONS, "/scrape-property"), &fetcher);

    assert_eq!(resp.status(), 200);
    let headers = resp.headers();
    assert_eq!(headers["Access-Control-Allow-Origin"], "*");
    assert_eq!(
        headers["Access-Control-Allow-Headers"],
        "authorization, x-client-info, apikey, content-type"
    );
    assert_eq!(headers["Access-Control-Allow-Methods"], "POST, GET, OPTIONS");

    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    assert_eq!(body, "ok");
    assert!(fetcher.calls().is_empty());
}

#[test]
fn health_reports_ok() {
    let fetcher = StubFetcher::returning("", "");

    let resp = serve(request(Method::GET, "/health"), &fetcher);

    assert_eq!(resp.status(), 200);
    assert_eq!(resp.headers()["Access-Control-Allow-Origin"], "*");
    assert_eq!(body_json(resp), serde_json::json!({ "status": "ok" }));
}

#[test]
fn unknown_route_is_not_found() {
    let fetcher = StubFetcher::returning("", "");

    let err = handle(request(Method::GET, "/nope"), &fetcher).unwrap_err();
    assert!(matches!(err, ServerError::NotFound));

    let resp = serve(request(Method::GET, "/nope"), &fetcher);
    assert_eq!(resp.status(), 404);
    assert_eq!(resp.headers()["Content-Type"], "application/json");
    assert_eq!(body_json(resp)["success"], false);
}

#[test]
fn wrong_method_on_known_path() {
    let fetcher = StubFetcher::returning("", "");

    let resp = serve(request(Method::GET, "/scrape-property"), &fetcher);
    assert_eq!(resp.status(), 405);

    let resp = serve(request(Method::POST, "/health"), &fetcher);
    assert_eq!(resp.status(), 405);
    assert!(fetcher.calls().is_empty());
}
