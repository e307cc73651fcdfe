use crate::scraper::ScraperError;
use crate::tests::utils::{body_json, post_json, serve, StubFetcher};

const LISTING_URL: &str =
    "https://www.zillow.com/homedetails/123-Main-St-Springfield-IL-62704/12345678_zpid/";

#[test]
fn missing_url_is_a_client_error() {
    let fetcher = StubFetcher::returning("3 bd", "");

    for body in [r#"{}"#, r#"{"zillowUrl":""}"#, r#"{"zillowUrl":"   "}"#, r#"{"zillowUrl":null}"#] {
        let resp = serve(post_json("/scrape-property", body), &fetcher);

        assert_eq!(resp.status(), 400, "body {body}");
        assert_eq!(resp.headers()["Access-Control-Allow-Origin"], "*");
        assert_eq!(
            body_json(resp),
            serde_json::json!({ "success": false, "error": "zillowUrl is required" })
        );
    }

    // extraction never starts
    assert!(fetcher.calls().is_empty());
}

#[test]
fn malformed_json_is_a_client_error() {
    let fetcher = StubFetcher::returning("", "");

    let resp = serve(post_json("/scrape-property", "{not json"), &fetcher);

    assert_eq!(resp.status(), 400);
    let body = body_json(resp);
    assert_eq!(body["success"], false);
    assert!(body["error"].as_str().unwrap().starts_with("Invalid JSON body"));
}

#[test]
fn oversized_body_is_rejected() {
    let fetcher = StubFetcher::returning("", "");
    let padding = "x".repeat(70 * 1024);
    let body = format!(r#"{{"zillowUrl":"{LISTING_URL}","pad":"{padding}"}}"#);

    let resp = serve(post_json("/scrape-property", &body), &fetcher);

    assert_eq!(resp.status(), 400);
    assert!(fetcher.calls().is_empty());
}

#[test]
fn success_envelope_wraps_extracted_listing() {
    let fetcher = StubFetcher::returning(
        "Single family home. 3 bd, 2 ba, 1,850 sqft. Built in 1995. Zestimate $325,000. Rent Zestimate $2,200/mo",
        r#"<img src="https://photos.zillowstatic.com/fp/384_256_front.jpg">"#,
    );
    let body = format!(r#"{{"zillowUrl":"  {LISTING_URL}  "}}"#);

    let resp = serve(post_json("/scrape-property", &body), &fetcher);

    assert_eq!(resp.status(), 200);
    assert_eq!(resp.headers()["Content-Type"], "application/json");
    assert_eq!(resp.headers()["Access-Control-Allow-Methods"], "POST, GET, OPTIONS");

    let json = body_json(resp);
    let data = &json["propertyData"];
    assert_eq!(json["success"], true);
    assert_eq!(data["sourceUrl"], LISTING_URL);
    assert_eq!(data["address"], "123 Main St Springfield");
    assert_eq!(data["state"], "IL");
    assert_eq!(data["zipCode"], "62704");
    assert_eq!(data["bedrooms"], 3);
    assert_eq!(data["squareFeet"], 1850);
    assert_eq!(data["propertyType"], "single_family");
    assert_eq!(data["estimatedValue"], 325000);
    assert_eq!(data["monthlyRent"], 2200);
    assert_eq!(
        data["images"],
        serde_json::json!(["https://photos.zillowstatic.com/fp/1024_768_front.jpg"])
    );

    // url is trimmed and fetched exactly once
    assert_eq!(fetcher.calls(), vec![LISTING_URL.to_string()]);
}

#[test]
fn root_path_is_an_alias() {
    let fetcher = StubFetcher::returning("", "");
    let body = format!(r#"{{"zillowUrl":"{LISTING_URL}"}}"#);

    let resp = serve(post_json("/", &body), &fetcher);

    assert_eq!(resp.status(), 200);
    let json = body_json(resp);
    assert_eq!(json["success"], true);
    assert!(json["propertyData"]["bedrooms"].is_null());
}

#[test]
fn upstream_failure_carries_provider_detail() {
    let fetcher = StubFetcher::failing(|| ScraperError::Upstream {
        status: 402,
        body: "Payment required".into(),
    });
    let body = format!(r#"{{"zillowUrl":"{LISTING_URL}"}}"#);

    let resp = serve(post_json("/scrape-property", &body), &fetcher);

    assert_eq!(resp.status(), 500);
    let json = body_json(resp);
    assert_eq!(json["success"], false);
    let error = json["error"].as_str().unwrap();
    assert!(error.contains("402"));
    assert!(error.contains("Payment required"));
}
