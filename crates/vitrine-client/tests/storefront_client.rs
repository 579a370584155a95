//! Integration tests for `StorefrontClient`.
//!
//! Uses `wiremock` to stand up a local HTTP server for each test so no real
//! network traffic is made. Covers the catalog happy path, the
//! all-or-nothing load semantics, cart/wishlist decoration degradation, and
//! status-to-error mapping.

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use vitrine_client::{ClientError, StorefrontClient};

/// Builds a `StorefrontClient` suitable for tests: 5-second timeout,
/// descriptive UA, no retries.
fn test_client(base_url: &str) -> StorefrontClient {
    StorefrontClient::new(base_url, 5, "vitrine-test/0.1", 0, 0)
        .expect("failed to build test StorefrontClient")
}

fn test_client_with_retries(base_url: &str, max_retries: u32) -> StorefrontClient {
    StorefrontClient::new(base_url, 5, "vitrine-test/0.1", max_retries, 0)
        .expect("failed to build test StorefrontClient")
}

fn product_json(id: u64, name: &str, price: f64, category: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "description": format!("{name} description"),
        "price": price,
        "original_price": null,
        "discount_percentage": null,
        "stock": 3,
        "category": category,
        "material": "Sterling Silver",
        "grade": "AAA",
        "images": [format!("https://cdn.example.com/{id}.jpg")],
        "gem": null,
        "coating": null,
        "size": null
    })
}

fn facet_json(id: &str, label: &str) -> serde_json::Value {
    json!({ "id": id, "label": label })
}

/// Mounts all four catalog endpoints with small valid bodies.
async fn mount_full_catalog(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&json!([
            product_json(1, "Aurora Ring", 100.0, "Rings"),
            product_json(2, "Tidal Earrings", 500.0, "Earrings"),
        ])))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/categories"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&json!([
            facet_json("cat-rings", "Rings"),
            facet_json("cat-earrings", "Earrings"),
        ])))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/materials"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&json!([
            facet_json("mat-silver", "Sterling Silver"),
        ])))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/grades"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(&json!([facet_json("grade-aaa", "AAA")])),
        )
        .mount(server)
        .await;
}

#[tokio::test]
async fn load_catalog_assembles_all_four_collections() {
    let server = MockServer::start().await;
    mount_full_catalog(&server).await;

    let client = test_client(&server.uri());
    let catalog = client.load_catalog().await.expect("catalog load failed");

    assert_eq!(catalog.products.len(), 2);
    assert_eq!(catalog.categories.len(), 2);
    assert_eq!(catalog.materials.len(), 1);
    assert_eq!(catalog.grades.len(), 1);
    assert_eq!(catalog.price_bounds(), (100.0, 500.0));
}

#[tokio::test]
async fn load_catalog_fails_when_any_endpoint_fails() {
    let server = MockServer::start().await;

    // Mount the failing grades endpoint first so it wins the match; the
    // other three collections still succeed.
    Mock::given(method("GET"))
        .and(path("/grades"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    mount_full_catalog(&server).await;

    let client = test_client(&server.uri());
    let result = client.load_catalog().await;
    assert!(
        matches!(result, Err(ClientError::UnexpectedStatus { status: 500, .. })),
        "expected UnexpectedStatus(500), got: {result:?}"
    );
}

#[tokio::test]
async fn fetch_products_passes_category_query_param() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products"))
        .and(query_param("category", "cat-rings"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&json!([
            product_json(1, "Aurora Ring", 100.0, "Rings"),
        ])))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let products = client
        .fetch_products(Some("cat-rings"))
        .await
        .expect("fetch failed");
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].id, 1);
}

#[tokio::test]
async fn fetch_products_maps_404_to_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client.fetch_products(None).await;
    assert!(
        matches!(result, Err(ClientError::NotFound { .. })),
        "expected NotFound, got: {result:?}"
    );
}

#[tokio::test]
async fn fetch_products_maps_unparseable_body_to_deserialize_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client.fetch_products(None).await;
    assert!(
        matches!(result, Err(ClientError::Deserialize { .. })),
        "expected Deserialize, got: {result:?}"
    );
}

#[tokio::test]
async fn rate_limited_request_retries_then_succeeds() {
    let server = MockServer::start().await;

    // First call 429, then success. `up_to_n_times` consumes the first mock.
    Mock::given(method("GET"))
        .and(path("/products"))
        .respond_with(ResponseTemplate::new(429).insert_header("Retry-After", "0"))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&json!([
            product_json(1, "Aurora Ring", 100.0, "Rings"),
        ])))
        .mount(&server)
        .await;

    let client = test_client_with_retries(&server.uri(), 1);
    let products = client.fetch_products(None).await.expect("retry failed");
    assert_eq!(products.len(), 1);
}

#[tokio::test]
async fn rate_limited_without_retries_surfaces_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products"))
        .respond_with(ResponseTemplate::new(429).insert_header("Retry-After", "7"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client.fetch_products(None).await;
    assert!(
        matches!(result, Err(ClientError::RateLimited { retry_after_secs: 7 })),
        "expected RateLimited, got: {result:?}"
    );
}

#[tokio::test]
async fn decorate_products_annotates_membership() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/u-1/cart"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&json!([
            { "product_id": 1, "quantity": 2 },
        ])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/users/u-1/wishlist"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&json!([
            { "product_id": 2 },
        ])))
        .mount(&server)
        .await;

    let products = vec![
        product_json(1, "Aurora Ring", 100.0, "Rings"),
        product_json(2, "Tidal Earrings", 500.0, "Earrings"),
        product_json(3, "Ember Ring", 250.0, "Rings"),
    ]
    .into_iter()
    .map(|v| serde_json::from_value::<vitrine_client::ApiProduct>(v).unwrap())
    .map(vitrine_client::ApiProduct::into_product)
    .collect();

    let client = test_client(&server.uri());
    let cards = client.decorate_products("u-1", products).await;

    assert_eq!(cards.len(), 3);
    assert!(cards[0].in_cart && !cards[0].in_wishlist);
    assert!(!cards[1].in_cart && cards[1].in_wishlist);
    assert!(!cards[2].in_cart && !cards[2].in_wishlist);
}

#[tokio::test]
async fn decoration_degrades_when_wishlist_service_fails() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/u-1/cart"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&json!([
            { "product_id": 1, "quantity": 1 },
        ])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/users/u-1/wishlist"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let products = vec![product_json(1, "Aurora Ring", 100.0, "Rings")]
        .into_iter()
        .map(|v| serde_json::from_value::<vitrine_client::ApiProduct>(v).unwrap())
        .map(vitrine_client::ApiProduct::into_product)
        .collect();

    let client = test_client(&server.uri());
    let cards = client.decorate_products("u-1", products).await;

    // Cart annotation survives; wishlist degrades to "not in wishlist".
    assert_eq!(cards.len(), 1);
    assert!(cards[0].in_cart);
    assert!(!cards[0].in_wishlist);
}
