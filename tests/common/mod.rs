//! Shared HTTP flows run against every storage backend.
//!
//! Flows only assert on rows they create themselves, so they also hold against a
//! database that already contains data.

#![allow(dead_code)]

use cashier_api::{create_router, AppState, Repositories};
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Serves the router on an ephemeral port and returns its base URL.
pub async fn spawn_app(repositories: Repositories) -> Result<String, Box<dyn std::error::Error>> {
    let router = create_router(AppState::new(repositories));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let port = listener.local_addr()?.port();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    Ok(format!("http://127.0.0.1:{}", port))
}

pub fn unique(prefix: &str) -> String {
    static COUNTER: AtomicU64 = AtomicU64::new(0);
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or_default();
    format!("{}-{}-{}", prefix, nanos, COUNTER.fetch_add(1, Ordering::Relaxed))
}

pub async fn send_json(
    client: &Client,
    method: reqwest::Method,
    url: String,
    body: Option<Value>,
) -> Result<(StatusCode, Value), Box<dyn std::error::Error>> {
    let mut request = client.request(method, url);
    if let Some(body) = body {
        request = request.json(&body);
    }
    let response = request.send().await?;
    let status = response.status();
    let body: Value = response.json().await?;
    Ok((status, body))
}

pub async fn create_category(client: &Client, base: &str, name: &str) -> Result<i64, Box<dyn std::error::Error>> {
    let (status, body) = send_json(
        client,
        reqwest::Method::POST,
        format!("{}/categories", base),
        Some(json!({"name": name, "description": format!("{} description", name)})),
    )
    .await?;
    assert_eq!(status, StatusCode::CREATED, "{}", body);
    Ok(body["data"]["id"].as_i64().ok_or("missing id")?)
}

pub async fn create_product(
    client: &Client,
    base: &str,
    name: &str,
    category_id: Option<i64>,
) -> Result<i64, Box<dyn std::error::Error>> {
    let (status, body) = send_json(
        client,
        reqwest::Method::POST,
        format!("{}/products", base),
        Some(json!({"name": name, "price": 2500, "stock": 4, "category_id": category_id})),
    )
    .await?;
    assert_eq!(status, StatusCode::CREATED, "{}", body);
    Ok(body["data"]["id"].as_i64().ok_or("missing id")?)
}

pub async fn category_create_then_detail(client: &Client, base: &str) -> TestResult {
    let name = unique("category");
    let (status, created) = send_json(
        client,
        reqwest::Method::POST,
        format!("{}/categories", base),
        Some(json!({"id": 12345, "name": name, "description": "Daily goods"})),
    )
    .await?;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["status"], "success");
    assert_eq!(created["message"], "Category created successfully");
    assert_eq!(created["data"]["products"], json!([]));
    let id = created["data"]["id"].as_i64().ok_or("missing id")?;
    assert_ne!(id, 12345);

    let (status, detail) =
        send_json(client, reqwest::Method::GET, format!("{}/categories/{}", base, id), None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(detail["message"], "Category retrieved successfully");
    assert_eq!(
        detail["data"],
        json!({"id": id, "name": name, "description": "Daily goods", "products": []})
    );
    Ok(())
}

pub async fn uncategorized_product_has_empty_category(client: &Client, base: &str) -> TestResult {
    let name = unique("salt");
    let (status, created) = send_json(
        client,
        reqwest::Method::POST,
        format!("{}/products", base),
        Some(json!({"name": name, "price": 1500, "stock": 10, "category_id": null})),
    )
    .await?;
    assert_eq!(status, StatusCode::CREATED);
    assert!(created["data"].get("category").is_none());
    let id = created["data"]["id"].as_i64().ok_or("missing id")?;

    let (status, detail) =
        send_json(client, reqwest::Method::GET, format!("{}/products/{}", base, id), None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(detail["data"]["category_id"], Value::Null);
    assert_eq!(detail["data"]["category"], json!({"name": "", "description": ""}));
    Ok(())
}

pub async fn product_appears_once_in_category_detail(client: &Client, base: &str) -> TestResult {
    let category_name = unique("fruit");
    let category_id = create_category(client, base, &category_name).await?;
    let product_name = unique("apple");
    let product_id = create_product(client, base, &product_name, Some(category_id)).await?;

    let (status, detail) = send_json(
        client,
        reqwest::Method::GET,
        format!("{}/categories/{}", base, category_id),
        None,
    )
    .await?;
    assert_eq!(status, StatusCode::OK);
    let products = detail["data"]["products"].as_array().ok_or("products not a list")?;
    let matching: Vec<_> = products.iter().filter(|p| p["id"] == json!(product_id)).collect();
    assert_eq!(matching.len(), 1);
    assert_eq!(
        *matching[0],
        json!({"id": product_id, "name": product_name, "price": 2500, "stock": 4})
    );

    let (_, product) =
        send_json(client, reqwest::Method::GET, format!("{}/products/{}", base, product_id), None).await?;
    assert_eq!(product["data"]["category"]["name"], json!(category_name));
    Ok(())
}

pub async fn update_overrides_body_id(client: &Client, base: &str) -> TestResult {
    let id = create_category(client, base, &unique("old")).await?;
    let new_name = unique("renamed");

    let (status, updated) = send_json(
        client,
        reqwest::Method::PUT,
        format!("{}/categories/{}", base, id),
        Some(json!({"id": id + 1000, "name": new_name, "description": "changed"})),
    )
    .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["message"], "Category updated successfully");
    assert_eq!(updated["data"]["id"], json!(id));

    let (_, detail) =
        send_json(client, reqwest::Method::GET, format!("{}/categories/{}", base, id), None).await?;
    assert_eq!(detail["data"]["name"], json!(new_name));
    assert_eq!(detail["data"]["description"], "changed");

    let product_id = create_product(client, base, &unique("pen"), None).await?;
    let (status, updated) = send_json(
        client,
        reqwest::Method::PUT,
        format!("{}/products/{}", base, product_id),
        Some(json!({"name": "Pencil", "price": 900, "stock": 7, "category_id": id})),
    )
    .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        updated["data"],
        json!({"id": product_id, "name": "Pencil", "price": 900, "stock": 7, "category_id": id})
    );
    Ok(())
}

pub async fn missing_rows_are_not_found_everywhere(client: &Client, base: &str) -> TestResult {
    let category_id = create_category(client, base, &unique("gone")).await?;
    let product_id = create_product(client, base, &unique("gone"), None).await?;

    let (status, deleted) = send_json(
        client,
        reqwest::Method::DELETE,
        format!("{}/categories/{}", base, category_id),
        None,
    )
    .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted, json!({"status": "success", "message": "Category deleted successfully", "data": null}));

    let (status, _) = send_json(
        client,
        reqwest::Method::DELETE,
        format!("{}/products/{}", base, product_id),
        None,
    )
    .await?;
    assert_eq!(status, StatusCode::OK);

    // Deleted rows and well-formed ids beyond the stored integer range are both not found.
    for (resource, id, label) in [
        ("categories", category_id.to_string(), "Category"),
        ("products", product_id.to_string(), "Product"),
        ("categories", "99999999999".to_string(), "Category"),
        ("products", "-99999999999".to_string(), "Product"),
    ] {
        let url = format!("{}/{}/{}", base, resource, id);
        let expected = json!({"status": "error", "message": format!("{} not found", label), "data": null});

        let (status, body) = send_json(client, reqwest::Method::GET, url.clone(), None).await?;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, expected);

        let (status, body) = send_json(
            client,
            reqwest::Method::PUT,
            url.clone(),
            Some(json!({"name": "Ghost", "price": 1, "stock": 1})),
        )
        .await?;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, expected);

        let (status, body) = send_json(client, reqwest::Method::DELETE, url.clone(), None).await?;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, expected);

        // The failed update must not have resurrected the row.
        let (status, _) = send_json(client, reqwest::Method::GET, url, None).await?;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
    Ok(())
}

pub async fn list_shapes_are_stable(client: &Client, base: &str) -> TestResult {
    let category_id = create_category(client, base, &unique("listed")).await?;
    create_product(client, base, &unique("listed"), Some(category_id)).await?;
    create_product(client, base, &unique("loose"), None).await?;

    let (status, categories) =
        send_json(client, reqwest::Method::GET, format!("{}/categories", base), None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(categories["message"], "Categories retrieved successfully");
    let categories = categories["data"].as_array().ok_or("not a list")?;
    assert!(!categories.is_empty());
    assert!(categories.iter().all(|c| c["products"] == json!([])));

    let (status, products) =
        send_json(client, reqwest::Method::GET, format!("{}/products", base), None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(products["message"], "Products retrieved successfully");
    let products = products["data"].as_array().ok_or("not a list")?;
    assert!(products.len() >= 2);
    assert!(products.iter().all(|p| p["category"].is_object() && p.get("category_id").is_some()));
    Ok(())
}

pub async fn malformed_requests_are_rejected(client: &Client, base: &str) -> TestResult {
    let (status, body) =
        send_json(client, reqwest::Method::GET, format!("{}/categories/abc", base), None).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"status": "error", "message": "Invalid category ID", "data": null}));

    let (status, body) =
        send_json(client, reqwest::Method::DELETE, format!("{}/products/1.5", base), None).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid product ID");

    // An empty id after the trailing slash is malformed, not an unknown route.
    for (method, path, message) in [
        (reqwest::Method::GET, "/categories/", "Invalid category ID"),
        (reqwest::Method::PUT, "/categories/", "Invalid category ID"),
        (reqwest::Method::DELETE, "/products/", "Invalid product ID"),
        (reqwest::Method::GET, "/products/", "Invalid product ID"),
    ] {
        let (status, body) = send_json(client, method, format!("{}{}", base, path), None).await?;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", path);
        assert_eq!(body, json!({"status": "error", "message": message, "data": null}));
    }

    let response = client
        .post(format!("{}/products", base))
        .header(reqwest::header::CONTENT_TYPE, "application/json")
        .body("{\"name\": ")
        .send()
        .await?;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await?;
    assert_eq!(body["message"], "Invalid request body");

    let (status, body) = send_json(
        client,
        reqwest::Method::POST,
        format!("{}/products", base),
        Some(json!({"name": "Tea", "price": "cheap"})),
    )
    .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid request body");

    let (status, body) = send_json(
        client,
        reqwest::Method::POST,
        format!("{}/products", base),
        Some(json!({"name": "Debt", "price": -1, "stock": 0})),
    )
    .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], "error");
    Ok(())
}

pub async fn unsupported_methods_and_paths(client: &Client, base: &str) -> TestResult {
    let not_allowed = json!({"status": "error", "message": "Method not allowed", "data": null});

    for (method, path) in [
        (reqwest::Method::PATCH, "/categories"),
        (reqwest::Method::DELETE, "/products"),
        (reqwest::Method::POST, "/categories/1"),
        (reqwest::Method::POST, "/products/"),
        (reqwest::Method::POST, "/health"),
    ] {
        let (status, body) = send_json(client, method, format!("{}{}", base, path), None).await?;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED, "{}", path);
        assert_eq!(body, not_allowed);
    }

    let (status, body) =
        send_json(client, reqwest::Method::GET, format!("{}/nowhere", base), None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["status"], "error");
    Ok(())
}

pub async fn health_is_static(client: &Client, base: &str) -> TestResult {
    let (status, body) = send_json(client, reqwest::Method::GET, format!("{}/health", base), None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "success", "message": "API Running", "data": null}));
    Ok(())
}
