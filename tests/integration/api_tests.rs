//! API integration tests.
//!
//! These run against a live server with a seeded staff account
//! (admin/admin). Run with: cargo test -- --ignored

use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8000/api/v1";

/// Log in as the seeded staff user and return the token
async fn get_staff_token(client: &Client) -> String {
    let response = client
        .post(format!("{}/auth/login", BASE_URL))
        .json(&json!({
            "username": "admin",
            "password": "admin"
        }))
        .send()
        .await
        .expect("Failed to send login request");

    let body: Value = response.json().await.expect("Failed to parse login response");
    body["token"].as_str().expect("No token in response").to_string()
}

/// Register a fresh user and return its token
async fn register_and_login(client: &Client, suffix: &str) -> String {
    let username = format!("tester_{}", suffix);

    let response = client
        .post(format!("{}/auth/register", BASE_URL))
        .json(&json!({
            "username": username,
            "password": "testpass"
        }))
        .send()
        .await
        .expect("Failed to send register request");
    assert!(response.status().is_success() || response.status() == 409);

    let response = client
        .post(format!("{}/auth/login", BASE_URL))
        .json(&json!({
            "username": username,
            "password": "testpass"
        }))
        .send()
        .await
        .expect("Failed to send login request");

    let body: Value = response.json().await.expect("Failed to parse login response");
    body["token"].as_str().expect("No token in response").to_string()
}

/// Unique suffix so repeated runs do not collide on usernames/names
fn unique_suffix() -> String {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos()
        .to_string()
}

/// Create a region, category and active attraction; returns the attraction id
async fn create_attraction(client: &Client, staff_token: &str, suffix: &str) -> i64 {
    let region: Value = client
        .post(format!("{}/regions", BASE_URL))
        .bearer_auth(staff_token)
        .json(&json!({"name": format!("Region {}", suffix)}))
        .send()
        .await
        .expect("Failed to create region")
        .json()
        .await
        .expect("Failed to parse region");

    let category: Value = client
        .post(format!("{}/categories", BASE_URL))
        .bearer_auth(staff_token)
        .json(&json!({"name": format!("Category {}", suffix)}))
        .send()
        .await
        .expect("Failed to create category")
        .json()
        .await
        .expect("Failed to parse category");

    let response = client
        .post(format!("{}/attractions", BASE_URL))
        .bearer_auth(staff_token)
        .json(&json!({
            "name": format!("Attraction {}", suffix),
            "region_id": region["id"],
            "category_id": category["id"],
            "description": "A scenic test spot",
            "status": "active"
        }))
        .send()
        .await
        .expect("Failed to create attraction");
    assert_eq!(response.status(), 201);

    let body: Value = response.json().await.expect("Failed to parse attraction");
    body["id"].as_i64().expect("No attraction id")
}

/// Create a route; returns its id
async fn create_route(client: &Client, staff_token: &str, suffix: &str) -> i64 {
    let response = client
        .post(format!("{}/routes", BASE_URL))
        .bearer_auth(staff_token)
        .json(&json!({
            "title": format!("Route {}", suffix),
            "description": "Test route",
            "duration_days": 3,
            "budget_range": "$200-300",
            "difficulty": "easy",
            "distance_km": 120
        }))
        .send()
        .await
        .expect("Failed to create route");
    assert_eq!(response.status(), 201);

    let body: Value = response.json().await.expect("Failed to parse route");
    body["id"].as_i64().expect("No route id")
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_login_invalid_credentials() {
    let client = Client::new();

    let response = client
        .post(format!("{}/auth/login", BASE_URL))
        .json(&json!({
            "username": "admin",
            "password": "wrong"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 401);
}

#[tokio::test]
#[ignore]
async fn test_submitted_review_is_pending_despite_spoofed_fields() {
    let client = Client::new();
    let suffix = unique_suffix();
    let staff = get_staff_token(&client).await;
    let user = register_and_login(&client, &suffix).await;
    let attraction_id = create_attraction(&client, &staff, &suffix).await;

    // Spoofed status and author must be ignored
    let response = client
        .post(format!("{}/reviews", BASE_URL))
        .bearer_auth(&user)
        .json(&json!({
            "attraction": attraction_id,
            "rating": 5,
            "text": "Great place",
            "status": "approved",
            "author_id": 1
        }))
        .send()
        .await
        .expect("Failed to submit review");
    assert_eq!(response.status(), 201);

    let review: Value = response.json().await.expect("Failed to parse review");
    assert_eq!(review["status"], "pending");
    assert_ne!(review["author_id"], 1);
}

#[tokio::test]
#[ignore]
async fn test_review_rating_out_of_range_is_rejected() {
    let client = Client::new();
    let suffix = unique_suffix();
    let staff = get_staff_token(&client).await;
    let user = register_and_login(&client, &suffix).await;
    let attraction_id = create_attraction(&client, &staff, &suffix).await;

    for bad_rating in [0, 6] {
        let response = client
            .post(format!("{}/reviews", BASE_URL))
            .bearer_auth(&user)
            .json(&json!({
                "attraction": attraction_id,
                "rating": bad_rating,
                "text": "Out of range"
            }))
            .send()
            .await
            .expect("Failed to send request");
        assert_eq!(response.status(), 400);

        let body: Value = response.json().await.expect("Failed to parse response");
        assert!(body["error"].is_string());
    }
}

#[tokio::test]
#[ignore]
async fn test_moderation_invalid_status_is_rejected_without_mutation() {
    let client = Client::new();
    let suffix = unique_suffix();
    let staff = get_staff_token(&client).await;
    let user = register_and_login(&client, &suffix).await;
    let attraction_id = create_attraction(&client, &staff, &suffix).await;

    let review: Value = client
        .post(format!("{}/reviews", BASE_URL))
        .bearer_auth(&user)
        .json(&json!({"attraction": attraction_id, "rating": 4, "text": "ok"}))
        .send()
        .await
        .expect("Failed to submit review")
        .json()
        .await
        .expect("Failed to parse review");
    let review_id = review["id"].as_i64().unwrap();

    let response = client
        .post(format!("{}/reviews/{}/moderate", BASE_URL, review_id))
        .bearer_auth(&staff)
        .json(&json!({"status": "escalated"}))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 400);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "Invalid status");

    // The review must still be pending: its author can still see it
    let reviews: Value = client
        .get(format!("{}/reviews?attraction={}", BASE_URL, attraction_id))
        .bearer_auth(&user)
        .send()
        .await
        .expect("Failed to list reviews")
        .json()
        .await
        .expect("Failed to parse reviews");
    let found = reviews
        .as_array()
        .unwrap()
        .iter()
        .find(|r| r["id"].as_i64() == Some(review_id))
        .expect("Review disappeared");
    assert_eq!(found["status"], "pending");
}

#[tokio::test]
#[ignore]
async fn test_moderation_requires_staff() {
    let client = Client::new();
    let suffix = unique_suffix();
    let staff = get_staff_token(&client).await;
    let user = register_and_login(&client, &suffix).await;
    let attraction_id = create_attraction(&client, &staff, &suffix).await;

    let review: Value = client
        .post(format!("{}/reviews", BASE_URL))
        .bearer_auth(&user)
        .json(&json!({"attraction": attraction_id, "rating": 4, "text": "ok"}))
        .send()
        .await
        .expect("Failed to submit review")
        .json()
        .await
        .expect("Failed to parse review");

    let response = client
        .post(format!("{}/reviews/{}/moderate", BASE_URL, review["id"]))
        .bearer_auth(&user)
        .json(&json!({"status": "approved"}))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 403);
}

#[tokio::test]
#[ignore]
async fn test_rating_reflects_only_approved_reviews() {
    let client = Client::new();
    let suffix = unique_suffix();
    let staff = get_staff_token(&client).await;
    let user = register_and_login(&client, &suffix).await;
    let attraction_id = create_attraction(&client, &staff, &suffix).await;

    let rating_of = |attraction: Value| attraction["rating"].as_f64().unwrap();

    // No reviews yet: rating is 0
    let attraction: Value = client
        .get(format!("{}/attractions/{}", BASE_URL, attraction_id))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(rating_of(attraction), 0.0);

    // A pending 5-star review does not influence the rating
    let review: Value = client
        .post(format!("{}/reviews", BASE_URL))
        .bearer_auth(&user)
        .json(&json!({"attraction": attraction_id, "rating": 5, "text": "Superb"}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let attraction: Value = client
        .get(format!("{}/attractions/{}", BASE_URL, attraction_id))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(rating_of(attraction), 0.0);

    // Approval makes it count
    let response = client
        .post(format!("{}/reviews/{}/moderate", BASE_URL, review["id"]))
        .bearer_auth(&staff)
        .json(&json!({"status": "approved"}))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());

    let attraction: Value = client
        .get(format!("{}/attractions/{}", BASE_URL, attraction_id))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(rating_of(attraction), 5.0);

    // A second approved review with rating 4 averages to 4.5
    let review2: Value = client
        .post(format!("{}/reviews", BASE_URL))
        .bearer_auth(&user)
        .json(&json!({"attraction": attraction_id, "rating": 4, "text": "Nice"}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    client
        .post(format!("{}/reviews/{}/moderate", BASE_URL, review2["id"]))
        .bearer_auth(&staff)
        .json(&json!({"status": "approved"}))
        .send()
        .await
        .unwrap();

    let attraction: Value = client
        .get(format!("{}/attractions/{}", BASE_URL, attraction_id))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(rating_of(attraction), 4.5);
}

#[tokio::test]
#[ignore]
async fn test_review_visibility_widens_with_privilege() {
    let client = Client::new();
    let suffix = unique_suffix();
    let staff = get_staff_token(&client).await;
    let author = register_and_login(&client, &format!("a{}", suffix)).await;
    let other = register_and_login(&client, &format!("b{}", suffix)).await;
    let attraction_id = create_attraction(&client, &staff, &suffix).await;

    // One pending review by the author
    let review: Value = client
        .post(format!("{}/reviews", BASE_URL))
        .bearer_auth(&author)
        .json(&json!({"attraction": attraction_id, "rating": 3, "text": "Hidden for now"}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let review_id = review["id"].as_i64().unwrap();

    let list_ids = |body: Value| -> Vec<i64> {
        body.as_array()
            .unwrap()
            .iter()
            .map(|r| r["id"].as_i64().unwrap())
            .collect()
    };

    // Anonymous: not visible
    let anon: Value = client
        .get(format!("{}/reviews?attraction={}", BASE_URL, attraction_id))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(!list_ids(anon).contains(&review_id));

    // Another authenticated user: not visible either
    let foreign: Value = client
        .get(format!("{}/reviews?attraction={}", BASE_URL, attraction_id))
        .bearer_auth(&other)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(!list_ids(foreign).contains(&review_id));

    // The author sees their own pending review
    let own: Value = client
        .get(format!("{}/reviews?attraction={}", BASE_URL, attraction_id))
        .bearer_auth(&author)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(list_ids(own).contains(&review_id));

    // Staff see it too
    let staff_list: Value = client
        .get(format!("{}/reviews?attraction={}", BASE_URL, attraction_id))
        .bearer_auth(&staff)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(list_ids(staff_list).contains(&review_id));
}

#[tokio::test]
#[ignore]
async fn test_booking_price_and_status_are_server_computed() {
    let client = Client::new();
    let suffix = unique_suffix();
    let staff = get_staff_token(&client).await;
    let user = register_and_login(&client, &suffix).await;
    let route_id = create_route(&client, &staff, &suffix).await;

    // Spoofed total_price and status must be ignored
    let response = client
        .post(format!("{}/bookings", BASE_URL))
        .bearer_auth(&user)
        .json(&json!({
            "route": route_id,
            "date": "2026-09-01",
            "people_count": 3,
            "total_price": "1.00",
            "status": "paid"
        }))
        .send()
        .await
        .expect("Failed to create booking");
    assert_eq!(response.status(), 201);

    let booking: Value = response.json().await.expect("Failed to parse booking");
    assert_eq!(booking["status"], "pending");
    // price_per_person (100) x 3, serialized as a decimal string
    let price: f64 = booking["total_price"].as_str().unwrap().parse().unwrap();
    assert_eq!(price, 300.0);

    // Pay flips the status
    let response = client
        .post(format!("{}/bookings/{}/pay", BASE_URL, booking["id"]))
        .bearer_auth(&user)
        .send()
        .await
        .expect("Failed to pay booking");
    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse pay response");
    assert_eq!(body["status"], "payment successful");
    assert_eq!(body["booking"]["status"], "paid");
}

#[tokio::test]
#[ignore]
async fn test_booking_people_count_must_be_positive() {
    let client = Client::new();
    let suffix = unique_suffix();
    let staff = get_staff_token(&client).await;
    let user = register_and_login(&client, &suffix).await;
    let route_id = create_route(&client, &staff, &suffix).await;

    let response = client
        .post(format!("{}/bookings", BASE_URL))
        .bearer_auth(&user)
        .json(&json!({
            "route": route_id,
            "date": "2026-09-01",
            "people_count": 0
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_foreign_booking_is_hidden_not_forbidden() {
    let client = Client::new();
    let suffix = unique_suffix();
    let staff = get_staff_token(&client).await;
    let owner = register_and_login(&client, &format!("o{}", suffix)).await;
    let intruder = register_and_login(&client, &format!("i{}", suffix)).await;
    let route_id = create_route(&client, &staff, &suffix).await;

    let booking: Value = client
        .post(format!("{}/bookings", BASE_URL))
        .bearer_auth(&owner)
        .json(&json!({"route": route_id, "date": "2026-09-01"}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let booking_id = booking["id"].as_i64().unwrap();

    // Ownership scoping hides the booking entirely: 404, not 403
    let response = client
        .post(format!("{}/bookings/{}/pay", BASE_URL, booking_id))
        .bearer_auth(&intruder)
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 404);

    // And it never shows up in the intruder's list (staff included have no
    // wider scope for bookings)
    let listed: Value = client
        .get(format!("{}/bookings", BASE_URL))
        .bearer_auth(&intruder)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(listed
        .as_array()
        .unwrap()
        .iter()
        .all(|b| b["id"].as_i64() != Some(booking_id)));

    let staff_listed: Value = client
        .get(format!("{}/bookings", BASE_URL))
        .bearer_auth(&staff)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(staff_listed
        .as_array()
        .unwrap()
        .iter()
        .all(|b| b["id"].as_i64() != Some(booking_id)));
}

#[tokio::test]
#[ignore]
async fn test_chat_empty_message_short_circuits() {
    let client = Client::new();

    let response = client
        .post(format!("{}/chat/ask", BASE_URL))
        .json(&json!({"message": "   "}))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["reply"].as_str().unwrap().starts_with("Please tell me"));
    assert_eq!(body["recommendations"].as_array().unwrap().len(), 0);
}

#[tokio::test]
#[ignore]
async fn test_chat_returns_grounded_recommendations() {
    let client = Client::new();
    let suffix = unique_suffix();
    let staff = get_staff_token(&client).await;
    let attraction_id = create_attraction(&client, &staff, &suffix).await;

    let response = client
        .post(format!("{}/chat/ask", BASE_URL))
        .json(&json!({"message": format!("Attraction {}", suffix)}))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    let recs = body["recommendations"].as_array().unwrap();
    assert!(recs.iter().any(|r| r["id"].as_i64() == Some(attraction_id)));
    assert!(recs.iter().all(|r| r["type"] == "attraction"));
    assert!(recs.len() <= 3);
    // The reply is present even if the provider is down
    assert!(body["reply"].is_string());
}

#[tokio::test]
#[ignore]
async fn test_draft_attractions_hidden_from_non_staff() {
    let client = Client::new();
    let suffix = unique_suffix();
    let staff = get_staff_token(&client).await;
    let attraction_id = create_attraction(&client, &staff, &suffix).await;

    // Move it back to draft
    let response = client
        .put(format!("{}/attractions/{}", BASE_URL, attraction_id))
        .bearer_auth(&staff)
        .json(&json!({"status": "draft"}))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());

    // Anonymous GET: hidden
    let response = client
        .get(format!("{}/attractions/{}", BASE_URL, attraction_id))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 404);

    // Staff GET: visible
    let response = client
        .get(format!("{}/attractions/{}", BASE_URL, attraction_id))
        .bearer_auth(&staff)
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());
}

#[tokio::test]
#[ignore]
async fn test_admin_stats_requires_staff() {
    let client = Client::new();
    let suffix = unique_suffix();
    let user = register_and_login(&client, &suffix).await;

    let response = client
        .get(format!("{}/admin/stats", BASE_URL))
        .bearer_auth(&user)
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 403);

    let staff = get_staff_token(&client).await;
    let response = client
        .get(format!("{}/admin/stats", BASE_URL))
        .bearer_auth(&staff)
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["total_users"].is_number());
    assert!(body["pending_reviews"].is_number());
    assert!(body["popular_destinations"].is_array());
}
