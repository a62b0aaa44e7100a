// tests/workflow_api_tests.rs
mod common;

use actix_web::http::StatusCode;
use actix_web::test;
use common::*;
use product_catalog::CatalogStore;
use serde_json::{json, Value};
use std::collections::HashSet;

#[actix_web::test]
async fn test_complete_product_lifecycle() {
  let app = test_app!(CatalogStore::seeded());

  // 1. Create
  let payload = product_with(json!({ "name": "Lifecycle Melon", "price": 4.0, "category": "integration-test" }));
  let resp = test::call_service(&app, post_json("/api/products", &payload).to_request()).await;
  assert_eq!(resp.status(), StatusCode::CREATED);
  let created: Value = test::read_body_json(resp).await;
  let id = created["id"].as_str().unwrap().to_string();
  let uri = format!("/api/products/{}", id);

  // 2. Fetch
  let fetched: Value = test::call_and_read_body_json(&app, get(&uri).to_request()).await;
  assert_eq!(fetched["name"], "Lifecycle Melon");

  // 3. Update
  let updates = json!({ "name": "Updated Lifecycle Melon", "price": 6.0, "inStock": false });
  let updated: Value = test::call_and_read_body_json(&app, put_json(&uri, &updates).to_request()).await;
  assert_eq!(updated["name"], "Updated Lifecycle Melon");
  assert_eq!(updated["price"], 6.0);
  assert_eq!(updated["inStock"], false);

  // 4. Search for the new name
  let found: Value = test::call_and_read_body_json(
    &app,
    get("/api/products?search=Updated%20Lifecycle%20Melon").to_request(),
  )
  .await;
  assert_eq!(ids(&found), vec![id.clone()]);

  // 5. Filter by its category
  let in_category: Value =
    test::call_and_read_body_json(&app, get("/api/products?category=integration-test").to_request()).await;
  assert!(ids(&in_category).contains(&id));

  // 6. Delete, 7. gone
  let resp = test::call_service(&app, delete(&uri).to_request()).await;
  assert_eq!(resp.status(), StatusCode::NO_CONTENT);
  let resp = test::call_service(&app, get(&uri).to_request()).await;
  assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_bulk_operations() {
  let app = test_app!(CatalogStore::new());
  let mut created_ids = Vec::new();

  for i in 0..5 {
    let payload = product_with(json!({ "name": format!("Bulk {}", i) }));
    let body: Value = test::call_and_read_body_json(&app, post_json("/api/products", &payload).to_request()).await;
    created_ids.push(body["id"].as_str().unwrap().to_string());
  }

  for id in &created_ids {
    let uri = format!("/api/products/{}", id);
    let body = json!({ "name": format!("Bulk Updated Product {}", id) });
    let resp = test::call_service(&app, put_json(&uri, &body).to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
  }

  for id in &created_ids {
    let resp = test::call_service(&app, delete(&format!("/api/products/{}", id)).to_request()).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
  }

  for id in &created_ids {
    let resp = test::call_service(&app, get(&format!("/api/products/{}", id)).to_request()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
  }

  let list: Value = test::call_and_read_body_json(&app, get("/api/products").to_request()).await;
  assert_eq!(list["pagination"]["total"], 0);
  assert_eq!(list["pagination"]["totalPages"], 0);
}

#[actix_web::test]
async fn test_pagination_pages_are_disjoint() {
  let app = test_app!(CatalogStore::new());
  for i in 0..15 {
    let payload = product_with(json!({ "name": format!("Paged {}", i) }));
    test::call_service(&app, post_json("/api/products", &payload).to_request()).await;
  }

  let page1: Value = test::call_and_read_body_json(&app, get("/api/products?page=1&limit=5").to_request()).await;
  let page2: Value = test::call_and_read_body_json(&app, get("/api/products?page=2&limit=5").to_request()).await;

  let first: HashSet<String> = ids(&page1).into_iter().collect();
  let second: HashSet<String> = ids(&page2).into_iter().collect();
  assert_eq!(first.len(), 5);
  assert_eq!(second.len(), 5);
  assert!(first.is_disjoint(&second));
  assert_eq!(page1["pagination"]["page"], 1);
  assert_eq!(page2["pagination"]["page"], 2);
  assert_eq!(page1["pagination"]["totalPages"], 3);
}

#[actix_web::test]
async fn test_category_filtering_across_new_categories() {
  let app = test_app!(CatalogStore::seeded());
  let categories = ["test-category-1", "test-category-2"];

  for category in categories {
    for i in 0..3 {
      let payload = product_with(json!({ "name": format!("{} item {}", category, i), "category": category }));
      test::call_service(&app, post_json("/api/products", &payload).to_request()).await;
    }
  }

  for category in categories {
    let uri = format!("/api/products?category={}", category);
    let body: Value = test::call_and_read_body_json(&app, get(&uri).to_request()).await;
    let products = body["products"].as_array().unwrap();
    assert_eq!(products.len(), 3);
    assert!(products.iter().all(|p| p["category"] == category));
  }
}
