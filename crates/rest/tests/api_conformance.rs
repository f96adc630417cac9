//! API conformance tests.
//!
//! Tests the HTTP contract end to end over the in-memory backends:
//! - Status codes (200, 201, 400, 401, 404)
//! - Response body shapes
//! - Tenant scoping of item and order listings
//! - The behaviors clients depend on: one uniform 401 body for every
//!   failed login, and the orders-empty-is-404 / items-empty-is-200
//!   asymmetry

use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::TestServer;
use axum_test::multipart::{MultipartForm, Part};
use serde_json::{Value, json};

use warung_rest::{AppState, ServerConfig};
use warung_store::backends::memory::{MemoryBackend, MemoryBlobStore};
use warung_store::core::DocumentStore;

/// Creates a test server backed by fresh in-memory stores.
fn create_test_server() -> (TestServer, Arc<MemoryBackend>) {
    let store = Arc::new(MemoryBackend::new());
    let blobs = Arc::new(MemoryBlobStore::new("https://media.test"));
    let state = AppState::new(Arc::clone(&store), blobs, ServerConfig::for_testing());

    let server = TestServer::new(warung_rest::routing::create_routes(state))
        .expect("Failed to create test server");

    (server, store)
}

/// Registers a store owner and returns the new account id.
async fn register_owner(server: &TestServer) -> String {
    let response = server
        .post("/api/register")
        .json(&json!({
            "kodeToko": "TK001",
            "namaToko": "Toko Sejahtera",
            "username": "budi",
            "password": "rahasia123"
        }))
        .await;

    response.assert_status(StatusCode::CREATED);
    response.json::<Value>()["uid"]
        .as_str()
        .expect("uid missing")
        .to_string()
}

/// Registers a branch operator under TK001 and returns the new account id.
async fn register_branch(server: &TestServer) -> String {
    let response = server
        .post("/api/register")
        .json(&json!({
            "kodeToko": "TK001",
            "kodeCabang": "CB001",
            "namaCabang": "Cabang Kota",
            "username": "siti",
            "password": "rahasia456"
        }))
        .await;

    response.assert_status(StatusCode::CREATED);
    response.json::<Value>()["uid"]
        .as_str()
        .expect("uid missing")
        .to_string()
}

/// Seeds an item directly through the store.
async fn seed_item(store: &MemoryBackend, name: &str, toko: &str, cabang: Option<&str>) {
    let mut record = json!({
        "name": name,
        "price": "5000",
        "kodeToko": toko,
        "imageUrl": "https://media.test/seeded"
    });
    if let Some(cabang) = cabang {
        record["kodeCabang"] = json!(cabang);
    }
    store.create("items", record).await.expect("Failed to seed item");
}

/// Seeds an order directly through the store.
async fn seed_order(store: &MemoryBackend, tanggal: &str, toko: &str, cabang: Option<&str>) {
    let mut record = json!({
        "tanggal": tanggal,
        "total": "15000",
        "kodeToko": toko
    });
    if let Some(cabang) = cabang {
        record["kodeCabang"] = json!(cabang);
    }
    store.create("orders", record).await.expect("Failed to seed order");
}

// =============================================================================
// Accounts
// =============================================================================

mod accounts {
    use super::*;

    #[tokio::test]
    async fn test_register_owner_returns_201_with_uid() {
        let (server, _store) = create_test_server();
        let uid = register_owner(&server).await;
        assert!(!uid.is_empty());
    }

    #[tokio::test]
    async fn test_register_branch_returns_201() {
        let (server, _store) = create_test_server();
        register_branch(&server).await;
    }

    #[tokio::test]
    async fn test_register_without_identity_returns_400() {
        let (server, _store) = create_test_server();

        let response = server
            .post("/api/register")
            .json(&json!({"username": "budi", "password": "rahasia123"}))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body = response.json::<Value>();
        assert!(body["error"].as_str().unwrap().starts_with("Bad Request"));
    }

    #[tokio::test]
    async fn test_register_incomplete_store_pair_returns_400() {
        let (server, _store) = create_test_server();

        // kodeToko without namaToko is not a store identity.
        let response = server
            .post("/api/register")
            .json(&json!({
                "kodeToko": "TK001",
                "username": "budi",
                "password": "rahasia123"
            }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_login_owner_roundtrip() {
        let (server, _store) = create_test_server();
        let uid = register_owner(&server).await;

        let response = server
            .post("/api/login")
            .json(&json!({
                "kode": "TK001",
                "username": "budi",
                "password": "rahasia123"
            }))
            .await;

        response.assert_status_ok();
        let body = response.json::<Value>();
        assert_eq!(body["id"], uid.as_str());
        assert_eq!(body["data"]["namaToko"], "Toko Sejahtera");
        assert_eq!(body["data"]["role"], "owner");
    }

    #[tokio::test]
    async fn test_login_branch_redacts_store_display_name() {
        let (server, _store) = create_test_server();
        register_branch(&server).await;

        let response = server
            .post("/api/login")
            .json(&json!({
                "kode": "CB001",
                "username": "siti",
                "password": "rahasia456"
            }))
            .await;

        response.assert_status_ok();
        let body = response.json::<Value>();
        assert_eq!(body["data"]["role"], "branch");
        // The parent store's code stays visible, its display name does not.
        assert_eq!(body["data"]["kodeToko"], "TK001");
        assert!(body["data"].get("namaToko").is_none());
    }

    #[tokio::test]
    async fn test_failed_logins_are_indistinguishable() {
        let (server, _store) = create_test_server();
        register_owner(&server).await;

        let unknown_code = server
            .post("/api/login")
            .json(&json!({"kode": "TK999", "username": "budi", "password": "rahasia123"}))
            .await;
        let wrong_password = server
            .post("/api/login")
            .json(&json!({"kode": "TK001", "username": "budi", "password": "salah"}))
            .await;
        let wrong_username = server
            .post("/api/login")
            .json(&json!({"kode": "TK001", "username": "bandi", "password": "rahasia123"}))
            .await;

        unknown_code.assert_status(StatusCode::UNAUTHORIZED);
        wrong_password.assert_status(StatusCode::UNAUTHORIZED);
        wrong_username.assert_status(StatusCode::UNAUTHORIZED);

        // Identical bodies: the response must not reveal which factor failed.
        let body = unknown_code.json::<Value>();
        assert_eq!(body, wrong_password.json::<Value>());
        assert_eq!(body, wrong_username.json::<Value>());
    }

    #[tokio::test]
    async fn test_login_missing_fields_returns_400() {
        let (server, _store) = create_test_server();

        let response = server
            .post("/api/login")
            .json(&json!({"kode": "TK001", "username": "budi"}))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_update_account_with_no_fields_returns_400() {
        let (server, _store) = create_test_server();
        let uid = register_owner(&server).await;

        let response = server
            .put(&format!("/api/users/{uid}"))
            .json(&json!({}))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_update_account_rehashes_password() {
        let (server, _store) = create_test_server();
        let uid = register_owner(&server).await;

        let response = server
            .put(&format!("/api/users/{uid}"))
            .json(&json!({"password": "baru789"}))
            .await;
        response.assert_status_ok();

        // Old credential stops working, new one logs in.
        server
            .post("/api/login")
            .json(&json!({"kode": "TK001", "username": "budi", "password": "rahasia123"}))
            .await
            .assert_status(StatusCode::UNAUTHORIZED);

        let login = server
            .post("/api/login")
            .json(&json!({"kode": "TK001", "username": "budi", "password": "baru789"}))
            .await;
        login.assert_status_ok();
        assert_eq!(login.json::<Value>()["data"]["namaToko"], "Toko Sejahtera");
    }

    #[tokio::test]
    async fn test_delete_account() {
        let (server, _store) = create_test_server();
        let uid = register_owner(&server).await;

        server
            .delete(&format!("/api/users/{uid}"))
            .await
            .assert_status_ok();

        server
            .post("/api/login")
            .json(&json!({"kode": "TK001", "username": "budi", "password": "rahasia123"}))
            .await
            .assert_status(StatusCode::UNAUTHORIZED);

        server
            .delete(&format!("/api/users/{uid}"))
            .await
            .assert_status_not_found();
    }
}

// =============================================================================
// Catalog items
// =============================================================================

mod items {
    use super::*;

    #[tokio::test]
    async fn test_list_items_requires_store_code() {
        let (server, _store) = create_test_server();

        let response = server.get("/api/items").await;
        response.assert_status_not_found();
    }

    #[tokio::test]
    async fn test_list_items_empty_is_200_with_empty_list() {
        let (server, _store) = create_test_server();

        let response = server
            .get("/api/items")
            .add_query_param("kodeToko", "TK001")
            .await;

        response.assert_status_ok();
        assert_eq!(response.json::<Value>(), json!([]));
    }

    #[tokio::test]
    async fn test_list_items_scoped_to_store() {
        let (server, store) = create_test_server();
        seed_item(&store, "Kopi", "TK001", Some("CB001")).await;
        seed_item(&store, "Teh", "TK001", Some("CB002")).await;
        seed_item(&store, "Roti", "TK002", None).await;

        let response = server
            .get("/api/items")
            .add_query_param("kodeToko", "TK001")
            .await;

        response.assert_status_ok();
        let items = response.json::<Value>();
        // All branches of TK001; never another store's items.
        assert_eq!(items.as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_list_items_scoped_to_branch() {
        let (server, store) = create_test_server();
        seed_item(&store, "Kopi", "TK001", Some("CB001")).await;
        seed_item(&store, "Teh", "TK001", Some("CB002")).await;

        let response = server
            .get("/api/items")
            .add_query_param("kodeToko", "TK001")
            .add_query_param("kodeCabang", "CB001")
            .await;

        response.assert_status_ok();
        let items = response.json::<Value>();
        assert_eq!(items.as_array().unwrap().len(), 1);
        assert_eq!(items[0]["name"], "Kopi");
    }

    #[tokio::test]
    async fn test_create_item_uploads_image() {
        let (server, _store) = create_test_server();

        let form = MultipartForm::new()
            .add_text("name", "Kopi Susu")
            .add_text("price", "8000")
            .add_text("kodeToko", "TK001")
            .add_part(
                "file",
                Part::bytes(b"\x89PNG fake image bytes".to_vec())
                    .file_name("kopi.png")
                    .mime_type("image/png"),
            );

        let response = server.post("/api/items").multipart(form).await;
        response.assert_status(StatusCode::CREATED);
        let id = response.json::<Value>()["id"].as_str().unwrap().to_string();

        let item = server.get(&format!("/api/items/{id}")).await;
        item.assert_status_ok();
        let body = item.json::<Value>();
        assert_eq!(body["name"], "Kopi Susu");
        assert!(
            body["imageUrl"]
                .as_str()
                .unwrap()
                .starts_with("https://media.test/")
        );
    }

    #[tokio::test]
    async fn test_create_item_without_file_returns_400() {
        let (server, _store) = create_test_server();

        let form = MultipartForm::new()
            .add_text("name", "Kopi Susu")
            .add_text("price", "8000")
            .add_text("kodeToko", "TK001");

        let response = server.post("/api/items").multipart(form).await;
        response.assert_status(StatusCode::BAD_REQUEST);
        assert!(
            response.json::<Value>()["error"]
                .as_str()
                .unwrap()
                .contains("No file uploaded")
        );
    }

    #[tokio::test]
    async fn test_get_missing_item_returns_404() {
        let (server, _store) = create_test_server();

        let response = server.get("/api/items/does-not-exist").await;
        response.assert_status_not_found();
        assert_eq!(
            response.json::<Value>()["error"],
            "Item not found"
        );
    }

    #[tokio::test]
    async fn test_update_item_merges_fields() {
        let (server, store) = create_test_server();
        seed_item(&store, "Kopi", "TK001", None).await;
        let id = store
            .query("items", &Default::default(), None)
            .await
            .unwrap()[0]
            .id()
            .to_string();

        let response = server
            .put(&format!("/api/items/{id}"))
            .json(&json!({"price": "6000"}))
            .await;

        response.assert_status_ok();
        let body = response.json::<Value>();
        assert_eq!(body["price"], "6000");
        assert_eq!(body["name"], "Kopi");
    }

    #[tokio::test]
    async fn test_delete_item() {
        let (server, store) = create_test_server();
        seed_item(&store, "Kopi", "TK001", None).await;
        let id = store
            .query("items", &Default::default(), None)
            .await
            .unwrap()[0]
            .id()
            .to_string();

        server
            .delete(&format!("/api/items/{id}"))
            .await
            .assert_status_ok();
        server
            .get(&format!("/api/items/{id}"))
            .await
            .assert_status_not_found();
    }
}

// =============================================================================
// Orders
// =============================================================================

mod orders {
    use super::*;

    #[tokio::test]
    async fn test_create_order_returns_201() {
        let (server, _store) = create_test_server();

        let response = server
            .post("/api/orders")
            .json(&json!({
                "kodeToko": "TK001",
                "tanggal": "2024-03-15",
                "total": "15000"
            }))
            .await;

        response.assert_status(StatusCode::CREATED);
        assert!(response.json::<Value>()["id"].as_str().is_some());
    }

    #[tokio::test]
    async fn test_list_orders_requires_store_code() {
        let (server, _store) = create_test_server();

        let response = server.get("/api/orders").await;
        response.assert_status_not_found();
    }

    #[tokio::test]
    async fn test_list_orders_empty_is_404() {
        let (server, _store) = create_test_server();

        let response = server
            .get("/api/orders")
            .add_query_param("kodeToko", "TK001")
            .await;

        response.assert_status_not_found();
        assert_eq!(response.json::<Value>()["error"], "Orders not found");
    }

    #[tokio::test]
    async fn test_list_orders_newest_first() {
        let (server, store) = create_test_server();
        seed_order(&store, "2024-01-02", "TK001", None).await;
        seed_order(&store, "2024-03-15", "TK001", None).await;
        seed_order(&store, "2024-02-20", "TK001", None).await;

        let response = server
            .get("/api/orders")
            .add_query_param("kodeToko", "TK001")
            .await;

        response.assert_status_ok();
        let orders = response.json::<Value>();
        let dates: Vec<&str> = orders
            .as_array()
            .unwrap()
            .iter()
            .map(|o| o["tanggal"].as_str().unwrap())
            .collect();
        assert_eq!(dates, vec!["2024-03-15", "2024-02-20", "2024-01-02"]);
    }

    #[tokio::test]
    async fn test_list_orders_scoped_to_branch() {
        let (server, store) = create_test_server();
        seed_order(&store, "2024-01-02", "TK001", Some("CB001")).await;
        seed_order(&store, "2024-03-15", "TK001", Some("CB002")).await;

        let response = server
            .get("/api/orders")
            .add_query_param("kodeToko", "TK001")
            .add_query_param("kodeCabang", "CB001")
            .await;

        response.assert_status_ok();
        let orders = response.json::<Value>();
        assert_eq!(orders.as_array().unwrap().len(), 1);
        assert_eq!(orders[0]["tanggal"], "2024-01-02");
    }

    #[tokio::test]
    async fn test_empty_orders_and_empty_items_differ_observably() {
        let (server, _store) = create_test_server();

        let items = server
            .get("/api/items")
            .add_query_param("kodeToko", "TK001")
            .await;
        let orders = server
            .get("/api/orders")
            .add_query_param("kodeToko", "TK001")
            .await;

        items.assert_status_ok();
        orders.assert_status_not_found();
    }
}

// =============================================================================
// System
// =============================================================================

#[tokio::test]
async fn test_health() {
    let (server, _store) = create_test_server();
    let response = server.get("/health").await;
    response.assert_status_ok();
}
