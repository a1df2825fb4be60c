#[cfg(test)]
mod integration_tests {
    use crate::schemas::ApiResponse;
    use crate::test_utils::test_utils::setup_test_app;
    use axum::http::StatusCode;
    use axum_test::multipart::{MultipartForm, Part};
    use axum_test::TestServer;
    use common::{ChartData, SignupRequest};

    fn csv_form(file_name: &str, mime_type: &str, contents: &[u8]) -> MultipartForm {
        MultipartForm::new().add_part(
            "file",
            Part::bytes(contents.to_vec())
                .file_name(file_name)
                .mime_type(mime_type),
        )
    }

    #[tokio::test]
    async fn test_health_check() {
        // Setup test server
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        // Send GET request to health endpoint
        let response = server.get("/health").await;

        // Verify response
        response.assert_status(StatusCode::OK);
        let body: serde_json::Value = response.json();
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["database"], "connected");
    }

    #[tokio::test]
    async fn test_get_stores() {
        // Setup test server
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        // Get the store catalog
        let response = server.get("/api/v1/stores").await;

        // Verify response
        response.assert_status(StatusCode::OK);
        let body: ApiResponse<Vec<serde_json::Value>> = response.json();
        assert!(body.success);
        assert_eq!(body.message, "Stores retrieved successfully");
        assert_eq!(body.data.len(), 6);

        // Catalog order is stable; dashboard selectors rely on it
        assert_eq!(body.data[0]["id"], "1");
        assert_eq!(body.data[0]["location"], "Financial District, Manhattan");
        assert_eq!(body.data[5]["id"], "6");
    }

    #[tokio::test]
    async fn test_get_all_predictions() {
        // Setup test server
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        // Get predictions for every store
        let response = server.get("/api/v1/stores/predictions").await;

        // Verify response
        response.assert_status(StatusCode::OK);
        let body: ApiResponse<serde_json::Value> = response.json();
        assert!(body.success);

        let map = body.data.as_object().unwrap();
        assert_eq!(map.len(), 6);
        assert!(map.contains_key("1"));
        assert!(map.contains_key("6"));

        // Every store carries a populated short-term section
        for (store_id, prediction) in map {
            let changes = prediction["short_term_predictions"]["demand_changes"]
                .as_array()
                .unwrap();
            assert!(!changes.is_empty(), "store {} has no demand changes", store_id);
        }
    }

    #[tokio::test]
    async fn test_get_store_prediction() {
        // Setup test server
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        // Get predictions for the Financial District store
        let response = server.get("/api/v1/stores/1/predictions").await;

        // Verify response
        response.assert_status(StatusCode::OK);
        let body: ApiResponse<serde_json::Value> = response.json();
        assert!(body.success);
        assert_eq!(body.message, "Prediction retrieved successfully");

        let changes = body.data["short_term_predictions"]["demand_changes"]
            .as_array()
            .unwrap();
        let home_office = changes
            .iter()
            .find(|c| c["category"] == "home office")
            .unwrap();
        assert_eq!(home_office["predicted_change"], "+15%");
        assert_eq!(home_office["confidence"], "85%");

        // Peak hours and the longer horizons are part of the same tree
        assert!(!body.data["short_term_predictions"]["peak_hours"]["changes"]
            .as_array()
            .unwrap()
            .is_empty());
        assert!(!body.data["mid_term_predictions"]["emerging_categories"]
            .as_array()
            .unwrap()
            .is_empty());
        assert!(!body.data["long_term_predictions"]["recommended_adaptations"]
            .as_array()
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn test_get_unknown_store_prediction_returns_empty_shape() {
        // Setup test server
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        // Ask for a store outside the catalog
        let response = server.get("/api/v1/stores/999/predictions").await;

        // Unknown stores answer 200 with an empty-but-complete tree
        response.assert_status(StatusCode::OK);
        let body: ApiResponse<serde_json::Value> = response.json();
        assert!(body.success);
        assert_eq!(body.message, "No predictions for this store yet");

        let data = body.data.as_object().unwrap();
        assert!(data.contains_key("short_term_predictions"));
        assert!(data.contains_key("mid_term_predictions"));
        assert!(data.contains_key("long_term_predictions"));
        assert_eq!(
            body.data["short_term_predictions"]["demand_changes"],
            serde_json::json!([])
        );
    }

    #[tokio::test]
    async fn test_get_demand_overview() {
        // Setup test server
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        // Get the cross-store overview chart
        let response = server.get("/api/v1/stores/demand-overview").await;

        // Verify response
        response.assert_status(StatusCode::OK);
        let body: ApiResponse<ChartData> = response.json();
        assert!(body.success);

        // Six sample stores with four demand changes each
        assert_eq!(body.data.categories.len(), 24);
        assert_eq!(body.data.series.len(), 2);
        assert_eq!(body.data.series[0].name, "Change");
        assert_eq!(body.data.series[1].name, "Confidence");

        // Both series stay aligned with the category axis
        assert_eq!(body.data.series[0].values().len(), body.data.categories.len());
        assert_eq!(body.data.series[1].values().len(), body.data.categories.len());

        // Store 1 leads the id order, so its entries come first
        assert_eq!(body.data.categories[0], "home office");
        assert_eq!(body.data.series[0].values()[0], 15.0);
        assert_eq!(body.data.series[1].values()[0], 85.0);
        assert_eq!(body.data.categories[3], "print and stationery");
        assert_eq!(body.data.series[0].values()[3], -8.0);
    }

    #[tokio::test]
    async fn test_create_upload() {
        // Setup test server
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let csv = "product,category,stock\nGreen Tea,Beverage,150\nCeramic Mug,Kitchenware,40\n";
        let response = server
            .post("/api/v1/uploads")
            .multipart(csv_form("stock.csv", "text/csv", csv.as_bytes()))
            .await;

        // Verify response
        response.assert_status(StatusCode::CREATED);
        let body: ApiResponse<serde_json::Value> = response.json();
        assert!(body.success);
        assert_eq!(body.message, "Upload accepted successfully");
        assert_eq!(body.data["original_name"], "stock.csv");
        assert_eq!(body.data["row_count"], 2);
        assert_eq!(body.data["column_count"], 3);
        assert_eq!(body.data["size_bytes"], csv.len() as i64);
        assert!(body.data["id"].as_i64().unwrap() > 0);
    }

    #[tokio::test]
    async fn test_create_upload_accepts_header_only_csv() {
        // Setup test server
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        // A header with no data rows is a valid, empty table
        let response = server
            .post("/api/v1/uploads")
            .multipart(csv_form("empty.csv", "text/csv", b"sku,price\n"))
            .await;

        response.assert_status(StatusCode::CREATED);
        let body: ApiResponse<serde_json::Value> = response.json();
        assert_eq!(body.data["row_count"], 0);
        assert_eq!(body.data["column_count"], 2);
    }

    #[tokio::test]
    async fn test_create_upload_rejects_non_csv_file() {
        // Setup test server
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let response = server
            .post("/api/v1/uploads")
            .multipart(csv_form("notes.txt", "text/plain", b"just some notes"))
            .await;

        // Verify response
        response.assert_status(StatusCode::UNSUPPORTED_MEDIA_TYPE);
        let body: serde_json::Value = response.json();
        assert_eq!(body["code"], "UNSUPPORTED_FILE_TYPE");
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn test_create_upload_accepts_csv_extension_with_odd_mime() {
        // Setup test server
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        // Browsers sometimes submit CSV files with spreadsheet MIME types
        let csv = "sku,price\nA-1,9.99\n";
        let response = server
            .post("/api/v1/uploads")
            .multipart(csv_form("export.CSV", "application/vnd.ms-excel", csv.as_bytes()))
            .await;

        response.assert_status(StatusCode::CREATED);
    }

    #[tokio::test]
    async fn test_create_upload_rejects_ragged_csv() {
        // Setup test server
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        // Second data row is missing a cell
        let csv = "product,category,stock\nGreen Tea,Beverage,150\nCeramic Mug,40\n";
        let response = server
            .post("/api/v1/uploads")
            .multipart(csv_form("ragged.csv", "text/csv", csv.as_bytes()))
            .await;

        // Verify response
        response.assert_status(StatusCode::BAD_REQUEST);
        let body: serde_json::Value = response.json();
        assert_eq!(body["code"], "INVALID_CSV");
    }

    #[tokio::test]
    async fn test_create_upload_rejects_non_utf8_payload() {
        // Setup test server
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let response = server
            .post("/api/v1/uploads")
            .multipart(csv_form("binary.csv", "text/csv", &[0xff, 0xfe, 0x00, 0x41]))
            .await;

        // Verify response
        response.assert_status(StatusCode::BAD_REQUEST);
        let body: serde_json::Value = response.json();
        assert_eq!(body["code"], "INVALID_ENCODING");
    }

    #[tokio::test]
    async fn test_create_upload_requires_file_field() {
        // Setup test server
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        // Multipart body without a 'file' field
        let form = MultipartForm::new().add_part(
            "data",
            Part::bytes(b"product,stock\nTea,10\n".to_vec())
                .file_name("stock.csv")
                .mime_type("text/csv"),
        );
        let response = server.post("/api/v1/uploads").multipart(form).await;

        // Verify response
        response.assert_status(StatusCode::BAD_REQUEST);
        let body: serde_json::Value = response.json();
        assert_eq!(body["code"], "MISSING_FILE_FIELD");
    }

    #[tokio::test]
    async fn test_get_uploads() {
        // Setup test server
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        // Register an upload first
        let csv = "product,stock\nGreen Tea,150\n";
        let create_response = server
            .post("/api/v1/uploads")
            .multipart(csv_form("inventory.csv", "text/csv", csv.as_bytes()))
            .await;
        create_response.assert_status(StatusCode::CREATED);

        // List uploads
        let response = server.get("/api/v1/uploads").await;

        // Verify response
        response.assert_status(StatusCode::OK);
        let body: ApiResponse<Vec<serde_json::Value>> = response.json();
        assert!(body.success);
        assert_eq!(body.message, "Uploads retrieved successfully");
        assert!(body.data.len() >= 1);

        let upload = body
            .data
            .iter()
            .find(|u| u["original_name"] == "inventory.csv")
            .unwrap();
        assert_eq!(upload["row_count"], 1);
        assert_eq!(upload["column_count"], 2);
    }

    #[tokio::test]
    async fn test_get_upload_profile() {
        // Setup test server
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        // Register an upload with a numeric stock column
        let csv = "product,category,stock\n\
                   Green Tea,Beverage,150\n\
                   Sourdough Bread,Bakery,80\n\
                   Ceramic Mug,Kitchenware,40\n";
        let create_response = server
            .post("/api/v1/uploads")
            .multipart(csv_form("stock.csv", "text/csv", csv.as_bytes()))
            .await;
        create_response.assert_status(StatusCode::CREATED);
        let create_body: ApiResponse<serde_json::Value> = create_response.json();
        let upload_id = create_body.data["id"].as_i64().unwrap();

        // Profile the upload
        let response = server
            .get(&format!("/api/v1/uploads/{}/profile", upload_id))
            .await;

        // Verify response
        response.assert_status(StatusCode::OK);
        let body: ApiResponse<serde_json::Value> = response.json();
        assert!(body.success);
        assert_eq!(body.message, "Profile computed successfully");
        assert_eq!(body.data["row_count"], 3);
        assert_eq!(body.data["column_count"], 3);

        let columns = body.data["columns"].as_array().unwrap();
        assert_eq!(columns[0]["name"], "product");
        assert_eq!(columns[0]["non_empty"], 3);
        assert_eq!(columns[0]["numeric"], 0);
        assert_eq!(columns[2]["name"], "stock");
        assert_eq!(columns[2]["numeric"], 3);
        assert_eq!(columns[2]["min"], 40.0);
        assert_eq!(columns[2]["max"], 150.0);
        assert_eq!(columns[2]["mean"], 90.0);

        // A second request is served from the cache with the same payload
        let cached_response = server
            .get(&format!("/api/v1/uploads/{}/profile", upload_id))
            .await;
        cached_response.assert_status(StatusCode::OK);
        let cached_body: ApiResponse<serde_json::Value> = cached_response.json();
        assert_eq!(cached_body.message, "Profile retrieved successfully");
        assert_eq!(cached_body.data, body.data);
    }

    #[tokio::test]
    async fn test_get_upload_profile_not_found() {
        // Setup test server
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        // Profile an upload that was never registered
        let response = server.get("/api/v1/uploads/99999/profile").await;

        // Verify response
        response.assert_status(StatusCode::NOT_FOUND);
        let body: serde_json::Value = response.json();
        assert_eq!(body["code"], "UPLOAD_NOT_FOUND");
    }

    #[tokio::test]
    async fn test_create_signup() {
        // Setup test server
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        // Join the early-access list
        let create_request = SignupRequest {
            username: "corner_store_7".to_string(),
            email: "owner@cornerstore.nyc".to_string(),
            phone: Some("+1 212 555 0188".to_string()),
        };
        let response = server.post("/api/v1/users").json(&create_request).await;

        // Verify response
        if response.status_code() != StatusCode::CREATED {
            let error_body = response.text();
            println!("Error response: {}", error_body);
            panic!("Expected 201 Created, got {}", response.status_code());
        }
        let body: ApiResponse<serde_json::Value> = response.json();
        assert!(body.success);
        assert_eq!(body.message, "Signup registered successfully");
        assert_eq!(body.data["username"], "corner_store_7");
        assert_eq!(body.data["email"], "owner@cornerstore.nyc");
        assert_eq!(body.data["phone"], "+1 212 555 0188");
        assert!(body.data["id"].as_i64().unwrap() > 0);
    }

    #[tokio::test]
    async fn test_create_signup_without_phone() {
        // Setup test server
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        // Phone is optional on the signup form
        let create_request = SignupRequest {
            username: "bodega_astoria".to_string(),
            email: "hello@bodega-astoria.com".to_string(),
            phone: None,
        };
        let response = server.post("/api/v1/users").json(&create_request).await;

        response.assert_status(StatusCode::CREATED);
        let body: ApiResponse<serde_json::Value> = response.json();
        assert!(body.data["phone"].is_null());
    }

    #[tokio::test]
    async fn test_duplicate_signup_conflicts() {
        // Setup test server
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let create_request = SignupRequest {
            username: "repeat_visitor".to_string(),
            email: "repeat@visitor.com".to_string(),
            phone: None,
        };

        // First submission succeeds
        let first = server.post("/api/v1/users").json(&create_request).await;
        first.assert_status(StatusCode::CREATED);

        // Submitting the same form again conflicts
        let second = server.post("/api/v1/users").json(&create_request).await;
        second.assert_status(StatusCode::CONFLICT);
        let body: serde_json::Value = second.json();
        assert_eq!(body["code"], "ALREADY_REGISTERED");
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn test_get_signups() {
        // Setup test server
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        // Register one signup first
        let create_request = SignupRequest {
            username: "village_deli".to_string(),
            email: "manager@villagedeli.com".to_string(),
            phone: None,
        };
        let create_response = server.post("/api/v1/users").json(&create_request).await;
        create_response.assert_status(StatusCode::CREATED);

        // List signups
        let response = server.get("/api/v1/users").await;

        // Verify response
        response.assert_status(StatusCode::OK);
        let body: ApiResponse<Vec<serde_json::Value>> = response.json();
        assert!(body.success);
        assert_eq!(body.message, "Signups retrieved successfully");
        assert!(body.data.len() >= 1);

        let signup = body
            .data
            .iter()
            .find(|s| s["username"] == "village_deli")
            .unwrap();
        assert_eq!(signup["email"], "manager@villagedeli.com");
    }

    #[tokio::test]
    async fn test_weather_routes_answer_503_without_api_key() {
        // Setup test server (test state carries no weather API key)
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let alerts = server
            .get("/api/v1/weather/alerts")
            .add_query_param("location", "New York")
            .await;
        alerts.assert_status(StatusCode::SERVICE_UNAVAILABLE);
        let body: serde_json::Value = alerts.json();
        assert_eq!(body["code"], "WEATHER_NOT_CONFIGURED");

        let future = server
            .get("/api/v1/weather/future")
            .add_query_param("location", "New York")
            .add_query_param("date", "2026-10-01")
            .await;
        future.assert_status(StatusCode::SERVICE_UNAVAILABLE);

        let bulk = server
            .post("/api/v1/weather/bulk")
            .json(&serde_json::json!({ "locations": ["New York", "Boston"] }))
            .await;
        bulk.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_swagger_ui_is_mounted() {
        // Setup test server
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        // The OpenAPI document is served alongside the API
        let response = server.get("/api-docs/openapi.json").await;
        response.assert_status(StatusCode::OK);
        let body: serde_json::Value = response.json();
        assert_eq!(body["info"]["title"], "Demandcast API");
    }
}
