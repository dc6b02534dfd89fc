//! # Response Envelope
//!
//! Every JSON object leaving the gateway carries a usable
//! `blockchainAddress`, whatever produced it: a handler, an auth rejection,
//! the body limit or the unknown-route fallback.

#[cfg(test)]
mod tests {
    use super::super::harness::{is_address, request, Gateway, DEMO_TOKEN};
    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode};
    use ft_api_gateway::{GatewayConfig, ENDPOINTS};

    // =============================================================================
    // ADDRESS NORMALIZATION
    // =============================================================================

    #[tokio::test]
    async fn test_health_gets_an_address() {
        let gw = Gateway::new().await;
        let reply = gw.get("/health", None).await;
        assert_eq!(reply.status, StatusCode::OK);
        assert_eq!(reply.json["status"], "ok");
        assert_eq!(reply.json["message"], "API is working");
        assert!(is_address(&reply.json["blockchainAddress"]));
    }

    #[tokio::test]
    async fn test_root_and_status() {
        let gw = Gateway::new().await;
        let root = gw.get("/", None).await;
        assert_eq!(root.json["message"], "Blockchain File Transfer API is online");
        assert!(is_address(&root.json["blockchainAddress"]));

        let status = gw.get("/status", None).await;
        assert_eq!(status.json["success"], true);
        assert_eq!(status.json["message"], "API server is running");
        assert!(status.json["timestamp"].is_string());
        assert!(is_address(&status.json["blockchainAddress"]));
    }

    #[tokio::test]
    async fn test_each_response_gets_its_own_address() {
        let gw = Gateway::new().await;
        let a = gw.get("/health", None).await;
        let b = gw.get("/health", None).await;
        assert_ne!(a.json["blockchainAddress"], b.json["blockchainAddress"]);
    }

    #[tokio::test]
    async fn test_custom_field_name() {
        let mut config = GatewayConfig::default();
        config.normalizer.field = "walletAddress".to_string();
        let gw = Gateway::with_config(config).await;

        let reply = gw.get("/health", None).await;
        assert!(is_address(&reply.json["walletAddress"]));
        assert!(reply.json.get("blockchainAddress").is_none());
    }

    #[tokio::test]
    async fn test_normalizer_disabled() {
        let mut config = GatewayConfig::default();
        config.normalizer.enabled = false;
        let gw = Gateway::with_config(config).await;

        let reply = gw.get("/health", None).await;
        assert_eq!(reply.status, StatusCode::OK);
        assert!(reply.json.get("blockchainAddress").is_none());
    }

    // =============================================================================
    // ROUTING
    // =============================================================================

    #[tokio::test]
    async fn test_unknown_endpoint() {
        let gw = Gateway::new().await;
        let reply = gw.get("/nope", None).await;
        assert_eq!(reply.status, StatusCode::NOT_FOUND);
        assert_eq!(reply.json["success"], false);
        assert_eq!(reply.json["message"], "Endpoint not found: GET /nope");
        assert_eq!(
            reply.json["availableEndpoints"].as_array().unwrap().len(),
            ENDPOINTS.len()
        );
        assert!(is_address(&reply.json["blockchainAddress"]));
    }

    #[tokio::test]
    async fn test_api_prefix_is_stripped() {
        let gw = Gateway::new().await;
        for uri in ["/api/health", "/api/api/health"] {
            let reply = gw.get(uri, None).await;
            assert_eq!(reply.status, StatusCode::OK, "{}", uri);
            assert_eq!(reply.json["message"], "API is working", "{}", uri);
        }

        let login = gw
            .post(
                "/api/auth/login",
                None,
                serde_json::json!({"email": "test@example.com", "password": "password123"}),
            )
            .await;
        assert_eq!(login.status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_unknown_prefixed_endpoint_reports_stripped_path() {
        let gw = Gateway::new().await;
        let reply = gw.get("/api/nope", None).await;
        assert_eq!(reply.status, StatusCode::NOT_FOUND);
        assert_eq!(reply.json["message"], "Endpoint not found: GET /nope");
    }

    #[tokio::test]
    async fn test_prefix_stripping_disabled() {
        let mut config = GatewayConfig::default();
        config.routing.strip_api_prefix = false;
        let gw = Gateway::with_config(config).await;

        let reply = gw.get("/api/health", None).await;
        assert_eq!(reply.status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_wrong_method_is_not_found() {
        let gw = Gateway::new().await;
        let reply = gw.get("/auth/register", None).await;
        assert_eq!(reply.status, StatusCode::NOT_FOUND);
        assert_eq!(reply.json["success"], false);
        assert_eq!(reply.json["message"], "Endpoint not found: GET /auth/register");
        assert!(is_address(&reply.json["blockchainAddress"]));

        let prefixed = gw
            .post("/api/health", None, serde_json::json!({}))
            .await;
        assert_eq!(prefixed.status, StatusCode::NOT_FOUND);
        assert_eq!(prefixed.json["message"], "Endpoint not found: POST /health");
    }

    #[tokio::test]
    async fn test_wrong_method_on_protected_route() {
        let gw = Gateway::new().await;
        let reply = gw.get("/files/upload", Some(DEMO_TOKEN)).await;
        assert_eq!(reply.status, StatusCode::NOT_FOUND);
        assert_eq!(reply.json["message"], "Endpoint not found: GET /files/upload");
        assert!(is_address(&reply.json["blockchainAddress"]));
    }

    // =============================================================================
    // CORS AND LIMITS
    // =============================================================================

    #[tokio::test]
    async fn test_preflight() {
        let gw = Gateway::new().await;
        let req = Request::builder()
            .method(Method::OPTIONS)
            .uri("/files/upload")
            .header("origin", "http://localhost:3000")
            .header("access-control-request-method", "POST")
            .body(Body::empty())
            .unwrap();

        let reply = gw.send(req).await;
        assert_eq!(reply.status, StatusCode::OK);
        assert!(reply.raw.is_empty());
        assert!(reply.headers.contains_key("access-control-allow-origin"));
    }

    #[tokio::test]
    async fn test_oversized_body() {
        let mut config = GatewayConfig::default();
        config.limits.max_request_size = 64;
        let gw = Gateway::with_config(config).await;

        let body = serde_json::json!({
            "username": "x".repeat(100),
            "email": "a@x.com",
            "password": "p",
        });
        let reply = gw
            .send(request(Method::POST, "/auth/register", None, Some(body)))
            .await;
        assert_eq!(reply.status, StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(reply.json["success"], false);
        assert!(is_address(&reply.json["blockchainAddress"]));
    }
}
