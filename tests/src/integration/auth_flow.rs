//! # Authentication Flow
//!
//! Registration, login and the bearer-less `auth-token-<id>` scheme as seen
//! through the full middleware stack.

#[cfg(test)]
mod tests {
    use super::super::harness::{is_address, Gateway, DEMO_TOKEN};
    use axum::http::StatusCode;
    use serde_json::json;

    // =============================================================================
    // REGISTRATION
    // =============================================================================

    #[tokio::test]
    async fn test_register_returns_token_and_address() {
        let gw = Gateway::new().await;
        let reply = gw
            .post(
                "/auth/register",
                None,
                json!({"username": "alice", "email": "a@x.com", "password": "p"}),
            )
            .await;

        assert_eq!(reply.status, StatusCode::CREATED);
        assert_eq!(reply.json["success"], true);
        assert_eq!(reply.json["message"], "User registered successfully");

        let id = reply.json["user"]["id"].as_str().unwrap();
        assert_eq!(reply.json["token"], format!("auth-token-{}", id));
        assert!(is_address(&reply.json["address"]));
        assert_eq!(reply.json["blockchainAddress"], reply.json["address"]);
        assert_eq!(reply.json["data"]["blockchainAddress"], reply.json["address"]);
        assert_eq!(reply.json["user"]["blockchainAddress"], reply.json["address"]);
        assert!(reply.json["user"].get("password").is_none());
    }

    #[tokio::test]
    async fn test_register_duplicate_email_rejected() {
        let gw = Gateway::new().await;
        gw.register("alice", "a@x.com").await;

        let reply = gw
            .post(
                "/auth/register",
                None,
                json!({"username": "alice2", "email": "a@x.com", "password": "q"}),
            )
            .await;
        assert_eq!(reply.status, StatusCode::BAD_REQUEST);
        assert_eq!(reply.json["success"], false);
        assert_eq!(reply.json["message"], "User with this email already exists");
        assert!(is_address(&reply.json["blockchainAddress"]));
    }

    #[tokio::test]
    async fn test_register_missing_fields() {
        let gw = Gateway::new().await;
        let reply = gw
            .post("/auth/register", None, json!({"username": "", "email": "a@x.com"}))
            .await;
        assert_eq!(reply.status, StatusCode::BAD_REQUEST);
        assert_eq!(reply.json["message"], "Please provide username, email and password");
    }

    #[tokio::test]
    async fn test_registered_users_get_distinct_ids() {
        let gw = Gateway::new().await;
        let (_, addr_a, id_a) = gw.register("a", "a@x.com").await;
        let (_, addr_b, id_b) = gw.register("b", "b@x.com").await;
        assert_ne!(id_a, id_b);
        assert_ne!(addr_a, addr_b);
    }

    // =============================================================================
    // LOGIN
    // =============================================================================

    #[tokio::test]
    async fn test_login_after_register() {
        let gw = Gateway::new().await;
        let (token, address, _) = gw.register("alice", "a@x.com").await;

        let reply = gw
            .post("/auth/login", None, json!({"email": "a@x.com", "password": "secret"}))
            .await;
        assert_eq!(reply.status, StatusCode::OK);
        assert_eq!(reply.json["message"], "Login successful");
        assert_eq!(reply.json["token"], token);
        assert_eq!(reply.json["address"], address);
    }

    #[tokio::test]
    async fn test_demo_user_login() {
        let gw = Gateway::new().await;
        let reply = gw
            .post(
                "/auth/login",
                None,
                json!({"email": "test@example.com", "password": "password123"}),
            )
            .await;
        assert_eq!(reply.status, StatusCode::OK);
        assert_eq!(reply.json["token"], DEMO_TOKEN);
        assert_eq!(reply.json["user"]["username"], "testuser");
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let gw = Gateway::new().await;
        gw.register("alice", "a@x.com").await;

        let reply = gw
            .post("/auth/login", None, json!({"email": "a@x.com", "password": "nope"}))
            .await;
        assert_eq!(reply.status, StatusCode::UNAUTHORIZED);
        assert_eq!(reply.json["message"], "Invalid email or password");
        assert!(is_address(&reply.json["blockchainAddress"]));
    }

    #[tokio::test]
    async fn test_login_missing_fields() {
        let gw = Gateway::new().await;
        let reply = gw.post("/auth/login", None, json!({})).await;
        assert_eq!(reply.status, StatusCode::BAD_REQUEST);
        assert_eq!(reply.json["message"], "Please provide email and password");
    }

    // =============================================================================
    // TOKEN CHECKS
    // =============================================================================

    #[tokio::test]
    async fn test_missing_token() {
        let gw = Gateway::new().await;
        let reply = gw.get("/files/sent", None).await;
        assert_eq!(reply.status, StatusCode::UNAUTHORIZED);
        assert_eq!(reply.json["success"], false);
        assert_eq!(reply.json["message"], "Authentication required");
        assert!(is_address(&reply.json["blockchainAddress"]));
    }

    #[tokio::test]
    async fn test_malformed_token() {
        let gw = Gateway::new().await;
        let reply = gw.get("/files/sent", Some("garbage")).await;
        assert_eq!(reply.status, StatusCode::UNAUTHORIZED);
        assert_eq!(reply.json["message"], "Invalid token");
    }

    #[tokio::test]
    async fn test_token_for_unknown_user() {
        let gw = Gateway::new().await;
        let reply = gw.get("/user/info", Some("auth-token-424242")).await;
        assert_eq!(reply.status, StatusCode::UNAUTHORIZED);
        assert_eq!(reply.json["message"], "User not found");
    }

    #[tokio::test]
    async fn test_user_info_with_token() {
        let gw = Gateway::new().await;
        let (token, address, id) = gw.register("alice", "a@x.com").await;

        let reply = gw.get("/user/info", Some(&token)).await;
        assert_eq!(reply.status, StatusCode::OK);
        assert_eq!(reply.json["user"]["id"], id.as_str());
        assert_eq!(reply.json["blockchainAddress"], address.as_str());
    }

    #[tokio::test]
    async fn test_user_by_id() {
        let gw = Gateway::new().await;
        let reply = gw.get("/user/1", None).await;
        assert_eq!(reply.status, StatusCode::OK);
        assert_eq!(reply.json["user"]["email"], "test@example.com");

        let missing = gw.get("/user/999", None).await;
        assert_eq!(missing.status, StatusCode::NOT_FOUND);
        assert_eq!(missing.json["message"], "User not found");
    }
}
