//! # Integration Test Flows
//!
//! Each flow builds a fresh gateway with in-memory storage and the demo user
//! seeded, then sends requests through the complete middleware stack.

pub mod auth_flow;
pub mod chain_flow;
pub mod envelope;

#[cfg(test)]
pub(crate) mod harness {
    use axum::body::{to_bytes, Body};
    use axum::http::{header, HeaderMap, Method, Request, StatusCode};
    use ft_api_gateway::{ApiGatewayService, GatewayConfig};
    use serde_json::Value;
    use tower::ServiceExt;

    pub const DEMO_TOKEN: &str = "auth-token-1";

    /// Decoded response
    pub struct Reply {
        pub status: StatusCode,
        pub headers: HeaderMap,
        pub raw: Vec<u8>,
        pub json: Value,
    }

    /// In-process gateway
    pub struct Gateway {
        service: ApiGatewayService,
    }

    impl Gateway {
        pub async fn new() -> Self {
            Self::with_config(GatewayConfig::default()).await
        }

        pub async fn with_config(config: GatewayConfig) -> Self {
            let service = ApiGatewayService::new(config).await.unwrap();
            Self { service }
        }

        pub async fn send(&self, req: Request<Body>) -> Reply {
            let response = self.service.app().oneshot(req).await.unwrap();
            let status = response.status();
            let headers = response.headers().clone();
            let raw = to_bytes(response.into_body(), usize::MAX).await.unwrap().to_vec();
            let json = serde_json::from_slice(&raw).unwrap_or(Value::Null);
            Reply {
                status,
                headers,
                raw,
                json,
            }
        }

        pub async fn get(&self, uri: &str, token: Option<&str>) -> Reply {
            self.send(request(Method::GET, uri, token, None)).await
        }

        pub async fn post(&self, uri: &str, token: Option<&str>, body: Value) -> Reply {
            self.send(request(Method::POST, uri, token, Some(body))).await
        }

        /// Register a user and return `(token, address, id)`
        pub async fn register(&self, username: &str, email: &str) -> (String, String, String) {
            let reply = self
                .post(
                    "/auth/register",
                    None,
                    serde_json::json!({
                        "username": username,
                        "email": email,
                        "password": "secret",
                    }),
                )
                .await;
            assert_eq!(reply.status, StatusCode::CREATED, "{}", reply.json);
            let token = reply.json["token"].as_str().unwrap().to_string();
            let address = reply.json["address"].as_str().unwrap().to_string();
            let id = reply.json["user"]["id"].as_str().unwrap().to_string();
            (token, address, id)
        }
    }

    pub fn request(method: Method, uri: &str, token: Option<&str>, body: Option<Value>) -> Request<Body> {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, token);
        }
        match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        }
    }

    /// `0x` + 40 lowercase hex digits
    pub fn is_address(value: &Value) -> bool {
        value
            .as_str()
            .is_some_and(|s| shared_identifiers::IdentifierKind::Address.matches(s))
    }
}
