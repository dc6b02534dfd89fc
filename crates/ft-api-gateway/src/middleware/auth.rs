//! Authentication middleware.
//!
//! Tokens have the form `auth-token-<userId>`. The user id is the third
//! `-`-separated segment; the user must exist in the repository. On success
//! the user is attached to the request as [`AuthenticatedUser`].

use crate::domain::{ApiError, User};
use crate::ports::Repository;
use axum::{
    body::Body,
    http::{header::AUTHORIZATION, HeaderMap, Request},
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use tower::{Layer, Service};
use tracing::{debug, warn};

/// The caller resolved from the `Authorization` header
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub User);

/// Why a token was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// No (or an empty) `Authorization` header
    Missing,
    /// Header present but no user id segment
    Malformed,
}

impl TokenError {
    pub fn message(&self) -> &'static str {
        match self {
            TokenError::Missing => "Authentication required",
            TokenError::Malformed => "Invalid token",
        }
    }
}

/// Extract the user id from the `Authorization` header.
pub fn parse_token(headers: &HeaderMap) -> Result<String, TokenError> {
    let Some(value) = headers.get(AUTHORIZATION) else {
        return Err(TokenError::Missing);
    };
    if value.is_empty() {
        return Err(TokenError::Missing);
    }

    let token = value.to_str().map_err(|_| TokenError::Malformed)?;
    match token.split('-').nth(2) {
        Some(id) if !id.is_empty() => Ok(id.to_string()),
        _ => Err(TokenError::Malformed),
    }
}

/// Authentication layer, applied to the protected route group
#[derive(Clone)]
pub struct AuthLayer {
    users: Arc<dyn Repository<User>>,
}

impl AuthLayer {
    pub fn new(users: Arc<dyn Repository<User>>) -> Self {
        Self { users }
    }
}

impl<S> Layer<S> for AuthLayer {
    type Service = AuthService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        AuthService {
            inner,
            users: Arc::clone(&self.users),
        }
    }
}

/// Authentication service
#[derive(Clone)]
pub struct AuthService<S> {
    inner: S,
    users: Arc<dyn Repository<User>>,
}

impl<S> Service<Request<Body>> for AuthService<S>
where
    S: Service<Request<Body>, Response = Response> + Clone + Send + 'static,
    S::Future: Send,
{
    type Response = Response;
    type Error = S::Error;
    type Future = std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self::Response, Self::Error>> + Send>,
    >;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: Request<Body>) -> Self::Future {
        let users = Arc::clone(&self.users);
        // Take the service that was driven to readiness
        let clone = self.inner.clone();
        let mut inner = std::mem::replace(&mut self.inner, clone);

        Box::pin(async move {
            let user_id = match parse_token(req.headers()) {
                Ok(id) => id,
                Err(err) => {
                    debug!(path = %req.uri().path(), reason = ?err, "token rejected");
                    return Ok(ApiError::unauthorized(err.message()).into_response());
                }
            };

            let user = match users.find_by_id(&user_id).await {
                Ok(Some(user)) => user,
                Ok(None) => {
                    warn!(user_id = %user_id, "token for unknown user");
                    return Ok(ApiError::unauthorized("User not found").into_response());
                }
                Err(err) => {
                    warn!(error = %err, "user lookup failed");
                    return Ok(ApiError::internal(err.to_string(), false).into_response());
                }
            };

            debug!(user_id = %user.id, "request authenticated");
            req.extensions_mut().insert(AuthenticatedUser(user));
            inner.call(req).await
        })
    }
}
