//! Registration and login.

use super::body_or_default;
use crate::domain::{
    token_for, ApiError, ApiResult, Envelope, LoginRequest, PublicUser, RegisterRequest,
    RepositoryError, User, UserField,
};
use crate::router::AppState;
use axum::{extract::State, Json};
use serde::Serialize;
use shared_identifiers::random_address;
use tracing::{info, warn};

/// Body shared by registration and login
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthBody {
    pub user: PublicUser,
    pub address: String,
    pub token: String,
    pub data: AuthData,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthData {
    pub blockchain_address: String,
    pub user: PublicUser,
}

impl AuthBody {
    fn for_user(user: &User) -> Self {
        let public = user.public();
        Self {
            address: user.blockchain_address.clone(),
            token: token_for(&user.id),
            data: AuthData {
                blockchain_address: user.blockchain_address.clone(),
                user: public.clone(),
            },
            user: public,
        }
    }
}

/// `POST /auth/register`
pub async fn register(
    State(state): State<AppState>,
    body: Option<Json<RegisterRequest>>,
) -> ApiResult<Envelope<AuthBody>> {
    let req = body_or_default(body);
    let (Some(username), Some(email), Some(password)) = (req.username, req.email, req.password)
    else {
        return Err(ApiError::bad_request(
            "Please provide username, email and password",
        ));
    };

    let user = User {
        id: state.ids.next_id(),
        username,
        email,
        password,
        blockchain_address: random_address(),
    };

    let user = match state.users.add(user).await {
        Ok(user) => user,
        Err(RepositoryError::Conflict { field, .. }) if field == "email" => {
            warn!("registration with existing email");
            return Err(ApiError::bad_request("User with this email already exists"));
        }
        Err(err) => return Err(state.internal(err)),
    };

    info!(user_id = %user.id, username = %user.username, "user registered");
    Ok(Envelope::created(AuthBody::for_user(&user))
        .with_message("User registered successfully")
        .with_address(user.blockchain_address.clone()))
}

/// `POST /auth/login`
pub async fn login(
    State(state): State<AppState>,
    body: Option<Json<LoginRequest>>,
) -> ApiResult<Envelope<AuthBody>> {
    let req = body_or_default(body);
    let (Some(email), Some(password)) = (req.email, req.password) else {
        return Err(ApiError::bad_request("Please provide email and password"));
    };

    let candidates = state
        .users
        .find_by_field(UserField::Email, &email)
        .await
        .map_err(|e| state.internal(e))?;

    let Some(user) = candidates.into_iter().find(|u| u.password == password) else {
        warn!("failed login attempt");
        return Err(ApiError::unauthorized("Invalid email or password"));
    };

    info!(user_id = %user.id, "user logged in");
    Ok(Envelope::ok(AuthBody::for_user(&user))
        .with_message("Login successful")
        .with_address(user.blockchain_address.clone()))
}
