//! User lookups and address generation.

use crate::domain::{ApiError, ApiResult, Envelope, PublicUser};
use crate::middleware::AuthenticatedUser;
use crate::router::AppState;
use axum::extract::{Path, State};
use axum::Extension;
use serde::Serialize;
use shared_identifiers::random_address;
use tracing::debug;

#[derive(Debug, Serialize)]
pub struct UserBody {
    pub user: PublicUser,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileData {
    pub user: PublicUser,
    pub blockchain_address: String,
}

#[derive(Debug, Serialize)]
pub struct ProfileBody {
    pub user: PublicUser,
    pub data: ProfileData,
}

#[derive(Debug, Serialize)]
pub struct AddressBody {
    pub address: String,
}

/// `GET /user/info`
pub async fn info(Extension(AuthenticatedUser(user)): Extension<AuthenticatedUser>) -> Envelope<UserBody> {
    let address = user.blockchain_address.clone();
    Envelope::ok(UserBody { user: user.public() }).with_address(address)
}

/// `GET /user`: the caller, repeated under `data`
pub async fn profile(
    Extension(AuthenticatedUser(user)): Extension<AuthenticatedUser>,
) -> Envelope<ProfileBody> {
    let address = user.blockchain_address.clone();
    Envelope::ok(ProfileBody {
        user: user.public(),
        data: ProfileData {
            user: user.public(),
            blockchain_address: address.clone(),
        },
    })
    .with_address(address)
}

/// `GET /user/:id`
pub async fn by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Envelope<UserBody>> {
    let user = state
        .users
        .find_by_id(&id)
        .await
        .map_err(|e| state.internal(e))?
        .ok_or_else(|| ApiError::not_found("User not found"))?;

    let address = user.blockchain_address.clone();
    Ok(Envelope::ok(UserBody { user: user.public() }).with_address(address))
}

/// `GET /user/address` and its aliases
pub async fn generate_address() -> Envelope<AddressBody> {
    let address = random_address();
    debug!(%address, "generated address");
    Envelope::ok(AddressBody {
        address: address.clone(),
    })
    .with_address(address)
}
