use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::get,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::error::AppError;
use crate::application::use_cases::profile::create_profile::CreateProfile;
use crate::application::use_cases::profile::get_profile::GetProfile;
use crate::application::use_cases::profile::update_profile::UpdateProfile;
use crate::bootstrap::app_context::AppContext;
use crate::domain::profile::Profile;
use crate::presentation::http::auth::{self, Bearer};

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub user_id: i32,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
}

impl From<Profile> for ProfileResponse {
    fn from(p: Profile) -> Self {
        ProfileResponse {
            user_id: p.user_id,
            first_name: p.first_name,
            last_name: p.last_name,
            phone: p.phone,
            email: p.email,
            address: p.address,
            city: p.city,
            state: p.state,
            zip: p.zip,
        }
    }
}

/// Profile fields as sent by the caller. The user id always comes from the
/// resolved principal.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
}

impl ProfileRequest {
    fn into_profile(self, user_id: i32) -> Profile {
        Profile {
            user_id,
            first_name: self.first_name,
            last_name: self.last_name,
            phone: self.phone,
            email: self.email,
            address: self.address,
            city: self.city,
            state: self.state,
            zip: self.zip,
        }
    }
}

#[utoipa::path(get, path = "/profile", tag = "Profile", responses(
    (status = 200, body = ProfileResponse),
    (status = 404, description = "Profile not found")
))]
pub async fn get_profile(
    State(ctx): State<AppContext>,
    bearer: Option<Bearer>,
) -> Result<Json<ProfileResponse>, AppError> {
    let user = auth::current_user(&ctx, bearer).await?;

    let repo = ctx.profile_repo();
    let uc = GetProfile { repo: repo.as_ref() };
    let profile = uc.execute(user.user_id).await?;
    Ok(Json(profile.into()))
}

#[utoipa::path(post, path = "/profile", tag = "Profile", request_body = ProfileRequest,
    responses(
        (status = 201, body = ProfileResponse),
        (status = 409, description = "Profile already exists")
    ))]
pub async fn create_profile(
    State(ctx): State<AppContext>,
    bearer: Option<Bearer>,
    Json(req): Json<ProfileRequest>,
) -> Result<(StatusCode, Json<ProfileResponse>), AppError> {
    let user = auth::current_user(&ctx, bearer).await?;

    let repo = ctx.profile_repo();
    let uc = CreateProfile { repo: repo.as_ref() };
    let created = uc.execute(req.into_profile(user.user_id)).await?;
    Ok((StatusCode::CREATED, Json(created.into())))
}

#[utoipa::path(put, path = "/profile", tag = "Profile", request_body = ProfileRequest,
    responses(
        (status = 200, body = ProfileResponse),
        (status = 404, description = "Profile not found")
    ))]
pub async fn update_profile(
    State(ctx): State<AppContext>,
    bearer: Option<Bearer>,
    Json(req): Json<ProfileRequest>,
) -> Result<Json<ProfileResponse>, AppError> {
    let user = auth::current_user(&ctx, bearer).await?;

    let repo = ctx.profile_repo();
    let uc = UpdateProfile { repo: repo.as_ref() };
    let updated = uc.execute(req.into_profile(user.user_id)).await?;
    Ok(Json(updated.into()))
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route(
            "/profile",
            get(get_profile).post(create_profile).put(update_profile),
        )
        .with_state(ctx)
}
