use crate::{
    AppState,
    auth::validate_token,
    collection::Filter,
    dto::{AddInterestRequest, ProfileResponse, ProfileStats, UpdateProfileRequest},
    errors::ApiError,
    models::{Event, Listing, Post, Profile, Question, Service},
    routes::Payload,
    states::Area,
};
use axum::{
    Json,
    extract::{Path, State},
    http::HeaderMap,
};
use tracing::info;
use validator::Validate;

async fn count_owned<T: Area>(state: &AppState, identity: &str) -> usize {
    let store = T::store(state).read().await;
    Filter::<T>::new().owned_by(identity).apply(store.all()).count()
}

pub async fn profile_response(state: &AppState, profile: Profile) -> ProfileResponse {
    let identity = profile.email.as_str();
    let stats = ProfileStats {
        posts: count_owned::<Post>(state, identity).await,
        listings: count_owned::<Listing>(state, identity).await,
        events_hosted: count_owned::<Event>(state, identity).await,
        services_offered: count_owned::<Service>(state, identity).await,
        questions_asked: count_owned::<Question>(state, identity).await,
    };
    ProfileResponse { profile, stats }
}

/// GET /profile/me
/// Headers: Authorization: Bearer <token>
pub async fn get_profile(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<ProfileResponse>, ApiError> {
    let claims = validate_token(&headers, &state.config.jwt_secret)?;
    let profile = state.profile_for(&claims.sub);

    Ok(Json(profile_response(&state, profile).await))
}

/// PUT /profile/me
/// Body: any of { "name", "year", "department", "bio", "location" }
pub async fn update_profile(
    State(state): State<AppState>,
    headers: HeaderMap,
    Payload(payload): Payload<UpdateProfileRequest>,
) -> Result<Json<ProfileResponse>, ApiError> {
    payload
        .validate()
        .map_err(|e| ApiError::ValidationError(e.to_string()))?;

    let claims = validate_token(&headers, &state.config.jwt_secret)?;
    let profile = state.edit_profile(&claims.sub, |profile| profile.apply(payload.into()))?;

    info!("Profile updated: {}", claims.sub);

    Ok(Json(profile_response(&state, profile).await))
}

/// POST /profile/me/interests
/// Body: { "interest": "..." }
pub async fn add_interest(
    State(state): State<AppState>,
    headers: HeaderMap,
    Payload(payload): Payload<AddInterestRequest>,
) -> Result<Json<ProfileResponse>, ApiError> {
    payload
        .validate()
        .map_err(|e| ApiError::ValidationError(e.to_string()))?;

    let claims = validate_token(&headers, &state.config.jwt_secret)?;
    let profile = state.edit_profile(&claims.sub, |profile| {
        profile.add_interest(&payload.interest)
    })?;

    Ok(Json(profile_response(&state, profile).await))
}

/// DELETE /profile/me/interests/:interest
pub async fn remove_interest(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(interest): Path<String>,
) -> Result<Json<ProfileResponse>, ApiError> {
    let claims = validate_token(&headers, &state.config.jwt_secret)?;
    let profile = state.edit_profile(&claims.sub, |profile| {
        Ok(profile.remove_interest(&interest))
    })?;

    Ok(Json(profile_response(&state, profile).await))
}
