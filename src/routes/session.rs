use crate::{
    AppState,
    auth::{campus_identity, create_token},
    dto::{SigninRequest, SigninResponse},
    errors::ApiError,
    routes::{Payload, profile::profile_response},
};
use axum::{Json, extract::State};
use tracing::{info, warn};
use validator::Validate;

/// POST /auth/signin
/// Body: { "email": "..." }
///
/// The email is supplied by the external sign-in provider; this only checks
/// it is a campus address and opens a dashboard session for it.
pub async fn signin(
    State(state): State<AppState>,
    Payload(mut payload): Payload<SigninRequest>,
) -> Result<Json<SigninResponse>, ApiError> {
    payload.email = payload.email.trim().to_string();
    payload
        .validate()
        .map_err(|e| ApiError::ValidationError(e.to_string()))?;

    let identity = campus_identity(&payload.email, &state.config.email_suffix).inspect_err(|_| {
        warn!("Rejected non-campus sign-in: {}", payload.email);
    })?;

    let token = create_token(
        &identity,
        &state.config.jwt_secret,
        state.config.session_ttl_hours,
    )?;
    let profile = state.profile_for(&identity);

    info!("User signed in: {}", identity);

    Ok(Json(SigninResponse {
        token,
        profile: profile_response(&state, profile).await,
    }))
}
