use crate::{
    AppState,
    auth::validate_token,
    dto::{DashboardResponse, DashboardTab},
    errors::ApiError,
    models::{Event, Listing, Post, Question, Service},
    states::Area,
};
use axum::{Json, extract::State, http::HeaderMap};

async fn tab<T: Area>(state: &AppState, id: &'static str, label: &'static str) -> DashboardTab {
    DashboardTab {
        id,
        label,
        count: Some(T::store(state).read().await.len()),
    }
}

/// GET /dashboard
/// Headers: Authorization: Bearer <token>
pub async fn overview(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<DashboardResponse>, ApiError> {
    let claims = validate_token(&headers, &state.config.jwt_secret)?;

    let tabs = vec![
        tab::<Post>(&state, "feed", "News Feed").await,
        tab::<Listing>(&state, "marketplace", "Buy/Sell Items").await,
        tab::<Event>(&state, "events", "Host Events").await,
        tab::<Service>(&state, "services", "Services").await,
        tab::<Question>(&state, "queries", "Queries").await,
        DashboardTab {
            id: "profile",
            label: "Profile",
            count: None,
        },
    ];

    Ok(Json(DashboardResponse {
        identity: claims.sub,
        landing: "feed",
        tabs,
    }))
}
