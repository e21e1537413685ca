use crate::{
    AppState,
    auth::validate_token,
    dto::{ListParams, ListingPage},
    errors::ApiError,
    routes::Payload,
    states::Area,
};
use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    routing::{get, post},
};
use tracing::{debug, info};
use uuid::Uuid;

/// Routes for one area: list/create, fetch one, toggle a flag.
pub fn routes<T: Area>() -> Router<AppState> {
    Router::new()
        .route(T::PATH, get(list_items::<T>).post(create_item::<T>))
        .route(&format!("{}/{{id}}", T::PATH), get(get_item::<T>))
        .route(
            &format!("{}/{{id}}/toggle/{{flag}}", T::PATH),
            post(toggle_item::<T>),
        )
}

/// GET /{area}?q=&category=&status=&mine=
/// Headers: Authorization: Bearer <token>
pub async fn list_items<T: Area>(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<ListParams>,
) -> Result<Json<ListingPage<T>>, ApiError> {
    let claims = validate_token(&headers, &state.config.jwt_secret)?;

    let store = T::store(&state).read().await;
    let filter = params.into_filter::<T>(&claims.sub)?;
    let data: Vec<T> = filter.apply(store.all()).cloned().collect();

    debug!("Listed {} of {} {}s", data.len(), store.len(), T::NOUN);

    Ok(Json(ListingPage::new(data, T::EMPTY_STATE)))
}

/// POST /{area}
/// Headers: Authorization: Bearer <token>
pub async fn create_item<T: Area>(
    State(state): State<AppState>,
    headers: HeaderMap,
    Payload(payload): Payload<T::Draft>,
) -> Result<(StatusCode, Json<T>), ApiError> {
    let claims = validate_token(&headers, &state.config.jwt_secret)?;
    let author = state.profile_for(&claims.sub);

    let mut store = T::store(&state).write().await;
    let item = store.append(payload, &author)?.clone();

    info!("{} created: {} by {}", T::NOUN, item.id(), claims.sub);

    Ok((StatusCode::CREATED, Json(item)))
}

/// GET /{area}/:id
pub async fn get_item<T: Area>(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
) -> Result<Json<T>, ApiError> {
    validate_token(&headers, &state.config.jwt_secret)?;

    let store = T::store(&state).read().await;
    let item = store.get(id)?;

    Ok(Json(item.clone()))
}

/// POST /{area}/:id/toggle/:flag
/// Headers: Authorization: Bearer <token>
pub async fn toggle_item<T: Area>(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((id, flag)): Path<(Uuid, String)>,
) -> Result<Json<T>, ApiError> {
    let claims = validate_token(&headers, &state.config.jwt_secret)?;

    let mut store = T::store(&state).write().await;
    store.get(id)?;
    let parsed = flag
        .parse::<T::Flag>()
        .map_err(|_| ApiError::ValidationError(format!("unknown {} flag `{}`", T::NOUN, flag)))?;
    let item = store.toggle(id, parsed)?.clone();

    info!("{} {} toggled {} by {}", T::NOUN, id, flag, claims.sub);

    Ok(Json(item))
}
