/**
 * Idea HTTP Handlers
 *
 * This module contains the CRUD handlers for ideas. Every endpoint requires
 * authentication via the `CurrentUser` extractor.
 *
 * # Ownership
 *
 * Item handlers load the target idea first (404 if absent), then check that
 * it belongs to the current user (403 if not), then act. Listing is scoped
 * to the current user, and creation assigns ownership to the current user
 * unconditionally.
 */

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::auth::gate::CurrentUser;
use crate::auth::users::User;
use crate::error::ApiError;
use crate::ideas::db::{self, Idea};
use crate::ideas::types::{IdeaPayload, IdeaResponse};
use crate::server::state::AppState;

/// Load an idea and check that `user` owns it.
async fn load_owned_idea(state: &AppState, user: &User, idea_id: i64) -> Result<Idea, ApiError> {
    let idea = db::get_idea_by_id(&state.db, idea_id)
        .await?
        .ok_or(ApiError::NotFound)?;

    if idea.user_id != user.id {
        tracing::debug!(
            "user {} denied access to idea {} owned by {}",
            user.id,
            idea.id,
            idea.user_id
        );
        return Err(ApiError::Forbidden);
    }

    Ok(idea)
}

fn validate_payload(payload: &IdeaPayload) -> Result<(), ApiError> {
    if payload.name.is_empty() {
        return Err(ApiError::validation("name is required"));
    }
    Ok(())
}

/// Get all ideas of the current user.
pub async fn list_ideas(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<Vec<IdeaResponse>>, ApiError> {
    let ideas = db::get_ideas_for_user(&state.db, user.id).await?;

    Ok(Json(ideas.into_iter().map(IdeaResponse::from).collect()))
}

/// Create a new idea owned by the current user.
///
/// # Errors
///
/// * `400 Bad Request` - malformed body or empty name
/// * `401 Unauthorized` - bad or missing credentials
pub async fn create_idea(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    payload: Result<Json<IdeaPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<IdeaResponse>), ApiError> {
    let Json(payload) = payload?;
    validate_payload(&payload)?;

    let idea = db::create_idea(&state.db, user.id, &payload.name, &payload.description).await?;

    tracing::info!("user {} created idea {}", user.id, idea.id);

    Ok((StatusCode::CREATED, Json(IdeaResponse::from(idea))))
}

/// Get an idea by id.
///
/// # Errors
///
/// * `401 Unauthorized` - bad or missing credentials
/// * `404 Not Found` - no idea with this id
/// * `403 Forbidden` - idea belongs to another user
pub async fn get_idea(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(idea_id): Path<i64>,
) -> Result<Json<IdeaResponse>, ApiError> {
    let idea = load_owned_idea(&state, &user, idea_id).await?;

    Ok(Json(IdeaResponse::from(idea)))
}

/// Update an idea's name and description.
///
/// Responds 201 on success, for updates as well as creates.
///
/// # Errors
///
/// * `400 Bad Request` - malformed body or empty name
/// * `401 Unauthorized` - bad or missing credentials
/// * `404 Not Found` - no idea with this id
/// * `403 Forbidden` - idea belongs to another user
pub async fn update_idea(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(idea_id): Path<i64>,
    payload: Result<Json<IdeaPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<IdeaResponse>), ApiError> {
    let Json(payload) = payload?;
    validate_payload(&payload)?;

    load_owned_idea(&state, &user, idea_id).await?;

    let idea = db::update_idea(&state.db, idea_id, &payload.name, &payload.description).await?;

    tracing::info!("user {} updated idea {}", user.id, idea.id);

    Ok((StatusCode::CREATED, Json(IdeaResponse::from(idea))))
}

/// Delete an idea by id.
///
/// # Errors
///
/// * `401 Unauthorized` - bad or missing credentials
/// * `404 Not Found` - no idea with this id
/// * `403 Forbidden` - idea belongs to another user
pub async fn delete_idea(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(idea_id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    load_owned_idea(&state, &user, idea_id).await?;

    db::delete_idea(&state.db, idea_id).await?;

    tracing::info!("user {} deleted idea {}", user.id, idea_id);

    Ok(StatusCode::NO_CONTENT)
}
