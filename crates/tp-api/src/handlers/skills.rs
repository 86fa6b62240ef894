use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use tp_common::api::requests::SkillPayload;
use tp_common::api::responses::{CreatedResponse, ListResponse, MessageResponse};
use tp_common::db;
use tp_common::Skill;

use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::SharedState;

pub async fn create(
    State(state): State<SharedState>,
    _auth: AuthUser,
    Json(payload): Json<SkillPayload>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    payload
        .validate()
        .map_err(|msg| ApiError::BadRequest(msg.into()))?;

    let id = db::insert_skill(
        &state.pool,
        &payload.name,
        &payload.category,
        &payload.description,
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse::new("Skill created successfully", id)),
    ))
}

pub async fn list(
    State(state): State<SharedState>,
    _auth: AuthUser,
) -> Result<Json<ListResponse<Skill>>, ApiError> {
    let skills = db::list_skills(&state.pool).await?;
    Ok(Json(ListResponse::new(
        "Skills retrieved successfully",
        skills,
    )))
}

pub async fn update(
    State(state): State<SharedState>,
    Path(skill_id): Path<i64>,
    _auth: AuthUser,
    Json(payload): Json<SkillPayload>,
) -> Result<Json<MessageResponse>, ApiError> {
    payload
        .validate()
        .map_err(|msg| ApiError::BadRequest(msg.into()))?;

    let updated = db::update_skill(
        &state.pool,
        skill_id,
        &payload.name,
        &payload.category,
        &payload.description,
    )
    .await?;

    if !updated {
        return Err(ApiError::NotFound(format!("skill not found: {skill_id}")));
    }

    Ok(Json(MessageResponse::ok("Skill updated successfully")))
}

pub async fn remove(
    State(state): State<SharedState>,
    Path(skill_id): Path<i64>,
    _auth: AuthUser,
) -> Result<Json<MessageResponse>, ApiError> {
    let deleted = db::delete_skill(&state.pool, skill_id).await?;

    if !deleted {
        return Err(ApiError::NotFound(format!("skill not found: {skill_id}")));
    }

    Ok(Json(MessageResponse::ok("Skill deleted successfully")))
}
