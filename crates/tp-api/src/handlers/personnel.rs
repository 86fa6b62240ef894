use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use tp_common::api::requests::{AssignSkillPayload, PersonnelPayload};
use tp_common::api::responses::{CreatedResponse, DetailResponse, ListResponse, MessageResponse};
use tp_common::db;
use tp_common::Personnel;

use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::SharedState;

pub async fn create(
    State(state): State<SharedState>,
    _auth: AuthUser,
    Json(payload): Json<PersonnelPayload>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    payload
        .validate()
        .map_err(|msg| ApiError::BadRequest(msg.into()))?;

    let id = db::insert_personnel(
        &state.pool,
        &payload.name,
        &payload.email,
        &payload.role,
        payload.experience_level,
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse::new("Personnel created successfully", id)),
    ))
}

pub async fn list(
    State(state): State<SharedState>,
    _auth: AuthUser,
) -> Result<Json<ListResponse<Personnel>>, ApiError> {
    let personnel = db::list_personnel(&state.pool).await?;
    Ok(Json(ListResponse::new(
        "Personnel fetched successfully",
        personnel,
    )))
}

pub async fn get_by_id(
    State(state): State<SharedState>,
    Path(personnel_id): Path<i64>,
    _auth: AuthUser,
) -> Result<Json<DetailResponse<Personnel>>, ApiError> {
    let person = db::get_personnel(&state.pool, personnel_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("personnel not found: {personnel_id}")))?;

    Ok(Json(DetailResponse::new(
        "Personnel fetched successfully",
        person,
    )))
}

pub async fn update(
    State(state): State<SharedState>,
    Path(personnel_id): Path<i64>,
    _auth: AuthUser,
    Json(payload): Json<PersonnelPayload>,
) -> Result<Json<MessageResponse>, ApiError> {
    payload
        .validate()
        .map_err(|msg| ApiError::BadRequest(msg.into()))?;

    let updated = db::update_personnel(
        &state.pool,
        personnel_id,
        &payload.name,
        &payload.email,
        &payload.role,
        payload.experience_level,
    )
    .await?;

    if !updated {
        return Err(ApiError::NotFound(format!(
            "personnel not found: {personnel_id}"
        )));
    }

    Ok(Json(MessageResponse::ok("Personnel updated successfully")))
}

pub async fn remove(
    State(state): State<SharedState>,
    Path(personnel_id): Path<i64>,
    _auth: AuthUser,
) -> Result<Json<MessageResponse>, ApiError> {
    let deleted = db::delete_personnel(&state.pool, personnel_id).await?;

    if !deleted {
        return Err(ApiError::NotFound(format!(
            "personnel not found: {personnel_id}"
        )));
    }

    Ok(Json(MessageResponse::ok("Personnel deleted successfully")))
}

pub async fn assign_skill(
    State(state): State<SharedState>,
    Path(personnel_id): Path<i64>,
    _auth: AuthUser,
    Json(payload): Json<AssignSkillPayload>,
) -> Result<Json<MessageResponse>, ApiError> {
    db::upsert_personnel_skill(
        &state.pool,
        personnel_id,
        payload.skill_id,
        payload.proficiency,
    )
    .await?;

    Ok(Json(MessageResponse::ok(
        "Skill assigned to personnel successfully",
    )))
}
