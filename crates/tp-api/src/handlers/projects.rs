use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use tp_common::api::requests::{ProjectPayload, RequirementPayload};
use tp_common::api::responses::{
    CreatedResponse, DetailResponse, ListResponse, MessageResponse, ProjectDetail,
};
use tp_common::db::{self, RequirementUpsert};
use tp_common::Project;

use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::SharedState;

pub async fn create(
    State(state): State<SharedState>,
    _auth: AuthUser,
    Json(payload): Json<ProjectPayload>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    payload
        .validate()
        .map_err(|msg| ApiError::BadRequest(msg.into()))?;

    let id = db::insert_project(
        &state.pool,
        &payload.name,
        &payload.description,
        payload.start_date,
        payload.end_date,
        payload.status,
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse::new("Project created successfully", id)),
    ))
}

pub async fn list(
    State(state): State<SharedState>,
    _auth: AuthUser,
) -> Result<Json<ListResponse<Project>>, ApiError> {
    let projects = db::list_projects(&state.pool).await?;
    Ok(Json(ListResponse::new(
        "Projects retrieved successfully",
        projects,
    )))
}

pub async fn get_by_id(
    State(state): State<SharedState>,
    Path(project_id): Path<i64>,
    _auth: AuthUser,
) -> Result<Json<DetailResponse<ProjectDetail>>, ApiError> {
    let detail = db::fetch_project_detail(&state.pool, project_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("project not found: {project_id}")))?;

    Ok(Json(DetailResponse::new(
        "Project fetched successfully",
        detail,
    )))
}

pub async fn update(
    State(state): State<SharedState>,
    Path(project_id): Path<i64>,
    _auth: AuthUser,
    Json(payload): Json<ProjectPayload>,
) -> Result<Json<MessageResponse>, ApiError> {
    payload
        .validate()
        .map_err(|msg| ApiError::BadRequest(msg.into()))?;

    let updated = db::update_project(
        &state.pool,
        project_id,
        &payload.name,
        &payload.description,
        payload.start_date,
        payload.end_date,
        payload.status,
    )
    .await?;

    if !updated {
        return Err(ApiError::NotFound(format!(
            "project not found: {project_id}"
        )));
    }

    Ok(Json(MessageResponse::ok("Project updated successfully")))
}

pub async fn remove(
    State(state): State<SharedState>,
    Path(project_id): Path<i64>,
    _auth: AuthUser,
) -> Result<Json<MessageResponse>, ApiError> {
    let deleted = db::delete_project(&state.pool, project_id).await?;

    if !deleted {
        return Err(ApiError::NotFound(format!(
            "project not found: {project_id}"
        )));
    }

    Ok(Json(MessageResponse::ok("Project deleted successfully")))
}

pub async fn add_skill(
    State(state): State<SharedState>,
    Path(project_id): Path<i64>,
    _auth: AuthUser,
    Json(payload): Json<RequirementPayload>,
) -> Result<Response, ApiError> {
    let outcome = db::upsert_requirement(
        &state.pool,
        project_id,
        payload.skill_id,
        payload.min_proficiency,
    )
    .await?;

    Ok(match outcome {
        RequirementUpsert::Inserted(id) => (
            StatusCode::CREATED,
            Json(CreatedResponse::new(
                "Skill added to project successfully",
                id,
            )),
        )
            .into_response(),
        RequirementUpsert::Updated => Json(MessageResponse::ok(
            "Project skill requirement updated successfully",
        ))
        .into_response(),
    })
}

pub async fn remove_skill(
    State(state): State<SharedState>,
    Path((project_id, skill_id)): Path<(i64, i64)>,
    _auth: AuthUser,
) -> Result<Json<MessageResponse>, ApiError> {
    let removed = db::remove_requirement(&state.pool, project_id, skill_id).await?;

    if !removed {
        return Err(ApiError::NotFound(
            "project skill requirement not found".into(),
        ));
    }

    Ok(Json(MessageResponse::ok(
        "Skill removed from project successfully",
    )))
}
