use deadpool_postgres::PoolError;
use thiserror::Error;
use tokio_postgres::{Error as PgError, Row};
use tracing::instrument;

use crate::api::responses::{ProjectDetail, RequiredSkill};
use crate::db::PgPool;
use crate::levels::{ProficiencyLevel, ProjectStatus};
use crate::Project;
use chrono::NaiveDate;

#[derive(Debug, Error)]
pub enum ProjectStorageError {
    #[error("failed to get postgres connection: {0}")]
    Pool(#[from] PoolError),
    #[error("postgres error: {0}")]
    Postgres(#[from] PgError),
    #[error("failed to map project row: {0}")]
    Mapping(String),
    #[error("project not found: {0}")]
    ProjectNotFound(i64),
    #[error("skill not found: {0}")]
    SkillNotFound(i64),
}

/// Outcome of attaching a required skill to a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequirementUpsert {
    /// A new requirement row was created with this id.
    Inserted(i64),
    /// The pair already existed; its minimum proficiency was replaced.
    Updated,
}

pub(crate) fn map_project_row(row: &Row) -> Result<Project, ProjectStorageError> {
    let label: String = row.get("status");
    let status = ProjectStatus::from_label(&label)
        .ok_or_else(|| ProjectStorageError::Mapping(format!("unknown project status: {label}")))?;

    Ok(Project {
        id: row.get("id"),
        name: row.get("name"),
        description: row.get("description"),
        start_date: row.get("start_date"),
        end_date: row.get("end_date"),
        status,
    })
}

fn map_required_skill_row(row: &Row) -> Result<RequiredSkill, ProjectStorageError> {
    let label: String = row.get("min_proficiency");
    let min_proficiency = ProficiencyLevel::from_label(&label)
        .ok_or_else(|| ProjectStorageError::Mapping(format!("unknown proficiency: {label}")))?;

    Ok(RequiredSkill {
        id: row.get("id"),
        name: row.get("name"),
        category: row.get("category"),
        min_proficiency,
    })
}

#[instrument(skip(pool, name, description))]
pub async fn insert_project(
    pool: &PgPool,
    name: &str,
    description: &str,
    start_date: NaiveDate,
    end_date: NaiveDate,
    status: ProjectStatus,
) -> Result<i64, ProjectStorageError> {
    let client = pool.get().await?;
    let status_label = status.as_str();

    let row = client
        .query_one(
            "INSERT INTO tp.projects (name, description, start_date, end_date, status)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING id",
            &[&name, &description, &start_date, &end_date, &status_label],
        )
        .await?;

    Ok(row.get(0))
}

#[instrument(skip(pool))]
pub async fn list_projects(pool: &PgPool) -> Result<Vec<Project>, ProjectStorageError> {
    let client = pool.get().await?;
    let rows = client
        .query(
            "SELECT id, name, description, start_date, end_date, status
             FROM tp.projects
             ORDER BY created_at DESC, id DESC",
            &[],
        )
        .await?;

    rows.iter().map(map_project_row).collect()
}

/// Project row plus its requirement list, or `None` if the project does
/// not exist.
#[instrument(skip(pool))]
pub async fn fetch_project_detail(
    pool: &PgPool,
    project_id: i64,
) -> Result<Option<ProjectDetail>, ProjectStorageError> {
    let client = pool.get().await?;

    let Some(row) = client
        .query_opt(
            "SELECT id, name, description, start_date, end_date, status
             FROM tp.projects
             WHERE id = $1",
            &[&project_id],
        )
        .await?
    else {
        return Ok(None);
    };
    let project = map_project_row(&row)?;

    let skill_rows = client
        .query(
            "SELECT s.id, s.name, s.category, ps.min_proficiency
             FROM tp.skills s
             JOIN tp.project_skills ps ON s.id = ps.skill_id
             WHERE ps.project_id = $1
             ORDER BY ps.id",
            &[&project_id],
        )
        .await?;

    let required_skills = skill_rows
        .iter()
        .map(map_required_skill_row)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Some(ProjectDetail {
        project,
        required_skills,
    }))
}

#[instrument(skip(pool, name, description))]
pub async fn update_project(
    pool: &PgPool,
    project_id: i64,
    name: &str,
    description: &str,
    start_date: NaiveDate,
    end_date: NaiveDate,
    status: ProjectStatus,
) -> Result<bool, ProjectStorageError> {
    let client = pool.get().await?;
    let status_label = status.as_str();

    let affected = client
        .execute(
            "UPDATE tp.projects
             SET name = $1, description = $2, start_date = $3, end_date = $4, status = $5
             WHERE id = $6",
            &[
                &name,
                &description,
                &start_date,
                &end_date,
                &status_label,
                &project_id,
            ],
        )
        .await?;

    Ok(affected > 0)
}

#[instrument(skip(pool))]
pub async fn delete_project(pool: &PgPool, project_id: i64) -> Result<bool, ProjectStorageError> {
    let client = pool.get().await?;
    let affected = client
        .execute("DELETE FROM tp.projects WHERE id = $1", &[&project_id])
        .await?;

    Ok(affected > 0)
}

/// Attach a required skill to a project, replacing the minimum proficiency
/// if the pair already exists. Both sides are checked first so the caller
/// can distinguish which id was bad.
#[instrument(skip(pool))]
pub async fn upsert_requirement(
    pool: &PgPool,
    project_id: i64,
    skill_id: i64,
    min_proficiency: ProficiencyLevel,
) -> Result<RequirementUpsert, ProjectStorageError> {
    let client = pool.get().await?;

    let project_exists = client
        .query_opt("SELECT id FROM tp.projects WHERE id = $1", &[&project_id])
        .await?
        .is_some();
    if !project_exists {
        return Err(ProjectStorageError::ProjectNotFound(project_id));
    }

    let skill_exists = client
        .query_opt("SELECT id FROM tp.skills WHERE id = $1", &[&skill_id])
        .await?
        .is_some();
    if !skill_exists {
        return Err(ProjectStorageError::SkillNotFound(skill_id));
    }

    let level = min_proficiency.as_str();
    let row = client
        .query_one(
            "INSERT INTO tp.project_skills (project_id, skill_id, min_proficiency)
             VALUES ($1, $2, $3)
             ON CONFLICT (project_id, skill_id)
             DO UPDATE SET min_proficiency = EXCLUDED.min_proficiency
             RETURNING id, (xmax = 0) AS inserted",
            &[&project_id, &skill_id, &level],
        )
        .await?;

    if row.get::<_, bool>("inserted") {
        Ok(RequirementUpsert::Inserted(row.get("id")))
    } else {
        Ok(RequirementUpsert::Updated)
    }
}

#[instrument(skip(pool))]
pub async fn remove_requirement(
    pool: &PgPool,
    project_id: i64,
    skill_id: i64,
) -> Result<bool, ProjectStorageError> {
    let client = pool.get().await?;
    let affected = client
        .execute(
            "DELETE FROM tp.project_skills WHERE project_id = $1 AND skill_id = $2",
            &[&project_id, &skill_id],
        )
        .await?;

    Ok(affected > 0)
}
