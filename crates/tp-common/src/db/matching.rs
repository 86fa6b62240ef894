use deadpool_postgres::PoolError;
use thiserror::Error;
use tokio_postgres::{Error as PgError, Row};
use tracing::instrument;

use crate::db::PgPool;
use crate::levels::{ExperienceLevel, ProficiencyLevel, ProjectStatus};
use crate::{PersonnelSkillRow, Project, SkillRequirement};

#[derive(Debug, Error)]
pub enum MatchFetchError {
    #[error("failed to get postgres connection: {0}")]
    Pool(#[from] PoolError),
    #[error("postgres error: {0}")]
    Postgres(#[from] PgError),
    #[error("failed to map row: {0}")]
    Mapping(String),
}

fn map_requirement_row(row: &Row) -> Result<SkillRequirement, MatchFetchError> {
    let label: String = row.get("min_proficiency");
    let min_proficiency = ProficiencyLevel::from_label(&label)
        .ok_or_else(|| MatchFetchError::Mapping(format!("unknown proficiency: {label}")))?;

    Ok(SkillRequirement {
        skill_id: row.get("skill_id"),
        skill_name: row.get("skill_name"),
        min_proficiency,
    })
}

fn map_roster_row(row: &Row) -> Result<PersonnelSkillRow, MatchFetchError> {
    let experience_label: String = row.get("experience_level");
    let experience_level = ExperienceLevel::from_label(&experience_label).ok_or_else(|| {
        MatchFetchError::Mapping(format!("unknown experience level: {experience_label}"))
    })?;

    let proficiency_label: String = row.get("proficiency");
    let proficiency = ProficiencyLevel::from_label(&proficiency_label).ok_or_else(|| {
        MatchFetchError::Mapping(format!("unknown proficiency: {proficiency_label}"))
    })?;

    Ok(PersonnelSkillRow {
        personnel_id: row.get("id"),
        name: row.get("name"),
        email: row.get("email"),
        role: row.get("role"),
        experience_level,
        skill_id: row.get("skill_id"),
        skill_name: row.get("skill_name"),
        proficiency,
    })
}

#[instrument(skip(pool))]
pub async fn fetch_project(
    pool: &PgPool,
    project_id: i64,
) -> Result<Option<Project>, MatchFetchError> {
    let client = pool.get().await?;
    let row = client
        .query_opt(
            "SELECT id, name, description, start_date, end_date, status
             FROM tp.projects
             WHERE id = $1",
            &[&project_id],
        )
        .await?;

    let Some(row) = row else { return Ok(None) };

    let label: String = row.get("status");
    let status = ProjectStatus::from_label(&label)
        .ok_or_else(|| MatchFetchError::Mapping(format!("unknown project status: {label}")))?;

    Ok(Some(Project {
        id: row.get("id"),
        name: row.get("name"),
        description: row.get("description"),
        start_date: row.get("start_date"),
        end_date: row.get("end_date"),
        status,
    }))
}

/// A project's requirements joined with skill names, in requirement
/// insertion order.
#[instrument(skip(pool))]
pub async fn fetch_requirements(
    pool: &PgPool,
    project_id: i64,
) -> Result<Vec<SkillRequirement>, MatchFetchError> {
    let client = pool.get().await?;
    let rows = client
        .query(
            "SELECT ps.skill_id, s.name AS skill_name, ps.min_proficiency
             FROM tp.project_skills ps
             JOIN tp.skills s ON ps.skill_id = s.id
             WHERE ps.project_id = $1
             ORDER BY ps.id",
            &[&project_id],
        )
        .await?;

    rows.iter().map(map_requirement_row).collect()
}

/// The whole roster as flat (person, skill) rows, unfiltered by project.
/// The engine does the project-specific filtering via the requirement set.
#[instrument(skip(pool))]
pub async fn fetch_personnel_with_skills(
    pool: &PgPool,
) -> Result<Vec<PersonnelSkillRow>, MatchFetchError> {
    let client = pool.get().await?;
    let rows = client
        .query(
            "SELECT
                p.id,
                p.name,
                p.email,
                p.role,
                p.experience_level,
                ps.skill_id,
                s.name AS skill_name,
                ps.proficiency
             FROM tp.personnel p
             JOIN tp.personnel_skills ps ON ps.personnel_id = p.id
             JOIN tp.skills s ON ps.skill_id = s.id
             ORDER BY p.id, ps.id",
            &[],
        )
        .await?;

    rows.iter().map(map_roster_row).collect()
}
