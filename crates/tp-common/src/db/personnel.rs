use deadpool_postgres::PoolError;
use thiserror::Error;
use tokio_postgres::error::SqlState;
use tokio_postgres::{Error as PgError, Row};
use tracing::instrument;

use crate::db::PgPool;
use crate::levels::{ExperienceLevel, ProficiencyLevel};
use crate::Personnel;

#[derive(Debug, Error)]
pub enum PersonnelStorageError {
    #[error("failed to get postgres connection: {0}")]
    Pool(#[from] PoolError),
    #[error("postgres error: {0}")]
    Postgres(#[from] PgError),
    #[error("failed to map personnel row: {0}")]
    Mapping(String),
    #[error("personnel or skill does not exist")]
    UnknownReference,
}

fn map_personnel_row(row: &Row) -> Result<Personnel, PersonnelStorageError> {
    let label: String = row.get("experience_level");
    let experience_level = ExperienceLevel::from_label(&label).ok_or_else(|| {
        PersonnelStorageError::Mapping(format!("unknown experience level: {label}"))
    })?;

    Ok(Personnel {
        id: row.get("id"),
        name: row.get("name"),
        email: row.get("email"),
        role: row.get("role"),
        experience_level,
    })
}

#[instrument(skip(pool, name, email, role))]
pub async fn insert_personnel(
    pool: &PgPool,
    name: &str,
    email: &str,
    role: &str,
    experience_level: ExperienceLevel,
) -> Result<i64, PersonnelStorageError> {
    let client = pool.get().await?;
    let level = experience_level.as_str();

    let row = client
        .query_one(
            "INSERT INTO tp.personnel (name, email, role, experience_level)
             VALUES ($1, $2, $3, $4)
             RETURNING id",
            &[&name, &email, &role, &level],
        )
        .await?;

    Ok(row.get(0))
}

#[instrument(skip(pool))]
pub async fn list_personnel(pool: &PgPool) -> Result<Vec<Personnel>, PersonnelStorageError> {
    let client = pool.get().await?;
    let rows = client
        .query(
            "SELECT id, name, email, role, experience_level
             FROM tp.personnel
             ORDER BY id",
            &[],
        )
        .await?;

    rows.iter().map(map_personnel_row).collect()
}

#[instrument(skip(pool))]
pub async fn get_personnel(
    pool: &PgPool,
    personnel_id: i64,
) -> Result<Option<Personnel>, PersonnelStorageError> {
    let client = pool.get().await?;
    let row = client
        .query_opt(
            "SELECT id, name, email, role, experience_level
             FROM tp.personnel
             WHERE id = $1",
            &[&personnel_id],
        )
        .await?;

    row.as_ref().map(map_personnel_row).transpose()
}

#[instrument(skip(pool, name, email, role))]
pub async fn update_personnel(
    pool: &PgPool,
    personnel_id: i64,
    name: &str,
    email: &str,
    role: &str,
    experience_level: ExperienceLevel,
) -> Result<bool, PersonnelStorageError> {
    let client = pool.get().await?;
    let level = experience_level.as_str();

    let affected = client
        .execute(
            "UPDATE tp.personnel
             SET name = $1, email = $2, role = $3, experience_level = $4
             WHERE id = $5",
            &[&name, &email, &role, &level, &personnel_id],
        )
        .await?;

    Ok(affected > 0)
}

#[instrument(skip(pool))]
pub async fn delete_personnel(
    pool: &PgPool,
    personnel_id: i64,
) -> Result<bool, PersonnelStorageError> {
    let client = pool.get().await?;
    let affected = client
        .execute("DELETE FROM tp.personnel WHERE id = $1", &[&personnel_id])
        .await?;

    Ok(affected > 0)
}

/// Attach a skill to a person, replacing the proficiency if the pair
/// already exists. One proficiency record per (person, skill).
#[instrument(skip(pool))]
pub async fn upsert_personnel_skill(
    pool: &PgPool,
    personnel_id: i64,
    skill_id: i64,
    proficiency: ProficiencyLevel,
) -> Result<(), PersonnelStorageError> {
    let client = pool.get().await?;
    let level = proficiency.as_str();

    let result = client
        .execute(
            "INSERT INTO tp.personnel_skills (personnel_id, skill_id, proficiency)
             VALUES ($1, $2, $3)
             ON CONFLICT (personnel_id, skill_id)
             DO UPDATE SET proficiency = EXCLUDED.proficiency",
            &[&personnel_id, &skill_id, &level],
        )
        .await;

    match result {
        Ok(_) => Ok(()),
        Err(err) if err.code() == Some(&SqlState::FOREIGN_KEY_VIOLATION) => {
            Err(PersonnelStorageError::UnknownReference)
        }
        Err(err) => Err(err.into()),
    }
}
