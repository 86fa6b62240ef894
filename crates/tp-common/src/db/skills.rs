use deadpool_postgres::PoolError;
use thiserror::Error;
use tokio_postgres::{Error as PgError, Row};
use tracing::instrument;

use crate::db::PgPool;
use crate::Skill;

#[derive(Debug, Error)]
pub enum SkillStorageError {
    #[error("failed to get postgres connection: {0}")]
    Pool(#[from] PoolError),
    #[error("postgres error: {0}")]
    Postgres(#[from] PgError),
}

fn map_skill_row(row: &Row) -> Skill {
    Skill {
        id: row.get("id"),
        name: row.get("name"),
        category: row.get("category"),
        description: row.get("description"),
    }
}

#[instrument(skip(pool, name, category, description))]
pub async fn insert_skill(
    pool: &PgPool,
    name: &str,
    category: &str,
    description: &str,
) -> Result<i64, SkillStorageError> {
    let client = pool.get().await?;
    let row = client
        .query_one(
            "INSERT INTO tp.skills (name, category, description)
             VALUES ($1, $2, $3)
             RETURNING id",
            &[&name, &category, &description],
        )
        .await?;

    Ok(row.get(0))
}

#[instrument(skip(pool))]
pub async fn list_skills(pool: &PgPool) -> Result<Vec<Skill>, SkillStorageError> {
    let client = pool.get().await?;
    let rows = client
        .query(
            "SELECT id, name, category, description FROM tp.skills ORDER BY id",
            &[],
        )
        .await?;

    Ok(rows.iter().map(map_skill_row).collect())
}

#[instrument(skip(pool, name, category, description))]
pub async fn update_skill(
    pool: &PgPool,
    skill_id: i64,
    name: &str,
    category: &str,
    description: &str,
) -> Result<bool, SkillStorageError> {
    let client = pool.get().await?;
    let affected = client
        .execute(
            "UPDATE tp.skills SET name = $1, category = $2, description = $3 WHERE id = $4",
            &[&name, &category, &description, &skill_id],
        )
        .await?;

    Ok(affected > 0)
}

#[instrument(skip(pool))]
pub async fn delete_skill(pool: &PgPool, skill_id: i64) -> Result<bool, SkillStorageError> {
    let client = pool.get().await?;
    let affected = client
        .execute("DELETE FROM tp.skills WHERE id = $1", &[&skill_id])
        .await?;

    Ok(affected > 0)
}
