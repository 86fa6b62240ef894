use deadpool_postgres::PoolError;
use thiserror::Error;
use tokio_postgres::Error as PgError;
use tracing::{info, instrument};

use crate::db::PgPool;

#[derive(Debug, Error)]
pub enum MigrationError {
    #[error("failed to get postgres connection: {0}")]
    Pool(#[from] PoolError),
    #[error("failed to run migration: {0}")]
    Postgres(#[from] PgError),
}

struct Migration {
    id: i32,
    description: &'static str,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[Migration {
    id: 1,
    description: "skills / personnel / projects tables with level checks",
    sql: r#"
CREATE TABLE IF NOT EXISTS tp.skills (
    id BIGSERIAL PRIMARY KEY,
    name TEXT NOT NULL,
    category TEXT NOT NULL,
    description TEXT NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
);

CREATE TABLE IF NOT EXISTS tp.personnel (
    id BIGSERIAL PRIMARY KEY,
    name TEXT NOT NULL,
    email TEXT NOT NULL,
    role TEXT NOT NULL,
    experience_level TEXT NOT NULL
        CHECK (experience_level IN ('Junior', 'Mid-Level', 'Senior')),
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
);

CREATE TABLE IF NOT EXISTS tp.personnel_skills (
    id BIGSERIAL PRIMARY KEY,
    personnel_id BIGINT NOT NULL REFERENCES tp.personnel(id) ON DELETE CASCADE,
    skill_id BIGINT NOT NULL REFERENCES tp.skills(id) ON DELETE CASCADE,
    proficiency TEXT NOT NULL
        CHECK (proficiency IN ('Beginner', 'Intermediate', 'Advanced', 'Expert')),
    UNIQUE (personnel_id, skill_id)
);

CREATE TABLE IF NOT EXISTS tp.projects (
    id BIGSERIAL PRIMARY KEY,
    name TEXT NOT NULL,
    description TEXT NOT NULL,
    start_date DATE NOT NULL,
    end_date DATE NOT NULL,
    status TEXT NOT NULL
        CHECK (status IN ('Planning', 'Active', 'Completed')),
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
);

CREATE TABLE IF NOT EXISTS tp.project_skills (
    id BIGSERIAL PRIMARY KEY,
    project_id BIGINT NOT NULL REFERENCES tp.projects(id) ON DELETE CASCADE,
    skill_id BIGINT NOT NULL REFERENCES tp.skills(id) ON DELETE CASCADE,
    min_proficiency TEXT NOT NULL
        CHECK (min_proficiency IN ('Beginner', 'Intermediate', 'Advanced', 'Expert')),
    UNIQUE (project_id, skill_id)
);

CREATE INDEX IF NOT EXISTS idx_project_skills_project
    ON tp.project_skills(project_id, skill_id);
"#,
}];

#[instrument(skip(pool))]
pub async fn run_migrations(pool: &PgPool) -> Result<(), MigrationError> {
    let mut client = pool.get().await?;
    client
        .batch_execute(
            "CREATE SCHEMA IF NOT EXISTS tp;
             CREATE TABLE IF NOT EXISTS tp.schema_migrations (
                id INTEGER PRIMARY KEY,
                description TEXT NOT NULL,
                applied_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
             );",
        )
        .await?;

    for migration in MIGRATIONS {
        let already_applied: bool = client
            .query_one(
                "SELECT EXISTS (SELECT 1 FROM tp.schema_migrations WHERE id = $1)",
                &[&migration.id],
            )
            .await?
            .get(0);

        if already_applied {
            continue;
        }

        let tx = client.transaction().await?;
        tx.batch_execute(migration.sql).await?;
        tx.execute(
            "INSERT INTO tp.schema_migrations (id, description) VALUES ($1, $2)",
            &[&migration.id, &migration.description],
        )
        .await?;
        tx.commit().await?;

        info!(
            id = migration.id,
            description = migration.description,
            "applied migration"
        );
    }

    Ok(())
}
