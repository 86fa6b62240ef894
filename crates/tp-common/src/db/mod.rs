pub mod matching;
pub mod migrations;
pub mod personnel;
pub mod pool;
pub mod projects;
pub mod skills;

// Keep re-exports unique so downstream crates see a single symbol per helper.
pub use matching::{
    fetch_personnel_with_skills, fetch_project, fetch_requirements, MatchFetchError,
};
pub use migrations::{run_migrations, MigrationError};
pub use personnel::{
    delete_personnel, get_personnel, insert_personnel, list_personnel, update_personnel,
    upsert_personnel_skill, PersonnelStorageError,
};
pub use pool::{create_pool_from_url, create_pool_from_url_checked, DbPoolError, PgPool};
pub use projects::{
    delete_project, fetch_project_detail, insert_project, list_projects, remove_requirement,
    update_project, upsert_requirement, ProjectStorageError, RequirementUpsert,
};
pub use skills::{delete_skill, insert_skill, list_skills, update_skill, SkillStorageError};
