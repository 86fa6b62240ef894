use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use tp_common::api::match_report::{FullMatchReport, PartialMatchReport};
use tp_common::db::{fetch_personnel_with_skills, fetch_project, fetch_requirements};
use tp_common::matching::{group_roster, rank_full_matches, rank_partial_matches};
use tp_common::Project;

use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::SharedState;

const DEFAULT_MIN_MATCH: i64 = 50;

#[derive(Debug, Deserialize, Default)]
pub struct PartialMatchQuery {
    /// Raw threshold string; unparseable values fall back to the default
    /// rather than erroring. An explicit 0 (or negative) is honored.
    pub min_match: Option<String>,
}

impl PartialMatchQuery {
    fn threshold(&self) -> i64 {
        self.min_match
            .as_deref()
            .and_then(|value| value.trim().parse().ok())
            .unwrap_or(DEFAULT_MIN_MATCH)
    }
}

/// Full matching insists the project exists before anything else runs.
fn require_project(project: Option<Project>, project_id: i64) -> Result<Project, ApiError> {
    project.ok_or_else(|| ApiError::NotFound(format!("project not found: {project_id}")))
}

/// People satisfying every requirement of the project, ranked by
/// experience level.
pub async fn full_matches(
    State(state): State<SharedState>,
    Path(project_id): Path<i64>,
    _auth: AuthUser,
) -> Result<Json<FullMatchReport>, ApiError> {
    let project = require_project(fetch_project(&state.pool, project_id).await?, project_id)?;

    let requirements = fetch_requirements(&state.pool, project_id).await?;
    if requirements.is_empty() {
        return Ok(Json(FullMatchReport::no_requirements(&project)));
    }

    let rows = fetch_personnel_with_skills(&state.pool).await?;
    let roster = group_roster(&rows);
    let ranked = rank_full_matches(&requirements, &roster);

    Ok(Json(FullMatchReport::from_ranked(
        &project,
        requirements,
        &ranked,
    )))
}

/// People meeting at least `min_match` percent of the project's
/// requirements, ranked by match percentage. No existence check on the
/// project: an unknown id behaves like a project without requirements.
pub async fn partial_matches(
    State(state): State<SharedState>,
    Path(project_id): Path<i64>,
    Query(query): Query<PartialMatchQuery>,
    _auth: AuthUser,
) -> Result<Json<PartialMatchReport>, ApiError> {
    let min_match = query.threshold();

    let requirements = fetch_requirements(&state.pool, project_id).await?;
    if requirements.is_empty() {
        return Ok(Json(PartialMatchReport::no_requirements(min_match)));
    }

    let rows = fetch_personnel_with_skills(&state.pool).await?;
    let roster = group_roster(&rows);
    let ranked = rank_partial_matches(&requirements, &roster, min_match);

    Ok(Json(PartialMatchReport::from_ranked(min_match, &ranked)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tp_common::levels::ProjectStatus;

    fn query(value: Option<&str>) -> PartialMatchQuery {
        PartialMatchQuery {
            min_match: value.map(str::to_string),
        }
    }

    #[test]
    fn threshold_defaults_to_50_when_absent_or_unparseable() {
        assert_eq!(query(None).threshold(), 50);
        assert_eq!(query(Some("abc")).threshold(), 50);
        assert_eq!(query(Some("")).threshold(), 50);
    }

    #[test]
    fn explicit_zero_and_negatives_are_honored() {
        assert_eq!(query(Some("0")).threshold(), 0);
        assert_eq!(query(Some("-10")).threshold(), -10);
        assert_eq!(query(Some(" 75 ")).threshold(), 75);
    }

    #[test]
    fn unknown_project_is_not_found() {
        let result = require_project(None, 7);

        match result {
            Err(ApiError::NotFound(message)) => {
                assert_eq!(message, "project not found: 7");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn known_project_passes_through() {
        let project = Project {
            id: 7,
            name: "Data Platform".into(),
            description: "Warehouse rebuild".into(),
            start_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2026, 6, 30).unwrap(),
            status: ProjectStatus::Active,
        };

        let resolved = require_project(Some(project.clone()), 7).unwrap();
        assert_eq!(resolved, project);
    }
}
