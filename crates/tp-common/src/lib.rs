pub mod api;
pub mod db;
pub mod levels;
pub mod logging;
pub mod matching;

use chrono::NaiveDate;
use serde::Serialize;

use levels::{ExperienceLevel, ProficiencyLevel, ProjectStatus};

// Commonly used data models shared between the storage layer and the
// matching engine.

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Personnel {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: String,
    pub experience_level: ExperienceLevel,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Skill {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Project {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: ProjectStatus,
}

/// A (skill, minimum proficiency) pair attached to a project, joined with
/// the skill name for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillRequirement {
    pub skill_id: i64,
    pub skill_name: String,
    pub min_proficiency: ProficiencyLevel,
}

/// One skill a person holds, as it appears in match reports.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillEntry {
    pub skill_id: i64,
    pub skill_name: String,
    pub proficiency: ProficiencyLevel,
}

/// One row of the flat roster join: person attributes plus a single skill
/// entry. The engine folds these into per-person records.
#[derive(Debug, Clone, PartialEq)]
pub struct PersonnelSkillRow {
    pub personnel_id: i64,
    pub name: String,
    pub email: String,
    pub role: String,
    pub experience_level: ExperienceLevel,
    pub skill_id: i64,
    pub skill_name: String,
    pub proficiency: ProficiencyLevel,
}
