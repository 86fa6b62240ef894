use chrono::NaiveDate;
use serde::Deserialize;

use crate::levels::{ExperienceLevel, ProficiencyLevel, ProjectStatus};

/// Create/update payload for a person. Level enums are closed; unknown
/// labels are rejected at deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct PersonnelPayload {
    pub name: String,
    pub email: String,
    pub role: String,
    pub experience_level: ExperienceLevel,
}

impl PersonnelPayload {
    pub fn validate(&self) -> Result<(), &'static str> {
        if blank(&self.name) || blank(&self.email) || blank(&self.role) {
            return Err("All fields are required");
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SkillPayload {
    pub name: String,
    pub category: String,
    pub description: String,
}

impl SkillPayload {
    pub fn validate(&self) -> Result<(), &'static str> {
        if blank(&self.name) || blank(&self.category) || blank(&self.description) {
            return Err("All fields are required");
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProjectPayload {
    pub name: String,
    pub description: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: ProjectStatus,
}

impl ProjectPayload {
    pub fn validate(&self) -> Result<(), &'static str> {
        if blank(&self.name) || blank(&self.description) {
            return Err("All fields are required");
        }
        if self.end_date < self.start_date {
            return Err("End date must be after start date");
        }
        Ok(())
    }
}

/// Attach a skill (with proficiency) to a person.
#[derive(Debug, Clone, Deserialize)]
pub struct AssignSkillPayload {
    pub skill_id: i64,
    pub proficiency: ProficiencyLevel,
}

/// Attach a required skill (with minimum proficiency) to a project.
#[derive(Debug, Clone, Deserialize)]
pub struct RequirementPayload {
    pub skill_id: i64,
    pub min_proficiency: ProficiencyLevel,
}

fn blank(value: &str) -> bool {
    value.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_blank_fields() {
        let payload = PersonnelPayload {
            name: "  ".into(),
            email: "a@b.c".into(),
            role: "Engineer".into(),
            experience_level: ExperienceLevel::Junior,
        };
        assert_eq!(payload.validate(), Err("All fields are required"));
    }

    #[test]
    fn rejects_inverted_date_range() {
        let payload = ProjectPayload {
            name: "P".into(),
            description: "D".into(),
            start_date: NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2026, 2, 1).unwrap(),
            status: ProjectStatus::Planning,
        };
        assert_eq!(payload.validate(), Err("End date must be after start date"));
    }

    #[test]
    fn unknown_levels_fail_deserialization() {
        let err = serde_json::from_str::<AssignSkillPayload>(
            r#"{"skill_id": 1, "proficiency": "Wizard"}"#,
        );
        assert!(err.is_err());
    }
}
