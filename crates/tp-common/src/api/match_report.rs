use serde::Serialize;

use crate::levels::{ExperienceLevel, ProficiencyLevel, ProjectStatus};
use crate::matching::engine::RankedCandidate;
use crate::{Project, SkillEntry, SkillRequirement};

pub const NO_REQUIREMENTS_MESSAGE: &str = "No skill requirements defined for this project";

/// Project header shown on full-match reports.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectSummary {
    pub id: i64,
    pub name: String,
    pub status: ProjectStatus,
}

impl From<&Project> for ProjectSummary {
    fn from(project: &Project) -> Self {
        Self {
            id: project.id,
            name: project.name.clone(),
            status: project.status,
        }
    }
}

/// Matched requirement as shown in full-match reports: the required level
/// alongside the level the person holds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequirementMatch {
    pub skill_name: String,
    pub required_level: ProficiencyLevel,
    pub person_level: ProficiencyLevel,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FullMatchEntry {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: String,
    pub experience_level: ExperienceLevel,
    pub match_percentage: i64,
    pub matched_skills: Vec<RequirementMatch>,
    /// The person's complete skill list, for display context.
    pub all_skills: Vec<SkillEntry>,
}

impl From<&RankedCandidate> for FullMatchEntry {
    fn from(candidate: &RankedCandidate) -> Self {
        Self {
            id: candidate.member.id,
            name: candidate.member.name.clone(),
            email: candidate.member.email.clone(),
            role: candidate.member.role.clone(),
            experience_level: candidate.member.experience_level,
            match_percentage: candidate.evaluation.match_percentage,
            matched_skills: candidate
                .evaluation
                .matched
                .iter()
                .map(|m| RequirementMatch {
                    skill_name: m.skill_name.clone(),
                    required_level: m.required_level,
                    person_level: m.person_level,
                })
                .collect(),
            all_skills: candidate.member.skills.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FullMatchReport {
    pub message: &'static str,
    pub project: ProjectSummary,
    pub requirements: Vec<SkillRequirement>,
    pub matched_count: usize,
    pub data: Vec<FullMatchEntry>,
    pub success: bool,
}

impl FullMatchReport {
    /// Well-formed empty state for projects with no requirements. Distinct
    /// from "zero qualifying personnel".
    pub fn no_requirements(project: &Project) -> Self {
        Self {
            message: NO_REQUIREMENTS_MESSAGE,
            project: ProjectSummary::from(project),
            requirements: Vec::new(),
            matched_count: 0,
            data: Vec::new(),
            success: true,
        }
    }

    pub fn from_ranked(
        project: &Project,
        requirements: Vec<SkillRequirement>,
        ranked: &[RankedCandidate],
    ) -> Self {
        let data: Vec<FullMatchEntry> = ranked.iter().map(FullMatchEntry::from).collect();
        Self {
            message: if data.is_empty() {
                "No personnel found matching all requirements"
            } else {
                "Matched personnel found"
            },
            project: ProjectSummary::from(project),
            requirements,
            matched_count: data.len(),
            data,
            success: true,
        }
    }
}

/// Matched requirement in partial reports. Deliberately lighter than
/// [`RequirementMatch`]: only the name and the person's level.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PartialMatchedSkill {
    pub skill_name: String,
    pub proficiency: ProficiencyLevel,
}

/// Missing requirement in partial reports: name and required level only,
/// no reason or actual level.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PartialMissingSkill {
    pub skill_name: String,
    pub required_level: ProficiencyLevel,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PartialMatchEntry {
    pub id: i64,
    pub name: String,
    pub role: String,
    pub experience_level: ExperienceLevel,
    pub skills: Vec<SkillEntry>,
    pub match_percentage: i64,
    pub matched_skills: Vec<PartialMatchedSkill>,
    pub missing_skills: Vec<PartialMissingSkill>,
}

impl From<&RankedCandidate> for PartialMatchEntry {
    fn from(candidate: &RankedCandidate) -> Self {
        Self {
            id: candidate.member.id,
            name: candidate.member.name.clone(),
            role: candidate.member.role.clone(),
            experience_level: candidate.member.experience_level,
            skills: candidate.member.skills.clone(),
            match_percentage: candidate.evaluation.match_percentage,
            matched_skills: candidate
                .evaluation
                .matched
                .iter()
                .map(|m| PartialMatchedSkill {
                    skill_name: m.skill_name.clone(),
                    proficiency: m.person_level,
                })
                .collect(),
            missing_skills: candidate
                .evaluation
                .missing
                .iter()
                .map(|m| PartialMissingSkill {
                    skill_name: m.skill_name.clone(),
                    required_level: m.required_level,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PartialMatchReport {
    pub message: &'static str,
    pub min_match_percentage: i64,
    pub matched_count: usize,
    pub data: Vec<PartialMatchEntry>,
    pub success: bool,
}

impl PartialMatchReport {
    pub fn no_requirements(min_match_percentage: i64) -> Self {
        Self {
            message: NO_REQUIREMENTS_MESSAGE,
            min_match_percentage,
            matched_count: 0,
            data: Vec::new(),
            success: true,
        }
    }

    pub fn from_ranked(min_match_percentage: i64, ranked: &[RankedCandidate]) -> Self {
        let data: Vec<PartialMatchEntry> = ranked.iter().map(PartialMatchEntry::from).collect();
        Self {
            message: "Partial matches found",
            min_match_percentage,
            matched_count: data.len(),
            data,
            success: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::levels::{ExperienceLevel as Exp, ProficiencyLevel as Prof};
    use crate::matching::engine::{group_roster, rank_full_matches, rank_partial_matches};
    use crate::PersonnelSkillRow;
    use chrono::NaiveDate;

    fn project() -> Project {
        Project {
            id: 42,
            name: "Data Platform".into(),
            description: "Warehouse rebuild".into(),
            start_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2026, 6, 30).unwrap(),
            status: ProjectStatus::Active,
        }
    }

    fn requirements() -> Vec<SkillRequirement> {
        vec![
            SkillRequirement {
                skill_id: 10,
                skill_name: "SQL".into(),
                min_proficiency: Prof::Advanced,
            },
            SkillRequirement {
                skill_id: 11,
                skill_name: "Python".into(),
                min_proficiency: Prof::Intermediate,
            },
        ]
    }

    fn rows() -> Vec<PersonnelSkillRow> {
        vec![
            PersonnelSkillRow {
                personnel_id: 1,
                name: "Alice".into(),
                email: "alice@example.com".into(),
                role: "Engineer".into(),
                experience_level: Exp::Senior,
                skill_id: 10,
                skill_name: "SQL".into(),
                proficiency: Prof::Expert,
            },
            PersonnelSkillRow {
                personnel_id: 1,
                name: "Alice".into(),
                email: "alice@example.com".into(),
                role: "Engineer".into(),
                experience_level: Exp::Senior,
                skill_id: 11,
                skill_name: "Python".into(),
                proficiency: Prof::Advanced,
            },
            PersonnelSkillRow {
                personnel_id: 2,
                name: "Bob".into(),
                email: "bob@example.com".into(),
                role: "Analyst".into(),
                experience_level: Exp::Junior,
                skill_id: 11,
                skill_name: "Python".into(),
                proficiency: Prof::Intermediate,
            },
        ]
    }

    #[test]
    fn full_report_shape() {
        let reqs = requirements();
        let roster = group_roster(&rows());
        let ranked = rank_full_matches(&reqs, &roster);
        let report = FullMatchReport::from_ranked(&project(), reqs, &ranked);

        assert!(report.success);
        assert_eq!(report.message, "Matched personnel found");
        assert_eq!(report.matched_count, 1);
        assert_eq!(report.project.id, 42);

        let json = serde_json::to_value(&report).unwrap();
        let entry = &json["data"][0];
        assert_eq!(entry["match_percentage"], 100);
        assert_eq!(entry["experience_level"], "Senior");
        assert_eq!(entry["matched_skills"][0]["required_level"], "Advanced");
        assert_eq!(entry["matched_skills"][0]["person_level"], "Expert");
        assert_eq!(entry["all_skills"].as_array().unwrap().len(), 2);
        // Full-match entries never expose missing_skills.
        assert!(entry.get("missing_skills").is_none());
    }

    #[test]
    fn no_requirements_report_is_success_with_empty_data() {
        let report = FullMatchReport::no_requirements(&project());
        assert!(report.success);
        assert_eq!(report.message, NO_REQUIREMENTS_MESSAGE);
        assert!(report.data.is_empty());
        assert!(report.requirements.is_empty());
        assert_eq!(report.matched_count, 0);
    }

    #[test]
    fn partial_report_uses_terser_skill_shapes() {
        let reqs = requirements();
        let roster = group_roster(&rows());
        let ranked = rank_partial_matches(&reqs, &roster, 50);
        let report = PartialMatchReport::from_ranked(50, &ranked);

        assert_eq!(report.min_match_percentage, 50);
        assert_eq!(report.matched_count, 2);

        let json = serde_json::to_value(&report).unwrap();
        let bob = &json["data"][1];
        assert_eq!(bob["match_percentage"], 50);
        assert_eq!(bob["matched_skills"][0]["proficiency"], "Intermediate");
        assert!(bob["matched_skills"][0].get("required_level").is_none());
        assert_eq!(bob["missing_skills"][0]["skill_name"], "SQL");
        assert!(bob["missing_skills"][0].get("reason").is_none());
    }
}
