use serde::{Deserialize, Serialize};

/// Proficiency ENUM: ["Beginner", "Intermediate", "Advanced", "Expert"].
///
/// Used both for a person's skill level and a project's minimum required
/// level. Comparisons always go through [`ProficiencyLevel::rank`], never
/// through the label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProficiencyLevel {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl ProficiencyLevel {
    pub fn rank(self) -> i32 {
        match self {
            ProficiencyLevel::Beginner => 1,
            ProficiencyLevel::Intermediate => 2,
            ProficiencyLevel::Advanced => 3,
            ProficiencyLevel::Expert => 4,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ProficiencyLevel::Beginner => "Beginner",
            ProficiencyLevel::Intermediate => "Intermediate",
            ProficiencyLevel::Advanced => "Advanced",
            ProficiencyLevel::Expert => "Expert",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Beginner" => Some(ProficiencyLevel::Beginner),
            "Intermediate" => Some(ProficiencyLevel::Intermediate),
            "Advanced" => Some(ProficiencyLevel::Advanced),
            "Expert" => Some(ProficiencyLevel::Expert),
            _ => None,
        }
    }

    /// Whether a person holding `self` meets a requirement of `required`.
    pub fn satisfies(self, required: ProficiencyLevel) -> bool {
        self.rank() >= required.rank()
    }
}

/// Experience ENUM: ["Junior", "Mid-Level", "Senior"]. Only used for
/// tie-break ordering of full matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExperienceLevel {
    Junior,
    #[serde(rename = "Mid-Level")]
    MidLevel,
    Senior,
}

impl ExperienceLevel {
    pub fn rank(self) -> i32 {
        match self {
            ExperienceLevel::Junior => 1,
            ExperienceLevel::MidLevel => 2,
            ExperienceLevel::Senior => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ExperienceLevel::Junior => "Junior",
            ExperienceLevel::MidLevel => "Mid-Level",
            ExperienceLevel::Senior => "Senior",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Junior" => Some(ExperienceLevel::Junior),
            "Mid-Level" => Some(ExperienceLevel::MidLevel),
            "Senior" => Some(ExperienceLevel::Senior),
            _ => None,
        }
    }
}

/// Project status ENUM: ["Planning", "Active", "Completed"].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectStatus {
    Planning,
    Active,
    Completed,
}

impl ProjectStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ProjectStatus::Planning => "Planning",
            ProjectStatus::Active => "Active",
            ProjectStatus::Completed => "Completed",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Planning" => Some(ProjectStatus::Planning),
            "Active" => Some(ProjectStatus::Active),
            "Completed" => Some(ProjectStatus::Completed),
            _ => None,
        }
    }
}
