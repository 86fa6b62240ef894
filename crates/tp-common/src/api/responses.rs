use serde::Serialize;

use crate::levels::ProficiencyLevel;
use crate::Project;

/// Plain success envelope for writes without a payload.
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
    pub success: bool,
}

impl MessageResponse {
    pub fn ok(message: &'static str) -> Self {
        Self {
            message,
            success: true,
        }
    }
}

/// Success envelope carrying the id of a newly created row.
#[derive(Debug, Clone, Serialize)]
pub struct CreatedResponse {
    pub message: &'static str,
    pub id: i64,
    pub success: bool,
}

impl CreatedResponse {
    pub fn new(message: &'static str, id: i64) -> Self {
        Self {
            message,
            id,
            success: true,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ListResponse<T> {
    pub message: &'static str,
    pub count: usize,
    pub data: Vec<T>,
    pub success: bool,
}

impl<T> ListResponse<T> {
    pub fn new(message: &'static str, data: Vec<T>) -> Self {
        Self {
            message,
            count: data.len(),
            data,
            success: true,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DetailResponse<T> {
    pub message: &'static str,
    pub data: T,
    pub success: bool,
}

impl<T> DetailResponse<T> {
    pub fn new(message: &'static str, data: T) -> Self {
        Self {
            message,
            data,
            success: true,
        }
    }
}

/// A project's requirement as shown on the project detail view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequiredSkill {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub min_proficiency: ProficiencyLevel,
}

/// Project row plus its requirement list.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectDetail {
    #[serde(flatten)]
    pub project: Project,
    pub required_skills: Vec<RequiredSkill>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_envelope_counts_data() {
        let response = ListResponse::new("Skills retrieved successfully", vec![1u8, 2, 3]);
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["count"], 3);
        assert_eq!(json["success"], true);
    }
}
