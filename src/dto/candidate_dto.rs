use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateCandidateRequest {
    #[validate(length(min = 2, message = "name must be at least 2 characters long"))]
    pub name: String,
    #[validate(range(min = 18, message = "age must be at least 18"))]
    pub age: i32,
    #[validate(email(message = "email must be a valid email address"))]
    pub email: String,
    pub phone: Option<String>,
    pub skills: Option<String>,
    pub experience: Option<i32>,
    #[serde(rename = "appliedPosition")]
    pub applied_position: String,
    pub status: Option<String>,
}

/// Creation payload after validation and default-application, ready to insert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCandidate {
    pub name: String,
    pub age: i32,
    pub email: String,
    pub phone: String,
    pub skills: String,
    pub experience: i32,
    pub applied_position: String,
    pub status: String,
}

impl CreateCandidateRequest {
    pub fn normalize(self) -> NewCandidate {
        NewCandidate {
            name: self.name,
            age: self.age,
            email: self.email,
            phone: self.phone.unwrap_or_default(),
            skills: self.skills.unwrap_or_default(),
            experience: self.experience.unwrap_or(0),
            applied_position: self.applied_position,
            status: self.status.unwrap_or_else(|| "Applied".to_string()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateCandidateRequest {
    pub name: String,
    pub status: String,
    pub experience: i32,
}
