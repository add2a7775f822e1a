use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Candidate {
    pub id: i32,
    pub name: String,
    pub age: i32,
    pub email: String,
    pub phone: String,
    pub skills: String,
    pub experience: i32,
    pub applied_position: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}
