use crate::dto::candidate_dto::{NewCandidate, UpdateCandidateRequest};
use crate::error::Result;
use crate::models::candidate::Candidate;
use sqlx::PgPool;

#[derive(Clone)]
pub struct CandidateService {
    pool: PgPool,
}

impl CandidateService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_candidates(&self) -> Result<Vec<Candidate>> {
        let candidates = sqlx::query_as::<_, Candidate>(
            r#"
            SELECT id, name, age, email, phone, skills, experience, applied_position, status, created_at
            FROM candidates
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(candidates)
    }

    pub async fn create_candidate(&self, new: NewCandidate) -> Result<Candidate> {
        let candidate = sqlx::query_as::<_, Candidate>(
            r#"
            INSERT INTO candidates (name, age, email, phone, skills, experience, applied_position, status)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, name, age, email, phone, skills, experience, applied_position, status, created_at
            "#,
        )
        .bind(new.name)
        .bind(new.age)
        .bind(new.email)
        .bind(new.phone)
        .bind(new.skills)
        .bind(new.experience)
        .bind(new.applied_position)
        .bind(new.status)
        .fetch_one(&self.pool)
        .await?;
        Ok(candidate)
    }

    pub async fn update_candidate(
        &self,
        id: i32,
        update: UpdateCandidateRequest,
    ) -> Result<Option<Candidate>> {
        let candidate = sqlx::query_as::<_, Candidate>(
            r#"
            UPDATE candidates
            SET name = $1, status = $2, experience = $3
            WHERE id = $4
            RETURNING id, name, age, email, phone, skills, experience, applied_position, status, created_at
            "#,
        )
        .bind(update.name)
        .bind(update.status)
        .bind(update.experience)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(candidate)
    }

    pub async fn delete_candidate(&self, id: i32) -> Result<()> {
        sqlx::query("DELETE FROM candidates WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
