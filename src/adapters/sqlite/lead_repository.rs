//! SQLite implementation of LeadRepository.
//!
//! Transcript and preferences are stored as JSON text, the timestamp as
//! RFC 3339 text and the status as its operator label. Runtime-checked
//! `sqlx::query` is used so no database is needed at compile time.

use async_trait::async_trait;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use crate::domain::conversation::ConversationStep;
use crate::domain::foundation::{DomainError, LeadId, LeadStatus, Timestamp};
use crate::domain::lead::{lead_not_found, Lead, Preferences, Registration, Transcript};
use crate::ports::{LeadRepository, LeadSummary};

const LEAD_COLUMNS: &str = "id, name, email, mobile, messages, lead_data, status, step, timestamp";

/// SQLite implementation of LeadRepository.
#[derive(Clone, Debug)]
pub struct SqliteLeadRepository {
    pool: SqlitePool,
}

impl SqliteLeadRepository {
    /// Creates a new SqliteLeadRepository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LeadRepository for SqliteLeadRepository {
    async fn create(&self, registration: &Registration) -> Result<LeadId, DomainError> {
        let result = sqlx::query(
            "INSERT INTO leads (name, email, mobile, messages, lead_data, status, step, timestamp) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        )
        .bind(registration.name())
        .bind(registration.email())
        .bind(registration.mobile())
        .bind(to_json(&Transcript::new())?)
        .bind(to_json(&Preferences::new())?)
        .bind(LeadStatus::Pending.label())
        .bind(ConversationStep::Greeting.as_str())
        .bind(Timestamp::now().to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to insert lead: {}", e)))?;

        Ok(LeadId::new(result.last_insert_rowid()))
    }

    async fn update_conversation(
        &self,
        id: LeadId,
        transcript: &Transcript,
        preferences: &Preferences,
        step: ConversationStep,
    ) -> Result<(), DomainError> {
        let result = sqlx::query(
            "UPDATE leads SET messages = ?1, lead_data = ?2, step = ?3 WHERE id = ?4",
        )
        .bind(to_json(transcript)?)
        .bind(to_json(preferences)?)
        .bind(step.as_str())
        .bind(id.as_i64())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to update conversation: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(lead_not_found(id));
        }

        Ok(())
    }

    async fn update_status(&self, id: LeadId, status: LeadStatus) -> Result<(), DomainError> {
        let result = sqlx::query("UPDATE leads SET status = ?1 WHERE id = ?2")
            .bind(status.label())
            .bind(id.as_i64())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to update status: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(lead_not_found(id));
        }

        Ok(())
    }

    async fn delete(&self, id: LeadId) -> Result<(), DomainError> {
        sqlx::query("DELETE FROM leads WHERE id = ?1")
            .bind(id.as_i64())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to delete lead: {}", e)))?;

        Ok(())
    }

    async fn find_by_id(&self, id: LeadId) -> Result<Option<Lead>, DomainError> {
        let row = sqlx::query(&format!("SELECT {} FROM leads WHERE id = ?1", LEAD_COLUMNS))
            .bind(id.as_i64())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to fetch lead: {}", e)))?;

        row.map(row_to_lead).transpose()
    }

    async fn list_by_email(&self, email: &str) -> Result<Vec<LeadSummary>, DomainError> {
        let rows = sqlx::query(
            "SELECT id, timestamp, status FROM leads WHERE email = ?1 ORDER BY id DESC",
        )
        .bind(email)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to list leads by email: {}", e)))?;

        rows.into_iter()
            .map(|row| -> Result<LeadSummary, DomainError> {
                Ok(LeadSummary {
                    id: LeadId::new(get(&row, "id")?),
                    timestamp: parse_timestamp(&get::<String>(&row, "timestamp")?)?,
                    status: parse_status(&get::<String>(&row, "status")?)?,
                })
            })
            .collect()
    }

    async fn list_all(&self) -> Result<Vec<Lead>, DomainError> {
        let rows = sqlx::query(&format!("SELECT {} FROM leads ORDER BY id ASC", LEAD_COLUMNS))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to list leads: {}", e)))?;

        rows.into_iter().map(row_to_lead).collect()
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helper functions
// ════════════════════════════════════════════════════════════════════════════

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, DomainError> {
    serde_json::to_string(value)
        .map_err(|e| DomainError::database(format!("Failed to encode column: {}", e)))
}

fn get<'r, T>(row: &'r SqliteRow, column: &str) -> Result<T, DomainError>
where
    T: sqlx::Decode<'r, sqlx::Sqlite> + sqlx::Type<sqlx::Sqlite>,
{
    row.try_get(column)
        .map_err(|e| DomainError::database(format!("Failed to get {}: {}", column, e)))
}

fn parse_timestamp(s: &str) -> Result<Timestamp, DomainError> {
    Timestamp::parse_rfc3339(s)
        .map_err(|e| DomainError::database(format!("Invalid timestamp '{}': {}", s, e)))
}

fn parse_status(s: &str) -> Result<LeadStatus, DomainError> {
    s.parse()
        .map_err(|e| DomainError::database(format!("Invalid lead status: {}", e)))
}

fn row_to_lead(row: SqliteRow) -> Result<Lead, DomainError> {
    let messages: String = get(&row, "messages")?;
    let transcript: Transcript = serde_json::from_str(&messages)
        .map_err(|e| DomainError::database(format!("Invalid messages column: {}", e)))?;

    let lead_data: String = get(&row, "lead_data")?;
    let preferences: Preferences = serde_json::from_str(&lead_data)
        .map_err(|e| DomainError::database(format!("Invalid lead_data column: {}", e)))?;

    let step: String = get(&row, "step")?;
    let step: ConversationStep = step
        .parse()
        .map_err(|e| DomainError::database(format!("Invalid step column: {}", e)))?;

    Ok(Lead::reconstitute(
        LeadId::new(get(&row, "id")?),
        Registration::reconstitute(get(&row, "name")?, get(&row, "email")?, get(&row, "mobile")?),
        transcript,
        preferences,
        step,
        parse_status(&get::<String>(&row, "status")?)?,
        parse_timestamp(&get::<String>(&row, "timestamp")?)?,
    ))
}
