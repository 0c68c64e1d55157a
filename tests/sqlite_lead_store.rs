//! Integration tests for the on-disk SQLite lead store.
//!
//! These tests verify that a conversation survives a process restart:
//! the pool is closed and a new one is opened on the same file.

use kaya_concierge::adapters::sqlite::{connect, SqliteLeadRepository};
use kaya_concierge::config::DatabaseConfig;
use kaya_concierge::domain::conversation::ConversationStep;
use kaya_concierge::domain::foundation::LeadStatus;
use kaya_concierge::domain::lead::{Preferences, Purpose, Registration, Transcript, Turn};
use kaya_concierge::ports::LeadRepository;

// =============================================================================
// Test Infrastructure
// =============================================================================

fn database_config(dir: &tempfile::TempDir) -> DatabaseConfig {
    DatabaseConfig {
        url: format!("sqlite://{}", dir.path().join("leads.db").display()),
        max_connections: 2,
        ..Default::default()
    }
}

fn registration(email: &str) -> Registration {
    Registration::new("Khalid", email, "0501231234").unwrap()
}

// =============================================================================
// Tests
// =============================================================================

#[tokio::test]
async fn conversation_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let config = database_config(&dir);

    let transcript = Transcript::from(vec![
        Turn::assistant("Welcome, Khalid to KAYA Real Estate."),
        Turn::user("Penthouse with a view, \"sea\" side"),
        Turn::assistant("Are you looking to Rent or Buy?"),
    ]);
    let mut prefs = Preferences::new();
    prefs.fill_unit("Penthouse with a view, \"sea\" side");

    let id = {
        let pool = connect(&config).await.unwrap();
        let repo = SqliteLeadRepository::new(pool.clone());
        let id = repo.create(&registration("khalid@example.com")).await.unwrap();
        repo.update_conversation(id, &transcript, &prefs, ConversationStep::Purpose)
            .await
            .unwrap();
        repo.update_status(id, LeadStatus::AgentTalking).await.unwrap();
        pool.close().await;
        id
    };

    let pool = connect(&config).await.unwrap();
    let repo = SqliteLeadRepository::new(pool);
    let lead = repo.find_by_id(id).await.unwrap().unwrap();

    assert_eq!(lead.transcript(), &transcript);
    assert_eq!(lead.preferences(), &prefs);
    assert_eq!(lead.step(), ConversationStep::Purpose);
    assert_eq!(lead.status(), LeadStatus::AgentTalking);
    assert_eq!(lead.registration().email(), "khalid@example.com");
}

#[tokio::test]
async fn ids_keep_increasing_across_restart() {
    let dir = tempfile::tempdir().unwrap();
    let config = database_config(&dir);

    let first = {
        let pool = connect(&config).await.unwrap();
        let repo = SqliteLeadRepository::new(pool.clone());
        let id = repo.create(&registration("a@example.com")).await.unwrap();
        repo.delete(id).await.unwrap();
        pool.close().await;
        id
    };

    let repo = SqliteLeadRepository::new(connect(&config).await.unwrap());
    let second = repo.create(&registration("a@example.com")).await.unwrap();
    assert!(second > first);
}

#[tokio::test]
async fn delete_then_list_by_email() {
    let dir = tempfile::tempdir().unwrap();
    let repo = SqliteLeadRepository::new(connect(&database_config(&dir)).await.unwrap());

    let keep = repo.create(&registration("b@example.com")).await.unwrap();
    let gone = repo.create(&registration("b@example.com")).await.unwrap();
    repo.delete(gone).await.unwrap();
    repo.delete(gone).await.unwrap();

    let ids: Vec<_> = repo
        .list_by_email("b@example.com")
        .await
        .unwrap()
        .into_iter()
        .map(|summary| summary.id)
        .collect();
    assert_eq!(ids, vec![keep]);
}

#[tokio::test]
async fn export_order_and_descriptions() {
    let dir = tempfile::tempdir().unwrap();
    let repo = SqliteLeadRepository::new(connect(&database_config(&dir)).await.unwrap());

    let browsing = repo.create(&registration("c@example.com")).await.unwrap();
    let renting = repo.create(&registration("d@example.com")).await.unwrap();
    let mut prefs = Preferences::new();
    prefs.fill_unit("Studio");
    prefs.fill_purpose(Purpose::Rent);
    repo.update_conversation(renting, &Transcript::new(), &prefs, ConversationStep::Budget)
        .await
        .unwrap();

    let leads = repo.list_all().await.unwrap();
    assert_eq!(leads.len(), 2);
    assert_eq!(leads[0].id(), browsing);
    assert_eq!(leads[0].description(), "New Lead / Browsing");
    assert_eq!(
        leads[1].description(),
        "Looking for Studio to Rent in unspecified (Budget: unspecified)"
    );
}
