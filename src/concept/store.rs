// src/concept/store.rs
// Database operations for concepts and their word collections.
//
// Every public method is parameterized by the owning user, either directly
// (`WHERE user_id = ?`) or through a concept id the caller has already
// resolved with an owner check. There is no unscoped variant.

use anyhow::Result;
use chrono::Utc;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use std::collections::HashMap;

use super::types::{Concept, Word};

pub struct ConceptStore {
    pool: SqlitePool,
}

impl ConceptStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Persist a new concept together with its initial words.
    pub async fn create_concept(
        &self,
        user_id: &str,
        name: &str,
        notes: &str,
        words: &[String],
    ) -> Result<Concept> {
        let now = Utc::now().timestamp();
        let mut tx = self.pool.begin().await?;

        let concept_id = sqlx::query(
            "INSERT INTO concepts (user_id, name, notes, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(user_id)
        .bind(name)
        .bind(notes)
        .bind(now)
        .bind(now)
        .execute(&mut *tx)
        .await?
        .last_insert_rowid();

        let mut saved_words = Vec::with_capacity(words.len());
        for word in words {
            let id = sqlx::query("INSERT INTO words (concept_id, word) VALUES (?, ?)")
                .bind(concept_id)
                .bind(word)
                .execute(&mut *tx)
                .await?
                .last_insert_rowid();
            saved_words.push(Word {
                id,
                concept_id,
                word: word.clone(),
            });
        }

        tx.commit().await?;

        Ok(Concept {
            id: concept_id,
            user_id: user_id.to_string(),
            name: name.to_string(),
            notes: notes.to_string(),
            words: saved_words,
            created_at: now,
            updated_at: now,
        })
    }

    /// All concepts owned by `user_id`, words eagerly attached.
    pub async fn find_all_with_words(&self, user_id: &str) -> Result<Vec<Concept>> {
        let rows = sqlx::query(
            "SELECT id, user_id, name, notes, created_at, updated_at
             FROM concepts WHERE user_id = ? ORDER BY id",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        let mut concepts: Vec<Concept> = rows.iter().map(row_to_concept).collect();
        self.attach_words(user_id, &mut concepts).await?;
        Ok(concepts)
    }

    /// The concept matching both `id` and `user_id`, or `None`. A concept
    /// under a different user is indistinguishable from a missing one.
    pub async fn find_by_id_with_words(&self, id: i64, user_id: &str) -> Result<Option<Concept>> {
        let row = sqlx::query(
            "SELECT id, user_id, name, notes, created_at, updated_at
             FROM concepts WHERE id = ? AND user_id = ?",
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        let Some(row) = row else { return Ok(None) };
        let mut concept = row_to_concept(&row);
        concept.words = self.words_for_concept(concept.id).await?;
        Ok(Some(concept))
    }

    /// Write `name` and `notes` back, bumping `updated_at`. The id, owner,
    /// and word collection are never written through this path.
    pub async fn update_concept(&self, concept: &mut Concept) -> Result<()> {
        concept.updated_at = Utc::now().timestamp();
        sqlx::query(
            "UPDATE concepts SET name = ?, notes = ?, updated_at = ?
             WHERE id = ? AND user_id = ?",
        )
        .bind(&concept.name)
        .bind(&concept.notes)
        .bind(concept.updated_at)
        .bind(concept.id)
        .bind(&concept.user_id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Owner-guarded delete, removing the concept's words with it.
    pub async fn delete_concept(&self, id: i64, user_id: &str) -> Result<bool> {
        // Words are removed in the same transaction: PRAGMA foreign_keys is
        // per-connection in SQLite, so the schema cascade is not relied on.
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            "DELETE FROM words WHERE concept_id IN
             (SELECT id FROM concepts WHERE id = ? AND user_id = ?)",
        )
        .bind(id)
        .bind(user_id)
        .execute(&mut *tx)
        .await?;

        let result = sqlx::query("DELETE FROM concepts WHERE id = ? AND user_id = ?")
            .bind(id)
            .bind(user_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }

    // Word rows. Callers resolve ownership through the owning concept first.

    pub async fn add_word(&self, concept_id: i64, word: &str) -> Result<Word> {
        let id = sqlx::query("INSERT INTO words (concept_id, word) VALUES (?, ?)")
            .bind(concept_id)
            .bind(word)
            .execute(&self.pool)
            .await?
            .last_insert_rowid();

        Ok(Word {
            id,
            concept_id,
            word: word.to_string(),
        })
    }

    pub async fn update_word(&self, word_id: i64, concept_id: i64, word: &str) -> Result<bool> {
        let result = sqlx::query("UPDATE words SET word = ? WHERE id = ? AND concept_id = ?")
            .bind(word)
            .bind(word_id)
            .bind(concept_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn delete_word(&self, word_id: i64, concept_id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM words WHERE id = ? AND concept_id = ?")
            .bind(word_id)
            .bind(concept_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub(crate) async fn words_for_concept(&self, concept_id: i64) -> Result<Vec<Word>> {
        let rows = sqlx::query(
            "SELECT id, concept_id, word FROM words WHERE concept_id = ? ORDER BY id",
        )
        .bind(concept_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(row_to_word).collect())
    }

    /// Attach every word owned by `user_id` to its concept in `concepts`.
    pub(crate) async fn attach_words(
        &self,
        user_id: &str,
        concepts: &mut [Concept],
    ) -> Result<()> {
        if concepts.is_empty() {
            return Ok(());
        }

        let rows = sqlx::query(
            "SELECT w.id, w.concept_id, w.word
             FROM words w
             JOIN concepts c ON c.id = w.concept_id
             WHERE c.user_id = ?
             ORDER BY w.id",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        let by_id: HashMap<i64, usize> = concepts
            .iter()
            .enumerate()
            .map(|(i, c)| (c.id, i))
            .collect();

        for row in &rows {
            let word = row_to_word(row);
            if let Some(&idx) = by_id.get(&word.concept_id) {
                concepts[idx].words.push(word);
            }
        }
        Ok(())
    }
}

pub(crate) fn row_to_concept(row: &SqliteRow) -> Concept {
    Concept {
        id: row.get("id"),
        user_id: row.get("user_id"),
        name: row.get("name"),
        notes: row.get("notes"),
        words: Vec::new(),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}

pub(crate) fn row_to_word(row: &SqliteRow) -> Word {
    Word {
        id: row.get("id"),
        concept_id: row.get("concept_id"),
        word: row.get("word"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn setup_test_db() -> SqlitePool {
        // A single connection so every acquire sees the same in-memory db
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        crate::db::init_schema(&pool).await.unwrap();
        pool
    }

    fn words(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn test_create_and_find_by_id() {
        let pool = setup_test_db().await;
        let store = ConceptStore::new(pool);

        let created = store
            .create_concept("user-a", "Entropy", "thermo", &words(&["heat", "disorder"]))
            .await
            .unwrap();
        assert!(created.id > 0);
        assert_eq!(created.words.len(), 2);

        let fetched = store
            .find_by_id_with_words(created.id, "user-a")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(fetched.name, "Entropy");
        assert_eq!(fetched.user_id, "user-a");
        assert_eq!(fetched.words.len(), 2);
        assert_eq!(fetched.words[0].word, "heat");
    }

    #[tokio::test]
    async fn test_find_by_id_hides_foreign_concepts() {
        let pool = setup_test_db().await;
        let store = ConceptStore::new(pool);

        let created = store
            .create_concept("user-a", "Entropy", "", &[])
            .await
            .unwrap();

        // Another user probing a valid id sees nothing
        let foreign = store
            .find_by_id_with_words(created.id, "user-b")
            .await
            .unwrap();
        assert!(foreign.is_none());
    }

    #[tokio::test]
    async fn test_find_all_is_scoped_per_user() {
        let pool = setup_test_db().await;
        let store = ConceptStore::new(pool);

        store
            .create_concept("user-a", "One", "", &words(&["x"]))
            .await
            .unwrap();
        store
            .create_concept("user-a", "Two", "", &[])
            .await
            .unwrap();
        store
            .create_concept("user-b", "Other", "", &words(&["y"]))
            .await
            .unwrap();

        let a = store.find_all_with_words("user-a").await.unwrap();
        assert_eq!(a.len(), 2);
        assert_eq!(a[0].words.len(), 1);
        assert_eq!(a[1].words.len(), 0);

        let b = store.find_all_with_words("user-b").await.unwrap();
        assert_eq!(b.len(), 1);
        assert_eq!(b[0].name, "Other");

        let nobody = store.find_all_with_words("user-c").await.unwrap();
        assert!(nobody.is_empty());
    }

    #[tokio::test]
    async fn test_update_writes_name_and_notes_only() {
        let pool = setup_test_db().await;
        let store = ConceptStore::new(pool);

        let mut concept = store
            .create_concept("user-a", "Entropy", "thermo", &words(&["heat"]))
            .await
            .unwrap();

        concept.name = "Entropy2".to_string();
        concept.notes = "x".to_string();
        store.update_concept(&mut concept).await.unwrap();

        let fetched = store
            .find_by_id_with_words(concept.id, "user-a")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(fetched.name, "Entropy2");
        assert_eq!(fetched.notes, "x");
        assert_eq!(fetched.words.len(), 1);
        assert!(fetched.updated_at >= fetched.created_at);
    }

    #[tokio::test]
    async fn test_delete_cascades_to_words() {
        let pool = setup_test_db().await;
        let store = ConceptStore::new(pool.clone());

        let concept = store
            .create_concept("user-a", "Entropy", "", &words(&["heat", "disorder"]))
            .await
            .unwrap();

        let deleted = store.delete_concept(concept.id, "user-a").await.unwrap();
        assert!(deleted);

        assert!(store
            .find_by_id_with_words(concept.id, "user-a")
            .await
            .unwrap()
            .is_none());

        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM words")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 0);
    }

    #[tokio::test]
    async fn test_delete_refuses_foreign_owner() {
        let pool = setup_test_db().await;
        let store = ConceptStore::new(pool);

        let concept = store
            .create_concept("user-a", "Entropy", "", &words(&["heat"]))
            .await
            .unwrap();

        let deleted = store.delete_concept(concept.id, "user-b").await.unwrap();
        assert!(!deleted);

        // Still there for the real owner, words intact
        let fetched = store
            .find_by_id_with_words(concept.id, "user-a")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(fetched.words.len(), 1);
    }

    #[tokio::test]
    async fn test_word_row_operations() {
        let pool = setup_test_db().await;
        let store = ConceptStore::new(pool);

        let concept = store
            .create_concept("user-a", "Entropy", "", &[])
            .await
            .unwrap();

        let word = store.add_word(concept.id, "heat").await.unwrap();
        assert!(word.id > 0);

        assert!(store
            .update_word(word.id, concept.id, "warmth")
            .await
            .unwrap());
        let fetched = store.words_for_concept(concept.id).await.unwrap();
        assert_eq!(fetched[0].word, "warmth");

        // Mismatched concept id touches nothing
        assert!(!store
            .update_word(word.id, concept.id + 1, "nope")
            .await
            .unwrap());
        assert!(!store.delete_word(word.id, concept.id + 1).await.unwrap());

        assert!(store.delete_word(word.id, concept.id).await.unwrap());
        assert!(store.words_for_concept(concept.id).await.unwrap().is_empty());
    }
}
