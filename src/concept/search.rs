// src/concept/search.rs
// Keyword search across concept names, notes, and attached words.

use anyhow::Result;
use sqlx::SqlitePool;
use std::collections::HashSet;

use super::store::{ConceptStore, row_to_concept};
use super::types::Concept;

/// Keyword engine over the concept/word join, scoped to one user.
///
/// Matching is case-sensitive substring containment. SQLite's `LIKE` folds
/// ASCII case, so `instr` is used instead. The join yields one row per
/// matching word, so results are collapsed on concept id before the full
/// word sets are reattached.
pub struct ConceptSearch {
    pool: SqlitePool,
    store: ConceptStore,
}

impl ConceptSearch {
    pub fn new(pool: SqlitePool) -> Self {
        let store = ConceptStore::new(pool.clone());
        Self { pool, store }
    }

    /// Concepts owned by `user_id` whose name, notes, or any attached word
    /// contains `keyword`. Empty keyword handling is the caller's concern.
    pub async fn search_by_keyword(&self, user_id: &str, keyword: &str) -> Result<Vec<Concept>> {
        let rows = sqlx::query(
            "SELECT c.id, c.user_id, c.name, c.notes, c.created_at, c.updated_at
             FROM concepts c
             LEFT JOIN words w ON w.concept_id = c.id
             WHERE c.user_id = ?
               AND (instr(c.name, ?) > 0 OR instr(c.notes, ?) > 0 OR instr(w.word, ?) > 0)
             ORDER BY c.id",
        )
        .bind(user_id)
        .bind(keyword)
        .bind(keyword)
        .bind(keyword)
        .fetch_all(&self.pool)
        .await?;

        // One row per matching word: collapse on concept id, first-seen order
        let mut seen = HashSet::new();
        let mut concepts = Vec::new();
        for row in &rows {
            let concept = row_to_concept(row);
            if seen.insert(concept.id) {
                concepts.push(concept);
            }
        }

        // A match on any field surfaces the whole concept with all its words,
        // not just the ones that matched
        self.store.attach_words(user_id, &mut concepts).await?;
        Ok(concepts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn setup() -> (ConceptStore, ConceptSearch) {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        crate::db::init_schema(&pool).await.unwrap();
        (ConceptStore::new(pool.clone()), ConceptSearch::new(pool))
    }

    fn words(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn test_match_on_each_field() {
        let (store, search) = setup().await;

        store
            .create_concept("user-a", "Entropy", "thermo", &words(&["heat"]))
            .await
            .unwrap();

        for keyword in ["Entro", "thermo", "eat"] {
            let results = search.search_by_keyword("user-a", keyword).await.unwrap();
            assert_eq!(results.len(), 1, "keyword {keyword:?} should match");
        }

        let results = search.search_by_keyword("user-a", "xyz").await.unwrap();
        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn test_fanout_dedup_keeps_full_word_set() {
        let (store, search) = setup().await;

        // Three words all matching the keyword: the join fans out to three
        // rows, the result must contain the concept exactly once
        store
            .create_concept(
                "user-a",
                "Entropy",
                "",
                &words(&["disorder", "disordered", "no-disorder"]),
            )
            .await
            .unwrap();

        let results = search.search_by_keyword("user-a", "disorder").await.unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].words.len(), 3);
    }

    #[tokio::test]
    async fn test_single_word_match_surfaces_all_words() {
        let (store, search) = setup().await;

        store
            .create_concept("user-a", "Entropy", "thermo", &words(&["heat", "disorder"]))
            .await
            .unwrap();

        let results = search.search_by_keyword("user-a", "disorder").await.unwrap();
        assert_eq!(results.len(), 1);

        let attached: Vec<&str> = results[0].words.iter().map(|w| w.word.as_str()).collect();
        assert_eq!(attached, vec!["heat", "disorder"]);
    }

    #[tokio::test]
    async fn test_matching_is_case_sensitive() {
        let (store, search) = setup().await;

        store
            .create_concept("user-a", "Entropy", "", &[])
            .await
            .unwrap();

        assert_eq!(
            search.search_by_keyword("user-a", "Entropy").await.unwrap().len(),
            1
        );
        assert!(search
            .search_by_keyword("user-a", "entropy")
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn test_search_is_user_scoped() {
        let (store, search) = setup().await;

        store
            .create_concept("user-a", "Entropy", "thermo", &words(&["heat", "disorder"]))
            .await
            .unwrap();

        // User B has no concepts; A's matching data must not leak
        let results = search.search_by_keyword("user-b", "disorder").await.unwrap();
        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn test_concept_without_words_still_matches_on_notes() {
        let (store, search) = setup().await;

        store
            .create_concept("user-a", "Bare", "standalone note", &[])
            .await
            .unwrap();

        let results = search.search_by_keyword("user-a", "standalone").await.unwrap();
        assert_eq!(results.len(), 1);
        assert!(results[0].words.is_empty());
    }
}
