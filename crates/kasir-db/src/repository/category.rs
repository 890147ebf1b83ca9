//! # Category Repository
//!
//! Database operations for categories.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use kasir_core::{Category, CategoryInput};

/// Repository for category database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = CategoryRepository::new(pool);
///
/// let created = repo.insert(&CategoryInput { name: "Beverage".into(), ..Default::default() }).await?;
/// let fetched = repo.get_by_id(&created.id).await?;
/// ```
#[derive(Debug, Clone)]
pub struct CategoryRepository {
    pool: SqlitePool,
}

impl CategoryRepository {
    /// Creates a new CategoryRepository.
    pub fn new(pool: SqlitePool) -> Self {
        CategoryRepository { pool }
    }

    /// Lists every category, ordered by id.
    ///
    /// Returns an empty vector when the table is empty.
    pub async fn list_all(&self) -> DbResult<Vec<Category>> {
        let categories = sqlx::query_as::<_, Category>(
            r#"
            SELECT
                CAST(id AS TEXT) AS id,
                name,
                description
            FROM categories
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(count = categories.len(), "Listed categories");
        Ok(categories)
    }

    /// Inserts a new category.
    ///
    /// ## Returns
    /// * `Ok(Category)` - The category with its store-generated id
    pub async fn insert(&self, input: &CategoryInput) -> DbResult<Category> {
        debug!(name = %input.name, "Inserting category");

        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO categories (name, description)
            VALUES (?1, ?2)
            RETURNING id
            "#,
        )
        .bind(&input.name)
        .bind(&input.description)
        .fetch_one(&self.pool)
        .await?;

        Ok(Category::from_input(id.to_string(), input.clone()))
    }

    /// Gets a category by its id.
    ///
    /// ## Returns
    /// * `Ok(Category)` - Category found
    /// * `Err(DbError::NotFound)` - No row has this id
    pub async fn get_by_id(&self, id: &str) -> DbResult<Category> {
        let category = sqlx::query_as::<_, Category>(
            r#"
            SELECT
                CAST(id AS TEXT) AS id,
                name,
                description
            FROM categories
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        category.ok_or_else(|| DbError::not_found("Category", id))
    }

    /// Overwrites every column of an existing category.
    ///
    /// ## Returns
    /// * `Ok(Category)` - The category as written, carrying `id`
    /// * `Err(DbError::NotFound)` - No row has this id; nothing was changed
    pub async fn update(&self, id: &str, input: &CategoryInput) -> DbResult<Category> {
        debug!(id = %id, "Updating category");

        let result = sqlx::query(
            r#"
            UPDATE categories SET
                name = ?2,
                description = ?3
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .bind(&input.name)
        .bind(&input.description)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Category", id));
        }

        Ok(Category::from_input(id, input.clone()))
    }

    /// Deletes a category.
    ///
    /// Products that referenced it keep existing with no category.
    pub async fn delete_by_id(&self, id: &str) -> DbResult<()> {
        debug!(id = %id, "Deleting category");

        let result = sqlx::query("DELETE FROM categories WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Category", id));
        }

        Ok(())
    }

    /// Counts total categories (for diagnostics and seeding).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM categories")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Database, DbConfig};

    use super::*;

    async fn repo() -> CategoryRepository {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        db.categories()
    }

    fn input(name: &str, description: &str) -> CategoryInput {
        CategoryInput {
            name: name.to_string(),
            description: description.to_string(),
        }
    }

    #[tokio::test]
    async fn test_list_empty_returns_empty_vec() {
        let repo = repo().await;

        let categories = repo.list_all().await.unwrap();
        assert!(categories.is_empty());
    }

    #[tokio::test]
    async fn test_insert_assigns_distinct_ids() {
        let repo = repo().await;

        let food = repo.insert(&input("Main Course", "Meals")).await.unwrap();
        let drink = repo.insert(&input("Beverage", "Drinks")).await.unwrap();

        assert!(!food.id.is_empty());
        assert_ne!(food.id, drink.id);
        assert_eq!(repo.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_get_by_id_returns_created_record() {
        let repo = repo().await;
        let created = repo.insert(&input("Beverage", "Drinks")).await.unwrap();

        let fetched = repo.get_by_id(&created.id).await.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_get_missing_is_not_found() {
        let repo = repo().await;

        let err = repo.get_by_id("999").await.unwrap_err();
        assert_eq!(err.to_string(), "Category not found: 999");
    }

    #[tokio::test]
    async fn test_non_numeric_id_is_not_found() {
        let repo = repo().await;
        repo.insert(&input("Beverage", "Drinks")).await.unwrap();

        let err = repo.get_by_id("abc").await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_update_overwrites_all_columns() {
        let repo = repo().await;
        let created = repo.insert(&input("Desert", "typo")).await.unwrap();

        let updated = repo
            .update(&created.id, &input("Dessert", "Sweets"))
            .await
            .unwrap();
        assert_eq!(updated.id, created.id);

        let fetched = repo.get_by_id(&created.id).await.unwrap();
        assert_eq!(fetched.name, "Dessert");
        assert_eq!(fetched.description, "Sweets");
    }

    #[tokio::test]
    async fn test_update_missing_changes_nothing() {
        let repo = repo().await;
        let existing = repo.insert(&input("Beverage", "Drinks")).await.unwrap();

        let err = repo.update("999", &input("Ghost", "")).await.unwrap_err();
        assert!(err.is_not_found());

        let all = repo.list_all().await.unwrap();
        assert_eq!(all, vec![existing]);
    }

    #[tokio::test]
    async fn test_delete_then_get_is_not_found() {
        let repo = repo().await;
        let created = repo.insert(&input("Beverage", "Drinks")).await.unwrap();

        repo.delete_by_id(&created.id).await.unwrap();

        assert!(repo.get_by_id(&created.id).await.unwrap_err().is_not_found());
        assert!(repo.delete_by_id(&created.id).await.unwrap_err().is_not_found());
    }
}
