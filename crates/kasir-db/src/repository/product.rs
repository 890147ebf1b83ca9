//! # Product Repository
//!
//! Database operations for products.
//!
//! ## Category Join
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    How Product Reads Work                               │
//! │                                                                         │
//! │  products p  LEFT JOIN  categories c  ON c.id = p.category_id           │
//! │                                                                         │
//! │  ┌────┬──────────┬─────────────┬──────┬───────────┬──────────────┐     │
//! │  │ id │ name     │ category_id │ c.id │ c.name    │ c.description│     │
//! │  ├────┼──────────┼─────────────┼──────┼───────────┼──────────────┤     │
//! │  │ 1  │ Coffee   │ 2           │ 2    │ Beverage  │ Drinks       │ ──► category: Some
//! │  │ 2  │ Napkins  │ NULL        │ NULL │ NULL      │ NULL         │ ──► category: None
//! │  └────┴──────────┴─────────────┴──────┴───────────┴──────────────┘     │
//! │                                                                         │
//! │  Only a row with all three joined columns present yields a category.   │
//! │  The join runs on every read, so a renamed category shows up at once.  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use kasir_core::{Category, Product, ProductInput};

/// Column list shared by every product read.
const SELECT_PRODUCT: &str = r#"
    SELECT
        CAST(p.id AS TEXT)          AS id,
        p.name                      AS name,
        p.stock                     AS stock,
        p.price                     AS price,
        CAST(p.category_id AS TEXT) AS category_id,
        CAST(c.id AS TEXT)          AS joined_category_id,
        c.name                      AS category_name,
        c.description               AS category_description
    FROM products p
    LEFT JOIN categories c ON c.id = p.category_id
"#;

/// One row of the product ⟕ category join.
#[derive(Debug, sqlx::FromRow)]
struct ProductRow {
    id: String,
    name: String,
    stock: i64,
    price: i64,
    category_id: Option<String>,
    joined_category_id: Option<String>,
    category_name: Option<String>,
    category_description: Option<String>,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        let category = match (
            row.joined_category_id,
            row.category_name,
            row.category_description,
        ) {
            (Some(id), Some(name), Some(description)) => Some(Category {
                id,
                name,
                description,
            }),
            _ => None,
        };

        Product {
            id: row.id,
            name: row.name,
            stock: row.stock,
            price: row.price,
            category_id: row.category_id,
            category,
        }
    }
}

/// Repository for product database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = ProductRepository::new(pool);
///
/// let all = repo.list_all().await?;
/// let product = repo.get_by_id("1").await?;
/// ```
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ProductRepository { pool }
    }

    /// Lists every product with its category joined in, ordered by id.
    pub async fn list_all(&self) -> DbResult<Vec<Product>> {
        let sql = format!("{SELECT_PRODUCT} ORDER BY p.id");

        let rows = sqlx::query_as::<_, ProductRow>(&sql)
            .fetch_all(&self.pool)
            .await?;

        debug!(count = rows.len(), "Listed products");
        Ok(rows.into_iter().map(Product::from).collect())
    }

    /// Gets a product by its id, with its category joined in.
    ///
    /// ## Returns
    /// * `Ok(Product)` - Product found
    /// * `Err(DbError::NotFound)` - No row has this id
    pub async fn get_by_id(&self, id: &str) -> DbResult<Product> {
        let sql = format!("{SELECT_PRODUCT} WHERE p.id = ?1");

        let row = sqlx::query_as::<_, ProductRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.map(Product::from)
            .ok_or_else(|| DbError::not_found("Product", id))
    }

    /// Inserts a new product.
    ///
    /// A missing `category_id` is stored as NULL.
    ///
    /// ## Returns
    /// * `Ok(Product)` - The product as `get_by_id` would return it
    /// * `Err(DbError::ForeignKeyViolation)` - `category_id` names no category
    pub async fn insert(&self, input: &ProductInput) -> DbResult<Product> {
        debug!(name = %input.name, category_id = ?input.category_id, "Inserting product");

        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO products (name, price, stock, category_id)
            VALUES (?1, ?2, ?3, ?4)
            RETURNING id
            "#,
        )
        .bind(&input.name)
        .bind(input.price)
        .bind(input.stock)
        .bind(input.category_id.as_deref())
        .fetch_one(&self.pool)
        .await?;

        self.get_by_id(&id.to_string()).await
    }

    /// Overwrites every column of an existing product.
    ///
    /// ## Returns
    /// * `Ok(Product)` - The product as `get_by_id` would return it
    /// * `Err(DbError::NotFound)` - No row has this id; nothing was changed
    pub async fn update(&self, id: &str, input: &ProductInput) -> DbResult<Product> {
        debug!(id = %id, "Updating product");

        let result = sqlx::query(
            r#"
            UPDATE products SET
                name = ?2,
                price = ?3,
                stock = ?4,
                category_id = ?5
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .bind(&input.name)
        .bind(input.price)
        .bind(input.stock)
        .bind(input.category_id.as_deref())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Product", id));
        }

        self.get_by_id(id).await
    }

    /// Deletes a product.
    pub async fn delete_by_id(&self, id: &str) -> DbResult<()> {
        debug!(id = %id, "Deleting product");

        let result = sqlx::query("DELETE FROM products WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Product", id));
        }

        Ok(())
    }

    /// Counts total products (for diagnostics and seeding).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
