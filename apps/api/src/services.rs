//! Service layer between HTTP handlers and repositories.
//!
//! Each service forwards straight to its repository; results and errors
//! pass through unchanged.

use kasir_core::{Category, CategoryInput, Product, ProductInput};
use kasir_db::{CategoryRepository, Database, DbResult, ProductRepository};

/// Category operations.
#[derive(Debug, Clone)]
pub struct CategoryService {
    repo: CategoryRepository,
}

impl CategoryService {
    pub fn new(repo: CategoryRepository) -> Self {
        CategoryService { repo }
    }

    pub async fn get_all(&self) -> DbResult<Vec<Category>> {
        self.repo.list_all().await
    }

    pub async fn create(&self, input: &CategoryInput) -> DbResult<Category> {
        self.repo.insert(input).await
    }

    pub async fn get_by_id(&self, id: &str) -> DbResult<Category> {
        self.repo.get_by_id(id).await
    }

    pub async fn update(&self, id: &str, input: &CategoryInput) -> DbResult<Category> {
        self.repo.update(id, input).await
    }

    pub async fn delete_by_id(&self, id: &str) -> DbResult<()> {
        self.repo.delete_by_id(id).await
    }
}

/// Product operations.
#[derive(Debug, Clone)]
pub struct ProductService {
    repo: ProductRepository,
}

impl ProductService {
    pub fn new(repo: ProductRepository) -> Self {
        ProductService { repo }
    }

    pub async fn get_all(&self) -> DbResult<Vec<Product>> {
        self.repo.list_all().await
    }

    pub async fn create(&self, input: &ProductInput) -> DbResult<Product> {
        self.repo.insert(input).await
    }

    pub async fn get_by_id(&self, id: &str) -> DbResult<Product> {
        self.repo.get_by_id(id).await
    }

    pub async fn update(&self, id: &str, input: &ProductInput) -> DbResult<Product> {
        self.repo.update(id, input).await
    }

    pub async fn delete_by_id(&self, id: &str) -> DbResult<()> {
        self.repo.delete_by_id(id).await
    }
}

/// Every service the router needs, built from one database handle.
///
/// This is the axum router state; cloning shares the pool.
#[derive(Debug, Clone)]
pub struct Services {
    pub categories: CategoryService,
    pub products: ProductService,
}

impl Services {
    pub fn new(db: &Database) -> Self {
        Services {
            categories: CategoryService::new(db.categories()),
            products: ProductService::new(db.products()),
        }
    }
}
