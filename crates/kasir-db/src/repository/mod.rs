//! # Repository Module
//!
//! Database repository implementations for Kasir POS.
//!
//! ## Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  HTTP handler                                                          │
//! │       │  services.products.get_by_id("1")                              │
//! │       ▼                                                                 │
//! │  ProductRepository / CategoryRepository                                │
//! │  ├── list_all(&self)                                                   │
//! │  ├── get_by_id(&self, id)                                              │
//! │  ├── insert(&self, input)                                              │
//! │  ├── update(&self, id, input)                                          │
//! │  ├── delete_by_id(&self, id)                                           │
//! │  └── count(&self)                                                      │
//! │       │  SQL                                                            │
//! │       ▼                                                                 │
//! │  SQLite                                                                │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Ids are integers in the store and strings everywhere else; every query
//! casts on the way out and binds the string on the way in.
//!
//! ## Available Repositories
//!
//! - [`CategoryRepository`] - Category CRUD
//! - [`ProductRepository`] - Product CRUD with the category joined in

pub mod category;
pub mod product;

pub use category::CategoryRepository;
pub use product::ProductRepository;
