//! # Seed Data Generator
//!
//! Populates the database with the default categories and a few products
//! for development.
//!
//! ## Usage
//! ```bash
//! # Seed the default database
//! cargo run -p kasir-db --bin seed
//!
//! # Specify database URL
//! cargo run -p kasir-db --bin seed -- --db sqlite://./data/kasir.db
//! ```

use std::env;

use kasir_core::{CategoryInput, ProductInput};
use kasir_db::{migrations, Database, DbConfig};

/// Default categories: (name, description)
const CATEGORIES: &[(&str, &str)] = &[
    ("Main Course", "Rice, noodles and other full meals"),
    ("Beverage", "Hot and cold drinks"),
];

/// Products per category index: (name, price, stock)
const PRODUCTS: &[(usize, &str, i64, i64)] = &[
    (0, "Nasi Goreng", 25000, 40),
    (0, "Mie Ayam", 20000, 35),
    (0, "Sate Ayam", 30000, 25),
    (1, "Es Teh Manis", 5000, 100),
    (1, "Kopi Susu", 18000, 60),
    (1, "Jus Alpukat", 15000, 30),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    let mut database_url = String::from("sqlite://kasir.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    database_url = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Kasir POS Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --db <URL>     Database URL (default: sqlite://kasir.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("🌱 Kasir POS Seed Data Generator");
    println!("================================");
    println!("Database: {}", database_url);
    println!();

    let db = Database::new(DbConfig::new(&database_url)).await?;

    let (total, applied) = migrations::migration_status(db.pool()).await?;
    println!("✓ Connected to database");
    println!("✓ Migrations applied ({}/{})", applied, total);

    let existing_categories = db.categories().count().await?;
    let existing_products = db.products().count().await?;
    if existing_categories > 0 || existing_products > 0 {
        println!(
            "⚠ Database already has {} categories and {} products",
            existing_categories, existing_products
        );
        println!("  Skipping seed to avoid duplicates.");
        return Ok(());
    }

    println!();
    println!("Creating categories...");

    let mut category_ids = Vec::with_capacity(CATEGORIES.len());
    for (name, description) in CATEGORIES {
        let category = db
            .categories()
            .insert(&CategoryInput {
                name: name.to_string(),
                description: description.to_string(),
            })
            .await?;
        println!("  [{}] {}", category.id, category.name);
        category_ids.push(category.id);
    }

    println!();
    println!("Creating products...");

    let mut generated = 0;
    for (category_idx, name, price, stock) in PRODUCTS {
        let input = ProductInput {
            name: name.to_string(),
            price: *price,
            stock: *stock,
            category_id: category_ids.get(*category_idx).cloned(),
        };

        match db.products().insert(&input).await {
            Ok(product) => {
                generated += 1;
                println!("  [{}] {} ({})", product.id, product.name, product.price);
            }
            Err(e) => eprintln!("Failed to insert {}: {}", name, e),
        }
    }

    db.close().await;

    println!();
    println!(
        "✓ Seed complete! {} categories, {} products",
        category_ids.len(),
        generated
    );

    Ok(())
}
