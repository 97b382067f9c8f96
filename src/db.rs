// src/db.rs

use sqlx::{postgres::PgPoolOptions, query, PgPool};
use tracing::info;

/// Conecta ao PostgreSQL usando um pool de conexões.
pub async fn connect(database_url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Cria as tabelas caso ainda não existam.
///
/// Bancos criados com o esquema de preço único ganham as colunas
/// `wholesale_price` e `price_type` sem perder os dados existentes.
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::Error> {
    let statements = [
        r#"
        CREATE TABLE IF NOT EXISTS products (
            id SERIAL PRIMARY KEY,
            name TEXT NOT NULL UNIQUE,
            retail_price NUMERIC NOT NULL CHECK (retail_price >= 0),
            wholesale_price NUMERIC CHECK (wholesale_price >= 0),
            quantity INTEGER NOT NULL CHECK (quantity >= 0)
        )
        "#,
        r#"
        CREATE TABLE IF NOT EXISTS sales (
            id SERIAL PRIMARY KEY,
            product_id INTEGER NOT NULL REFERENCES products(id) ON DELETE RESTRICT,
            quantity INTEGER NOT NULL CHECK (quantity > 0),
            total_price NUMERIC NOT NULL,
            price_type TEXT CHECK (price_type IN ('retail', 'wholesale')),
            date DATE NOT NULL,
            time TIME NOT NULL
        )
        "#,
        "ALTER TABLE products ADD COLUMN IF NOT EXISTS wholesale_price NUMERIC CHECK (wholesale_price >= 0)",
        "ALTER TABLE sales ADD COLUMN IF NOT EXISTS price_type TEXT CHECK (price_type IN ('retail', 'wholesale'))",
        "CREATE INDEX IF NOT EXISTS sales_product_id_idx ON sales (product_id)",
        "CREATE INDEX IF NOT EXISTS sales_date_time_idx ON sales (date DESC, time DESC)",
    ];

    for statement in statements {
        query(statement).execute(pool).await?;
    }

    info!("esquema do banco verificado");

    Ok(())
}
