// src/store/postgres.rs

use async_trait::async_trait;
use sqlx::{query, query_as, query_scalar, PgPool};
use tracing::{debug, warn};

use crate::error::AppError;
use crate::products::products_structs::{NewProduct, Product};
use crate::sales::sale_pricing::price_sale;
use crate::sales::sales_structs::{NewSale, Sale, SaleListing};

use super::InventoryStore;

const PRODUCT_COLUMNS: &str = "id, name, retail_price, wholesale_price, quantity";

/// Armazenamento sobre o pool de conexões do PostgreSQL.
#[derive(Debug, Clone)]
pub struct PgInventoryStore {
    pool: PgPool,
}

impl PgInventoryStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl InventoryStore for PgInventoryStore {
    async fn ping(&self) -> Result<(), AppError> {
        query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn list_products(&self) -> Result<Vec<Product>, AppError> {
        let products = query_as::<_, Product>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(products)
    }

    async fn get_product(&self, id: i32) -> Result<Product, AppError> {
        query_as::<_, Product>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(AppError::ProductNotFound(id))
    }

    async fn create_product(&self, product: NewProduct) -> Result<Product, AppError> {
        let created = query_as::<_, Product>(&format!(
            "INSERT INTO products (name, retail_price, wholesale_price, quantity) \
             VALUES ($1, $2, $3, $4) RETURNING {PRODUCT_COLUMNS}"
        ))
        .bind(&product.name)
        .bind(&product.retail_price)
        .bind(&product.wholesale_price)
        .bind(product.quantity)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn update_product(&self, id: i32, product: NewProduct) -> Result<Product, AppError> {
        query_as::<_, Product>(&format!(
            "UPDATE products SET name = $1, retail_price = $2, wholesale_price = $3, quantity = $4 \
             WHERE id = $5 RETURNING {PRODUCT_COLUMNS}"
        ))
        .bind(&product.name)
        .bind(&product.retail_price)
        .bind(&product.wholesale_price)
        .bind(product.quantity)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(AppError::ProductNotFound(id))
    }

    async fn delete_product(&self, id: i32) -> Result<(), AppError> {
        // Em caso de erro a transação é desfeita ao sair do escopo
        let mut transaction = self.pool.begin().await?;

        let exists = query_scalar::<_, i32>("SELECT id FROM products WHERE id = $1 FOR UPDATE")
            .bind(id)
            .fetch_optional(&mut *transaction)
            .await?;

        if exists.is_none() {
            return Err(AppError::ProductNotFound(id));
        }

        let has_sales = query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM sales WHERE product_id = $1)",
        )
        .bind(id)
        .fetch_one(&mut *transaction)
        .await?;

        if has_sales {
            return Err(AppError::ProductHasSales);
        }

        query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&mut *transaction)
            .await?;

        transaction.commit().await?;

        Ok(())
    }

    async fn register_sale(&self, sale: NewSale) -> Result<Sale, AppError> {
        let mut transaction = self.pool.begin().await?;

        // FOR UPDATE bloqueia a linha do produto até o commit, serializando
        // vendas concorrentes do mesmo produto
        let product = query_as::<_, Product>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1 FOR UPDATE"
        ))
        .bind(sale.product_id)
        .fetch_optional(&mut *transaction)
        .await?
        .ok_or(AppError::ProductNotFound(sale.product_id))?;

        let charge = price_sale(&product, &sale)?;

        let updated = query(
            "UPDATE products SET quantity = quantity - $1 WHERE id = $2 AND quantity >= $1",
        )
        .bind(sale.quantity)
        .bind(sale.product_id)
        .execute(&mut *transaction)
        .await?
        .rows_affected();

        // Guarda: com a linha bloqueada acima, price_sale já recusou estoque
        // insuficiente e product.quantity ainda é o saldo atual
        if updated == 0 {
            warn!(product_id = sale.product_id, "baixa de estoque não aplicada");
            return Err(AppError::InsufficientStock {
                available: product.quantity,
                requested: sale.quantity,
            });
        }

        let recorded = query_as::<_, Sale>(
            "INSERT INTO sales (product_id, quantity, total_price, price_type, date, time) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING id, product_id, quantity, total_price, price_type, date, time",
        )
        .bind(sale.product_id)
        .bind(sale.quantity)
        .bind(&charge.total_price)
        .bind(charge.tier.map(|tier| tier.as_str()))
        .bind(sale.date)
        .bind(sale.time)
        .fetch_one(&mut *transaction)
        .await?;

        transaction.commit().await?;

        debug!(sale_id = recorded.id, "venda gravada");

        Ok(recorded)
    }

    async fn list_sales(&self) -> Result<Vec<SaleListing>, AppError> {
        let sales = query_as::<_, SaleListing>(
            "SELECT sales.id, sales.product_id, products.name AS product, sales.quantity, \
                    sales.total_price, sales.price_type, sales.date, sales.time \
             FROM sales \
             JOIN products ON sales.product_id = products.id \
             ORDER BY sales.date DESC, sales.time DESC, sales.id DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(sales)
    }
}
