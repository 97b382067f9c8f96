// src/store/mod.rs

//! Armazenamento do estoque e das vendas.
//!
//! As rotas só conhecem a trait [`InventoryStore`]; a implementação concreta
//! (Postgres em produção, memória nos testes) é injetada pelo `AppState`.

use async_trait::async_trait;
use mockall::automock;

use crate::error::AppError;
use crate::products::products_structs::{NewProduct, Product};
use crate::sales::sales_structs::{NewSale, Sale, SaleListing};

pub mod memory;
pub mod postgres;

pub use memory::MemoryInventoryStore;
pub use postgres::PgInventoryStore;

#[automock]
#[async_trait]
pub trait InventoryStore: Send + Sync {
    /// Verifica se o armazenamento responde.
    async fn ping(&self) -> Result<(), AppError>;

    /// Todos os produtos, ordenados por id.
    async fn list_products(&self) -> Result<Vec<Product>, AppError>;

    async fn get_product(&self, id: i32) -> Result<Product, AppError>;

    /// Cadastra um produto; nomes repetidos falham com `DuplicateProductName`.
    async fn create_product(&self, product: NewProduct) -> Result<Product, AppError>;

    /// Substitui todos os campos do produto.
    async fn update_product(&self, id: i32, product: NewProduct) -> Result<Product, AppError>;

    /// Remove o produto, desde que nenhuma venda o referencie.
    async fn delete_product(&self, id: i32) -> Result<(), AppError>;

    /// Registra a venda e baixa o estoque de forma atômica.
    async fn register_sale(&self, sale: NewSale) -> Result<Sale, AppError>;

    /// Vendas com o nome do produto, da mais recente para a mais antiga.
    async fn list_sales(&self) -> Result<Vec<SaleListing>, AppError>;
}
