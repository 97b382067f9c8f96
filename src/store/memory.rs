// src/store/memory.rs

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::error::AppError;
use crate::products::products_structs::{NewProduct, Product};
use crate::sales::sale_pricing::price_sale;
use crate::sales::sales_structs::{NewSale, Sale, SaleListing};

use super::InventoryStore;

#[derive(Debug, Default)]
struct Ledger {
    products: BTreeMap<i32, Product>,
    sales: Vec<Sale>,
    last_product_id: i32,
    last_sale_id: i32,
}

impl Ledger {
    fn name_taken(&self, name: &str, except: Option<i32>) -> bool {
        self.products
            .values()
            .any(|product| product.name == name && Some(product.id) != except)
    }
}

/// Armazenamento em memória, com as mesmas regras do Postgres.
///
/// Um único `Mutex` protege produtos e vendas, então cada operação é
/// atômica em relação às demais.
#[derive(Debug, Default)]
pub struct MemoryInventoryStore {
    ledger: Mutex<Ledger>,
}

impl MemoryInventoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl InventoryStore for MemoryInventoryStore {
    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }

    async fn list_products(&self) -> Result<Vec<Product>, AppError> {
        let ledger = self.ledger.lock().await;
        Ok(ledger.products.values().cloned().collect())
    }

    async fn get_product(&self, id: i32) -> Result<Product, AppError> {
        let ledger = self.ledger.lock().await;
        ledger
            .products
            .get(&id)
            .cloned()
            .ok_or(AppError::ProductNotFound(id))
    }

    async fn create_product(&self, product: NewProduct) -> Result<Product, AppError> {
        let mut ledger = self.ledger.lock().await;

        if ledger.name_taken(&product.name, None) {
            return Err(AppError::DuplicateProductName);
        }

        ledger.last_product_id += 1;
        let created = Product::from_new(ledger.last_product_id, product);
        ledger.products.insert(created.id, created.clone());

        Ok(created)
    }

    async fn update_product(&self, id: i32, product: NewProduct) -> Result<Product, AppError> {
        let mut ledger = self.ledger.lock().await;

        if !ledger.products.contains_key(&id) {
            return Err(AppError::ProductNotFound(id));
        }

        if ledger.name_taken(&product.name, Some(id)) {
            return Err(AppError::DuplicateProductName);
        }

        let updated = Product::from_new(id, product);
        ledger.products.insert(id, updated.clone());

        Ok(updated)
    }

    async fn delete_product(&self, id: i32) -> Result<(), AppError> {
        let mut ledger = self.ledger.lock().await;

        if !ledger.products.contains_key(&id) {
            return Err(AppError::ProductNotFound(id));
        }

        if ledger.sales.iter().any(|sale| sale.product_id == id) {
            return Err(AppError::ProductHasSales);
        }

        ledger.products.remove(&id);

        Ok(())
    }

    async fn register_sale(&self, sale: NewSale) -> Result<Sale, AppError> {
        let mut ledger = self.ledger.lock().await;

        let product = ledger
            .products
            .get_mut(&sale.product_id)
            .ok_or(AppError::ProductNotFound(sale.product_id))?;

        let charge = price_sale(product, &sale)?;
        product.quantity -= sale.quantity;

        ledger.last_sale_id += 1;
        let recorded = Sale {
            id: ledger.last_sale_id,
            product_id: sale.product_id,
            quantity: sale.quantity,
            total_price: charge.total_price,
            price_type: charge.tier.map(|tier| tier.as_str().to_string()),
            date: sale.date,
            time: sale.time,
        };
        ledger.sales.push(recorded.clone());

        Ok(recorded)
    }

    async fn list_sales(&self) -> Result<Vec<SaleListing>, AppError> {
        let ledger = self.ledger.lock().await;

        let mut sales: Vec<SaleListing> = ledger
            .sales
            .iter()
            .filter_map(|sale| {
                let product = ledger.products.get(&sale.product_id)?;
                Some(SaleListing {
                    id: sale.id,
                    product_id: sale.product_id,
                    product: product.name.clone(),
                    quantity: sale.quantity,
                    total_price: sale.total_price.clone(),
                    price_type: sale.price_type.clone(),
                    date: sale.date,
                    time: sale.time,
                })
            })
            .collect();

        sales.sort_by(|a, b| {
            b.date
                .cmp(&a.date)
                .then_with(|| b.time.cmp(&a.time))
                .then_with(|| b.id.cmp(&a.id))
        });

        Ok(sales)
    }
}
