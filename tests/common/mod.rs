// tests/common/mod.rs

#![allow(dead_code)]

pub mod pg;

use std::sync::Arc;

use actix_web::web;
use serde_json::{json, Value};

use estoque_vendas::store::{InventoryStore, MemoryInventoryStore};
use estoque_vendas::AppState;

pub fn memory_state() -> web::Data<AppState> {
    state_with(MemoryInventoryStore::new())
}

pub fn state_with(store: impl InventoryStore + 'static) -> web::Data<AppState> {
    web::Data::new(AppState::new(Arc::new(store)))
}

pub fn phone_x() -> Value {
    json!({
        "name": "Phone X",
        "retail_price": 1000,
        "wholesale_price": 800,
        "quantity": 10
    })
}

pub fn sale(product_id: i64, quantity: i64, price_type: &str) -> Value {
    json!({
        "product_id": product_id,
        "quantity": quantity,
        "price_type": price_type,
        "date": "2024-05-01",
        "time": "10:00:00"
    })
}

pub fn sale_at(product_id: i64, quantity: i64, date: &str, time: &str) -> Value {
    json!({
        "product_id": product_id,
        "quantity": quantity,
        "price_type": "retail",
        "date": date,
        "time": time
    })
}

/// Converte um valor monetário serializado (texto ou número) em f64.
pub fn money(value: &Value) -> f64 {
    match value {
        Value::String(text) => text.parse().unwrap(),
        other => other.as_f64().unwrap(),
    }
}
