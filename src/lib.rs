// src/lib.rs

//! API de estoque e vendas.
//!
//! O cadastro de produtos (`products`) e o registro de vendas (`sales`)
//! conversam com o banco apenas através da trait [`store::InventoryStore`].

use std::sync::Arc;

use actix_web::{error::InternalError, web, HttpResponse};
use tracing::debug;

pub mod config;
pub mod db;
pub mod error;
pub mod health;
pub mod products;
pub mod sales;
pub mod shared;
pub mod store;

use shared::shared_structs::GenericResponse;
use store::InventoryStore;

/// Estado compartilhado entre as rotas: o armazenamento de estoque e vendas.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn InventoryStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn InventoryStore>) -> Self {
        Self { store }
    }
}

/// Registra as rotas e os extratores da aplicação.
///
/// Usado tanto pelo `main` quanto pelos testes, para que ambos sirvam
/// exatamente as mesmas rotas.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        debug!("corpo JSON rejeitado: {err}");
        let response = HttpResponse::BadRequest()
            .json(GenericResponse::error(format!("JSON inválido: {err}")));
        InternalError::from_response(err, response).into()
    }))
    .app_data(web::PathConfig::default().error_handler(|err, _req| {
        let response = HttpResponse::BadRequest()
            .json(GenericResponse::error("Identificador inválido na URL"));
        InternalError::from_response(err, response).into()
    }))
    .service(health::health)
    // Módulo de Produtos
    .service(products::products_router::list_products)
    .service(products::products_router::get_product)
    .service(products::products_router::create_product)
    .service(products::products_router::update_product)
    .service(products::products_router::delete_product)
    // Módulo de Vendas
    .service(sales::sales_router::list_sales)
    .service(sales::sales_router::register_sale);
}
