// src/products/products_router.rs

use actix_web::{delete, get, post, put, web, HttpResponse};
use tracing::info;

use super::products_structs::NewProduct;
use crate::error::AppError;
use crate::shared::shared_structs::GenericResponse;
use crate::AppState;

/// Rota para buscar todos os produtos cadastrados.
#[get("/products")]
pub async fn list_products(data: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let products = data.store.list_products().await?;

    Ok(HttpResponse::Ok().json(GenericResponse::success(
        format!("{} produto(s) encontrado(s).", products.len()),
        products,
    )))
}

/// Rota para buscar um produto pelo ID.
#[get("/products/{id}")]
pub async fn get_product(
    data: web::Data<AppState>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let product = data.store.get_product(id).await?;

    Ok(HttpResponse::Ok().json(GenericResponse::success(
        format!("Produto com ID {} encontrado.", id),
        product,
    )))
}

/// Rota para cadastrar um novo produto.
///
/// O nome precisa ser único no catálogo; repetições retornam 400.
#[post("/products")]
pub async fn create_product(
    data: web::Data<AppState>,
    item: web::Json<NewProduct>,
) -> Result<HttpResponse, AppError> {
    let item = item.into_inner();
    item.validate()?;

    let product = data.store.create_product(item).await?;
    info!(product_id = product.id, name = %product.name, "produto cadastrado");

    Ok(HttpResponse::Created().json(GenericResponse::success(
        "Produto cadastrado com sucesso.",
        product,
    )))
}

/// Rota para atualizar um produto existente, substituindo todos os campos.
#[put("/products/{id}")]
pub async fn update_product(
    data: web::Data<AppState>,
    path: web::Path<i32>,
    item: web::Json<NewProduct>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let item = item.into_inner();
    item.validate()?;

    let product = data.store.update_product(id, item).await?;
    info!(product_id = id, "produto atualizado");

    Ok(HttpResponse::Ok().json(GenericResponse::success(
        format!("Produto com ID {} atualizado com sucesso.", id),
        product,
    )))
}

/// Rota para excluir um produto.
///
/// Produtos com vendas registradas não podem ser excluídos.
#[delete("/products/{id}")]
pub async fn delete_product(
    data: web::Data<AppState>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    data.store.delete_product(id).await?;
    info!(product_id = id, "produto excluído");

    Ok(HttpResponse::Ok().json(GenericResponse::message("Produto excluído com sucesso")))
}
