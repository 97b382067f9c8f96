// src/sales/sales_router.rs

use actix_web::{get, post, web, HttpResponse};
use tracing::info;

use super::sales_structs::NewSale;
use crate::error::AppError;
use crate::shared::shared_structs::GenericResponse;
use crate::AppState;

/// Rota para listar as vendas, da mais recente para a mais antiga.
#[get("/sales")]
pub async fn list_sales(data: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let sales = data.store.list_sales().await?;

    Ok(HttpResponse::Ok().json(GenericResponse::success(
        format!("{} venda(s) encontrada(s).", sales.len()),
        sales,
    )))
}

/// Rota para registrar uma venda.
///
/// A verificação de estoque, o cálculo do total, a baixa no estoque e a
/// gravação da venda acontecem juntos no armazenamento: ou tudo é aplicado,
/// ou nada muda.
#[post("/sales")]
pub async fn register_sale(
    data: web::Data<AppState>,
    item: web::Json<NewSale>,
) -> Result<HttpResponse, AppError> {
    let item = item.into_inner();
    item.validate()?;

    let sale = data.store.register_sale(item).await?;
    info!(
        sale_id = sale.id,
        product_id = sale.product_id,
        quantity = sale.quantity,
        total_price = %sale.total_price,
        "venda registrada"
    );

    Ok(HttpResponse::Created().json(GenericResponse::success(
        "Venda registrada com sucesso!",
        sale,
    )))
}
