// src/health.rs

use actix_web::{get, web, HttpResponse};

use crate::error::AppError;
use crate::shared::shared_structs::GenericResponse;
use crate::AppState;

/// Verificação de saúde: responde 200 se o armazenamento estiver acessível.
#[get("/health")]
pub async fn health(data: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    data.store.ping().await?;

    Ok(HttpResponse::Ok().json(GenericResponse::message("ok")))
}
