// src/sales/sales_structs.rs

use std::fmt;
use std::str::FromStr;

use bigdecimal::BigDecimal;
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::error::AppError;

/// Mensagem para venda sem faixa de preço e sem total informado.
pub const MISSING_PRICE_SOURCE: &str = "Informe price_type ou total_price";

/// Faixa de preço aplicada a uma venda.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceTier {
    Retail,
    Wholesale,
}

impl PriceTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            PriceTier::Retail => "retail",
            PriceTier::Wholesale => "wholesale",
        }
    }
}

impl fmt::Display for PriceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PriceTier {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "retail" => Ok(PriceTier::Retail),
            "wholesale" => Ok(PriceTier::Wholesale),
            other => Err(AppError::InvalidPriceTier(other.to_string())),
        }
    }
}

/// Estrutura para receber uma nova venda na requisição POST.
///
/// Data e hora vêm do cliente, permitindo lançamentos retroativos.
/// Com `price_type` o total é calculado no servidor; sem ele, `total_price`
/// é gravado exatamente como enviado.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewSale {
    pub product_id: i32,
    pub quantity: i32,
    pub date: NaiveDate,
    pub time: NaiveTime,
    #[serde(default)]
    pub price_type: Option<String>,
    #[serde(default)]
    pub total_price: Option<BigDecimal>,
}

impl NewSale {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.quantity <= 0 {
            return Err(AppError::Validation(
                "A quantidade vendida deve ser um inteiro positivo".to_string(),
            ));
        }

        if self.price_type.is_none() && self.total_price.is_none() {
            return Err(AppError::Validation(MISSING_PRICE_SOURCE.to_string()));
        }

        Ok(())
    }
}

/// Venda registrada, como gravada na tabela `sales`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Sale {
    pub id: i32,
    pub product_id: i32,
    pub quantity: i32,
    pub total_price: BigDecimal,
    pub price_type: Option<String>,
    pub date: NaiveDate,
    pub time: NaiveTime,
}

/// Linha da listagem de vendas, com o nome do produto.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct SaleListing {
    pub id: i32,
    pub product_id: i32,
    pub product: String,
    pub quantity: i32,
    pub total_price: BigDecimal,
    pub price_type: Option<String>,
    pub date: NaiveDate,
    pub time: NaiveTime,
}

/// Resultado da precificação: o total a gravar e a faixa usada, se houver.
#[derive(Debug, Clone, PartialEq)]
pub struct SaleCharge {
    pub tier: Option<PriceTier>,
    pub total_price: BigDecimal,
}
