// src/sales/sale_pricing.rs

use bigdecimal::BigDecimal;

use crate::error::AppError;
use crate::products::products_structs::Product;

use super::sales_structs::{NewSale, PriceTier, SaleCharge, MISSING_PRICE_SOURCE};

/// Confere o estoque e calcula o total de uma venda.
///
/// Recebe o produto já lido (e bloqueado, no caso do Postgres) pelo
/// armazenamento. A ordem das verificações importa:
/// 1. estoque disponível;
/// 2. resolução da faixa de preço;
/// 3. total = preço unitário × quantidade.
///
/// Sem `price_type`, o `total_price` do cliente é usado sem recálculo.
pub fn price_sale(product: &Product, sale: &NewSale) -> Result<SaleCharge, AppError> {
    if sale.quantity > product.quantity {
        return Err(AppError::InsufficientStock {
            available: product.quantity,
            requested: sale.quantity,
        });
    }

    let tier = match sale.price_type.as_deref() {
        Some(tag) => tag.parse::<PriceTier>()?,
        None => {
            let total_price = sale
                .total_price
                .clone()
                .ok_or_else(|| AppError::Validation(MISSING_PRICE_SOURCE.to_string()))?;

            return Ok(SaleCharge { tier: None, total_price });
        }
    };

    let unit_price = match tier {
        PriceTier::Retail => &product.retail_price,
        PriceTier::Wholesale => product.wholesale_price.as_ref().ok_or_else(|| {
            AppError::InvalidPriceTier(format!(
                "{tier} (produto {} não tem preço de atacado)",
                product.id
            ))
        })?,
    };

    Ok(SaleCharge {
        tier: Some(tier),
        total_price: unit_price * &BigDecimal::from(sale.quantity),
    })
}
