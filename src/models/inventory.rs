// src/models/inventory.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "stock_mode", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum StockMode {
    #[default]
    Unlimited,
    Limited,
    OutOfStock,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "product_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ProductStatus {
    #[default]
    Active,
    Draft,
    Archived,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: Uuid,
    #[schema(example = "CRM Стартап")]
    pub name: String,
    pub description: Option<String>,
    #[schema(example = "150000")]
    pub price: Decimal,
    #[schema(example = "Программное обеспечение")]
    pub category: String,
    pub stock: StockMode,
    pub stock_quantity: Option<i32>,
    pub status: ProductStatus,
    #[schema(example = "PRD-002")]
    pub sku: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub category: String,
    pub stock: StockMode,
    pub stock_quantity: Option<i32>,
    pub status: ProductStatus,
    pub sku: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductPayload {
    #[validate(required(message = "required"), custom(function = "crate::common::validation::not_blank", message = "required"))]
    pub name: Option<String>,
    pub description: Option<String>,
    #[validate(required(message = "required"))]
    pub price: Option<Decimal>,
    #[validate(required(message = "required"), custom(function = "crate::common::validation::not_blank", message = "required"))]
    pub category: Option<String>,
    pub stock: Option<StockMode>,
    pub stock_quantity: Option<i32>,
    pub status: Option<ProductStatus>,
    pub sku: Option<String>,
}

#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductPayload {
    #[validate(custom(function = "crate::common::validation::not_blank", message = "required"))]
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    #[validate(custom(function = "crate::common::validation::not_blank", message = "required"))]
    pub category: Option<String>,
    pub stock: Option<StockMode>,
    pub stock_quantity: Option<i32>,
    pub status: Option<ProductStatus>,
    pub sku: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProductQuery {
    pub status: Option<String>,
    pub category: Option<String>,
}
