// src/db/inventory_repo.rs
// Catálogo de produtos e serviços

use sqlx::{Executor, Postgres};
use uuid::Uuid;

use crate::{
    common::error::{AppError, Resource},
    db::crm_repo::delete_by_id,
    models::inventory::{NewProduct, Product, ProductStatus, UpdateProductPayload},
};

const PRODUCT_COLUMNS: &str = "id, name, description, price, category, stock, stock_quantity, status, sku, \
                               created_at, updated_at";

// Sem estado: cada consulta recebe o executor (pool, conexão ou transação)
#[derive(Clone, Default)]
pub struct InventoryRepository;

impl InventoryRepository {
    pub fn new() -> Self {
        Self
    }

    pub async fn list_products<'e, E>(
        &self,
        executor: E,
        status: Option<ProductStatus>,
        category: Option<&str>,
    ) -> Result<Vec<Product>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let sql = format!(
            "SELECT {PRODUCT_COLUMNS} FROM products \
             WHERE ($1::product_status IS NULL OR status = $1) \
               AND ($2::text IS NULL OR category = $2) \
             ORDER BY created_at DESC"
        );

        let products = sqlx::query_as::<_, Product>(&sql)
            .bind(status)
            .bind(category)
            .fetch_all(executor)
            .await?;

        Ok(products)
    }

    pub async fn find_product<'e, E>(&self, executor: E, id: Uuid) -> Result<Product, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let sql = format!("SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1");
        sqlx::query_as::<_, Product>(&sql)
            .bind(id)
            .fetch_optional(executor)
            .await?
            .ok_or(AppError::NotFound(Resource::Product))
    }

    pub async fn create_product<'e, E>(&self, executor: E, product: &NewProduct) -> Result<Product, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let sql = format!(
            r#"
            INSERT INTO products (name, description, price, category, stock, stock_quantity, status, sku)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING {PRODUCT_COLUMNS}
            "#
        );

        let created = sqlx::query_as::<_, Product>(&sql)
            .bind(&product.name)
            .bind(&product.description)
            .bind(product.price)
            .bind(&product.category)
            .bind(product.stock)
            .bind(product.stock_quantity)
            .bind(product.status)
            .bind(&product.sku)
            .fetch_one(executor)
            .await?;

        Ok(created)
    }

    pub async fn update_product<'e, E>(
        &self,
        executor: E,
        id: Uuid,
        input: &UpdateProductPayload,
    ) -> Result<Product, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let sql = format!(
            r#"
            UPDATE products SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                price = COALESCE($4, price),
                category = COALESCE($5, category),
                stock = COALESCE($6, stock),
                stock_quantity = COALESCE($7, stock_quantity),
                status = COALESCE($8, status),
                sku = COALESCE($9, sku),
                updated_at = NOW()
            WHERE id = $1
            RETURNING {PRODUCT_COLUMNS}
            "#
        );

        sqlx::query_as::<_, Product>(&sql)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.price)
            .bind(&input.category)
            .bind(input.stock)
            .bind(input.stock_quantity)
            .bind(input.status)
            .bind(&input.sku)
            .fetch_optional(executor)
            .await?
            .ok_or(AppError::NotFound(Resource::Product))
    }

    pub async fn delete_product<'e, E>(&self, executor: E, id: Uuid) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        delete_by_id(executor, "products", id, Resource::Product).await
    }
}
