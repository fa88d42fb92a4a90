// src/services/inventory_service.rs

use sqlx::{Executor, Postgres};
use uuid::Uuid;

use crate::{
    common::{error::AppError, validation::require},
    db::InventoryRepository,
    models::inventory::{CreateProductPayload, NewProduct, Product, ProductStatus, UpdateProductPayload},
};

#[derive(Clone)]
pub struct InventoryService {
    repo: InventoryRepository,
}

impl InventoryService {
    pub fn new(repo: InventoryRepository) -> Self {
        Self { repo }
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
        self.repo.list_products(executor, status, category).await
    }

    pub async fn get_product<'e, E>(&self, executor: E, id: Uuid) -> Result<Product, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo.find_product(executor, id).await
    }

    pub async fn create_product<'e, E>(&self, executor: E, payload: CreateProductPayload) -> Result<Product, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let product = NewProduct {
            name: require(payload.name, "name")?,
            description: payload.description,
            price: require(payload.price, "price")?,
            category: require(payload.category, "category")?,
            stock: payload.stock.unwrap_or_default(),
            stock_quantity: payload.stock_quantity,
            status: payload.status.unwrap_or_default(),
            sku: payload.sku,
        };

        self.repo.create_product(executor, &product).await
    }

    pub async fn update_product<'e, E>(
        &self,
        executor: E,
        id: Uuid,
        payload: &UpdateProductPayload,
    ) -> Result<Product, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo.update_product(executor, id, payload).await
    }

    pub async fn delete_product<'e, E>(&self, executor: E, id: Uuid) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo.delete_product(executor, id).await
    }
}
