use sea_orm::{
    ActiveModelTrait, ActiveValue::Unchanged, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
    Set,
};

use models::product;

use crate::errors::ServiceError;
use crate::product::domain::{NewProduct, Product};
use crate::product::repository::ProductRepository;

/// SeaORM-backed repository implementation.
pub struct SeaOrmProductRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmProductRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait::async_trait]
impl ProductRepository for SeaOrmProductRepository {
    async fn get_all(&self) -> Result<Vec<Product>, ServiceError> {
        let rows = product::Entity::find()
            .order_by_asc(product::Column::Id)
            .all(&self.db)
            .await?;
        Ok(rows)
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<Product>, ServiceError> {
        Ok(product::Entity::find_by_id(id).one(&self.db).await?)
    }

    async fn add(&self, new: NewProduct) -> Result<Product, ServiceError> {
        let am = product::ActiveModel {
            name: Set(new.name),
            price: Set(new.price),
            ..Default::default()
        };
        Ok(am.insert(&self.db).await?)
    }

    async fn update(&self, p: Product) -> Result<(), ServiceError> {
        let am = product::ActiveModel {
            id: Unchanged(p.id),
            name: Set(p.name),
            price: Set(p.price),
        };
        match am.update(&self.db).await {
            Ok(_) => Ok(()),
            Err(DbErr::RecordNotUpdated) => Err(ServiceError::not_found("product")),
            Err(e) => Err(e.into()),
        }
    }

    async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        let res = product::Entity::delete_by_id(id).exec(&self.db).await?;
        if res.rows_affected == 0 {
            return Err(ServiceError::not_found("product"));
        }
        Ok(())
    }
}
