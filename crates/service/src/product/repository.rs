use async_trait::async_trait;

use super::domain::{NewProduct, Product};
use crate::errors::ServiceError;

/// Sole gateway to persisted products.
///
/// `get_by_id` reports a missing row as `Ok(None)`; errors are reserved for
/// storage failures. `update` and `delete` expect the caller to have checked
/// that the row exists; a row removed since that check yields
/// `ServiceError::NotFound` from either.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Product>, ServiceError>;
    async fn get_by_id(&self, id: i32) -> Result<Option<Product>, ServiceError>;
    /// Insert and return the stored row carrying its assigned id.
    async fn add(&self, product: NewProduct) -> Result<Product, ServiceError>;
    async fn update(&self, product: Product) -> Result<(), ServiceError>;
    async fn delete(&self, id: i32) -> Result<(), ServiceError>;
}

/// In-memory repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::{Mutex, MutexGuard, PoisonError};

    #[derive(Default)]
    struct Table {
        rows: BTreeMap<i32, Product>, // key: id
        last_id: i32,
        writes: usize,
    }

    /// Keeps rows in id order and hands out ids starting at 1.
    #[derive(Default)]
    pub struct InMemoryProductRepository {
        table: Mutex<Table>,
    }

    impl InMemoryProductRepository {
        /// Number of inserts, updates and deletes applied so far.
        pub fn writes(&self) -> usize {
            self.lock().writes
        }

        fn lock(&self) -> MutexGuard<'_, Table> {
            self.table.lock().unwrap_or_else(PoisonError::into_inner)
        }
    }

    #[async_trait]
    impl ProductRepository for InMemoryProductRepository {
        async fn get_all(&self) -> Result<Vec<Product>, ServiceError> {
            Ok(self.lock().rows.values().cloned().collect())
        }

        async fn get_by_id(&self, id: i32) -> Result<Option<Product>, ServiceError> {
            Ok(self.lock().rows.get(&id).cloned())
        }

        async fn add(&self, product: NewProduct) -> Result<Product, ServiceError> {
            let mut table = self.lock();
            table.last_id += 1;
            let row = Product { id: table.last_id, name: product.name, price: product.price };
            table.rows.insert(row.id, row.clone());
            table.writes += 1;
            Ok(row)
        }

        async fn update(&self, product: Product) -> Result<(), ServiceError> {
            let mut table = self.lock();
            let Some(row) = table.rows.get_mut(&product.id) else {
                return Err(ServiceError::not_found("product"));
            };
            row.name = product.name;
            row.price = product.price;
            table.writes += 1;
            Ok(())
        }

        async fn delete(&self, id: i32) -> Result<(), ServiceError> {
            let mut table = self.lock();
            if table.rows.remove(&id).is_none() {
                return Err(ServiceError::not_found("product"));
            }
            table.writes += 1;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::mock::InMemoryProductRepository;
    use super::*;
    use rust_decimal::Decimal;

    fn widget() -> NewProduct {
        NewProduct { name: "Widget".into(), price: Decimal::new(999, 2) }
    }

    #[tokio::test]
    async fn ids_are_assigned_sequentially_and_never_reused() {
        let repo = InMemoryProductRepository::default();
        let a = repo.add(widget()).await.unwrap();
        let b = repo.add(widget()).await.unwrap();
        assert_eq!((a.id, b.id), (1, 2));

        repo.delete(b.id).await.unwrap();
        let c = repo.add(widget()).await.unwrap();
        assert_eq!(c.id, 3);
        assert_eq!(repo.writes(), 4);
    }

    #[tokio::test]
    async fn missing_row_is_none_not_error() {
        let repo = InMemoryProductRepository::default();
        assert!(repo.get_by_id(99).await.unwrap().is_none());
        assert!(repo.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_overwrites_name_and_price() {
        let repo = InMemoryProductRepository::default();
        let mut p = repo.add(widget()).await.unwrap();
        p.name = "Gizmo".into();
        p.price = Decimal::ONE;
        repo.update(p.clone()).await.unwrap();
        assert_eq!(repo.get_by_id(p.id).await.unwrap(), Some(p));
    }

    #[tokio::test]
    async fn mutating_a_vanished_row_is_not_found() {
        let repo = InMemoryProductRepository::default();
        let p = repo.add(widget()).await.unwrap();
        repo.delete(p.id).await.unwrap();

        assert!(repo.delete(p.id).await.unwrap_err().is_not_found());
        assert!(repo.update(p).await.unwrap_err().is_not_found());
        assert_eq!(repo.writes(), 2);
    }
}
