use std::sync::Arc;

use tracing::{debug, info, instrument};

use super::domain::{NewProduct, Product, ProductDto};
use super::repository::ProductRepository;
use crate::errors::ServiceError;

/// Product use cases independent of web framework.
///
/// Every point read and mutation first looks the row up, so a missing id is
/// always reported as [`ServiceError::NotFound`].
pub struct ProductService<R: ProductRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: ProductRepository + ?Sized> ProductService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    #[instrument(skip(self))]
    pub async fn get_all_products(&self) -> Result<Vec<ProductDto>, ServiceError> {
        let rows = self.repo.get_all().await?;
        debug!(count = rows.len(), "products_listed");
        Ok(rows.into_iter().map(ProductDto::from).collect())
    }

    /// Fetch one product as a DTO.
    ///
    /// # Examples
    /// ```
    /// use service::product::{repository::mock::InMemoryProductRepository, ProductDto, ProductService};
    /// use std::sync::Arc;
    /// let svc = ProductService::new(Arc::new(InMemoryProductRepository::default()));
    /// let input = ProductDto { id: 0, name: "Widget".into(), price: rust_decimal::Decimal::new(999, 2) };
    /// let created = tokio_test::block_on(svc.add_product(input)).unwrap();
    /// let found = tokio_test::block_on(svc.get_product_by_id(created.id)).unwrap();
    /// assert_eq!(found.name, "Widget");
    /// assert!(tokio_test::block_on(svc.get_product_by_id(created.id + 1)).is_err());
    /// ```
    #[instrument(skip(self))]
    pub async fn get_product_by_id(&self, id: i32) -> Result<ProductDto, ServiceError> {
        let product = self.find_existing(id).await?;
        Ok(product.into())
    }

    /// Create a product from the DTO's name and price; the DTO's id is ignored.
    /// Returns the stored product, including the id assigned by storage.
    #[instrument(skip(self, dto), fields(name = %dto.name))]
    pub async fn add_product(&self, dto: ProductDto) -> Result<ProductDto, ServiceError> {
        let created = self.repo.add(NewProduct::from(dto)).await?;
        info!(id = created.id, "product_created");
        Ok(created.into())
    }

    #[instrument(skip(self, dto))]
    pub async fn update_product(&self, id: i32, dto: ProductDto) -> Result<(), ServiceError> {
        let mut product = self.find_existing(id).await?;
        product.name = dto.name;
        product.price = dto.price;
        self.repo.update(product).await?;
        info!(id, "product_updated");
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: i32) -> Result<(), ServiceError> {
        self.find_existing(id).await?;
        self.repo.delete(id).await?;
        info!(id, "product_deleted");
        Ok(())
    }

    async fn find_existing(&self, id: i32) -> Result<Product, ServiceError> {
        self.repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("product"))
    }
}
