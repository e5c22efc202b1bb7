//! Service layer providing the product use cases on top of models.
//! - Separates business logic from data access behind `ProductRepository`.
//! - Translates entities into API-facing DTOs.
//! - Surfaces a missing product as `ServiceError::NotFound`.

pub mod errors;
pub mod product;
#[cfg(test)]
pub mod test_support;
