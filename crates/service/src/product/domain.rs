use rust_decimal::Decimal;
use serde::{de::IgnoredAny, Deserialize, Deserializer, Serialize};

/// Stored product row.
pub type Product = models::product::Model;

/// Product about to be inserted; the id comes from storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    pub name: String,
    pub price: Decimal,
}

/// API-facing view of a product, used for request and response bodies.
///
/// Any incoming `id` value is discarded, so a deserialized DTO always has
/// `id == 0`. `price` travels as a JSON number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDto {
    #[serde(default, deserialize_with = "discard_id")]
    pub id: i32,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

fn discard_id<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    IgnoredAny::deserialize(deserializer)?;
    Ok(0)
}

impl From<Product> for ProductDto {
    fn from(p: Product) -> Self {
        Self { id: p.id, name: p.name, price: p.price }
    }
}

impl From<ProductDto> for NewProduct {
    fn from(dto: ProductDto) -> Self {
        Self { name: dto.name, price: dto.price }
    }
}
